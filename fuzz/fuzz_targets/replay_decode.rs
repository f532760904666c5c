#![no_main]

use codec::Replay;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let limits = wire::Limits::for_testing();
    let Ok(replay) = Replay::decode_with_limits(data, &limits) else {
        return;
    };
    // Anything that decodes must encode, and the encoding must be stable.
    let Ok(first) = replay.encode() else {
        return;
    };
    let again = Replay::decode_with_limits(&first, &wire::Limits::unlimited())
        .expect("re-decode encoded replay");
    let second = again.encode().expect("re-encode replay");
    assert_eq!(first, second);
});
