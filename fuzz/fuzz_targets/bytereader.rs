#![no_main]

use bytestream::ByteReader;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = ByteReader::new(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 8;
        let arg = usize::from(data[idx] >> 3);
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_u8();
            }
            1 => {
                let _ = reader.read_u16();
            }
            2 => {
                let _ = reader.read_u32();
            }
            3 => {
                let _ = reader.read_vec3();
            }
            4 => {
                let _ = reader.read_view_angle();
            }
            5 => {
                let _ = reader.read_cstring(arg);
            }
            6 => {
                let _ = reader.read_padded_string(arg);
            }
            _ => {
                let _ = reader.read_bytes(arg);
            }
        }
        assert!(reader.position() <= data.len());
    }
});
