use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use codec::{player_tracks, Replay};
use reflay_tools::{collect_replays, format_inspect_pretty, inspect_replay, verify_replay};
use tracing_subscriber::EnvFilter;
use wire::Limits;

#[derive(Parser)]
#[command(
    name = "reflay-tools",
    version,
    about = "reflay replay inspection and transplant tools"
)]
struct Cli {
    /// Lift the decode limits on ticks, templates and string lengths.
    #[arg(long, global = true)]
    unlimited: bool,
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Summarize a replay's header and records.
    Inspect {
        /// Replay file, or a directory of replays.
        path: PathBuf,
        /// Optional glob filter when inspecting a directory.
        #[arg(long)]
        glob: Option<String>,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Check that decoding then encoding reproduces the file exactly.
    Verify {
        /// Path to the replay.
        path: PathBuf,
    },
    /// Merge the donor's initial world state into the recipient.
    Transplant {
        /// Replay providing the level.
        donor: PathBuf,
        /// Replay providing the recorded play.
        recipient: PathBuf,
        /// Where to write the merged replay.
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print per-player movement tracks as JSON.
    Players {
        /// Path to the replay.
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let limits = if cli.unlimited {
        Limits::unlimited()
    } else {
        Limits::default()
    };

    match cli.command {
        Command::Inspect { path, glob, json } => {
            if path.is_dir() {
                for entry in collect_replays(&path, glob.as_deref())? {
                    println!("== {} ({} bytes) ==", entry.path.display(), entry.size);
                    inspect_file(&entry.path, &limits, json)?;
                }
            } else {
                inspect_file(&path, &limits, json)?;
            }
        }
        Command::Verify { path } => {
            let bytes = read_replay(&path)?;
            let report = verify_replay(&bytes, &limits)
                .with_context(|| format!("decode replay {}", path.display()))?;
            println!("input:  {} bytes blake3 {}", report.input_len, report.input_digest);
            println!("output: {} bytes blake3 {}", report.output_len, report.output_digest);
            if !report.is_lossless() {
                bail!("re-encoded replay differs from {}", path.display());
            }
            println!("ok");
        }
        Command::Transplant {
            donor,
            recipient,
            output,
        } => {
            let donor_bytes = read_replay(&donor)?;
            let recipient_bytes = read_replay(&recipient)?;
            let merged = transplant::transplant_bytes(&donor_bytes, &recipient_bytes, &limits)
                .with_context(|| {
                    format!(
                        "transplant {} into {}",
                        donor.display(),
                        recipient.display()
                    )
                })?;
            fs::write(&output, &merged)
                .with_context(|| format!("write replay {}", output.display()))?;
            tracing::info!(
                output = %output.display(),
                bytes = merged.len(),
                "wrote merged replay"
            );
        }
        Command::Players { path } => {
            let bytes = read_replay(&path)?;
            let replay = Replay::decode_with_limits(&bytes, &limits)
                .with_context(|| format!("decode replay {}", path.display()))?;
            let tracks = player_tracks(&replay);
            let json = serde_json::to_string_pretty(&tracks).context("serialize json")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_replay(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("read replay {}", path.display()))
}

fn inspect_file(path: &Path, limits: &Limits, json: bool) -> Result<()> {
    let bytes = read_replay(path)?;
    let report = inspect_replay(&bytes, limits)
        .with_context(|| format!("decode replay {}", path.display()))?;
    if json {
        let json = serde_json::to_string_pretty(&report).context("serialize json")?;
        println!("{json}");
    } else {
        print!("{}", format_inspect_pretty(&report));
    }
    Ok(())
}
