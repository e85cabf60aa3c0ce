//! Command-line tool to query and tune a FUNcube dongle.
//!
//! With no arguments it opens the first dongle and prints the tuned
//! frequency. `--freq` retunes and reads the frequency back so the printed
//! value is what the hardware actually settled on.
//!
//! # Usage
//!
//! ```sh
//! # Show the current frequency
//! fcdctl
//!
//! # Tune to 144.8 MHz (APRS)
//! fcdctl --freq 144.8M
//!
//! # Tune a specific device node to 97.3 MHz
//! fcdctl --device /dev/hidraw3 --freq 97300000
//! ```

use anyhow::{bail, Context, Result};
use std::env;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fcd::{freq, Fcd};

struct Args {
    freq_hz: Option<u32>,
    device: Option<String>,
    help: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        freq_hz: None,
        device: None,
        help: false,
    };

    let argv: Vec<String> = env::args().collect();
    let mut i = 1;

    while i < argv.len() {
        match argv[i].as_str() {
            "-h" | "--help" => {
                args.help = true;
            }
            "-f" | "--freq" => {
                i += 1;
                if i >= argv.len() {
                    bail!("--freq requires a value");
                }
                args.freq_hz = Some(
                    freq::parse_hz(&argv[i])
                        .with_context(|| format!("invalid frequency: {}", argv[i]))?,
                );
            }
            "-d" | "--device" => {
                i += 1;
                if i >= argv.len() {
                    bail!("--device requires a value");
                }
                args.device = Some(argv[i].clone());
            }
            other => {
                bail!("unknown argument: {other}");
            }
        }
        i += 1;
    }

    Ok(args)
}

fn print_help() {
    println!("fcdctl - Query and tune FUNcube dongles");
    println!();
    println!("USAGE:");
    println!("    fcdctl [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help             Show this help message");
    println!("    -f, --freq <FREQ>      Set frequency: Hz, or with k/M/G suffix");
    println!("    -d, --device <PATH>    Open a specific device node");
    println!();
    println!("EXAMPLES:");
    println!("    # Show the current frequency of the first dongle");
    println!("    fcdctl");
    println!();
    println!("    # Tune to the 2m APRS frequency");
    println!("    fcdctl --freq 144.8M");
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fcd=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Use --help for usage.");
            process::exit(1);
        }
    };

    if args.help {
        print_help();
        process::exit(0);
    }

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut dongle = match &args.device {
        Some(path) => Fcd::open_path(path)
            .with_context(|| format!("failed to open FUNcube dongle at {path}"))?,
        None => Fcd::open().context("failed to open FUNcube dongle")?,
    };

    if let Some(hz) = args.freq_hz {
        dongle
            .set_frequency_hz(hz)
            .with_context(|| format!("failed to set frequency to {hz} Hz"))?;
        println!("Requested: {} Hz ({})", hz, freq::format_mhz(hz));
    }

    let tuned = dongle
        .frequency_hz()
        .context("failed to read frequency")?;
    println!("Tuned:     {} Hz ({})", tuned, freq::format_mhz(tuned));

    Ok(())
}
