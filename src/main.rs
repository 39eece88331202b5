use log::{error, info, warn};
use std::env;
use std::process::ExitCode;
use ut70b::serial::{self, DEFAULT_PORT};
use ut70b::{decode, DISPLAY_HEADER};

fn main() -> ExitCode {
    // Initialize logging
    let default_filter = std::env::var("UT70B_LOG_LEVEL").unwrap_or("info".to_string());
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(default_filter));

    let mut port_path = DEFAULT_PORT.to_string();
    let mut json = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return ExitCode::SUCCESS;
            }
            other if !other.starts_with('-') => port_path = other.to_string(),
            other => {
                eprintln!("Unknown option: {other}");
                print_usage();
                return ExitCode::FAILURE;
            }
        }
    }

    info!("Opening {} at {} baud 7O1", port_path, serial::BAUD_RATE);
    let mut reader = match serial::open(&port_path) {
        Ok(reader) => reader,
        Err(e) => {
            error!("Can not open {port_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !json {
        println!("{DISPLAY_HEADER}");
    }

    loop {
        let frame = match reader.read_confirmed() {
            Ok(frame) => frame,
            Err(e) => {
                error!("Serial read failed: {e}");
                return ExitCode::FAILURE;
            }
        };

        match decode(&frame) {
            Ok(measurement) => {
                if json {
                    match serde_json::to_string(&measurement) {
                        Ok(line) => println!("{line}"),
                        Err(e) => warn!("Can not serialize measurement: {e}"),
                    }
                } else {
                    println!("{measurement}");
                }
            }
            Err(e) => {
                warn!("Skipping frame {}: {e}", hex::encode(&frame));
            }
        }
    }
}

fn print_usage() {
    println!("Usage: ut70b [--json] [PORT]");
    println!();
    println!("Reads UNI-T UT70B frames from PORT (default {DEFAULT_PORT}) and prints one");
    println!("confirmed measurement per line. With --json each line is a JSON object.");
}
