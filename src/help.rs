use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::{algorithm::GrayscaleAlgorithm, args::Arg};

pub fn maybe_print_help_and_exit(bin_name: &str) {
    match std::env::args_os().nth(1) {
        None => print_help_and_exit(bin_name),
        Some(arg) => {
            if arg.as_os_str() == OsStr::new("--help") || arg.as_os_str() == OsStr::new("-help") {
                print_help_and_exit(bin_name)
            }
        }
    }
}

fn print_help_and_exit(bin_name: &str) -> ! {
    print_help(bin_name);
    std::process::exit(0);
}

fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} [options ...] input [options ...] output");
    println!();
    println!("Options:");
    for arg in Arg::VARIANTS {
        let name: &'static str = arg.into();
        println!("  -{name:19} {}", arg.help_text());
    }
    println!();
    println!("Algorithms:");
    for algorithm in GrayscaleAlgorithm::VARIANTS {
        let name: &'static str = algorithm.into();
        println!("  {name:20} {}", algorithm.help_text());
    }
    println!();
    println!("Set RUST_LOG=debug for diagnostics.");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    let repo = env!("CARGO_PKG_REPOSITORY");

    format!("GrayMagick {version} {cpu} {repo}")
}
