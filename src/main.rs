//! CLI entry point for canopy

use std::io;
use std::process;

use canopy::{ColorEnv, Config, color_choice, generate, print_confirmation};
use tracing_subscriber::EnvFilter;

/// Log to stderr, `warn` unless `RUST_LOG` says otherwise.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let config = Config::default();

    let output_path = match generate(&config) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = print_confirmation(&output_path, color_choice(&ColorEnv::detect())) {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }
}
