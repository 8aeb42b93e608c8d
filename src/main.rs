use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use reckon::core::config;
use reckon::tui;

#[derive(Parser)]
#[command(name = "reckon", about = "Four-function calculator for the terminal", version)]
struct Args {
    /// Accent color for the keypad (name, "#rrggbb", or 0-255 index)
    #[arg(short, long)]
    accent: Option<String>,

    /// Log verbosity: off, error, warn, info, debug, trace
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            // A broken config file should not brick the calculator
            eprintln!("reckon: {e}; continuing with defaults");
            config::ReckonConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.accent.as_deref(), args.log_level.as_deref());

    // File logger: stdout belongs to the TUI
    if resolved.log_level != LevelFilter::Off {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

        if let Ok(log_file) = File::create(&resolved.log_file) {
            let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
        }
    }

    log::info!("reckon starting up (accent: {})", resolved.accent);

    tui::run(resolved)
}
