//! Metaballs CLI - Render the default animation to `output/`.

use std::error::Error;
use std::process::ExitCode;

use metaballs::{AnimationConfig, animation::AnimationDriver};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        None => {}
        Some("--print-config") => {
            return print_config();
        }
        Some(_) => {
            eprintln!("Usage: {} [--print-config]", args[0]);
            eprintln!();
            eprintln!("Render the metaball animation as PPM frames.");
            eprintln!();
            eprintln!("Options:");
            eprintln!("  --print-config  Print the built-in configuration as JSON");
            return ExitCode::FAILURE;
        }
    }

    let config = AnimationConfig::default();

    println!("Metaballs");
    println!("=========");
    println!("Frame: {}x{}", config.width, config.height);
    println!("Frames: {}", config.frame_count);
    println!("Output: {}", config.output_dir.display());
    println!();

    let mut driver = match AnimationDriver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match driver.run() {
        Ok(summary) => {
            println!("{}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            let mut source = e.source();
            while let Some(cause) = source {
                log::error!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn print_config() -> ExitCode {
    match serde_json::to_string_pretty(&AnimationConfig::default()) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing config: {}", e);
            ExitCode::FAILURE
        }
    }
}
