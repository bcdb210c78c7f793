use std::{error::Error, process};

use favicon::FaviconBuilder;
use log::{info, LevelFilter};

fn main() {
    // initialize logger
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    process::exit(match run() {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("error: {:?}", e);
            1
        }
    })
}

fn run() -> Result<(), Box<dyn Error>> {
    let summary = FaviconBuilder::new().build().generate()?;

    info!(
        "natural size {}x{}, embedded sizes {:?}",
        summary.natural_size.0, summary.natural_size.1, summary.sizes
    );
    println!("✅ Favicon creado: {}", summary.output_path.display());

    Ok(())
}
