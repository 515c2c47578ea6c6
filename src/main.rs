use edge_detector::config::{cli, RunConfig};
use edge_detector::image::{load_image, prepare_gray, write_json_file, write_png};
use edge_detector::EdgeDetector;
use log::info;
use std::env;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let mut argv = env::args();
    let program = argv.next().unwrap_or_else(|| "edge_detect".to_string());
    let args: Vec<String> = argv.collect();
    let config: RunConfig = cli::parse_args(&program, &args)?;

    info!("Loading image: {}", config.input.display());
    let loaded = load_image(&config.input)?;
    info!(
        "Image loaded: {}x{} with {} channel(s)",
        loaded.w, loaded.h, loaded.channels
    );
    let mut gray = prepare_gray(loaded)
        .map_err(|e| format!("Failed to convert {} to grayscale: {e}", config.input.display()))?;

    let detector = EdgeDetector::new(config.edge_params());
    let report = detector
        .process(&mut gray, &config.operation)
        .map_err(|e| format!("{} failed: {e}", config.operation.name()))?;
    info!(
        "{} finished in {:.3} ms",
        config.operation.name(),
        report.timing.total_ms
    );

    info!("Writing to file: {}", config.output.display());
    write_png(&gray, &config.output)?;
    if let Some(path) = &config.report_json {
        write_json_file(path, &report)?;
        info!("Saved run report to {}", path.display());
    }
    Ok(())
}
