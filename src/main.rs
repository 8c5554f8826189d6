use anyhow::Context;
use clinical_synth::{AppConfig, run};
use log::info;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::default();
    info!(
        "Generating {} records with seed {} into {}",
        config.generator.record_count,
        config.generator.seed,
        config.output_path.display()
    );

    let stdout = std::io::stdout();
    let report = run(&config, &mut stdout.lock()).context("Synthetic record run failed")?;

    for path in &report.chart_paths {
        info!("Chart written to {}", path.display());
    }
    Ok(())
}
