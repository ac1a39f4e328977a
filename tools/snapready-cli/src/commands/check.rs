//! Show the effective configuration.

use snapready_common::config::AppConfig;

pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::load();

    println!("SnapReady Configuration");
    println!("{}", "=".repeat(50));

    println!("Analysis:");
    println!("  Interval: {:.1}s", config.analysis.interval_secs);
    if config.analysis.auto_stop_enabled {
        println!("  Auto-stop: after {:.0}s", config.analysis.auto_stop_secs);
    } else {
        println!("  Auto-stop: disabled");
    }
    println!("  Event queue depth: {}", config.analysis.event_queue_depth);
    println!();

    println!("Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  JSON: {}", config.logging.json);
    if let Some(file) = &config.logging.file {
        println!("  File: {}", file.display());
    }

    Ok(())
}
