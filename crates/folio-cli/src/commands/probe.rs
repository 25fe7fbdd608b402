use anyhow::Result;
use folio_core::perf::{EnvironmentReport, GalleryMode, SystemProbe};
use folio_core::AppConfig;

pub fn run(config: &AppConfig, json: bool) -> Result<()> {
    let probe = SystemProbe::from_config(&config.performance);
    let report = EnvironmentReport::collect(&probe);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let or_unknown = |value: Option<String>| value.unwrap_or_else(|| "unknown".to_string());

    let cores = or_unknown(report.hardware_concurrency.map(|c| c.to_string()));
    let memory = or_unknown(report.device_memory.map(|m| format!("{m} GiB")));
    let network = or_unknown(report.effective_type.map(|t| t.to_string()));

    println!("Cores:           {cores}");
    println!("Memory:          {memory}");
    println!("Network:         {network}");
    println!("Save data:       {}", report.save_data);
    println!("Reduced motion:  {}", report.reduced_motion);
    println!();
    println!("Performance tier: {}", report.tier);
    println!("Low-end device:   {}", report.low_end);
    let mode = match report.mode {
        GalleryMode::Animated => "animated",
        GalleryMode::Reduced => "reduced",
    };
    println!("Gallery mode:     {mode}");

    Ok(())
}
