use anyhow::{Context, Result};
use intake_application::{export_bundle, summary_stats};
use intake_core::IntakeSettings;
use intake_core::session::CandidateRepository;
use intake_infrastructure::JsonCandidateRepository;
use std::path::Path;

async fn load_records(
    settings: &IntakeSettings,
) -> Result<Vec<intake_core::session::CandidateRecord>> {
    let repository = JsonCandidateRepository::default_location(settings.data_dir.as_ref()).await?;
    repository.list_all().await
}

pub async fn stats(settings: &IntakeSettings, json: bool) -> Result<()> {
    let records = load_records(settings).await?;
    let stats = summary_stats(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Total candidates: {}", stats.total_candidates);
    if let (Some(avg), Some(min), Some(max)) = (
        stats.average_experience,
        stats.min_experience,
        stats.max_experience,
    ) {
        println!("Experience:       {:.1} years avg ({} - {})", avg, min, max);
    }
    println!("Completion rate:  {:.1}%", stats.completion_rate);

    let dist = stats.sentiment_distribution;
    println!(
        "Answer sentiment: {} positive, {} neutral, {} negative",
        dist.positive, dist.neutral, dist.negative
    );

    if !stats.top_positions.is_empty() {
        println!("\nTop positions:");
        for (position, count) in &stats.top_positions {
            println!("  {:<30} {}", position, count);
        }
    }
    if !stats.top_technologies.is_empty() {
        println!("\nTop technologies:");
        for (tech, count) in &stats.top_technologies {
            println!("  {:<30} {}", tech, count);
        }
    }

    Ok(())
}

pub async fn export(settings: &IntakeSettings, output: Option<&Path>) -> Result<()> {
    let records = load_records(settings).await?;
    let json = serde_json::to_string_pretty(&export_bundle(&records))?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Exported {} candidate(s) to {}", records.len(), path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
