use anyhow::Result;
use intake_core::IntakeSettings;
use intake_core::analysis::{LexiconSentiment, TextQualityAnalyzer};
use std::sync::Arc;

pub fn run(settings: &IntakeSettings, text: &str, json: bool) -> Result<()> {
    let analyzer = TextQualityAnalyzer::new(Arc::new(LexiconSentiment::new()), settings.min_answer_length);
    let analysis = analyzer.analyze(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
        return Ok(());
    }

    let sentiment = &analysis.sentiment;
    println!(
        "sentiment:    {} {} (polarity {:.2}, subjectivity {:.2})",
        sentiment.label.emoji(),
        sentiment.label,
        sentiment.polarity,
        sentiment.subjectivity
    );
    println!(
        "quality:      {} {} ({}/100, {} words)",
        analysis.quality.level.ack_emoji(),
        analysis.quality.level,
        analysis.quality.score,
        analysis.quality.word_count
    );

    let emotions: Vec<String> = analysis
        .emotions
        .iter()
        .map(|e| format!("{} {}", e.emoji(), e))
        .collect();
    if !emotions.is_empty() {
        println!("emotions:     {}", emotions.join(", "));
    }
    for line in &analysis.quality.feedback {
        println!("💡 {}", line);
    }

    Ok(())
}
