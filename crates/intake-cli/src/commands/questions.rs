use anyhow::{Result, bail};
use intake_core::IntakeSettings;
use intake_core::conversation::{StageMachine, parse_tech_stack};
use intake_core::question::{experience_tier_from_years, select_questions};
use intake_core::validation::{MAX_EXPERIENCE_YEARS, MIN_EXPERIENCE_YEARS};

pub fn run(settings: &IntakeSettings, stack: &str, years: f64, max: Option<usize>) -> Result<()> {
    if !(MIN_EXPERIENCE_YEARS..=MAX_EXPERIENCE_YEARS).contains(&years) {
        bail!(
            "years must be between {} and {}",
            MIN_EXPERIENCE_YEARS,
            MAX_EXPERIENCE_YEARS
        );
    }

    let techs = parse_tech_stack(stack);
    if techs.is_empty() {
        bail!("no technologies in '{}'", stack);
    }

    let machine = StageMachine::new(settings);
    let bank = machine.question_bank();
    let max_total = max.unwrap_or(settings.max_questions);

    for tech in &techs {
        if !bank.is_known(tech) {
            eprintln!("note: no dedicated questions for '{}', using generic ones", tech);
        }
    }

    let questions = select_questions(bank, &techs, years, max_total);
    println!(
        "{} question(s) at {} level:",
        questions.len(),
        experience_tier_from_years(years)
    );
    for (i, question) in questions.iter().enumerate() {
        println!("{:>2}. {}", i + 1, question);
    }

    Ok(())
}
