use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::Arc;

use anyhow::{Context as _, Result};
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing_subscriber::EnvFilter;

use intake_application::IntakeUseCase;
use intake_core::language::{MessageKey, template};
use intake_core::session::{SessionSnapshot, Stage};
use intake_infrastructure::{JsonCandidateRepository, SettingsStore};

const COMMANDS: [&str; 3] = ["/status", "/help", "/quit"];

/// Rustyline helper that completes, highlights and hints slash commands.
#[derive(Clone)]
struct ChatHelper {
    commands: Vec<String>,
}

impl ChatHelper {
    fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Helper for ChatHelper {}

impl Completer for ChatHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for ChatHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ChatHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for ChatHelper {}

fn init_tracing() {
    // stdout carries the chat; logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn print_reply(reply: &str) {
    for line in reply.lines() {
        println!("{}", line.bright_blue());
    }
    println!();
}

fn print_status(snapshot: &SessionSnapshot) {
    let stage_line = match snapshot.stage_ordinal {
        Some(n) => format!(
            "{} {} (Stage {} of {})",
            snapshot.stage_icon, snapshot.stage_name, n, snapshot.total_stages
        ),
        None => format!("{} {}", snapshot.stage_icon, snapshot.stage_name),
    };
    println!("{}", stage_line.bright_magenta().bold());
    println!(
        "{}",
        format!("Progress: {}%", snapshot.completion_percent).bright_black()
    );

    if let Some((current, total)) = snapshot.question_progress {
        println!("{}", format!("Question {} of {}", current, total).bright_black());
    }
    if let Some(mood) = &snapshot.last_answer_mood {
        println!("{}", format!("Last answer: {}", mood).bright_black());
    }

    let summary = &snapshot.summary;
    let rows = [
        ("Name", &summary.name),
        ("Experience", &summary.experience),
        ("Position", &summary.desired_position),
        ("Tech stack", &summary.tech_stack),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            println!("  {} {}", format!("{}:", label).yellow(), value);
        }
    }
    println!();
}

/// Interactive candidate chat.
///
/// Runs one intake session against the configured candidate store and
/// prints each assistant reply. The conversation ends when the candidate
/// says goodbye, or on `/quit` and Ctrl-D.
#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let settings = SettingsStore::default_location()?
        .load()
        .context("Failed to load intake settings")?;
    let repository = Arc::new(
        JsonCandidateRepository::default_location(settings.data_dir.as_ref()).await?,
    );
    let usecase = IntakeUseCase::new(&settings, repository.clone());
    let session_id = usecase.start_session().await;

    let mut rl = Editor::new()?;
    rl.set_helper(Some(ChatHelper::new()));

    println!("{}", "=== Intake ===".bright_magenta().bold());
    print_reply(template(MessageKey::Greeting, settings.language()));
    println!(
        "{}",
        "Say hello to begin. Type '/status' for progress or '/quit' to leave.".bright_black()
    );
    println!();

    loop {
        match rl.readline(">> ") {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);

                match trimmed {
                    "/quit" => break,
                    "/help" => {
                        println!("{}", COMMANDS.join("  ").bright_black());
                        continue;
                    }
                    "/status" => {
                        print_status(&usecase.snapshot(&session_id).await?);
                        continue;
                    }
                    _ => {}
                }

                match usecase.submit(&session_id, trimmed).await {
                    Ok(outcome) => {
                        print_reply(&outcome.reply);
                        if let Some(record) = outcome.saved_record {
                            println!(
                                "{}",
                                format!(
                                    "Saved candidate {} to {}",
                                    record.id,
                                    repository.base_dir().display()
                                )
                                .green()
                            );
                        }
                        if outcome.snapshot.stage == Stage::Ended {
                            break;
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", format!("Error: {:#}", e).red());
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    usecase.close_session(&session_id).await;
    println!("{}", "Goodbye!".bright_green());
    Ok(())
}
