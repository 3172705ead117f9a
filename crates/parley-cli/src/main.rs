//! Parley CLI - Talk to the Parley voice agent server from a terminal
//!
//! Improv turns, wellness check-ins and tutor progress without a voice session.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use dialoguer::{Input, Password};

use api::{CreateCheckInRequest, ParleyClient, RecordProgressRequest};
use config::Config;

#[derive(Parser)]
#[command(name = "parley")]
#[command(about = "Parley CLI - improv, tutor and wellness agents", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Login and store API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
        /// Server URL to store alongside the key
        #[arg(long)]
        url: Option<String>,
    },

    /// Show current configuration
    Config,

    /// Manage saved improv personas
    Persona {
        #[command(subcommand)]
        action: PersonaAction,
    },

    /// Classify the energy of a line
    Energy {
        text: String,
    },

    /// Print the improv prompt for a line (stdout stays clean for piping)
    Prompt {
        text: String,
        /// Saved persona name or a literal role description
        #[arg(short, long)]
        persona: Option<String>,
        /// Use this energy level instead of classifying (low, medium, high)
        #[arg(long, requires = "score")]
        energy: Option<String>,
        /// Score paired with --energy
        #[arg(long, requires = "energy")]
        score: Option<f64>,
        /// Show energy and persona on stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Get an improv reply (language model, or fallback when unavailable)
    Reply {
        text: String,
        #[arg(short, long)]
        persona: Option<String>,
    },

    /// Get a canned fallback reply
    Fallback {
        #[arg(default_value = "")]
        text: String,
    },

    /// Wellness check-ins
    Checkin {
        #[command(subcommand)]
        action: CheckinAction,
    },

    /// Tutor concepts and progress
    Tutor {
        #[command(subcommand)]
        action: TutorAction,
    },
}

#[derive(Subcommand)]
enum PersonaAction {
    /// Save a persona
    Add {
        /// Short name (e.g., "pirate")
        name: String,
        /// Role description (will prompt if not provided)
        description: Option<String>,
    },
    /// List saved personas
    List,
    /// Set default persona
    Set {
        name: String,
    },
    /// Remove a persona
    Remove {
        name: String,
    },
}

#[derive(Subcommand)]
enum CheckinAction {
    /// Record a check-in (prompts for missing fields)
    Add {
        #[arg(long)]
        mood: Option<String>,
        #[arg(long)]
        energy: Option<String>,
        #[arg(long)]
        objectives: Option<String>,
        #[arg(long)]
        stress: Option<String>,
    },
    /// List recent check-ins
    List {
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },
    /// Show the latest check-in
    Latest,
}

#[derive(Subcommand)]
enum TutorAction {
    /// List teachable concepts
    Concepts,
    /// Record a tutor attempt
    Record {
        concept: String,
        /// learn, quiz or teach_back
        #[arg(short, long)]
        mode: Option<String>,
        /// Score 0-10
        #[arg(short, long)]
        score: Option<i64>,
        #[arg(short, long)]
        feedback: Option<String>,
    },
    /// Show progress records
    Progress {
        /// Only this concept
        concept: Option<String>,
    },
    /// Per-concept mastery summary
    Mastery,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Login { key, url } => cmd_login(key, url).await,
        Commands::Config => cmd_config(),
        Commands::Persona { action } => cmd_persona(action),
        Commands::Energy { text } => cmd_energy(text).await,
        Commands::Prompt { text, persona, energy, score, verbose } => {
            cmd_prompt(text, persona, energy.zip(score), verbose).await
        }
        Commands::Reply { text, persona } => cmd_reply(text, persona).await,
        Commands::Fallback { text } => cmd_fallback(text).await,
        Commands::Checkin { action } => cmd_checkin(action).await,
        Commands::Tutor { action } => cmd_tutor(action).await,
    }
}

// ============================================
// Command Implementations
// ============================================

fn client(config: &Config) -> ParleyClient {
    ParleyClient::new(&config.base_url, config.api_key.as_deref())
}

async fn cmd_login(key: Option<String>, url: Option<String>) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(url) = url {
        config.base_url = url;
    }

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    // Test connection
    let client = ParleyClient::new(&config.base_url, Some(&api_key));
    print!("Testing connection to {}... ", config.base_url);

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not connect to Parley API. Check the URL and API key.");
        }
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    if config.personas.is_empty() {
        println!("\n{}", "Tip: Save a persona for improv scenes:".yellow());
        println!("  parley persona add pirate \"a sarcastic pirate captain\"");
        println!("  parley persona set pirate");
    }

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Base URL: {}", config.base_url);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() { "Set".green() } else { "Not set".red() }
    );
    println!(
        "  Default Persona: {}",
        config.default_persona.as_deref().unwrap_or("None").cyan()
    );
    println!("  Personas: {}", config.personas.len());

    Ok(())
}

fn cmd_persona(action: PersonaAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        PersonaAction::Add { name, description } => {
            let description = match description {
                Some(d) => d,
                None => Input::new()
                    .with_prompt("Role description")
                    .interact_text()
                    .context("Failed to read input")?,
            };
            if description.trim().is_empty() {
                bail!("Persona description cannot be empty");
            }
            config.add_persona(name.clone(), description);
            config.save()?;
            println!("{} Persona '{}' saved", "✓".green(), name);
        }

        PersonaAction::List => {
            if config.personas.is_empty() {
                println!("No personas saved.");
                println!("\n{}", "Add one with:".dimmed());
                println!("  parley persona add <name> <description>");
                return Ok(());
            }

            println!("{}", "Personas:".bold());
            for (name, persona) in &config.personas {
                let is_default = config.default_persona.as_ref() == Some(name);
                let default_marker = if is_default { " (default)".green().to_string() } else { String::new() };
                println!(
                    "  {} {}{}",
                    name.cyan(),
                    truncate_string(&persona.description, 60).dimmed(),
                    default_marker
                );
            }
        }

        PersonaAction::Set { name } => {
            if config.set_default_persona(name.clone()) {
                config.save()?;
                println!("{} Default persona set to '{}'", "✓".green(), name);
            } else {
                bail!("Persona '{}' not found", name);
            }
        }

        PersonaAction::Remove { name } => {
            if config.remove_persona(&name) {
                config.save()?;
                println!("{} Persona '{}' removed", "✓".green(), name);
            } else {
                bail!("Persona '{}' not found", name);
            }
        }
    }

    Ok(())
}

async fn cmd_energy(text: String) -> Result<()> {
    let config = Config::load()?;
    let energy = client(&config).classify(&text).await?;

    println!("{} ({:.2})", level_badge(&energy.level), energy.score);
    Ok(())
}

async fn cmd_prompt(
    text: String,
    persona: Option<String>,
    energy: Option<(String, f64)>,
    verbose: bool,
) -> Result<()> {
    let config = Config::load()?;
    let persona = config.resolve_persona(persona.as_deref());

    let resp = client(&config)
        .prompt(
            &text,
            persona.as_deref(),
            energy.as_ref().map(|(level, score)| (level.as_str(), *score)),
        )
        .await?;

    if verbose {
        // Metadata to stderr so stdout is clean for piping
        eprintln!(
            "{} {} ({:.2}) - persona: {}",
            "Energy".dimmed(),
            level_badge(&resp.energy.level),
            resp.energy.score,
            resp.persona.as_deref().unwrap_or("generic").cyan()
        );
        eprintln!("{}", "---".dimmed());
    }

    println!("{}", resp.prompt);

    Ok(())
}

async fn cmd_reply(text: String, persona: Option<String>) -> Result<()> {
    let config = Config::load()?;
    let persona = config.resolve_persona(persona.as_deref());

    let resp = client(&config).respond(&text, persona.as_deref()).await?;

    println!("{}", resp.reply);
    let source = resp.source.as_deref().unwrap_or("unknown");
    match resp.energy {
        Some(energy) => eprintln!(
            "{}",
            format!("[{} | energy {} {:.2}]", source, energy.level, energy.score).dimmed()
        ),
        None => eprintln!("{}", format!("[{}]", source).dimmed()),
    }

    Ok(())
}

async fn cmd_fallback(text: String) -> Result<()> {
    let config = Config::load()?;
    let resp = client(&config).fallback(&text).await?;
    println!("{}", resp.reply);
    Ok(())
}

async fn cmd_checkin(action: CheckinAction) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config);

    match action {
        CheckinAction::Add { mood, energy, objectives, stress } => {
            let request = CreateCheckInRequest {
                mood: value_or_prompt(mood, "How are you feeling?")?,
                energy_level: value_or_prompt(energy, "Energy level")?,
                objectives: value_or_prompt(objectives, "What do you want to get done today?")?,
                stress_factors: stress.filter(|s| !s.trim().is_empty()),
            };

            let entry = client.add_checkin(&request).await?;
            println!("{} Check-in saved", "✓".green());
            println!("  {}", entry.summary.dimmed());
        }

        CheckinAction::List { limit } => {
            let entries = client.list_checkins(Some(limit)).await?;
            if entries.is_empty() {
                println!("No check-ins yet.");
                return Ok(());
            }

            println!("{}", "Check-ins:".bold());
            for entry in entries {
                println!(
                    "  {} {} {} | {} | {}",
                    entry.date.dimmed(),
                    entry.time.dimmed(),
                    entry.mood.cyan(),
                    entry.energy_level,
                    truncate_string(&entry.objectives, 50)
                );
            }
        }

        CheckinAction::Latest => match client.latest_checkin().await? {
            Some(entry) => {
                println!("{} {} {}", "Latest check-in:".bold(), entry.date, entry.time);
                println!("  Mood: {}", entry.mood.cyan());
                println!("  Energy: {}", entry.energy_level);
                println!("  Goals: {}", entry.objectives);
                if let Some(stress) = entry.stress_factors {
                    println!("  Stress: {}", stress.yellow());
                }
            }
            None => println!("No check-ins yet."),
        },
    }

    Ok(())
}

async fn cmd_tutor(action: TutorAction) -> Result<()> {
    let config = Config::load()?;
    let client = client(&config);

    match action {
        TutorAction::Concepts => {
            println!("{}", "Concepts:".bold());
            for concept in client.concepts().await? {
                println!(
                    "  {} {} {}",
                    concept.id.cyan(),
                    concept.title.bold(),
                    truncate_string(&concept.summary, 60).dimmed()
                );
            }
        }

        TutorAction::Record { concept, mode, score, feedback } => {
            let record = client
                .record_progress(&RecordProgressRequest {
                    concept_id: concept,
                    mode,
                    score,
                    feedback,
                })
                .await?;
            println!(
                "{} Recorded {} ({}){}",
                "✓".green(),
                record.concept_id.cyan(),
                record.mode,
                record.score.map(|s| format!(" score {}/10", s)).unwrap_or_default()
            );
        }

        TutorAction::Progress { concept } => {
            let records = client.progress(concept.as_deref()).await?;
            if records.is_empty() {
                println!("No progress recorded yet.");
                return Ok(());
            }

            for record in records {
                let score = record
                    .score
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {} {} {} [{}] {} {}",
                    record.date.dimmed(),
                    record.time.dimmed(),
                    record.concept_id.cyan(),
                    record.mode,
                    score,
                    truncate_string(record.feedback.as_deref().unwrap_or(""), 40).dimmed()
                );
            }
        }

        TutorAction::Mastery => {
            let summary = client.mastery().await?;
            if summary.is_empty() {
                println!("No progress recorded yet.");
                return Ok(());
            }

            println!("{}", "Mastery:".bold());
            for m in summary {
                let average = m
                    .average_score
                    .map(|a| format!("{:.1}", a))
                    .unwrap_or_else(|| "-".to_string());
                let best = m
                    .best_score
                    .map(|b| b.to_string())
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "  {} attempts={} best={} avg={} last={} on {}",
                    m.concept_id.cyan(),
                    m.attempts,
                    best,
                    average,
                    m.last_mode,
                    m.last_practiced.dimmed()
                );
            }
        }
    }

    Ok(())
}

// ============================================
// Helpers
// ============================================

fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => Ok(v),
        None => Input::new()
            .with_prompt(prompt)
            .interact_text()
            .context("Failed to read input"),
    }
}

fn level_badge(level: &str) -> ColoredString {
    match level {
        "high" => level.red().bold(),
        "low" => level.blue(),
        _ => level.yellow(),
    }
}

/// Truncate string safely for UTF-8 (by char count, not bytes)
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        format!("{}...", s.chars().take(max_chars).collect::<String>())
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_prompt_energy_needs_score() {
        assert!(Cli::try_parse_from(["parley", "prompt", "hi", "--energy", "high"]).is_err());
        let cli = Cli::try_parse_from([
            "parley", "prompt", "hi", "--energy", "high", "--score", "0.9",
        ])
        .unwrap();
        match cli.command {
            Commands::Prompt { energy, score, .. } => {
                assert_eq!(energy.zip(score), Some(("high".to_string(), 0.9)));
            }
            _ => panic!("expected prompt command"),
        }
    }

    #[test]
    fn test_truncate_string_counts_chars() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("ÇA ÉNORME", 4), "ÇA É...");
    }
}
