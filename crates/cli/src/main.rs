use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use saarthi_assistant::Assistant;
use saarthi_core::{detect_language, GuidanceEngine, Language};
use saarthi_observability::{init_tracing, AppMetrics};

#[derive(Debug, Parser)]
#[command(name = "saarthi")]
#[command(about = "SaarthiVoice guidance from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the guidance for one query.
    Ask {
        text: String,
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the detected intent and sub-topic.
    Classify { text: String },
    /// Interactive loop; `exit` or `quit` leaves.
    Chat {
        #[arg(long)]
        language: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing("saarthi_cli");
    let cli = Cli::parse();

    let assistant = Assistant::new(GuidanceEngine::default(), AppMetrics::shared());

    match cli.command {
        Command::Ask {
            text,
            language,
            json,
        } => {
            let language = resolve_language(language.as_deref(), &text)?;
            let outcome = assistant.answer(&text, language);
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", outcome.guidance);
            }
        }
        Command::Classify { text } => {
            let outcome = assistant.answer(&text, Language::En);
            match outcome.topic {
                Some(topic) => println!("{} ({})", outcome.intent, topic.as_str()),
                None => println!("{}", outcome.intent),
            }
        }
        Command::Chat { language } => {
            let fixed = language.as_deref().map(parse_language_flag).transpose()?;
            run_chat(&assistant, fixed)?;
        }
    }

    Ok(())
}

fn run_chat(assistant: &Assistant, language: Option<Language>) -> Result<()> {
    println!("SaarthiVoice chat mode. type 'exit' to quit.");

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let message = line.trim();
        if message.eq_ignore_ascii_case("exit") || message.eq_ignore_ascii_case("quit") {
            break;
        }

        if message.is_empty() {
            continue;
        }

        let language = language.unwrap_or_else(|| detect_or_english(message));
        let outcome = assistant.answer(message, language);
        println!("\n[{}] {}\n", outcome.intent, outcome.guidance);
    }

    Ok(())
}

fn resolve_language(flag: Option<&str>, text: &str) -> Result<Language> {
    match flag {
        Some(code) => parse_language_flag(code),
        None => Ok(detect_or_english(text)),
    }
}

fn parse_language_flag(code: &str) -> Result<Language> {
    Language::parse(code)
        .with_context(|| format!("invalid --language value `{code}` (expected en, hi or te)"))
}

fn detect_or_english(text: &str) -> Language {
    detect_language(text).unwrap_or(Language::En)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_language_wins_over_script() {
        let language = resolve_language(Some("te"), "fever").unwrap();
        assert_eq!(language, Language::Te);
    }

    #[test]
    fn script_detection_falls_back_to_english() {
        assert_eq!(resolve_language(None, "मुझे बुखार है").unwrap(), Language::Hi);
        assert_eq!(resolve_language(None, "12345").unwrap(), Language::En);
    }

    #[test]
    fn unknown_language_flag_is_an_error() {
        let err = resolve_language(Some("fr"), "fever").unwrap_err();
        assert!(err.to_string().contains("fr"));
    }

    #[test]
    fn subcommands_parse() {
        let cli = Cli::try_parse_from(["saarthi", "ask", "fever", "--language", "hi", "--json"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Command::Ask { json: true, ref language, .. } if language.as_deref() == Some("hi")
        ));
    }

    #[test]
    fn every_subcommand_has_help_text() {
        use clap::CommandFactory;

        let command = Cli::command();
        for sub in command.get_subcommands() {
            assert!(sub.get_about().is_some(), "{} has no help", sub.get_name());
        }
    }
}
