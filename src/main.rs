use anyhow::Context;
use clap::Parser;
use physio_assist::core::library::{ExportFormat, LibraryQuery};
use physio_assist::domain::ports::{Assistant, ConfigProvider, Storage};
use physio_assist::utils::error::AssistError;
use physio_assist::utils::{logger, validation::Validate};
use physio_assist::{
    classify, ChatEngine, ChatSession, CliConfig, Command, ExerciseLibrary, KeywordClassifier,
    LocalStorage, PhysioAssistant, TomlConfig,
};
use std::time::Duration;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("failed to load config file '{}'", path))?,
        None => TomlConfig::load_default().context("failed to load default configuration")?,
    };

    // Command-line overrides
    if let Some(delay) = cli.delay_ms {
        config.assistant.reply_delay_ms = Some(delay);
    }

    // Logging
    if cli.json_logs || config.json_logs() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::info!("Starting physio-assist");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("File config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let outcome = match cli.command() {
        Command::Chat { transcript } => run_chat(&config, transcript).await,
        Command::Ask { text, explain } => run_ask(&config, &text.join(" "), explain).await,
        Command::Library {
            id,
            category,
            difficulty,
            body_part,
            format,
            output,
        } => {
            let query = LibraryQuery {
                category,
                difficulty,
                body_part,
            };
            run_library(id.as_deref(), &query, &format, output.as_deref()).await
        }
    };

    if let Err(e) = outcome {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}

fn build_assistant(config: &TomlConfig) -> PhysioAssistant<KeywordClassifier> {
    PhysioAssistant::new(KeywordClassifier::new(), config.reply_delay())
}

async fn run_chat(config: &TomlConfig, transcript: Option<String>) -> Result<(), AssistError> {
    let session = ChatSession::new(build_assistant(config), config.greeting());
    let mut engine = ChatEngine::new(session);

    let answered = engine
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await?;
    tracing::debug!("Answered {} descriptions", answered);

    let transcript_path = transcript.or_else(|| config.transcript_path().map(str::to_string));
    if let Some(path) = transcript_path {
        engine
            .session()
            .save_transcript(&LocalStorage::new("."), &path)
            .await?;
        println!("📁 Transcript saved to: {}", path);
    }

    Ok(())
}

async fn run_ask(config: &TomlConfig, text: &str, explain: bool) -> Result<(), AssistError> {
    let assistant = build_assistant(config);

    if explain && !text.trim().is_empty() {
        let result = classify(text);
        match result.matched_keyword {
            Some(keyword) => println!("Region: {} (matched '{}')\n", result.region, keyword),
            None => println!("Region: {} (no keyword matched)\n", result.region),
        }
    }

    let reply = if config.reply_delay() > Duration::ZERO {
        tokio::select! {
            reply = assistant.respond(text) => reply?,
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!("Interrupted before the reply was ready");
                return Err(AssistError::Interrupted);
            }
        }
    } else {
        assistant.respond(text).await?
    };

    println!("{}", reply.content);
    Ok(())
}

async fn run_library(
    id: Option<&str>,
    query: &LibraryQuery,
    format: &str,
    output: Option<&str>,
) -> Result<(), AssistError> {
    let format: ExportFormat = format.parse()?;
    let library = ExerciseLibrary::new();
    let exercises = match id {
        Some(id) => vec![library.get(id)?],
        None => library.query(query),
    };
    let rendered = library.export(&exercises, format)?;

    match output {
        Some(path) => {
            LocalStorage::new(".")
                .write_file(path, rendered.as_bytes())
                .await?;
            println!("📁 {} exercises written to: {}", exercises.len(), path);
        }
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}
