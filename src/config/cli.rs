use crate::domain::model::Difficulty;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "physio-assist")]
#[command(about = "Terminal physiotherapy exercise assistant")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Override the artificial reply delay (milliseconds)
    #[arg(long, global = true)]
    pub delay_ms: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Interactive chat (default)
    Chat {
        /// Write the JSON transcript here on exit
        #[arg(long)]
        transcript: Option<String>,
    },
    /// Classify one description and print the recommendation
    Ask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Also print which body region and keyword matched
        #[arg(long)]
        explain: bool,
    },
    /// Browse or export the exercise library
    Library {
        /// Show a single exercise by id, ignoring the filters
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long)]
        difficulty: Option<Difficulty>,

        #[arg(long)]
        body_part: Option<String>,

        /// text, json or csv
        #[arg(long, default_value = "text")]
        format: String,

        #[arg(short, long)]
        output: Option<String>,
    },
}

impl CliConfig {
    pub fn command(&self) -> Command {
        self.command
            .clone()
            .unwrap_or(Command::Chat { transcript: None })
    }
}
