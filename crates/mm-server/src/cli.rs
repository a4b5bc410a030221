use crate::advice::advise;
use crate::artifacts::Artifacts;
use crate::state::AppState;
use crate::telemetry;
use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use mm_core::{AppConfig, UserQuery};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "moodmix",
    about = "Recommend a playlist from time of day, mood and favourite genres",
    version
)]
pub(crate) struct Cli {
    /// JSON config file; built-in defaults are used when omitted
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print one recommendation as JSON
    Recommend(RecommendArgs),
    /// Print the loaded cluster profiles as JSON
    Clusters,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    #[arg(long)]
    pub(crate) time_slot: String,
    #[arg(long, default_value = "Any")]
    pub(crate) mood: String,
    /// Comma-separated genres
    #[arg(long, default_value = "")]
    pub(crate) genre: String,
    #[arg(long)]
    pub(crate) age_group: Option<String>,
    #[arg(long)]
    pub(crate) gender: Option<String>,
    #[arg(long)]
    pub(crate) podcast_freq: Option<String>,
}

impl Cli {
    /// Subcommand to run; a bare `moodmix` serves.
    pub(crate) fn into_command(self) -> Command {
        self.command.unwrap_or_else(|| Command::Serve(ServeArgs::default()))
    }
}

impl ServeArgs {
    pub(crate) fn apply(&self, config: &mut AppConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

impl RecommendArgs {
    pub(crate) fn into_query(self) -> UserQuery {
        UserQuery {
            age_group: self.age_group,
            gender: self.gender,
            time_slot: Some(self.time_slot),
            mood: Some(self.mood),
            genre_text: Some(self.genre),
            podcast_freq: self.podcast_freq,
        }
    }
}

/// Validate the arguments and render the advice as pretty JSON.
pub(crate) fn recommend_json(state: &AppState, args: RecommendArgs) -> anyhow::Result<String> {
    let query = args.into_query();
    query.validate()?;
    Ok(serde_json::to_string_pretty(&advise(state, &query))?)
}

pub(crate) fn clusters_json(state: &AppState) -> anyhow::Result<String> {
    let profiles = state
        .clusters
        .as_ref()
        .map(|table| table.profiles(state.top_features))
        .unwrap_or_default();
    Ok(serde_json::to_string_pretty(&profiles)?)
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref()).context("loading configuration")?;
    telemetry::init(&config.telemetry)?;

    let command = cli.into_command();
    if let Command::Serve(args) = &command {
        args.apply(&mut config);
    }

    let artifacts = Artifacts::load(&config.artifacts);
    let state = AppState::from_artifacts(artifacts, &config.display);

    match command {
        Command::Serve(_) => crate::serve(state, &config.bind_addr()).await,
        Command::Recommend(args) => {
            println!("{}", recommend_json(&state, args)?);
            Ok(())
        }
        Command::Clusters => {
            println!("{}", clusters_json(&state)?);
            Ok(())
        }
    }
}
