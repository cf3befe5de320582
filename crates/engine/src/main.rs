//! Hypermall - command line entry point.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hypermall_domain::{Ability, RollRequest};
use hypermall_engine::infrastructure::{
    actor_store::{load_actor, save_actor},
    chat::{JsonLinesChat, LogChat},
    config::{load_dotenv_from_repo_root, EngineConfig, DEFAULT_LOG_FILTER},
    ports::ChatPort,
};
use hypermall_engine::use_cases::SheetField;
use hypermall_engine::App;

#[derive(Parser, Debug)]
#[command(name = "hypermall", version, about = "Hypermall ruleset tools")]
struct Cli {
    /// Post roll messages to stdout as JSON lines instead of the log
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Roll a stat + skill check for an actor
    Roll {
        /// Actor document (JSON)
        #[arg(short, long)]
        actor: PathBuf,
        /// Ability key or shorthand (e.g. "physick", "phy"); shorthands map to the key
        #[arg(long)]
        stat: String,
        /// Skill name; spaces and case are ignored
        #[arg(long)]
        skill: String,
        /// Passions modifier added to the pool
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        passions: i32,
    },
    /// Print the flattened roll data of an actor
    RollData {
        #[arg(short, long)]
        actor: PathBuf,
    },
    /// Sanitize a sheet field value and store it on the actor
    Sanitize {
        #[arg(short, long)]
        actor: PathBuf,
        /// stress, debt, meat, or an ability
        #[arg(long)]
        field: String,
        /// Raw text as typed into the sheet
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();
    let config = EngineConfig::from_env().context("loading configuration")?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let chat: Arc<dyn ChatPort> = if cli.json {
        Arc::new(JsonLinesChat::new(tokio::io::stdout()))
    } else {
        Arc::new(LogChat)
    };
    let app = App::new(&config, chat);

    match cli.command {
        Command::Roll {
            actor,
            stat,
            skill,
            passions,
        } => {
            let actor = load_actor(&actor).await?;
            // Sheets store abilities under their full keys.
            let stat = Ability::lookup(&stat).map_or(stat, |a| a.key().to_string());
            let request = RollRequest::new(stat, skill, passions);
            let outcome = app
                .roll
                .execute(&actor, &request)
                .await
                .with_context(|| format!("rolling for {}", actor.name))?;
            if !cli.json {
                println!("{}", outcome.breakdown());
            }
        }
        Command::RollData { actor } => {
            let actor = load_actor(&actor).await?;
            println!("{}", serde_json::to_string_pretty(&actor.roll_data())?);
        }
        Command::Sanitize {
            actor: path,
            field,
            value,
        } => {
            let mut actor = load_actor(&path).await?;
            let field: SheetField = field.parse()?;
            let stored = app.sheet.apply(&mut actor, field, &value)?;
            save_actor(&path, &actor).await?;
            println!("{}", stored);
        }
    }

    Ok(())
}
