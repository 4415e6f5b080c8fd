//! Command line client for the lifedesk workspace.

mod client;
mod commands;
mod config;
mod workspace;

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use client::ApiClient;
use commands::{
    area::AreaCommand,
    finance::{AccountCommand, TransactionCommand},
    habit::HabitCommand,
    note::NoteCommand,
    plan::PlanCommand,
    resource::ResourceCommand,
    session::SessionCommand,
    task::TaskCommand,
};
use config::Config;
use workspace::Workspace;

#[derive(Debug, Parser)]
#[command(name = "lifedesk", version, about = "Personal life management from the terminal")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show today's journal page, creating it if needed.
    Daily,
    /// Habit checkboxes on daily pages.
    #[command(subcommand)]
    Habit(HabitCommand),
    /// The task list.
    #[command(subcommand)]
    Task(TaskCommand),
    /// Notes.
    #[command(subcommand)]
    Note(NoteCommand),
    /// Work sessions.
    #[command(subcommand)]
    Session(SessionCommand),
    /// Life areas.
    #[command(subcommand)]
    Area(AreaCommand),
    /// Planning anchors on the planning page.
    #[command(subcommand)]
    Plan(PlanCommand),
    /// Finance accounts.
    #[command(subcommand)]
    Account(AccountCommand),
    /// Finance transactions.
    #[command(subcommand)]
    Transaction(TransactionCommand),
    /// Reference resources.
    #[command(subcommand)]
    Resource(ResourceCommand),
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lifedesk={level},lifedesk_core={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::default_path()?,
    };
    let config = Config::load(&config_path)?;
    let client = ApiClient::new(config.api.secret.clone(), config.api.base_url.clone());
    let workspace = Workspace::new(&client, &config);

    match cli.command {
        Command::Daily => commands::daily::run(&workspace),
        Command::Habit(command) => commands::habit::run(&workspace, command),
        Command::Task(command) => commands::task::run(&workspace, command),
        Command::Note(command) => commands::note::run(&workspace, command),
        Command::Session(command) => commands::session::run(&workspace, command),
        Command::Area(command) => commands::area::run(&workspace, command),
        Command::Plan(command) => commands::plan::run(&workspace, command),
        Command::Account(command) => commands::finance::run_account(&workspace, command),
        Command::Transaction(command) => commands::finance::run_transaction(&workspace, command),
        Command::Resource(command) => commands::resource::run(&workspace, command),
    }
}
