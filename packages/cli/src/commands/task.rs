//! `lifedesk task`: list tasks and mark them done.

use anyhow::{bail, Result};
use clap::Subcommand;
use lifedesk_core::endpoints::Transport;
use lifedesk_core::filter::Status;

use crate::workspace::Workspace;

use super::page_name;

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// List open tasks.
    List {
        /// Include finished tasks.
        #[arg(long)]
        all: bool,
    },
    /// Mark a task done by its exact title.
    Done { name: String },
}

pub fn run<T: Transport>(workspace: &Workspace<'_, T>, command: TaskCommand) -> Result<()> {
    match command {
        TaskCommand::List { all } => list(workspace, all),
        TaskCommand::Done { name } => done(workspace, &name),
    }
}

fn list<T: Transport>(workspace: &Workspace<'_, T>, all: bool) -> Result<()> {
    let tasks = if all {
        workspace.tasks.all()?
    } else {
        workspace.tasks.not_done()?
    };
    for task in &tasks {
        let state = task
            .status("Status")
            .map(|status| status.name.clone())
            .unwrap_or_else(|_| "?".to_owned());
        println!("{} [{}]", page_name(task), state);
    }
    Ok(())
}

fn done<T: Transport>(workspace: &Workspace<'_, T>, name: &str) -> Result<()> {
    let tasks = workspace.tasks.not_done()?;
    let by_name = tasks.by_name();
    let Some(task) = by_name.get(name) else {
        bail!("no open task named '{name}'");
    };
    workspace
        .tasks
        .db
        .update(task.id, vec![Status::default().assign("Done")])?;
    println!("done: {name}");
    Ok(())
}
