//! `lifedesk habit`: show and mark the habit checkboxes on daily pages.

use anyhow::{bail, Result};
use clap::Subcommand;
use lifedesk_core::endpoints::Transport;
use lifedesk_core::filter::Checkbox;

use crate::workspace::Workspace;

use super::page_name;

#[derive(Debug, Subcommand)]
pub enum HabitCommand {
    /// Show the habit checkboxes of a daily page.
    Show {
        /// Day offset from today, e.g. -1 for yesterday.
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        days: i64,
    },
    /// Check (or uncheck) one habit on today's page.
    Mark {
        /// The habit's checkbox property name.
        name: String,
        #[arg(long)]
        uncheck: bool,
    },
}

pub fn run<T: Transport>(workspace: &Workspace<'_, T>, command: HabitCommand) -> Result<()> {
    match command {
        HabitCommand::Show { days } => show(workspace, days),
        HabitCommand::Mark { name, uncheck } => mark(workspace, &name, uncheck),
    }
}

fn show<T: Transport>(workspace: &Workspace<'_, T>, days: i64) -> Result<()> {
    let Some(page) = workspace.daily.delta(days)? else {
        bail!("no daily page {days:+} days from today");
    };
    println!("{}", page_name(&page));
    for (habit, checked) in page.checkboxes() {
        let glyph = if checked { "x" } else { " " };
        println!("  [{glyph}] {habit}");
    }
    Ok(())
}

fn mark<T: Transport>(workspace: &Workspace<'_, T>, name: &str, uncheck: bool) -> Result<()> {
    let page = workspace.daily.today()?;
    // Fails with UnknownProperty/TypeMismatch before any write goes out.
    page.checkbox(name)?;
    workspace
        .daily
        .db
        .update(page.id, vec![Checkbox::new(name).assign(!uncheck)])?;
    let verb = if uncheck { "unchecked" } else { "checked" };
    println!("{verb} {name}");
    Ok(())
}
