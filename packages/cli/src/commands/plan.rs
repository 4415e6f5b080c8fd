//! `lifedesk plan`: append to-dos under the planning anchor blocks.

use anyhow::{bail, Result};
use clap::{Subcommand, ValueEnum};
use lifedesk_core::endpoints::{BlockEndpoint, Transport};
use lifedesk_core::schema::builder;

use crate::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum When {
    Today,
    Tomorrow,
    Later,
}

#[derive(Debug, Subcommand)]
pub enum PlanCommand {
    /// Append an unchecked to-do after one of the planning anchors.
    Add {
        text: String,
        #[arg(long, value_enum, default_value = "today")]
        when: When,
    },
}

pub fn run<T: Transport>(workspace: &Workspace<'_, T>, command: PlanCommand) -> Result<()> {
    match command {
        PlanCommand::Add { text, when } => add(workspace, &text, when),
    }
}

fn add<T: Transport>(workspace: &Workspace<'_, T>, text: &str, when: When) -> Result<()> {
    let anchor: &Option<BlockEndpoint<'_, T>> = match when {
        When::Today => &workspace.today_block,
        When::Tomorrow => &workspace.tomorrow_block,
        When::Later => &workspace.later_block,
    };
    let Some(anchor) = anchor else {
        bail!("no anchor block configured for this slot; add it under [blocks] in the config");
    };
    anchor.append_after(vec![builder::todo(text).into()])?;
    println!("planned: {text}");
    Ok(())
}
