//! `lifedesk area`: list life areas.

use anyhow::Result;
use clap::Subcommand;
use lifedesk_core::endpoints::Transport;

use crate::workspace::Workspace;

use super::page_name;

#[derive(Debug, Subcommand)]
pub enum AreaCommand {
    /// List all areas.
    List,
}

pub fn run<T: Transport>(workspace: &Workspace<'_, T>, command: AreaCommand) -> Result<()> {
    match command {
        AreaCommand::List => {
            let areas = workspace.areas.all()?;
            for area in &areas {
                println!("{}", page_name(area));
            }
            Ok(())
        }
    }
}
