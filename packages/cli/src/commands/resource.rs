//! `lifedesk resource`: list reference resources.

use anyhow::Result;
use clap::Subcommand;
use lifedesk_core::endpoints::Transport;
use lifedesk_core::filter::{Direction, Title};

use crate::workspace::Workspace;

use super::page_name;

#[derive(Debug, Subcommand)]
pub enum ResourceCommand {
    /// List all resources.
    List,
}

pub fn run<T: Transport>(workspace: &Workspace<'_, T>, command: ResourceCommand) -> Result<()> {
    match command {
        ResourceCommand::List => {
            let resources = workspace
                .resources
                .query(None, &[Title::default().sort(Direction::Ascending)])?;
            for resource in &resources {
                println!("{}", page_name(resource));
            }
            Ok(())
        }
    }
}
