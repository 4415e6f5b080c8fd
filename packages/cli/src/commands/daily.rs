//! `lifedesk daily`: show (and create on first access) today's journal
//! page.

use anyhow::Result;
use lifedesk_core::endpoints::Transport;

use crate::workspace::Workspace;

use super::page_name;

pub fn run<T: Transport>(workspace: &Workspace<'_, T>) -> Result<()> {
    let page = workspace.daily.today()?;
    println!("{}", page_name(&page));
    println!("{}", page.url);
    Ok(())
}
