//! `lifedesk account` / `lifedesk transaction`: the finance databases.

use anyhow::Result;
use clap::Subcommand;
use lifedesk_core::endpoints::Transport;
use lifedesk_core::filter::{Date, Direction, Title};

use crate::workspace::Workspace;

use super::page_name;

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// List all accounts.
    List,
}

#[derive(Debug, Subcommand)]
pub enum TransactionCommand {
    /// List transactions from the past week, newest first.
    Recent,
}

pub fn run_account<T: Transport>(
    workspace: &Workspace<'_, T>,
    command: AccountCommand,
) -> Result<()> {
    match command {
        AccountCommand::List => {
            let accounts = workspace
                .accounts
                .query(None, &[Title::default().sort(Direction::Ascending)])?;
            for account in &accounts {
                println!("{}", page_name(account));
            }
            Ok(())
        }
    }
}

pub fn run_transaction<T: Transport>(
    workspace: &Workspace<'_, T>,
    command: TransactionCommand,
) -> Result<()> {
    match command {
        TransactionCommand::Recent => {
            let transactions = workspace.transactions.query(
                Some(Date::default().past_week()),
                &[Date::default().sort(Direction::Descending)],
            )?;
            for transaction in &transactions {
                let when = transaction
                    .date("Date")
                    .ok()
                    .flatten()
                    .map(|date| date.start.date().to_string())
                    .unwrap_or_else(|| "?".to_owned());
                println!("{} {}", when, page_name(transaction));
            }
            Ok(())
        }
    }
}
