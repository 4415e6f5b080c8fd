//! Typed handles for the workspace databases and anchor blocks.

use chrono::{Duration, Local};
use lifedesk_core::endpoints::{BlockEndpoint, DatabaseEndpoint, EndpointError, Transport};
use lifedesk_core::filter::{Date, Direction, Status, Title};
use lifedesk_core::schema::{Page, QueryResult};
use tracing::warn;

use crate::config::Config;

/// All endpoints the commands operate on, wired from one config.
pub struct Workspace<'a, T: Transport> {
    pub daily: Daily<'a, T>,
    pub areas: Areas<'a, T>,
    pub tasks: Tasks<'a, T>,
    pub sessions: Sessions<'a, T>,
    pub notes: Notes<'a, T>,
    pub accounts: DatabaseEndpoint<'a, T>,
    pub transactions: DatabaseEndpoint<'a, T>,
    pub resources: DatabaseEndpoint<'a, T>,
    pub today_block: Option<BlockEndpoint<'a, T>>,
    pub tomorrow_block: Option<BlockEndpoint<'a, T>>,
    pub later_block: Option<BlockEndpoint<'a, T>>,
}

impl<'a, T: Transport> Workspace<'a, T> {
    pub fn new(transport: &'a T, config: &Config) -> Self {
        let databases = &config.databases;
        let icons = &config.default_icons;
        Self {
            daily: Daily {
                db: DatabaseEndpoint::new(transport, databases.daily)
                    .with_default_icon(icons.daily.clone()),
            },
            areas: Areas {
                db: DatabaseEndpoint::new(transport, databases.areas),
            },
            tasks: Tasks {
                db: DatabaseEndpoint::new(transport, databases.tasks)
                    .with_default_icon(icons.tasks.clone()),
            },
            sessions: Sessions {
                db: DatabaseEndpoint::new(transport, databases.sessions)
                    .with_default_icon(icons.sessions.clone()),
            },
            notes: Notes {
                db: DatabaseEndpoint::new(transport, databases.notes)
                    .with_default_icon(icons.notes.clone()),
            },
            accounts: DatabaseEndpoint::new(transport, databases.accounts),
            transactions: DatabaseEndpoint::new(transport, databases.transactions),
            resources: DatabaseEndpoint::new(transport, databases.resources),
            today_block: config
                .blocks
                .today
                .map(|id| BlockEndpoint::new(transport, id)),
            tomorrow_block: config
                .blocks
                .tomorrow
                .map(|id| BlockEndpoint::new(transport, id)),
            later_block: config
                .blocks
                .later
                .map(|id| BlockEndpoint::new(transport, id)),
        }
    }
}

/// The daily journal database: one page per calendar day, with habit
/// checkboxes as columns.
pub struct Daily<'a, T: Transport> {
    pub db: DatabaseEndpoint<'a, T>,
}

impl<T: Transport> Daily<'_, T> {
    /// Today's page, created on first access.
    pub fn today(&self) -> Result<Page, EndpointError> {
        let found = self.db.query(Some(Date::default().today()), &[])?;
        if found.count() > 1 {
            warn!(count = found.count(), "multiple daily pages for today");
        }
        if let Ok(page) = found.first() {
            return Ok(page.clone());
        }
        let today = Local::now().date_naive();
        self.db.create(
            vec![
                Title::default().assign(today.format("%Y-%m-%d").to_string()),
                Date::default().assign(today, None),
            ],
            vec![],
            None,
            None,
        )
    }

    /// The page `days` away from today, if it exists.
    pub fn delta(&self, days: i64) -> Result<Option<Page>, EndpointError> {
        let found = self
            .db
            .query(Some(Date::default().delta(Duration::days(days))), &[])?;
        Ok(found.first().ok().cloned())
    }
}

/// The task database.
pub struct Tasks<'a, T: Transport> {
    pub db: DatabaseEndpoint<'a, T>,
}

impl<T: Transport> Tasks<'_, T> {
    pub fn all(&self) -> Result<QueryResult<Page>, EndpointError> {
        self.db.query(None, &[Title::default().sort(Direction::Ascending)])
    }

    pub fn not_done(&self) -> Result<QueryResult<Page>, EndpointError> {
        self.db.query(
            Some(Status::default().not_done()),
            &[Title::default().sort(Direction::Ascending)],
        )
    }
}

/// The work session database.
pub struct Sessions<'a, T: Transport> {
    pub db: DatabaseEndpoint<'a, T>,
}

impl<T: Transport> Sessions<'_, T> {
    /// Sessions starting today, earliest first.
    pub fn today(&self) -> Result<QueryResult<Page>, EndpointError> {
        self.db.query(
            Some(Date::new("Start").today()),
            &[Date::new("Start").sort(Direction::Ascending)],
        )
    }

    pub fn in_progress(&self) -> Result<QueryResult<Page>, EndpointError> {
        self.db.query(Some(Status::default().in_progress()), &[])
    }
}

/// The notes database.
pub struct Notes<'a, T: Transport> {
    pub db: DatabaseEndpoint<'a, T>,
}

impl<T: Transport> Notes<'_, T> {
    pub fn all(&self) -> Result<QueryResult<Page>, EndpointError> {
        self.db.query(None, &[Title::default().sort(Direction::Ascending)])
    }
}

/// The life areas database.
pub struct Areas<'a, T: Transport> {
    pub db: DatabaseEndpoint<'a, T>,
}

impl<T: Transport> Areas<'_, T> {
    pub fn all(&self) -> Result<QueryResult<Page>, EndpointError> {
        self.db.query(None, &[Title::default().sort(Direction::Ascending)])
    }
}
