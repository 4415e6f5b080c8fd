//! Workspace users.

use serde::Deserialize;
use uuid::Uuid;

/// A full user record, either a person or an integration bot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum User {
    Person {
        object: String,
        id: Uuid,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        avatar_url: Option<String>,
        person: serde_json::Value,
    },
    Bot {
        object: String,
        id: Uuid,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        avatar_url: Option<String>,
        bot: serde_json::Value,
    },
}

impl User {
    pub fn id(&self) -> Uuid {
        match self {
            User::Person { id, .. } | User::Bot { id, .. } => *id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            User::Person { name, .. } | User::Bot { name, .. } => name.as_deref(),
        }
    }
}
