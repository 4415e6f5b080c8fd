//! Database records: the schema side of a collection.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::SchemaError;

use super::object::{FileRef, Icon, Parent, PartialUser, SelectOption};
use super::rich_text::RichText;

/// Configuration kinds with no parameters decode into this.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct EmptyConfig {}

/// Option list for select, multi-select, and status columns.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectConfig {
    pub options: Vec<SelectOption>,
}

/// Number display format. The format set is open-ended on the backend, so
/// it stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberConfig {
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormulaConfig {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelationConfig {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub database_id: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RollupConfig {
    pub function: String,
    pub relation_property_id: String,
    pub relation_property_name: String,
    pub rollup_property_id: String,
    pub rollup_property_name: String,
}

/// One column definition of a database.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DatabaseProperty {
    Checkbox {
        id: String,
        name: String,
        checkbox: EmptyConfig,
    },
    CreatedBy {
        id: String,
        name: String,
        created_by: EmptyConfig,
    },
    CreatedTime {
        id: String,
        name: String,
        created_time: EmptyConfig,
    },
    Date {
        id: String,
        name: String,
        date: EmptyConfig,
    },
    Email {
        id: String,
        name: String,
        email: EmptyConfig,
    },
    Files {
        id: String,
        name: String,
        files: EmptyConfig,
    },
    Formula {
        id: String,
        name: String,
        formula: FormulaConfig,
    },
    LastEditedBy {
        id: String,
        name: String,
        last_edited_by: EmptyConfig,
    },
    LastEditedTime {
        id: String,
        name: String,
        last_edited_time: EmptyConfig,
    },
    MultiSelect {
        id: String,
        name: String,
        multi_select: SelectConfig,
    },
    Number {
        id: String,
        name: String,
        number: NumberConfig,
    },
    People {
        id: String,
        name: String,
        people: EmptyConfig,
    },
    PhoneNumber {
        id: String,
        name: String,
        phone_number: EmptyConfig,
    },
    Relation {
        id: String,
        name: String,
        relation: RelationConfig,
    },
    RichText {
        id: String,
        name: String,
        rich_text: EmptyConfig,
    },
    Rollup {
        id: String,
        name: String,
        rollup: RollupConfig,
    },
    Select {
        id: String,
        name: String,
        select: SelectConfig,
    },
    Status {
        id: String,
        name: String,
        status: SelectConfig,
    },
    Title {
        id: String,
        name: String,
        title: EmptyConfig,
    },
    Url {
        id: String,
        name: String,
        url: EmptyConfig,
    },
    UniqueId {
        id: String,
        name: String,
        unique_id: Value,
    },
}

impl DatabaseProperty {
    /// The wire discriminator of this column kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DatabaseProperty::Checkbox { .. } => "checkbox",
            DatabaseProperty::CreatedBy { .. } => "created_by",
            DatabaseProperty::CreatedTime { .. } => "created_time",
            DatabaseProperty::Date { .. } => "date",
            DatabaseProperty::Email { .. } => "email",
            DatabaseProperty::Files { .. } => "files",
            DatabaseProperty::Formula { .. } => "formula",
            DatabaseProperty::LastEditedBy { .. } => "last_edited_by",
            DatabaseProperty::LastEditedTime { .. } => "last_edited_time",
            DatabaseProperty::MultiSelect { .. } => "multi_select",
            DatabaseProperty::Number { .. } => "number",
            DatabaseProperty::People { .. } => "people",
            DatabaseProperty::PhoneNumber { .. } => "phone_number",
            DatabaseProperty::Relation { .. } => "relation",
            DatabaseProperty::RichText { .. } => "rich_text",
            DatabaseProperty::Rollup { .. } => "rollup",
            DatabaseProperty::Select { .. } => "select",
            DatabaseProperty::Status { .. } => "status",
            DatabaseProperty::Title { .. } => "title",
            DatabaseProperty::Url { .. } => "url",
            DatabaseProperty::UniqueId { .. } => "unique_id",
        }
    }
}

/// A decoded database record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Database {
    pub object: String,
    pub id: Uuid,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: PartialUser,
    pub last_edited_by: PartialUser,
    pub title: RichText,
    #[serde(default)]
    pub description: RichText,
    pub icon: Option<Icon>,
    pub cover: Option<FileRef>,
    pub properties: BTreeMap<String, DatabaseProperty>,
    pub parent: Parent,
    pub url: String,
    pub archived: bool,
    #[serde(default)]
    pub is_inline: bool,
    #[serde(default)]
    pub public_url: Option<String>,
}

impl Database {
    /// Decode a database from its wire representation.
    pub fn parse(value: Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(SchemaError::from)
    }

    fn property(&self, name: &str) -> Result<&DatabaseProperty, SchemaError> {
        self.properties
            .get(name)
            .ok_or_else(|| SchemaError::unknown_property(name))
    }

    /// The column kind for `name`, for callers that only need to probe.
    pub fn kind_of(&self, name: &str) -> Result<&'static str, SchemaError> {
        Ok(self.property(name)?.kind())
    }

    pub fn select(&self, name: &str) -> Result<&SelectConfig, SchemaError> {
        match self.property(name)? {
            DatabaseProperty::Select { select, .. } => Ok(select),
            other => Err(SchemaError::type_mismatch(name, "select", other.kind())),
        }
    }

    pub fn status(&self, name: &str) -> Result<&SelectConfig, SchemaError> {
        match self.property(name)? {
            DatabaseProperty::Status { status, .. } => Ok(status),
            other => Err(SchemaError::type_mismatch(name, "status", other.kind())),
        }
    }

    pub fn multi_select(&self, name: &str) -> Result<&SelectConfig, SchemaError> {
        match self.property(name)? {
            DatabaseProperty::MultiSelect { multi_select, .. } => Ok(multi_select),
            other => Err(SchemaError::type_mismatch(name, "multi_select", other.kind())),
        }
    }

    pub fn number(&self, name: &str) -> Result<&NumberConfig, SchemaError> {
        match self.property(name)? {
            DatabaseProperty::Number { number, .. } => Ok(number),
            other => Err(SchemaError::type_mismatch(name, "number", other.kind())),
        }
    }

    pub fn relation(&self, name: &str) -> Result<&RelationConfig, SchemaError> {
        match self.property(name)? {
            DatabaseProperty::Relation { relation, .. } => Ok(relation),
            other => Err(SchemaError::type_mismatch(name, "relation", other.kind())),
        }
    }

    pub fn formula(&self, name: &str) -> Result<&FormulaConfig, SchemaError> {
        match self.property(name)? {
            DatabaseProperty::Formula { formula, .. } => Ok(formula),
            other => Err(SchemaError::type_mismatch(name, "formula", other.kind())),
        }
    }

    pub fn rollup(&self, name: &str) -> Result<&RollupConfig, SchemaError> {
        match self.property(name)? {
            DatabaseProperty::Rollup { rollup, .. } => Ok(rollup),
            other => Err(SchemaError::type_mismatch(name, "rollup", other.kind())),
        }
    }

    /// The name of the title column.
    pub fn title_property(&self) -> Result<&str, SchemaError> {
        self.properties
            .iter()
            .find_map(|(name, property)| {
                matches!(property, DatabaseProperty::Title { .. }).then_some(name.as_str())
            })
            .ok_or_else(|| SchemaError::validation("database has no title property"))
    }
}
