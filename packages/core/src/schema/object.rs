//! Primitive wire objects shared across pages, databases, and blocks.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Text and block colors, including the `*_background` family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Blue,
    Brown,
    #[default]
    Default,
    Gray,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
    Yellow,
    BlueBackground,
    BrownBackground,
    GrayBackground,
    GreenBackground,
    OrangeBackground,
    PinkBackground,
    PurpleBackground,
    RedBackground,
    YellowBackground,
}

/// A plain `{"url": ...}` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalLink {
    pub url: String,
}

/// A backend-hosted file link with an expiring URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InternalLink {
    pub url: String,
    pub expiry_time: DateTime<Utc>,
}

/// A `{"id": ...}` reference to another object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdObject {
    pub id: Uuid,
}

/// A date value that is either calendar-precision or instant-precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateOrDateTime {
    DateTime(DateTime<FixedOffset>),
    Date(NaiveDate),
}

impl DateOrDateTime {
    /// The calendar date, dropping any time component.
    pub fn date(&self) -> NaiveDate {
        match self {
            DateOrDateTime::DateTime(dt) => dt.date_naive(),
            DateOrDateTime::Date(d) => *d,
        }
    }
}

/// A date property payload: a start, an optional end, and an optional
/// named time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateObject {
    pub start: DateOrDateTime,
    #[serde(default)]
    pub end: Option<DateOrDateTime>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// One option of a select, multi-select, or status property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub name: String,
    pub color: Color,
}

/// The payload of a unique id property. The prefix is display-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueIdObject {
    pub number: i64,
    #[serde(default)]
    pub prefix: Option<String>,
}

/// A user reference carried in audit fields. Only the id is guaranteed;
/// resolve through the users endpoint for the full record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartialUser {
    pub object: String,
    pub id: String,
}

/// The container an object lives in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    DatabaseId { database_id: Uuid },
    PageId { page_id: Uuid },
    BlockId { block_id: Uuid },
    Workspace { workspace: bool },
}

impl Parent {
    /// The containing object's id, or `None` for workspace-level objects.
    pub fn id(&self) -> Option<Uuid> {
        match self {
            Parent::DatabaseId { database_id } => Some(*database_id),
            Parent::PageId { page_id } => Some(*page_id),
            Parent::BlockId { block_id } => Some(*block_id),
            Parent::Workspace { .. } => None,
        }
    }
}

/// An unnamed file reference, used for covers and file-type property
/// values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileRef {
    External { external: ExternalLink },
    File { file: InternalLink },
}

/// A named, captioned file resource, used by file-like blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileResource {
    External {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        caption: crate::schema::rich_text::RichText,
        external: ExternalLink,
    },
    File {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        #[serde(default)]
        caption: crate::schema::rich_text::RichText,
        file: InternalLink,
    },
}

/// A page or database icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Icon {
    Emoji { emoji: String },
    External { external: ExternalLink },
    File { file: InternalLink },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn background_colors_decode_from_snake_case() {
        let color: Color = serde_json::from_value(json!("blue_background")).unwrap();
        assert_eq!(color, Color::BlueBackground);
    }

    #[test]
    fn parent_discriminates_on_type() {
        let parent: Parent = serde_json::from_value(json!({
            "type": "page_id",
            "page_id": "00000000-0000-0000-0000-000000000001",
        }))
        .unwrap();
        assert!(matches!(parent, Parent::PageId { .. }));
        assert!(parent.id().is_some());

        let parent: Parent =
            serde_json::from_value(json!({"type": "workspace", "workspace": true})).unwrap();
        assert_eq!(parent.id(), None);
    }

    #[test]
    fn date_or_datetime_accepts_both_precisions() {
        let value: DateOrDateTime = serde_json::from_value(json!("2024-05-01")).unwrap();
        assert!(matches!(value, DateOrDateTime::Date(_)));

        let value: DateOrDateTime =
            serde_json::from_value(json!("2024-05-01T09:30:00.000+02:00")).unwrap();
        assert!(matches!(value, DateOrDateTime::DateTime(_)));
        assert_eq!(value.date().to_string(), "2024-05-01");
    }

    #[test]
    fn unknown_icon_kind_is_rejected() {
        let result: Result<Icon, _> =
            serde_json::from_value(json!({"type": "sticker", "sticker": {}}));
        assert!(result.is_err());
    }
}
