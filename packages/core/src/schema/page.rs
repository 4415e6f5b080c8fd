//! Page records and typed property access.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::SchemaError;

use super::object::{
    DateObject, DateOrDateTime, FileRef, Icon, IdObject, Parent, PartialUser, SelectOption,
    UniqueIdObject,
};
use super::rich_text::RichText;

/// The result of a formula or rollup evaluation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormulaValue {
    Boolean { boolean: Option<bool> },
    Number { number: Option<f64> },
    String { string: Option<String> },
    Date { date: Option<DateOrDateTime> },
}

impl FormulaValue {
    pub fn kind(&self) -> &'static str {
        match self {
            FormulaValue::Boolean { .. } => "boolean",
            FormulaValue::Number { .. } => "number",
            FormulaValue::String { .. } => "string",
            FormulaValue::Date { .. } => "date",
        }
    }

    pub fn as_bool(&self) -> Result<Option<bool>, SchemaError> {
        match self {
            FormulaValue::Boolean { boolean } => Ok(*boolean),
            other => Err(SchemaError::type_mismatch("formula", "boolean", other.kind())),
        }
    }

    pub fn as_number(&self) -> Result<Option<f64>, SchemaError> {
        match self {
            FormulaValue::Number { number } => Ok(*number),
            other => Err(SchemaError::type_mismatch("formula", "number", other.kind())),
        }
    }

    pub fn as_str(&self) -> Result<Option<&str>, SchemaError> {
        match self {
            FormulaValue::String { string } => Ok(string.as_deref()),
            other => Err(SchemaError::type_mismatch("formula", "string", other.kind())),
        }
    }

    pub fn as_date(&self) -> Result<Option<&DateOrDateTime>, SchemaError> {
        match self {
            FormulaValue::Date { date } => Ok(date.as_ref()),
            other => Err(SchemaError::type_mismatch("formula", "date", other.kind())),
        }
    }
}

/// One property value on a page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Checkbox {
        id: String,
        checkbox: bool,
    },
    CreatedBy {
        id: String,
        created_by: PartialUser,
    },
    CreatedTime {
        id: String,
        created_time: DateTime<Utc>,
    },
    Date {
        id: String,
        date: Option<DateObject>,
    },
    Email {
        id: String,
        email: Option<String>,
    },
    Files {
        id: String,
        files: Vec<FileRef>,
    },
    Formula {
        id: String,
        formula: FormulaValue,
    },
    LastEditedBy {
        id: String,
        last_edited_by: PartialUser,
    },
    LastEditedTime {
        id: String,
        last_edited_time: DateTime<Utc>,
    },
    MultiSelect {
        id: String,
        multi_select: Vec<SelectOption>,
    },
    Number {
        id: String,
        number: Option<f64>,
    },
    People {
        id: String,
        people: Vec<PartialUser>,
    },
    PhoneNumber {
        id: String,
        phone_number: Option<String>,
    },
    Relation {
        id: String,
        has_more: bool,
        relation: Vec<IdObject>,
    },
    RichText {
        id: String,
        rich_text: RichText,
    },
    Rollup {
        id: String,
        rollup: FormulaValue,
    },
    Select {
        id: String,
        select: Option<SelectOption>,
    },
    Status {
        id: String,
        status: SelectOption,
    },
    Title {
        id: String,
        title: RichText,
    },
    UniqueId {
        id: String,
        unique_id: UniqueIdObject,
    },
    Url {
        id: String,
        url: Option<String>,
    },
    Verification {
        id: String,
        verification: Value,
    },
}

impl PropertyValue {
    /// The wire discriminator of this value.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::Checkbox { .. } => "checkbox",
            PropertyValue::CreatedBy { .. } => "created_by",
            PropertyValue::CreatedTime { .. } => "created_time",
            PropertyValue::Date { .. } => "date",
            PropertyValue::Email { .. } => "email",
            PropertyValue::Files { .. } => "files",
            PropertyValue::Formula { .. } => "formula",
            PropertyValue::LastEditedBy { .. } => "last_edited_by",
            PropertyValue::LastEditedTime { .. } => "last_edited_time",
            PropertyValue::MultiSelect { .. } => "multi_select",
            PropertyValue::Number { .. } => "number",
            PropertyValue::People { .. } => "people",
            PropertyValue::PhoneNumber { .. } => "phone_number",
            PropertyValue::Relation { .. } => "relation",
            PropertyValue::RichText { .. } => "rich_text",
            PropertyValue::Rollup { .. } => "rollup",
            PropertyValue::Select { .. } => "select",
            PropertyValue::Status { .. } => "status",
            PropertyValue::Title { .. } => "title",
            PropertyValue::UniqueId { .. } => "unique_id",
            PropertyValue::Url { .. } => "url",
            PropertyValue::Verification { .. } => "verification",
        }
    }
}

/// A decoded page record.
///
/// Property access goes through the typed accessors, which return
/// [`SchemaError::UnknownProperty`] for missing names and
/// [`SchemaError::TypeMismatch`] when the stored kind differs from the
/// one requested.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    pub object: String,
    pub id: Uuid,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: PartialUser,
    pub last_edited_by: PartialUser,
    pub cover: Option<FileRef>,
    pub icon: Option<Icon>,
    pub parent: Parent,
    pub archived: bool,
    pub properties: BTreeMap<String, PropertyValue>,
    pub url: String,
    #[serde(default)]
    pub public_url: Option<String>,
}

impl Page {
    /// Decode a page from its wire representation.
    pub fn parse(value: Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(SchemaError::from)
    }

    fn property(&self, name: &str) -> Result<&PropertyValue, SchemaError> {
        self.properties
            .get(name)
            .ok_or_else(|| SchemaError::unknown_property(name))
    }

    pub fn checkbox(&self, name: &str) -> Result<bool, SchemaError> {
        match self.property(name)? {
            PropertyValue::Checkbox { checkbox, .. } => Ok(*checkbox),
            other => Err(SchemaError::type_mismatch(name, "checkbox", other.kind())),
        }
    }

    /// All checkbox properties, keyed by name in lexical order.
    pub fn checkboxes(&self) -> BTreeMap<&str, bool> {
        self.properties
            .iter()
            .filter_map(|(name, value)| match value {
                PropertyValue::Checkbox { checkbox, .. } => Some((name.as_str(), *checkbox)),
                _ => None,
            })
            .collect()
    }

    pub fn created_by_user(&self, name: &str) -> Result<&PartialUser, SchemaError> {
        match self.property(name)? {
            PropertyValue::CreatedBy { created_by, .. } => Ok(created_by),
            other => Err(SchemaError::type_mismatch(name, "created_by", other.kind())),
        }
    }

    pub fn created_time(&self, name: &str) -> Result<DateTime<Utc>, SchemaError> {
        match self.property(name)? {
            PropertyValue::CreatedTime { created_time, .. } => Ok(*created_time),
            other => Err(SchemaError::type_mismatch(name, "created_time", other.kind())),
        }
    }

    pub fn date(&self, name: &str) -> Result<Option<&DateObject>, SchemaError> {
        match self.property(name)? {
            PropertyValue::Date { date, .. } => Ok(date.as_ref()),
            other => Err(SchemaError::type_mismatch(name, "date", other.kind())),
        }
    }

    pub fn email(&self, name: &str) -> Result<Option<&str>, SchemaError> {
        match self.property(name)? {
            PropertyValue::Email { email, .. } => Ok(email.as_deref()),
            other => Err(SchemaError::type_mismatch(name, "email", other.kind())),
        }
    }

    pub fn files(&self, name: &str) -> Result<&[FileRef], SchemaError> {
        match self.property(name)? {
            PropertyValue::Files { files, .. } => Ok(files),
            other => Err(SchemaError::type_mismatch(name, "files", other.kind())),
        }
    }

    pub fn formula(&self, name: &str) -> Result<&FormulaValue, SchemaError> {
        match self.property(name)? {
            PropertyValue::Formula { formula, .. } => Ok(formula),
            other => Err(SchemaError::type_mismatch(name, "formula", other.kind())),
        }
    }

    pub fn last_edited_by_user(&self, name: &str) -> Result<&PartialUser, SchemaError> {
        match self.property(name)? {
            PropertyValue::LastEditedBy { last_edited_by, .. } => Ok(last_edited_by),
            other => Err(SchemaError::type_mismatch(name, "last_edited_by", other.kind())),
        }
    }

    pub fn last_edited_time(&self, name: &str) -> Result<DateTime<Utc>, SchemaError> {
        match self.property(name)? {
            PropertyValue::LastEditedTime {
                last_edited_time, ..
            } => Ok(*last_edited_time),
            other => Err(SchemaError::type_mismatch(name, "last_edited_time", other.kind())),
        }
    }

    pub fn multi_select(&self, name: &str) -> Result<&[SelectOption], SchemaError> {
        match self.property(name)? {
            PropertyValue::MultiSelect { multi_select, .. } => Ok(multi_select),
            other => Err(SchemaError::type_mismatch(name, "multi_select", other.kind())),
        }
    }

    pub fn number(&self, name: &str) -> Result<Option<f64>, SchemaError> {
        match self.property(name)? {
            PropertyValue::Number { number, .. } => Ok(*number),
            other => Err(SchemaError::type_mismatch(name, "number", other.kind())),
        }
    }

    pub fn people(&self, name: &str) -> Result<&[PartialUser], SchemaError> {
        match self.property(name)? {
            PropertyValue::People { people, .. } => Ok(people),
            other => Err(SchemaError::type_mismatch(name, "people", other.kind())),
        }
    }

    pub fn phone_number(&self, name: &str) -> Result<Option<&str>, SchemaError> {
        match self.property(name)? {
            PropertyValue::PhoneNumber { phone_number, .. } => Ok(phone_number.as_deref()),
            other => Err(SchemaError::type_mismatch(name, "phone_number", other.kind())),
        }
    }

    /// Related page ids. `has_more` pagination on relations is not
    /// surfaced; the first page of targets is what the backend inlines.
    pub fn relation(&self, name: &str) -> Result<Vec<Uuid>, SchemaError> {
        match self.property(name)? {
            PropertyValue::Relation { relation, .. } => {
                Ok(relation.iter().map(|target| target.id).collect())
            }
            other => Err(SchemaError::type_mismatch(name, "relation", other.kind())),
        }
    }

    pub fn text(&self, name: &str) -> Result<&RichText, SchemaError> {
        match self.property(name)? {
            PropertyValue::RichText { rich_text, .. } => Ok(rich_text),
            other => Err(SchemaError::type_mismatch(name, "rich_text", other.kind())),
        }
    }

    pub fn rollup(&self, name: &str) -> Result<&FormulaValue, SchemaError> {
        match self.property(name)? {
            PropertyValue::Rollup { rollup, .. } => Ok(rollup),
            other => Err(SchemaError::type_mismatch(name, "rollup", other.kind())),
        }
    }

    pub fn select(&self, name: &str) -> Result<Option<&SelectOption>, SchemaError> {
        match self.property(name)? {
            PropertyValue::Select { select, .. } => Ok(select.as_ref()),
            other => Err(SchemaError::type_mismatch(name, "select", other.kind())),
        }
    }

    pub fn status(&self, name: &str) -> Result<&SelectOption, SchemaError> {
        match self.property(name)? {
            PropertyValue::Status { status, .. } => Ok(status),
            other => Err(SchemaError::type_mismatch(name, "status", other.kind())),
        }
    }

    pub fn title(&self, name: &str) -> Result<&RichText, SchemaError> {
        match self.property(name)? {
            PropertyValue::Title { title, .. } => Ok(title),
            other => Err(SchemaError::type_mismatch(name, "title", other.kind())),
        }
    }

    pub fn unique_id(&self, name: &str) -> Result<&UniqueIdObject, SchemaError> {
        match self.property(name)? {
            PropertyValue::UniqueId { unique_id, .. } => Ok(unique_id),
            other => Err(SchemaError::type_mismatch(name, "unique_id", other.kind())),
        }
    }

    pub fn url_value(&self, name: &str) -> Result<Option<&str>, SchemaError> {
        match self.property(name)? {
            PropertyValue::Url { url, .. } => Ok(url.as_deref()),
            other => Err(SchemaError::type_mismatch(name, "url", other.kind())),
        }
    }

    /// Display text of the conventional `Name` title property.
    pub fn name(&self) -> Result<String, SchemaError> {
        Ok(self.title("Name")?.plain_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_page() -> Page {
        Page::parse(json!({
            "object": "page",
            "id": "00000000-0000-0000-0000-000000000010",
            "created_time": "2024-02-01T08:00:00.000Z",
            "last_edited_time": "2024-02-01T08:05:00.000Z",
            "created_by": {"object": "user", "id": "u1"},
            "last_edited_by": {"object": "user", "id": "u1"},
            "cover": null,
            "icon": {"type": "emoji", "emoji": "📘"},
            "parent": {
                "type": "database_id",
                "database_id": "00000000-0000-0000-0000-000000000011",
            },
            "archived": false,
            "properties": {
                "Name": {
                    "id": "title",
                    "type": "title",
                    "title": [{"type": "text", "text": {"content": "Tuesday"}, "plain_text": "Tuesday"}],
                },
                "Date": {
                    "id": "d1",
                    "type": "date",
                    "date": {"start": "2024-02-01", "end": null},
                },
                "Exercise": {"id": "c1", "type": "checkbox", "checkbox": true},
                "Reading": {"id": "c2", "type": "checkbox", "checkbox": false},
                "Status": {
                    "id": "s1",
                    "type": "status",
                    "status": {"id": "o1", "name": "In progress", "color": "blue"},
                },
                "Area": {
                    "id": "r1",
                    "type": "relation",
                    "has_more": false,
                    "relation": [{"id": "00000000-0000-0000-0000-000000000012"}],
                },
                "Score": {"id": "n1", "type": "number", "number": 7.5},
            },
            "url": "https://example.com/p/10",
        }))
        .unwrap()
    }

    #[test]
    fn typed_accessors_return_values() {
        let page = sample_page();
        assert!(page.checkbox("Exercise").unwrap());
        assert_eq!(page.name().unwrap(), "Tuesday");
        assert_eq!(page.status("Status").unwrap().name, "In progress");
        assert_eq!(page.number("Score").unwrap(), Some(7.5));
        assert_eq!(
            page.date("Date").unwrap().unwrap().start.date().to_string(),
            "2024-02-01"
        );
        assert_eq!(page.relation("Area").unwrap().len(), 1);
    }

    #[test]
    fn accessor_kind_mismatch_is_an_error() {
        let page = sample_page();
        let err = page.checkbox("Status").unwrap_err();
        match err {
            SchemaError::TypeMismatch {
                property,
                expected,
                actual,
            } => {
                assert_eq!(property, "Status");
                assert_eq!(expected, "checkbox");
                assert_eq!(actual, "status");
            }
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_property_is_an_error() {
        let page = sample_page();
        assert!(matches!(
            page.checkbox("Ghost"),
            Err(SchemaError::UnknownProperty(_))
        ));
    }

    #[test]
    fn checkboxes_collects_only_checkbox_properties() {
        let page = sample_page();
        let habits = page.checkboxes();
        assert_eq!(habits.len(), 2);
        assert_eq!(habits.get("Exercise"), Some(&true));
        assert_eq!(habits.get("Reading"), Some(&false));
    }

    #[test]
    fn unknown_property_kind_fails_decoding() {
        let result = Page::parse(json!({
            "object": "page",
            "id": "00000000-0000-0000-0000-000000000010",
            "created_time": "2024-02-01T08:00:00.000Z",
            "last_edited_time": "2024-02-01T08:05:00.000Z",
            "created_by": {"object": "user", "id": "u1"},
            "last_edited_by": {"object": "user", "id": "u1"},
            "cover": null,
            "icon": null,
            "parent": {"type": "workspace", "workspace": true},
            "archived": false,
            "properties": {
                "Strange": {"id": "x1", "type": "quantum", "quantum": {}},
            },
            "url": "https://example.com/p/10",
        }));
        assert!(matches!(result, Err(SchemaError::Validation(_))));
    }

    #[test]
    fn formula_value_narrows_by_kind() {
        let formula: FormulaValue =
            serde_json::from_value(json!({"type": "number", "number": 3.0})).unwrap();
        assert_eq!(formula.as_number().unwrap(), Some(3.0));
        assert!(formula.as_bool().is_err());
    }
}
