//! Wire values for filters and assignments.
//!
//! Filter operands and assignment payloads share a small vocabulary of
//! scalar and structured values. The `Serialize` impls here produce the
//! exact wire shapes the backend expects; nothing in this module is ever
//! deserialized.

use chrono::{DateTime, NaiveDate, Utc};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{json, Value};
use uuid::Uuid;

use super::property::Property;

/// A primitive filter operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Serialized as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Serialized as RFC 3339.
    DateTime(DateTime<Utc>),
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Scalar::Bool(v) => serializer.serialize_bool(*v),
            Scalar::Int(v) => serializer.serialize_i64(*v),
            Scalar::Float(v) => serializer.serialize_f64(*v),
            Scalar::Str(v) => serializer.serialize_str(v),
            Scalar::Date(v) => serializer.serialize_str(&v.format("%Y-%m-%d").to_string()),
            Scalar::DateTime(v) => serializer.serialize_str(&v.to_rfc3339()),
        }
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Str(v.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Str(v)
    }
}

impl From<NaiveDate> for Scalar {
    fn from(v: NaiveDate) -> Self {
        Scalar::Date(v)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::DateTime(v)
    }
}

impl From<NumberInput> for Scalar {
    fn from(v: NumberInput) -> Self {
        match v {
            NumberInput::Int(n) => Scalar::Int(n),
            NumberInput::Float(n) => Scalar::Float(n),
        }
    }
}

/// A numeric operand for number-typed properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberInput {
    Int(i64),
    Float(f64),
}

impl Serialize for NumberInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumberInput::Int(v) => serializer.serialize_i64(*v),
            NumberInput::Float(v) => serializer.serialize_f64(*v),
        }
    }
}

impl From<i64> for NumberInput {
    fn from(v: i64) -> Self {
        NumberInput::Int(v)
    }
}

impl From<i32> for NumberInput {
    fn from(v: i32) -> Self {
        NumberInput::Int(v.into())
    }
}

impl From<u32> for NumberInput {
    fn from(v: u32) -> Self {
        NumberInput::Int(v.into())
    }
}

impl From<f64> for NumberInput {
    fn from(v: f64) -> Self {
        NumberInput::Float(v)
    }
}

impl From<f32> for NumberInput {
    fn from(v: f32) -> Self {
        NumberInput::Float(v.into())
    }
}

/// A date operand, either calendar-precision or instant-precision. `Raw`
/// passes a preformatted string through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    /// Serialized as `YYYY-MM-DD`.
    Date(NaiveDate),
    /// Serialized as RFC 3339.
    DateTime(DateTime<Utc>),
    Raw(String),
}

impl Serialize for DateInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DateInput::Date(v) => serializer.serialize_str(&v.format("%Y-%m-%d").to_string()),
            DateInput::DateTime(v) => serializer.serialize_str(&v.to_rfc3339()),
            DateInput::Raw(v) => serializer.serialize_str(v),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(v: NaiveDate) -> Self {
        DateInput::Date(v)
    }
}

impl From<DateTime<Utc>> for DateInput {
    fn from(v: DateTime<Utc>) -> Self {
        DateInput::DateTime(v)
    }
}

impl From<&str> for DateInput {
    fn from(v: &str) -> Self {
        DateInput::Raw(v.to_owned())
    }
}

impl From<String> for DateInput {
    fn from(v: String) -> Self {
        DateInput::Raw(v)
    }
}

/// A rich text fragment on the encode side.
///
/// Plain strings become `{"text": {"content": ...}}`; mention variants
/// produce the corresponding `{"mention": {...}}` shape. Decoded rich text
/// lives in [`crate::schema::RichTextFragment`] and carries annotation
/// metadata this type never needs.
#[derive(Debug, Clone, PartialEq)]
pub enum TextValue {
    Plain(String),
    MentionDate {
        start: DateInput,
        end: Option<DateInput>,
    },
    MentionPage(Uuid),
    MentionDatabase(Uuid),
    MentionUser(Uuid),
    MentionLinkPreview(String),
}

impl Serialize for TextValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match self {
            TextValue::Plain(content) => json!({"text": {"content": content}}),
            TextValue::MentionDate { start, end } => {
                json!({"mention": {"date": {"start": start, "end": end}}})
            }
            TextValue::MentionPage(id) => json!({"mention": {"page": {"id": id}}}),
            TextValue::MentionDatabase(id) => json!({"mention": {"database": {"id": id}}}),
            TextValue::MentionUser(id) => json!({"mention": {"user": {"id": id}}}),
            TextValue::MentionLinkPreview(url) => {
                json!({"mention": {"link_preview": {"url": url}}})
            }
        };
        value.serialize(serializer)
    }
}

impl From<&str> for TextValue {
    fn from(v: &str) -> Self {
        TextValue::Plain(v.to_owned())
    }
}

impl From<String> for TextValue {
    fn from(v: String) -> Self {
        TextValue::Plain(v)
    }
}

/// A list of text fragments accepted by title and rich text assignments.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpans(pub Vec<TextValue>);

impl From<&str> for TextSpans {
    fn from(v: &str) -> Self {
        TextSpans(vec![TextValue::Plain(v.to_owned())])
    }
}

impl From<String> for TextSpans {
    fn from(v: String) -> Self {
        TextSpans(vec![TextValue::Plain(v)])
    }
}

impl From<TextValue> for TextSpans {
    fn from(v: TextValue) -> Self {
        TextSpans(vec![v])
    }
}

impl From<Vec<TextValue>> for TextSpans {
    fn from(v: Vec<TextValue>) -> Self {
        TextSpans(v)
    }
}

/// Relation targets. Single ids are normalized to a one-element list.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationIds(pub Vec<Uuid>);

impl From<Uuid> for RelationIds {
    fn from(v: Uuid) -> Self {
        RelationIds(vec![v])
    }
}

impl From<Vec<Uuid>> for RelationIds {
    fn from(v: Vec<Uuid>) -> Self {
        RelationIds(v)
    }
}

impl From<&[Uuid]> for RelationIds {
    fn from(v: &[Uuid]) -> Self {
        RelationIds(v.to_vec())
    }
}

/// The payload of a single property assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignValue {
    /// A bare scalar, e.g. a checkbox state or a number.
    Plain(Scalar),
    /// A fragment list for title and rich text properties.
    Fragments(Vec<TextValue>),
    /// A `{"name": ...}` option reference for select and status properties.
    Name(String),
    /// A list of option references for multi-select properties.
    Names(Vec<String>),
    /// A date range. `end` is always present on the wire, as `null` when
    /// the range is a single day.
    Date {
        start: DateInput,
        end: Option<DateInput>,
    },
    /// Relation targets as `[{"id": ...}]`.
    Relation(Vec<Uuid>),
}

impl Serialize for AssignValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AssignValue::Plain(scalar) => scalar.serialize(serializer),
            AssignValue::Fragments(spans) => spans.serialize(serializer),
            AssignValue::Name(name) => json!({"name": name}).serialize(serializer),
            AssignValue::Names(names) => {
                let options: Vec<Value> = names.iter().map(|n| json!({"name": n})).collect();
                options.serialize(serializer)
            }
            AssignValue::Date { start, end } => {
                json!({"start": start, "end": end}).serialize(serializer)
            }
            AssignValue::Relation(ids) => {
                let refs: Vec<Value> = ids.iter().map(|id| json!({"id": id})).collect();
                refs.serialize(serializer)
            }
        }
    }
}

/// A single property assignment, serialized as
/// `{"<name>": {"<kind>": <value>}}`.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub(crate) property: Property,
    pub(crate) value: AssignValue,
}

impl Assign {
    pub(crate) fn new(property: Property, value: AssignValue) -> Self {
        Self { property, value }
    }

    /// The property name this assignment targets.
    pub fn property_name(&self) -> &str {
        &self.property.name
    }
}

struct Keyed<'a> {
    key: &'static str,
    value: &'a AssignValue,
}

impl Serialize for Keyed<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.value)?;
        map.end()
    }
}

impl Serialize for Assign {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(
            &self.property.name,
            &Keyed {
                key: self.property.kind.as_str(),
                value: &self.value,
            },
        )?;
        map.end()
    }
}

/// A batch of assignments merged into one properties object.
///
/// Assignments to the same property overwrite earlier ones; the merged
/// object carries one entry per property name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Assigns(pub Vec<Assign>);

impl Assigns {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Assign> for Assigns {
    fn from(v: Assign) -> Self {
        Assigns(vec![v])
    }
}

impl From<Vec<Assign>> for Assigns {
    fn from(v: Vec<Assign>) -> Self {
        Assigns(v)
    }
}

impl Serialize for Assigns {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut merged = serde_json::Map::new();
        for assign in &self.0 {
            let value = serde_json::to_value(assign).map_err(serde::ser::Error::custom)?;
            if let Value::Object(entries) = value {
                merged.extend(entries);
            }
        }
        merged.serialize(serializer)
    }
}

/// Sort direction for query sorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ascending,
    Descending,
}

/// A single sort instruction.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}
