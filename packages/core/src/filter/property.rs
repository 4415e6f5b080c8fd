//! Typed property descriptors.
//!
//! A descriptor pairs a property name with its kind and exposes only the
//! operators and assignment payloads that kind supports. Descriptors are
//! cheap to build at call sites; there is no schema registry behind them,
//! so a misspelled name surfaces as a backend error, not a local one.
//!
//! # Examples
//!
//! ```
//! use lifedesk_core::filter::{Date, Status, Title};
//!
//! let due_today = Date::new("Due").today().and(Status::default().not_done());
//! let rename = Title::default().assign("Quarterly planning");
//! ```

use chrono::{Duration, Local};

use super::expr::Filter;
use super::operator::Operator;
use super::value::{
    Assign, AssignValue, DateInput, Direction, NumberInput, RelationIds, Scalar, Sort, TextSpans,
};

/// The closed set of filterable property kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Checkbox,
    Date,
    MultiSelect,
    Number,
    Relation,
    RichText,
    Select,
    Status,
    Title,
    UniqueId,
}

impl PropertyKind {
    /// The wire name, used as the operator key in filter conditions and as
    /// the payload key in assignments.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Checkbox => "checkbox",
            PropertyKind::Date => "date",
            PropertyKind::MultiSelect => "multi_select",
            PropertyKind::Number => "number",
            PropertyKind::Relation => "relation",
            PropertyKind::RichText => "rich_text",
            PropertyKind::Select => "select",
            PropertyKind::Status => "status",
            PropertyKind::Title => "title",
            PropertyKind::UniqueId => "unique_id",
        }
    }
}

/// An untyped property reference: a name plus its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub kind: PropertyKind,
}

impl Property {
    fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    fn matches(&self, operator: Operator) -> Filter {
        Filter::condition(self.clone(), operator)
    }

    fn assign(&self, value: AssignValue) -> Assign {
        Assign::new(self.clone(), value)
    }

    fn sort(&self, direction: Direction) -> Sort {
        Sort {
            property: self.name.clone(),
            direction,
        }
    }
}

/// A checkbox property.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkbox(Property);

impl Checkbox {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::Checkbox))
    }

    pub fn assign(&self, checked: bool) -> Assign {
        self.0.assign(AssignValue::Plain(Scalar::Bool(checked)))
    }

    pub fn equals(&self, checked: bool) -> Filter {
        self.0.matches(Operator::Equals(Scalar::Bool(checked)))
    }

    pub fn not_equal(&self, checked: bool) -> Filter {
        self.0.matches(Operator::NotEquals(Scalar::Bool(checked)))
    }

    pub fn checked(&self) -> Filter {
        self.equals(true)
    }

    pub fn unchecked(&self) -> Filter {
        self.equals(false)
    }

    pub fn sort(&self, direction: Direction) -> Sort {
        self.0.sort(direction)
    }
}

/// A date property. [`Date::default`] refers to the conventional `Date`
/// column of journal-style databases.
#[derive(Debug, Clone, PartialEq)]
pub struct Date(Property);

impl Default for Date {
    fn default() -> Self {
        Self::new("Date")
    }
}

impl Date {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::Date))
    }

    /// Assign a date range. Pass `end: None` for a single-day value.
    pub fn assign(&self, start: impl Into<DateInput>, end: Option<DateInput>) -> Assign {
        self.0.assign(AssignValue::Date {
            start: start.into(),
            end,
        })
    }

    pub fn equals(&self, date: impl Into<DateInput>) -> Filter {
        self.0.matches(Operator::Equals(match date.into() {
            DateInput::Date(d) => Scalar::Date(d),
            DateInput::DateTime(dt) => Scalar::DateTime(dt),
            DateInput::Raw(raw) => Scalar::Str(raw),
        }))
    }

    pub fn after(&self, date: impl Into<DateInput>) -> Filter {
        self.0.matches(Operator::After(date.into()))
    }

    pub fn on_or_after(&self, date: impl Into<DateInput>) -> Filter {
        self.0.matches(Operator::OnOrAfter(date.into()))
    }

    pub fn before(&self, date: impl Into<DateInput>) -> Filter {
        self.0.matches(Operator::Before(date.into()))
    }

    pub fn on_or_before(&self, date: impl Into<DateInput>) -> Filter {
        self.0.matches(Operator::OnOrBefore(date.into()))
    }

    /// Matches the local calendar date at call time.
    pub fn today(&self) -> Filter {
        self.equals(Local::now().date_naive())
    }

    /// Matches the local calendar date offset by `delta`.
    pub fn delta(&self, delta: Duration) -> Filter {
        self.equals(Local::now().date_naive() + delta)
    }

    pub fn next_month(&self) -> Filter {
        self.0.matches(Operator::NextMonth)
    }

    pub fn next_week(&self) -> Filter {
        self.0.matches(Operator::NextWeek)
    }

    pub fn next_year(&self) -> Filter {
        self.0.matches(Operator::NextYear)
    }

    pub fn past_month(&self) -> Filter {
        self.0.matches(Operator::PastMonth)
    }

    pub fn past_week(&self) -> Filter {
        self.0.matches(Operator::PastWeek)
    }

    pub fn past_year(&self) -> Filter {
        self.0.matches(Operator::PastYear)
    }

    pub fn this_week(&self) -> Filter {
        self.0.matches(Operator::ThisWeek)
    }

    pub fn empty(&self) -> Filter {
        self.0.matches(Operator::Empty)
    }

    pub fn not_empty(&self) -> Filter {
        self.0.matches(Operator::NotEmpty)
    }

    pub fn sort(&self, direction: Direction) -> Sort {
        self.0.sort(direction)
    }
}

/// A number property.
#[derive(Debug, Clone, PartialEq)]
pub struct Number(Property);

impl Number {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::Number))
    }

    pub fn assign(&self, number: impl Into<NumberInput>) -> Assign {
        self.0.assign(AssignValue::Plain(number.into().into()))
    }

    pub fn equals(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::Equals(number.into().into()))
    }

    pub fn not_equal(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::NotEquals(number.into().into()))
    }

    pub fn less_than(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::LessThan(number.into()))
    }

    pub fn less_than_or_equal(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::LessThanOrEqual(number.into()))
    }

    pub fn greater_than(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::GreaterThan(number.into()))
    }

    pub fn greater_than_or_equal(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::GreaterThanOrEqual(number.into()))
    }

    pub fn empty(&self) -> Filter {
        self.0.matches(Operator::Empty)
    }

    pub fn not_empty(&self) -> Filter {
        self.0.matches(Operator::NotEmpty)
    }

    pub fn sort(&self, direction: Direction) -> Sort {
        self.0.sort(direction)
    }
}

/// A relation property.
#[derive(Debug, Clone, PartialEq)]
pub struct Relation(Property);

impl Relation {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::Relation))
    }

    /// Assign relation targets. A single id becomes a one-element list.
    pub fn assign(&self, ids: impl Into<RelationIds>) -> Assign {
        self.0.assign(AssignValue::Relation(ids.into().0))
    }

    pub fn contains(&self, id: uuid::Uuid) -> Filter {
        self.0.matches(Operator::Contains(id.to_string()))
    }

    pub fn not_contains(&self, id: uuid::Uuid) -> Filter {
        self.0.matches(Operator::NotContains(id.to_string()))
    }

    pub fn empty(&self) -> Filter {
        self.0.matches(Operator::Empty)
    }

    pub fn not_empty(&self) -> Filter {
        self.0.matches(Operator::NotEmpty)
    }
}

/// A rich text property.
#[derive(Debug, Clone, PartialEq)]
pub struct Text(Property);

impl Text {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::RichText))
    }

    /// Assign fragment content. Plain strings become a single text span.
    pub fn assign(&self, text: impl Into<TextSpans>) -> Assign {
        self.0.assign(AssignValue::Fragments(text.into().0))
    }

    pub fn equals(&self, text: impl Into<String>) -> Filter {
        self.0.matches(Operator::Equals(Scalar::Str(text.into())))
    }

    pub fn not_equal(&self, text: impl Into<String>) -> Filter {
        self.0.matches(Operator::NotEquals(Scalar::Str(text.into())))
    }

    pub fn contains(&self, text: impl Into<String>) -> Filter {
        self.0.matches(Operator::Contains(text.into()))
    }

    pub fn not_contains(&self, text: impl Into<String>) -> Filter {
        self.0.matches(Operator::NotContains(text.into()))
    }

    pub fn empty(&self) -> Filter {
        self.0.matches(Operator::Empty)
    }

    pub fn not_empty(&self) -> Filter {
        self.0.matches(Operator::NotEmpty)
    }

    pub fn sort(&self, direction: Direction) -> Sort {
        self.0.sort(direction)
    }
}

/// A select property.
#[derive(Debug, Clone, PartialEq)]
pub struct Select(Property);

impl Select {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::Select))
    }

    /// Assign an option by name.
    pub fn assign(&self, option: impl Into<String>) -> Assign {
        self.0.assign(AssignValue::Name(option.into()))
    }

    pub fn equals(&self, option: impl Into<String>) -> Filter {
        self.0.matches(Operator::Equals(Scalar::Str(option.into())))
    }

    pub fn not_equal(&self, option: impl Into<String>) -> Filter {
        self.0
            .matches(Operator::NotEquals(Scalar::Str(option.into())))
    }

    pub fn empty(&self) -> Filter {
        self.0.matches(Operator::Empty)
    }

    pub fn not_empty(&self) -> Filter {
        self.0.matches(Operator::NotEmpty)
    }

    pub fn sort(&self, direction: Direction) -> Sort {
        self.0.sort(direction)
    }
}

/// A multi-select property.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelect(Property);

impl MultiSelect {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::MultiSelect))
    }

    /// Assign the full option set by name.
    pub fn assign<I, T>(&self, options: I) -> Assign
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.0
            .assign(AssignValue::Names(options.into_iter().map(Into::into).collect()))
    }

    pub fn contains(&self, option: impl Into<String>) -> Filter {
        self.0.matches(Operator::Contains(option.into()))
    }

    pub fn not_contains(&self, option: impl Into<String>) -> Filter {
        self.0.matches(Operator::NotContains(option.into()))
    }

    pub fn empty(&self) -> Filter {
        self.0.matches(Operator::Empty)
    }

    pub fn not_empty(&self) -> Filter {
        self.0.matches(Operator::NotEmpty)
    }
}

/// A status property. [`Status::default`] refers to the conventional
/// `Status` column; the named states match the workflow used across the
/// task and session databases.
#[derive(Debug, Clone, PartialEq)]
pub struct Status(Property);

impl Default for Status {
    fn default() -> Self {
        Self::new("Status")
    }
}

impl Status {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::Status))
    }

    /// Assign a state by name.
    pub fn assign(&self, state: impl Into<String>) -> Assign {
        self.0.assign(AssignValue::Name(state.into()))
    }

    pub fn equals(&self, state: impl Into<String>) -> Filter {
        self.0.matches(Operator::Equals(Scalar::Str(state.into())))
    }

    pub fn not_equal(&self, state: impl Into<String>) -> Filter {
        self.0
            .matches(Operator::NotEquals(Scalar::Str(state.into())))
    }

    /// Alias for [`equals`](Status::equals), reading as a workflow state
    /// check.
    pub fn state(&self, state: impl Into<String>) -> Filter {
        self.equals(state)
    }

    pub fn not_started(&self) -> Filter {
        self.equals("Not started")
    }

    pub fn in_progress(&self) -> Filter {
        self.equals("In progress")
    }

    pub fn paused(&self) -> Filter {
        self.equals("Paused")
    }

    pub fn done(&self) -> Filter {
        self.equals("Done")
    }

    pub fn not_done(&self) -> Filter {
        self.not_equal("Done")
    }

    pub fn abandoned(&self) -> Filter {
        self.equals("Abandoned")
    }

    pub fn sort(&self, direction: Direction) -> Sort {
        self.0.sort(direction)
    }
}

/// The title property. [`Title::default`] refers to the conventional
/// `Name` column.
#[derive(Debug, Clone, PartialEq)]
pub struct Title(Property);

impl Default for Title {
    fn default() -> Self {
        Self::new("Name")
    }
}

impl Title {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::Title))
    }

    /// Assign fragment content. Plain strings become a single text span.
    pub fn assign(&self, text: impl Into<TextSpans>) -> Assign {
        self.0.assign(AssignValue::Fragments(text.into().0))
    }

    pub fn equals(&self, text: impl Into<String>) -> Filter {
        self.0.matches(Operator::Equals(Scalar::Str(text.into())))
    }

    pub fn not_equal(&self, text: impl Into<String>) -> Filter {
        self.0.matches(Operator::NotEquals(Scalar::Str(text.into())))
    }

    pub fn contains(&self, text: impl Into<String>) -> Filter {
        self.0.matches(Operator::Contains(text.into()))
    }

    pub fn not_contains(&self, text: impl Into<String>) -> Filter {
        self.0.matches(Operator::NotContains(text.into()))
    }

    pub fn empty(&self) -> Filter {
        self.0.matches(Operator::Empty)
    }

    pub fn not_empty(&self) -> Filter {
        self.0.matches(Operator::NotEmpty)
    }

    pub fn sort(&self, direction: Direction) -> Sort {
        self.0.sort(direction)
    }
}

/// An auto-incrementing unique id property. Filters compare the numeric
/// part; the prefix is display-only.
#[derive(Debug, Clone, PartialEq)]
pub struct UniqueId(Property);

impl UniqueId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(Property::new(name, PropertyKind::UniqueId))
    }

    pub fn equals(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::Equals(number.into().into()))
    }

    pub fn not_equal(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::NotEquals(number.into().into()))
    }

    pub fn less_than(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::LessThan(number.into()))
    }

    pub fn less_than_or_equal(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::LessThanOrEqual(number.into()))
    }

    pub fn greater_than(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::GreaterThan(number.into()))
    }

    pub fn greater_than_or_equal(&self, number: impl Into<NumberInput>) -> Filter {
        self.0.matches(Operator::GreaterThanOrEqual(number.into()))
    }

    pub fn sort(&self, direction: Direction) -> Sort {
        self.0.sort(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn default_descriptors_use_conventional_names() {
        assert_eq!(
            serde_json::to_value(Title::default().equals("x")).unwrap()["property"],
            json!("Name")
        );
        assert_eq!(
            serde_json::to_value(Status::default().done()).unwrap()["property"],
            json!("Status")
        );
        assert_eq!(
            serde_json::to_value(Date::default().empty()).unwrap()["property"],
            json!("Date")
        );
    }

    #[test]
    fn today_filters_on_the_local_calendar_day() {
        let filter = Date::default().today();
        let expected = Local::now().date_naive().format("%Y-%m-%d").to_string();
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"property": "Date", "date": {"equals": expected}})
        );
    }

    #[test]
    fn delta_filters_on_the_offset_calendar_day() {
        let filter = Date::new("Due").delta(Duration::days(2));
        let expected = (Local::now().date_naive() + Duration::days(2))
            .format("%Y-%m-%d")
            .to_string();
        assert_eq!(
            serde_json::to_value(&filter).unwrap(),
            json!({"property": "Due", "date": {"equals": expected}})
        );
    }

    #[test]
    fn status_states_map_to_option_names() {
        let value = serde_json::to_value(Status::default().not_done()).unwrap();
        assert_eq!(
            value,
            json!({"property": "Status", "status": {"does_not_equal": "Done"}})
        );
    }

    #[test]
    fn date_filter_uses_calendar_string() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let value = serde_json::to_value(Date::new("Due").on_or_before(date)).unwrap();
        assert_eq!(
            value,
            json!({"property": "Due", "date": {"on_or_before": "2024-06-01"}})
        );
    }

    #[test]
    fn relation_filters_compare_id_strings() {
        let id = uuid::Uuid::nil();
        let value = serde_json::to_value(Relation::new("Area").contains(id)).unwrap();
        assert_eq!(
            value,
            json!({
                "property": "Area",
                "relation": {"contains": "00000000-0000-0000-0000-000000000000"},
            })
        );
    }

    #[test]
    fn multi_select_assign_collects_option_names() {
        let assign = MultiSelect::new("Tags").assign(["a", "b"]);
        let value = serde_json::to_value(&assign).unwrap();
        assert_eq!(
            value,
            json!({"Tags": {"multi_select": [{"name": "a"}, {"name": "b"}]}})
        );
    }

    #[test]
    fn unique_id_compares_numerically() {
        let value = serde_json::to_value(UniqueId::new("ID").greater_than_or_equal(10)).unwrap();
        assert_eq!(
            value,
            json!({"property": "ID", "unique_id": {"greater_than_or_equal_to": 10}})
        );
    }
}
