//! Filter operators and their wire names.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::{DateInput, NumberInput, Scalar};

#[derive(serde::Serialize)]
struct EmptyObject {}

/// A comparison applied to one property.
///
/// Serializes as a single-entry object, `{"<op>": <operand>}`. Presence
/// checks carry a literal `true` and the relative date ranges carry an
/// empty object. The backend spells containment negation
/// `does_not_contains`; that spelling is part of the wire protocol and is
/// kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    Equals(Scalar),
    NotEquals(Scalar),
    Contains(String),
    NotContains(String),
    Empty,
    NotEmpty,
    After(DateInput),
    OnOrAfter(DateInput),
    Before(DateInput),
    OnOrBefore(DateInput),
    NextMonth,
    NextWeek,
    NextYear,
    PastMonth,
    PastWeek,
    PastYear,
    ThisWeek,
    LessThan(NumberInput),
    LessThanOrEqual(NumberInput),
    GreaterThan(NumberInput),
    GreaterThanOrEqual(NumberInput),
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Operator::Equals(v) => map.serialize_entry("equals", v)?,
            Operator::NotEquals(v) => map.serialize_entry("does_not_equal", v)?,
            Operator::Contains(v) => map.serialize_entry("contains", v)?,
            Operator::NotContains(v) => map.serialize_entry("does_not_contains", v)?,
            Operator::Empty => map.serialize_entry("is_empty", &true)?,
            Operator::NotEmpty => map.serialize_entry("is_not_empty", &true)?,
            Operator::After(v) => map.serialize_entry("after", v)?,
            Operator::OnOrAfter(v) => map.serialize_entry("on_or_after", v)?,
            Operator::Before(v) => map.serialize_entry("before", v)?,
            Operator::OnOrBefore(v) => map.serialize_entry("on_or_before", v)?,
            Operator::NextMonth => map.serialize_entry("next_month", &EmptyObject {})?,
            Operator::NextWeek => map.serialize_entry("next_week", &EmptyObject {})?,
            Operator::NextYear => map.serialize_entry("next_year", &EmptyObject {})?,
            Operator::PastMonth => map.serialize_entry("past_month", &EmptyObject {})?,
            Operator::PastWeek => map.serialize_entry("past_week", &EmptyObject {})?,
            Operator::PastYear => map.serialize_entry("past_year", &EmptyObject {})?,
            Operator::ThisWeek => map.serialize_entry("this_week", &EmptyObject {})?,
            Operator::LessThan(v) => map.serialize_entry("less_than", v)?,
            Operator::LessThanOrEqual(v) => map.serialize_entry("less_than_or_equal_to", v)?,
            Operator::GreaterThan(v) => map.serialize_entry("greater_than", v)?,
            Operator::GreaterThanOrEqual(v) => {
                map.serialize_entry("greater_than_or_equal_to", v)?
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn presence_checks_carry_literal_true() {
        let value = serde_json::to_value(Operator::Empty).unwrap();
        assert_eq!(value, json!({"is_empty": true}));
        let value = serde_json::to_value(Operator::NotEmpty).unwrap();
        assert_eq!(value, json!({"is_not_empty": true}));
    }

    #[test]
    fn relative_dates_carry_empty_object() {
        let value = serde_json::to_value(Operator::NextMonth).unwrap();
        assert_eq!(value, json!({"next_month": {}}));
    }

    #[test]
    fn negated_containment_keeps_wire_spelling() {
        let value = serde_json::to_value(Operator::NotContains("x".into())).unwrap();
        assert_eq!(value, json!({"does_not_contains": "x"}));
    }

    #[test]
    fn ordered_comparisons_use_or_equal_to_names() {
        let value = serde_json::to_value(Operator::LessThanOrEqual(3.into())).unwrap();
        assert_eq!(value, json!({"less_than_or_equal_to": 3}));
        let value = serde_json::to_value(Operator::GreaterThanOrEqual(1.5.into())).unwrap();
        assert_eq!(value, json!({"greater_than_or_equal_to": 1.5}));
    }
}
