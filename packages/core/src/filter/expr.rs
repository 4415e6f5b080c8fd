//! The filter algebra.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::operator::Operator;
use super::property::Property;

/// A query filter tree.
///
/// Leaves pair a property with an operator; `And`/`Or` nodes hold two or
/// more children. The combinators flatten same-kind nesting so
/// `a.and(b).and(c)` produces one `and` node with three children, which is
/// the shape the backend expects.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Matches everything. Identity for [`and`](Filter::and) and
    /// [`or`](Filter::or); serializes as `{}` and is omitted from query
    /// bodies entirely.
    Empty,
    Condition {
        property: Property,
        operator: Operator,
    },
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn is_empty(&self) -> bool {
        matches!(self, Filter::Empty)
    }

    /// Both filters must match. Children of same-kind operands are spliced
    /// rather than nested.
    pub fn and(self, other: Filter) -> Filter {
        Self::combine(self, other, Filter::And, |f| match f {
            Filter::And(children) => Ok(children),
            other => Err(other),
        })
    }

    /// Either filter may match. Children of same-kind operands are spliced
    /// rather than nested.
    pub fn or(self, other: Filter) -> Filter {
        Self::combine(self, other, Filter::Or, |f| match f {
            Filter::Or(children) => Ok(children),
            other => Err(other),
        })
    }

    fn combine(
        left: Filter,
        right: Filter,
        wrap: fn(Vec<Filter>) -> Filter,
        unwrap: fn(Filter) -> Result<Vec<Filter>, Filter>,
    ) -> Filter {
        if left.is_empty() {
            return right;
        }
        if right.is_empty() {
            return left;
        }
        let mut children = match unwrap(left) {
            Ok(children) => children,
            Err(leaf) => vec![leaf],
        };
        match unwrap(right) {
            Ok(more) => children.extend(more),
            Err(leaf) => children.push(leaf),
        }
        wrap(children)
    }

    pub(crate) fn condition(property: Property, operator: Operator) -> Filter {
        Filter::Condition { property, operator }
    }
}

/// Conjunction of a filter sequence. Empty input yields [`Filter::Empty`].
pub fn all(filters: impl IntoIterator<Item = Filter>) -> Filter {
    filters
        .into_iter()
        .fold(Filter::Empty, |acc, filter| acc.and(filter))
}

/// Disjunction of a filter sequence. Empty input yields [`Filter::Empty`].
pub fn any_of(filters: impl IntoIterator<Item = Filter>) -> Filter {
    filters
        .into_iter()
        .fold(Filter::Empty, |acc, filter| acc.or(filter))
}

impl Serialize for Filter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Filter::Empty => serializer.serialize_map(Some(0))?.end(),
            Filter::Condition { property, operator } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("property", &property.name)?;
                map.serialize_entry(property.kind.as_str(), operator)?;
                map.end()
            }
            Filter::And(children) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("and", children)?;
                map.end()
            }
            Filter::Or(children) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("or", children)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Checkbox, Number, Select};
    use serde_json::json;

    #[test]
    fn condition_serializes_property_then_operator() {
        let filter = Checkbox::new("Done").checked();
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({"property": "Done", "checkbox": {"equals": true}})
        );
    }

    #[test]
    fn chained_and_flattens_to_one_node() {
        let filter = Checkbox::new("A")
            .checked()
            .and(Checkbox::new("B").checked())
            .and(Checkbox::new("C").checked());
        match &filter {
            Filter::And(children) => assert_eq!(children.len(), 3),
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn and_of_two_and_nodes_splices_children() {
        let left = Checkbox::new("A").checked().and(Checkbox::new("B").checked());
        let right = Checkbox::new("C").checked().and(Checkbox::new("D").checked());
        match left.and(right) {
            Filter::And(children) => assert_eq!(children.len(), 4),
            other => panic!("expected And, got {other:?}"),
        }
    }

    #[test]
    fn or_inside_and_stays_nested() {
        let either = Select::new("Priority")
            .equals("High")
            .or(Select::new("Priority").equals("Urgent"));
        let filter = Checkbox::new("Done").unchecked().and(either);
        let value = serde_json::to_value(&filter).unwrap();
        assert_eq!(
            value,
            json!({"and": [
                {"property": "Done", "checkbox": {"equals": false}},
                {"or": [
                    {"property": "Priority", "select": {"equals": "High"}},
                    {"property": "Priority", "select": {"equals": "Urgent"}},
                ]},
            ]})
        );
    }

    #[test]
    fn empty_is_identity_for_both_combinators() {
        let leaf = Number::new("Count").greater_than(2);
        assert_eq!(Filter::Empty.and(leaf.clone()), leaf);
        assert_eq!(leaf.clone().or(Filter::Empty), leaf);
        assert!(Filter::Empty.and(Filter::Empty).is_empty());
    }

    #[test]
    fn all_and_any_of_collect_sequences() {
        let filter = all([
            Checkbox::new("A").checked(),
            Checkbox::new("B").checked(),
            Checkbox::new("C").checked(),
        ]);
        match filter {
            Filter::And(children) => assert_eq!(children.len(), 3),
            other => panic!("expected And, got {other:?}"),
        }
        assert!(any_of([]).is_empty());
    }
}
