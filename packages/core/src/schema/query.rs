//! Paginated result sets and their lookup indexes.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::SchemaError;

use super::block::Block;
use super::page::Page;
use super::user::User;

/// Objects addressable by id in a result set.
pub trait Identifiable {
    fn object_id(&self) -> Uuid;
}

impl Identifiable for Page {
    fn object_id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for Block {
    fn object_id(&self) -> Uuid {
        self.id
    }
}

impl Identifiable for User {
    fn object_id(&self) -> Uuid {
        self.id()
    }
}

/// Objects with a human-readable title usable as a lookup key.
pub trait Titled {
    /// The display title, or `None` when the object has no usable one.
    fn title_text(&self) -> Option<String>;
}

impl Titled for Page {
    fn title_text(&self) -> Option<String> {
        self.name().ok()
    }
}

impl Titled for User {
    fn title_text(&self) -> Option<String> {
        self.name().map(str::to_owned)
    }
}

/// One page of results from a list-returning endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResult<T> {
    pub object: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub request_id: Option<String>,
}

impl<T: DeserializeOwned> QueryResult<T> {
    /// Decode a result envelope from its wire representation.
    pub fn parse(value: Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(SchemaError::from)
    }
}

impl<T> QueryResult<T> {
    pub fn count(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.results.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.results.get(index)
    }

    /// The first result, or [`SchemaError::EmptyResult`] when there is
    /// none.
    pub fn first(&self) -> Result<&T, SchemaError> {
        self.results.first().ok_or(SchemaError::EmptyResult)
    }
}

impl<T: Identifiable> QueryResult<T> {
    /// Index results by object id.
    pub fn by_id(&self) -> HashMap<Uuid, &T> {
        self.results
            .iter()
            .map(|item| (item.object_id(), item))
            .collect()
    }
}

impl<T: Titled> QueryResult<T> {
    /// Index results by title. Duplicate titles keep the later result;
    /// objects without a usable title are skipped.
    pub fn by_name(&self) -> HashMap<String, &T> {
        self.results
            .iter()
            .filter_map(|item| item.title_text().map(|title| (title, item)))
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a QueryResult<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page_value(id: &str, name: &str) -> Value {
        json!({
            "object": "page",
            "id": id,
            "created_time": "2024-02-01T08:00:00.000Z",
            "last_edited_time": "2024-02-01T08:05:00.000Z",
            "created_by": {"object": "user", "id": "u1"},
            "last_edited_by": {"object": "user", "id": "u1"},
            "cover": null,
            "icon": null,
            "parent": {
                "type": "database_id",
                "database_id": "00000000-0000-0000-0000-000000000011",
            },
            "archived": false,
            "properties": {
                "Name": {
                    "id": "title",
                    "type": "title",
                    "title": [{"type": "text", "text": {"content": name}, "plain_text": name}],
                },
            },
            "url": "https://example.com/p",
        })
    }

    fn result_of(pages: Vec<Value>) -> QueryResult<Page> {
        QueryResult::parse(json!({
            "object": "list",
            "type": "page_or_database",
            "results": pages,
            "next_cursor": null,
            "has_more": false,
        }))
        .unwrap()
    }

    #[test]
    fn first_errors_on_empty_results() {
        let result = result_of(vec![]);
        assert!(matches!(result.first(), Err(SchemaError::EmptyResult)));
    }

    #[test]
    fn by_id_indexes_every_result() {
        let result = result_of(vec![
            page_value("00000000-0000-0000-0000-000000000031", "a"),
            page_value("00000000-0000-0000-0000-000000000032", "b"),
        ]);
        let index = result.by_id();
        assert_eq!(index.len(), 2);
        let id: Uuid = "00000000-0000-0000-0000-000000000032".parse().unwrap();
        assert_eq!(index[&id].name().unwrap(), "b");
    }

    #[test]
    fn by_name_keeps_later_result_on_duplicate_titles() {
        let result = result_of(vec![
            page_value("00000000-0000-0000-0000-000000000031", "Groceries"),
            page_value("00000000-0000-0000-0000-000000000032", "Groceries"),
        ]);
        let index = result.by_name();
        assert_eq!(index.len(), 1);
        assert_eq!(
            index["Groceries"].id.to_string(),
            "00000000-0000-0000-0000-000000000032"
        );
    }

    #[test]
    fn by_name_skips_pages_without_a_title() {
        let mut untitled = page_value("00000000-0000-0000-0000-000000000033", "x");
        untitled["properties"] = json!({});
        let result = result_of(vec![
            untitled,
            page_value("00000000-0000-0000-0000-000000000034", "Kept"),
        ]);
        let index = result.by_name();
        assert_eq!(index.len(), 1);
        assert!(index.contains_key("Kept"));
    }
}
