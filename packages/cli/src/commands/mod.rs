//! Subcommand implementations.

pub mod area;
pub mod daily;
pub mod finance;
pub mod habit;
pub mod note;
pub mod plan;
pub mod resource;
pub mod session;
pub mod task;

use lifedesk_core::schema::Page;

/// Display name for a page, tolerating pages without a usable title.
pub fn page_name(page: &Page) -> String {
    page.name().unwrap_or_else(|_| "(untitled)".to_owned())
}

#[cfg(test)]
pub mod testing {
    //! Shared transport fake and response fixtures for command tests.

    use std::cell::RefCell;

    use lifedesk_core::endpoints::{Transport, TransportError};
    use serde_json::{json, Value};

    use crate::config::{ApiConfig, BlockConfig, Config, DatabaseConfig, IconConfig};

    pub struct Recorded {
        pub method: &'static str,
        pub path: String,
        pub body: Value,
    }

    /// Records requests and replays canned responses in order.
    pub struct FakeTransport {
        pub requests: RefCell<Vec<Recorded>>,
        responses: RefCell<Vec<Value>>,
    }

    impl FakeTransport {
        pub fn new(responses: Vec<Value>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                responses: RefCell::new(responses),
            }
        }

        fn record(&self, method: &'static str, path: &str, body: Value) -> Value {
            self.requests.borrow_mut().push(Recorded {
                method,
                path: path.to_owned(),
                body,
            });
            self.responses.borrow_mut().remove(0)
        }
    }

    impl Transport for FakeTransport {
        fn get(&self, path: &str) -> Result<Value, TransportError> {
            Ok(self.record("GET", path, Value::Null))
        }

        fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
            Ok(self.record("POST", path, body.clone()))
        }

        fn patch(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
            Ok(self.record("PATCH", path, body.clone()))
        }
    }

    /// A config whose database ids end in 01 (daily) through 09, so
    /// request paths identify the endpoint under test.
    pub fn config() -> Config {
        let id = |n: u32| format!("00000000-0000-0000-0000-0000000000{n:02}").parse().unwrap();
        Config {
            api: ApiConfig {
                secret: "secret_test".to_owned(),
                base_url: None,
            },
            databases: DatabaseConfig {
                daily: id(1),
                areas: id(2),
                tasks: id(3),
                sessions: id(4),
                notes: id(5),
                accounts: id(7),
                transactions: id(8),
                resources: id(9),
            },
            blocks: BlockConfig::default(),
            default_icons: IconConfig::default(),
        }
    }

    pub fn list_of(results: Vec<Value>) -> Value {
        json!({
            "object": "list",
            "results": results,
            "next_cursor": null,
            "has_more": false,
        })
    }

    /// A page envelope with the given id and properties.
    pub fn page(id: &str, properties: Value) -> Value {
        json!({
            "object": "page",
            "id": id,
            "created_time": "2024-02-01T08:00:00.000Z",
            "last_edited_time": "2024-02-01T08:00:00.000Z",
            "created_by": {"object": "user", "id": "u1"},
            "last_edited_by": {"object": "user", "id": "u1"},
            "cover": null,
            "icon": null,
            "parent": {
                "type": "database_id",
                "database_id": "00000000-0000-0000-0000-000000000001",
            },
            "archived": false,
            "properties": properties,
            "url": "https://example.com/p",
        })
    }

    /// A title property value named `Name`.
    pub fn titled(name: &str) -> Value {
        json!({
            "Name": {
                "id": "title",
                "type": "title",
                "title": [{"type": "text", "text": {"content": name}, "plain_text": name}],
            },
        })
    }
}
