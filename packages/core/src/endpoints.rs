//! Request/response shaping over a pluggable transport.
//!
//! The core never performs I/O. [`Transport`] abstracts the three HTTP
//! verbs the protocol uses; endpoint types build request bodies from the
//! typed builders and decode responses through the schema parsers.

use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::error::SchemaError;
use crate::filter::{Assigns, Filter, Sort};
use crate::schema::{Block, Database, FileRef, Icon, InnerBlock, Page, QueryResult};

/// A transport-level failure: connectivity, authentication, or a non-2xx
/// response.
#[derive(Error, Debug)]
#[error("Transport error: {message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The verbs an endpoint needs. Paths are relative to the API root;
/// responses are the raw JSON body.
pub trait Transport {
    fn get(&self, path: &str) -> Result<Value, TransportError>;
    fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
    fn patch(&self, path: &str, body: &Value) -> Result<Value, TransportError>;
}

/// Any failure of an endpoint operation.
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl From<serde_json::Error> for EndpointError {
    fn from(err: serde_json::Error) -> Self {
        EndpointError::Schema(err.into())
    }
}

/// Operations on one database: query, schema introspection, page creation
/// and update.
pub struct DatabaseEndpoint<'a, T: Transport> {
    transport: &'a T,
    id: Uuid,
    default_icon: Option<String>,
}

impl<'a, T: Transport> DatabaseEndpoint<'a, T> {
    pub fn new(transport: &'a T, id: Uuid) -> Self {
        Self {
            transport,
            id,
            default_icon: None,
        }
    }

    /// Pages created without an explicit icon get this external file URL.
    pub fn with_default_icon(mut self, url: Option<String>) -> Self {
        self.default_icon = url;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Run a filtered, sorted query. A [`Filter::Empty`] (or `None`)
    /// filter and an empty sort list are omitted from the request body.
    pub fn query(
        &self,
        filter: Option<Filter>,
        sorts: &[Sort],
    ) -> Result<QueryResult<Page>, EndpointError> {
        let mut body = serde_json::Map::new();
        if let Some(filter) = filter {
            if !filter.is_empty() {
                body.insert("filter".to_owned(), serde_json::to_value(&filter)?);
            }
        }
        if !sorts.is_empty() {
            body.insert("sorts".to_owned(), serde_json::to_value(sorts)?);
        }
        let body = Value::Object(body);
        debug!(database = %self.id, %body, "query");
        let response = self
            .transport
            .post(&format!("databases/{}/query", self.id), &body)?;
        Ok(QueryResult::parse(response)?)
    }

    /// Fetch the database record, including its column configuration.
    pub fn schema(&self) -> Result<Database, EndpointError> {
        debug!(database = %self.id, "schema");
        let response = self.transport.get(&format!("databases/{}", self.id))?;
        Ok(Database::parse(response)?)
    }

    /// Create a page in this database.
    pub fn create(
        &self,
        properties: impl Into<Assigns>,
        children: Vec<InnerBlock>,
        icon: Option<Icon>,
        cover: Option<FileRef>,
    ) -> Result<Page, EndpointError> {
        let properties = properties.into();
        let mut body = json!({
            "parent": {"database_id": self.id},
            "properties": properties,
            "children": children,
        });
        let icon = icon.or_else(|| {
            self.default_icon.as_ref().map(|url| Icon::External {
                external: crate::schema::ExternalLink { url: url.clone() },
            })
        });
        if let Some(icon) = icon {
            body["icon"] = serde_json::to_value(&icon)?;
        }
        if let Some(cover) = cover {
            body["cover"] = serde_json::to_value(&cover)?;
        }
        debug!(database = %self.id, %body, "create page");
        let response = self.transport.post("pages", &body)?;
        Ok(Page::parse(response)?)
    }

    /// Update properties of an existing page.
    pub fn update(
        &self,
        page_id: Uuid,
        properties: impl Into<Assigns>,
    ) -> Result<Page, EndpointError> {
        let properties = properties.into();
        let body = json!({"properties": properties});
        debug!(page = %page_id, %body, "update page");
        let response = self
            .transport
            .patch(&format!("pages/{page_id}"), &body)?;
        Ok(Page::parse(response)?)
    }
}

/// Operations anchored at one block.
pub struct BlockEndpoint<'a, T: Transport> {
    transport: &'a T,
    id: Uuid,
}

impl<'a, T: Transport> BlockEndpoint<'a, T> {
    pub fn new(transport: &'a T, id: Uuid) -> Self {
        Self { transport, id }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Fetch this block.
    pub fn get(&self) -> Result<Block, EndpointError> {
        debug!(block = %self.id, "get block");
        let response = self.transport.get(&format!("blocks/{}", self.id))?;
        Ok(Block::parse(response)?)
    }

    /// Append children to this block's parent, positioned directly after
    /// this block. The anchor's parent must be addressable by id.
    pub fn append_after(
        &self,
        children: Vec<InnerBlock>,
    ) -> Result<QueryResult<Block>, EndpointError> {
        let anchor = self.get()?;
        let parent_id = anchor.parent.id().ok_or_else(|| {
            SchemaError::validation("anchor block has a workspace parent, cannot append")
        })?;
        let body = json!({"children": children, "after": self.id});
        debug!(block = %self.id, parent = %parent_id, "append after");
        let response = self
            .transport
            .patch(&format!("blocks/{parent_id}/children"), &body)?;
        Ok(QueryResult::parse(response)?)
    }
}
