//! Decoders for the backend object graph and encode-side block factories.
//!
//! Every decoded family is a closed tagged union keyed on the `type`
//! discriminator. Unknown discriminators fail decoding with
//! [`crate::SchemaError::Validation`]; there is no catch-all variant.
//!
//! Object decoding happens through the `parse` constructors
//! ([`Page::parse`], [`Database::parse`], [`Block::parse`],
//! [`QueryResult::parse`]), which wrap serde errors into the crate error
//! taxonomy.

pub mod block;
pub mod builder;
pub mod database;
pub mod object;
pub mod page;
pub mod query;
pub mod rich_text;
pub mod user;

pub use block::{Block, BlockContent, InnerBlock};
pub use database::{Database, DatabaseProperty};
pub use object::{
    Color, DateObject, DateOrDateTime, ExternalLink, FileRef, FileResource, Icon, IdObject,
    InternalLink, Parent, PartialUser, SelectOption, UniqueIdObject,
};
pub use page::{FormulaValue, Page, PropertyValue};
pub use query::{Identifiable, QueryResult, Titled};
pub use rich_text::{Annotations, RichText, RichTextFragment};
pub use user::User;
