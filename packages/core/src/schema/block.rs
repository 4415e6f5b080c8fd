//! Block payloads, the decoded [`Block`] record, and the encode-side
//! [`InnerBlock`] union.
//!
//! Decoded blocks are internally tagged: the envelope carries a `type`
//! discriminator and the payload sits under a key of the same name. Child
//! blocks submitted on creation use the payload-key-only shape, except for
//! the file-like kinds (`file`, `image`, `video`, `pdf`), which the
//! protocol requires to carry an explicit `type` key inline. That
//! asymmetry is part of the wire contract and is preserved exactly.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::error::SchemaError;

use super::object::{Color, ExternalLink, FileResource, Icon, Parent, PartialUser};
use super::rich_text::RichText;

/// A bookmark of an external URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(default)]
    pub caption: RichText,
    pub url: String,
}

impl Bookmark {
    pub fn caption(mut self, caption: impl Into<RichText>) -> Self {
        self.caption = caption.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Breadcrumb {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulletItem {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

impl BulletItem {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn children(mut self, children: Vec<InnerBlock>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Callout {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub icon: Option<Icon>,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

impl Callout {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn children(mut self, children: Vec<InnerBlock>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildDatabase {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildPage {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub caption: RichText,
    pub rich_text: RichText,
    pub language: String,
}

impl Code {
    pub fn caption(mut self, caption: impl Into<RichText>) -> Self {
        self.caption = caption.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ColumnList {
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Divider {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embed {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub expression: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading1 {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub is_toggleable: bool,
}

impl Heading1 {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn toggleable(mut self, toggleable: bool) -> Self {
        self.is_toggleable = toggleable;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading2 {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub is_toggleable: bool,
}

impl Heading2 {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn toggleable(mut self, toggleable: bool) -> Self {
        self.is_toggleable = toggleable;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading3 {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub is_toggleable: bool,
}

impl Heading3 {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn toggleable(mut self, toggleable: bool) -> Self {
        self.is_toggleable = toggleable;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumberedItem {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

impl NumberedItem {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn children(mut self, children: Vec<InnerBlock>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

impl Paragraph {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn children(mut self, children: Vec<InnerBlock>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

impl Quote {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn children(mut self, children: Vec<InnerBlock>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Synced {
    #[serde(default)]
    pub synced_from: Option<Value>,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub table_width: u32,
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

impl Table {
    pub fn column_header(mut self, has: bool) -> Self {
        self.has_column_header = has;
        self
    }

    pub fn row_header(mut self, has: bool) -> Self {
        self.has_row_header = has;
        self
    }

    pub fn rows(mut self, rows: Vec<TableRow>) -> Self {
        self.children = rows.into_iter().map(InnerBlock::TableRow).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<RichText>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Toc {
    #[serde(default)]
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoItem {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    pub checked: Option<bool>,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

impl TodoItem {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    pub fn children(mut self, children: Vec<InnerBlock>) -> Self {
        self.children = children;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toggle {
    pub rich_text: RichText,
    #[serde(default)]
    pub color: Color,
    #[serde(default)]
    pub children: Vec<InnerBlock>,
}

impl Toggle {
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn children(mut self, children: Vec<InnerBlock>) -> Self {
        self.children = children;
        self
    }
}

/// The typed payload of a decoded block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockContent {
    Bookmark { bookmark: Bookmark },
    Breadcrumb { breadcrumb: Breadcrumb },
    BulletedListItem { bulleted_list_item: BulletItem },
    Callout { callout: Callout },
    ChildDatabase { child_database: ChildDatabase },
    ChildPage { child_page: ChildPage },
    Code { code: Code },
    Column { column: Column },
    ColumnList { column_list: ColumnList },
    Divider { divider: Divider },
    Embed { embed: Embed },
    Equation { equation: Equation },
    File { file: FileResource },
    #[serde(rename = "heading_1")]
    Heading1 { heading_1: Heading1 },
    #[serde(rename = "heading_2")]
    Heading2 { heading_2: Heading2 },
    #[serde(rename = "heading_3")]
    Heading3 { heading_3: Heading3 },
    Image { image: FileResource },
    LinkPreview { link_preview: ExternalLink },
    NumberedListItem { numbered_list_item: NumberedItem },
    Paragraph { paragraph: Paragraph },
    Pdf { pdf: FileResource },
    Quote { quote: Quote },
    SyncedBlock { synced_block: Synced },
    Table { table: Table },
    TableRow { table_row: TableRow },
    TableOfContents { table_of_contents: Toc },
    ToDo { to_do: TodoItem },
    Toggle { toggle: Toggle },
    Video { video: FileResource },
}

impl BlockContent {
    /// The wire discriminator of this payload.
    pub fn kind(&self) -> &'static str {
        match self {
            BlockContent::Bookmark { .. } => "bookmark",
            BlockContent::Breadcrumb { .. } => "breadcrumb",
            BlockContent::BulletedListItem { .. } => "bulleted_list_item",
            BlockContent::Callout { .. } => "callout",
            BlockContent::ChildDatabase { .. } => "child_database",
            BlockContent::ChildPage { .. } => "child_page",
            BlockContent::Code { .. } => "code",
            BlockContent::Column { .. } => "column",
            BlockContent::ColumnList { .. } => "column_list",
            BlockContent::Divider { .. } => "divider",
            BlockContent::Embed { .. } => "embed",
            BlockContent::Equation { .. } => "equation",
            BlockContent::File { .. } => "file",
            BlockContent::Heading1 { .. } => "heading_1",
            BlockContent::Heading2 { .. } => "heading_2",
            BlockContent::Heading3 { .. } => "heading_3",
            BlockContent::Image { .. } => "image",
            BlockContent::LinkPreview { .. } => "link_preview",
            BlockContent::NumberedListItem { .. } => "numbered_list_item",
            BlockContent::Paragraph { .. } => "paragraph",
            BlockContent::Pdf { .. } => "pdf",
            BlockContent::Quote { .. } => "quote",
            BlockContent::SyncedBlock { .. } => "synced_block",
            BlockContent::Table { .. } => "table",
            BlockContent::TableRow { .. } => "table_row",
            BlockContent::TableOfContents { .. } => "table_of_contents",
            BlockContent::ToDo { .. } => "to_do",
            BlockContent::Toggle { .. } => "toggle",
            BlockContent::Video { .. } => "video",
        }
    }
}

/// A decoded block record: audit envelope plus typed payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Block {
    pub object: String,
    pub id: Uuid,
    pub parent: Parent,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    pub created_by: PartialUser,
    pub last_edited_by: PartialUser,
    pub has_children: bool,
    pub archived: bool,
    #[serde(flatten)]
    pub content: BlockContent,
}

impl Block {
    /// Decode a block from its wire representation.
    pub fn parse(value: Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(SchemaError::from)
    }
}

/// A block in creation position, nested under a parent or another block.
///
/// Serializes as `{"<kind>": <payload>}`; the file-like variants
/// additionally carry `"type": "<kind>"` inline.
#[derive(Debug, Clone, PartialEq)]
pub enum InnerBlock {
    Bookmark(Bookmark),
    Breadcrumb(Breadcrumb),
    BulletedListItem(BulletItem),
    Callout(Callout),
    Code(Code),
    Column(Column),
    ColumnList(ColumnList),
    Divider(Divider),
    Embed(Embed),
    Equation(Equation),
    File(FileResource),
    Heading1(Heading1),
    Heading2(Heading2),
    Heading3(Heading3),
    Image(FileResource),
    NumberedListItem(NumberedItem),
    Paragraph(Paragraph),
    Pdf(FileResource),
    Quote(Quote),
    SyncedBlock(Synced),
    Table(Table),
    TableRow(TableRow),
    TableOfContents(Toc),
    ToDo(TodoItem),
    Toggle(Toggle),
    Video(FileResource),
}

impl InnerBlock {
    /// The wire discriminator of this payload.
    pub fn kind(&self) -> &'static str {
        match self {
            InnerBlock::Bookmark(_) => "bookmark",
            InnerBlock::Breadcrumb(_) => "breadcrumb",
            InnerBlock::BulletedListItem(_) => "bulleted_list_item",
            InnerBlock::Callout(_) => "callout",
            InnerBlock::Code(_) => "code",
            InnerBlock::Column(_) => "column",
            InnerBlock::ColumnList(_) => "column_list",
            InnerBlock::Divider(_) => "divider",
            InnerBlock::Embed(_) => "embed",
            InnerBlock::Equation(_) => "equation",
            InnerBlock::File(_) => "file",
            InnerBlock::Heading1(_) => "heading_1",
            InnerBlock::Heading2(_) => "heading_2",
            InnerBlock::Heading3(_) => "heading_3",
            InnerBlock::Image(_) => "image",
            InnerBlock::NumberedListItem(_) => "numbered_list_item",
            InnerBlock::Paragraph(_) => "paragraph",
            InnerBlock::Pdf(_) => "pdf",
            InnerBlock::Quote(_) => "quote",
            InnerBlock::SyncedBlock(_) => "synced_block",
            InnerBlock::Table(_) => "table",
            InnerBlock::TableRow(_) => "table_row",
            InnerBlock::TableOfContents(_) => "table_of_contents",
            InnerBlock::ToDo(_) => "to_do",
            InnerBlock::Toggle(_) => "toggle",
            InnerBlock::Video(_) => "video",
        }
    }

    fn is_file_like(&self) -> bool {
        matches!(
            self,
            InnerBlock::File(_) | InnerBlock::Image(_) | InnerBlock::Video(_) | InnerBlock::Pdf(_)
        )
    }
}

impl Serialize for InnerBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        if self.is_file_like() {
            map.serialize_entry("type", self.kind())?;
        }
        match self {
            InnerBlock::Bookmark(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Breadcrumb(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::BulletedListItem(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Callout(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Code(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Column(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::ColumnList(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Divider(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Embed(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Equation(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::File(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Heading1(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Heading2(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Heading3(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Image(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::NumberedListItem(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Paragraph(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Pdf(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Quote(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::SyncedBlock(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Table(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::TableRow(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::TableOfContents(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::ToDo(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Toggle(payload) => map.serialize_entry(self.kind(), payload)?,
            InnerBlock::Video(payload) => map.serialize_entry(self.kind(), payload)?,
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for InnerBlock {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let entries = value
            .as_object()
            .ok_or_else(|| de::Error::custom("child block must be an object"))?;
        let kind = entries
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .or_else(|| entries.keys().find(|key| *key != "type").cloned())
            .ok_or_else(|| de::Error::custom("child block carries no payload"))?;
        let payload = entries
            .get(&kind)
            .cloned()
            .ok_or_else(|| de::Error::custom(format!("child block missing '{kind}' payload")))?;

        fn decode<'de, D, T>(payload: Value) -> Result<T, D::Error>
        where
            D: Deserializer<'de>,
            T: serde::de::DeserializeOwned,
        {
            serde_json::from_value(payload).map_err(de::Error::custom)
        }

        match kind.as_str() {
            "bookmark" => decode::<D, _>(payload).map(InnerBlock::Bookmark),
            "breadcrumb" => decode::<D, _>(payload).map(InnerBlock::Breadcrumb),
            "bulleted_list_item" => decode::<D, _>(payload).map(InnerBlock::BulletedListItem),
            "callout" => decode::<D, _>(payload).map(InnerBlock::Callout),
            "code" => decode::<D, _>(payload).map(InnerBlock::Code),
            "column" => decode::<D, _>(payload).map(InnerBlock::Column),
            "column_list" => decode::<D, _>(payload).map(InnerBlock::ColumnList),
            "divider" => decode::<D, _>(payload).map(InnerBlock::Divider),
            "embed" => decode::<D, _>(payload).map(InnerBlock::Embed),
            "equation" => decode::<D, _>(payload).map(InnerBlock::Equation),
            "file" => decode::<D, _>(payload).map(InnerBlock::File),
            "heading_1" => decode::<D, _>(payload).map(InnerBlock::Heading1),
            "heading_2" => decode::<D, _>(payload).map(InnerBlock::Heading2),
            "heading_3" => decode::<D, _>(payload).map(InnerBlock::Heading3),
            "image" => decode::<D, _>(payload).map(InnerBlock::Image),
            "numbered_list_item" => decode::<D, _>(payload).map(InnerBlock::NumberedListItem),
            "paragraph" => decode::<D, _>(payload).map(InnerBlock::Paragraph),
            "pdf" => decode::<D, _>(payload).map(InnerBlock::Pdf),
            "quote" => decode::<D, _>(payload).map(InnerBlock::Quote),
            "synced_block" => decode::<D, _>(payload).map(InnerBlock::SyncedBlock),
            "table" => decode::<D, _>(payload).map(InnerBlock::Table),
            "table_row" => decode::<D, _>(payload).map(InnerBlock::TableRow),
            "table_of_contents" => decode::<D, _>(payload).map(InnerBlock::TableOfContents),
            "to_do" => decode::<D, _>(payload).map(InnerBlock::ToDo),
            "toggle" => decode::<D, _>(payload).map(InnerBlock::Toggle),
            "video" => decode::<D, _>(payload).map(InnerBlock::Video),
            other => Err(de::Error::custom(format!("unknown block type '{other}'"))),
        }
    }
}

impl From<Bookmark> for InnerBlock {
    fn from(payload: Bookmark) -> Self {
        InnerBlock::Bookmark(payload)
    }
}

impl From<Breadcrumb> for InnerBlock {
    fn from(payload: Breadcrumb) -> Self {
        InnerBlock::Breadcrumb(payload)
    }
}

impl From<BulletItem> for InnerBlock {
    fn from(payload: BulletItem) -> Self {
        InnerBlock::BulletedListItem(payload)
    }
}

impl From<Callout> for InnerBlock {
    fn from(payload: Callout) -> Self {
        InnerBlock::Callout(payload)
    }
}

impl From<Code> for InnerBlock {
    fn from(payload: Code) -> Self {
        InnerBlock::Code(payload)
    }
}

impl From<Column> for InnerBlock {
    fn from(payload: Column) -> Self {
        InnerBlock::Column(payload)
    }
}

impl From<ColumnList> for InnerBlock {
    fn from(payload: ColumnList) -> Self {
        InnerBlock::ColumnList(payload)
    }
}

impl From<Divider> for InnerBlock {
    fn from(payload: Divider) -> Self {
        InnerBlock::Divider(payload)
    }
}

impl From<Embed> for InnerBlock {
    fn from(payload: Embed) -> Self {
        InnerBlock::Embed(payload)
    }
}

impl From<Equation> for InnerBlock {
    fn from(payload: Equation) -> Self {
        InnerBlock::Equation(payload)
    }
}

impl From<Heading1> for InnerBlock {
    fn from(payload: Heading1) -> Self {
        InnerBlock::Heading1(payload)
    }
}

impl From<Heading2> for InnerBlock {
    fn from(payload: Heading2) -> Self {
        InnerBlock::Heading2(payload)
    }
}

impl From<Heading3> for InnerBlock {
    fn from(payload: Heading3) -> Self {
        InnerBlock::Heading3(payload)
    }
}

impl From<NumberedItem> for InnerBlock {
    fn from(payload: NumberedItem) -> Self {
        InnerBlock::NumberedListItem(payload)
    }
}

impl From<Paragraph> for InnerBlock {
    fn from(payload: Paragraph) -> Self {
        InnerBlock::Paragraph(payload)
    }
}

impl From<Quote> for InnerBlock {
    fn from(payload: Quote) -> Self {
        InnerBlock::Quote(payload)
    }
}

impl From<Synced> for InnerBlock {
    fn from(payload: Synced) -> Self {
        InnerBlock::SyncedBlock(payload)
    }
}

impl From<Table> for InnerBlock {
    fn from(payload: Table) -> Self {
        InnerBlock::Table(payload)
    }
}

impl From<TableRow> for InnerBlock {
    fn from(payload: TableRow) -> Self {
        InnerBlock::TableRow(payload)
    }
}

impl From<Toc> for InnerBlock {
    fn from(payload: Toc) -> Self {
        InnerBlock::TableOfContents(payload)
    }
}

impl From<TodoItem> for InnerBlock {
    fn from(payload: TodoItem) -> Self {
        InnerBlock::ToDo(payload)
    }
}

impl From<Toggle> for InnerBlock {
    fn from(payload: Toggle) -> Self {
        InnerBlock::Toggle(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::builder;
    use serde_json::json;

    fn sample_block(kind_fields: Value) -> Value {
        let mut block = json!({
            "object": "block",
            "id": "00000000-0000-0000-0000-00000000000a",
            "parent": {"type": "page_id", "page_id": "00000000-0000-0000-0000-00000000000b"},
            "created_time": "2024-02-01T08:00:00.000Z",
            "last_edited_time": "2024-02-01T08:05:00.000Z",
            "created_by": {"object": "user", "id": "u1"},
            "last_edited_by": {"object": "user", "id": "u1"},
            "has_children": false,
            "archived": false,
        });
        block
            .as_object_mut()
            .unwrap()
            .extend(kind_fields.as_object().unwrap().clone());
        block
    }

    #[test]
    fn paragraph_block_decodes_through_discriminator() {
        let block = Block::parse(sample_block(json!({
            "type": "paragraph",
            "paragraph": {
                "rich_text": [{"type": "text", "text": {"content": "hi"}, "plain_text": "hi"}],
                "color": "default",
            },
        })))
        .unwrap();
        assert_eq!(block.content.kind(), "paragraph");
        match block.content {
            BlockContent::Paragraph { paragraph } => {
                assert_eq!(paragraph.rich_text.plain_text(), "hi");
                assert!(paragraph.children.is_empty());
            }
            other => panic!("expected paragraph, got {other:?}"),
        }
    }

    #[test]
    fn unknown_block_kind_fails_decoding() {
        let result = Block::parse(sample_block(json!({
            "type": "hologram",
            "hologram": {},
        })));
        assert!(matches!(result, Err(SchemaError::Validation(_))));
    }

    #[test]
    fn todo_child_serializes_with_payload_key_only() {
        let block: InnerBlock = builder::todo("Buy milk").into();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({"to_do": {
                "rich_text": [{"text": {"content": "Buy milk"}}],
                "color": "default",
                "checked": false,
                "children": [],
            }})
        );
    }

    #[test]
    fn file_like_children_carry_inline_type() {
        let block: InnerBlock = builder::image("https://example.com/a.png").into();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "image",
                "image": {
                    "type": "external",
                    "caption": [],
                    "external": {"url": "https://example.com/a.png"},
                },
            })
        );
    }

    #[test]
    fn child_decoding_accepts_both_shapes() {
        let bare: InnerBlock = serde_json::from_value(json!({
            "paragraph": {"rich_text": [{"text": {"content": "x"}}], "color": "default"},
        }))
        .unwrap();
        assert_eq!(bare.kind(), "paragraph");

        let tagged: InnerBlock = serde_json::from_value(json!({
            "type": "image",
            "image": {
                "type": "external",
                "caption": [],
                "external": {"url": "https://example.com/a.png"},
            },
        }))
        .unwrap();
        assert_eq!(tagged.kind(), "image");
    }

    #[test]
    fn nested_children_round_trip() {
        let block: InnerBlock = builder::toggle("Details")
            .children(vec![builder::bullet("one").into(), builder::bullet("two").into()])
            .into();
        let value = serde_json::to_value(&block).unwrap();
        let decoded: InnerBlock = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, block);
    }
}
