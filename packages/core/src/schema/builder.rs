//! Encode-side block factories.
//!
//! Each factory takes the content that kind cannot exist without and
//! returns the payload struct; optional attributes chain through the
//! payload's setters and the result converts into [`InnerBlock`] with
//! `into()`.
//!
//! # Examples
//!
//! ```
//! use lifedesk_core::schema::builder;
//! use lifedesk_core::schema::InnerBlock;
//!
//! let children: Vec<InnerBlock> = vec![
//!     builder::h2("Plan").into(),
//!     builder::todo("Buy milk").into(),
//!     builder::bullet("call the bank").into(),
//! ];
//! ```

use super::block::{
    Bookmark, Breadcrumb, BulletItem, Callout, Code, Column, ColumnList, Divider, Embed, Equation,
    Heading1, Heading2, Heading3, InnerBlock, NumberedItem, Paragraph, Quote, Synced, Table,
    TableRow, Toc, TodoItem, Toggle,
};
use super::object::{Color, ExternalLink, FileRef, FileResource, Icon};
use super::rich_text::{RichText, RichTextFragment};

/// Default icon on callouts built without an explicit one.
const CALLOUT_ICON: &str = "\u{2764}\u{fe0f}";

/// Join several strings into one fragment sequence.
pub fn rich<I, T>(parts: I) -> RichText
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    RichText(parts.into_iter().map(RichTextFragment::text).collect())
}

/// An emoji icon.
pub fn emoji(emoji: impl Into<String>) -> Icon {
    Icon::Emoji {
        emoji: emoji.into(),
    }
}

/// An externally hosted file reference, for covers and icons.
pub fn external_file(url: impl Into<String>) -> FileRef {
    FileRef::External {
        external: ExternalLink { url: url.into() },
    }
}

pub fn paragraph(text: impl Into<RichText>) -> Paragraph {
    Paragraph {
        rich_text: text.into(),
        color: Color::Default,
        children: Vec::new(),
    }
}

pub fn bullet(text: impl Into<RichText>) -> BulletItem {
    BulletItem {
        rich_text: text.into(),
        color: Color::Default,
        children: Vec::new(),
    }
}

pub fn numbered(text: impl Into<RichText>) -> NumberedItem {
    NumberedItem {
        rich_text: text.into(),
        color: Color::Default,
        children: Vec::new(),
    }
}

pub fn quote(text: impl Into<RichText>) -> Quote {
    Quote {
        rich_text: text.into(),
        color: Color::Default,
        children: Vec::new(),
    }
}

pub fn toggle(text: impl Into<RichText>) -> Toggle {
    Toggle {
        rich_text: text.into(),
        color: Color::Default,
        children: Vec::new(),
    }
}

/// An unchecked to-do item.
pub fn todo(text: impl Into<RichText>) -> TodoItem {
    TodoItem {
        rich_text: text.into(),
        color: Color::Default,
        checked: Some(false),
        children: Vec::new(),
    }
}

pub fn callout(text: impl Into<RichText>) -> Callout {
    Callout {
        rich_text: text.into(),
        color: Color::Default,
        icon: Some(emoji(CALLOUT_ICON)),
        children: Vec::new(),
    }
}

pub fn code(text: impl Into<RichText>, language: impl Into<String>) -> Code {
    Code {
        caption: RichText::default(),
        rich_text: text.into(),
        language: language.into(),
    }
}

pub fn h1(text: impl Into<RichText>) -> Heading1 {
    Heading1 {
        rich_text: text.into(),
        color: Color::Default,
        is_toggleable: false,
    }
}

pub fn h2(text: impl Into<RichText>) -> Heading2 {
    Heading2 {
        rich_text: text.into(),
        color: Color::Default,
        is_toggleable: false,
    }
}

pub fn h3(text: impl Into<RichText>) -> Heading3 {
    Heading3 {
        rich_text: text.into(),
        color: Color::Default,
        is_toggleable: false,
    }
}

pub fn bookmark(url: impl Into<String>) -> Bookmark {
    Bookmark {
        caption: RichText::default(),
        url: url.into(),
    }
}

pub fn embed(url: impl Into<String>) -> Embed {
    Embed { url: url.into() }
}

pub fn equation(expression: impl Into<String>) -> Equation {
    Equation {
        expression: expression.into(),
    }
}

pub fn divider() -> Divider {
    Divider {}
}

pub fn breadcrumb() -> Breadcrumb {
    Breadcrumb {}
}

pub fn toc() -> Toc {
    Toc {
        color: Color::Default,
    }
}

pub fn table(width: u32) -> Table {
    Table {
        table_width: width,
        has_column_header: false,
        has_row_header: false,
        children: Vec::new(),
    }
}

pub fn table_row<I, T>(cells: I) -> TableRow
where
    I: IntoIterator<Item = T>,
    T: Into<RichText>,
{
    TableRow {
        cells: cells.into_iter().map(Into::into).collect(),
    }
}

pub fn column(children: Vec<InnerBlock>) -> Column {
    Column { children }
}

pub fn column_list(columns: Vec<Column>) -> ColumnList {
    ColumnList {
        children: columns.into_iter().map(InnerBlock::Column).collect(),
    }
}

pub fn synced(children: Vec<InnerBlock>) -> Synced {
    Synced {
        synced_from: None,
        children,
    }
}

/// The file-like kind a [`FileBlock`] will convert into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileKind {
    File,
    Image,
    Video,
    Pdf,
}

/// A file-like block under construction. Converts into [`InnerBlock`]
/// with the inline `type` key the protocol requires for these kinds.
#[derive(Debug, Clone, PartialEq)]
pub struct FileBlock {
    kind: FileKind,
    name: Option<String>,
    caption: RichText,
    url: String,
}

impl FileBlock {
    pub fn caption(mut self, caption: impl Into<RichText>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl From<FileBlock> for InnerBlock {
    fn from(block: FileBlock) -> Self {
        let resource = FileResource::External {
            name: block.name,
            caption: block.caption,
            external: ExternalLink { url: block.url },
        };
        match block.kind {
            FileKind::File => InnerBlock::File(resource),
            FileKind::Image => InnerBlock::Image(resource),
            FileKind::Video => InnerBlock::Video(resource),
            FileKind::Pdf => InnerBlock::Pdf(resource),
        }
    }
}

fn file_block(kind: FileKind, url: impl Into<String>) -> FileBlock {
    FileBlock {
        kind,
        name: None,
        caption: RichText::default(),
        url: url.into(),
    }
}

/// A named external file attachment.
pub fn file(name: impl Into<String>, url: impl Into<String>) -> FileBlock {
    file_block(FileKind::File, url).name(name)
}

pub fn image(url: impl Into<String>) -> FileBlock {
    file_block(FileKind::Image, url)
}

pub fn video(url: impl Into<String>) -> FileBlock {
    file_block(FileKind::Video, url)
}

pub fn pdf(url: impl Into<String>) -> FileBlock {
    file_block(FileKind::Pdf, url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn callout_defaults_to_heart_icon() {
        let block: InnerBlock = callout("remember").into();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["callout"]["icon"], json!({"type": "emoji", "emoji": "❤️"}));
    }

    #[test]
    fn callout_icon_can_be_overridden() {
        let block: InnerBlock = callout("remember").icon(emoji("🔥")).into();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["callout"]["icon"]["emoji"], json!("🔥"));
    }

    #[test]
    fn heading_serializes_with_toggle_flag() {
        let block: InnerBlock = h1("Week 5").toggleable(true).into();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({"heading_1": {
                "rich_text": [{"text": {"content": "Week 5"}}],
                "color": "default",
                "is_toggleable": true,
            }})
        );
    }

    #[test]
    fn rich_joins_parts_into_fragments() {
        let text = rich(["a", "b"]);
        let value = serde_json::to_value(&text).unwrap();
        assert_eq!(
            value,
            json!([{"text": {"content": "a"}}, {"text": {"content": "b"}}])
        );
    }

    #[test]
    fn named_file_carries_name_and_inline_type() {
        let block: InnerBlock = file("notes.pdf", "https://example.com/notes.pdf").into();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "file",
                "file": {
                    "type": "external",
                    "name": "notes.pdf",
                    "caption": [],
                    "external": {"url": "https://example.com/notes.pdf"},
                },
            })
        );
    }

    #[test]
    fn table_rows_nest_as_table_row_children() {
        let block: InnerBlock = table(2)
            .column_header(true)
            .rows(vec![table_row(["Habit", "Done"]), table_row(["Gym", "yes"])])
            .into();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["table"]["table_width"], json!(2));
        assert_eq!(value["table"]["has_column_header"], json!(true));
        assert_eq!(
            value["table"]["children"][0]["table_row"]["cells"][0],
            json!([{"text": {"content": "Habit"}}])
        );
    }
}
