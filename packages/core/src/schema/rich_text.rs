//! Rich text fragments and the `RichText` sequence.
//!
//! Decoding and encoding are deliberately asymmetric: decoded fragments
//! carry a `type` discriminator plus annotation metadata, while fragments
//! built locally serialize to the minimal creation shape
//! (`{"text": {"content": ...}}`) without a discriminator. The custom
//! `Serialize` impl below implements the encode side for both.

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::object::{Color, DateObject, ExternalLink, IdObject, PartialUser};

/// Styling flags attached to a decoded fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// The `text` payload of a text fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ExternalLink>,
}

/// An inline equation expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationExpr {
    pub expression: String,
}

/// An inline mention payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Mention {
    Database { database: IdObject },
    Date { date: DateObject },
    LinkPreview { link: ExternalLink },
    Page { page: IdObject },
    TemplateMention { template_mention: serde_json::Value },
    User { user: PartialUser },
}

/// One fragment of rich text.
///
/// Annotation fields are optional so that locally built fragments can omit
/// them; the backend always fills them in on decoded content.
#[derive(Debug, Clone, PartialEq)]
pub enum RichTextFragment {
    Text {
        text: TextSpan,
        annotations: Option<Annotations>,
        plain_text: Option<String>,
        href: Option<String>,
    },
    Mention {
        mention: Mention,
        annotations: Option<Annotations>,
        plain_text: String,
        href: Option<String>,
    },
    Equation {
        equation: EquationExpr,
        annotations: Option<Annotations>,
        plain_text: String,
        href: Option<String>,
    },
}

impl RichTextFragment {
    /// A bare text fragment in the creation shape.
    pub fn text(content: impl Into<String>) -> Self {
        RichTextFragment::Text {
            text: TextSpan {
                content: content.into(),
                link: None,
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// The display text of this fragment.
    pub fn plain_text(&self) -> &str {
        match self {
            RichTextFragment::Text {
                plain_text, text, ..
            } => plain_text.as_deref().unwrap_or(&text.content),
            RichTextFragment::Mention { plain_text, .. } => plain_text,
            RichTextFragment::Equation { plain_text, .. } => plain_text,
        }
    }
}

// Fragments decode from both the backend shape (explicit "type" key) and
// the creation shape (payload key only).
impl<'de> Deserialize<'de> for RichTextFragment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let entries = value
            .as_object()
            .ok_or_else(|| de::Error::custom("rich text fragment must be an object"))?;
        let kind = entries
            .get("type")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .or_else(|| {
                ["text", "mention", "equation"]
                    .iter()
                    .find(|key| entries.contains_key(**key))
                    .map(|key| (*key).to_owned())
            })
            .ok_or_else(|| de::Error::custom("rich text fragment carries no payload"))?;

        fn field<'de, D, T>(entries: &serde_json::Map<String, Value>, key: &str) -> Result<Option<T>, D::Error>
        where
            D: Deserializer<'de>,
            T: serde::de::DeserializeOwned,
        {
            match entries.get(key) {
                None => Ok(None),
                Some(Value::Null) => Ok(None),
                Some(value) => serde_json::from_value(value.clone())
                    .map(Some)
                    .map_err(de::Error::custom),
            }
        }

        let annotations: Option<Annotations> = field::<D, _>(entries, "annotations")?;
        let plain_text: Option<String> = field::<D, _>(entries, "plain_text")?;
        let href: Option<String> = field::<D, _>(entries, "href")?;
        let payload = entries
            .get(&kind)
            .cloned()
            .ok_or_else(|| de::Error::custom(format!("fragment missing '{kind}' payload")))?;

        match kind.as_str() {
            "text" => Ok(RichTextFragment::Text {
                text: serde_json::from_value(payload).map_err(de::Error::custom)?,
                annotations,
                plain_text,
                href,
            }),
            "mention" => Ok(RichTextFragment::Mention {
                mention: serde_json::from_value(payload).map_err(de::Error::custom)?,
                annotations,
                plain_text: plain_text
                    .ok_or_else(|| de::Error::custom("mention fragment missing plain_text"))?,
                href,
            }),
            "equation" => Ok(RichTextFragment::Equation {
                equation: serde_json::from_value(payload).map_err(de::Error::custom)?,
                annotations,
                plain_text: plain_text
                    .ok_or_else(|| de::Error::custom("equation fragment missing plain_text"))?,
                href,
            }),
            other => Err(de::Error::custom(format!(
                "unknown rich text fragment type '{other}'"
            ))),
        }
    }
}

// Creation shape: no "type" key, optional fields only when present.
impl Serialize for RichTextFragment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            RichTextFragment::Text {
                text,
                annotations,
                plain_text,
                href,
            } => {
                map.serialize_entry("text", text)?;
                if let Some(annotations) = annotations {
                    map.serialize_entry("annotations", annotations)?;
                }
                if let Some(plain_text) = plain_text {
                    map.serialize_entry("plain_text", plain_text)?;
                }
                if let Some(href) = href {
                    map.serialize_entry("href", href)?;
                }
            }
            RichTextFragment::Mention {
                mention,
                annotations,
                plain_text,
                href,
            } => {
                map.serialize_entry("mention", mention)?;
                if let Some(annotations) = annotations {
                    map.serialize_entry("annotations", annotations)?;
                }
                map.serialize_entry("plain_text", plain_text)?;
                if let Some(href) = href {
                    map.serialize_entry("href", href)?;
                }
            }
            RichTextFragment::Equation {
                equation,
                annotations,
                plain_text,
                href,
            } => {
                map.serialize_entry("equation", equation)?;
                if let Some(annotations) = annotations {
                    map.serialize_entry("annotations", annotations)?;
                }
                map.serialize_entry("plain_text", plain_text)?;
                if let Some(href) = href {
                    map.serialize_entry("href", href)?;
                }
            }
        }
        map.end()
    }
}

/// A sequence of rich text fragments.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(pub Vec<RichTextFragment>);

impl RichText {
    /// A single plain text fragment.
    pub fn text(content: impl Into<String>) -> Self {
        RichText(vec![RichTextFragment::text(content)])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Concatenated display text of all fragments.
    pub fn plain_text(&self) -> String {
        self.0
            .iter()
            .map(RichTextFragment::plain_text)
            .collect::<Vec<_>>()
            .concat()
    }
}

impl From<&str> for RichText {
    fn from(content: &str) -> Self {
        RichText::text(content)
    }
}

impl From<String> for RichText {
    fn from(content: String) -> Self {
        RichText::text(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn locally_built_text_serializes_to_creation_shape() {
        let value = serde_json::to_value(RichText::text("Buy milk")).unwrap();
        assert_eq!(value, json!([{"text": {"content": "Buy milk"}}]));
    }

    #[test]
    fn decoded_fragment_keeps_annotations_and_plain_text() {
        let fragment: RichTextFragment = serde_json::from_value(json!({
            "type": "text",
            "text": {"content": "hello", "link": null},
            "annotations": {
                "bold": true, "italic": false, "strikethrough": false,
                "underline": false, "code": false, "color": "default",
            },
            "plain_text": "hello",
            "href": null,
        }))
        .unwrap();
        assert_eq!(fragment.plain_text(), "hello");
        match fragment {
            RichTextFragment::Text { annotations, .. } => {
                assert!(annotations.unwrap().bold);
            }
            other => panic!("expected text fragment, got {other:?}"),
        }
    }

    #[test]
    fn plain_text_concatenates_fragments() {
        let text: RichText = serde_json::from_value(json!([
            {"type": "text", "text": {"content": "a "}, "plain_text": "a "},
            {
                "type": "mention",
                "mention": {"type": "page", "page": {"id": "00000000-0000-0000-0000-000000000002"}},
                "plain_text": "Some page",
            },
        ]))
        .unwrap();
        assert_eq!(text.plain_text(), "a Some page");
    }

    #[test]
    fn unknown_fragment_kind_is_rejected() {
        let result: Result<RichTextFragment, _> =
            serde_json::from_value(json!({"type": "sticker", "sticker": {}}));
        assert!(result.is_err());
    }
}
