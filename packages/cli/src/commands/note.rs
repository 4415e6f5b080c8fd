//! `lifedesk note`: list and create notes.

use anyhow::Result;
use clap::Subcommand;
use lifedesk_core::endpoints::Transport;
use lifedesk_core::filter::{Select, Title};
use lifedesk_core::schema::builder;

use crate::workspace::Workspace;

use super::page_name;

#[derive(Debug, Subcommand)]
pub enum NoteCommand {
    /// List all notes.
    List,
    /// Create a note; each body argument becomes one paragraph.
    New {
        title: String,
        body: Vec<String>,
        /// Note type option name.
        #[arg(long = "type", default_value = "Quick")]
        kind: String,
    },
}

pub fn run<T: Transport>(workspace: &Workspace<'_, T>, command: NoteCommand) -> Result<()> {
    match command {
        NoteCommand::List => list(workspace),
        NoteCommand::New { title, body, kind } => new(workspace, &title, &body, &kind),
    }
}

fn list<T: Transport>(workspace: &Workspace<'_, T>) -> Result<()> {
    let notes = workspace.notes.all()?;
    for note in &notes {
        println!("{}", page_name(note));
    }
    Ok(())
}

fn new<T: Transport>(
    workspace: &Workspace<'_, T>,
    title: &str,
    body: &[String],
    kind: &str,
) -> Result<()> {
    let children = body
        .iter()
        .map(|text| builder::paragraph(text.as_str()).into())
        .collect();
    let note = workspace.notes.db.create(
        vec![
            Title::default().assign(title),
            Select::new("Type").assign(kind),
        ],
        children,
        None,
        None,
    )?;
    println!("created: {}", page_name(&note));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{config, page, titled, FakeTransport};
    use serde_json::json;

    #[test]
    fn new_creates_a_typed_note_with_paragraph_children() {
        let transport = FakeTransport::new(vec![page(
            "00000000-0000-0000-0000-000000000025",
            titled("Meeting notes"),
        )]);
        let mut config = config();
        config.default_icons.notes = Some("https://example.com/note.svg".to_owned());
        let workspace = Workspace::new(&transport, &config);

        run(
            &workspace,
            NoteCommand::New {
                title: "Meeting notes".to_owned(),
                body: vec!["First point.".to_owned(), "Second point.".to_owned()],
                kind: "Quick".to_owned(),
            },
        )
        .unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "pages");
        let body = &requests[0].body;
        assert_eq!(
            body["parent"],
            json!({"database_id": "00000000-0000-0000-0000-000000000005"})
        );
        assert_eq!(
            body["properties"],
            json!({
                "Name": {"title": [{"text": {"content": "Meeting notes"}}]},
                "Type": {"select": {"name": "Quick"}},
            })
        );
        assert_eq!(
            body["children"],
            json!([
                {"paragraph": {
                    "rich_text": [{"text": {"content": "First point."}}],
                    "color": "default",
                    "children": [],
                }},
                {"paragraph": {
                    "rich_text": [{"text": {"content": "Second point."}}],
                    "color": "default",
                    "children": [],
                }},
            ])
        );
        assert_eq!(
            body["icon"],
            json!({"type": "external", "external": {"url": "https://example.com/note.svg"}})
        );
    }

    #[test]
    fn new_without_body_sends_no_children() {
        let transport = FakeTransport::new(vec![page(
            "00000000-0000-0000-0000-000000000025",
            titled("Idea"),
        )]);
        let config = config();
        let workspace = Workspace::new(&transport, &config);

        run(
            &workspace,
            NoteCommand::New {
                title: "Idea".to_owned(),
                body: vec![],
                kind: "Quick".to_owned(),
            },
        )
        .unwrap();

        let body = &transport.requests.borrow()[0].body;
        assert_eq!(body["children"], json!([]));
        assert_eq!(body.get("icon"), None);
    }
}
