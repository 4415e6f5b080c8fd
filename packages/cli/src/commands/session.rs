//! `lifedesk session`: show, start, and finish work sessions.

use anyhow::{bail, Result};
use clap::Subcommand;
use lifedesk_core::endpoints::Transport;
use lifedesk_core::filter::{Relation, Status, Title};
use lifedesk_core::schema::{Page, QueryResult};
use tracing::warn;

use crate::workspace::Workspace;

use super::page_name;

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// List sessions starting today, earliest first.
    Today,
    /// List sessions currently in progress.
    Current,
    /// Start a session linked to today's page and, optionally, a task.
    Start {
        #[arg(default_value = "Work session")]
        name: String,
        /// Exact title of the open task this session works on.
        #[arg(long)]
        task: Option<String>,
    },
    /// Finish the session in progress and report the minutes worked.
    End,
}

pub fn run<T: Transport>(workspace: &Workspace<'_, T>, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Today => list(workspace.sessions.today()?),
        SessionCommand::Current => list(workspace.sessions.in_progress()?),
        SessionCommand::Start { name, task } => start(workspace, &name, task.as_deref()),
        SessionCommand::End => end(workspace),
    }
}

fn list(sessions: QueryResult<Page>) -> Result<()> {
    for session in &sessions {
        let start = session
            .date("Start")
            .ok()
            .flatten()
            .map(|date| date.start.date().to_string())
            .unwrap_or_else(|| "?".to_owned());
        let state = session
            .status("Status")
            .map(|status| status.name.clone())
            .unwrap_or_else(|_| "?".to_owned());
        println!("{} {} [{}]", start, page_name(session), state);
    }
    Ok(())
}

fn start<T: Transport>(workspace: &Workspace<'_, T>, name: &str, task: Option<&str>) -> Result<()> {
    let open = workspace.sessions.in_progress()?;
    if !open.is_empty() {
        warn!(count = open.count(), "a session is already in progress");
    }
    let today = workspace.daily.today()?;
    let mut properties = vec![
        Title::default().assign(name),
        Status::default().assign("In progress"),
        Relation::new("Daily").assign(today.id),
    ];
    if let Some(task_name) = task {
        let tasks = workspace.tasks.not_done()?;
        let by_name = tasks.by_name();
        let Some(task) = by_name.get(task_name) else {
            bail!("no open task named '{task_name}'");
        };
        properties.push(Relation::new("Task").assign(task.id));
    }
    let session = workspace.sessions.db.create(properties, vec![], None, None)?;
    println!("started: {}", page_name(&session));
    Ok(())
}

fn end<T: Transport>(workspace: &Workspace<'_, T>) -> Result<()> {
    let open = workspace.sessions.in_progress()?;
    if open.is_empty() {
        println!("no session in progress");
        return Ok(());
    }
    if open.count() > 1 {
        warn!(count = open.count(), "multiple sessions in progress, finishing the earliest");
    }
    let current = open.first()?;
    let session = workspace
        .sessions
        .db
        .update(current.id, vec![Status::default().assign("Done")])?;
    println!("done: {}", page_name(&session));
    if let Some(minutes) = minutes_of(&session) {
        println!("session took {minutes:.0} minutes");
    }
    let today = workspace.daily.today()?;
    if let Some(total) = today
        .rollup("Time Working")
        .ok()
        .and_then(|rollup| rollup.as_number().ok().flatten())
    {
        println!("worked {total:.0} minutes today");
    }
    Ok(())
}

/// The computed duration of a finished session, when the column exists
/// and has resolved to a number.
fn minutes_of(session: &Page) -> Option<f64> {
    session
        .formula("Duration")
        .ok()
        .and_then(|formula| formula.as_number().ok().flatten())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{config, list_of, page, titled, FakeTransport};
    use serde_json::json;

    #[test]
    fn start_links_daily_and_task_relations() {
        let transport = FakeTransport::new(vec![
            list_of(vec![]),
            list_of(vec![page("00000000-0000-0000-0000-000000000021", titled("2024-02-01"))]),
            list_of(vec![page("00000000-0000-0000-0000-000000000022", titled("Write report"))]),
            page("00000000-0000-0000-0000-000000000023", titled("Deep work")),
        ]);
        let config = config();
        let workspace = Workspace::new(&transport, &config);

        run(
            &workspace,
            SessionCommand::Start {
                name: "Deep work".to_owned(),
                task: Some("Write report".to_owned()),
            },
        )
        .unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[0].path, "databases/00000000-0000-0000-0000-000000000004/query");
        assert_eq!(requests[1].path, "databases/00000000-0000-0000-0000-000000000001/query");
        assert_eq!(requests[2].path, "databases/00000000-0000-0000-0000-000000000003/query");
        assert_eq!(requests[3].method, "POST");
        assert_eq!(requests[3].path, "pages");
        assert_eq!(
            requests[3].body["properties"],
            json!({
                "Name": {"title": [{"text": {"content": "Deep work"}}]},
                "Status": {"status": {"name": "In progress"}},
                "Daily": {"relation": [{"id": "00000000-0000-0000-0000-000000000021"}]},
                "Task": {"relation": [{"id": "00000000-0000-0000-0000-000000000022"}]},
            })
        );
    }

    #[test]
    fn start_rejects_an_unknown_task_name() {
        let transport = FakeTransport::new(vec![
            list_of(vec![]),
            list_of(vec![page("00000000-0000-0000-0000-000000000021", titled("2024-02-01"))]),
            list_of(vec![]),
        ]);
        let config = config();
        let workspace = Workspace::new(&transport, &config);

        let error = run(
            &workspace,
            SessionCommand::Start {
                name: "Deep work".to_owned(),
                task: Some("Missing".to_owned()),
            },
        )
        .unwrap_err();
        assert!(error.to_string().contains("no open task named"));
        assert_eq!(transport.requests.borrow().len(), 3);
    }

    #[test]
    fn end_marks_done_and_reads_the_duration() {
        let mut finished = page("00000000-0000-0000-0000-000000000023", titled("Deep work"));
        finished["properties"]["Duration"] = json!({
            "id": "f1",
            "type": "formula",
            "formula": {"type": "number", "number": 25.0},
        });
        let mut daily = page("00000000-0000-0000-0000-000000000021", titled("2024-02-01"));
        daily["properties"]["Time Working"] = json!({
            "id": "r1",
            "type": "rollup",
            "rollup": {"type": "number", "number": 100.0, "function": "sum"},
        });
        let transport = FakeTransport::new(vec![
            list_of(vec![page("00000000-0000-0000-0000-000000000023", titled("Deep work"))]),
            finished,
            list_of(vec![daily]),
        ]);
        let config = config();
        let workspace = Workspace::new(&transport, &config);

        run(&workspace, SessionCommand::End).unwrap();

        let requests = transport.requests.borrow();
        assert_eq!(requests[1].method, "PATCH");
        assert_eq!(requests[1].path, "pages/00000000-0000-0000-0000-000000000023");
        assert_eq!(
            requests[1].body,
            json!({"properties": {"Status": {"status": {"name": "Done"}}}})
        );
        assert_eq!(requests[2].path, "databases/00000000-0000-0000-0000-000000000001/query");
    }

    #[test]
    fn end_is_a_no_op_without_an_open_session() {
        let transport = FakeTransport::new(vec![list_of(vec![])]);
        let config = config();
        let workspace = Workspace::new(&transport, &config);
        run(&workspace, SessionCommand::End).unwrap();
        assert_eq!(transport.requests.borrow().len(), 1);
    }
}
