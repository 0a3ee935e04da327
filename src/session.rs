//! Line-oriented session driver.
//!
//! Stands in for the dashboard's UI event handler: each line is one user
//! action applied to a [`SharedWorkspace`], and each action prints what the
//! tab bar would now show.
//!
//! ```text
//! open /patients
//! open /patients/42
//! activate /patients
//! capacity 8
//! list
//! ```

use crate::navigation::{NavigationResolver, ViewRef};
use crate::shared::SharedWorkspace;
use crate::workspace::{OpenOutcome, TabId, WorkspaceSnapshot};
use std::io::{BufRead, Write};
use thiserror::Error;

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceCommand {
    Open(String),
    Close(String),
    Activate(String),
    CloseOldest,
    Clear,
    /// Raw capacity input, clamped when applied
    Capacity(String),
    List,
    Status,
}

/// Errors from reading or parsing a session script
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command '{command}'")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: '{command}' needs an argument")]
    MissingArgument { line: usize, command: &'static str },

    #[error("failed to read session input: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkspaceCommand {
    /// Parse one script line. Blank lines and `#` comments yield `None`.
    pub fn parse(line_no: usize, line: &str) -> Result<Option<Self>, ScriptError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, Some(rest.trim()).filter(|a| !a.is_empty())),
            None => (line, None),
        };

        let need = |name: &'static str| {
            arg.map(str::to_string).ok_or(ScriptError::MissingArgument {
                line: line_no,
                command: name,
            })
        };

        let parsed = match command.to_ascii_lowercase().as_str() {
            "open" => WorkspaceCommand::Open(need("open")?),
            "close" => WorkspaceCommand::Close(need("close")?),
            "activate" => WorkspaceCommand::Activate(need("activate")?),
            "close-oldest" => WorkspaceCommand::CloseOldest,
            "clear" => WorkspaceCommand::Clear,
            "capacity" => WorkspaceCommand::Capacity(need("capacity")?),
            "list" => WorkspaceCommand::List,
            "status" => WorkspaceCommand::Status,
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line: line_no,
                    command: command.to_string(),
                });
            }
        };
        Ok(Some(parsed))
    }
}

/// Counts reported when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub commands: usize,
    pub errors: usize,
}

/// Applies commands to a shared workspace using a resolver for `open`
pub struct Session<R> {
    workspace: SharedWorkspace<ViewRef>,
    resolver: R,
}

impl<R: NavigationResolver<ViewRef>> Session<R> {
    pub fn new(workspace: SharedWorkspace<ViewRef>, resolver: R) -> Self {
        Self {
            workspace,
            resolver,
        }
    }

    pub fn workspace(&self) -> &SharedWorkspace<ViewRef> {
        &self.workspace
    }

    /// Apply one command and return the lines to show the user
    pub fn execute(&self, command: &WorkspaceCommand) -> Vec<String> {
        match command {
            WorkspaceCommand::Open(path) => match self.workspace.open_path(&self.resolver, path) {
                Some(OpenOutcome::Opened) => vec![format!("opened {}", TabId::from_path(path))],
                Some(OpenOutcome::Surfaced) => {
                    vec![format!("switched to {}", TabId::from_path(path))]
                }
                Some(OpenOutcome::OpenedWithEviction(evicted)) => vec![format!(
                    "opened {} (closed oldest tab {})",
                    TabId::from_path(path),
                    evicted
                )],
                None => vec![format!("no view for {path}")],
            },
            WorkspaceCommand::Close(path) => {
                let id = TabId::from_path(path);
                match self.workspace.close(id.as_str()) {
                    Some(tab) => vec![format!("closed {}", tab.id())],
                    None => vec![format!("{id} is not open")],
                }
            }
            WorkspaceCommand::Activate(path) => {
                let id = TabId::from_path(path);
                if self.workspace.set_active(id.as_str()) {
                    vec![format!("switched to {id}")]
                } else {
                    vec![format!("{id} is not open")]
                }
            }
            WorkspaceCommand::CloseOldest => match self.workspace.close_oldest() {
                Some(tab) => vec![format!("closed {}", tab.id())],
                None => vec!["no tabs open".to_string()],
            },
            WorkspaceCommand::Clear => {
                self.workspace.clear();
                vec!["closed all tabs".to_string()]
            }
            WorkspaceCommand::Capacity(raw) => {
                let (before, capacity, after) = self.workspace.update(|mgr| {
                    let before = mgr.tab_count();
                    let capacity = mgr.set_capacity_from_str(raw);
                    (before, capacity, mgr.tab_count())
                });
                let mut lines = vec![format!("capacity set to {capacity}")];
                if after < before {
                    lines.push(format!("closed {} oldest tab(s)", before - after));
                }
                lines
            }
            WorkspaceCommand::List => render_list(&self.workspace.snapshot()),
            WorkspaceCommand::Status => render_status(&self.workspace.snapshot()),
        }
    }

    /// Read commands from `input` until EOF, writing results to `output`.
    ///
    /// Bad lines are reported and skipped rather than ending the session.
    pub fn run<I: BufRead, W: Write>(
        &self,
        input: I,
        mut output: W,
    ) -> Result<SessionSummary, ScriptError> {
        let mut summary = SessionSummary::default();
        for (idx, line) in input.lines().enumerate() {
            let line = line?;
            match WorkspaceCommand::parse(idx + 1, &line) {
                Ok(Some(command)) => {
                    summary.commands += 1;
                    for out in self.execute(&command) {
                        writeln!(output, "{out}")?;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    log::warn!("{e}");
                    summary.errors += 1;
                    writeln!(output, "error: {e}")?;
                }
            }
        }
        output.flush()?;
        Ok(summary)
    }
}

/// One line per tab, oldest first, `*` marking the active tab
pub fn render_list(snapshot: &WorkspaceSnapshot) -> Vec<String> {
    if snapshot.tabs.is_empty() {
        return vec!["no tabs open".to_string()];
    }
    snapshot
        .tabs
        .iter()
        .enumerate()
        .map(|(idx, tab)| {
            let marker = if tab.active { '*' } else { ' ' };
            format!("{marker} {}. {} ({})", idx + 1, tab.title, tab.id)
        })
        .collect()
}

/// Count/capacity line plus the capacity notice, if any
pub fn render_status(snapshot: &WorkspaceSnapshot) -> Vec<String> {
    let mut lines = vec![format!(
        "{}/{} tabs open",
        snapshot.tab_count(),
        snapshot.capacity
    )];
    if let Some(notice) = snapshot.notice {
        lines.push(format!("warning: {notice}"));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(
            WorkspaceCommand::parse(1, "open /patients").unwrap(),
            Some(WorkspaceCommand::Open("/patients".into()))
        );
        assert_eq!(
            WorkspaceCommand::parse(1, "  CAPACITY   12 ").unwrap(),
            Some(WorkspaceCommand::Capacity("12".into()))
        );
        assert_eq!(
            WorkspaceCommand::parse(1, "close-oldest").unwrap(),
            Some(WorkspaceCommand::CloseOldest)
        );
        assert_eq!(WorkspaceCommand::parse(1, "# note").unwrap(), None);
        assert_eq!(WorkspaceCommand::parse(1, "   ").unwrap(), None);
    }

    #[test]
    fn parse_errors_carry_line_numbers() {
        let err = WorkspaceCommand::parse(4, "open").unwrap_err();
        assert_eq!(err.to_string(), "line 4: 'open' needs an argument");

        let err = WorkspaceCommand::parse(9, "explode now").unwrap_err();
        assert_eq!(err.to_string(), "line 9: unknown command 'explode'");
    }

    #[test]
    fn capacity_reports_tabs_closed_by_shrink() {
        use crate::navigation::RouteTable;
        use crate::workspace::WorkspaceManager;

        let session = Session::new(
            SharedWorkspace::new(WorkspaceManager::default()),
            RouteTable::from_menu(&practice_desk_config::defaults::menu()),
        );
        for i in 1..=8 {
            session.execute(&WorkspaceCommand::Open(format!("/staff/{i}")));
        }

        let lines = session.execute(&WorkspaceCommand::Capacity("5".into()));
        assert_eq!(lines, vec!["capacity set to 5", "closed 3 oldest tab(s)"]);

        let lines = session.execute(&WorkspaceCommand::Capacity("20".into()));
        assert_eq!(lines, vec!["capacity set to 20"]);
        assert_eq!(session.workspace().snapshot().tab_count(), 5);
    }
}
