use crate::error::{ModalError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

lazy_static! {
    static ref SCRIPT_SCHEME_REGEX: Regex =
        Regex::new(r"(?i)^\s*(javascript|vbscript|data):").unwrap();
}

/// Checks that `action` is usable as a form submission target.
///
/// Any URL reference the browser resolves against the page is accepted,
/// relative ones included (`delete/5/`, `?delete=1`, `#`). Control
/// characters and script-bearing schemes are rejected.
pub fn validate_action(action: &str) -> Result<()> {
    if action.trim().is_empty() {
        return Err(ModalError::EmptyAction);
    }
    if action.chars().any(char::is_control) || SCRIPT_SCHEME_REGEX.is_match(action) {
        return Err(ModalError::InvalidAction(action.to_string()));
    }
    Ok(())
}

/// Task endpoints a confirmation modal can submit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "pk", rename_all = "lowercase")]
pub enum TaskAction {
    Create,
    Complete(u64),
    Restore(u64),
    Update(u64),
    Delete(u64),
}

impl TaskAction {
    /// Path relative to the application root, e.g. `/delete/5/`.
    pub fn path(&self) -> String {
        match self {
            TaskAction::Create => "/create/".to_string(),
            TaskAction::Complete(pk) => format!("/complete/{}/", pk),
            TaskAction::Restore(pk) => format!("/restore/{}/", pk),
            TaskAction::Update(pk) => format!("/update/{}/", pk),
            TaskAction::Delete(pk) => format!("/delete/{}/", pk),
        }
    }

    /// Path under the mount point of the task views, e.g. `/todo`.
    pub fn path_under(&self, prefix: &str) -> String {
        let prefix = prefix.trim_end_matches('/');
        if prefix.is_empty() {
            return self.path();
        }
        if prefix.starts_with('/') || prefix.contains("://") {
            format!("{}{}", prefix, self.path())
        } else {
            format!("/{}{}", prefix, self.path())
        }
    }

    pub fn pk(&self) -> Option<u64> {
        match self {
            TaskAction::Create => None,
            TaskAction::Complete(pk)
            | TaskAction::Restore(pk)
            | TaskAction::Update(pk)
            | TaskAction::Delete(pk) => Some(*pk),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TaskAction::Create => "New Task",
            TaskAction::Complete(_) => "Complete Task",
            TaskAction::Restore(_) => "Restore Task",
            TaskAction::Update(_) => "Update Task",
            TaskAction::Delete(_) => "Delete Task",
        }
    }

    pub fn button_text(&self) -> &'static str {
        match self {
            TaskAction::Create => "Create",
            TaskAction::Complete(_) => "Complete",
            TaskAction::Restore(_) => "Restore",
            TaskAction::Update(_) => "Update",
            TaskAction::Delete(_) => "Delete",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TaskAction::Create => "Create a new task?",
            TaskAction::Complete(_) => "Mark this task as completed?",
            TaskAction::Restore(_) => "Move this task back to the active list?",
            TaskAction::Update(_) => "Save the changes to this task?",
            TaskAction::Delete(_) => "This task will be permanently deleted.",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, TaskAction::Delete(_))
    }
}

impl fmt::Display for TaskAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
