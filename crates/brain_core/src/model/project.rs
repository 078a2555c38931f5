//! Projects and their task checklists.

use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// Always present; older payloads without `tasks` decode as empty.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Project {
    /// Creates an empty project. The name must not be blank.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_text("project name", name)?,
            tasks: Vec::new(),
        })
    }

    /// Number of completed tasks.
    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|task| task.done).count()
    }
}

impl Task {
    /// Creates an open task. The title must not be blank.
    pub fn new(title: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require_text("task title", title)?,
            done: false,
        })
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}
