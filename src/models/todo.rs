use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const TODO_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn empty(id: usize) -> Self {
        Self {
            id: id as i64,
            text: String::new(),
            completed: false,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Partial update applied to a todo slot. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Exactly five todo slots per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList([TodoItem; TODO_SLOTS]);

impl Default for TodoList {
    fn default() -> Self {
        Self(std::array::from_fn(TodoItem::empty))
    }
}

impl TodoList {
    pub fn from_slots(slots: [TodoItem; TODO_SLOTS]) -> Self {
        Self(slots)
    }

    pub fn get(&self, index: usize) -> AppResult<&TodoItem> {
        self.0.get(index).ok_or(AppError::InvalidTodoIndex(index + 1))
    }

    pub fn apply(&mut self, index: usize, patch: TodoPatch) -> AppResult<&TodoItem> {
        let item = self
            .0
            .get_mut(index)
            .ok_or(AppError::InvalidTodoIndex(index + 1))?;

        if let Some(text) = patch.text {
            item.text = text;
        }
        if let Some(done) = patch.completed {
            item.completed = done;
        }

        Ok(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.0.iter()
    }

    pub fn completed_count(&self) -> usize {
        self.0.iter().filter(|t| t.completed).count()
    }
}
