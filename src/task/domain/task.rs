//! Task aggregate root and partial-update types.

use super::{TaskDescription, TaskId, TaskTitle};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;

/// Task aggregate root.
///
/// Constructed through [`Task::new`], which assigns a fresh identifier and
/// the creation timestamps, or [`Task::from_persisted`] when rehydrating a
/// stored record. `updated_at` never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: TaskTitle,
    /// Persisted description.
    pub description: TaskDescription,
    /// Persisted completion flag.
    pub completed: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest-change timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Normalized partial update produced by the validation layer.
///
/// `None` leaves the stored value untouched; an explicitly supplied empty
/// description is a value, not an omission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title, when supplied.
    pub title: Option<TaskTitle>,
    /// Replacement description, when supplied.
    pub description: Option<TaskDescription>,
    /// Replacement completion flag, when supplied.
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Returns `true` when the patch carries no fields.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}

impl Task {
    /// Creates a new pending task with a fresh identifier.
    ///
    /// `created_at` and `updated_at` are set from the same clock reading and
    /// the task starts out not completed.
    #[must_use]
    pub fn new(title: TaskTitle, description: TaskDescription, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskId::new(),
            title,
            description,
            completed: false,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            completed: data.completed,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the completion flag.
    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest-change timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// Only the fields present in the patch replace stored values; the
    /// timestamp advances even when the patch is empty, recording that an
    /// update was requested.
    pub fn apply_patch(&mut self, patch: TaskPatch, clock: &impl Clock) {
        if let Some(new_title) = patch.title {
            self.title = new_title;
        }
        if let Some(new_description) = patch.description {
            self.description = new_description;
        }
        if let Some(new_completed) = patch.completed {
            self.completed = new_completed;
        }
        self.touch(clock);
    }

    /// Flips the completion flag and refreshes `updated_at`.
    ///
    /// Returns the completion value after the flip.
    pub fn toggle_completion(&mut self, clock: &impl Clock) -> bool {
        self.completed = !self.completed;
        self.touch(clock);
        self.completed
    }

    /// Advances `updated_at` to the current clock time.
    ///
    /// Clamped so `updated_at >= created_at` holds even when the wall clock
    /// steps backwards between readings.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = self.updated_at.max(clock.utc());
    }
}
