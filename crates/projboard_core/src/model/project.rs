//! Project record and status model.
//!
//! # Responsibility
//! - Define the record shared by the active and finished columns.
//! - Keep status mutation private to the crate so it flows through the store.
//!
//! # Invariants
//! - `id` is stable and never reused for another project.
//! - `status` starts as `Active` and only the store may change it.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project.
pub type ProjectId = Uuid;

/// Column a project is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work is ongoing.
    Active,
    /// Work is done.
    Finished,
}

impl ProjectStatus {
    /// Stable lowercase name used in logs and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }

    /// Parses a status name, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, UnknownStatusError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "finished" => Ok(Self::Finished),
            _ => Err(UnknownStatusError(value.trim().to_string())),
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a status name is neither `active` nor `finished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatusError(pub String);

impl Display for UnknownStatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown project status `{}`; expected active|finished",
            self.0
        )
    }
}

impl Error for UnknownStatusError {}

/// One project entry on the board.
///
/// Fields are read through accessors. Snapshots handed to subscribers are
/// owned clones, so editing one never reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    id: ProjectId,
    title: String,
    description: String,
    people: u32,
    status: ProjectStatus,
}

impl ProjectRecord {
    /// Builds an `Active` record with a caller-provided id.
    pub(crate) fn new(
        id: ProjectId,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of people assigned.
    pub fn people(&self) -> u32 {
        self.people
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    /// First eight hex digits of the id, used for display and prefix lookup.
    pub fn short_id(&self) -> String {
        self.id.simple().to_string()[..8].to_string()
    }

    pub(crate) fn set_status(&mut self, status: ProjectStatus) {
        self.status = status;
    }
}
