//! Core domain logic for projboard.
//! The project store in this crate is the single source of truth for
//! project records and their status transitions.

pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;

pub use config::{BoardConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::project::{ProjectId, ProjectRecord, ProjectStatus, UnknownStatusError};
pub use store::project_store::{ProjectStore, StatusChange, Subscriber};
pub use store::shared::SharedProjectStore;
pub use validation::input_rules::{
    FieldRules, FieldViolations, InputField, ProjectDraft, ProjectInputError, ProjectInputRules,
    RulesProfile,
};
pub use validation::validatable::{validate, violations, FieldValue, Validatable, Violation};
pub use view::board::{IdLookup, ProjectBoard};
pub use view::input::ProjectInputView;
pub use view::list::ProjectListView;
pub use view::{attach, Component};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
