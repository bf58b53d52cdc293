//! Project form rules and draft checking.
//!
//! # Responsibility
//! - Hold configurable constraints for the title/description/people fields.
//! - Turn raw form text into a checked `ProjectDraft`.
//!
//! # Invariants
//! - Every field is checked; failures are reported for all fields at once.
//! - A draft's headcount is always >= 1, whatever the configured minimum.

use crate::validation::validatable::{violations, FieldValue, Validatable, Violation};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::num::IntErrorKind;

const DESCRIPTION_MAX_LENGTH: usize = 500;
const PEOPLE_MAX: f64 = 10.0;

/// Constraints for one form field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldRules {
    fn apply(&self, value: impl Into<FieldValue>) -> Validatable {
        Validatable {
            value: value.into(),
            required: self.required,
            min_length: self.min_length,
            max_length: self.max_length,
            min: self.min,
            max: self.max,
        }
    }
}

/// Named rule sets observed for the project form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RulesProfile {
    #[default]
    Standard,
    Strict,
}

impl RulesProfile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Strict => "strict",
        }
    }

    /// Parses `standard|strict`, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn rules(self) -> ProjectInputRules {
        match self {
            Self::Standard => ProjectInputRules::standard(),
            Self::Strict => ProjectInputRules::strict(),
        }
    }
}

/// Form field identifier used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Title,
    Description,
    People,
}

impl InputField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Checked form values, ready for `ProjectStore::create`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Failed constraints for one field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldViolations {
    pub field: InputField,
    pub violations: Vec<Violation>,
}

/// Error returned when form input does not satisfy the active rules.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectInputError {
    /// One entry per failing field, in form order.
    Invalid(Vec<FieldViolations>),
}

impl ProjectInputError {
    /// Violations for one field, empty when the field passed.
    pub fn violations_for(&self, field: InputField) -> &[Violation] {
        let Self::Invalid(fields) = self;
        fields
            .iter()
            .find(|entry| entry.field == field)
            .map(|entry| entry.violations.as_slice())
            .unwrap_or(&[])
    }

    pub fn fields(&self) -> Vec<InputField> {
        let Self::Invalid(fields) = self;
        fields.iter().map(|entry| entry.field).collect()
    }
}

impl Display for ProjectInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Self::Invalid(fields) = self;
        write!(f, "invalid project input")?;
        for entry in fields {
            let reasons = entry
                .violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "; {}: {reasons}", entry.field.as_str())?;
        }
        Ok(())
    }
}

impl Error for ProjectInputError {}

/// Constraint set for the project form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectInputRules {
    pub title: FieldRules,
    pub description: FieldRules,
    pub people: FieldRules,
}

impl Default for ProjectInputRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl ProjectInputRules {
    /// Title >= 1 char, description 1..=500 chars, 1..=10 people.
    pub fn standard() -> Self {
        Self {
            title: FieldRules {
                required: true,
                min_length: Some(1),
                ..FieldRules::default()
            },
            description: FieldRules {
                required: true,
                min_length: Some(1),
                max_length: Some(DESCRIPTION_MAX_LENGTH),
                ..FieldRules::default()
            },
            people: FieldRules {
                required: true,
                min: Some(1.0),
                max: Some(PEOPLE_MAX),
                ..FieldRules::default()
            },
        }
    }

    /// Title >= 3 chars, description 10..=500 chars, 5..=10 people.
    pub fn strict() -> Self {
        Self {
            title: FieldRules {
                required: true,
                min_length: Some(3),
                ..FieldRules::default()
            },
            description: FieldRules {
                required: true,
                min_length: Some(10),
                max_length: Some(DESCRIPTION_MAX_LENGTH),
                ..FieldRules::default()
            },
            people: FieldRules {
                required: true,
                min: Some(5.0),
                max: Some(PEOPLE_MAX),
                ..FieldRules::default()
            },
        }
    }

    /// Checks raw form text and returns a draft when every field passes.
    ///
    /// Title and description are kept as entered (untrimmed). `people` is
    /// trimmed and must parse as an integer.
    pub fn check(
        &self,
        title: &str,
        description: &str,
        people: &str,
    ) -> Result<ProjectDraft, ProjectInputError> {
        let mut failed = Vec::new();

        let title_violations = violations(&self.title.apply(title));
        if !title_violations.is_empty() {
            failed.push(FieldViolations {
                field: InputField::Title,
                violations: title_violations,
            });
        }

        let description_violations = violations(&self.description.apply(description));
        if !description_violations.is_empty() {
            failed.push(FieldViolations {
                field: InputField::Description,
                violations: description_violations,
            });
        }

        let people_count = match self.check_people(people) {
            Ok(count) => Some(count),
            Err(people_violations) => {
                failed.push(FieldViolations {
                    field: InputField::People,
                    violations: people_violations,
                });
                None
            }
        };

        match people_count {
            Some(people) if failed.is_empty() => Ok(ProjectDraft {
                title: title.to_string(),
                description: description.to_string(),
                people,
            }),
            _ => {
                debug!(
                    "event=input_rejected module=validation status=error fields={}",
                    failed
                        .iter()
                        .map(|entry| entry.field.as_str())
                        .collect::<Vec<_>>()
                        .join(",")
                );
                Err(ProjectInputError::Invalid(failed))
            }
        }
    }

    fn check_people(&self, raw: &str) -> Result<u32, Vec<Violation>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(vec![if self.people.required {
                Violation::Missing
            } else {
                Violation::NotANumber(raw.to_string())
            }]);
        }

        let mut rules = self.people;
        let min = rules.min.map_or(1.0, |min| min.max(1.0));
        let max = rules
            .max
            .map_or(f64::from(u32::MAX), |max| max.min(f64::from(u32::MAX)));
        rules.min = Some(min);
        rules.max = Some(max);

        let count = match trimmed.parse::<i64>() {
            Ok(count) => count,
            Err(err) => {
                let actual = trimmed.parse::<f64>().unwrap_or(f64::NAN);
                return Err(vec![match err.kind() {
                    IntErrorKind::PosOverflow => Violation::AboveMax { max, actual },
                    IntErrorKind::NegOverflow => Violation::BelowMin { min, actual },
                    _ => Violation::NotANumber(trimmed.to_string()),
                }]);
            }
        };

        let people_violations = violations(&rules.apply(count));
        if !people_violations.is_empty() {
            return Err(people_violations);
        }
        u32::try_from(count).map_err(|_| {
            vec![Violation::AboveMax {
                max,
                actual: count as f64,
            }]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{InputField, ProjectInputRules, RulesProfile};
    use crate::validation::validatable::Violation;

    #[test]
    fn profile_parse_accepts_known_names() {
        assert_eq!(RulesProfile::parse(" STRICT "), Some(RulesProfile::Strict));
        assert_eq!(RulesProfile::parse("standard"), Some(RulesProfile::Standard));
        assert_eq!(RulesProfile::parse("lenient"), None);
    }

    #[test]
    fn zero_people_is_rejected_even_without_configured_min() {
        let mut rules = ProjectInputRules::standard();
        rules.people.min = None;

        let err = rules
            .check("Title", "Description", "0")
            .expect_err("zero people must fail");
        assert_eq!(
            err.violations_for(InputField::People),
            &[Violation::BelowMin {
                min: 1.0,
                actual: 0.0
            }]
        );
    }

    #[test]
    fn overflowing_people_is_above_max_not_malformed() {
        let err = ProjectInputRules::standard()
            .check("T", "D", "99999999999999999999")
            .expect_err("huge headcount must fail");
        assert!(matches!(
            err.violations_for(InputField::People),
            [Violation::AboveMax { max, .. }] if *max == 10.0
        ));

        let err = ProjectInputRules::standard()
            .check("T", "D", "-99999999999999999999")
            .expect_err("huge negative headcount must fail");
        assert!(matches!(
            err.violations_for(InputField::People),
            [Violation::BelowMin { min, .. }] if *min == 1.0
        ));
    }

    #[test]
    fn people_is_trimmed_before_parsing() {
        let draft = ProjectInputRules::standard()
            .check("Title", "Description", " 3 ")
            .expect("padded headcount should parse");
        assert_eq!(draft.people, 3);
    }
}
