//! Field-level constraint checks.

use std::fmt::{Display, Formatter};

/// Raw field value under validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    fn stringified(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

/// One value plus the constraints it must satisfy.
///
/// Length bounds apply only to text and count characters of the untrimmed
/// value. Numeric bounds apply only to numbers and are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Validatable {
    pub value: FieldValue,
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Validatable {
    /// Creates an input with no constraints.
    pub fn new(value: impl Into<FieldValue>) -> Self {
        Self {
            value: value.into(),
            required: false,
            min_length: None,
            max_length: None,
            min: None,
            max: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }
}

/// One failed constraint.
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Value is empty after trimming.
    Missing,
    TooShort { min_length: usize, actual: usize },
    TooLong { max_length: usize, actual: usize },
    BelowMin { min: f64, actual: f64 },
    AboveMax { max: f64, actual: f64 },
    /// Headcount text is not an integer.
    NotANumber(String),
}

impl Display for Violation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing => write!(f, "value is required"),
            Self::TooShort { min_length, actual } => {
                write!(f, "must be at least {min_length} characters, got {actual}")
            }
            Self::TooLong { max_length, actual } => {
                write!(f, "must be at most {max_length} characters, got {actual}")
            }
            Self::BelowMin { min, actual } => write!(f, "must be >= {min}, got {actual}"),
            Self::AboveMax { max, actual } => write!(f, "must be <= {max}, got {actual}"),
            Self::NotANumber(raw) => write!(f, "`{raw}` is not a whole number"),
        }
    }
}

/// Returns `true` when every applicable constraint holds.
pub fn validate(input: &Validatable) -> bool {
    violations(input).is_empty()
}

/// Lists failed constraints in the order required, min_length, max_length,
/// min, max.
pub fn violations(input: &Validatable) -> Vec<Violation> {
    let mut failed = Vec::new();

    if input.required && input.value.stringified().trim().is_empty() {
        failed.push(Violation::Missing);
    }

    match &input.value {
        FieldValue::Text(text) => {
            let actual = text.chars().count();
            if let Some(min_length) = input.min_length {
                if actual < min_length {
                    failed.push(Violation::TooShort { min_length, actual });
                }
            }
            if let Some(max_length) = input.max_length {
                if actual > max_length {
                    failed.push(Violation::TooLong { max_length, actual });
                }
            }
        }
        FieldValue::Number(actual) => {
            let actual = *actual;
            if let Some(min) = input.min {
                if actual < min {
                    failed.push(Violation::BelowMin { min, actual });
                }
            }
            if let Some(max) = input.max {
                if actual > max {
                    failed.push(Violation::AboveMax { max, actual });
                }
            }
        }
    }

    failed
}
