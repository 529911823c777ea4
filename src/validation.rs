//! Boundary input validation.
//!
//! The engine itself is a total function: it silently drops records
//! with non-positive duration and treats non-positive grid dimensions
//! as empty iteration ranges. Everything a user would call "bad input"
//! is therefore caught here, at the input boundary, before the engine
//! runs. Checks:
//! - duplicate ad ids
//! - missing name or category
//! - non-positive duration, profit, or deadline
//! - non-positive grid dimensions

use std::collections::HashSet;

use crate::models::AdRecord;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two ads share the same store id.
    DuplicateId,
    /// An ad has an empty name.
    MissingName,
    /// An ad has an empty category.
    MissingCategory,
    /// An ad demands zero or negative slots.
    NonPositiveDuration,
    /// An ad has zero or negative profit.
    NonPositiveProfit,
    /// An ad's deadline admits no day at all.
    NonPositiveDeadline,
    /// The grid has zero days or zero slots per day.
    InvalidGridDimension,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling run's input.
///
/// Collects every detected problem rather than stopping at the first,
/// so a form or CLI can report them all at once.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(ads: &[AdRecord], total_days: usize, slots_per_day: usize) -> ValidationResult {
    let mut errors = Vec::new();

    if total_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidGridDimension,
            "total days must be 1 or more",
        ));
    }
    if slots_per_day == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidGridDimension,
            "slots per day must be 1 or more",
        ));
    }

    let mut seen_ids = HashSet::new();
    for ad in ads {
        if !seen_ids.insert(ad.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate ad id: {}", ad.id),
            ));
        }

        if ad.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Ad {} has no name", ad.id),
            ));
        }
        if ad.category.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingCategory,
                format!("Ad '{}' has no category", ad.name),
            ));
        }
        if ad.duration <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDuration,
                format!("Ad '{}' has non-positive duration {}", ad.name, ad.duration),
            ));
        }
        if ad.profit <= 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveProfit,
                format!("Ad '{}' has non-positive profit {}", ad.name, ad.profit),
            ));
        }
        if ad.deadline == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveDeadline,
                format!("Ad '{}' has a deadline of 0 days", ad.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
