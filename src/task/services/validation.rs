//! Trim and length rules applied to task text fields.

use crate::config::TaskLimits;
use crate::task::domain::TaskDomainError;

/// Trims and validates a required title.
pub(super) fn normalize_title(raw: &str, limits: &TaskLimits) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyTitle);
    }
    let actual = trimmed.chars().count();
    if actual > limits.max_title_chars {
        return Err(TaskDomainError::TitleTooLong {
            max: limits.max_title_chars,
            actual,
        });
    }
    Ok(trimmed.to_owned())
}

/// Trims a title supplied in a partial update.
///
/// Blank titles yield `None` so the stored title is kept.
pub(super) fn normalize_title_change(
    raw: &str,
    limits: &TaskLimits,
) -> Result<Option<String>, TaskDomainError> {
    match normalize_title(raw, limits) {
        Ok(title) => Ok(Some(title)),
        Err(TaskDomainError::EmptyTitle) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Trims and validates an optional description; blank input yields `None`.
pub(super) fn normalize_description(
    raw: &str,
    limits: &TaskLimits,
) -> Result<Option<String>, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let actual = trimmed.chars().count();
    if actual > limits.max_description_chars {
        return Err(TaskDomainError::DescriptionTooLong {
            max: limits.max_description_chars,
            actual,
        });
    }
    Ok(Some(trimmed.to_owned()))
}
