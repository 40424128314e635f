//! Length limits applied to task content before it reaches the board.

use super::{NewTask, PatchField, TaskDomainError, TaskPatch};
use serde::{Deserialize, Serialize};

/// Configuration for task content validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskValidationConfig {
    /// Maximum title length in characters.
    pub max_title_chars: usize,
    /// Maximum description length in characters.
    pub max_description_chars: usize,
}

impl Default for TaskValidationConfig {
    fn default() -> Self {
        Self {
            max_title_chars: 200,
            max_description_chars: 5_000,
        }
    }
}

impl TaskValidationConfig {
    /// Creates a lenient configuration with generous limits.
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            max_title_chars: 2_000,
            max_description_chars: 100_000,
        }
    }

    /// Creates a strict configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_title_chars: 80,
            max_description_chars: 1_000,
        }
    }

    /// Checks a new task request against the limits.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`],
    /// [`TaskDomainError::TitleTooLong`] or
    /// [`TaskDomainError::DescriptionTooLong`].
    pub fn check_new_task(&self, request: &NewTask) -> Result<(), TaskDomainError> {
        self.check_title(request.title())?;
        request
            .description()
            .map_or(Ok(()), |text| self.check_description(text))
    }

    /// Checks a patch against the limits.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::check_new_task`] for the fields
    /// the patch sets.
    pub fn check_patch(&self, patch: &TaskPatch) -> Result<(), TaskDomainError> {
        if let Some(title) = patch.title() {
            self.check_title(title)?;
        }
        if let PatchField::Set(text) = patch.description() {
            self.check_description(text)?;
        }
        Ok(())
    }

    fn check_title(&self, title: &str) -> Result<(), TaskDomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        let actual = trimmed.chars().count();
        if actual > self.max_title_chars {
            return Err(TaskDomainError::TitleTooLong {
                actual,
                max: self.max_title_chars,
            });
        }
        Ok(())
    }

    fn check_description(&self, text: &str) -> Result<(), TaskDomainError> {
        let actual = text.trim().chars().count();
        if actual > self.max_description_chars {
            return Err(TaskDomainError::DescriptionTooLong {
                actual,
                max: self.max_description_chars,
            });
        }
        Ok(())
    }
}
