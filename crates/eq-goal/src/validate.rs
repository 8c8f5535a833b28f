// validate.rs — Input checks for the goal creation boundary.
//
// `GoalStore::create_goal` trusts its inputs. Front ends call these first
// so that nothing reaches the store that the save format can't represent.

use crate::codec::{self, FIELD_SEPARATOR};
use crate::error::GoalError;
use crate::goal::GoalKind;

/// Check a goal name or description: non-empty after trimming, and free of
/// the field separator and line breaks.
pub fn validate_text(field: &str, value: &str) -> Result<(), GoalError> {
    if value.trim().is_empty() {
        let reason = format!("{} must not be empty", field);
        return Err(GoalError::InvalidInput(reason));
    }
    if !codec::is_encodable(value) {
        return Err(GoalError::InvalidInput(format!(
            "{} must not contain '{}' or line breaks",
            field, FIELD_SEPARATOR
        )));
    }
    Ok(())
}

/// Check a goal kind's numeric parameters.
pub fn validate_kind(kind: &GoalKind) -> Result<(), GoalError> {
    if let GoalKind::Checklist { target: 0, .. } = kind {
        return Err(GoalError::InvalidInput(
            "checklist target must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Everything `create_goal` needs, checked in one call.
pub fn validate_goal(kind: &GoalKind, name: &str, description: &str) -> Result<(), GoalError> {
    validate_text("name", name)?;
    validate_text("description", description)?;
    validate_kind(kind)
}
