use crate::error::AppError;
use crate::league::ScoringRules;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - A win must be worth at least as much as a tie, and a tie at least as much as a loss
/// - A win must be worth more than zero points
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    scoring: &ScoringRules,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if scoring.win == 0 {
        return Err(AppError::config_error("Points for a win must be positive"));
    }

    if scoring.win < scoring.tie || scoring.tie < scoring.loss {
        return Err(AppError::config_error(format!(
            "Scoring must satisfy win >= tie >= loss (got win={}, tie={}, loss={})",
            scoring.win, scoring.tie, scoring.loss
        )));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
