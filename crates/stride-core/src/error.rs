//! Error types for the stride engine.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Message used whenever a goal or timeframe is missing.
pub const GOAL_AND_TIMEFRAME_REQUIRED: &str = "Goal and timeframe are required";

/// Message used when task synthesis is asked to work without a goal.
pub const GOAL_AND_ANALYSIS_REQUIRED: &str = "Goal and complexity analysis are required";

/// Comprehensive error type for all engine operations.
#[derive(Error, Debug)]
pub enum StrideError {
    /// Missing or empty goal/timeframe, rejected before any processing
    #[error("{message}")]
    InvalidInput { message: String },
    /// The external planning collaborator failed at one of its stages
    #[error("Collaborator failed during {stage}: {message}")]
    Collaborator {
        stage: CollaboratorStage,
        message: String,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// The two sequential stages of a collaborator-backed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaboratorStage {
    /// Turning the prompt into a plan
    Generate,
    /// Executing a previously generated plan
    Run,
}

impl fmt::Display for CollaboratorStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollaboratorStage::Generate => write!(f, "plan generation"),
            CollaboratorStage::Run => write!(f, "plan execution"),
        }
    }
}

/// Builder for creating collaborator errors tied to a stage.
pub struct CollaboratorErrorBuilder {
    stage: CollaboratorStage,
}

impl CollaboratorErrorBuilder {
    /// Create a new collaborator error builder for a stage.
    pub fn new(stage: CollaboratorStage) -> Self {
        Self { stage }
    }

    /// Build the error with the given message.
    pub fn with_message(self, message: impl Into<String>) -> StrideError {
        StrideError::Collaborator {
            stage: self.stage,
            message: message.into(),
        }
    }
}

impl StrideError {
    /// Creates an input validation error carrying `message` verbatim.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StrideError::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a builder for collaborator errors.
    pub fn collaborator(stage: CollaboratorStage) -> CollaboratorErrorBuilder {
        CollaboratorErrorBuilder::new(stage)
    }

    /// Returns true when the error stems from invalid caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StrideError::InvalidInput { .. })
    }
}

/// Extension trait for Result to attach collaborator stage context.
pub trait CollaboratorResultExt<T> {
    /// Map any error into a collaborator error for `stage`.
    fn stage_context(self, stage: CollaboratorStage) -> Result<T>;
}

impl<T, E> CollaboratorResultExt<T> for std::result::Result<T, E>
where
    E: fmt::Display,
{
    fn stage_context(self, stage: CollaboratorStage) -> Result<T> {
        self.map_err(|e| StrideError::collaborator(stage).with_message(e.to_string()))
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, StrideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_displays_message_verbatim() {
        let err = StrideError::invalid_input(GOAL_AND_TIMEFRAME_REQUIRED);
        assert_eq!(err.to_string(), "Goal and timeframe are required");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_collaborator_error_names_stage() {
        let err = StrideError::collaborator(CollaboratorStage::Run).with_message("exit 2");
        assert_eq!(
            err.to_string(),
            "Collaborator failed during plan execution: exit 2"
        );
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_stage_context_maps_foreign_errors() {
        let raw: std::result::Result<(), String> = Err("boom".to_string());
        let err = raw.stage_context(CollaboratorStage::Generate).unwrap_err();
        assert!(matches!(
            err,
            StrideError::Collaborator {
                stage: CollaboratorStage::Generate,
                ..
            }
        ));
    }
}
