//! Error types for driving a match.

use crate::error::{ErrorSeverity, FightError};

/// Integration errors: the driving loop called the match out of order.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchError {
    #[error("the first turn has already been started")]
    AlreadyStarted,

    #[error("the match is already over")]
    AlreadyOver,
}

impl FightError for MatchError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyStarted => "MATCH_ALREADY_STARTED",
            Self::AlreadyOver => "MATCH_ALREADY_OVER",
        }
    }
}
