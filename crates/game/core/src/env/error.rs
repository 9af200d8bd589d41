use crate::error::{ErrorSeverity, FightError};

use super::AssetId;

/// Errors raised when an oracle cannot answer a query.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("asset '{0}' is not registered")]
    AssetNotFound(AssetId),

    #[error("item instance {0} is not owned by the hero")]
    InstanceNotOwned(u64),
}

impl FightError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AssetNotFound(_) => "ORACLE_ASSET_NOT_FOUND",
            Self::InstanceNotOwned(_) => "ORACLE_INSTANCE_NOT_OWNED",
        }
    }
}
