//! @acp:module "Errors"
//! @acp:summary "Error types shared by the planner, loader and config layers"
//! @acp:domain cli
//! @acp:layer types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the page planner
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Unknown business category: {0}")]
    UnknownCategory(String),

    #[error("Unknown section '{id}' in category '{category}'")]
    UnknownSection { category: String, id: String },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid condition '{expr}': {reason}")]
    InvalidCondition { expr: String, reason: String },

    #[error("Invalid {field} '{value}'")]
    InvalidValue { field: &'static str, value: String },

    #[error("IO error when reading `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl PlanError {
    /// Configuration errors are fatal: the catalog or the requested category is
    /// unusable and no plan can be produced.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            PlanError::UnknownCategory(_)
                | PlanError::UnknownSection { .. }
                | PlanError::InvalidCatalog(_)
        )
    }

    pub(crate) fn invalid_condition(expr: &str, reason: impl Into<String>) -> Self {
        PlanError::InvalidCondition {
            expr: expr.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, PlanError>;
