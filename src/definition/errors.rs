/// Errors from the content view definition commands.
use thiserror::Error;

use crate::api::ApiError;

/// `sysexits.h` codes used by the CLI.
pub mod exit {
    /// Command line usage error.
    pub const USAGE: i32 = 64;
    /// Input data was incorrect (unknown definition or view).
    pub const DATA_ERR: i32 = 65;
    /// A remote service was unavailable or refused the request.
    pub const UNAVAILABLE: i32 = 69;
    /// Configuration error.
    pub const CONFIG: i32 = 78;
}

/// Errors that terminate a command invocation.
#[derive(Debug, Error)]
pub enum ActionError {
    /// One or more required options were not given.
    #[error("Missing required option(s): {}", missing.iter().map(|o| format!("--{o}")).collect::<Vec<_>>().join(", "))]
    Usage {
        /// Names of the missing options.
        missing: Vec<&'static str>,
    },

    /// No content view definition with this label exists in the organization.
    #[error("Content view definition '{label}' not found in organization '{org}'")]
    DefinitionNotFound {
        /// Organization name.
        org: String,
        /// Definition label.
        label: String,
    },

    /// No content view with this label exists in the organization.
    #[error("Content view '{label}' not found in organization '{org}'")]
    ViewNotFound {
        /// Organization name.
        org: String,
        /// View label.
        label: String,
    },

    /// The server could not be reached or rejected a request.
    #[error("{0}")]
    Remote(#[from] ApiError),

    /// Connection settings are invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ActionError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } => exit::USAGE,
            Self::DefinitionNotFound { .. } | Self::ViewNotFound { .. } => exit::DATA_ERR,
            Self::Remote(_) => exit::UNAVAILABLE,
            Self::Config(_) => exit::CONFIG,
        }
    }

    /// Machine-readable error code for JSON error output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage_error",
            Self::DefinitionNotFound { .. } => "definition_not_found",
            Self::ViewNotFound { .. } => "view_not_found",
            Self::Remote(_) => "remote_error",
            Self::Config(_) => "config_error",
        }
    }
}
