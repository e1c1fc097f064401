//! Error handling for price table sourcing.

use std::path::PathBuf;

/// Configuration failure: the price table could not be sourced, parsed, or
/// does not satisfy the pricing invariants.
///
/// Always blocking. The embedding application surfaces the message and must
/// not offer the quote form until the table loads; no defaults are ever
/// substituted and nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no price table configured: set {}", crate::config::PRICING_FILE_ENV)]
    NotConfigured,

    #[error("could not read price table {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse price table {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },

    #[error("invalid price table {}: {}", .path.display(), .errors.join("; "))]
    Invalid {
        path: PathBuf,
        errors: Vec<String>,
    },
}
