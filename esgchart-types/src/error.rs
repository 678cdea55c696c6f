use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the esgchart workspace.
///
/// `NotFound` is the one distinguished recoverable kind: the ticker has no ESG
/// coverage upstream. `Connector` covers transport failures and `Data` covers
/// responses that arrived but could not be understood. Every variant aborts the
/// pipeline for the current request; no partial results are ever produced.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EsgError {
    /// The requested capability is not implemented by the target connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "esg_chart").
        capability: String,
    },

    /// Issues with the returned or expected data (missing series, bad timestamps, invalid JSON).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector failed to complete the transport round-trip.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// The ticker has no ESG coverage or does not exist upstream.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "esg chart for AAPL".
        what: String,
    },

    /// Middleware stack configuration is invalid (duplicate layers, etc.).
    #[error("invalid middleware stack: {message}")]
    InvalidMiddlewareStack {
        /// Human-readable description of the validation failure.
        message: String,
    },
}

impl EsgError {
    /// Helper: build an `Unsupported` error for a capability string.
    #[must_use]
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// True for the no-coverage condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True for network/transport failures reported by a connector.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connector { .. })
    }

    /// Returns true if this error should be surfaced to operators as actionable.
    ///
    /// Missing coverage and capability absence are benign; everything else
    /// points at a broken transport, a changed upstream schema, or bad input.
    #[must_use]
    pub const fn is_actionable(&self) -> bool {
        !matches!(self, Self::Unsupported { .. } | Self::NotFound { .. })
    }

    /// Message shown to the end user when a lookup for `ticker` is aborted.
    ///
    /// The text is deliberately the same for every variant, so any failure
    /// reads as missing data. Callers that need the distinction match on `self`.
    #[must_use]
    pub fn user_message(&self, ticker: &str) -> String {
        format!("Data doesn't exist for {ticker}")
    }
}

