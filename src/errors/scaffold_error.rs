//! Custom error types for the scaffold

use alloy::primitives::Address;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Query failed: {operation} - {message}")]
    Query {
        operation: String,
        message: String,
    },

    #[error("Transaction failed: {operation} - {message}")]
    Transaction {
        operation: String,
        message: String,
    },

    #[error("Contract interaction failed: {contract} - {message}")]
    Contract {
        contract: Address,
        message: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        field: String,
        reason: String,
    },

    #[error("Pool {pool} is not registered with the vault")]
    PoolNotRegistered { pool: Address },

    #[error("Pool {pool} is paused")]
    PoolPaused { pool: Address },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data parsing error: {context}")]
    DataParsing {
        context: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Arbitrage not profitable")]
    ArbitrageNotProfitable,
}

pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

impl ScaffoldError {
    /// Query error carrying the provider's short message.
    pub fn query(operation: &str, err: impl std::fmt::Display) -> Self {
        Self::Query {
            operation: operation.to_string(),
            message: super::short_message(&err.to_string()),
        }
    }

    pub fn transaction(operation: &str, err: impl std::fmt::Display) -> Self {
        Self::Transaction {
            operation: operation.to_string(),
            message: super::short_message(&err.to_string()),
        }
    }

    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// The one-line message shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Query { message, .. } | Self::Transaction { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    pub fn is_query_error(&self) -> bool {
        matches!(self, Self::Query { .. })
    }

    pub fn is_transaction_error(&self) -> bool {
        matches!(self, Self::Transaction { .. })
    }
}
