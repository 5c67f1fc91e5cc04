// src/error.rs

use thiserror::Error;

/// Everything that can go wrong while setting up or running a policy evaluation.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid policy (s={reorder_point}, S={order_up_to}): {reason}")]
    InvalidPolicy {
        reorder_point: i64,
        order_up_to: i64,
        reason: String,
    },

    #[error("Invalid distribution: {0}")]
    Distribution(String),

    #[error("Degenerate order quantity {quantity} at inventory level {level}")]
    DegenerateOrder { level: i64, quantity: i64 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
