use thiserror::Error;

/// Why a cart mutation was rejected. A rejected mutation never changes the ledger.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("quantity must be greater than 0")]
    InvalidQuantity,

    /// Requested quantity is above the product's stock.
    #[error("only {available} units available")]
    InsufficientStock { available: i64 },

    /// Adding to an existing line would go above the stock.
    #[error("you can only add {remaining} more units")]
    ExceedsRemainingStock { remaining: i64 },

    #[error("product not found in cart")]
    NotFound,
}
