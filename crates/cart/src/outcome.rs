use serde::{Deserialize, Serialize};

use medisupply_products::StockKey;

use crate::error::CartError;

/// A committed cart change, as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartChange {
    /// A new line was created or an existing one grew; `quantity` is the line's new quantity.
    Added { key: StockKey, quantity: i64 },
    Updated { key: StockKey, quantity: i64 },
    Removed { key: StockKey },
}

impl CartChange {
    pub fn key(&self) -> &StockKey {
        match self {
            CartChange::Added { key, .. }
            | CartChange::Updated { key, .. }
            | CartChange::Removed { key } => key,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            CartChange::Added { .. } => "product added to cart",
            CartChange::Updated { .. } => "quantity updated",
            CartChange::Removed { .. } => "product removed from cart",
        }
    }
}

/// `{success, message}` result handed to UI callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartOutcome {
    pub success: bool,
    pub message: String,
}

impl CartOutcome {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl From<Result<CartChange, CartError>> for CartOutcome {
    fn from(result: Result<CartChange, CartError>) -> Self {
        match result {
            Ok(change) => CartOutcome::ok(change.message()),
            Err(err) => CartOutcome::failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_become_failed_outcomes_with_their_message() {
        let outcome = CartOutcome::from(Err(CartError::InsufficientStock { available: 10 }));
        assert_eq!(outcome, CartOutcome::failed("only 10 units available"));

        let outcome = CartOutcome::from(Err(CartError::ExceedsRemainingStock { remaining: 3 }));
        assert_eq!(outcome.message, "you can only add 3 more units");
    }

    #[test]
    fn changes_become_successful_outcomes() {
        let key = StockKey::new("SKU001", "WH001");
        let outcome = CartOutcome::from(Ok(CartChange::Removed { key }));
        assert!(outcome.success);
        assert_eq!(outcome.message, "product removed from cart");
    }

    #[test]
    fn serializes_as_success_and_message() {
        let json = serde_json::to_value(CartOutcome::ok("quantity updated")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "message": "quantity updated"}));
    }
}
