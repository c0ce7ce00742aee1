//! Sales orders domain module.
//!
//! Turns a cart into the order-submission payload expected by the order
//! service, validates the checkout details, and runs the submit-then-clear
//! checkout flow against an [`OrderGateway`]. No HTTP lives here.

pub mod checkout;
pub mod config;
pub mod order;

pub use checkout::{CheckoutDetails, CheckoutError, OrderGateway, Role, checkout};
pub use config::CheckoutDefaults;
pub use order::{Order, OrderProduct, OrderRequest, OrderResponse, OrderStatus, Priority};
