use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use medisupply_cart::CartLedger;
use medisupply_core::{DomainError, DomainResult};

use crate::config::CheckoutDefaults;
use crate::order::{OrderRequest, OrderResponse, OrderStatus, Priority};

const MIN_ADDRESS_LEN: usize = 10;

/// Role of the signed-in user placing the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Client,
    Vendor,
    Provider,
}

impl Role {
    /// Vendors order on behalf of a client and must say which one.
    pub fn requires_client(self) -> bool {
        matches!(self, Role::Vendor)
    }
}

/// Delivery details entered on the checkout screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutDetails {
    pub country: String,
    pub city: String,
    pub address: String,
    pub priority: Priority,
    pub date_estimated: Option<NaiveDate>,
    pub id_client: String,
    pub id_vendor: String,
}

impl CheckoutDetails {
    /// Empty form pre-filled with the configured country and priority.
    pub fn from_defaults(defaults: &CheckoutDefaults) -> Self {
        Self {
            country: defaults.country.clone(),
            city: String::new(),
            address: String::new(),
            priority: defaults.priority,
            date_estimated: None,
            id_client: String::new(),
            id_vendor: String::new(),
        }
    }

    pub fn validate(&self, role: Role) -> DomainResult<NaiveDate> {
        if self.country.trim().is_empty() {
            return Err(DomainError::validation("country is required"));
        }
        if self.city.trim().is_empty() {
            return Err(DomainError::validation("city is required"));
        }
        if self.address.trim().chars().count() < MIN_ADDRESS_LEN {
            return Err(DomainError::validation(format!(
                "address must be at least {MIN_ADDRESS_LEN} characters"
            )));
        }
        let Some(date_estimated) = self.date_estimated else {
            return Err(DomainError::validation("estimated delivery date is required"));
        };
        if role.requires_client() && self.id_client.trim().is_empty() {
            return Err(DomainError::validation("client is required for vendor orders"));
        }
        Ok(date_estimated)
    }

    /// Validate and build the submission payload for `cart`.
    pub fn to_order_request(&self, cart: &CartLedger, role: Role) -> DomainResult<OrderRequest> {
        let date_estimated = self.validate(role)?;

        if cart.is_empty() {
            return Err(DomainError::validation("cart is empty"));
        }

        Ok(OrderRequest {
            priority: self.priority,
            products: OrderRequest::lines_from(cart),
            order_status: OrderStatus::Pending,
            country: self.country.trim().to_string(),
            city: self.city.trim().to_string(),
            address: self.address.trim().to_string(),
            date_estimated,
            id_client: self.id_client.clone(),
            id_vendor: self.id_vendor.clone(),
        })
    }
}

/// Outbound port to the order service.
pub trait OrderGateway {
    fn create_order(&self, request: &OrderRequest) -> anyhow::Result<OrderResponse>;
}

#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error(transparent)]
    Invalid(#[from] DomainError),

    #[error("order submission failed: {0:#}")]
    Submission(anyhow::Error),
}

/// Submit the cart as an order. The cart is cleared only once the order
/// service has accepted the order; on any error it is left as it was.
pub fn checkout<G: OrderGateway + ?Sized>(
    cart: &mut CartLedger,
    details: &CheckoutDetails,
    role: Role,
    gateway: &G,
) -> Result<OrderResponse, CheckoutError> {
    let request = details.to_order_request(cart, role).inspect_err(|err| {
        tracing::debug!(error = %err, "checkout rejected");
    })?;

    let response = gateway.create_order(&request).map_err(|err| {
        tracing::error!(error = %err, lines = request.products.len(), "order submission failed");
        CheckoutError::Submission(err)
    })?;

    tracing::info!(
        order_id = %response.id,
        lines = request.products.len(),
        total = %request.total(),
        "order submitted"
    );
    cart.clear_cart();

    Ok(response)
}
