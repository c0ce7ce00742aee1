use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use medisupply_cart::{CartLedger, CartLineItem};
use medisupply_core::{DomainError, Money};

/// Delivery priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Priority::High),
            "MEDIUM" => Ok(Priority::Medium),
            "LOW" => Ok(Priority::Low),
            other => Err(DomainError::validation(format!("unknown priority: {other}"))),
        }
    }
}

/// Order status lifecycle, as reported by the order service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
}

/// Order line as the order service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    /// Product SKU.
    pub id: String,
    pub name: String,
    pub amount: i64,
    pub id_warehouse: String,
    /// Decimal unit price, as the catalog reported it.
    pub unit_price: Money,
}

impl From<&CartLineItem> for OrderProduct {
    fn from(item: &CartLineItem) -> Self {
        let product = item.product();
        Self {
            id: product.sku().to_string(),
            name: product.name().to_string(),
            amount: item.quantity(),
            id_warehouse: product.warehouse().to_string(),
            unit_price: product.unit_value(),
        }
    }
}

/// Order-submission payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub priority: Priority,
    pub products: Vec<OrderProduct>,
    pub order_status: OrderStatus,
    pub country: String,
    pub city: String,
    pub address: String,
    pub date_estimated: NaiveDate,
    pub id_client: String,
    pub id_vendor: String,
}

impl OrderRequest {
    /// Order lines for every cart line, in cart order.
    pub fn lines_from(cart: &CartLedger) -> Vec<OrderProduct> {
        cart.lines().iter().map(OrderProduct::from).collect()
    }

    /// Sum of `amount × unit_price` over all lines.
    pub fn total(&self) -> Money {
        self.products
            .iter()
            .map(|line| line.unit_price.times(line.amount))
            .sum()
    }
}

/// Order as stored by the order service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(flatten)]
    pub request: OrderRequest,
    pub created_at: String,
    pub updated_at: String,
}

/// Reply of the order service to a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    pub message: String,
    pub order: Order,
}

#[cfg(test)]
mod tests {
    use super::*;
    use medisupply_core::{CartId, Decimal};
    use medisupply_products::Product;

    fn cart_with_two_lines() -> CartLedger {
        let mut cart = CartLedger::new(CartId::new());
        let laptop = Product::new("SKU001", "WH001", "Laptop Dell", 10, Money::new(1500)).unwrap();
        let chair = Product::new("SKU002", "WH002", "Office Chair", 25, Money::new(300)).unwrap();
        cart.add_to_cart(&laptop, 2);
        cart.add_to_cart(&chair, 3);
        cart
    }

    #[test]
    fn lines_map_cart_items_in_order() {
        let lines = OrderRequest::lines_from(&cart_with_two_lines());

        assert_eq!(
            lines,
            vec![
                OrderProduct {
                    id: "SKU001".to_string(),
                    name: "Laptop Dell".to_string(),
                    amount: 2,
                    id_warehouse: "WH001".to_string(),
                    unit_price: Money::new(1500),
                },
                OrderProduct {
                    id: "SKU002".to_string(),
                    name: "Office Chair".to_string(),
                    amount: 3,
                    id_warehouse: "WH002".to_string(),
                    unit_price: Money::new(300),
                },
            ]
        );
    }

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" Low ".parse::<Priority>().unwrap(), Priority::Low);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn request_uses_service_wire_names() {
        let cart = cart_with_two_lines();
        let request = OrderRequest {
            priority: Priority::High,
            products: OrderRequest::lines_from(&cart),
            order_status: OrderStatus::Pending,
            country: "Colombia".to_string(),
            city: "Bogota".to_string(),
            address: "Calle 100 # 15-20".to_string(),
            date_estimated: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            id_client: "client-1".to_string(),
            id_vendor: String::new(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["priority"], "HIGH");
        assert_eq!(json["order_status"], "PENDING");
        assert_eq!(json["date_estimated"], "2025-03-01");
        assert_eq!(json["products"][0]["id_warehouse"], "WH001");
        assert_eq!(json["products"][1]["unit_price"], 300.0);
        assert_eq!(request.total(), cart.total());
    }

    #[test]
    fn decimal_prices_reach_the_payload_unchanged() {
        let mut cart = CartLedger::new(CartId::new());
        let gauze = Product::new("SKU010", "WH001", "Gasa", 50, Money::new(Decimal::new(205, 1))).unwrap();
        cart.add_to_cart(&gauze, 4);

        let lines = OrderRequest::lines_from(&cart);
        let json = serde_json::to_value(&lines).unwrap();

        assert_eq!(json[0]["unit_price"], 20.5);
        assert_eq!(lines[0].unit_price.times(lines[0].amount), Money::new(82));
        assert_eq!(cart.total(), Money::new(82));
    }

    #[test]
    fn response_with_flattened_order_deserializes() {
        let json = serde_json::json!({
            "id": "ord-1",
            "message": "Order created",
            "order": {
                "id": "ord-1",
                "priority": "MEDIUM",
                "products": [
                    {"id": "SKU010", "name": "Gasa", "amount": 2, "id_warehouse": "WH001", "unit_price": 25.0}
                ],
                "order_status": "PENDING",
                "country": "Colombia",
                "city": "Medellin",
                "address": "Carrera 43A # 1-50",
                "date_estimated": "2025-04-10",
                "id_client": "client-9",
                "id_vendor": "vendor-2",
                "created_at": "2025-04-01T10:00:00",
                "updated_at": "2025-04-01T10:00:00"
            }
        });

        let response: OrderResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.order.request.city, "Medellin");
        assert_eq!(response.order.request.order_status, OrderStatus::Pending);
        assert_eq!(response.order.request.products[0].unit_price, Money::new(25));
        assert_eq!(response.order.request.total(), Money::new(50));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the order lines carry exactly the cart's units and value.
            #[test]
            fn lines_preserve_cart_count_and_total(
                quantities in prop::collection::vec(1i64..=20, 1..8),
                prices in prop::collection::vec(1u64..100_000, 8),
            ) {
                let mut cart = CartLedger::new(CartId::new());
                for (i, quantity) in quantities.iter().enumerate() {
                    let product = Product::new(
                        format!("SKU{i:03}"),
                        "WH001",
                        "Item",
                        20,
                        Money::new(prices[i]),
                    )
                    .unwrap();
                    prop_assert!(cart.add_to_cart(&product, *quantity).success);
                }

                let lines = OrderRequest::lines_from(&cart);
                let amount: i64 = lines.iter().map(|l| l.amount).sum();
                let value: Money = lines.iter().map(|l| l.unit_price.times(l.amount)).sum();

                prop_assert_eq!(lines.len(), quantities.len());
                prop_assert_eq!(amount, cart.item_count());
                prop_assert_eq!(value, cart.total());
            }
        }
    }
}
