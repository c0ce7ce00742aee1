//! Monetary amounts.

use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Decimal amount of money, as the catalog and order service exchange it
/// (`"unit_value": 3.1`). Arithmetic saturates at `Decimal::MAX` instead of
/// overflowing.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    pub fn new(amount: impl Into<Decimal>) -> Self {
        Self(amount.into())
    }

    pub const fn amount(&self) -> Decimal {
        self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Price of `quantity` units at `self` each. Non-positive quantities
    /// price at zero.
    pub fn times(self, quantity: i64) -> Money {
        if quantity <= 0 {
            return Money::ZERO;
        }
        Money(
            self.0
                .checked_mul(Decimal::from(quantity))
                .unwrap_or(Decimal::MAX),
        )
    }
}

impl ValueObject for Money {}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.checked_add(rhs.0).unwrap_or(Decimal::MAX))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
