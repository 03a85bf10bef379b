//! Core domain types: owners, account kinds, and cent rounding.

use derive_more::{Display, From};
use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::Serialize;

/// Opaque owner identifier. Uniqueness is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Display, From)]
#[from(forward)]
pub struct OwnerId(String);

impl OwnerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The person an account belongs to. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccountOwner {
    name: String,
    id: OwnerId,
}

impl AccountOwner {
    pub fn new(name: impl Into<String>, id: impl Into<OwnerId>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn id(&self) -> &OwnerId {
        &self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    #[display("savings")]
    Savings,
    #[display("checking")]
    Checking,
}

/// `value` rounded half-to-even to two fractional digits, with the scale fixed
/// at two. `None` for NaN, infinities and magnitudes `Decimal` cannot hold.
pub fn cents(value: f64) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64_retain(value)?.round_dp(2);
    rounded.rescale(2);
    Some(rounded)
}

/// Same rounding as [`cents`], back as a float. Values outside the `Decimal`
/// range are returned as-is.
pub fn round_cents(value: f64) -> f64 {
    cents(value)
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}
