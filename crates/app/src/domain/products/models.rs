//! Product Models

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::{domain::products::records::ProductRecord, keys::TypedKey};

/// Product key, assigned by the store on creation.
pub type ProductId = TypedKey<Product>;

/// Product Model
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub created_at: Timestamp,
    pub images: Vec<String>,
    pub condition: Option<String>,
    pub color: Option<String>,
}

impl Product {
    #[must_use]
    pub fn from_record(id: ProductId, record: ProductRecord) -> Self {
        Self {
            id,
            name: record.name,
            description: record.desc,
            price: record.price,
            created_at: record.created,
            images: record.images,
            condition: record.condition,
            color: record.color,
        }
    }

    /// Decode the JSON value stored under `products/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an error when the value does not have the persisted record shape.
    pub fn decode(id: ProductId, value: &Value) -> Result<Self, serde_json::Error> {
        ProductRecord::deserialize(value).map(|record| Self::from_record(id, record))
    }

    /// Image shown in the main gallery slot.
    #[must_use]
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
