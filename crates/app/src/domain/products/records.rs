//! Product Records

use jiff::Timestamp;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product as persisted at `products/{id}`.
///
/// Only `name`, `price` and `created` are required when reading; every other
/// field falls back to an empty value so older records still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,

    #[serde(default)]
    pub desc: String,

    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub created: Timestamp,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_minimal_record() -> TestResult {
        let record = ProductRecord::deserialize(&json!({
            "name": "Desk",
            "price": 20,
            "created": "2024-01-01T00:00:00Z",
        }))?;

        assert_eq!(record.name, "Desk");
        assert_eq!(record.price, Decimal::from(20));
        assert!(record.desc.is_empty(), "missing desc should default to empty");
        assert!(record.images.is_empty(), "missing images should default to empty");
        assert_eq!(record.condition, None);

        Ok(())
    }

    #[test]
    fn decodes_millisecond_timestamps() -> TestResult {
        let record = ProductRecord::deserialize(&json!({
            "name": "Lamp",
            "desc": "Nice",
            "price": 5.5,
            "created": "2024-03-05T10:15:30.123Z",
        }))?;

        assert_eq!(record.created, "2024-03-05T10:15:30.123Z".parse::<Timestamp>()?);
        assert_eq!(record.price, Decimal::new(55, 1));

        Ok(())
    }

    #[test]
    fn encodes_price_as_number_and_omits_empty_optionals() -> TestResult {
        let record = ProductRecord {
            name: "Lamp".to_string(),
            desc: "Nice".to_string(),
            price: Decimal::from(5),
            created: "2024-01-01T00:00:00Z".parse()?,
            images: Vec::new(),
            condition: None,
            color: Some("red".to_string()),
        };

        let value = serde_json::to_value(&record)?;

        assert!(value["price"].is_number(), "price should be a JSON number");
        assert_eq!(value["created"], "2024-01-01T00:00:00Z");
        assert_eq!(value["color"], "red");
        assert!(value.get("images").is_none(), "empty images should be omitted");
        assert!(value.get("condition").is_none(), "absent condition should be omitted");

        Ok(())
    }

    #[test]
    fn rejects_record_without_name() {
        let result = ProductRecord::deserialize(&json!({
            "price": 1,
            "created": "2024-01-01T00:00:00Z",
        }));

        assert!(result.is_err(), "a record without a name should not decode");
    }
}
