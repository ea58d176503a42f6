//! Products Data

use jiff::Timestamp;
use rust_decimal::Decimal;

use crate::domain::products::{errors::ValidationError, records::ProductRecord};

/// Product as entered on the create page, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub desc: String,
    pub price: Option<Decimal>,
    pub images: Vec<String>,
    pub condition: Option<String>,
    pub color: Option<String>,
}

impl ProductDraft {
    /// Check required fields and the price bound.
    ///
    /// Emptiness is exact: a name of `" "` is accepted.
    ///
    /// # Errors
    ///
    /// Returns the first constraint the draft violates.
    pub fn validate(self) -> Result<ValidatedProduct, ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.desc.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let price = self.price.ok_or(ValidationError::MissingPrice)?;

        if price < Decimal::ZERO {
            return Err(ValidationError::NegativePrice(price));
        }

        Ok(ValidatedProduct {
            name: self.name,
            desc: self.desc,
            price,
            images: self.images,
            condition: self.condition,
            color: self.color,
        })
    }
}

/// Draft that passed validation and may be written.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProduct {
    name: String,
    desc: String,
    price: Decimal,
    images: Vec<String>,
    condition: Option<String>,
    color: Option<String>,
}

impl ValidatedProduct {
    /// Stamp the creation time and produce the persisted shape.
    #[must_use]
    pub fn into_record(self, created: Timestamp) -> ProductRecord {
        ProductRecord {
            name: self.name,
            desc: self.desc,
            price: self.price,
            created,
            images: self.images,
            condition: self.condition,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn draft(name: &str, desc: &str, price: Option<i64>) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            desc: desc.to_string(),
            price: price.map(Decimal::from),
            ..ProductDraft::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        let result = draft("Lamp", "Nice", Some(5)).validate();

        assert!(result.is_ok(), "expected valid draft, got {result:?}");
    }

    #[test]
    fn zero_price_is_allowed() {
        let result = draft("Lamp", "Free to a good home", Some(0)).validate();

        assert!(result.is_ok(), "zero price should be valid, got {result:?}");
    }

    #[test]
    fn whitespace_name_is_not_empty() {
        let result = draft(" ", "Nice", Some(5)).validate();

        assert!(result.is_ok(), "whitespace counts as content, got {result:?}");
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            draft("", "Nice", Some(5)).validate(),
            Err(ValidationError::EmptyName)
        );
        assert_eq!(
            draft("Lamp", "", Some(5)).validate(),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(
            draft("Lamp", "Nice", None).validate(),
            Err(ValidationError::MissingPrice)
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        assert_eq!(
            draft("Lamp", "Nice", Some(-1)).validate(),
            Err(ValidationError::NegativePrice(Decimal::from(-1)))
        );
    }

    #[test]
    fn into_record_keeps_optional_fields() -> TestResult {
        let created = Timestamp::UNIX_EPOCH;
        let record = ProductDraft {
            images: vec!["https://img/1.jpg".to_string()],
            color: Some("blue".to_string()),
            ..draft("Lamp", "Nice", Some(5))
        }
        .validate()?
        .into_record(created);

        assert_eq!(record.created, created);
        assert_eq!(record.images, vec!["https://img/1.jpg".to_string()]);
        assert_eq!(record.color.as_deref(), Some("blue"));
        assert_eq!(record.condition, None);

        Ok(())
    }
}
