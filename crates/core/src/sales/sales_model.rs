//! Sale domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, Error, Result};

/// A closed property sale by a broker.
///
/// `points_earned` is an informational snapshot; sales do not feed the
/// points ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: String,
    pub user_id: String,
    pub property_name: String,
    pub client_name: Option<String>,
    pub value: f64,
    pub commission: Option<f64>,
    pub points_earned: Option<i32>,
    pub status: Option<String>,
    pub sold_at: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Input model for recording a sale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSale {
    pub user_id: String,
    pub property_name: String,
    pub client_name: Option<String>,
    pub value: f64,
    pub commission: Option<f64>,
    pub points_earned: Option<i32>,
    pub status: Option<String>,
    pub sold_at: NaiveDateTime,
}

impl NewSale {
    /// Validates the sale data before any write.
    pub fn validate(&self) -> Result<()> {
        if self.property_name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "propertyName".to_string(),
            )));
        }
        if self.value <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Sale value must be positive".to_string(),
            )));
        }
        Ok(())
    }
}
