//! Shipping destination and contact details.

use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// Destination and contact details for one order.
///
/// Only `district` participates in pricing; the rest is required for
/// submission but never read by the pricing engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingInfo {
    /// Recipient name.
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Street address.
    pub address: String,
    /// District; drives delivery-tier selection.
    pub district: String,
    /// Thana / upazila.
    pub thana: String,
    /// Postal code.
    pub zip_code: String,
    /// Country.
    pub country: String,
}

impl ShippingInfo {
    /// Validate that every required field is non-empty.
    ///
    /// Reports the first missing field, matching the one-message-at-a-time
    /// error surface of the checkout form.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        let fields: [(&'static str, &str); 8] = [
            ("name", &self.name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("address", &self.address),
            ("district", &self.district),
            ("thana", &self.thana),
            ("zipCode", &self.zip_code),
            ("country", &self.country),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(CheckoutError::MissingShippingField(field));
            }
        }
        Ok(())
    }

    /// Check completeness without caring which field is missing.
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}
