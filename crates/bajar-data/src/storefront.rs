//! Typed bindings for the storefront checkout endpoints.
//!
//! The server is authoritative for everything returned here: coupon
//! discount amounts are applied as-is, never recomputed, and the final
//! price is re-validated server-side at payment initialization.

use crate::{ApiClient, ApiError, Response};
use bajar_checkout::checkout::OrderSubmission;
use bajar_checkout::delivery::ChargeConfig;
use bajar_checkout::discount::{CouponSnapshot, DiscountType};
use bajar_checkout::ids::ProductId;
use bajar_checkout::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Typed client for the storefront REST API.
pub struct StorefrontApi {
    client: ApiClient,
    token: Option<String>,
}

/// Wire shape of `GET /api/v1/charges`.
#[derive(Debug, Deserialize)]
struct ChargeEnvelope {
    charge: ChargeWire,
}

#[derive(Debug, Deserialize)]
struct ChargeWire {
    price: f64,
}

/// Request body for `POST /api/v1/coupon/apply`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CouponApplyRequest<'a> {
    code: &'a str,
    amount: f64,
    product_ids: Vec<&'a str>,
}

/// Wire shape of the coupon apply response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CouponApplyResponse {
    coupon: CouponWire,
    discount_amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CouponWire {
    code: String,
    discount_type: DiscountType,
    discount_value: f64,
}

/// Wire shape of the payment initialization response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RedirectWire {
    redirect_url: Option<String>,
}

/// A successful payment initialization: where to send the browser.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRedirect {
    /// External payment gateway URL.
    pub redirect_url: String,
}

impl StorefrontApi {
    /// Create an API client against a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: ApiClient::new()
                .with_base_url(base_url)
                .with_default_header("Accept", "application/json"),
            token: None,
        }
    }

    /// Attach a bearer token for the authenticated endpoints.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    fn authorize(&self, builder: crate::ClientRequestBuilder) -> crate::ClientRequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Fetch the order-wide free-delivery threshold.
    pub fn fetch_charge_config(&self) -> Result<ChargeConfig, ApiError> {
        debug!("fetching charge config");
        let response = self.client.get("/api/v1/charges").send()?;
        parse_charge_config(response)
    }

    /// Apply a coupon code against the current product subtotal.
    ///
    /// On success the server returns the resolved discount amount; the
    /// client treats it as authoritative. On rejection the server's
    /// message surfaces as [`ApiError::Rejected`] and no discount is
    /// applied.
    pub fn apply_coupon(
        &self,
        code: &str,
        subtotal: &Money,
        product_ids: &[ProductId],
    ) -> Result<CouponSnapshot, ApiError> {
        debug!(code, amount = subtotal.to_decimal(), "applying coupon");
        let body = CouponApplyRequest {
            code,
            amount: subtotal.to_decimal(),
            product_ids: product_ids.iter().map(|id| id.as_str()).collect(),
        };
        let response = self
            .authorize(self.client.post("/api/v1/coupon/apply"))
            .json(&body)?
            .send()?;
        parse_coupon(response, subtotal.currency)
    }

    /// Clear any server-side coupon session state.
    pub fn clear_coupon(&self) -> Result<(), ApiError> {
        debug!("clearing coupon");
        let response = self
            .authorize(self.client.post("/api/v1/coupon/clear"))
            .send()?;
        response.error_for_status().map(|_| ())
    }

    /// Submit the assembled order and get the gateway redirect URL.
    ///
    /// No retry and no optimistic state: a failure here means the order
    /// was not placed.
    pub fn initialize_payment(
        &self,
        order: &OrderSubmission,
    ) -> Result<PaymentRedirect, ApiError> {
        debug!(order_id = %order.order_id, amount = %order.payment.amount, "initializing payment");
        let response = self
            .authorize(self.client.post("/api/v1/payment/initialize"))
            .json(order)?
            .send()?;
        let redirect = parse_payment_redirect(response);
        if redirect.is_err() {
            warn!(order_id = %order.order_id, "payment initialization failed");
        }
        redirect
    }
}

fn parse_charge_config(response: Response) -> Result<ChargeConfig, ApiError> {
    let envelope: ChargeEnvelope = response.error_for_status()?.json()?;
    Ok(ChargeConfig {
        price: Money::from_decimal(envelope.charge.price, Currency::BDT),
    })
}

fn parse_coupon(response: Response, currency: Currency) -> Result<CouponSnapshot, ApiError> {
    let body: CouponApplyResponse = response.error_for_status()?.json()?;
    Ok(CouponSnapshot {
        code: body.coupon.code,
        discount_type: body.coupon.discount_type,
        discount_value: body.coupon.discount_value,
        discount_amount: Money::from_decimal(body.discount_amount, currency),
    })
}

fn parse_payment_redirect(response: Response) -> Result<PaymentRedirect, ApiError> {
    let wire: RedirectWire = response.error_for_status()?.json()?;
    match wire.redirect_url {
        Some(url) if !url.is_empty() => Ok(PaymentRedirect { redirect_url: url }),
        _ => Err(ApiError::MissingPaymentLink),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn response(status: u16, body: &str) -> Response {
        Response::new(status, HashMap::new(), body.as_bytes().to_vec())
    }

    #[test]
    fn test_parse_charge_config() {
        let config =
            parse_charge_config(response(200, r#"{"charge":{"price":1000}}"#)).unwrap();
        assert_eq!(config.price, Money::from_major(1000, Currency::BDT));
    }

    #[test]
    fn test_parse_coupon_success() {
        let body = r#"{
            "coupon": {"code":"SAVE10","discountType":"percentage","discountValue":10},
            "discountAmount": 50
        }"#;
        let coupon = parse_coupon(response(200, body), Currency::BDT).unwrap();
        assert_eq!(coupon.code, "SAVE10");
        assert_eq!(coupon.discount_type, DiscountType::Percentage);
        assert_eq!(coupon.discount_amount, Money::from_major(50, Currency::BDT));
    }

    #[test]
    fn test_parse_coupon_rejection_surfaces_message() {
        let result = parse_coupon(
            response(400, r#"{"message":"Invalid coupon code"}"#),
            Currency::BDT,
        );
        assert_eq!(
            result.unwrap_err(),
            ApiError::Rejected("Invalid coupon code".to_string())
        );
    }

    #[test]
    fn test_parse_payment_redirect() {
        let redirect = parse_payment_redirect(response(
            200,
            r#"{"redirectUrl":"https://eps.example.com/pay/123"}"#,
        ))
        .unwrap();
        assert_eq!(redirect.redirect_url, "https://eps.example.com/pay/123");
    }

    #[test]
    fn test_missing_redirect_url_is_failure() {
        assert_eq!(
            parse_payment_redirect(response(200, r#"{}"#)).unwrap_err(),
            ApiError::MissingPaymentLink
        );
        assert_eq!(
            parse_payment_redirect(response(200, r#"{"redirectUrl":""}"#)).unwrap_err(),
            ApiError::MissingPaymentLink
        );
    }

    #[test]
    fn test_coupon_request_wire_shape() {
        let body = CouponApplyRequest {
            code: "SAVE10",
            amount: 500.0,
            product_ids: vec!["p1", "p2"],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["code"], "SAVE10");
        assert_eq!(json["amount"], 500.0);
        assert_eq!(json["productIds"][1], "p2");
    }
}
