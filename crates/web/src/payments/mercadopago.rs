use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::{PaymentError, PaymentProvider, Preference, ProviderPaymentStatus};

const API_BASE: &str = "https://api.mercadopago.com";

/// Mercado Pago Checkout Pro client. Preferences are created per
/// registration; payment state is reconciled by searching payments with the
/// registration id as `external_reference`.
pub struct MercadoPago {
    http: reqwest::Client,
    access_token: String,
    api_base: String,
    public_base_url: String,
}

impl MercadoPago {
    pub fn new(access_token: String, public_base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            access_token,
            api_base: API_BASE.to_string(),
            public_base_url,
        }
    }
}

#[derive(Debug, Deserialize)]
struct PreferenceResponse {
    init_point: String,
}

#[derive(Debug, Deserialize)]
struct PaymentSearchResponse {
    results: Vec<PaymentResult>,
}

#[derive(Debug, Deserialize)]
struct PaymentResult {
    status: String,
}

#[async_trait]
impl PaymentProvider for MercadoPago {
    async fn create_preference(
        &self,
        registration_id: Uuid,
        amount: i64,
        payer_email: &str,
    ) -> Result<Preference, PaymentError> {
        let body = json!({
            "items": [{
                "title": "Inscripción Super GP Corona Club XP",
                "quantity": 1,
                "unit_price": amount,
                "currency_id": "COP",
            }],
            "payer": { "email": payer_email },
            "external_reference": registration_id.to_string(),
            "back_urls": {
                "success": format!("{}/pago-exitoso?registration_id={registration_id}", self.public_base_url),
                "failure": format!("{}/pago-fallido?registration_id={registration_id}", self.public_base_url),
                "pending": format!("{}/pago-exitoso?registration_id={registration_id}", self.public_base_url),
            },
            "auto_return": "approved",
        });

        let response = self
            .http
            .post(format!("{}/checkout/preferences", self.api_base))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PaymentError::Provider(detail));
        }

        let preference: PreferenceResponse = response.json().await?;
        Ok(Preference {
            init_point: preference.init_point,
        })
    }

    async fn payment_status(
        &self,
        registration_id: Uuid,
    ) -> Result<ProviderPaymentStatus, PaymentError> {
        let response = self
            .http
            .get(format!("{}/v1/payments/search", self.api_base))
            .bearer_auth(&self.access_token)
            .query(&[("external_reference", registration_id.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(PaymentError::Provider(detail));
        }

        let search: PaymentSearchResponse = response.json().await?;

        // No payment attempt yet keeps the registration pendiente; a later
        // verify call picks it up.
        let status = match search.results.first().map(|r| r.status.as_str()) {
            Some("approved") => ProviderPaymentStatus::Approved,
            Some("rejected") | Some("cancelled") => ProviderPaymentStatus::Rejected,
            _ => ProviderPaymentStatus::Pending,
        };

        Ok(status)
    }
}
