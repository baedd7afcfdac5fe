//! Invoice and service credit endpoints under `/invoice/`

use crate::client::TortoiseLabsClient;
use crate::error::TortoiseLabsError;
use serde_json::Value;
use tracing::debug;

/// Billing endpoint group, borrowed from a [`TortoiseLabsClient`]
#[derive(Debug, Clone, Copy)]
pub struct Billing<'a> {
    client: &'a TortoiseLabsClient,
}

impl<'a> Billing<'a> {
    pub(crate) fn new(client: &'a TortoiseLabsClient) -> Self {
        Self { client }
    }

    /// List the account's invoices
    pub async fn invoices(&self) -> Result<Value, TortoiseLabsError> {
        self.client.get("/invoice/list", &[]).await
    }

    /// A single invoice
    pub async fn invoice(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/invoice/{id}"), &[]).await
    }

    /// Add service credit; the response carries the invoice to pay
    ///
    /// `amount` must be finite and greater than zero.
    pub async fn add_credit(&self, amount: f64) -> Result<Value, TortoiseLabsError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(TortoiseLabsError::InvalidRequest(format!(
                "credit amount must be a positive number, got {amount}"
            )));
        }
        debug!("Requesting {} in service credit", amount);
        let amount = amount.to_string();
        self.client
            .post("/invoice/svccredit", &[("creditamt", amount.as_str())])
            .await
    }
}
