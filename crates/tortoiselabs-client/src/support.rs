//! Support ticket endpoints under `/support/`

use crate::client::TortoiseLabsClient;
use crate::error::TortoiseLabsError;
use serde_json::Value;

/// Support endpoint group, borrowed from a [`TortoiseLabsClient`]
#[derive(Debug, Clone, Copy)]
pub struct Support<'a> {
    client: &'a TortoiseLabsClient,
}

impl<'a> Support<'a> {
    pub(crate) fn new(client: &'a TortoiseLabsClient) -> Self {
        Self { client }
    }

    /// List the account's tickets
    pub async fn tickets(&self) -> Result<Value, TortoiseLabsError> {
        self.client.get("/support/tickets", &[]).await
    }

    /// Open a new ticket
    pub async fn new_ticket(&self, subject: &str, message: &str) -> Result<Value, TortoiseLabsError> {
        self.client
            .post("/support/ticket/new", &[("subject", subject), ("message", message)])
            .await
    }

    /// A ticket and its replies
    pub async fn ticket(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/support/ticket/{id}"), &[]).await
    }

    /// Reply to a ticket
    pub async fn reply(&self, id: u64, message: &str) -> Result<Value, TortoiseLabsError> {
        self.client
            .post(&format!("/support/ticket/{id}"), &[("message", message)])
            .await
    }

    /// Close a ticket
    pub async fn close(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/support/ticket/{id}/close"), &[]).await
    }
}
