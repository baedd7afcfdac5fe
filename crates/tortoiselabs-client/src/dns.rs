//! DNS zone and record endpoints under `/dns/`

use crate::client::TortoiseLabsClient;
use crate::error::TortoiseLabsError;
use crate::models::DnsRecord;
use serde_json::Value;

/// DNS endpoint group, borrowed from a [`TortoiseLabsClient`]
#[derive(Debug, Clone, Copy)]
pub struct Dns<'a> {
    client: &'a TortoiseLabsClient,
}

impl<'a> Dns<'a> {
    pub(crate) fn new(client: &'a TortoiseLabsClient) -> Self {
        Self { client }
    }

    /// List all zones on the account
    pub async fn zones(&self) -> Result<Value, TortoiseLabsError> {
        self.client.get("/dns/zones", &[]).await
    }

    /// A zone and its records
    pub async fn zone(&self, zone_id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/dns/zone/{zone_id}"), &[]).await
    }

    /// Create a zone for `domain`
    pub async fn new_zone(&self, domain: &str) -> Result<Value, TortoiseLabsError> {
        self.client
            .post("/dns/zones/new", &[("domain_name", domain)])
            .await
    }

    /// Delete a zone and all of its records
    pub async fn delete_zone(&self, zone_id: u64) -> Result<Value, TortoiseLabsError> {
        self.client
            .get(&format!("/dns/zone/{zone_id}/delete"), &[])
            .await
    }

    /// Add a record to a zone
    pub async fn new_record(&self, zone_id: u64, record: &DnsRecord) -> Result<Value, TortoiseLabsError> {
        let ttl = record.ttl.to_string();
        let prio = record.priority.to_string();
        self.client
            .post(
                &format!("/dns/zone/{zone_id}/record/new"),
                &[
                    ("subdomain", record.subdomain.as_str()),
                    ("type", record.record_type.as_str()),
                    ("ttl", ttl.as_str()),
                    ("prio", prio.as_str()),
                    ("content", record.content.as_str()),
                ],
            )
            .await
    }

    /// Change a record's subdomain and content
    pub async fn modify_record(
        &self,
        zone_id: u64,
        record_id: u64,
        subdomain: &str,
        content: &str,
    ) -> Result<Value, TortoiseLabsError> {
        self.client
            .post(
                &format!("/dns/zone/{zone_id}/record/{record_id}"),
                &[("subdomain", subdomain), ("content", content)],
            )
            .await
    }

    /// Remove a record from a zone
    pub async fn delete_record(&self, zone_id: u64, record_id: u64) -> Result<Value, TortoiseLabsError> {
        self.client
            .get(&format!("/dns/zone/{zone_id}/record/{record_id}/delete"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::mock_client;
    use crate::common::HttpMethod;
    use serde_json::json;

    #[tokio::test]
    async fn test_new_record_uses_defaults() {
        let (client, mock) = mock_client();
        mock.push_json(json!({"id": 99}));

        let record = DnsRecord::new("www", "A", "192.0.2.10");
        let created = client.dns().new_record(3, &record).await.unwrap();
        assert_eq!(created["id"], 99);

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://api.test/dns/zone/3/record/new");
        assert_eq!(
            request.body.as_deref(),
            Some("subdomain=www&type=A&ttl=300&prio=0&content=192.0.2.10")
        );
    }

    #[tokio::test]
    async fn test_new_record_custom_ttl_and_priority() {
        let (client, mock) = mock_client();
        let record = DnsRecord::new("@", "MX", "mail.example.com")
            .with_ttl(3600)
            .with_priority(10);
        client.dns().new_record(3, &record).await.unwrap();

        let body = mock.last_request().unwrap().body.unwrap();
        assert!(body.contains("ttl=3600&prio=10"));
        assert!(body.starts_with("subdomain=%40&type=MX"));
    }

    #[tokio::test]
    async fn test_zone_lifecycle_paths() {
        let (client, mock) = mock_client();
        let dns = client.dns();

        dns.zones().await.unwrap();
        dns.new_zone("example.com").await.unwrap();
        dns.zone(4).await.unwrap();
        dns.modify_record(4, 11, "api", "192.0.2.20").await.unwrap();
        dns.delete_record(4, 11).await.unwrap();
        dns.delete_zone(4).await.unwrap();

        let requests = mock.requests();
        let calls: Vec<(HttpMethod, &str)> = requests
            .iter()
            .map(|r| (r.method, r.url.trim_start_matches("https://api.test")))
            .collect();
        assert_eq!(
            calls,
            [
                (HttpMethod::Get, "/dns/zones"),
                (HttpMethod::Post, "/dns/zones/new"),
                (HttpMethod::Get, "/dns/zone/4"),
                (HttpMethod::Post, "/dns/zone/4/record/11"),
                (HttpMethod::Get, "/dns/zone/4/record/11/delete"),
                (HttpMethod::Get, "/dns/zone/4/delete"),
            ]
        );
        assert_eq!(requests[1].body.as_deref(), Some("domain_name=example.com"));
        assert_eq!(requests[3].body.as_deref(), Some("subdomain=api&content=192.0.2.20"));
    }
}
