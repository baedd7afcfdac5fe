//! VPS endpoints
//!
//! Listing, signup, imaging, HVM settings and power control under `/vps/`.

use crate::client::TortoiseLabsClient;
use crate::error::TortoiseLabsError;
use crate::models::{BootOrder, NicType};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// VPS endpoint group, borrowed from a [`TortoiseLabsClient`]
#[derive(Debug, Clone, Copy)]
pub struct Vps<'a> {
    client: &'a TortoiseLabsClient,
}

impl<'a> Vps<'a> {
    pub(crate) fn new(client: &'a TortoiseLabsClient) -> Self {
        Self { client }
    }

    /// List all VPS instances on the account (`vpslist`)
    pub async fn list_all(&self) -> Result<Value, TortoiseLabsError> {
        self.client.get("/vps/list/", &[]).await
    }

    /// List the account's VPS instances as an id -> name map
    ///
    /// Derived from [`Vps::list_all`]. Numeric ids are rendered in decimal.
    /// Entries without an `id` are skipped; a repeated id keeps the last name.
    pub async fn list_my(&self) -> Result<BTreeMap<String, String>, TortoiseLabsError> {
        let list = self.list_all().await?;
        index_by_id(&list)
    }

    /// Plans and regions available for a new VPS
    pub async fn signup_available(&self) -> Result<Value, TortoiseLabsError> {
        self.client.get("/vps/signup/", &[]).await
    }

    /// Order a new VPS using plan and region ids from [`Vps::signup_available`]
    pub async fn signup(&self, plan: u64, region: u64) -> Result<(), TortoiseLabsError> {
        debug!("Signing up for VPS plan {} in region {}", plan, region);
        let plan = plan.to_string();
        let region = region.to_string();
        self.client
            .post_action("/vps/signup/", &[("plan", plan.as_str()), ("region", region.as_str())])
            .await
    }

    /// Details of a single VPS
    pub async fn info(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/"), &[]).await
    }

    /// Templates that can be deployed onto a VPS
    pub async fn deploy_templates(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/deploy/"), &[]).await
    }

    /// (Re)image a VPS
    ///
    /// # Arguments
    /// * `id` - VPS id
    /// * `image` - Template name from [`Vps::deploy_templates`]
    /// * `root_pass` - New root password
    /// * `arch` - Architecture, e.g. `x86_64`
    pub async fn deploy(
        &self,
        id: u64,
        image: &str,
        root_pass: &str,
        arch: &str,
    ) -> Result<(), TortoiseLabsError> {
        debug!("Deploying {} ({}) onto VPS {}", image, arch, id);
        self.client
            .post_action(
                &format!("/vps/{id}/deploy"),
                &[("imagename", image), ("rootpass", root_pass), ("arch", arch)],
            )
            .await
    }

    /// Set the friendly name of a VPS
    pub async fn set_nickname(&self, id: u64, nickname: &str) -> Result<Value, TortoiseLabsError> {
        self.client
            .post(&format!("/vps/{id}/setnickname/"), &[("nickname", nickname)])
            .await
    }

    /// Enable watchdog monitoring
    pub async fn monitoring_enable(&self, id: u64) -> Result<(), TortoiseLabsError> {
        self.client
            .get_action(&format!("/vps/{id}/monitoring/enable/"), &[])
            .await
    }

    /// Disable watchdog monitoring
    pub async fn monitoring_disable(&self, id: u64) -> Result<(), TortoiseLabsError> {
        self.client
            .get_action(&format!("/vps/{id}/monitoring/disable/"), &[])
            .await
    }

    /// ISOs available to attach in HVM mode
    pub async fn hvm(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/hvm/"), &[]).await
    }

    /// Attach an ISO
    pub async fn hvm_set_iso(&self, id: u64, iso: u64) -> Result<Value, TortoiseLabsError> {
        let iso = iso.to_string();
        self.client
            .post(&format!("/vps/{id}/hvm/setiso/"), &[("isoid", iso.as_str())])
            .await
    }

    /// Set the HVM boot order
    pub async fn hvm_set_boot_order(
        &self,
        id: u64,
        order: BootOrder,
    ) -> Result<Value, TortoiseLabsError> {
        self.client
            .post(
                &format!("/vps/{id}/hvm/setbootorder/"),
                &[("bootorder", order.as_str())],
            )
            .await
    }

    /// Set the emulated NIC model
    pub async fn hvm_set_nic_type(&self, id: u64, nic: NicType) -> Result<Value, TortoiseLabsError> {
        // the API spells this parameter "nicktype"
        self.client
            .post(&format!("/vps/{id}/hvm/setnictype/"), &[("nicktype", nic.as_str())])
            .await
    }

    /// Register a custom ISO by URI
    pub async fn hvm_iso_new(&self, id: u64, name: &str, uri: &str) -> Result<Value, TortoiseLabsError> {
        self.client
            .post(
                &format!("/vps/{id}/hvmiso/new/"),
                &[("isoname", name), ("isouri", uri)],
            )
            .await
    }

    /// Delete a custom ISO
    pub async fn hvm_iso_delete(&self, id: u64, iso: u64) -> Result<Value, TortoiseLabsError> {
        self.client
            .get(&format!("/vps/{id}/hvmiso/{iso}/delete/"), &[])
            .await
    }

    /// Start a VPS; returns the queued job
    pub async fn create(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/create/"), &[]).await
    }

    /// Gracefully shut down a VPS; returns the queued job
    pub async fn shutdown(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/shutdown/"), &[]).await
    }

    /// Force a VPS off; returns the queued job
    pub async fn destroy(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/destroy/"), &[]).await
    }

    /// Power cycle a VPS; returns the queued job
    pub async fn power_cycle(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/powercycle/"), &[]).await
    }

    /// Current run state, e.g. `{"running": true}`
    pub async fn status(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/status.json"), &[]).await
    }

    /// Jobs queued or run for a VPS
    pub async fn jobs(&self, id: u64) -> Result<Value, TortoiseLabsError> {
        self.client.get(&format!("/vps/{id}/jobs.json"), &[]).await
    }
}

fn render_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn index_by_id(list: &Value) -> Result<BTreeMap<String, String>, TortoiseLabsError> {
    let entries = list
        .get("vpslist")
        .and_then(Value::as_array)
        .ok_or_else(|| TortoiseLabsError::Decode("response has no vpslist array".to_string()))?;

    let mut by_id = BTreeMap::new();
    for entry in entries {
        let Some(id) = entry.get("id") else {
            continue;
        };
        let name = entry.get("name").map(render_key).unwrap_or_default();
        by_id.insert(render_key(id), name);
    }
    Ok(by_id)
}
