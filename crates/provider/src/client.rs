//! Clients for the emulated service APIs
//!
//! Providers consume the external APIs through traits so tests can wrap or
//! replace them. Each call is a separate suspension point; calls within one
//! lifecycle operation happen in strict program order.

use async_trait::async_trait;
use std::sync::Arc;
use stratus_common::Result;
use stratus_emulator::{IamService, InstanceProfile};

/// The slice of the identity API the instance-profile provider consumes.
#[async_trait]
pub trait IamApi: Send + Sync {
    async fn create_instance_profile(
        &self,
        name: &str,
        path: Option<&str>,
    ) -> Result<InstanceProfile>;

    async fn add_role_to_instance_profile(&self, profile_name: &str, role_name: &str)
        -> Result<()>;

    async fn remove_role_from_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> Result<()>;

    async fn get_instance_profile(&self, name: &str) -> Result<InstanceProfile>;

    async fn delete_instance_profile(&self, name: &str) -> Result<()>;
}

/// `IamApi` backed by the in-process emulator.
pub struct EmulatorIamClient {
    service: Arc<IamService>,
}

impl EmulatorIamClient {
    pub fn new(service: Arc<IamService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl IamApi for EmulatorIamClient {
    async fn create_instance_profile(
        &self,
        name: &str,
        path: Option<&str>,
    ) -> Result<InstanceProfile> {
        self.service.create_instance_profile(name, path)
    }

    async fn add_role_to_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> Result<()> {
        self.service
            .add_role_to_instance_profile(profile_name, role_name)
    }

    async fn remove_role_from_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> Result<()> {
        self.service
            .remove_role_from_instance_profile(profile_name, role_name)
    }

    async fn get_instance_profile(&self, name: &str) -> Result<InstanceProfile> {
        self.service.get_instance_profile(name)
    }

    async fn delete_instance_profile(&self, name: &str) -> Result<()> {
        self.service.delete_instance_profile(name)
    }
}
