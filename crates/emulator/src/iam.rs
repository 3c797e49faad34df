//! Emulated IAM instance-profile service
//!
//! In-memory stand-in for the identity API consumed by the resource
//! providers. Enforces the same referential-integrity rule as the real
//! service: a profile cannot be deleted while roles are still attached.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stratus_common::{Arn, Error, Result};
use tracing::debug;

use crate::config::EmulatorConfig;

/// An IAM instance profile as reported by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceProfile {
    pub instance_profile_name: String,
    pub path: String,
    pub arn: String,
    /// Attached role names, in attachment order.
    pub roles: Vec<String>,
    pub create_date: DateTime<Utc>,
}

/// In-memory IAM service state
pub struct IamService {
    config: EmulatorConfig,
    profiles: RwLock<HashMap<String, InstanceProfile>>,
}

impl IamService {
    pub fn new(config: EmulatorConfig) -> Self {
        Self {
            config,
            profiles: RwLock::new(HashMap::new()),
        }
    }

    /// Create an instance profile. `path` defaults to `/` and must begin
    /// and end with a slash.
    pub fn create_instance_profile(
        &self,
        name: &str,
        path: Option<&str>,
    ) -> Result<InstanceProfile> {
        if name.is_empty() {
            return Err(Error::InvalidRequest(
                "instance profile name must not be empty".to_string(),
            ));
        }
        let path = path.unwrap_or("/");
        if !path.starts_with('/') || !path.ends_with('/') {
            return Err(Error::InvalidRequest(format!(
                "invalid path {path:?}: must begin and end with '/'"
            )));
        }

        let mut profiles = self.profiles.write();
        if profiles.contains_key(name) {
            return Err(Error::already_exists("instance-profile", name));
        }

        let arn = Arn::new(
            &self.config.partition,
            "iam",
            "",
            &self.config.account_id,
            format!("instance-profile{path}{name}"),
        )
        .to_string();

        let profile = InstanceProfile {
            instance_profile_name: name.to_string(),
            path: path.to_string(),
            arn,
            roles: Vec::new(),
            create_date: Utc::now(),
        };
        profiles.insert(name.to_string(), profile.clone());

        debug!("Created instance profile: {}", name);
        Ok(profile)
    }

    /// Get an instance profile by name.
    pub fn get_instance_profile(&self, name: &str) -> Result<InstanceProfile> {
        self.profiles
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| Error::not_found("instance-profile", name))
    }

    /// Attach a role. Attaching an already-attached role is an error.
    pub fn add_role_to_instance_profile(&self, profile_name: &str, role_name: &str) -> Result<()> {
        let mut profiles = self.profiles.write();
        let profile = profiles
            .get_mut(profile_name)
            .ok_or_else(|| Error::not_found("instance-profile", profile_name))?;

        if profile.roles.iter().any(|r| r == role_name) {
            return Err(Error::already_exists("role-attachment", role_name));
        }
        profile.roles.push(role_name.to_string());

        debug!("Attached role {} to instance profile {}", role_name, profile_name);
        Ok(())
    }

    /// Detach a role. The role must currently be attached.
    pub fn remove_role_from_instance_profile(
        &self,
        profile_name: &str,
        role_name: &str,
    ) -> Result<()> {
        let mut profiles = self.profiles.write();
        let profile = profiles
            .get_mut(profile_name)
            .ok_or_else(|| Error::not_found("instance-profile", profile_name))?;

        let position = profile
            .roles
            .iter()
            .position(|r| r == role_name)
            .ok_or_else(|| Error::not_found("role-attachment", role_name))?;
        profile.roles.remove(position);

        debug!("Detached role {} from instance profile {}", role_name, profile_name);
        Ok(())
    }

    /// Delete an instance profile. Fails with `DeleteConflict` while roles
    /// remain attached.
    pub fn delete_instance_profile(&self, name: &str) -> Result<()> {
        let mut profiles = self.profiles.write();
        let profile = profiles
            .get(name)
            .ok_or_else(|| Error::not_found("instance-profile", name))?;

        if !profile.roles.is_empty() {
            return Err(Error::DeleteConflict {
                kind: "instance-profile".to_string(),
                id: name.to_string(),
            });
        }
        profiles.remove(name);

        debug!("Deleted instance profile: {}", name);
        Ok(())
    }

    /// List all instance profiles, sorted by name.
    pub fn list_instance_profiles(&self) -> Vec<InstanceProfile> {
        let mut profiles: Vec<_> = self.profiles.read().values().cloned().collect();
        profiles.sort_by(|a, b| a.instance_profile_name.cmp(&b.instance_profile_name));
        profiles
    }
}

impl Default for IamService {
    fn default() -> Self {
        Self::new(EmulatorConfig::default())
    }
}
