//! IAM instance profile provider

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stratus_common::{Error, Result};
use stratus_emulator::InstanceProfile;
use tracing::{debug, info};

use super::ResourceProvider;
use crate::document::{from_model, to_model, Document};
use crate::naming;
use crate::progress::ProgressEvent;
use crate::request::ResourceRequest;

/// Type name the registry dispatches on.
pub const TYPE_NAME: &str = "AWS::IAM::InstanceProfile";

/// Instance profile properties as they appear in templates.
///
/// `InstanceProfileName` and `Path` are create-only; `Arn` is read-only and
/// populated by the provider, never by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstanceProfileProperties {
    #[serde(rename = "InstanceProfileName", skip_serializing_if = "Option::is_none")]
    pub instance_profile_name: Option<String>,

    #[serde(rename = "Path", skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    #[serde(rename = "Roles", default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,

    #[serde(rename = "Arn", skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
}

impl From<&InstanceProfile> for InstanceProfileProperties {
    fn from(profile: &InstanceProfile) -> Self {
        Self {
            instance_profile_name: Some(profile.instance_profile_name.clone()),
            path: Some(profile.path.clone()),
            roles: profile.roles.clone(),
            arn: Some(profile.arn.clone()),
        }
    }
}

pub struct InstanceProfileProvider;

impl InstanceProfileProvider {
    fn previous_name(request: &ResourceRequest) -> Result<String> {
        let previous: InstanceProfileProperties = to_model(request.previous_state()?)?;
        previous.instance_profile_name.ok_or_else(|| {
            Error::InvalidRequest("previous state has no InstanceProfileName".to_string())
        })
    }
}

#[async_trait]
impl ResourceProvider for InstanceProfileProvider {
    fn type_name(&self) -> &'static str {
        TYPE_NAME
    }

    async fn create(&self, request: &ResourceRequest) -> Result<ProgressEvent> {
        let mut model: InstanceProfileProperties = to_model(&request.desired_state)?;
        if model.arn.is_some() {
            return Err(Error::InvalidRequest(
                "Arn is read-only and cannot be supplied on create".to_string(),
            ));
        }

        // Resolve the primary identifier: caller-supplied name wins,
        // otherwise derive one deterministically from the stack context so a
        // retried create lands on the same identifier.
        let name = match model.instance_profile_name.clone() {
            Some(name) => name,
            None => {
                let name = naming::generate_default_name(
                    &request.stack_name,
                    &request.logical_resource_id,
                );
                debug!("Generated default instance profile name: {}", name);
                model.instance_profile_name = Some(name.clone());
                name
            }
        };

        let iam = &request.clients.iam;
        let profile = iam
            .create_instance_profile(&name, model.path.as_deref())
            .await?;

        for role_name in &model.roles {
            iam.add_role_to_instance_profile(&name, role_name).await?;
        }

        model.arn = Some(profile.arn);
        info!("Created instance profile: {}", name);
        Ok(ProgressEvent::in_progress(from_model(&model)?))
    }

    async fn read(&self, request: &ResourceRequest) -> Result<ProgressEvent> {
        let name = Self::previous_name(request)?;
        let profile = request.clients.iam.get_instance_profile(&name).await?;
        let model = InstanceProfileProperties::from(&profile);
        Ok(ProgressEvent::success(from_model(&model)?))
    }

    async fn update(&self, request: &ResourceRequest) -> Result<ProgressEvent> {
        let desired: InstanceProfileProperties = to_model(&request.desired_state)?;
        let previous: InstanceProfileProperties = to_model(request.previous_state()?)?;

        if let Some(property) = changed_create_only_property(&desired, &previous) {
            return Err(Error::InvalidRequest(format!(
                "{property} is create-only and cannot be changed"
            )));
        }

        // Role membership updates are not supported yet; signal the gap
        // explicitly so the orchestrator can branch on it.
        Err(Error::unsupported(TYPE_NAME, "update"))
    }

    async fn delete(&self, request: &ResourceRequest) -> Result<ProgressEvent> {
        let name = Self::previous_name(request)?;
        let iam = &request.clients.iam;

        // The service refuses to delete a profile with attached roles, so
        // strip every attachment it reports before issuing the delete. A
        // failed detach aborts the sequence; the delete is never issued.
        let profile = iam.get_instance_profile(&name).await?;
        for role_name in &profile.roles {
            iam.remove_role_from_instance_profile(&name, role_name)
                .await?;
        }

        iam.delete_instance_profile(&name).await?;
        info!("Deleted instance profile: {}", name);
        Ok(ProgressEvent::in_progress(Document::new()))
    }
}

/// Name of the first create-only property the desired state tries to change,
/// if any. A property left unset in the desired state is not a change.
fn changed_create_only_property(
    desired: &InstanceProfileProperties,
    previous: &InstanceProfileProperties,
) -> Option<&'static str> {
    if desired.instance_profile_name.is_some()
        && desired.instance_profile_name != previous.instance_profile_name
    {
        return Some("InstanceProfileName");
    }
    if desired.path.is_some() && desired.path != previous.path {
        return Some("Path");
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(name: Option<&str>, path: Option<&str>) -> InstanceProfileProperties {
        InstanceProfileProperties {
            instance_profile_name: name.map(str::to_string),
            path: path.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_unset_desired_fields_are_not_changes() {
        let previous = props(Some("web"), Some("/app/"));
        assert_eq!(changed_create_only_property(&props(None, None), &previous), None);
        assert_eq!(
            changed_create_only_property(&props(Some("web"), Some("/app/")), &previous),
            None
        );
    }

    #[test]
    fn test_name_change_is_detected() {
        let previous = props(Some("web"), None);
        assert_eq!(
            changed_create_only_property(&props(Some("api"), None), &previous),
            Some("InstanceProfileName")
        );
    }

    #[test]
    fn test_path_change_is_detected() {
        let previous = props(Some("web"), Some("/app/"));
        assert_eq!(
            changed_create_only_property(&props(Some("web"), Some("/other/")), &previous),
            Some("Path")
        );
    }
}
