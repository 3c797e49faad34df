//! Core types shared across Stratus services and providers

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A key/value tag attached to a cloud resource.
///
/// Serialized with PascalCase field names to match the property-document
/// convention used by the declarative templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Value")]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Amazon Resource Name, split into its colon-delimited segments.
///
/// The `resource` segment keeps its service-specific shape untouched
/// (e.g. `instance-profile/admin`, `rule/my-bus/my-rule`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account: String,
    pub resource: String,
}

impl Arn {
    pub fn new(
        partition: impl Into<String>,
        service: impl Into<String>,
        region: impl Into<String>,
        account: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            partition: partition.into(),
            service: service.into(),
            region: region.into(),
            account: account.into(),
            resource: resource.into(),
        }
    }

    /// Parse an ARN string of the form `arn:partition:service:region:account:resource`.
    ///
    /// The resource segment may itself contain colons or slashes; everything
    /// after the fifth colon is kept verbatim.
    pub fn parse(input: &str) -> Result<Self> {
        let mut parts = input.splitn(6, ':');
        let prefix = parts.next().unwrap_or_default();
        if prefix != "arn" {
            return Err(Error::MalformedArn(input.to_string()));
        }
        let partition = parts.next();
        let service = parts.next();
        let region = parts.next();
        let account = parts.next();
        let resource = parts.next();
        match (partition, service, region, account, resource) {
            (Some(p), Some(s), Some(r), Some(a), Some(res)) if !s.is_empty() && !res.is_empty() => {
                Ok(Self {
                    partition: p.to_string(),
                    service: s.to_string(),
                    region: r.to_string(),
                    account: a.to_string(),
                    resource: res.to_string(),
                })
            }
            _ => Err(Error::MalformedArn(input.to_string())),
        }
    }

    /// Resource type prefix, e.g. `rule` for `rule/my-bus/my-rule`.
    pub fn resource_type(&self) -> &str {
        self.resource
            .split(['/', ':'])
            .next()
            .unwrap_or(&self.resource)
    }

    /// Remainder of the resource segment after the type prefix.
    pub fn resource_id(&self) -> &str {
        match self.resource.split_once(['/', ':']) {
            Some((_, id)) => id,
            None => "",
        }
    }
}

impl std::fmt::Display for Arn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account, self.resource
        )
    }
}
