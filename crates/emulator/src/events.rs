//! Emulated EventBridge-style events service
//!
//! Event buses and rules with resource tagging. Tag operations are keyed by
//! ARN and require the target resource to exist.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use stratus_common::{Arn, Error, Result, Tag};
use tracing::debug;

use crate::config::EmulatorConfig;

/// Name of the bus that exists in every account.
pub const DEFAULT_EVENT_BUS: &str = "default";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBus {
    pub name: String,
    pub arn: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    pub name: String,
    pub event_bus_name: String,
    pub arn: String,
    pub event_pattern: Option<String>,
}

/// In-memory events service state
pub struct EventsService {
    config: EmulatorConfig,
    buses: RwLock<HashMap<String, EventBus>>,
    /// Rules keyed by (bus name, rule name)
    rules: RwLock<HashMap<(String, String), Rule>>,
    /// Tag sets keyed by resource ARN
    tags: RwLock<HashMap<String, Vec<Tag>>>,
}

impl EventsService {
    pub fn new(config: EmulatorConfig) -> Self {
        let service = Self {
            config,
            buses: RwLock::new(HashMap::new()),
            rules: RwLock::new(HashMap::new()),
            tags: RwLock::new(HashMap::new()),
        };
        // The default bus exists from the start and cannot be created.
        let default_bus = EventBus {
            name: DEFAULT_EVENT_BUS.to_string(),
            arn: service.bus_arn(DEFAULT_EVENT_BUS),
        };
        service
            .buses
            .write()
            .insert(DEFAULT_EVENT_BUS.to_string(), default_bus);
        service
    }

    fn bus_arn(&self, name: &str) -> String {
        Arn::new(
            &self.config.partition,
            "events",
            &self.config.region,
            &self.config.account_id,
            format!("event-bus/{name}"),
        )
        .to_string()
    }

    fn rule_arn(&self, bus: &str, name: &str) -> String {
        // Rules on the default bus omit the bus segment.
        let resource = if bus == DEFAULT_EVENT_BUS {
            format!("rule/{name}")
        } else {
            format!("rule/{bus}/{name}")
        };
        Arn::new(
            &self.config.partition,
            "events",
            &self.config.region,
            &self.config.account_id,
            resource,
        )
        .to_string()
    }

    /// Create a custom event bus, optionally tagging it on creation.
    pub fn create_event_bus(&self, name: &str, tags: &[Tag]) -> Result<EventBus> {
        let mut buses = self.buses.write();
        if buses.contains_key(name) {
            return Err(Error::already_exists("event-bus", name));
        }

        let bus = EventBus {
            name: name.to_string(),
            arn: self.bus_arn(name),
        };
        buses.insert(name.to_string(), bus.clone());
        if !tags.is_empty() {
            self.upsert_tags(&bus.arn, tags);
        }

        debug!("Created event bus: {}", name);
        Ok(bus)
    }

    /// Create or update a rule. The target bus must exist. Tags are only
    /// applied when the call creates the rule.
    pub fn put_rule(
        &self,
        name: &str,
        event_bus_name: Option<&str>,
        event_pattern: Option<&str>,
        tags: &[Tag],
    ) -> Result<Rule> {
        let bus = event_bus_name.unwrap_or(DEFAULT_EVENT_BUS);
        if !self.buses.read().contains_key(bus) {
            return Err(Error::not_found("event-bus", bus));
        }

        let key = (bus.to_string(), name.to_string());
        let mut rules = self.rules.write();
        let created = !rules.contains_key(&key);

        let rule = Rule {
            name: name.to_string(),
            event_bus_name: bus.to_string(),
            arn: self.rule_arn(bus, name),
            event_pattern: event_pattern.map(str::to_string),
        };
        rules.insert(key, rule.clone());
        if created && !tags.is_empty() {
            self.upsert_tags(&rule.arn, tags);
        }

        debug!("Put rule {} on bus {}", name, bus);
        Ok(rule)
    }

    pub fn delete_rule(&self, name: &str, event_bus_name: Option<&str>) -> Result<()> {
        let bus = event_bus_name.unwrap_or(DEFAULT_EVENT_BUS);
        let key = (bus.to_string(), name.to_string());
        let rule = self
            .rules
            .write()
            .remove(&key)
            .ok_or_else(|| Error::not_found("rule", name))?;
        self.tags.write().remove(&rule.arn);
        Ok(())
    }

    /// Delete a custom bus along with its rules and tags.
    pub fn delete_event_bus(&self, name: &str) -> Result<()> {
        if name == DEFAULT_EVENT_BUS {
            return Err(Error::InvalidRequest(
                "the default event bus cannot be deleted".to_string(),
            ));
        }
        let bus = self
            .buses
            .write()
            .remove(name)
            .ok_or_else(|| Error::not_found("event-bus", name))?;

        let mut rules = self.rules.write();
        let mut tags = self.tags.write();
        rules.retain(|(bus_name, _), rule| {
            if bus_name == name {
                tags.remove(&rule.arn);
                false
            } else {
                true
            }
        });
        tags.remove(&bus.arn);
        Ok(())
    }

    /// Add tags to a bus or rule, overwriting values for keys that are
    /// already present.
    pub fn tag_resource(&self, resource_arn: &str, tags: &[Tag]) -> Result<()> {
        let arn = self.resolve_resource(resource_arn)?;
        self.upsert_tags(&arn, tags);
        Ok(())
    }

    /// Remove tags by key. Keys that are not present are ignored.
    pub fn untag_resource(&self, resource_arn: &str, tag_keys: &[String]) -> Result<()> {
        let arn = self.resolve_resource(resource_arn)?;
        let mut all_tags = self.tags.write();
        if let Some(entry) = all_tags.get_mut(&arn) {
            entry.retain(|tag| !tag_keys.contains(&tag.key));
            if entry.is_empty() {
                all_tags.remove(&arn);
            }
        }
        Ok(())
    }

    /// Current tags for a bus or rule, in first-applied order.
    pub fn list_tags_for_resource(&self, resource_arn: &str) -> Result<Vec<Tag>> {
        let arn = self.resolve_resource(resource_arn)?;
        Ok(self.tags.read().get(&arn).cloned().unwrap_or_default())
    }

    fn upsert_tags(&self, arn: &str, tags: &[Tag]) {
        let mut all_tags = self.tags.write();
        let entry = all_tags.entry(arn.to_string()).or_default();
        for tag in tags {
            match entry.iter_mut().find(|t| t.key == tag.key) {
                Some(existing) => existing.value = tag.value.clone(),
                None => entry.push(tag.clone()),
            }
        }
    }

    /// Map an ARN to the canonical ARN of an existing bus or rule.
    fn resolve_resource(&self, resource_arn: &str) -> Result<String> {
        let arn = Arn::parse(resource_arn)?;
        if arn.service != "events" {
            return Err(Error::MalformedArn(resource_arn.to_string()));
        }
        match arn.resource_type() {
            "event-bus" => {
                let name = arn.resource_id();
                self.buses
                    .read()
                    .get(name)
                    .map(|bus| bus.arn.clone())
                    .ok_or_else(|| Error::not_found("event-bus", name))
            }
            "rule" => {
                let id = arn.resource_id();
                let (bus, name) = match id.split_once('/') {
                    Some((bus, name)) => (bus, name),
                    None => (DEFAULT_EVENT_BUS, id),
                };
                self.rules
                    .read()
                    .get(&(bus.to_string(), name.to_string()))
                    .map(|rule| rule.arn.clone())
                    .ok_or_else(|| Error::not_found("rule", name))
            }
            other => Err(Error::InvalidRequest(format!(
                "unsupported events resource type: {other}"
            ))),
        }
    }
}

impl Default for EventsService {
    fn default() -> Self {
        Self::new(EmulatorConfig::default())
    }
}
