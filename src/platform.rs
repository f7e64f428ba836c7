//! Per-platform profiles.
//!
//! Both the structure validator and the fallback generator consult the
//! profile of the target platform instead of branching on its name.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

const BASE_REQUIRED_KEYS: &[&str] = &["name", "nodes", "connections"];
const N8N_REQUIRED_KEYS: &[&str] = &["name", "nodes", "connections", "settings", "meta"];

/// Target automation platform.
///
/// Names are matched exactly; anything unknown is kept verbatim in
/// [`Platform::Other`] and treated with the generic profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    #[default]
    N8n,
    Make,
    Zapier,
    #[strum(default)]
    Other(String),
}

/// Node type tags used by the fallback workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeTypes {
    pub trigger: &'static str,
    pub process: &'static str,
    pub output: &'static str,
}

/// Static description of what a platform expects from a workflow document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformProfile {
    /// top level keys a generated document must carry
    pub required_keys: &'static [&'static str],
    /// node types for the trigger, process and output steps
    pub node_types: NodeTypes,
    /// whether documents carry `settings`, `meta` and `versionId`
    pub instance_metadata: bool,
}

static N8N_PROFILE: PlatformProfile = PlatformProfile {
    required_keys: N8N_REQUIRED_KEYS,
    node_types: NodeTypes {
        trigger: "webhook",
        process: "code",
        output: "http",
    },
    instance_metadata: true,
};

static GENERIC_PROFILE: PlatformProfile = PlatformProfile {
    required_keys: BASE_REQUIRED_KEYS,
    node_types: NodeTypes {
        trigger: "trigger",
        process: "action",
        output: "webhook",
    },
    instance_metadata: false,
};

impl Platform {
    pub fn as_str(&self) -> &str {
        match self {
            Platform::N8n => "n8n",
            Platform::Make => "make",
            Platform::Zapier => "zapier",
            Platform::Other(name) => name,
        }
    }

    pub fn profile(&self) -> &'static PlatformProfile {
        match self {
            Platform::N8n => &N8N_PROFILE,
            _ => &GENERIC_PROFILE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Platform {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Platform::from_str(&s).map_err(serde::de::Error::custom)
    }
}
