//! Google Safe Browsing v4 wire types.
//!
//! Only the subset of the `threatMatches:find` API the checker needs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{
    GSB_CLIENT_ID, GSB_CLIENT_VERSION, GSB_PLATFORM_TYPES, GSB_THREAT_ENTRY_TYPES,
    GSB_THREAT_TYPES,
};

/// Body of a `threatMatches:find` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatMatchRequest<'a> {
    pub client: ClientInfo,
    pub threat_info: ThreatInfo<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub client_id: &'static str,
    pub client_version: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreatInfo<'a> {
    pub threat_types: &'static [&'static str],
    pub platform_types: &'static [&'static str],
    pub threat_entry_types: &'static [&'static str],
    pub threat_entries: Vec<ThreatEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ThreatEntry<'a> {
    pub url: &'a str,
}

impl<'a> ThreatMatchRequest<'a> {
    /// Builds a lookup for exactly one URL against every threat category.
    pub fn for_url(url: &'a str) -> Self {
        Self {
            client: ClientInfo {
                client_id: GSB_CLIENT_ID,
                client_version: GSB_CLIENT_VERSION,
            },
            threat_info: ThreatInfo {
                threat_types: &GSB_THREAT_TYPES,
                platform_types: &GSB_PLATFORM_TYPES,
                threat_entry_types: &GSB_THREAT_ENTRY_TYPES,
                threat_entries: vec![ThreatEntry { url }],
            },
        }
    }
}

/// Body of a `threatMatches:find` response.
///
/// The API answers `{}` when nothing matched; `matches` is present only for
/// listed URLs. Entries are kept as raw JSON: any non-empty `matches` array
/// is a listing, whatever its entries look like.
#[derive(Debug, Default, Deserialize)]
pub struct ThreatMatchResponse {
    #[serde(default)]
    pub matches: Option<Value>,
}

impl ThreatMatchResponse {
    fn entries(&self) -> &[Value] {
        match &self.matches {
            Some(Value::Array(entries)) => entries,
            _ => &[],
        }
    }

    pub fn is_listed(&self) -> bool {
        !self.entries().is_empty()
    }

    /// Threat types reported by object entries, in response order. Only used
    /// for logging.
    pub fn threat_types(&self) -> Vec<&str> {
        self.entries()
            .iter()
            .filter_map(|m| m.get("threatType").and_then(Value::as_str))
            .collect()
    }
}
