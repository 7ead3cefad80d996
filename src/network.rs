use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::errors::{Error, Result};

/// One record of `docker network inspect` output.
///
/// Only `Containers` is required; the other fields are informational and
/// read as empty when the producer omits them, sets them to `null` or gives
/// them a non-string value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[allow(non_snake_case)]
pub struct Network {
    #[serde(default, deserialize_with = "format::string_or_empty")]
    pub Name: String,
    #[serde(default, deserialize_with = "format::string_or_empty")]
    pub Id: String,
    #[serde(default, deserialize_with = "format::string_or_empty")]
    pub Scope: String,
    #[serde(default, deserialize_with = "format::string_or_empty")]
    pub Driver: String,
    /// Container identifier to NetworkContainer, ordered by identifier.
    ///
    /// `None` when the key is absent. A JSON `null` is read as an empty map.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "format::null_to_empty"
    )]
    pub Containers: Option<BTreeMap<String, NetworkContainer>>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[allow(non_snake_case)]
pub struct NetworkContainer {
    /// Host name the container answers to on the network,
    /// e.g. `services_etcd_1` for a compose service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub Name: Option<String>,
    #[serde(default, deserialize_with = "format::string_or_empty")]
    pub EndpointID: String,
    #[serde(default, deserialize_with = "format::string_or_empty")]
    pub MacAddress: String,
    /// Address in CIDR notation, e.g. `172.18.0.2/16`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub IPv4Address: Option<String>,
    #[serde(default, deserialize_with = "format::string_or_empty")]
    pub IPv6Address: String,
}

impl Network {
    /// Picks the network consulted from a parsed inspection document.
    ///
    /// The document must be a non-empty array. Only its first element is
    /// deserialized; the rest are ignored.
    pub fn from_inspection(doc: Value) -> Result<Network> {
        let networks = match doc {
            Value::Array(networks) => networks,
            other => {
                return Err(Error::structure(format!(
                    "expected an array of networks, found {}",
                    kind(&other)
                )))
            }
        };
        if networks.len() > 1 {
            warn!(
                "inspection output holds {} networks, using only the first",
                networks.len()
            );
        }
        let first = networks
            .into_iter()
            .next()
            .ok_or_else(|| Error::structure("empty array of networks"))?;

        let network = Network::deserialize(first).map_err(|err| Error::Structure {
            reason: "first element is not a network record".to_owned(),
            source: Some(err),
        })?;
        debug!(
            "network {:?} ({}, driver {:?})",
            network.Name, network.Id, network.Driver
        );
        Ok(network)
    }

    /// The attached containers, or a `Structure` error when the record has no
    /// `Containers` key.
    pub fn containers(&self) -> Result<&BTreeMap<String, NetworkContainer>> {
        self.Containers
            .as_ref()
            .ok_or_else(|| Error::structure("network record has no Containers"))
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

mod format {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string_or_empty<'de, D>(de: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(de)? {
            Value::String(s) => Ok(s),
            _ => Ok(String::new()),
        }
    }

    pub fn null_to_empty<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de> + Default,
    {
        let actual: Option<T> = Option::deserialize(de)?;
        Ok(Some(actual.unwrap_or_default()))
    }
}
