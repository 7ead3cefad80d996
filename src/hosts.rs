//! Mapping of network containers to `--add-host` arguments.

use log::{debug, trace};
use std::fmt;
use std::io::Read;
use std::net::Ipv4Addr;

use crate::errors::{Error, Result};
use crate::network::{Network, NetworkContainer};

/// A host-file entry for one container: its name and bare IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HostMapping {
    pub hostname: String,
    pub address: Ipv4Addr,
}

impl HostMapping {
    pub fn new(hostname: &str, address: Ipv4Addr) -> Self {
        Self {
            hostname: hostname.to_owned(),
            address,
        }
    }

    /// Builds the mapping of the container attached as `id`.
    pub fn from_container(id: &str, container: &NetworkContainer) -> Result<Self> {
        let hostname = container.Name.as_deref().ok_or_else(|| Error::MissingField {
            container: id.to_owned(),
            field: "Name",
        })?;
        let cidr = container
            .IPv4Address
            .as_deref()
            .ok_or_else(|| Error::MissingField {
                container: id.to_owned(),
                field: "IPv4Address",
            })?;
        let address = strip_prefix_len(cidr).ok_or_else(|| Error::InvalidAddress {
            container: id.to_owned(),
            address: cidr.to_owned(),
        })?;
        Ok(Self::new(hostname, address))
    }
}

/// Formats as `--add-host=<hostname>:<address>`
impl fmt::Display for HostMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "--add-host={}:{}", self.hostname, self.address)
    }
}

/// The `--add-host` arguments for every container of a network.
///
/// Displays each mapping followed by a single space, ready to be spliced
/// into a `docker run` command line. No containers display as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AddHosts(Vec<HostMapping>);

impl AddHosts {
    /// Maps the containers of `network` in ascending identifier order.
    pub fn from_network(network: &Network) -> Result<Self> {
        let containers = network.containers()?;
        debug!("{} containers attached", containers.len());
        containers
            .iter()
            .map(|(id, container)| {
                let mapping = HostMapping::from_container(id, container)?;
                trace!("{} => {}", id, mapping);
                Ok(mapping)
            })
            .collect::<Result<Vec<_>>>()
            .map(AddHosts)
    }

    pub fn mappings(&self) -> &[HostMapping] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AddHosts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mapping in &self.0 {
            write!(f, "{} ", mapping)?;
        }
        Ok(())
    }
}

/// Reads a whole `docker network inspect` document from `input` and maps the
/// containers of its first network.
pub fn extract<R: Read>(mut input: R) -> Result<AddHosts> {
    let mut buf = Vec::new();
    input.read_to_end(&mut buf)?;
    debug!("read {} bytes of inspection output", buf.len());
    extract_from_slice(&buf)
}

pub fn extract_from_slice(input: &[u8]) -> Result<AddHosts> {
    let doc = serde_json::from_slice(input).map_err(Error::Parse)?;
    let network = Network::from_inspection(doc)?;
    AddHosts::from_network(&network)
}

/// Drops the `/NN` prefix length of a CIDR address.
///
/// Returns `None` unless `cidr` is an IPv4 address followed by a decimal
/// prefix length in `0..=32`.
pub fn strip_prefix_len(cidr: &str) -> Option<Ipv4Addr> {
    let (address, prefix_len) = cidr.split_once('/')?;
    if prefix_len.is_empty() || !prefix_len.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix_len.parse::<u8>().ok().filter(|len| *len <= 32)?;
    address.parse().ok()
}
