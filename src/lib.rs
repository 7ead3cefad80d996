//! Docker network inspection to `--add-host` arguments
//!
//! Reads the JSON printed by `docker network inspect <network>` and renders
//! each attached container as `--add-host=<name>:<ipv4>`, so that a container
//! outside the network can resolve the names of the ones inside it.

pub mod errors;
pub mod hosts;
pub mod network;

pub use hosts::{extract, extract_from_slice, strip_prefix_len, AddHosts, HostMapping};
