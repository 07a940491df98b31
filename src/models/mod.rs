//! Records mirrored from the mesh management API.
//!
//! Field names follow the backend's JSON (`hostid`, `isegressgateway`, ...)
//! through serde renames; missing fields fall back to defaults so partial
//! payloads from older servers still decode.

mod acl;
mod client;
pub(crate) mod codec;
mod dns;
mod enrollment_key;
mod host;
mod network;
mod node;
mod server;
mod user;

pub use acl::{AclLevel, AclMatrix, can_communicate};
pub use client::ExternalClient;
pub use dns::DnsEntry;
pub use enrollment_key::{EnrollmentKey, EnrollmentKeyKind};
pub use host::{Host, NULL_HOST_NAME};
pub use network::Network;
pub use node::{Connectivity, ExtendedNode, Node};
pub use server::{ServerConfig, ServerStatus};
pub use user::User;
