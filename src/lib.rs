//! # raven-wire
//!
//! Wire codec for the network-address record gossiped between peers of a
//! Bitcoin-derived peer-to-peer network.
//!
//! The codec reproduces the historical fixed layout byte for byte, includes
//! the timestamp only for protocol versions that carry it, and reports
//! truncated transfers at the exact field where they happened. It works on
//! any `std::io::Write` / `std::io::Read`; connection handling and message
//! framing belong to the caller.
//!
//! ## Example
//! ```rust
//! use raven_wire::core::netaddress::{max_payload_length, NetAddress};
//! use raven_wire::core::protocol::PROTOCOL_VERSION;
//! use raven_wire::core::service::ServiceFlag;
//!
//! let addr = "127.0.0.1:8767".parse().unwrap();
//! let mut na = NetAddress::new(&addr, ServiceFlag::empty());
//! na.add_service(ServiceFlag::NETWORK);
//!
//! let bytes = na.encode_to_vec(PROTOCOL_VERSION).unwrap();
//! assert_eq!(bytes.len(), max_payload_length(PROTOCOL_VERSION));
//!
//! let decoded = NetAddress::decode(&mut &bytes[..], PROTOCOL_VERSION).unwrap();
//! assert_eq!(decoded, na);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::core::codec::NetAddressCodec;
pub use crate::core::netaddress::{
    max_payload_length, read_net_address, write_net_address, NetAddress,
};
pub use crate::core::protocol::{supports_timestamp, PROTOCOL_VERSION};
pub use crate::core::service::ServiceFlag;
pub use crate::error::{Field, Result, WireError};
