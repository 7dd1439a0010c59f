//! # Core Wire Components
//!
//! Network-address record, service flags, protocol version gating and the
//! byte-level codec.
//!
//! ## Components
//! - **Protocol**: version constants and the timestamp capability check
//! - **Service**: open bit set of peer services
//! - **NetAddress**: the address record and its `std::io` encode/decode
//! - **Codec**: Tokio codec framing fixed-size records over byte streams
//! - **Fixed**: fixed-capacity sink/source for sized buffers and truncation
//!
//! ## Wire Format
//! ```text
//! [Timestamp(4)]? [Services(8)] [IP(16)] [Port(2)]
//! ```
//!
//! 30 bytes when the protocol version carries timestamps, 26 otherwise.

pub mod codec;
pub mod fixed;
pub mod netaddress;
pub mod protocol;
pub mod service;
