//! # Error Types
//!
//! Error handling for the network-address codec.
//!
//! Encoding and decoding can only fail at the byte sink/source boundary. The
//! codec never validates address contents, so every failure here is either a
//! truncated transfer or an error raised by the caller's I/O object.
//!
//! ## Error Categories
//! - **Short write**: the sink accepted fewer bytes than the field requires
//! - **End of input**: the source ran out before the field was complete
//! - **I/O**: any other failure reported by the sink/source, passed through
//! - **Configuration**: invalid or unreadable configuration
//!
//! ## Example Usage
//! ```rust
//! use raven_wire::core::fixed::FixedWriter;
//! use raven_wire::core::netaddress::{write_net_address, NetAddress};
//! use raven_wire::core::protocol::PROTOCOL_VERSION;
//! use raven_wire::error::{Field, WireError};
//!
//! let na = NetAddress::default();
//! let mut sink = FixedWriter::new(4);
//! match write_net_address(&mut sink, PROTOCOL_VERSION, &na) {
//!     Err(WireError::ShortWrite { field }) => assert_eq!(field, Field::Services),
//!     other => panic!("unexpected result: {other:?}"),
//! }
//! ```

use std::fmt;
use std::io;
use thiserror::Error;

/// A field of the network-address record, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Timestamp,
    Services,
    Ip,
    Port,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Timestamp => "timestamp",
            Field::Services => "services",
            Field::Ip => "ip",
            Field::Port => "port",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// WireError is the error type for every codec and config operation
#[derive(Error, Debug)]
pub enum WireError {
    #[error("Short write while encoding {field}")]
    ShortWrite { field: Field },

    #[error("Unexpected end of input while decoding {field}")]
    UnexpectedEof { field: Field },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl WireError {
    /// Classify an error returned by the sink while writing `field`.
    pub(crate) fn from_write(field: Field, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::WriteZero => WireError::ShortWrite { field },
            _ => WireError::Io(err),
        }
    }

    /// Classify an error returned by the source while reading `field`.
    pub(crate) fn from_read(field: Field, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof => WireError::UnexpectedEof { field },
            _ => WireError::Io(err),
        }
    }

    /// Returns the field being transferred when the error occurred, if known.
    pub fn field(&self) -> Option<Field> {
        match self {
            WireError::ShortWrite { field } | WireError::UnexpectedEof { field } => Some(*field),
            _ => None,
        }
    }

    pub fn is_short_write(&self) -> bool {
        matches!(self, WireError::ShortWrite { .. })
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, WireError::UnexpectedEof { .. })
    }
}

/// Type alias for Results using WireError
pub type Result<T> = std::result::Result<T, WireError>;
