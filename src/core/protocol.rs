//! Protocol version constants and capability checks.

/// Latest protocol version spoken by this crate.
pub const PROTOCOL_VERSION: u32 = 70028;

/// First protocol version that allows multiple addresses per `addr` message.
pub const MULTIPLE_ADDRESS_VERSION: u32 = 209;

/// First protocol version that carries a timestamp in each network address.
pub const NET_ADDRESS_TIME_VERSION: u32 = 31402;

/// Whether network addresses carry the 4-byte timestamp at `pver`.
#[inline]
pub fn supports_timestamp(pver: u32) -> bool {
    pver >= NET_ADDRESS_TIME_VERSION
}
