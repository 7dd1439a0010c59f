//! # Network Address
//!
//! The address record peers gossip to each other, and its wire codec.
//!
//! ## Wire Format
//! ```text
//! [Timestamp(4, LE i32)]? [Services(8, LE u64)] [IP(16)] [Port(2, BE u16)]
//! ```
//!
//! The timestamp is present only when the negotiated protocol version
//! supports it (see [`supports_timestamp`]). IPv4 addresses travel as
//! IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`). The port is the only
//! big-endian field.
//!
//! Each field is a single `write_all` / `read_exact` against the caller's
//! sink or source. A failed transfer aborts the call at that field: bytes
//! already handed to the sink stay there, and a field that was not read in
//! full is never stored into the output record.

use crate::core::protocol::supports_timestamp;
use crate::core::service::ServiceFlag;
use crate::error::{Field, Result, WireError};
use byteorder::{BigEndian, LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use tracing::{debug, trace};

/// Size of an encoded address without the timestamp: services + ip + port.
pub const NET_ADDRESS_BASE_LEN: usize = 8 + 16 + 2;

/// Size of the optional timestamp field.
pub const NET_ADDRESS_TIMESTAMP_LEN: usize = 4;

/// A peer's network identity as exchanged on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetAddress {
    /// Last time the address was seen active, in Unix seconds.
    pub timestamp: i32,
    pub services: ServiceFlag,
    /// IPv4 addresses are kept in their IPv4-mapped form.
    pub ip: Ipv6Addr,
    pub port: u16,
}

impl Default for NetAddress {
    fn default() -> Self {
        Self {
            timestamp: 0,
            services: ServiceFlag::empty(),
            ip: Ipv6Addr::UNSPECIFIED,
            port: 0,
        }
    }
}

impl NetAddress {
    /// Creates an address from a transport address with a zero timestamp.
    pub fn new(addr: &SocketAddr, services: ServiceFlag) -> Self {
        Self::from_ip_port(addr.ip(), addr.port(), services)
    }

    pub fn from_ip_port(ip: IpAddr, port: u16, services: ServiceFlag) -> Self {
        Self::with_timestamp(0, services, ip, port)
    }

    pub fn with_timestamp(timestamp: i32, services: ServiceFlag, ip: IpAddr, port: u16) -> Self {
        Self {
            timestamp,
            services,
            ip: mapped_ip(ip),
            port,
        }
    }

    #[inline]
    pub fn has_service(&self, flag: ServiceFlag) -> bool {
        self.services.intersects(flag)
    }

    #[inline]
    pub fn add_service(&mut self, flag: ServiceFlag) {
        self.services |= flag;
    }

    /// The address with IPv4-mapped addresses turned back into IPv4.
    pub fn ip_addr(&self) -> IpAddr {
        match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.ip_addr(), self.port)
    }

    /// Encodes into a freshly allocated buffer of `max_payload_length(pver)` bytes.
    pub fn encode_to_vec(&self, pver: u32) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(max_payload_length(pver));
        write_net_address(&mut buf, pver, self)?;
        Ok(buf)
    }

    pub fn decode<R: Read>(r: &mut R, pver: u32) -> Result<Self> {
        let mut na = Self::default();
        read_net_address(r, pver, &mut na)?;
        Ok(na)
    }
}

impl From<SocketAddr> for NetAddress {
    fn from(addr: SocketAddr) -> Self {
        Self::new(&addr, ServiceFlag::empty())
    }
}

fn mapped_ip(ip: IpAddr) -> Ipv6Addr {
    match ip {
        IpAddr::V4(v4) => v4.to_ipv6_mapped(),
        IpAddr::V6(v6) => v6,
    }
}

/// Maximum encoded size of a network address at `pver`: 30 bytes with the
/// timestamp, 26 without.
#[inline]
pub fn max_payload_length(pver: u32) -> usize {
    if supports_timestamp(pver) {
        NET_ADDRESS_TIMESTAMP_LEN + NET_ADDRESS_BASE_LEN
    } else {
        NET_ADDRESS_BASE_LEN
    }
}

/// Writes `na` to `w` using the layout for `pver`.
pub fn write_net_address<W: Write>(w: &mut W, pver: u32, na: &NetAddress) -> Result<()> {
    match write_fields(w, supports_timestamp(pver), na) {
        Ok(()) => {
            trace!(pver, addr = %na.socket_addr(), services = %na.services, "encoded net address");
            Ok(())
        }
        Err(e) => {
            debug!(pver, field = ?e.field(), error = %e, "net address encode failed");
            Err(e)
        }
    }
}

fn write_fields<W: Write>(w: &mut W, with_ts: bool, na: &NetAddress) -> Result<()> {
    if with_ts {
        w.write_i32::<LittleEndian>(na.timestamp)
            .map_err(|e| WireError::from_write(Field::Timestamp, e))?;
    }
    w.write_u64::<LittleEndian>(na.services.bits())
        .map_err(|e| WireError::from_write(Field::Services, e))?;
    w.write_all(&na.ip.octets())
        .map_err(|e| WireError::from_write(Field::Ip, e))?;
    w.write_u16::<BigEndian>(na.port)
        .map_err(|e| WireError::from_write(Field::Port, e))
}

/// Reads a network address from `r` into `na` using the layout for `pver`.
///
/// Without timestamp support the timestamp field is not touched.
pub fn read_net_address<R: Read>(r: &mut R, pver: u32, na: &mut NetAddress) -> Result<()> {
    match read_fields(r, supports_timestamp(pver), na) {
        Ok(()) => {
            trace!(pver, addr = %na.socket_addr(), services = %na.services, "decoded net address");
            Ok(())
        }
        Err(e) => {
            debug!(pver, field = ?e.field(), error = %e, "net address decode failed");
            Err(e)
        }
    }
}

// Every field lands in a local first and is stored only once complete.
fn read_fields<R: Read>(r: &mut R, with_ts: bool, na: &mut NetAddress) -> Result<()> {
    if with_ts {
        na.timestamp = r
            .read_i32::<LittleEndian>()
            .map_err(|e| WireError::from_read(Field::Timestamp, e))?;
    }

    let services = r
        .read_u64::<LittleEndian>()
        .map_err(|e| WireError::from_read(Field::Services, e))?;
    na.services = ServiceFlag::from_raw(services);

    let mut ip = [0u8; 16];
    r.read_exact(&mut ip)
        .map_err(|e| WireError::from_read(Field::Ip, e))?;
    na.ip = Ipv6Addr::from(ip);

    na.port = r
        .read_u16::<BigEndian>()
        .map_err(|e| WireError::from_read(Field::Port, e))?;
    Ok(())
}
