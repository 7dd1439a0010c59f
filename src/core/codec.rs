//! # Network Address Codec
//!
//! Tokio codec that frames fixed-size network-address records over a byte
//! stream.
//!
//! A record is `max_payload_length(pver)` bytes, so no length prefix is
//! needed: the decoder waits until a full record is buffered, then consumes
//! exactly that many bytes.

use crate::core::netaddress::{max_payload_length, read_net_address, write_net_address, NetAddress};
use crate::core::protocol::PROTOCOL_VERSION;
use crate::error::WireError;
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Frames [`NetAddress`] records for a fixed protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetAddressCodec {
    pver: u32,
}

impl NetAddressCodec {
    pub fn new(pver: u32) -> Self {
        Self { pver }
    }

    pub fn protocol_version(&self) -> u32 {
        self.pver
    }

    /// Size of one framed record.
    pub fn frame_len(&self) -> usize {
        max_payload_length(self.pver)
    }
}

impl Default for NetAddressCodec {
    fn default() -> Self {
        Self::new(PROTOCOL_VERSION)
    }
}

impl Decoder for NetAddressCodec {
    type Item = NetAddress;
    type Error = WireError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let frame_len = self.frame_len();
        if src.len() < frame_len {
            src.reserve(frame_len - src.len());
            return Ok(None);
        }

        let frame = src.split_to(frame_len);
        let mut na = NetAddress::default();
        read_net_address(&mut frame.reader(), self.pver, &mut na)?;
        Ok(Some(na))
    }

    /// At end of stream, leftover bytes are a truncated record: they are run
    /// through the field reader so the error names the field that was cut.
    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if let Some(na) = self.decode(src)? {
            return Ok(Some(na));
        }
        if src.is_empty() {
            return Ok(None);
        }

        let rest = src.split();
        let mut na = NetAddress::default();
        read_net_address(&mut rest.reader(), self.pver, &mut na).map(|()| Some(na))
    }
}

impl Encoder<NetAddress> for NetAddressCodec {
    type Error = WireError;

    fn encode(&mut self, item: NetAddress, dst: &mut BytesMut) -> Result<(), Self::Error> {
        dst.reserve(self.frame_len());
        write_net_address(&mut dst.writer(), self.pver, &item)
    }
}
