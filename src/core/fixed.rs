//! Fixed-capacity byte sink and source.
//!
//! [`FixedWriter`] stops accepting bytes once its capacity is used up and
//! [`FixedReader`] reports end of input after a fixed number of bytes. Both
//! are plain `std::io` implementations, so they plug into the codec like a
//! socket would. Sizing a `FixedWriter` with
//! [`max_payload_length`](crate::core::netaddress::max_payload_length) gives a
//! stack-friendly encode target; shorter capacities truncate at an exact
//! offset.

use std::io::{self, Read, Write};

/// A sink that accepts at most `capacity` bytes in total.
///
/// A write that does not fit is accepted partially; once full, every write
/// returns `Ok(0)`, which `write_all` reports as `ErrorKind::WriteZero`.
#[derive(Debug, Clone)]
pub struct FixedWriter {
    buf: Vec<u8>,
    capacity: usize,
}

impl FixedWriter {
    pub fn new(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    /// Bytes accepted so far.
    pub fn bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }
}

impl Write for FixedWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let n = data.len().min(self.remaining());
        self.buf.extend_from_slice(&data[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A source that yields at most `limit` bytes of the backing buffer.
#[derive(Debug, Clone)]
pub struct FixedReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> FixedReader<'a> {
    pub fn new(limit: usize, buf: &'a [u8]) -> Self {
        let end = limit.min(buf.len());
        Self {
            buf: &buf[..end],
            pos: 0,
        }
    }

    /// Bytes handed out so far.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl Read for FixedReader<'_> {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let rest = &self.buf[self.pos..];
        let n = out.len().min(rest.len());
        out[..n].copy_from_slice(&rest[..n]);
        self.pos += n;
        Ok(n)
    }
}
