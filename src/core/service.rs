//! # Service Flags
//!
//! Capabilities a peer advertises alongside its address.
//!
//! The set is open: bits this crate has no name for are kept as-is, so a
//! record decoded from the wire re-encodes to the same bytes.

use std::fmt;

bitflags::bitflags! {
    /// Bit set of services supported by a peer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ServiceFlag: u64 {
        /// Full node, serves the complete block chain.
        const NETWORK         = 1 << 0;
        /// Answers `getutxos` queries.
        const GETUTXO         = 1 << 1;
        /// Supports bloom filtering.
        const BLOOM           = 1 << 2;
        /// Serves blocks and transactions with witness data.
        const WITNESS         = 1 << 3;
        /// Supports xthin blocks.
        const XTHIN           = 1 << 4;
        /// Pruned node, serves only the most recent blocks.
        const NETWORK_LIMITED = 1 << 10;
    }
}

const FLAG_NAMES: [(ServiceFlag, &str); 6] = [
    (ServiceFlag::NETWORK, "SFNodeNetwork"),
    (ServiceFlag::GETUTXO, "SFNodeGetUTXO"),
    (ServiceFlag::BLOOM, "SFNodeBloom"),
    (ServiceFlag::WITNESS, "SFNodeWitness"),
    (ServiceFlag::XTHIN, "SFNodeXthin"),
    (ServiceFlag::NETWORK_LIMITED, "SFNodeNetworkLimited"),
];

impl ServiceFlag {
    /// Builds a flag set from raw wire bits, keeping unknown bits.
    #[inline]
    pub fn from_raw(bits: u64) -> Self {
        Self::from_bits_retain(bits)
    }

    /// Bits this crate does not name.
    pub fn unknown_bits(self) -> u64 {
        self.bits() & !Self::all().bits()
    }
}

impl Default for ServiceFlag {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<u64> for ServiceFlag {
    fn from(bits: u64) -> Self {
        Self::from_raw(bits)
    }
}

impl From<ServiceFlag> for u64 {
    fn from(flags: ServiceFlag) -> Self {
        flags.bits()
    }
}

impl fmt::Display for ServiceFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0x0");
        }

        let mut first = true;
        for (flag, name) in FLAG_NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }

        let unknown = self.unknown_bits();
        if unknown != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{unknown:#x}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_bits_retained() {
        let flags = ServiceFlag::from_raw(0x8000_0000_0000_0401);
        assert_eq!(flags.bits(), 0x8000_0000_0000_0401);
        assert_eq!(flags.unknown_bits(), 0x8000_0000_0000_0000);
        assert!(flags.contains(ServiceFlag::NETWORK | ServiceFlag::NETWORK_LIMITED));
    }

    #[test]
    fn test_display() {
        assert_eq!(ServiceFlag::empty().to_string(), "0x0");
        assert_eq!(ServiceFlag::NETWORK.to_string(), "SFNodeNetwork");
        assert_eq!(
            (ServiceFlag::NETWORK | ServiceFlag::BLOOM).to_string(),
            "SFNodeNetwork|SFNodeBloom"
        );
        assert_eq!(
            ServiceFlag::from_raw(0x1 | 0x100).to_string(),
            "SFNodeNetwork|0x100"
        );
        assert_eq!(ServiceFlag::from_raw(0x200).to_string(), "0x200");
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(ServiceFlag::default(), ServiceFlag::empty());
        assert_eq!(u64::from(ServiceFlag::default()), 0);
    }
}
