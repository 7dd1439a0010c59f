//! Property-based tests using proptest
//!
//! These tests check codec invariants across randomly generated addresses
//! and protocol versions.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use raven_wire::core::fixed::{FixedReader, FixedWriter};
use raven_wire::core::netaddress::{
    max_payload_length, read_net_address, write_net_address, NetAddress,
};
use raven_wire::core::protocol::{supports_timestamp, NET_ADDRESS_TIME_VERSION};
use raven_wire::core::service::ServiceFlag;
use raven_wire::error::Field;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

fn arb_ip() -> impl Strategy<Value = IpAddr> {
    prop_oneof![
        any::<[u8; 4]>().prop_map(|b| IpAddr::V4(Ipv4Addr::from(b))),
        any::<[u8; 16]>().prop_map(|b| IpAddr::V6(Ipv6Addr::from(b))),
    ]
}

fn arb_net_address() -> impl Strategy<Value = NetAddress> {
    (any::<i32>(), any::<u64>(), arb_ip(), any::<u16>()).prop_map(|(ts, services, ip, port)| {
        NetAddress::with_timestamp(ts, ServiceFlag::from_raw(services), ip, port)
    })
}

// Property: encode then decode at a timestamp-capable version is lossless
proptest! {
    #[test]
    fn prop_roundtrip_with_timestamp(
        na in arb_net_address(),
        pver in NET_ADDRESS_TIME_VERSION..=u32::MAX,
    ) {
        let buf = na.encode_to_vec(pver).unwrap();
        let decoded = NetAddress::decode(&mut buf.as_slice(), pver).expect("decode");
        prop_assert_eq!(decoded, na);
    }
}

// Property: without timestamp support every field except the timestamp survives
proptest! {
    #[test]
    fn prop_roundtrip_without_timestamp(
        na in arb_net_address(),
        pver in 0u32..NET_ADDRESS_TIME_VERSION,
    ) {
        let buf = na.encode_to_vec(pver).unwrap();
        let decoded = NetAddress::decode(&mut buf.as_slice(), pver).expect("decode");
        prop_assert_eq!(decoded, NetAddress { timestamp: 0, ..na });
    }
}

// Property: the encoded length always equals the advertised maximum
proptest! {
    #[test]
    fn prop_encoded_len_matches_max_payload(na in arb_net_address(), pver in any::<u32>()) {
        let buf = na.encode_to_vec(pver).unwrap();
        prop_assert_eq!(buf.len(), max_payload_length(pver));
        prop_assert_eq!(buf.len(), if supports_timestamp(pver) { 30 } else { 26 });
    }
}

// Property: a truncated sink always fails and keeps exactly what it accepted
proptest! {
    #[test]
    fn prop_truncated_sink_fails(na in arb_net_address(), pver in any::<u32>(), cut in 0usize..30) {
        let full = na.encode_to_vec(pver).unwrap();
        prop_assume!(cut < full.len());

        let mut w = FixedWriter::new(cut);
        let err = write_net_address(&mut w, pver, &na).unwrap_err();
        prop_assert!(err.is_short_write());
        prop_assert_eq!(w.bytes(), &full[..cut]);
    }
}

// Property: a truncated source always fails with end of input
proptest! {
    #[test]
    fn prop_truncated_source_fails(na in arb_net_address(), pver in any::<u32>(), cut in 0usize..30) {
        let full = na.encode_to_vec(pver).unwrap();
        prop_assume!(cut < full.len());

        let mut out = NetAddress::default();
        let mut r = FixedReader::new(cut, &full);
        let err = read_net_address(&mut r, pver, &mut out).unwrap_err();
        prop_assert!(err.is_eof());

        // The cut field and everything after it keep their defaults.
        let blank = NetAddress::default();
        let ts = if supports_timestamp(pver) { na.timestamp } else { 0 };
        match err.field().expect("eof names a field") {
            Field::Timestamp => prop_assert_eq!(out, blank),
            Field::Services => prop_assert_eq!(out, NetAddress { timestamp: ts, ..blank }),
            Field::Ip => {
                prop_assert_eq!(out.services, na.services);
                prop_assert_eq!(out.ip, blank.ip);
                prop_assert_eq!(out.port, blank.port);
            }
            Field::Port => {
                prop_assert_eq!(out.ip, na.ip);
                prop_assert_eq!(out.port, blank.port);
            }
        }
    }
}

// Property: decoding arbitrary bytes never panics
proptest! {
    #[test]
    fn prop_decode_arbitrary_bytes(data in prop::collection::vec(any::<u8>(), 0..64), pver in any::<u32>()) {
        let res = NetAddress::decode(&mut data.as_slice(), pver);
        prop_assert_eq!(res.is_ok(), data.len() >= max_payload_length(pver));
    }
}

// Property: added services are set and never clear earlier ones
proptest! {
    #[test]
    fn prop_add_service_accumulates(initial in any::<u64>(), added in any::<u64>()) {
        let mut na = NetAddress {
            services: ServiceFlag::from_raw(initial),
            ..NetAddress::default()
        };
        na.add_service(ServiceFlag::from_raw(added));

        prop_assert_eq!(na.services.bits(), initial | added);
        if added != 0 {
            prop_assert!(na.has_service(ServiceFlag::from_raw(added)));
        }
    }
}
