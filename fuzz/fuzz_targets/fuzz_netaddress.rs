#![no_main]

use libfuzzer_sys::fuzz_target;
use raven_wire::core::netaddress::{max_payload_length, NetAddress};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let pver = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let payload = &data[4..];

    // Any complete record must re-encode to the bytes it came from.
    if let Ok(na) = NetAddress::decode(&mut &payload[..], pver) {
        let len = max_payload_length(pver);
        assert_eq!(na.encode_to_vec(pver).unwrap(), &payload[..len]);
    }
});
