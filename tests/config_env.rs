//! Environment-variable configuration. Kept in its own test binary so the
//! variables do not leak into other tests.

#![allow(clippy::expect_used)]

use raven_wire::config::{WireConfig, ENV_LOG_LEVEL, ENV_PROTOCOL_VERSION};
use raven_wire::error::WireError;
use tracing::Level;

#[test]
fn test_from_env_overrides() {
    std::env::set_var(ENV_PROTOCOL_VERSION, "31402");
    std::env::set_var(ENV_LOG_LEVEL, "warn");

    let config = WireConfig::from_env().expect("valid env");
    assert_eq!(config.protocol.version, 31402);
    assert_eq!(config.logging.log_level, Level::WARN);

    std::env::set_var(ENV_PROTOCOL_VERSION, "latest");
    let res = WireConfig::from_env();
    assert!(matches!(res, Err(WireError::ConfigError(ref msg)) if msg.contains(ENV_PROTOCOL_VERSION)));

    std::env::remove_var(ENV_PROTOCOL_VERSION);
    std::env::remove_var(ENV_LOG_LEVEL);
    let config = WireConfig::from_env().expect("defaults");
    assert_eq!(config.protocol.version, raven_wire::PROTOCOL_VERSION);
}
