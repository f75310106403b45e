//! Default User-Agent computation.
//!
//! Sessions advertise the SDK version, the Rust toolchain that built the
//! crate, and the target platform, in the form
//! `scw-sdk/0.1.0 rust/1.88.0 linux-x86_64`. The string is computed once
//! per process; callers override it per client via
//! [`ClientBuilder::user_agent`](crate::ClientBuilder::user_agent).

use std::sync::OnceLock;

static DEFAULT_USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the process-wide default `User-Agent` string.
pub fn default_user_agent() -> &'static str {
    DEFAULT_USER_AGENT.get_or_init(|| {
        format!(
            "scw-sdk/{} rust/{} {}-{}",
            env!("CARGO_PKG_VERSION"),
            env!("SCW_RUSTC_VERSION"),
            std::env::consts::OS,
            std::env::consts::ARCH,
        )
    })
}
