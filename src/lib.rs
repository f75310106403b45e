//! # scaleway-rs
//!
//! A thin async client SDK for the Scaleway cloud REST APIs: account,
//! compute, and instance metadata.
//!
//! The crate does one job: configure an HTTP session (auth header,
//! User-Agent, TLS verification) and hand it to a generic resource-request
//! surface keyed by a base URL. There is no retry logic, no caching, and
//! no pagination handling; what the transport returns is what you get.
//!
//! ## Example
//!
//! ```no_run
//! use scaleway_rs::{ComputeApi, Region};
//! use serde_json::Value;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = ComputeApi::new(Region::Par1, Some("your-token".to_string()));
//! let servers: Value = api.query()?.get("servers", &[]).await?;
//! println!("{servers:#}");
//! # Ok(())
//! # }
//! ```
//!
//! Every request carries `X-Auth-Token` (when a token is configured) and a
//! `User-Agent` identifying the SDK, the Rust toolchain, and the platform.
//! Sessions are built fresh for every [`Client::query`] call; clients are
//! plain immutable values and cheap to clone.

pub mod apis;
pub mod client;
pub mod errors;
mod http;
mod user_agent;

pub use apis::{AccountApi, ComputeApi, MetadataApi, Region};
pub use client::{AUTH_TOKEN_HEADER, Client, ClientBuilder};
pub use errors::ScwError;
pub use http::resources::ResourceProxy;
pub use user_agent::default_user_agent;
