//! API-family entry points.
//!
//! Each family is a thin value wrapping a [`Client`](crate::Client)
//! configured with the family's default base URL; all of them share the
//! same session and query behavior. Override the defaults by building a
//! `Client` yourself and passing it to the family's `from_client`.

pub mod account;
pub mod compute;
pub mod metadata;

pub use account::AccountApi;
pub use compute::{ComputeApi, Region};
pub use metadata::MetadataApi;
