//! Internal HTTP layer: URL construction, status checking, and the
//! resource-request surface. Only [`resources::ResourceProxy`] is re-exported
//! at the crate root; the rest is implementation detail.

pub(crate) mod common;
pub(crate) mod resources;
