//! IR vocabulary tables.
//!
//! Pure data: block kinds, mark kinds, engine titles and the contract version.

pub(crate) mod registry;
