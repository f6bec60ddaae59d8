//! med - terminal text viewer
//!
//! Views an immutable text buffer with soft line wrapping, tab expansion and
//! incremental search. Pure Core / Impure Shell architecture:
//!
//! - pure core: [`model`], [`layout`], [`state`]
//! - impure shell: [`config`], [`logging`], [`source`], [`view`]

pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
