//! al5-core: Shared types for the Allegro binding crates
//!
//! Everything here is pure Rust; nothing links against Allegro.
//! - [`Version`]: the packed version word every addon reports
//! - [`RawHandle`]: a non-null opaque native pointer
//! - [`AllegroError`]: the single error type surfaced by the wrappers

mod error;
mod handle;
mod version;

pub use error::*;
pub use handle::*;
pub use version::*;
