//! File- and environment-backed configuration loaders.
//!
//! Pure parsing lives in `domain::defaults`.

mod load_defaults;

pub use load_defaults::load_defaults;
