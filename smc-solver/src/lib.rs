/**
 * The market model builder and result extractor: catalogs in, a linear
 * program out, and dispatch/price results back from the solved program.
 */
mod model;
pub use model::*;

/**
 * These are the LP backends implementing the solving capability.
 */
mod impls;
pub use impls::*;

/// Export the assembled program to a standard optimization format
pub mod export;

/// Serde-friendly wrappers for reading scenarios from JSON
#[cfg(feature = "io")]
pub mod io;
