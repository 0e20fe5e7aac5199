/// termfolio library
///
/// A portfolio presented as a tiny shell: fixed vocabulary, typo
/// suggestions, input history and a transcript.

pub mod config;
pub mod core;
pub mod error;
pub mod intelligence;
pub mod registry;
pub mod terminal;

// Re-exports for convenience
pub use config::Config;
pub use error::{PortfolioError, Result};
pub use registry::Registry;
