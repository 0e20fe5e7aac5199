/// Command registry module
///
/// The fixed vocabulary, its content, and the alias-resolved lookup table.

pub mod content;
pub mod markup;
pub mod models;
pub mod table;

pub use models::*;
pub use table::Registry;
