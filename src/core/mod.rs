/// Core functionality modules
///
/// Contains the interpreter: dispatching input, the transcript,
/// input history and the session that ties them together.

pub mod dispatcher;
pub mod history;
pub mod session;
pub mod transcript;

pub use dispatcher::Dispatcher;
pub use history::{History, Recall};
pub use session::Session;
pub use transcript::{Transcript, TranscriptEntry};
