/// Terminal front end
///
/// Key handling, rendering, the live clock, link opening and the event loop.

pub mod browser;
pub mod clock;
pub mod events;
pub mod render;
pub mod repl;

pub use browser::{DisabledBrowser, LinkOpener, SystemBrowser};
pub use clock::{Clock, ClockHandle};
pub use events::InputEvent;
pub use render::Renderer;
pub use repl::{run_interactive, run_piped, Host};
