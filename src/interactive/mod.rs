//! Interactive TUI front-end

mod app;
mod focus;
mod rendering;
mod session;

pub use app::{App, run_tui};
pub use focus::{Focus, Section};
pub use session::{Completion, QuerySession};
