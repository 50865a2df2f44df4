//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus
//! - **[`panes`]** — stateless render functions for the moves pane, the
//!   yard pane, and the status bar
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with an
//! [`Engine`] whose run has completed and call [`App::run`] to step through
//! the recorded move history.
//!
//! [`Engine`]: crate::engine::Engine
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
