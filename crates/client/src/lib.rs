//! Line-based terminal client for turn-based skirmishes.
//!
//! ```text
//! main (composition root)
//!   ├─→ config   (environment)
//!   ├─→ logging  (tracing to stderr / file)
//!   └─→ app      (runtime + human channel + stdin loop)
//!         ├─→ input   (text → commands)
//!         └─→ render  (roster and menus → text)
//! ```
pub mod app;
pub mod config;
pub mod input;
pub mod logging;
pub mod render;

pub use app::CliApp;
pub use config::ClientConfig;
