//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build CookieParser → Start listener
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     Ctrl+C or Shutdown::trigger → Stop accepting → Drain connections → Exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
