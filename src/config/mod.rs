//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → CookieParser built once from CookieConfig
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; secrets never change at runtime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AppConfig;
pub use schema::CookieConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::TimeoutConfig;
pub use validation::{validate_config, ValidationError};
