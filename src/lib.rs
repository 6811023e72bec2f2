//! Display name formatting with own and partner family names.
//!
//! A person's display name is built from a nick name, an optional family
//! name prefix, a family name, an optional partner prefix and partner family
//! name, following one of four surname conventions (`B`, `P`, `BP`, `PB`).
//!
//! # Examples
//!
//! ```rust
//! use display_name::{Convention, NameRecord, format_display_name};
//!
//! let record = NameRecord::new("Alexandra", "Wal")
//!     .with_prefix("van der")
//!     .with_partner("Vries")
//!     .with_partner_prefix("de")
//!     .with_convention(Convention::OwnThenPartner);
//!
//! assert_eq!(format_display_name(&record), "Alexandra van der Wal - de Vries");
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod logging;
pub mod name;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use name::{Convention, NameRecord, Person, format_display_name};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
