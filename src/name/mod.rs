//! Display name formatting for people with own and partner family names.
//!
//! This module provides:
//! - `convention`: the `B` / `P` / `BP` / `PB` surname conventions
//! - `record`: the name record and the person document wrapping it
//! - `formatting`: turning a record into its display name

mod convention;
mod formatting;
mod record;

pub use convention::Convention;
pub use formatting::format_display_name;
pub use record::{NameRecord, Person};
