#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod error;
mod expression;
mod helpers;
mod parser;
mod types;
mod url_helper;
mod url_parts;

// Public API
pub use error::{MalformedUrlError, Result};
pub use expression::{DEFAULT_EXPRESSION, PartSet};
pub use types::{Part, PartValue};
pub use url_helper::UrlHelper;
pub use url_parts::UrlParts;
