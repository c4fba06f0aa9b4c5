//! Discovery and parsing of `.env`-style configuration files.
//!
//! This crate locates a `KEY=VALUE` file by filename hint somewhere under a
//! root directory, parses it into a flat string-to-string mapping, and
//! exposes the mapping through explicit lookups ([`EnvFile::get`]) and an
//! attribute-style surface ([`EnvFile::attr`]).
//!
//! The format is intentionally minimal: no quoting, no escaping, no
//! interpolation, no merging with the process environment. See the module
//! docs of [`parser`] for the exact line grammar.

pub mod discover;
pub mod error;
pub mod loader;
pub mod parser;

pub use discover::{DEFAULT_HINT, discover, discover_all};
pub use error::{EnvError, Result};
pub use loader::{Attr, EnvFile};
