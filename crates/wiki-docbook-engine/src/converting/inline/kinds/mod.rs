//! # Inline Kinds
//!
//! Inline types that own their syntax delimiters.
//!
//! - **`Link`**: `OPEN = b'['`, `CLOSE = b']'`, url ends at `SEPARATOR = b' '`
//! - **`Emphasis`**: `*` bold, `_` italic, `` ` `` literal, plus the DocBook tags
//!
//! The rewriters use these constants; they never hardcode `[` or `*`.

pub mod emphasis;
pub mod link;

pub use emphasis::Emphasis;
pub use link::Link;
