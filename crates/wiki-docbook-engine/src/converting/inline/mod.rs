//! # Inline Rewriting
//!
//! Turns the text of a heading, list item, table cell or paragraph line into
//! DocBook inline markup.
//!
//! ## Order
//!
//! Structure is classified first; only the surviving text reaches this
//! module, where [`rewrite_inline`] runs:
//!
//! 1. `entities`: `&`, `<`, `>` become entities
//! 2. `links`: `[url text]` becomes `<ulink>`
//! 3. `emphasis`: bold, italic, literal
//!
//! Escaping first means link text is escaped exactly once, and every `<`
//! seen by the later passes belongs to generated markup.

pub mod cursor;
pub mod emphasis;
pub mod entities;
pub mod kinds;
pub mod links;

pub use emphasis::rewrite_emphasis;
pub use entities::escape_entities;
pub use links::rewrite_links;

/// Runs the full inline pipeline over one piece of text.
pub fn rewrite_inline(text: &str) -> String {
    let escaped = escape_entities(text);
    let linked = rewrite_links(&escaped);
    rewrite_emphasis(&linked).into_owned()
}
