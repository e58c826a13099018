//! # Block Conversion
//!
//! Two-phase, line-at-a-time conversion.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    from local facts only (heading marks, list markers, fences, `||`).
//!
//! 2. **Transduction** (`transducer`): a `LineTransducer` owns the
//!    `ConversionContext` and turns each classified line into state
//!    transitions plus XML fragments.
//!
//! ## Modules
//!
//! - **`kinds`**: block types owning their delimiters (Heading, ListItem, Table, ...)
//! - **`classify`**: `WikiLineClassifier` produces a `LineClass` per line
//! - **`types`**: `BlockContainer`, the paragraph/list container kinds
//! - **`context`**: `ConversionContext`, the state threaded across lines
//! - **`transducer`**: section and block state machines, tables, literal blocks
//!
//! ## Key Invariants
//!
//! - At most one block container is open at a time
//! - Sections nest strictly: `sect2` only ever appears inside `sect1`
//! - Literal blocks are raw zones: no classification or inline rewriting inside

pub mod classify;
pub mod context;
pub mod kinds;
pub mod transducer;
pub mod types;

pub use classify::{LineClass, WikiLineClassifier};
pub use context::ConversionContext;
pub use transducer::LineTransducer;
pub use types::BlockContainer;
