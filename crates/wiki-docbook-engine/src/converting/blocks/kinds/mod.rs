pub mod code_block;
pub mod comment;
pub mod heading;
pub mod image;
pub mod list;
pub mod table;

pub use code_block::{CodeBlock, FenceSig};
pub use comment::Comment;
pub use heading::Heading;
pub use image::Image;
pub use list::{ListItem, ListKind};
pub use table::Table;
