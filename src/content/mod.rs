//! Content module - loads posts and compiles their MDX bodies

mod collection;
mod frontmatter;
pub mod loader;
mod markdown;
mod post;
pub mod structured_data;

pub use collection::ContentCollection;
pub use frontmatter::FrontMatter;
pub use markdown::{strip_mdx_syntax, MarkdownRenderer};
pub use post::{Body, Images, Post};
