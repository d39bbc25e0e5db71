//! Helper functions shared by the content loader, page derivation and templates

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
