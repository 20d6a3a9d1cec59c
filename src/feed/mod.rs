//! Reading and writing RSS 2.0 XML.
//!
//! - **Parsing**: [`parse`] turns bytes into a typed [`Rss`](crate::model::Rss)
//!   tree, keeping absent and present-but-empty nodes apart
//! - **Rendering**: [`render`] turns a tree back into compact XML
//!
//! # Architecture
//!
//! - [`parser`] - quick-xml event reader building a raw element tree
//! - `decode` - raw tree to typed tree, skipping unknown elements
//! - [`writer`] - quick-xml writer emitting elements in declaration order
//!
//! # Example
//!
//! ```
//! use rss_validate::feed::{parse, render};
//!
//! let xml = br#"<rss version="2.0"><channel><title>t</title><link>https://example.com</link><description></description></channel></rss>"#;
//! let rss = parse(xml)?;
//! assert_eq!(render(&rss)?, xml.to_vec());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decode;
pub mod parser;
pub mod writer;

pub use parser::{parse, parse_with_limit, ParseError, MAX_DEPTH};
pub use writer::{render, render_with, RenderError, RenderOptions};
