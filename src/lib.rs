//! Parse, validate and render RSS 2.0 documents.
//!
//! The crate keeps an element or attribute that is missing from a document
//! apart from one that is present with an empty value, and validates the
//! typed tree against the RSS 2.0 rules, reporting every violation in
//! document order instead of stopping at the first.
//!
//! - [`feed`] - XML in ([`parse`]) and out ([`render`])
//! - [`model`] - the typed element tree
//! - [`validate`](mod@validate) - rule engine and per-element policy
//! - [`util`] - single-value checks (URI, RFC 822 date, mail address, ...)
//! - [`config`] - optional TOML configuration for the CLI
//!
//! # Example
//!
//! ```
//! use rss_validate::{parse, validate, ErrorKind};
//!
//! let xml = br#"<rss version="2.0"><channel>
//!   <title>Liftoff News</title>
//!   <link>http://liftoff.msfc.nasa.gov/</link>
//!   <description>Liftoff to Space Exploration.</description>
//!   <ttl></ttl>
//! </channel></rss>"#;
//!
//! let rss = parse(xml)?;
//! let report = validate(&rss);
//!
//! assert!(!report.is_valid());
//! let kinds: Vec<ErrorKind> = report.violations().iter().map(|v| v.kind).collect();
//! assert_eq!(kinds, [ErrorKind::EmptyValue, ErrorKind::InvalidValue]);
//! # Ok::<(), rss_validate::ParseError>(())
//! ```

pub mod config;
pub mod error;
pub mod feed;
pub mod field;
pub mod model;
pub mod util;
pub mod validate;

pub use error::{ErrorKind, ValidationError};
pub use feed::{parse, parse_with_limit, render, render_with, ParseError, RenderError, RenderOptions};
pub use field::Field;
pub use model::Rss;
pub use validate::{validate, Options, Report, Validator, Violation};
