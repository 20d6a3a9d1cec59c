//! Syntactic checks on single values.
//!
//! Every check is a pure function `&str -> Result<(), ValidationError>`:
//!
//! - **Presence**: [`not_empty`], [`must_be_empty`]
//! - **Formats**: [`valid_uri`] (RFC 3986), [`valid_date`] (RFC 822/1123),
//!   [`valid_mail_address`] (RFC 5322)
//! - **Values**: [`valid_enum`], [`bounded_uint`], [`non_negative_int`]
//!
//! # Examples
//!
//! ```
//! use rss_validate::util::{bounded_uint, valid_uri};
//!
//! assert!(valid_uri("https://example.com/feed.xml").is_ok());
//! assert!(bounded_uint("23", 0..=23).is_ok());
//! ```

mod checks;
mod date;
mod mail;
mod url_validator;

pub use checks::{bounded_uint, must_be_empty, non_negative_int, not_empty, valid_enum};
pub use date::{parse_date, valid_date};
pub use mail::valid_mail_address;
pub use url_validator::valid_uri;
