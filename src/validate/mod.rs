//! Structural and value validation of an RSS 2.0 tree.
//!
//! Every element type implements [`Node`]: its own rules live in
//! [`Node::check`], its children are declared by [`Node::slots`]. A single
//! [`Validator`] walks any subtree and collects every [`Violation`] in
//! document order.
//!
//! # Examples
//!
//! ```
//! use rss_validate::error::ErrorKind;
//! use rss_validate::model::{Channel, Rss};
//! use rss_validate::validate::validate;
//!
//! let rss = Rss::new(Channel::new("News", "", "Daily news"));
//! let report = validate(&rss);
//!
//! assert!(!report.is_valid());
//! assert_eq!(report.violations()[0].kind, ErrorKind::EmptyValue);
//! assert_eq!(report.violations()[1].kind, ErrorKind::InvalidUri);
//! ```

mod engine;
mod rules;
mod violation;

pub use engine::{validate, Node, Options, Presence, Report, Rule, Scope, Slot, Validator};
pub use violation::Violation;
