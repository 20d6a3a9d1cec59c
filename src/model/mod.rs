//! Typed RSS 2.0 document tree.
//!
//! The tree is plain owned data: every child is either a [`Field`] (absent or
//! present) or, for repeatable elements, a `Vec`. Character data is a `String`
//! on the element itself; attributes are `Field<String>`.
//!
//! ```text
//! Rss ─ version, channel
//!       └─ Channel ─ title, link, description, …, cloud, image, textInput,
//!                    skipHours, skipDays, category[], item[]
//!                    └─ Item ─ title, link, description, source, enclosure,
//!                              category[], pubDate, guid, comments, author
//! ```

mod channel;
mod item;
mod text;

pub use channel::{Channel, Cloud, Image, SkipDays, SkipHours, TextInput};
pub use item::{Category, Enclosure, Guid, Item, Source};
pub use text::{
    Author, Comments, Copyright, Day, Description, Docs, Generator, Height, Hour, ImageUrl,
    Language, LastBuildDate, Link, ManagingEditor, Name, PubDate, Rating, Title, Ttl, WebMaster,
    Width,
};

use crate::field::Field;

/// The only `version` attribute value this crate accepts.
pub const RSS_VERSION: &str = "2.0";

/// `<rss>`: the document root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Rss {
    pub version: Field<String>,
    pub channel: Field<Channel>,
    /// Any `<channel>` after the first, kept so validation can flag them.
    pub extra_channels: Vec<Channel>,
}

impl Rss {
    pub const TAG: &'static str = "rss";

    /// A version 2.0 document wrapping `channel`.
    pub fn new(channel: Channel) -> Self {
        Self {
            version: Field::Present(RSS_VERSION.to_string()),
            channel: Field::Present(channel),
            extra_channels: Vec::new(),
        }
    }
}
