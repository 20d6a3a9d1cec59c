use crate::field::Field;

use super::text::{Author, Comments, Description, Link, PubDate, Title};

/// `<item>`: one story in a channel.
///
/// Every sub-element is optional, but at least one of `title` or
/// `description` must be present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    pub title: Field<Title>,
    pub link: Field<Link>,
    pub description: Field<Description>,
    pub source: Field<Source>,
    pub enclosure: Field<Enclosure>,
    pub categories: Vec<Category>,
    pub pub_date: Field<PubDate>,
    pub guid: Field<Guid>,
    pub comments: Field<Comments>,
    pub author: Field<Author>,
}

impl Item {
    pub const TAG: &'static str = "item";
}

/// `<source>`: the channel an item came from.
///
/// The character data (the source channel's title) may be empty; `url` is
/// required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Source {
    pub value: String,
    pub url: Field<String>,
}

impl Source {
    pub const TAG: &'static str = "source";

    pub fn new(value: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            url: Field::Present(url.into()),
        }
    }
}

/// `<enclosure>`: a media object attached to an item.
///
/// Carries no character data; `url`, `length` and `type` are all required.
/// A `length` of `0` means the size is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Enclosure {
    pub value: String,
    pub url: Field<String>,
    pub length: Field<String>,
    pub mime_type: Field<String>,
}

impl Enclosure {
    pub const TAG: &'static str = "enclosure";

    pub fn new(
        url: impl Into<String>,
        length: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            value: String::new(),
            url: Field::Present(url.into()),
            length: Field::Present(length.into()),
            mime_type: Field::Present(mime_type.into()),
        }
    }
}

/// `<guid>`: a string that uniquely identifies an item.
///
/// When `isPermaLink` is `"true"` the value must also be a URI.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Guid {
    pub value: String,
    pub is_perma_link: Field<String>,
}

impl Guid {
    pub const TAG: &'static str = "guid";

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_perma_link: Field::Absent,
        }
    }

    pub fn with_perma_link(mut self, is_perma_link: impl Into<String>) -> Self {
        self.is_perma_link = Field::Present(is_perma_link.into());
        self
    }
}

/// `<category>` of a channel or item, optionally scoped by a `domain`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Category {
    pub value: String,
    pub domain: Field<String>,
}

impl Category {
    pub const TAG: &'static str = "category";

    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            domain: Field::Absent,
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Field::Present(domain.into());
        self
    }
}
