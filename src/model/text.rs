//! Elements that carry only character data.

macro_rules! text_element {
    ($(#[$meta:meta])* $name:ident => $tag:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name {
            pub value: String,
        }

        impl $name {
            pub const TAG: &'static str = $tag;

            pub fn new(value: impl Into<String>) -> Self {
                Self {
                    value: value.into(),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self { value }
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }
    };
}

text_element!(
    /// `<title>` of a channel, image, text input or item.
    Title => "title"
);
text_element!(
    /// `<link>` of a channel, image, text input or item. Must be a URI.
    Link => "link"
);
text_element!(
    /// `<description>` of a channel, image, text input or item.
    Description => "description"
);
text_element!(
    /// `<language>` of a channel. ISO 639 codes are not enforced.
    Language => "language"
);
text_element!(Copyright => "copyright");
text_element!(ManagingEditor => "managingEditor");
text_element!(WebMaster => "webMaster");
text_element!(
    /// `<pubDate>` of a channel or item, RFC 822.
    PubDate => "pubDate"
);
text_element!(
    /// `<lastBuildDate>` of a channel, RFC 822.
    LastBuildDate => "lastBuildDate"
);
text_element!(Generator => "generator");
text_element!(Docs => "docs");
text_element!(
    /// `<ttl>`: minutes a channel may be cached.
    Ttl => "ttl"
);
text_element!(
    /// `<rating>`: PICS rating, free-form.
    Rating => "rating"
);
text_element!(
    /// `<name>` of a text input: the form field name.
    Name => "name"
);
text_element!(
    /// `<url>` of an image: location of the GIF, JPEG or PNG.
    ImageUrl => "url"
);
text_element!(
    /// `<width>` of an image, at most 144. No default is applied when absent.
    Width => "width"
);
text_element!(
    /// `<height>` of an image, at most 400. No default is applied when absent.
    Height => "height"
);
text_element!(
    /// `<comments>` of an item: URL of its comments page.
    Comments => "comments"
);
text_element!(
    /// `<author>` of an item: mail address of the author.
    Author => "author"
);
text_element!(
    /// `<hour>` of `<skipHours>`, 0-23 in GMT.
    Hour => "hour"
);
text_element!(
    /// `<day>` of `<skipDays>`.
    Day => "day"
);
