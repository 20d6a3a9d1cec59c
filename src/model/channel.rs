use crate::field::Field;

use super::item::{Category, Item};
use super::text::{
    Copyright, Day, Description, Docs, Generator, Height, Hour, ImageUrl, Language,
    LastBuildDate, Link, ManagingEditor, Name, PubDate, Rating, Title, Ttl, WebMaster, Width,
};

/// `<channel>`: metadata about a feed and its items.
///
/// `title`, `link` and `description` are required; they are still `Field`s
/// because a parsed document may omit them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Channel {
    pub title: Field<Title>,
    pub link: Field<Link>,
    pub description: Field<Description>,
    pub language: Field<Language>,
    pub copyright: Field<Copyright>,
    pub managing_editor: Field<ManagingEditor>,
    pub web_master: Field<WebMaster>,
    pub pub_date: Field<PubDate>,
    pub last_build_date: Field<LastBuildDate>,
    pub categories: Vec<Category>,
    pub generator: Field<Generator>,
    pub docs: Field<Docs>,
    pub cloud: Field<Cloud>,
    pub ttl: Field<Ttl>,
    pub image: Field<Image>,
    pub rating: Field<Rating>,
    pub text_input: Field<TextInput>,
    pub skip_hours: Field<SkipHours>,
    pub skip_days: Field<SkipDays>,
    pub items: Vec<Item>,
}

impl Channel {
    pub const TAG: &'static str = "channel";

    /// A channel with the three required elements set.
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: Field::Present(Title::new(title)),
            link: Field::Present(Link::new(link)),
            description: Field::Present(Description::new(description)),
            ..Self::default()
        }
    }
}

/// `<cloud>`: a publish-subscribe endpoint for update notifications.
///
/// Optional as a whole, but once present every attribute is required.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cloud {
    pub value: String,
    pub domain: Field<String>,
    pub port: Field<String>,
    pub path: Field<String>,
    pub register_procedure: Field<String>,
    pub protocol: Field<String>,
}

impl Cloud {
    pub const TAG: &'static str = "cloud";

    /// Transports a cloud may register with.
    pub const PROTOCOLS: &'static [&'static str] = &["xml-rpc", "soap", "http-post"];
}

/// `<image>`: a GIF, JPEG or PNG displayed with the channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Image {
    pub url: Field<ImageUrl>,
    pub title: Field<Title>,
    pub link: Field<Link>,
    pub width: Field<Width>,
    pub height: Field<Height>,
    pub description: Field<Description>,
}

impl Image {
    pub const TAG: &'static str = "image";

    pub fn new(url: impl Into<String>, title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            url: Field::Present(ImageUrl::new(url)),
            title: Field::Present(Title::new(title)),
            link: Field::Present(Link::new(link)),
            ..Self::default()
        }
    }
}

/// `<textInput>`: a text box displayed with the channel.
///
/// All four sub-elements are required as a group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextInput {
    pub title: Field<Title>,
    pub description: Field<Description>,
    pub name: Field<Name>,
    pub link: Field<Link>,
}

impl TextInput {
    pub const TAG: &'static str = "textInput";
}

/// `<skipHours>`: up to 24 hours (GMT) during which aggregators should not
/// read the channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkipHours {
    pub hours: Vec<Hour>,
}

impl SkipHours {
    pub const TAG: &'static str = "skipHours";
    pub const MAX_HOURS: usize = 24;
}

/// `<skipDays>`: up to seven days during which aggregators should not read
/// the channel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkipDays {
    pub days: Vec<Day>,
}

impl SkipDays {
    pub const TAG: &'static str = "skipDays";
    pub const MAX_DAYS: usize = 7;

    /// Values accepted when strict day checking is enabled.
    pub const DAY_NAMES: &'static [&'static str] = &[
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
}
