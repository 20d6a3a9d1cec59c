//! Per-element rule table.
//!
//! Each `Node` impl below is the complete policy for one RSS element: the
//! checks local to it and its child slots in document order.

use crate::error::ErrorKind;
use crate::model::{
    Author, Category, Channel, Cloud, Comments, Copyright, Day, Description, Docs, Enclosure,
    Generator, Guid, Height, Hour, Image, ImageUrl, Item, Language, LastBuildDate, Link,
    ManagingEditor, Name, PubDate, Rating, Rss, SkipDays, SkipHours, Source, TextInput, Title,
    Ttl, WebMaster, Width, RSS_VERSION,
};

use super::engine::{Node, Presence, Rule, Scope, Slot};

const VERSIONS: &[&str] = &[RSS_VERSION];
const BOOLEANS: &[&str] = &["true", "false"];

macro_rules! leaf_rules {
    ($($ty:ty => $rules:expr;)*) => {
        $(
            impl Node for $ty {
                fn tag(&self) -> &'static str {
                    <$ty>::TAG
                }

                fn check(&self, scope: &mut Scope<'_>) {
                    scope.text(&self.value, $rules);
                }
            }
        )*
    };
}

leaf_rules! {
    Title => &[Rule::NotEmpty];
    Link => &[Rule::NotEmpty, Rule::Uri];
    Description => &[Rule::NotEmpty];
    Language => &[];
    Copyright => &[];
    ManagingEditor => &[];
    WebMaster => &[];
    PubDate => &[Rule::NotEmpty, Rule::Date];
    LastBuildDate => &[Rule::NotEmpty, Rule::Date];
    Generator => &[];
    Docs => &[];
    Ttl => &[Rule::NotEmpty, Rule::NonNegativeInt];
    Rating => &[];
    Name => &[Rule::NotEmpty];
    ImageUrl => &[Rule::NotEmpty, Rule::Uri];
    Width => &[Rule::UInt(0, 144)];
    Height => &[Rule::UInt(0, 400)];
    Comments => &[Rule::NotEmpty, Rule::Uri];
    Author => &[Rule::NotEmpty, Rule::MailAddress];
    Hour => &[Rule::UInt(0, 23)];
}

impl Node for Day {
    fn tag(&self) -> &'static str {
        Day::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        if scope.options().strict_days {
            scope.text(&self.value, &[Rule::OneOf(SkipDays::DAY_NAMES)]);
        }
    }
}

impl Node for Rss {
    fn tag(&self) -> &'static str {
        Rss::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        scope.attribute(
            "version",
            &self.version,
            Presence::Required,
            &[Rule::OneOf(VERSIONS)],
        );
        if !self.extra_channels.is_empty() {
            scope.invalid(
                ErrorKind::InvalidElement,
                &format!(
                    "exactly one <channel> allowed, found {}",
                    self.extra_channels.len() + usize::from(self.channel.is_present())
                ),
            );
        }
    }

    fn slots(&self) -> Vec<Slot<'_>> {
        vec![
            Slot::required(Channel::TAG, &self.channel),
            Slot::many(Channel::TAG, &self.extra_channels, None),
        ]
    }
}

impl Node for Channel {
    fn tag(&self) -> &'static str {
        Channel::TAG
    }

    fn slots(&self) -> Vec<Slot<'_>> {
        vec![
            Slot::required(Title::TAG, &self.title),
            Slot::required(Link::TAG, &self.link),
            Slot::required(Description::TAG, &self.description),
            Slot::optional(Language::TAG, &self.language),
            Slot::optional(Copyright::TAG, &self.copyright),
            Slot::optional(ManagingEditor::TAG, &self.managing_editor),
            Slot::optional(WebMaster::TAG, &self.web_master),
            Slot::optional(PubDate::TAG, &self.pub_date),
            Slot::optional(LastBuildDate::TAG, &self.last_build_date),
            Slot::many(Category::TAG, &self.categories, None),
            Slot::optional(Generator::TAG, &self.generator),
            Slot::optional(Docs::TAG, &self.docs),
            Slot::optional(Cloud::TAG, &self.cloud),
            Slot::optional(Ttl::TAG, &self.ttl),
            Slot::optional(Image::TAG, &self.image),
            Slot::optional(Rating::TAG, &self.rating),
            Slot::optional(TextInput::TAG, &self.text_input),
            Slot::optional(SkipHours::TAG, &self.skip_hours),
            Slot::optional(SkipDays::TAG, &self.skip_days),
            Slot::many(Item::TAG, &self.items, None),
        ]
    }
}

impl Node for Cloud {
    fn tag(&self) -> &'static str {
        Cloud::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        scope.text(&self.value, &[Rule::MustBeEmpty]);
        scope.attribute("domain", &self.domain, Presence::Required, &[Rule::NotEmpty]);
        scope.attribute("port", &self.port, Presence::Required, &[Rule::UInt(1, 65535)]);
        scope.attribute("path", &self.path, Presence::Required, &[Rule::NotEmpty]);
        scope.attribute(
            "registerProcedure",
            &self.register_procedure,
            Presence::Required,
            &[Rule::NotEmpty],
        );
        scope.attribute(
            "protocol",
            &self.protocol,
            Presence::Required,
            &[Rule::OneOf(Cloud::PROTOCOLS)],
        );
    }
}

impl Node for Image {
    fn tag(&self) -> &'static str {
        Image::TAG
    }

    fn slots(&self) -> Vec<Slot<'_>> {
        vec![
            Slot::required(ImageUrl::TAG, &self.url),
            Slot::required(Title::TAG, &self.title),
            Slot::required(Link::TAG, &self.link),
            Slot::optional(Width::TAG, &self.width),
            Slot::optional(Height::TAG, &self.height),
            Slot::optional(Description::TAG, &self.description),
        ]
    }
}

impl Node for TextInput {
    fn tag(&self) -> &'static str {
        TextInput::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        if self.title.is_absent()
            || self.description.is_absent()
            || self.name.is_absent()
            || self.link.is_absent()
        {
            scope.invalid(
                ErrorKind::InvalidElement,
                "<title>, <description>, <name> and <link> must be present",
            );
        }
    }

    // Absence is reported once by `check`, so every slot is optional here.
    fn slots(&self) -> Vec<Slot<'_>> {
        vec![
            Slot::optional(Title::TAG, &self.title),
            Slot::optional(Description::TAG, &self.description),
            Slot::optional(Name::TAG, &self.name),
            Slot::optional(Link::TAG, &self.link),
        ]
    }
}

impl Node for SkipHours {
    fn tag(&self) -> &'static str {
        SkipHours::TAG
    }

    fn slots(&self) -> Vec<Slot<'_>> {
        vec![Slot::many(Hour::TAG, &self.hours, Some(SkipHours::MAX_HOURS))]
    }
}

impl Node for SkipDays {
    fn tag(&self) -> &'static str {
        SkipDays::TAG
    }

    fn slots(&self) -> Vec<Slot<'_>> {
        vec![Slot::many(Day::TAG, &self.days, Some(SkipDays::MAX_DAYS))]
    }
}

impl Node for Item {
    fn tag(&self) -> &'static str {
        Item::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        let has_title = self.title.present().is_some_and(|t| !t.value.is_empty());
        let has_description = self
            .description
            .present()
            .is_some_and(|d| !d.value.is_empty());
        if !has_title && !has_description {
            scope.invalid(
                ErrorKind::InvalidElement,
                "one of <title> or <description> must be present",
            );
        }
    }

    fn slots(&self) -> Vec<Slot<'_>> {
        vec![
            Slot::optional(Title::TAG, &self.title),
            Slot::optional(Link::TAG, &self.link),
            Slot::optional(Description::TAG, &self.description),
            Slot::optional(Source::TAG, &self.source),
            Slot::optional(Enclosure::TAG, &self.enclosure),
            Slot::many(Category::TAG, &self.categories, None),
            Slot::optional(PubDate::TAG, &self.pub_date),
            Slot::optional(Guid::TAG, &self.guid),
            Slot::optional(Comments::TAG, &self.comments),
            Slot::optional(Author::TAG, &self.author),
        ]
    }
}

impl Node for Source {
    fn tag(&self) -> &'static str {
        Source::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        scope.attribute(
            "url",
            &self.url,
            Presence::Required,
            &[Rule::NotEmpty, Rule::Uri],
        );
    }
}

impl Node for Enclosure {
    fn tag(&self) -> &'static str {
        Enclosure::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        scope.text(&self.value, &[Rule::MustBeEmpty]);
        scope.attribute(
            "url",
            &self.url,
            Presence::Required,
            &[Rule::NotEmpty, Rule::Uri],
        );
        scope.attribute("length", &self.length, Presence::Required, &[Rule::NonNegativeInt]);
        scope.attribute("type", &self.mime_type, Presence::Required, &[Rule::NotEmpty]);
    }
}

impl Node for Guid {
    fn tag(&self) -> &'static str {
        Guid::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        scope.text(&self.value, &[Rule::NotEmpty]);
        scope.attribute(
            "isPermaLink",
            &self.is_perma_link,
            Presence::Optional,
            &[Rule::OneOf(BOOLEANS)],
        );
        if self.is_perma_link.as_deref() == Some("true") {
            scope.text(&self.value, &[Rule::Uri]);
        }
    }
}

impl Node for Category {
    fn tag(&self) -> &'static str {
        Category::TAG
    }

    fn check(&self, scope: &mut Scope<'_>) {
        scope.text(&self.value, &[Rule::NotEmpty]);
        scope.attribute("domain", &self.domain, Presence::Optional, &[Rule::NotEmpty]);
    }
}
