//! Raw element tree to typed [`Rss`] tree.
//!
//! Decoding never fails: anything that is not RSS 2.0 vocabulary is skipped
//! and left for the validator to judge by its absence.

use crate::field::Field;
use crate::model::{
    Author, Category, Channel, Cloud, Comments, Copyright, Day, Description, Docs, Enclosure,
    Generator, Guid, Height, Hour, Image, ImageUrl, Item, Language, LastBuildDate, Link,
    ManagingEditor, Name, PubDate, Rating, Rss, SkipDays, SkipHours, Source, TextInput, Title,
    Ttl, WebMaster, Width,
};

use super::parser::RawElement;

pub(crate) fn rss(raw: &RawElement) -> Rss {
    let mut rss = Rss {
        version: attribute(raw, "version"),
        channel: Field::Absent,
        extra_channels: Vec::new(),
    };
    for child in &raw.children {
        match child.name.as_str() {
            Channel::TAG if rss.channel.is_present() => {
                tracing::debug!("Additional <channel> element");
                rss.extra_channels.push(channel(child));
            }
            Channel::TAG => rss.channel = Field::Present(channel(child)),
            _ => skip(raw, child),
        }
    }
    rss
}

fn channel(raw: &RawElement) -> Channel {
    let mut c = Channel::default();
    for child in &raw.children {
        match child.name.as_str() {
            Title::TAG => assign(&mut c.title, leaf(child), raw),
            Link::TAG => assign(&mut c.link, leaf(child), raw),
            Description::TAG => assign(&mut c.description, leaf(child), raw),
            Language::TAG => assign(&mut c.language, leaf(child), raw),
            Copyright::TAG => assign(&mut c.copyright, leaf(child), raw),
            ManagingEditor::TAG => assign(&mut c.managing_editor, leaf(child), raw),
            WebMaster::TAG => assign(&mut c.web_master, leaf(child), raw),
            PubDate::TAG => assign(&mut c.pub_date, leaf(child), raw),
            LastBuildDate::TAG => assign(&mut c.last_build_date, leaf(child), raw),
            Category::TAG => c.categories.push(category(child)),
            Generator::TAG => assign(&mut c.generator, leaf(child), raw),
            Docs::TAG => assign(&mut c.docs, leaf(child), raw),
            Cloud::TAG => assign(&mut c.cloud, cloud(child), raw),
            Ttl::TAG => assign(&mut c.ttl, leaf(child), raw),
            Image::TAG => assign(&mut c.image, image(child), raw),
            Rating::TAG => assign(&mut c.rating, leaf(child), raw),
            TextInput::TAG => assign(&mut c.text_input, text_input(child), raw),
            SkipHours::TAG => assign(&mut c.skip_hours, skip_hours(child), raw),
            SkipDays::TAG => assign(&mut c.skip_days, skip_days(child), raw),
            Item::TAG => c.items.push(item(child)),
            _ => skip(raw, child),
        }
    }
    c
}

fn item(raw: &RawElement) -> Item {
    let mut i = Item::default();
    for child in &raw.children {
        match child.name.as_str() {
            Title::TAG => assign(&mut i.title, leaf(child), raw),
            Link::TAG => assign(&mut i.link, leaf(child), raw),
            Description::TAG => assign(&mut i.description, leaf(child), raw),
            Source::TAG => assign(
                &mut i.source,
                Source {
                    value: child.text.clone(),
                    url: attribute(child, "url"),
                },
                raw,
            ),
            Enclosure::TAG => assign(
                &mut i.enclosure,
                Enclosure {
                    value: child.text.clone(),
                    url: attribute(child, "url"),
                    length: attribute(child, "length"),
                    mime_type: attribute(child, "type"),
                },
                raw,
            ),
            Category::TAG => i.categories.push(category(child)),
            PubDate::TAG => assign(&mut i.pub_date, leaf(child), raw),
            Guid::TAG => assign(
                &mut i.guid,
                Guid {
                    value: child.text.clone(),
                    is_perma_link: attribute(child, "isPermaLink"),
                },
                raw,
            ),
            Comments::TAG => assign(&mut i.comments, leaf(child), raw),
            Author::TAG => assign(&mut i.author, leaf(child), raw),
            _ => skip(raw, child),
        }
    }
    i
}

fn category(raw: &RawElement) -> Category {
    Category {
        value: raw.text.clone(),
        domain: attribute(raw, "domain"),
    }
}

fn cloud(raw: &RawElement) -> Cloud {
    for child in &raw.children {
        skip(raw, child);
    }
    Cloud {
        value: raw.text.clone(),
        domain: attribute(raw, "domain"),
        port: attribute(raw, "port"),
        path: attribute(raw, "path"),
        register_procedure: attribute(raw, "registerProcedure"),
        protocol: attribute(raw, "protocol"),
    }
}

fn image(raw: &RawElement) -> Image {
    let mut img = Image::default();
    for child in &raw.children {
        match child.name.as_str() {
            ImageUrl::TAG => assign(&mut img.url, leaf(child), raw),
            Title::TAG => assign(&mut img.title, leaf(child), raw),
            Link::TAG => assign(&mut img.link, leaf(child), raw),
            Width::TAG => assign(&mut img.width, leaf(child), raw),
            Height::TAG => assign(&mut img.height, leaf(child), raw),
            Description::TAG => assign(&mut img.description, leaf(child), raw),
            _ => skip(raw, child),
        }
    }
    img
}

fn text_input(raw: &RawElement) -> TextInput {
    let mut ti = TextInput::default();
    for child in &raw.children {
        match child.name.as_str() {
            Title::TAG => assign(&mut ti.title, leaf(child), raw),
            Description::TAG => assign(&mut ti.description, leaf(child), raw),
            Name::TAG => assign(&mut ti.name, leaf(child), raw),
            Link::TAG => assign(&mut ti.link, leaf(child), raw),
            _ => skip(raw, child),
        }
    }
    ti
}

fn skip_hours(raw: &RawElement) -> SkipHours {
    let mut sh = SkipHours::default();
    for child in &raw.children {
        match child.name.as_str() {
            Hour::TAG => sh.hours.push(leaf(child)),
            _ => skip(raw, child),
        }
    }
    sh
}

fn skip_days(raw: &RawElement) -> SkipDays {
    let mut sd = SkipDays::default();
    for child in &raw.children {
        match child.name.as_str() {
            Day::TAG => sd.days.push(leaf(child)),
            _ => skip(raw, child),
        }
    }
    sd
}

fn leaf<T: From<String>>(raw: &RawElement) -> T {
    for child in &raw.children {
        skip(raw, child);
    }
    T::from(raw.text.clone())
}

fn attribute(raw: &RawElement, name: &str) -> Field<String> {
    raw.attribute(name).map(str::to_string).into()
}

/// Stores a singular child; a later duplicate replaces an earlier one.
fn assign<T>(slot: &mut Field<T>, value: T, parent: &RawElement) {
    if slot.is_present() {
        tracing::debug!(parent = %parent.name, "Duplicate singular element, keeping the last one");
    }
    *slot = Field::Present(value);
}

fn skip(parent: &RawElement, child: &RawElement) {
    tracing::debug!(
        parent = %parent.name,
        element = %child.name,
        "Skipping unknown element"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::parser::read_tree;
    use pretty_assertions::assert_eq;

    fn decode(xml: &str) -> Rss {
        rss(&read_tree(xml.as_bytes()).unwrap())
    }

    fn channel_of(xml: &str) -> Channel {
        decode(xml).channel.into_option().unwrap()
    }

    #[test]
    fn test_absent_and_empty_are_distinct() {
        let c = channel_of(r#"<rss version="2.0"><channel><title></title></channel></rss>"#);
        assert_eq!(c.title, Field::Present(Title::new("")));
        assert_eq!(c.link, Field::Absent);
    }

    #[test]
    fn test_empty_attribute_is_present() {
        let rss = decode(r#"<rss version=""></rss>"#);
        assert_eq!(rss.version, Field::from(""));
        assert_eq!(rss.channel, Field::Absent);

        let rss = decode("<rss></rss>");
        assert_eq!(rss.version, Field::Absent);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let c = channel_of(
            r#"<rss version="2.0"><channel><title>first</title><title>second</title></channel></rss>"#,
        );
        assert_eq!(c.title, Field::Present(Title::new("second")));
    }

    #[test]
    fn test_second_channel_kept_separately() {
        let rss = decode(
            r#"<rss version="2.0"><channel><title>a</title></channel><channel><title>b</title></channel></rss>"#,
        );
        let first = rss.channel.into_option().unwrap();
        assert_eq!(first.title, Field::Present(Title::new("a")));
        assert_eq!(rss.extra_channels.len(), 1);
        assert_eq!(rss.extra_channels[0].title, Field::Present(Title::new("b")));
    }

    #[test]
    fn test_unknown_and_namespaced_elements_skipped() {
        let c = channel_of(
            r#"<rss version="2.0" xmlns:atom="http://www.w3.org/2005/Atom">
<channel>
  <atom:link href="https://example.com/feed.xml" rel="self"/>
  <title>t</title>
  <foo><title>nested</title></foo>
</channel></rss>"#,
        );
        assert_eq!(c.title, Field::Present(Title::new("t")));
        assert!(c.link.is_absent());
    }

    #[test]
    fn test_repeatable_elements_keep_order() {
        let c = channel_of(
            r#"<rss version="2.0"><channel>
<category>a</category><item><title>1</title></item><category domain="d">b</category>
<item><title>2</title><category>x</category><category>y</category></item>
<skipHours><hour>1</hour><hour>2</hour></skipHours>
<skipDays><day>Monday</day></skipDays>
</channel></rss>"#,
        );
        assert_eq!(
            c.categories,
            vec![Category::new("a"), Category::new("b").with_domain("d")]
        );
        assert_eq!(c.items.len(), 2);
        assert_eq!(c.items[1].categories.len(), 2);
        assert_eq!(
            c.skip_hours.present().unwrap().hours,
            vec![Hour::new("1"), Hour::new("2")]
        );
        assert_eq!(c.skip_days.present().unwrap().days, vec![Day::new("Monday")]);
    }

    #[test]
    fn test_item_attribute_elements() {
        let c = channel_of(
            r#"<rss version="2.0"><channel><item>
<source url="http://www.tomalak.org/links2.xml">Tomalak's Realm</source>
<enclosure url="http://www.scripting.com/mp3s/weatherReportSuite.mp3" length="12216320" type="audio/mpeg" />
<guid isPermaLink="true">http://inessential.com/2002/09/01.php#a2</guid>
</item></channel></rss>"#,
        );
        let item = &c.items[0];
        assert_eq!(
            item.source,
            Field::Present(Source::new(
                "Tomalak's Realm",
                "http://www.tomalak.org/links2.xml"
            ))
        );
        assert_eq!(
            item.enclosure,
            Field::Present(Enclosure::new(
                "http://www.scripting.com/mp3s/weatherReportSuite.mp3",
                "12216320",
                "audio/mpeg"
            ))
        );
        assert_eq!(
            item.guid,
            Field::Present(
                Guid::new("http://inessential.com/2002/09/01.php#a2").with_perma_link("true")
            )
        );
    }

    #[test]
    fn test_cloud_attributes() {
        let c = channel_of(
            r#"<rss version="2.0"><channel><cloud domain="rpc.sys.com" port="80" path="/RPC2" registerProcedure="pingMe" protocol="soap"/></channel></rss>"#,
        );
        let cloud = c.cloud.into_option().unwrap();
        assert_eq!(cloud.value, "");
        assert_eq!(cloud.register_procedure, Field::from("pingMe"));
        assert_eq!(cloud.protocol, Field::from("soap"));
    }

    #[test]
    fn test_image_url_is_its_own_leaf() {
        let c = channel_of(
            r#"<rss version="2.0"><channel><image><url>https://example.com/a.png</url><title>A</title><link>https://example.com</link><width>88</width></image></channel></rss>"#,
        );
        let image = c.image.into_option().unwrap();
        assert_eq!(image.url, Field::Present(ImageUrl::new("https://example.com/a.png")));
        assert_eq!(image.width, Field::Present(Width::new("88")));
        assert_eq!(image.height, Field::Absent);
    }
}
