use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Deserialize;
use thiserror::Error;

use crate::field::Field;
use crate::model::{
    Author, Category, Channel, Cloud, Comments, Copyright, Day, Description, Docs, Enclosure,
    Generator, Guid, Height, Hour, Image, ImageUrl, Item, Language, LastBuildDate, Link,
    ManagingEditor, Name, PubDate, Rating, Rss, SkipDays, SkipHours, Source, TextInput, Title,
    Ttl, WebMaster, Width,
};

/// Errors that can occur while rendering a tree to XML.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("XML write error: {0}")]
    Xml(String),
}

/// Output switches for [`render_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Prefix the document with `<?xml version="1.0" encoding="UTF-8"?>`.
    pub xml_declaration: bool,
}

/// Renders `rss` as compact XML with default [`RenderOptions`].
///
/// Absent fields are omitted. Present-but-empty elements render as
/// `<tag></tag>` and present-but-empty attributes as `name=""`, so
/// [`parse`](super::parse) gives back an equal tree.
///
/// # Examples
///
/// ```
/// use rss_validate::feed::render;
/// use rss_validate::model::{Channel, Rss, Ttl};
/// use rss_validate::Field;
///
/// let mut channel = Channel::new("News", "https://example.com", "Daily");
/// channel.ttl = Field::Present(Ttl::new(""));
///
/// let xml = String::from_utf8(render(&Rss::new(channel)).unwrap()).unwrap();
/// assert!(xml.contains("<ttl></ttl>"));
/// assert!(!xml.contains("<language>"));
/// ```
pub fn render(rss: &Rss) -> Result<Vec<u8>, RenderError> {
    render_with(rss, RenderOptions::default())
}

/// Renders `rss` as compact XML.
pub fn render_with(rss: &Rss, options: RenderOptions) -> Result<Vec<u8>, RenderError> {
    let mut out = Emitter::new();

    if options.xml_declaration {
        out.write(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    }

    out.start(Rss::TAG, &[("version", &rss.version)])?;
    if let Some(channel) = rss.channel.present() {
        out.channel(channel)?;
    }
    for channel in &rss.extra_channels {
        out.channel(channel)?;
    }
    out.end(Rss::TAG)?;

    let bytes = out.finish();
    tracing::debug!(bytes = bytes.len(), "Rendered RSS document");
    Ok(bytes)
}

/// Thin wrapper over the quick-xml writer that knows the RSS element layout.
struct Emitter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl Emitter {
    fn new() -> Self {
        Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        }
    }

    fn finish(self) -> Vec<u8> {
        self.writer.into_inner().into_inner()
    }

    fn write(&mut self, event: Event<'_>) -> Result<(), RenderError> {
        self.writer
            .write_event(event)
            .map_err(|e| RenderError::Xml(e.to_string()))
    }

    /// Opens `tag`, emitting only the attributes that are present.
    fn start(&mut self, tag: &str, attributes: &[(&str, &Field<String>)]) -> Result<(), RenderError> {
        let mut start = BytesStart::new(tag);
        for (name, value) in attributes {
            if let Some(value) = value.present() {
                start.push_attribute((*name, value.as_str()));
            }
        }
        self.write(Event::Start(start))
    }

    fn end(&mut self, tag: &str) -> Result<(), RenderError> {
        self.write(Event::End(BytesEnd::new(tag)))
    }

    /// Writes `<tag attrs>text</tag>`; never self-closes so empty stays explicit.
    fn element(
        &mut self,
        tag: &str,
        attributes: &[(&str, &Field<String>)],
        text: &str,
    ) -> Result<(), RenderError> {
        self.start(tag, attributes)?;
        if !text.is_empty() {
            self.write(Event::Text(BytesText::new(text)))?;
        }
        self.end(tag)
    }

    fn leaf<T: AsRef<str>>(&mut self, tag: &str, field: &Field<T>) -> Result<(), RenderError> {
        match field.present() {
            Some(value) => self.element(tag, &[], value.as_ref()),
            None => Ok(()),
        }
    }

    fn channel(&mut self, c: &Channel) -> Result<(), RenderError> {
        self.start(Channel::TAG, &[])?;
        self.leaf(Title::TAG, &c.title)?;
        self.leaf(Link::TAG, &c.link)?;
        self.leaf(Description::TAG, &c.description)?;
        self.leaf(Language::TAG, &c.language)?;
        self.leaf(Copyright::TAG, &c.copyright)?;
        self.leaf(ManagingEditor::TAG, &c.managing_editor)?;
        self.leaf(WebMaster::TAG, &c.web_master)?;
        self.leaf(PubDate::TAG, &c.pub_date)?;
        self.leaf(LastBuildDate::TAG, &c.last_build_date)?;
        for category in &c.categories {
            self.category(category)?;
        }
        self.leaf(Generator::TAG, &c.generator)?;
        self.leaf(Docs::TAG, &c.docs)?;
        if let Some(cloud) = c.cloud.present() {
            self.cloud(cloud)?;
        }
        self.leaf(Ttl::TAG, &c.ttl)?;
        if let Some(image) = c.image.present() {
            self.image(image)?;
        }
        self.leaf(Rating::TAG, &c.rating)?;
        if let Some(text_input) = c.text_input.present() {
            self.text_input(text_input)?;
        }
        if let Some(skip_hours) = c.skip_hours.present() {
            self.start(SkipHours::TAG, &[])?;
            for hour in &skip_hours.hours {
                self.element(Hour::TAG, &[], &hour.value)?;
            }
            self.end(SkipHours::TAG)?;
        }
        if let Some(skip_days) = c.skip_days.present() {
            self.start(SkipDays::TAG, &[])?;
            for day in &skip_days.days {
                self.element(Day::TAG, &[], &day.value)?;
            }
            self.end(SkipDays::TAG)?;
        }
        for item in &c.items {
            self.item(item)?;
        }
        self.end(Channel::TAG)
    }

    fn cloud(&mut self, cloud: &Cloud) -> Result<(), RenderError> {
        self.element(
            Cloud::TAG,
            &[
                ("domain", &cloud.domain),
                ("port", &cloud.port),
                ("path", &cloud.path),
                ("registerProcedure", &cloud.register_procedure),
                ("protocol", &cloud.protocol),
            ],
            &cloud.value,
        )
    }

    fn image(&mut self, image: &Image) -> Result<(), RenderError> {
        self.start(Image::TAG, &[])?;
        self.leaf(ImageUrl::TAG, &image.url)?;
        self.leaf(Title::TAG, &image.title)?;
        self.leaf(Link::TAG, &image.link)?;
        self.leaf(Width::TAG, &image.width)?;
        self.leaf(Height::TAG, &image.height)?;
        self.leaf(Description::TAG, &image.description)?;
        self.end(Image::TAG)
    }

    fn text_input(&mut self, ti: &TextInput) -> Result<(), RenderError> {
        self.start(TextInput::TAG, &[])?;
        self.leaf(Title::TAG, &ti.title)?;
        self.leaf(Description::TAG, &ti.description)?;
        self.leaf(Name::TAG, &ti.name)?;
        self.leaf(Link::TAG, &ti.link)?;
        self.end(TextInput::TAG)
    }

    fn category(&mut self, category: &Category) -> Result<(), RenderError> {
        self.element(
            Category::TAG,
            &[("domain", &category.domain)],
            &category.value,
        )
    }

    fn item(&mut self, item: &Item) -> Result<(), RenderError> {
        self.start(Item::TAG, &[])?;
        self.leaf(Title::TAG, &item.title)?;
        self.leaf(Link::TAG, &item.link)?;
        self.leaf(Description::TAG, &item.description)?;
        if let Some(source) = item.source.present() {
            self.element(Source::TAG, &[("url", &source.url)], &source.value)?;
        }
        if let Some(enclosure) = item.enclosure.present() {
            self.element(
                Enclosure::TAG,
                &[
                    ("url", &enclosure.url),
                    ("length", &enclosure.length),
                    ("type", &enclosure.mime_type),
                ],
                &enclosure.value,
            )?;
        }
        for category in &item.categories {
            self.category(category)?;
        }
        self.leaf(PubDate::TAG, &item.pub_date)?;
        if let Some(guid) = item.guid.present() {
            self.element(
                Guid::TAG,
                &[("isPermaLink", &guid.is_perma_link)],
                &guid.value,
            )?;
        }
        self.leaf(Comments::TAG, &item.comments)?;
        self.leaf(Author::TAG, &item.author)?;
        self.end(Item::TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::parse;
    use pretty_assertions::assert_eq;

    fn render_str(rss: &Rss) -> String {
        String::from_utf8(render(rss).unwrap()).unwrap()
    }

    #[test]
    fn test_render_minimal() {
        let rss = Rss::new(Channel::new("t", "https://example.com", "d"));
        assert_eq!(
            render_str(&rss),
            r#"<rss version="2.0"><channel><title>t</title><link>https://example.com</link><description>d</description></channel></rss>"#
        );
    }

    #[test]
    fn test_render_empty_root() {
        assert_eq!(render_str(&Rss::default()), "<rss></rss>");
    }

    #[test]
    fn test_render_with_declaration() {
        let options = RenderOptions {
            xml_declaration: true,
        };
        let xml = String::from_utf8(render_with(&Rss::default(), options).unwrap()).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn test_present_empty_attribute_rendered() {
        let item = Item {
            guid: Field::Present(Guid::new("abc").with_perma_link("")),
            source: Field::Present(Source::default()),
            ..Item::default()
        };
        let mut channel = Channel::default();
        channel.items.push(item);
        let xml = render_str(&Rss::new(channel));
        assert!(xml.contains(r#"<guid isPermaLink="">abc</guid>"#), "{}", xml);
        assert!(xml.contains("<source></source>"), "{}", xml);
    }

    #[test]
    fn test_cloud_attribute_order() {
        let mut channel = Channel::default();
        channel.cloud = Field::Present(Cloud {
            value: String::new(),
            domain: Field::from("rpc.sys.com"),
            port: Field::from("80"),
            path: Field::from("/RPC2"),
            register_procedure: Field::from("pingMe"),
            protocol: Field::from("soap"),
        });
        let xml = render_str(&Rss::new(channel));
        assert!(xml.contains(
            r#"<cloud domain="rpc.sys.com" port="80" path="/RPC2" registerProcedure="pingMe" protocol="soap"></cloud>"#
        ));
    }

    #[test]
    fn test_special_characters_escaped() {
        let rss = Rss::new(Channel::new(
            "Q&A <weekly>",
            "https://example.com/?a=1&b=2",
            "d",
        ));
        let xml = render_str(&rss);
        assert!(xml.contains("<title>Q&amp;A &lt;weekly&gt;</title>"), "{}", xml);
        assert_eq!(parse(xml.as_bytes()).unwrap(), rss);
    }

    #[test]
    fn test_round_trip_full_channel() {
        let mut channel = Channel::new("Liftoff News", "http://liftoff.msfc.nasa.gov/", "");
        channel.language = Field::Present(Language::new("en-us"));
        channel.pub_date = Field::Present(PubDate::new("Tue, 10 Jun 2003 04:00:00 GMT"));
        channel.categories.push(Category::new("Space"));
        channel.ttl = Field::Present(Ttl::new(""));
        channel.image = Field::Present(Image::new(
            "http://liftoff.msfc.nasa.gov/logo.png",
            "Liftoff",
            "http://liftoff.msfc.nasa.gov/",
        ));
        channel.skip_hours = Field::Present(SkipHours {
            hours: vec![Hour::new("0"), Hour::new("")],
        });
        channel.skip_days = Field::Present(SkipDays::default());
        channel.items.push(Item {
            title: Field::Present(Title::new("Star City")),
            enclosure: Field::Present(Enclosure::new("http://a/b.mp3", "0", "audio/mpeg")),
            guid: Field::Present(Guid::new("http://liftoff.msfc.nasa.gov/2003/06/03.html#item573")),
            ..Item::default()
        });

        let rss = Rss::new(channel);
        let bytes = render(&rss).unwrap();
        assert_eq!(parse(&bytes).unwrap(), rss);
    }
}
