use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::model::Rss;

use super::decode;

/// SEC-003: Maximum allowed element nesting depth.
/// A well-formed RSS 2.0 document never goes deeper than five levels; the
/// margin leaves room for unknown extension elements, which are skipped.
pub const MAX_DEPTH: usize = 32;

/// Errors that make a document unreadable.
///
/// These are fatal to the parse call. Rule violations in a well-formed
/// document are not errors; they are reported by the validator.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The XML tokenizer rejected the input.
    #[error("XML parse error: {0}")]
    Xml(String),

    /// The input is not valid UTF-8.
    #[error("Document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("Document has no root element")]
    MissingRoot,

    #[error("Unexpected root element <{0}>, expected <rss>")]
    UnexpectedRoot(String),

    /// The input ended while `<{0}>` was still open.
    #[error("Unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// SEC-003: Nesting depth exceeds safety limit.
    #[error("XML nesting depth exceeds maximum of {0} levels")]
    MaxDepthExceeded(usize),

    #[error("Document is {size} bytes, exceeding the limit of {limit} bytes")]
    TooLarge { size: usize, limit: usize },
}

impl From<quick_xml::Error> for ParseError {
    fn from(err: quick_xml::Error) -> Self {
        ParseError::Xml(err.to_string())
    }
}

/// An element as read from the document, before any RSS interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct RawElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    /// Concatenated text and CDATA of direct children, untrimmed.
    pub text: String,
    pub children: Vec<RawElement>,
}

impl RawElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Parses an RSS 2.0 document.
///
/// The root must be `<rss>`. Unknown and namespaced elements are skipped;
/// when a singular element appears more than once the last occurrence wins.
/// Absent elements and attributes stay [`Field::Absent`](crate::Field::Absent),
/// present-but-empty ones become `Field::Present` with an empty value.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is not well-formed UTF-8 XML, has no
/// root, has a root other than `<rss>`, or nests deeper than [`MAX_DEPTH`].
///
/// # Security
///
/// - XXE attacks are mitigated because `quick-xml` (0.37) does not parse
///   `<!ENTITY>` declarations. References to custom entities fail with an
///   `EscapeError::UnrecognizedEntity`, surfaced as [`ParseError::Xml`].
/// - Nesting depth is bounded by [`MAX_DEPTH`].
///
/// # Examples
///
/// ```
/// use rss_validate::feed::parse;
///
/// let xml = br#"<rss version="2.0"><channel><title>News</title><ttl></ttl></channel></rss>"#;
/// let rss = parse(xml).unwrap();
/// let channel = rss.channel.present().unwrap();
///
/// assert!(channel.link.is_absent());
/// assert_eq!(channel.ttl.present().map(|t| t.value.as_str()), Some(""));
/// ```
pub fn parse(bytes: &[u8]) -> Result<Rss, ParseError> {
    let root = read_tree(bytes)?;
    if root.name != Rss::TAG {
        return Err(ParseError::UnexpectedRoot(root.name));
    }
    Ok(decode::rss(&root))
}

/// [`parse`], refusing documents larger than `limit` bytes before reading them.
pub fn parse_with_limit(bytes: &[u8], limit: usize) -> Result<Rss, ParseError> {
    if bytes.len() > limit {
        return Err(ParseError::TooLarge {
            size: bytes.len(),
            limit,
        });
    }
    parse(bytes)
}

/// Reads the whole document into a [`RawElement`] tree and returns its root.
pub(crate) fn read_tree(bytes: &[u8]) -> Result<RawElement, ParseError> {
    let content = std::str::from_utf8(bytes)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    // SEC-002: XXE protection. quick-xml (0.37) never parses <!ENTITY> declarations from
    // DOCTYPE; only the 5 XML builtins and character references are resolved. We use
    // `unescape()` and `decode_and_unescape_value()` (not the `_with()` variants), so
    // custom entities are always rejected.
    let mut reader = Reader::from_str(content);

    let mut buf = Vec::new();
    // SEC-003: The open-element stack doubles as the nesting depth counter.
    let mut stack: Vec<RawElement> = Vec::new();
    let mut root: Option<RawElement> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(ParseError::MaxDepthExceeded(MAX_DEPTH));
                }
                let element = open_element(&e, &reader)?;
                if stack.is_empty() && root.is_some() {
                    return Err(after_root(&element.name));
                }
                stack.push(element);
            }
            Event::Empty(e) => {
                let element = open_element(&e, &reader)?;
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None if root.is_some() => return Err(after_root(&element.name)),
                    None => root = Some(element),
                }
            }
            Event::End(_) => {
                // quick-xml checks that end names match start names.
                let Some(element) = stack.pop() else {
                    return Err(ParseError::Xml("unmatched closing tag".to_string()));
                };
                match stack.last_mut() {
                    Some(parent) => parent.children.push(element),
                    None => root = Some(element),
                }
            }
            Event::Text(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e));
                }
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions and DOCTYPE carry no data.
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(ParseError::UnexpectedEof(open.name));
    }
    root.ok_or(ParseError::MissingRoot)
}

fn open_element(e: &BytesStart<'_>, reader: &Reader<&[u8]>) -> Result<RawElement, ParseError> {
    let name = std::str::from_utf8(e.name().as_ref())?.to_string();
    let mut attributes = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| ParseError::Xml(err.to_string()))?;
        let key = std::str::from_utf8(attr.key.as_ref())?.to_string();
        let value = attr.decode_and_unescape_value(reader.decoder())?.into_owned();
        attributes.push((key, value));
    }
    Ok(RawElement {
        name,
        attributes,
        ..RawElement::default()
    })
}

fn after_root(name: &str) -> ParseError {
    ParseError::Xml(format!("unexpected element <{}> after the root element", name))
}
