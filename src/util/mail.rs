//! RFC 5322 mailbox parsing.
//!
//! Accepts exactly one mailbox in any of the forms feeds use in practice:
//!
//! - `addr-spec`: `editor@example.com`
//! - `name-addr`: `Jane Doe <editor@example.com>`, `"Doe, Jane" <editor@example.com>`
//! - `addr-spec (comment)`: `editor@example.com (Jane Doe)`, the RSS 2.0 example form
//!
//! Group syntax, obsolete routes and folding whitespace inside quoted strings
//! are not supported.

use crate::error::{ErrorKind, ValidationError};

/// Validates a single RFC 5322 mailbox.
///
/// # Examples
///
/// ```
/// use rss_validate::util::valid_mail_address;
///
/// assert!(valid_mail_address("lawyer@boyer.net (Lawyer Boyer)").is_ok());
/// assert!(valid_mail_address("Jane Doe <jane@example.com>").is_ok());
/// assert!(valid_mail_address("jane").is_err());
/// ```
pub fn valid_mail_address(s: &str) -> Result<(), ValidationError> {
    let mut cursor = Cursor::new(s);
    cursor
        .mailbox()
        .map_err(|reason| ValidationError::with_reason(ErrorKind::InvalidMailAddress, reason))
}

struct Cursor<'a> {
    rest: &'a str,
}

impl<'a> Cursor<'a> {
    fn new(s: &'a str) -> Self {
        Self { rest: s }
    }

    fn mailbox(&mut self) -> Result<(), &'static str> {
        self.skip_cfws()?;
        if self.rest.is_empty() {
            return Err("no address");
        }

        // Try the bare addr-spec form first, then fall back to name-addr.
        let start = self.rest;
        if self.addr_spec().is_ok() {
            self.skip_cfws()?;
            if self.rest.is_empty() {
                return Ok(());
            }
        }
        self.rest = start;

        self.phrase_opt()?;
        if !self.eat('<') {
            return Err("missing @ or angle-addr");
        }
        self.addr_spec()?;
        if !self.eat('>') {
            return Err("unclosed angle-addr");
        }
        self.skip_cfws()?;
        if !self.rest.is_empty() {
            return Err("expected single address");
        }
        Ok(())
    }

    fn addr_spec(&mut self) -> Result<(), &'static str> {
        if self.peek() == Some('"') {
            self.quoted_string()?;
        } else {
            self.dot_atom()?;
        }
        if !self.eat('@') {
            return Err("missing @ in addr-spec");
        }
        if self.peek() == Some('[') {
            self.domain_literal()
        } else {
            self.dot_atom()
        }
    }

    /// Optional display name made of atoms and quoted strings.
    fn phrase_opt(&mut self) -> Result<(), &'static str> {
        loop {
            self.skip_cfws()?;
            match self.peek() {
                Some('"') => self.quoted_string()?,
                Some(c) if is_atext(c) || c == '.' => {
                    self.take_while(|c| is_atext(c) || c == '.');
                }
                _ => return Ok(()),
            }
        }
    }

    fn dot_atom(&mut self) -> Result<(), &'static str> {
        let atom = self.take_while(|c| is_atext(c) || c == '.');
        if atom.is_empty() {
            return Err("expected atom");
        }
        if atom.starts_with('.') || atom.ends_with('.') || atom.contains("..") {
            return Err("misplaced dot in atom");
        }
        Ok(())
    }

    fn quoted_string(&mut self) -> Result<(), &'static str> {
        if !self.eat('"') {
            return Err("expected quoted string");
        }
        let mut chars = self.rest.char_indices();
        while let Some((i, c)) = chars.next() {
            match c {
                '\\' => {
                    if chars.next().is_none() {
                        return Err("unterminated quoted pair");
                    }
                }
                '"' => {
                    self.rest = &self.rest[i + 1..];
                    return Ok(());
                }
                '\r' | '\n' => return Err("line break in quoted string"),
                _ => {}
            }
        }
        Err("unterminated quoted string")
    }

    fn domain_literal(&mut self) -> Result<(), &'static str> {
        if !self.eat('[') {
            return Err("expected domain literal");
        }
        let body = self.take_while(|c| c != ']' && c != '[' && c != '\\' && !c.is_whitespace());
        if body.is_empty() || !self.eat(']') {
            return Err("malformed domain literal");
        }
        Ok(())
    }

    /// Skips whitespace and (possibly nested) comments.
    fn skip_cfws(&mut self) -> Result<(), &'static str> {
        loop {
            self.rest = self.rest.trim_start();
            if !self.rest.starts_with('(') {
                return Ok(());
            }
            let mut depth = 0usize;
            let mut end = None;
            let mut escaped = false;
            for (i, c) in self.rest.char_indices() {
                if escaped {
                    escaped = false;
                    continue;
                }
                match c {
                    '\\' => escaped = true,
                    '(' => depth += 1,
                    ')' => {
                        depth -= 1;
                        if depth == 0 {
                            end = Some(i);
                            break;
                        }
                    }
                    _ => {}
                }
            }
            match end {
                Some(i) => self.rest = &self.rest[i + 1..],
                None => return Err("unterminated comment"),
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn eat(&mut self, expected: char) -> bool {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                true
            }
            None => false,
        }
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }
}

fn is_atext(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~".contains(c) || !c.is_ascii()
}
