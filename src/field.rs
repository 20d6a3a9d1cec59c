//! Tri-state values for RSS elements and attributes.
//!
//! RSS 2.0 treats "not in the document" and "in the document with an empty
//! value" as different things: `<ttl></ttl>` is an invalid ttl, while a
//! channel without `<ttl>` is fine. [`Field`] keeps the two apart so the
//! validator and the writer never have to guess.

/// A value that is either absent from the source document or present,
/// possibly with an empty payload.
///
/// # Examples
///
/// ```
/// use rss_validate::Field;
///
/// let absent: Field<String> = Field::Absent;
/// let empty = Field::Present(String::new());
///
/// assert!(absent.is_absent());
/// assert!(empty.is_present());
/// assert_ne!(absent, empty);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Field<T> {
    /// The element or attribute does not appear in the document.
    #[default]
    Absent,
    /// The element or attribute appears; its value may be empty.
    Present(T),
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// Borrows the value if present.
    pub fn present(&self) -> Option<&T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }

    /// Same as [`Field::present`], named for symmetry with `into_option`.
    pub fn as_option(&self) -> Option<&T> {
        self.present()
    }

    pub fn present_mut(&mut self) -> Option<&mut T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Present(value) => Field::Present(value),
            Field::Absent => Field::Absent,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Present(value) => Field::Present(f(value)),
            Field::Absent => Field::Absent,
        }
    }
}

impl Field<String> {
    /// Borrows the value as `&str` if present.
    pub fn as_deref(&self) -> Option<&str> {
        self.present().map(String::as_str)
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Present(value),
            None => Field::Absent,
        }
    }
}

impl<T> From<Field<T>> for Option<T> {
    fn from(value: Field<T>) -> Self {
        value.into_option()
    }
}

impl From<&str> for Field<String> {
    fn from(value: &str) -> Self {
        Field::Present(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_absent() {
        let field: Field<String> = Field::default();
        assert!(field.is_absent());
        assert!(!field.is_present());
        assert_eq!(field.present(), None);
    }

    #[test]
    fn test_present_empty_is_not_absent() {
        let field = Field::Present(String::new());
        assert!(field.is_present());
        assert_eq!(field.as_deref(), Some(""));
        assert_ne!(field, Field::Absent);
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Field::from(Some(3)), Field::Present(3));
        assert_eq!(Field::<i32>::from(None), Field::Absent);
        assert_eq!(Option::from(Field::Present("x")), Some("x"));
        assert_eq!(Field::from("x"), Field::Present("x".to_string()));
    }

    #[test]
    fn test_map_preserves_absence() {
        let absent: Field<&str> = Field::Absent;
        assert_eq!(absent.map(str::len), Field::Absent);
        assert_eq!(Field::Present("abc").map(str::len), Field::Present(3));
    }
}
