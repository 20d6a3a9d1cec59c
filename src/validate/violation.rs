use serde::Serialize;
use thiserror::Error;

use crate::error::{ErrorKind, ValidationError};

/// One rule failure found while validating a document.
///
/// `element` is the tag the rule belongs to. `name` is the offending tag or
/// attribute: for a value check on `<title>` both are `"title"`; for a
/// missing `port` attribute on `<cloud>`, `element` is `"cloud"` and `name`
/// is `"port"`. `value` is `None` when the offending node is absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[error("{message}")]
pub struct Violation {
    pub kind: ErrorKind,
    pub element: &'static str,
    pub name: &'static str,
    pub value: Option<String>,
    pub message: String,
}

impl Violation {
    /// Character data of `element` failed a value check.
    pub(crate) fn text(element: &'static str, value: &str, err: ValidationError) -> Self {
        Self {
            kind: err.kind,
            element,
            name: element,
            value: Some(value.to_string()),
            message: format!("Element <{}> value '{}' is invalid: {}", element, value, err),
        }
    }

    /// Attribute `name` of `element` failed a value check.
    pub(crate) fn attribute(
        element: &'static str,
        name: &'static str,
        value: &str,
        err: ValidationError,
    ) -> Self {
        Self {
            kind: err.kind,
            element,
            name,
            value: Some(value.to_string()),
            message: format!(
                "Attribute '{}' of <{}> value '{}' is invalid: {}",
                name, element, value, err
            ),
        }
    }

    /// Required attribute `name` of `element` is absent.
    pub(crate) fn missing_attribute(element: &'static str, name: &'static str) -> Self {
        let kind = ErrorKind::InvalidElement;
        Self {
            kind,
            element,
            name,
            value: None,
            message: format!("Attribute '{}' of <{}> is required: {}", name, element, kind),
        }
    }

    /// Required child `name` of `element` is absent.
    pub(crate) fn missing_child(element: &'static str, name: &'static str) -> Self {
        let kind = ErrorKind::InvalidElement;
        Self {
            kind,
            element,
            name,
            value: None,
            message: format!("Element <{}> of <{}> is required: {}", name, element, kind),
        }
    }

    /// `element` as a whole breaks a structural rule.
    pub(crate) fn structure(element: &'static str, kind: ErrorKind, detail: &str) -> Self {
        Self {
            kind,
            element,
            name: element,
            value: None,
            message: format!("Element <{}> is invalid: {}: {}", element, kind, detail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_message_embeds_tag_and_value() {
        let v = Violation::text("ttl", "soon", ValidationError::new(ErrorKind::InvalidValue));
        assert_eq!(v.name, "ttl");
        assert_eq!(v.value.as_deref(), Some("soon"));
        assert_eq!(
            v.message,
            "Element <ttl> value 'soon' is invalid: Element must have valid value"
        );
    }

    #[test]
    fn test_missing_attribute_has_no_value() {
        let v = Violation::missing_attribute("cloud", "port");
        assert_eq!(v.kind, ErrorKind::InvalidElement);
        assert_eq!(v.element, "cloud");
        assert_eq!(v.name, "port");
        assert_eq!(v.value, None);
        assert!(v.to_string().contains("'port' of <cloud> is required"));
    }

    #[test]
    fn test_serializes_to_json() {
        let v = Violation::missing_child("channel", "link");
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["kind"], "InvalidElement");
        assert_eq!(json["name"], "link");
        assert!(json["value"].is_null());
    }
}
