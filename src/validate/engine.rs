use serde::Deserialize;

use crate::error::{ErrorKind, ValidationError};
use crate::field::Field;
use crate::util;

use super::violation::Violation;

// ============================================================================
// Rules
// ============================================================================

/// A syntactic check applied to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    NotEmpty,
    MustBeEmpty,
    Uri,
    Date,
    MailAddress,
    OneOf(&'static [&'static str]),
    /// Inclusive bounds.
    UInt(u64, u64),
    /// Any integer that fits in a `u64`.
    NonNegativeInt,
}

impl Rule {
    pub fn check(self, value: &str) -> Result<(), ValidationError> {
        match self {
            Rule::NotEmpty => util::not_empty(value),
            Rule::MustBeEmpty => util::must_be_empty(value),
            Rule::Uri => util::valid_uri(value),
            Rule::Date => util::valid_date(value),
            Rule::MailAddress => util::valid_mail_address(value),
            Rule::OneOf(allowed) => util::valid_enum(value, allowed),
            Rule::UInt(min, max) => util::bounded_uint(value, min..=max),
            Rule::NonNegativeInt => util::non_negative_int(value),
        }
    }
}

/// Whether an attribute must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

// ============================================================================
// Nodes and Slots
// ============================================================================

/// An element the validator can walk.
///
/// `check` evaluates the rules local to the element; `slots` declares its
/// children in document order. The traversal in [`Validator`] handles absence,
/// cardinality and recursion so implementations never do.
pub trait Node {
    fn tag(&self) -> &'static str;

    fn check(&self, _scope: &mut Scope<'_>) {}

    fn slots(&self) -> Vec<Slot<'_>> {
        Vec::new()
    }
}

/// A declared child position of a [`Node`].
pub enum Slot<'a> {
    One {
        tag: &'static str,
        required: bool,
        node: Option<&'a dyn Node>,
    },
    Many {
        tag: &'static str,
        max: Option<usize>,
        nodes: Vec<&'a dyn Node>,
    },
}

impl<'a> Slot<'a> {
    pub fn required<N: Node>(tag: &'static str, field: &'a Field<N>) -> Self {
        Slot::One {
            tag,
            required: true,
            node: field.present().map(|n| n as &dyn Node),
        }
    }

    pub fn optional<N: Node>(tag: &'static str, field: &'a Field<N>) -> Self {
        Slot::One {
            tag,
            required: false,
            node: field.present().map(|n| n as &dyn Node),
        }
    }

    pub fn many<N: Node>(tag: &'static str, nodes: &'a [N], max: Option<usize>) -> Self {
        Slot::Many {
            tag,
            max,
            nodes: nodes.iter().map(|n| n as &dyn Node).collect(),
        }
    }
}

// ============================================================================
// Scope
// ============================================================================

/// Collects the violations of a single element's local rules.
pub struct Scope<'v> {
    tag: &'static str,
    options: &'v Options,
    violations: &'v mut Vec<Violation>,
}

impl<'v> Scope<'v> {
    pub fn options(&self) -> &Options {
        self.options
    }

    /// Applies every rule to the element's character data, recording each
    /// failure.
    pub fn text(&mut self, value: &str, rules: &[Rule]) {
        for rule in rules {
            if let Err(err) = rule.check(value) {
                self.violations.push(Violation::text(self.tag, value, err));
            }
        }
    }

    /// Checks an attribute's presence, then applies every rule to its value.
    pub fn attribute(
        &mut self,
        name: &'static str,
        value: &Field<String>,
        presence: Presence,
        rules: &[Rule],
    ) {
        match value {
            Field::Absent if presence == Presence::Required => {
                self.violations
                    .push(Violation::missing_attribute(self.tag, name));
            }
            Field::Absent => {}
            Field::Present(value) => {
                for rule in rules {
                    if let Err(err) = rule.check(value) {
                        self.violations
                            .push(Violation::attribute(self.tag, name, value, err));
                    }
                }
            }
        }
    }

    /// Records a violation against the element as a whole.
    pub fn invalid(&mut self, kind: ErrorKind, detail: &str) {
        self.violations
            .push(Violation::structure(self.tag, kind, detail));
    }
}

// ============================================================================
// Options
// ============================================================================

/// Knobs for rules whose strictness is a policy choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Require each `<day>` of `<skipDays>` to be an English weekday name.
    /// Off by default: RSS 2.0 readers accept anything.
    pub strict_days: bool,
}

// ============================================================================
// Report
// ============================================================================

/// Outcome of validating a tree: the verdict and every violation, in
/// document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    pub fn into_parts(self) -> (bool, Vec<Violation>) {
        (self.is_valid(), self.violations)
    }
}

// ============================================================================
// Traversal
// ============================================================================

/// Walks a tree depth-first and evaluates every rule it declares.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: Options,
}

impl Validator {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Validates `node` and everything under it.
    ///
    /// Never stops at the first failure: sibling rules are all evaluated, and
    /// violations come back in pre-order (an element's own rules, then its
    /// slots in declaration order).
    pub fn validate<N: Node>(&self, node: &N) -> Report {
        let mut violations = Vec::new();
        self.walk(node, &mut violations);
        tracing::debug!(
            root = node.tag(),
            violations = violations.len(),
            "Validation finished"
        );
        Report { violations }
    }

    fn walk(&self, node: &dyn Node, out: &mut Vec<Violation>) {
        let tag = node.tag();
        {
            let mut scope = Scope {
                tag,
                options: &self.options,
                violations: &mut *out,
            };
            node.check(&mut scope);
        }

        for slot in node.slots() {
            match slot {
                Slot::One {
                    node: Some(child), ..
                } => self.walk(child, out),
                Slot::One {
                    tag: child_tag,
                    required: true,
                    node: None,
                } => out.push(Violation::missing_child(tag, child_tag)),
                Slot::One { node: None, .. } => {}
                Slot::Many {
                    tag: child_tag,
                    max,
                    nodes,
                } => {
                    if let Some(max) = max.filter(|&max| nodes.len() > max) {
                        out.push(Violation::structure(
                            tag,
                            ErrorKind::InvalidElement,
                            &format!(
                                "at most {} <{}> elements allowed, found {}",
                                max,
                                child_tag,
                                nodes.len()
                            ),
                        ));
                    }
                    for child in nodes {
                        self.walk(child, out);
                    }
                }
            }
        }
    }
}

/// Validates `node` with default [`Options`].
///
/// # Examples
///
/// ```
/// use rss_validate::model::{Channel, Rss};
/// use rss_validate::validate;
///
/// let rss = Rss::new(Channel::new("Liftoff News", "http://liftoff.msfc.nasa.gov/", "News"));
/// assert!(validate(&rss).is_valid());
/// ```
pub fn validate<N: Node>(node: &N) -> Report {
    Validator::default().validate(node)
}
