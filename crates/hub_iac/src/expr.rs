//! CloudFormation intrinsic expressions.
//!
//! Expressions are built here and resolved later by CloudFormation. A
//! [`Ref`] only carries the logical id of what it points at; nothing in
//! this module looks behind it.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Delimiter used by every resource name in the stack.
pub const NAME_DELIMITER: &str = "-";

/// Something a template can point at with `Ref`.
pub trait Referable {
    /// Logical id of the referenced template entity.
    fn logical_id(&self) -> &str;
}

impl Referable for str {
    fn logical_id(&self) -> &str {
        self
    }
}

impl Referable for String {
    fn logical_id(&self) -> &str {
        self
    }
}

/// A `Ref` to a parameter or resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ref {
    target: String,
}

impl Ref {
    /// Create a reference to the given entity.
    pub fn to<R: Referable + ?Sized>(target: &R) -> Self {
        Self {
            target: target.logical_id().to_string(),
        }
    }

    /// Logical id this reference points at.
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Serialize for Ref {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Ref", &self.target)?;
        map.end()
    }
}

/// One part of a join expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Segment {
    Literal(String),
    Ref(Ref),
}

impl From<&str> for Segment {
    fn from(value: &str) -> Self {
        Segment::Literal(value.to_string())
    }
}

impl From<String> for Segment {
    fn from(value: String) -> Self {
        Segment::Literal(value)
    }
}

impl From<Ref> for Segment {
    fn from(value: Ref) -> Self {
        Segment::Ref(value)
    }
}

/// An `Fn::Join` expression: ordered segments joined by a delimiter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Join {
    delimiter: String,
    segments: Vec<Segment>,
}

impl Join {
    pub fn new(delimiter: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self {
            delimiter: delimiter.into(),
            segments,
        }
    }

    /// Join segments with [`NAME_DELIMITER`].
    pub fn hyphenated(segments: Vec<Segment>) -> Self {
        Self::new(NAME_DELIMITER, segments)
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Logical ids referenced by this join, in segment order.
    pub fn referenced_ids(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Ref(reference) => Some(reference.target()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}

impl Serialize for Join {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Args<'a>(&'a Join);

        impl Serialize for Args<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(2))?;
                seq.serialize_element(&self.0.delimiter)?;
                seq.serialize_element(&self.0.segments)?;
                seq.end()
            }
        }

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("Fn::Join", &Args(self))?;
        map.end()
    }
}

/// Any value a template output can carry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Expr {
    Literal(String),
    Ref(Ref),
    Join(Join),
}

impl Expr {
    pub fn referenced_ids(&self) -> Vec<&str> {
        match self {
            Expr::Literal(_) => Vec::new(),
            Expr::Ref(reference) => vec![reference.target()],
            Expr::Join(join) => join.referenced_ids(),
        }
    }
}

impl From<Join> for Expr {
    fn from(value: Join) -> Self {
        Expr::Join(value)
    }
}

impl From<Ref> for Expr {
    fn from(value: Ref) -> Self {
        Expr::Ref(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Literal(value.to_string())
    }
}
