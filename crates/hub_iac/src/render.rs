//! Local preview of join expressions.
//!
//! CloudFormation resolves references at deploy time. This mirrors that
//! resolution for `Ref` and `Fn::Join` so names can be previewed before a
//! stack exists.

use std::collections::HashMap;

use crate::error::{IacError, IacResult};
use crate::expr::{Expr, Join, Ref, Segment};

/// Concrete values for parameter logical ids.
#[derive(Debug, Clone, Default)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value to a logical id.
    pub fn bind(mut self, logical_id: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(logical_id.into(), value.into());
        self
    }

    pub fn get(&self, logical_id: &str) -> Option<&str> {
        self.values.get(logical_id).map(String::as_str)
    }

    fn resolve(&self, reference: &Ref) -> IacResult<&str> {
        self.get(reference.target())
            .ok_or_else(|| IacError::UnboundParameter(reference.target().to_string()))
    }
}

impl Join {
    /// Resolve every segment and join with the delimiter.
    pub fn render(&self, bindings: &Bindings) -> IacResult<String> {
        let parts = self
            .segments()
            .iter()
            .map(|segment| match segment {
                Segment::Literal(value) => Ok(value.as_str()),
                Segment::Ref(reference) => bindings.resolve(reference),
            })
            .collect::<IacResult<Vec<_>>>()?;

        Ok(parts.join(self.delimiter()))
    }
}

impl Expr {
    pub fn render(&self, bindings: &Bindings) -> IacResult<String> {
        match self {
            Expr::Literal(value) => Ok(value.clone()),
            Expr::Ref(reference) => bindings.resolve(reference).map(str::to_string),
            Expr::Join(join) => join.render(bindings),
        }
    }
}
