//! # hub_iac
//!
//! CloudFormation naming conventions and template assembly for the Sutton
//! Information Hub API.
//!
//! Resource names are built as unresolved `Fn::Join` expressions over the
//! stack's `Environment` and `Uuid` parameters; CloudFormation resolves them
//! at deploy time.
//!
//! ## Features
//!
//! - One naming function per resource kind (queues, buckets, log groups, ...)
//! - Template document with parameters and outputs, as JSON or YAML
//! - Naming stack that publishes every derived name as an output
//! - Local preview of names for a given environment and token
//!
//! ## Example
//!
//! ```rust
//! use hub_iac::{create_template, names, Bindings, Parameter};
//!
//! let mut template = create_template();
//! let env = template.add_parameter(Parameter::string("Environment")).unwrap();
//! let uuid = template.add_parameter(Parameter::string("Uuid")).unwrap();
//!
//! let queue = names::create_default_queue_name_variable(&env, &uuid);
//! let bindings = Bindings::new().bind("Environment", "staging").bind("Uuid", "abc123");
//!
//! assert_eq!(queue.render(&bindings).unwrap(), "default-abc123-staging");
//! ```

pub mod error;
pub mod expr;
pub mod names;
pub mod parameter;
pub mod render;
pub mod stack;
pub mod template;

pub use error::{IacError, IacResult};
pub use expr::{Expr, Join, Ref, Referable, Segment, NAME_DELIMITER};
pub use names::{ResourceKind, API_NAME};
pub use parameter::Parameter;
pub use render::Bindings;
pub use stack::{NamingStack, StackConfig};
pub use template::{create_template, Output, Template, TEMPLATE_DESCRIPTION, TEMPLATE_FORMAT_VERSION};
