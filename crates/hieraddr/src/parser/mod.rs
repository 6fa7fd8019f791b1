//! Address template parser.
//!
//! This module turns slash-delimited address strings like
//! `{selected.profile}/subsystem=datasources` into an ordered [`Token`]
//! sequence. Braces are not inspected here; references are recognized and
//! resolved later by the [`resolver`](crate::resolver).

pub mod ast;
mod template;

pub use ast::{AddressTemplate, Token};
pub use template::parse_template;
