//! # treelint_parser
//!
//! Parser abstraction layer for treelint.
//!
//! This crate provides:
//! - A `Parser` trait that turns source text into a [`SyntaxTree`](treelint_ast::SyntaxTree)
//! - A template markup parser that classifies binding attributes
//!
//! ## Example
//!
//! ```rust
//! use treelint_ast::NodeKind;
//! use treelint_parser::{Parser, TemplateParser};
//!
//! let tree = TemplateParser::new().parse(r#"<div [@fade]="state"></div>"#).unwrap();
//! let element = tree.root().first_child().unwrap();
//! assert_eq!(element.kind(), NodeKind::Element);
//! ```

mod error;
mod template;
mod traits;

pub use error::ParseError;
pub use template::TemplateParser;
pub use traits::Parser;
