//! Fixture builders for tests in this and downstream crates.
//!
//! The rules grammar has no parser in this workspace, so rules trees are
//! assembled here with [`TreeBuilder`] events. The template helpers can also
//! produce trees a parser never would, such as attributes without a name.

use crate::typed::template::classify_attribute_name;
use crate::{NodeKind, SyntaxTree, TreeBuilder};

/// Appends `declare enum NAME C1 C2 ... end` to the open node.
///
/// Dotted names become `Identifier` tokens separated by `.` punctuation.
/// With `name: None` the `QualifiedName` child is left out.
pub fn enum_declaration(builder: &mut TreeBuilder, name: Option<&str>, constants: &[&str]) {
    builder.start_node(NodeKind::EnumDeclaration);
    builder.token(NodeKind::Keyword, "declare");
    builder.token(NodeKind::Whitespace, " ");
    builder.token(NodeKind::Keyword, "enum");
    if let Some(name) = name {
        builder.token(NodeKind::Whitespace, " ");
        builder.start_node(NodeKind::QualifiedName);
        for (index, segment) in name.split('.').enumerate() {
            if index > 0 {
                builder.token(NodeKind::Punctuation, ".");
            }
            builder.token(NodeKind::Identifier, segment);
        }
        builder.finish_node();
    }
    for constant in constants {
        builder.token(NodeKind::Whitespace, "\n    ");
        builder.start_node(NodeKind::Enumerative);
        builder.token(NodeKind::Identifier, constant);
        builder.finish_node();
    }
    builder.token(NodeKind::Whitespace, "\n");
    builder.token(NodeKind::Keyword, "end");
    builder.finish_node();
}

/// Builds a compilation unit holding one enum declaration per entry.
pub fn rules_unit(declarations: &[(Option<&str>, &[&str])]) -> SyntaxTree {
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::CompilationUnit);
    for (index, (name, constants)) in declarations.iter().enumerate() {
        if index > 0 {
            builder.token(NodeKind::Whitespace, "\n\n");
        }
        enum_declaration(&mut builder, *name, constants);
    }
    builder.finish_node();
    finish(builder)
}

/// Appends an attribute-like node. The kind follows the name's binding
/// syntax; a missing name yields a `PropertyBinding` without `AttributeName`.
pub fn attribute(builder: &mut TreeBuilder, name: Option<&str>, value: Option<&str>) {
    let kind = name.map_or(NodeKind::PropertyBinding, classify_attribute_name);
    builder.start_node(kind);
    if let Some(name) = name {
        builder.token(NodeKind::AttributeName, name);
    }
    if let Some(value) = value {
        builder.token(NodeKind::Equals, "=");
        builder.start_node(NodeKind::AttributeValue);
        builder.token(NodeKind::Quote, "\"");
        if !value.is_empty() {
            builder.token(NodeKind::ValueText, value);
        }
        builder.token(NodeKind::Quote, "\"");
        builder.finish_node();
    }
    builder.finish_node();
}

/// Appends `<tag a1 a2 ...></tag>`.
pub fn element(builder: &mut TreeBuilder, tag: &str, attributes: &[(Option<&str>, Option<&str>)]) {
    builder.start_node(NodeKind::Element);
    builder.start_node(NodeKind::StartTag);
    builder.token(NodeKind::TagOpen, "<");
    builder.token(NodeKind::TagName, tag);
    for (name, value) in attributes {
        builder.token(NodeKind::Whitespace, " ");
        attribute(builder, *name, *value);
    }
    builder.token(NodeKind::TagClose, ">");
    builder.finish_node();
    builder.start_node(NodeKind::EndTag);
    builder.token(NodeKind::TagOpen, "</");
    builder.token(NodeKind::TagName, tag);
    builder.token(NodeKind::TagClose, ">");
    builder.finish_node();
    builder.finish_node();
}

/// Builds a document of sibling elements separated by newlines.
pub fn template_document(elements: &[(&str, &[(Option<&str>, Option<&str>)])]) -> SyntaxTree {
    let mut builder = TreeBuilder::new();
    builder.start_node(NodeKind::Document);
    for (index, (tag, attributes)) in elements.iter().enumerate() {
        if index > 0 {
            builder.token(NodeKind::Text, "\n");
        }
        element(&mut builder, tag, attributes);
    }
    builder.finish_node();
    finish(builder)
}

fn finish(builder: TreeBuilder) -> SyntaxTree {
    builder.finish().expect("fixture events are balanced")
}
