//! Node kind table shared by every grammar.
//!
//! All productions and tokens of the template-markup grammar and the rules
//! grammar live in one enum. Components compare kinds by value; there is no
//! per-grammar constant module.

use serde::{Deserialize, Serialize};

/// The grammar a node kind belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Markup templates with binding attributes.
    Template,
    /// Rule files (`declare enum`, named consequences, ...).
    Rules,
    /// Kinds shared by both grammars.
    Common,
}

/// Kind tag identifying the grammar production of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NodeKind {
    // Template composites
    /// Root of a template file.
    Document,
    /// `<tag ...> ... </tag>` or a self-closing tag.
    Element,
    /// `<tag attr=...>`
    StartTag,
    /// `</tag>`
    EndTag,
    /// Plain attribute such as `class="x"`.
    Attribute,
    /// Property binding: `[prop]`, `[@trigger]`, `@trigger`, `bind-prop`.
    PropertyBinding,
    /// Event binding: `(event)`, `on-event`.
    EventBinding,
    /// Attribute value, quoted or not.
    AttributeValue,

    // Template tokens
    /// `<` or `</`.
    TagOpen,
    /// `>` or `/>`.
    TagClose,
    /// Element name.
    TagName,
    /// Attribute name, including binding syntax.
    AttributeName,
    /// `=` between attribute name and value.
    Equals,
    /// `"` or `'`.
    Quote,
    /// Unquoted value text.
    ValueText,
    /// Character data between tags.
    Text,
    /// `<!-- ... -->`
    Comment,

    // Rules composites
    /// Root of a rules file.
    CompilationUnit,
    /// `declare enum Name ... end`
    EnumDeclaration,
    /// Dotted name.
    QualifiedName,
    /// `@Name(...)`
    Annotation,
    /// Enum constant, e.g. `RED("red")`.
    Enumerative,
    /// Field declaration `name : Type`.
    Field,
    /// `do[name]` / `break[name]` in a rule's left-hand side.
    LhsNamedConsequence,
    /// Name inside `do[...]`.
    ConsequenceId,
    /// Opaque expression.
    Expression,

    // Rules tokens
    /// Plain identifier.
    Identifier,
    /// Reserved word.
    Keyword,
    /// Punctuation such as `,` `[` `]` `(` `)`.
    Punctuation,

    // Shared tokens
    /// Spaces, tabs and line breaks.
    Whitespace,
    /// Bytes the producer could not classify.
    Error,
}

impl NodeKind {
    /// Returns the grammar this kind belongs to.
    pub const fn language(&self) -> Language {
        match self {
            NodeKind::Document
            | NodeKind::Element
            | NodeKind::StartTag
            | NodeKind::EndTag
            | NodeKind::Attribute
            | NodeKind::PropertyBinding
            | NodeKind::EventBinding
            | NodeKind::AttributeValue
            | NodeKind::TagOpen
            | NodeKind::TagClose
            | NodeKind::TagName
            | NodeKind::AttributeName
            | NodeKind::Equals
            | NodeKind::Quote
            | NodeKind::ValueText
            | NodeKind::Text
            | NodeKind::Comment => Language::Template,
            NodeKind::CompilationUnit
            | NodeKind::EnumDeclaration
            | NodeKind::QualifiedName
            | NodeKind::Annotation
            | NodeKind::Enumerative
            | NodeKind::Field
            | NodeKind::LhsNamedConsequence
            | NodeKind::ConsequenceId
            | NodeKind::Expression
            | NodeKind::Identifier
            | NodeKind::Keyword
            | NodeKind::Punctuation => Language::Rules,
            NodeKind::Whitespace | NodeKind::Error => Language::Common,
        }
    }

    /// Returns true for leaf kinds whose text is a single token.
    pub const fn is_token(&self) -> bool {
        matches!(
            self,
            NodeKind::TagOpen
                | NodeKind::TagClose
                | NodeKind::TagName
                | NodeKind::AttributeName
                | NodeKind::Equals
                | NodeKind::Quote
                | NodeKind::ValueText
                | NodeKind::Text
                | NodeKind::Comment
                | NodeKind::Identifier
                | NodeKind::Keyword
                | NodeKind::Punctuation
                | NodeKind::Whitespace
                | NodeKind::Error
        )
    }

    /// Returns true for the three attribute-like template kinds.
    pub const fn is_attribute(&self) -> bool {
        matches!(
            self,
            NodeKind::Attribute | NodeKind::PropertyBinding | NodeKind::EventBinding
        )
    }

    /// Returns true for whitespace tokens.
    pub const fn is_trivia(&self) -> bool {
        matches!(self, NodeKind::Whitespace)
    }

    /// Returns the kind name as it appears in serialized trees.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Element => "Element",
            NodeKind::StartTag => "StartTag",
            NodeKind::EndTag => "EndTag",
            NodeKind::Attribute => "Attribute",
            NodeKind::PropertyBinding => "PropertyBinding",
            NodeKind::EventBinding => "EventBinding",
            NodeKind::AttributeValue => "AttributeValue",
            NodeKind::TagOpen => "TagOpen",
            NodeKind::TagClose => "TagClose",
            NodeKind::TagName => "TagName",
            NodeKind::AttributeName => "AttributeName",
            NodeKind::Equals => "Equals",
            NodeKind::Quote => "Quote",
            NodeKind::ValueText => "ValueText",
            NodeKind::Text => "Text",
            NodeKind::Comment => "Comment",
            NodeKind::CompilationUnit => "CompilationUnit",
            NodeKind::EnumDeclaration => "EnumDeclaration",
            NodeKind::QualifiedName => "QualifiedName",
            NodeKind::Annotation => "Annotation",
            NodeKind::Enumerative => "Enumerative",
            NodeKind::Field => "Field",
            NodeKind::LhsNamedConsequence => "LhsNamedConsequence",
            NodeKind::ConsequenceId => "ConsequenceId",
            NodeKind::Expression => "Expression",
            NodeKind::Identifier => "Identifier",
            NodeKind::Keyword => "Keyword",
            NodeKind::Punctuation => "Punctuation",
            NodeKind::Whitespace => "Whitespace",
            NodeKind::Error => "Error",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
