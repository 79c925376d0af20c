//! Views for the rules grammar.

use crate::accessor::{child_list, optional_child, required_child};
use crate::{MalformedTreeError, NodeKind, NodeRef};

use super::typed_node;

typed_node! {
    /// `declare enum Name ... end`
    EnumDeclaration => EnumDeclaration
}

impl<'t> EnumDeclaration<'t> {
    pub fn annotation_list(self) -> Vec<Annotation<'t>> {
        child_list(self.0, NodeKind::Annotation)
            .into_iter()
            .map(Annotation)
            .collect()
    }

    pub fn enumerative_list(self) -> Vec<Enumerative<'t>> {
        child_list(self.0, NodeKind::Enumerative)
            .into_iter()
            .map(Enumerative)
            .collect()
    }

    pub fn field_list(self) -> Vec<Field<'t>> {
        child_list(self.0, NodeKind::Field)
            .into_iter()
            .map(Field)
            .collect()
    }

    /// Returns the declared name. Every enum declaration has one.
    pub fn qualified_name(self) -> Result<QualifiedName<'t>, MalformedTreeError> {
        required_child(self.0, NodeKind::QualifiedName).map(QualifiedName)
    }
}

typed_node! {
    /// `do[name]` or `break[name]` inside a rule condition.
    LhsNamedConsequence => LhsNamedConsequence
}

impl<'t> LhsNamedConsequence<'t> {
    pub fn consequence_id_list(self) -> Vec<ConsequenceId<'t>> {
        child_list(self.0, NodeKind::ConsequenceId)
            .into_iter()
            .map(ConsequenceId)
            .collect()
    }

    /// Returns the guard expression of an `if (...)` consequence.
    pub fn expression(self) -> Option<NodeRef<'t>> {
        optional_child(self.0, NodeKind::Expression)
    }
}

typed_node! {
    /// Dotted name such as `org.example.Color`.
    QualifiedName => QualifiedName
}

impl<'t> QualifiedName<'t> {
    pub fn identifiers(self) -> Vec<NodeRef<'t>> {
        child_list(self.0, NodeKind::Identifier)
    }

    pub fn text(self) -> &'t str {
        self.0.text()
    }
}

typed_node! {
    /// Enum constant with optional constructor arguments: `RED("red")`.
    Enumerative => Enumerative
}

impl<'t> Enumerative<'t> {
    pub fn name(self) -> Result<&'t str, MalformedTreeError> {
        Ok(required_child(self.0, NodeKind::Identifier)?.text())
    }

    pub fn arguments(self) -> Vec<NodeRef<'t>> {
        child_list(self.0, NodeKind::Expression)
    }
}

typed_node! {
    Field => Field
}

impl<'t> Field<'t> {
    pub fn name(self) -> Result<&'t str, MalformedTreeError> {
        Ok(required_child(self.0, NodeKind::Identifier)?.text())
    }
}

typed_node! {
    Annotation => Annotation
}

impl<'t> Annotation<'t> {
    pub fn name(self) -> Result<&'t str, MalformedTreeError> {
        Ok(required_child(self.0, NodeKind::Identifier)?.text())
    }
}

typed_node! {
    ConsequenceId => ConsequenceId
}

impl<'t> ConsequenceId<'t> {
    pub fn text(self) -> &'t str {
        self.0.text()
    }
}
