//! Flags enum declarations without constants.

use std::ops::ControlFlow;

use treelint_ast::typed::rules::EnumDeclaration;
use treelint_ast::{Language, MalformedTreeError, NodeRef, VisitResult, Visitor};

use crate::{Inspection, InspectionContext, Severity};

#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyEnum;

impl Inspection for EmptyEnum {
    fn id(&self) -> &'static str {
        "drools-empty-enum"
    }

    fn description(&self) -> &'static str {
        "Enum declarations should declare at least one constant"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn language(&self) -> Language {
        Language::Rules
    }

    fn build_visitor<'a, 't>(&'a self, ctx: InspectionContext<'a>) -> Box<dyn Visitor<'t> + 'a> {
        Box::new(EmptyEnumVisitor { ctx })
    }
}

struct EmptyEnumVisitor<'a> {
    ctx: InspectionContext<'a>,
}

impl<'t> Visitor<'t> for EmptyEnumVisitor<'_> {
    fn handles(&self, language: Language) -> bool {
        language == Language::Rules
    }

    fn visit_enum_declaration(&mut self, node: NodeRef<'t>) -> VisitResult {
        if let Some(declaration) = EnumDeclaration::cast(node) {
            self.ctx.check(node, |ctx| check_declaration(ctx, declaration));
        }
        ControlFlow::Continue(())
    }
}

fn check_declaration(
    ctx: &mut InspectionContext<'_>,
    declaration: EnumDeclaration<'_>,
) -> Result<(), MalformedTreeError> {
    let name = declaration.qualified_name()?;
    if declaration.enumerative_list().is_empty() {
        let simple = name
            .identifiers()
            .last()
            .map_or(name.text(), |identifier| identifier.text());
        ctx.report(
            name.node(),
            format!("Enum '{simple}' declares no constants"),
            Vec::new(),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Diagnostic, InspectionSummary, Inspector};
    use pretty_assertions::assert_eq;
    use treelint_ast::test_utils::rules_unit;

    fn run(declarations: &[(Option<&str>, &[&str])]) -> (Vec<Diagnostic>, InspectionSummary) {
        let tree = rules_unit(declarations);
        let mut inspector = Inspector::new();
        inspector.register(Box::new(EmptyEnum));
        let mut sink: Vec<Diagnostic> = Vec::new();
        let summary = inspector.inspect(&tree, &mut sink);
        (sink, summary)
    }

    #[test]
    fn test_reports_empty_enum() {
        let (diagnostics, summary) = run(&[(Some("Color"), &[]), (Some("Size"), &["SMALL"])]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Enum 'Color' declares no constants");
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(diagnostics[0].fixes.is_empty());
        assert_eq!(summary.reported, 1);
    }

    #[test]
    fn test_message_uses_simple_name_of_dotted_enum() {
        let (diagnostics, _) = run(&[(Some("org.example.Color"), &[])]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Enum 'Color' declares no constants");
        let loc = diagnostics[0].loc.unwrap();
        assert_eq!((loc.start.column, loc.end.column), (13, 30));
    }

    #[test]
    fn test_malformed_declaration_does_not_stop_pass() {
        let (diagnostics, summary) = run(&[(None, &[]), (Some("Empty"), &[])]);

        assert_eq!(summary.malformed, 1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Enum 'Empty' declares no constants");
    }
}
