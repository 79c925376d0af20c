//! Flags `@trigger="expr"` animation attributes.
//!
//! An animation trigger written as a plain attribute takes no expression;
//! the value has to be bound with `[@trigger]="expr"` instead.

use std::ops::ControlFlow;

use treelint_ast::typed::template::{PropertyBinding, PropertyBindingType};
use treelint_ast::{Language, MalformedTreeError, NodeRef, VisitResult, Visitor};

use crate::{Fix, Inspection, InspectionContext};

const MESSAGE: &str =
    "Assigning animation triggers via @prop=\"exp\" attributes with an expression is invalid.";

#[derive(Debug, Default, Clone, Copy)]
pub struct AnimationTriggerAssignment;

impl Inspection for AnimationTriggerAssignment {
    fn id(&self) -> &'static str {
        "angular-animation-trigger-assignment"
    }

    fn description(&self) -> &'static str {
        "Animation triggers with an expression must use [@trigger] binding syntax"
    }

    fn language(&self) -> Language {
        Language::Template
    }

    fn build_visitor<'a, 't>(&'a self, ctx: InspectionContext<'a>) -> Box<dyn Visitor<'t> + 'a> {
        Box::new(TriggerVisitor { ctx })
    }
}

struct TriggerVisitor<'a> {
    ctx: InspectionContext<'a>,
}

impl<'t> Visitor<'t> for TriggerVisitor<'_> {
    fn handles(&self, language: Language) -> bool {
        language == Language::Template
    }

    fn visit_property_binding(&mut self, node: NodeRef<'t>) -> VisitResult {
        if let Some(binding) = PropertyBinding::cast(node) {
            self.ctx.check(node, |ctx| check_binding(ctx, binding));
        }
        ControlFlow::Continue(())
    }
}

fn check_binding(
    ctx: &mut InspectionContext<'_>,
    binding: PropertyBinding<'_>,
) -> Result<(), MalformedTreeError> {
    if binding.binding_type()? != PropertyBindingType::Animation
        || !binding.name()?.starts_with('@')
    {
        return Ok(());
    }
    let Some(value) = binding.value_element() else {
        return Ok(());
    };
    if value.text().is_empty() {
        return Ok(());
    }

    let fixes = vec![
        Fix::rename_to_binding_form(binding.property_name()?),
        Fix::remove_value_range(),
    ];
    ctx.report(value.node(), MESSAGE, fixes);
    Ok(())
}
