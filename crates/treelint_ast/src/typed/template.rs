//! Views and name classification for the template-markup grammar.

use serde::{Deserialize, Serialize};

use crate::accessor::{child_list, optional_child, required_child};
use crate::{MalformedTreeError, NodeKind, NodeRef};

use super::typed_node;

/// What a property binding writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyBindingType {
    /// `[prop]`, `bind-prop`, `[(prop)]`
    Property,
    /// `[attr.name]`
    Attribute,
    /// `[class.name]`
    Class,
    /// `[style.name]`
    Style,
    /// `[@trigger]`, `@trigger`
    Animation,
}

/// Decides which attribute-like kind an attribute name produces.
///
/// ```rust
/// use treelint_ast::NodeKind;
/// use treelint_ast::typed::template::classify_attribute_name;
///
/// assert_eq!(classify_attribute_name("[value]"), NodeKind::PropertyBinding);
/// assert_eq!(classify_attribute_name("@fade"), NodeKind::PropertyBinding);
/// assert_eq!(classify_attribute_name("(click)"), NodeKind::EventBinding);
/// assert_eq!(classify_attribute_name("class"), NodeKind::Attribute);
/// ```
pub fn classify_attribute_name(name: &str) -> NodeKind {
    if wrapped(name, '[', ']').is_some()
        || (name.len() > 1 && name.starts_with('@'))
        || prefixed(name, "bind-").is_some()
        || prefixed(name, "bindon-").is_some()
    {
        NodeKind::PropertyBinding
    } else if wrapped(name, '(', ')').is_some() || prefixed(name, "on-").is_some() {
        NodeKind::EventBinding
    } else {
        NodeKind::Attribute
    }
}

/// Splits a property binding name into its binding type and the bound
/// property name with all binding syntax removed.
///
/// ```rust
/// use treelint_ast::typed::template::{PropertyBindingType, parse_property_binding};
///
/// assert_eq!(parse_property_binding("@fade"), (PropertyBindingType::Animation, "fade"));
/// assert_eq!(parse_property_binding("[attr.role]"), (PropertyBindingType::Attribute, "role"));
/// assert_eq!(parse_property_binding("[(model)]"), (PropertyBindingType::Property, "model"));
/// ```
pub fn parse_property_binding(name: &str) -> (PropertyBindingType, &str) {
    let inner = wrapped(name, '[', ']')
        .map(|inner| wrapped(inner, '(', ')').unwrap_or(inner))
        .or_else(|| prefixed(name, "bindon-"))
        .or_else(|| prefixed(name, "bind-"))
        .unwrap_or(name);

    if let Some(trigger) = inner.strip_prefix('@') {
        (PropertyBindingType::Animation, trigger)
    } else if let Some(attr) = inner.strip_prefix("attr.") {
        (PropertyBindingType::Attribute, attr)
    } else if let Some(class) = inner.strip_prefix("class.") {
        (PropertyBindingType::Class, class)
    } else if let Some(style) = inner.strip_prefix("style.") {
        (PropertyBindingType::Style, style)
    } else {
        (PropertyBindingType::Property, inner)
    }
}

/// Returns the event name of an event binding name: `(click)` and
/// `on-click` both give `click`.
pub fn parse_event_name(name: &str) -> &str {
    wrapped(name, '(', ')')
        .or_else(|| prefixed(name, "on-"))
        .unwrap_or(name)
}

fn wrapped(name: &str, open: char, close: char) -> Option<&str> {
    name.strip_prefix(open)?.strip_suffix(close)
}

fn prefixed<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}

fn name_element(node: NodeRef<'_>) -> Result<NodeRef<'_>, MalformedTreeError> {
    required_child(node, NodeKind::AttributeName)
}

fn value_element(node: NodeRef<'_>) -> Option<AttributeValue<'_>> {
    optional_child(node, NodeKind::AttributeValue).and_then(AttributeValue::cast)
}

typed_node! {
    /// `name="value"` without binding syntax.
    Attribute => Attribute
}

impl<'t> Attribute<'t> {
    /// Returns the name token.
    pub fn name_element(self) -> Result<NodeRef<'t>, MalformedTreeError> {
        name_element(self.0)
    }

    /// Returns the attribute name.
    pub fn name(self) -> Result<&'t str, MalformedTreeError> {
        Ok(self.name_element()?.text())
    }

    /// Returns the value, if the attribute has one.
    pub fn value_element(self) -> Option<AttributeValue<'t>> {
        value_element(self.0)
    }

    /// Returns the unquoted value text.
    pub fn value(self) -> Option<&'t str> {
        self.value_element().map(AttributeValue::text)
    }
}

typed_node! {
    /// A property binding such as `[value]="x"` or `@fade="state"`.
    PropertyBinding => PropertyBinding
}

impl<'t> PropertyBinding<'t> {
    /// Returns the name token, including binding syntax.
    pub fn name_element(self) -> Result<NodeRef<'t>, MalformedTreeError> {
        name_element(self.0)
    }

    /// Returns the full attribute name, including binding syntax.
    pub fn name(self) -> Result<&'t str, MalformedTreeError> {
        Ok(self.name_element()?.text())
    }

    /// Returns the value, if the binding has one.
    pub fn value_element(self) -> Option<AttributeValue<'t>> {
        value_element(self.0)
    }

    /// Returns the unquoted value text.
    pub fn value(self) -> Option<&'t str> {
        self.value_element().map(AttributeValue::text)
    }

    /// Returns what the binding writes to.
    pub fn binding_type(self) -> Result<PropertyBindingType, MalformedTreeError> {
        Ok(parse_property_binding(self.name()?).0)
    }

    /// Returns the bound name without binding syntax: `[@fade]` gives `fade`.
    pub fn property_name(self) -> Result<&'t str, MalformedTreeError> {
        Ok(parse_property_binding(self.name()?).1)
    }
}

typed_node! {
    /// An event binding such as `(click)="go()"`.
    EventBinding => EventBinding
}

impl<'t> EventBinding<'t> {
    pub fn name_element(self) -> Result<NodeRef<'t>, MalformedTreeError> {
        name_element(self.0)
    }

    pub fn event_name(self) -> Result<&'t str, MalformedTreeError> {
        Ok(parse_event_name(self.name_element()?.text()))
    }

    pub fn value_element(self) -> Option<AttributeValue<'t>> {
        value_element(self.0)
    }
}

typed_node! {
    /// The value part of an attribute, quoted or bare.
    AttributeValue => AttributeValue
}

impl<'t> AttributeValue<'t> {
    /// Returns the value without quotes.
    pub fn text(self) -> &'t str {
        optional_child(self.0, NodeKind::ValueText)
            .map(NodeRef::text)
            .unwrap_or_default()
    }

    /// Returns true if the value is delimited by quotes.
    pub fn is_quoted(self) -> bool {
        self.0
            .first_child()
            .is_some_and(|child| child.kind() == NodeKind::Quote)
    }
}

typed_node! {
    Element => Element
}

impl<'t> Element<'t> {
    /// Returns the opening tag.
    pub fn start_tag(self) -> Result<NodeRef<'t>, MalformedTreeError> {
        required_child(self.0, NodeKind::StartTag)
    }

    /// Returns the closing tag, absent for void and self-closing elements.
    pub fn end_tag(self) -> Option<NodeRef<'t>> {
        optional_child(self.0, NodeKind::EndTag)
    }

    pub fn tag_name(self) -> Result<&'t str, MalformedTreeError> {
        Ok(required_child(self.start_tag()?, NodeKind::TagName)?.text())
    }

    /// Returns every attribute-like child of the start tag in source order.
    pub fn attributes(self) -> Result<Vec<NodeRef<'t>>, MalformedTreeError> {
        Ok(self
            .start_tag()?
            .children()
            .filter(|child| child.kind().is_attribute())
            .collect())
    }

    pub fn child_elements(self) -> Vec<Element<'t>> {
        child_list(self.0, NodeKind::Element)
            .into_iter()
            .map(Element)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SyntaxTree, TreeBuilder};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("[value]", NodeKind::PropertyBinding)]
    #[case("[@fade]", NodeKind::PropertyBinding)]
    #[case("@fade", NodeKind::PropertyBinding)]
    #[case("[(model)]", NodeKind::PropertyBinding)]
    #[case("bind-value", NodeKind::PropertyBinding)]
    #[case("bindon-model", NodeKind::PropertyBinding)]
    #[case("(click)", NodeKind::EventBinding)]
    #[case("on-click", NodeKind::EventBinding)]
    #[case("class", NodeKind::Attribute)]
    #[case("@", NodeKind::Attribute)]
    #[case("bind-", NodeKind::Attribute)]
    #[case("data-on-x", NodeKind::Attribute)]
    fn test_classify_attribute_name(#[case] name: &str, #[case] expected: NodeKind) {
        assert_eq!(classify_attribute_name(name), expected);
    }

    #[rstest]
    #[case("[value]", PropertyBindingType::Property, "value")]
    #[case("[@fade]", PropertyBindingType::Animation, "fade")]
    #[case("@fade", PropertyBindingType::Animation, "fade")]
    #[case("[attr.aria-label]", PropertyBindingType::Attribute, "aria-label")]
    #[case("[class.active]", PropertyBindingType::Class, "active")]
    #[case("[style.width.px]", PropertyBindingType::Style, "width.px")]
    #[case("[(model)]", PropertyBindingType::Property, "model")]
    #[case("bind-title", PropertyBindingType::Property, "title")]
    #[case("bind-attr.role", PropertyBindingType::Attribute, "role")]
    fn test_parse_property_binding(
        #[case] name: &str,
        #[case] binding_type: PropertyBindingType,
        #[case] property: &str,
    ) {
        assert_eq!(parse_property_binding(name), (binding_type, property));
    }

    #[test]
    fn test_parse_event_name() {
        assert_eq!(parse_event_name("(click)"), "click");
        assert_eq!(parse_event_name("on-submit"), "submit");
    }

    fn binding(name: &str, value: Option<&str>) -> SyntaxTree {
        let mut b = TreeBuilder::new();
        b.start_node(NodeKind::PropertyBinding);
        b.token(NodeKind::AttributeName, name);
        if let Some(value) = value {
            b.token(NodeKind::Equals, "=");
            b.start_node(NodeKind::AttributeValue);
            b.token(NodeKind::Quote, "\"");
            if !value.is_empty() {
                b.token(NodeKind::ValueText, value);
            }
            b.token(NodeKind::Quote, "\"");
            b.finish_node();
        }
        b.finish_node();
        b.finish().unwrap()
    }

    #[test]
    fn test_property_binding_accessors() {
        let tree = binding("@fade", Some("state"));
        let view = PropertyBinding::cast(tree.root()).unwrap();
        assert_eq!(view.name().unwrap(), "@fade");
        assert_eq!(view.binding_type().unwrap(), PropertyBindingType::Animation);
        assert_eq!(view.property_name().unwrap(), "fade");
        assert_eq!(view.value(), Some("state"));
        assert!(view.value_element().unwrap().is_quoted());
    }

    #[test]
    fn test_empty_and_missing_values() {
        let tree = binding("@fade", Some(""));
        let view = PropertyBinding::cast(tree.root()).unwrap();
        assert_eq!(view.value(), Some(""));

        let tree = binding("@fade", None);
        let view = PropertyBinding::cast(tree.root()).unwrap();
        assert!(view.value_element().is_none());
        assert_eq!(view.value(), None);
    }

    #[test]
    fn test_cast_checks_kind() {
        let tree = binding("@fade", None);
        assert!(Attribute::cast(tree.root()).is_none());
        assert!(EventBinding::cast(tree.root()).is_none());
    }

    #[test]
    fn test_missing_name_is_malformed() {
        let mut b = TreeBuilder::new();
        b.start_node(NodeKind::PropertyBinding);
        b.start_node(NodeKind::AttributeValue);
        b.token(NodeKind::ValueText, "x");
        b.finish_node();
        b.finish_node();
        let tree = b.finish().unwrap();

        let view = PropertyBinding::cast(tree.root()).unwrap();
        let err = view.binding_type().unwrap_err();
        assert_eq!(err.expected, NodeKind::AttributeName);
        assert_eq!(view.value(), Some("x"));
    }

    #[test]
    fn test_element_accessors() {
        let mut b = TreeBuilder::new();
        b.start_node(NodeKind::Element);
        b.start_node(NodeKind::StartTag);
        b.token(NodeKind::TagOpen, "<");
        b.token(NodeKind::TagName, "div");
        b.token(NodeKind::Whitespace, " ");
        b.start_node(NodeKind::Attribute);
        b.token(NodeKind::AttributeName, "id");
        b.finish_node();
        b.token(NodeKind::Whitespace, " ");
        b.start_node(NodeKind::EventBinding);
        b.token(NodeKind::AttributeName, "(click)");
        b.finish_node();
        b.token(NodeKind::TagClose, ">");
        b.finish_node();
        b.start_node(NodeKind::Element);
        b.start_node(NodeKind::StartTag);
        b.token(NodeKind::TagOpen, "<");
        b.token(NodeKind::TagName, "br");
        b.token(NodeKind::TagClose, ">");
        b.finish_node();
        b.finish_node();
        b.finish_node();
        let tree = b.finish().unwrap();

        let element = Element::cast(tree.root()).unwrap();
        assert_eq!(element.tag_name().unwrap(), "div");
        let kinds: Vec<NodeKind> = element
            .attributes()
            .unwrap()
            .into_iter()
            .map(|n| n.kind())
            .collect();
        assert_eq!(kinds, vec![NodeKind::Attribute, NodeKind::EventBinding]);
        let event = EventBinding::cast(element.attributes().unwrap()[1]).unwrap();
        assert_eq!(event.event_name().unwrap(), "click");
        let children = element.child_elements();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].tag_name().unwrap(), "br");
        assert!(element.end_tag().is_none());
    }
}
