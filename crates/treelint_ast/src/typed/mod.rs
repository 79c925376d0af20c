//! Typed views over grammar productions.
//!
//! A view is a `Copy` wrapper around a [`NodeRef`] of one specific kind.
//! Views hold no data of their own: each accessor scans the live children
//! again, so a view never reports something an edit has since removed.

pub mod rules;
pub mod template;

macro_rules! typed_node {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name<'t>($crate::NodeRef<'t>);

        impl<'t> $name<'t> {
            /// Wraps `node` if it has the matching kind.
            pub fn cast(node: $crate::NodeRef<'t>) -> Option<Self> {
                (node.kind() == $crate::NodeKind::$kind).then_some(Self(node))
            }

            /// Returns the underlying node.
            #[inline]
            pub fn node(self) -> $crate::NodeRef<'t> {
                self.0
            }

            /// Returns the current span of the node.
            #[inline]
            pub fn span(self) -> $crate::Span {
                self.0.span()
            }
        }
    };
}

pub(crate) use typed_node;
