//! Built-in inspections.

mod animation_trigger;
mod empty_enum;

pub use animation_trigger::AnimationTriggerAssignment;
pub use empty_enum::EmptyEnum;

use crate::Inspection;

/// Returns one instance of every built-in inspection, in listing order.
pub fn builtin() -> Vec<Box<dyn Inspection>> {
    vec![Box::new(AnimationTriggerAssignment), Box::new(EmptyEnum)]
}
