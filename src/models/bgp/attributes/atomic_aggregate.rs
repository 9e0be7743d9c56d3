use std::fmt::{Display, Formatter};

/// ATOMIC_AGGREGATE carries no value; its presence is the whole signal.
///
/// An attribute set without the attribute renders `NAG` in its place.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AtomicAggregate;

impl Display for AtomicAggregate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AG")
    }
}
