//! The error returned by checked access on an empty `OptionalBox`.

/// Returned by the checked accessors (`value`, `value_mut`, `into_value`,
/// `take_value`) when the box holds no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BadOptionalAccess;

impl core::fmt::Display for BadOptionalAccess {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Bad optional access")
    }
}

impl std::error::Error for BadOptionalAccess {}
