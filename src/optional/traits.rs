//! Standard trait impls and `Option` conversions for `OptionalBox`.

use core::fmt;
use core::hash::{Hash, Hasher};

use super::OptionalBox;

impl<T> Default for OptionalBox<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for OptionalBox<T> {
    fn clone(&self) -> Self {
        match self.as_option() {
            Some(value) => Self::from_ref(value),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionalBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => f.debug_tuple("OptionalBox").field(value).finish(),
            None => f.write_str("OptionalBox(<empty>)"),
        }
    }
}

impl<T: PartialEq> PartialEq for OptionalBox<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl<T: Eq> Eq for OptionalBox<T> {}

impl<T: Hash> Hash for OptionalBox<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_option().hash(state);
    }
}

impl<T> From<T> for OptionalBox<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T> From<Option<T>> for OptionalBox<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::new, Self::from_value)
    }
}

impl<T> From<OptionalBox<T>> for Option<T> {
    fn from(value: OptionalBox<T>) -> Self {
        value.into_option()
    }
}
