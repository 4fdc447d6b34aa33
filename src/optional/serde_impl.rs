//! Serde support: an `OptionalBox<T>` has the same encoding as `Option<T>`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::OptionalBox;

impl<T: Serialize> Serialize for OptionalBox<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalBox<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
