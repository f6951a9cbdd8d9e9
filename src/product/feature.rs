use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::product::Scalar;

/// A feature of a Product.
///
/// On the wire a feature is an object holding exactly one entry, mapping the
/// feature title to its description:
///
/// ```json
/// { "Durable": "Lasts long" }
/// ```
///
/// A numeric description such as `{"Weight": 5}` is read as its text.
/// Objects with no entry or with several entries are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// The feature title, rendered in bold.
    pub title: String,
    /// The description text following the title.
    pub description: String,
}

impl Feature {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.title, &self.description)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FeatureVisitor;

        impl<'de> Visitor<'de> for FeatureVisitor {
            type Value = Feature;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with exactly one title/description entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Feature, A::Error> {
                let (title, description) = map
                    .next_entry::<String, Scalar>()?
                    .ok_or_else(|| <A::Error as de::Error>::invalid_length(0, &self))?;
                let description = description.to_string();
                let mut count = 1;
                while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {
                    count += 1;
                }
                if count > 1 {
                    return Err(de::Error::invalid_length(count, &self));
                }
                Ok(Feature { title, description })
            }
        }

        deserializer.deserialize_map(FeatureVisitor)
    }
}
