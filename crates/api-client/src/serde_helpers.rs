//! Custom decoders for fields the API does not render consistently.
//!
//! - Maps that are empty may arrive as `[]` instead of `{}`.
//! - Some user identifiers arrive either as a JSON number or as a numeric
//!   string.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

/// Decode an object map, accepting an empty array (or `null`) as an empty map.
pub fn map_or_empty_array<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct MapOrArray<V>(PhantomData<V>);

    impl<'de, V: Deserialize<'de>> Visitor<'de> for MapOrArray<V> {
        type Value = BTreeMap<String, V>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object or an empty array")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut out = BTreeMap::new();
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                out.insert(key, value);
            }
            Ok(out)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            if seq.next_element::<de::IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(1, &"an empty array"));
            }
            Ok(BTreeMap::new())
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeMap::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(BTreeMap::new())
        }
    }

    deserializer.deserialize_any(MapOrArray(PhantomData))
}

/// Decode an integer that may be encoded as a JSON number or numeric string.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntOrString;

    impl Visitor<'_> for IntOrString {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an unsigned integer or a numeric string")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_unit<E: de::Error>(self) -> Result<u64, E> {
            Ok(0)
        }
    }

    deserializer.deserialize_any(IntOrString)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Mapping {
        #[serde(default, deserialize_with = "map_or_empty_array")]
        mapping: BTreeMap<String, BTreeMap<String, String>>,
    }

    #[derive(Debug, Deserialize)]
    struct Owner {
        #[serde(deserialize_with = "int_or_string")]
        user_id: u64,
    }

    #[test]
    fn test_map_from_object() {
        let m: Mapping =
            serde_json::from_str(r#"{"mapping": {"uk": {"locale": "uk-UA"}}}"#).unwrap();
        assert_eq!(m.mapping["uk"]["locale"], "uk-UA");
    }

    #[test]
    fn test_map_from_empty_array() {
        let m: Mapping = serde_json::from_str(r#"{"mapping": []}"#).unwrap();
        assert!(m.mapping.is_empty());

        let m: Mapping = serde_json::from_str(r#"{"mapping": null}"#).unwrap();
        assert!(m.mapping.is_empty());

        let m: Mapping = serde_json::from_str("{}").unwrap();
        assert!(m.mapping.is_empty());
    }

    #[test]
    fn test_map_rejects_non_empty_array() {
        let m: Result<Mapping, _> = serde_json::from_str(r#"{"mapping": [1]}"#);
        assert!(m.is_err());
    }

    #[test]
    fn test_int_or_string() {
        let o: Owner = serde_json::from_str(r#"{"user_id": 42}"#).unwrap();
        assert_eq!(o.user_id, 42);

        let o: Owner = serde_json::from_str(r#"{"user_id": "42"}"#).unwrap();
        assert_eq!(o.user_id, 42);

        let o: Result<Owner, _> = serde_json::from_str(r#"{"user_id": "abc"}"#);
        assert!(o.is_err());
    }
}
