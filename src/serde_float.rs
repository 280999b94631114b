//! Serde helpers for floats that may be infinite.
//!
//! Finite values are written as numbers; infinities and NaN as the strings
//! `"inf"`, `"-inf"` and `"nan"`, since formats like JSON have no literal for
//! them. Both forms are accepted when reading.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(f64),
    Text(String),
}

/// `f64` that serializes through this module.
struct Float(f64);

impl Serialize for Float {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Float {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize(deserializer).map(Float)
    }
}

pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else if value.is_nan() {
        serializer.serialize_str("nan")
    } else if *value > 0.0 {
        serializer.serialize_str("inf")
    } else {
        serializer.serialize_str("-inf")
    }
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => match text.as_str() {
            "inf" | "+inf" => Ok(f64::INFINITY),
            "-inf" => Ok(f64::NEG_INFINITY),
            "nan" => Ok(f64::NAN),
            other => Err(serde::de::Error::custom(format!(
                "invalid float '{other}'"
            ))),
        },
    }
}

pub mod vec {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| Float(*v)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<f64>, D::Error> {
        let values = Vec::<Float>::deserialize(deserializer)?;
        Ok(values.into_iter().map(|v| v.0).collect())
    }
}

pub mod option {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&Float(*v)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Ok(Option::<Float>::deserialize(deserializer)?.map(|v| v.0))
    }
}

pub mod option_vec {
    use super::*;

    pub fn serialize<S: Serializer>(
        values: &Option<Vec<f64>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match values {
            Some(values) => {
                serializer.serialize_some(&values.iter().map(|v| Float(*v)).collect::<Vec<_>>())
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<f64>>, D::Error> {
        let values = Option::<Vec<Float>>::deserialize(deserializer)?;
        Ok(values.map(|values| values.into_iter().map(|v| v.0).collect()))
    }
}

pub mod option_pair {
    use super::*;

    pub fn serialize<S: Serializer>(
        value: &Option<(f64, f64)>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some((a, b)) => serializer.serialize_some(&(Float(*a), Float(*b))),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<(f64, f64)>, D::Error> {
        Ok(Option::<(Float, Float)>::deserialize(deserializer)?.map(|(a, b)| (a.0, b.0)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Bounds {
        #[serde(with = "super")]
        lower: f64,
        #[serde(with = "super::vec")]
        uppers: Vec<f64>,
        #[serde(with = "super::option")]
        period: Option<f64>,
    }

    #[test]
    fn infinities_are_written_as_strings() {
        let b = Bounds {
            lower: f64::NEG_INFINITY,
            uppers: vec![1.0, f64::INFINITY],
            period: None,
        };
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"{"lower":"-inf","uppers":[1.0,"inf"],"period":null}"#);
        assert_eq!(serde_json::from_str::<Bounds>(&json).unwrap(), b);
    }

    #[test]
    fn plain_numbers_are_accepted() {
        let b: Bounds = serde_json::from_str(r#"{"lower":0,"uppers":[2.5],"period":360}"#).unwrap();
        assert_eq!(b.lower, 0.0);
        assert_eq!(b.uppers, vec![2.5]);
        assert_eq!(b.period, Some(360.0));
    }

    #[test]
    fn unknown_text_is_rejected() {
        let result = serde_json::from_str::<Bounds>(r#"{"lower":"big","uppers":[],"period":null}"#);
        assert!(result.is_err());
    }
}
