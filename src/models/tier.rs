use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::fmt;

/// Economic and display configuration for one payment tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDescriptor {
    pub key: String,
    pub internal_name: String,
    pub display_name: String,
    pub price: Decimal,
    pub burn_multiplier: f64,
    pub xp_multiplier: f64,
    pub streak_cap: u32,
    pub badge: String,
    pub visible: bool,
}

impl fmt::Display for TierDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.key)
    }
}

/// A raw tier identifier as handed over by a handler or UI component.
///
/// Numbers are rendered to the same decimal string a JavaScript object index
/// would use, so `19`, `19.0` and `"19"` all address the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TierId<'a> {
    Key(Cow<'a, str>),
    Absent,
}

impl<'a> TierId<'a> {
    pub fn as_key(&self) -> Option<&str> {
        match self {
            TierId::Key(key) => Some(&**key),
            TierId::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, TierId::Absent)
    }

    fn number(value: f64) -> TierId<'static> {
        if !value.is_finite() {
            return TierId::Absent;
        }

        // i64 range check keeps the integral cast lossless
        if value.fract() == 0.0 && value.abs() < 9.0e15 {
            TierId::Key(Cow::Owned(format!("{}", value as i64)))
        } else {
            TierId::Key(Cow::Owned(format!("{}", value)))
        }
    }
}

impl fmt::Display for TierId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TierId::Key(key) => f.write_str(key),
            TierId::Absent => f.write_str("<absent>"),
        }
    }
}

impl<'a> From<&'a str> for TierId<'a> {
    fn from(key: &'a str) -> Self {
        TierId::Key(Cow::Borrowed(key))
    }
}

impl<'a> From<&'a String> for TierId<'a> {
    fn from(key: &'a String) -> Self {
        TierId::Key(Cow::Borrowed(key.as_str()))
    }
}

impl<'a> From<String> for TierId<'a> {
    fn from(key: String) -> Self {
        TierId::Key(Cow::Owned(key))
    }
}

macro_rules! tier_id_from_integer {
    ($($ty:ty),*) => {
        $(
            impl<'a> From<$ty> for TierId<'a> {
                fn from(value: $ty) -> Self {
                    TierId::Key(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

tier_id_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl<'a> From<f64> for TierId<'a> {
    fn from(value: f64) -> Self {
        TierId::number(value)
    }
}

impl<'a> From<f32> for TierId<'a> {
    fn from(value: f32) -> Self {
        // Widening to f64 would print 19.1 as 19.100000381469727
        if value.is_finite() && value.fract() != 0.0 {
            TierId::Key(Cow::Owned(value.to_string()))
        } else {
            TierId::number(value as f64)
        }
    }
}

impl<'a, T> From<Option<T>> for TierId<'a>
where
    T: Into<TierId<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(TierId::Absent)
    }
}

/// JSON strings and numbers become keys; null and any other shape are absent.
impl<'a> From<&'a serde_json::Value> for TierId<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(key) => TierId::Key(Cow::Borrowed(key.as_str())),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    u.into()
                } else if let Some(i) = n.as_i64() {
                    i.into()
                } else {
                    n.as_f64().map(TierId::number).unwrap_or(TierId::Absent)
                }
            }
            _ => TierId::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_render_like_object_keys() {
        assert_eq!(TierId::from(19u32).as_key(), Some("19"));
        assert_eq!(TierId::from(19.0f64).as_key(), Some("19"));
        assert_eq!(TierId::from(19.5f64).as_key(), Some("19.5"));
        assert_eq!(TierId::from(-3i64).as_key(), Some("-3"));
        assert!(TierId::from(f64::NAN).is_absent());
        assert_eq!(TierId::from(19.1f32).as_key(), Some("19.1"));
        assert_eq!(TierId::from(35.0f32).as_key(), Some("35"));
    }

    #[test]
    fn test_option_and_json_conversions() {
        assert!(TierId::from(None::<&str>).is_absent());
        assert_eq!(TierId::from(Some("35")).as_key(), Some("35"));

        assert_eq!(TierId::from(&json!("FOUNDER")).as_key(), Some("FOUNDER"));
        assert_eq!(TierId::from(&json!(49)).as_key(), Some("49"));
        assert_eq!(TierId::from(&json!(35.0)).as_key(), Some("35"));
        assert!(TierId::from(&json!(null)).is_absent());
        assert!(TierId::from(&json!({"tier": 19})).is_absent());
    }

    #[test]
    fn test_descriptor_serializes_camel_case() {
        let tier = TierDescriptor {
            key: "19".to_string(),
            internal_name: "minted".to_string(),
            display_name: "Minted".to_string(),
            price: Decimal::from(19),
            burn_multiplier: 1.0,
            xp_multiplier: 1.0,
            streak_cap: 7,
            badge: "Minted".to_string(),
            visible: true,
        };
        let value = serde_json::to_value(&tier).unwrap();

        assert_eq!(value["internalName"], "minted");
        assert_eq!(value["streakCap"], 7);
        assert_eq!(value["burnMultiplier"], 1.0);
    }
}
