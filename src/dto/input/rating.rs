use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Rating {
    pub username: Option<String>,
    #[serde(default, deserialize_with = "de_rating::deserialize")]
    pub rating: Option<i64>,
    pub review: Option<String>,
}

mod de_rating {
    //!
    //! Rating forms may post the value as a string ("5", "4 stars").
    //! Leading integer is taken, text without one counts as missing.
    //!

    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RatingValue {
        Integer(i64),
        Float(f64),
        Text(String),
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        let value = Option::<RatingValue>::deserialize(d)?;

        let rating = value.and_then(|value| match value {
            RatingValue::Integer(rating) => Some(rating),
            RatingValue::Float(rating) => rating.is_finite().then(|| rating.trunc() as i64),
            RatingValue::Text(rating) => leading_integer(&rating),
        });

        Ok(rating)
    }

    fn leading_integer(text: &str) -> Option<i64> {
        let text = text.trim_start();
        let (sign, digits) = match text.strip_prefix('-') {
            Some(digits) => (-1, digits),
            None => (1, text.strip_prefix('+').unwrap_or(text)),
        };
        let end = digits
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(digits.len());

        digits[..end].parse::<i64>().ok().map(|value| sign * value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn rating(json: &str) -> Option<i64> {
        serde_json::from_str::<Rating>(json).unwrap().rating
    }

    #[test]
    fn rating_json_deserialize_number() {
        assert_eq!(rating(r#"{ "rating": 5 }"#), Some(5));
    }

    #[test]
    fn rating_json_deserialize_numeric_string() {
        assert_eq!(rating(r#"{ "rating": "5" }"#), Some(5));
        assert_eq!(rating(r#"{ "rating": " 4 stars" }"#), Some(4));
        assert_eq!(rating(r#"{ "rating": "-3" }"#), Some(-3));
    }

    #[test]
    fn rating_json_deserialize_fraction_truncated() {
        assert_eq!(rating(r#"{ "rating": 4.7 }"#), Some(4));
    }

    #[test]
    fn rating_json_deserialize_text_without_number() {
        assert_eq!(rating(r#"{ "rating": "great" }"#), None);
        assert_eq!(rating(r#"{ "rating": "" }"#), None);
    }

    #[test]
    fn rating_json_deserialize_missing_or_null() {
        assert_eq!(rating(r#"{ "username": "alice" }"#), None);
        assert_eq!(rating(r#"{ "rating": null }"#), None);
    }

    #[test]
    fn rating_json_deserialize_boolean_rejected() {
        assert!(serde_json::from_str::<Rating>(r#"{ "rating": true }"#).is_err());
    }
}
