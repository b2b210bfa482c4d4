use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Text(String),
}

// the frontend sends ids and select values as numbers or as strings like "3"
pub fn deserialize_int_or_numeric_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Text(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&text), &"an integer id")),
    }
}
