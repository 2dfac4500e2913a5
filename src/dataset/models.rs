use serde::{Deserialize, Deserializer, Serialize};

/// One row of the combined games dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRow {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    pub game_name: String,
    pub rating: f64,
    #[serde(default)]
    pub header_image: Option<String>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub genres: Option<String>,
}

/// A single historical rating
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionRecord {
    pub user_id: String,
    pub item_id: String,
    pub rating: f64,
}

impl InteractionRecord {
    pub fn new(user_id: impl Into<String>, item_id: impl Into<String>, rating: f64) -> Self {
        Self {
            user_id: user_id.into(),
            item_id: item_id.into(),
            rating,
        }
    }
}

impl From<&DatasetRow> for InteractionRecord {
    fn from(row: &DatasetRow) -> Self {
        Self::new(row.user_id.clone(), row.game_name.clone(), row.rating)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Text(String),
    Integer(i64),
    Float(f64),
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawUserId::deserialize(deserializer)?;
    Ok(match raw {
        RawUserId::Text(s) => s,
        RawUserId::Integer(i) => i.to_string(),
        RawUserId::Float(f) => f.to_string(),
    })
}
