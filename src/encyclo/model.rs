use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category applied to an article when the user supplies none.
pub const DEFAULT_CATEGORY: &str = "uncategorized";

/// The whole persisted database: username -> account record.
///
/// A BTreeMap keeps the on-disk JSON deterministic between writes.
pub type Database = BTreeMap<String, Account>;

/// One registered user: password digest, signup time and their articles.
///
/// Field names follow the persisted schema (`password`, `created`,
/// `encyclopedia`), which predates this implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "password")]
    pub password_hash: String,

    #[serde(rename = "created")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "encyclopedia", default)]
    pub articles: BTreeMap<String, Article>,
}

impl Account {
    pub fn new(password_hash: String) -> Self {
        Self {
            password_hash,
            created_at: Utc::now(),
            articles: BTreeMap::new(),
        }
    }
}

/// One encyclopedia entry. The title is the key in the owning account's
/// article map, not a field here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Never empty: absence normalizes to `[DEFAULT_CATEGORY]` on load.
    #[serde(
        rename = "category",
        default = "default_categories",
        deserialize_with = "deserialize_categories"
    )]
    pub categories: Vec<String>,

    pub content: String,

    /// Raw image bytes, stored inline as base64 in the JSON file.
    #[serde(default, with = "image_payload")]
    pub image: Option<Vec<u8>>,

    #[serde(rename = "created")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "updated", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Article {
    pub fn new(categories: Vec<String>, content: String, image: Option<Vec<u8>>) -> Self {
        Self {
            categories: normalize_categories(categories),
            content,
            image,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

fn default_categories() -> Vec<String> {
    vec![DEFAULT_CATEGORY.to_string()]
}

/// Split a raw category field on commas, trim each fragment and drop empty
/// ones. An empty result falls back to the default category.
pub fn parse_categories(raw: &str) -> Vec<String> {
    let cats: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();
    normalize_categories(cats)
}

/// Dedup (first occurrence wins, order preserved) and apply the default
/// category when the list ends up empty.
pub fn normalize_categories(cats: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(cats.len());
    for cat in cats {
        if !cat.is_empty() && !seen.contains(&cat) {
            seen.push(cat);
        }
    }
    if seen.is_empty() {
        seen.push(DEFAULT_CATEGORY.to_string());
    }
    seen
}

/// Older files stored `"category": "Fruit"` as a bare string. Accept both
/// forms on load so internal logic only ever sees a sequence.
fn deserialize_categories<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum CategoryField {
        One(String),
        Many(Vec<String>),
    }

    let cats = match Option::<CategoryField>::deserialize(deserializer)? {
        None => Vec::new(),
        Some(CategoryField::One(s)) => {
            let s = s.trim().to_string();
            if s.is_empty() {
                Vec::new()
            } else {
                vec![s]
            }
        }
        Some(CategoryField::Many(v)) => v,
    };
    Ok(normalize_categories(cats))
}

/// Serde adapter for the inline image field: `Option<Vec<u8>>` in memory,
/// base64 string or null in the file.
mod image_payload {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bytes: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        bytes
            .as_ref()
            .map(|b| STANDARD.encode(b))
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(encoded) => STANDARD
                .decode(encoded.as_bytes())
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
