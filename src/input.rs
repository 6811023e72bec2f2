//! Reading name records from JSON documents.
//!
//! Accepted shapes, each either alone or inside a JSON array:
//! - a person document: `{ "Name": { "NickName": ..., ... } }`
//! - a bare name record: `{ "nickName": ..., "familyName": ..., ... }`

use serde::de::{self, Deserialize, Deserializer};
use serde_json::{Map, Value};
use tokio::io::AsyncReadExt;

use crate::constants::STDIN_PATH;
use crate::error::AppError;
use crate::name::{NameRecord, Person};

const PERSON_KEYS: [&str; 2] = ["Name", "name"];
const RECORD_KEYS: [&str; 2] = ["nickName", "NickName"];

/// One object of the input, told apart by its keys.
///
/// An object with a `Name` key must be a valid person document. Without
/// one, the object must carry a nick name to be read as a bare record.
enum Entry {
    Person(Person),
    Record(NameRecord),
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let has_any = |keys: &[&str]| keys.iter().any(|key| object.contains_key(*key));

        if has_any(&PERSON_KEYS) {
            Person::deserialize(Value::Object(object))
                .map(Entry::Person)
                .map_err(de::Error::custom)
        } else if has_any(&RECORD_KEYS) {
            NameRecord::deserialize(Value::Object(object))
                .map(Entry::Record)
                .map_err(de::Error::custom)
        } else {
            Err(de::Error::custom(
                "expected a person document with a `Name` key or a name record with `nickName`",
            ))
        }
    }
}

impl From<Entry> for NameRecord {
    fn from(entry: Entry) -> Self {
        match entry {
            Entry::Person(person) => person.into(),
            Entry::Record(record) => record,
        }
    }
}

/// Parses a JSON document into name records, keeping document order.
///
/// # Errors
/// * `AppError::Input` - The document is empty
/// * `AppError::InputParse` - The document is not JSON or has an unsupported shape
///
/// # Examples
/// ```
/// use display_name::input::parse_records;
///
/// let records = parse_records(r#"{"Name": {"NickName": "Alexandra", "FamilyName": "Wal"}}"#).unwrap();
/// assert_eq!(records[0].display_name(), "Alexandra Wal");
/// ```
pub fn parse_records(content: &str) -> Result<Vec<NameRecord>, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::input_error("Name input is empty"));
    }

    let records = match serde_json::from_str::<Value>(content)? {
        Value::Array(items) => items
            .into_iter()
            .map(|item| Entry::deserialize(item).map(NameRecord::from))
            .collect::<Result<Vec<_>, _>>()?,
        other => vec![Entry::deserialize(other)?.into()],
    };

    Ok(records)
}

/// Reads and parses name records from a file, or from stdin when `path` is `-`.
pub async fn read_records(path: &str) -> Result<Vec<NameRecord>, AppError> {
    let content = if path == STDIN_PATH {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        buffer
    } else {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::input_error(format!("Cannot read name input '{path}': {e}"))
        })?
    };

    let records = parse_records(&content)?;
    tracing::debug!("Read {} name record(s) from {path}", records.len());
    Ok(records)
}
