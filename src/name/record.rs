//! Name records and person documents.
//!
//! Field names follow the upstream person data: camelCase (`nickName`) is
//! written, and both camelCase and PascalCase (`NickName`) are accepted.

use serde::{Deserialize, Deserializer, Serialize};

use super::convention::Convention;
use super::formatting::format_display_name;

/// The name parts of one person plus the convention to format them with.
///
/// A missing `nickName`, `familyName` or `familyNamePartner` (absent or
/// `null`) reads as the empty string. A prefix is only considered present
/// when it is `Some` and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameRecord {
    #[serde(default, alias = "NickName", deserialize_with = "null_as_empty")]
    pub nick_name: String,

    #[serde(default, alias = "FamilyNamePrefix", skip_serializing_if = "Option::is_none")]
    pub family_name_prefix: Option<String>,

    #[serde(default, alias = "FamilyName", deserialize_with = "null_as_empty")]
    pub family_name: String,

    #[serde(
        default,
        alias = "FamilyNamePartnerPrefix",
        skip_serializing_if = "Option::is_none"
    )]
    pub family_name_partner_prefix: Option<String>,

    #[serde(default, alias = "FamilyNamePartner", deserialize_with = "null_as_empty")]
    pub family_name_partner: String,

    #[serde(default, alias = "Convention")]
    pub convention: Convention,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Treats `None` and `""` the same way.
fn present(prefix: &Option<String>) -> Option<&str> {
    prefix.as_deref().filter(|p| !p.is_empty())
}

impl NameRecord {
    /// Creates a record with the own family name and the `B` convention.
    ///
    /// # Examples
    /// ```
    /// use display_name::name::NameRecord;
    ///
    /// let record = NameRecord::new("Alexandra", "Wal").with_prefix("van der");
    /// assert_eq!(record.display_name(), "Alexandra van der Wal");
    /// ```
    pub fn new(nick_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            nick_name: nick_name.into(),
            family_name: family_name.into(),
            ..Self::default()
        }
    }

    /// Sets the particle placed before the own family name.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.family_name_prefix = Some(prefix.into());
        self
    }

    /// Sets the partner's family name.
    pub fn with_partner(mut self, family_name: impl Into<String>) -> Self {
        self.family_name_partner = family_name.into();
        self
    }

    /// Sets the particle placed before the partner's family name.
    pub fn with_partner_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.family_name_partner_prefix = Some(prefix.into());
        self
    }

    pub fn with_convention(mut self, convention: Convention) -> Self {
        self.convention = convention;
        self
    }

    /// Own family name prefix, if present and non-empty.
    pub fn own_prefix(&self) -> Option<&str> {
        present(&self.family_name_prefix)
    }

    /// Partner family name prefix, if present and non-empty.
    pub fn partner_prefix(&self) -> Option<&str> {
        present(&self.family_name_partner_prefix)
    }

    /// Formats this record. See [`format_display_name`].
    pub fn display_name(&self) -> String {
        format_display_name(self)
    }
}

/// A person document carrying a name record under `Name`.
///
/// Other fields of the document are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    #[serde(rename = "Name", alias = "name")]
    pub name: NameRecord,
}

impl Person {
    pub fn new(name: NameRecord) -> Self {
        Self { name }
    }

    pub fn display_name(&self) -> String {
        self.name.display_name()
    }
}

impl From<Person> for NameRecord {
    fn from(person: Person) -> Self {
        person.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_prefix() {
        let record = NameRecord::new("Alexandra", "Wal").with_prefix("van der");
        assert_eq!(record.own_prefix(), Some("van der"));
        assert_eq!(record.partner_prefix(), None);
    }

    #[test]
    fn test_empty_prefix_is_absent() {
        let record = NameRecord::new("Alexandra", "Wal")
            .with_prefix("")
            .with_partner("Vries")
            .with_partner_prefix("");
        assert_eq!(record.own_prefix(), None);
        assert_eq!(record.partner_prefix(), None);
    }

    #[test]
    fn test_builder_defaults() {
        let record = NameRecord::new("Alexandra", "Wal");
        assert_eq!(record.convention, Convention::Own);
        assert_eq!(record.family_name_prefix, None);
        assert_eq!(record.family_name_partner, "");
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "nickName": "Alexandra",
            "familyNamePrefix": "van der",
            "familyName": "Wal",
            "familyNamePartnerPrefix": "de",
            "familyNamePartner": "Vries",
            "convention": "BP"
        }"#;
        let record: NameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.nick_name, "Alexandra");
        assert_eq!(record.own_prefix(), Some("van der"));
        assert_eq!(record.partner_prefix(), Some("de"));
        assert_eq!(record.convention, Convention::OwnThenPartner);
    }

    #[test]
    fn test_deserialize_pascal_case() {
        let json = r#"{
            "NickName": "Alexandra",
            "FamilyName": "Wal",
            "FamilyNamePartner": "Vries",
            "Convention": "P"
        }"#;
        let record: NameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.nick_name, "Alexandra");
        assert_eq!(record.family_name, "Wal");
        assert_eq!(record.family_name_partner, "Vries");
        assert_eq!(record.convention, Convention::Partner);
    }

    #[test]
    fn test_deserialize_nulls_and_missing_fields() {
        let json = r#"{
            "nickName": "Alexandra",
            "familyNamePrefix": null,
            "familyName": null
        }"#;
        let record: NameRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.family_name_prefix, None);
        assert_eq!(record.family_name, "");
        assert_eq!(record.family_name_partner, "");
        assert_eq!(record.convention, Convention::Own);
    }

    #[test]
    fn test_serialize_skips_absent_prefixes() {
        let record = NameRecord::new("Alexandra", "Wal");
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("familyNamePrefix"), "json: {json}");
        assert!(json.contains("\"convention\":\"B\""), "json: {json}");
    }

    #[test]
    fn test_person_document() {
        let json = r#"{
            "Id": 42,
            "Name": {
                "NickName": "Alexandra",
                "FamilyNamePrefix": "van der",
                "FamilyName": "Wal",
                "Convention": "B"
            }
        }"#;
        let person: Person = serde_json::from_str(json).unwrap();
        assert_eq!(person.display_name(), "Alexandra van der Wal");
        let record: NameRecord = person.into();
        assert_eq!(record.family_name, "Wal");
    }
}
