//! Surname conventions.
//!
//! A convention decides which family name(s) follow the nick name and in
//! which order. Conventions are stored and exchanged as short codes:
//! - `B`  own family name only
//! - `P`  partner's family name only
//! - `BP` own family name, then partner's
//! - `PB` partner's family name, then own

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which family name(s) appear in a display name and in what order.
///
/// Converting from a code never fails: any code outside `B`, `P`, `BP`,
/// `PB` (including an absent one) becomes [`Convention::Own`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Convention {
    /// `B`: "Alexandra van der Wal"
    #[default]
    Own,
    /// `P`: "Alexandra de Vries"
    Partner,
    /// `BP`: "Alexandra van der Wal - de Vries"
    OwnThenPartner,
    /// `PB`: "Alexandra de Vries - van der Wal"
    PartnerThenOwn,
}

impl Convention {
    /// Every convention, in code listing order.
    pub const ALL: [Convention; 4] = [
        Convention::Own,
        Convention::Partner,
        Convention::OwnThenPartner,
        Convention::PartnerThenOwn,
    ];

    /// Maps a convention code to a convention, falling back to [`Convention::Own`].
    ///
    /// Codes are matched exactly; `"bp"` is not `"BP"`.
    ///
    /// # Examples
    /// ```
    /// use display_name::name::Convention;
    ///
    /// assert_eq!(Convention::from_code("PB"), Convention::PartnerThenOwn);
    /// assert_eq!(Convention::from_code("X"), Convention::Own);
    /// assert_eq!(Convention::from_code(""), Convention::Own);
    /// ```
    pub fn from_code(code: &str) -> Self {
        match code {
            "P" => Convention::Partner,
            "BP" => Convention::OwnThenPartner,
            "PB" => Convention::PartnerThenOwn,
            _ => Convention::Own,
        }
    }

    /// The code this convention is stored as.
    pub fn code(self) -> &'static str {
        match self {
            Convention::Own => "B",
            Convention::Partner => "P",
            Convention::OwnThenPartner => "BP",
            Convention::PartnerThenOwn => "PB",
        }
    }

    /// Returns true when `code` names a convention rather than hitting the fallback.
    ///
    /// # Examples
    /// ```
    /// use display_name::name::Convention;
    ///
    /// assert!(Convention::is_recognized_code("BP"));
    /// assert!(!Convention::is_recognized_code("X"));
    /// ```
    pub fn is_recognized_code(code: &str) -> bool {
        Convention::ALL.iter().any(|c| c.code() == code)
    }

    /// Short human readable description, used in `--list-conventions`.
    pub fn description(self) -> &'static str {
        match self {
            Convention::Own => "own family name",
            Convention::Partner => "partner's family name",
            Convention::OwnThenPartner => "own family name, then partner's",
            Convention::PartnerThenOwn => "partner's family name, then own",
        }
    }

    /// Whether the partner's family name is part of the output.
    pub fn uses_partner_name(self) -> bool {
        !matches!(self, Convention::Own)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Convention {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Convention::from_code(s))
    }
}

impl From<&str> for Convention {
    fn from(code: &str) -> Self {
        Convention::from_code(code)
    }
}

impl From<Option<String>> for Convention {
    fn from(code: Option<String>) -> Self {
        code.as_deref().map(Convention::from_code).unwrap_or_default()
    }
}

impl From<Convention> for String {
    fn from(convention: Convention) -> Self {
        convention.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_recognized() {
        assert_eq!(Convention::from_code("B"), Convention::Own);
        assert_eq!(Convention::from_code("P"), Convention::Partner);
        assert_eq!(Convention::from_code("BP"), Convention::OwnThenPartner);
        assert_eq!(Convention::from_code("PB"), Convention::PartnerThenOwn);
    }

    #[test]
    fn test_from_code_unrecognized_falls_back_to_own() {
        for code in ["X", "", "b", "bp", " B", "BPB", "PP"] {
            assert_eq!(
                Convention::from_code(code),
                Convention::Own,
                "code {code:?} should fall back to Own"
            );
        }
    }

    #[test]
    fn test_code_matches_from_code() {
        for convention in Convention::ALL {
            assert_eq!(Convention::from_code(convention.code()), convention);
            assert!(Convention::is_recognized_code(convention.code()));
        }
    }

    #[test]
    fn test_display_and_from_str() {
        assert_eq!(Convention::OwnThenPartner.to_string(), "BP");
        let parsed: Convention = "P".parse().unwrap();
        assert_eq!(parsed, Convention::Partner);
        let fallback: Convention = "nonsense".parse().unwrap();
        assert_eq!(fallback, Convention::Own);
    }

    #[test]
    fn test_uses_partner_name() {
        assert!(!Convention::Own.uses_partner_name());
        assert!(Convention::Partner.uses_partner_name());
        assert!(Convention::OwnThenPartner.uses_partner_name());
        assert!(Convention::PartnerThenOwn.uses_partner_name());
    }

    #[test]
    fn test_serde_uses_codes() {
        let json = serde_json::to_string(&Convention::PartnerThenOwn).unwrap();
        assert_eq!(json, "\"PB\"");

        let parsed: Convention = serde_json::from_str("\"P\"").unwrap();
        assert_eq!(parsed, Convention::Partner);

        let unknown: Convention = serde_json::from_str("\"Z\"").unwrap();
        assert_eq!(unknown, Convention::Own);

        let null: Convention = serde_json::from_str("null").unwrap();
        assert_eq!(null, Convention::Own);
    }
}
