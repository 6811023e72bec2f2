//! Display name formatting.
//!
//! The display name is the nick name followed by one or two surname
//! segments. A surname segment is the optional prefix and the family name,
//! each preceded by a single space. Two segments are joined with `" -"`.

use super::convention::Convention;
use super::record::NameRecord;
use crate::constants::separators::{SEGMENT, SURNAME_PAIR};

/// Formats a person's display name according to the record's convention.
///
/// Never fails. Absent or empty prefixes are skipped without leaving a
/// double space; an empty family name still gets its leading space.
///
/// # Arguments
/// * `record` - The name parts and the convention to apply
///
/// # Returns
/// * `String` - The formatted display name
///
/// # Examples
/// ```
/// use display_name::name::{Convention, NameRecord, format_display_name};
///
/// let record = NameRecord::new("Alexandra", "Wal")
///     .with_prefix("van der")
///     .with_partner("Vries")
///     .with_partner_prefix("de");
///
/// let own = record.clone().with_convention(Convention::Own);
/// assert_eq!(format_display_name(&own), "Alexandra van der Wal");
///
/// let partner = record.clone().with_convention(Convention::Partner);
/// assert_eq!(format_display_name(&partner), "Alexandra de Vries");
///
/// let combined = record.with_convention(Convention::PartnerThenOwn);
/// assert_eq!(format_display_name(&combined), "Alexandra de Vries - van der Wal");
/// ```
pub fn format_display_name(record: &NameRecord) -> String {
    let mut name = record.nick_name.clone();

    match record.convention {
        Convention::Own => push_own_surname(&mut name, record),
        Convention::Partner => push_partner_surname(&mut name, record),
        Convention::OwnThenPartner => {
            push_own_surname(&mut name, record);
            name.push_str(SURNAME_PAIR);
            push_partner_surname(&mut name, record);
        }
        Convention::PartnerThenOwn => {
            push_partner_surname(&mut name, record);
            name.push_str(SURNAME_PAIR);
            push_own_surname(&mut name, record);
        }
    }

    name
}

fn push_own_surname(name: &mut String, record: &NameRecord) {
    push_surname(name, record.own_prefix(), &record.family_name);
}

fn push_partner_surname(name: &mut String, record: &NameRecord) {
    push_surname(name, record.partner_prefix(), &record.family_name_partner);
}

/// Appends `" {prefix}"` when a prefix is given, then `" {family_name}"`.
fn push_surname(name: &mut String, prefix: Option<&str>, family_name: &str) {
    if let Some(prefix) = prefix {
        name.push(SEGMENT);
        name.push_str(prefix);
    }
    name.push(SEGMENT);
    name.push_str(family_name);
}
