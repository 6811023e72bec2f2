//! Display name formatting across all conventions, through the public API.

use display_name::{Convention, NameRecord, format_display_name};

fn alexandra(code: &str) -> NameRecord {
    NameRecord::new("Alexandra", "Wal")
        .with_prefix("van der")
        .with_partner("Vries")
        .with_partner_prefix("de")
        .with_convention(Convention::from_code(code))
}

#[test]
fn test_alexandra_examples() {
    let cases = [
        ("B", "Alexandra van der Wal"),
        ("P", "Alexandra de Vries"),
        ("BP", "Alexandra van der Wal - de Vries"),
        ("PB", "Alexandra de Vries - van der Wal"),
        ("X", "Alexandra van der Wal"),
    ];

    for (code, expected) in cases {
        assert_eq!(
            format_display_name(&alexandra(code)),
            expected,
            "convention {code}"
        );
    }
}

#[test]
fn test_own_convention_without_prefix() {
    let mut record = alexandra("B");
    record.family_name_prefix = None;
    assert_eq!(format_display_name(&record), "Alexandra Wal");
}

#[test]
fn test_unrecognized_codes_match_own_convention() {
    let own = format_display_name(&alexandra("B"));
    for code in ["", "X", "b", "BB", "P B", "unknown"] {
        assert_eq!(format_display_name(&alexandra(code)), own, "code {code:?}");
    }
}

#[test]
fn test_combined_conventions_are_halves_joined_by_separator() {
    let own = format_display_name(&alexandra("B"));
    let partner = format_display_name(&alexandra("P"));
    let own_suffix = own.strip_prefix("Alexandra").unwrap();
    let partner_suffix = partner.strip_prefix("Alexandra").unwrap();

    assert_eq!(
        format_display_name(&alexandra("BP")),
        format!("{own} -{partner_suffix}")
    );
    assert_eq!(
        format_display_name(&alexandra("PB")),
        format!("{partner} -{own_suffix}")
    );
}

#[test]
fn test_absent_prefixes_never_leave_double_spaces() {
    let prefix_choices: [Option<&str>; 3] = [None, Some(""), Some("van")];

    for own_prefix in prefix_choices {
        for partner_prefix in prefix_choices {
            for convention in Convention::ALL {
                let record = NameRecord {
                    nick_name: "Alexandra".to_string(),
                    family_name_prefix: own_prefix.map(str::to_string),
                    family_name: "Wal".to_string(),
                    family_name_partner_prefix: partner_prefix.map(str::to_string),
                    family_name_partner: "Vries".to_string(),
                    convention,
                };
                let name = format_display_name(&record);
                assert!(
                    !name.contains("  "),
                    "double space in {name:?} for {record:?}"
                );
                assert!(!name.ends_with(' '), "trailing space in {name:?}");
            }
        }
    }
}

#[test]
fn test_partner_only_names_ignore_own_fields() {
    let record = NameRecord::new("Sanne", "Bakker")
        .with_prefix("ter")
        .with_partner("Jansen")
        .with_convention(Convention::Partner);
    assert_eq!(format_display_name(&record), "Sanne Jansen");
}

#[test]
fn test_method_and_function_agree() {
    for convention in Convention::ALL {
        let record = alexandra(convention.code());
        assert_eq!(record.display_name(), format_display_name(&record));
    }
}

#[test]
fn test_formatting_from_many_threads() {
    let record = alexandra("PB");
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let record = record.clone();
            std::thread::spawn(move || format_display_name(&record))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "Alexandra de Vries - van der Wal");
    }
}
