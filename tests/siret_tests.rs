#![cfg(feature = "siret")]

use siret_luhn::LuhnError;
use siret_luhn::siret::*;

// ---------------------------------------------------------------------------
// SIRET
// ---------------------------------------------------------------------------

#[test]
fn valid_siret() {
    assert_eq!(check_siret("73282932000074"), (true, "73282932000074".into()));
    assert_eq!(check_siret("35600000000048"), (true, "35600000000048".into()));
    assert_eq!(check_siret("44306184100047"), (true, "44306184100047".into()));
}

#[test]
fn spaced_siret_normalized() {
    assert_eq!(check_siret("732 829 320 00074"), (true, "73282932000074".into()));
    assert_eq!(check_siret("  73282932000074\n"), (true, "73282932000074".into()));
}

#[test]
fn normalized_value_is_stable() {
    let (_, once) = check_siret(" 732 829 320 00074 ");
    assert_eq!(check_siret(&once), (true, once.clone()));
}

#[test]
fn wrong_key() {
    assert_eq!(check_siret("73282932000075"), (false, String::new()));
}

#[test]
fn letter_inside() {
    assert_eq!(check_siret("1234567A901234"), (false, String::new()));
}

#[test]
fn too_short() {
    assert_eq!(check_siret("123"), (false, String::new()));
}

#[test]
fn empty() {
    assert_eq!(check_siret(""), (false, String::new()));
    assert_eq!(check_siret("   "), (false, String::new()));
}

#[test]
fn tab_separator_rejected() {
    assert_eq!(check_siret("732829320\t00074"), (false, String::new()));
}

#[test]
fn fullwidth_digits_rejected() {
    assert_eq!(check_siret("７３２８２９３２０００７４"), (false, String::new()));
}

#[test]
fn typed_error_kinds() {
    assert!(matches!(validate_siret("123"), Err(LuhnError::Length { len: 3, .. })));
    assert!(matches!(
        validate_siret("1234567A901234"),
        Err(LuhnError::NonDigit { position: 7, ch: 'A' })
    ));
    assert!(matches!(
        validate_siret("73282932000075"),
        Err(LuhnError::ChecksumMismatch { .. })
    ));
}

#[test]
fn siret_parts() {
    let siret: Siret = "443 061 841 00047".parse().unwrap();
    assert_eq!(siret.siren(), "443061841");
    assert_eq!(siret.nic(), "00047");
    assert_eq!(siret_from_parts(&siret), siret.as_str());
}

fn siret_from_parts(s: &Siret) -> String {
    format!("{}{}", s.siren(), s.nic())
}

// ---------------------------------------------------------------------------
// SIREN
// ---------------------------------------------------------------------------

#[test]
fn siren_of_valid_siret_is_valid() {
    for raw in ["73282932000074", "35600000000048", "44306184100047"] {
        let siren = siren_from_siret(raw);
        assert_eq!(siren.len(), SIREN_LEN);
        assert!(check_siren(&siren).0, "{siren}");
    }
}

#[test]
fn siren_wrong_length() {
    assert_eq!(check_siren("73282932"), (false, String::new()));
}
