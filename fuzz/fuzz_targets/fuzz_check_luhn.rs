#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Any input is a verdict, never a panic.
        let _ = siret_luhn::check_generic(s, 10, 0, 0, 64);
        let (ok, normalized) = siret_luhn::check_luhn(s, 10, 0, 64);
        if ok {
            assert!(siret_luhn::is_ascii_digits(&normalized));
        } else {
            assert!(normalized.is_empty());
        }
        let _ = siret_luhn::siret::check_siret(s);
    }
});
