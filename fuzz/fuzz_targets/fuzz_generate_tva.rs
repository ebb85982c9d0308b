#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // first two chars are the country, the rest the SIRET
        let split = s.char_indices().nth(2).map_or(s.len(), |(i, _)| i);
        let (country, siret) = s.split_at(split);
        let (ok, tva) = siret_luhn::tva::generate_tva_number(country, siret);
        if ok {
            assert_eq!(tva.len(), 13);
            assert!(siret_luhn::check_luhn(&tva[2..], 10, 11, 11).0);
        }
    }
});
