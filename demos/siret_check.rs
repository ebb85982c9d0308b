use siret_luhn::core::*;
use siret_luhn::siret::*;

fn main() {
    // RUST_LOG=siret_luhn=debug shows why each value was rejected
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Card Numbers (generic check) ===\n");

    let cards = [
        "4532015112830366",
        "4111111111111111",
        "4111111111111112", // wrong check digit
        "+453201511283036", // sign
    ];
    for card in &cards {
        println!("  {card} => {}", check_generic(card, 10, 0, 13, 19));
    }

    println!("\n=== SIRET Validation ===\n");

    let sirets = [
        "732 829 320 00074",
        "35600000000048",
        "73282932000075", // wrong key
        "1234567A901234", // letter
        "123",            // too short
    ];
    for raw in &sirets {
        match validate_siret(raw) {
            Ok(siret) => println!(
                "  {raw} => valid (siren={}, nic={})",
                siret.siren(),
                siret.nic()
            ),
            Err(e) => println!("  {raw} => INVALID: {e}"),
        }
    }

    println!("\n=== Check Digit ===\n");

    let payload = "7328293200007";
    if let Some(key) = check_digit(payload, DoublingRule::EvenCounterFromEnd) {
        println!("  {payload} + {key}");
    }
}
