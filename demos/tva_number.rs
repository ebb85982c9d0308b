use siret_luhn::tva::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== TVA Number Derivation ===\n");

    let inputs = [
        ("FR", "73282932000074"),
        ("france", "443 061 841 00047"),
        ("FR", "73282932000075"), // SIRET key wrong
        ("DE", "73282932000074"), // unsupported country
    ];

    for (country, siret) in &inputs {
        let (ok, result) = generate_tva_number(country, siret);
        if ok {
            println!("  {country} / {siret} => {result}");
        } else {
            println!("  {country} / {siret} => FAILED: {result}");
        }
    }

    println!("\n  Keys tried: 01..={TVA_KEY_MAX}");
}
