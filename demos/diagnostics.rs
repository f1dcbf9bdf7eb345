//! Collecting diagnostics for unmapped characters

use honocoroko_core::{
    to_honocoroko_with, try_to_honocoroko, RecordingSink, TransliterationOptions,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Honocoroko Diagnostics Example\n");

    let sink = RecordingSink::new();
    let lenient = TransliterationOptions::new().convert_special_chars(true);
    let out = to_honocoroko_with("email@domain.com", &lenient, &sink);

    println!("Output: {}", out);
    for diagnostic in sink.diagnostics() {
        println!("  offset {:>3}: {}", diagnostic.offset, diagnostic);
    }

    let strict = lenient.strict(true);
    match try_to_honocoroko("email@domain.com", &strict) {
        Ok(out) => println!("\nStrict output: {}", out),
        Err(e) => println!("\nStrict mode rejected input: {}", e),
    }

    let clean = try_to_honocoroko("sugeng enjing", &strict)?;
    println!("Strict output for clean input: {}", clean);

    Ok(())
}
