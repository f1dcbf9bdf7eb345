//! Basic transliteration example

use honocoroko_core::{from_honocoroko, to_honocoroko, TransliterationOptions};

fn main() {
    println!("Honocoroko Basic Transliteration Example\n");

    let options = TransliterationOptions::default();
    let samples = [
        "hanacaraka",
        "datasawala",
        "padhajayanya",
        "magabathanga",
        "bakso",
        "bisa 123",
    ];

    for latin in samples {
        let javanese = to_honocoroko(latin, &options);
        let back = from_honocoroko(&javanese, &options);
        println!("{:<14} -> {:<12} -> {}", latin, javanese, back);
    }

    println!("\nUse 'honocoroko to --text <latin>' for the same from the command line");
}
