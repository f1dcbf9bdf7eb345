//! Fuzzing entry points for honocoroko-core
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_forward

use honocoroko_core::{NullSink, TransliterationOptions};

fn options_from(flags: u8) -> TransliterationOptions {
    TransliterationOptions::new()
        .convert_special_chars(flags & 0b01 != 0)
        .strict(flags & 0b10 != 0)
}

pub fn fuzz_forward(data: &[u8]) {
    use honocoroko_core::{to_honocoroko_with, try_to_honocoroko};

    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let options = options_from(flags);

    // Should never panic, and strict mode only ever adds an error
    let out = to_honocoroko_with(&text, &options, &NullSink);
    if let Ok(strict_out) = try_to_honocoroko(&text, &options) {
        assert_eq!(strict_out, out);
    }
}

pub fn fuzz_reverse(data: &[u8]) {
    use honocoroko_core::{from_honocoroko_with, try_from_honocoroko};

    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let text = String::from_utf8_lossy(rest);
    let options = options_from(flags);

    let out = from_honocoroko_with(&text, &options, &NullSink);
    if let Ok(strict_out) = try_from_honocoroko(&text, &options) {
        assert_eq!(strict_out, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuzz_forward_empty() {
        fuzz_forward(&[]);
        fuzz_forward(&[0]);
    }

    #[test]
    fn test_fuzz_forward_random() {
        fuzz_forward(&[0x03, 0x12, 0x34, 0x56, 0x78]);
        fuzz_forward(b"\x01hanacaraka?@\xff\xfe");
    }

    #[test]
    fn test_fuzz_reverse_empty() {
        fuzz_reverse(&[]);
        fuzz_reverse(&[2]);
    }

    #[test]
    fn test_fuzz_reverse_random() {
        fuzz_reverse(&[0xFF; 1024]);
        let mut data = vec![0x02];
        data.extend_from_slice("ꦏ꧀ꦱꦺꦴ꧊꧋ꦟ".as_bytes());
        fuzz_reverse(&data);
    }
}
