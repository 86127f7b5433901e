//! Tests for seed classification, expansion and generator construction

#[cfg(test)]
mod tests {
    use pfpgen::seed::{Seed, normalize_seed};
    use rand::Rng;
    use std::time::Duration;

    // Tests digit strings become integers
    // Verified by always producing text seeds
    #[test]
    fn test_numeric_text_is_integer() {
        assert_eq!(Seed::from_text("123"), Seed::Numeric(123));
        assert_eq!(Seed::from_text("007"), Seed::Numeric(7));
        assert!(Seed::from_text("0").is_numeric());
    }

    // Tests non-digit and oversized input stays text
    // Verified by parsing with a lossy float conversion
    #[test]
    fn test_non_numeric_text_stays_text() {
        assert_eq!(Seed::from_text("hello"), Seed::Text("hello".to_string()));
        assert_eq!(Seed::from_text("-5"), Seed::Text("-5".to_string()));
        assert_eq!(Seed::from_text("12a"), Seed::Text("12a".to_string()));
        assert!(!Seed::from_text("18446744073709551616").is_numeric());
        assert!(Seed::from_text("18446744073709551615").is_numeric());
    }

    // Tests text expansion keeps raw bytes and appends a 512-bit digest
    // Verified by hashing without the raw prefix
    #[test]
    fn test_expanded_bytes() {
        let expanded = Seed::from_text("abc").expanded_bytes();
        assert_eq!(expanded.len(), 3 + 64);
        assert_eq!(expanded.get(..3), Some(&b"abc"[..]));
        // First bytes of SHA-512("abc")
        assert_eq!(expanded.get(3..7), Some(&[0xdd, 0xaf, 0x35, 0xa1][..]));

        assert_eq!(Seed::Numeric(258).expanded_bytes(), vec![0, 0, 0, 0, 0, 0, 1, 2]);
    }

    // Tests identical seeds produce identical generator streams
    // Verified by mixing the clock into the generator seed
    #[test]
    fn test_rng_is_deterministic() {
        for seed in [Seed::from_text("hello"), Seed::Numeric(42)] {
            let mut first_rng = seed.rng();
            let mut second_rng = seed.rng();
            let first: Vec<u64> = (0..8).map(|_| first_rng.random()).collect();
            let second: Vec<u64> = (0..8).map(|_| second_rng.random()).collect();
            assert_eq!(first, second);
        }
    }

    // Tests different text gives different streams
    // Verified by ignoring the digest when folding the key
    #[test]
    fn test_rng_differs_between_texts() {
        let a: u64 = Seed::from_text("hello").rng().random();
        let b: u64 = Seed::from_text("hellp").rng().random();
        assert_ne!(a, b);
    }

    // Tests tagged streams are reproducible and independent of the cell stream
    // Verified by returning the plain generator for every tag
    #[test]
    fn test_stream_rng_is_separate() {
        for seed in [Seed::from_text("hello"), Seed::Numeric(42)] {
            let draw = |mut rng: rand::rngs::StdRng| -> Vec<u64> {
                (0..4).map(|_| rng.random()).collect()
            };
            let cells = draw(seed.rng());
            let colors = draw(seed.stream_rng("color"));

            assert_eq!(colors, draw(seed.stream_rng("color")));
            assert_ne!(colors, cells);
            assert_ne!(colors, draw(seed.stream_rng("other")));
        }
    }

    // Tests absent or empty input falls back to the clock
    // Verified by returning a fixed seed for empty input
    #[test]
    fn test_normalize_seed_without_input_uses_clock() {
        let first = normalize_seed(None);
        std::thread::sleep(Duration::from_millis(2));
        let second = normalize_seed(Some(""));
        assert!(first.is_numeric());
        assert!(second.is_numeric());
        assert_ne!(first, second);
    }

    // Tests text input is passed through classification
    // Verified by hashing numeric text
    #[test]
    fn test_normalize_seed_with_input() {
        assert_eq!(normalize_seed(Some("99")), Seed::Numeric(99));
        assert_eq!(normalize_seed(Some("hi")), Seed::Text("hi".to_string()));
    }

    // Tests display reproduces the canonical text
    // Verified by formatting numeric seeds in hex
    #[test]
    fn test_display() {
        assert_eq!(Seed::Numeric(120).to_string(), "120");
        assert_eq!(Seed::from("hello").to_string(), "hello");
        assert_eq!(Seed::from(5u64), Seed::Numeric(5));
    }
}
