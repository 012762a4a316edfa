// ---------------------------------------------------------------------------
// Latin-1 (ISO-8859-1) text codec for object labels
// ---------------------------------------------------------------------------

/// Decode Latin-1 bytes. Every byte is the code point of the same value, so
/// this cannot fail.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encode text as Latin-1, or `None` if a character is above U+00FF.
pub fn encode(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(c).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_round_trips() {
        for label in ["cat", "dog", "Boats 12", ""] {
            let bytes = encode(label).unwrap();
            assert_eq!(bytes, label.as_bytes());
            assert_eq!(decode(&bytes), label);
        }
    }

    #[test]
    fn high_bytes_map_to_latin1_code_points() {
        assert_eq!(decode(&[0x63, 0x61, 0x66, 0xE9]), "café");
        assert_eq!(decode(&[0x80, 0xFF]), "\u{80}\u{FF}");
    }

    #[test]
    fn encode_rejects_wide_characters() {
        assert_eq!(encode("caf\u{e9}"), Some(vec![0x63, 0x61, 0x66, 0xE9]));
        assert_eq!(encode("€"), None);
    }
}
