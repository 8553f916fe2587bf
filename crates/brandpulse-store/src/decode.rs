//! Byte decoding for raw exports.

/// Decode `bytes` as UTF-8, dropping every undecodable sequence.
///
/// A leading byte-order mark is stripped so the first header name matches.
#[must_use]
pub fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    match out.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_is_unchanged() {
        assert_eq!(decode_ignoring_invalid("liberté".as_bytes()), "liberté");
    }

    #[test]
    fn invalid_bytes_are_dropped() {
        // 0xE9 is Latin-1 "é", invalid on its own in UTF-8.
        assert_eq!(decode_ignoring_invalid(b"libert\xE9 yogurt"), "libert yogurt");
    }

    #[test]
    fn truncated_sequence_at_end_is_dropped() {
        assert_eq!(decode_ignoring_invalid(b"ok\xE2\x80"), "ok");
    }

    #[test]
    fn bom_is_stripped() {
        assert_eq!(decode_ignoring_invalid(b"\xEF\xBB\xBFtext,file"), "text,file");
    }
}
