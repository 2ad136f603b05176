//! Lenient UTF-8 decoding for raw input byte strings.

/// Decodes a byte string into a sequence of Unicode code points.
///
/// The scan is structural only: a lead byte matching none of the four
/// UTF-8 patterns is skipped one byte at a time, a sequence whose declared
/// length runs past the end of the input ends the scan, and a continuation
/// byte that does not match `10xxxxxx` cuts the current sequence short
/// while still emitting whatever bits were accumulated so far, resuming at
/// the offending byte. Overlong encodings, surrogates, and values above
/// U+10FFFF are passed through untouched.
pub fn decode_utf8(bytes: &[u8]) -> Vec<u32> {
    let mut code_points = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let lead = bytes[i];
        let (expected_len, seed) = if lead & 0x80 == 0 {
            (1, u32::from(lead))
        } else if lead & 0xE0 == 0xC0 {
            (2, u32::from(lead & 0x1F))
        } else if lead & 0xF0 == 0xE0 {
            (3, u32::from(lead & 0x0F))
        } else if lead & 0xF8 == 0xF0 {
            (4, u32::from(lead & 0x07))
        } else {
            // Not a lead byte; skip it without emitting anything.
            i += 1;
            continue;
        };

        if i + expected_len > bytes.len() {
            // The sequence would run past the end of the input.
            break;
        }

        let mut code_point = seed;
        let mut consumed = 1;
        for &byte in &bytes[i + 1..i + expected_len] {
            if byte & 0xC0 != 0x80 {
                break;
            }
            code_point = (code_point << 6) | u32::from(byte & 0x3F);
            consumed += 1;
        }

        code_points.push(code_point);
        i += consumed;
    }

    code_points
}

#[cfg(test)]
mod tests {
    use super::decode_utf8;

    fn reference(text: &str) -> Vec<u32> {
        text.chars().map(u32::from).collect()
    }

    #[test]
    fn matches_std_for_valid_input() {
        for text in ["", "hello", "火", "grüße", "火水木金土", "a🔥b", "±×÷"] {
            assert_eq!(decode_utf8(text.as_bytes()), reference(text), "input {text:?}");
        }
    }

    #[test]
    fn empty_input_yields_empty_sequence() {
        assert!(decode_utf8(b"").is_empty());
    }

    #[test]
    fn four_byte_sequence() {
        assert_eq!(decode_utf8("🔥".as_bytes()), vec![0x1F525]);
    }

    #[test]
    fn truncated_trailing_sequence_is_dropped() {
        // 0xC2 declares a two-byte sequence but the input ends first.
        assert_eq!(decode_utf8(b"A\xC2"), vec![0x41]);
        assert_eq!(decode_utf8(b"\xE7\x81"), Vec::<u32>::new());
    }

    #[test]
    fn invalid_lead_byte_is_skipped() {
        // 0xFF matches no lead pattern, as does a stray continuation byte.
        assert_eq!(decode_utf8(b"\xFFA"), vec![0x41]);
        assert_eq!(decode_utf8(b"\x80\x80B"), vec![0x42]);
    }

    #[test]
    fn bad_continuation_emits_partial_code_point() {
        // 0xE0 declares three bytes but both continuations are ASCII; the
        // partial accumulation (lead payload only) is still emitted and the
        // scan resumes at the first bad byte.
        assert_eq!(decode_utf8(b"\xE0AA"), vec![0x00, 0x41, 0x41]);

        // One valid continuation before the bad byte contributes its bits.
        let expected = (0x04 << 6) | 0x38;
        assert_eq!(decode_utf8(b"\xE4\xB8A"), vec![expected, 0x41]);
    }

    #[test]
    fn overlong_and_surrogate_forms_pass_through() {
        // Overlong encoding of '/' and a lone surrogate survive the
        // structural checks and come out as their raw bit patterns.
        assert_eq!(decode_utf8(b"\xC0\xAF"), vec![0x2F]);
        assert_eq!(decode_utf8(b"\xED\xA0\x80"), vec![0xD800]);
    }
}
