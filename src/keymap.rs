// Copyright 2016 Phillip Oppermann, Calvin Lee and JJ Garzella.
// See the README.md file at the top-level directory of this
// distribution.
//
// Licensed under the MIT license <LICENSE or
// http://opensource.org/licenses/MIT>, at your option.
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Scan-set-2 make-code to ASCII translation for the US layout.

/// Lower-case ASCII by make-code index, 8 entries per row.
/// Entries of 0 are keys with no ASCII value (or no key at all).
const LOWER: [u8; 128] =
    [0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, b'\t', b'`', 0,
     0, 0, 0, 0, 0, b'q', b'1', 0,
     0, 0, b'z', b's', b'a', b'w', b'2', 0,
     0, b'c', b'x', b'd', b'e', b'4', b'3', 0,
     0, b' ', b'v', b'f', b't', b'r', b'5', 0,
     0, b'n', b'b', b'h', b'g', b'y', b'6', 0,
     0, 0, b'm', b'j', b'u', b'7', b'8', 0,
     0, b',', b'k', b'i', b'o', b'0', b'9', 0,
     0, b'.', b'/', b'l', b';', b'p', b'-', 0,
     0, 0, b'\'', 0, b'[', b'=', 0, 0,
     0, 0, b'\n', b']', 0, b'\\', 0, 0,
     0, 0, 0, 0, 0, 0, b'\x08', 0,
     0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, b'\x1b', 0,
     0, 0, 0, 0, 0, 0, 0, 0];

/// Upper-case ASCII by make-code index. Control positions (tab, enter,
/// backspace, escape) are identical to `LOWER`; shift does not change
/// control characters.
const UPPER: [u8; 128] =
    [0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, b'\t', b'~', 0,
     0, 0, 0, 0, 0, b'Q', b'!', 0,
     0, 0, b'Z', b'S', b'A', b'W', b'@', 0,
     0, b'C', b'X', b'D', b'E', b'$', b'#', 0,
     0, b' ', b'V', b'F', b'T', b'R', b'%', 0,
     0, b'N', b'B', b'H', b'G', b'Y', b'^', 0,
     0, 0, b'M', b'J', b'U', b'&', b'*', 0,
     0, b'<', b'K', b'I', b'O', b')', b'(', 0,
     0, b'>', b'?', b'L', b':', b'P', b'_', 0,
     0, 0, b'"', 0, b'{', b'+', 0, 0,
     0, 0, b'\n', b'}', 0, b'|', 0, 0,
     0, 0, 0, 0, 0, 0, b'\x08', 0,
     0, 0, 0, 0, 0, 0, 0, 0,
     0, 0, 0, 0, 0, 0, b'\x1b', 0,
     0, 0, 0, 0, 0, 0, 0, 0];

/// Returns the ASCII value of `code` with the given shift state, or 0 if
/// the key has no ASCII value.
///
/// The tables span the scan-set-2 make-code range 0x00..0x80; anything
/// above is rejected here so callers never index out of bounds. A real
/// keyboard only sends such bytes as protocol prefixes (0xE0, 0xF0, ...)
/// which never reach a lookup anyway.
pub fn translate(code: u8, shift: bool) -> u8 {
    let index = code as usize;
    if index >= LOWER.len() {
        return 0;
    }
    if shift {
        UPPER[index]
    } else {
        LOWER[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_follow_shift_state() {
        assert_eq!(translate(0x1C, false), b'a');
        assert_eq!(translate(0x1C, true), b'A');
        assert_eq!(translate(0x32, false), b'b');
        assert_eq!(translate(0x32, true), b'B');
    }

    #[test]
    fn digits_shift_to_symbols() {
        assert_eq!(translate(0x16, false), b'1');
        assert_eq!(translate(0x16, true), b'!');
        assert_eq!(translate(0x45, false), b'0');
        assert_eq!(translate(0x45, true), b')');
    }

    #[test]
    fn controls_are_shift_invariant() {
        // backspace, tab, enter, escape
        for code in [0x66, 0x0D, 0x5A, 0x76] {
            assert_ne!(translate(code, false), 0);
            assert_eq!(translate(code, false), translate(code, true));
        }
        assert_eq!(translate(0x66, false), 0x08);
        assert_eq!(translate(0x0D, false), b'\t');
        assert_eq!(translate(0x5A, false), b'\n');
        assert_eq!(translate(0x76, false), 0x1B);
    }

    #[test]
    fn every_code_matches_its_table_entry() {
        for code in 0u8..128 {
            assert_eq!(translate(code, false), LOWER[code as usize]);
            assert_eq!(translate(code, true), UPPER[code as usize]);
        }
    }

    #[test]
    fn codes_beyond_the_table_map_to_nothing() {
        for code in 128u8..=255 {
            assert_eq!(translate(code, false), 0);
            assert_eq!(translate(code, true), 0);
        }
    }
}
