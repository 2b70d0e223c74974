#![no_main]
use libfuzzer_sys::fuzz_target;

use bootfmt_core::{Conversion, parse_directive};

// The directive parser must stay within the slice it is given: consumption
// never exceeds the input length, a parse only fails when the template ends
// before a conversion byte, and the consumed prefix actually ends with the
// byte that named the conversion.
fuzz_target!(|data: &[u8]| {
    match parse_directive(data) {
        Some((dir, consumed)) => {
            assert!(consumed <= data.len(), "parser consumed past the slice");
            assert!(consumed >= 1);
            let last = data[consumed - 1];
            match dir.conversion {
                Conversion::Signed => assert_eq!(last, b'd'),
                Conversion::Unsigned => assert_eq!(last, b'u'),
                Conversion::HexLower => assert_eq!(last, b'x'),
                Conversion::HexUpper => assert_eq!(last, b'X'),
                Conversion::Str => assert_eq!(last, b's'),
                Conversion::Percent => assert_eq!(last, b'%'),
                Conversion::Unknown(c) => assert_eq!(last, c),
            }
        }
        None => {
            // Only flag/width/modifier bytes may precede an exhausted slice.
            let mut rest = data;
            if rest.first() == Some(&b'0') {
                rest = &rest[1..];
            }
            while rest.first().is_some_and(u8::is_ascii_digit) {
                rest = &rest[1..];
            }
            if rest.first() == Some(&b'l') {
                rest = &rest[1..];
            }
            assert!(rest.is_empty(), "parse failed with bytes remaining");
        }
    }
});
