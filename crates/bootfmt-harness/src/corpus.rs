//! Builtin conformance corpus.
//!
//! The authored case battery covering every conversion, the width/pad/sign
//! policy, and the dialect quirks (string width ignorance, the lenient
//! unknown-conversion fallback, prefix discard). Cases marked
//! `host_parity` render identically under a conforming host C library and
//! feed the differential tests; the rest pin down bootfmt-specific
//! behavior.

use crate::fixtures::{ArgSpec, FixtureCase, FixtureSet};

/// Schema version emitted for the builtin corpus.
pub const CORPUS_VERSION: &str = "v1";
/// Authoring timestamp recorded in the builtin corpus.
pub const CORPUS_AUTHORED_AT: &str = "2026-08-20T00:00:00Z";

fn case(
    name: &str,
    spec_ref: &str,
    template: &str,
    args: Vec<ArgSpec>,
    expected: &str,
    host_parity: bool,
) -> FixtureCase {
    FixtureCase {
        name: name.into(),
        spec_ref: spec_ref.into(),
        template: template.into(),
        args,
        expected: expected.into(),
        expected_len: expected.len(),
        host_parity,
        notes: None,
    }
}

fn noted(mut fixture: FixtureCase, note: &str) -> FixtureCase {
    fixture.notes = Some(note.into());
    fixture
}

/// The authored case battery.
#[must_use]
pub fn builtin_corpus() -> FixtureSet {
    let cases = vec![
        // --- literals ---
        case(
            "literal_passthrough",
            "sprintf/literal",
            "boot sequence start",
            vec![],
            "boot sequence start",
            true,
        ),
        case("empty_template", "sprintf/literal", "", vec![], "", true),
        // --- signed decimal ---
        case(
            "decimal_positive",
            "sprintf/decimal",
            "%d",
            vec![ArgSpec::Int(42)],
            "42",
            true,
        ),
        case(
            "decimal_negative",
            "sprintf/decimal",
            "%d",
            vec![ArgSpec::Int(-42)],
            "-42",
            true,
        ),
        case(
            "decimal_zero",
            "sprintf/decimal",
            "%d",
            vec![ArgSpec::Int(0)],
            "0",
            true,
        ),
        case(
            "decimal_min_i32",
            "sprintf/decimal",
            "%d",
            vec![ArgSpec::Int(i32::MIN)],
            "-2147483648",
            true,
        ),
        // --- width and padding ---
        case(
            "width_space_positive",
            "sprintf/width",
            "%5d",
            vec![ArgSpec::Int(3)],
            "    3",
            true,
        ),
        case(
            "width_space_negative",
            "sprintf/width",
            "%5d",
            vec![ArgSpec::Int(-3)],
            "   -3",
            true,
        ),
        case(
            "width_zero_positive",
            "sprintf/zero-pad",
            "%05d",
            vec![ArgSpec::Int(3)],
            "00003",
            true,
        ),
        case(
            "width_zero_negative",
            "sprintf/zero-pad",
            "%05d",
            vec![ArgSpec::Int(-3)],
            "-0003",
            true,
        ),
        case(
            "width_narrower_than_value",
            "sprintf/width",
            "%3d",
            vec![ArgSpec::Int(123_456)],
            "123456",
            true,
        ),
        case(
            "zero_pad_sign_fills_field",
            "sprintf/zero-pad",
            "%010d",
            vec![ArgSpec::Int(i32::MIN)],
            "-2147483648",
            true,
        ),
        // --- unsigned decimal ---
        case(
            "unsigned_basic",
            "sprintf/unsigned",
            "%u",
            vec![ArgSpec::Uint(305_419_896)],
            "305419896",
            true,
        ),
        case(
            "unsigned_max",
            "sprintf/unsigned",
            "%u",
            vec![ArgSpec::Uint(u32::MAX)],
            "4294967295",
            true,
        ),
        case(
            "unsigned_negative_bits",
            "sprintf/unsigned",
            "%u",
            vec![ArgSpec::Int(-1)],
            "4294967295",
            true,
        ),
        case(
            "unsigned_space_pad",
            "sprintf/width",
            "%12u",
            vec![ArgSpec::Uint(4096)],
            "        4096",
            true,
        ),
        // --- hex ---
        case(
            "hex_lower",
            "sprintf/hex",
            "%x",
            vec![ArgSpec::Uint(255)],
            "ff",
            true,
        ),
        case(
            "hex_upper",
            "sprintf/hex",
            "%X",
            vec![ArgSpec::Uint(255)],
            "FF",
            true,
        ),
        case(
            "hex_zero_pad",
            "sprintf/hex",
            "%08x",
            vec![ArgSpec::Uint(0x00C0_FFEE)],
            "00c0ffee",
            true,
        ),
        case(
            "hex_full_word",
            "sprintf/hex",
            "%x",
            vec![ArgSpec::Uint(0xDEAD_BEEF)],
            "deadbeef",
            true,
        ),
        // --- strings ---
        case(
            "string_basic",
            "sprintf/string",
            "%s",
            vec![ArgSpec::Str("bootfmt".into())],
            "bootfmt",
            true,
        ),
        case(
            "string_embedded",
            "sprintf/string",
            "disk %s ready",
            vec![ArgSpec::Str("hda".into())],
            "disk hda ready",
            true,
        ),
        noted(
            case(
                "string_ignores_width",
                "sprintf/string",
                "%8s",
                vec![ArgSpec::Str("hi".into())],
                "hi",
                false,
            ),
            "width never applies to strings in this dialect; ISO C pads",
        ),
        noted(
            case(
                "string_stops_at_interior_nul",
                "sprintf/string",
                "%s",
                vec![ArgSpec::Str("ab\0cd".into())],
                "ab",
                false,
            ),
            "C-string logical end; a host call cannot carry the interior NUL",
        ),
        // --- escapes and fallback ---
        case(
            "percent_escape",
            "sprintf/escape",
            "100%% done",
            vec![],
            "100% done",
            true,
        ),
        noted(
            case(
                "unknown_conversion",
                "sprintf/fallback",
                "%q",
                vec![],
                "%q",
                false,
            ),
            "lenient fallback, no argument consumed; undefined under ISO C",
        ),
        noted(
            case(
                "unknown_discards_prefix",
                "sprintf/fallback",
                "%05q",
                vec![],
                "%q",
                false,
            ),
            "pad/width prefix is dropped by the fallback",
        ),
        noted(
            case(
                "trailing_percent",
                "sprintf/fallback",
                "half%",
                vec![],
                "half%",
                false,
            ),
            "template ends inside a directive; C would read its terminator",
        ),
        noted(
            case(
                "length_modifier_ignored",
                "sprintf/length-mod",
                "%ld",
                vec![ArgSpec::Int(-9)],
                "-9",
                false,
            ),
            "value channel is 32-bit; host va_arg width differs for %l",
        ),
        // --- combined templates ---
        case(
            "mixed_template",
            "sprintf/mixed",
            "%s: %u sectors at 0x%08X",
            vec![
                ArgSpec::Str("hda".into()),
                ArgSpec::Uint(2048),
                ArgSpec::Uint(0x7C00),
            ],
            "hda: 2048 sectors at 0x00007C00",
            true,
        ),
        case(
            "multiple_decimals",
            "sprintf/mixed",
            "%d+%d=%d",
            vec![ArgSpec::Int(2), ArgSpec::Int(3), ArgSpec::Int(5)],
            "2+3=5",
            true,
        ),
        case(
            "end_to_end_example",
            "sprintf/mixed",
            "val=%05d end",
            vec![ArgSpec::Int(-7)],
            "val=-0007 end",
            true,
        ),
    ];

    FixtureSet {
        version: CORPUS_VERSION.into(),
        family: "stdio/sprintf".into(),
        captured_at: CORPUS_AUTHORED_AT.into(),
        cases,
    }
}
