#![no_main]
use libfuzzer_sys::fuzz_target;

use bootfmt_core::{Arg, Error, snprintf, sprintf};

// Arbitrary template bytes against a fixed argument menu. The engine must
// never panic, must NUL-terminate whatever it accepts, and the strict and
// truncating modes must agree on the virtual length whenever strict mode
// succeeds.
fuzz_target!(|data: &[u8]| {
    let args = [
        Arg::Int(-1),
        Arg::Uint(0xDEAD_BEEF),
        Arg::Str(b"fuzz\0tail"),
        Arg::Int(i32::MIN),
        Arg::Uint(0),
        Arg::Str(b""),
        Arg::Int(42),
        Arg::Uint(u32::MAX),
    ];

    let mut big = [0u8; 4096];
    let strict = sprintf(&mut big, data, &args);

    let mut trunc_big = [0u8; 4096];
    let truncating = snprintf(&mut trunc_big, data, &args);

    match (strict, truncating) {
        (Ok(n), Ok(m)) => {
            assert_eq!(n, m, "strict and truncating lengths diverge");
            assert_eq!(big[n], 0, "strict output is not NUL-terminated");
            assert_eq!(trunc_big[m], 0, "truncating output is not NUL-terminated");
            assert_eq!(&big[..n], &trunc_big[..m]);

            // A tight buffer must truncate to a prefix and report the same
            // virtual length.
            let mut small = [0u8; 8];
            let k = snprintf(&mut small, data, &args).expect("arguments already validated");
            assert_eq!(k, n);
            let kept = n.min(small.len() - 1);
            assert_eq!(&small[..kept], &big[..kept]);
            assert_eq!(small[kept], 0);
        }
        (Err(Error::BufferFull { .. }), _) => {
            // Output larger than the strict buffer. The truncating run either
            // absorbs the overflow or fails later on an argument error the
            // strict run never reached.
        }
        (Err(e1), Err(e2)) => assert_eq!(e1, e2, "modes disagree on the failure"),
        (Ok(_), Err(e)) => panic!("truncating mode failed where strict passed: {e}"),
        (Err(e), Ok(_)) => panic!("strict mode failed unexpectedly: {e}"),
    }
});
