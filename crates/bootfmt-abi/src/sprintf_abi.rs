//! ABI layer for the formatter: argument-array entry points.
//!
//! C callers describe each argument with a tagged [`BootfmtArg`] cell and
//! pass the array explicitly, which keeps this surface buildable on stable
//! Rust. Each entry validates its pointers, renders through the safe core
//! engine, and returns the C-convention length or -1.

use std::ffi::{CStr, c_char, c_int};

use bootfmt_core::{Arg, snprintf, sprintf};

// ---------------------------------------------------------------------------
// Argument array protocol
// ---------------------------------------------------------------------------

/// `BootfmtArg::kind` tag for a 32-bit numeric value.
pub const BOOTFMT_ARG_NUMBER: c_int = 0;
/// `BootfmtArg::kind` tag for a NUL-terminated string pointer.
pub const BOOTFMT_ARG_STR: c_int = 1;

/// Maximum arguments accepted per call.
pub const BOOTFMT_MAX_ARGS: usize = 32;

/// One formatting argument as C callers pass it.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BootfmtArg {
    /// [`BOOTFMT_ARG_NUMBER`] or [`BOOTFMT_ARG_STR`].
    pub kind: c_int,
    /// The value when `kind` is numeric. Signed arguments are passed as
    /// their two's-complement bit pattern, exactly as the variadic register
    /// channel would carry them.
    pub value: u32,
    /// The string when `kind` is [`BOOTFMT_ARG_STR`].
    pub ptr: *const c_char,
}

/// Convert the C argument array into engine arguments.
///
/// A NULL string pointer renders as `(null)`; an unrecognized tag fails the
/// whole call. The caller keeps all pointed-to data alive for the duration
/// of the call.
unsafe fn collect_args<'a>(argv: *const BootfmtArg, argc: usize) -> Option<Vec<Arg<'a>>> {
    let mut args = Vec::with_capacity(argc);
    for i in 0..argc {
        let raw = unsafe { *argv.add(i) };
        match raw.kind {
            BOOTFMT_ARG_NUMBER => args.push(Arg::Uint(raw.value)),
            BOOTFMT_ARG_STR => {
                if raw.ptr.is_null() {
                    args.push(Arg::Str(b"(null)"));
                } else {
                    args.push(Arg::Str(unsafe { CStr::from_ptr(raw.ptr) }.to_bytes()));
                }
            }
            _ => return None,
        }
    }
    Some(args)
}

// ---------------------------------------------------------------------------
// Shared write paths
// ---------------------------------------------------------------------------

/// Unbounded write: a counting pass sizes the output, then a strict pass
/// fills the caller's buffer exactly. On an argument/template mismatch
/// nothing has been written when -1 comes back.
pub(crate) unsafe fn write_unbounded(dst: *mut c_char, fmt: &[u8], args: &[Arg<'_>]) -> c_int {
    let total = match snprintf(&mut [], fmt, args) {
        Ok(n) => n,
        Err(_) => return -1,
    };
    let Ok(len) = c_int::try_from(total) else {
        return -1;
    };
    let out = unsafe { std::slice::from_raw_parts_mut(dst.cast::<u8>(), total + 1) };
    match sprintf(out, fmt, args) {
        Ok(_) => len,
        Err(_) => -1,
    }
}

/// Bounded write straight through the truncating engine.
pub(crate) unsafe fn write_bounded(
    dst: *mut c_char,
    cap: usize,
    fmt: &[u8],
    args: &[Arg<'_>],
) -> c_int {
    let out: &mut [u8] = if cap == 0 {
        &mut []
    } else {
        unsafe { std::slice::from_raw_parts_mut(dst.cast::<u8>(), cap) }
    };
    match snprintf(out, fmt, args) {
        Ok(n) => c_int::try_from(n).unwrap_or(-1),
        Err(_) => -1,
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// C `sprintf` over an explicit argument array.
///
/// `dst` must hold the fully expanded result plus the NUL terminator, as
/// with C `sprintf`. Returns the rendered length, or -1 on NULL pointers,
/// an unknown argument tag, more than [`BOOTFMT_MAX_ARGS`] arguments, or an
/// argument/template mismatch.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bootfmt_vsprintf(
    dst: *mut c_char,
    format: *const c_char,
    argv: *const BootfmtArg,
    argc: usize,
) -> c_int {
    if dst.is_null() || format.is_null() || (argv.is_null() && argc > 0) || argc > BOOTFMT_MAX_ARGS
    {
        return -1;
    }
    let fmt = unsafe { CStr::from_ptr(format) }.to_bytes();
    let Some(args) = (unsafe { collect_args(argv, argc) }) else {
        return -1;
    };
    unsafe { write_unbounded(dst, fmt, &args) }
}

/// C `snprintf` over an explicit argument array: at most `cap - 1` bytes
/// are written plus the terminator, and the returned length is the length
/// the full expansion would have had. `cap == 0` writes nothing and only
/// sizes the result.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bootfmt_vsnprintf(
    dst: *mut c_char,
    cap: usize,
    format: *const c_char,
    argv: *const BootfmtArg,
    argc: usize,
) -> c_int {
    if format.is_null()
        || (dst.is_null() && cap > 0)
        || (argv.is_null() && argc > 0)
        || argc > BOOTFMT_MAX_ARGS
    {
        return -1;
    }
    let fmt = unsafe { CStr::from_ptr(format) }.to_bytes();
    let Some(args) = (unsafe { collect_args(argv, argc) }) else {
        return -1;
    };
    unsafe { write_bounded(dst, cap, fmt, &args) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(bits: u32) -> BootfmtArg {
        BootfmtArg {
            kind: BOOTFMT_ARG_NUMBER,
            value: bits,
            ptr: std::ptr::null(),
        }
    }

    fn string(ptr: *const c_char) -> BootfmtArg {
        BootfmtArg {
            kind: BOOTFMT_ARG_STR,
            value: 0,
            ptr,
        }
    }

    #[test]
    fn vsprintf_renders_and_terminates() {
        let mut buf = [0xAAu8; 32];
        let args = [num((-7i32) as u32)];
        let n = unsafe {
            bootfmt_vsprintf(
                buf.as_mut_ptr().cast(),
                c"val=%05d end".as_ptr(),
                args.as_ptr(),
                args.len(),
            )
        };
        assert_eq!(n, 13);
        assert_eq!(&buf[..13], b"val=-0007 end");
        assert_eq!(buf[13], 0);
    }

    #[test]
    fn vsprintf_mixes_numbers_and_strings() {
        let mut buf = [0u8; 64];
        let args = [string(c"hda".as_ptr()), num(0x7C00)];
        let n = unsafe {
            bootfmt_vsprintf(
                buf.as_mut_ptr().cast(),
                c"%s at %08X".as_ptr(),
                args.as_ptr(),
                args.len(),
            )
        };
        assert_eq!(n, 15);
        assert_eq!(&buf[..15], b"hda at 00007C00");
    }

    #[test]
    fn vsprintf_null_string_renders_placeholder() {
        let mut buf = [0u8; 16];
        let args = [string(std::ptr::null())];
        let n = unsafe {
            bootfmt_vsprintf(buf.as_mut_ptr().cast(), c"%s".as_ptr(), args.as_ptr(), 1)
        };
        assert_eq!(n, 6);
        assert_eq!(&buf[..6], b"(null)");
    }

    #[test]
    fn vsprintf_rejects_bad_inputs() {
        let mut buf = [0u8; 8];
        let args = [num(1)];
        let bad_tag = [BootfmtArg {
            kind: 99,
            value: 0,
            ptr: std::ptr::null(),
        }];
        unsafe {
            assert_eq!(
                bootfmt_vsprintf(std::ptr::null_mut(), c"%d".as_ptr(), args.as_ptr(), 1),
                -1
            );
            assert_eq!(
                bootfmt_vsprintf(buf.as_mut_ptr().cast(), std::ptr::null(), args.as_ptr(), 1),
                -1
            );
            assert_eq!(
                bootfmt_vsprintf(buf.as_mut_ptr().cast(), c"%d".as_ptr(), bad_tag.as_ptr(), 1),
                -1
            );
            // Missing argument: -1 and nothing written.
            buf.fill(0xBB);
            assert_eq!(
                bootfmt_vsprintf(buf.as_mut_ptr().cast(), c"%d".as_ptr(), args.as_ptr(), 0),
                -1
            );
            assert_eq!(buf, [0xBBu8; 8]);
        }
    }

    #[test]
    fn vsnprintf_truncates_and_reports_full_length() {
        let mut buf = [0u8; 8];
        let args = [num((-7i32) as u32)];
        let n = unsafe {
            bootfmt_vsnprintf(
                buf.as_mut_ptr().cast(),
                buf.len(),
                c"val=%05d end".as_ptr(),
                args.as_ptr(),
                1,
            )
        };
        assert_eq!(n, 13);
        assert_eq!(&buf, b"val=-00\0");
    }

    #[test]
    fn vsnprintf_zero_cap_is_pure_sizing() {
        let args = [string(c"firmware".as_ptr())];
        let n = unsafe {
            bootfmt_vsnprintf(std::ptr::null_mut(), 0, c"%s".as_ptr(), args.as_ptr(), 1)
        };
        assert_eq!(n, 8);
    }
}
