//! True variadic entry points: `sprintf` and `snprintf` under their C names.
//!
//! Nightly-only (`c_variadic`), enabled by the `c-variadic` feature. The
//! exported names make the cdylib a drop-in replacement for the classic
//! firmware formatter. Register arguments are extracted ahead of rendering,
//! guided by the template's directive sequence.

use std::ffi::{CStr, c_char, c_int};

use bootfmt_core::{Arg, Conversion, parse_directive};

use crate::sprintf_abi::{write_bounded, write_unbounded};

/// Maximum variadic arguments extracted per call.
const MAX_VA_ARGS: usize = 32;

/// One extracted register value, tagged by the directive that consumes it.
#[derive(Clone, Copy)]
enum VaSlot {
    Number(u32),
    Str(*const c_char),
}

/// Extract variadic arguments into `$buf`, walking `$fmt`'s directives.
/// A macro so the unstable va-list type never has to be named.
macro_rules! extract_va_args {
    ($fmt:expr, $args:expr, $buf:expr) => {{
        let mut count = 0usize;
        let mut pos = 0usize;
        while pos < $fmt.len() && count < MAX_VA_ARGS {
            if $fmt[pos] != b'%' {
                pos += 1;
                continue;
            }
            pos += 1;
            let Some((dir, consumed)) = parse_directive(&$fmt[pos..]) else {
                break;
            };
            pos += consumed;
            match dir.conversion {
                Conversion::Signed
                | Conversion::Unsigned
                | Conversion::HexLower
                | Conversion::HexUpper => {
                    // The C promotion pushes ints at register width; the
                    // value channel keeps the low 32 bits.
                    $buf[count] = VaSlot::Number(unsafe { $args.arg::<u64>() } as u32);
                    count += 1;
                }
                Conversion::Str => {
                    let raw = unsafe { $args.arg::<u64>() };
                    $buf[count] = VaSlot::Str(raw as usize as *const c_char);
                    count += 1;
                }
                Conversion::Percent | Conversion::Unknown(_) => {}
            }
        }
        count
    }};
}

/// Resolve extracted slots into engine arguments. NULL strings render as
/// `(null)`.
unsafe fn slots_to_args<'a>(slots: &[VaSlot]) -> Vec<Arg<'a>> {
    slots
        .iter()
        .map(|slot| match *slot {
            VaSlot::Number(bits) => Arg::Uint(bits),
            VaSlot::Str(ptr) => {
                if ptr.is_null() {
                    Arg::Str(b"(null)")
                } else {
                    Arg::Str(unsafe { CStr::from_ptr(ptr) }.to_bytes())
                }
            }
        })
        .collect()
}

/// C `sprintf`: render and NUL-terminate into `str_buf`, returning the
/// length. The caller's buffer must hold the full expansion plus the
/// terminator.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn sprintf(
    str_buf: *mut c_char,
    format: *const c_char,
    mut args: ...
) -> c_int {
    if str_buf.is_null() || format.is_null() {
        return -1;
    }
    let fmt = unsafe { CStr::from_ptr(format) }.to_bytes();
    let mut slots = [VaSlot::Number(0); MAX_VA_ARGS];
    let count = extract_va_args!(fmt, args, slots);
    let resolved = unsafe { slots_to_args(&slots[..count]) };
    unsafe { write_unbounded(str_buf, fmt, &resolved) }
}

/// C `snprintf`: render at most `size - 1` bytes plus the terminator,
/// returning the untruncated length.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn snprintf(
    str_buf: *mut c_char,
    size: usize,
    format: *const c_char,
    mut args: ...
) -> c_int {
    if format.is_null() || (str_buf.is_null() && size > 0) {
        return -1;
    }
    let fmt = unsafe { CStr::from_ptr(format) }.to_bytes();
    let mut slots = [VaSlot::Number(0); MAX_VA_ARGS];
    let count = extract_va_args!(fmt, args, slots);
    let resolved = unsafe { slots_to_args(&slots[..count]) };
    unsafe { write_bounded(str_buf, size, fmt, &resolved) }
}
