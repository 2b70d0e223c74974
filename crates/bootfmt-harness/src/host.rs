//! Host libc differential capture.
//!
//! Renders parity-eligible cases through the host `snprintf` so the engine
//! can be diffed against a production C library. All unsafe code in this
//! crate lives here, confined to the variadic FFI dispatch.

#![allow(unsafe_code)]

use std::ffi::CString;

use crate::fixtures::{ArgSpec, FixtureCase};

/// Output of one host render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRender {
    /// Bytes the host wrote, up to its terminator.
    pub output: String,
    /// The host's return value.
    pub len: i32,
}

/// A lowered argument ready for the variadic call.
enum HostArg {
    Num(libc::c_uint),
    Str(CString),
}

fn lower(spec: &ArgSpec) -> Option<HostArg> {
    match spec {
        // Signed values travel as their bit pattern; the host's va_arg
        // reads the same low 32 bits either way.
        ArgSpec::Int(v) => Some(HostArg::Num(*v as libc::c_uint)),
        ArgSpec::Uint(v) => Some(HostArg::Num(*v)),
        ArgSpec::Str(s) => CString::new(s.as_str()).ok().map(HostArg::Str),
    }
}

/// Render `fixture` through host `snprintf`, when its shape is supported.
///
/// Returns `None` for non-parity cases, argument arities the dispatch does
/// not cover, or payloads a C call cannot carry (interior NUL).
#[must_use]
pub fn host_render(fixture: &FixtureCase) -> Option<HostRender> {
    if !fixture.host_parity {
        return None;
    }
    let fmt = CString::new(fixture.template.as_str()).ok()?;
    let lowered: Option<Vec<HostArg>> = fixture.args.iter().map(lower).collect();
    let lowered = lowered?;

    let mut buf = vec![0u8; 512];
    let dst = buf.as_mut_ptr().cast::<libc::c_char>();
    let cap = buf.len();
    let f = fmt.as_ptr();

    use HostArg::{Num, Str};
    let len = unsafe {
        match lowered.as_slice() {
            [] => libc::snprintf(dst, cap, f),
            [Num(a)] => libc::snprintf(dst, cap, f, *a),
            [Str(a)] => libc::snprintf(dst, cap, f, a.as_ptr()),
            [Num(a), Num(b)] => libc::snprintf(dst, cap, f, *a, *b),
            [Str(a), Num(b)] => libc::snprintf(dst, cap, f, a.as_ptr(), *b),
            [Num(a), Str(b)] => libc::snprintf(dst, cap, f, *a, b.as_ptr()),
            [Num(a), Num(b), Num(c)] => libc::snprintf(dst, cap, f, *a, *b, *c),
            [Str(a), Num(b), Num(c)] => libc::snprintf(dst, cap, f, a.as_ptr(), *b, *c),
            _ => return None,
        }
    };
    if len < 0 {
        return None;
    }

    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    Some(HostRender {
        output: String::from_utf8_lossy(&buf[..end]).into_owned(),
        len,
    })
}
