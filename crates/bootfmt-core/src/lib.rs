//! # bootfmt-core
//!
//! Freestanding `printf`-family formatter for boot and firmware code.
//!
//! A minimal `sprintf` in the classic BIOS style: `%d`, `%u`, `%x`, `%X`,
//! `%s`, `%%`, an optional zero-pad flag and field width, and nothing else —
//! no floats, no positional arguments, no locale. The engine is `no_std`,
//! allocation-free, and reentrant; all output goes to caller-supplied byte
//! buffers. No `unsafe` code is permitted at the crate level.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod args;
pub mod sprintf;

pub use args::{Arg, ArgKind};
pub use sprintf::{
    Conversion, Directive, Error, Pad, Writer, parse_directive, render_int, render_str, snprintf,
    sprintf,
};

/// Format into a byte buffer with the call shape of C `sprintf`.
///
/// The template may be a `&str` or byte string; each argument goes through
/// [`Arg::from`], so integers and strings mix freely.
///
/// ```
/// let mut buf = [0u8; 32];
/// let n = bootfmt_core::sprintf!(&mut buf, "val=%05d end", -7).unwrap();
/// assert_eq!(&buf[..n], b"val=-0007 end");
/// assert_eq!(n, 13);
/// ```
#[macro_export]
macro_rules! sprintf {
    ($dst:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::sprintf(
            $dst,
            ::core::convert::AsRef::<[u8]>::as_ref(&$fmt),
            &[$($crate::Arg::from($arg)),*],
        )
    };
}

/// Format into a byte buffer with the call shape of C `snprintf`
/// (truncating; returns the untruncated length).
///
/// ```
/// let mut buf = [0u8; 4];
/// let n = bootfmt_core::snprintf!(&mut buf, "%s", "firmware").unwrap();
/// assert_eq!(n, 8);
/// assert_eq!(&buf, b"fir\0");
/// ```
#[macro_export]
macro_rules! snprintf {
    ($dst:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::snprintf(
            $dst,
            ::core::convert::AsRef::<[u8]>::as_ref(&$fmt),
            &[$($crate::Arg::from($arg)),*],
        )
    };
}
