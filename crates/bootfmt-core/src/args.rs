//! Typed argument channel for the formatting engine.
//!
//! The C original passed arguments through the variadic register area and
//! trusted the template to name the right types. Here every argument is a
//! tagged value, so a `%s` aimed at an integer is a reportable error instead
//! of a wild pointer read. The two numeric variants stay interchangeable on
//! purpose: `%x` of a negative value reinterprets the bits exactly as the C
//! calling convention would.

/// A single formatting argument.
///
/// Strings are byte slices in the C-string model: the logical end is the
/// first NUL byte if one is present, otherwise the end of the slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    /// Signed 32-bit value (`%d`, or reinterpreted by `%u`/`%x`/`%X`).
    Int(i32),
    /// Unsigned 32-bit value (`%u`/`%x`/`%X`, or reinterpreted by `%d`).
    Uint(u32),
    /// Byte string for `%s`.
    Str(&'a [u8]),
}

/// Coarse argument classification used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgKind {
    Number,
    Str,
}

impl<'a> Arg<'a> {
    /// Classification of this argument for diagnostics.
    #[must_use]
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Int(_) | Arg::Uint(_) => ArgKind::Number,
            Arg::Str(_) => ArgKind::Str,
        }
    }

    /// The value as an unsigned 32-bit pattern, if numeric.
    ///
    /// `Int` values are reinterpreted bit-for-bit, matching the C variadic
    /// promotion the original relied on.
    #[must_use]
    pub fn as_bits(&self) -> Option<u32> {
        match *self {
            Arg::Int(v) => Some(v as u32),
            Arg::Uint(v) => Some(v),
            Arg::Str(_) => None,
        }
    }

    /// The string payload, if this is a string argument.
    #[must_use]
    pub fn as_str_bytes(&self) -> Option<&'a [u8]> {
        match *self {
            Arg::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i32> for Arg<'_> {
    fn from(v: i32) -> Self {
        Arg::Int(v)
    }
}

impl From<u32> for Arg<'_> {
    fn from(v: u32) -> Self {
        Arg::Uint(v)
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Arg::Str(s)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s.as_bytes())
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Arg<'a> {
    fn from(s: &'a [u8; N]) -> Self {
        Arg::Str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        assert_eq!(Arg::Int(-1).kind(), ArgKind::Number);
        assert_eq!(Arg::Uint(1).kind(), ArgKind::Number);
        assert_eq!(Arg::Str(b"x").kind(), ArgKind::Str);
    }

    #[test]
    fn test_as_bits_reinterprets_signed() {
        assert_eq!(Arg::Int(-1).as_bits(), Some(0xFFFF_FFFF));
        assert_eq!(Arg::Uint(7).as_bits(), Some(7));
        assert_eq!(Arg::Str(b"x").as_bits(), None);
    }

    #[test]
    fn test_from_str_is_bytes() {
        let a = Arg::from("boot");
        assert_eq!(a.as_str_bytes(), Some(&b"boot"[..]));
    }

    #[test]
    fn test_from_byte_array() {
        let a = Arg::from(b"ok");
        assert_eq!(a.as_str_bytes(), Some(&b"ok"[..]));
    }
}
