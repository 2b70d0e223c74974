//! sprintf formatting engine.
//!
//! Scanner and renderers for the minimal BIOS-style format language:
//! `%` `0`? `[0-9]*` `l`? `[duxXs%]`, with a lenient literal fallback for
//! any other conversion byte. Values are 32-bit; width applies to integers
//! only.
//!
//! Reference: ISO C90 7.9.6.5 sprintf (subset)
//!
//! Design invariant: all output is bounded by the destination slice — the
//! engine allocates nothing and writes through a single checked cursor, so
//! a too-small buffer is a reported error, never a wild store.

use crate::args::{Arg, ArgKind};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure modes the C original left as undefined behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Strict-mode output ran past `dst.len() - 1` bytes (one byte is
    /// reserved for the NUL terminator).
    #[error("output buffer full after {written} bytes")]
    BufferFull { written: usize },
    /// A consuming directive ran past the end of the argument list.
    #[error("directive needs an argument but only {supplied} were supplied")]
    MissingArgument { supplied: usize },
    /// String/number confusion between a directive and its argument.
    #[error("conversion '%{}' expected {expected:?} argument, found {found:?}", *.conversion as char)]
    TypeMismatch {
        conversion: u8,
        expected: ArgKind,
        found: ArgKind,
    },
}

// ---------------------------------------------------------------------------
// Directive types
// ---------------------------------------------------------------------------

/// Pad character used to reach a field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    Space,
    Zero,
}

/// Conversion kind named by the final directive byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `%d`
    Signed,
    /// `%u`
    Unsigned,
    /// `%x`
    HexLower,
    /// `%X`
    HexUpper,
    /// `%s`
    Str,
    /// `%%`
    Percent,
    /// Any other byte: rendered as a literal `%` plus the byte, consuming
    /// no argument.
    Unknown(u8),
}

/// A parsed `%` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub pad: Pad,
    pub width: usize,
    pub conversion: Conversion,
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse a single directive starting after the `%` byte.
///
/// `fmt` points to the first byte AFTER '%'. Returns `(directive, consumed)`
/// where `consumed` counts from `fmt[0]`, or `None` if the template ends
/// before a conversion byte is reached.
pub fn parse_directive(fmt: &[u8]) -> Option<(Directive, usize)> {
    let mut pos = 0;
    let len = fmt.len();

    // --- zero-pad flag ---
    // Only a leading '0' is a flag; a '0' inside the digits below is part
    // of the width ("%50d" is width 50, space-padded).
    let pad = if pos < len && fmt[pos] == b'0' {
        pos += 1;
        Pad::Zero
    } else {
        Pad::Space
    };

    // --- field width ---
    let mut width: usize = 0;
    while pos < len && fmt[pos].is_ascii_digit() {
        width = width
            .saturating_mul(10)
            .saturating_add(usize::from(fmt[pos] - b'0'));
        pos += 1;
    }

    // --- length modifier ---
    // Accepted and ignored: the value channel is fixed at 32 bits.
    if pos < len && fmt[pos] == b'l' {
        pos += 1;
    }

    // --- conversion byte ---
    if pos >= len {
        return None;
    }
    let conversion = match fmt[pos] {
        b'd' => Conversion::Signed,
        b'u' => Conversion::Unsigned,
        b'x' => Conversion::HexLower,
        b'X' => Conversion::HexUpper,
        b's' => Conversion::Str,
        b'%' => Conversion::Percent,
        other => Conversion::Unknown(other),
    };
    pos += 1;

    Some((
        Directive {
            pad,
            width,
            conversion,
        },
        pos,
    ))
}

// ---------------------------------------------------------------------------
// Output writer
// ---------------------------------------------------------------------------

/// Bounded output cursor over a caller-supplied buffer.
///
/// One byte of the buffer is reserved for the NUL terminator. In strict
/// mode overflow is `Error::BufferFull`; in truncating mode overflowing
/// bytes are dropped while the virtual length keeps counting (the
/// `snprintf` contract).
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
    total: usize,
    truncate: bool,
}

impl<'a> Writer<'a> {
    /// Strict writer: every byte must fit, plus the terminator.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Writer {
            buf,
            pos: 0,
            total: 0,
            truncate: false,
        }
    }

    /// Truncating writer: drops bytes past capacity but keeps counting.
    pub fn truncating(buf: &'a mut [u8]) -> Self {
        Writer {
            buf,
            pos: 0,
            total: 0,
            truncate: true,
        }
    }

    /// Bytes accepted so far, including dropped ones (the virtual length).
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Emit one byte. This is the only operation that stores to the buffer;
    /// every renderer routes through it.
    pub fn put(&mut self, byte: u8) -> Result<(), Error> {
        if self.pos + 1 < self.buf.len() {
            self.buf[self.pos] = byte;
            self.pos += 1;
        } else if !self.truncate {
            return Err(Error::BufferFull { written: self.pos });
        }
        self.total += 1;
        Ok(())
    }

    /// Emit a run of bytes.
    pub fn put_slice(&mut self, bytes: &[u8]) -> Result<(), Error> {
        for &b in bytes {
            self.put(b)?;
        }
        Ok(())
    }

    /// Write the NUL terminator (not counted) and return the virtual length.
    pub fn finish(self) -> Result<usize, Error> {
        if self.buf.is_empty() {
            if self.truncate {
                return Ok(self.total);
            }
            return Err(Error::BufferFull { written: 0 });
        }
        self.buf[self.pos] = 0;
        Ok(self.total)
    }
}

// ---------------------------------------------------------------------------
// Renderers
// ---------------------------------------------------------------------------

/// Digit scratch capacity. A 32-bit magnitude needs at most 10 digits in
/// base 10 and 8 in base 16; 32 matches the original's buffer and covers
/// any base down to 2.
const DIGIT_SCRATCH: usize = 32;

/// Render one integer with the original formatter's width/pad/sign policy.
///
/// Digits are generated least-significant-first into a stack-local scratch
/// buffer (at least one digit, so zero renders as `0`), then emitted in
/// reverse. The sign interacts with padding in a fixed order:
///
/// - zero pad: the `-` is emitted BEFORE the padding (`-0003`);
/// - space pad: the `-` is emitted AFTER the padding (`   -3`);
/// - either way the sign occupies one column of the field width.
///
/// Returns the count written by this call.
pub fn render_int(
    w: &mut Writer<'_>,
    magnitude: u32,
    base: u32,
    upper: bool,
    negative: bool,
    pad: Pad,
    min_width: usize,
) -> Result<usize, Error> {
    let start = w.total();

    if negative && pad == Pad::Zero {
        w.put(b'-')?;
    }

    let mut scratch = [0u8; DIGIT_SCRATCH];
    let mut count = 0;
    let mut value = magnitude;
    loop {
        let digit = (value % base) as u8;
        scratch[count] = if digit < 10 {
            b'0' + digit
        } else if upper {
            b'A' + (digit - 10)
        } else {
            b'a' + (digit - 10)
        };
        count += 1;
        value /= base;
        if value == 0 {
            break;
        }
    }

    let field = if negative {
        min_width.saturating_sub(1)
    } else {
        min_width
    };
    let pad_byte = match pad {
        Pad::Zero => b'0',
        Pad::Space => b' ',
    };
    for _ in count..field {
        w.put(pad_byte)?;
    }

    if negative && pad == Pad::Space {
        w.put(b'-')?;
    }

    for i in (0..count).rev() {
        w.put(scratch[i])?;
    }

    Ok(w.total() - start)
}

/// Copy a string argument up to its logical end (first NUL byte if present,
/// else the slice end). Width and padding never apply to strings.
///
/// Returns the count written by this call.
pub fn render_str(w: &mut Writer<'_>, s: &[u8]) -> Result<usize, Error> {
    let start = w.total();
    let end = s.iter().position(|&b| b == 0).unwrap_or(s.len());
    w.put_slice(&s[..end])?;
    Ok(w.total() - start)
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

fn take_number(args: &[Arg<'_>], next: &mut usize, conversion: u8) -> Result<u32, Error> {
    let arg = *args.get(*next).ok_or(Error::MissingArgument {
        supplied: args.len(),
    })?;
    *next += 1;
    arg.as_bits().ok_or(Error::TypeMismatch {
        conversion,
        expected: ArgKind::Number,
        found: arg.kind(),
    })
}

fn take_str<'a>(args: &[Arg<'a>], next: &mut usize) -> Result<&'a [u8], Error> {
    let arg = *args.get(*next).ok_or(Error::MissingArgument {
        supplied: args.len(),
    })?;
    *next += 1;
    arg.as_str_bytes().ok_or(Error::TypeMismatch {
        conversion: b's',
        expected: ArgKind::Str,
        found: arg.kind(),
    })
}

fn format_into(w: &mut Writer<'_>, fmt: &[u8], args: &[Arg<'_>]) -> Result<(), Error> {
    let mut pos = 0;
    let mut next_arg = 0;
    let len = fmt.len();

    while pos < len {
        let byte = fmt[pos];
        pos += 1;
        if byte != b'%' {
            w.put(byte)?;
            continue;
        }

        let Some((dir, consumed)) = parse_directive(&fmt[pos..]) else {
            // Template ended inside a directive: emit the '%' literally.
            w.put(b'%')?;
            break;
        };
        pos += consumed;

        match dir.conversion {
            Conversion::Signed => {
                let value = take_number(args, &mut next_arg, b'd')? as i32;
                render_int(
                    w,
                    value.unsigned_abs(),
                    10,
                    false,
                    value < 0,
                    dir.pad,
                    dir.width,
                )?;
            }
            Conversion::Unsigned => {
                let value = take_number(args, &mut next_arg, b'u')?;
                render_int(w, value, 10, false, false, dir.pad, dir.width)?;
            }
            Conversion::HexLower => {
                let value = take_number(args, &mut next_arg, b'x')?;
                render_int(w, value, 16, false, false, dir.pad, dir.width)?;
            }
            Conversion::HexUpper => {
                let value = take_number(args, &mut next_arg, b'X')?;
                render_int(w, value, 16, true, false, dir.pad, dir.width)?;
            }
            Conversion::Str => {
                let s = take_str(args, &mut next_arg)?;
                render_str(w, s)?;
            }
            Conversion::Percent => w.put(b'%')?,
            Conversion::Unknown(other) => {
                // Lenient fallback: any parsed pad/width prefix is discarded
                // ("%05q" renders "%q"), and no argument is consumed.
                w.put(b'%')?;
                w.put(other)?;
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Equivalent to C `sprintf`, with a bounded destination.
///
/// Renders `fmt` with `args` into `dst`, NUL-terminates, and returns the
/// number of bytes written before the terminator. `dst` must hold the full
/// expansion plus the terminator or the call fails with
/// [`Error::BufferFull`]; on any `Err` the buffer contents are unspecified.
///
/// A NUL byte inside `fmt` is an ordinary literal; the template is bounded
/// by the slice, not by a terminator.
pub fn sprintf(dst: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> Result<usize, Error> {
    let mut w = Writer::new(dst);
    format_into(&mut w, fmt, args)?;
    w.finish()
}

/// Equivalent to C `snprintf`: output is clipped to `dst.len() - 1` bytes
/// plus a NUL terminator, and the returned length is the length the full
/// expansion would have had. An empty `dst` writes nothing and only sizes
/// the result.
pub fn snprintf(dst: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> Result<usize, Error> {
    let mut w = Writer::truncating(dst);
    format_into(&mut w, fmt, args)?;
    w.finish()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
