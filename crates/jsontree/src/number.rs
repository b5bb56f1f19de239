//! Canonical text formatting for JSON numbers.
//!
//! The formatter emits the shortest digit sequence that round-trips to the
//! same `f64`, laid out the way C's `%g` conversion picks notation:
//! positional for decimal exponents in `-4..=16`, scientific otherwise. The
//! scientific form carries an explicit sign and at least two exponent
//! digits, so `1e20` prints as `1e+20` and `1e-5` as `1e-05`.

use alloc::{format, string::String};
use core::fmt;

/// Largest first-digit exponent rendered positionally (17 significant
/// digits fit without a trailing zero run longer than the precision).
const POSITIONAL_EXP_MAX: i32 = 16;
/// Smallest first-digit exponent rendered positionally.
const POSITIONAL_EXP_MIN: i32 = -4;

/// Writes the canonical JSON text for `n`.
///
/// Non-finite values have no JSON representation and print as `null`; they
/// cannot be produced by the parser, only by constructing a number value
/// directly.
pub(crate) fn write_number<W: fmt::Write>(n: f64, out: &mut W) -> fmt::Result {
    if !n.is_finite() {
        return out.write_str("null");
    }
    if n == 0.0 {
        return out.write_str(if n.is_sign_negative() { "-0" } else { "0" });
    }

    // `{:e}` is the shortest scientific form: `-d.dddde-dd` with a bare
    // exponent. Split it apart and re-lay it out.
    let shortest = format!("{n:e}");
    let (mantissa, exp) = shortest
        .split_once('e')
        .expect("scientific format always contains an exponent");
    let exp: i32 = exp.parse().expect("exponent of {:e} is a valid integer");

    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let mut digits = String::with_capacity(mantissa.len());
    digits.extend(mantissa.chars().filter(|c| *c != '.'));

    out.write_str(sign)?;
    if (POSITIONAL_EXP_MIN..=POSITIONAL_EXP_MAX).contains(&exp) {
        write_positional(&digits, exp, out)
    } else {
        write_scientific(&digits, exp, out)
    }
}

/// `dddd`, `dd.dd`, or `0.00dd` forms.
fn write_positional<W: fmt::Write>(digits: &str, exp: i32, out: &mut W) -> fmt::Result {
    if exp < 0 {
        out.write_str("0.")?;
        for _ in exp..-1 {
            out.write_char('0')?;
        }
        return out.write_str(digits);
    }

    let point = (exp as usize) + 1;
    if point >= digits.len() {
        out.write_str(digits)?;
        for _ in digits.len()..point {
            out.write_char('0')?;
        }
        Ok(())
    } else {
        out.write_str(&digits[..point])?;
        out.write_char('.')?;
        out.write_str(&digits[point..])
    }
}

/// `d.ddde+dd` form with a signed, two-digit-minimum exponent.
fn write_scientific<W: fmt::Write>(digits: &str, exp: i32, out: &mut W) -> fmt::Result {
    out.write_str(&digits[..1])?;
    if digits.len() > 1 {
        out.write_char('.')?;
        out.write_str(&digits[1..])?;
    }
    let sign = if exp < 0 { '-' } else { '+' };
    write!(out, "e{}{:02}", sign, exp.unsigned_abs())
}
