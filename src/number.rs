//! `convert-a-string-to-a-number`: turns the `repr` captured by the numeric
//! consumer into an `f64`, per the CSS Syntax algorithm rather than the
//! host's own float parser (see the resolved Open Question in `DESIGN.md`).

/// Converts a numeric token's `repr` (sign, digits, optional fraction,
/// optional exponent — exactly what [`crate::tokenizer`]'s numeric consumer
/// can produce) into its `f64` value.
///
/// This function is total over every `repr` the tokenizer emits; it is not a
/// general-purpose float parser and does not need to reject malformed input,
/// because the tokenizer never hands it any.
#[must_use]
pub fn convert_string_to_number(repr: &str) -> f64 {
    let mut chars = repr.chars().peekable();

    let sign = match chars.peek() {
        Some('-') => {
            chars.next();
            -1.0
        }
        Some('+') => {
            chars.next();
            1.0
        }
        _ => 1.0,
    };

    let mut integer = 0.0_f64;
    while let Some(c) = chars.peek().copied() {
        if c.is_ascii_digit() {
            integer = integer * 10.0 + f64::from(c as u32 - '0' as u32);
            chars.next();
        } else {
            break;
        }
    }

    let mut fraction = 0.0_f64;
    let mut fraction_digits = 0_i32;
    if chars.peek() == Some(&'.') {
        chars.next();
        while let Some(c) = chars.peek().copied() {
            if c.is_ascii_digit() {
                fraction = fraction * 10.0 + f64::from(c as u32 - '0' as u32);
                fraction_digits += 1;
                chars.next();
            } else {
                break;
            }
        }
    }

    let mut exponent_sign = 1.0_f64;
    let mut exponent = 0_i32;
    if matches!(chars.peek(), Some('e' | 'E')) {
        let mut lookahead = chars.clone();
        lookahead.next();
        let has_exponent = match lookahead.peek() {
            Some('+' | '-') => {
                lookahead.next();
                matches!(lookahead.peek(), Some(c) if c.is_ascii_digit())
            }
            Some(c) => c.is_ascii_digit(),
            None => false,
        };

        if has_exponent {
            chars.next();
            match chars.peek() {
                Some('-') => {
                    exponent_sign = -1.0;
                    chars.next();
                }
                Some('+') => {
                    chars.next();
                }
                _ => {}
            }
            while let Some(c) = chars.peek().copied() {
                if c.is_ascii_digit() {
                    exponent = exponent * 10 + i32::try_from(c as u32 - '0' as u32).unwrap_or(0);
                    chars.next();
                } else {
                    break;
                }
            }
        }
    }

    let mantissa = integer + fraction * 10f64.powi(-fraction_digits);
    sign * mantissa * 10f64.powi(exponent_sign as i32 * exponent)
}
