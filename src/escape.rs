//! §4.6 escaping routines: `escapeIdent`, `escapeHash`, `escapeString`, plus
//! the Dimension/Delim `toSource` special cases that lean on the same
//! hex-escape machinery.

use crate::error::Error;

fn is_name_safe(c: char) -> bool {
    c == '-' || c == '_' || c.is_ascii_alphanumeric() || c as u32 >= 0x80
}

fn hex_escape(out: &mut String, c: char) {
    out.push('\\');
    out.push_str(&format!("{:x}", c as u32));
    out.push(' ');
}

/// Escapes `value` so that it re-tokenizes as a single Ident token whose
/// value is exactly `value` (the Escape Preservation testable property).
///
/// # Errors
/// Returns [`Error::InvalidCharacter`] if `value` contains U+0000.
pub fn escape_ident(value: &str) -> Result<String, Error> {
    if value.contains('\u{0000}') {
        return Err(Error::InvalidCharacter('\u{0000}'));
    }

    let mut out = String::with_capacity(value.len());
    for (i, c) in value.chars().enumerate() {
        let leading_digit_rule = (i == 0 && c.is_ascii_digit())
            || (i == 1 && c.is_ascii_digit() && value.starts_with('-'));

        if (c as u32) <= 0x1F || c as u32 == 0x7F || leading_digit_rule {
            hex_escape(&mut out, c);
        } else if is_name_safe(c) {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    Ok(out)
}

/// Escapes `value` for use as a Hash token's name: like [`escape_ident`] but
/// without the leading-digit rule, since an unrestricted hash value is not
/// itself required to start an identifier.
///
/// # Errors
/// Returns [`Error::InvalidCharacter`] if `value` contains U+0000.
pub fn escape_hash(value: &str) -> Result<String, Error> {
    if value.contains('\u{0000}') {
        return Err(Error::InvalidCharacter('\u{0000}'));
    }

    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if (c as u32) <= 0x1F || c as u32 == 0x7F {
            hex_escape(&mut out, c);
        } else if is_name_safe(c) {
            out.push(c);
        } else {
            out.push('\\');
            out.push(c);
        }
    }
    Ok(out)
}

/// Escapes `value` for use inside a double-quoted string token.
///
/// # Errors
/// Returns [`Error::InvalidCharacter`] if `value` contains U+0000.
pub fn escape_string(value: &str) -> Result<String, Error> {
    if value.contains('\u{0000}') {
        return Err(Error::InvalidCharacter('\u{0000}'));
    }

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if (c as u32) <= 0x1F || c as u32 == 0x7F => hex_escape(&mut out, c),
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}

/// Escapes a Dimension token's unit per the `DimensionToken.toSource` rule:
/// if the unit would be misread as scientific notation (starts with `e`/`E`
/// followed by `-` or a digit), hex-escape the leading letter.
#[must_use]
pub fn escape_dimension_unit(unit: &str) -> String {
    let mut chars = unit.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let looks_like_exponent = matches!(first, 'e' | 'E')
        && matches!(chars.clone().next(), Some(c) if c == '-' || c.is_ascii_digit());

    if looks_like_exponent {
        let mut out = String::new();
        hex_escape(&mut out, first);
        out.push_str(chars.as_str());
        out
    } else {
        // Still needs standard name escaping for the remainder of the unit.
        escape_ident(unit).unwrap_or_else(|_| unit.to_string())
    }
}

/// Escapes a single Delim code point per `DelimToken.toSource`: a lone `\`
/// is emitted as `\\<LF>` so it is never misread as an escape continuation.
#[must_use]
pub fn escape_delim(value: char) -> String {
    if value == '\\' {
        "\\\n".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn escapes_leading_digit() {
        assert_eq!(escape_ident("0red").unwrap(), "\\30 red");
    }

    #[test]
    fn escapes_leading_dash_digit() {
        assert_eq!(escape_ident("-0red").unwrap(), "-\\30 red");
    }

    #[test]
    fn passes_through_name_safe() {
        assert_eq!(escape_ident("foo-bar_2").unwrap(), "foo-bar_2");
    }

    #[test]
    fn rejects_nul() {
        assert!(matches!(escape_ident("a\u{0}b"), Err(Error::InvalidCharacter('\u{0}'))));
    }

    #[test]
    fn string_escapes_quote_and_backslash() {
        assert_eq!(escape_string("a\"b\\c").unwrap(), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn dimension_unit_disambiguates_exponent_like_unit() {
        assert_eq!(escape_dimension_unit("e2"), "\\65 2");
        assert_eq!(escape_dimension_unit("em"), "em");
    }

    #[test]
    fn delim_lone_backslash() {
        assert_eq!(escape_delim('\\'), "\\\n");
        assert_eq!(escape_delim('#'), "#");
    }
}
