//! The strict one-shot JSON parser.
//!
//! A single left-to-right pass over a byte cursor: skip leading whitespace,
//! dispatch on the first character of the value, descend recursively into
//! arrays and objects, then require that nothing but whitespace remains.
//! There is no backtracking beyond the fixed one-byte lookahead and no
//! recovery: the first grammar violation aborts the whole parse with a
//! [`ParseError`] naming the rule that failed, and every node built so far
//! is dropped.
//!
//! # Examples
//!
//! ```rust
//! use jsontree::{parse, Value};
//!
//! let v = parse(r#"[null, true, 3.14]"#)?;
//! assert_eq!(v.as_array().map(Vec::len), Some(3));
//! # Ok::<(), jsontree::ParseError>(())
//! ```

use alloc::string::String;

use crate::{Array, ParseError, Value, map::Map};

/// Parses a complete JSON text into a [`Value`] tree.
///
/// The buffer must hold exactly one JSON value surrounded by optional
/// whitespace (space, tab, carriage return, line feed). Trailing
/// non-whitespace input is rejected with [`ParseError::NotSingleValue`].
///
/// # Errors
///
/// Returns the [`ParseError`] variant naming the first grammar rule the
/// input violated. No partial tree is ever returned.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parse_bytes(text.as_bytes())
}

/// Parses a JSON text supplied as raw bytes.
///
/// Identical to [`parse`] except for the input type. Bytes inside string
/// literals are validated as UTF-8 while decoding (an invalid sequence is
/// [`ParseError::InvalidStringChar`]); stray non-ASCII bytes anywhere else
/// cannot start a token and surface as [`ParseError::InvalidValue`].
///
/// # Errors
///
/// Returns the [`ParseError`] variant naming the first grammar rule the
/// input violated.
pub fn parse_bytes(text: &[u8]) -> Result<Value, ParseError> {
    let mut scanner = Scanner {
        input: text,
        pos: 0,
    };
    scanner.skip_whitespace();
    if scanner.at_end() {
        return Err(ParseError::ExpectValue);
    }
    let value = scanner.parse_value()?;
    scanner.skip_whitespace();
    if !scanner.at_end() {
        return Err(ParseError::NotSingleValue);
    }
    Ok(value)
}

impl core::str::FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Cursor over the input buffer. `pos` only moves forward.
struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Scanner<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.bump();
        }
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.peek() {
            None => Err(ParseError::ExpectValue),
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::Boolean(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Boolean(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'[') => self.parse_array(),
            Some(b'{') => self.parse_object(),
            Some(_) => self.parse_number(),
        }
    }

    /// Exact-substring match for `null` / `true` / `false`. Any malformed
    /// literal is `InvalidValue`, regardless of which keyword it started
    /// like.
    fn parse_literal(&mut self, literal: &'static [u8], value: Value) -> Result<Value, ParseError> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::InvalidValue)
        }
    }

    /// Number grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE][+-]?[0-9]+)?`.
    ///
    /// The scan stops at the first byte outside the grammar; whatever
    /// follows is someone else's problem (the caller's separator check or
    /// the top-level single-value check). The matched slice is converted
    /// with the locale-independent `f64` parser; overflow to an infinity is
    /// `NumberTooBig`, underflow quietly becomes zero.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        match self.peek() {
            Some(b'0') => self.bump(),
            Some(b'1'..=b'9') => self.digit_run()?,
            _ => return Err(ParseError::InvalidValue),
        }
        if self.peek() == Some(b'.') {
            self.bump();
            self.digit_run()?;
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.bump();
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.bump();
            }
            self.digit_run()?;
        }

        let token = core::str::from_utf8(&self.input[start..self.pos])
            .expect("number token is ASCII");
        let n: f64 = token.parse().map_err(|_| ParseError::InvalidValue)?;
        if n.is_infinite() {
            return Err(ParseError::NumberTooBig);
        }
        Ok(Value::Number(n))
    }

    /// Consumes one or more ASCII digits.
    fn digit_run(&mut self) -> Result<(), ParseError> {
        if !self.peek().is_some_and(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidValue);
        }
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
        Ok(())
    }

    /// String grammar, cursor on the opening quote. Decodes escapes and
    /// validates raw content as UTF-8, byte by byte.
    fn parse_string(&mut self) -> Result<String, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'"'));
        self.bump();
        let mut out = String::new();
        loop {
            match self.peek() {
                // Running off the end (or into a NUL sentinel) means the
                // closing quote never came.
                None | Some(0x00) => return Err(ParseError::MissingClosingQuote),
                Some(b'"') => {
                    self.bump();
                    return Ok(out);
                }
                Some(b'\\') => {
                    self.bump();
                    self.parse_escape(&mut out)?;
                }
                Some(b) if b < 0x20 => return Err(ParseError::InvalidStringChar),
                Some(b) if b < 0x80 => {
                    out.push(b as char);
                    self.bump();
                }
                Some(_) => {
                    let (ch, len) = bstr::decode_utf8(&self.input[self.pos..]);
                    match ch {
                        Some(ch) => {
                            out.push(ch);
                            self.pos += len;
                        }
                        None => return Err(ParseError::InvalidStringChar),
                    }
                }
            }
        }
    }

    /// Cursor just past a backslash.
    fn parse_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let Some(b) = self.peek() else {
            return Err(ParseError::InvalidEscape);
        };
        self.bump();
        let ch = match b {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{08}',
            b'f' => '\u{0C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => return self.parse_unicode_escape(out),
            _ => return Err(ParseError::InvalidEscape),
        };
        out.push(ch);
        Ok(())
    }

    /// Cursor just past `\u`. A high surrogate must be chased by a literal
    /// `\u` low surrogate; the pair combines to one code point above
    /// U+FFFF. Anything malformed inside the continuation is
    /// `InvalidSurrogate`; a malformed hex quad here, before any surrogate
    /// enters the picture, is `InvalidUnicodeHex`.
    fn parse_unicode_escape(&mut self, out: &mut String) -> Result<(), ParseError> {
        let high = self.parse_hex4().ok_or(ParseError::InvalidUnicodeHex)?;
        let code = if (0xD800..=0xDBFF).contains(&high) {
            if self.peek() != Some(b'\\') {
                return Err(ParseError::InvalidSurrogate);
            }
            self.bump();
            if self.peek() != Some(b'u') {
                return Err(ParseError::InvalidSurrogate);
            }
            self.bump();
            let low = self.parse_hex4().ok_or(ParseError::InvalidSurrogate)?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ParseError::InvalidSurrogate);
            }
            (((high - 0xD800) << 10) | (low - 0xDC00)) + 0x10000
        } else {
            high
        };
        // Rejects lone low surrogates: they are not Unicode scalar values
        // and cannot live in a `String`.
        let ch = char::from_u32(code).ok_or(ParseError::InvalidSurrogate)?;
        out.push(ch);
        Ok(())
    }

    /// Exactly four hexadecimal digits.
    fn parse_hex4(&mut self) -> Option<u32> {
        let mut code: u32 = 0;
        for _ in 0..4 {
            let digit = char::from(self.peek()?).to_digit(16)?;
            self.bump();
            code = code << 4 | digit;
        }
        Some(code)
    }

    /// Cursor on `[`. Elements already parsed are owned by the local
    /// vector, so an error on any element drops them all before returning.
    fn parse_array(&mut self) -> Result<Value, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'['));
        self.bump();
        self.skip_whitespace();
        let mut elements = Array::new();
        if self.peek() == Some(b']') {
            self.bump();
            return Ok(Value::Array(elements));
        }
        loop {
            elements.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(b']') => {
                    self.bump();
                    return Ok(Value::Array(elements));
                }
                _ => return Err(ParseError::MissingCommaOrBracket),
            }
        }
    }

    /// Cursor on `{`. Members go through [`Map::insert`], so a duplicate
    /// key replaces the earlier value in place (last write wins) instead of
    /// being stored twice.
    fn parse_object(&mut self) -> Result<Value, ParseError> {
        debug_assert_eq!(self.peek(), Some(b'{'));
        self.bump();
        self.skip_whitespace();
        let mut members = Map::new();
        if self.peek() == Some(b'}') {
            self.bump();
            return Ok(Value::Object(members));
        }
        loop {
            if self.peek() != Some(b'"') {
                return Err(ParseError::MissingKey);
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(ParseError::MissingColon);
            }
            self.bump();
            self.skip_whitespace();
            let value = self.parse_value()?;
            members.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => {
                    self.bump();
                    self.skip_whitespace();
                }
                Some(b'}') => {
                    self.bump();
                    return Ok(Value::Object(members));
                }
                _ => return Err(ParseError::MissingCommaOrBrace),
            }
        }
    }
}
