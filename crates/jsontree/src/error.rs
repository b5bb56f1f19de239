use thiserror::Error;

/// The reason a JSON text was rejected.
///
/// Every rejection is terminal for that [`parse`] call: no partial tree is
/// returned and nothing is retried internally. The variants distinguish the
/// exact grammar rule that failed so callers can produce precise
/// diagnostics.
///
/// [`parse`]: crate::parse
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or held only whitespace where a value was
    /// required.
    #[error("expected a value")]
    ExpectValue,
    /// A malformed literal or number, or a character that cannot start any
    /// JSON value.
    #[error("invalid value")]
    InvalidValue,
    /// A complete value was parsed but non-whitespace input remained.
    #[error("input is not a single value")]
    NotSingleValue,
    /// A number converted to an infinity; JSON has no representation for
    /// values outside the `f64` range.
    #[error("number is too big")]
    NumberTooBig,
    /// A string ran to the end of the input (or hit a NUL byte) before its
    /// closing quote.
    #[error("missing closing quotation mark")]
    MissingClosingQuote,
    /// A backslash was followed by a character that does not name an escape.
    #[error("invalid escape sequence")]
    InvalidEscape,
    /// An unescaped control byte, or invalid UTF-8, inside a string.
    #[error("invalid character in string")]
    InvalidStringChar,
    /// `\u` was not followed by four hexadecimal digits.
    #[error("invalid \\u escape")]
    InvalidUnicodeHex,
    /// A high surrogate without a matching low surrogate, or a lone low
    /// surrogate.
    #[error("invalid surrogate pair")]
    InvalidSurrogate,
    /// An array element was not followed by `,` or `]`.
    #[error("missing comma or ']'")]
    MissingCommaOrBracket,
    /// An object key was not followed by `:`.
    #[error("missing colon")]
    MissingColon,
    /// An object member was not followed by `,` or `}`.
    #[error("missing comma or '}}'")]
    MissingCommaOrBrace,
    /// An object member did not start with a quoted key.
    #[error("missing object key")]
    MissingKey,
}
