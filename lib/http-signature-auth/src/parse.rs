use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Parameter grammar error
#[derive(Clone, Debug, Diagnostic, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A parameter name ended without `=` following it
    #[error("expected `=` after parameter name")]
    MissingEquals {
        #[label("name ends without `=`")]
        at: SourceSpan,
    },

    /// The character after `=` was not `"`
    #[error("expected `\"` after `=`")]
    MissingDoubleQuote {
        #[label("value must open with `\"`")]
        at: SourceSpan,
    },

    /// Input ended inside a parameter, or a separator promised one that never came
    #[error("unterminated parameter")]
    UnterminatedParameter {
        #[label("parameter starts here")]
        at: SourceSpan,
    },
}

/// Zero-copy iterator over the `key="value"` parameters of a signature header
///
/// Fuses after the first error
pub struct ParamIter<'a> {
    input: &'a str,
    pos: usize,

    /// Whether a separator comma promised another parameter
    expect_param: bool,

    /// Marker whether we encountered an error
    ///
    /// If we did, the iterator will stop yielding any results
    is_broken: bool,
}

impl<'a> Iterator for ParamIter<'a> {
    type Item = Result<(&'a str, &'a str), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_broken {
            return None;
        }

        macro_rules! fail {
            ($variant:ident, $at:expr) => {{
                self.is_broken = true;
                return Some(Err(ParseError::$variant {
                    at: ($at, 1).into(),
                }));
            }};
        }

        let bytes = self.input.as_bytes();
        if self.pos >= bytes.len() {
            if self.expect_param {
                fail!(UnterminatedParameter, self.pos.saturating_sub(1));
            }
            return None;
        }
        self.expect_param = false;

        // Scan the parameter name up to `=`
        let key_start = self.pos;
        let key = loop {
            match bytes.get(self.pos) {
                Some(&b'=') => {
                    let key = &self.input[key_start..self.pos];
                    self.pos += 1;
                    break key;
                }
                Some(&(b',' | b'"')) => fail!(MissingEquals, self.pos),
                Some(_) => self.pos += 1,
                None => fail!(UnterminatedParameter, key_start),
            }
        };

        // The value has to open with a double quote right after `=`
        if bytes.get(self.pos) != Some(&b'"') {
            fail!(MissingDoubleQuote, self.pos);
        }
        self.pos += 1;

        // A `"` only closes the value when followed by `,` or end-of-input;
        // any other `"` belongs to the value
        let value_start = self.pos;
        loop {
            match bytes.get(self.pos) {
                Some(&b'"') if matches!(bytes.get(self.pos + 1), Some(&b',') | None) => {
                    let value = &self.input[value_start..self.pos];
                    self.pos += 1;

                    if self.pos < bytes.len() {
                        // Step over the separator; another parameter has to follow
                        self.pos += 1;
                        self.expect_param = true;
                    }

                    return Some(Ok((key, value)));
                }
                Some(_) => self.pos += 1,
                None => fail!(UnterminatedParameter, value_start - 1),
            }
        }
    }
}

/// Parse the parameter string of a signature header into key/value pairs
///
/// `input` is the raw parameter list, without the `Signature ` scheme prefix.
/// Repeated keys are yielded in encounter order; consumers apply
/// last-write-wins.
#[inline]
pub fn parse(input: &str) -> ParamIter<'_> {
    ParamIter {
        input,
        pos: 0,
        expect_param: false,
        is_broken: false,
    }
}
