use std::collections::VecDeque;
use std::io::{self, BufRead};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] io::Error),
    #[error("input is empty: expected the number of values")]
    MissingCount,
    #[error("input ended after {index} of {expected} values")]
    MissingValue { index: u64, expected: u64 },
    #[error("line {line}: invalid count {token:?}")]
    InvalidCount { token: String, line: usize },
    #[error("line {line}: invalid value #{} {token:?}", .index + 1)]
    InvalidValue { token: String, line: usize, index: u64 },
}

/// Pulls whitespace-separated tokens out of a reader one line at a time,
/// remembering which line each token came from.
pub struct TokenReader<R> {
    reader: R,
    line: usize,
    pending: VecDeque<String>,
    buf: String,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            reader,
            line: 0,
            pending: VecDeque::new(),
            buf: String::new(),
        }
    }

    /// Line number of the most recently returned token (1-based).
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> Result<Option<String>, InputError> {
        while self.pending.is_empty() {
            self.buf.clear();
            if self.reader.read_line(&mut self.buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending
                .extend(self.buf.split_whitespace().map(str::to_owned));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads the leading operation count.
    pub fn read_count(&mut self) -> Result<i64, InputError> {
        let token = self.next_token()?.ok_or(InputError::MissingCount)?;
        token.parse().map_err(|_| InputError::InvalidCount {
            token,
            line: self.line,
        })
    }

    /// Reads value number `index` (0-based) out of `expected`.
    pub fn read_value(&mut self, index: u64, expected: u64) -> Result<i32, InputError> {
        let token = self
            .next_token()?
            .ok_or(InputError::MissingValue { index, expected })?;
        token.parse().map_err(|_| InputError::InvalidValue {
            token,
            line: self.line,
            index,
        })
    }
}
