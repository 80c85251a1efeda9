//! Sources of player answers
//!
//! The game asks two kinds of question: a one-character direction at every
//! room and a free-text suspect name at the end. [`ReaderInput`] answers them
//! from any [`BufRead`] (stdin, a script file, a byte slice) while
//! [`ScriptedInput`] replays a fixed list of answers.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::Result;

/// Something that can answer the game's prompts
pub trait InputSource {
    /// Next non-whitespace character, or `None` once input is exhausted
    fn read_direction(&mut self) -> Result<Option<char>>;

    /// Rest of the next non-blank line with leading whitespace and the line
    /// terminator removed, or `None` once input is exhausted
    fn read_line(&mut self) -> Result<Option<String>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_direction(&mut self) -> Result<Option<char>> {
        (**self).read_direction()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        (**self).read_line()
    }
}

/// Character-stream reader over a [`BufRead`].
///
/// Several direction characters typed on one line are handed out one per
/// prompt, and a name prompt takes whatever is left of the current line.
///
/// Bytes that are not valid UTF-8 decode to U+FFFD, which the game reads
/// as an unrecognised answer rather than an input failure.
#[derive(Debug)]
pub struct ReaderInput<R> {
    reader: R,
    raw: Vec<u8>,
    line: String,
    pos: usize,
}

impl<R: BufRead> ReaderInput<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            raw: Vec::new(),
            line: String::new(),
            pos: 0,
        }
    }

    /// Advance past whitespace, pulling new lines as needed.
    /// Returns `false` at end of input.
    fn skip_whitespace(&mut self) -> Result<bool> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            self.pos += rest.len() - trimmed.len();
            if !trimmed.is_empty() {
                return Ok(true);
            }

            self.raw.clear();
            self.pos = 0;
            if self.reader.read_until(b'\n', &mut self.raw)? == 0 {
                self.line.clear();
                return Ok(false);
            }
            self.line = String::from_utf8_lossy(&self.raw).into_owned();
        }
    }
}

impl<R: BufRead> InputSource for ReaderInput<R> {
    fn read_direction(&mut self) -> Result<Option<char>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let choice = self.line[self.pos..].chars().next();
        if let Some(c) = choice {
            self.pos += c.len_utf8();
        }
        Ok(choice)
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        if !self.skip_whitespace()? {
            return Ok(None);
        }
        let rest = self.line[self.pos..].trim_end_matches(['\n', '\r']).to_string();
        self.pos = self.line.len();
        Ok(Some(rest))
    }
}

/// Fixed list of answers, one per prompt
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    answers: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Answers not consumed yet
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next_answer(&mut self) -> Option<String> {
        while let Some(answer) = self.answers.pop_front() {
            if !answer.trim().is_empty() {
                return Some(answer);
            }
        }
        None
    }
}

impl InputSource for ScriptedInput {
    fn read_direction(&mut self) -> Result<Option<char>> {
        Ok(self
            .next_answer()
            .and_then(|answer| answer.trim_start().chars().next()))
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self
            .next_answer()
            .map(|answer| answer.trim_start().trim_end_matches(['\n', '\r']).to_string()))
    }
}
