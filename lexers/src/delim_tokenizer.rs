#![deny(warnings)]

use crate::scanner::Scanner;

/// Splits input into the runs of characters between delimiters. Delimiters
/// are dropped and consecutive, leading or trailing ones yield no empty tokens.
pub struct DelimTokenizer<I: Iterator<Item=char>> {
    src: Scanner<I>,
    delims: Vec<char>,
}

impl<I: Iterator<Item=char>> DelimTokenizer<I> {
    pub fn new(source: I, delims: &[char]) -> Self {
        DelimTokenizer { src: Scanner::new(source), delims: delims.to_vec() }
    }
}

impl<'a> DelimTokenizer<std::str::Chars<'a>> {
    /// Tokenize on any run of whitespace.
    pub fn whitespace(source: &'a str) -> Self {
        Self::new(source.chars(), crate::WHITE)
    }
}

impl<I: Iterator<Item=char>> Iterator for DelimTokenizer<I> {
    type Item = String;
    fn next(&mut self) -> Option<Self::Item> {
        self.src.skip_all(&self.delims);
        self.src.ignore();
        if self.src.until_any(&self.delims) {
            Some(self.src.extract_string())
        } else {
            None
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
