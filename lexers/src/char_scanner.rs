#![deny(warnings)]

use crate::scanner::Scanner;

pub static WHITE: &[char] = &[' ', '\t', '\n', '\r'];
static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
/// Operator symbols the lexer recognizes, whether or not an evaluator supports them.
pub static MATH_OPS: &[char] = &['+', '-', '*', '/', '%', '^'];


impl<I: Iterator<Item=char>> Scanner<I> {
    pub fn extract_string(&mut self) -> String {
        self.extract().into_iter().collect()
    }

    pub fn skip_ws(&mut self) -> bool {
        self.skip_all(WHITE)
    }

    // discard whatever was consumed plus any whitespace that follows
    pub fn ignore_ws(&mut self) {
        self.skip_ws();
        self.ignore();
    }

    // scan integers like [+-]?[0-9]+
    pub fn scan_integer(&mut self) -> Option<String> {
        let backtrack = self.pos();
        self.accept_any(&['+', '-']);
        if !self.skip_all(DIGITS) {
            self.set_pos(backtrack);
            return None;
        }
        Some(self.extract_string())
    }

    pub fn scan_math_op(&mut self) -> Option<String> {
        self.accept_any(MATH_OPS)?;
        Some(self.extract_string())
    }
}

///////////////////////////////////////////////////////////////////////////////
