use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use lexers::Scanner;
use thiserror::Error;

use crate::builder::BuildError;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum EvalErr {
    #[error("division by zero")]
    DivisionByZero,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Plus),
            "-" => Some(Operator::Minus),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }

    /// Combine two finished subtrees into a node for this operator.
    pub fn apply(self, lhs: Expr, rhs: Expr) -> Expr {
        let (lhs, rhs) = (Box::new(lhs), Box::new(rhs));
        match self {
            Operator::Plus => Expr::Plus(lhs, rhs),
            Operator::Minus => Expr::Minus(lhs, rhs),
            Operator::Multiply => Expr::Multiply(lhs, rhs),
            Operator::Divide => Expr::Divide(lhs, rhs),
        }
    }

    // Arithmetic wraps on overflow, division truncates toward zero
    fn eval(self, lhs: i64, rhs: i64) -> Result<i64, EvalErr> {
        match self {
            Operator::Plus => Ok(lhs.wrapping_add(rhs)),
            Operator::Minus => Ok(lhs.wrapping_sub(rhs)),
            Operator::Multiply => Ok(lhs.wrapping_mul(rhs)),
            Operator::Divide if rhs == 0 => Err(EvalErr::DivisionByZero),
            Operator::Divide => Ok(lhs.wrapping_div(rhs)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An integer arithmetic expression. Every node owns its children.
///
/// Walking, comparing, cloning and dropping use an explicit work stack, so
/// arbitrarily deep trees don't exhaust the call stack.
pub enum Expr {
    Number(i64),
    Plus(Box<Expr>, Box<Expr>),
    Minus(Box<Expr>, Box<Expr>),
    Multiply(Box<Expr>, Box<Expr>),
    Divide(Box<Expr>, Box<Expr>),
}

// Uniform view over the tree so walkers don't repeat the variant list
enum Node<'a> {
    Leaf(i64),
    Binary(Operator, &'a Expr, &'a Expr),
}

#[derive(PartialEq, Eq, Debug)]
enum Piece {
    Number(i64),
    Open,
    Close,
    Op(Operator),
}

enum Step<'a> {
    Visit(&'a Expr),
    Emit(Piece),
}

// Flattens a tree into postfix order, or into infix order with parens
struct Pieces<'a> {
    work: Vec<Step<'a>>,
    infix: bool,
}

impl<'a> Iterator for Pieces<'a> {
    type Item = Piece;
    fn next(&mut self) -> Option<Piece> {
        while let Some(step) = self.work.pop() {
            let expr = match step {
                Step::Emit(piece) => return Some(piece),
                Step::Visit(expr) => expr,
            };
            match expr.node() {
                Node::Leaf(n) => return Some(Piece::Number(n)),
                Node::Binary(op, lhs, rhs) if self.infix => self.work.extend([
                    Step::Emit(Piece::Close),
                    Step::Visit(rhs),
                    Step::Emit(Piece::Op(op)),
                    Step::Visit(lhs),
                    Step::Emit(Piece::Open),
                ]),
                Node::Binary(op, lhs, rhs) => self.work.extend([
                    Step::Emit(Piece::Op(op)),
                    Step::Visit(rhs),
                    Step::Visit(lhs),
                ]),
            }
        }
        None
    }
}

impl Expr {
    pub fn number(value: i64) -> Expr {
        Expr::Number(value)
    }

    pub fn plus(lhs: Expr, rhs: Expr) -> Expr {
        Operator::Plus.apply(lhs, rhs)
    }

    pub fn minus(lhs: Expr, rhs: Expr) -> Expr {
        Operator::Minus.apply(lhs, rhs)
    }

    pub fn multiply(lhs: Expr, rhs: Expr) -> Expr {
        Operator::Multiply.apply(lhs, rhs)
    }

    pub fn divide(lhs: Expr, rhs: Expr) -> Expr {
        Operator::Divide.apply(lhs, rhs)
    }

    /// Parse a signed integer literal such as `42`, `-7` or `+3`.
    pub fn from_token(token: &str) -> Result<Expr, BuildError> {
        let malformed = || BuildError::MalformedNumber(token.to_string());
        let mut scanner = Scanner::new(token.chars());
        let literal = scanner.scan_integer().ok_or_else(malformed)?;
        if scanner.next().is_some() {
            return Err(malformed());
        }
        // digits only by now, so failing here means out of range
        i64::from_str(&literal).map(Expr::Number).map_err(|_| malformed())
    }

    fn node(&self) -> Node<'_> {
        match self {
            Expr::Number(n) => Node::Leaf(*n),
            Expr::Plus(l, r) => Node::Binary(Operator::Plus, l, r),
            Expr::Minus(l, r) => Node::Binary(Operator::Minus, l, r),
            Expr::Multiply(l, r) => Node::Binary(Operator::Multiply, l, r),
            Expr::Divide(l, r) => Node::Binary(Operator::Divide, l, r),
        }
    }

    fn pieces(&self, infix: bool) -> Pieces<'_> {
        Pieces { work: vec![Step::Visit(self)], infix }
    }

    // Reduce the tree bottom-up the same way an RPN evaluator would,
    // children are always folded before their parent, lhs before rhs.
    fn fold<T, E>(
        &self,
        mut leaf: impl FnMut(i64) -> Result<T, E>,
        mut node: impl FnMut(Operator, T, T) -> Result<T, E>,
    ) -> Result<T, E> {
        let mut operands = Vec::new();
        for piece in self.pieces(false) {
            match piece {
                Piece::Number(n) => operands.push(leaf(n)?),
                Piece::Op(op) => {
                    let rhs = operands.pop();
                    let lhs = operands.pop();
                    match (lhs, rhs) {
                        (Some(lhs), Some(rhs)) => operands.push(node(op, lhs, rhs)?),
                        _ => unreachable!(),
                    }
                }
                Piece::Open | Piece::Close => unreachable!(),
            }
        }
        match operands.pop() {
            Some(result) => Ok(result),
            None => unreachable!(),
        }
    }

    /// The operator at the root, `None` for a number.
    pub fn operator(&self) -> Option<Operator> {
        match self.node() {
            Node::Leaf(_) => None,
            Node::Binary(op, _, _) => Some(op),
        }
    }

    pub fn eval(&self) -> Result<i64, EvalErr> {
        self.fold(Ok, |op, lhs, rhs| op.eval(lhs, rhs))
    }

    /// Fully parenthesized infix form, eg: `(4 * ((3 - 2) + 1))`
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Space separated postfix form, readable by `PostfixBuilder`.
    pub fn postfix(&self) -> String {
        self.pieces(false)
            .filter_map(|piece| match piece {
                Piece::Number(n) => Some(n.to_string()),
                Piece::Op(op) => Some(op.to_string()),
                Piece::Open | Piece::Close => None,
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    // Move binary children out so each node drops with leaves only
    fn detach_children(&mut self, pending: &mut Vec<Box<Expr>>) {
        match self {
            Expr::Number(_) => (),
            Expr::Plus(l, r) | Expr::Minus(l, r) | Expr::Multiply(l, r) | Expr::Divide(l, r) => {
                for child in [l, r] {
                    if child.operator().is_some() {
                        pending.push(std::mem::replace(child, Box::new(Expr::Number(0))));
                    }
                }
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut child) = pending.pop() {
            child.detach_children(&mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Expr {
        let cloned: Result<Expr, Infallible> =
            self.fold(|n| Ok(Expr::Number(n)), |op, lhs, rhs| Ok(op.apply(lhs, rhs)));
        match cloned {
            Ok(expr) => expr,
            Err(never) => match never {},
        }
    }
}

// Postfix order identifies a tree uniquely
impl PartialEq for Expr {
    fn eq(&self, other: &Expr) -> bool {
        self.pieces(false).eq(other.pieces(false))
    }
}

impl Eq for Expr {}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for piece in self.pieces(true) {
            match piece {
                Piece::Number(n) => write!(f, "{}", n)?,
                Piece::Open => write!(f, "(")?,
                Piece::Close => write!(f, ")")?,
                Piece::Op(op) => write!(f, " {} ", op)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Expr({})", self)
    }
}

impl FromStr for Expr {
    type Err = BuildError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expr::from_token(s)
    }
}
