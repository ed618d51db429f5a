pub use builder::{BuildError, PostfixBuilder};
pub use expr::{EvalErr, Expr, Operator};

macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

pub mod builder;
#[cfg(test)]
mod builder_test;

pub mod expr;
