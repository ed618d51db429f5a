mod scanner;
mod char_scanner;
mod delim_tokenizer;

pub use scanner::Scanner;
pub use delim_tokenizer::DelimTokenizer;
pub use char_scanner::{MATH_OPS, WHITE};
