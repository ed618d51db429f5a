use crate::builder::{BuildError, PostfixBuilder};
use crate::expr::{EvalErr, Expr};

fn n(value: i64) -> Expr {
    Expr::number(value)
}

fn malformed_expression(result: Result<Expr, BuildError>) -> bool {
    matches!(result, Err(BuildError::MalformedExpression(_)))
}

#[test]
fn build_and_eval() -> Result<(), BuildError> {
    let expr = PostfixBuilder::build_str("4 3 2 - 1 + *")?;
    assert_eq!(expr.render(), "(4 * ((3 - 2) + 1))");
    assert_eq!(expr.eval(), Ok(8));
    Ok(())
}

#[test]
fn matches_hand_built_tree() -> Result<(), BuildError> {
    let built = PostfixBuilder::build_str("12 2 * 64 2 / +")?;
    let manual = Expr::plus(Expr::multiply(n(12), n(2)), Expr::divide(n(64), n(2)));
    assert_eq!(built, manual);
    assert_eq!(built.eval(), manual.eval());
    assert_eq!(built.to_string(), "((12 * 2) + (64 / 2))");
    Ok(())
}

#[test]
fn operand_order() -> Result<(), BuildError> {
    assert_eq!(PostfixBuilder::build_str("5 2 -")?.eval(), Ok(3));
    assert_eq!(PostfixBuilder::build_str("2 5 -")?.eval(), Ok(-3));
    assert_eq!(PostfixBuilder::build_str("9 2 /")?.eval(), Ok(4));
    assert_eq!(PostfixBuilder::build_str("5 2 -")?, Expr::minus(n(5), n(2)));
    Ok(())
}

#[test]
fn single_number() -> Result<(), BuildError> {
    assert_eq!(PostfixBuilder::build_str("17")?, n(17));
    assert_eq!(PostfixBuilder::build_str("-17")?.eval(), Ok(-17));
    Ok(())
}

#[test]
fn signed_operands() -> Result<(), BuildError> {
    let expr = PostfixBuilder::build_str("-3 +4 -")?;
    assert_eq!(expr.render(), "(-3 - 4)");
    assert_eq!(expr.eval(), Ok(-7));
    Ok(())
}

#[test]
fn whitespace_handling() -> Result<(), BuildError> {
    let expected = PostfixBuilder::build_str("4 2 /")?;
    assert_eq!(PostfixBuilder::build_str("  4   2 / ")?, expected);
    assert_eq!(PostfixBuilder::build_str("4\t2\n/")?, expected);
    Ok(())
}

#[test]
fn stack_underflow() {
    assert!(malformed_expression(PostfixBuilder::build_str("+ 1 2")));
    assert!(malformed_expression(PostfixBuilder::build_str("1 +")));
    assert!(malformed_expression(PostfixBuilder::build_str("1 2 + *")));
}

#[test]
fn incomplete_expression() {
    assert!(malformed_expression(PostfixBuilder::build_str("1 2")));
    assert!(malformed_expression(PostfixBuilder::build_str("1 2 3 +")));
    assert_eq!(
        PostfixBuilder::build_str("1 2"),
        Err(BuildError::MalformedExpression(format!("2 operands left without an operator")))
    );
}

#[test]
fn empty_input() {
    assert!(malformed_expression(PostfixBuilder::build_str("")));
    assert!(malformed_expression(PostfixBuilder::build_str("   ")));
}

#[test]
fn bad_numbers() {
    assert_eq!(
        PostfixBuilder::build_str("a b +"),
        Err(BuildError::MalformedNumber(format!("a")))
    );
    assert_eq!(
        PostfixBuilder::build_str("1 2.5 +"),
        Err(BuildError::MalformedNumber(format!("2.5")))
    );
    assert_eq!(
        PostfixBuilder::build_str("3 4 ++"),
        Err(BuildError::MalformedNumber(format!("++")))
    );
}

#[test]
fn unsupported_operators() {
    assert_eq!(
        PostfixBuilder::build_str("2 3 %"),
        Err(BuildError::UnsupportedOperator(format!("%")))
    );
    assert_eq!(
        PostfixBuilder::build_str("2 3 ^"),
        Err(BuildError::UnsupportedOperator(format!("^")))
    );
}

#[test]
fn first_error_wins() {
    // the bad number comes before the underflow
    assert_eq!(
        PostfixBuilder::build_str("x +"),
        Err(BuildError::MalformedNumber(format!("x")))
    );
}

#[test]
fn division_by_zero_is_an_eval_error() -> Result<(), BuildError> {
    let expr = PostfixBuilder::build_str("1 0 /")?;
    assert_eq!(expr.render(), "(1 / 0)");
    assert_eq!(expr.eval(), Err(EvalErr::DivisionByZero));
    Ok(())
}

#[test]
fn rebuild_from_postfix() -> Result<(), BuildError> {
    for input in ["4 3 2 - 1 + *", "-8 2 / 3 -", "1 2 3 4 * * *", "0"] {
        let expr = PostfixBuilder::build_str(input)?;
        assert_eq!(PostfixBuilder::build_str(&expr.postfix())?, expr);
    }
    Ok(())
}

#[test]
fn build_from_tokens() -> Result<(), BuildError> {
    let tokens = vec!["6", "3", "/"].into_iter().map(String::from);
    assert_eq!(PostfixBuilder::build(tokens)?.eval(), Ok(2));
    Ok(())
}

#[test]
fn error_messages() {
    assert_eq!(
        BuildError::MalformedNumber(format!("a")).to_string(),
        "malformed number: 'a'"
    );
    assert_eq!(
        BuildError::UnsupportedOperator(format!("%")).to_string(),
        "unsupported operator: '%'"
    );
    assert_eq!(
        PostfixBuilder::build_str("+").map_err(|e| e.to_string()),
        Err(format!("malformed expression: operator '+' needs two operands"))
    );
}

#[test]
fn deep_left_chain() -> Result<(), BuildError> {
    // 1 1 + 1 + 1 + ... nests to the left
    let mut input = "1".to_string();
    for _ in 0..100_000 {
        input.push_str(" 1 +");
    }
    let expr = PostfixBuilder::build_str(&input)?;
    assert_eq!(expr.eval(), Ok(100_001));
    let rendered = expr.render();
    assert!(rendered.starts_with("((((") && rendered.ends_with("+ 1) + 1)"));
    assert_eq!(expr.postfix(), input);
    assert_eq!(expr.clone(), expr);
    assert_eq!(PostfixBuilder::build_str(&expr.postfix())?, expr);
    Ok(())
}

#[test]
fn deep_right_chain() -> Result<(), BuildError> {
    // 1 1 1 ... - - - nests to the right
    let depth = 100_000;
    let input = format!("{}{}", "1 ".repeat(depth + 1), "- ".repeat(depth));
    let expr = PostfixBuilder::build_str(&input)?;
    // 1 - (1 - (1 - ...)) alternates between 0 and 1
    assert_eq!(expr.eval(), Ok(1));
    assert!(expr.render().ends_with("(1 - 1))))"));
    Ok(())
}

#[test]
fn deep_chain_division_by_zero() -> Result<(), BuildError> {
    let mut input = "5 0 /".to_string();
    for _ in 0..100_000 {
        input.push_str(" 2 *");
    }
    let expr = PostfixBuilder::build_str(&input)?;
    assert_eq!(expr.eval(), Err(EvalErr::DivisionByZero));
    Ok(())
}
