use rpntree::{Expr, PostfixBuilder};

fn main() -> Result<(), String> {
    // from a postfix string
    let built = PostfixBuilder::build_str("4 3 2 - 1 + *").map_err(|e| e.to_string())?;
    println!("{} = {}", built, built.eval().map_err(|e| e.to_string())?);

    // by hand
    let manual = Expr::plus(
        Expr::multiply(Expr::number(12), Expr::number(2)),
        Expr::divide(Expr::number(64), Expr::number(2)),
    );
    println!("{} = {}", manual, manual.eval().map_err(|e| e.to_string())?);
    Ok(())
}
