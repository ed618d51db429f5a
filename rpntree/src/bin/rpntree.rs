use rpntree::PostfixBuilder;
use rustyline::error::ReadlineError;

fn evalexpr(input: &str) {
    match PostfixBuilder::build_str(input) {
        Err(e) => println!("Build error: {}", e),
        Ok(expr) => match expr.eval() {
            Err(e) => println!("Eval error: {}", e),
            Ok(result) => println!("{} = {}", expr, result),
        },
    }
}

fn main() -> Result<(), String> {
    if std::env::args().len() > 1 {
        let input = std::env::args().skip(1).collect::<Vec<String>>().join(" ");
        evalexpr(&input);
        return Ok(());
    }

    let histpath = dirs::home_dir().map(|h| h.join(".rpntree_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(path) = &histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => {
                rl.add_history_entry(line.as_str()).map_err(|e| e.to_string())?;
                evalexpr(&line);
            }
        }
    }
    if let Some(path) = &histpath {
        rl.save_history(path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
