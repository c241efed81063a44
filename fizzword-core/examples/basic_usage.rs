//! Basic usage of the word replacer

use fizzword_core::{Config, ReplaceError, Tokenizer, WordReplacer};

fn main() -> Result<(), ReplaceError> {
    let replacer = WordReplacer::new();

    let text = "Mary had a little lamb, little lamb, little lamb";
    let result = replacer.process(text)?;
    println!("input:  {text}");
    println!("output: {}", result.output);
    println!("replaced {} of {} words", result.count, result.words);

    // Rejected inputs never produce partial output
    match replacer.process("short") {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("rejected: {e}"),
    }

    // Relax the bounds for longer text
    let config = Config::builder().min_length(1).max_length(10_000).build()?;
    let relaxed = WordReplacer::with_config(config)?;
    let long_text = "one two three four five six seven eight nine ten ".repeat(5);
    let result = relaxed.process(long_text.as_str())?;
    println!(
        "{} words in, {} words out, {} replaced",
        Tokenizer::new().count_words(&long_text),
        Tokenizer::new().count_words(&result.output),
        result.count
    );

    Ok(())
}
