use avl_dictionary::{Dictionary, Error};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let mut dictionary = Dictionary::new();
    for (word, meaning) in [
        ("apple", "a round fruit"),
        ("book", "a written work"),
        ("cat", "a small domesticated feline"),
        ("dog", "a domesticated canine"),
        ("echo", "a reflected sound"),
        ("flute", "a wind instrument"),
    ] {
        dictionary.insert(word.to_string(), meaning.to_string());
    }
    dictionary.insert("book".to_string(), "to reserve in advance".to_string());

    println!(
        "{} words, tree height {}",
        dictionary.len(),
        dictionary.height().unwrap_or(0)
    );
    println!("book: {}", dictionary.find("book")?);

    dictionary.remove("cat")?;
    assert_eq!(dictionary.find("cat"), Err(Error::NotFound));
    assert!(!dictionary.contains_key("cat"));

    dictionary.print_in_order(&mut std::io::stdout())?;
    Ok(())
}
