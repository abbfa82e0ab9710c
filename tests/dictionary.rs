use avl_dictionary::{Dictionary, Error};

fn build(words: &[(&str, &str)]) -> Dictionary {
    words
        .iter()
        .map(|(word, meaning)| (word.to_string(), meaning.to_string()))
        .collect()
}

#[test]
fn words_come_out_sorted() {
    let dictionary = build(&[
        ("pear", "a sweet fruit"),
        ("apple", "a round fruit"),
        ("zebra", "a striped animal"),
        ("mango", "a tropical fruit"),
    ]);
    let words: Vec<&str> = dictionary.iter().map(|(word, _)| word.as_str()).collect();
    assert_eq!(words, vec!["apple", "mango", "pear", "zebra"]);
    assert_eq!(dictionary.len(), 4);
}

#[test]
fn found_then_removed() {
    let mut dictionary = build(&[("one", "1"), ("two", "2"), ("three", "3")]);
    assert_eq!(dictionary.find("two").map(String::as_str), Ok("2"));

    assert_eq!(dictionary.remove("two"), Ok("2".to_string()));
    assert_eq!(dictionary.find("two"), Err(Error::NotFound));
    assert_eq!(dictionary.remove("two"), Err(Error::NotFound));
    assert!(!dictionary.contains_key("two"));
    assert_eq!(dictionary.len(), 2);
}

#[test]
fn removing_every_word_empties_dictionary() {
    let words: Vec<String> = (0..500).map(|i| format!("w{i:03}")).collect();
    let mut dictionary = Dictionary::new();
    for word in &words {
        assert!(dictionary.insert(word.clone(), word.to_uppercase()).is_none());
    }
    // Balanced: 500 entries fit in at most ~1.44 log2(500) levels.
    assert!(dictionary.height().unwrap() <= 12);

    for word in words.iter().rev() {
        assert_eq!(dictionary.remove(word.as_str()), Ok(word.to_uppercase()));
    }
    assert!(dictionary.is_empty());
    assert_eq!(dictionary.height(), None);
}

#[test]
fn second_insert_overwrites_meaning() {
    let mut dictionary = Dictionary::new();
    dictionary.insert("key".to_string(), "first".to_string());
    let previous = dictionary.insert("key".to_string(), "second".to_string());
    assert_eq!(previous.as_deref(), Some("first"));
    assert_eq!(dictionary.len(), 1);
    assert_eq!(dictionary.get("key").map(String::as_str), Some("second"));
}

#[test]
fn printed_as_tab_separated_lines() {
    let mut dictionary = build(&[("b", "bee"), ("a", "ay")]);
    let mut out = Vec::new();
    dictionary.print_in_order(&mut out).unwrap();
    assert_eq!(out, b"a\tay\nb\tbee\n");

    dictionary.clear();
    assert!(dictionary.is_empty());
    assert_eq!(dictionary.display_in_order().to_string(), "");
}
