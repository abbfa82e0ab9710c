//! A word to meaning dictionary.

use crate::map::AvlTreeMap;

pub type Word = String;
pub type Meaning = String;

/// An AVL tree map from words to their meanings.
///
/// ```
/// use avl_dictionary::Dictionary;
/// let mut dictionary = Dictionary::new();
/// dictionary.insert("avl".to_string(), "a self-balancing search tree".to_string());
/// assert!(dictionary.contains_key("avl"));
/// assert_eq!(dictionary.find("avl").map(String::as_str), Ok("a self-balancing search tree"));
/// ```
pub type Dictionary = AvlTreeMap<Word, Meaning>;

#[cfg(test)]
mod tests {
    use super::Dictionary;
    use crate::Error;

    fn entry(word: &str, meaning: &str) -> (String, String) {
        (word.to_string(), meaning.to_string())
    }

    #[test]
    fn test_lookup_by_str() {
        let dictionary: Dictionary = [
            entry("tree", "a perennial plant"),
            entry("node", "a point in a network"),
            entry("root", "the base of a plant"),
        ]
        .into_iter()
        .collect();
        dictionary.check_consistency();

        assert_eq!(dictionary.get("node").map(String::as_str), Some("a point in a network"));
        assert!(dictionary.contains_key("root"));
        assert!(!dictionary.contains_key("leaf"));
        assert_eq!(dictionary.find("leaf"), Err(Error::NotFound));
    }

    #[test]
    fn test_overwrite_meaning() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary
            .insert("bank".to_string(), "side of a river".to_string())
            .is_none());
        let old = dictionary.insert("bank".to_string(), "financial institution".to_string());
        assert_eq!(old.as_deref(), Some("side of a river"));
        assert_eq!(dictionary.len(), 1);
        assert_eq!(
            dictionary.find("bank").map(String::as_str),
            Ok("financial institution")
        );
    }

    #[test]
    fn test_print_sorted_words() {
        let mut dictionary = Dictionary::new();
        for (word, meaning) in [entry("b", "bee"), entry("c", "sea"), entry("a", "ay")] {
            dictionary.insert(word, meaning);
        }
        assert_eq!(dictionary.display_in_order().to_string(), "a\tay\nb\tbee\nc\tsea\n");

        assert_eq!(dictionary.remove("b").as_deref(), Ok("bee"));
        assert_eq!(dictionary.display_in_order().to_string(), "a\tay\nc\tsea\n");
    }
}
