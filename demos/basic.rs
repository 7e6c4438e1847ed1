//! Examples of using the character trie
use char_trie::{find_longest_common_word, Trie, WordQueries};

fn main() {
    // Create a new trie and insert some values
    let mut trie = Trie::new();
    for (word, idx) in [("apple", 1), ("app", 2), ("banana", 3), ("bat", 4)].iter() {
        trie.put(word, Some(*idx)).unwrap();
    }

    // Check values
    assert_eq!(trie.get("app").unwrap(), Some(&2));
    assert_eq!(trie.get("ap").unwrap(), None);
    println!("All keys: {:?}", trie.keys());
    println!("Keys with prefix 'ba': {:?}", trie.keys_with_prefix("ba"));
    println!(
        "Longest prefix of 'application': {:?}",
        trie.longest_prefix_of("application").unwrap()
    );

    // Deleting a key prunes only the nodes no other key needs
    assert!(trie.delete("app").unwrap());
    assert_eq!(trie.get("apple").unwrap(), Some(&1));
    println!("Remaining keys: {:?}, empty: {}", trie.keys(), trie.is_empty());

    // Word queries
    assert_eq!(trie.count_words_with_suffix("e"), 1);
    assert!(trie.has_prefix("ban"));
    assert!(!trie.has_prefix("cat"));

    let common = find_longest_common_word(&["flower", "flow", "flight"]).unwrap();
    println!("Longest common prefix: {:?}", common);
}
