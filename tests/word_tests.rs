use boggle_solver::word::follows_qu_rule;
use boggle_solver::{normalize_word, score_word, total_score};

#[test]
fn test_accepts_plain_words() {
    assert_eq!(normalize_word("cat"), Some("cat".to_string()));
    assert_eq!(normalize_word("boggle"), Some("boggle".to_string()));
}

#[test]
fn test_lowercases() {
    assert_eq!(normalize_word("HeLLo"), Some("hello".to_string()));
    assert_eq!(normalize_word("QUEEN"), Some("queen".to_string()));
}

#[test]
fn test_strips_line_endings() {
    assert_eq!(normalize_word("cat\n"), Some("cat".to_string()));
    assert_eq!(normalize_word("cat\r\n"), Some("cat".to_string()));
    assert_eq!(normalize_word("cat\r"), Some("cat".to_string()));
}

#[test]
fn test_rejects_short_words() {
    assert_eq!(normalize_word(""), None);
    assert_eq!(normalize_word("a"), None);
    assert_eq!(normalize_word("at"), None);
    assert_eq!(normalize_word("at\r\n"), None);
}

#[test]
fn test_rejects_non_letters() {
    assert_eq!(normalize_word("don't"), None);
    assert_eq!(normalize_word("x-ray"), None);
    assert_eq!(normalize_word("abc1"), None);
    assert_eq!(normalize_word("two words"), None);
    assert_eq!(normalize_word(" cat"), None);
    assert_eq!(normalize_word("café"), None);
}

#[test]
fn test_qu_rule() {
    assert_eq!(normalize_word("quiz"), Some("quiz".to_string()));
    assert_eq!(normalize_word("equal"), Some("equal".to_string()));
    assert_eq!(normalize_word("qatar"), None);
    assert_eq!(normalize_word("iraq"), None);
    assert_eq!(normalize_word("quaq"), None);
    // upper-case Q obeys the same rule
    assert_eq!(normalize_word("Qatar"), None);
    assert_eq!(normalize_word("QUIZ"), Some("quiz".to_string()));
}

#[test]
fn test_follows_qu_rule() {
    assert!(follows_qu_rule("abc"));
    assert!(follows_qu_rule("ququ"));
    assert!(!follows_qu_rule("q"));
    assert!(!follows_qu_rule("qq"));
    assert!(!follows_qu_rule("aqa"));
}

#[test]
fn test_score_by_length() {
    assert_eq!(score_word("cat"), 1);
    assert_eq!(score_word("cats"), 1);
    assert_eq!(score_word("coats"), 2);
    assert_eq!(score_word("boggle"), 3);
    assert_eq!(score_word("puzzled"), 5);
    assert_eq!(score_word("quizzing"), 11);
    assert_eq!(score_word("extraordinary"), 11);
}

#[test]
fn test_score_counts_qu_as_two_letters() {
    // "quiz" takes three cells but scores as a four-letter word
    assert_eq!(score_word("quiz"), 1);
    assert_eq!(score_word("queen"), 2);
}

#[test]
fn test_total_score() {
    assert_eq!(total_score(Vec::<String>::new()), 0);
    assert_eq!(total_score(["cat", "coats", "boggle", "puzzled", "quizzing"]), 22);
}
