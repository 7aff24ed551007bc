use std::collections::BTreeSet;

use boggle_solver::{normalize_word, Board, BoggleSolver, SolverConfig, Trie};
use proptest::prelude::*;

/// Board cells needed to spell a normalized word; "qu" takes one `q` cell.
fn word_cells(word: &str) -> Vec<u8> {
    let bytes = word.as_bytes();
    let mut cells = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        cells.push(bytes[i]);
        i += if bytes[i] == b'q' { 2 } else { 1 };
    }
    cells
}

/// Independent check: does some simple path of adjacent cells spell `cells`?
fn spellable(board: &Board, cells: &[u8]) -> bool {
    fn walk(board: &Board, x: usize, y: usize, rest: &[u8], used: &mut Vec<(usize, usize)>) -> bool {
        if board.letter_at(x, y) != rest[0] {
            return false;
        }
        if rest.len() == 1 {
            return true;
        }
        used.push((x, y));
        let found = board
            .neighbors(x, y)
            .any(|(nx, ny)| !used.contains(&(nx, ny)) && walk(board, nx, ny, &rest[1..], used));
        used.pop();
        found
    }

    board
        .coordinates()
        .any(|(x, y)| walk(board, x, y, cells, &mut Vec::new()))
}

fn expected_words(dictionary: &[String], board: &Board) -> BTreeSet<String> {
    dictionary
        .iter()
        .filter_map(|raw| normalize_word(raw))
        .filter(|word| spellable(board, &word_cells(word)))
        .collect()
}

fn board_strategy() -> impl Strategy<Value = Board> {
    (1usize..=4, 1usize..=4)
        .prop_filter("at least two cells", |(w, h)| w * h >= 2)
        .prop_flat_map(|(w, h)| {
            (
                Just(w),
                Just(h),
                proptest::collection::vec(prop::sample::select(b"aeqstu".to_vec()), w * h),
            )
        })
        .prop_map(|(w, h, cells)| {
            let letters: String = cells.into_iter().map(char::from).collect();
            Board::new(&letters, w, h).unwrap()
        })
}

fn dictionary_strategy() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[aeqstuAEQ]{1,7}", 1..60)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn found_words_are_exactly_the_spellable_ones(
        dictionary in dictionary_strategy(),
        board in board_strategy(),
    ) {
        let mut solver = BoggleSolver::new(SolverConfig::new(3));
        for word in &dictionary {
            solver.insert_word(word);
        }

        let results = solver.solve(&board).unwrap();
        let found: BTreeSet<String> = results.words().iter().cloned().collect();
        prop_assert_eq!(found, expected_words(&dictionary, &board));
    }

    #[test]
    fn results_do_not_depend_on_worker_count(
        dictionary in dictionary_strategy(),
        board in board_strategy(),
    ) {
        let mut solver = BoggleSolver::new(SolverConfig::new(1));
        for word in &dictionary {
            solver.insert_word(word);
        }

        let expected = solver.solve(&board).unwrap();
        for workers in [2, 4, 8] {
            solver.set_workers(workers);
            prop_assert_eq!(&solver.solve(&board).unwrap(), &expected);
        }
    }

    #[test]
    fn inserted_words_obey_the_validator(raw in "[a-zA-Z' -]{0,8}") {
        let mut trie = Trie::new();
        let inserted = trie.insert(&raw);

        match normalize_word(&raw) {
            Some(word) => {
                prop_assert!(inserted);
                prop_assert!(word.len() >= 3);
                prop_assert!(word.bytes().all(|b| b.is_ascii_lowercase()));
                prop_assert!(word
                    .bytes()
                    .enumerate()
                    .all(|(i, b)| b != b'q' || word.as_bytes().get(i + 1) == Some(&b'u')));
                prop_assert!(trie.contains(&word));
            }
            None => {
                prop_assert!(!inserted);
                prop_assert!(trie.is_empty());
            }
        }
    }

    #[test]
    fn score_is_sum_over_unique_words(
        dictionary in dictionary_strategy(),
        board in board_strategy(),
    ) {
        let mut solver = BoggleSolver::new(SolverConfig::new(2));
        for word in &dictionary {
            solver.insert_word(word);
        }
        let results = solver.solve(&board).unwrap();
        let unique: BTreeSet<&String> = results.words().iter().collect();
        prop_assert_eq!(unique.len(), results.count());
        prop_assert_eq!(results.score(), boggle_solver::total_score(results.words()));
    }
}
