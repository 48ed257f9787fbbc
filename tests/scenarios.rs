use freqmine::{apriori, canonical, fp, rules, TransactionStore};

fn labeled_itemsets(store: &TransactionStore, minsup: usize) -> Vec<(Vec<String>, usize)> {
    let frequent = apriori::mine(store, minsup);
    canonical::canonical_itemsets(&frequent, store)
        .into_iter()
        .map(|e| (e.items, e.support))
        .collect()
}

#[test]
fn four_transaction_basket() {
    let store = TransactionStore::new(vec![
        vec!["A", "B"],
        vec!["A", "B", "C"],
        vec!["A"],
        vec!["B", "C"],
    ]);

    let itemsets = labeled_itemsets(&store, 2);
    let expect = |items: &[&str], support: usize| {
        (items.iter().map(|s| s.to_string()).collect::<Vec<_>>(), support)
    };

    assert!(itemsets.contains(&expect(&["A"], 3)));
    assert!(itemsets.contains(&expect(&["B"], 3)));
    assert!(itemsets.contains(&expect(&["C"], 2)));
    assert!(itemsets.contains(&expect(&["A", "B"], 2)));
    // {B, C} occurs twice, {A, C} only once.
    assert!(itemsets.contains(&expect(&["B", "C"], 2)));
    assert!(!itemsets.iter().any(|(items, _)| items == &["A", "C"]));
}

#[test]
fn minsup_beyond_transaction_count_yields_empty_outputs() {
    let store = TransactionStore::new(vec![vec!["A", "B"], vec!["B", "C"]]);

    let frequent = apriori::mine(&store, 3);
    assert!(frequent.is_empty());
    assert!(fp::mine(&store, 3).is_empty());

    let mined = rules::generate(&frequent, &store, 0.5).unwrap();
    assert!(mined.is_empty());
}

#[test]
fn single_transaction_emits_both_directions_at_full_confidence() {
    let store = TransactionStore::new(vec![vec!["X", "Y"]]);

    for frequent in [apriori::mine(&store, 1), fp::mine(&store, 1)] {
        let entries = canonical::canonical_itemsets(&frequent, &store);
        let rendered: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            rendered,
            vec![
                "[X] (support: 1)",
                "[Y] (support: 1)",
                "[X, Y] (support: 1)",
            ]
        );

        let mined = rules::generate(&frequent, &store, 1.0).unwrap();
        let rendered: Vec<String> = canonical::canonical_rules(&mined, &store)
            .iter()
            .map(|e| e.to_string())
            .collect();
        assert_eq!(
            rendered,
            vec![
                "[X] => [Y] (confidence: 1.00)",
                "[Y] => [X] (confidence: 1.00)",
            ]
        );
    }
}

#[test]
fn minconf_zero_emits_every_split_of_every_multi_itemset() {
    let store = TransactionStore::new(vec![
        vec!["A", "B"],
        vec!["A", "B", "C"],
        vec!["A"],
        vec!["B", "C"],
    ]);
    let frequent = apriori::mine(&store, 2);
    let mined = rules::generate(&frequent, &store, 0.0).unwrap();

    let mut splits = 0;
    for (itemset, _) in frequent.iter() {
        if itemset.len() > 1 {
            // 2^n - 2 proper non-empty splits per itemset.
            splits += (1usize << itemset.len()) - 2;
        }
    }
    assert_eq!(mined.len(), splits);
}

#[test]
fn empty_input_produces_empty_results() {
    let store = TransactionStore::new(Vec::<Vec<String>>::new());

    let frequent = apriori::mine(&store, 1);
    assert!(frequent.is_empty());
    assert!(fp::mine(&store, 1).is_empty());
    assert!(rules::generate(&frequent, &store, 0.5).unwrap().is_empty());
    assert!(canonical::canonical_itemsets(&frequent, &store).is_empty());
}
