//! Property tests for the grammar preparation pipeline.
//!
//! Grammars are generated over the non-terminals `A`/`B`/`C` and the
//! terminals `a`/`b`/`c`.  Alternatives led by a non-terminal always carry
//! a terminal behind it, which keeps the generated class clear of the
//! degenerate unit cycles (`A -> A`) the rewrite does not claim to handle.

use std::collections::{BTreeSet, VecDeque};

use proptest::prelude::*;
use rotor_core::grammar::{
    Grammar, ParamList, Production, RhsSymbol, Rule, eliminate_left_recursion, expand_optionals,
    left_factor, llkify,
};

const TERMINALS: [&str; 3] = ["a", "b", "c"];
const NON_TERMINALS: [&str; 3] = ["A", "B", "C"];

fn arb_symbol() -> impl Strategy<Value = RhsSymbol> {
    prop_oneof![
        (0..3usize).prop_map(|i| RhsSymbol::terminal(TERMINALS[i])),
        (0..3usize).prop_map(|i| RhsSymbol::non_terminal(NON_TERMINALS[i])),
    ]
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    prop_oneof![
        (0..3usize).prop_map(|t| vec![RhsSymbol::terminal(TERMINALS[t])]),
        ((0..3usize), arb_symbol())
            .prop_map(|(t, s)| vec![RhsSymbol::terminal(TERMINALS[t]), s]),
        ((0..3usize), (0..3usize)).prop_map(|(n, t)| {
            vec![
                RhsSymbol::non_terminal(NON_TERMINALS[n]),
                RhsSymbol::terminal(TERMINALS[t]),
            ]
        }),
        ((0..3usize), (0..3usize), arb_symbol()).prop_map(|(n, t, s)| {
            vec![
                RhsSymbol::non_terminal(NON_TERMINALS[n]),
                RhsSymbol::terminal(TERMINALS[t]),
                s,
            ]
        }),
    ]
}

fn arb_grammar() -> impl Strategy<Value = Grammar> {
    proptest::collection::vec(proptest::collection::vec(arb_rule(), 1..=3), 1..=3).prop_map(
        |rule_sets| {
            let productions = rule_sets
                .into_iter()
                .enumerate()
                .map(|(i, rules)| {
                    let mut prod = Production::new(NON_TERMINALS[i], ParamList::new());
                    prod.rhs = rules;
                    prod
                })
                .collect();
            Grammar::new(productions)
        },
    )
}

/// An optional non-terminal reference.
fn optional(name: &str) -> RhsSymbol {
    use rotor_core::grammar::NonTerminalParams;
    RhsSymbol::NonTerminal {
        name: name.to_owned(),
        params: Some(NonTerminalParams {
            optional: Some(true),
            ..Default::default()
        }),
    }
}

fn arb_optional_rule() -> impl Strategy<Value = Rule> {
    proptest::collection::vec(
        prop_oneof![
            (0..3usize).prop_map(|t| RhsSymbol::terminal(TERMINALS[t])),
            (0..3usize).prop_map(|n| optional(NON_TERMINALS[n])),
        ],
        1..=4,
    )
}

fn arb_optional_grammar() -> impl Strategy<Value = Grammar> {
    proptest::collection::vec(proptest::collection::vec(arb_optional_rule(), 1..=3), 1..=3)
        .prop_map(|rule_sets| {
            let productions = rule_sets
                .into_iter()
                .enumerate()
                .map(|(i, rules)| {
                    let mut prod = Production::new(NON_TERMINALS[i], ParamList::new());
                    prod.rhs = rules;
                    prod
                })
                .collect();
            Grammar::new(productions)
        })
}

/// All fully-terminal strings derivable from `start` using at most
/// `max_steps` production expansions, keeping sentential forms of at most
/// `max_len` symbols.  ε terminals vanish from the derived strings.
fn derivable_strings(
    grammar: &Grammar,
    start: &str,
    max_steps: usize,
    max_len: usize,
) -> BTreeSet<Vec<String>> {
    let is_non_terminal = |name: &str| grammar.production(name).is_some();
    let mut results = BTreeSet::new();
    let mut seen: BTreeSet<Vec<String>> = BTreeSet::new();
    let mut queue: VecDeque<(Vec<String>, usize)> = VecDeque::new();
    queue.push_back((vec![start.to_owned()], 0));
    while let Some((form, steps)) = queue.pop_front() {
        if let Some(idx) = form.iter().position(|s| is_non_terminal(s)) {
            if steps == max_steps {
                continue;
            }
            let prod = grammar.production(&form[idx]).unwrap();
            for rule in &prod.rhs {
                let mut next: Vec<String> = form[..idx].to_vec();
                for symbol in rule {
                    if !symbol.is_empty_terminal() {
                        next.push(symbol.name().to_owned());
                    }
                }
                next.extend(form[idx + 1..].iter().cloned());
                if next.len() <= max_len && seen.insert(next.clone()) {
                    queue.push_back((next, steps + 1));
                }
            }
        } else {
            results.insert(form);
        }
    }
    results
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn optional_expansion_is_idempotent(mut grammar in arb_optional_grammar()) {
        expand_optionals(&mut grammar).unwrap();
        let once = grammar.clone();
        expand_optionals(&mut grammar).unwrap();
        prop_assert_eq!(grammar, once);
    }

    #[test]
    fn no_left_recursive_alternative_after_elimination(mut grammar in arb_grammar()) {
        eliminate_left_recursion(&mut grammar).unwrap();
        for prod in &grammar.productions {
            for rule in &prod.rhs {
                prop_assert_ne!(rule[0].name(), prod.name.as_str(), "in {}", prod);
            }
        }
    }

    #[test]
    fn distinct_first_symbols_after_factoring(mut grammar in arb_grammar()) {
        left_factor(&mut grammar).unwrap();
        for prod in &grammar.productions {
            let firsts: Vec<&str> =
                prod.rhs.iter().map(|r| r[0].first_symbol_name()).collect();
            let unique: BTreeSet<&str> = firsts.iter().copied().collect();
            prop_assert_eq!(firsts.len(), unique.len(), "in {}", prod);
        }
    }

    #[test]
    fn llkify_preserves_bounded_derivations(grammar in arb_grammar()) {
        let mut transformed = grammar.clone();
        llkify(&mut transformed).unwrap();

        // Anything the original derives in a few steps, the transformed
        // grammar derives within a proportionally larger budget (auxiliary
        // symbols lengthen both the derivations and the intermediate
        // forms), and the other way around.
        let original_small = derivable_strings(&grammar, "A", 3, 4);
        let transformed_large = derivable_strings(&transformed, "A", 12, 8);
        for s in &original_small {
            prop_assert!(transformed_large.contains(s), "lost derivation {s:?}");
        }
        let transformed_small = derivable_strings(&transformed, "A", 3, 4);
        let original_large = derivable_strings(&grammar, "A", 12, 8);
        for s in &transformed_small {
            prop_assert!(original_large.contains(s), "new derivation {s:?}");
        }
    }
}
