#![no_main]

use libfuzzer_sys::fuzz_target;
use rotor_core::grammar::{self, Grammar, ParamList, Production, RhsSymbol, Rule};

const TERMINALS: [&str; 3] = ["a", "b", "c"];
const NON_TERMINALS: [&str; 3] = ["A", "B", "C"];

/// Build one alternative from two fuzz bytes.  Alternatives led by a
/// non-terminal always carry a terminal behind it, which keeps the input
/// class clear of degenerate unit cycles (`A -> A`).
fn rule_from(selector: u8, extra: u8) -> Rule {
    let t = TERMINALS[(selector & 0x03) as usize % 3];
    let n = NON_TERMINALS[((selector >> 2) & 0x03) as usize % 3];
    let s = TERMINALS[(extra & 0x03) as usize % 3];
    match selector >> 6 {
        0 => vec![RhsSymbol::terminal(t)],
        1 => vec![RhsSymbol::terminal(t), RhsSymbol::non_terminal(n)],
        2 => vec![RhsSymbol::non_terminal(n), RhsSymbol::terminal(t)],
        _ => vec![
            RhsSymbol::non_terminal(n),
            RhsSymbol::terminal(t),
            RhsSymbol::terminal(s),
        ],
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // Up to three productions of up to three alternatives each.
    let mut grammar = Grammar::default();
    let mut bytes = data.chunks_exact(2);
    'outer: for name in NON_TERMINALS {
        let mut prod = Production::new(name, ParamList::new());
        for _ in 0..3 {
            let Some(pair) = bytes.next() else {
                if !prod.rhs.is_empty() {
                    grammar.productions.push(prod);
                }
                break 'outer;
            };
            prod.rhs.push(rule_from(pair[0], pair[1]));
        }
        grammar.productions.push(prod);
    }
    if grammar.productions.is_empty() {
        return;
    }

    grammar::llkify(&mut grammar).expect("generated grammars are well-formed");

    // The pipeline's two guarantees for this input class: no alternative
    // starts with its own production, and no two alternatives of one
    // production share a first symbol.
    for prod in &grammar.productions {
        let mut firsts = Vec::new();
        for rule in &prod.rhs {
            assert!(!rule.is_empty());
            assert_ne!(rule[0].name(), prod.name, "left recursion survived");
            let first = rule[0].first_symbol_name().to_owned();
            assert!(!firsts.contains(&first), "shared first symbol survived");
            firsts.push(first);
        }
    }
});
