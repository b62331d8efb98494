//! Expansion of optional right-hand-side symbols.

use crate::error::RotorResult;
use crate::grammar::production::Grammar;
use crate::grammar::symbol::{RhsSymbol, Rule, rule_in};

/// Expand every optional non-terminal reference into explicit alternatives.
///
/// For each alternative containing an optional symbol, an additional
/// alternative with that symbol removed is appended directly after it.
/// Derived alternatives are expanded in turn, so no optional marker is left
/// with observable effect.  An alternative that loses its last symbol
/// becomes the single ε alternative, which is appended at most once per
/// production.  Duplicate alternatives (by symbol-name sequence) are not
/// emitted, which makes the pass idempotent.
pub fn expand_optionals(grammar: &mut Grammar) -> RotorResult<()> {
    grammar.validate()?;
    for prod in &mut grammar.productions {
        let mut new_rules: Vec<Rule> = Vec::new();
        let mut needs_epsilon = false;
        for rule in &prod.rhs {
            push_expanded(rule, &mut new_rules, &mut needs_epsilon);
        }
        if needs_epsilon {
            let epsilon = vec![RhsSymbol::empty()];
            if !rule_in(&new_rules, &epsilon) {
                new_rules.push(epsilon);
            }
        }
        prod.rhs = new_rules;
    }
    Ok(())
}

/// Append `rule` (unless already present) followed by every alternative
/// derivable from it by dropping one optional symbol at a time.
fn push_expanded(rule: &Rule, out: &mut Vec<Rule>, needs_epsilon: &mut bool) {
    if rule_in(out, rule) {
        return;
    }
    out.push(rule.clone());
    for (pos, symbol) in rule.iter().enumerate() {
        if !symbol.is_optional() {
            continue;
        }
        let mut derived = rule.clone();
        derived.remove(pos);
        if derived.is_empty() {
            *needs_epsilon = true;
        } else {
            push_expanded(&derived, out, needs_epsilon);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::production::Production;
    use crate::grammar::symbol::{NonTerminalParams, ParamList};

    fn optional(name: &str) -> RhsSymbol {
        RhsSymbol::NonTerminal {
            name: name.to_owned(),
            params: Some(NonTerminalParams {
                optional: Some(true),
                ..Default::default()
            }),
        }
    }

    fn names(rule: &Rule) -> Vec<&str> {
        rule.iter().map(RhsSymbol::name).collect()
    }

    fn grammar_with_rules(rules: Vec<Rule>) -> Grammar {
        let mut prod = Production::new("A", ParamList::new());
        prod.rhs = rules;
        Grammar::new(vec![prod])
    }

    #[test]
    fn test_expand_middle_optional() {
        let mut grammar = grammar_with_rules(vec![vec![
            RhsSymbol::terminal("a"),
            optional("B"),
            RhsSymbol::terminal("c"),
        ]]);
        expand_optionals(&mut grammar).unwrap();
        let rhs = &grammar.productions[0].rhs;
        assert_eq!(rhs.len(), 2);
        assert_eq!(names(&rhs[0]), ["a", "B", "c"]);
        assert_eq!(names(&rhs[1]), ["a", "c"]);
    }

    #[test]
    fn test_expand_trailing_optional_keeps_prefix() {
        let mut grammar = grammar_with_rules(vec![vec![
            RhsSymbol::terminal("a"),
            optional("B"),
        ]]);
        expand_optionals(&mut grammar).unwrap();
        let rhs = &grammar.productions[0].rhs;
        assert_eq!(rhs.len(), 2);
        assert_eq!(names(&rhs[1]), ["a"]);
    }

    #[test]
    fn test_lone_optional_becomes_epsilon_once() {
        let mut grammar = grammar_with_rules(vec![
            vec![optional("B")],
            vec![optional("C")],
        ]);
        expand_optionals(&mut grammar).unwrap();
        let rhs = &grammar.productions[0].rhs;
        assert_eq!(rhs.len(), 3);
        assert_eq!(names(&rhs[0]), ["B"]);
        assert_eq!(names(&rhs[1]), ["C"]);
        assert_eq!(names(&rhs[2]), ["[empty]"]);
    }

    #[test]
    fn test_multiple_optionals_expand_fully() {
        // for-statement shape: all combinations of present/absent appear.
        let mut grammar = grammar_with_rules(vec![vec![
            RhsSymbol::terminal("("),
            optional("E1"),
            RhsSymbol::terminal(";"),
            optional("E2"),
            RhsSymbol::terminal(")"),
        ]]);
        expand_optionals(&mut grammar).unwrap();
        let rhs = &grammar.productions[0].rhs;
        assert_eq!(rhs.len(), 4);
        assert_eq!(names(&rhs[0]), ["(", "E1", ";", "E2", ")"]);
        assert_eq!(names(&rhs[1]), ["(", ";", "E2", ")"]);
        assert_eq!(names(&rhs[2]), ["(", ";", ")"]);
        assert_eq!(names(&rhs[3]), ["(", "E1", ";", ")"]);
    }

    #[test]
    fn test_expansion_is_idempotent() {
        let mut grammar = grammar_with_rules(vec![
            vec![RhsSymbol::terminal("a"), optional("B"), optional("C")],
            vec![optional("D")],
        ]);
        expand_optionals(&mut grammar).unwrap();
        let once = grammar.clone();
        expand_optionals(&mut grammar).unwrap();
        assert_eq!(grammar, once);
    }
}
