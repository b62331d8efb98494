//! Left-factoring of common alternative prefixes.
//!
//! Applies the rewrite
//!
//! ```text
//! A -> α β₁ | … | α βₙ | γ
//! ```
//!
//! becomes
//!
//! ```text
//! A   -> α A0 | γ
//! A0  -> β₁ | … | βₙ
//! ```
//!
//! Auxiliary productions are named `{A}A{i}` where `i` is the index of the
//! factored leading symbol in discovery order, and are themselves factored
//! recursively.

use std::collections::HashMap;

use crate::error::RotorResult;
use crate::grammar::production::{Grammar, Production};
use crate::grammar::symbol::{
    NonTerminalParams, ParamList, RhsSymbol, Rule, prefix_params, rule_in, symbol_recorded,
};

/// Left-factor every production of `grammar`, in place.  New auxiliary
/// productions are inserted directly after the production they were
/// factored out of.
pub fn left_factor(grammar: &mut Grammar) -> RotorResult<()> {
    grammar.validate()?;
    let mut productions: Vec<Production> = Vec::new();
    for prod in &grammar.productions {
        let (auxiliaries, new_rules) = factor_rules(&prod.rhs, &prod.name, &prod.params);
        let mut prod = prod.clone();
        if !new_rules.is_empty() {
            prod.rhs = new_rules;
        }
        productions.push(prod);
        productions.extend(auxiliaries);
    }
    grammar.productions = productions;
    Ok(())
}

/// Factor one rule set.  Returns the auxiliary productions discovered
/// (recursively) and the replacement rule set; the latter is empty when no
/// alternative shares its leading symbol with another.
fn factor_rules(
    rules: &[Rule],
    prod_name: &str,
    prod_params: &ParamList,
) -> (Vec<Production>, Vec<Rule>) {
    // The leading symbols shared by two or more alternatives, in discovery
    // order, with the per-symbol suffixes (β) and the unrelated
    // alternatives (γ) keyed by the leading symbol's name.
    let mut alphas: Vec<RhsSymbol> = Vec::new();
    let mut alpha_betas: HashMap<String, Vec<Rule>> = HashMap::new();
    let mut alpha_gammas: HashMap<String, Vec<Rule>> = HashMap::new();

    for (i, rule) in rules.iter().enumerate() {
        let mut betas: Vec<Rule> = Vec::new();
        let mut gammas: Vec<Rule> = Vec::new();
        let mut left_repeat = false;
        for (j, other) in rules.iter().enumerate() {
            if j != i && first_symbol_same(rule, other) {
                left_repeat = true;
                let beta = tail_of(other);
                if !rule_in(&betas, &beta) {
                    betas.push(beta);
                }
            } else if !first_symbol_same(rule, other) {
                gammas.push(other.clone());
            }
        }
        if left_repeat && !symbol_recorded(&alphas, &rule[0]) {
            let key = rule[0].first_symbol_name().to_owned();
            alphas.push(rule[0].clone());
            // The suffix of the current alternative comes first, unless it
            // is ε, which sorts last.
            let primary = tail_of(rule);
            let ordered = if is_epsilon_rule(&primary) {
                let mut list = betas;
                if !rule_in(&list, &primary) {
                    list.push(primary);
                }
                list
            } else {
                let mut list = vec![primary];
                for beta in betas {
                    if !rule_in(&list, &beta) {
                        list.push(beta);
                    }
                }
                list
            };
            alpha_betas.insert(key.clone(), ordered);
            alpha_gammas.insert(key, gammas);
        }
    }

    let mut new_rules: Vec<Rule> = Vec::new();
    let mut auxiliaries: Vec<Production> = Vec::new();
    for i in (0..alphas.len()).rev() {
        let alpha = &alphas[i];
        let key = alpha.first_symbol_name();
        let aux_name = format!("{prod_name}A{i}");
        let aux_ref = RhsSymbol::NonTerminal {
            name: aux_name.clone(),
            params: Some(NonTerminalParams {
                passthrough: prefix_params(prod_params, "?"),
                ..Default::default()
            }),
        };
        new_rules.insert(0, vec![alpha.clone(), aux_ref]);

        for gamma in &alpha_gammas[key] {
            // An alternative led by another factored symbol is covered by
            // that symbol's own `α Ai` rule; an alternative shared with the
            // next factored symbol is emitted there instead.
            if symbol_recorded(&alphas, &gamma[0]) {
                continue;
            }
            let duplicated_later = i + 1 < alphas.len()
                && rule_in(&alpha_gammas[alphas[i + 1].first_symbol_name()], gamma);
            if !duplicated_later {
                new_rules.push(gamma.clone());
            }
        }

        let mut aux = Production::new(aux_name.clone(), prod_params.clone());
        aux.rhs = alpha_betas[key].clone();
        let (further, aux_rules) = factor_rules(&aux.rhs, &aux_name, prod_params);
        if !aux_rules.is_empty() {
            aux.rhs = aux_rules;
        }
        auxiliaries.insert(0, aux);
        auxiliaries.extend(further);
    }
    (auxiliaries, new_rules)
}

/// Whether two alternatives share their first-symbol name.
fn first_symbol_same(a: &[RhsSymbol], b: &[RhsSymbol]) -> bool {
    a[0].first_symbol_name() == b[0].first_symbol_name()
}

/// The suffix of an alternative after its leading symbol: ε when nothing
/// follows, and for a lone conditional the conditional stripped of its
/// first part.
fn tail_of(rule: &[RhsSymbol]) -> Rule {
    if rule.len() > 1 {
        return rule[1..].to_vec();
    }
    if let [RhsSymbol::Conditional { conditions, parts }] = rule
        && parts.len() > 1
    {
        return vec![RhsSymbol::Conditional {
            conditions: conditions.clone(),
            parts: parts[1..].to_vec(),
        }];
    }
    vec![RhsSymbol::empty()]
}

fn is_epsilon_rule(rule: &[RhsSymbol]) -> bool {
    matches!(rule, [s] if s.is_empty_terminal())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
