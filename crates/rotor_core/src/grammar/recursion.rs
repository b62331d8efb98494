//! Left-recursion elimination.
//!
//! Rewrites every directly left-recursive production
//!
//! ```text
//! A  -> A α₁ | … | A αₙ | β₁ | … | βₘ
//! ```
//!
//! into the pair
//!
//! ```text
//! A  -> β₁ A' | … | βₘ A'
//! A' -> α₁ A' | … | αₙ A' | [empty]
//! ```
//!
//! and, before classifying a production, substitutes the alternatives of
//! already-processed productions into its leading position so that
//! recursion introduced *through* an earlier production (derivative left
//! recursion) becomes direct and is eliminated by the same rewrite:
//!
//! ```text
//! A -> C | e
//! C -> A | b c      (left-recursive via A)
//! ```

use crate::error::RotorResult;
use crate::grammar::production::{Grammar, Production};
use crate::grammar::symbol::{
    NonTerminalParams, RhsSymbol, Rule, prefix_params, rule_in, rule_in_any,
};

/// Remove direct and derivative left recursion from `grammar`, in place.
///
/// Productions are consumed in declaration order.  A production whose
/// right-hand side collapses to the single ε alternative is dropped, and
/// every production emitted before it is rewritten to account for the
/// vanished reference (one level deep; a production that in turn collapses
/// because of that rewrite is left as is).
pub fn eliminate_left_recursion(grammar: &mut Grammar) -> RotorResult<()> {
    grammar.validate()?;
    let mut output: Vec<Production> = Vec::new();
    let mut prev: Vec<Production> = Vec::new();
    for prod in &grammar.productions {
        let prod = substitute_prev(prod, &prev);

        let mut alphas: Vec<Rule> = Vec::new();
        let mut betas: Vec<Rule> = Vec::new();
        for rule in &prod.rhs {
            if rule[0].name() == prod.name {
                // Strip the recursive head.  ε symbols inside a longer
                // tail contribute nothing (AεB ≡ AB), so drop them too.
                let mut alpha: Rule = rule[1..].to_vec();
                if alpha.len() > 1 {
                    alpha.retain(|s| !s.is_empty_terminal());
                }
                alphas.push(alpha);
            } else {
                betas.push(rule.clone());
            }
        }

        if !alphas.is_empty() {
            let prime_name = format!("{}'", prod.name);
            let prime_ref = RhsSymbol::NonTerminal {
                name: prime_name.clone(),
                params: Some(NonTerminalParams {
                    passthrough: prefix_params(&prod.params, "?"),
                    ..Default::default()
                }),
            };

            let mut head = Production::new(prod.name.clone(), prod.params.clone());
            for beta in betas {
                let mut beta = beta;
                // A leading ε is equivalent to the empty string: εBA' ≡ BA'
                // and a β of ε alone leaves A' standing by itself.
                if beta.len() > 1 && beta[0].is_empty_terminal() {
                    beta.remove(0);
                } else if beta.len() == 1 && beta[0].is_empty_terminal() {
                    beta.clear();
                }
                beta.push(prime_ref.clone());
                head.rhs.push(beta);
            }

            let mut prime = Production::new(prime_name, prod.params.clone());
            for alpha in alphas {
                let mut alpha = alpha;
                alpha.push(prime_ref.clone());
                prime.rhs.push(alpha);
            }
            let epsilon = vec![RhsSymbol::empty()];
            if !rule_in(&prime.rhs, &epsilon) {
                prime.rhs.push(epsilon);
            }

            output.push(head);
            output.push(prime);
        } else if prod.is_pure_epsilon() {
            // The production derives only ε: drop it and erase the
            // references from everything already emitted.
            for i in 0..prev.len() {
                prev[i] = strip_dropped(&prev[i], &prod);
            }
            for emitted in &mut output {
                *emitted = strip_dropped(emitted, &prod);
            }
        } else {
            output.push(prod.clone());
        }

        prev.push(prod);
    }
    grammar.productions = output;
    Ok(())
}

/// Substitute the alternatives of already-processed productions into
/// `prod` wherever one of them is the leading symbol of an alternative.
fn substitute_prev(prod: &Production, prev: &[Production]) -> Production {
    if prev.is_empty() {
        return prod.clone();
    }
    let mut new_prod = Production::new(prod.name.clone(), prod.params.clone());
    for rule in &prod.rhs {
        let mut applied: Vec<Rule> = Vec::new();
        let mut replaced = false;
        for other in prev {
            if rule[0].name() != other.name {
                continue;
            }
            replaced = true;
            let tail = &rule[1..];
            if other.is_pure_epsilon() {
                // ε followed by anything is just the tail; a lone
                // reference collapses to ε itself.
                let candidate: Rule = if tail.is_empty() {
                    vec![RhsSymbol::empty()]
                } else {
                    tail.to_vec()
                };
                if !rule_in_any(&[&applied, &prod.rhs], &candidate) {
                    applied.push(candidate);
                }
            } else {
                for other_rule in &other.rhs {
                    // γ ≠ ε: pure-ε alternatives of the substituted
                    // production contribute nothing here.
                    if matches!(other_rule.as_slice(), [s] if s.is_empty_terminal()) {
                        continue;
                    }
                    let mut combined = other_rule.clone();
                    combined.extend(tail.iter().cloned());
                    if !rule_in_any(&[&applied, &prod.rhs], &combined) {
                        applied.push(combined);
                    }
                }
            }
        }
        if replaced {
            new_prod.rhs.extend(applied);
        } else {
            new_prod.rhs.push(rule.clone());
        }
    }
    new_prod
}

/// Erase every reference to `dropped` (a production that derives only ε)
/// from `prod`.  An alternative consisting solely of such references
/// becomes the ε alternative, appended once at the end.
fn strip_dropped(prod: &Production, dropped: &Production) -> Production {
    let mut new_prod = Production::new(prod.name.clone(), prod.params.clone());
    let mut epsilon_needed = false;
    for rule in &prod.rhs {
        if rule.len() == 1 {
            if rule[0].name() == dropped.name {
                epsilon_needed = true;
            } else {
                new_prod.rhs.push(rule.clone());
            }
        } else {
            let stripped: Rule = rule
                .iter()
                .filter(|s| s.name() != dropped.name)
                .cloned()
                .collect();
            if stripped.is_empty() {
                epsilon_needed = true;
            } else {
                new_prod.rhs.push(stripped);
            }
        }
    }
    if epsilon_needed {
        let epsilon = vec![RhsSymbol::empty()];
        if !rule_in(&new_prod.rhs, &epsilon) {
            new_prod.rhs.push(epsilon);
        }
    }
    new_prod
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
