//! Productions and the grammar container.

use std::fmt;

use crate::error::{RotorError, RotorResult};
use crate::grammar::symbol::{ParamList, RhsSymbol, Rule};

// ─────────────────────────────────────────────────────────────────────────────
// Production
// ─────────────────────────────────────────────────────────────────────────────

/// A single left-hand-side production of the syntactic grammar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Production {
    /// Production name; non-empty for well-formed grammars.
    pub name: String,
    /// Grammar parameters, in declaration order.
    pub params: ParamList,
    /// Alternatives, in declaration order.  Each alternative is a non-empty
    /// symbol sequence; an empty alternative is encoded as the single ε
    /// terminal.
    pub rhs: Vec<Rule>,
}

impl Production {
    /// Create a production with no alternatives yet.
    pub fn new(name: impl Into<String>, params: ParamList) -> Self {
        Self {
            name: name.into(),
            params,
            rhs: Vec::new(),
        }
    }

    /// Whether the production derives only ε.
    pub fn is_pure_epsilon(&self) -> bool {
        matches!(self.rhs.as_slice(), [rule] if matches!(rule.as_slice(), [s] if s.is_empty_terminal()))
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]:", self.name, self.params.join(", "))?;
        for rule in &self.rhs {
            f.write_str("\n    - ")?;
            for (i, symbol) in rule.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Grammar
// ─────────────────────────────────────────────────────────────────────────────

/// An ordered sequence of productions.
///
/// Declaration order is semantically significant: left-recursion elimination
/// consumes productions in order to detect recursion introduced through
/// earlier productions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    /// The productions, in declaration order.
    pub productions: Vec<Production>,
}

impl Grammar {
    /// Wrap an ordered production list.
    pub fn new(productions: Vec<Production>) -> Self {
        Self { productions }
    }

    /// Look up a production by name (first match in declaration order).
    pub fn production(&self, name: &str) -> Option<&Production> {
        self.productions.iter().find(|p| p.name == name)
    }

    /// Check the structural invariants every pipeline stage relies on:
    /// named productions, no zero-length alternatives, and no conditional
    /// with zero parts.
    pub fn validate(&self) -> RotorResult<()> {
        for prod in &self.productions {
            if prod.name.is_empty() {
                return Err(RotorError::MalformedProduction {
                    name: String::new(),
                    reason: "production has no name".to_owned(),
                });
            }
            for rule in &prod.rhs {
                if rule.is_empty() {
                    return Err(RotorError::MalformedProduction {
                        name: prod.name.clone(),
                        reason: "alternative with no symbols".to_owned(),
                    });
                }
                for symbol in rule {
                    validate_symbol(&prod.name, symbol)?;
                }
            }
        }
        Ok(())
    }
}

fn validate_symbol(prod_name: &str, symbol: &RhsSymbol) -> RotorResult<()> {
    if let RhsSymbol::Conditional { parts, .. } = symbol {
        if parts.is_empty() {
            return Err(RotorError::MalformedProduction {
                name: prod_name.to_owned(),
                reason: "conditional with zero parts".to_owned(),
            });
        }
        for part in parts {
            validate_symbol(prod_name, part)?;
        }
    }
    Ok(())
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, prod) in self.productions.iter().enumerate() {
            if i > 0 {
                f.write_str("\n\n")?;
            }
            write!(f, "{prod}")?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
