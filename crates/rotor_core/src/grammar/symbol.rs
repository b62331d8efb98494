//! Right-hand-side symbol model for the syntactic grammar.
//!
//! Every alternative of a [`Production`](crate::grammar::Production) is an
//! ordered [`Rule`] of [`RhsSymbol`]s.  Non-terminals refer to other
//! productions **by name**, never by pointer, so the grammar stays a forest
//! and the pipeline rewrites remain local.

use std::fmt;

use smallvec::SmallVec;

/// Parameter names attached to productions and symbol references.
///
/// The ECMAScript syntactic grammar never attaches more than three
/// parameters (`Yield`, `Await`, `In`, …) to a single production, so these
/// lists stay inline.
pub type ParamList = SmallVec<[String; 3]>;

/// One alternative of a production's right-hand side.
pub type Rule = Vec<RhsSymbol>;

/// The distinguished ε terminal.  It marks an empty alternative and is
/// never a lexeme.
pub const EMPTY_SYMBOL: &str = "[empty]";

// ─────────────────────────────────────────────────────────────────────────────
// Symbol parameters
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters carried by a non-terminal reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NonTerminalParams {
    /// Parameters forwarded to the referenced production (`?X`).
    pub passthrough: ParamList,
    /// Parameter activations guarding the reference (`+X` / `~X`).
    pub conditions: ParamList,
    /// Tri-state optionality marker (`X?` in the source grammar).
    pub optional: Option<bool>,
}

/// Parameters carried by a terminal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminalParams {
    /// Parameter activations guarding the terminal (`+X` / `~X`).
    pub conditions: ParamList,
}

// ─────────────────────────────────────────────────────────────────────────────
// RhsSymbol
// ─────────────────────────────────────────────────────────────────────────────

/// A single right-hand-side symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RhsSymbol {
    /// A terminal: the literal lexeme, or the name of a lexical-grammar
    /// non-terminal (which the syntactic grammar treats as a terminal).
    Terminal {
        /// The lexeme or lexical non-terminal name.
        name: String,
        /// Optional parameter conditions.
        params: Option<TerminalParams>,
    },
    /// A reference to another production.
    NonTerminal {
        /// Name of the referenced production.
        name: String,
        /// Optional reference parameters.
        params: Option<NonTerminalParams>,
    },
    /// Forbids a terminal at this position (`[no X here]`).
    Exclude {
        /// Name of the forbidden terminal.
        name: String,
    },
    /// An ordered sequence of symbols guarded by parameter conditions,
    /// occupying a single right-hand-side position.
    Conditional {
        /// Guard conditions (`+X` / `~X`).
        conditions: ParamList,
        /// The guarded symbols; never empty in a well-formed grammar.
        parts: Vec<RhsSymbol>,
    },
    /// A zero-width constraint forbidding particular following sequences.
    Lookahead {
        /// The symbol sequences that must not follow.
        exclude: Vec<Rule>,
    },
}

impl RhsSymbol {
    /// The ε terminal.
    pub fn empty() -> Self {
        RhsSymbol::Terminal {
            name: EMPTY_SYMBOL.to_owned(),
            params: None,
        }
    }

    /// A bare terminal with no parameters.
    pub fn terminal(name: impl Into<String>) -> Self {
        RhsSymbol::Terminal {
            name: name.into(),
            params: None,
        }
    }

    /// A bare non-terminal reference with no parameters.
    pub fn non_terminal(name: impl Into<String>) -> Self {
        RhsSymbol::NonTerminal {
            name: name.into(),
            params: None,
        }
    }

    /// The symbol's own name.  Container symbols ([`RhsSymbol::Conditional`]
    /// and [`RhsSymbol::Lookahead`]) have no name of their own.
    pub fn name(&self) -> &str {
        match self {
            RhsSymbol::Terminal { name, .. }
            | RhsSymbol::NonTerminal { name, .. }
            | RhsSymbol::Exclude { name } => name,
            RhsSymbol::Conditional { .. } | RhsSymbol::Lookahead { .. } => "",
        }
    }

    /// The name that represents this symbol in first-symbol comparisons:
    /// a conditional delegates to its first part, a lookahead contributes
    /// nothing, every other symbol contributes its own name.
    pub fn first_symbol_name(&self) -> &str {
        match self {
            RhsSymbol::Conditional { parts, .. } => {
                parts.first().map(RhsSymbol::name).unwrap_or("")
            }
            RhsSymbol::Lookahead { .. } => "",
            _ => self.name(),
        }
    }

    /// Whether this symbol is the ε terminal.
    pub fn is_empty_terminal(&self) -> bool {
        self.name() == EMPTY_SYMBOL
    }

    /// Whether this symbol is an optional non-terminal reference.
    pub fn is_optional(&self) -> bool {
        matches!(
            self,
            RhsSymbol::NonTerminal {
                params: Some(NonTerminalParams {
                    optional: Some(true),
                    ..
                }),
                ..
            }
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Structural comparison helpers
// ─────────────────────────────────────────────────────────────────────────────

/// Structural equality between two alternatives, as used by all dedup logic:
/// equal length and an equal symbol-name sequence.  A single-symbol
/// conditional alternative additionally compares part names and guard
/// conditions element-wise.
pub fn same_rule(a: &[RhsSymbol], b: &[RhsSymbol]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if let [RhsSymbol::Conditional {
        conditions: ca,
        parts: pa,
    }] = a
    {
        let [RhsSymbol::Conditional {
            conditions: cb,
            parts: pb,
        }] = b
        else {
            return false;
        };
        return ca == cb
            && pa.len() == pb.len()
            && pa.iter().zip(pb).all(|(x, y)| x.name() == y.name());
    }
    if matches!(b, [RhsSymbol::Conditional { .. }]) {
        return false;
    }
    a.iter().zip(b).all(|(x, y)| x.name() == y.name())
}

/// Whether `rules` already contains an alternative structurally equal to
/// `needle`.
pub fn rule_in(rules: &[Rule], needle: &[RhsSymbol]) -> bool {
    rules.iter().any(|r| same_rule(r, needle))
}

/// Whether any of the given rule sets contains an alternative structurally
/// equal to `needle`.
pub fn rule_in_any(rule_sets: &[&[Rule]], needle: &[RhsSymbol]) -> bool {
    rule_sets.iter().any(|rules| rule_in(rules, needle))
}

/// Whether a symbol sharing `needle`'s first-symbol name has already been
/// recorded (a conditional is identified by the name of its first part).
pub fn symbol_recorded(symbols: &[RhsSymbol], needle: &RhsSymbol) -> bool {
    symbols
        .iter()
        .any(|s| s.first_symbol_name() == needle.first_symbol_name())
}

/// Prefix every parameter name, e.g. `["Yield", "Await"]` with `"?"` gives
/// the passthrough list `["?Yield", "?Await"]`.
pub fn prefix_params(params: &[String], prefix: &str) -> ParamList {
    params.iter().map(|p| format!("{prefix}{p}")).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

impl fmt::Display for RhsSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RhsSymbol::Terminal { name, .. } | RhsSymbol::NonTerminal { name, .. } => {
                f.write_str(name)
            }
            RhsSymbol::Exclude { name } => write!(f, "[no {name} here]"),
            RhsSymbol::Conditional { conditions, parts } => {
                write!(f, "[{}]", conditions.join(", "))?;
                for part in parts {
                    write!(f, " {part}")?;
                }
                Ok(())
            }
            RhsSymbol::Lookahead { exclude } => {
                f.write_str("[lookahead ∉ 〈 ")?;
                for (i, rule) in exclude.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    for (j, symbol) in rule.iter().enumerate() {
                        if j > 0 {
                            f.write_str(" ")?;
                        }
                        write!(f, "{symbol}")?;
                    }
                }
                f.write_str(" 〉]")
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
