//! Grammar model and the LL(k) preparation pipeline.
//!
//! A [`Grammar`] arrives from an external loader as an ordered list of
//! [`Production`]s and is rewritten in place by three stages:
//!
//! 1. [`expand_optionals`] — optional symbols become explicit alternatives;
//! 2. [`eliminate_left_recursion`] — direct and derivative left recursion
//!    is removed;
//! 3. [`left_factor`] — alternatives sharing a leading symbol are factored
//!    through auxiliary productions.
//!
//! [`llkify`] runs stages 2 and 3 back to back.  The result is a grammar a
//! table-driven LL(k) parser generator can consume.

/// Expansion of optional right-hand-side symbols.
pub mod expand;
/// Left-factoring of common alternative prefixes.
pub mod factor;
/// Productions and the grammar container.
pub mod production;
/// Left-recursion elimination.
pub mod recursion;
/// Right-hand-side symbol model.
pub mod symbol;

pub use expand::expand_optionals;
pub use factor::left_factor;
pub use production::{Grammar, Production};
pub use recursion::eliminate_left_recursion;
pub use symbol::{
    EMPTY_SYMBOL, NonTerminalParams, ParamList, RhsSymbol, Rule, TerminalParams,
};

use crate::error::RotorResult;

/// Make `grammar` suitable for LL(k) parsing: eliminate left recursion,
/// then left-factor the result.
pub fn llkify(grammar: &mut Grammar) -> RotorResult<()> {
    eliminate_left_recursion(grammar)?;
    left_factor(grammar)
}
