//! `rotor_core` — the front-end library of the Rotor ECMAScript toolchain.
//!
//! Two deeply coupled subsystems live here:
//!
//! 1. The [`grammar`] pipeline prepares a declarative, parameterized
//!    grammar for LL(k) predictive parsing: optional symbols are expanded,
//!    left recursion (direct and derivative) is eliminated, and common
//!    alternative prefixes are left-factored.
//! 2. The [`lexer`] tokenises ECMAScript 8 source text under a lexical
//!    goal symbol supplied by the caller, which resolves the `/` vs.
//!    regular-expression and `}` vs. template-tail ambiguities.
//!
//! # Crate layout
//!
//! - [`error`] — Front-end error types and `RotorResult` alias.
//! - [`grammar`] — Grammar model and the LL(k) preparation pipeline.
//! - [`lexer`] — Goal-directed ECMAScript lexical analyzer.

/// Front-end error types and [`error::RotorResult`] alias.
pub mod error;
/// Grammar model and the LL(k) preparation pipeline.
pub mod grammar;
/// Goal-directed ECMAScript lexical analyzer.
pub mod lexer;
