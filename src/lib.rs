//! # calcvm
//!
//! calcvm parses arithmetic expressions over integers and reals and
//! evaluates them through two independent backends: a tree-walking
//! interpreter and a bytecode compiler paired with a stack machine.
//! Both backends are pure functions of the same syntax tree and agree on
//! results up to floating-point rounding.
//!
//! The grammar is closed over numeric literals, unary `+`/`-`, binary
//! `+ - * /`, right-binding exponentiation `**`, and parenthesized
//! grouping. There are no variables, functions, statements, or control
//! flow.
//!
//! ```
//! use calcvm::{
//!     compiler::compile_to_bytecode, interpreter::evaluate_tree, machine::run_bytecode,
//!     value::Value,
//! };
//!
//! let walked = evaluate_tree("2*((1+3)/2+1)").unwrap();
//! assert_eq!(walked, Value::Real(6.0));
//!
//! let bytecode = compile_to_bytecode("2*((1+3)/2+1)").unwrap();
//! assert_eq!(run_bytecode(&bytecode).unwrap(), Value::Real(6.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the lexical token model.
///
/// This module declares the `Token` value type and the `TokenType`
/// classification enum. `TokenType` doubles as the scanner definition:
/// the lexer table is derived from its patterns, so the token model and
/// the lexical grammar cannot drift apart.
///
/// # Responsibilities
/// - Defines the token classifications accepted by the lexer.
/// - Pairs each lexeme with its exact source text for structural
///   comparison and later literal parsing.
pub mod token;

/// Converts raw text into an ordered token sequence.
pub mod lexer;

/// Defines the structure of parsed expressions.
///
/// This module declares the `Node` enum representing the syntactic
/// structure of an expression as an immutable tree, together with the
/// closed operator enums used for exhaustive dispatch downstream.
///
/// # Responsibilities
/// - Defines value, unary, binary, and program node variants with fixed
///   arity and structural equality.
/// - Maps operator tokens to closed `UnaryOperator`/`BinaryOperator`
///   enums so missing operator handling is a compile error.
pub mod ast;

/// Builds syntax trees from token sequences.
///
/// Recursive-descent parsing with one token of lookahead over an
/// explicit cursor. Each grammar level corresponds to one precedence
/// level and combines right-recursively.
pub mod parser;

/// Numeric values and their promotion rules.
pub mod value;

/// Tree-walking evaluation of parsed expressions.
pub mod interpreter;

/// The stack-machine instruction set.
pub mod bytecode;

/// Translates syntax trees into flat bytecode sequences.
pub mod compiler;

/// Executes bytecode sequences against a transient operand stack.
pub mod machine;

/// Provides unified error types for every pipeline stage.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser,
///   evaluation).
/// - Supports integration with standard error handling traits and
///   reporting utilities.
/// - Aggregates the stage errors into one umbrella type so `?`
///   propagates each stage's error unchanged.
pub mod error;
