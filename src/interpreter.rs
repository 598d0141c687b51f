use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::{ArithmeticError, Error},
    parser::build_ast,
    value::Value,
};

pub type EvalResult<T> = Result<T, ArithmeticError>;

/// Parses and evaluates expression text by walking the syntax tree.
///
/// This is the text-level entry point of the tree-walking backend. It is
/// a pure function of its input: no state is shared across invocations.
///
/// # Parameters
/// - `text`: The expression text.
///
/// # Returns
/// The numeric result.
///
/// # Errors
/// Propagates `LexError` and `SyntaxError` from the parsing stage
/// unchanged, and raises `ArithmeticError` for division by an exactly
/// zero right operand.
///
/// ## Example
/// ```
/// use calcvm::{interpreter::evaluate_tree, value::Value};
///
/// assert_eq!(evaluate_tree("1+2").unwrap(), Value::Integer(3));
/// assert_eq!(evaluate_tree("-1*-2").unwrap(), Value::Integer(2));
/// assert!(evaluate_tree("1/0").is_err());
/// ```
pub fn evaluate_tree(text: &str) -> Result<Value, Error> {
    let ast = build_ast(text)?;
    Ok(evaluate_ast(&ast)?)
}

/// Evaluates a parsed tree in post order.
///
/// Children are evaluated left before right, then the node's operator is
/// applied. Unary `+` is the identity, unary `-` negates. Division is
/// always true division.
///
/// # Errors
/// Returns `ArithmeticError::DivisionByZero` when a division's right
/// operand evaluates to exactly zero.
///
/// # Panics
/// Panics on trees that violate the parser's invariants: an operator
/// node holding a non-arithmetic token, or a program node without
/// exactly one expression. Trees built by [`build_ast`] never do.
pub fn evaluate_ast(node: &Node) -> EvalResult<Value> {
    match node {
        Node::Value { token } => Ok(Value::from_literal(token)),

        Node::Term { op, child } => {
            let value = evaluate_ast(child)?;
            let Some(op) = UnaryOperator::from_token(op) else {
                panic!("unary node holds a non-operator token {op:?}");
            };
            Ok(match op {
                   UnaryOperator::Plus => value,
                   UnaryOperator::Minus => -value,
               })
        },

        Node::Op { op, left, right } => {
            let lhs = evaluate_ast(left)?;
            let rhs = evaluate_ast(right)?;
            let Some(op) = BinaryOperator::from_token(op) else {
                panic!("binary node holds a non-arithmetic token {op:?}");
            };
            match op {
                BinaryOperator::Add => Ok(lhs + rhs),
                BinaryOperator::Sub => Ok(lhs - rhs),
                BinaryOperator::Mul => Ok(lhs * rhs),
                BinaryOperator::Div => lhs.div(rhs),
                BinaryOperator::Pow => Ok(lhs.pow(rhs)),
            }
        },

        Node::Program { subs } => {
            let [sub] = subs.as_slice() else {
                panic!("program node holds exactly one expression");
            };
            evaluate_ast(sub)
        },
    }
}
