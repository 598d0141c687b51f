use crate::value::Value;

/// One instruction of the stack machine.
///
/// Only `Push` carries an operand. Sequences produced by the compiler
/// are flat and straight-line; the source grammar has no control flow,
/// so there are no labels, jumps or branches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    /// Push a constant onto the operand stack.
    Push(Value),
    /// Pop one value, push its negation.
    Neg,
    /// Pop the right then the left operand, push `left + right`.
    Add,
    /// Pop the right then the left operand, push `left - right`.
    Sub,
    /// Pop the right then the left operand, push `left * right`.
    Mul,
    /// Pop the right then the left operand, push `left / right`
    /// (true division).
    Div,
    /// Pop the exponent then the base, push `base ** exponent`.
    Pow,
}
