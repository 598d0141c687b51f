use crate::{bytecode::Instruction, error::ArithmeticError, value::Value};

/// Executes a bytecode sequence against a transient operand stack.
///
/// Instructions run linearly; there is no branching. Binary opcodes pop
/// the right operand first, then the left, preserving the
/// left-before-right evaluation order the compiler established.
/// Execution halts after the last instruction and the remaining value on
/// the stack is the result.
///
/// # Parameters
/// - `instructions`: The instruction sequence to execute.
///
/// # Returns
/// The numeric result.
///
/// # Errors
/// Returns `ArithmeticError::DivisionByZero` when a `Div` pops an
/// exactly-zero right operand, identical to the tree interpreter.
///
/// # Panics
/// Panics on operand-stack underflow. A sequence produced by the
/// compiler always leaves exactly one value, so this is an internal
/// consistency check reachable only through hand-built sequences.
///
/// ## Example
/// ```
/// use calcvm::{bytecode::Instruction, machine::run_bytecode, value::Value};
///
/// let program = [Instruction::Push(Value::Integer(2)),
///                Instruction::Push(Value::Integer(3)),
///                Instruction::Mul];
/// assert_eq!(run_bytecode(&program).unwrap(), Value::Integer(6));
/// ```
pub fn run_bytecode(instructions: &[Instruction]) -> Result<Value, ArithmeticError> {
    let mut stack: Vec<Value> = Vec::new();

    for instruction in instructions {
        match *instruction {
            Instruction::Push(value) => stack.push(value),
            Instruction::Neg => {
                let value = pop(&mut stack);
                stack.push(-value);
            },
            Instruction::Add => {
                let (lhs, rhs) = pop_pair(&mut stack);
                stack.push(lhs + rhs);
            },
            Instruction::Sub => {
                let (lhs, rhs) = pop_pair(&mut stack);
                stack.push(lhs - rhs);
            },
            Instruction::Mul => {
                let (lhs, rhs) = pop_pair(&mut stack);
                stack.push(lhs * rhs);
            },
            Instruction::Div => {
                let (lhs, rhs) = pop_pair(&mut stack);
                stack.push(lhs.div(rhs)?);
            },
            Instruction::Pow => {
                let (lhs, rhs) = pop_pair(&mut stack);
                stack.push(lhs.pow(rhs));
            },
        }
    }

    let result = pop(&mut stack);
    debug_assert!(stack.is_empty(),
                  "well-formed bytecode leaves exactly one value on the stack");
    Ok(result)
}

/// Pops the right operand, then the left.
fn pop_pair(stack: &mut Vec<Value>) -> (Value, Value) {
    let rhs = pop(stack);
    let lhs = pop(stack);
    (lhs, rhs)
}

fn pop(stack: &mut Vec<Value>) -> Value {
    stack.pop()
         .expect("operand stack underflow: malformed instruction sequence")
}
