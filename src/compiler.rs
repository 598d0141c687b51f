use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    bytecode::Instruction,
    error::Error,
    parser::build_ast,
    value::Value,
};

/// Parses and compiles expression text into a bytecode sequence.
///
/// # Parameters
/// - `text`: The expression text.
///
/// # Returns
/// The flat instruction sequence.
///
/// # Errors
/// Propagates `LexError` and `SyntaxError` from the parsing stage
/// unchanged. Compilation itself cannot fail on a valid tree.
///
/// ## Example
/// ```
/// use calcvm::{bytecode::Instruction, compiler::compile_to_bytecode, value::Value};
///
/// let code = compile_to_bytecode("1+2").unwrap();
/// assert_eq!(code,
///            vec![Instruction::Push(Value::Integer(1)),
///                 Instruction::Push(Value::Integer(2)),
///                 Instruction::Add]);
/// ```
pub fn compile_to_bytecode(text: &str) -> Result<Vec<Instruction>, Error> {
    let ast = build_ast(text)?;
    Ok(compile_ast(&ast))
}

/// Compiles a parsed tree into a flat instruction sequence.
///
/// The walk is the same post order the tree interpreter uses: left
/// operand, right operand, then the operator's opcode. Unary `+` is an
/// identity and emits nothing.
///
/// # Panics
/// Panics on trees that violate the parser's invariants: an operator
/// node holding a non-arithmetic token, or a program node without
/// exactly one expression. Trees built by [`build_ast`] never do.
#[must_use]
pub fn compile_ast(node: &Node) -> Vec<Instruction> {
    let mut code = Vec::new();
    emit(node, &mut code);
    code
}

fn emit(node: &Node, code: &mut Vec<Instruction>) {
    match node {
        Node::Value { token } => code.push(Instruction::Push(Value::from_literal(token))),

        Node::Term { op, child } => {
            emit(child, code);
            match UnaryOperator::from_token(op) {
                Some(UnaryOperator::Minus) => code.push(Instruction::Neg),
                Some(UnaryOperator::Plus) => {},
                None => panic!("unary node holds a non-operator token {op:?}"),
            }
        },

        Node::Op { op, left, right } => {
            emit(left, code);
            emit(right, code);
            let Some(op) = BinaryOperator::from_token(op) else {
                panic!("binary node holds a non-arithmetic token {op:?}");
            };
            code.push(match op {
                          BinaryOperator::Add => Instruction::Add,
                          BinaryOperator::Sub => Instruction::Sub,
                          BinaryOperator::Mul => Instruction::Mul,
                          BinaryOperator::Div => Instruction::Div,
                          BinaryOperator::Pow => Instruction::Pow,
                      });
        },

        Node::Program { subs } => {
            let [sub] = subs.as_slice() else {
                panic!("program node holds exactly one expression");
            };
            emit(sub, code);
        },
    }
}
