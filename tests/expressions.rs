use calcvm::{
    ast::Node,
    bytecode::Instruction,
    compiler::{compile_ast, compile_to_bytecode},
    error::{ArithmeticError, Error, LexError, SyntaxError},
    interpreter::evaluate_tree,
    lexer::tokenize,
    machine::run_bytecode,
    parser::{Parser, build_ast},
    token::{Token, TokenType},
    value::Value,
};

/// Expression-and-result pairs both backends must reproduce.
const CALCULATOR_CASES: [(&str, f64); 8] = [("1+2", 3.0),
                                            ("-1+2", 1.0),
                                            ("+-3.14 + 1", -2.14),
                                            ("1+++--2.2---+1", 2.2),
                                            ("-1*-2", 2.0),
                                            ("4+2/2+1", 6.0),
                                            ("2*((1+3)/2+1)", 6.0),
                                            ("2*10**2*2", 400.0)];

fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}");
}

fn token(code: &str, kind: TokenType) -> Token {
    Token::new(code, kind)
}

fn integer(code: &str) -> Node {
    Node::Value { token: token(code, TokenType::Integer) }
}

fn real(code: &str) -> Node {
    Node::Value { token: token(code, TokenType::Real) }
}

fn unary(code: &str, child: Node) -> Node {
    Node::Term { op:    token(code, TokenType::Operator),
                 child: Box::new(child), }
}

fn binary(code: &str, left: Node, right: Node) -> Node {
    Node::Op { op:    token(code, TokenType::Operator),
               left:  Box::new(left),
               right: Box::new(right), }
}

fn program(sub: Node) -> Node {
    Node::Program { subs: vec![sub] }
}

#[test]
fn lexes_integers() {
    assert_eq!(tokenize("1").unwrap(), vec![token("1", TokenType::Integer)]);
    assert_eq!(tokenize("234").unwrap(), vec![token("234", TokenType::Integer)]);
    assert_eq!(tokenize("1 23 456").unwrap(),
               vec![token("1", TokenType::Integer),
                    token("23", TokenType::Integer),
                    token("456", TokenType::Integer)]);
}

#[test]
fn lexes_reals_with_maximal_munch() {
    assert_eq!(tokenize("1.1").unwrap(), vec![token("1.1", TokenType::Real)]);
    assert_eq!(tokenize("03.1415").unwrap(), vec![token("03.1415", TokenType::Real)]);
    assert_eq!(tokenize("1.1 2.2 3.3").unwrap(),
               vec![token("1.1", TokenType::Real),
                    token("2.2", TokenType::Real),
                    token("3.3", TokenType::Real)]);
}

#[test]
fn lexes_double_star_as_one_operator() {
    assert_eq!(tokenize("10**2").unwrap(),
               vec![token("10", TokenType::Integer),
                    token("**", TokenType::Operator),
                    token("2", TokenType::Integer)]);
    assert_eq!(tokenize("2*10**2*2").unwrap(),
               vec![token("2", TokenType::Integer),
                    token("*", TokenType::Operator),
                    token("10", TokenType::Integer),
                    token("**", TokenType::Operator),
                    token("2", TokenType::Integer),
                    token("*", TokenType::Operator),
                    token("2", TokenType::Integer)]);
}

#[test]
fn keeps_signs_out_of_literals() {
    assert_eq!(tokenize("+-3.14 + 1").unwrap(),
               vec![token("+", TokenType::Operator),
                    token("-", TokenType::Operator),
                    token("3.14", TokenType::Real),
                    token("+", TokenType::Operator),
                    token("1", TokenType::Integer)]);
}

#[test]
fn lexes_parens() {
    assert_eq!(tokenize("2*((1+3)/2+1)").unwrap(),
               vec![token("2", TokenType::Integer),
                    token("*", TokenType::Operator),
                    token("(", TokenType::Paren),
                    token("(", TokenType::Paren),
                    token("1", TokenType::Integer),
                    token("+", TokenType::Operator),
                    token("3", TokenType::Integer),
                    token(")", TokenType::Paren),
                    token("/", TokenType::Operator),
                    token("2", TokenType::Integer),
                    token("+", TokenType::Operator),
                    token("1", TokenType::Integer),
                    token(")", TokenType::Paren)]);
}

#[test]
fn skips_whitespace_between_tokens() {
    assert_eq!(tokenize("1 \t\r\n 2").unwrap(),
               vec![token("1", TokenType::Integer), token("2", TokenType::Integer)]);
    assert_eq!(tokenize("   ").unwrap(), vec![]);
}

#[test]
fn rejects_unrecognized_characters() {
    assert_eq!(tokenize("@").unwrap_err(),
               LexError::UnrecognizedCharacter { character: '@', offset: 0 });
    assert_eq!(tokenize("1 + a").unwrap_err(),
               LexError::UnrecognizedCharacter { character: 'a', offset: 4 });
}

#[test]
fn builds_literals() {
    assert_eq!(build_ast("1").unwrap(), program(integer("1")));
    assert_eq!(build_ast("3.1415").unwrap(), program(real("3.1415")));
}

#[test]
fn builds_unary_terms() {
    assert_eq!(build_ast("-1").unwrap(), program(unary("-", integer("1"))));
    assert_eq!(build_ast("-1+2").unwrap(),
               program(binary("+", unary("-", integer("1")), integer("2"))));
}

#[test]
fn builds_unary_chains_outermost_operator_first() {
    assert_eq!(build_ast("+-3.14 + 1").unwrap(),
               program(binary("+",
                              unary("+", unary("-", real("3.14"))),
                              integer("1"))));
    // Four consecutive sign operators nest into four terms.
    assert_eq!(build_ast("--+-2").unwrap(),
               program(unary("-", unary("-", unary("+", unary("-", integer("2")))))));
}

#[test]
fn combines_same_level_operators_right_recursively() {
    assert_eq!(build_ast("1+2+3+4").unwrap(),
               program(binary("+",
                              integer("1"),
                              binary("+",
                                     integer("2"),
                                     binary("+", integer("3"), integer("4"))))));
    assert_eq!(build_ast("4+2/2+1").unwrap(),
               program(binary("+",
                              integer("4"),
                              binary("+",
                                     binary("/", integer("2"), integer("2")),
                                     integer("1")))));
}

#[test]
fn orders_precedence_levels() {
    // Unary binds tighter than multiplication.
    assert_eq!(build_ast("-1*-2").unwrap(),
               program(binary("*", unary("-", integer("1")), unary("-", integer("2")))));
    // Exponentiation binds tighter than multiplication.
    assert_eq!(build_ast("2*10**2*2").unwrap(),
               program(binary("*",
                              integer("2"),
                              binary("*",
                                     binary("**", integer("10"), integer("2")),
                                     integer("2")))));
    // Exponentiation binds tighter than unary minus.
    assert_eq!(build_ast("-2**2").unwrap(),
               program(unary("-", binary("**", integer("2"), integer("2")))));
    assert_close(evaluate_tree("-2**2").unwrap().as_real(), -4.0);
}

#[test]
fn nests_chained_exponentiation_to_the_right() {
    assert_eq!(build_ast("2**3**2").unwrap(),
               program(binary("**",
                              integer("2"),
                              binary("**", integer("3"), integer("2")))));
    assert_close(evaluate_tree("2**3**2").unwrap().as_real(), 512.0);
}

#[test]
fn builds_nested_groupings() {
    assert_eq!(build_ast("2*((1+3)/2+1)").unwrap(),
               program(binary("*",
                              integer("2"),
                              binary("+",
                                     binary("/",
                                            binary("+", integer("1"), integer("3")),
                                            integer("2")),
                                     integer("1")))));
}

#[test]
fn parentheses_leave_no_trace_in_the_tree() {
    for source in ["1", "1+2", "-1*-2", "4+2/2+1", "2*10**2*2"] {
        let wrapped = format!("({source})");
        assert_eq!(build_ast(source).unwrap(),
                   build_ast(&wrapped).unwrap(),
                   "grouping changed the tree for {source}");
    }
}

#[test]
fn builds_long_mixed_unary_chain() {
    // Structural mirror of "1+++--2.2---+1": each sign token becomes one
    // term, additive operators combine to the right.
    assert_eq!(build_ast("1+++--2.2---+1").unwrap(),
               program(binary("+",
                              integer("1"),
                              binary("-",
                                     unary("+",
                                           unary("+",
                                                 unary("-", unary("-", real("2.2"))))),
                                     unary("-", unary("-", unary("+", integer("1"))))))));
}

#[test]
fn parser_runs_over_an_explicit_token_sequence() {
    let tokens = tokenize("1+2").unwrap();
    let mut parser = Parser::new(tokens);
    assert_eq!(parser.parse().unwrap(),
               program(binary("+", integer("1"), integer("2"))));
}

#[test]
fn interpreter_matches_oracle() {
    for (source, expected) in CALCULATOR_CASES {
        assert_close(evaluate_tree(source).unwrap().as_real(), expected);
    }
}

#[test]
fn machine_matches_oracle() {
    for (source, expected) in CALCULATOR_CASES {
        let code = compile_to_bytecode(source).unwrap();
        assert_close(run_bytecode(&code).unwrap().as_real(), expected);
    }
}

#[test]
fn backends_agree() {
    for (source, _) in CALCULATOR_CASES {
        let walked = evaluate_tree(source).unwrap().as_real();
        let ran = run_bytecode(&compile_to_bytecode(source).unwrap()).unwrap().as_real();
        assert_close(walked, ran);
    }
}

#[test]
fn integer_arithmetic_stays_integral() {
    assert_eq!(evaluate_tree("1+2").unwrap(), Value::Integer(3));
    assert_eq!(evaluate_tree("2*10**2*2").unwrap(), Value::Integer(400));
    // Division always yields a real, even when it would divide evenly.
    assert_eq!(evaluate_tree("4/2").unwrap(), Value::Real(2.0));
}

#[test]
fn oversized_integer_literals_promote_to_real() {
    assert_eq!(evaluate_tree("99999999999999999999").unwrap(), Value::Real(1e20));
}

#[test]
fn integer_overflow_widens_to_real() {
    // Intermediate results wider than i64 widen instead of wrapping.
    assert_eq!(evaluate_tree("9223372036854775807+1").unwrap(),
               Value::Real(9.223372036854776e18));
    // Negation of i64::MIN, reached through subtraction.
    assert_eq!(evaluate_tree("-(-9223372036854775807-1)").unwrap(),
               Value::Real(9.223372036854776e18));
    // The machine widens the same way.
    let code = compile_to_bytecode("9223372036854775807*2").unwrap();
    assert_eq!(run_bytecode(&code).unwrap(), Value::Real(1.8446744073709552e19));
}

#[test]
fn compiles_post_order() {
    assert_eq!(compile_to_bytecode("1+2").unwrap(),
               vec![Instruction::Push(Value::Integer(1)),
                    Instruction::Push(Value::Integer(2)),
                    Instruction::Add]);
    assert_eq!(compile_to_bytecode("2*10**2*2").unwrap(),
               vec![Instruction::Push(Value::Integer(2)),
                    Instruction::Push(Value::Integer(10)),
                    Instruction::Push(Value::Integer(2)),
                    Instruction::Pow,
                    Instruction::Push(Value::Integer(2)),
                    Instruction::Mul,
                    Instruction::Mul]);
}

#[test]
fn unary_plus_compiles_to_nothing() {
    assert_eq!(compile_to_bytecode("+1").unwrap(),
               vec![Instruction::Push(Value::Integer(1))]);
    assert_eq!(compile_to_bytecode("-1").unwrap(),
               vec![Instruction::Push(Value::Integer(1)), Instruction::Neg]);
    assert_eq!(compile_to_bytecode("+-+2").unwrap(),
               vec![Instruction::Push(Value::Integer(2)), Instruction::Neg]);
}

#[test]
fn compiles_hand_built_trees() {
    let tree = program(binary("-", integer("5"), real("1.5")));
    assert_eq!(compile_ast(&tree),
               vec![Instruction::Push(Value::Integer(5)),
                    Instruction::Push(Value::Real(1.5)),
                    Instruction::Sub]);
}

#[test]
fn runs_hand_built_sequences() {
    let sequence = [Instruction::Push(Value::Integer(10)),
                    Instruction::Push(Value::Integer(4)),
                    Instruction::Sub,
                    Instruction::Neg];
    assert_eq!(run_bytecode(&sequence).unwrap(), Value::Integer(-6));
}

#[test]
fn machine_pops_the_right_operand_first() {
    let sequence = [Instruction::Push(Value::Integer(1)),
                    Instruction::Push(Value::Integer(2)),
                    Instruction::Sub];
    assert_eq!(run_bytecode(&sequence).unwrap(), Value::Integer(-1));

    let sequence = [Instruction::Push(Value::Real(1.0)),
                    Instruction::Push(Value::Real(4.0)),
                    Instruction::Div];
    assert_eq!(run_bytecode(&sequence).unwrap(), Value::Real(0.25));
}

#[test]
fn reports_syntax_errors() {
    assert_eq!(build_ast("(1+2").unwrap_err(),
               Error::Syntax(SyntaxError::ExpectedClosingParen));
    assert_eq!(build_ast("").unwrap_err(), Error::Syntax(SyntaxError::EmptyInput));
    assert_eq!(build_ast("   ").unwrap_err(), Error::Syntax(SyntaxError::EmptyInput));
    assert_eq!(build_ast("1+2)").unwrap_err(),
               Error::Syntax(SyntaxError::TrailingTokens { token: ")".to_string() }));
    assert_eq!(build_ast("1+*2").unwrap_err(),
               Error::Syntax(SyntaxError::UnexpectedToken { token: "*".to_string() }));
    assert_eq!(build_ast("1+").unwrap_err(),
               Error::Syntax(SyntaxError::UnexpectedEndOfInput));
    // The right operand of `**` is a primary chain; a sign there is
    // rejected rather than parsed as a unary term.
    assert_eq!(build_ast("2**-1").unwrap_err(),
               Error::Syntax(SyntaxError::UnexpectedToken { token: "-".to_string() }));
}

#[test]
fn propagates_lex_errors_through_the_pipeline() {
    assert_eq!(build_ast("1 ? 2").unwrap_err(),
               Error::Lex(LexError::UnrecognizedCharacter { character: '?', offset: 2 }));
    assert!(matches!(evaluate_tree("@"), Err(Error::Lex(_))));
    assert!(matches!(compile_to_bytecode("@"), Err(Error::Lex(_))));
}

#[test]
fn division_by_zero_fails_in_both_backends() {
    assert_eq!(evaluate_tree("1/0").unwrap_err(),
               Error::Arithmetic(ArithmeticError::DivisionByZero));
    assert_eq!(evaluate_tree("1/0.0").unwrap_err(),
               Error::Arithmetic(ArithmeticError::DivisionByZero));
    assert_eq!(evaluate_tree("1/(2-2)").unwrap_err(),
               Error::Arithmetic(ArithmeticError::DivisionByZero));

    let code = compile_to_bytecode("1/0").unwrap();
    assert_eq!(run_bytecode(&code).unwrap_err(), ArithmeticError::DivisionByZero);
}
