use crate::{
    ast::{BinaryOperator, Node, UnaryOperator},
    error::{Error, SyntaxError},
    lexer::tokenize,
    token::{Token, TokenType},
};

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Tokenizes and parses expression text into a program node.
///
/// This is the text-level entry point: it runs the lexer, parses the
/// resulting token sequence with [`Parser`], and rejects leftover
/// tokens. Parsing is deterministic; the same input always produces the
/// same tree.
///
/// # Parameters
/// - `text`: The expression text.
///
/// # Returns
/// A `Node::Program` holding exactly one parsed expression.
///
/// # Errors
/// Propagates `LexError` from tokenization and `SyntaxError` from
/// parsing, each unchanged inside the [`Error`] umbrella.
///
/// ## Example
/// ```
/// use calcvm::parser::build_ast;
///
/// // Parentheses affect grouping during parsing but never the tree shape.
/// assert_eq!(build_ast("1+2").unwrap(), build_ast("(1+2)").unwrap());
/// ```
pub fn build_ast(text: &str) -> Result<Node, Error> {
    let tokens = tokenize(text)?;
    let mut parser = Parser::new(tokens);
    Ok(parser.parse()?)
}

/// Recursive-descent parser with one token of lookahead.
///
/// The cursor is an explicit index into the token sequence; `peek`
/// returns an owned end-of-input sentinel once the cursor moves past the
/// last token. Each grammar level corresponds to one precedence level,
/// lowest first:
///
/// ```text
/// program := expr
/// expr    := term ( ('+' | '-') expr )?
/// term    := unary ( ('*' | '/') term )?
/// unary   := ('+' | '-') unary | power
/// power   := primary ( '**' power )?
/// primary := INTEGER | REAL | '(' expr ')'
/// ```
///
/// Binary levels combine right-recursively: a run of operators at one
/// level nests into the right operand of the next occurrence. The tree
/// shape is observable through structural equality, so this is part of
/// the contract, not an implementation detail.
///
/// Recursion depth is bounded by expression nesting depth (parenthesis
/// depth, sign-chain length, operator-run length). Inputs nested tens of
/// thousands of levels deep can exhaust the call stack; the same bound
/// applies to the interpreter and compiler walking the resulting tree.
pub struct Parser {
    tokens: Vec<Token>,
    pos:    usize,
    eof:    Token,
}

impl Parser {
    /// Creates a parser over a token sequence with the cursor at the
    /// first token.
    #[must_use]
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens,
               pos: 0,
               eof: Token::new("", TokenType::Eof) }
    }

    /// Parses the whole token sequence into a program node.
    ///
    /// Grammar: `program := expr`
    ///
    /// # Returns
    /// A `Node::Program` holding exactly one expression.
    ///
    /// # Errors
    /// - `SyntaxError::EmptyInput` when there are no tokens.
    /// - `SyntaxError::TrailingTokens` when tokens remain after a
    ///   complete expression.
    /// - Propagates any error from expression parsing.
    pub fn parse(&mut self) -> ParseResult<Node> {
        if self.peek().kind == TokenType::Eof {
            return Err(SyntaxError::EmptyInput);
        }

        let expr = self.expr()?;

        let trailing = self.peek();
        if trailing.kind != TokenType::Eof {
            return Err(SyntaxError::TrailingTokens { token: trailing.code.clone() });
        }

        Ok(Node::Program { subs: vec![expr] })
    }

    /// The current lookahead token, or the `Eof` sentinel past the end.
    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Consumes and returns the current token.
    fn bump(&mut self) -> Token {
        let token = self.peek().clone();
        self.pos += 1;
        token
    }

    /// Whether the lookahead is the given parenthesis.
    fn at_paren(&self, code: &str) -> bool {
        let token = self.peek();
        token.kind == TokenType::Paren && token.code == code
    }

    /// Parses additive expressions.
    ///
    /// Grammar: `expr := term ( ('+' | '-') expr )?`
    fn expr(&mut self) -> ParseResult<Node> {
        let left = self.term()?;

        if matches!(BinaryOperator::from_token(self.peek()),
                    Some(BinaryOperator::Add | BinaryOperator::Sub))
        {
            let op = self.bump();
            let right = self.expr()?;
            return Ok(Node::Op { op,
                                 left: Box::new(left),
                                 right: Box::new(right) });
        }

        Ok(left)
    }

    /// Parses multiplicative expressions.
    ///
    /// Grammar: `term := unary ( ('*' | '/') term )?`
    fn term(&mut self) -> ParseResult<Node> {
        let left = self.unary()?;

        if matches!(BinaryOperator::from_token(self.peek()),
                    Some(BinaryOperator::Mul | BinaryOperator::Div))
        {
            let op = self.bump();
            let right = self.term()?;
            return Ok(Node::Op { op,
                                 left: Box::new(left),
                                 right: Box::new(right) });
        }

        Ok(left)
    }

    /// Parses unary applications.
    ///
    /// Grammar: `unary := ('+' | '-') unary | power`
    ///
    /// Arbitrarily long chains of sign operators are allowed; each wraps
    /// the next, the innermost wrapping the ultimate `power`.
    fn unary(&mut self) -> ParseResult<Node> {
        if UnaryOperator::from_token(self.peek()).is_some() {
            let op = self.bump();
            let child = self.unary()?;
            return Ok(Node::Term { op, child: Box::new(child) });
        }

        self.power()
    }

    /// Parses exponentiation, right-associatively.
    ///
    /// Grammar: `power := primary ( '**' power )?`
    fn power(&mut self) -> ParseResult<Node> {
        let left = self.primary()?;

        if matches!(BinaryOperator::from_token(self.peek()), Some(BinaryOperator::Pow)) {
            let op = self.bump();
            let right = self.power()?;
            return Ok(Node::Op { op,
                                 left: Box::new(left),
                                 right: Box::new(right) });
        }

        Ok(left)
    }

    /// Parses a literal or a parenthesized expression.
    ///
    /// Grammar: `primary := INTEGER | REAL | '(' expr ')'`
    fn primary(&mut self) -> ParseResult<Node> {
        let kind = self.peek().kind;
        match kind {
            TokenType::Integer | TokenType::Real => {
                let token = self.bump();
                Ok(Node::Value { token })
            },
            TokenType::Paren if self.at_paren("(") => {
                self.pos += 1;
                let inner = self.expr()?;
                self.expect_closing_paren()?;
                Ok(inner)
            },
            TokenType::Eof => Err(SyntaxError::UnexpectedEndOfInput),
            _ => Err(SyntaxError::UnexpectedToken { token: self.peek().code.clone() }),
        }
    }

    /// Consumes the `)` matching an already-consumed `(`.
    fn expect_closing_paren(&mut self) -> ParseResult<()> {
        if self.at_paren(")") {
            self.pos += 1;
            return Ok(());
        }
        if self.peek().kind == TokenType::Eof {
            return Err(SyntaxError::ExpectedClosingParen);
        }
        Err(SyntaxError::UnexpectedToken { token: self.peek().code.clone() })
    }
}
