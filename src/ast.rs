/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers every expression form in the language: integer literals,
/// variable references, and the four binary operations. Each variant carries
/// the 0-based character offset of the construct within the input line, used
/// for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal such as `42`.
    Literal {
        /// The constant value.
        value:  i64,
        /// Character offset in the input line.
        offset: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:   String,
        /// Character offset in the input line.
        offset: usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Character offset of the operator in the input line.
        offset: usize,
    },
}

impl Expr {
    /// Gets the character offset from `self`.
    /// ## Example
    /// ```
    /// use tinycalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:   "x".to_string(),
    ///                             offset: 5, };
    ///
    /// assert_eq!(expr.offset(), 5);
    /// ```
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::Literal { offset, .. }
            | Self::Variable { offset, .. }
            | Self::BinaryOp { offset, .. } => *offset,
        }
    }
}

/// Represents a top-level statement.
///
/// A statement is the unit parsed from one input line: either a variable
/// assignment or a standalone expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr:   Expr,
        /// Character offset where the expression begins.
        offset: usize,
    },
    /// A variable assignment binding a name to an expression.
    ///
    /// The assignment target is always a plain variable name, so the name is
    /// stored directly rather than as an `Expr::Variable` subtree.
    Assignment {
        /// The name of the variable.
        name:   String,
        /// The value which is being assigned.
        value:  Expr,
        /// Character offset of the target name.
        offset: usize,
    },
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
