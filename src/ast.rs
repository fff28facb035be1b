/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code: `nil`, booleans, numbers, and strings. It is used in the AST
/// to represent literal expressions and as a convenient container for
/// constants during evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// The `nil` literal.
    Nil,
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A 64-bit floating-point literal.
    Number(f64),
    /// A string literal, with escape sequences already resolved.
    Str(String),
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers everything that produces a value when evaluated: literals,
/// variable references, unary and binary operations, assignments, function
/// literals, and calls. Each variant carries the 1-based source line on which
/// the construct began, used for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (`nil`, boolean, number, or string).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (`not` or arithmetic negation).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// A binary operation (arithmetic, concatenation, comparison, logic).
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment binding a name to a value.
    ///
    /// `local` assignments always create a fresh binding in the current
    /// scope; plain assignments mutate the nearest existing binding or, when
    /// none exists anywhere in the chain, create a global at the root.
    Assign {
        /// The name being assigned to.
        target: String,
        /// Whether the assignment was prefixed with `local`.
        local:  bool,
        /// The value expression.
        value:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// An anonymous function literal: `function (a, b) ... end`.
    Function {
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// The function body.
        body:   Vec<Statement>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A function call.
    Call {
        /// The expression being called.
        callee:    Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Variable { line, .. }
            | Self::Unary { line, .. }
            | Self::Binary { line, .. }
            | Self::Assign { line, .. }
            | Self::Function { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// The loop-head assignment of a numeric `for` statement.
///
/// `for i = 1, 10 do ... end` establishes the induction variable `i` with
/// initial value `1`; an optional `local` prefix scopes the variable to the
/// surrounding block instead of creating a global.
#[derive(Debug, Clone, PartialEq)]
pub struct ForInit {
    /// The induction variable name.
    pub name:  String,
    /// Whether the head assignment was prefixed with `local`.
    pub local: bool,
    /// The initial value expression.
    pub value: Expr,
    /// Line number in the source code.
    pub line:  usize,
}

/// An AST node representing a statement.
///
/// Statements are the units a program is made of. Control-flow statements own
/// their bodies as ordered statement sequences; each variant carries the
/// source line of its leading keyword.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A standalone expression evaluated for its value and side effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
    /// A named function declaration: `function NAME(...) ... end`.
    FunctionDeclaration {
        /// The function name.
        name:   String,
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// The function body.
        body:   Vec<Statement>,
        /// Line number in the source code.
        line:   usize,
    },
    /// A `do ... end` block introducing a fresh scope.
    Block {
        /// Statements inside the block.
        body: Vec<Statement>,
        /// Line number in the source code.
        line: usize,
    },
    /// An `if`/`elseif`/`else` conditional.
    If {
        /// The primary condition.
        condition: Expr,
        /// Statements executed when the condition is truthy.
        then_body: Vec<Statement>,
        /// `elseif` branches, in source order.
        else_ifs:  Vec<(Expr, Vec<Statement>)>,
        /// Statements executed when no condition matched.
        else_body: Option<Vec<Statement>>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A numeric `for` loop with ascending semantics.
    For {
        /// The loop-head assignment establishing the induction variable.
        init: ForInit,
        /// The (exclusive) limit expression.
        end:  Expr,
        /// The step expression; defaults to the literal `1`.
        step: Expr,
        /// The loop body.
        body: Vec<Statement>,
        /// Line number in the source code.
        line: usize,
    },
    /// A `while` loop.
    While {
        /// The loop condition, checked before every iteration.
        condition: Expr,
        /// The loop body.
        body:      Vec<Statement>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `repeat ... until` loop; the body runs at least once.
    Repeat {
        /// The loop body.
        body:  Vec<Statement>,
        /// The terminating condition, checked after every iteration.
        until: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `return` statement unwinding to the enclosing function call.
    Return {
        /// The value expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Expression { line, .. }
            | Self::FunctionDeclaration { line, .. }
            | Self::Block { line, .. }
            | Self::If { line, .. }
            | Self::For { line, .. }
            | Self::While { line, .. }
            | Self::Repeat { line, .. }
            | Self::Return { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic, string concatenation, comparisons,
/// and truthiness-based logic.
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
    /// String concatenation (`..`)
    Concat,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`~=`)
    NotEqual,
    /// Logical and (`and`)
    And,
    /// Logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical negation over truthiness (e.g. `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Concat => "..",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "~=",
            Self::And => "and",
            Self::Or => "or",
        };
        write!(f, "{operator}")
    }
}
