use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{binary, control, function, unary},
        scope::{Scope, ScopeRef},
        value::Value,
    },
};

/// A convenience alias for evaluation results.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The outcome of executing a statement.
///
/// A `return` statement does not produce a value in place; it starts
/// unwinding toward the nearest enclosing function call, carrying its value
/// with it. `Flow` makes that unwinding explicit: every statement either
/// completes normally with a value, or reports a `return` in flight that
/// each block propagates upward until a call boundary (or the top level)
/// catches it.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Normal completion, with the statement's value.
    Value(Value),
    /// A `return` unwinding toward the enclosing call.
    Return(Value),
}

/// Evaluates a program body in the given scope.
///
/// The result is the value of the last statement executed, or [`Value::Nil`]
/// for an empty program. A top-level `return` finishes the program
/// immediately with its value.
///
/// # Errors
/// Returns a [`RuntimeError`] if any statement fails.
///
/// # Examples
/// ```
/// use moonlet::interpreter::{
///     evaluator::{builtin, core::evaluate},
///     lexer::tokenize,
///     parser::core::parse,
///     value::Value,
/// };
///
/// let tokens = tokenize("return 1 + 2").unwrap();
/// let statements = parse(&tokens).unwrap();
/// let scope = builtin::root_scope();
/// assert_eq!(evaluate(&statements, &scope).unwrap(), Value::Number(3.0));
/// ```
pub fn evaluate(statements: &[Statement], scope: &ScopeRef) -> EvalResult<Value> {
    let mut last = Value::Nil;
    for statement in statements {
        match exec_statement(statement, scope)? {
            Flow::Value(value) => last = value,
            Flow::Return(value) => return Ok(value),
        }
    }

    Ok(last)
}

/// Executes a block body in the given scope.
///
/// Unlike [`evaluate`], a block does not produce the value of its last
/// statement; a block that completes normally yields `Nil`, and a `return`
/// inside it is propagated, not caught.
///
/// # Errors
/// Returns a [`RuntimeError`] if any statement fails.
pub fn exec_block(statements: &[Statement], scope: &ScopeRef) -> EvalResult<Flow> {
    for statement in statements {
        if let Flow::Return(value) = exec_statement(statement, scope)? {
            return Ok(Flow::Return(value));
        }
    }

    Ok(Flow::Value(Value::Nil))
}

/// Executes a single statement.
///
/// # Errors
/// Returns a [`RuntimeError`] if evaluation fails.
pub fn exec_statement(statement: &Statement, scope: &ScopeRef) -> EvalResult<Flow> {
    match statement {
        Statement::Expression { expr, .. } => Ok(Flow::Value(eval_expr(expr, scope)?)),
        Statement::FunctionDeclaration { name, params, body, .. } => {
            function::declare_function(name, params, body, scope);

            Ok(Flow::Value(Value::Nil))
        },
        Statement::Block { body, .. } => {
            let child = Scope::child(scope);
            exec_block(body, &child)
        },
        Statement::If { condition,
                        then_body,
                        else_ifs,
                        else_body,
                        .. } => {
            control::exec_if(condition, then_body, else_ifs, else_body.as_deref(), scope)
        },
        Statement::For { init, end, step, body, .. } => {
            control::exec_for(init, end, step, body, scope)
        },
        Statement::While { condition, body, .. } => control::exec_while(condition, body, scope),
        Statement::Repeat { body, until, .. } => control::exec_repeat(body, until, scope),
        Statement::Return { value, .. } => Ok(Flow::Return(eval_expr(value, scope)?)),
    }
}

/// Evaluates a single expression to a value.
///
/// # Errors
/// Returns a [`RuntimeError`] if evaluation fails.
pub fn eval_expr(expr: &Expr, scope: &ScopeRef) -> EvalResult<Value> {
    match expr {
        Expr::Literal { value, .. } => Ok(Value::from(value)),
        Expr::Variable { name, .. } => Ok(Scope::get(scope, name)),
        Expr::Unary { op, operand, .. } => unary::eval_unary(*op, operand, scope),
        Expr::Binary { left, op, right, line } => {
            binary::eval_binary(left, *op, right, *line, scope)
        },
        Expr::Assign { target, local, value, .. } => {
            let value = eval_expr(value, scope)?;
            if *local {
                Scope::define_local(scope, target, value.clone());
            } else {
                Scope::set(scope, target, value.clone());
            }

            Ok(value)
        },
        Expr::Function { params, body, .. } => Ok(function::make_function(None, params, body, scope)),
        Expr::Call { callee, arguments, line } => {
            function::eval_call(callee, arguments, *line, scope)
        },
    }
}
