use crate::{
    ast::{BinaryOperator, Expr, ForInit, Statement},
    interpreter::{
        evaluator::{
            binary,
            core::{EvalResult, Flow, eval_expr, exec_block},
        },
        scope::{Scope, ScopeRef},
        value::Value,
    },
};

/// Executes an `if` statement.
///
/// The `if` condition and each `elseif` condition are tried in order; the
/// first truthy one selects its branch, otherwise the `else` branch runs if
/// present. The chosen branch executes in a fresh child scope.
///
/// # Errors
/// Returns a [`RuntimeError`] if a condition or the chosen branch fails.
pub fn exec_if(condition: &Expr,
               then_body: &[Statement],
               else_ifs: &[(Expr, Vec<Statement>)],
               else_body: Option<&[Statement]>,
               scope: &ScopeRef)
               -> EvalResult<Flow> {
    if eval_expr(condition, scope)?.is_truthy() {
        let child = Scope::child(scope);

        return exec_block(then_body, &child);
    }

    for (branch_condition, body) in else_ifs {
        if eval_expr(branch_condition, scope)?.is_truthy() {
            let child = Scope::child(scope);

            return exec_block(body, &child);
        }
    }

    if let Some(body) = else_body {
        let child = Scope::child(scope);

        return exec_block(body, &child);
    }

    Ok(Flow::Value(Value::Nil))
}

/// Executes a numeric `for` statement.
///
/// The head assignment runs once in the enclosing scope, as a `local` or
/// plain assignment per its declaration. The loop then continues while the
/// induction variable is strictly less than the limit; the limit and step
/// expressions are re-evaluated on every iteration. Each iteration runs the
/// body in a fresh child scope holding a local copy of the induction
/// variable, so body-local mutations of it do not affect the advance; the
/// advance itself reads and writes the enclosing binding.
///
/// # Errors
/// Returns a [`RuntimeError`] if the head expressions are not numbers (or,
/// for the continuation test, not comparable) or the body fails.
pub fn exec_for(init: &ForInit,
                end: &Expr,
                step: &Expr,
                body: &[Statement],
                scope: &ScopeRef)
                -> EvalResult<Flow> {
    let initial = eval_expr(&init.value, scope)?;
    if init.local {
        Scope::define_local(scope, &init.name, initial);
    } else {
        Scope::set(scope, &init.name, initial);
    }

    loop {
        let current = Scope::get(scope, &init.name);
        let limit = eval_expr(end, scope)?;
        if !binary::compare(BinaryOperator::Less,
                            &current,
                            &limit,
                            init.line,
                            end.line_number(),
                            end.line_number())?
        {
            break;
        }

        let frame = Scope::child(scope);
        Scope::define_local(&frame, &init.name, current);
        if let Flow::Return(value) = exec_block(body, &frame)? {
            return Ok(Flow::Return(value));
        }

        let step_value = eval_expr(step, scope)?;
        let advanced = binary::expect_number(&Scope::get(scope, &init.name), init.line)?
                       + binary::expect_number(&step_value, step.line_number())?;
        Scope::set(scope, &init.name, Value::Number(advanced));
    }

    Ok(Flow::Value(Value::Nil))
}

/// Executes a `while` statement.
///
/// The condition is evaluated before each iteration; each iteration runs
/// the body in a fresh child scope.
///
/// # Errors
/// Returns a [`RuntimeError`] if the condition or the body fails.
pub fn exec_while(condition: &Expr, body: &[Statement], scope: &ScopeRef) -> EvalResult<Flow> {
    while eval_expr(condition, scope)?.is_truthy() {
        let frame = Scope::child(scope);
        if let Flow::Return(value) = exec_block(body, &frame)? {
            return Ok(Flow::Return(value));
        }
    }

    Ok(Flow::Value(Value::Nil))
}

/// Executes a `repeat`/`until` statement.
///
/// The body always runs at least once; the loop exits when the `until`
/// condition evaluates truthy. The condition is evaluated in the enclosing
/// scope, after the iteration's child scope has been discarded.
///
/// # Errors
/// Returns a [`RuntimeError`] if the body or the condition fails.
pub fn exec_repeat(body: &[Statement], until: &Expr, scope: &ScopeRef) -> EvalResult<Flow> {
    loop {
        let frame = Scope::child(scope);
        if let Flow::Return(value) = exec_block(body, &frame)? {
            return Ok(Flow::Return(value));
        }

        if eval_expr(until, scope)?.is_truthy() {
            break;
        }
    }

    Ok(Flow::Value(Value::Nil))
}
