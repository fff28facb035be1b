use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::{
        evaluator::{
            binary,
            core::{EvalResult, eval_expr},
        },
        scope::ScopeRef,
        value::Value,
    },
};

/// Evaluates a unary expression.
///
/// `not` yields a boolean from the operand's truthiness and accepts any
/// type; unary minus requires a number.
///
/// # Errors
/// Returns a [`RuntimeError`] if `-` is applied to a non-number.
pub fn eval_unary(op: UnaryOperator, operand: &Expr, scope: &ScopeRef) -> EvalResult<Value> {
    let value = eval_expr(operand, scope)?;

    match op {
        UnaryOperator::Not => Ok(Value::Boolean(!value.is_truthy())),
        UnaryOperator::Negate => {
            let n = binary::expect_number(&value, operand.line_number())?;

            Ok(Value::Number(-n))
        },
    }
}
