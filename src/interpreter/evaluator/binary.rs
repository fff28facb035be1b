use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, eval_expr},
        scope::ScopeRef,
        value::Value,
    },
};

/// Evaluates a binary expression.
///
/// Both operands are always evaluated first, left to right; `and` and `or`
/// are not short-circuiting, they merely select which operand value to
/// produce. Equality never errors and never coerces across types; every
/// other operator type-checks its operands.
///
/// # Errors
/// Returns a [`RuntimeError`] if an operand has the wrong type for the
/// operator.
pub fn eval_binary(left: &Expr,
                   op: BinaryOperator,
                   right: &Expr,
                   line: usize,
                   scope: &ScopeRef)
                   -> EvalResult<Value> {
    let lhs = eval_expr(left, scope)?;
    let rhs = eval_expr(right, scope)?;

    match op {
        BinaryOperator::Add => arithmetic(&lhs, &rhs, left, right, |a, b| a + b),
        BinaryOperator::Sub => arithmetic(&lhs, &rhs, left, right, |a, b| a - b),
        BinaryOperator::Mul => arithmetic(&lhs, &rhs, left, right, |a, b| a * b),
        BinaryOperator::Div => arithmetic(&lhs, &rhs, left, right, |a, b| a / b),
        BinaryOperator::Concat => {
            let a = expect_string(&lhs, left.line_number())?;
            let b = expect_string(&rhs, right.line_number())?;

            Ok(Value::String(format!("{a}{b}")))
        },
        BinaryOperator::Less
        | BinaryOperator::Greater
        | BinaryOperator::LessEqual
        | BinaryOperator::GreaterEqual => {
            let ordered = compare(op, &lhs, &rhs, left.line_number(), right.line_number(), line)?;

            Ok(Value::Boolean(ordered))
        },
        BinaryOperator::Equal => Ok(Value::Boolean(lhs == rhs)),
        BinaryOperator::NotEqual => Ok(Value::Boolean(lhs != rhs)),
        BinaryOperator::And => Ok(if lhs.is_truthy() { rhs } else { lhs }),
        BinaryOperator::Or => Ok(if lhs.is_truthy() { lhs } else { rhs }),
    }
}

/// Applies an arithmetic operator to two number operands.
fn arithmetic(lhs: &Value,
              rhs: &Value,
              left: &Expr,
              right: &Expr,
              apply: impl Fn(f64, f64) -> f64)
              -> EvalResult<Value> {
    let a = expect_number(lhs, left.line_number())?;
    let b = expect_number(rhs, right.line_number())?;

    Ok(Value::Number(apply(a, b)))
}

/// Extracts a number operand, or reports an arithmetic type error at the
/// operand's own line.
pub(in crate::interpreter::evaluator) fn expect_number(value: &Value,
                                                       line: usize)
                                                       -> EvalResult<f64> {
    match value {
        Value::Number(n) => Ok(*n),
        other => {
            Err(RuntimeError::ArithmeticType { type_name: other.type_name(),
                                               line })
        },
    }
}

/// Extracts a string operand for concatenation.
fn expect_string(value: &Value, line: usize) -> EvalResult<&str> {
    match value {
        Value::String(s) => Ok(s),
        other => {
            Err(RuntimeError::ConcatType { type_name: other.type_name(),
                                           line })
        },
    }
}

/// Applies an ordering operator to two comparable values.
///
/// Numbers compare with numbers and strings compare lexicographically with
/// strings; any other operand type, or a number/string mix, is an error.
/// Also used by the numeric `for` loop for its continuation test.
///
/// # Errors
/// Returns a [`RuntimeError`] if either operand is not comparable or the
/// operand types differ.
pub(in crate::interpreter::evaluator) fn compare(op: BinaryOperator,
                                                 lhs: &Value,
                                                 rhs: &Value,
                                                 left_line: usize,
                                                 right_line: usize,
                                                 line: usize)
                                                 -> EvalResult<bool> {
    check_comparable(lhs, left_line)?;
    check_comparable(rhs, right_line)?;

    match (lhs, rhs) {
        (Value::Number(a), Value::Number(b)) => Ok(apply_order(op, a, b)),
        (Value::String(a), Value::String(b)) => Ok(apply_order(op, a, b)),
        _ => {
            Err(RuntimeError::ComparisonMismatch { left: lhs.type_name(),
                                                   right: rhs.type_name(),
                                                   line })
        },
    }
}

fn check_comparable(value: &Value, line: usize) -> EvalResult<()> {
    match value {
        Value::Number(_) | Value::String(_) => Ok(()),
        other => {
            Err(RuntimeError::ComparisonType { type_name: other.type_name(),
                                               line })
        },
    }
}

fn apply_order<T: PartialOrd + ?Sized>(op: BinaryOperator, a: &T, b: &T) -> bool {
    match op {
        BinaryOperator::Less => a < b,
        BinaryOperator::LessEqual => a <= b,
        BinaryOperator::Greater => a > b,
        _ => a >= b,
    }
}
