use std::rc::Rc;

use crate::{
    ast::{Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, eval_expr, exec_block},
        scope::{Scope, ScopeRef},
        value::{LuaFunction, Value},
    },
};

/// Builds a function value that closes over the given scope.
///
/// The captured scope is shared by reference, so assignments made through
/// the closure after capture remain visible to every other holder of the
/// chain.
#[must_use]
pub fn make_function(name: Option<&str>,
                     params: &[String],
                     body: &[Statement],
                     scope: &ScopeRef)
                     -> Value {
    Value::Function(Rc::new(LuaFunction::Script { name:   name.map(ToString::to_string),
                                                  params: params.to_vec(),
                                                  body:   body.to_vec(),
                                                  scope:  Rc::clone(scope), }))
}

/// Registers a named function declaration in the current scope.
pub fn declare_function(name: &str, params: &[String], body: &[Statement], scope: &ScopeRef) {
    let function = make_function(Some(name), params, body, scope);
    Scope::define_function(scope, name, function);
}

/// Evaluates a call expression.
///
/// The callee is evaluated first, then every argument left to right; only
/// then is the callee checked to be a function.
///
/// # Errors
/// Returns [`RuntimeError::NotCallable`] if the callee is not a function,
/// or propagates any error from the arguments or the body.
pub fn eval_call(callee: &Expr,
                 arguments: &[Expr],
                 line: usize,
                 scope: &ScopeRef)
                 -> EvalResult<Value> {
    let callee_value = eval_expr(callee, scope)?;

    let mut values = Vec::with_capacity(arguments.len());
    for argument in arguments {
        values.push(eval_expr(argument, scope)?);
    }

    match &callee_value {
        Value::Function(function) => invoke(function, &values),
        other => {
            Err(RuntimeError::NotCallable { type_name: other.type_name(),
                                            line })
        },
    }
}

/// Invokes a function value with already-evaluated arguments.
///
/// For script functions, the call frame is a child of the scope captured at
/// the definition site, not of the caller's scope. A named function is
/// first bound in its own frame under its name, enabling recursion even
/// when the outer binding has been reassigned; parameters are then bound
/// positionally, so a parameter may shadow the function's own name. Missing
/// arguments bind to `nil` and extra arguments are dropped. A function
/// without an executed `return` yields `nil`.
///
/// # Errors
/// Propagates any [`RuntimeError`] raised by the body.
pub fn invoke(function: &Rc<LuaFunction>, arguments: &[Value]) -> EvalResult<Value> {
    match function.as_ref() {
        LuaFunction::Native { call, .. } => Ok(call(arguments)),
        LuaFunction::Script { name, params, body, scope } => {
            let frame = Scope::child(scope);

            if let Some(name) = name {
                Scope::define_local(&frame, name, Value::Function(Rc::clone(function)));
            }
            for (index, param) in params.iter().enumerate() {
                let value = arguments.get(index).cloned().unwrap_or(Value::Nil);
                Scope::define_local(&frame, param, value);
            }

            match exec_block(body, &frame)? {
                Flow::Return(value) => Ok(value),
                Flow::Value(_) => Ok(Value::Nil),
            }
        },
    }
}
