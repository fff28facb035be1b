use std::rc::Rc;

use crate::interpreter::{
    scope::{Scope, ScopeRef},
    value::{LuaFunction, Value},
};

/// Creates a root scope with the built-in functions registered.
#[must_use]
pub fn root_scope() -> ScopeRef {
    let scope = Scope::root();
    register(&scope);

    scope
}

/// Registers the built-in native functions in the given scope.
pub fn register(scope: &ScopeRef) {
    Scope::define_function(scope, "print", native("print", native_print));
    Scope::define_function(scope, "tostring", native("tostring", native_tostring));
}

fn native(name: &'static str, call: fn(&[Value]) -> Value) -> Value {
    Value::Function(Rc::new(LuaFunction::Native { name, call }))
}

/// Prints its arguments, space-separated, followed by a newline.
fn native_print(arguments: &[Value]) -> Value {
    let rendered: Vec<String> = arguments.iter().map(ToString::to_string).collect();
    println!("{}", rendered.join(" "));

    Value::Nil
}

/// Converts its argument to a string, per the same stringify rule `print`
/// uses.
///
/// `tostring` is unary; as in any call, a missing argument binds to `nil`,
/// so `tostring()` yields the text `nil`, and extra arguments are dropped.
fn native_tostring(arguments: &[Value]) -> Value {
    Value::String(arguments.first().unwrap_or(&Value::Nil).to_string())
}
