use std::rc::Rc;

use crate::{
    ast::{LiteralValue, Statement},
    interpreter::scope::ScopeRef,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models the closed set of types a value can have at runtime:
/// `nil`, booleans, numbers, strings, and functions. Every operation in the
/// evaluator type-checks against these variants exhaustively.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value.
    Nil,
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// An immutable string value.
    String(String),
    /// A callable function, native or script-defined.
    Function(Rc<LuaFunction>),
}

/// A callable function value.
///
/// Script functions are closures: they pair a parameter list and a body with
/// the scope that was active at their definition site. A named function
/// additionally carries its own name so that it can be re-bound inside its
/// call frame for self-recursion.
pub enum LuaFunction {
    /// A host-provided function such as `print`.
    Native {
        /// The name the function was registered under.
        name: &'static str,
        /// The host implementation.
        call: fn(&[Value]) -> Value,
    },
    /// A function defined in script source.
    Script {
        /// The declared name, or `None` for anonymous function literals.
        name:   Option<String>,
        /// Parameter names, in declaration order.
        params: Vec<String>,
        /// The function body.
        body:   Vec<Statement>,
        /// The environment captured at the definition site.
        scope:  ScopeRef,
    },
}

impl Value {
    /// Returns the language-level name of this value's type, as used in
    /// diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Function(_) => "function",
        }
    }

    /// Returns the truthiness of this value.
    ///
    /// `nil` and `false` are the only falsy values; everything else,
    /// including `0` and the empty string, is truthy.
    ///
    /// # Examples
    /// ```
    /// use moonlet::interpreter::value::Value;
    ///
    /// assert!(!Value::Nil.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(Value::Number(0.0).is_truthy());
    /// assert!(Value::String(String::new()).is_truthy());
    /// ```
    #[must_use]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Boolean(false))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(lit: &LiteralValue) -> Self {
        match lit {
            LiteralValue::Nil => Self::Nil,
            LiteralValue::Bool(b) => (*b).into(),
            LiteralValue::Number(n) => (*n).into(),
            LiteralValue::Str(s) => s.as_str().into(),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality with no implicit coercion: values of different
    /// types are never equal (`1` is not `"1"`), and functions are equal
    /// only when they are the same function object.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    /// Renders the value per the stringify rule: `nil` as the literal text
    /// `nil`, booleans, numbers and strings in their natural text form, and
    /// functions as a descriptive tag.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}

impl std::fmt::Display for LuaFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native { name, .. } => write!(f, "<Native Function {name}>"),
            Self::Script { name: Some(name), .. } => write!(f, "<Function {name}>"),
            Self::Script { name: None, .. } => write!(f, "<Function>"),
        }
    }
}

impl std::fmt::Debug for LuaFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Captured scopes may be cyclic, so functions print as their tag.
        write!(f, "{self}")
    }
}
