use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::Value;

/// A shared, mutable handle to a [`Scope`].
///
/// Scopes are value-shared by reference: multiple closures may hold a live
/// handle to the same ancestor scope, and mutations through any of them are
/// mutually visible. A child scope keeps its parent alive for as long as the
/// child (or any closure that captured it) is reachable.
///
/// Storing a function value in a scope it captures creates an `Rc` cycle,
/// so such a scope is never freed; every named function declaration does
/// this, and so does assigning a closure to an outer binding. The leak is
/// bounded by the number of such bindings per root scope. A weak capture
/// would not work here: a closure that escapes its defining call must keep
/// that environment alive on its own.
pub type ScopeRef = Rc<RefCell<Scope>>;

/// A single lexical scope in the environment chain.
///
/// Every scope holds three independent name-to-value mappings: `locals`
/// (bindings introduced by `local` declarations or for-loop induction
/// variables in this scope), `globals` (names assigned without `local`),
/// and `functions` (named function declarations). Within one scope a name
/// lives in at most one of the three mappings at a time.
///
/// A new scope is created on entering any block and linked to its parent so
/// that lookups and un-shadowed writes reach the nearest enclosing scope
/// that already binds the name.
#[derive(Default)]
pub struct Scope {
    parent:    Option<ScopeRef>,
    locals:    HashMap<String, Value>,
    globals:   HashMap<String, Value>,
    functions: HashMap<String, Value>,
}

impl Scope {
    /// Creates a fresh root scope with no parent and no bindings.
    #[must_use]
    pub fn root() -> ScopeRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a child scope whose lookups and un-shadowed writes delegate
    /// to `parent`.
    #[must_use]
    pub fn child(parent: &ScopeRef) -> ScopeRef {
        Rc::new(RefCell::new(Self { parent: Some(Rc::clone(parent)),
                                    ..Self::default() }))
    }

    /// Resolves a name to its value.
    ///
    /// Resolution order: local and global bindings, walking outward from the
    /// current scope, then named-function bindings along the same chain. An
    /// unbound name resolves to [`Value::Nil`].
    #[must_use]
    pub fn get(scope: &ScopeRef, name: &str) -> Value {
        let mut current = Some(Rc::clone(scope));
        while let Some(env) = current {
            let inner = env.borrow();
            if let Some(value) = inner.locals.get(name) {
                return value.clone();
            }
            if let Some(value) = inner.globals.get(name) {
                return value.clone();
            }
            current = inner.parent.clone();
        }

        let mut current = Some(Rc::clone(scope));
        while let Some(env) = current {
            let inner = env.borrow();
            if let Some(value) = inner.functions.get(name) {
                return value.clone();
            }
            current = inner.parent.clone();
        }

        Value::Nil
    }

    /// Performs a plain (un-`local`) assignment.
    ///
    /// If the name already exists as a local or global anywhere in the
    /// chain, that binding is mutated in place, visibly to every holder of
    /// the chain. Otherwise a new global binding is created in the
    /// outermost scope.
    pub fn set(scope: &ScopeRef, name: &str, value: Value) {
        let mut current = Some(Rc::clone(scope));
        while let Some(env) = current {
            let mut inner = env.borrow_mut();
            if let Some(slot) = inner.locals.get_mut(name) {
                *slot = value;
                return;
            }
            if let Some(slot) = inner.globals.get_mut(name) {
                *slot = value;
                return;
            }
            current = inner.parent.clone();
        }

        let mut root = Rc::clone(scope);
        loop {
            let parent = root.borrow().parent.clone();
            match parent {
                Some(up) => root = up,
                None => break,
            }
        }
        root.borrow_mut().globals.insert(name.to_string(), value);
    }

    /// Introduces a new local binding in the current scope, shadowing any
    /// same-named binding in enclosing scopes.
    pub fn define_local(scope: &ScopeRef, name: &str, value: Value) {
        let mut inner = scope.borrow_mut();
        inner.globals.remove(name);
        inner.functions.remove(name);
        inner.locals.insert(name.to_string(), value);
    }

    /// Registers a named function in the current scope.
    ///
    /// A function declaration shadows data bindings of the same name within
    /// its scope: any existing local or global entry is cleared and the
    /// value is installed under the `functions` category instead.
    pub fn define_function(scope: &ScopeRef, name: &str, value: Value) {
        let mut inner = scope.borrow_mut();
        inner.locals.remove(name);
        inner.globals.remove(name);
        inner.functions.insert(name.to_string(), value);
    }
}
