//! Lexical scoping for identifier bindings.
//!
//! Environments chain through an `outer` pointer: a lookup that misses the
//! local frame walks outward until it either finds a binding or runs off
//! the top. Function literals capture the `Rc<Environment>` that was active
//! at the point they were *defined*, not the one active where they are
//! *called* — that capture is what makes closures and recursive `let`
//! bindings work. The store itself needs interior mutability because a
//! closure keeps a shared handle to an environment that callers continue
//! to mutate (e.g. a later statement in the same block binding more
//! names).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::object::Object;

#[derive(Debug, Default)]
pub struct Environment {
    store: RefCell<HashMap<String, Object>>,
    outer: Option<Rc<Environment>>,
}

impl Environment {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            store: RefCell::new(HashMap::new()),
            outer: None,
        })
    }

    /// A fresh scope nested inside `outer`, used for function call frames
    /// and block-local bindings.
    pub fn enclosed(outer: Rc<Environment>) -> Rc<Self> {
        Rc::new(Self {
            store: RefCell::new(HashMap::new()),
            outer: Some(outer),
        })
    }

    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.borrow().get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// `let` always binds in the current frame, shadowing any outer
    /// binding of the same name rather than mutating it.
    pub fn set(&self, name: impl Into<String>, value: Object) {
        self.store.borrow_mut().insert(name.into(), value);
    }
}
