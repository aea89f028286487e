//! The small set of functions available without a `let` binding. Looked up
//! by [`super::eval_identifier`] only after the environment chain misses,
//! so a user binding of the same name shadows a builtin.

use log::debug;

use crate::object::{BuiltinFn, Object};

pub fn lookup(name: &str) -> Option<BuiltinFn> {
    match name {
        "len" => Some(len),
        "first" => Some(first),
        "last" => Some(last),
        "tail" => Some(tail),
        "push" => Some(push),
        "puts" => Some(puts),
        _ => None,
    }
}

fn wrong_arg_count(name: &str, got: usize, want: &str) -> Object {
    Object::Error(format!(
        "wrong number of arguments. got={got}, want={want}",
        got = got,
        want = want
    ))
    .tap_error(name)
}

/// Small helper trait so the error path above can log without cluttering
/// every builtin with its own `log::debug!` call.
trait TapError {
    fn tap_error(self, builtin: &str) -> Self;
}

impl TapError for Object {
    fn tap_error(self, builtin: &str) -> Self {
        if let Object::Error(message) = &self {
            debug!("builtin `{builtin}` rejected its arguments: {message}");
        }
        self
    }
}

fn len(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count("len", args.len(), "1");
    }

    match &args[0] {
        Object::String(s) => Object::Integer(s.len() as i64),
        Object::Array(elements) => Object::Integer(elements.len() as i64),
        other => Object::Error(format!(
            "argument to `len` not supported, got {}",
            other.type_name()
        )),
    }
}

fn first(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count("first", args.len(), "1");
    }

    match &args[0] {
        Object::Array(elements) => elements.first().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "argument to `first` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn last(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count("last", args.len(), "1");
    }

    match &args[0] {
        Object::Array(elements) => elements.last().cloned().unwrap_or(Object::Null),
        other => Object::Error(format!(
            "argument to `last` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// All elements but the first, or `null` for an empty array. Named `tail`
/// rather than the book's `rest` to match this repo's naming.
fn tail(args: Vec<Object>) -> Object {
    if args.len() != 1 {
        return wrong_arg_count("tail", args.len(), "1");
    }

    match &args[0] {
        Object::Array(elements) => {
            if elements.is_empty() {
                Object::Null
            } else {
                Object::Array(elements[1..].to_vec())
            }
        }
        other => Object::Error(format!(
            "argument to `tail` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

/// Returns a new array with `value` appended; the original is left
/// untouched since Monkey arrays are values, not references.
fn push(args: Vec<Object>) -> Object {
    if args.len() != 2 {
        return wrong_arg_count("push", args.len(), "2");
    }

    match &args[0] {
        Object::Array(elements) => {
            let mut new_elements = elements.clone();
            new_elements.push(args[1].clone());
            Object::Array(new_elements)
        }
        other => Object::Error(format!(
            "argument to `push` must be ARRAY, got {}",
            other.type_name()
        )),
    }
}

fn puts(args: Vec<Object>) -> Object {
    for arg in &args {
        println!("{arg}");
    }
    Object::Null
}
