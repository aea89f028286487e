//! A tree-walking evaluator. `Error` and `ReturnValue` are ordinary
//! [`Object`] variants, not `Result`/exception machinery: evaluating an
//! expression always produces an `Object`, and callers check `is_error`
//! to decide whether to keep going. The only place this short-circuit
//! logic differs is *what* unwraps a `ReturnValue` — [`eval_program`]
//! unwraps it (a `return` at the top level just produces that value),
//! while [`eval_block_statement`] re-wraps and propagates it so that a
//! `return` inside a nested `if` still escapes every enclosing block up
//! to the function call boundary, where [`apply_function`] unwraps it.

pub mod builtins;

use std::rc::Rc;

use log::error;

use crate::object::environment::Environment;
use crate::object::{native_bool, Object, NULL};
use crate::parser::ast::{BlockStatement, Expression, Program, Statement};

/// Evaluates a whole program in `env`, returning the value of its last
/// statement (or the unwrapped value of an early `return`).
pub fn eval(program: &Program, env: &Rc<Environment>) -> Object {
    eval_program(&program.statements, env)
}

fn eval_program(statements: &[Statement], env: &Rc<Environment>) -> Object {
    let mut result = NULL.clone();

    for statement in statements {
        result = eval_statement(statement, env);

        match result {
            Object::ReturnValue(value) => return *value,
            Object::Error(_) => return result,
            _ => {}
        }
    }

    result
}

fn eval_block_statement(block: &BlockStatement, env: &Rc<Environment>) -> Object {
    let mut result = NULL.clone();

    for statement in &block.statements {
        result = eval_statement(statement, env);

        if matches!(result, Object::ReturnValue(_) | Object::Error(_)) {
            return result;
        }
    }

    result
}

fn eval_statement(statement: &Statement, env: &Rc<Environment>) -> Object {
    match statement {
        Statement::Let(let_stmt) => {
            let value = eval_expression(&let_stmt.value, env);
            if value.is_error() {
                return value;
            }
            env.set(let_stmt.name.value.clone(), value);
            NULL.clone()
        }
        Statement::Return(return_stmt) => {
            let value = eval_expression(&return_stmt.return_value, env);
            if value.is_error() {
                return value;
            }
            Object::ReturnValue(Box::new(value))
        }
        Statement::Expression(expr_stmt) => eval_expression(&expr_stmt.expression, env),
        Statement::Block(block) => eval_block_statement(block, env),
    }
}

fn eval_expression(expression: &Expression, env: &Rc<Environment>) -> Object {
    match expression {
        Expression::IntegerLiteral(lit) => Object::Integer(lit.value),
        Expression::StringLiteral(lit) => Object::String(lit.value.clone()),
        Expression::Boolean(lit) => native_bool(lit.value),
        Expression::Identifier(ident) => eval_identifier(&ident.value, env),
        Expression::Prefix(prefix) => {
            let right = eval_expression(&prefix.right, env);
            if right.is_error() {
                return right;
            }
            eval_prefix_expression(&prefix.operator, right)
        }
        Expression::Infix(infix) => {
            let left = eval_expression(&infix.left, env);
            if left.is_error() {
                return left;
            }
            let right = eval_expression(&infix.right, env);
            if right.is_error() {
                return right;
            }
            eval_infix_expression(&infix.operator, left, right)
        }
        Expression::If(if_expr) => eval_if_expression(if_expr, env),
        Expression::FunctionLiteral(func) => Object::Function {
            parameters: func.parameters.clone(),
            body: func.body.clone(),
            env: env.clone(),
        },
        Expression::Call(call) => {
            let function = eval_expression(&call.function, env);
            if function.is_error() {
                return function;
            }

            let arguments = eval_expressions(&call.arguments, env);
            if arguments.len() == 1 && arguments[0].is_error() {
                return arguments.into_iter().next().unwrap();
            }

            apply_function(function, arguments)
        }
        Expression::ArrayLiteral(array) => {
            let elements = eval_expressions(&array.elements, env);
            if elements.len() == 1 && elements[0].is_error() {
                return elements.into_iter().next().unwrap();
            }
            Object::Array(elements)
        }
        Expression::Index(index_expr) => {
            let left = eval_expression(&index_expr.left, env);
            if left.is_error() {
                return left;
            }
            let index = eval_expression(&index_expr.index, env);
            if index.is_error() {
                return index;
            }
            eval_index_expression(left, index)
        }
        Expression::HashLiteral(hash) => eval_hash_literal(hash, env),
    }
}

/// Evaluates each expression in order, stopping at the first error so
/// side effects after a failing argument never run.
fn eval_expressions(expressions: &[Expression], env: &Rc<Environment>) -> Vec<Object> {
    let mut result = vec![];

    for expression in expressions {
        let evaluated = eval_expression(expression, env);
        if evaluated.is_error() {
            return vec![evaluated];
        }
        result.push(evaluated);
    }

    result
}

fn eval_identifier(name: &str, env: &Rc<Environment>) -> Object {
    if let Some(value) = env.get(name) {
        return value;
    }

    if let Some(builtin) = builtins::lookup(name) {
        return Object::Builtin(builtin);
    }

    runtime_error(format!("identifier not found: {name}"))
}

fn eval_prefix_expression(operator: &str, right: Object) -> Object {
    match operator {
        "!" => native_bool(!right.is_truthy()),
        "-" => match right {
            Object::Integer(value) => Object::Integer(value.wrapping_neg()),
            _ => runtime_error(format!("unknown operator: -{}", right.type_name())),
        },
        _ => runtime_error(format!("unknown operator: {operator}{}", right.type_name())),
    }
}

fn eval_infix_expression(operator: &str, left: Object, right: Object) -> Object {
    match (&left, &right) {
        (Object::Integer(l), Object::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Object::String(l), Object::String(r)) => eval_string_infix(operator, l, r),
        _ if operator == "==" => native_bool(left == right),
        _ if operator == "!=" => native_bool(left != right),
        _ if left.type_name() != right.type_name() => runtime_error(format!(
            "type mismatch: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
        _ => runtime_error(format!(
            "unknown operator: {} {operator} {}",
            left.type_name(),
            right.type_name()
        )),
    }
}

fn eval_integer_infix(operator: &str, left: i64, right: i64) -> Object {
    match operator {
        "+" => Object::Integer(left.wrapping_add(right)),
        "-" => Object::Integer(left.wrapping_sub(right)),
        "*" => Object::Integer(left.wrapping_mul(right)),
        "/" => {
            if right == 0 {
                runtime_error("division by zero")
            } else {
                Object::Integer(left.wrapping_div(right))
            }
        }
        "<" => native_bool(left < right),
        ">" => native_bool(left > right),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        _ => runtime_error(format!("unknown operator: INTEGER {operator} INTEGER")),
    }
}

fn eval_string_infix(operator: &str, left: &str, right: &str) -> Object {
    match operator {
        "+" => Object::String(format!("{left}{right}")),
        "==" => native_bool(left == right),
        "!=" => native_bool(left != right),
        _ => runtime_error(format!("unknown operator: STRING {operator} STRING")),
    }
}

fn eval_if_expression(if_expr: &crate::parser::ast::IfExpression, env: &Rc<Environment>) -> Object {
    let condition = eval_expression(&if_expr.condition, env);
    if condition.is_error() {
        return condition;
    }

    if condition.is_truthy() {
        eval_block_statement(&if_expr.consequence, env)
    } else if let Some(alternative) = &if_expr.alternative {
        eval_block_statement(alternative, env)
    } else {
        NULL.clone()
    }
}

fn apply_function(function: Object, arguments: Vec<Object>) -> Object {
    match function {
        Object::Function {
            parameters,
            body,
            env,
        } => {
            let call_env = Environment::enclosed(env);
            for (param, arg) in parameters.iter().zip(arguments.into_iter()) {
                call_env.set(param.value.clone(), arg);
            }

            let evaluated = eval_block_statement(&body, &call_env);
            match evaluated {
                Object::ReturnValue(value) => *value,
                other => other,
            }
        }
        Object::Builtin(builtin) => builtin(arguments),
        other => runtime_error(format!("not a function: {}", other.type_name())),
    }
}

fn eval_index_expression(left: Object, index: Object) -> Object {
    match (&left, &index) {
        (Object::Array(elements), Object::Integer(i)) => {
            if *i < 0 || *i as usize >= elements.len() {
                NULL.clone()
            } else {
                elements[*i as usize].clone()
            }
        }
        (Object::Hash(_), _) => eval_hash_index_expression(left, index),
        _ => runtime_error(format!("index operator not supported: {}", left.type_name())),
    }
}

fn eval_hash_index_expression(hash: Object, index: Object) -> Object {
    let Object::Hash(pairs) = hash else {
        unreachable!("caller guarantees a Hash");
    };

    let Some(key) = index.hash_key() else {
        return runtime_error(format!("unusable as hash key: {}", index.type_name()));
    };

    pairs
        .into_iter()
        .find(|(k, _)| k.hash_key() == Some(key))
        .map(|(_, v)| v)
        .unwrap_or_else(|| NULL.clone())
}

fn eval_hash_literal(hash: &crate::parser::ast::HashLiteral, env: &Rc<Environment>) -> Object {
    let mut pairs = vec![];

    for (key_expr, value_expr) in &hash.pairs {
        let key = eval_expression(key_expr, env);
        if key.is_error() {
            return key;
        }
        if key.hash_key().is_none() {
            return runtime_error(format!("unusable as hash key: {}", key.type_name()));
        }

        let value = eval_expression(value_expr, env);
        if value.is_error() {
            return value;
        }

        pairs.push((key, value));
    }

    Object::Hash(pairs)
}

fn runtime_error(message: impl Into<String>) -> Object {
    let message = message.into();
    error!("runtime error: {message}");
    Object::Error(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lex, parser::Parser};

    fn eval_input(input: &str) -> Object {
        let tokens = lex(input);
        let mut parser = Parser::new(tokens);
        let program = parser.parse_program();
        assert!(parser.errors.is_empty(), "{:?}", parser.errors);
        let env = Environment::new();
        eval(&program, &env)
    }

    #[test]
    fn evaluates_integer_arithmetic() {
        let cases = [
            ("5", 5),
            ("10", 10),
            ("-5", -5),
            ("5 + 5 + 5 + 5 - 10", 10),
            ("2 * 2 * 2 * 2 * 2", 32),
            ("-50 + 100 + -50", 0),
            ("5 * 2 + 10", 20),
            ("5 + 2 * 10", 25),
            ("20 + 2 * -10", 0),
            ("50 / 2 * 2 + 10", 60),
            ("2 * (5 + 10)", 30),
            ("3 * 3 * 3 + 10", 37),
            ("3 * (3 * 3) + 10", 37),
            ("(5 + 10 * 2 + 15 / 3) * 2 + -10", 50),
        ];

        for (input, expected) in cases {
            assert_eq!(eval_input(input), Object::Integer(expected), "{input}");
        }
    }

    #[test]
    fn evaluates_boolean_expressions() {
        let cases = [
            ("true", true),
            ("false", false),
            ("1 < 2", true),
            ("1 > 2", false),
            ("1 < 1", false),
            ("1 == 1", true),
            ("1 != 1", false),
            ("true == true", true),
            ("true != false", true),
            ("(1 < 2) == true", true),
        ];

        for (input, expected) in cases {
            assert_eq!(eval_input(input), Object::Boolean(expected), "{input}");
        }
    }

    #[test]
    fn bang_operator_negates_truthiness() {
        let cases = [
            ("!true", false),
            ("!false", true),
            ("!5", false),
            ("!!true", true),
            ("!!5", true),
        ];

        for (input, expected) in cases {
            assert_eq!(eval_input(input), Object::Boolean(expected), "{input}");
        }
    }

    #[test]
    fn if_else_short_circuits_on_truthiness() {
        assert_eq!(eval_input("if (true) { 10 }"), Object::Integer(10));
        assert_eq!(eval_input("if (false) { 10 }"), Object::Null);
        assert_eq!(eval_input("if (1) { 10 }"), Object::Integer(10));
        assert_eq!(eval_input("if (1 < 2) { 10 } else { 20 }"), Object::Integer(10));
        assert_eq!(eval_input("if (1 > 2) { 10 } else { 20 }"), Object::Integer(20));
    }

    #[test]
    fn return_unwinds_nested_blocks() {
        let input = r#"
            if (10 > 1) {
                if (10 > 1) {
                    return 10;
                }
                return 1;
            }
        "#;
        assert_eq!(eval_input(input), Object::Integer(10));
    }

    #[test]
    fn reports_runtime_errors_with_canonical_messages() {
        let cases = [
            ("5 + true;", "type mismatch: INTEGER + BOOLEAN"),
            ("5 + true; 5;", "type mismatch: INTEGER + BOOLEAN"),
            ("-true", "unknown operator: -BOOLEAN"),
            ("true + false;", "unknown operator: BOOLEAN + BOOLEAN"),
            ("5; true + false; 5", "unknown operator: BOOLEAN + BOOLEAN"),
            (
                "if (10 > 1) { true + false; }",
                "unknown operator: BOOLEAN + BOOLEAN",
            ),
            ("foobar", "identifier not found: foobar"),
            (r#""hello" - "world""#, "unknown operator: STRING - STRING"),
            ("5 / 0", "division by zero"),
        ];

        for (input, expected) in cases {
            match eval_input(input) {
                Object::Error(message) => assert_eq!(message, expected, "{input}"),
                other => panic!("expected an error for {input}, got {other:?}"),
            }
        }
    }

    #[test]
    fn let_bindings_and_closures() {
        assert_eq!(eval_input("let a = 5; a;"), Object::Integer(5));
        assert_eq!(
            eval_input("let a = 5 * 5; a;"),
            Object::Integer(25)
        );

        let input = r#"
            let newAdder = fn(x) { fn(y) { x + y }; };
            let addTwo = newAdder(2);
            addTwo(3);
        "#;
        assert_eq!(eval_input(input), Object::Integer(5));
    }

    #[test]
    fn recursive_functions_work_through_shared_environment() {
        let input = r#"
            let counter = fn(x) {
                if (x > 100) {
                    return x;
                } else {
                    counter(x + 1);
                }
            };
            counter(0);
        "#;
        assert_eq!(eval_input(input), Object::Integer(101));
    }

    #[test]
    fn string_concatenation() {
        assert_eq!(
            eval_input(r#""Hello" + " " + "World!""#),
            Object::String("Hello World!".to_string())
        );
    }

    #[test]
    fn array_literals_and_indexing() {
        match eval_input("[1, 2 * 2, 3 + 3]") {
            Object::Array(elements) => assert_eq!(
                elements,
                vec![Object::Integer(1), Object::Integer(4), Object::Integer(6)]
            ),
            other => panic!("expected an array, got {other:?}"),
        }
        assert_eq!(eval_input("[1, 2, 3][0]"), Object::Integer(1));
        assert_eq!(eval_input("[1, 2, 3][2]"), Object::Integer(3));
        assert_eq!(eval_input("[1, 2, 3][3]"), Object::Null);
        assert_eq!(eval_input("[1, 2, 3][-1]"), Object::Null);
    }

    #[test]
    fn hash_literals_and_indexing() {
        let input = r#"
            let two = "two";
            {
                "one": 10 - 9,
                two: 1 + 1,
                "thr" + "ee": 6 / 2,
                4: 4,
                true: 5,
                false: 6
            }["thr" + "ee"]
        "#;
        assert_eq!(eval_input(input), Object::Integer(3));
        assert_eq!(eval_input(r#"{"foo": 5}["foo"]"#), Object::Integer(5));
        assert_eq!(eval_input(r#"{"foo": 5}["bar"]"#), Object::Null);
        assert_eq!(eval_input(r#"{}["foo"]"#), Object::Null);
        assert_eq!(eval_input(r#"{5: 5}[5]"#), Object::Integer(5));
        assert_eq!(eval_input(r#"{true: 5}[true]"#), Object::Integer(5));
    }
}
