//! # Monkey
//!
//! A read-eval-print loop for the Monkey language. Each line is lexed,
//! parsed and evaluated against one `Environment` that persists for the
//! whole session, so `let` bindings from one line are visible on the next.

mod cli;

use std::io::{self, BufRead, Write};
use std::rc::Rc;

use cli::Cli;
use monkey::object::environment::Environment;
use monkey::{lex, parser::Parser};

const MONKEY_FACE: &str = r#"            __,__
   .--.  .-"     "-.  .--.
  / .. \/  .-. .-.  \/ .. \
 | |  '|  /   Y   \  |'  | |
 | \   \  \ 0 | 0 /  /   / |
  \ '- ,\.-"""""""-./, -' /
   ''-' /_   ^ ^   _\ '-''
       |  \._   _./  |
       \   \ '~' /   /
        '._ '-=-' _.'
           '-----'
"#;

fn main() -> anyhow::Result<()> {
    let args = Cli::init();
    simple_logger::init_with_level(args.verbosity.into())?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let env = Environment::new();

    loop {
        print!(">> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        run_line(&line, &env, &mut stdout);
    }

    Ok(())
}

fn run_line(line: &str, env: &Rc<Environment>, out: &mut impl Write) {
    let tokens = lex(line);
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();

    if !parser.errors.is_empty() {
        print_parse_errors(out, &parser.errors);
        return;
    }

    let evaluated = monkey::eval(&program, env);
    writeln!(out, "{evaluated}").ok();
}

fn print_parse_errors(out: &mut impl Write, errors: &[monkey::ParseError]) {
    writeln!(out, "{MONKEY_FACE}").ok();
    writeln!(out, "Woops! We ran into some monkey business here!").ok();
    writeln!(out, " parser errors:").ok();
    for error in errors {
        writeln!(out, "\t{error}").ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(env: &Rc<Environment>, line: &str) -> String {
        let mut out = Vec::new();
        run_line(line, env, &mut out);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_the_inspect_form_of_each_evaluated_line() {
        let env = Environment::new();
        assert_eq!(run(&env, "5 + 5\n"), "10\n");
    }

    #[test]
    fn bindings_persist_across_lines_in_the_same_session() {
        let env = Environment::new();
        run(&env, "let x = 21 * 2;\n");
        assert_eq!(run(&env, "x\n"), "42\n");
    }

    #[test]
    fn a_runtime_error_prints_as_its_own_line_rather_than_aborting_the_session() {
        let env = Environment::new();
        assert_eq!(run(&env, "5 + true\n"), "ERROR: type mismatch: INTEGER + BOOLEAN\n");
    }

    #[test]
    fn a_parse_error_prints_the_monkey_face_banner_instead_of_a_value() {
        let env = Environment::new();
        let output = run(&env, "let x 5;\n");
        assert!(output.contains("Woops! We ran into some monkey business here!"));
        assert!(output.contains(" parser errors:"));
        assert!(output.contains("expected next token to be ="));
    }
}
