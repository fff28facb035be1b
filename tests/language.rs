use std::fs;

use moonlet::{interpreter::value::Value, run};
use walkdir::WalkDir;

fn eval(src: &str) -> Value {
    match run(src) {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_number(src: &str, expected: f64) {
    assert_eq!(eval(src), Value::Number(expected), "in script:\n{src}");
}

fn assert_string(src: &str, expected: &str) {
    assert_eq!(eval(src), Value::String(expected.to_string()), "in script:\n{src}");
}

fn assert_failure_containing(src: &str, needle: &str) {
    match run(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail:\n{src}"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "Error '{message}' does not mention '{needle}'");
        },
    }
}

#[test]
fn tokenizing_skips_whitespace_and_tracks_lines() {
    use moonlet::interpreter::lexer::{Token, tokenize};

    let tokens = tokenize("1 + 2").unwrap();
    assert_eq!(tokens,
               vec![(Token::Number(1.0), 1),
                    (Token::Plus, 1),
                    (Token::Number(2.0), 1)]);

    let tokens = tokenize("x = 1\ny = 2").unwrap();
    assert_eq!(tokens[0].1, 1);
    assert_eq!(tokens[3].1, 2);
}

#[test]
fn comments_are_skipped() {
    assert_number("-- a comment\nreturn 1 + 2 -- trailing", 3.0);
    assert_number("--[[ a\nmultiline\ncomment ]]--\nreturn 4", 4.0);
}

#[test]
fn arithmetic_and_precedence() {
    assert_number("return 1 + 2", 3.0);
    assert_number("return 2 + 3 * 4", 14.0);
    assert_number("return (2 + 3) * 4", 20.0);
    assert_number("return 10 - 2 - 3", 5.0);
    assert_number("return 10 / 4", 2.5);
    assert_number("return -3 + 5", 2.0);
}

#[test]
fn string_literals_and_concat() {
    assert_string("return 'hello' .. ' ' .. \"world\"", "hello world");
    assert_string("return 'tab:\\tdone'", "tab:\tdone");
}

#[test]
fn comparisons_and_equality() {
    assert_eq!(eval("return 2 < 3"), Value::Boolean(true));
    assert_eq!(eval("return 'abc' < 'abd'"), Value::Boolean(true));
    assert_eq!(eval("return 3 <= 3"), Value::Boolean(true));
    assert_eq!(eval("return 1 == 1"), Value::Boolean(true));
    assert_eq!(eval("return 1 == '1'"), Value::Boolean(false));
    assert_eq!(eval("return 1 ~= 2"), Value::Boolean(true));
    assert_eq!(eval("return nil == nil"), Value::Boolean(true));
    assert_eq!(eval("return nil == false"), Value::Boolean(false));
}

#[test]
fn logical_operators_return_operands() {
    assert_number("return 1 and 2", 2.0);
    assert_eq!(eval("return nil and 2"), Value::Nil);
    assert_eq!(eval("return false and 2"), Value::Boolean(false));
    assert_number("return 1 or 2", 1.0);
    assert_number("return nil or 2", 2.0);
    assert_eq!(eval("return not nil"), Value::Boolean(true));
    assert_eq!(eval("return not 0"), Value::Boolean(false));
}

#[test]
fn zero_and_empty_string_are_truthy() {
    assert_number("if 0 then return 1 else return 2 end", 1.0);
    assert_number("if '' then return 1 else return 2 end", 1.0);
    assert_number("if nil then return 1 else return 2 end", 2.0);
}

#[test]
fn variables_resolve_to_nil_when_unbound() {
    assert_eq!(eval("return missing"), Value::Nil);
}

#[test]
fn assignments_are_deterministic() {
    let src = "local x = 1\nx = x + 1\nx = x * 10\nreturn x";
    for _ in 0..2 {
        assert_number(src, 20.0);
    }
}

#[test]
fn do_blocks_scope_locals_but_not_globals() {
    // A plain assignment inside a block creates a global.
    assert_number("do x = 1 end return x", 1.0);
    // A local inside a block does not leak.
    assert_eq!(eval("do local y = 1 end return y"), Value::Nil);
}

#[test]
fn locals_shadow_enclosing_bindings() {
    let src = "x = 1\ndo local x = 2 end\nreturn x";
    assert_number(src, 1.0);

    let src = "x = 1\ndo x = 2 end\nreturn x";
    assert_number(src, 2.0);
}

#[test]
fn if_elseif_else_chains() {
    let src = "function pick(n)\n\
               if n < 10 then return 'small'\n\
               elseif n < 100 then return 'medium'\n\
               else return 'large' end\n\
               end\n\
               return pick(7) .. ',' .. pick(42) .. ',' .. pick(1000)";
    assert_string(src, "small,medium,large");
}

#[test]
fn for_loop_runs_while_strictly_below_limit() {
    let src = "local count = 0\nfor i = 1, 5 do count = count + 1 end\nreturn count";
    assert_number(src, 4.0);

    let src = "local sum = 0\nfor i = 1, 10, 2 do sum = sum + i end\nreturn sum";
    assert_number(src, 25.0);
}

#[test]
fn for_loop_variable_is_a_local_copy_per_iteration() {
    // Mutating the loop variable in the body does not affect the advance.
    let src = "local count = 0\n\
               for i = 1, 4 do\n\
               i = 100\n\
               count = count + 1\n\
               end\n\
               return count";
    assert_number(src, 3.0);
}

#[test]
fn for_loop_limit_is_reevaluated_each_iteration() {
    let src = "limit = 10\n\
               local count = 0\n\
               for i = 1, limit do\n\
               count = count + 1\n\
               limit = limit - 3\n\
               end\n\
               return count";
    assert_number(src, 3.0);
}

#[test]
fn while_loops() {
    let src = "local n = 1\nwhile n < 100 do n = n * 2 end\nreturn n";
    assert_number(src, 128.0);

    let src = "while false do x = 1 end\nreturn x";
    assert_eq!(eval(src), Value::Nil);
}

#[test]
fn repeat_runs_at_least_once() {
    let src = "local n = 0\nrepeat n = n + 1 until true\nreturn n";
    assert_number(src, 1.0);

    let src = "local n = 0\nrepeat n = n + 1 until n >= 5\nreturn n";
    assert_number(src, 5.0);
}

#[test]
fn functions_and_recursion() {
    let src = "function fact(n)\n\
               if n <= 1 then return 1 end\n\
               return n * fact(n - 1)\n\
               end\n\
               return fact(5)";
    assert_number(src, 120.0);
}

#[test]
fn recursion_survives_outer_reassignment() {
    // The declared name is rebound inside each call frame, so shadowing
    // the outer name with a nil global does not break recursion.
    let src = "function countdown(n)\n\
               if n <= 0 then return 'done' end\n\
               return countdown(n - 1)\n\
               end\n\
               saved = countdown\n\
               countdown = nil\n\
               return saved(3)";
    assert_string(src, "done");
}

#[test]
fn parameters_fill_with_nil_and_drop_extras() {
    let src = "function second(a, b) return b end\nreturn second(1)";
    assert_eq!(eval(src), Value::Nil);

    let src = "function first(a) return a end\nreturn first(1, 2, 3)";
    assert_number(src, 1.0);
}

#[test]
fn return_unwinds_nested_blocks() {
    let src = "function find()\n\
               for i = 1, 10 do\n\
               if i == 3 then return i end\n\
               end\n\
               return -1\n\
               end\n\
               return find()";
    assert_number(src, 3.0);
}

#[test]
fn function_without_return_yields_nil() {
    let src = "function noop() local x = 1 end\nreturn noop()";
    assert_eq!(eval(src), Value::Nil);
}

#[test]
fn anonymous_functions_are_values() {
    let src = "local double = function(n) return n * 2 end\nreturn double(21)";
    assert_number(src, 42.0);
}

#[test]
fn closures_share_their_captured_scope() {
    let src = "function counter()\n\
               local n = 0\n\
               return function()\n\
               n = n + 1\n\
               return n\n\
               end\n\
               end\n\
               local tick = counter()\n\
               tick()\n\
               tick()\n\
               return tick()";
    assert_number(src, 3.0);
}

#[test]
fn top_level_return_finishes_the_program() {
    assert_number("return 1 + 2\nreturn 99", 3.0);
}

#[test]
fn last_statement_value_is_the_result() {
    assert_number("local x = 5\nx * 2", 10.0);
    assert_eq!(eval(""), Value::Nil);
}

#[test]
fn call_with_single_string_literal() {
    assert_string("return tostring 'hi'", "hi");
}

#[test]
fn tostring_builtin() {
    assert_string("return tostring(nil)", "nil");
    assert_string("return tostring()", "nil");
    assert_string("return tostring(1, 2)", "1");
    assert_string("return tostring(true)", "true");
    assert_string("return tostring(1.5)", "1.5");
    assert_string("return tostring(3) .. '!'", "3!");
}

#[test]
fn stringified_values_are_stable() {
    let first = eval("return tostring(2 / 4)");
    let second = eval("return tostring(2 / 4)");
    assert_eq!(first, second);
}

#[test]
fn arithmetic_type_errors_carry_the_line() {
    assert_failure_containing("return 1 + 'a'", "Cannot perform arithmetic on string");
    assert_failure_containing("return 1 + 'a'", "[line 1]");
    assert_failure_containing("x = nil\n\nreturn 1 + x", "[line 3]");
    assert_failure_containing("return -'a'", "Cannot perform arithmetic on string");
}

#[test]
fn concat_requires_strings() {
    assert_failure_containing("return 1 .. 2", "Can only concat strings, got number");
}

#[test]
fn comparison_type_errors() {
    assert_failure_containing("return nil < 1", "Can only compare numbers or strings");
    assert_failure_containing("return 1 < 'a'", "Cannot compare number with string");
}

#[test]
fn calling_a_non_function_is_an_error() {
    assert_failure_containing("x = 5\nreturn x()", "Cannot call number");
    assert_failure_containing("return missing()", "Cannot call nil");
}

#[test]
fn end_of_input_errors_cite_the_final_line() {
    assert_failure_containing("return 1 +", "[line 1] Unexpected end of input");
    assert_failure_containing("x = 1\nreturn 1 +", "[line 2]");
    assert_failure_containing("local x =", "[line 1]");

    let message = run("f(1,").unwrap_err().to_string();
    assert!(!message.contains("[line 0]"), "bad line tag in '{message}'");
}

#[test]
fn parse_errors() {
    assert_failure_containing("1 = 2", "Expected variable name");
    assert_failure_containing("if true then x = 1", "Unterminated block");
    assert_failure_containing("return 'open", "Unterminated string literal");
    assert_failure_containing("--[[ never closed", "Unterminated multiline comment");
    assert_failure_containing("return 1 ~ 2", "Unexpected character");
    assert_failure_containing("local 5 = 1", "variable name");
}

#[test]
fn script_files_run_clean() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| {
                                         e.path().extension().is_some_and(|ext| ext == "lua")
                                     })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&content) {
            panic!("Script {path:?} failed: {e}");
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
