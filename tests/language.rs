use std::fs;

use numscript::{error::Error, run, run_source};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

/// A fenced ` ```numscript ` block from the book, with the optional
/// `input=` and `output=` attributes of its fence line.
struct Example {
    code:   String,
    input:  String,
    output: Option<String>,
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in extract_examples(&content).into_iter().enumerate() {
            count += 1;
            let mut output = Vec::new();
            if let Err(e) = run_source(&example.code, &mut output, example.input.as_bytes()) {
                panic!("Example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       example.code,
                       e);
            }
            if let Some(expected) = example.output {
                assert_eq!(String::from_utf8(output).unwrap(),
                           expected,
                           "example {} in {:?}",
                           i + 1,
                           path);
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_examples(content: &str) -> Vec<Example> {
    let mut examples = Vec::new();
    let mut current: Option<Example> = None;

    for line in content.lines() {
        let trimmed = line.trim_start();
        if current.is_none()
           && let Some(info) = trimmed.strip_prefix("```numscript")
        {
            let mut example = Example { code:   String::new(),
                                        input:  String::new(),
                                        output: None, };
            for attribute in info.split_whitespace() {
                if let Some(input) = attribute.strip_prefix("input=") {
                    example.input = input.replace(',', " ");
                } else if let Some(output) = attribute.strip_prefix("output=") {
                    example.output = Some(output.split(',').map(|v| format!("{v}\n")).collect());
                }
            }
            current = Some(example);
            continue;
        }
        if trimmed.starts_with("```")
           && let Some(example) = current.take()
        {
            examples.push(example);
            continue;
        }
        if let Some(example) = current.as_mut() {
            example.code.push_str(line);
            example.code.push('\n');
        }
    }

    examples
}

fn output_of(src: &str, input: &str) -> String {
    let mut output = Vec::new();
    if let Err(e) = run_source(src, &mut output, input.as_bytes()) {
        panic!("Script failed: {e}");
    }
    String::from_utf8(output).unwrap()
}

fn failure_of(src: &str, input: &str) -> (Error, String) {
    let mut output = Vec::new();
    match run_source(src, &mut output, input.as_bytes()) {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => (e, String::from_utf8(output).unwrap()),
    }
}

#[test]
fn assignment_and_basic_arithmetic() {
    assert_eq!(output_of("x = 1 + 2\nprint x", ""), "3\n");
    assert_eq!(output_of("x = 7 * 9\nprint x", ""), "63\n");
    assert_eq!(output_of("x = 8 - 5\nprint x", ""), "3\n");
    assert_eq!(output_of("x = 10 / 2\nprint x", ""), "5\n");
    assert_eq!(output_of("x = 10 % 4\nprint x", ""), "2\n");
}

#[test]
fn operators_group_left_to_right() {
    assert_eq!(output_of("print 10 - 3 - 2", ""), "5\n");
    assert_eq!(output_of("print 64 / 4 / 2", ""), "8\n");
    assert_eq!(output_of("print 100 / 10 * 5", ""), "50\n");
    assert_eq!(output_of("print 17 % 10 % 4", ""), "3\n");
    assert_eq!(output_of("print 2 - 5 + 1", ""), "-2\n");
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(output_of("print 2 + 3 * 4", ""), "14\n");
    assert_eq!(output_of("print (2 + 3) * 4", ""), "20\n");
    assert_eq!(output_of("print 20 - 6 / 3", ""), "18\n");
    assert_eq!(output_of("print ((1 + 2) * (3 + 4)) % 5", ""), "1\n");
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(output_of("print 7 / 2", ""), "3\n");
    assert_eq!(output_of("print 0 - 7 / 2", ""), "-3\n");
    assert_eq!(output_of("x = 0 - 7\nprint x / 2\nprint x % 2", ""), "-3\n-1\n");
}

#[test]
fn user_defined_function_and_calls() {
    assert_eq!(output_of("D[x] = (x + 4) * 2\nprint D[3]", ""), "14\n");
    assert_eq!(output_of("SQ[n] = n * n\nprint SQ[SQ[3]]", ""), "81\n");
    assert_eq!(output_of("INC[x] = x + 1\nTWICE[x] = INC[INC[x]]\nprint TWICE[5]", ""),
               "7\n");
    assert_eq!(output_of("F[x] = x * 2\nprint F[3] + F[4] * 10", ""), "86\n");
}

#[test]
fn parameters_shadow_globals_only_inside_the_call() {
    let src = "x = 100\nD[x] = x + 1\nprint D[5]\nprint x";
    assert_eq!(output_of(src, ""), "6\n100\n");
}

#[test]
fn function_bodies_see_globals_at_call_time() {
    let src = "k = 1\nF[x] = x + k\nk = 10\nprint F[1]";
    assert_eq!(output_of(src, ""), "11\n");
}

#[test]
fn read_and_print() {
    assert_eq!(output_of("read a\nread b\nprint a * b", "6 7"), "42\n");
    assert_eq!(output_of("read a\nprint a", "  -12\n"), "-12\n");
    assert_eq!(output_of("read a\nread a\nprint a", "1\n2\n"), "2\n");
}

#[test]
fn whole_program_with_input() {
    let program = ["a = 2",
                   "read b",
                   "c = b - 1",
                   "D[x] = (x + 4) * 2 / b + c",
                   "print c",
                   "print D[a + 5]"];
    let mut output = Vec::new();

    run(&program, &mut output, "7".as_bytes()).unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), "6\n9\n");
}

#[test]
fn empty_lines_are_skipped() {
    assert_eq!(output_of("\na = 1\n\n   \nprint a\n", ""), "1\n");
    assert_eq!(output_of("", ""), "");
}

#[test]
fn deeply_nested_expressions_run() {
    let depth = 300_000;
    let source = format!("print {}1{}", "1 - (".repeat(depth), ")".repeat(depth));

    // An even number of `1 - (...)` levels around the innermost 1 gives 1.
    assert_eq!(output_of(&source, ""), "1\n");
}

#[test]
fn syntax_errors_prevent_any_output() {
    let (error, output) = failure_of("print 1\nprint 2 +", "");
    assert!(matches!(error, Error::Syntax(_)));
    assert_eq!(output, "");
}

#[test]
fn runtime_errors_keep_earlier_output() {
    let (error, output) = failure_of("print 1\nprint y\nprint 2", "");
    assert_eq!(error.to_string(), "Error on line 2: Use of undefined variable 'y'.");
    assert_eq!(output, "1\n");

    let (error, output) = failure_of("F[x] = x\nprint F[1]\nF[y] = y", "");
    assert_eq!(error.to_string(), "Error on line 3: Function 'F' is already defined.");
    assert_eq!(output, "1\n");
}

#[test]
fn failing_scripts() {
    let cases = [("b 2 3", ""),
                 ("$", ""),
                 ("print 1 / 0", ""),
                 ("print 5 % (2 - 2)", ""),
                 ("print G[1]", ""),
                 ("read a", ""),
                 ("read a", "seven"),
                 ("F[x] = F[x]", ""),
                 ("print 9223372036854775807 + 1", ""),
                 ("print (1 + 2", ""),
                 ("print 1 + 2)", ""),
                 ("print D(3]", "")];

    for (src, input) in cases {
        let mut output = Vec::new();
        assert!(run_source(src, &mut output, input.as_bytes()).is_err(),
                "`{src}` should fail");
    }
}
