use numscript::{
    ast::{Node, NodeKind},
    error::RuntimeError,
    interpreter::{
        compiler::core::compile,
        executor::core::{Context, execute},
        lexer::tokenize,
    },
};
use pretty_assertions::assert_eq;

fn number(value: &str, line: usize) -> Node {
    Node::leaf(NodeKind::Number, value, line)
}

fn variable(name: &str, line: usize) -> Node {
    Node::leaf(NodeKind::Variable, name, line)
}

fn program(statements: Vec<Node>) -> Node {
    let mut root = Node::root();
    root.children = statements;
    root
}

fn compiled(lines: &[&str]) -> Node {
    compile(&tokenize(lines)).unwrap()
}

fn run_tree<'a>(root: &'a Node, input: &str) -> (Result<Context<'a>, RuntimeError>, String) {
    let mut output = Vec::new();
    let result = execute(root, &mut output, input.as_bytes());
    (result, String::from_utf8(output).unwrap())
}

#[test]
fn executes_hand_built_tree() {
    let root = program(vec![Node::with_children(NodeKind::Assignment,
                                                "",
                                                1,
                                                vec![variable("a", 1), number("2", 1)]),
                            Node::with_children(NodeKind::Assignment,
                                                "",
                                                2,
                                                vec![variable("b", 2),
                                                     Node::with_children(NodeKind::Add,
                                                                         "",
                                                                         2,
                                                                         vec![variable("a", 2),
                                                                              number("3", 2)])]),
                            Node::with_children(NodeKind::Print,
                                                "",
                                                3,
                                                vec![variable("b", 3)])]);

    let (result, output) = run_tree(&root, "");
    let context = result.unwrap();

    assert_eq!(output, "5\n");
    assert_eq!(context.variable("a"), Some(2));
    assert_eq!(context.variable("b"), Some(5));
    assert!(context.bindings.is_empty());
}

#[test]
fn final_context_holds_globals_and_functions() {
    let root = compiled(&["a = 2", "read b", "c = b - 1", "D[x] = (x + 4) * 2 / b + c"]);

    let (result, output) = run_tree(&root, "7");
    let context = result.unwrap();

    assert_eq!(output, "");
    assert_eq!(context.variables.len(), 3);
    assert_eq!(context.variable("c"), Some(6));
    assert!(context.functions.contains_key("D"));
    // Parameters never become globals.
    assert_eq!(context.variable("x"), None);
}

#[test]
fn nested_calls_see_only_their_own_parameter() {
    let root = compiled(&["A[x] = x * 10", "B[y] = A[y + 1] + y", "print B[2]"]);

    let (result, output) = run_tree(&root, "");
    result.unwrap();

    assert_eq!(output, "32\n");
}

#[test]
fn outer_parameter_is_hidden_inside_inner_call() {
    let root = compiled(&["A[x] = y", "B[y] = A[1]", "print B[2]"]);

    let (result, output) = run_tree(&root, "");

    assert!(matches!(result, Err(RuntimeError::UndefinedVariable { ref name, line: 1 }) if name == "y"));
    assert_eq!(output, "");
}

#[test]
fn deep_expressions_do_not_overflow_the_stack() {
    let mut expression = number("1", 1);
    for _ in 0..100_000 {
        expression = Node::with_children(NodeKind::Add, "", 1, vec![expression, number("1", 1)]);
    }
    let root = program(vec![Node::with_children(NodeKind::Print, "", 1, vec![expression])]);

    let (result, output) = run_tree(&root, "");
    result.unwrap();

    assert_eq!(output, "100001\n");
}

#[test]
fn deep_trees_are_dropped_without_recursion() {
    let mut tree = number("1", 1);
    for _ in 0..300_000 {
        tree = Node::with_children(NodeKind::Print, "", 1, vec![tree]);
    }

    drop(tree);
}

#[test]
fn undefined_variable() {
    let root = compiled(&["print 1", "x = y * 2"]);

    let (result, output) = run_tree(&root, "");

    let Err(RuntimeError::UndefinedVariable { name, line }) = result else {
        panic!("expected an undefined variable error");
    };
    assert_eq!((name.as_str(), line), ("y", 2));
    assert_eq!(output, "1\n");
}

#[test]
fn duplicate_function() {
    let root = compiled(&["F[x] = x", "F[y] = y + 1"]);

    let (result, _) = run_tree(&root, "");

    assert!(matches!(result, Err(RuntimeError::DuplicateFunction { line: 2, .. })));
}

#[test]
fn undefined_function_is_caught_at_call_time() {
    let root = compiled(&["F[x] = G[x]", "print 1", "print F[1]"]);

    let (result, output) = run_tree(&root, "");

    assert!(matches!(result, Err(RuntimeError::UndefinedFunction { ref name, line: 1 }) if name == "G"));
    assert_eq!(output, "1\n");
}

#[test]
fn division_and_remainder_by_zero() {
    for source in ["print 1 / 0", "print 7 % (3 - 3)"] {
        let root = compiled(&[source]);
        let (result, _) = run_tree(&root, "");
        assert!(matches!(result, Err(RuntimeError::DivisionByZero { line: 1 })), "{source}");
    }
}

#[test]
fn overflow_is_an_error() {
    let root = compiled(&["a = 9223372036854775807", "print a * 2"]);

    let (result, _) = run_tree(&root, "");

    assert!(matches!(result, Err(RuntimeError::Overflow { line: 2 })));
}

#[test]
fn oversized_literal() {
    let root = compiled(&["print 99999999999999999999"]);

    let (result, _) = run_tree(&root, "");

    assert!(matches!(result, Err(RuntimeError::InvalidNumber { line: 1, .. })));
}

#[test]
fn mutual_recursion_is_a_runtime_error() {
    let root = compiled(&["F[x] = G[x]", "G[x] = F[x]", "print F[1]"]);

    let (result, _) = run_tree(&root, "");

    assert!(matches!(result, Err(RuntimeError::RecursiveCall { ref name, line: 2 }) if name == "F"));
}

#[test]
fn read_errors() {
    let root = compiled(&["read a", "read b"]);

    let (result, _) = run_tree(&root, "5");
    assert!(matches!(result, Err(RuntimeError::EndOfInput { ref name, line: 2 }) if name == "b"));

    let (result, _) = run_tree(&root, "5 five");
    assert!(matches!(result, Err(RuntimeError::InvalidNumber { ref text, line: 2 }) if text == "five"));
}

#[test]
fn malformed_trees_are_refused_before_running() {
    let root = program(vec![Node::with_children(NodeKind::Print, "", 1, vec![number("1", 1)]),
                            Node::with_children(NodeKind::Add, "", 2, vec![number("1", 2)])]);

    let (result, output) = run_tree(&root, "");

    assert!(matches!(result, Err(RuntimeError::MalformedTree { .. })));
    assert_eq!(output, "");
}

#[test]
fn errors_report_their_line() {
    let root = compiled(&["a = 1", "", "print a / 0"]);

    let (result, _) = run_tree(&root, "");

    assert_eq!(result.unwrap_err().line(), 3);
}
