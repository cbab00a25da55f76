use luna::{
    ast::{Expr, FunctionDef, LiteralValue, Program, Statement},
    error::{LexError, ParseError},
    interpreter::parser::core::{ParseResult, Parser, parse},
};
use pretty_assertions::assert_eq;

fn parse_source(src: &str) -> ParseResult<Program> {
    parse(src, &|_: &str| false)
}

fn statements(src: &str) -> Vec<Statement> {
    parse_source(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"))
                     .statements
}

fn number(value: f64, line: usize) -> Expr {
    Expr::Literal { value: LiteralValue::Number(value),
                    line }
}

#[test]
fn declarations() {
    assert_eq!(statements("var x = 5;\nlet y = 'text';"),
               vec![Statement::Var { name:  "x".into(),
                                     value: number(5.0, 1),
                                     line:  1, },
                    Statement::Let { name:  "y".into(),
                                     value: Expr::Literal { value: "text".into(),
                                                            line:  2, },
                                     line:  2, }]);
}

#[test]
fn identifiers_calls_and_literals() {
    assert_eq!(statements("print x; print f(); print input; print null; print true;"),
               vec![Statement::Print { expr: Expr::Identifier { name: "x".into(),
                                                                line: 1, },
                                       line: 1, },
                    Statement::Print { expr: Expr::Call { name: "f".into(),
                                                          line: 1, },
                                       line: 1, },
                    Statement::Print { expr: Expr::Call { name: "input".into(),
                                                          line: 1, },
                                       line: 1, },
                    Statement::Print { expr: Expr::Literal { value: LiteralValue::Null,
                                                             line:  1, },
                                       line: 1, },
                    Statement::Print { expr: Expr::Literal { value: true.into(),
                                                             line:  1, },
                                       line: 1, }]);
}

#[test]
fn bare_identifier_statement_is_a_call() {
    assert_eq!(statements("greet"),
               vec![Statement::Expression { expr: Expr::Call { name: "greet".into(),
                                                               line: 1, },
                                            line: 1, }]);
}

#[test]
fn optional_semicolons() {
    assert_eq!(statements("greet; greet"), statements("greet greet"));
    assert_eq!(statements("loop break; end"), statements("loop break end"));
}

#[test]
fn compound_statements() {
    let src = "if ok print 1; end\nwhile ok break end\nloop print 2; break end";
    assert_eq!(statements(src),
               vec![Statement::If { condition: Expr::Identifier { name: "ok".into(),
                                                                  line: 1, },
                                    body:      Box::new(Statement::Print { expr:
                                                                               number(1.0, 1),
                                                                           line: 1, }),
                                    line:      1, },
                    Statement::While { condition: Expr::Identifier { name: "ok".into(),
                                                                     line: 2, },
                                       body:      Box::new(Statement::Break { line: 2 }),
                                       line:      2, },
                    Statement::Loop { body: vec![Statement::Print { expr: number(2.0, 3),
                                                                    line: 3, },
                                                 Statement::Break { line: 3 }],
                                      line: 3, }]);
}

#[test]
fn function_declaration() {
    assert_eq!(statements("func answer\n  return 42;\nend"),
               vec![Statement::FunctionDeclaration(FunctionDef {
                   name: "answer".into(),
                   body: Box::new(Statement::Return { value: Some(number(42.0, 2)),
                                                      line:  2, }),
                   line: 1,
               })]);
}

#[test]
fn export_statement() {
    assert_eq!(statements("export x;"),
               vec![Statement::Export { name: "x".into(),
                                        line: 1, }]);
}

#[test]
fn loop_inside_function_allows_break() {
    assert!(parse_source("func f loop break end end").is_ok());
    assert!(parse_source("func f while 1 return 1; end end").is_ok());
}

#[test]
fn return_inside_nested_function_body_only() {
    let e = parse_source("func outer func inner 1 end end return 1;").unwrap_err();
    assert_eq!(e, ParseError::ReturnOutsideFunction { line: 1 });
}

#[test]
fn call_arguments_are_not_supported() {
    let e = parse_source("f(x)").unwrap_err();
    assert_eq!(e,
               ParseError::ExpectedToken { expected: "')'".into(),
                                           found:    "identifier 'x'".into(),
                                           line:     1, });
}

#[test]
fn keywords_are_not_identifiers() {
    let e = parse_source("let if = 1;").unwrap_err();
    assert_eq!(e,
               ParseError::ExpectedToken { expected: "an identifier".into(),
                                           found:    "keyword 'if'".into(),
                                           line:     1, });
}

#[test]
fn stray_end_is_rejected() {
    let e = parse_source("print 1;\nend").unwrap_err();
    assert_eq!(e,
               ParseError::ExpectedToken { expected: "an expression".into(),
                                           found:    "keyword 'end'".into(),
                                           line:     2, });
}

#[test]
fn declaration_needs_equals() {
    let e = parse_source("var x 5;").unwrap_err();
    assert!(matches!(e, ParseError::ExpectedToken { ref expected, .. } if expected == "'='"));
}

#[test]
fn lexical_errors_pass_through() {
    let e = parse_source("var s = 'oops").unwrap_err();
    assert_eq!(e,
               ParseError::Lex(LexError::UnterminatedString { position: 8,
                                                              line:     1, }));
}

#[test]
fn import_consults_the_resolver() {
    let only_math = |name: &str| name == "math";

    assert_eq!(parse("import math", &only_math).unwrap().statements,
               vec![Statement::Import { module: "math".into(),
                                        line:   1, }]);
    assert_eq!(parse("print 1;\nimport net;", &only_math).unwrap_err(),
               ParseError::ModuleNotFound { module: "net".into(),
                                            line:   2, });
}

#[test]
fn number_too_large_for_a_float_is_rejected() {
    let literal = format!("1{}", "0".repeat(400));
    let e = parse_source(&format!("print {literal};")).unwrap_err();

    assert_eq!(e, ParseError::InvalidNumber { literal, line: 1 });
}

#[test]
fn break_does_not_see_loops_outside_its_function() {
    let e = parse_source("loop\nfunc f break end\nbreak end").unwrap_err();
    assert_eq!(e, ParseError::BreakOutsideLoop { line: 2 });
}

#[test]
fn nesting_depth_is_limited() {
    let nested = |depth: usize| format!("{}print 1;{}", "if 1 ".repeat(depth), " end".repeat(depth));
    let no_modules = |_: &str| false;
    let parse_nested = |depth: usize| {
        Parser::new(&nested(depth), &no_modules).unwrap()
                                                .with_max_nesting_depth(4)
                                                .parse_program()
    };

    assert!(parse_nested(3).is_ok());
    assert_eq!(parse_nested(4).unwrap_err(),
               ParseError::NestingTooDeep { limit: 4,
                                            line:  1, });
}

#[test]
fn very_deep_nesting_fails_cleanly() {
    let src = format!("{}print 1;{}", "if 1 ".repeat(50_000), " end".repeat(50_000));
    assert!(matches!(parse_source(&src), Err(ParseError::NestingTooDeep { .. })));
}
