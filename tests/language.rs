use luna::{
    Error, get_output,
    error::{LexError, ParseError, RuntimeError},
    run,
    settings::Settings,
};
use pretty_assertions::assert_eq;

fn settings() -> Settings {
    Settings { max_call_depth: 64,
               ..Settings::default() }
}

fn assert_success(src: &str) {
    if let Err(e) = get_output(src, &settings()) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) -> Error {
    match get_output(src, &settings()) {
        Ok(output) => panic!("Script succeeded but was expected to fail; printed {output:?}"),
        Err(e) => e,
    }
}

fn output_of(src: &str) -> String {
    get_output(src, &settings()).unwrap_or_else(|e| panic!("Script failed: {e}"))
}

fn output_with_input(src: &str, input: &str) -> (String, Result<(), Error>) {
    let mut input = input.as_bytes();
    let mut output = Vec::new();
    let result = run(src, &settings(), &mut input, &mut output);

    (String::from_utf8(output).unwrap(), result)
}

#[test]
fn declared_variable_is_printed() {
    assert_eq!(output_of("var x = 5; print x;"), "5\n");
    assert_eq!(output_of("let x = 5; print x;"), "5\n");
}

#[test]
fn literals_print_in_their_textual_form() {
    let src = r#"
        print null;
        print true;
        print false;
        print 'single';
        print "double";
    "#;
    assert_eq!(output_of(src), "null\ntrue\nfalse\nsingle\ndouble\n");
}

#[test]
fn numbers_print_in_shortest_form() {
    assert_eq!(output_of("print 10; print 2.50; print 7.; print 0.125;"), "10\n2.5\n7\n0.125\n");
}

#[test]
fn string_escapes_are_translated() {
    assert_eq!(output_of(r"print 'it\'s';"), "it's\n");
    assert_eq!(output_of(r#"print "say \"hi\"";"#), "say \"hi\"\n");
    assert_eq!(output_of(r#"print "line\nbreak";"#), "line\nbreak\n");
    assert_eq!(output_of(r"print 'a\tb';"), "a\tb\n");
    assert_eq!(output_of(r"print 'back\\slash';"), "back\\slash\n");
}

#[test]
fn unknown_escapes_are_kept_verbatim() {
    assert_eq!(output_of(r"print '\q';"), "\\q\n");
}

#[test]
fn comments_are_ignored() {
    let src = "// leading comment\n/* block\ncomment */ print 1; // trailing\nprint 2; /* never closed";
    assert_eq!(output_of(src), "1\n2\n");
}

#[test]
fn empty_program_succeeds() {
    assert_success("");
    assert_success("   \n\t// nothing here\n");
}

#[test]
fn undefined_variable_fails() {
    let e = assert_failure("print y;");
    assert_eq!(e,
               Error::Runtime(RuntimeError::UndefinedVariable { name: "y".into(),
                                                                line: 1, }));
}

#[test]
fn errors_report_their_line() {
    let e = assert_failure("var a = 1;\n\nprint b;");
    assert_eq!(e.to_string(), "Line 3: undefined variable 'b'.");
}

#[test]
fn output_before_a_runtime_error_is_kept() {
    let (output, result) = output_with_input("print 'before'; print missing; print 'after';", "");
    assert_eq!(output, "before\n");
    assert!(matches!(result, Err(Error::Runtime(RuntimeError::UndefinedVariable { .. }))));
}

#[test]
fn nothing_runs_when_parsing_fails() {
    let (output, result) = output_with_input("print 'before'; print 'after'", "");
    assert_eq!(output, "");
    assert!(matches!(result, Err(Error::Parse(ParseError::ExpectedToken { .. }))));
}

#[test]
fn lexical_errors_surface_as_lex_errors() {
    assert_eq!(assert_failure("print 'open;"),
               Error::Lex(LexError::UnterminatedString { position: 6,
                                                         line:     1, }));
    assert_eq!(assert_failure("print 1; #"),
               Error::Lex(LexError::UnknownToken { text:     "#".into(),
                                                   position: 9,
                                                   line:     1, }));
}

#[test]
fn missing_terminators_are_rejected() {
    for src in ["let x = 1", "var x = 1 print x;", "print 1", "export x", "func f return 1 end f"] {
        let e = assert_failure(src);
        assert!(matches!(e, Error::Parse(ParseError::ExpectedToken { .. })),
                "{src:?} produced {e:?}");
    }
}

#[test]
fn operators_are_not_evaluated() {
    let e = assert_failure("print 1 + 2;");
    assert_eq!(e,
               Error::Parse(ParseError::ExpectedToken { expected: "';'".into(),
                                                        found:    "symbol '+'".into(),
                                                        line:     1, }));
}

#[test]
fn continue_has_no_statement_form() {
    let e = assert_failure("loop continue end");
    assert!(matches!(e, Error::Parse(ParseError::ExpectedToken { .. })));
}

#[test]
fn if_runs_body_only_when_truthy() {
    for falsy in ["null", "false", "0", "''", "'false'"] {
        assert_eq!(output_of(&format!("if {falsy} print 'ran'; end")), "", "{falsy} is falsy");
    }
    for truthy in ["true", "1", "0.5", "'0'", "'no'", "' '"] {
        assert_eq!(output_of(&format!("if {truthy} print 'ran'; end")),
                   "ran\n",
                   "{truthy} is truthy");
    }
}

#[test]
fn functions_are_truthy() {
    assert_eq!(output_of("func f 1 end if f print 'yes'; end"), "yes\n");
}

#[test]
fn missing_end_is_rejected() {
    let e = assert_failure("if true print 1;");
    assert_eq!(e,
               Error::Parse(ParseError::ExpectedKeyword { expected: "end",
                                                          found:    "end of input".into(),
                                                          line:     1, }));
    assert!(matches!(assert_failure("loop print 1;"),
                     Error::Parse(ParseError::ExpectedKeyword { expected: "end", .. })));
}

#[test]
fn while_stops_when_condition_is_falsy() {
    assert_eq!(output_of("while false print 'never'; end print 'done';"), "done\n");
}

#[test]
fn while_reevaluates_condition_each_iteration() {
    let (output, result) = output_with_input("while input print 'line'; end print 'done';",
                                             "a\nb\nc\n");
    result.unwrap();
    assert_eq!(output, "line\nline\nline\ndone\n");
}

#[test]
fn while_body_can_break() {
    assert_eq!(output_of("while 'forever' break end print 'after';"), "after\n");
}

#[test]
fn loop_runs_until_break() {
    assert_eq!(output_of("loop print 'a'; print 'b'; break end print 'c';"), "a\nb\nc\n");
    assert_eq!(output_of("loop if true break end print 'skipped'; end print 'done';"),
               "done\n");
}

#[test]
fn break_leaves_only_the_innermost_loop() {
    assert_eq!(output_of("loop loop break end print 'outer'; break end"), "outer\n");
}

#[test]
fn break_outside_loop_is_a_parse_error() {
    assert_eq!(assert_failure("print 'first'; break"),
               Error::Parse(ParseError::BreakOutsideLoop { line: 1 }));
    assert!(matches!(assert_failure("if true break end"),
                     Error::Parse(ParseError::BreakOutsideLoop { .. })));
}

#[test]
fn break_cannot_escape_a_function_body() {
    let e = assert_failure("loop func f break end break end");
    assert!(matches!(e, Error::Parse(ParseError::BreakOutsideLoop { .. })));
}

#[test]
fn return_outside_function_is_a_parse_error() {
    assert_eq!(assert_failure("return 1;"),
               Error::Parse(ParseError::ReturnOutsideFunction { line: 1 }));
}

#[test]
fn function_declaration_does_not_run_body() {
    assert_eq!(output_of("func f print 'ran'; end print 'declared';"), "declared\n");
}

#[test]
fn functions_are_called_by_name() {
    assert_eq!(output_of("func greet print 'hi'; end greet greet();"), "hi\nhi\n");
}

#[test]
fn call_yields_last_value_without_return() {
    assert_eq!(output_of("func five 5 end print five();"), "5\n");
    assert_eq!(output_of("func pick if true 'yes' end end print pick();"), "yes\n");
    assert_eq!(output_of("func named var x = 'bound'; end print named();"), "bound\n");
}

#[test]
fn call_without_value_yields_null() {
    assert_eq!(output_of("func nothing if false 1 end end print nothing();"), "null\n");
    assert_eq!(output_of("func bare return; end print bare();"), "null\n");
}

#[test]
fn return_stops_at_the_call_boundary() {
    let src = "
        func first
            loop
                return 'early';
                print 'unreachable';
            end
        end
        print first();
        print 'after';
    ";
    assert_eq!(output_of(src), "early\nafter\n");
}

#[test]
fn functions_resolve_names_where_they_are_declared() {
    let src = "
        var x = 'global';
        func show print x; end
        func caller
            loop
                var x = 'local';
                show
                break
            end
        end
        caller
    ";
    assert_eq!(output_of(src), "global\n");
}

#[test]
fn closures_keep_their_defining_scope() {
    let src = "
        func make
            loop
                var secret = 'kept';
                func reveal print secret; end
                return reveal;
            end
        end
        var r = make();
        r
        r()
    ";
    assert_eq!(output_of(src), "kept\nkept\n");
}

#[test]
fn function_values_print_their_name() {
    assert_eq!(output_of("func f 1 end print f; var g = f; print g;"), "<func f>\n<func f>\n");
}

#[test]
fn functions_are_not_hoisted() {
    let e = assert_failure("early func early print 1; end");
    assert_eq!(e,
               Error::Runtime(RuntimeError::UndefinedFunction { name: "early".into(),
                                                                line: 1, }));
}

#[test]
fn calling_a_non_function_fails() {
    let e = assert_failure("var n = 3; n");
    assert!(matches!(e, Error::Runtime(RuntimeError::TypeCoercionError { line: 1, .. })));
}

#[test]
fn runaway_recursion_is_stopped() {
    let e = assert_failure("func forever forever end forever");
    assert_eq!(e,
               Error::Runtime(RuntimeError::CallDepthExceeded { name:  "forever".into(),
                                                                limit: 64,
                                                                line:  1, }));
}

#[test]
fn block_variables_do_not_leak() {
    let e = assert_failure("if true var inner = 1; end print inner;");
    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn block_declarations_shadow_outer_ones() {
    assert_eq!(output_of("var x = 1; if true var x = 2; end print x;"), "1\n");
    assert_eq!(output_of("var x = 1; if true print x; end"), "1\n");
}

#[test]
fn input_reads_lines() {
    let (output, result) = output_with_input("var name = input; print name; print input();",
                                             "Ada\r\n");
    result.unwrap();
    assert_eq!(output, "Ada\nnull\n");
}

#[test]
fn export_and_import_do_not_print() {
    assert_eq!(output_of("var x = 1; export x;"), "");
}

struct UnflushableOutput(Vec<u8>);

impl std::io::Write for UnflushableOutput {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        std::io::Write::write(&mut self.0, buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("device gone"))
    }
}

#[test]
fn failed_final_flush_has_no_line() {
    let mut input = std::io::empty();
    let mut output = UnflushableOutput(Vec::new());
    let e = run("print 'hi';", &settings(), &mut input, &mut output).unwrap_err();

    assert_eq!(e,
               Error::Flush { details: "device gone".into() });
    assert_eq!(e.to_string(), "failed to flush output: device gone.");
    assert_eq!(output.0, b"hi\n");
}

#[test]
fn runtime_error_wins_over_flush_failure() {
    let mut input = std::io::empty();
    let mut output = UnflushableOutput(Vec::new());
    let e = run("print 'hi'; print missing;", &settings(), &mut input, &mut output).unwrap_err();

    assert!(matches!(e, Error::Runtime(RuntimeError::UndefinedVariable { .. })));
}

#[test]
fn huge_number_literal_is_a_parse_error() {
    let e = assert_failure(&format!("print 1{};", "0".repeat(400)));
    assert!(matches!(e, Error::Parse(ParseError::InvalidNumber { line: 1, .. })));
}
