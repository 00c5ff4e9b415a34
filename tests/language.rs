use std::fs::{self};

use matlang::{
    error::{Error, ParseError, RuntimeError},
    interpreter::value::core::Value,
    run,
};
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "mat"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        if let Err(e) = run(&content, &mut Vec::<String>::new()) {
            panic!("Demo script {path:?} failed:\n{content}\nError: {e}");
        }
    }

    assert!(count > 0, "No .mat scripts found in demos");
}

fn assert_success(src: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if let Err(e) = run(src, &mut lines) {
        panic!("Script failed: {e}");
    }
    lines
}

fn assert_failure(src: &str) -> Error {
    match run(src, &mut Vec::<String>::new()) {
        Ok(_) => panic!("Script succeeded but was expected to fail"),
        Err(e) => e,
    }
}

fn outcome(src: &str) -> Value {
    run(src, &mut Vec::<String>::new()).unwrap_or_else(|e| panic!("Script failed: {e}"))
                             .unwrap_or_else(|| panic!("Script produced no value"))
}

#[test]
fn dot_product_of_declared_matrices() {
    let lines = assert_success(
                               r"
        matrix A = [[1, 2, 3], [4, 5, 6]];
        matrix B = [[7, 8, 9], [10, 11, 12]];
        x = dot(A, B);
        print(x);
    ",
    );

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Matrix 'A' defined: [\n  [1, 2, 3],\n  [4, 5, 6]\n]");
    assert_eq!(lines[2], "Variable 'x' assigned: 217");
    assert_eq!(lines[3], "217");
}

#[test]
fn matrix_multiplication() {
    let lines = assert_success("m = matmul([[1, 2], [3, 4]], [[5, 6], [7, 8]]);\nprint(m);");
    assert_eq!(lines[1], "[\n  [19, 22],\n  [43, 50]\n]");

    let result = outcome("matmul([[1, 2], [3, 4]], [[5, 6], [7, 8]]);");
    assert_eq!(result.to_string(), "[[19, 22], [43, 50]]");
}

#[test]
fn matmul_shapes() {
    let result = outcome("matmul([[1, 2, 3]], [[1], [2], [3]]);");
    assert_eq!(result.to_string(), "[[14]]");

    let result = outcome("matmul([[1], [2]], [[3, 4]]);");
    assert_eq!(result.to_string(), "[[3, 4], [6, 8]]");

    // scalars take part as single-cell matrices
    let result = outcome("matmul(3, 4);");
    assert_eq!(result.to_string(), "[[12]]");

    let error = assert_failure("matmul([[1, 2, 3], [4, 5, 6]], [[1, 2, 3, 4, 5], [1, 2, 3, 4, 5], [1, 2, 3, 4, 5], [1, 2, 3, 4, 5]]);");
    assert!(matches!(error, Error::Runtime(RuntimeError::DimensionMismatch { operation: "matmul", .. })));
}

#[test]
fn dot_product_shapes() {
    assert_eq!(outcome("dot([[1, 2, 3]], [[4], [5], [6]]);"), Value::from(32_i64));
    assert_eq!(outcome("dot(2, 3);"), Value::from(6_i64));
    assert_eq!(outcome("dot([], []);"), Value::from(0_i64));
    assert_eq!(outcome("dot([[1.5, 2]], [[2, 2]]);"), Value::from(7.0));

    let error = assert_failure("dot([[1, 2, 3]], [[1, 2]]);");
    assert!(matches!(error, Error::Runtime(RuntimeError::DimensionMismatch { operation: "dot", .. })));
}

#[test]
fn elementwise_addition_and_subtraction() {
    assert_eq!(outcome("[[1, 2], [3, 4]] + [[10, 20], [30, 40]];").to_string(),
               "[[11, 22], [33, 44]]");
    assert_eq!(outcome("[[1, 2], [3, 4]] - [[1, 1], [1, 1]];").to_string(),
               "[[0, 1], [2, 3]]");
    assert_eq!(outcome("1 + 2 - 4;"), Value::from(-1_i64));
    assert_eq!(outcome("[[5]] - 2;"), Value::from(3_i64));
    assert_eq!(outcome("[[5]] + [[0.5]];"), Value::from(5.5));
    assert_eq!(outcome("([[1, 2]] + [[1, 1]]) - [[2, 3]];").to_string(), "[[0, 0]]");

    let error = assert_failure("[[1, 2]] + [[1], [2]];");
    assert!(matches!(error, Error::Runtime(RuntimeError::DimensionMismatch { operation: "+", .. })));

    let error = assert_failure("[[1, 2]] - 1;");
    assert!(matches!(error, Error::Runtime(RuntimeError::DimensionMismatch { operation: "-", .. })));
}

#[test]
fn transpose_flips_shape() {
    assert_eq!(outcome("transpose([[1, 2, 3], [4, 5, 6]]);").to_string(),
               "[[1, 4], [2, 5], [3, 6]]");
    assert_eq!(outcome("transpose(7);"), Value::from(7_i64));
    assert_eq!(outcome("transpose([[7]]);").to_string(), "[[7]]");
    assert_eq!(outcome("transpose(transpose([[1, 2], [3, 4], [5, 6]]));").to_string(),
               "[[1, 2], [3, 4], [5, 6]]");
}

#[test]
fn determinant_and_inverse() {
    assert_eq!(outcome("det([[1, 0], [0, 1]]);"), Value::from(1_i64));
    assert_eq!(outcome("determinant([[1, 2], [3, 4]]);"), Value::from(-2_i64));
    assert_eq!(outcome("det([[0.5, 1], [1, 4]]);"), Value::from(1.0));

    assert_eq!(outcome("inverse([[1, 0], [0, 1]]);").to_string(), "[[1.0, 0.0], [0.0, 1.0]]");
    assert_eq!(outcome("inv([[4, 7], [2, 6]]);").to_string(), "[[0.6, -0.7], [-0.2, 0.4]]");

    let error = assert_failure("inverse([[1, 2], [2, 4]]);");
    assert!(matches!(error, Error::Runtime(RuntimeError::SingularMatrix { line: 1 })));

    let error = assert_failure("det([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UnsupportedShape { operation: "determinant", .. })));

    let error = assert_failure("inverse(5);");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::UnsupportedShape { operation: "inverse", .. })));
}

#[test]
fn printed_values_use_canonical_text() {
    let lines = assert_success("print(1.0); print(-0.5); print([]); print(42); print([[1, 2]]);");
    assert_eq!(lines, vec!["1.0", "-0.5", "[]", "42", "[\n  [1, 2]\n]"]);
}

#[test]
fn bare_expressions_print_nothing() {
    let lines = assert_success("matmul([[1]], [[2]]);\n[[1, 2]] + [[3, 4]];");
    assert!(lines.is_empty());
}

#[test]
fn undefined_variable_is_reported() {
    let error = assert_failure("print(z);");
    assert_eq!(error,
               Error::Runtime(RuntimeError::UndefinedVariable { name: "z".to_string(),
                                                                line: 1, }));
    assert!(error.to_string().contains("'z'"));
}

#[test]
fn redeclaration_replaces_binding() {
    let lines = assert_success(
                               r"
        matrix A = [[1, 2]];
        matrix A = [[3, 4], [5, 6]];
        print(A);
    ",
    );
    assert_eq!(lines[2], "[\n  [3, 4],\n  [5, 6]\n]");

    assert_eq!(outcome("x = 1; x = [[2]] + x; x;"), Value::from(3_i64));
}

#[test]
fn irregular_matrix_is_rejected() {
    let error = assert_failure("matrix A = [[1, 2], [3]];");
    assert_eq!(error,
               Error::Runtime(RuntimeError::IrregularMatrix { row:      1,
                                                              expected: 2,
                                                              found:    1,
                                                              line:     1, }));
}

#[test]
fn earlier_output_survives_a_failure() {
    let mut lines: Vec<String> = Vec::new();
    let result = run("print(1);\nprint(2);\nprint(dot([[1]], [[1, 2]]));\nprint(3);", &mut lines);

    assert!(matches!(result, Err(Error::Runtime(RuntimeError::DimensionMismatch { line: 3, .. }))));
    assert_eq!(lines, vec!["1", "2"]);
}

#[test]
fn function_calls_are_checked() {
    let error = assert_failure("foo([[1]]);");
    assert!(matches!(error, Error::Runtime(RuntimeError::UnknownFunction { .. })));

    let error = assert_failure("dot([[1]]);");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { expected: 2,
                                                                          found: 1,
                                                                          .. })));

    let error = assert_failure("transpose([[1]], [[2]]);");
    assert!(matches!(error,
                     Error::Runtime(RuntimeError::ArgumentCountMismatch { expected: 1,
                                                                          found: 2,
                                                                          .. })));
}

#[test]
fn integer_overflow_is_an_error() {
    let error = assert_failure("9223372036854775807 + 1;");
    assert!(matches!(error, Error::Runtime(RuntimeError::Overflow { .. })));
}

#[test]
fn syntax_errors_stop_before_evaluation() {
    let mut lines: Vec<String> = Vec::new();
    let result = run("print(1);\nprint(2)", &mut lines);
    assert!(matches!(result, Err(Error::Parse(ParseError::ExpectedSemicolon { .. }))));
    assert!(lines.is_empty());

    assert!(matches!(assert_failure("x = ;"), Error::Parse(_)));
    assert!(matches!(assert_failure("print(1;"), Error::Parse(_)));
    assert!(matches!(assert_failure("matrix A = [[1, 2];"), Error::Parse(_)));
    assert!(matches!(assert_failure("x = 1 $ 2;"), Error::Parse(_)));
    assert!(matches!(assert_failure("x = 99999999999999999999;"),
                     Error::Parse(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn reserved_names_cannot_be_bound() {
    assert!(matches!(assert_failure("dot = 1;"),
                     Error::Parse(ParseError::IdentifierReserved { .. })));
    assert!(matches!(assert_failure("matrix det = [[1]];"),
                     Error::Parse(ParseError::IdentifierReserved { .. })));
}

#[test]
fn comments_and_line_numbers() {
    let src = r"
        // a line comment
        /* a block
           comment */
        matrix A = [[1, 2]];
        print(B);
    ";

    let error = assert_failure(src);
    assert_eq!(error,
               Error::Runtime(RuntimeError::UndefinedVariable { name: "B".to_string(),
                                                                line: 6, }));
    assert!(error.to_string().starts_with("Error on line 6"));
}

#[test]
fn empty_program_has_no_outcome() {
    assert_eq!(run("", &mut Vec::<String>::new()), Ok(None));
    assert_eq!(run("// nothing here\n", &mut Vec::<String>::new()), Ok(None));
}

#[test]
fn matrices_without_columns() {
    let lines = assert_success("print([[]]);");
    assert_eq!(lines, vec!["[\n  []\n]"]);

    assert_eq!(outcome("[[]] + [[]];").to_string(), "[[]]");
    assert_eq!(outcome("[[]] - [[]];").to_string(), "[[]]");
    assert_eq!(outcome("[] + [];").to_string(), "[]");
    assert_eq!(outcome("matmul([[]], []);").to_string(), "[[]]");
    assert_eq!(outcome("transpose([[]]);").to_string(), "[]");
    assert_eq!(outcome("transpose([]);").to_string(), "[]");
    assert_eq!(outcome("dot([[]], []);"), Value::from(0_i64));

    let error = assert_failure("[[]] + [];");
    assert!(matches!(error, Error::Runtime(RuntimeError::DimensionMismatch { operation: "+", .. })));
}

#[test]
fn block_comments_with_extra_stars() {
    let lines = assert_success("/***/ print(1); /** starred **/ print(2);\n/* a * b */ print(3);");
    assert_eq!(lines, vec!["1", "2", "3"]);

    let src = "/**\n * a documented block\n **/\nprint(z);";
    assert_eq!(assert_failure(src),
               Error::Runtime(RuntimeError::UndefinedVariable { name: "z".to_string(),
                                                                line: 4, }));
}

#[test]
fn unfinished_input_reports_its_last_line() {
    assert_eq!(assert_failure("matrix A = [[1, 2]"),
               Error::Parse(ParseError::UnexpectedEndOfInput { line: 1 }));
    assert_eq!(assert_failure("x = 1;\nmatrix A = [[1, 2]"),
               Error::Parse(ParseError::UnexpectedEndOfInput { line: 2 }));
    assert_eq!(assert_failure("x = 1;\nx ="),
               Error::Parse(ParseError::UnexpectedEndOfInput { line: 2 }));
    assert_eq!(assert_failure("x = 1;\n\ny = dot(x,"),
               Error::Parse(ParseError::UnexpectedEndOfInput { line: 3 }));

    assert!(assert_failure("matrix A = [[1, 2]").to_string().starts_with("Error on line 1"));
}

#[test]
fn integer_literal_range() {
    assert_eq!(outcome("-9223372036854775808;"), Value::from(i64::MIN));
    assert_eq!(outcome("[[-9223372036854775808, 9223372036854775807]];").to_string(),
               "[[-9223372036854775808, 9223372036854775807]]");

    assert!(matches!(assert_failure("9223372036854775808;"),
                     Error::Parse(ParseError::LiteralTooLarge { .. })));
    assert!(matches!(assert_failure("-9223372036854775809;"),
                     Error::Parse(ParseError::LiteralTooLarge { .. })));
}
