use matlang::interpreter::{
    evaluator::{
        binary::elementwise::{add, sub},
        function::{dot::dot, matmul::matmul, transpose::transpose},
    },
    shape::{Shape, shape_of},
    value::{core::Value, matrix::Matrix, number::Number},
};
use proptest::prelude::*;

/// Small entries keep every product and sum far from overflow.
fn entry() -> impl Strategy<Value = Number> {
    (-1000_i64..=1000).prop_map(Number::from)
}

fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Value> {
    prop::collection::vec(prop::collection::vec(entry(), cols), rows).prop_map(|rows| {
        Value::Matrix(Matrix::from_rows(rows, 1).expect("generated rows are rectangular"))
    })
}

fn any_matrix() -> impl Strategy<Value = Value> {
    (1_usize..6, 1_usize..6).prop_flat_map(|(rows, cols)| matrix(rows, cols))
}

/// Two matrices whose shapes allow `matmul(a, b)`.
fn multipliable() -> impl Strategy<Value = (Value, Value)> {
    (1_usize..5, 1_usize..5, 1_usize..5).prop_flat_map(|(m, n, p)| (matrix(m, n), matrix(n, p)))
}

/// Two values with the same number of elements and arbitrary shapes.
fn same_length() -> impl Strategy<Value = (Value, Value)> {
    (1_usize..4, 1_usize..4, 1_usize..4).prop_flat_map(|(a, b, c)| {
                                             (matrix(a, b * c), matrix(a * b, c))
                                         })
}

fn same_shape() -> impl Strategy<Value = (Value, Value)> {
    (1_usize..5, 1_usize..5).prop_flat_map(|(rows, cols)| (matrix(rows, cols), matrix(rows, cols)))
}

proptest! {
    #[test]
    fn matmul_result_shape((a, b) in multipliable()) {
        let product = matmul(&a, &b, 1).unwrap();
        let expected = Shape::new(shape_of(&a).rows, shape_of(&b).cols);

        prop_assert!(product.is_matrix());
        prop_assert_eq!(shape_of(&product), expected);
    }

    #[test]
    fn matmul_rejects_mismatched_inner_dimensions(m in 1_usize..4, n in 1_usize..4, p in 1_usize..4) {
        let a = Value::Matrix(Matrix::from_rows(vec![vec![Number::from(1_i64); n]; m], 1).unwrap());
        let b = Value::Matrix(Matrix::from_rows(vec![vec![Number::from(1_i64); p]; n + 1], 1).unwrap());

        prop_assert!(matmul(&a, &b, 1).is_err());
    }

    #[test]
    fn single_cell_matmul_is_scalar_product(x in entry(), y in entry()) {
        let product = matmul(&Value::Scalar(x), &Value::Scalar(y), 1).unwrap();
        let expected = Value::Matrix(Matrix::single(x.checked_mul(y, 1).unwrap()));

        prop_assert_eq!(product, expected);
    }

    #[test]
    fn dot_is_commutative((a, b) in same_length()) {
        prop_assert_eq!(dot(&a, &b, 1).unwrap(), dot(&b, &a, 1).unwrap());
    }

    #[test]
    fn transpose_is_an_involution(m in any_matrix()) {
        let transposed = transpose(&m, 1).unwrap();
        let shape = shape_of(&m);

        if !shape.is_single() {
            prop_assert_eq!(shape_of(&transposed), Shape::new(shape.cols, shape.rows));
        }
        prop_assert_eq!(transpose(&transposed, 1).unwrap(), m);
    }

    #[test]
    fn subtraction_undoes_addition((a, b) in same_shape()) {
        let sum = add(&a, &b, 1).unwrap();
        let back = sub(&sum, &b, 1).unwrap();

        if shape_of(&a).is_single() {
            // single-cell operands degenerate to scalar arithmetic
            prop_assert_eq!(Value::Matrix(Matrix::single(back_scalar(&back))), a);
        } else {
            prop_assert_eq!(back, a);
        }
    }
}

fn back_scalar(value: &Value) -> Number {
    match value {
        Value::Scalar(n) => *n,
        Value::Matrix(m) => m.rows()[0][0],
    }
}
