//! Integration tests for nested-slice subsetting.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tabsel_core::subset::check_rectangular;
use tabsel_core::{subset, subset_columns, subset_rows, Axis, TabselError};

fn m() -> Vec<Vec<i32>> {
    vec![
        vec![1, 2, 3, 4, 5],
        vec![6, 7, 8, 9, 10],
        vec![11, 12, 13, 14, 15],
        vec![16, 17, 18, 19, 20],
    ]
}

fn random_matrix(rng: &mut StdRng) -> Vec<Vec<f64>> {
    let nrows = rng.gen_range(1..8);
    let ncols = rng.gen_range(1..8);
    (0..nrows)
        .map(|_| (0..ncols).map(|_| rng.gen_range(-100.0..100.0)).collect())
        .collect()
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn all_rows_two_columns() {
    let out = subset(&m(), &[0, 1, 2, 3], &[1, 2]).unwrap();
    assert_eq!(out, vec![vec![2, 3], vec![7, 8], vec![12, 13], vec![17, 18]]);
}

#[test]
fn two_rows_all_columns() {
    let out = subset(&m(), &[1, 2], &[0, 1, 2, 3, 4]).unwrap();
    assert_eq!(
        out,
        vec![vec![6, 7, 8, 9, 10], vec![11, 12, 13, 14, 15]]
    );
}

#[test]
fn row_index_past_end_is_out_of_bounds() {
    let err = subset(&m(), &[10], &[0]).unwrap_err();
    assert_eq!(
        err,
        TabselError::OutOfBounds {
            axis: Axis::Row,
            index: 10,
            len: 4
        }
    );
    assert!(err.to_string().contains("row index 10"));
}

#[test]
fn column_index_past_end_is_out_of_bounds() {
    let err = subset(&m(), &[0], &[1, 5]).unwrap_err();
    assert_eq!(
        err,
        TabselError::OutOfBounds {
            axis: Axis::Column,
            index: 5,
            len: 5
        }
    );
}

#[test]
fn duplicated_row_index_duplicates_row() {
    let out = subset(&m(), &[0, 0], &[0]).unwrap();
    assert_eq!(out[0], out[1]);
}

#[test]
fn works_on_array_rows_and_borrowed_slices() {
    let arrays = [[1.5, 2.5], [3.5, 4.5]];
    assert_eq!(subset(&arrays, &[1], &[0]).unwrap(), vec![vec![3.5]]);

    let a = [1u8, 2, 3];
    let b = [4u8, 5, 6];
    let borrowed: Vec<&[u8]> = vec![&a, &b];
    assert_eq!(
        subset(&borrowed, &[1, 0], &[2]).unwrap(),
        vec![vec![6], vec![3]]
    );
}

#[test]
fn generic_over_non_numeric_elements() {
    let names = vec![
        vec!["a".to_string(), "b".to_string()],
        vec!["c".to_string(), "d".to_string()],
    ];
    assert_eq!(
        subset(&names, &[1], &[1, 0]).unwrap(),
        vec![vec!["d".to_string(), "c".to_string()]]
    );
}

#[test]
fn input_is_not_mutated() {
    let original = m();
    let copy = original.clone();
    let _ = subset(&original, &[3, 2, 1], &[4, 0]).unwrap();
    assert_eq!(original, copy);
}

// ---------------------------------------------------------------------------
// Ragged and empty input
// ---------------------------------------------------------------------------

#[test]
fn ragged_matrix_is_rejected() {
    let ragged = vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]];
    assert_eq!(
        subset(&ragged, &[0], &[0]),
        Err(TabselError::ShapeMismatch {
            row: 1,
            expected: 3,
            found: 2
        })
    );
    assert!(check_rectangular(&ragged).is_err());
}

#[test]
fn empty_matrix_rejects_any_index() {
    let empty: Vec<Vec<i32>> = vec![];
    assert!(subset(&empty, &[0], &[]).is_err());
    assert!(subset(&empty, &[], &[0]).is_err());
    assert_eq!(subset(&empty, &[], &[]).unwrap(), Vec::<Vec<i32>>::new());
}

#[test]
fn empty_selections() {
    assert!(subset(&m(), &[], &[0, 1]).unwrap().is_empty());
    assert_eq!(
        subset(&m(), &[2, 3], &[]).unwrap(),
        vec![Vec::<i32>::new(), Vec::new()]
    );
}

// ---------------------------------------------------------------------------
// Single-axis helpers
// ---------------------------------------------------------------------------

#[test]
fn subset_rows_keeps_all_columns() {
    assert_eq!(
        subset_rows(&m(), &[3]).unwrap(),
        vec![vec![16, 17, 18, 19, 20]]
    );
}

#[test]
fn subset_columns_keeps_all_rows() {
    assert_eq!(
        subset_columns(&m(), &[4]).unwrap(),
        vec![vec![5], vec![10], vec![15], vec![20]]
    );
}

// ---------------------------------------------------------------------------
// Randomised properties
// ---------------------------------------------------------------------------

#[test]
fn identity_selection_returns_input() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let matrix = random_matrix(&mut rng);
        let rows: Vec<usize> = (0..matrix.len()).collect();
        let cols: Vec<usize> = (0..matrix[0].len()).collect();
        assert_eq!(subset(&matrix, &rows, &cols).unwrap(), matrix);
    }
}

#[test]
fn output_shape_follows_index_lengths() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        let matrix = random_matrix(&mut rng);
        let nrows = matrix.len();
        let ncols = matrix[0].len();
        let rows: Vec<usize> = (0..rng.gen_range(0..10))
            .map(|_| rng.gen_range(0..nrows))
            .collect();
        let cols: Vec<usize> = (0..rng.gen_range(0..10))
            .map(|_| rng.gen_range(0..ncols))
            .collect();

        let out = subset(&matrix, &rows, &cols).unwrap();
        assert_eq!(out.len(), rows.len());
        for (k, row) in out.iter().enumerate() {
            assert_eq!(row.len(), cols.len());
            for (l, value) in row.iter().enumerate() {
                assert_eq!(*value, matrix[rows[k]][cols[l]]);
            }
        }
    }
}

#[test]
fn reversing_indices_reverses_output() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..50 {
        let matrix = random_matrix(&mut rng);
        let rows: Vec<usize> = (0..matrix.len()).collect();
        let cols: Vec<usize> = (0..matrix[0].len()).collect();
        let rev_rows: Vec<usize> = rows.iter().rev().copied().collect();
        let rev_cols: Vec<usize> = cols.iter().rev().copied().collect();

        let forward = subset(&matrix, &rows, &cols).unwrap();

        let by_rows = subset(&matrix, &rev_rows, &cols).unwrap();
        let mut expected_rows = forward.clone();
        expected_rows.reverse();
        assert_eq!(by_rows, expected_rows);

        let by_cols = subset(&matrix, &rows, &rev_cols).unwrap();
        let expected_cols: Vec<Vec<f64>> = forward
            .iter()
            .map(|r| r.iter().rev().copied().collect())
            .collect();
        assert_eq!(by_cols, expected_cols);
    }
}
