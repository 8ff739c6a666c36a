// =========================================================================
// FALSIFY-MX: Matrix storage contract
//
// Claims under test:
//   - shape is fixed for the lifetime of a matrix
//   - every checked accessor rejects indices outside [0, rows) x [0, cols)
//   - derived matrices own their storage
// =========================================================================

use super::*;

/// FALSIFY-MX-001: Row-major layout: flat[i * cols + j] == get(i, j)
#[test]
fn falsify_mx_001_row_major_layout() {
    let m = Matrix::from_vec(3, 4, (0..12).map(f64::from).collect()).expect("valid");
    let flat = m.to_flat_vec();

    for i in 0..3 {
        for j in 0..4 {
            assert_eq!(
                flat[i * 4 + j],
                m.get(i, j).expect("in bounds"),
                "FALSIFIED MX-001: flat[{i}*4+{j}] != get({i},{j})"
            );
        }
    }
}

/// FALSIFY-MX-002: Every out-of-range index is rejected by every accessor
#[test]
fn falsify_mx_002_bounds_checked_everywhere() {
    let mut m = Matrix::zeros(2, 3).expect("valid");

    for (r, c) in [(2, 0), (0, 3), (2, 3), (usize::MAX, 0)] {
        assert!(m.get(r, c).is_err(), "FALSIFIED MX-002: get({r},{c}) accepted");
        assert!(m.set(r, c, 1.0).is_err(), "FALSIFIED MX-002: set({r},{c}) accepted");
        assert!(
            m.add_at(r, c, 1.0).is_err(),
            "FALSIFIED MX-002: add_at({r},{c}) accepted"
        );
    }
    assert!(m.is_zero(), "FALSIFIED MX-002: rejected write mutated storage");
}

/// FALSIFY-MX-003: clear() keeps the shape
#[test]
fn falsify_mx_003_clear_keeps_shape() {
    let mut m = Matrix::random(4, 7, Some(7)).expect("valid");
    m.clear();

    assert_eq!(m.shape(), (4, 7), "FALSIFIED MX-003: shape changed after clear");
    assert!(m.is_zero(), "FALSIFIED MX-003: clear left non-zero cells");
}

/// FALSIFY-MX-004: column(j) and row(i) agree with get()
#[test]
fn falsify_mx_004_slices_match_cells() {
    let m = Matrix::random(3, 5, Some(11)).expect("valid");

    for j in 0..5 {
        let col = m.column(j).expect("in bounds");
        for i in 0..3 {
            assert_eq!(
                col.get(i, 0).expect("in bounds"),
                m.get(i, j).expect("in bounds"),
                "FALSIFIED MX-004: column({j})[{i}] mismatch"
            );
        }
    }
    for i in 0..3 {
        let row = m.row(i).expect("in bounds");
        assert_eq!(row.n_cols(), 5, "FALSIFIED MX-004: row({i}) width");
    }
}

/// FALSIFY-MX-005: Display emits exactly one line per row
#[test]
fn falsify_mx_005_display_one_line_per_row() {
    let m = Matrix::random(6, 2, Some(3)).expect("valid");
    let text = m.to_string();

    assert_eq!(text.lines().count(), 6, "FALSIFIED MX-005: line count");
    for line in text.lines() {
        assert_eq!(line.len(), 20, "FALSIFIED MX-005: line '{line}' is not 2 x 10 chars");
    }
}
