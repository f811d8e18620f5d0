use crate::{Float, Matrix};

/// Returns a new matrix with a column of `1.0` prepended as column 0.
///
/// The intercept column lets an affine decision function be expressed as a
/// single matrix-vector product, with the intercept weight living at
/// parameter index 0.
///
/// # Examples
///
/// ```rust
/// use lodestone_core::utils::add_intercept_column;
/// use lodestone_core::Matrix;
///
/// let x = Matrix::from_row_slice(2, 1, &[4.0, 7.0]);
/// let augmented = add_intercept_column(&x);
/// assert_eq!(augmented.ncols(), 2);
/// assert_eq!(augmented[(0, 0)], 1.0);
/// assert_eq!(augmented[(1, 1)], 7.0);
/// ```
pub fn add_intercept_column(x: &Matrix) -> Matrix {
    x.clone().insert_column(0, 1.0)
}

/// Conversion of caller-supplied feature data into a design matrix.
///
/// Models accept either a ready-made `(m × d)` matrix or a flat sequence of
/// scalars; a flat sequence is promoted to an `(m × 1)` single-feature
/// column. Both spellings of the same values must produce identical models.
pub trait IntoDesignMatrix {
    fn into_design(self) -> Matrix;
}

impl IntoDesignMatrix for Matrix {
    fn into_design(self) -> Matrix {
        self
    }
}

impl IntoDesignMatrix for &Matrix {
    fn into_design(self) -> Matrix {
        self.clone()
    }
}

impl IntoDesignMatrix for &[Float] {
    fn into_design(self) -> Matrix {
        Matrix::from_column_slice(self.len(), 1, self)
    }
}

impl IntoDesignMatrix for Vec<Float> {
    fn into_design(self) -> Matrix {
        Matrix::from_column_slice(self.len(), 1, &self)
    }
}

impl IntoDesignMatrix for &Vec<Float> {
    fn into_design(self) -> Matrix {
        Matrix::from_column_slice(self.len(), 1, self)
    }
}
