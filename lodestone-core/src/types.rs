pub type Float = f32;
pub type Matrix = nalgebra::DMatrix<Float>;
pub type Vector = nalgebra::DVector<Float>;

/// Discrete class label.
pub type Label = usize;

/// One predicted label per input row, in input order.
pub type Predictions = Vec<Label>;
