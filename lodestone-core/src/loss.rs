use crate::optimize::Objective;
use crate::{Float, Matrix, Vector};

/// Computes the **logistic sigmoid** of a scalar.
///
/// # Definition
///
/// ```text
/// σ(z) = 1 / (1 + e^(-z))
/// ```
///
/// For finite `z` the result lies in the open interval `(0, 1)`, saturating
/// toward `0` or `1` as `|z|` grows. No numerical stabilization is performed:
/// overflow in `exp` follows IEEE semantics (`e^(-z) → +inf` gives `σ → 0`),
/// it never raises an error.
///
/// # Examples
///
/// ```rust
/// use lodestone_core::loss::sigmoid;
///
/// assert_eq!(sigmoid(0.0), 0.5);
/// ```
pub fn sigmoid(z: Float) -> Float {
    1.0 / (1.0 + (-z).exp())
}

/// Elementwise [`sigmoid`] over a vector.
pub fn sigmoid_all(z: &Vector) -> Vector {
    z.map(sigmoid)
}

/// Computes the **unregularized logistic-regression cost** and its gradient.
///
/// # Definition
///
/// With `h = σ(X θ)` over `m` samples:
///
/// ```text
/// J(θ)  = (1/m) · [ -yᵀ·ln(h) - (1-y)ᵀ·ln(1-h) ]
/// ∇J(θ) = (1/m) · Xᵀ·(h - y)
/// ```
///
/// # Parameters
///
/// - `theta`: Parameter vector of length `d` (one weight per column of `x`,
///   including the intercept weight at index 0 when `x` carries an intercept
///   column).
/// - `x`: Design matrix of shape `(m × d)`. Intercept augmentation, if any,
///   is the caller's responsibility.
/// - `y`: Target vector of length `m` with values `0.0` or `1.0`.
///
/// # Returns
///
/// The pair `(J, ∇J)` where the gradient has the same length as `theta`.
///
/// # Panics
///
/// Panics inside the matrix product if `theta.len() != x.ncols()` or
/// `y.len() != x.nrows()`. Shapes are not validated here; model-level
/// callers check them at their boundary.
///
/// # Notes
///
/// - `m = 0` divides by zero; callers must guarantee a nonempty dataset.
/// - If any `h_i` saturates to exactly `0` or `1`, the cost becomes
///   infinite or NaN. This is propagated silently, not trapped.
pub fn cost(theta: &Vector, x: &Matrix, y: &Vector) -> (Float, Vector) {
    let m = y.len() as Float;

    let h = sigmoid_all(&(x * theta));
    let log_h = h.map(Float::ln);
    let log_not_h = h.map(|v| (1.0 - v).ln());

    let ones = Vector::from_element(y.len(), 1.0);
    let j = (-y.dot(&log_h) - (ones - y).dot(&log_not_h)) / m;

    let grad = (x.transpose() * (h - y)) / m;

    (j, grad)
}

/// Computes the **L2-regularized logistic-regression cost** and its gradient.
///
/// # Definition
///
/// On top of the unregularized [`cost`]:
///
/// ```text
/// J(θ)    += (λ / 2m) · Σ_{j≥1} θ_j²
/// ∇J(θ)_j += (λ / m) · θ_j        for j ≥ 1
/// ```
///
/// The intercept weight at index 0 is never penalized: the penalty loop
/// starts at index 1, so neither the cost addend nor the gradient addend can
/// touch the intercept component.
///
/// # Parameters
///
/// - `theta`, `x`, `y`: As for [`cost`].
/// - `lambda`: Nonnegative regularization strength. `0.0` reproduces
///   [`cost`] exactly.
///
/// # Returns
///
/// The pair `(J, ∇J)` where the gradient has the same length as `theta`.
pub fn cost_reg(theta: &Vector, x: &Matrix, y: &Vector, lambda: Float) -> (Float, Vector) {
    let m = y.len() as Float;
    let scale = lambda / (2.0 * m);
    let shrink = lambda / m;

    let (mut j, mut grad) = cost(theta, x, y);
    for k in 1..theta.len() {
        j += scale * theta[k] * theta[k];
        grad[k] += shrink * theta[k];
    }

    (j, grad)
}

/// Unregularized logistic loss over a borrowed dataset, as a minimization
/// [`Objective`].
pub struct LogisticLoss<'a> {
    x: &'a Matrix,
    y: &'a Vector,
}

impl<'a> LogisticLoss<'a> {
    pub fn new(x: &'a Matrix, y: &'a Vector) -> Self {
        Self { x, y }
    }
}

impl Objective for LogisticLoss<'_> {
    fn evaluate(&self, theta: &Vector) -> (Float, Vector) {
        cost(theta, self.x, self.y)
    }
}

/// L2-regularized logistic loss over a borrowed dataset, as a minimization
/// [`Objective`]. The intercept weight is excluded from the penalty.
pub struct RegularizedLogisticLoss<'a> {
    x: &'a Matrix,
    y: &'a Vector,
    lambda: Float,
}

impl<'a> RegularizedLogisticLoss<'a> {
    pub fn new(x: &'a Matrix, y: &'a Vector, lambda: Float) -> Self {
        Self { x, y, lambda }
    }
}

impl Objective for RegularizedLogisticLoss<'_> {
    fn evaluate(&self, theta: &Vector) -> (Float, Vector) {
        cost_reg(theta, self.x, self.y, self.lambda)
    }
}
