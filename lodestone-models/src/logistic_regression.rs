#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use lodestone_core::{
    add_intercept_column, sigmoid, Float, GradientDescent, IntoDesignMatrix, LodestoneError,
    LogisticLoss, Matrix, Predictions, RegularizedLogisticLoss, Result, Vector,
};

/// Regularization policy for [`LogisticRegression`].
///
/// Resolved once at configuration time; there is no runtime inspection of an
/// optional scalar. `L2(lambda)` penalizes every weight except the intercept
/// weight at index 0.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Penalty {
    /// Plain maximum-likelihood fit.
    None,
    /// L2 (ridge) penalty with the given nonnegative strength.
    L2(Float),
}

/// **Binary logistic regression** fitted by regularized maximum likelihood.
///
/// The model learns a parameter vector `θ` for the probability estimate:
///
/// ```text
/// P(y = 1 | x) = σ(xᵀθ) = 1 / (1 + e^(-xᵀθ))
/// ```
///
/// where `x` is a feature row augmented with a leading constant `1.0`, so
/// `θ[0]` is the intercept weight.
///
/// # Training objective
///
/// Training minimizes the mean negative log-likelihood:
///
/// ```text
/// J(θ) = (1/m) · Σ_i [ -y_i·ln(h_i) - (1-y_i)·ln(1-h_i) ],   h = σ(X θ)
/// ```
///
/// optionally plus an L2 penalty `(λ/2m)·Σ_{j≥1} θ_j²` that never touches
/// the intercept weight. The objective is convex; it is minimized by batch
/// gradient descent with backtracking line search, starting from `θ = 0`
/// and bounded by a fixed iteration budget.
///
/// # Input conventions
///
/// `fit` and [`FittedLogisticRegression::predict`] take feature data through
/// [`IntoDesignMatrix`]: either an `(m × d)` matrix without an intercept
/// column, or a flat slice of scalars promoted to an `(m × 1)` single-feature
/// column. The intercept column is prepended internally, identically in
/// training and prediction.
///
/// # Determinism
///
/// Zero initialization and a deterministic solver: two fits on identical
/// inputs return identical parameters and cost.
///
/// # Non-convergence
///
/// If the solver exhausts its budget before reaching stationarity, the last
/// iterate is packaged as the fitted model as-is. There is no convergence
/// check, retry, or error.
///
/// # Errors
///
/// - [`LodestoneError::EmptyTrainingData`] if `x` has zero rows.
/// - [`LodestoneError::ShapeMismatch`] if `y.len() != x.nrows()`.
/// - [`LodestoneError::InvalidHyperparameter`] if the L2 strength is
///   negative or non-finite.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    /// Regularization policy applied during fitting.
    penalty: Penalty,
    /// Iteration budget handed to the solver.
    max_iter: usize,
}

impl Default for LogisticRegression {
    fn default() -> Self {
        Self {
            penalty: Penalty::None,
            max_iter: 400,
        }
    }
}

impl LogisticRegression {
    /// Creates an unregularized model with the default iteration budget
    /// of 400.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the regularization policy.
    pub fn penalty(mut self, penalty: Penalty) -> Self {
        self.penalty = penalty;
        self
    }

    /// Sets the solver iteration budget.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Fits the model on training features `x` and binary targets `y`.
    ///
    /// # Parameters
    ///
    /// - `x`: Feature data, `(m × d)` matrix or flat single-feature slice,
    ///   without an intercept column.
    /// - `y`: Target vector of length `m` with values `0.0` or `1.0`.
    ///   Other numeric values are accepted but break the probabilistic
    ///   reading of the fitted model.
    ///
    /// # Algorithm
    ///
    /// 1. Coerce `x` to a matrix (flat input becomes one column) and
    ///    prepend the intercept column.
    /// 2. Initialize `θ = 0` with one weight per augmented column.
    /// 3. Minimize the (possibly penalized) logistic loss with the
    ///    gradient-descent solver under the iteration budget.
    /// 4. Package the final iterate, its cost, and the augmented training
    ///    matrix into an immutable [`FittedLogisticRegression`].
    ///
    /// # Returns
    ///
    /// The fitted model record. Its parameters are whatever the solver last
    /// held, converged or not.
    ///
    /// # Complexity
    ///
    /// Each solver iteration costs `O(m d)` for the matrix-vector products,
    /// times the number of line-search trials.
    pub fn fit<D: IntoDesignMatrix>(&self, x: D, y: &Vector) -> Result<FittedLogisticRegression> {
        let design = add_intercept_column(&x.into_design());
        let m = design.nrows();

        if m == 0 {
            return Err(LodestoneError::EmptyTrainingData);
        }
        if y.len() != m {
            return Err(LodestoneError::ShapeMismatch {
                expected: format!("Expected {} targets", m),
                got: format!("Got {}", y.len()),
            });
        }
        if let Penalty::L2(lambda) = self.penalty {
            if !lambda.is_finite() || lambda < 0.0 {
                return Err(LodestoneError::InvalidHyperparameter {
                    name: "lambda".into(),
                    value: format!("{}", lambda),
                });
            }
        }

        let init = Vector::zeros(design.ncols());
        let solver = GradientDescent::new(self.max_iter);

        let result = match self.penalty {
            Penalty::None => solver.minimize(&LogisticLoss::new(&design, y), init),
            Penalty::L2(lambda) => {
                solver.minimize(&RegularizedLogisticLoss::new(&design, y, lambda), init)
            }
        };

        Ok(FittedLogisticRegression {
            design,
            theta: result.theta,
            cost: result.cost,
        })
    }
}

/// A fitted logistic-regression model.
///
/// Immutable record produced once per [`LogisticRegression::fit`] call and
/// read-only thereafter: the augmented training matrix (kept as a record of
/// the training shape), the learned parameters, and the final training cost.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct FittedLogisticRegression {
    /// Augmented training matrix, intercept column included.
    design: Matrix,
    /// Learned parameter vector, intercept weight at index 0.
    theta: Vector,
    /// Training cost at `theta`.
    cost: Float,
}

impl FittedLogisticRegression {
    /// The augmented training matrix this model was fitted on.
    pub fn design(&self) -> &Matrix {
        &self.design
    }

    /// The learned parameter vector, intercept weight at index 0.
    pub fn theta(&self) -> &Vector {
        &self.theta
    }

    /// The training cost at the learned parameters.
    pub fn cost(&self) -> Float {
        self.cost
    }

    /// Predicts a class label for every row of `x`.
    ///
    /// `x` follows the same convention as training input: no intercept
    /// column, flat input promoted to a single-feature column. Each row is
    /// scored as `σ(rowᵀθ)` and thresholded at `0.5`, with `0.5` itself
    /// classified as `1`.
    ///
    /// # Returns
    ///
    /// One `0`/`1` label per input row, in input order.
    ///
    /// # Errors
    ///
    /// - [`LodestoneError::ShapeMismatch`] if the feature count differs
    ///   from the training feature count.
    pub fn predict<D: IntoDesignMatrix>(&self, x: D) -> Result<Predictions> {
        let design = add_intercept_column(&x.into_design());

        if design.ncols() != self.theta.len() {
            return Err(LodestoneError::ShapeMismatch {
                expected: format!("Expected {} features", self.theta.len() - 1),
                got: format!("Got {}", design.ncols() - 1),
            });
        }

        let scores = &design * &self.theta;
        let preds: Predictions = scores
            .iter()
            .map(|&z| if sigmoid(z) >= 0.5 { 1 } else { 0 })
            .collect();

        Ok(preds)
    }
}
