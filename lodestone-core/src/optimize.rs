use crate::{Float, Vector};

/// A smooth objective exposing its cost and gradient as a single joint
/// evaluation.
///
/// This is the seam between model fitters and solvers: a fitter hands any
/// `Objective` to any conforming gradient-based minimizer, and either side
/// can be swapped independently. Implementations must be deterministic for
/// a given parameter vector.
pub trait Objective {
    /// Evaluates the objective at `theta`, returning the scalar cost and the
    /// gradient vector of the same length as `theta`.
    fn evaluate(&self, theta: &Vector) -> (Float, Vector);
}

/// Outcome of a [`GradientDescent::minimize`] run.
///
/// Always carries the last iterate, whether or not the run converged;
/// callers that ignore `converged` get best-effort parameters bounded by
/// the iteration budget.
#[derive(Debug, Clone)]
pub struct OptimizeResult {
    /// Final parameter vector (the last accepted iterate).
    pub theta: Vector,
    /// Objective value at `theta`.
    pub cost: Float,
    /// Number of accepted descent steps taken.
    pub iterations: usize,
    /// Whether the gradient-norm tolerance was reached within the budget.
    pub converged: bool,
}

/// Armijo condition constant for the backtracking line search.
const ARMIJO_C: Float = 1e-4;

/// Multiplicative step shrink factor on a rejected trial step.
const BACKTRACK: Float = 0.5;

/// Step length tried first on every iteration.
const INITIAL_STEP: Float = 1.0;

/// Line search gives up once the step shrinks below this.
const MIN_STEP: Float = 1e-10;

/// **Batch gradient descent** with backtracking (Armijo) line search.
///
/// # Algorithm
///
/// Per iteration, starting from the current iterate `θ`:
/// 1. Evaluate `(J, ∇J)` through the [`Objective`].
/// 2. Try the step `θ' = θ - α·∇J` with `α = 1`, halving `α` until the
///    sufficient-decrease condition holds:
///
/// ```text
/// J(θ') ≤ J(θ) - c·α·||∇J||²      (c = 1e-4)
/// ```
///
/// 3. Accept `θ'` and repeat, stopping when `||∇J||` falls below the
///    gradient tolerance, the iteration budget is exhausted, or no
///    acceptable step exists above the minimum step length.
///
/// Trial steps with a non-finite cost are rejected like any other failed
/// step, keeping iterates inside the finite region of the objective.
///
/// # Determinism
///
/// No randomness anywhere: for a given objective, initial vector, and
/// configuration, the returned [`OptimizeResult`] is identical across runs.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    /// Maximum number of accepted descent steps.
    max_iter: usize,
    /// Gradient-norm stopping tolerance.
    grad_tol: Float,
}

impl Default for GradientDescent {
    fn default() -> Self {
        Self {
            max_iter: 400,
            grad_tol: 1e-4,
        }
    }
}

impl GradientDescent {
    /// Creates a solver with the given iteration budget and the default
    /// gradient tolerance.
    pub fn new(max_iter: usize) -> Self {
        Self {
            max_iter,
            ..Self::default()
        }
    }

    /// Sets the gradient-norm stopping tolerance.
    pub fn grad_tol(mut self, grad_tol: Float) -> Self {
        self.grad_tol = grad_tol;
        self
    }

    /// Minimizes `objective` starting from `init`.
    ///
    /// Returns the last accepted iterate and its cost. Non-convergence
    /// within the budget is not an error; inspect
    /// [`OptimizeResult::converged`] if it matters.
    pub fn minimize<O: Objective>(&self, objective: &O, init: Vector) -> OptimizeResult {
        let mut theta = init;
        let (mut cost, mut grad) = objective.evaluate(&theta);
        let mut iterations = 0;
        let mut converged = grad.norm() <= self.grad_tol;

        while !converged && iterations < self.max_iter {
            let descent = grad.norm_squared();
            let mut step = INITIAL_STEP;
            let mut accepted = None;

            while step >= MIN_STEP {
                let trial = &theta - &grad * step;
                let (trial_cost, trial_grad) = objective.evaluate(&trial);
                if trial_cost.is_finite() && trial_cost <= cost - ARMIJO_C * step * descent {
                    accepted = Some((trial, trial_cost, trial_grad));
                    break;
                }
                step *= BACKTRACK;
            }

            match accepted {
                Some((next_theta, next_cost, next_grad)) => {
                    theta = next_theta;
                    cost = next_cost;
                    grad = next_grad;
                }
                // Line search stalled; the current iterate is the answer.
                None => break,
            }

            iterations += 1;
            converged = grad.norm() <= self.grad_tol;
        }

        OptimizeResult {
            theta,
            cost,
            iterations,
            converged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ||θ - a||², gradient 2(θ - a). Minimum at `a` with cost 0.
    struct Bowl {
        center: Vector,
    }

    impl Objective for Bowl {
        fn evaluate(&self, theta: &Vector) -> (Float, Vector) {
            let diff = theta - &self.center;
            (diff.norm_squared(), diff * 2.0)
        }
    }

    #[test]
    fn test_bowl_minimized_to_center() {
        let bowl = Bowl {
            center: Vector::from_vec(vec![3.0, -1.5]),
        };
        let solver = GradientDescent::new(400).grad_tol(1e-5);
        let result = solver.minimize(&bowl, Vector::zeros(2));

        assert!(result.converged);
        assert!((result.theta[0] - 3.0).abs() < 1e-3);
        assert!((result.theta[1] - (-1.5)).abs() < 1e-3);
        assert!(result.cost < 1e-6);
    }

    #[test]
    fn test_zero_budget_returns_init() {
        let bowl = Bowl {
            center: Vector::from_vec(vec![3.0, -1.5]),
        };
        let solver = GradientDescent::new(0);
        let result = solver.minimize(&bowl, Vector::zeros(2));

        assert_eq!(result.iterations, 0);
        assert!(!result.converged);
        assert_eq!(result.theta, Vector::zeros(2));
    }

    #[test]
    fn test_already_optimal_init() {
        let center = Vector::from_vec(vec![0.5, 0.5]);
        let bowl = Bowl {
            center: center.clone(),
        };
        let solver = GradientDescent::new(400);
        let result = solver.minimize(&bowl, center.clone());

        assert!(result.converged);
        assert_eq!(result.iterations, 0);
        assert_eq!(result.theta, center);
    }

    #[test]
    fn test_deterministic() {
        let bowl = Bowl {
            center: Vector::from_vec(vec![1.0, 2.0, 3.0]),
        };
        let solver = GradientDescent::new(50);
        let first = solver.minimize(&bowl, Vector::zeros(3));
        let second = solver.minimize(&bowl, Vector::zeros(3));

        assert_eq!(first.theta, second.theta);
        assert_eq!(first.cost, second.cost);
        assert_eq!(first.iterations, second.iterations);
    }
}
