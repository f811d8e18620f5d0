use std::fmt;

#[derive(Debug)]
pub enum LodestoneError {
    /// Shape or dimensionality mismatch
    ShapeMismatch { expected: String, got: String },

    /// The training dataset contains zero samples.
    EmptyTrainingData,

    /// Invalid Hyperparameter Value
    InvalidHyperparameter { name: String, value: String },
}

impl fmt::Display for LodestoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for LodestoneError {}

pub type Result<T> = std::result::Result<T, LodestoneError>;
