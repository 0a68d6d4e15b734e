use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Identifies a cost function in a saved model configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostType {
    MSE,
    CrossEntropy,
    MSLE,
    MAPE,
}

pub trait CostFunction {
    /// Returns the aggregate loss over a predicted/expected vector pair.
    fn calc_cost(&self, output: &[f64], expected: &[f64]) -> f64;
    /// Returns the gradient of the loss with respect to `output[index]`.
    fn calc_derivative(&self, output: &[f64], expected: &[f64], index: usize) -> f64;
}

/// Returns the shared stateless instance for a tag. Instances hold no state
/// and may be used from any number of threads at once.
pub fn get_cost_function(cost_type: CostType) -> &'static dyn CostFunction {
    match cost_type {
        CostType::MSE => &MSE,
        CostType::CrossEntropy => &CrossEntropy,
        CostType::MSLE => &MSLE,
        CostType::MAPE => &MAPE,
    }
}

impl CostType {
    /// Returns the byte stored in a saved model configuration.
    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for CostType {
    type Error = Error;

    /// Decodes a saved tag. Unknown tags are an error, unlike activation
    /// tags, which fall back to Sigmoid.
    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            0 => Ok(CostType::MSE),
            1 => Ok(CostType::CrossEntropy),
            2 => Ok(CostType::MSLE),
            3 => Ok(CostType::MAPE),
            _ => Err(Error::UnknownCostFunction(tag)),
        }
    }
}

/// Mean squared error, normalized by vector length.
#[derive(Debug, Clone, Copy)]
pub struct MSE;

impl CostFunction for MSE {
    fn calc_cost(&self, output: &[f64], expected: &[f64]) -> f64 {
        let mut error = 0.0;
        for i in 0..output.len() {
            let diff = output[i] - expected[i];
            error += diff * diff;
        }
        error / output.len() as f64
    }

    fn calc_derivative(&self, output: &[f64], expected: &[f64], index: usize) -> f64 {
        2.0 * (output[index] - expected[index]) / output.len() as f64
    }
}

/// Negative log-likelihood of the hot class. Targets are one-hot; a target
/// with no element equal to 1 yields a fixed cost of 1.
#[derive(Debug, Clone, Copy)]
pub struct CrossEntropy;

impl CostFunction for CrossEntropy {
    fn calc_cost(&self, output: &[f64], expected: &[f64]) -> f64 {
        for i in 0..expected.len() {
            if expected[i] == 1.0 {
                return -output[i].ln();
            }
        }
        1.0
    }

    fn calc_derivative(&self, output: &[f64], expected: &[f64], index: usize) -> f64 {
        if expected[index] == 0.0 {
            return 0.0;
        }
        -1.0 / output[index]
    }
}

/// Mean squared logarithmic error. The cost is a plain sum over the vector,
/// not a mean.
#[derive(Debug, Clone, Copy)]
pub struct MSLE;

impl CostFunction for MSLE {
    fn calc_cost(&self, output: &[f64], expected: &[f64]) -> f64 {
        let mut error = 0.0;
        for i in 0..output.len() {
            let diff = (output[i] + 1.0).ln() - (expected[i] + 1.0).ln();
            error += diff * diff;
        }
        error
    }

    fn calc_derivative(&self, output: &[f64], expected: &[f64], index: usize) -> f64 {
        2.0 * ((output[index] + 1.0).ln() - (expected[index] + 1.0).ln()) / (output[index] + 1.0)
    }
}

/// Mean absolute percentage error.
#[derive(Debug, Clone, Copy)]
pub struct MAPE;

impl CostFunction for MAPE {
    fn calc_cost(&self, output: &[f64], expected: &[f64]) -> f64 {
        let mut error = 0.0;
        for i in 0..output.len() {
            // f64::MIN_POSITIVE keeps the denominator nonzero when
            // expected[i] == 0.
            error += ((expected[i] - output[i]) / (expected[i] + f64::MIN_POSITIVE)).abs();
        }
        error / output.len() as f64
    }

    fn calc_derivative(&self, output: &[f64], expected: &[f64], index: usize) -> f64 {
        let a = output[index];
        let e = expected[index];
        // Recomputes the whole cost on every call, O(len) per element.
        (a / (e * e) - 1.0 / e) / self.calc_cost(output, expected)
    }
}
