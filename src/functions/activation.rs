use serde::{Deserialize, Serialize};

/// Identifies an activation function in a saved model configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationType {
    Sigmoid,
    TanH,
    ReLU,
    SiLU,
    Softmax,
    Linear,
}

pub trait Activation {
    /// Returns the activation of the unit at `index` given the whole
    /// pre-activation vector. The whole vector is passed because Softmax
    /// depends on every unit in the layer.
    fn activate(&self, z: &[f64], index: usize) -> f64;
    /// Returns the derivative of [`Activation::activate`] at `index` with
    /// respect to `z[index]`. For Softmax this is the diagonal term of the
    /// Jacobian only.
    fn derivative(&self, z: &[f64], index: usize) -> f64;
    /// Returns the identifying tag, so a layer's configuration can be saved
    /// without the vectors.
    fn activation_type(&self) -> ActivationType;
}

/// Returns the shared stateless instance for a tag. Instances hold no state
/// and may be used from any number of threads at once.
pub fn get_activation(activation_type: ActivationType) -> &'static dyn Activation {
    match activation_type {
        ActivationType::Sigmoid => &Sigmoid,
        ActivationType::TanH => &TanH,
        ActivationType::ReLU => &ReLU,
        ActivationType::SiLU => &SiLU,
        ActivationType::Softmax => &Softmax,
        ActivationType::Linear => &Linear,
    }
}

impl ActivationType {
    /// Returns the byte stored in a saved model configuration.
    pub fn tag(&self) -> u8 {
        *self as u8
    }
}

impl From<u8> for ActivationType {
    /// Decodes a saved tag. Unknown tags decode to Sigmoid rather than
    /// failing.
    fn from(tag: u8) -> Self {
        match tag {
            0 => ActivationType::Sigmoid,
            1 => ActivationType::TanH,
            2 => ActivationType::ReLU,
            3 => ActivationType::SiLU,
            4 => ActivationType::Softmax,
            5 => ActivationType::Linear,
            _ => ActivationType::Sigmoid,
        }
    }
}

/// `1 / (1 + e^-z)`, always in (0, 1).
#[derive(Debug, Clone, Copy)]
pub struct Sigmoid;

impl Activation for Sigmoid {
    fn activate(&self, z: &[f64], index: usize) -> f64 {
        1.0 / (1.0 + (-z[index]).exp())
    }

    fn derivative(&self, z: &[f64], index: usize) -> f64 {
        let a = self.activate(z, index);
        a * (1.0 - a)
    }

    fn activation_type(&self) -> ActivationType {
        ActivationType::Sigmoid
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Linear;

impl Activation for Linear {
    fn activate(&self, z: &[f64], index: usize) -> f64 {
        z[index]
    }

    fn derivative(&self, _z: &[f64], _index: usize) -> f64 {
        1.0
    }

    fn activation_type(&self) -> ActivationType {
        ActivationType::Linear
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TanH;

impl Activation for TanH {
    fn activate(&self, z: &[f64], index: usize) -> f64 {
        let e1 = (-z[index]).exp();
        let e2 = z[index].exp();
        let res = (e2 - e1) / (e2 + e1);
        // For large |z| the ratio is inf/inf; a saturated unit reads ±1.
        if res.is_nan() {
            z[index].signum()
        } else {
            res
        }
    }

    fn derivative(&self, z: &[f64], index: usize) -> f64 {
        let t = self.activate(z, index);
        1.0 - t * t
    }

    fn activation_type(&self) -> ActivationType {
        ActivationType::TanH
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ReLU;

impl Activation for ReLU {
    fn activate(&self, z: &[f64], index: usize) -> f64 {
        z[index].max(0.0)
    }

    /// The derivative at exactly 0 is 0.
    fn derivative(&self, z: &[f64], index: usize) -> f64 {
        if z[index] > 0.0 {
            1.0
        } else {
            0.0
        }
    }

    fn activation_type(&self) -> ActivationType {
        ActivationType::ReLU
    }
}

/// `z * sigmoid(z)`.
#[derive(Debug, Clone, Copy)]
pub struct SiLU;

impl Activation for SiLU {
    fn activate(&self, z: &[f64], index: usize) -> f64 {
        z[index] / (1.0 + (-z[index]).exp())
    }

    fn derivative(&self, z: &[f64], index: usize) -> f64 {
        let sig = 1.0 / (1.0 + (-z[index]).exp());
        z[index] * sig * (1.0 - sig) + sig
    }

    fn activation_type(&self) -> ActivationType {
        ActivationType::SiLU
    }
}

/// `e^z_i / Σ e^z_j` over the whole layer. Exponentials are taken on the
/// raw inputs (no max-subtraction shift), so very large units can overflow
/// to infinity.
#[derive(Debug, Clone, Copy)]
pub struct Softmax;

impl Activation for Softmax {
    fn activate(&self, z: &[f64], index: usize) -> f64 {
        let exp_sum: f64 = z.iter().map(|x| x.exp()).sum();
        z[index].exp() / exp_sum
    }

    fn derivative(&self, z: &[f64], index: usize) -> f64 {
        let exp_sum: f64 = z.iter().map(|x| x.exp()).sum();
        let ex = z[index].exp();
        (ex * exp_sum - ex * ex) / (exp_sum * exp_sum)
    }

    fn activation_type(&self) -> ActivationType {
        ActivationType::Softmax
    }
}
