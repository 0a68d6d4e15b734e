//! Pluggable activation and cost functions for forward inference and
//! backpropagation.

pub mod activation;
pub mod cost;
