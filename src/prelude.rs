/// Error type for NNFunctions
#[derive(Debug, PartialEq)]
pub enum Error {
    /// Indicates a saved cost-function tag that names no known cost function.
    UnknownCostFunction(u8),
}

pub type Result<T> = std::result::Result<T, Error>;
