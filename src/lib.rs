pub mod functions;
pub mod prelude;
