pub mod errors;
pub mod usecases;
