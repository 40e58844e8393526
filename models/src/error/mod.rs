pub mod model_error;
pub mod sequence_error;
