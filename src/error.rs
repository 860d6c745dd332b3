use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("invalid argument '{arg}': {reason}")]
    InvalidArgument { arg: String, reason: String },

    #[error("failed to render chart: {0}")]
    Chart(#[from] image::ImageError),
}
