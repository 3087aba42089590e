pub(crate) mod error;
pub(crate) mod normalize;

pub(crate) use error::ApiError;
