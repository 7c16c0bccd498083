pub(crate) mod error;

pub mod constants;
