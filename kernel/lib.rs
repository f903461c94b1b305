mod data_type;
#[cfg(test)]
mod data_type_tests;
mod value;

pub use crate::{data_type::DataType, value::Value};
