use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    Bool,
    I64,
    F64,
    Decimal { precision: u8, scale: u8 },
    Date,
    Timestamp,
    String,
    Map { key: Box<DataType>, value: Box<DataType> },
}

impl DataType {
    pub fn is_decimal(&self) -> bool {
        match self {
            DataType::Decimal { .. } => true,
            _ => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        match self {
            DataType::I64 | DataType::F64 | DataType::Decimal { .. } => true,
            _ => false,
        }
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataType::Bool => write!(f, "BOOL"),
            DataType::I64 => write!(f, "INT64"),
            DataType::F64 => write!(f, "DOUBLE"),
            DataType::Decimal { precision, scale } => {
                write!(f, "DECIMAL({}, {})", precision, scale)
            }
            DataType::Date => write!(f, "DATE"),
            DataType::Timestamp => write!(f, "TIMESTAMP"),
            DataType::String => write!(f, "STRING"),
            DataType::Map { key, value } => write!(f, "MAP<{}, {}>", key, value),
        }
    }
}
