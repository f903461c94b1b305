use crate::DataType;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, hash};

/// A typed constant. `None` is the typed null of the variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    Bool(Option<bool>),
    I64(Option<i64>),
    F64(Option<f64>),
    Decimal {
        value: Option<i128>,
        precision: u8,
        scale: u8,
    },
    Date(Option<i32>),
    Timestamp(Option<i64>),
    String(Option<String>),
}

impl Value {
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Bool(_) => DataType::Bool,
            Value::I64(_) => DataType::I64,
            Value::F64(_) => DataType::F64,
            Value::Decimal {
                precision, scale, ..
            } => DataType::Decimal {
                precision: *precision,
                scale: *scale,
            },
            Value::Date(_) => DataType::Date,
            Value::Timestamp(_) => DataType::Timestamp,
            Value::String(_) => DataType::String,
        }
    }

    pub fn is_null(&self) -> bool {
        match self {
            Value::Bool(value) => value.is_none(),
            Value::I64(value) => value.is_none(),
            Value::F64(value) => value.is_none(),
            Value::Decimal { value, .. } => value.is_none(),
            Value::Date(value) => value.is_none(),
            Value::Timestamp(value) => value.is_none(),
            Value::String(value) => value.is_none(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => {
                if let Some(value) = value {
                    write!(f, "{}", value)
                } else {
                    write!(f, "null")
                }
            }
            Value::I64(value) => {
                if let Some(value) = value {
                    write!(f, "{}", value)
                } else {
                    write!(f, "null")
                }
            }
            Value::F64(value) => {
                if let Some(value) = value {
                    write!(f, "{}", value)
                } else {
                    write!(f, "null")
                }
            }
            Value::Decimal { value, scale, .. } => {
                if let Some(value) = value {
                    write!(f, "{}", decimal_value(*value, *scale))
                } else {
                    write!(f, "null")
                }
            }
            Value::Date(value) => {
                if let Some(value) = value {
                    write!(f, "{}", date_value(*value))
                } else {
                    write!(f, "null")
                }
            }
            Value::Timestamp(value) => {
                if let Some(value) = value {
                    write!(f, "{}", timestamp_value(*value))
                } else {
                    write!(f, "null")
                }
            }
            Value::String(value) => {
                if let Some(value) = value {
                    write!(f, "{:?}", value)
                } else {
                    write!(f, "null")
                }
            }
        }
    }
}

impl Eq for Value {}
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // Note this is Rust semantics, not SQL semantics.
            (Value::Bool(left), Value::Bool(right)) => *left == *right,
            (Value::I64(left), Value::I64(right)) => *left == *right,
            (Value::F64(left), Value::F64(right)) => *left == *right,
            (
                Value::Decimal {
                    value: left,
                    precision: left_precision,
                    scale: left_scale,
                },
                Value::Decimal {
                    value: right,
                    precision: right_precision,
                    scale: right_scale,
                },
            ) => left == right && left_precision == right_precision && left_scale == right_scale,
            (Value::Date(left), Value::Date(right)) => *left == *right,
            (Value::Timestamp(left), Value::Timestamp(right)) => *left == *right,
            (Value::String(left), Value::String(right)) => *left == *right,
            (_, _) => false,
        }
    }
}

impl hash::Hash for Value {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        match self {
            Value::Bool(value) => value.hash(state),
            Value::I64(value) => value.hash(state),
            Value::F64(value) => {
                if let Some(value) = value {
                    value.to_ne_bytes().hash(state)
                }
            }
            Value::Decimal { value, scale, .. } => {
                value.hash(state);
                scale.hash(state);
            }
            Value::Date(value) => value.hash(state),
            Value::Timestamp(value) => value.hash(state),
            Value::String(value) => value.hash(state),
        }
    }
}

fn decimal_value(value: i128, scale: u8) -> String {
    let negative = value < 0;
    let mut digits = value.unsigned_abs().to_string();
    if scale > 0 {
        while digits.len() <= scale as usize {
            digits.insert(0, '0');
        }
        digits.insert(digits.len() - scale as usize, '.');
    }
    if negative {
        digits.insert(0, '-');
    }
    digits
}

fn date_value(date: i32) -> NaiveDate {
    NaiveDate::from_ymd(1970, 1, 1) + Duration::days(date as i64)
}

fn timestamp_value(time: i64) -> DateTime<Utc> {
    DateTime::from_utc(
        NaiveDateTime::from_timestamp(
            time.div_euclid(1_000_000),
            (time.rem_euclid(1_000_000) * 1_000) as u32,
        ),
        Utc,
    )
}
