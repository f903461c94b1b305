use crate::{arithmetic_symbol, Scalar};
use std::fmt::{Display, Formatter};

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Literal(value) => write!(f, "{}", value),
            Scalar::Column(column) => write!(f, "{}", column),
            Scalar::Call(call) => {
                let distinct = if call.is_distinct { "distinct " } else { "" };
                write!(
                    f,
                    "{}({}{})",
                    call.name,
                    distinct,
                    join_scalars(&call.arguments, ", ")
                )
            }
            Scalar::Map(map) => write!(f, "{}", join_scalars(&map.arguments, ",")),
            Scalar::Cast(cast) => write!(f, "cast({} as {})", cast.argument, cast.returns),
        }
    }
}

impl Scalar {
    /// Like `Display`, but the four basic arithmetic operators render infix
    /// when they have exactly two children, and the distinct token is never
    /// printed.
    pub fn debug_string(&self) -> String {
        match self {
            Scalar::Call(call) => match arithmetic_symbol(&call.name) {
                Some(symbol) if call.arguments.len() == 2 => format!(
                    "{} {} {}",
                    call.arguments[0].debug_string(),
                    symbol,
                    call.arguments[1].debug_string()
                ),
                _ => format!("{}({})", call.name, join_debug(&call.arguments, ", ")),
            },
            Scalar::Map(map) => join_debug(&map.arguments, ","),
            Scalar::Cast(cast) => {
                format!("cast({} as {})", cast.argument.debug_string(), cast.returns)
            }
            other => other.to_string(),
        }
    }
}

fn join_scalars(xs: &[Scalar], separator: &str) -> String {
    let mut strings = vec![];
    for x in xs {
        strings.push(format!("{}", x));
    }
    strings.join(separator)
}

fn join_debug(xs: &[Scalar], separator: &str) -> String {
    let mut strings = vec![];
    for x in xs {
        strings.push(x.debug_string());
    }
    strings.join(separator)
}
