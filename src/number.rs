//! `parseNumber`: the `NUMBER` terminal lowers to an integer if its text has
//! no decimal point, else a float.

use crate::ast::Value;

pub fn parse_number(text: &str) -> Value {
    if text.contains('.') {
        text.parse::<f64>()
            .map(Value::Float)
            .unwrap_or_else(|_| Value::Str(text.to_string()))
    } else {
        text.parse::<i64>()
            .map(Value::Int)
            .unwrap_or_else(|_| Value::Str(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_has_no_decimal_point() {
        assert_eq!(parse_number("42"), Value::Int(42));
    }

    #[test]
    fn decimal_point_yields_float() {
        assert_eq!(parse_number("42.0"), Value::Float(42.0));
    }

    #[test]
    fn negative_numbers() {
        assert_eq!(parse_number("-7"), Value::Int(-7));
        assert_eq!(parse_number("-7.5"), Value::Float(-7.5));
    }
}
