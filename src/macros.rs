//! Macros and helpers

/// Builds a list of [crate::Value]s, from anything that converts into a [crate::Value]
/// ```
/// use ionex_formatter::{values, Value};
/// assert_eq!(
///     values![1.0, "I", "GPS"],
///     vec![Value::Float(1.0), Value::Text("I".to_string()), Value::Text("GPS".to_string())],
/// );
/// ```
#[macro_export]
macro_rules! values {
    ($($value: expr),* $(,)?) => {
        vec![$($crate::Value::from($value)),*]
    };
}
