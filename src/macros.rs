/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Keys must be string literals. Negative numbers and other multi-token
/// expressions need parentheses: `value!([(-1), (2 + 3)])`.
///
/// ```rust
/// use numeric_coerce::value;
///
/// let v = value!({ "a": "1", "b": ["1", { "c": null }], "d": (-1) });
/// assert!(v.is_plain_object());
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($elem)),*])
    };

    ({}) => {
        $crate::Value::Object($crate::ValueMap::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::ValueMap::new();
        $(
            object.insert($key.to_string(), $crate::value!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Anything else goes through serde
    ($s:expr) => {
        $crate::to_value(&$s).unwrap_or($crate::Value::Null)
    };
}

#[cfg(test)]
mod tests {
    use crate::{Number, Value, ValueMap};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!((-7)), Value::Number(Number::Integer(-7)));
        assert_eq!(value!("1"), Value::String("1".to_string()));
    }

    #[test]
    fn test_value_macro_nested() {
        let v = value!({
            "a": ["1", { "b": "2" }],
            "c": {}
        });

        let mut inner = ValueMap::new();
        inner.insert("b".to_string(), Value::from("2"));
        let mut expected = ValueMap::new();
        expected.insert(
            "a".to_string(),
            Value::Array(vec![Value::from("1"), Value::Object(inner)]),
        );
        expected.insert("c".to_string(), Value::Object(ValueMap::new()));

        assert_eq!(v, Value::Object(expected));
    }
}
