//! core::route
//!
//! The contract a value must satisfy to be stored in a route stack.
//!
//! Routes are opaque to the stack. The stack clones them, compares them
//! with `==`, and rejects values that are "absent". Nothing else about a
//! route is inspected.
//!
//! # Absent values
//!
//! - `None` for `Option<T>`
//! - the empty string for `String`, `&str` and JSON strings
//! - JSON `null`
//!
//! Every other value is a present route, including `0`, `false`, empty
//! arrays and empty objects.
//!
//! # Example
//!
//! ```
//! use routestack::core::route::Route;
//!
//! assert!("".is_absent());
//! assert!(!"home".is_absent());
//! assert!(None::<u32>.is_absent());
//! assert!(!0u32.is_absent());
//! assert!(serde_json::Value::Null.is_absent());
//! ```

/// A value that can be pushed onto a route stack.
pub trait Route: Clone + PartialEq {
    /// Whether this value stands for "no route" and must be rejected.
    fn is_absent(&self) -> bool {
        false
    }
}

impl Route for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Route for &str {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Route> Route for Option<T> {
    fn is_absent(&self) -> bool {
        match self {
            Some(route) => route.is_absent(),
            None => true,
        }
    }
}

impl<T: Clone + PartialEq> Route for Vec<T> {}

impl<T: ?Sized + PartialEq> Route for std::sync::Arc<T> {}

impl Route for serde_json::Value {
    fn is_absent(&self) -> bool {
        match self {
            serde_json::Value::Null => true,
            serde_json::Value::String(s) => s.is_empty(),
            _ => false,
        }
    }
}

macro_rules! present_route {
    ($($ty:ty),* $(,)?) => {
        $(impl Route for $ty {})*
    };
}

present_route!(bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_strings_are_absent() {
        assert!("".is_absent());
        assert!(String::new().is_absent());
        assert!(json!("").is_absent());
    }

    #[test]
    fn none_and_null_are_absent() {
        assert!(None::<&str>.is_absent());
        assert!(Some("").is_absent());
        assert!(json!(null).is_absent());
    }

    #[test]
    fn falsy_values_are_present() {
        assert!(!0i32.is_absent());
        assert!(!false.is_absent());
        assert!(!Vec::<u8>::new().is_absent());
        assert!(!json!([]).is_absent());
        assert!(!json!({}).is_absent());
        assert!(!json!(0).is_absent());
        assert!(!json!(false).is_absent());
    }

    #[test]
    fn structured_values_are_present() {
        assert!(!json!({"foo": "bar"}).is_absent());
        assert!(!json!(["foo"]).is_absent());
        assert!(!Some("foo").is_absent());
        assert!(!vec!["foo"].is_absent());
    }
}
