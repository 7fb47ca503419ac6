use alloc::{borrow::ToOwned, string::String};

use crate::{
    document::Document,
    value::{Number, Value},
};

/// Default element translator used by [`crate::Assigning::set_list`].
///
/// Numbers pass through unchanged, strings are copied into the document, and
/// `None` becomes `null`.
pub trait ToValue {
    /// Converts one list element into a document value.
    fn to_value(&self) -> Value;
}

macro_rules! impl_to_value_via_from {
    ($($t:ty),*) => {
        $(
            impl ToValue for $t {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_to_value_via_from!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, char, Number
);

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for Document {
    fn to_value(&self) -> Value {
        self.root().clone()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}
