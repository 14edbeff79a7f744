//! Transformations selected by the static type of the value.
//!
//! Each implementing type picks its behaviour in its own `impl`, so the
//! choice is made by the compiler at every call site. Types that only need
//! the identity transform take the default method.

use crate::fold::Number;

pub trait Transform: Sized {
    /// Transform the value. Unless a type says otherwise, this is the identity.
    fn transform(self) -> Self {
        self
    }
}

/// Integers are doubled.
impl Transform for i32 {
    fn transform(self) -> Self {
        self.wrapping_mul(2)
    }
}

/// Strings are greeted.
impl Transform for String {
    fn transform(self) -> Self {
        format!("Hello {self}")
    }
}

impl Transform for i64 {}
impl Transform for u32 {}
impl Transform for u64 {}
impl Transform for f32 {}
impl Transform for f64 {}
impl Transform for bool {}
impl Transform for char {}
impl Transform for Number {}

pub fn transform_value<T: Transform>(value: T) -> T {
    value.transform()
}
