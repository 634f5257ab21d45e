//! Conversions between Rust slices and host typed arrays, plus the lenient
//! coercions used to read `getParameter`-style results.

use js_sys::{Float32Array, Int32Array, Object, Reflect, Uint16Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};

use crate::enums::{FLOAT, UNSIGNED_SHORT_4_4_4_4, UNSIGNED_SHORT_5_5_5_1, UNSIGNED_SHORT_5_6_5};
use crate::types::{null, Enum};

/// Copies `data` into a fresh `Uint8Array`. Empty input becomes `null`:
/// some entry points treat a `null` source differently from an empty one.
pub fn js_bytes(data : &[u8]) -> Object {
    if data.is_empty() {
        return null();
    }
    Uint8Array::from(data).unchecked_into()
}

/// Copies `data` into a `Float32Array` of exactly `data.len()` elements.
pub fn js_floats(data : &[f32]) -> Float32Array {
    Float32Array::from(data)
}

/// Copies `data` into an `Int32Array` of exactly `data.len()` elements.
pub fn js_ints(data : &[i32]) -> Int32Array {
    Int32Array::from(data)
}

/// Integer view of a host value; booleans count as 0 or 1. Unsigned GL
/// values above `i32::MAX` (masks default to `0xFFFFFFFF`) keep their bit
/// pattern, so `to_int(v) as u32` gives them back.
pub fn to_int(value : &JsValue) -> i32 {
    match value.as_bool() {
        Some(b) => b as i32,
        None => value.as_f64().map(wrap_int).unwrap_or(0)
    }
}

/// Truncates toward zero, then wraps to 32 bits instead of saturating.
pub fn wrap_int(n : f64) -> i32 {
    n as i64 as i32
}

/// Float view of a host value. `undefined` reads as NaN, like JS `Number()`.
pub fn to_float(value : &JsValue) -> f32 {
    match value.as_bool() {
        Some(b) => if b { 1.0 } else { 0.0 },
        None => value.as_f64().unwrap_or(f64::NAN) as f32
    }
}

pub fn to_bool(value : &JsValue) -> bool {
    match value.as_bool() {
        Some(b) => b,
        None => value.as_f64().map_or(false, |n| n != 0.0 && !n.is_nan())
    }
}

/// The `index`-th element of a `getParameter` result. Array results are
/// indexed; a scalar result answers index 0 and is `undefined` past it.
pub fn parameter_at(value : &JsValue, index : usize) -> JsValue {
    if value.is_object() {
        return Reflect::get(value, &JsValue::from(index as u32)).unwrap_or(JsValue::UNDEFINED);
    }
    if index == 0 {
        value.clone()
    } else {
        JsValue::UNDEFINED
    }
}

/// The typed view `readPixels` needs for a given pixel type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PixelView {
    Bytes,
    Uint16,
    Float32
}

impl PixelView {
    pub fn for_type(ty : Enum) -> Self {
        match ty {
            UNSIGNED_SHORT_5_6_5 | UNSIGNED_SHORT_4_4_4_4 | UNSIGNED_SHORT_5_5_5_1 => PixelView::Uint16,
            FLOAT => PixelView::Float32,
            _ => PixelView::Bytes
        }
    }

    /// Bytes per element of the view.
    pub fn element_size(self) -> u32 {
        match self {
            PixelView::Bytes => 1,
            PixelView::Uint16 => 2,
            PixelView::Float32 => 4
        }
    }

    /// A view of this kind over the backing buffer of `bytes`. Trailing
    /// bytes that do not fill a whole element are left out of the view.
    pub fn over(self, bytes : &Uint8Array) -> Object {
        let len = bytes.length() / self.element_size();
        match self {
            PixelView::Bytes => bytes.clone().unchecked_into(),
            PixelView::Uint16 => Uint16Array::new_with_byte_offset_and_length(&bytes.buffer(), 0, len).unchecked_into(),
            PixelView::Float32 => Float32Array::new_with_byte_offset_and_length(&bytes.buffer(), 0, len).unchecked_into()
        }
    }
}
