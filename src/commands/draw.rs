use crate::context::Context;
use crate::types::Enum;

impl Context {
    pub fn draw_arrays(&self, mode : Enum, first : i32, count : i32) {
        gl!(&self.gl, draw_arrays(mode, first, count))
    }

    /// `offset` is a byte offset into the bound `ELEMENT_ARRAY_BUFFER`.
    pub fn draw_elements(&self, mode : Enum, count : i32, ty : Enum, offset : i32) {
        gl!(&self.gl, draw_elements_with_i32(mode, count, ty, offset))
    }
}
