use crate::context::Context;
use crate::marshal::js_floats;
use crate::types::{Attrib, Enum};

impl Context {
    pub fn enable_vertex_attrib_array(&self, a : Attrib) {
        gl!(&self.gl, enable_vertex_attrib_array(a.index()))
    }

    pub fn disable_vertex_attrib_array(&self, a : Attrib) {
        gl!(&self.gl, disable_vertex_attrib_array(a.index()))
    }

    pub fn vertex_attrib1f(&self, dst : Attrib, x : f32) {
        gl!(&self.gl, vertex_attrib1f(dst.index(), x))
    }

    pub fn vertex_attrib2f(&self, dst : Attrib, x : f32, y : f32) {
        gl!(&self.gl, vertex_attrib2f(dst.index(), x, y))
    }

    pub fn vertex_attrib3f(&self, dst : Attrib, x : f32, y : f32, z : f32) {
        gl!(&self.gl, vertex_attrib3f(dst.index(), x, y, z))
    }

    pub fn vertex_attrib4f(&self, dst : Attrib, x : f32, y : f32, z : f32, w : f32) {
        gl!(&self.gl, vertex_attrib4f(dst.index(), x, y, z, w))
    }

    pub fn vertex_attrib1fv(&self, dst : Attrib, src : &[f32]) {
        gl!(&self.gl, vertex_attrib1fv_with_f32_sequence(dst.index(), &js_floats(src)))
    }

    pub fn vertex_attrib2fv(&self, dst : Attrib, src : &[f32]) {
        gl!(&self.gl, vertex_attrib2fv_with_f32_sequence(dst.index(), &js_floats(src)))
    }

    pub fn vertex_attrib3fv(&self, dst : Attrib, src : &[f32]) {
        gl!(&self.gl, vertex_attrib3fv_with_f32_sequence(dst.index(), &js_floats(src)))
    }

    pub fn vertex_attrib4fv(&self, dst : Attrib, src : &[f32]) {
        gl!(&self.gl, vertex_attrib4fv_with_f32_sequence(dst.index(), &js_floats(src)))
    }

    /// `offset` is a byte offset into the bound `ARRAY_BUFFER`.
    pub fn vertex_attrib_pointer(&self, dst : Attrib, size : i32, ty : Enum, normalized : bool, stride : i32, offset : i32) {
        gl!(&self.gl, vertex_attrib_pointer_with_i32(dst.index(), size, ty, normalized, stride, offset))
    }
}
