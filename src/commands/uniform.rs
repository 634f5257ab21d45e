use crate::context::Context;
use crate::marshal::{js_floats, js_ints};
use crate::types::Uniform;

// The scalar forms pass their components as separate arguments; the `v`
// forms copy the slice into a typed array of the same length.
impl Context {
    pub fn uniform1f(&self, dst : &Uniform, v : f32) {
        gl!(&self.gl, uniform1f(Some(&dst.value), v))
    }

    pub fn uniform2f(&self, dst : &Uniform, v0 : f32, v1 : f32) {
        gl!(&self.gl, uniform2f(Some(&dst.value), v0, v1))
    }

    pub fn uniform3f(&self, dst : &Uniform, v0 : f32, v1 : f32, v2 : f32) {
        gl!(&self.gl, uniform3f(Some(&dst.value), v0, v1, v2))
    }

    pub fn uniform4f(&self, dst : &Uniform, v0 : f32, v1 : f32, v2 : f32, v3 : f32) {
        gl!(&self.gl, uniform4f(Some(&dst.value), v0, v1, v2, v3))
    }

    pub fn uniform1i(&self, dst : &Uniform, v : i32) {
        gl!(&self.gl, uniform1i(Some(&dst.value), v))
    }

    pub fn uniform2i(&self, dst : &Uniform, v0 : i32, v1 : i32) {
        gl!(&self.gl, uniform2i(Some(&dst.value), v0, v1))
    }

    pub fn uniform3i(&self, dst : &Uniform, v0 : i32, v1 : i32, v2 : i32) {
        gl!(&self.gl, uniform3i(Some(&dst.value), v0, v1, v2))
    }

    pub fn uniform4i(&self, dst : &Uniform, v0 : i32, v1 : i32, v2 : i32, v3 : i32) {
        gl!(&self.gl, uniform4i(Some(&dst.value), v0, v1, v2, v3))
    }

    pub fn uniform1fv(&self, dst : &Uniform, src : &[f32]) {
        gl!(&self.gl, uniform1fv_with_f32_sequence(Some(&dst.value), &js_floats(src)))
    }

    pub fn uniform2fv(&self, dst : &Uniform, src : &[f32]) {
        gl!(&self.gl, uniform2fv_with_f32_sequence(Some(&dst.value), &js_floats(src)))
    }

    pub fn uniform3fv(&self, dst : &Uniform, src : &[f32]) {
        gl!(&self.gl, uniform3fv_with_f32_sequence(Some(&dst.value), &js_floats(src)))
    }

    pub fn uniform4fv(&self, dst : &Uniform, src : &[f32]) {
        gl!(&self.gl, uniform4fv_with_f32_sequence(Some(&dst.value), &js_floats(src)))
    }

    pub fn uniform1iv(&self, dst : &Uniform, src : &[i32]) {
        gl!(&self.gl, uniform1iv_with_i32_sequence(Some(&dst.value), &js_ints(src)))
    }

    pub fn uniform2iv(&self, dst : &Uniform, src : &[i32]) {
        gl!(&self.gl, uniform2iv_with_i32_sequence(Some(&dst.value), &js_ints(src)))
    }

    pub fn uniform3iv(&self, dst : &Uniform, src : &[i32]) {
        gl!(&self.gl, uniform3iv_with_i32_sequence(Some(&dst.value), &js_ints(src)))
    }

    pub fn uniform4iv(&self, dst : &Uniform, src : &[i32]) {
        gl!(&self.gl, uniform4iv_with_i32_sequence(Some(&dst.value), &js_ints(src)))
    }

    // Matrices are column-major; WebGL requires transpose to be false.

    pub fn uniform_matrix2fv(&self, dst : &Uniform, src : &[f32]) {
        gl!(&self.gl, uniform_matrix2fv_with_f32_sequence(Some(&dst.value), false, &js_floats(src)))
    }

    pub fn uniform_matrix3fv(&self, dst : &Uniform, src : &[f32]) {
        gl!(&self.gl, uniform_matrix3fv_with_f32_sequence(Some(&dst.value), false, &js_floats(src)))
    }

    pub fn uniform_matrix4fv(&self, dst : &Uniform, src : &[f32]) {
        gl!(&self.gl, uniform_matrix4fv_with_f32_sequence(Some(&dst.value), false, &js_floats(src)))
    }
}
