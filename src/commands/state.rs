use crate::context::Context;
use crate::types::Enum;

impl Context {
    pub fn active_texture(&self, texture : Enum) {
        gl!(&self.gl, active_texture(texture))
    }

    pub fn blend_color(&self, red : f32, green : f32, blue : f32, alpha : f32) {
        gl!(&self.gl, blend_color(red, green, blue, alpha))
    }

    pub fn blend_equation(&self, mode : Enum) {
        gl!(&self.gl, blend_equation(mode))
    }

    pub fn blend_equation_separate(&self, mode_rgb : Enum, mode_alpha : Enum) {
        gl!(&self.gl, blend_equation_separate(mode_rgb, mode_alpha))
    }

    pub fn blend_func(&self, sfactor : Enum, dfactor : Enum) {
        gl!(&self.gl, blend_func(sfactor, dfactor))
    }

    pub fn blend_func_separate(&self, sfactor_rgb : Enum, dfactor_rgb : Enum, sfactor_alpha : Enum, dfactor_alpha : Enum) {
        gl!(&self.gl, blend_func_separate(sfactor_rgb, dfactor_rgb, sfactor_alpha, dfactor_alpha))
    }

    pub fn clear(&self, mask : Enum) {
        gl!(&self.gl, clear(mask))
    }

    pub fn clear_color(&self, red : f32, green : f32, blue : f32, alpha : f32) {
        gl!(&self.gl, clear_color(red, green, blue, alpha))
    }

    pub fn clear_depthf(&self, depth : f32) {
        gl!(&self.gl, clear_depth(depth))
    }

    pub fn clear_stencil(&self, s : i32) {
        gl!(&self.gl, clear_stencil(s))
    }

    pub fn color_mask(&self, red : bool, green : bool, blue : bool, alpha : bool) {
        gl!(&self.gl, color_mask(red, green, blue, alpha))
    }

    pub fn cull_face(&self, mode : Enum) {
        gl!(&self.gl, cull_face(mode))
    }

    pub fn depth_func(&self, func : Enum) {
        gl!(&self.gl, depth_func(func))
    }

    pub fn depth_mask(&self, flag : bool) {
        gl!(&self.gl, depth_mask(flag))
    }

    pub fn depth_rangef(&self, near : f32, far : f32) {
        gl!(&self.gl, depth_range(near, far))
    }

    pub fn disable(&self, cap : Enum) {
        gl!(&self.gl, disable(cap))
    }

    pub fn enable(&self, cap : Enum) {
        gl!(&self.gl, enable(cap))
    }

    pub fn finish(&self) {
        gl!(&self.gl, finish())
    }

    pub fn flush(&self) {
        gl!(&self.gl, flush())
    }

    pub fn front_face(&self, mode : Enum) {
        gl!(&self.gl, front_face(mode))
    }

    pub fn hint(&self, target : Enum, mode : Enum) {
        gl!(&self.gl, hint(target, mode))
    }

    pub fn line_width(&self, width : f32) {
        gl!(&self.gl, line_width(width))
    }

    pub fn pixel_storei(&self, pname : Enum, param : i32) {
        gl!(&self.gl, pixel_storei(pname, param))
    }

    pub fn polygon_offset(&self, factor : f32, units : f32) {
        gl!(&self.gl, polygon_offset(factor, units))
    }

    /// WebGL has no shader compiler to release.
    pub fn release_shader_compiler(&self) {}

    pub fn sample_coverage(&self, value : f32, invert : bool) {
        gl!(&self.gl, sample_coverage(value, invert))
    }

    pub fn scissor(&self, x : i32, y : i32, width : i32, height : i32) {
        gl!(&self.gl, scissor(x, y, width, height))
    }

    pub fn stencil_func(&self, func : Enum, reference : i32, mask : u32) {
        gl!(&self.gl, stencil_func(func, reference, mask))
    }

    pub fn stencil_func_separate(&self, face : Enum, func : Enum, reference : i32, mask : u32) {
        gl!(&self.gl, stencil_func_separate(face, func, reference, mask))
    }

    pub fn stencil_mask(&self, mask : u32) {
        gl!(&self.gl, stencil_mask(mask))
    }

    pub fn stencil_mask_separate(&self, face : Enum, mask : u32) {
        gl!(&self.gl, stencil_mask_separate(face, mask))
    }

    pub fn stencil_op(&self, fail : Enum, zfail : Enum, zpass : Enum) {
        gl!(&self.gl, stencil_op(fail, zfail, zpass))
    }

    pub fn stencil_op_separate(&self, face : Enum, sfail : Enum, dpfail : Enum, dppass : Enum) {
        gl!(&self.gl, stencil_op_separate(face, sfail, dpfail, dppass))
    }

    pub fn viewport(&self, x : i32, y : i32, width : i32, height : i32) {
        gl!(&self.gl, viewport(x, y, width, height))
    }
}
