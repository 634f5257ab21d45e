use js_sys::Uint8Array;
use wasm_bindgen::JsValue;

use crate::context::Context;
use crate::marshal::{js_bytes, PixelView};
use crate::types::Enum;

impl Context {
    /// Uploads `src` into the buffer bound to `target`. An empty `src`
    /// reaches the host as `null`.
    pub fn buffer_data(&self, target : Enum, src : &[u8], usage : Enum) {
        gl!(&self.gl, buffer_data_with_array_buffer_view(target, &js_bytes(src), usage))
    }

    /// Allocates `size` uninitialized bytes for the buffer bound to `target`.
    pub fn buffer_init(&self, target : Enum, size : i32, usage : Enum) {
        gl!(&self.gl, buffer_data_with_i32(target, size, usage))
    }

    pub fn buffer_sub_data(&self, target : Enum, offset : i32, data : &[u8]) {
        gl!(&self.gl, buffer_sub_data_with_i32_and_array_buffer_view(target, offset, &js_bytes(data)))
    }

    pub fn compressed_tex_image_2d(&self, target : Enum, level : i32, internal_format : Enum, width : i32, height : i32, border : i32, data : &[u8]) {
        gl!(&self.gl, compressed_tex_image_2d_with_array_buffer_view(
            target, level, internal_format, width, height, border, &js_bytes(data)
        ))
    }

    pub fn compressed_tex_sub_image_2d(&self, target : Enum, level : i32, xoffset : i32, yoffset : i32, width : i32, height : i32, format : Enum, data : &[u8]) {
        gl!(&self.gl, compressed_tex_sub_image_2d_with_array_buffer_view(
            target, level, xoffset, yoffset, width, height, format, &js_bytes(data)
        ))
    }

    pub fn copy_tex_image_2d(&self, target : Enum, level : i32, internal_format : Enum, x : i32, y : i32, width : i32, height : i32, border : i32) {
        gl!(&self.gl, copy_tex_image_2d(target, level, internal_format, x, y, width, height, border))
    }

    pub fn copy_tex_sub_image_2d(&self, target : Enum, level : i32, xoffset : i32, yoffset : i32, x : i32, y : i32, width : i32, height : i32) {
        gl!(&self.gl, copy_tex_sub_image_2d(target, level, xoffset, yoffset, x, y, width, height))
    }

    /// `border` is always 0 in WebGL, so it is not a parameter here.
    pub fn tex_image_2d(&self, target : Enum, level : i32, internal_format : i32, width : i32, height : i32, format : Enum, ty : Enum, data : &[u8]) -> Result<(), JsValue> {
        gl!(&self.gl, tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_array_buffer_view(
            target, level, internal_format, width, height, 0, format, ty, Some(&js_bytes(data))
        ))
    }

    pub fn tex_sub_image_2d(&self, target : Enum, level : i32, x : i32, y : i32, width : i32, height : i32, format : Enum, ty : Enum, data : &[u8]) -> Result<(), JsValue> {
        gl!(&self.gl, tex_sub_image_2d_with_i32_and_i32_and_u32_and_type_and_opt_array_buffer_view(
            target, level, x, y, width, height, format, ty, Some(&js_bytes(data))
        ))
    }

    pub fn tex_parameterf(&self, target : Enum, pname : Enum, param : f32) {
        gl!(&self.gl, tex_parameterf(target, pname, param))
    }

    /// WebGL only has the scalar form; the first element is forwarded.
    pub fn tex_parameterfv(&self, target : Enum, pname : Enum, params : &[f32]) {
        if let Some(&param) = params.first() {
            self.tex_parameterf(target, pname, param);
        }
    }

    pub fn tex_parameteri(&self, target : Enum, pname : Enum, param : i32) {
        gl!(&self.gl, tex_parameteri(target, pname, param))
    }

    /// WebGL only has the scalar form; the first element is forwarded.
    pub fn tex_parameteriv(&self, target : Enum, pname : Enum, params : &[i32]) {
        if let Some(&param) = params.first() {
            self.tex_parameteri(target, pname, param);
        }
    }

    /// Reads a block of pixels into `dst`. Packed 16-bit and float pixel
    /// types are read through a matching typed view over the same bytes.
    pub fn read_pixels(&self, dst : &mut [u8], x : i32, y : i32, width : i32, height : i32, format : Enum, ty : Enum) -> Result<(), JsValue> {
        let bytes = Uint8Array::new_with_length(dst.len() as u32);
        let view = PixelView::for_type(ty).over(&bytes);
        gl!(&self.gl, read_pixels_with_opt_array_buffer_view(x, y, width, height, format, ty, Some(&view)))?;
        bytes.copy_to(dst);
        Ok(())
    }
}
