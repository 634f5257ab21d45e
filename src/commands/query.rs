use wasm_bindgen::{JsCast, JsValue};

use crate::context::Context;
use crate::marshal::{parameter_at, to_bool, to_float, to_int};
use crate::types::{ActiveInfo, Attrib, Enum, PrecisionFormat, Program, Shader, Uniform};

fn fill<T>(dst : &mut [T], value : &JsValue, convert : impl Fn(&JsValue) -> T) {
    for (i, slot) in dst.iter_mut().enumerate() {
        *slot = convert(&parameter_at(value, i));
    }
}

impl Context {
    pub fn get_active_attrib(&self, p : &Program, index : u32) -> ActiveInfo {
        gl!(&self.gl, get_active_attrib(&p.value, index))
            .map(|active| ActiveInfo { name : active.name(), size : active.size(), ty : active.type_() })
            .unwrap_or_default()
    }

    pub fn get_active_uniform(&self, p : &Program, index : u32) -> ActiveInfo {
        gl!(&self.gl, get_active_uniform(&p.value, index))
            .map(|active| ActiveInfo { name : active.name(), size : active.size(), ty : active.type_() })
            .unwrap_or_default()
    }

    /// Shaders attached to `p`, in the order the host reports them.
    pub fn get_attached_shaders(&self, p : &Program) -> Vec<Shader> {
        match gl!(&self.gl, get_attached_shaders(&p.value)) {
            Some(shaders) => shaders.iter().map(|s| Shader { value : s.unchecked_into() }).collect(),
            None => Vec::new()
        }
    }

    /// `Attrib(-1)` when `name` is not an active attribute.
    pub fn get_attrib_location(&self, p : &Program, name : &str) -> Attrib {
        Attrib::from(gl!(&self.gl, get_attrib_location(&p.value, name)))
    }

    pub fn get_uniform_location(&self, p : &Program, name : &str) -> Uniform {
        Uniform::from(gl!(&self.gl, get_uniform_location(&p.value, name)))
    }

    fn get_parameter(&self, pname : Enum) -> Result<JsValue, JsValue> {
        gl!(&self.gl, get_parameter(pname))
    }

    /// Fills `dst` from a single `getParameter` call; `dst.len()` decides
    /// how many elements are read.
    pub fn get_booleanv(&self, dst : &mut [bool], pname : Enum) -> Result<(), JsValue> {
        fill(dst, &self.get_parameter(pname)?, to_bool);
        Ok(())
    }

    pub fn get_floatv(&self, dst : &mut [f32], pname : Enum) -> Result<(), JsValue> {
        fill(dst, &self.get_parameter(pname)?, to_float);
        Ok(())
    }

    pub fn get_integerv(&self, dst : &mut [i32], pname : Enum) -> Result<(), JsValue> {
        fill(dst, &self.get_parameter(pname)?, to_int);
        Ok(())
    }

    pub fn get_integer(&self, pname : Enum) -> Result<i32, JsValue> {
        Ok(to_int(&self.get_parameter(pname)?))
    }

    pub fn get_string(&self, pname : Enum) -> Result<String, JsValue> {
        Ok(self.get_parameter(pname)?.as_string().unwrap_or_default())
    }

    pub fn get_error(&self) -> Enum {
        gl!(&self.gl, get_error())
    }

    pub fn get_buffer_parameteri(&self, target : Enum, pname : Enum) -> i32 {
        to_int(&gl!(&self.gl, get_buffer_parameter(target, pname)))
    }

    pub fn get_framebuffer_attachment_parameteri(&self, target : Enum, attachment : Enum, pname : Enum) -> Result<i32, JsValue> {
        let value = gl!(&self.gl, get_framebuffer_attachment_parameter(target, attachment, pname))?;
        Ok(to_int(&value))
    }

    pub fn get_renderbuffer_parameteri(&self, target : Enum, pname : Enum) -> i32 {
        to_int(&gl!(&self.gl, get_renderbuffer_parameter(target, pname)))
    }

    pub fn get_programi(&self, p : &Program, pname : Enum) -> i32 {
        to_int(&gl!(&self.gl, get_program_parameter(&p.value, pname)))
    }

    pub fn get_program_info_log(&self, p : &Program) -> String {
        gl!(&self.gl, get_program_info_log(&p.value)).unwrap_or_default()
    }

    pub fn get_shaderi(&self, s : &Shader, pname : Enum) -> i32 {
        to_int(&gl!(&self.gl, get_shader_parameter(&s.value, pname)))
    }

    pub fn get_shader_info_log(&self, s : &Shader) -> String {
        gl!(&self.gl, get_shader_info_log(&s.value)).unwrap_or_default()
    }

    pub fn get_shader_source(&self, s : &Shader) -> String {
        gl!(&self.gl, get_shader_source(&s.value)).unwrap_or_default()
    }

    pub fn get_shader_precision_format(&self, shader_type : Enum, precision_type : Enum) -> PrecisionFormat {
        gl!(&self.gl, get_shader_precision_format(shader_type, precision_type))
            .map(|format| PrecisionFormat {
                range_min : format.range_min(),
                range_max : format.range_max(),
                precision : format.precision()
            })
            .unwrap_or_default()
    }

    pub fn get_tex_parameterfv(&self, dst : &mut [f32], target : Enum, pname : Enum) {
        fill(dst, &gl!(&self.gl, get_tex_parameter(target, pname)), to_float);
    }

    pub fn get_tex_parameteriv(&self, dst : &mut [i32], target : Enum, pname : Enum) {
        fill(dst, &gl!(&self.gl, get_tex_parameter(target, pname)), to_int);
    }

    pub fn get_uniformfv(&self, dst : &mut [f32], src : &Uniform, p : &Program) {
        fill(dst, &gl!(&self.gl, get_uniform(&p.value, &src.value)), to_float);
    }

    pub fn get_uniformiv(&self, dst : &mut [i32], src : &Uniform, p : &Program) {
        fill(dst, &gl!(&self.gl, get_uniform(&p.value, &src.value)), to_int);
    }

    fn get_vertex_attrib(&self, src : Attrib, pname : Enum) -> Result<JsValue, JsValue> {
        gl!(&self.gl, get_vertex_attrib(src.index(), pname))
    }

    pub fn get_vertex_attribf(&self, src : Attrib, pname : Enum) -> Result<f32, JsValue> {
        Ok(to_float(&self.get_vertex_attrib(src, pname)?))
    }

    pub fn get_vertex_attribfv(&self, dst : &mut [f32], src : Attrib, pname : Enum) -> Result<(), JsValue> {
        fill(dst, &self.get_vertex_attrib(src, pname)?, to_float);
        Ok(())
    }

    pub fn get_vertex_attribi(&self, src : Attrib, pname : Enum) -> Result<i32, JsValue> {
        Ok(to_int(&self.get_vertex_attrib(src, pname)?))
    }

    pub fn get_vertex_attribiv(&self, dst : &mut [i32], src : Attrib, pname : Enum) -> Result<(), JsValue> {
        fill(dst, &self.get_vertex_attrib(src, pname)?, to_int);
        Ok(())
    }

    pub fn is_enabled(&self, cap : Enum) -> bool {
        gl!(&self.gl, is_enabled(cap))
    }
}
