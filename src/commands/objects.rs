use crate::context::Context;
use crate::types::{Attrib, Buffer, Enum, Framebuffer, Program, Renderbuffer, Shader, Texture};

impl Context {
    pub fn create_buffer(&self) -> Buffer {
        Buffer::from(gl!(&self.gl, create_buffer()))
    }

    pub fn create_framebuffer(&self) -> Framebuffer {
        Framebuffer::from(gl!(&self.gl, create_framebuffer()))
    }

    pub fn create_program(&self) -> Program {
        Program::created(gl!(&self.gl, create_program()))
    }

    pub fn create_renderbuffer(&self) -> Renderbuffer {
        Renderbuffer::from(gl!(&self.gl, create_renderbuffer()))
    }

    pub fn create_shader(&self, ty : Enum) -> Shader {
        Shader::from(gl!(&self.gl, create_shader(ty)))
    }

    pub fn create_texture(&self) -> Texture {
        Texture::from(gl!(&self.gl, create_texture()))
    }

    pub fn delete_buffer(&self, b : &Buffer) {
        gl!(&self.gl, delete_buffer(Some(&b.value)))
    }

    pub fn delete_framebuffer(&self, fb : &Framebuffer) {
        gl!(&self.gl, delete_framebuffer(Some(&fb.value)))
    }

    pub fn delete_program(&self, p : &Program) {
        gl!(&self.gl, delete_program(Some(&p.value)))
    }

    pub fn delete_renderbuffer(&self, rb : &Renderbuffer) {
        gl!(&self.gl, delete_renderbuffer(Some(&rb.value)))
    }

    pub fn delete_shader(&self, s : &Shader) {
        gl!(&self.gl, delete_shader(Some(&s.value)))
    }

    pub fn delete_texture(&self, t : &Texture) {
        gl!(&self.gl, delete_texture(Some(&t.value)))
    }

    pub fn is_buffer(&self, b : &Buffer) -> bool {
        gl!(&self.gl, is_buffer(Some(&b.value)))
    }

    pub fn is_framebuffer(&self, fb : &Framebuffer) -> bool {
        gl!(&self.gl, is_framebuffer(Some(&fb.value)))
    }

    pub fn is_program(&self, p : &Program) -> bool {
        gl!(&self.gl, is_program(Some(&p.value)))
    }

    pub fn is_renderbuffer(&self, rb : &Renderbuffer) -> bool {
        gl!(&self.gl, is_renderbuffer(Some(&rb.value)))
    }

    pub fn is_shader(&self, s : &Shader) -> bool {
        gl!(&self.gl, is_shader(Some(&s.value)))
    }

    pub fn is_texture(&self, t : &Texture) -> bool {
        gl!(&self.gl, is_texture(Some(&t.value)))
    }

    pub fn attach_shader(&self, p : &Program, s : &Shader) {
        gl!(&self.gl, attach_shader(&p.value, &s.value))
    }

    pub fn detach_shader(&self, p : &Program, s : &Shader) {
        gl!(&self.gl, detach_shader(&p.value, &s.value))
    }

    pub fn bind_attrib_location(&self, p : &Program, a : Attrib, name : &str) {
        gl!(&self.gl, bind_attrib_location(&p.value, a.index(), name))
    }

    pub fn bind_buffer(&self, target : Enum, b : &Buffer) {
        gl!(&self.gl, bind_buffer(target, Some(&b.value)))
    }

    pub fn bind_framebuffer(&self, target : Enum, fb : &Framebuffer) {
        gl!(&self.gl, bind_framebuffer(target, Some(&fb.value)))
    }

    pub fn bind_renderbuffer(&self, target : Enum, rb : &Renderbuffer) {
        gl!(&self.gl, bind_renderbuffer(target, Some(&rb.value)))
    }

    pub fn bind_texture(&self, target : Enum, t : &Texture) {
        gl!(&self.gl, bind_texture(target, Some(&t.value)))
    }

    pub fn shader_source(&self, s : &Shader, src : &str) {
        gl!(&self.gl, shader_source(&s.value, src))
    }

    pub fn compile_shader(&self, s : &Shader) {
        gl!(&self.gl, compile_shader(&s.value))
    }

    pub fn link_program(&self, p : &Program) {
        gl!(&self.gl, link_program(&p.value))
    }

    pub fn use_program(&self, p : &Program) {
        gl!(&self.gl, use_program(Some(&p.value)))
    }

    pub fn validate_program(&self, p : &Program) {
        gl!(&self.gl, validate_program(&p.value))
    }

    pub fn check_framebuffer_status(&self, target : Enum) -> Enum {
        gl!(&self.gl, check_framebuffer_status(target))
    }

    pub fn framebuffer_renderbuffer(&self, target : Enum, attachment : Enum, rb_target : Enum, rb : &Renderbuffer) {
        gl!(&self.gl, framebuffer_renderbuffer(target, attachment, rb_target, Some(&rb.value)))
    }

    pub fn framebuffer_texture_2d(&self, target : Enum, attachment : Enum, tex_target : Enum, t : &Texture, level : i32) {
        gl!(&self.gl, framebuffer_texture_2d(target, attachment, tex_target, Some(&t.value), level))
    }

    pub fn renderbuffer_storage(&self, target : Enum, internal_format : Enum, width : i32, height : i32) {
        gl!(&self.gl, renderbuffer_storage(target, internal_format, width, height))
    }

    pub fn generate_mipmap(&self, target : Enum) {
        gl!(&self.gl, generate_mipmap(target))
    }
}
