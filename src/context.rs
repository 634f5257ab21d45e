use std::ops::Deref;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext, WebGl2RenderingContext};

use crate::log;
use crate::types::VertexArray;
use crate::webgl_wrapper::WebGlWrapper;
use crate::worker::NoopWorker;

pub const GL_ES_3_0 : &str = "GL_ES_3_0";
pub const GL_ES_2_0 : &str = "GL_ES_2_0";

/// Access to the canvas a context draws into, for embedders that need to
/// install listeners or resize it.
pub trait CanvasContext {
    fn canvas(&self) -> &HtmlCanvasElement;
}

/// The GL command facade. One per page; it is never torn down explicitly.
///
/// Commands are forwarded to the host in call order. Host errors raised by
/// GL commands are latched by WebGL and read back with `get_error`.
#[derive(Clone, Debug)]
pub struct Context {
    pub(crate) canvas : HtmlCanvasElement,
    pub(crate) gl : WebGlWrapper
}

impl CanvasContext for Context {
    fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

fn create_canvas() -> Result<(web_sys::Window, HtmlCanvasElement), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document on window")?;
    let canvas = document.create_element("canvas")?.dyn_into::<HtmlCanvasElement>()?;
    Ok((window, canvas))
}

fn get_context<T : JsCast>(canvas : &HtmlCanvasElement, kind : &str) -> Result<Option<T>, JsValue> {
    match canvas.get_context(kind)? {
        Some(object) => Ok(Some(object.dyn_into::<T>()?)),
        None => Ok(None)
    }
}

impl Context {
    /// Creates a canvas the size of the window and binds WebGL2 to it,
    /// falling back to WebGL1. Fails when the host has no WebGL at all;
    /// there is nothing to recover to in that case.
    pub fn new() -> Result<(Context, NoopWorker), JsValue> {
        let (window, canvas) = create_canvas()?;
        let width = window.inner_width()?.as_f64().unwrap_or(0.0) as u32;
        let height = window.inner_height()?.as_f64().unwrap_or(0.0) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        if let Some(gl) = get_context::<WebGl2RenderingContext>(&canvas, "webgl2")? {
            log!("bound webgl2 context ({}x{})", width, height);
            return Ok((Self::from_parts(canvas, WebGlWrapper::WebGl2(gl)), NoopWorker));
        }

        if let Some(gl) = get_context::<WebGlRenderingContext>(&canvas, "webgl")? {
            log!("bound webgl context ({}x{})", width, height);
            return Ok((Self::from_parts(canvas, WebGlWrapper::WebGl1(gl)), NoopWorker));
        }

        Err(JsValue::from_str("unable to get WebGL context"))
    }

    pub fn from_parts(canvas : HtmlCanvasElement, gl : WebGlWrapper) -> Self {
        Self { canvas, gl }
    }

    pub fn webgl(&self) -> &WebGlWrapper {
        &self.gl
    }

    pub fn is_webgl2(&self) -> bool {
        self.gl.is_webgl2()
    }

    /// The WebGL2-only command set, or `None` on a WebGL1 context.
    pub fn context3(&self) -> Option<Context3<'_>> {
        self.gl.webgl2().map(|gl| Context3 { context : self, gl })
    }
}

/// Probes a throwaway 1x1 canvas for WebGL2. Never touches a bound context.
pub fn version() -> &'static str {
    let probe = || -> Result<bool, JsValue> {
        let (_, canvas) = create_canvas()?;
        canvas.set_width(1);
        canvas.set_height(1);
        Ok(canvas.get_context("webgl2")?.is_some())
    };
    match probe() {
        Ok(true) => GL_ES_3_0,
        _ => GL_ES_2_0
    }
}

/// WebGL2 commands layered over [`Context`].
#[derive(Clone, Copy, Debug)]
pub struct Context3<'a> {
    context : &'a Context,
    gl : &'a WebGl2RenderingContext
}

impl<'a> Deref for Context3<'a> {
    type Target = Context;
    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl<'a> Context3<'a> {
    pub fn create_vertex_array(&self) -> VertexArray {
        VertexArray::from(self.gl.create_vertex_array())
    }

    pub fn bind_vertex_array(&self, va : &VertexArray) {
        self.gl.bind_vertex_array(Some(&va.value));
    }

    pub fn delete_vertex_array(&self, va : &VertexArray) {
        self.gl.delete_vertex_array(Some(&va.value));
    }

    pub fn is_vertex_array(&self, va : &VertexArray) -> bool {
        self.gl.is_vertex_array(Some(&va.value))
    }
}
