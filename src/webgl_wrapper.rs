use web_sys::{WebGlRenderingContext, WebGl2RenderingContext};

/// The bound rendering context. web-sys models the two WebGL generations as
/// unrelated types with mostly identical method sets, so every call is
/// dispatched through [`gl!`].
#[derive(Clone, Debug)]
pub enum WebGlWrapper {
    WebGl1(WebGlRenderingContext),
    WebGl2(WebGl2RenderingContext)
}

/// Forwards a method call to whichever context generation is bound.
macro_rules! gl {
    ($wrapper:expr, $method:ident ( $( $arg:expr ),* $(,)? )) => {
        match $wrapper {
            $crate::webgl_wrapper::WebGlWrapper::WebGl1(gl) => gl.$method( $( $arg ),* ),
            $crate::webgl_wrapper::WebGlWrapper::WebGl2(gl) => gl.$method( $( $arg ),* ),
        }
    };
}

impl WebGlWrapper {
    pub fn is_webgl2(&self) -> bool {
        matches!(self, WebGlWrapper::WebGl2(_))
    }

    pub fn webgl2(&self) -> Option<&WebGl2RenderingContext> {
        match self {
            WebGlWrapper::WebGl2(gl) => Some(gl),
            WebGlWrapper::WebGl1(_) => None
        }
    }

    pub fn width(&self) -> i32 {
        gl!(self, drawing_buffer_width())
    }

    pub fn height(&self) -> i32 {
        gl!(self, drawing_buffer_height())
    }
}
