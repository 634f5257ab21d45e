//! Opaque handles for GL objects.
//!
//! Each handle wraps the host object WebGL handed back, so comparing two
//! handles compares the underlying JS references. A handle whose host object
//! is `null` is the zero value: either it was never created or the host
//! refused to create it.

use std::fmt;

use derive_more::{From, Into};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    WebGlBuffer,
    WebGlFramebuffer,
    WebGlProgram,
    WebGlRenderbuffer,
    WebGlShader,
    WebGlTexture,
    WebGlUniformLocation,
    WebGlVertexArrayObject
};

/// Equivalent to GLenum; normally one of the constants in [`crate::enums`].
pub type Enum = u32;

/// A host `null` viewed as `T`.
pub(crate) fn null<T : JsCast>() -> T {
    JsValue::NULL.unchecked_into()
}

fn fmt_host(f : &mut fmt::Formatter<'_>, kind : &str, value : &JsValue) -> fmt::Result {
    if value.is_null() {
        write!(f, "{}(null)", kind)
    } else {
        write!(f, "{}({:?})", kind, value)
    }
}

/// Location of an attribute variable. `-1` means the host did not find it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, From, Into)]
pub struct Attrib {
    pub value : i32
}

impl Attrib {
    /// The index as WebGL takes it. An unknown location wraps to `u32::MAX`,
    /// which the host rejects with `INVALID_VALUE`.
    pub fn index(self) -> u32 {
        self.value as u32
    }

    pub fn is_valid(self) -> bool {
        self.value >= 0
    }
}

impl fmt::Display for Attrib {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attrib({})", self.value)
    }
}

/// A compiled shader program.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    /// Set by `create_program`. Some drivers report the zero program as
    /// valid, so this is the only reliable way to tell a created program
    /// from the zero value.
    pub init : bool,
    pub value : WebGlProgram
}

impl Default for Program {
    fn default() -> Self {
        Self { init : false, value : null() }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_host(f, "Program", &self.value)
    }
}

macro_rules! handle {
    ($(#[$doc:meta])* $name:ident($host:ty)) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, From, Into)]
        pub struct $name {
            pub value : $host
        }

        impl $name {
            pub fn is_null(&self) -> bool {
                self.value.is_null()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self { value : null() }
            }
        }

        impl From<Option<$host>> for $name {
            fn from(value : Option<$host>) -> Self {
                Self { value : value.unwrap_or_else(null) }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt_host(f, stringify!($name), &self.value)
            }
        }
    };
}

handle!(
    /// A GLSL shader.
    Shader(WebGlShader)
);
handle!(
    /// A GL buffer object.
    Buffer(WebGlBuffer)
);
handle!(
    /// A GL framebuffer.
    Framebuffer(WebGlFramebuffer)
);
handle!(
    /// Holds an image in an internal format.
    Renderbuffer(WebGlRenderbuffer)
);
handle!(
    /// A GL texture.
    Texture(WebGlTexture)
);
handle!(
    /// Location of a uniform variable.
    Uniform(WebGlUniformLocation)
);
handle!(
    /// Vertex attribute state (WebGL2 only).
    VertexArray(WebGlVertexArrayObject)
);

impl Program {
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Wraps a freshly created program; `init` is set even when the host
    /// returned `null`.
    pub(crate) fn created(value : Option<WebGlProgram>) -> Self {
        Self { init : true, value : value.unwrap_or_else(null) }
    }
}

/// Result of `get_active_attrib` / `get_active_uniform`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ActiveInfo {
    pub name : String,
    pub size : i32,
    pub ty : Enum
}

/// Result of `get_shader_precision_format`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct PrecisionFormat {
    pub range_min : i32,
    pub range_max : i32,
    pub precision : i32
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_program_is_not_initialized() {
        let program = Program::default();
        assert!(!program.init);
    }

    #[test]
    fn created_program_is_initialized_even_when_null() {
        let program = Program::created(None);
        assert!(program.init);
    }

    #[test]
    fn attrib_index_wraps_unknown_location() {
        let missing = Attrib::from(-1);
        assert!(!missing.is_valid());
        assert_eq!(missing.index(), u32::MAX);
        assert_eq!(Attrib::from(3).index(), 3);
        assert_eq!(Attrib::from(3).to_string(), "Attrib(3)");
    }
}
