#![deny(unused_must_use)]

//! A typed facade over a WebGL1 or WebGL2 rendering context, following the
//! OpenGL ES 2.0 command set, plus a loader for binary assets.

#[macro_use]
mod webgl_wrapper;
pub mod console_log;

pub mod asset;
mod commands;
pub mod context;
pub mod enums;
pub mod marshal;
pub mod types;
pub mod worker;

pub use asset::{open_asset, Asset, AssetError};
pub use context::{version, CanvasContext, Context, Context3, GL_ES_2_0, GL_ES_3_0};
pub use enums::enum_name;
pub use types::*;
pub use webgl_wrapper::WebGlWrapper;
pub use worker::{NoopWorker, WorkSignal, Worker};

use wasm_bindgen::prelude::*;

/// Installs the console panic hook and reports the GL version available.
#[wasm_bindgen]
pub fn init() {
    console_log::set_panic_hook();
    log!("gl version: {}", version());
}

#[wasm_bindgen(js_name = glVersion)]
pub fn gl_version() -> String {
    version().to_string()
}
