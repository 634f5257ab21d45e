//! Opens named assets as seekable byte streams: over HTTP when running in a
//! browser document, from the `assets/` directory otherwise.

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use derive_more::{Display, From};
use wasm_bindgen::JsValue;

/// Relative asset names are resolved under this directory on hosts without
/// a browser location.
pub const ASSET_DIR : &str = "assets";

#[derive(Debug, Display, From)]
pub enum AssetError {
    #[display(fmt = "asset: get {:?}: {} {}", name, status, status_text)]
    #[from(ignore)]
    Status { name : String, status : u16, status_text : String },

    #[display(fmt = "asset: get {:?}: {}", name, message)]
    #[from(ignore)]
    Fetch { name : String, message : String },

    #[display(fmt = "asset: {}", _0)]
    Io(io::Error),

    #[display(fmt = "asset: host has neither a location nor a filesystem")]
    #[from(ignore)]
    Unsupported
}

impl std::error::Error for AssetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AssetError::Io(err) => Some(err),
            _ => None
        }
    }
}

impl From<AssetError> for JsValue {
    fn from(err : AssetError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// An opened asset. Fetched assets are buffered in memory; closing them
/// does nothing.
#[derive(Debug)]
pub enum Asset {
    Memory(Cursor<Vec<u8>>),
    File(File)
}

impl Asset {
    pub fn close(self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Asset {
    fn read(&mut self, buf : &mut [u8]) -> io::Result<usize> {
        match self {
            Asset::Memory(cursor) => cursor.read(buf),
            Asset::File(file) => file.read(buf)
        }
    }
}

impl Seek for Asset {
    fn seek(&mut self, pos : SeekFrom) -> io::Result<u64> {
        match self {
            Asset::Memory(cursor) => cursor.seek(pos),
            Asset::File(file) => file.seek(pos)
        }
    }
}

/// Where `name` lives on disk: absolute paths are kept, anything else is
/// taken relative to [`ASSET_DIR`].
pub fn resolve_path(name : &str) -> PathBuf {
    let path = Path::new(name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        Path::new(ASSET_DIR).join(path)
    }
}

/// Any HTTP status of 400 or above fails the fetch.
pub fn check_status(name : &str, status : u16, status_text : &str) -> Result<(), AssetError> {
    if status >= 400 {
        return Err(AssetError::Status {
            name : name.to_string(),
            status,
            status_text : status_text.to_string()
        });
    }
    Ok(())
}

pub fn open_file(name : &str) -> Result<Asset, AssetError> {
    Ok(Asset::File(File::open(resolve_path(name))?))
}

/// Opens `name` for reading.
pub async fn open_asset(name : &str) -> Result<Asset, AssetError> {
    #[cfg(target_arch = "wasm32")]
    {
        if browser::has_location() {
            browser::open(name).await
        } else if node::is_node() {
            node::open(name)
        } else {
            Err(AssetError::Unsupported)
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        open_file(name)
    }
}

#[cfg(target_arch = "wasm32")]
fn host_error(name : &str, err : wasm_bindgen::JsValue) -> AssetError {
    use wasm_bindgen::JsCast;

    let message = match err.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => err.as_string().unwrap_or_else(|| format!("{:?}", err))
    };
    AssetError::Fetch { name : name.to_string(), message }
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::io::Cursor;

    use js_sys::{Reflect, Uint8Array};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Response;

    use super::{check_status, host_error, Asset, AssetError};
    use crate::log;

    pub(super) fn has_location() -> bool {
        Reflect::get(&js_sys::global(), &JsValue::from_str("location"))
            .map(|location| location.is_truthy())
            .unwrap_or(false)
    }

    pub(super) async fn open(name : &str) -> Result<Asset, AssetError> {
        let window = web_sys::window().ok_or(AssetError::Unsupported)?;

        let response : Response = JsFuture::from(window.fetch_with_str(name))
            .await
            .and_then(|value| value.dyn_into())
            .map_err(|err| host_error(name, err))?;
        check_status(name, response.status(), &response.status_text())?;

        let body = response.array_buffer().map_err(|err| host_error(name, err))?;
        let body = JsFuture::from(body).await.map_err(|err| host_error(name, err))?;
        let bytes = Uint8Array::new(&body).to_vec();
        log!("asset: fetched {:?} ({} bytes)", name, bytes.len());

        Ok(Asset::Memory(Cursor::new(bytes)))
    }
}

/// Node.js without a document: read from `assets/` through the `fs` module.
#[cfg(target_arch = "wasm32")]
mod node {
    use std::io::Cursor;

    use js_sys::{Function, Reflect, Uint8Array};
    use wasm_bindgen::{JsCast, JsValue};

    use super::{host_error, resolve_path, Asset, AssetError};
    use crate::log;

    fn get(target : &JsValue, key : &str) -> JsValue {
        Reflect::get(target, &JsValue::from_str(key)).unwrap_or(JsValue::UNDEFINED)
    }

    pub(super) fn is_node() -> bool {
        let process = get(&js_sys::global(), "process");
        process.is_object() && get(&get(&process, "versions"), "node").is_string()
    }

    fn load(owner : &JsValue, loader : &str) -> Option<JsValue> {
        let loader = get(owner, loader).dyn_into::<Function>().ok()?;
        loader.call1(owner, &JsValue::from_str("fs")).ok().filter(|fs| fs.is_object())
    }

    // `require` is module scoped under CommonJS, so the global lookup is the
    // last resort after `process.getBuiltinModule` and the main module.
    fn fs_module() -> Option<JsValue> {
        let global : JsValue = js_sys::global().into();
        let process = get(&global, "process");
        load(&process, "getBuiltinModule")
            .or_else(|| load(&get(&process, "mainModule"), "require"))
            .or_else(|| load(&global, "require"))
    }

    pub(super) fn open(name : &str) -> Result<Asset, AssetError> {
        let fs = fs_module().ok_or(AssetError::Unsupported)?;
        let read_file = get(&fs, "readFileSync").dyn_into::<Function>().map_err(|_| AssetError::Unsupported)?;

        let path = resolve_path(name);
        let contents = read_file
            .call1(&fs, &JsValue::from_str(&path.to_string_lossy()))
            .map_err(|err| host_error(name, err))?;
        let bytes = Uint8Array::new(&contents).to_vec();
        log!("asset: read {:?} ({} bytes)", path, bytes.len());

        Ok(Asset::Memory(Cursor::new(bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::io::Write;

    #[test]
    fn relative_names_resolve_under_asset_dir() {
        assert_eq!(resolve_path("shaders/quad.vert"), Path::new("assets").join("shaders/quad.vert"));
    }

    #[test]
    fn absolute_names_are_kept() {
        let abs = std::env::temp_dir().join("font.bin");
        assert_eq!(resolve_path(abs.to_str().unwrap()), abs);
    }

    #[test]
    fn error_status_names_the_asset() {
        let err = check_status("missing.bin", 404, "Not Found").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("missing.bin"), "{}", message);
        assert!(message.contains("404"), "{}", message);
    }

    #[test]
    fn success_status_passes() {
        assert!(check_status("ok.bin", 200, "OK").is_ok());
        assert!(check_status("moved.bin", 304, "Not Modified").is_ok());
        assert!(check_status("teapot.bin", 418, "I'm a teapot").is_err());
    }

    #[test]
    fn opens_and_seeks_a_file() {
        let path = std::env::temp_dir().join(format!("webgl_facade_asset_{}.bin", std::process::id()));
        File::create(&path).unwrap().write_all(b"0123456789").unwrap();

        let mut asset = block_on(open_asset(path.to_str().unwrap())).unwrap();
        asset.seek(SeekFrom::Start(4)).unwrap();
        let mut rest = String::new();
        asset.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "456789");
        asset.close().unwrap();

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn relative_names_open_from_asset_dir() {
        let mut asset = block_on(open_asset("hello.txt")).unwrap();
        let mut text = String::new();
        asset.read_to_string(&mut text).unwrap();
        assert_eq!(text, "hello, asset\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = block_on(open_asset("definitely/not/here.bin")).unwrap_err();
        assert!(matches!(err, AssetError::Io(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn memory_assets_read_and_seek() {
        let mut asset = Asset::Memory(Cursor::new(b"abcdef".to_vec()));
        asset.seek(SeekFrom::End(-2)).unwrap();
        let mut tail = Vec::new();
        asset.read_to_end(&mut tail).unwrap();
        assert_eq!(tail, b"ef");
    }
}
