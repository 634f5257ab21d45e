//! Asset loading on a document-less wasm host. Run with `wasm-pack test --node`.

#![cfg(target_arch = "wasm32")]

use std::io::Read;

use wasm_bindgen_test::*;

use webgl_facade::{open_asset, AssetError};

#[wasm_bindgen_test]
async fn relative_names_read_from_asset_dir() {
    let mut asset = open_asset("hello.txt").await.unwrap();
    let mut text = String::new();
    asset.read_to_string(&mut text).unwrap();
    assert_eq!(text, "hello, asset\n");
}

#[wasm_bindgen_test]
async fn missing_file_names_the_asset() {
    let err = open_asset("missing.bin").await.unwrap_err();
    assert!(matches!(err, AssetError::Fetch { .. }), "{}", err);
    assert!(err.to_string().contains("missing.bin"), "{}", err);
}
