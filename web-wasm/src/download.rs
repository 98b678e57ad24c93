//! Blob ↔ オブジェクトURL

use web_sys::{Blob, Url};
use tag_upload_common::Result;

use crate::api::upload::js_error;

/// Blobに一時URLを発行
pub fn create_object_url(blob: &Blob) -> Result<String> {
    Url::create_object_url_with_blob(blob).map_err(js_error)
}

/// 差し替えられたリンクのURLを解放
pub fn revoke_object_url(href: &str) {
    if let Err(e) = Url::revoke_object_url(href) {
        web_sys::console::warn_2(&"revokeObjectURL failed:".into(), &e);
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn sample_blob() -> Blob {
        let bytes = js_sys::Uint8Array::from(&[0x50u8, 0x4b, 0x03, 0x04][..]);
        let parts = js_sys::Array::of1(&bytes);
        Blob::new_with_u8_array_sequence(&parts).expect("Blob生成失敗")
    }

    #[wasm_bindgen_test]
    fn wasm_create_object_url_returns_blob_url() {
        let href = create_object_url(&sample_blob()).expect("URL生成失敗");
        assert!(href.starts_with("blob:"));
        revoke_object_url(&href);
    }

    #[wasm_bindgen_test]
    fn wasm_object_urls_are_distinct() {
        let a = create_object_url(&sample_blob()).expect("URL生成失敗");
        let b = create_object_url(&sample_blob()).expect("URL生成失敗");
        assert_ne!(a, b);
        revoke_object_url(&a);
        revoke_object_url(&b);
    }
}
