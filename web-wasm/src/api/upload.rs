//! `/upload` へのフォーム送信
//!
//! FormDataをそのままPOSTし、レスポンスをダウンロードリンクに変換する

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, FormData, Request, RequestInit, Response};
use tag_upload_common::{
    filename_from_content_disposition, DownloadLink, Error, Result, UPLOAD_PATH,
};

use crate::download::create_object_url;

/// フォーム内容を送信し、成功時はダウンロードリンクを返す
///
/// # Errors
/// * 2xx以外: `Error::RequestFailed`（ステータスと本文）
/// * 通信失敗・レスポンス不正: `Error::Unexpected`
pub async fn submit_form(form_data: &FormData) -> Result<DownloadLink> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form_data.as_ref());

    let request = Request::new_with_str_and_init(UPLOAD_PATH, &opts).map_err(js_error)?;

    let window = web_sys::window()
        .ok_or_else(|| Error::Unexpected("window is not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        return Err(Error::RequestFailed {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        });
    }

    let content_disposition = resp
        .headers()
        .get("Content-Disposition")
        .map_err(js_error)?;
    let filename = filename_from_content_disposition(content_disposition.as_deref());

    let blob: Blob = JsFuture::from(resp.blob().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;
    let href = create_object_url(&blob)?;

    Ok(DownloadLink { href, filename })
}

/// JsValueの例外をメッセージ付きのエラーに変換
pub(crate) fn js_error(value: JsValue) -> Error {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Unexpected(message)
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_js_error_uses_error_message() {
        let err = js_error(js_sys::Error::new("Failed to fetch").into());
        assert_eq!(err.alert_message(), "An error occurred: Failed to fetch");
    }

    #[wasm_bindgen_test]
    fn wasm_js_error_uses_string_value() {
        let err = js_error(JsValue::from_str("boom"));
        assert!(matches!(err, Error::Unexpected(ref m) if m == "boom"));
    }
}
