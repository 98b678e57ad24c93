//! ダウンロードリンク

use leptos::prelude::*;
use tag_upload_common::DownloadLink;

/// 成功時のみ表示。アンカーは常にDOMに置いておく
#[component]
pub fn DownloadArea(#[prop(into)] link: Signal<Option<DownloadLink>>) -> impl IntoView {
    let href = move || link.get().map(|l| l.href).unwrap_or_default();
    let filename = move || link.get().map(|l| l.filename).unwrap_or_default();

    view! {
        <div
            id="downloadLink"
            class="download-link"
            style:display=move || if link.get().is_some() { "block" } else { "none" }
        >
            <a href=href download=filename>
                "Download Processed File"
            </a>
        </div>
    }
}
