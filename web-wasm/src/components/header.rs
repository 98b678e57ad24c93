//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"File Processor"</h1>
            <p class="text-muted">"Excel / PDFファイルにタグを付けてアップロード"</p>
        </header>
    }
}
