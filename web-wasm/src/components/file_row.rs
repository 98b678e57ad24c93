//! 入力行コンポーネント（ファイル選択 + タグ選択）

use leptos::prelude::*;
use tag_upload_common::{accept_attribute, Tag, FIELD_FILES, FIELD_TAGS};

/// 1行分の入力
///
/// 値はDOMに持たせ、送信時にFormDataとしてまとめて読む
#[component]
pub fn FileRow() -> impl IntoView {
    view! {
        <div class="fileInput">
            <input type="file" name=FIELD_FILES accept=accept_attribute() required=true />
            <select name=FIELD_TAGS required=true>
                <option value="">"Select Tag"</option>
                {Tag::ALL
                    .into_iter()
                    .map(|tag| view! { <option value=tag.as_str()>{tag.label()}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
