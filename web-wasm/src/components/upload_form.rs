//! アップロードフォーム
//!
//! 行追加ボタンと送信ボタンを持つ。送信処理自体は親から受け取る

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use tag_upload_common::RowList;

use crate::components::file_row::FileRow;

#[component]
pub fn UploadForm<FA, FS>(
    rows: ReadSignal<RowList>,
    form_ref: NodeRef<html::Form>,
    on_add_row: FA,
    on_submit: FS,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FS: Fn(SubmitEvent) + 'static + Clone,
{
    view! {
        <form id="uploadForm" node_ref=form_ref on:submit=on_submit>
            <div id="fileInputs">
                <For
                    each=move || rows.get().ids()
                    key=|id| *id
                    children=|_| view! { <FileRow /> }
                />
            </div>

            <div class="form-actions">
                <button
                    type="button"
                    id="addMore"
                    class="btn btn-secondary"
                    on:click={
                        let on_add_row = on_add_row.clone();
                        move |_| on_add_row(())
                    }
                >
                    "Add More Files"
                </button>
                <button type="submit" class="btn btn-primary">
                    "Upload and Process"
                </button>
            </div>
        </form>
    }
}
