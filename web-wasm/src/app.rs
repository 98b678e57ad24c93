//! メインアプリケーションコンポーネント

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tag_upload_common::{Error, RowList, SubmitView};
use web_sys::FormData;

use crate::api::upload::{js_error, submit_form};
use crate::components::{
    header::Header,
    upload_form::UploadForm,
    loading_indicator::LoadingIndicator,
    download_link::DownloadArea,
};
use crate::download::revoke_object_url;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let (rows, set_rows) = signal(RowList::new());
    let (submit_view, set_submit_view) = signal(SubmitView::default());
    let form_ref = NodeRef::<html::Form>::new();

    // 行追加ハンドラ
    let on_add_row = move |_| {
        set_rows.update(|r| {
            r.append();
        });
    };

    // 送信ハンドラ
    // 送信中の再送信は止めない（表示は後勝ち）
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get() else {
            return;
        };
        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                report_error(&js_error(e));
                return;
            }
        };

        if let Some(previous) = set_submit_view.try_update(|v| v.begin()).flatten() {
            revoke_object_url(&previous.href);
        }

        spawn_local(async move {
            match submit_form(&form_data).await {
                Ok(link) => {
                    if let Some(replaced) = set_submit_view.try_update(|v| v.succeed(link)).flatten() {
                        revoke_object_url(&replaced.href);
                    }
                }
                Err(e) => report_error(&e),
            }
            set_submit_view.update(|v| v.finish());
        });
    };

    view! {
        <div class="container">
            <Header />

            <UploadForm
                rows=rows
                form_ref=form_ref
                on_add_row=on_add_row
                on_submit=on_submit
            />

            <StatusArea submit_view=submit_view />
        </div>
    }
}

/// ローディング表示とダウンロードリンク
#[component]
pub fn StatusArea(#[prop(into)] submit_view: Signal<SubmitView>) -> impl IntoView {
    let loading = Signal::derive(move || submit_view.get().loading);
    let download = Signal::derive(move || submit_view.get().download);

    view! {
        <LoadingIndicator visible=loading />
        <DownloadArea link=download />
    }
}

/// コンソールに記録し、アラートで通知
fn report_error(error: &Error) {
    web_sys::console::error_2(&"Error:".into(), &error.to_string().into());
    gloo::dialogs::alert(&error.alert_message());
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use tag_upload_common::DownloadLink;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement};

    wasm_bindgen_test_configure!(run_in_browser);

    /// テストごとの描画先
    fn container() -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let div: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div
    }

    /// 描画の反映を待つ
    async fn next_tick() {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 10)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    fn find(root: &HtmlElement, selector: &str) -> Element {
        root.query_selector(selector)
            .unwrap()
            .unwrap_or_else(|| panic!("{} が見つからない", selector))
    }

    fn count(root: &Element, selector: &str) -> u32 {
        root.query_selector_all(selector).unwrap().length()
    }

    fn display_of(root: &HtmlElement, selector: &str) -> String {
        let element: HtmlElement = find(root, selector).dyn_into().unwrap();
        element.style().get_property_value("display").unwrap()
    }

    #[wasm_bindgen_test]
    async fn wasm_add_more_appends_rows() {
        let root = container();
        let _handle = leptos::mount::mount_to(root.clone(), App);

        let rows = find(&root, "#fileInputs");
        assert_eq!(count(&rows, ".fileInput"), 1);

        let add_more: HtmlElement = find(&root, "#addMore").dyn_into().unwrap();
        for _ in 0..3 {
            add_more.click();
        }
        next_tick().await;

        assert_eq!(count(&rows, ".fileInput"), 4);
    }

    #[wasm_bindgen_test]
    async fn wasm_each_row_has_required_inputs() {
        let root = container();
        let _handle = leptos::mount::mount_to(root.clone(), App);

        let add_more: HtmlElement = find(&root, "#addMore").dyn_into().unwrap();
        add_more.click();
        next_tick().await;

        let rows = root.query_selector_all("#fileInputs .fileInput").unwrap();
        assert_eq!(rows.length(), 2);

        for i in 0..rows.length() {
            let row: Element = rows.item(i).unwrap().dyn_into().unwrap();

            let input: HtmlInputElement = row
                .query_selector("input[type=file]")
                .unwrap()
                .unwrap()
                .dyn_into()
                .unwrap();
            assert!(input.required());
            assert_eq!(input.accept(), ".xlsx,.xls,.pdf");
            assert_eq!(input.name(), "files");

            let select: HtmlSelectElement = row
                .query_selector("select[name=tags]")
                .unwrap()
                .unwrap()
                .dyn_into()
                .unwrap();
            assert!(select.required());
            assert_eq!(select.length(), 5);
            assert_eq!(select.value(), "");
        }
    }

    #[wasm_bindgen_test]
    async fn wasm_status_area_starts_hidden() {
        let root = container();
        let _handle = leptos::mount::mount_to(root.clone(), App);

        assert_eq!(display_of(&root, "#loading"), "none");
        assert_eq!(display_of(&root, "#downloadLink"), "none");
    }

    #[wasm_bindgen_test]
    async fn wasm_status_area_follows_submit_view() {
        let root = container();
        let submit_view = RwSignal::new(SubmitView::default());
        let _handle = leptos::mount::mount_to(root.clone(), move || {
            view! { <StatusArea submit_view=submit_view /> }
        });

        submit_view.update(|v| {
            v.begin();
        });
        next_tick().await;
        assert_eq!(display_of(&root, "#loading"), "block");
        assert_eq!(display_of(&root, "#downloadLink"), "none");

        submit_view.update(|v| {
            v.succeed(DownloadLink {
                href: "blob:http://localhost/abc".to_string(),
                filename: "result.xlsx".to_string(),
            });
            v.finish();
        });
        next_tick().await;

        assert_eq!(display_of(&root, "#loading"), "none");
        assert_eq!(display_of(&root, "#downloadLink"), "block");

        let anchor: HtmlAnchorElement = find(&root, "#downloadLink a").dyn_into().unwrap();
        assert_eq!(anchor.download(), "result.xlsx");
        assert_eq!(anchor.get_attribute("href").as_deref(), Some("blob:http://localhost/abc"));
    }
}
