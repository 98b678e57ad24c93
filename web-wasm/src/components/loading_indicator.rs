//! ローディング表示

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <div
            id="loading"
            class="loading"
            style:display=move || if visible.get() { "block" } else { "none" }
        >
            "Processing..."
        </div>
    }
}
