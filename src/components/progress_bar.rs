//! Thin horizontal completion bar.

use leptos::prelude::*;

/// Bar filled to `percent`, clamped to 0-100. Used in month headers and the
/// companies table.
#[component]
pub fn ProgressBar(percent: Signal<u8>) -> impl IntoView {
    view! {
        <div class="progress-bar">
            <div
                class="progress-bar__fill"
                style:width=move || format!("{}%", percent.get().min(100))
            ></div>
        </div>
    }
}
