//! Hero section component

use leptos::*;

use crate::APP_NAME;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_NAME}</h1>
            <p class="subtitle">
                "Upload one or more CSV files, pick the columns you care about "
                "and review how the backend groups the rows."
            </p>
        </div>
    }
}
