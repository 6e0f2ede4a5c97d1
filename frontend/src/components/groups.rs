//! Group result display

use leptos::*;

use crate::GroupResult;

#[component]
pub fn GroupResultView(#[prop(into)] groups: Signal<Option<GroupResult>>) -> impl IntoView {
    move || {
        groups.get().map(|groups| {
            view! { <pre class="group-result">{groups.pretty()}</pre> }
        })
    }
}
