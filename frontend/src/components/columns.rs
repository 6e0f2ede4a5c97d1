//! One checkbox per column header.

use leptos::*;

use crate::state::Columns;

#[component]
pub fn ColumnList(
    /// Columns of the last upload
    #[prop(into)]
    columns: Signal<Columns>,
    /// Called with `(index, checked)` when a box changes
    #[prop(into)]
    on_toggle: Callback<(usize, bool)>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !columns.with(Columns::is_empty)
            fallback=|| view! { }
        >
            <div class="column-list">
                <For
                    each=move || columns.get().into_iter().enumerate()
                    key=|(index, column)| (*index, column.name.clone())
                    children=move |(index, column)| {
                        // Read the flag from the signal: a re-upload with the
                        // same headers keeps the DOM node but resets the flag.
                        let checked = move || columns.with(|c| c.is_selected(index));
                        view! {
                            <label class="column-item">
                                <input
                                    type="checkbox"
                                    prop:checked=checked
                                    on:change=move |ev| on_toggle.call((index, event_target_checked(&ev)))
                                />
                                <span class="column-name">{column.name}</span>
                            </label>
                        }
                    }
                />
            </div>
        </Show>
    }
}
