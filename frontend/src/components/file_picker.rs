//! CSV file picker.
//!
//! Shows the staged files, opens the native chooser and reports every
//! change to the parent through `on_change`. Owns no state of its own.

use leptos::*;
use web_sys::{File, FileList, HtmlInputElement};

use crate::state::StagedFiles;
use crate::ACCEPTED_EXTENSION;

#[component]
pub fn FilePicker(
    /// Files currently staged by the parent
    #[prop(into)]
    files: Signal<StagedFiles<File>>,
    /// Receives the new set after a selection or a removal
    #[prop(into)]
    on_change: Callback<StagedFiles<File>>,
    /// Disables the chooser and the remove actions
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Message rendered under the picker
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();
    let disabled = Signal::derive(move || disabled.get());

    // Each chooser interaction yields the complete new selection.
    let on_select = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let selection = input.files().map(|list| files_from_list(&list)).unwrap_or_default();
        log::debug!("📂 {} file(s) chosen", selection.len());
        on_change.call(StagedFiles::from_selection(selection));
        // Allow picking the same file again.
        input.set_value("");
    };

    let open_chooser = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let remove = move |index: usize| {
        if let Some(next) = files.with(|staged| staged.without(index)) {
            on_change.call(next);
        }
    };

    view! {
        <div class="file-picker">
            <input
                node_ref=input_ref
                type="file"
                accept=ACCEPTED_EXTENSION
                multiple=true
                hidden=true
                disabled=move || disabled.get()
                on:change=on_select
            />

            <Show
                when=move || !files.with(StagedFiles::is_empty)
                fallback=|| view! { <div class="file-picker-empty">"No files selected"</div> }
            >
                <div class="file-grid">
                    <For
                        each=move || files.with(|staged| staged.names()).into_iter().enumerate()
                        key=|(index, name)| (*index, name.clone())
                        children=move |(index, name)| {
                            view! {
                                <div class="file-preview">
                                    <span class="file-preview-name">{name}</span>
                                    <button
                                        type="button"
                                        class="file-preview-remove"
                                        title="Remove"
                                        disabled=move || disabled.get()
                                        on:click=move |_| remove(index)
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <button
                type="button"
                class="btn btn-secondary file-picker-trigger"
                disabled=move || disabled.get()
                on:click=open_chooser
            >
                {move || trigger_label(files.with(StagedFiles::is_empty))}
            </button>

            {move || error.get().map(|message| view! { <div class="file-picker-error">{message}</div> })}
        </div>
    }
}

/// Label of the chooser button.
fn trigger_label(empty: bool) -> &'static str {
    if empty {
        "Upload files"
    } else {
        "Change files"
    }
}

fn files_from_list(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
