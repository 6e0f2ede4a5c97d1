//! Upload and column selection workflow.
//!
//! Holds the staged files, the column list and the group result, and runs
//! the submit pipeline against the backend.

use leptos::*;
use tokio_util::sync::CancellationToken;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::components::{ColumnList, FilePicker, GroupResultView};
use crate::services::{run_submit, HttpBackend};
use crate::state::{Columns, StagedFiles};
use crate::{AppError, GroupResult, BACKEND_URL};

#[component]
pub fn UploadWorkflow() -> impl IntoView {
    let (files, set_files) = create_signal(StagedFiles::<File>::new());
    let (columns, set_columns) = create_signal(Columns::default());
    let (groups, set_groups) = create_signal(None::<GroupResult>);
    let (is_pending, set_is_pending) = create_signal(false);

    let token = CancellationToken::new();

    // Drops the request in flight; disposed signals must not be written.
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        if is_pending.get_untracked() {
            log::warn!("⏳ Submit ignored, previous one still running");
            return;
        }

        let staged = files.get_untracked();
        let token = token.clone();
        set_is_pending.set(true);

        spawn_local(async move {
            let backend = HttpBackend::new(BACKEND_URL);
            let result = run_submit(
                &backend,
                staged.as_slice(),
                &token,
                |next| set_columns.set(next),
                |next| set_groups.set(Some(next)),
            )
            .await;

            match result {
                Ok(()) => log::info!("✅ Submit complete"),
                Err(AppError::Cancelled) => log::debug!("Submit dropped after teardown"),
                Err(e) => log::error!("❌ Submit failed: {}", e),
            }

            if !token.is_cancelled() {
                set_is_pending.set(false);
            }
        });
    };

    let on_toggle = move |(index, selected): (usize, bool)| {
        set_columns.update(|columns| {
            if !columns.set_selected(index, selected) {
                log::warn!("Column index {} out of range", index);
            }
        });
    };

    view! {
        <form class="upload-workflow" on:submit=on_submit>
            <FilePicker
                files=files
                on_change={move |next: StagedFiles<File>| set_files.set(next)}
                disabled=is_pending
            />

            <button
                type="submit"
                class="btn btn-primary"
                disabled=move || is_pending.get()
            >
                {move || if is_pending.get() { "⏳ Processing..." } else { "Submit" }}
            </button>
        </form>

        <ColumnList columns=columns on_toggle=on_toggle/>

        <GroupResultView groups=groups/>
    }
}
