//! Fuzzy Columns - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading CSV files to the fuzzy grouping
//! backend, choosing columns and reviewing the grouping result.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  └── UploadWorkflow                                         │
//! │      ├── FilePicker (staged CSV files)                      │
//! │      ├── ColumnList (one checkbox per header)               │
//! │      └── GroupResultView (indented JSON)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Submit runs `POST /generate`, `GET /headers`, `GET /groups` in order.
//!
//! # Modules
//!
//! - [`config`] - Backend URL and endpoint paths
//! - [`types`] - Common types (ColumnDescriptor, GroupResult, AppError)
//! - [`state`] - Staged files, columns and submit guards
//! - [`components`] - UI components (FilePicker, ColumnList, ...)
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Columns
    ColumnDescriptor,
    // API
    HeadersResponse, GroupResult,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{Columns, NamedFile, StagedFiles};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and the console logger, then mount [`App`].
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Fuzzy Columns - Starting Leptos App (backend: {})", BACKEND_URL);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadWorkflow/>
        </div>
    }
}
