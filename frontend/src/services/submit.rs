//! Submit pipeline: upload, headers, groups.

use std::future::Future;

use futures::future::{self, Either};
use tokio_util::sync::CancellationToken;

use crate::state::Columns;
use crate::types::{AppError, AppResult, GroupResult};

/// The three calls the workflow makes against the grouping backend.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// File handle accepted by [`generate`](Self::generate).
    type File;

    /// Upload every file. The response body is not used.
    async fn generate(&self, files: &[Self::File]) -> AppResult<()>;

    /// Column headers of the generated table.
    async fn headers(&self) -> AppResult<Vec<String>>;

    /// Grouping result, untouched.
    async fn groups(&self) -> AppResult<GroupResult>;
}

/// Run upload → headers → groups, each step awaiting the previous one.
///
/// `on_columns` receives the fresh column list as soon as headers arrive,
/// before groups are requested, so a failing groups call still leaves the
/// checkboxes on screen. Column selection is not sent anywhere.
///
/// One token covers all three steps. Cancelling it drops the step in
/// flight and nothing else is requested or reported.
pub async fn run_submit<B, C, G>(
    backend: &B,
    files: &[B::File],
    token: &CancellationToken,
    mut on_columns: C,
    mut on_groups: G,
) -> AppResult<()>
where
    B: Backend,
    C: FnMut(Columns),
    G: FnMut(GroupResult),
{
    log::info!("📤 Uploading {} file(s)...", files.len());
    unless_cancelled(token, backend.generate(files)).await?;

    let headers = unless_cancelled(token, backend.headers()).await?;
    log::info!("📋 {} column(s) received", headers.len());
    on_columns(Columns::from_headers(headers));

    let groups = unless_cancelled(token, backend.groups()).await?;
    log::info!("✅ Groups received");
    on_groups(groups);

    Ok(())
}

/// Race a step against the token. A step that finishes in the same poll
/// as the cancellation still counts as cancelled.
async fn unless_cancelled<T>(
    token: &CancellationToken,
    step: impl Future<Output = AppResult<T>>,
) -> AppResult<T> {
    if token.is_cancelled() {
        return Err(AppError::Cancelled);
    }

    let step = std::pin::pin!(step);
    let cancelled = std::pin::pin!(token.cancelled());
    let result = match future::select(step, cancelled).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => return Err(AppError::Cancelled),
    };

    if token.is_cancelled() {
        return Err(AppError::Cancelled);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future;
    use futures::task::noop_waker;
    use std::future::Future;
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::task::{Context, Poll};

    /// In-memory backend that records calls and replays canned answers.
    #[derive(Default)]
    struct FakeBackend {
        calls: RefCell<Vec<String>>,
        uploaded: RefCell<Vec<Vec<String>>>,
        headers: Vec<String>,
        groups: Option<GroupResult>,
        fail_upload: bool,
        hang_on_headers: bool,
        cancel_on_headers: Option<CancellationToken>,
    }

    impl FakeBackend {
        fn answering(headers: &[&str], groups: serde_json::Value) -> Self {
            Self {
                headers: headers.iter().map(|h| h.to_string()).collect(),
                groups: Some(GroupResult(groups)),
                ..Default::default()
            }
        }
    }

    impl Backend for FakeBackend {
        type File = String;

        async fn generate(&self, files: &[String]) -> AppResult<()> {
            self.calls.borrow_mut().push("generate".into());
            self.uploaded.borrow_mut().push(files.to_vec());
            if self.fail_upload {
                return Err(AppError::Network("connection refused".into()));
            }
            Ok(())
        }

        async fn headers(&self) -> AppResult<Vec<String>> {
            self.calls.borrow_mut().push("headers".into());
            if let Some(token) = &self.cancel_on_headers {
                token.cancel();
            }
            if self.hang_on_headers {
                future::pending::<()>().await;
            }
            Ok(self.headers.clone())
        }

        async fn groups(&self) -> AppResult<GroupResult> {
            self.calls.borrow_mut().push("groups".into());
            self.groups
                .clone()
                .ok_or_else(|| AppError::Decode("expected value at line 1".into()))
        }
    }

    fn files(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_sales_and_costs_scenario() {
        let backend = FakeBackend::answering(&["date", "amount"], json!({"total": 42}));
        let token = CancellationToken::new();
        let mut columns = Columns::default();
        let mut groups = None;

        let result = block_on(run_submit(
            &backend,
            &files(&["sales.csv", "costs.csv"]),
            &token,
            |c| columns = c,
            |g| groups = Some(g),
        ));

        assert!(result.is_ok());
        assert_eq!(*backend.calls.borrow(), vec!["generate", "headers", "groups"]);
        assert_eq!(
            *backend.uploaded.borrow(),
            vec![vec!["sales.csv".to_string(), "costs.csv".to_string()]]
        );

        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["date", "amount"]);
        assert!(columns.iter().all(|c| !c.selected));

        let groups = groups.unwrap();
        assert_eq!(groups.as_value(), &json!({"total": 42}));
        assert_eq!(groups.pretty(), "{\n  \"total\": 42\n}");
    }

    #[test]
    fn test_resubmit_replaces_columns() {
        let token = CancellationToken::new();
        let mut columns = Columns::default();

        let first = FakeBackend::answering(&["a", "b", "c"], json!([]));
        block_on(run_submit(&first, &files(&["a.csv"]), &token, |c| columns = c, |_| {})).unwrap();
        assert_eq!(columns.len(), 3);
        columns.set_selected(1, true);

        let second = FakeBackend::answering(&["x", "y"], json!([]));
        block_on(run_submit(&second, &files(&["a.csv"]), &token, |c| columns = c, |_| {})).unwrap();

        let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y"]);
        assert!(columns.selected_names().is_empty());
    }

    #[test]
    fn test_upload_failure_stops_chain() {
        let backend = FakeBackend {
            fail_upload: true,
            ..FakeBackend::answering(&["a"], json!({}))
        };
        let reported = Cell::new(false);

        let result = block_on(run_submit(
            &backend,
            &files(&["a.csv"]),
            &CancellationToken::new(),
            |_| reported.set(true),
            |_| reported.set(true),
        ));

        assert!(matches!(result, Err(AppError::Network(_))));
        assert_eq!(*backend.calls.borrow(), vec!["generate"]);
        assert!(!reported.get());
    }

    #[test]
    fn test_groups_failure_keeps_columns() {
        let backend = FakeBackend {
            groups: None,
            ..FakeBackend::answering(&["date"], json!(null))
        };
        let mut columns = Columns::default();
        let mut groups = None;

        let result = block_on(run_submit(
            &backend,
            &files(&["a.csv"]),
            &CancellationToken::new(),
            |c| columns = c,
            |g| groups = Some(g),
        ));

        assert!(matches!(result, Err(AppError::Decode(_))));
        assert_eq!(columns.len(), 1);
        assert!(groups.is_none());
    }

    #[test]
    fn test_cancel_mid_flight() {
        let token = CancellationToken::new();
        let backend = FakeBackend {
            cancel_on_headers: Some(token.clone()),
            ..FakeBackend::answering(&["date"], json!({}))
        };
        let reported = Cell::new(false);

        let result = block_on(run_submit(
            &backend,
            &files(&["a.csv"]),
            &token,
            |_| reported.set(true),
            |_| reported.set(true),
        ));

        assert_eq!(result, Err(AppError::Cancelled));
        assert_eq!(*backend.calls.borrow(), vec!["generate", "headers"]);
        assert!(!reported.get());
    }

    #[test]
    fn test_empty_selection_still_uploads() {
        let backend = FakeBackend::answering(&[], json!({}));
        let mut columns = Columns::from_headers(vec!["stale".into()]);

        block_on(run_submit(&backend, &[], &CancellationToken::new(), |c| columns = c, |_| {})).unwrap();

        assert_eq!(*backend.uploaded.borrow(), vec![Vec::<String>::new()]);
        assert!(columns.is_empty());
    }

    #[test]
    fn test_cancel_interrupts_pending_request() {
        let token = CancellationToken::new();
        let backend = FakeBackend {
            hang_on_headers: true,
            ..FakeBackend::answering(&["date"], json!({}))
        };
        let reported = Cell::new(false);

        let waker = noop_waker();
        let mut cx = Context::from_waker(&waker);
        let files = files(&["a.csv"]);
        let mut submit = Box::pin(run_submit(
            &backend,
            &files,
            &token,
            |_| reported.set(true),
            |_| reported.set(true),
        ));

        // Upload done, headers request never answers.
        assert!(submit.as_mut().poll(&mut cx).is_pending());
        assert_eq!(*backend.calls.borrow(), vec!["generate", "headers"]);

        token.cancel();
        assert_eq!(submit.as_mut().poll(&mut cx), Poll::Ready(Err(AppError::Cancelled)));
        drop(submit);

        assert_eq!(*backend.calls.borrow(), vec!["generate", "headers"]);
        assert!(!reported.get());
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let backend = FakeBackend::answering(&["date"], json!({}));

        let result = block_on(run_submit(&backend, &files(&["a.csv"]), &token, |_| {}, |_| {}));

        assert_eq!(result, Err(AppError::Cancelled));
        assert!(backend.calls.borrow().is_empty());
    }
}
