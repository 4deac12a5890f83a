//! Message handlers for both ends of the transport.
//!
//! The page side reacts to a [`Trigger`] by running the extraction pipeline
//! and packaging the requested subset into a [`Request`]. The privileged
//! side executes a [`Request`] against the download backend and answers
//! with a [`Response`]. Neither side retries; a malformed message becomes an
//! `ok: false` response, never a panic.

use crate::error::{ErrorKind, Result};
use crate::messages::{Request, Response, Trigger};
use exn::ResultExt;
use snag_dispatch::backend::DownloadBackend;
use snag_dispatch::naming::NamingTable;
use snag_dispatch::run_batch;
use tracing::{instrument, warn};

/// Page-side trigger handling: assemble the page, select the subset the
/// trigger names (all = images then attachments), and package it for the
/// privileged side.
///
/// Returns `Ok(None)` when the page yields nothing downloadable — an empty
/// batch is logged and never sent.
///
/// # Errors
///
/// Fails only when the page URL cannot be parsed (extraction itself is
/// best-effort).
#[instrument(skip(html, trigger), fields(trigger = %trigger))]
pub fn on_trigger(html: &str, page_url: &str, trigger: Trigger) -> Result<Option<Request>> {
    let batch = snag_extract::assemble(html, page_url).or_raise(|| ErrorKind::Extract)?;
    let items = match trigger {
        Trigger::DownloadImages => batch.images,
        Trigger::DownloadAttachments => batch.attachments,
        Trigger::DownloadAll => batch.all(),
    };
    if items.is_empty() {
        warn!("no downloadable resources found");
        return Ok(None);
    }
    Ok(Some(Request::DownloadItems { items }))
}

/// Privileged-side request handling: run the batch and summarize.
pub async fn handle_request(backend: &dyn DownloadBackend, table: &NamingTable, request: Request) -> Response {
    match request {
        Request::DownloadItems { items } => Response::success(run_batch(backend, table, &items).await),
    }
}

/// Raw transport entrypoint: JSON in, JSON out.
///
/// A message that fails to parse is answered with `{ok: false, error}` and a
/// logged warning — transport failures are surfaced, not retried.
pub async fn handle_message(backend: &dyn DownloadBackend, table: &NamingTable, raw: &str) -> String {
    let response = match parse_request(raw) {
        Ok(request) => handle_request(backend, table, request).await,
        Err(error) => {
            warn!(error = %&*error, "rejecting malformed batch request");
            Response::failure((*error).to_string())
        },
    };
    // A response this small always serializes; the fallback is belt-and-braces.
    serde_json::to_string(&response)
        .unwrap_or_else(|_| r#"{"ok":false,"error":"response serialization failed"}"#.to_string())
}

fn parse_request(raw: &str) -> Result<Request> {
    serde_json::from_str(raw).or_raise(|| ErrorKind::Transport("unknown message or missing items".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snag_dispatch::BatchSummary;
    use snag_dispatch::backend::MockBackend;

    const PAGE_URL: &str = "https://catalog.example.com/subjects/subject-104978/my-title";
    const PAGE: &str = r#"
        <h1>My Title</h1>
        <ul class="slides">
            <li><img data-src="https://cdn.example.com/a.jpg"></li>
            <li><img data-src="https://cdn.example.com/b.png"></li>
        </ul>
        <div class="pb-30">
            <a href="/subjects/purchases/download/55?expire=999">
                <span class="trunc" title="Instructions PDF">Instr…</span>
            </a>
        </div>
    "#;

    fn items_of(request: Request) -> Vec<String> {
        let Request::DownloadItems { items } = request;
        items.into_iter().map(|i| i.filename).collect()
    }

    #[test]
    fn test_trigger_selects_images() {
        let request = on_trigger(PAGE, PAGE_URL, Trigger::DownloadImages).unwrap().unwrap();
        let filenames = items_of(request);
        assert_eq!(filenames, ["Subject-104978_My-Title_01.jpg", "Subject-104978_My-Title_02.png"]);
    }

    #[test]
    fn test_trigger_selects_attachments() {
        let request = on_trigger(PAGE, PAGE_URL, Trigger::DownloadAttachments).unwrap().unwrap();
        assert_eq!(items_of(request), ["Subject-104978_My-Title_Instructions-PDF.bin"]);
    }

    #[test]
    fn test_trigger_all_orders_images_first() {
        let request = on_trigger(PAGE, PAGE_URL, Trigger::DownloadAll).unwrap().unwrap();
        let filenames = items_of(request);
        assert_eq!(filenames.len(), 3);
        assert!(filenames[2].ends_with(".bin"));
    }

    #[test]
    fn test_trigger_empty_page_sends_nothing() {
        let request = on_trigger("<html></html>", PAGE_URL, Trigger::DownloadAttachments).unwrap();
        assert!(request.is_none());
    }

    #[test]
    fn test_trigger_bad_page_url() {
        let err = on_trigger(PAGE, "nonsense", Trigger::DownloadAll).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Extract));
    }

    #[tokio::test]
    async fn test_end_to_end_roundtrip() {
        let backend = MockBackend::default();
        let table = NamingTable::new();
        let request = on_trigger(PAGE, PAGE_URL, Trigger::DownloadAll).unwrap().unwrap();
        let raw = serde_json::to_string(&request).unwrap();

        let response: Response = serde_json::from_str(&handle_message(&backend, &table, &raw).await).unwrap();
        assert!(response.ok);
        assert_eq!(response.summary, Some(BatchSummary { started: 3, failed: 0 }));
        assert_eq!(backend.submissions().await.len(), 3);
        // Naming decisions are available for everything that started.
        assert!(table.resolve("https://cdn.example.com/a.jpg").await.is_some());
    }

    #[tokio::test]
    async fn test_partial_failure_summary() {
        let backend = MockBackend::default().failing_on(["b.png"]);
        let table = NamingTable::new();
        let request = on_trigger(PAGE, PAGE_URL, Trigger::DownloadImages).unwrap().unwrap();
        let response = handle_request(&backend, &table, request).await;
        assert!(response.ok);
        assert_eq!(response.summary, Some(BatchSummary { started: 1, failed: 1 }));
    }

    #[tokio::test]
    async fn test_malformed_message_is_ok_false() {
        let backend = MockBackend::default();
        let table = NamingTable::new();
        let raw = handle_message(&backend, &table, r#"{"kind":"somethingElse"}"#).await;
        let response: Response = serde_json::from_str(&raw).unwrap();
        assert!(!response.ok);
        assert!(response.error.unwrap().contains("transport error"));
        assert!(backend.submissions().await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_json_is_ok_false() {
        let backend = MockBackend::default();
        let table = NamingTable::new();
        let response: Response =
            serde_json::from_str(&handle_message(&backend, &table, "not json at all").await).unwrap();
        assert!(!response.ok);
    }
}
