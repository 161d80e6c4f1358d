//! Lookup Worker Thread
//!
//! Performs suggestion and definition fetches off the UI thread. Requests
//! arrive over an unbounded channel; each one becomes an independent task on
//! a single-threaded tokio runtime, and its outcome is sent back to the UI
//! thread. Nothing is ever cancelled: deciding whether a response is still
//! wanted is the controller's job.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread::JoinHandle;

use tokio::sync::mpsc::UnboundedReceiver;

use super::client::DictionaryClient;
use super::types::{LookupRequest, LookupResponse};

/// Spawn the lookup worker thread
///
/// The thread exits once every request sender has been dropped.
pub fn spawn_worker(
    client: DictionaryClient,
    request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) -> std::io::Result<JoinHandle<()>> {
    std::thread::Builder::new()
        .name("lexi-lookup".to_string())
        .spawn(move || worker_loop(client, request_rx, response_tx))
}

fn worker_loop(
    client: DictionaryClient,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start lookup runtime: {}", e);
            return;
        }
    };

    let client = Arc::new(client);
    runtime.block_on(async move {
        while let Some(request) = request_rx.recv().await {
            let client = Arc::clone(&client);
            let response_tx = response_tx.clone();
            tokio::spawn(async move {
                let response = handle_request(&client, request).await;
                if response_tx.send(response).is_err() {
                    log::debug!("UI thread gone, dropping lookup response");
                }
            });
        }
    });

    log::debug!("Lookup worker thread shutting down");
}

/// Run one request to completion
pub(crate) async fn handle_request(
    client: &DictionaryClient,
    request: LookupRequest,
) -> LookupResponse {
    match request {
        LookupRequest::Suggest { query, limit } => {
            log::debug!("Fetching suggestions {} for '{}'", query.sequence_id, query.text);
            LookupResponse::Suggestions {
                sequence_id: query.sequence_id,
                result: client.fetch_suggestions(&query.text, limit).await,
            }
        }
        LookupRequest::Define { word, request_id } => {
            log::debug!("Fetching definitions {} for '{}'", request_id, word);
            let result = client.fetch_definitions(&word).await;
            LookupResponse::Definitions {
                request_id,
                word,
                result,
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
