//! Tests for the lookup worker thread

use std::sync::mpsc;
use std::time::Duration;

use tokio::sync::mpsc::unbounded_channel;

use super::*;
use crate::suggest::Query;

// Nothing listens on the discard port, so every fetch fails fast with a
// transport error
fn unreachable_client() -> DictionaryClient {
    DictionaryClient::new("http://127.0.0.1:9/suggest", "http://127.0.0.1:9/define").unwrap()
}

fn query(text: &str, sequence_id: u64) -> Query {
    Query {
        text: text.to_string(),
        sequence_id,
    }
}

#[tokio::test]
async fn test_handle_suggest_failure_keeps_sequence_id() {
    let client = unreachable_client();

    let response = handle_request(
        &client,
        LookupRequest::Suggest {
            query: query("cat", 7),
            limit: 9,
        },
    )
    .await;

    match response {
        LookupResponse::Suggestions {
            sequence_id,
            result,
        } => {
            assert_eq!(sequence_id, 7);
            assert!(result.is_err());
        }
        other => panic!("Expected suggestions response, got {:?}", other),
    }
}

#[tokio::test]
async fn test_handle_define_failure_keeps_word_and_request_id() {
    let client = unreachable_client();

    let response = handle_request(
        &client,
        LookupRequest::Define {
            word: "cat".to_string(),
            request_id: 3,
        },
    )
    .await;

    match response {
        LookupResponse::Definitions {
            request_id,
            word,
            result,
        } => {
            assert_eq!(request_id, 3);
            assert_eq!(word, "cat");
            assert!(result.is_err());
        }
        other => panic!("Expected definitions response, got {:?}", other),
    }
}

#[test]
fn test_worker_answers_every_request() {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();
    let handle = spawn_worker(unreachable_client(), request_rx, response_tx).unwrap();

    request_tx
        .send(LookupRequest::Suggest {
            query: query("c", 1),
            limit: 9,
        })
        .unwrap();
    request_tx
        .send(LookupRequest::Define {
            word: "cat".to_string(),
            request_id: 1,
        })
        .unwrap();

    let mut suggestions = 0;
    let mut definitions = 0;
    for _ in 0..2 {
        match response_rx.recv_timeout(Duration::from_secs(10)).unwrap() {
            LookupResponse::Suggestions { .. } => suggestions += 1,
            LookupResponse::Definitions { .. } => definitions += 1,
        }
    }
    assert_eq!((suggestions, definitions), (1, 1));

    drop(request_tx);
    handle.join().expect("Worker thread should exit cleanly");
}

#[test]
fn test_worker_shuts_down_when_channel_closed() {
    let (request_tx, request_rx) = unbounded_channel::<LookupRequest>();
    let (response_tx, _response_rx) = mpsc::channel();
    let handle = spawn_worker(unreachable_client(), request_rx, response_tx).unwrap();

    drop(request_tx);

    handle.join().expect("Worker thread should exit cleanly");
}
