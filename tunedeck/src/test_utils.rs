//! Shared helpers for handler tests.

use std::sync::Arc;

use axum_test::TestServer;

use crate::api::models::auth::{LoginRequest, LoginResponse};
use crate::auth::credentials::sha3_512_hex;
use crate::config::Config;
use crate::store::{MemoryStore, TrackRecord};

/// A store with two accounts (mark/verysecure, eve/opensesame) and a
/// three-track catalog.
pub fn seeded_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    store.seed_account(123, "mark", &sha3_512_hex("verysecure"));
    store.seed_account(124, "eve", &sha3_512_hex("opensesame"));
    store.seed_track(test_track(1, "Ocean Drive", 215));
    store.seed_track(test_track(2, "Midnight City", 187));
    store.seed_track(test_track(3, "Slow Burn", 243));
    Arc::new(store)
}

fn test_track(id: i64, title: &str, duration: u32) -> TrackRecord {
    TrackRecord {
        id,
        title: title.to_string(),
        performer: "Test Performer".to_string(),
        duration,
        album: None,
        playcount: 0,
        publication_date: None,
        description: None,
        offline_available: false,
    }
}

pub fn create_test_app(store: Arc<MemoryStore>) -> TestServer {
    let state = crate::AppState::from_store(Config::default(), store);
    let router = crate::build_router(state);
    TestServer::new(router).expect("Failed to create test server")
}

/// Log in through the API and return the issued session token.
pub async fn login(server: &TestServer, user: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&LoginRequest {
            user: user.to_string(),
            password: password.to_string(),
        })
        .await;
    response.assert_status_ok();
    let body: LoginResponse = response.json();
    body.token
}
