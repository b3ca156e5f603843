mod common;

use common::utils::{create_pool, seed_single_match, spawn_app, TestUser};
use serde_json::json;

#[tokio::test]
async fn create_private_pool_returns_join_code() {
    let app = spawn_app().await;
    let owner = TestUser::new("alice");
    let client = reqwest::Client::new();

    let response = owner
        .apply(client.post(format!("{}/pools", app.address)))
        .json(&json!({ "name": "Friends league", "is_private": true }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let code = body["data"]["code"].as_str().expect("code missing");
    assert_eq!(8, code.len());
    assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    // The owner is already a member, at rank 1.
    assert_eq!(1, body["data"]["members"].as_array().unwrap().len());
    assert_eq!(1, body["data"]["members"][0]["rank"].as_u64().unwrap());
}

#[tokio::test]
async fn public_pool_carries_no_code() {
    let app = spawn_app().await;
    let owner = TestUser::new("alice");
    let client = reqwest::Client::new();

    let response = owner
        .apply(client.post(format!("{}/pools", app.address)))
        .json(&json!({ "name": "Open league", "is_private": false }))
        .send()
        .await
        .unwrap();

    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["data"]["code"].is_null());
    assert_eq!(false, body["data"]["is_private"].as_bool().unwrap());
}

#[tokio::test]
async fn joining_private_pool_requires_the_exact_code() {
    let app = spawn_app().await;
    let owner = TestUser::new("alice");
    let joiner = TestUser::new("bob");
    let client = reqwest::Client::new();

    let response = owner
        .apply(client.post(format!("{}/pools", app.address)))
        .json(&json!({ "name": "Secret league", "is_private": true }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let pool_id = body["data"]["id"].as_str().unwrap().to_string();
    let code = body["data"]["code"].as_str().unwrap().to_string();

    // Wrong code is rejected and nothing changes.
    let response = joiner
        .apply(client.post(format!("{}/pools/{}/join", app.address, pool_id)))
        .json(&json!({ "code": "WRONG123" }))
        .send()
        .await
        .unwrap();
    assert_eq!(403, response.status().as_u16());

    // No code at all is rejected too.
    let response = joiner
        .apply(client.post(format!("{}/pools/{}/join", app.address, pool_id)))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(403, response.status().as_u16());

    // The right code gets in.
    let response = joiner
        .apply(client.post(format!("{}/pools/{}/join", app.address, pool_id)))
        .json(&json!({ "code": code }))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(2, body["data"]["members"].as_array().unwrap().len());
}

#[tokio::test]
async fn joining_twice_is_a_no_op() {
    let app = spawn_app().await;
    let owner = TestUser::new("alice");
    let joiner = TestUser::new("bob");
    let client = reqwest::Client::new();
    let pool_id = create_pool(&app, &owner, "Open league", false).await;

    for _ in 0..2 {
        let response = joiner
            .apply(client.post(format!("{}/pools/{}/join", app.address, pool_id)))
            .json(&json!({}))
            .send()
            .await
            .unwrap();
        assert_eq!(200, response.status().as_u16());
    }

    let pool = app.store.get_pool(pool_id).await.unwrap();
    assert_eq!(2, pool.members.len());
}

#[tokio::test]
async fn owner_cannot_leave_their_own_pool() {
    let app = spawn_app().await;
    let owner = TestUser::new("alice");
    let client = reqwest::Client::new();
    let pool_id = create_pool(&app, &owner, "Mine", false).await;

    let response = owner
        .apply(client.post(format!("{}/pools/{}/leave", app.address, pool_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(403, response.status().as_u16());
    assert!(app.store.get_pool(pool_id).await.is_some());
}

#[tokio::test]
async fn leaving_removes_membership_and_predictions() {
    let app = spawn_app().await;
    seed_single_match(&app, "match-1-1", 60).await;
    let owner = TestUser::new("alice");
    let member = TestUser::new("bob");
    let client = reqwest::Client::new();
    let pool_id = create_pool(&app, &owner, "Open league", false).await;

    member
        .apply(client.post(format!("{}/pools/{}/join", app.address, pool_id)))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    member
        .apply(client.post(format!("{}/pools/{}/predictions", app.address, pool_id)))
        .json(&json!({ "match_id": "match-1-1", "home_score": 2, "away_score": 1 }))
        .send()
        .await
        .unwrap();
    assert!(app
        .store
        .get_user_prediction(pool_id, member.id, "match-1-1")
        .await
        .is_some());

    let response = member
        .apply(client.post(format!("{}/pools/{}/leave", app.address, pool_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());

    let pool = app.store.get_pool(pool_id).await.unwrap();
    assert_eq!(1, pool.members.len());
    assert!(app
        .store
        .get_user_prediction(pool_id, member.id, "match-1-1")
        .await
        .is_none());
}

#[tokio::test]
async fn only_the_owner_can_delete_a_pool() {
    let app = spawn_app().await;
    let owner = TestUser::new("alice");
    let other = TestUser::new("bob");
    let client = reqwest::Client::new();
    let pool_id = create_pool(&app, &owner, "Open league", false).await;

    let response = other
        .apply(client.delete(format!("{}/pools/{}", app.address, pool_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(403, response.status().as_u16());

    let response = owner
        .apply(client.delete(format!("{}/pools/{}", app.address, pool_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    assert!(app.store.get_pool(pool_id).await.is_none());
}

#[tokio::test]
async fn deleting_a_pool_removes_its_predictions() {
    let app = spawn_app().await;
    seed_single_match(&app, "match-1-1", 60).await;
    let owner = TestUser::new("alice");
    let client = reqwest::Client::new();
    let pool_id = create_pool(&app, &owner, "Doomed", false).await;

    owner
        .apply(client.post(format!("{}/pools/{}/predictions", app.address, pool_id)))
        .json(&json!({ "match_id": "match-1-1", "home_score": 1, "away_score": 0 }))
        .send()
        .await
        .unwrap();

    owner
        .apply(client.delete(format!("{}/pools/{}", app.address, pool_id)))
        .send()
        .await
        .unwrap();

    assert!(app
        .store
        .get_user_prediction(pool_id, owner.id, "match-1-1")
        .await
        .is_none());
}

#[tokio::test]
async fn toggling_privacy_synthesizes_and_clears_the_code() {
    let app = spawn_app().await;
    let owner = TestUser::new("alice");
    let client = reqwest::Client::new();
    let pool_id = create_pool(&app, &owner, "Open league", false).await;

    let response = owner
        .apply(client.put(format!("{}/pools/{}", app.address, pool_id)))
        .json(&json!({ "is_private": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["data"]["code"].is_string());

    let response = owner
        .apply(client.put(format!("{}/pools/{}", app.address, pool_id)))
        .json(&json!({ "is_private": false }))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["data"]["code"].is_null());
}

#[tokio::test]
async fn identity_headers_are_required_for_pool_routes() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(format!("{}/pools", app.address))
        .send()
        .await
        .unwrap();

    assert_eq!(401, response.status().as_u16());
}
