mod common;

use common::utils::{create_pool, seed_single_match, spawn_app, TestUser};
use serde_json::json;

use bolao_backend::models::matches::Score;

#[tokio::test]
async fn a_user_in_several_pools_appears_once_at_their_best() {
    let app = spawn_app().await;
    seed_single_match(&app, "match-1-1", 60).await;
    let alice = TestUser::new("alice");
    let bob = TestUser::new("bob");
    let client = reqwest::Client::new();

    let casual = create_pool(&app, &alice, "Casual", false).await;
    let serious = create_pool(&app, &bob, "Serious", false).await;
    alice
        .apply(client.post(format!("{}/pools/{}/join", app.address, serious)))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    // Alice misses in the casual pool and nails it in the serious one.
    alice
        .apply(client.post(format!("{}/pools/{}/predictions", app.address, casual)))
        .json(&json!({ "match_id": "match-1-1", "home_score": 3, "away_score": 1 }))
        .send()
        .await
        .unwrap();
    alice
        .apply(client.post(format!("{}/pools/{}/predictions", app.address, serious)))
        .json(&json!({ "match_id": "match-1-1", "home_score": 2, "away_score": 1 }))
        .send()
        .await
        .unwrap();

    app.store
        .set_result("match-1-1", Score::new(2, 1))
        .await
        .unwrap();

    let response = client
        .get(format!("{}/leaderboard", app.address))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await.unwrap();
    let entries = body["data"].as_array().unwrap();

    let alice_entries: Vec<_> = entries
        .iter()
        .filter(|e| e["user"]["id"].as_str() == Some(&alice.id.to_string()))
        .collect();
    assert_eq!(1, alice_entries.len());
    assert_eq!(5, alice_entries[0]["points"].as_u64().unwrap());
    assert_eq!("Serious", alice_entries[0]["pool_name"].as_str().unwrap());
    assert_eq!(1, alice_entries[0]["exact_scores"].as_u64().unwrap());
}

#[tokio::test]
async fn leaderboard_respects_the_limit_parameter() {
    let app = spawn_app().await;
    seed_single_match(&app, "match-1-1", 60).await;
    let client = reqwest::Client::new();

    let owner = TestUser::new("owner");
    let pool_id = create_pool(&app, &owner, "Crowded", false).await;
    for name in ["u1", "u2", "u3"] {
        let user = TestUser::new(name);
        user.apply(client.post(format!("{}/pools/{}/join", app.address, pool_id)))
            .json(&json!({}))
            .send()
            .await
            .unwrap();
    }

    let response = client
        .get(format!("{}/leaderboard?limit=2", app.address))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(2, body["data"].as_array().unwrap().len());
}

#[tokio::test]
async fn leaderboard_serves_ten_entries_by_default() {
    let app = spawn_app().await;
    seed_single_match(&app, "match-1-1", 60).await;
    let client = reqwest::Client::new();

    let owner = TestUser::new("owner");
    let pool_id = create_pool(&app, &owner, "Packed", false).await;
    for n in 1..=11 {
        let user = TestUser::new(&format!("u{}", n));
        user.apply(client.post(format!("{}/pools/{}/join", app.address, pool_id)))
            .json(&json!({}))
            .send()
            .await
            .unwrap();
    }

    let response = client
        .get(format!("{}/leaderboard", app.address))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(10, body["data"].as_array().unwrap().len());
}

#[tokio::test]
async fn prediction_history_lists_only_decided_matches() {
    let app = spawn_app().await;
    seed_single_match(&app, "match-1-1", 60).await;
    let alice = TestUser::new("alice");
    let client = reqwest::Client::new();
    let pool_id = create_pool(&app, &alice, "History", false).await;

    alice
        .apply(client.post(format!("{}/pools/{}/predictions", app.address, pool_id)))
        .json(&json!({ "match_id": "match-1-1", "home_score": 2, "away_score": 1 }))
        .send()
        .await
        .unwrap();

    // Undecided match: no history yet.
    let response = alice
        .apply(client.get(format!("{}/pools/history", app.address)))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(0, body["data"].as_array().unwrap().len());

    app.store
        .set_result("match-1-1", Score::new(2, 1))
        .await
        .unwrap();

    let response = alice
        .apply(client.get(format!("{}/pools/history", app.address)))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let history = body["data"].as_array().unwrap();
    assert_eq!(1, history.len());
    assert_eq!(5, history[0]["points"].as_u64().unwrap());
    assert_eq!("History", history[0]["pool_name"].as_str().unwrap());
}

#[tokio::test]
async fn pool_standings_rank_members_by_points() {
    let app = spawn_app().await;
    seed_single_match(&app, "match-1-1", 60).await;
    let alice = TestUser::new("alice");
    let bob = TestUser::new("bob");
    let client = reqwest::Client::new();
    let pool_id = create_pool(&app, &alice, "Ranked", false).await;

    bob.apply(client.post(format!("{}/pools/{}/join", app.address, pool_id)))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    alice
        .apply(client.post(format!("{}/pools/{}/predictions", app.address, pool_id)))
        .json(&json!({ "match_id": "match-1-1", "home_score": 3, "away_score": 1 }))
        .send()
        .await
        .unwrap();
    bob.apply(client.post(format!("{}/pools/{}/predictions", app.address, pool_id)))
        .json(&json!({ "match_id": "match-1-1", "home_score": 2, "away_score": 1 }))
        .send()
        .await
        .unwrap();

    app.store
        .set_result("match-1-1", Score::new(2, 1))
        .await
        .unwrap();

    let response = alice
        .apply(client.get(format!("{}/pools/{}/standings", app.address, pool_id)))
        .send()
        .await
        .unwrap();
    let body: serde_json::Value = response.json().await.unwrap();
    let standings = body["data"].as_array().unwrap();

    assert_eq!(2, standings.len());
    assert_eq!(bob.id.to_string(), standings[0]["user_id"].as_str().unwrap());
    assert_eq!(5, standings[0]["points"].as_u64().unwrap());
    assert_eq!(1, standings[0]["rank"].as_u64().unwrap());
    assert_eq!(3, standings[1]["points"].as_u64().unwrap());
    assert_eq!(2, standings[1]["rank"].as_u64().unwrap());
}
