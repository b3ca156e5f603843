use std::net::TcpListener;

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use uuid::Uuid;

use bolao_backend::config::settings::FeedSettings;
use bolao_backend::data::teams::TEAMS;
use bolao_backend::feed::FeedClient;
use bolao_backend::models::matches::{Match, MatchStatus};
use bolao_backend::pool::scoring::ScoringRules;
use bolao_backend::run;
use bolao_backend::storage::Backend;
use bolao_backend::store::AppStore;
use bolao_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub store: AppStore,
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Each test gets its own data directory so state never leaks between
    // tests running in parallel.
    let data_dir = std::env::temp_dir().join(format!("bolao-test-{}", Uuid::new_v4()));
    let backend = Backend::local(data_dir);
    let store = AppStore::init(backend, ScoringRules::default())
        .await
        .expect("Failed to initialize store");

    // The feed is never reached in tests; the client just has to exist.
    let feed_client = FeedClient::new(FeedSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: "test".to_string(),
        league_id: "0".to_string(),
        season: "2026".to_string(),
    });

    let server = run(listener, store.clone(), feed_client).expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp { address, store }
}

#[derive(Debug, Clone)]
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub admin: bool,
}

impl TestUser {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name),
            admin: false,
        }
    }

    pub fn admin(name: &str) -> Self {
        Self {
            admin: true,
            ..Self::new(name)
        }
    }

    /// Attach this user's identity headers, the way the front proxy would.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let request = request
            .header("x-user-id", self.id.to_string())
            .header("x-user-name", &self.name)
            .header("x-user-email", &self.email);
        if self.admin {
            request.header("x-user-admin", "true")
        } else {
            request
        }
    }
}

pub fn test_match(id: &str, round: u32, kickoff: DateTime<Utc>) -> Match {
    Match {
        id: id.to_string(),
        home_team: TEAMS[0].clone(),
        away_team: TEAMS[1].clone(),
        kickoff,
        stadium: "Test Arena".to_string(),
        round,
        status: MatchStatus::Scheduled,
        home_score: None,
        away_score: None,
    }
}

/// Replace the schedule with a single match kicking off at the given offset
/// from now. Positive offsets leave the prediction window wide open.
pub async fn seed_single_match(app: &TestApp, match_id: &str, minutes_from_now: i64) {
    let kickoff = Utc::now() + Duration::minutes(minutes_from_now);
    app.store
        .replace_schedule(vec![test_match(match_id, 1, kickoff)])
        .await
        .expect("Failed to seed schedule");
}

/// Create a pool through the API and return its id.
pub async fn create_pool(app: &TestApp, owner: &TestUser, name: &str, private: bool) -> Uuid {
    let client = reqwest::Client::new();
    let response = owner
        .apply(client.post(format!("{}/pools", app.address)))
        .json(&serde_json::json!({
            "name": name,
            "is_private": private,
        }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(201, response.status().as_u16());
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["data"]["id"]
        .as_str()
        .and_then(|id| Uuid::parse_str(id).ok())
        .expect("Pool id missing from response")
}
