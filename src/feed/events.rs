use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use serde::Deserialize;

use crate::data::teams::team_by_name;
use crate::models::matches::{Match, MatchStatus, Score};

/// One season event as returned by the TheSportsDB `eventsseason.php`
/// endpoint. Scores and round arrive as strings; team names are free text
/// that does not always match the internal catalog spelling.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedEvent {
    #[serde(rename = "idEvent")]
    pub id: String,
    #[serde(rename = "strHomeTeam")]
    pub home_team: String,
    #[serde(rename = "strAwayTeam")]
    pub away_team: String,
    #[serde(rename = "intHomeScore")]
    pub home_score: Option<String>,
    #[serde(rename = "intAwayScore")]
    pub away_score: Option<String>,
    #[serde(rename = "intRound")]
    pub round: Option<String>,
    #[serde(rename = "strStatus")]
    pub status: Option<String>,
    #[serde(rename = "strVenue")]
    pub venue: Option<String>,
    #[serde(rename = "strTimestamp")]
    pub timestamp: Option<String>,
    #[serde(rename = "dateEvent")]
    pub date: Option<String>,
    #[serde(rename = "strTime")]
    pub time: Option<String>,
}

const FINISHED_STATUS: &str = "Match Finished";

lazy_static! {
    /// Feed spellings that differ from the internal team catalog.
    static ref FEED_TEAM_ALIASES: HashMap<&'static str, &'static str> = {
        let mut aliases = HashMap::new();
        aliases.insert("Atlético Mineiro", "Atlético-MG");
        aliases.insert("Bragantino", "Red Bull Bragantino");
        aliases.insert("Remo", "Clube do Remo");
        aliases.insert("Athletico Paranaense", "Athletico-PR");
        aliases
    };
}

pub fn normalize_team_name(name: &str) -> &str {
    FEED_TEAM_ALIASES.get(name).copied().unwrap_or(name)
}

/// Namespaced match id for a feed event.
pub fn feed_match_id(event_id: &str) -> String {
    format!("api-{}", event_id)
}

impl FeedEvent {
    pub fn is_finished(&self) -> bool {
        self.status.as_deref() == Some(FINISHED_STATUS)
    }

    pub fn round_number(&self) -> Option<u32> {
        self.round.as_deref().and_then(|r| r.parse().ok())
    }

    /// Final score of a decided event; `None` when the event is not finished
    /// or either score is missing or unparseable.
    pub fn final_score(&self) -> Option<Score> {
        if !self.is_finished() {
            return None;
        }
        let home: u32 = self.home_score.as_deref()?.trim().parse().ok()?;
        let away: u32 = self.away_score.as_deref()?.trim().parse().ok()?;
        Some(Score::new(home, away))
    }

    fn kickoff(&self) -> DateTime<Utc> {
        if let Some(ts) = self.timestamp.as_deref() {
            if let Ok(parsed) = DateTime::parse_from_rfc3339(ts) {
                return parsed.with_timezone(&Utc);
            }
        }
        if let (Some(date), Some(time)) = (self.date.as_deref(), self.time.as_deref()) {
            let combined = format!("{} {}", date, time);
            if let Ok(naive) = NaiveDateTime::parse_from_str(&combined, "%Y-%m-%d %H:%M:%S") {
                return DateTime::from_naive_utc_and_offset(naive, Utc);
            }
        }
        Utc::now()
    }

    fn status_for_match(&self) -> MatchStatus {
        match self.status.as_deref() {
            Some(FINISHED_STATUS) => MatchStatus::Finished,
            Some(s) if s.to_lowercase().contains("live") => MatchStatus::Live,
            _ => MatchStatus::Scheduled,
        }
    }
}

/// Convert a feed event into a schedule match. Events whose teams cannot be
/// resolved against the internal catalog are dropped.
pub fn event_to_match(event: &FeedEvent) -> Option<Match> {
    let home_team = team_by_name(normalize_team_name(&event.home_team))?.clone();
    let away_team = team_by_name(normalize_team_name(&event.away_team))?.clone();
    let score = event.final_score();

    Some(Match {
        id: feed_match_id(&event.id),
        home_team,
        away_team,
        kickoff: event.kickoff(),
        stadium: event.venue.clone().unwrap_or_default(),
        round: event.round_number().unwrap_or(1),
        status: event.status_for_match(),
        home_score: score.map(|s| s.home),
        away_score: score.map(|s| s.away),
    })
}

fn team_name_matches(ours: &str, from_feed: &str) -> bool {
    let normalized = normalize_team_name(from_feed);
    ours == normalized || ours.to_lowercase().contains(&normalized.to_lowercase())
}

/// Resolve a feed event to a match id of the active schedule. Two phases:
/// direct hit on the namespaced feed id when the schedule already carries
/// feed-provided identifiers for that fixture, otherwise a (round, home,
/// away) natural-key match through the name normalization table.
pub fn resolve_event_match_id(event: &FeedEvent, matches: &[Match]) -> Option<String> {
    let feed_id = feed_match_id(&event.id);
    if matches.iter().any(|m| m.id == feed_id) {
        return Some(feed_id);
    }

    let round = event.round_number()?;
    matches
        .iter()
        .filter(|m| m.round == round)
        .find(|m| {
            team_name_matches(&m.home_team.name, &event.home_team)
                && team_name_matches(&m.away_team.name, &event.away_team)
        })
        .map(|m| m.id.clone())
}

/// Decided feed events resolved against the active schedule, as
/// (match id, final score) pairs. Unmatched or malformed events are skipped.
pub fn reconcile_results(events: &[FeedEvent], matches: &[Match]) -> Vec<(String, Score)> {
    events
        .iter()
        .filter_map(|event| {
            let score = event.final_score()?;
            let match_id = resolve_event_match_id(event, matches)?;
            Some((match_id, score))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::schedule::seed_matches;

    fn event(
        id: &str,
        home: &str,
        away: &str,
        round: &str,
        status: &str,
        home_score: Option<&str>,
        away_score: Option<&str>,
    ) -> FeedEvent {
        FeedEvent {
            id: id.to_string(),
            home_team: home.to_string(),
            away_team: away.to_string(),
            home_score: home_score.map(String::from),
            away_score: away_score.map(String::from),
            round: Some(round.to_string()),
            status: Some(status.to_string()),
            venue: None,
            timestamp: None,
            date: None,
            time: None,
        }
    }

    #[test]
    fn aliases_map_feed_spellings_to_catalog_names() {
        assert_eq!(normalize_team_name("Atlético Mineiro"), "Atlético-MG");
        assert_eq!(normalize_team_name("Bragantino"), "Red Bull Bragantino");
        assert_eq!(normalize_team_name("Flamengo"), "Flamengo");
    }

    #[test]
    fn final_score_requires_finished_status_and_both_scores() {
        let ok = event("1", "Flamengo", "Santos", "1", "Match Finished", Some("2"), Some("1"));
        assert_eq!(ok.final_score(), Some(Score::new(2, 1)));

        let not_finished =
            event("2", "Flamengo", "Santos", "1", "Not Started", Some("2"), Some("1"));
        assert_eq!(not_finished.final_score(), None);

        let missing = event("3", "Flamengo", "Santos", "1", "Match Finished", Some("2"), None);
        assert_eq!(missing.final_score(), None);

        let garbage =
            event("4", "Flamengo", "Santos", "1", "Match Finished", Some("x"), Some("1"));
        assert_eq!(garbage.final_score(), None);
    }

    #[test]
    fn resolves_by_natural_key_against_the_seeded_schedule() {
        let matches = seed_matches();
        // Seed round 1 includes Atlético-MG x Palmeiras; the feed spells the
        // home side differently.
        let ev = event(
            "555",
            "Atlético Mineiro",
            "Palmeiras",
            "1",
            "Match Finished",
            Some("1"),
            Some("1"),
        );
        assert_eq!(
            resolve_event_match_id(&ev, &matches),
            Some("match-1-1".to_string())
        );
    }

    #[test]
    fn prefers_namespaced_feed_ids_when_the_schedule_carries_them() {
        let mut matches = seed_matches();
        matches[0].id = "api-555".to_string();
        let ev = event(
            "555",
            "Atlético Mineiro",
            "Palmeiras",
            "1",
            "Match Finished",
            Some("1"),
            Some("1"),
        );
        assert_eq!(
            resolve_event_match_id(&ev, &matches),
            Some("api-555".to_string())
        );
    }

    #[test]
    fn reconcile_skips_unmatched_and_malformed_events() {
        let matches = seed_matches();
        let events = vec![
            event("1", "Atlético Mineiro", "Palmeiras", "1", "Match Finished", Some("2"), Some("0")),
            // wrong round: no fixture for this pairing there
            event("2", "Flamengo", "Santos", "4", "Match Finished", Some("1"), Some("0")),
            // unparseable score
            event("3", "Fluminense", "Grêmio", "1", "Match Finished", Some(""), Some("0")),
            // not decided yet
            event("4", "Corinthians", "Bahia", "1", "Not Started", None, None),
        ];
        let resolved = reconcile_results(&events, &matches);
        assert_eq!(resolved, vec![("match-1-1".to_string(), Score::new(2, 0))]);
    }

    #[test]
    fn event_to_match_drops_unknown_teams() {
        let known = event("9", "Bragantino", "Remo", "7", "Not Started", None, None);
        let m = event_to_match(&known).expect("both teams resolvable");
        assert_eq!(m.id, "api-9");
        assert_eq!(m.round, 7);
        assert_eq!(m.home_team.name, "Red Bull Bragantino");
        assert_eq!(m.away_team.name, "Clube do Remo");
        assert_eq!(m.status, MatchStatus::Scheduled);

        let unknown = event("10", "Barcelona", "Remo", "7", "Not Started", None, None);
        assert!(event_to_match(&unknown).is_none());
    }
}
