use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::data::schedule::TOTAL_ROUNDS;
use crate::models::matches::{Match, MatchStatus};

/// The round currently open for predictions: the round of the first match
/// whose kickoff is strictly after `now`. When the whole known schedule has
/// elapsed, extrapolate one round per elapsed week, capped at the last round.
pub fn current_round(matches: &[Match], now: DateTime<Utc>) -> u32 {
    let mut sorted: Vec<&Match> = matches.iter().collect();
    sorted.sort_by_key(|m| m.kickoff);

    if let Some(first_future) = sorted.iter().find(|m| m.kickoff > now) {
        return first_future.round;
    }
    let Some(last) = sorted.last() else {
        return 1;
    };
    let days_since = (now - last.kickoff).num_days().max(0);
    let rounds_after = (days_since / 7) as u32;
    (last.round + 1 + rounds_after).min(TOTAL_ROUNDS)
}

fn is_upcoming(m: &Match, round_floor: u32, now: DateTime<Utc>) -> bool {
    m.status == MatchStatus::Scheduled && m.round >= round_floor && m.kickoff > now
}

/// Not-yet-played matches from the current round onwards, kickoff ascending,
/// optionally capped.
pub fn upcoming_matches(matches: &[Match], now: DateTime<Utc>, limit: Option<usize>) -> Vec<Match> {
    let round_floor = current_round(matches, now);
    let mut upcoming: Vec<Match> = matches
        .iter()
        .filter(|m| is_upcoming(m, round_floor, now))
        .cloned()
        .collect();
    upcoming.sort_by_key(|m| m.kickoff);
    if let Some(limit) = limit {
        upcoming.truncate(limit);
    }
    upcoming
}

/// Same filter as `upcoming_matches`, grouped per round.
pub fn upcoming_matches_by_round(
    matches: &[Match],
    now: DateTime<Utc>,
) -> BTreeMap<u32, Vec<Match>> {
    let mut by_round: BTreeMap<u32, Vec<Match>> = BTreeMap::new();
    for m in upcoming_matches(matches, now, None) {
        by_round.entry(m.round).or_default().push(m);
    }
    by_round
}

/// Combine the static seed with the externally fetched schedule. Round by
/// round: if the feed supplies any matches for a round, the feed owns that
/// entire round (no partial mixing); otherwise the static set is kept. The
/// result is re-sorted by kickoff.
pub fn merge_schedules(static_matches: &[Match], feed_matches: &[Match]) -> Vec<Match> {
    let mut merged = Vec::with_capacity(static_matches.len().max(feed_matches.len()));
    for round in 1..=TOTAL_ROUNDS {
        let from_feed: Vec<&Match> = feed_matches.iter().filter(|m| m.round == round).collect();
        if from_feed.is_empty() {
            merged.extend(static_matches.iter().filter(|m| m.round == round).cloned());
        } else {
            merged.extend(from_feed.into_iter().cloned());
        }
    }
    merged.sort_by_key(|m| m.kickoff);
    merged
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;
    use crate::data::teams::TEAMS;

    fn test_match(id: &str, round: u32, kickoff: DateTime<Utc>, status: MatchStatus) -> Match {
        Match {
            id: id.to_string(),
            home_team: TEAMS[0].clone(),
            away_team: TEAMS[1].clone(),
            kickoff,
            stadium: "Maracanã".to_string(),
            round,
            status,
            home_score: None,
            away_score: None,
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn current_round_is_round_of_first_future_match() {
        let matches = vec![
            test_match("a", 5, at(1, 19), MatchStatus::Finished),
            test_match("b", 6, at(8, 19), MatchStatus::Scheduled),
            test_match("c", 7, at(15, 19), MatchStatus::Scheduled),
        ];
        assert_eq!(current_round(&matches, at(4, 12)), 6);
        assert_eq!(current_round(&matches, at(10, 12)), 7);
    }

    #[test]
    fn current_round_extrapolates_one_round_per_week_after_schedule_end() {
        let matches = vec![test_match("a", 10, at(1, 19), MatchStatus::Finished)];
        // Three days later: still the next round.
        assert_eq!(current_round(&matches, at(4, 12)), 11);
        // Two full weeks later: two extra rounds.
        assert_eq!(current_round(&matches, at(1, 19) + Duration::days(15)), 13);
    }

    #[test]
    fn current_round_extrapolation_caps_at_total_rounds() {
        let matches = vec![test_match("a", 37, at(1, 19), MatchStatus::Finished)];
        let much_later = at(1, 19) + Duration::weeks(20);
        assert_eq!(current_round(&matches, much_later), TOTAL_ROUNDS);
    }

    #[test]
    fn current_round_defaults_to_one_for_empty_schedule() {
        assert_eq!(current_round(&[], at(1, 12)), 1);
    }

    #[test]
    fn upcoming_excludes_past_live_and_earlier_rounds() {
        let matches = vec![
            test_match("past", 5, at(1, 19), MatchStatus::Scheduled),
            test_match("live", 6, at(8, 19), MatchStatus::Live),
            test_match("ok-1", 6, at(8, 21), MatchStatus::Scheduled),
            test_match("ok-2", 7, at(15, 19), MatchStatus::Scheduled),
        ];
        let now = at(4, 12);
        let upcoming = upcoming_matches(&matches, now, None);
        let ids: Vec<&str> = upcoming.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["ok-1", "ok-2"]);

        let capped = upcoming_matches(&matches, now, Some(1));
        assert_eq!(capped.len(), 1);
        assert_eq!(capped[0].id, "ok-1");
    }

    #[test]
    fn merge_takes_whole_rounds_from_the_feed() {
        let static_matches = vec![
            test_match("match-1-1", 1, at(1, 19), MatchStatus::Scheduled),
            test_match("match-1-2", 1, at(1, 21), MatchStatus::Scheduled),
            test_match("match-2-1", 2, at(8, 19), MatchStatus::Scheduled),
        ];
        // Feed has round 1 only, and only one match of it.
        let feed_matches = vec![test_match("api-100", 1, at(1, 20), MatchStatus::Scheduled)];

        let merged = merge_schedules(&static_matches, &feed_matches);
        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["api-100", "match-2-1"]);
    }

    #[test]
    fn merge_result_is_sorted_by_kickoff() {
        let static_matches = vec![test_match("match-2-1", 2, at(8, 19), MatchStatus::Scheduled)];
        let feed_matches = vec![
            test_match("api-2", 1, at(2, 19), MatchStatus::Scheduled),
            test_match("api-1", 1, at(1, 19), MatchStatus::Scheduled),
        ];
        let merged = merge_schedules(&static_matches, &feed_matches);
        let ids: Vec<&str> = merged.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["api-1", "api-2", "match-2-1"]);
    }
}
