use chrono::{DateTime, TimeZone, Utc};

use crate::data::teams::team_by_name;
use crate::models::matches::{Match, MatchStatus};

/// Total rounds in a Série A season.
pub const TOTAL_ROUNDS: u32 = 38;

/// Season end used as the default pool closing date.
pub fn season_end() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 12, 2, 0, 0, 0)
        .single()
        .expect("season end date is a valid timestamp")
}

struct Fixture {
    home: &'static str,
    away: &'static str,
    stadium: &'static str,
    day: u32,
    month: u32,
    hour: u32,
    minute: u32,
}

const fn fx(
    home: &'static str,
    away: &'static str,
    stadium: &'static str,
    day: u32,
    month: u32,
    hour: u32,
    minute: u32,
) -> Fixture {
    Fixture {
        home,
        away,
        stadium,
        day,
        month,
        hour,
        minute,
    }
}

// Confirmed CBF fixtures for the opening rounds of the 2026 season. Rounds
// 5+ come from the external feed once published.
const ROUND_1: [Fixture; 10] = [
    fx("Atlético-MG", "Palmeiras", "Arena MRV", 28, 1, 19, 0),
    fx("Internacional", "Athletico-PR", "Beira-Rio", 28, 1, 19, 0),
    fx("Coritiba", "Red Bull Bragantino", "Couto Pereira", 28, 1, 19, 0),
    fx("Vitória", "Clube do Remo", "Barradão", 28, 1, 19, 0),
    fx("Fluminense", "Grêmio", "Maracanã", 28, 1, 19, 30),
    fx("Mirassol", "Vasco da Gama", "José Maria de Campos Maia", 28, 1, 20, 0),
    fx("Chapecoense", "Santos", "Arena Condá", 28, 1, 20, 0),
    fx("São Paulo", "Flamengo", "Morumbi", 28, 1, 21, 30),
    fx("Corinthians", "Bahia", "Neo Química Arena", 29, 1, 20, 30),
    fx("Botafogo", "Cruzeiro", "Nilton Santos", 29, 1, 21, 30),
];

const ROUND_2: [Fixture; 10] = [
    fx("Flamengo", "Internacional", "Maracanã", 4, 2, 19, 0),
    fx("Red Bull Bragantino", "Atlético-MG", "Nabi Abi Chedid", 4, 2, 19, 0),
    fx("Santos", "São Paulo", "Vila Belmiro", 4, 2, 20, 0),
    fx("Clube do Remo", "Mirassol", "Mangueirão", 4, 2, 19, 0),
    fx("Palmeiras", "Coritiba", "Allianz Parque", 4, 2, 21, 30),
    fx("Athletico-PR", "Chapecoense", "Arena da Baixada", 4, 2, 19, 0),
    fx("Vasco da Gama", "Vitória", "São Januário", 5, 2, 20, 0),
    fx("Bahia", "Botafogo", "Fonte Nova", 5, 2, 19, 0),
    fx("Cruzeiro", "Fluminense", "Mineirão", 5, 2, 21, 30),
    fx("Grêmio", "Corinthians", "Arena do Grêmio", 5, 2, 21, 30),
];

const ROUND_3: [Fixture; 10] = [
    fx("Mirassol", "Cruzeiro", "José Maria de Campos Maia", 11, 2, 19, 0),
    fx("Chapecoense", "Coritiba", "Arena Condá", 11, 2, 19, 0),
    fx("Atlético-MG", "Clube do Remo", "Arena MRV", 11, 2, 20, 0),
    fx("Vasco da Gama", "Bahia", "São Januário", 11, 2, 21, 30),
    fx("São Paulo", "Grêmio", "Morumbi", 11, 2, 21, 30),
    fx("Flamengo", "Palmeiras", "Maracanã", 11, 2, 21, 30),
    fx("Internacional", "Santos", "Beira-Rio", 11, 2, 19, 0),
    fx("Red Bull Bragantino", "Vitória", "Nabi Abi Chedid", 11, 2, 19, 0),
    fx("Botafogo", "Athletico-PR", "Nilton Santos", 12, 2, 19, 30),
    fx("Fluminense", "Corinthians", "Maracanã", 12, 2, 21, 30),
];

const ROUND_4: [Fixture; 10] = [
    fx("Botafogo", "Vitória", "Nilton Santos", 24, 2, 19, 0),
    fx("Bahia", "Chapecoense", "Fonte Nova", 24, 2, 19, 0),
    fx("Flamengo", "Mirassol", "Maracanã", 24, 2, 21, 30),
    fx("Clube do Remo", "Internacional", "Mangueirão", 25, 2, 19, 0),
    fx("Red Bull Bragantino", "Athletico-PR", "Nabi Abi Chedid", 25, 2, 19, 0),
    fx("Cruzeiro", "Corinthians", "Mineirão", 25, 2, 20, 0),
    fx("Grêmio", "Atlético-MG", "Arena do Grêmio", 25, 2, 21, 30),
    fx("Palmeiras", "Fluminense", "Allianz Parque", 25, 2, 21, 30),
    fx("Santos", "Vasco da Gama", "Vila Belmiro", 26, 2, 19, 0),
    fx("Coritiba", "São Paulo", "Couto Pereira", 26, 2, 21, 30),
];

fn build_match(fixture: &Fixture, round: u32, index: usize) -> Match {
    let home_team = team_by_name(fixture.home)
        .unwrap_or(&crate::data::teams::TEAMS[0])
        .clone();
    let away_team = team_by_name(fixture.away)
        .unwrap_or(&crate::data::teams::TEAMS[1])
        .clone();
    let kickoff = Utc
        .with_ymd_and_hms(
            2026,
            fixture.month,
            fixture.day,
            fixture.hour,
            fixture.minute,
            0,
        )
        .single()
        .expect("seeded fixture has a valid kickoff time");

    Match {
        id: format!("match-{}-{}", round, index + 1),
        home_team,
        away_team,
        kickoff,
        stadium: fixture.stadium.to_string(),
        round,
        status: MatchStatus::Scheduled,
        home_score: None,
        away_score: None,
    }
}

/// The statically seeded schedule: rounds 1-4, kickoff ascending per round.
pub fn seed_matches() -> Vec<Match> {
    let rounds: [&[Fixture]; 4] = [&ROUND_1, &ROUND_2, &ROUND_3, &ROUND_4];
    rounds
        .iter()
        .enumerate()
        .flat_map(|(round_index, fixtures)| {
            fixtures
                .iter()
                .enumerate()
                .map(move |(i, f)| build_match(f, round_index as u32 + 1, i))
        })
        .collect()
}
