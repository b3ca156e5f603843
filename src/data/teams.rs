use lazy_static::lazy_static;

use crate::models::team::{Team, TeamColors};

fn team(id: &str, name: &str, short_name: &str, primary: &str, secondary: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        short_name: short_name.to_string(),
        display_name: None,
        colors: TeamColors {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        },
    }
}

lazy_static! {
    /// The 20 Série A 2026 clubs.
    pub static ref TEAMS: Vec<Team> = vec![
        team("1", "Flamengo", "FLA", "#C5261B", "#000000"),
        team("2", "Palmeiras", "PAL", "#006437", "#FFFFFF"),
        team("3", "Botafogo", "BOT", "#000000", "#FFFFFF"),
        team("4", "Atlético-MG", "CAM", "#000000", "#FFFFFF"),
        team("5", "Corinthians", "COR", "#000000", "#FFFFFF"),
        team("6", "São Paulo", "SAO", "#C5261B", "#000000"),
        team("7", "Fluminense", "FLU", "#870E1C", "#006437"),
        team("8", "Grêmio", "GRE", "#0D6EFD", "#000000"),
        team("9", "Internacional", "INT", "#C5261B", "#FFFFFF"),
        team("10", "Vasco da Gama", "VAS", "#000000", "#FFFFFF"),
        team("11", "Santos", "SAN", "#FFFFFF", "#000000"),
        team("12", "Cruzeiro", "CRU", "#0D6EFD", "#FFFFFF"),
        Team {
            display_name: Some("RB Bragantino".to_string()),
            ..team("13", "Red Bull Bragantino", "RBB", "#C5261B", "#FFFFFF")
        },
        team("14", "Bahia", "BAH", "#0D6EFD", "#C5261B"),
        team("15", "Vitória", "VIT", "#C5261B", "#000000"),
        team("16", "Mirassol", "MIR", "#FFD700", "#006437"),
        team("17", "Athletico-PR", "CAP", "#C5261B", "#000000"),
        team("18", "Chapecoense", "CHA", "#006437", "#FFFFFF"),
        team("19", "Coritiba", "CFC", "#006437", "#FFFFFF"),
        team("20", "Clube do Remo", "REM", "#006437", "#FFFFFF"),
    ];
}

/// Tolerant lookup used when reconciling free-text names from the feed:
/// containment on the full name, exact short code, or hyphen-insensitive
/// equality ("Atlético MG" vs "Atlético-MG").
pub fn team_by_name(name: &str) -> Option<&'static Team> {
    let needle = name.to_lowercase();
    TEAMS.iter().find(|t| {
        t.name.to_lowercase().contains(&needle)
            || t.short_name.to_lowercase() == needle
            || t.name.to_lowercase().replace('-', " ") == needle.replace('-', " ")
    })
}
