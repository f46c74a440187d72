//! Offline sample rows: a fixed ten-team 2018 season.

use super::HistoryRow;

#[allow(clippy::too_many_arguments)]
fn row(
    owner: &str,
    team_name: &str,
    (win, loss): (u32, u32),
    final_standing: u32,
    (points_for, points_against): (f64, f64),
    (acquisitions, trades, drops): (u32, u32, u32),
    (streak_length, streak_type): (u32, &str),
    playoff_seed: u32,
) -> HistoryRow {
    HistoryRow {
        owner: owner.to_string(),
        year: 2018,
        team_name: team_name.to_string(),
        win,
        loss,
        draws: 0,
        final_standing,
        points_for,
        points_against,
        acquisitions,
        trades,
        drops,
        streak_length,
        streak_type: streak_type.to_string(),
        playoff_seed,
    }
}

/// Deterministic rows written in offline mode.
pub fn offline_rows() -> Vec<HistoryRow> {
    vec![
        row(
            "jessie marshall",
            "Team 1",
            (10, 3),
            4,
            (1276.88, 1038.22),
            (21, 1, 22),
            (1, "WIN"),
            2,
        ),
        row(
            "Bailey Zambuto",
            "Team 2",
            (6, 7),
            6,
            (1019.6, 1028.58),
            (0, 0, 0),
            (1, "LOSS"),
            6,
        ),
        row(
            "Jhonatan De la Cruz",
            "FANTASY GOD",
            (2, 11),
            7,
            (884.18, 1151.84),
            (1, 0, 1),
            (3, "LOSS"),
            10,
        ),
        row(
            "Leon Law",
            "THE KING",
            (8, 5),
            2,
            (1058.88, 1075.06),
            (0, 0, 0),
            (3, "WIN"),
            4,
        ),
        row(
            "Eddie Rivera",
            "Team 5",
            (4, 9),
            10,
            (1006.94, 1149.5),
            (0, 0, 0),
            (1, "WIN"),
            9,
        ),
        row(
            "Tresa Omara",
            "Team Viking Queen",
            (5, 8),
            5,
            (1139.74, 1252.62),
            (41, 0, 41),
            (1, "LOSS"),
            8,
        ),
        row(
            "james czarnowski",
            "Team 7",
            (10, 3),
            3,
            (1344.8, 1071.9),
            (16, 1, 15),
            (4, "WIN"),
            1,
        ),
        row(
            "Michael Dungo",
            "Team 8",
            (9, 4),
            1,
            (1402.72, 1191.54),
            (30, 0, 30),
            (1, "LOSS"),
            3,
        ),
        row(
            "Lisa Mizrachi",
            "Team Mizrachi",
            (6, 7),
            8,
            (1070.94, 1281.2),
            (0, 0, 0),
            (1, "WIN"),
            5,
        ),
        row(
            "Wes Harris",
            "Team 10",
            (5, 8),
            9,
            (1278.92, 1243.14),
            (21, 0, 21),
            (2, "LOSS"),
            7,
        ),
    ]
}
