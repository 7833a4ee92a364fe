use chrono::{DateTime, Duration, Utc};
use chrono_humanize::HumanTime;
use colored::Colorize;

use crate::model::matches::Match;
use crate::model::standing::GroupStanding;

pub const SCREEN_WIDTH: usize = 68;
/// Regulation match length in seconds.
const MATCH_SECONDS: i64 = 90 * 60;

const BAR_CHAR: &str = "-";
const BAR_SEPARATOR: &str = "o";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Future,
    Now,
    Past,
}

/// Classify a match by the seconds elapsed since kickoff (negative before).
pub fn classify(elapsed_secs: i64) -> Status {
    if elapsed_secs <= 0 {
        Status::Future
    } else if elapsed_secs >= MATCH_SECONDS {
        Status::Past
    } else {
        Status::Now
    }
}

/// Display percentage for the progress bar, truncated toward zero.
pub fn progress_percent(status: Status, elapsed_secs: i64) -> i64 {
    match status {
        Status::Future => 0,
        Status::Past => 100,
        Status::Now => elapsed_secs * 100 / MATCH_SECONDS,
    }
}

/// Fixed-width progress bar. Filled up to the separator, empty after it;
/// always exactly SCREEN_WIDTH characters wide.
pub fn progress_bar(percentage: i64) -> String {
    if percentage <= 0 {
        return BAR_CHAR.repeat(SCREEN_WIDTH).white().bold().to_string();
    }
    if percentage >= 100 {
        return BAR_CHAR.repeat(SCREEN_WIDTH).green().bold().to_string();
    }

    // At least one column is always spent on the separator, so low
    // percentages cannot underflow the filled segment.
    let completed = ((SCREEN_WIDTH as i64 * percentage / 100).max(1)) as usize;

    format!(
        "{}{}{}",
        BAR_CHAR.repeat(completed - 1).green().bold(),
        BAR_SEPARATOR.green().bold(),
        BAR_CHAR.repeat(SCREEN_WIDTH - completed).white().bold(),
    )
}

/// Humanized delta for the given elapsed seconds: "3 hours ago" for matches
/// already kicked off, "in 2 days" for upcoming ones.
pub fn relative(elapsed_secs: i64) -> String {
    HumanTime::from(Duration::seconds(-elapsed_secs)).to_string()
}

fn status_line(m: &Match, status: Status, elapsed_secs: i64) -> String {
    match status {
        Status::Now => format!("Being played now: {} minutes gone", elapsed_secs / 60),
        Status::Past => {
            let result = match m.winner.as_deref() {
                Some(winner) if winner != "Draw" => format!("{winner} won"),
                _ => "Draw".to_string(),
            };
            format!("Played {}. {}", relative(elapsed_secs), result)
        }
        Status::Future => format!("Will be played {}", relative(elapsed_secs)),
    }
}

fn goals(count: Option<i64>) -> String {
    count.map_or_else(|| "-".to_string(), |g| g.to_string())
}

/// Render one match as a colorized block: scoreline, progress bar, status.
/// Returns None when the kickoff timestamp does not parse.
pub fn prettify(m: &Match, now: DateTime<Utc>) -> Option<String> {
    let kickoff = m.kickoff()?;
    let elapsed_secs = now.signed_duration_since(kickoff).num_seconds();
    let status = classify(elapsed_secs);
    let percentage = progress_percent(status, elapsed_secs);

    let scoreline = format!(
        "{:<30} {} - {} {:>30}",
        m.home_team.country,
        goals(m.home_team.goals),
        goals(m.away_team.goals),
        m.away_team.country,
    );
    let scoreline = match status {
        Status::Future => scoreline.white(),
        Status::Now | Status::Past => scoreline.bright_green().bold(),
    };

    Some(format!(
        "\n    {}\n    {}\n    \u{26BD}  {}\n",
        scoreline,
        progress_bar(percentage),
        status_line(m, status, elapsed_secs).white(),
    ))
}

/// Header block printed once before the rows of a group table.
pub fn group_header(label: char) -> String {
    format!(
        "    GROUP {}\n    {}\n    {:<22} | {:<5} | {:<6} | {:<9} | {:<13} | {}\n",
        label,
        "-".repeat(75),
        "Country",
        "Wins",
        "Losses",
        "Goals For",
        "Goals Against",
        "Out?",
    )
}

/// One group standing row followed by a rule.
pub fn standing_row(s: &GroupStanding) -> String {
    format!(
        "    {:<22} | {:5} | {:6} | {:9} | {:13} | {}\n    {}\n",
        s.country,
        s.wins,
        s.losses,
        s.goals_for,
        s.goals_against,
        s.knocked_out,
        "-".repeat(SCREEN_WIDTH),
    )
}
