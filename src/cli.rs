use clap::{Parser, ValueEnum};

/// World Cup results for your terminal. Uses the Soccer For Good API.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Name or FIFA code of the country
    #[arg(short, long, group = "selector")]
    pub country: Option<String>,

    /// Group (A-H) to show the standings for
    #[arg(short, long, group = "selector", value_parser = parse_group_label)]
    pub group: Option<char>,

    /// Time period to show the match results for
    #[arg(short, long, group = "selector", value_enum)]
    pub period: Option<Period>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Period {
    Today,
    Tomorrow,
    Current,
}

impl Period {
    /// Path suffix under `/matches/` for this period.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Tomorrow => "tomorrow",
            Period::Current => "current",
        }
    }
}

fn parse_group_label(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if ('A'..='H').contains(&c.to_ascii_uppercase()) => {
            Ok(c.to_ascii_uppercase())
        }
        _ => Err(format!("group must be a single letter A-H, got '{s}'")),
    }
}
