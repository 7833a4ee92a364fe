pub mod cli;
pub mod endpoint;
pub mod fetch;
pub mod model;
pub mod present;

use std::fmt;

use chrono::Utc;

use crate::cli::Cli;
use crate::endpoint::Endpoint;
use crate::model::matches::Match;
use crate::model::standing::GroupStanding;

#[derive(Debug)]
pub enum Error {
    UnknownCountry(endpoint::UnknownCountry),
    Fetch(fetch::FetchError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownCountry(e) => e.fmt(f),
            Error::Fetch(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::UnknownCountry(e) => Some(e),
            Error::Fetch(e) => Some(e),
        }
    }
}

impl From<endpoint::UnknownCountry> for Error {
    fn from(e: endpoint::UnknownCountry) -> Self {
        Error::UnknownCountry(e)
    }
}

impl From<fetch::FetchError> for Error {
    fn from(e: fetch::FetchError) -> Self {
        Error::Fetch(e)
    }
}

/// Fetch and render whatever the CLI selector asks for.
pub fn run(cli: &Cli) -> Result<(), Error> {
    if let Some(label) = cli.group {
        let group_id = endpoint::group_id(label);
        let standings: Vec<GroupStanding> = fetch::fetch(&Endpoint::GroupResults)?;
        print!("{}", present::group_header(label));
        for standing in standings.iter().filter(|s| s.group_id == Some(group_id)) {
            print!("{}", present::standing_row(standing));
        }
        return Ok(());
    }

    let endpoint = if let Some(country) = cli.country.as_deref() {
        Endpoint::Country(endpoint::country_code(country)?)
    } else if let Some(period) = cli.period {
        Endpoint::Period(period)
    } else {
        Endpoint::AllMatches
    };

    let now = Utc::now();
    let matches: Vec<Match> = fetch::fetch(&endpoint)?;
    for m in &matches {
        if let Some(block) = present::prettify(m, now) {
            println!("{block}");
        }
    }
    Ok(())
}
