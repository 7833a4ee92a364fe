use std::fmt;

use crate::cli::Period;

const API_ROOT: &str = "http://worldcup.sfg.io";

/// Country name to FIFA federation code, for every team in the tournament.
pub const FIFA_CODES: &[(&str, &str)] = &[
    ("Brazil", "BRA"),
    ("Croatia", "CRO"),
    ("Mexico", "MEX"),
    ("Cameroon", "CMR"),
    ("Spain", "ESP"),
    ("Netherlands", "NED"),
    ("Chile", "CHI"),
    ("Australia", "AUS"),
    ("Colombia", "COL"),
    ("Greece", "GRE"),
    ("Ivory Coast", "CIV"),
    ("Japan", "JPN"),
    ("Uruguay", "URU"),
    ("Costa-Rica", "CRC"),
    ("England", "ENG"),
    ("Italy", "ITA"),
    ("Switzerland", "SUI"),
    ("Ecuador", "ECU"),
    ("France", "FRA"),
    ("Honduras", "HON"),
    ("Argentina", "ARG"),
    ("Bosnia-Herzegovina", "BIH"),
    ("Iran", "IRN"),
    ("Nigeria", "NGA"),
    ("Germany", "GER"),
    ("Portugal", "POR"),
    ("Ghana", "GHA"),
    ("USA", "USA"),
    ("Belgium", "BEL"),
    ("Algeria", "ALG"),
    ("Russia", "RUS"),
    ("South Korea", "KOR"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCountry(pub String);

impl fmt::Display for UnknownCountry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized country name or FIFA code: {}", self.0)
    }
}

impl std::error::Error for UnknownCountry {}

/// Resolve a country name or FIFA code to its federation code.
/// Codes pass through unchanged; names are looked up in the fixed table.
pub fn country_code(country: &str) -> Result<&'static str, UnknownCountry> {
    FIFA_CODES
        .iter()
        .find(|&&(name, code)| code == country || name == country)
        .map(|&(_, code)| code)
        .ok_or_else(|| UnknownCountry(country.to_string()))
}

/// Listing printed when the country argument is not recognized.
pub fn code_listing() -> String {
    let mut out = String::from(
        "You should either give the name or FIFA country code of one of the following countries:\n",
    );
    for (name, code) in FIFA_CODES {
        out.push_str(&format!(" {name:<20} <--> {code}\n"));
    }
    out
}

/// 1-based group stage identifier for a label in A-H.
pub fn group_id(label: char) -> i64 {
    i64::from(label.to_ascii_uppercase() as u8 - b'A') + 1
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    AllMatches,
    Country(&'static str),
    Period(Period),
    GroupResults,
}

impl Endpoint {
    pub fn url(&self) -> String {
        match self {
            Endpoint::AllMatches => format!("{API_ROOT}/matches/?by_date=ASC"),
            Endpoint::Country(code) => format!("{API_ROOT}/matches/country?fifa_code={code}"),
            Endpoint::Period(period) => {
                format!("{API_ROOT}/matches/{}?by_date=ASC", period.as_str())
            }
            Endpoint::GroupResults => format!("{API_ROOT}/group_results"),
        }
    }
}
