use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Career domains, declared in alphabetical key order. Ranking ties are broken
/// by this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CareerDomain {
    Ai,
    Cloud,
    Data,
    Game,
    Mobile,
    Security,
    Web,
}

impl CareerDomain {
    pub const ALL: [CareerDomain; 7] = [
        CareerDomain::Ai,
        CareerDomain::Cloud,
        CareerDomain::Data,
        CareerDomain::Game,
        CareerDomain::Mobile,
        CareerDomain::Security,
        CareerDomain::Web,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CareerDomain::Ai => "ai",
            CareerDomain::Cloud => "cloud",
            CareerDomain::Data => "data",
            CareerDomain::Game => "game",
            CareerDomain::Mobile => "mobile",
            CareerDomain::Security => "security",
            CareerDomain::Web => "web",
        }
    }
}

impl fmt::Display for CareerDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for CareerDomain {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CareerDomain::ALL
            .into_iter()
            .find(|d| d.key() == s)
            .ok_or_else(|| AppError::ValidationError(format!("Unknown career domain '{}'", s)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPath {
    pub id: String,
    pub title: String,
    pub description: String,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub job_titles: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_sort_alphabetically_by_key() {
        let mut keys: Vec<&str> = CareerDomain::ALL.iter().map(|d| d.key()).collect();
        let declared = keys.clone();
        keys.sort_unstable();
        assert_eq!(keys, declared);

        let mut domains = CareerDomain::ALL.to_vec();
        domains.reverse();
        domains.sort();
        assert_eq!(domains, CareerDomain::ALL.to_vec());
    }

    #[test]
    fn domain_keys_round_trip_through_from_str() {
        for domain in CareerDomain::ALL {
            assert_eq!(domain.key().parse::<CareerDomain>().ok(), Some(domain));
        }
        assert!("blockchain".parse::<CareerDomain>().is_err());
    }
}
