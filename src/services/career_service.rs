use crate::{
    constants::career_catalog::{career_paths, domain_keywords},
    models::domain::{CareerDomain, CareerPath},
};

const MAX_SUGGESTED_DOMAINS: usize = 2;

/// Keyword heuristic mapping free-text queries to career domains.
#[derive(Default)]
pub struct CareerSuggestor;

impl CareerSuggestor {
    pub fn new() -> Self {
        Self
    }

    /// Up to two domains, strongest first. Ties go to the alphabetically
    /// earlier domain key.
    pub fn analyze_user_queries(&self, queries: &[String]) -> Vec<CareerDomain> {
        if queries.is_empty() {
            return vec![];
        }

        let text = queries.join(" ").to_lowercase();

        let mut scored: Vec<(CareerDomain, usize)> = CareerDomain::ALL
            .iter()
            .map(|domain| {
                let score: usize = domain_keywords(*domain)
                    .iter()
                    .map(|keyword| text.matches(keyword).count())
                    .sum();
                (*domain, score)
            })
            .filter(|(_, score)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        scored
            .into_iter()
            .take(MAX_SUGGESTED_DOMAINS)
            .map(|(domain, _)| domain)
            .collect()
    }

    /// The first path of each domain, falling back to the first web path.
    pub fn suggest_careers(&self, domains: &[CareerDomain]) -> Vec<CareerPath> {
        let suggestions: Vec<CareerPath> = domains
            .iter()
            .filter_map(|domain| career_paths(*domain).first().cloned())
            .take(MAX_SUGGESTED_DOMAINS)
            .collect();

        if !suggestions.is_empty() {
            return suggestions;
        }

        career_paths(CareerDomain::Web)
            .first()
            .cloned()
            .into_iter()
            .collect()
    }

    pub fn suggest_for_queries(&self, queries: &[String]) -> (Vec<CareerDomain>, Vec<CareerPath>) {
        let domains = self.analyze_user_queries(queries);
        let careers = self.suggest_careers(&domains);
        log::debug!(
            "Suggested {} careers from {} queries ({:?})",
            careers.len(),
            queries.len(),
            domains
        );
        (domains, careers)
    }
}
