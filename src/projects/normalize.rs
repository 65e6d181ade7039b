// Repository-to-project normalization.
// Filters forks and archived repos and shapes the rest for the portfolio grid.

use chrono::SecondsFormat;

use crate::github::Repository;

use super::Project;

/// Maximum number of projects shown.
pub const MAX_PROJECTS: usize = 10;
/// Maximum description length in characters.
pub const DESCRIPTION_LIMIT: usize = 120;
/// Maximum number of tech tags per project.
pub const MAX_TECH: usize = 5;
/// Placeholder for repositories without a description.
pub const NO_DESCRIPTION: &str = "No description";

/// Keep the first ten original, active repositories and normalize them.
///
/// Input order is preserved; GitHub already sorts by last update.
pub fn normalize_repos(repos: Vec<Repository>) -> Vec<Project> {
    repos
        .into_iter()
        .filter(|repo| !repo.fork && !repo.archived)
        .take(MAX_PROJECTS)
        .map(to_project)
        .collect()
}

/// Build a single project card from a repository.
pub fn to_project(repo: Repository) -> Project {
    Project {
        description: describe(repo.description.as_deref()),
        tech: collect_tech(repo.language.as_deref(), &repo.topics),
        stars: repo.stargazers_count,
        url: repo.html_url,
        updated_at: repo
            .updated_at
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_default(),
        homepage: repo.homepage.unwrap_or_default(),
        name: repo.name,
    }
}

fn describe(description: Option<&str>) -> String {
    match description {
        Some(text) if !text.trim().is_empty() => text.chars().take(DESCRIPTION_LIMIT).collect(),
        _ => NO_DESCRIPTION.to_string(),
    }
}

/// Primary language first, then topics, skipping case-insensitive repeats.
fn collect_tech(language: Option<&str>, topics: &[String]) -> Vec<String> {
    let mut tech: Vec<String> = Vec::with_capacity(MAX_TECH);

    let candidates = language
        .into_iter()
        .chain(topics.iter().map(String::as_str))
        .filter(|tag| !tag.trim().is_empty());

    for tag in candidates {
        if tech.len() == MAX_TECH {
            break;
        }
        let folded = tag.to_lowercase();
        if !tech.iter().any(|seen| seen.to_lowercase() == folded) {
            tech.push(tag.to_string());
        }
    }

    tech
}
