//! Skill Fit Radar — pluggable scorer that measures a student's skills against the
//! required skills of their interested domain.
//!
//! Default: `KeywordSkillFitScorer` (pure-Rust, deterministic).
//! `AppState` holds an `Arc<dyn SkillFitScorer>`, chosen at startup.

use serde::{Deserialize, Serialize};

use crate::advisor::catalog::DomainCatalog;

// ────────────────────────────────────────────────────────────────────────────
// Output data model
// ────────────────────────────────────────────────────────────────────────────

/// Radar chart series. `labels[i]` pairs with `values[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillRadar {
    pub labels: Vec<String>,
    pub values: Vec<u8>, // 20 | 60 | 100
    /// Required skills with no evidence at all, in axis order.
    pub gaps: Vec<String>,
}

pub const EXACT_MATCH: u8 = 100;
pub const PARTIAL_MATCH: u8 = 60;
pub const NO_MATCH: u8 = 20;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the radar scoring backend without touching handlers.
pub trait SkillFitScorer: Send + Sync {
    fn score(&self, skills: &[String], domain: &str, catalog: &DomainCatalog) -> SkillRadar;
}

// ────────────────────────────────────────────────────────────────────────────
// KeywordSkillFitScorer
// ────────────────────────────────────────────────────────────────────────────

/// Algorithm, per required skill of the domain:
/// - exact (case-insensitive) match against a student skill → 100
/// - any word of the required skill found inside a student skill → 60
/// - otherwise → 20 and the skill is reported as a gap
pub struct KeywordSkillFitScorer;

impl SkillFitScorer for KeywordSkillFitScorer {
    fn score(&self, skills: &[String], domain: &str, catalog: &DomainCatalog) -> SkillRadar {
        compute_skill_fit(skills, catalog.required_skills(domain))
    }
}

fn compute_skill_fit(skills: &[String], required: &[String]) -> SkillRadar {
    let skills_lower: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    let mut radar = SkillRadar::default();
    for requirement in required {
        let value = match_strength(&skills_lower, requirement);
        if value == NO_MATCH {
            radar.gaps.push(requirement.clone());
        }
        radar.labels.push(requirement.clone());
        radar.values.push(value);
    }
    radar
}

fn match_strength(skills_lower: &[String], requirement: &str) -> u8 {
    let requirement_lower = requirement.to_lowercase();
    if skills_lower.iter().any(|s| *s == requirement_lower) {
        return EXACT_MATCH;
    }

    let partial = requirement_lower
        .split_whitespace()
        .any(|part| skills_lower.iter().any(|s| s.contains(part)));

    if partial {
        PARTIAL_MATCH
    } else {
        NO_MATCH
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_match_scores_full() {
        let radar = KeywordSkillFitScorer.score(
            &skills(&["python", "Statistics"]),
            "AI",
            &DomainCatalog::default(),
        );
        assert_eq!(radar.labels[0], "Python");
        assert_eq!(radar.values[0], EXACT_MATCH);
        assert_eq!(radar.values[3], EXACT_MATCH, "Statistics");
    }

    #[test]
    fn test_word_overlap_scores_partial() {
        // "Machine Learning" required; student lists "Learning Analytics"
        let radar = compute_skill_fit(
            &skills(&["Learning Analytics"]),
            &skills(&["Machine Learning"]),
        );
        assert_eq!(radar.values, vec![PARTIAL_MATCH]);
        assert!(radar.gaps.is_empty());
    }

    #[test]
    fn test_no_evidence_is_gap() {
        let radar = compute_skill_fit(&skills(&["Java"]), &skills(&["Linux", "Firewalls"]));
        assert_eq!(radar.values, vec![NO_MATCH, NO_MATCH]);
        assert_eq!(radar.gaps, vec!["Linux", "Firewalls"]);
    }

    #[test]
    fn test_sample_data_student_radar() {
        let radar = KeywordSkillFitScorer.score(
            &skills(&["Excel", "Power BI", "NumPy", "JavaScript", "SQL"]),
            "Data",
            &DomainCatalog::default(),
        );
        assert_eq!(
            radar.labels,
            vec!["SQL", "Excel", "Power BI", "Tableau", "Pandas", "NumPy", "Statistics"]
        );
        assert_eq!(radar.values, vec![100, 100, 100, 20, 20, 100, 20]);
        assert_eq!(radar.gaps, vec!["Tableau", "Pandas", "Statistics"]);
    }

    #[test]
    fn test_unknown_domain_is_empty() {
        let radar =
            KeywordSkillFitScorer.score(&skills(&["Rust"]), "Robotics", &DomainCatalog::default());
        assert_eq!(radar, SkillRadar::default());
    }

    #[test]
    fn test_values_aligned_with_labels() {
        let radar = KeywordSkillFitScorer.score(&[], "Web Development", &DomainCatalog::default());
        assert_eq!(radar.labels.len(), radar.values.len());
        assert_eq!(radar.gaps.len(), radar.labels.len());
    }
}
