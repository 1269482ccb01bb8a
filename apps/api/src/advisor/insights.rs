//! Assembles the full insight payload for one student record.

use serde::{Deserialize, Serialize};

use crate::advisor::careers::{career_weights, top_careers_phrase, CareerWeight};
use crate::advisor::catalog::{DomainCatalog, RoadmapStep};
use crate::advisor::performance::{performance_level, Performance, ScoreWeights};
use crate::advisor::skill_fit::{SkillFitScorer, SkillRadar};
use crate::models::student::StudentRecord;

const SUMMARY_TOP_CAREERS: usize = 3;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Marks {
    #[serde(rename = "10th")]
    pub tenth: Option<f64>,
    #[serde(rename = "12th")]
    pub twelfth: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insights {
    pub student_id: String,
    pub name: String,
    pub gpa: Option<f64>,
    pub marks: Marks,
    pub skills: Vec<String>,
    pub domain: String,
    pub career_suggestions: Vec<CareerWeight>,
    pub internships: Vec<String>,
    pub certifications: Vec<String>,
    pub performance: Performance,
    pub radar: SkillRadar,
    pub summary_text: String,
    pub roadmap: Vec<RoadmapStep>,
}

pub fn build_insights(
    record: &StudentRecord,
    catalog: &DomainCatalog,
    scorer: &dyn SkillFitScorer,
) -> Insights {
    let skills = record.skill_list();
    let domain = record.domain().to_string();
    let careers = career_weights(&record.career_list());

    let performance = performance_level(
        record.gpa,
        record.marks_10th,
        record.marks_12th,
        &ScoreWeights::default(),
    );
    let radar = scorer.score(&skills, &domain, catalog);

    let mut internships = record.internship_list();
    if internships.is_empty() {
        internships = catalog.default_internships(&domain).to_vec();
    }
    let mut certifications = record.certification_list();
    if certifications.is_empty() {
        certifications = catalog.default_certifications(&domain).to_vec();
    }

    let summary_text = format!(
        "Hi {}. Based on your profile (G P A {}), top suggested careers include: {}. Your performance level is {}.",
        record.name,
        display_number(record.gpa),
        top_careers_phrase(&careers, SUMMARY_TOP_CAREERS),
        performance.level,
    );

    Insights {
        student_id: record.student_id.clone(),
        name: record.name.clone(),
        gpa: record.gpa,
        marks: Marks {
            tenth: record.marks_10th,
            twelfth: record.marks_12th,
        },
        skills,
        domain: domain.clone(),
        career_suggestions: careers,
        internships,
        certifications,
        performance,
        radar,
        summary_text,
        roadmap: catalog.roadmap(&domain).to_vec(),
    }
}

/// Renders an optional figure for prose and reports; absent values show as `N/A`.
/// Whole numbers keep one decimal (`95.0`), matching how the dataset reads.
pub fn display_number(value: Option<f64>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{v:.1}"),
        Some(v) => v.to_string(),
    }
}
