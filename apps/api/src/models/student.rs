use serde::{Deserialize, Serialize};

use crate::dataset::split_list;

/// One row of the student dataset.
///
/// Text columns default to the empty string when absent. Numeric columns read as
/// `None` when the cell is empty or not a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Student_ID", default)]
    pub student_id: String,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "GPA", default, deserialize_with = "csv::invalid_option")]
    pub gpa: Option<f64>,
    #[serde(
        rename = "10th_Marks",
        alias = "10th Marks",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub marks_10th: Option<f64>,
    #[serde(
        rename = "12th_Marks",
        alias = "12th Marks",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub marks_12th: Option<f64>,
    #[serde(rename = "Skills", default)]
    pub skills: String,
    #[serde(rename = "Interested_Domain", default)]
    pub interested_domain: String,
    #[serde(rename = "Career_Suggestions", default)]
    pub career_suggestions: String,
    #[serde(rename = "Internships", default)]
    pub internships: String,
    #[serde(rename = "Certifications", default)]
    pub certifications: String,
}

impl StudentRecord {
    pub fn skill_list(&self) -> Vec<String> {
        split_list(&self.skills)
    }

    pub fn career_list(&self) -> Vec<String> {
        split_list(&self.career_suggestions)
    }

    pub fn internship_list(&self) -> Vec<String> {
        split_list(&self.internships)
    }

    pub fn certification_list(&self) -> Vec<String> {
        split_list(&self.certifications)
    }

    pub fn domain(&self) -> &str {
        self.interested_domain.trim()
    }
}
