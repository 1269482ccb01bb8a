//! Student dataset: CSV loading, first-run seeding, and profile lookup.

mod lookup;

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use thiserror::Error;
use tracing::{info, warn};

use crate::models::student::StudentRecord;

pub use lookup::split_list;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset row {row}: {source}")]
    Row { row: usize, source: csv::Error },
}

/// Immutable, in-order collection of student records.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<StudentRecord>,
}

impl Dataset {
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Parses CSV content with a header row. Rows may be ragged.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let mut records = Vec::new();
        for (index, result) in reader.deserialize::<StudentRecord>().enumerate() {
            let record = result.map_err(|source| DatasetError::Row {
                row: index + 1,
                source,
            })?;
            records.push(record);
        }
        Ok(Self::new(records))
    }

    /// Reads the dataset at `path`, writing the sample dataset there first if the
    /// file does not exist yet.
    pub fn load_or_seed(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            warn!("Dataset {} not found, writing sample data", path.display());
            write_records(path, &sample_records())?;
        }

        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            "Loaded {} student records from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the first record matching a free-text query. See [`lookup::matches_query`].
    pub fn find_profile(&self, query: &str) -> Option<&StudentRecord> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|record| lookup::matches_query(record, &query))
    }

    /// Exact (trimmed) student id match.
    pub fn find_by_id(&self, student_id: &str) -> Option<&StudentRecord> {
        let student_id = student_id.trim();
        self.records
            .iter()
            .find(|record| record.student_id.trim() == student_id)
    }
}

fn write_records(path: &Path, records: &[StudentRecord]) -> Result<(), DatasetError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = WriterBuilder::new().from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// The three-student dataset written on first run.
pub fn sample_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            student_id: "1001".to_string(),
            name: "Aishwarya Iyer".to_string(),
            gpa: Some(9.06),
            marks_10th: Some(95.0),
            marks_12th: Some(92.0),
            skills: "Excel;Power BI;NumPy;JavaScript;SQL".to_string(),
            interested_domain: "Data".to_string(),
            career_suggestions: "Data Analyst;Business Analyst;Data Scientist;BI Developer"
                .to_string(),
            internships: "Analytics Intern at X;BI Intern at Y".to_string(),
            certifications: "Power BI Cert;Excel Advanced".to_string(),
        },
        StudentRecord {
            student_id: "1002".to_string(),
            name: "Aarav Kumar".to_string(),
            gpa: Some(8.2),
            marks_10th: Some(88.0),
            marks_12th: Some(86.0),
            skills: "Python;Machine Learning;SQL".to_string(),
            interested_domain: "AI".to_string(),
            career_suggestions: "ML Engineer;Data Scientist;AI Researcher;MLOps Engineer"
                .to_string(),
            internships: "ML Intern at Z".to_string(),
            certifications: "ML Nanodegree;Python Cert".to_string(),
        },
        StudentRecord {
            student_id: "1003".to_string(),
            name: "Priya Sharma".to_string(),
            gpa: Some(7.8),
            marks_10th: Some(85.0),
            marks_12th: Some(83.0),
            skills: "Java;Networks;Security".to_string(),
            interested_domain: "Cybersecurity".to_string(),
            career_suggestions:
                "Security Engineer;SOC Analyst;Penetration Tester;Security Consultant"
                    .to_string(),
            internships: "Security Intern at Q".to_string(),
            certifications: "CEH;Network+".to_string(),
        },
    ]
}
