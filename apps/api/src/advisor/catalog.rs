//! Static per-domain knowledge: radar axes, roadmaps, and fallback internships/certifications.

use serde::{Deserialize, Serialize};

/// A single roadmap milestone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    pub step: String,
    pub desc: String,
}

#[derive(Debug, Clone)]
pub struct DomainProfile {
    pub name: String,
    /// Radar axes, in display order.
    pub required_skills: Vec<String>,
    pub roadmap: Vec<RoadmapStep>,
    pub default_internships: Vec<String>,
    pub default_certifications: Vec<String>,
}

/// Lookup table of domain profiles. Names compare case-insensitively.
#[derive(Debug, Clone)]
pub struct DomainCatalog {
    domains: Vec<DomainProfile>,
    fallback_roadmap: String,
}

const FALLBACK_DOMAIN: &str = "Data";

impl DomainCatalog {
    pub fn new(domains: Vec<DomainProfile>, fallback_roadmap: impl Into<String>) -> Self {
        Self {
            domains,
            fallback_roadmap: fallback_roadmap.into(),
        }
    }

    pub fn get(&self, domain: &str) -> Option<&DomainProfile> {
        let domain = domain.trim();
        self.domains
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(domain))
    }

    pub fn required_skills(&self, domain: &str) -> &[String] {
        self.get(domain)
            .map(|d| d.required_skills.as_slice())
            .unwrap_or_default()
    }

    /// Roadmap for the domain, or the fallback domain's roadmap when unknown.
    pub fn roadmap(&self, domain: &str) -> &[RoadmapStep] {
        self.get(domain)
            .or_else(|| self.get(&self.fallback_roadmap))
            .map(|d| d.roadmap.as_slice())
            .unwrap_or_default()
    }

    pub fn default_internships(&self, domain: &str) -> &[String] {
        self.get(domain)
            .map(|d| d.default_internships.as_slice())
            .unwrap_or_default()
    }

    pub fn default_certifications(&self, domain: &str) -> &[String] {
        self.get(domain)
            .map(|d| d.default_certifications.as_slice())
            .unwrap_or_default()
    }

    pub fn domain_names(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(|d| d.name.as_str())
    }
}

impl Default for DomainCatalog {
    fn default() -> Self {
        Self::new(
            vec![
                domain(
                    "AI",
                    &["Python", "Machine Learning", "Deep Learning", "Statistics", "TensorFlow", "PyTorch"],
                    &[
                        ("Learn Python + ML basics", "Cover Python, statistics, and ML frameworks"),
                        ("Deep Learning Projects", "Work on CNN, NLP projects"),
                        ("Internship in AI/ML", "Apply AI concepts in real-world tasks"),
                        ("Certifications", "TensorFlow, AWS ML Specialty"),
                        ("Placement Prep", "Mock interviews + case studies"),
                    ],
                    &["AI Intern at Google", "ML Intern at TCS"],
                    &["AWS ML Specialty", "TensorFlow Developer"],
                ),
                domain(
                    "Data",
                    &["SQL", "Excel", "Power BI", "Tableau", "Pandas", "NumPy", "Statistics"],
                    &[
                        ("Excel + SQL Mastery", "Learn query optimization & reporting"),
                        ("Visualization Projects", "Power BI / Tableau dashboards"),
                        ("Internship in Data Analytics", "Business Analyst or Data Analyst roles"),
                        ("Certifications", "Google Data Analytics, Power BI Cert"),
                        ("Placement Prep", "Case study solving, mock interviews"),
                    ],
                    &["Analytics Intern at Deloitte", "BI Developer Intern at Infosys"],
                    &["Google Data Analytics", "Power BI Certification"],
                ),
                domain(
                    "Cybersecurity",
                    &["Linux", "Networking", "Ethical Hacking", "Firewalls", "Cryptography"],
                    &[
                        ("Networking + OS Fundamentals", "Linux, Windows security basics"),
                        ("Hands-on Projects", "Firewalls, intrusion detection labs"),
                        ("Internship in Security", "SOC or PenTest roles"),
                        ("Certifications", "CEH, CompTIA Security+"),
                        ("Placement Prep", "CTF challenges, resume building"),
                    ],
                    &["SOC Analyst Intern", "Network Security Intern"],
                    &["CEH", "CompTIA Security+"],
                ),
                domain(
                    "Web Development",
                    &["HTML", "CSS", "JavaScript", "React", "Node.js"],
                    &[
                        ("Frontend Skills", "Master HTML, CSS, JavaScript"),
                        ("Backend Basics", "Learn Node.js, FastAPI, or Django"),
                        ("Internship in Web Dev", "Work as a frontend or full-stack intern"),
                        ("Certifications", "ReactJS, AWS Developer"),
                        ("Placement Prep", "LeetCode practice, mock interviews"),
                    ],
                    &["Frontend Intern at Startup", "Full-Stack Intern at Wipro"],
                    &["ReactJS Certification", "AWS Developer Associate"],
                ),
            ],
            FALLBACK_DOMAIN,
        )
    }
}

fn domain(
    name: &str,
    required_skills: &[&str],
    roadmap: &[(&str, &str)],
    internships: &[&str],
    certifications: &[&str],
) -> DomainProfile {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    DomainProfile {
        name: name.to_string(),
        required_skills: owned(required_skills),
        roadmap: roadmap
            .iter()
            .map(|(step, desc)| RoadmapStep {
                step: step.to_string(),
                desc: desc.to_string(),
            })
            .collect(),
        default_internships: owned(internships),
        default_certifications: owned(certifications),
    }
}
