//! Builds a structured job description from a handful of employer inputs.
//!
//! Deterministic: the same input always yields the same description.

use serde::{Deserialize, Serialize};

use crate::descriptions::templates::{
    skill_responsibilities, Culture, ExperienceLevel, Industry,
};

const MAX_RESPONSIBILITIES: usize = 7;
const MAX_REQUIRED_SKILLS: usize = 6;
const MAX_BENEFITS: usize = 5;
const DEFAULT_COMPANY: &str = "Your Company";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TemplateInput {
    pub job_title: String,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub experience: Option<ExperienceLevel>,
    pub skills: Vec<String>,
    pub culture: Option<Culture>,
    pub special_requirements: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDescription {
    pub title: String,
    pub about: String,
    pub responsibilities: Vec<String>,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub experience: String,
    pub benefits: Vec<String>,
    pub about_company: String,
    pub special_requirements: String,
}

pub fn generate_job_description(input: &TemplateInput) -> GeneratedDescription {
    let company = input
        .company
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_COMPANY);
    let industry = input
        .industry
        .as_deref()
        .map(Industry::from_name)
        .unwrap_or_default();
    let experience = input.experience.unwrap_or_default();
    let culture = input.culture.unwrap_or_default();

    // skill-specific lines first, then the level's generic duties
    let responsibilities: Vec<String> = input
        .skills
        .iter()
        .flat_map(|s| skill_responsibilities(s).iter())
        .chain(experience.duties().iter())
        .take(MAX_RESPONSIBILITIES)
        .map(|s| s.to_string())
        .collect();

    let split = input.skills.len().min(MAX_REQUIRED_SKILLS);
    let (required, preferred) = input.skills.split_at(split);

    let [lead, detail] = industry.paragraphs();

    GeneratedDescription {
        title: format!("{} at {company}", input.job_title),
        about: format!("{lead} {detail}"),
        responsibilities,
        required_skills: required.to_vec(),
        preferred_skills: preferred.to_vec(),
        experience: experience.requirement_text().to_string(),
        benefits: culture
            .benefits()
            .iter()
            .take(MAX_BENEFITS)
            .map(|s| s.to_string())
            .collect(),
        about_company: format!("At {company}, we focus on building products that matter."),
        special_requirements: input.special_requirements.clone().unwrap_or_default(),
    }
}
