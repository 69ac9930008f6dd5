use serde::{Deserialize, Serialize};

use crate::models::remote::{ref_name, NamedRef};
use crate::utils::markup::truncate_chars;

const EXPERIENCE_DESCRIPTION_LIMIT: usize = 500;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TotalExperience {
    #[serde(default)]
    pub months: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSalary {
    pub amount: Option<i64>,
    pub currency: Option<String>,
}

/// Resume as returned by `/resumes/mine` and `/resumes/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteResume {
    pub id: String,
    pub title: Option<String>,
    pub status: Option<NamedRef>,
    pub alternate_url: Option<String>,
    #[serde(default)]
    pub total_views: i64,
    #[serde(default)]
    pub new_views: i64,
    #[serde(default)]
    pub skill_set: Vec<String>,
    #[serde(default)]
    pub experience: Vec<RemoteExperience>,
    pub total_experience: Option<TotalExperience>,
    pub salary: Option<ResumeSalary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeSummary {
    pub id: String,
    pub title: Option<String>,
    pub status: String,
    pub url: Option<String>,
    pub total_views: i64,
    pub new_views: i64,
}

impl From<RemoteResume> for ResumeSummary {
    fn from(r: RemoteResume) -> Self {
        Self {
            status: ref_name(&r.status).unwrap_or_else(|| "unknown".to_string()),
            id: r.id,
            title: r.title,
            url: r.alternate_url,
            total_views: r.total_views,
            new_views: r.new_views,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: Option<String>,
    pub position: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeDetail {
    pub id: String,
    pub title: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub total_experience: i64,
    pub desired_salary: Option<String>,
}

impl From<RemoteResume> for ResumeDetail {
    fn from(r: RemoteResume) -> Self {
        let desired_salary = r.salary.as_ref().and_then(|s| {
            s.amount.map(|amount| {
                format!("{} {}", amount, s.currency.as_deref().unwrap_or("RUR"))
            })
        });
        Self {
            id: r.id,
            title: r.title,
            skills: r.skill_set,
            experience: r
                .experience
                .into_iter()
                .map(|exp| ExperienceEntry {
                    company: exp.company,
                    position: exp.position,
                    description: truncate_chars(
                        exp.description.as_deref().unwrap_or_default(),
                        EXPERIENCE_DESCRIPTION_LIMIT,
                    ),
                })
                .collect(),
            total_experience: r.total_experience.map(|t| t.months).unwrap_or(0),
            desired_salary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_defaults_missing_status_and_views() {
        let raw: RemoteResume = serde_json::from_value(json!({
            "id": "abc",
            "title": "Rust engineer",
            "alternate_url": "https://hh.ru/resume/abc"
        }))
        .unwrap();
        let summary = ResumeSummary::from(raw);
        assert_eq!(summary.status, "unknown");
        assert_eq!(summary.total_views, 0);
    }

    #[test]
    fn detail_truncates_long_experience_descriptions() {
        let raw: RemoteResume = serde_json::from_value(json!({
            "id": "abc",
            "skill_set": ["Rust", "Tokio"],
            "experience": [{
                "company": "Acme",
                "position": "Dev",
                "description": "x".repeat(900)
            }],
            "total_experience": { "months": 42 },
            "salary": { "amount": 250000, "currency": "RUR" }
        }))
        .unwrap();
        let detail = ResumeDetail::from(raw);
        assert_eq!(detail.experience[0].description.chars().count(), 500);
        assert_eq!(detail.total_experience, 42);
        assert_eq!(detail.desired_salary.as_deref(), Some("250000 RUR"));
    }
}
