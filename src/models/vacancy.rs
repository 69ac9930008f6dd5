use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::models::remote::{ref_name, Employer, NamedRef};
use crate::utils::markup::strip_markup;
use crate::utils::salary::format_salary;

const NOT_SPECIFIED: &str = "not specified";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Salary {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub currency: Option<String>,
    pub gross: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KeySkill {
    pub name: String,
}

/// Vacancy as returned by `/vacancies` and `/vacancies/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteVacancy {
    pub id: String,
    pub name: String,
    pub employer: Option<Employer>,
    pub salary: Option<Salary>,
    pub area: Option<NamedRef>,
    pub alternate_url: Option<String>,
    pub schedule: Option<NamedRef>,
    pub experience: Option<NamedRef>,
    pub employment: Option<NamedRef>,
    pub description: Option<String>,
    #[serde(default)]
    pub key_skills: Vec<KeySkill>,
    pub contacts: Option<JsonValue>,
}

impl RemoteVacancy {
    fn company(&self) -> String {
        self.employer
            .as_ref()
            .and_then(|e| e.name.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancySummary {
    pub id: String,
    pub name: String,
    pub company: String,
    pub salary: String,
    pub area: Option<String>,
    pub url: Option<String>,
    pub schedule: String,
    pub experience: String,
}

impl From<RemoteVacancy> for VacancySummary {
    fn from(v: RemoteVacancy) -> Self {
        Self {
            company: v.company(),
            salary: format_salary(v.salary.as_ref()),
            area: ref_name(&v.area),
            schedule: ref_name(&v.schedule).unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            experience: ref_name(&v.experience).unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            id: v.id,
            name: v.name,
            url: v.alternate_url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancySearchResult {
    pub found: i64,
    pub pages: i64,
    pub vacancies: Vec<VacancySummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacancyDetail {
    pub id: String,
    pub name: String,
    pub company: String,
    pub company_url: Option<String>,
    pub description: String,
    pub key_skills: Vec<String>,
    pub experience: Option<String>,
    pub employment: Option<String>,
    pub schedule: Option<String>,
    pub salary: String,
    pub salary_range: Option<Salary>,
    pub area: Option<String>,
    pub url: Option<String>,
    pub contacts: Option<JsonValue>,
}

impl From<RemoteVacancy> for VacancyDetail {
    fn from(v: RemoteVacancy) -> Self {
        Self {
            company: v.company(),
            company_url: v.employer.as_ref().and_then(|e| e.alternate_url.clone()),
            description: strip_markup(v.description.as_deref().unwrap_or_default()),
            key_skills: v.key_skills.into_iter().map(|s| s.name).collect(),
            experience: ref_name(&v.experience),
            employment: ref_name(&v.employment),
            schedule: ref_name(&v.schedule),
            salary: format_salary(v.salary.as_ref()),
            salary_range: v.salary,
            area: ref_name(&v.area),
            id: v.id,
            name: v.name,
            url: v.alternate_url,
            contacts: v.contacts,
        }
    }
}
