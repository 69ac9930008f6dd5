use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_AREA: &str = "113";
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

fn default_area() -> String {
    DEFAULT_AREA.to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

/// High-level vacancy search filters. Unset optional fields mean "don't filter".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SearchCriteria {
    #[serde(default)]
    #[validate(length(max = 512))]
    pub text: String,
    #[serde(default = "default_area")]
    #[validate(length(min = 1))]
    pub area: String,
    pub salary: Option<i64>,
    #[serde(default)]
    pub only_with_salary: bool,
    pub experience: Option<String>,
    pub employment: Option<String>,
    pub schedule: Option<String>,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    pub page: Option<u32>,
}

impl SearchCriteria {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            area: default_area(),
            salary: None,
            only_with_salary: false,
            experience: None,
            employment: None,
            schedule: None,
            per_page: DEFAULT_PER_PAGE,
            page: None,
        }
    }

    pub fn area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn salary(mut self, salary: i64) -> Self {
        self.salary = Some(salary);
        self
    }

    pub fn only_with_salary(mut self) -> Self {
        self.only_with_salary = true;
        self
    }

    pub fn experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn employment(mut self, employment: impl Into<String>) -> Self {
        self.employment = Some(employment.into());
        self
    }

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = Some(schedule.into());
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Translates criteria into `/vacancies` query parameters, in a stable order.
/// Optional filters are left out entirely when unset, empty or zero.
pub fn build_search_params(criteria: &SearchCriteria) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("text", criteria.text.clone()),
        ("area", criteria.area.clone()),
        ("per_page", criteria.per_page.clamp(1, MAX_PER_PAGE).to_string()),
    ];

    if let Some(page) = criteria.page {
        params.push(("page", page.to_string()));
    }
    if let Some(salary) = criteria.salary.filter(|s| *s > 0) {
        params.push(("salary", salary.to_string()));
    }
    if criteria.only_with_salary {
        params.push(("only_with_salary", "true".to_string()));
    }
    if let Some(experience) = non_empty(&criteria.experience) {
        params.push(("experience", experience.to_string()));
    }
    if let Some(employment) = non_empty(&criteria.employment) {
        params.push(("employment", employment.to_string()));
    }
    if let Some(schedule) = non_empty(&criteria.schedule) {
        params.push(("schedule", schedule.to_string()));
    }

    params
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn minimal_criteria_emit_only_required_params() {
        let params = build_search_params(&SearchCriteria::new("rust"));
        assert_eq!(
            params,
            vec![
                ("text", "rust".to_string()),
                ("area", "113".to_string()),
                ("per_page", "10".to_string()),
            ]
        );
    }

    #[test]
    fn falsy_optionals_are_omitted() {
        let mut criteria = SearchCriteria::new("rust").salary(0);
        criteria.experience = Some(String::new());
        criteria.schedule = Some("   ".into());
        let params = build_search_params(&criteria);
        for key in ["salary", "only_with_salary", "experience", "employment", "schedule", "page"] {
            assert_eq!(value(&params, key), None, "{key} should be omitted");
        }
    }

    #[test]
    fn supplied_optionals_are_included() {
        let criteria = SearchCriteria::new("rust")
            .area("1")
            .salary(250_000)
            .only_with_salary()
            .experience("between3And6")
            .employment("full")
            .schedule("remote")
            .page(2);
        let params = build_search_params(&criteria);
        assert_eq!(value(&params, "area"), Some("1"));
        assert_eq!(value(&params, "salary"), Some("250000"));
        assert_eq!(value(&params, "only_with_salary"), Some("true"));
        assert_eq!(value(&params, "experience"), Some("between3And6"));
        assert_eq!(value(&params, "employment"), Some("full"));
        assert_eq!(value(&params, "schedule"), Some("remote"));
        assert_eq!(value(&params, "page"), Some("2"));
    }

    #[test]
    fn per_page_is_clamped_to_one_through_hundred() {
        let per_page = |n| {
            let params = build_search_params(&SearchCriteria::new("x").per_page(n));
            value(&params, "per_page").map(str::to_string)
        };
        assert_eq!(per_page(500).as_deref(), Some("100"));
        assert_eq!(per_page(150).as_deref(), Some("100"));
        assert_eq!(per_page(100).as_deref(), Some("100"));
        assert_eq!(per_page(10).as_deref(), Some("10"));
        assert_eq!(per_page(0).as_deref(), Some("1"));
    }

    #[test]
    fn query_string_defaults_apply() {
        let criteria: SearchCriteria = serde_json::from_str(r#"{"text":"go"}"#).unwrap();
        assert_eq!(criteria, SearchCriteria::new("go"));
    }
}
