use crate::models::vacancy::Salary;

pub const SALARY_NOT_SPECIFIED: &str = "not specified";
pub const DEFAULT_CURRENCY: &str = "RUR";

/// Renders a salary range for display. Cover-letter prompts match on this
/// wording, keep the four forms stable.
pub fn format_salary(salary: Option<&Salary>) -> String {
    let Some(salary) = salary else {
        return SALARY_NOT_SPECIFIED.to_string();
    };
    let currency = salary.currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
    // hh.ru sends 0 for an unset bound on some legacy vacancies.
    let from = salary.from.filter(|v| *v > 0);
    let to = salary.to.filter(|v| *v > 0);

    match (from, to) {
        (Some(from), Some(to)) => format!("{from}-{to} {currency}"),
        (Some(from), None) => format!("from {from} {currency}"),
        (None, Some(to)) => format!("up to {to} {currency}"),
        (None, None) => SALARY_NOT_SPECIFIED.to_string(),
    }
}
