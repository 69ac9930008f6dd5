use serde::{Deserialize, Serialize};

use crate::models::remote::{ref_name, Employer, NamedRef};

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteNegotiationVacancy {
    pub id: Option<String>,
    pub name: Option<String>,
    pub employer: Option<Employer>,
}

/// Negotiation (application thread) as returned by `/negotiations`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteNegotiation {
    pub id: String,
    pub state: Option<NamedRef>,
    pub vacancy: Option<RemoteNegotiationVacancy>,
    pub created_at: Option<String>,
    #[serde(default)]
    pub has_updates: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Negotiation {
    pub id: String,
    pub state: Option<String>,
    pub vacancy_id: Option<String>,
    pub vacancy_name: Option<String>,
    pub company: Option<String>,
    pub created_at: Option<String>,
    pub has_updates: bool,
}

impl From<RemoteNegotiation> for Negotiation {
    fn from(n: RemoteNegotiation) -> Self {
        let vacancy = n.vacancy;
        Self {
            state: ref_name(&n.state),
            vacancy_id: vacancy.as_ref().and_then(|v| v.id.clone()),
            vacancy_name: vacancy.as_ref().and_then(|v| v.name.clone()),
            company: vacancy
                .as_ref()
                .and_then(|v| v.employer.as_ref())
                .and_then(|e| e.name.clone()),
            id: n.id,
            created_at: n.created_at,
            has_updates: n.has_updates,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationList {
    pub total: usize,
    pub negotiations: Vec<Negotiation>,
}
