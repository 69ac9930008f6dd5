//! Popular search filter values, served without a network round trip.

use serde_json::{json, Value as JsonValue};

pub const AREAS: &[(&str, &str)] = &[
    ("113", "Russia (all regions)"),
    ("1", "Moscow"),
    ("2", "Saint Petersburg"),
    ("1001", "Moscow and Moscow Oblast"),
    ("2019", "Novosibirsk"),
    ("88", "Kazan"),
    ("66", "Nizhny Novgorod"),
    ("3", "Yekaterinburg"),
    ("54", "Krasnoyarsk"),
    ("104", "Krasnodar"),
    ("68", "Samara"),
    ("76", "Rostov-on-Don"),
    ("4", "Novosibirsk Oblast"),
];

pub const EXPERIENCE: &[(&str, &str)] = &[
    ("noExperience", "No experience"),
    ("between1And3", "1 to 3 years"),
    ("between3And6", "3 to 6 years"),
    ("moreThan6", "More than 6 years"),
];

pub const EMPLOYMENT: &[(&str, &str)] = &[
    ("full", "Full time"),
    ("part", "Part time"),
    ("project", "Project work"),
    ("volunteer", "Volunteering"),
    ("probation", "Internship"),
];

pub const SCHEDULE: &[(&str, &str)] = &[
    ("fullDay", "Full day"),
    ("shift", "Shift work"),
    ("flexible", "Flexible schedule"),
    ("remote", "Remote work"),
    ("flyInFlyOut", "Fly-in fly-out"),
];

fn to_object(entries: &[(&str, &str)]) -> JsonValue {
    entries
        .iter()
        .map(|(id, name)| (id.to_string(), json!(name)))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

pub fn areas() -> JsonValue {
    to_object(AREAS)
}

pub fn dictionaries() -> JsonValue {
    json!({
        "experience": to_object(EXPERIENCE),
        "employment": to_object(EMPLOYMENT),
        "schedule": to_object(SCHEDULE),
    })
}
