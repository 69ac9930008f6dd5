mod common;

use common::{client, valid_token, MemoryStore};
use hh_applicant_gateway::dto::application_dto::{ApplyPayload, UpdateResumePayload};
use hh_applicant_gateway::error::Error;
use hh_applicant_gateway::services::application_service::{ApplicationService, BUMP_COOLDOWN_HOURS};
use hh_applicant_gateway::services::resume_service::ResumeService;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn apply_payload() -> ApplyPayload {
    ApplyPayload {
        vacancy_id: "93353083".into(),
        resume_id: "abc123".into(),
        message: Some("Hello, I build backends in Rust.".into()),
    }
}

#[tokio::test]
async fn second_application_to_same_vacancy_is_duplicate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/negotiations"))
        .and(body_string_contains("vacancy_id=93353083"))
        .and(body_string_contains("resume_id=abc123"))
        .and(body_string_contains("message="))
        .respond_with(ResponseTemplate::new(201))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/negotiations"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "errors": [{ "type": "negotiations", "value": "already_applied" }]
        })))
        .mount(&server)
        .await;

    let service = ApplicationService::new(client(&server, MemoryStore::with_token(valid_token())));

    let first = service.apply(&apply_payload()).await.unwrap();
    assert!(first.success);
    assert!(first.message.contains("93353083"));

    let second = service.apply(&apply_payload()).await.unwrap_err();
    match second {
        Error::DuplicateApplication { vacancy_id } => assert_eq!(vacancy_id, "93353083"),
        other => panic!("expected duplicate, got {other:?}"),
    }
}

#[tokio::test]
async fn other_apply_failures_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/negotiations"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad_arguments"))
        .expect(1)
        .mount(&server)
        .await;

    let service = ApplicationService::new(client(&server, MemoryStore::with_token(valid_token())));
    let err = service.apply(&apply_payload()).await.unwrap_err();
    assert!(matches!(err, Error::Remote { status: 400, .. }));
}

#[tokio::test]
async fn write_operations_require_authorization_without_network() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let hh = client(&server, MemoryStore::empty());
    let applications = ApplicationService::new(hh.clone());
    let resumes = ResumeService::new(hh);

    assert!(matches!(
        applications.apply(&apply_payload()).await,
        Err(Error::Unauthorized(_))
    ));
    assert!(matches!(
        applications.refresh_visibility("abc123").await,
        Err(Error::Unauthorized(_))
    ));
    assert!(matches!(
        applications
            .update_resume("abc123", &UpdateResumePayload::default())
            .await,
        Err(Error::Unauthorized(_))
    ));
    assert!(matches!(applications.negotiations().await, Err(Error::Unauthorized(_))));
    assert!(matches!(resumes.list_mine().await, Err(Error::Unauthorized(_))));
    assert!(matches!(resumes.details("abc123").await, Err(Error::Unauthorized(_))));
}

#[tokio::test]
async fn bump_too_early_is_rate_limited() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resumes/abc123/publish"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "errors": [{ "type": "resumes", "value": "touch_limit_exceeded" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = ApplicationService::new(client(&server, MemoryStore::with_token(valid_token())));
    let err = service.refresh_visibility("abc123").await.unwrap_err();
    assert!(matches!(
        err,
        Error::RateLimited { cooldown_hours } if cooldown_hours == BUMP_COOLDOWN_HOURS
    ));
}

#[tokio::test]
async fn bump_succeeds_on_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/resumes/abc123/publish"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = ApplicationService::new(client(&server, MemoryStore::with_token(valid_token())));
    let result = service.refresh_visibility("abc123").await.unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn empty_resume_update_is_rejected_without_network() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let service = ApplicationService::new(client(&server, MemoryStore::with_token(valid_token())));
    let payload = UpdateResumePayload {
        title: None,
        skills: Some(" , ".into()),
        salary: None,
    };
    let err = service.update_resume("abc123", &payload).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[tokio::test]
async fn resume_update_sends_only_supplied_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/resumes/abc123"))
        .and(body_json(json!({
            "title": "Senior Rust Engineer",
            "skill_set": ["Rust", "Tokio", "PostgreSQL"]
        })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let service = ApplicationService::new(client(&server, MemoryStore::with_token(valid_token())));
    let payload = UpdateResumePayload {
        title: Some("Senior Rust Engineer".into()),
        skills: Some("Rust, Tokio, , PostgreSQL".into()),
        salary: None,
    };
    let result = service.update_resume("abc123", &payload).await.unwrap();
    assert_eq!(
        result.updated_fields,
        Some(vec!["title".to_string(), "skill_set".to_string()])
    );
}

#[tokio::test]
async fn negotiations_are_flattened() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/negotiations"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "found": 1,
            "items": [{
                "id": "n1",
                "state": { "id": "invitation", "name": "Invitation" },
                "created_at": "2026-10-01T10:00:00+0300",
                "has_updates": true,
                "vacancy": { "id": "7", "name": "Backend", "employer": { "name": "Acme" } }
            }]
        })))
        .mount(&server)
        .await;

    let service = ApplicationService::new(client(&server, MemoryStore::with_token(valid_token())));
    let list = service.negotiations().await.unwrap();
    assert_eq!(list.total, 1);
    let n = &list.negotiations[0];
    assert_eq!(n.state.as_deref(), Some("Invitation"));
    assert_eq!(n.vacancy_id.as_deref(), Some("7"));
    assert_eq!(n.company.as_deref(), Some("Acme"));
    assert!(n.has_updates);
}
