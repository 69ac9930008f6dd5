use std::path::Path;

use hh_applicant_gateway::error::Error;
use hh_applicant_gateway::services::portfolio_service::{
    PortfolioService, CONTENT_LIMIT, PORTFOLIO_FILE,
};
use hh_applicant_gateway::services::profile_service::ProfileService;
use tempfile::TempDir;

fn write_project(root: &Path, name: &str, content: &[u8]) {
    let dir = root.join(name);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(PORTFOLIO_FILE), content).unwrap();
}

/// Profile pointing at `<tmp>/projects`, which is created empty.
fn service_with_projects() -> (TempDir, PortfolioService) {
    let tmp = tempfile::tempdir().unwrap();
    let projects = tmp.path().join("projects");
    std::fs::create_dir_all(&projects).unwrap();
    let profile = tmp.path().join("profile.json");
    std::fs::write(
        &profile,
        serde_json::json!({ "name": "Ann", "projects_path": projects }).to_string(),
    )
    .unwrap();
    (tmp, PortfolioService::new(ProfileService::new(profile)))
}

fn projects_root(tmp: &TempDir) -> std::path::PathBuf {
    tmp.path().join("projects")
}

#[test]
fn projects_are_ranked_by_relevance() {
    let (tmp, service) = service_with_projects();
    let root = projects_root(&tmp);
    write_project(&root, "alpha", b"relevance: low\n# Alpha");
    write_project(&root, "beta", b"relevance: high\n# Beta");
    write_project(&root, "gamma", b"relevance: medium\n# Gamma");
    write_project(&root, "delta", b"# Delta without a marker");
    std::fs::create_dir_all(root.join("no-doc")).unwrap();
    std::fs::write(root.join("stray.md"), "relevance: high").unwrap();

    let listing = service.list_projects(None).unwrap();
    let order: Vec<(&str, &str)> = listing
        .projects
        .iter()
        .map(|p| (p.project.as_str(), p.relevance.as_str()))
        .collect();

    assert_eq!(listing.total, 4);
    assert_eq!(
        order,
        vec![
            ("beta", "high"),
            ("delta", "medium"),
            ("gamma", "medium"),
            ("alpha", "low"),
        ]
    );
}

#[test]
fn relevance_filter_keeps_exact_matches() {
    let (tmp, service) = service_with_projects();
    let root = projects_root(&tmp);
    write_project(&root, "alpha", b"relevance: low");
    write_project(&root, "beta", b"relevance: high");

    let listing = service.list_projects(Some("high")).unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(listing.projects[0].project, "beta");

    // An empty filter means no filter.
    assert_eq!(service.list_projects(Some("")).unwrap().total, 2);
}

#[test]
fn filter_without_matches_is_not_found() {
    let (tmp, service) = service_with_projects();
    write_project(&projects_root(&tmp), "alpha", b"relevance: low");

    let err = service.list_projects(Some("HIGH")).unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
}

#[test]
fn empty_root_is_not_found() {
    let (_tmp, service) = service_with_projects();
    assert!(matches!(service.list_projects(None), Err(Error::NotFound(_))));
}

#[test]
fn missing_root_directory_is_not_found() {
    let (tmp, service) = service_with_projects();
    std::fs::remove_dir(projects_root(&tmp)).unwrap();
    assert!(matches!(service.list_projects(None), Err(Error::NotFound(_))));
}

#[test]
fn missing_projects_path_is_not_configured() {
    let tmp = tempfile::tempdir().unwrap();
    let profile = tmp.path().join("profile.json");
    std::fs::write(&profile, r#"{"name": "Ann"}"#).unwrap();
    let service = PortfolioService::new(ProfileService::new(&profile));

    assert!(matches!(service.list_projects(None), Err(Error::NotConfigured(_))));

    let service = PortfolioService::new(ProfileService::new(tmp.path().join("absent.json")));
    assert!(matches!(service.list_projects(None), Err(Error::NotConfigured(_))));
}

#[test]
fn unreadable_documents_are_skipped() {
    let (tmp, service) = service_with_projects();
    let root = projects_root(&tmp);
    write_project(&root, "broken", &[0xff, 0xfe, 0x00, b'r']);
    write_project(&root, "fine", b"relevance: high");

    let listing = service.list_projects(None).unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(listing.projects[0].project, "fine");
}

#[test]
fn content_is_truncated_but_relevance_reads_whole_document() {
    let (tmp, service) = service_with_projects();
    let body = format!("{}\nrelevance: high\n", "ж".repeat(CONTENT_LIMIT + 500));
    write_project(&projects_root(&tmp), "long", body.as_bytes());

    let listing = service.list_projects(None).unwrap();
    let project = &listing.projects[0];
    assert_eq!(project.content.chars().count(), CONTENT_LIMIT);
    assert_eq!(project.relevance, "high");
}
