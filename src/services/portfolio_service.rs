//! Ranks local portfolio projects for cover-letter generation.
//!
//! Each immediate subdirectory of the configured root that contains a
//! `PORTFOLIO.md` is one project. The document may declare its relevance on a
//! line such as `relevance: high`.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::models::portfolio::{PortfolioListing, PortfolioProject, DEFAULT_RELEVANCE};
use crate::services::profile_service::ProfileService;
use crate::utils::markup::truncate_chars;

pub const PORTFOLIO_FILE: &str = "PORTFOLIO.md";
pub const CONTENT_LIMIT: usize = 2000;

const RELEVANCE_PREFIX: &str = "relevance:";

/// Value of the first `relevance:` line, or `medium` when there is none.
/// The value ends at the next colon, so `relevance: high: flagship` is `high`.
pub fn parse_relevance(content: &str) -> String {
    content
        .lines()
        .find_map(|line| line.strip_prefix(RELEVANCE_PREFIX))
        .and_then(|value| value.split(':').next())
        .map(|value| value.trim().to_string())
        .unwrap_or_else(|| DEFAULT_RELEVANCE.to_string())
}

/// Lazy scan over project directories, in name order. Unreadable documents
/// are logged and skipped; call `new` again to rescan.
#[derive(Debug, Clone)]
pub struct PortfolioScan {
    dirs: std::vec::IntoIter<PathBuf>,
}

impl PortfolioScan {
    pub fn new(root: &Path) -> std::io::Result<Self> {
        let mut dirs: Vec<PathBuf> = std::fs::read_dir(root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();
        Ok(Self {
            dirs: dirs.into_iter(),
        })
    }

    fn read_project(dir: &Path) -> Option<PortfolioProject> {
        let document = dir.join(PORTFOLIO_FILE);
        if !document.is_file() {
            return None;
        }
        let content = match std::fs::read_to_string(&document) {
            Ok(content) => content,
            Err(err) => {
                warn!(
                    path = %document.display(),
                    error = %err,
                    "Skipping unreadable portfolio document"
                );
                return None;
            }
        };
        let project = dir.file_name()?.to_string_lossy().into_owned();

        Some(PortfolioProject {
            project,
            relevance: parse_relevance(&content),
            content: truncate_chars(&content, CONTENT_LIMIT),
        })
    }
}

impl Iterator for PortfolioScan {
    type Item = PortfolioProject;

    fn next(&mut self) -> Option<Self::Item> {
        self.dirs.by_ref().find_map(|dir| Self::read_project(&dir))
    }
}

/// Filters by exact relevance and orders high → medium/unknown → low,
/// keeping directory order within a level.
pub fn rank_projects(
    projects: impl Iterator<Item = PortfolioProject>,
    relevance: Option<&str>,
) -> Vec<PortfolioProject> {
    let mut ranked: Vec<PortfolioProject> = projects
        .filter(|p| relevance.map_or(true, |wanted| p.relevance == wanted))
        .collect();
    ranked.sort_by_key(PortfolioProject::priority);
    ranked
}

#[derive(Debug, Clone)]
pub struct PortfolioService {
    profile: ProfileService,
}

impl PortfolioService {
    pub fn new(profile: ProfileService) -> Self {
        Self { profile }
    }

    #[instrument(skip(self))]
    pub fn list_projects(&self, relevance: Option<&str>) -> Result<PortfolioListing> {
        let root = self.profile.projects_path()?;
        let relevance = relevance.filter(|r| !r.is_empty());

        let scan = PortfolioScan::new(&root).map_err(|err| {
            warn!(root = %root.display(), error = %err, "Portfolio root is not readable");
            Error::NotFound(format!("No {} files under {}", PORTFOLIO_FILE, root.display()))
        })?;

        let projects = rank_projects(scan, relevance);
        if projects.is_empty() {
            return Err(Error::NotFound(match relevance {
                Some(r) => format!("No {} files with relevance '{}'", PORTFOLIO_FILE, r),
                None => format!("No {} files under {}", PORTFOLIO_FILE, root.display()),
            }));
        }

        debug!(count = projects.len(), "Portfolio projects ranked");
        Ok(PortfolioListing {
            total: projects.len(),
            projects,
        })
    }
}
