// src/applicants/browser.rs
//
// Interactive applicant detail browser. Holds the tab selection, the sibling
// cursor received from the report view, and a display cache for project
// analyses. Each navigation fetch is awaited before further input is read, so
// a response can never land for an applicant the user has already left.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use super::api;
use super::models::Applicant;
use crate::api::ApiClient;
use crate::common::ClientError;
use crate::projects;
use crate::projects::models::ProjectAnalysis;

// ============================================================================
// Tab State
// ============================================================================

/// Closed set of detail tabs; transitions are pure UI state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Overview,
    Skills,
    Experience,
    Projects,
    Education,
    Certificates,
    Social,
}

impl Tab {
    pub const ALL: [Tab; 7] = [
        Tab::Overview,
        Tab::Skills,
        Tab::Experience,
        Tab::Projects,
        Tab::Education,
        Tab::Certificates,
        Tab::Social,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Overview => "overview",
            Tab::Skills => "skills",
            Tab::Experience => "experience",
            Tab::Projects => "projects",
            Tab::Education => "education",
            Tab::Certificates => "certificates",
            Tab::Social => "social",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::Overview
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.name() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| format!("unknown tab '{}'", s))
    }
}

// ============================================================================
// Sibling Cursor
// ============================================================================

/// Index cursor over the ordered applicant id list handed over by the report
/// view. Moves are clamped to [0, len-1]; a move is proposed first and only
/// committed once the fetch for the proposed id succeeds, so a failed fetch
/// leaves the displayed applicant unchanged.
#[derive(Debug)]
pub struct SiblingCursor {
    ids: Vec<String>,
    index: usize,
}

impl SiblingCursor {
    /// Returns None for an empty id list; an out-of-range start index is
    /// clamped to the last entry
    pub fn new(ids: Vec<String>, start_index: usize) -> Option<Self> {
        if ids.is_empty() {
            return None;
        }
        let index = start_index.min(ids.len() - 1);
        Some(Self { ids, index })
    }

    pub fn current(&self) -> &str {
        &self.ids[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.index > 0
    }

    pub fn has_next(&self) -> bool {
        self.index + 1 < self.ids.len()
    }

    /// Propose moving back one position; does not change the cursor
    pub fn prev(&self) -> Option<(usize, &str)> {
        self.has_prev()
            .then(|| (self.index - 1, self.ids[self.index - 1].as_str()))
    }

    /// Propose moving forward one position; does not change the cursor
    pub fn next(&self) -> Option<(usize, &str)> {
        self.has_next()
            .then(|| (self.index + 1, self.ids[self.index + 1].as_str()))
    }

    /// Commit a previously proposed move after its fetch succeeded
    pub fn commit(&mut self, index: usize) {
        debug_assert!(index < self.ids.len());
        self.index = index.min(self.ids.len() - 1);
    }
}

// ============================================================================
// Analysis Cache
// ============================================================================

/// Display cache for project analyses, keyed by project URL. A user-triggered
/// analyse always re-issues the request and overwrites the entry; the cache
/// only feeds rendering.
#[derive(Debug, Default)]
pub struct AnalysisCache {
    entries: HashMap<String, ProjectAnalysis>,
}

impl AnalysisCache {
    pub fn insert(&mut self, url: String, analysis: ProjectAnalysis) {
        self.entries.insert(url, analysis);
    }

    pub fn get(&self, url: &str) -> Option<&ProjectAnalysis> {
        self.entries.get(url)
    }
}

// ============================================================================
// Interactive Loop
// ============================================================================

const HELP: &str = "\
Commands:
  overview|skills|experience|projects|education|certificates|social  switch tab
  n / next        next applicant
  p / prev        previous applicant
  v / verify      re-verify social authenticity
  a <n>           analyse the nth listed project (threat & SEO)
  r / resume      print the hosted resume URL
  h / help        this help
  q / quit        leave the browser";

pub async fn run(
    client: &ApiClient,
    ids: Vec<String>,
    start_index: usize,
) -> Result<(), ClientError> {
    let Some(mut cursor) = SiblingCursor::new(ids, start_index) else {
        println!("No applicants available.");
        return Ok(());
    };

    let mut applicant = api::get_by_id(client, cursor.current()).await?;
    let mut tab = Tab::default();
    let mut cache = AnalysisCache::default();

    render(&applicant, tab, &cache, &cursor);
    println!("{}", HELP);

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    loop {
        print_prompt(&cursor);
        let Some(line) = lines.next_line().await? else {
            break; // EOF
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "q" | "quit" => break,
            "h" | "help" => println!("{}", HELP),
            "n" | "next" => {
                move_cursor(client, &mut cursor, &mut applicant, Direction::Next).await;
                render(&applicant, tab, &cache, &cursor);
            }
            "p" | "prev" => {
                move_cursor(client, &mut cursor, &mut applicant, Direction::Prev).await;
                render(&applicant, tab, &cache, &cursor);
            }
            "v" | "verify" => {
                verify(client, &mut applicant).await;
                render(&applicant, tab, &cache, &cursor);
            }
            "r" | "resume" => match applicant.resume_url() {
                Some(url) => println!("Resume: {}", url),
                None => println!("No hosted resume file for this applicant."),
            },
            _ => {
                if let Some(arg) = input.strip_prefix("a ").or_else(|| input.strip_prefix("analyse "))
                {
                    analyse(client, &applicant, arg, &mut cache).await;
                } else if let Ok(selected) = input.parse::<Tab>() {
                    tab = selected;
                    render(&applicant, tab, &cache, &cursor);
                } else {
                    println!("Unrecognized command '{}'. Try `help`.", input);
                }
            }
        }
    }

    Ok(())
}

enum Direction {
    Prev,
    Next,
}

/// Fetch the proposed sibling; commit the index only on success. Exactly one
/// fetch is issued per accepted move.
async fn move_cursor(
    client: &ApiClient,
    cursor: &mut SiblingCursor,
    applicant: &mut Applicant,
    direction: Direction,
) {
    let proposal = match direction {
        Direction::Prev => cursor.prev(),
        Direction::Next => cursor.next(),
    }
    .map(|(index, id)| (index, id.to_string()));
    let Some((index, id)) = proposal else {
        println!("Already at the {} of the list.", match direction {
            Direction::Prev => "start",
            Direction::Next => "end",
        });
        return;
    };

    println!("Loading applicant {}...", id);
    match api::get_by_id(client, &id).await {
        Ok(fetched) => {
            cursor.commit(index);
            *applicant = fetched;
        }
        Err(e) => {
            // keep showing the current applicant
            warn!(applicant_id = %id, error = %e, "failed to load applicant");
            println!("Failed to load applicant: {}", e);
        }
    }
}

/// Re-verify socials; on success the whole local record is replaced so the
/// authentication results reflect the fresh state
async fn verify(client: &ApiClient, applicant: &mut Applicant) {
    println!("Verifying social profiles...");
    match api::verify_by_id(client, &applicant.id).await {
        Ok(updated) => {
            *applicant = updated;
            println!("Social verification complete.");
        }
        Err(e) => {
            warn!(applicant_id = %applicant.id, error = %e, "verification failed");
            println!("Verification failed: {}", e);
        }
    }
}

async fn analyse(client: &ApiClient, applicant: &Applicant, arg: &str, cache: &mut AnalysisCache) {
    let number = match arg.trim().parse::<usize>() {
        Ok(n) if n >= 1 => n,
        _ => {
            println!("Usage: a <project number> (1-based)");
            return;
        }
    };
    let Some(project) = applicant.projects.get(number - 1) else {
        println!(
            "No project #{} ({} listed).",
            number,
            applicant.projects.len()
        );
        return;
    };
    let Some(url) = project.link.as_deref() else {
        println!("Project #{} has no link to analyse.", number);
        return;
    };

    println!("Analyzing {}...", url);
    match projects::api::analyse(client, url).await {
        Ok(analysis) => {
            println!("{}", analysis.summary());
            cache.insert(url.to_string(), analysis);
        }
        Err(e) => {
            warn!(url = %url, error = %e, "project analysis failed");
            println!("Project analysis failed: {}", e);
        }
    }
}

fn print_prompt(cursor: &SiblingCursor) {
    let prev = if cursor.has_prev() { "p" } else { "-" };
    let next = if cursor.has_next() { "n" } else { "-" };
    println!(
        "[{} of {}] ({} / {}) >",
        cursor.index() + 1,
        cursor.len(),
        prev,
        next
    );
}

// ============================================================================
// Rendering
// ============================================================================

pub fn render(applicant: &Applicant, tab: Tab, cache: &AnalysisCache, cursor: &SiblingCursor) {
    println!();
    println!(
        "=== {} ({} of {}) ===",
        applicant.display_name(),
        cursor.index() + 1,
        cursor.len()
    );
    print_header(applicant);
    print_tab(applicant, tab, cache);
}

fn print_header(applicant: &Applicant) {
    if let Some(location) = &applicant.location {
        println!("Location: {}", location);
    }
    let score = applicant
        .score
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());
    println!(
        "Match score: {}  [{}]",
        score,
        applicant.status.as_deref().unwrap_or("unknown")
    );
    if let Some(verdict) = &applicant.verdict {
        println!("Verdict: {}", verdict);
    }
    if let Some(reason) = &applicant.failure_reason {
        println!("Failure reason: {}", reason);
    }
}

pub fn print_tab(applicant: &Applicant, tab: Tab, cache: &AnalysisCache) {
    println!("--- {} ---", tab);
    match tab {
        Tab::Overview => {
            println!("Status: {}", applicant.status.as_deref().unwrap_or("unknown"));
        }
        Tab::Skills => {
            if applicant.skills.is_empty() {
                println!("No skills extracted.");
            } else {
                println!("{}", applicant.skills.join(", "));
            }
        }
        Tab::Experience => {
            if applicant.experience.is_empty() {
                println!("No experience entries.");
            }
            for entry in &applicant.experience {
                println!(
                    "* {} at {} ({} months)",
                    entry.title.as_deref().unwrap_or("-"),
                    entry.company.as_deref().unwrap_or("-"),
                    entry.duration.unwrap_or(0)
                );
                if let Some(description) = &entry.description {
                    println!("  {}", description);
                }
            }
        }
        Tab::Projects => {
            if applicant.projects.is_empty() {
                println!("No projects.");
            }
            for (i, project) in applicant.projects.iter().enumerate() {
                println!("{}. {}", i + 1, project.title.as_deref().unwrap_or("-"));
                if let Some(description) = &project.description {
                    println!("   {}", description);
                }
                if let Some(link) = &project.link {
                    println!("   {}", link);
                    if let Some(analysis) = cache.get(link) {
                        println!("   analysis: {}", analysis.summary());
                    }
                }
            }
        }
        Tab::Education => {
            if applicant.qualifications.is_empty() {
                println!("No education entries.");
            }
            for q in &applicant.qualifications {
                println!(
                    "* {} at {} (marks: {})",
                    q.course.as_deref().unwrap_or("-"),
                    q.institute.as_deref().unwrap_or("-"),
                    q.marks.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string())
                );
            }
        }
        Tab::Certificates => {
            if applicant.certificates.is_empty() {
                println!("No certificates.");
            }
            for c in &applicant.certificates {
                println!("* {}", c.title.as_deref().unwrap_or("-"));
            }
        }
        Tab::Social => {
            for (key, value) in &applicant.social {
                match value {
                    serde_json::Value::String(s) if !s.is_empty() => {
                        println!("{}: {}", key, s);
                    }
                    serde_json::Value::Array(items) if !items.is_empty() => {
                        let urls: Vec<&str> = items.iter().filter_map(|v| v.as_str()).collect();
                        println!("{}: {}", key, urls.join(", "));
                    }
                    _ => {}
                }
            }
            if applicant.authentication.is_empty() {
                println!("No verification results yet. Run `verify`.");
            }
            for result in &applicant.authentication {
                let platform = result.platform.as_deref().unwrap_or("(platform)");
                match (&result.error, &result.stats) {
                    (Some(error), _) => println!("{}: error: {}", platform, error),
                    (None, Some(stats)) => println!("{}: {}", platform, stats),
                    (None, None) => println!("{}: no data", platform),
                }
            }
        }
    }
}
