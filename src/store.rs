//! Project records and the read-only store that owns them.
//! The collection is built once at boot, validated, and never mutated;
//! every view reads it through Rocket managed state.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Maximum number of cards in the related-projects panel.
pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub category_label: String,
    pub thumbnail: String,
    pub images: Vec<String>,
    pub client: String,
    pub year: String,
    pub role: String,
    pub tools: Vec<String>,
    pub challenge: String,
    pub solution: String,
    pub result: String,
}

#[derive(Debug, Deserialize)]
struct ProjectsFile {
    projects: Vec<Project>,
}

#[derive(Debug)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    /// Wrap an authored collection, enforcing the data invariants:
    /// positive unique ids, at least one image per project, and a single
    /// label per category tag. Authoring errors fail boot, not requests.
    pub fn new(projects: Vec<Project>) -> Result<Self, String> {
        let mut ids: HashSet<i64> = HashSet::new();
        let mut labels: HashMap<&str, &str> = HashMap::new();

        for project in &projects {
            if project.id <= 0 {
                return Err(format!(
                    "project \"{}\" has non-positive id {}",
                    project.title, project.id
                ));
            }
            if !ids.insert(project.id) {
                return Err(format!("duplicate project id {}", project.id));
            }
            if project.images.is_empty() {
                return Err(format!("project {} has an empty image list", project.id));
            }
            match labels.get(project.category.as_str()) {
                Some(existing) if *existing != project.category_label => {
                    return Err(format!(
                        "category \"{}\" is labeled both \"{}\" and \"{}\"",
                        project.category, existing, project.category_label
                    ));
                }
                _ => {
                    labels.insert(&project.category, &project.category_label);
                }
            }
        }

        Ok(ProjectStore { projects })
    }

    /// Load the collection from a TOML data file, or fall back to the
    /// built-in seed collection when no file has been authored yet.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Self::new(seed_projects());
        }
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        let file: ProjectsFile = toml::from_str(&raw)
            .map_err(|e| format!("failed to parse {}: {}", path.display(), e))?;
        Self::new(file.projects)
    }

    pub fn find_by_id(&self, id: i64) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Resolve a raw identifier as it arrives from a query string.
    /// Non-numeric input is not-found, never an error.
    pub fn find_by_raw_id(&self, raw: &str) -> Option<&Project> {
        let id: i64 = raw.trim().parse().ok()?;
        self.find_by_id(id)
    }

    /// All projects in the given category, collection order preserved.
    /// The special tag "all" returns the entire collection.
    pub fn by_category(&self, category: &str) -> Vec<&Project> {
        if category == "all" {
            return self.projects.iter().collect();
        }
        self.projects
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// Distinct `(category, category_label)` pairs, each tag exactly once,
    /// in first-appearance order.
    pub fn categories(&self) -> Vec<(&str, &str)> {
        let mut seen: Vec<(&str, &str)> = Vec::new();
        for project in &self.projects {
            if !seen.iter().any(|(tag, _)| *tag == project.category) {
                seen.push((&project.category, &project.category_label));
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Select up to [`RELATED_LIMIT`] projects to show alongside `current`.
    ///
    /// Same-category projects come first, in collection order. When those
    /// run short, the remainder is drawn uniformly at random from the other
    /// projects until the limit is reached or the collection is exhausted.
    /// The current project is excluded by id throughout; output never
    /// contains duplicates and never gets padded.
    pub fn related_projects<R: Rng>(&self, current: &Project, rng: &mut R) -> Vec<&Project> {
        let mut related: Vec<&Project> = self
            .projects
            .iter()
            .filter(|p| p.category == current.category && p.id != current.id)
            .collect();

        if related.len() < RELATED_LIMIT {
            let mut others: Vec<&Project> = self
                .projects
                .iter()
                .filter(|p| p.id != current.id && !related.iter().any(|r| r.id == p.id))
                .collect();

            while related.len() < RELATED_LIMIT && !others.is_empty() {
                let index = rng.gen_range(0..others.len());
                related.push(others.remove(index));
            }
        }

        related.truncate(RELATED_LIMIT);
        related
    }
}

/// Built-in starter collection, used until a projects.toml is authored.
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: 1,
            title: "Mobile App Design".to_string(),
            description: "Ordering experience for a food e-commerce mobile app".to_string(),
            category: "ui-ux".to_string(),
            category_label: "UI/UX".to_string(),
            thumbnail: "project1.webp".to_string(),
            images: vec!["project1.webp".to_string()],
            client: "Tech Startup Inc.".to_string(),
            year: "2024".to_string(),
            role: "UI/UX Designer".to_string(),
            tools: vec![
                "Adobe Illustrator".to_string(),
                "Adobe Photoshop".to_string(),
                "Figma".to_string(),
            ],
            challenge: "Design an ordering flow that stays effortless while surfacing a \
                        large, frequently changing menu."
                .to_string(),
            solution: "Built a bold but professional visual system around clean typography, \
                       with a menu hierarchy tuned through quick usability rounds."
                .to_string(),
            result: "Checkout completion improved measurably within the first quarter after \
                     launch."
                .to_string(),
        },
        Project {
            id: 2,
            title: "Fitness Application".to_string(),
            description: "Workout planner that helps users keep a training routine".to_string(),
            category: "ui-ux".to_string(),
            category_label: "UI/UX".to_string(),
            thumbnail: "project2.png".to_string(),
            images: vec!["project2.png".to_string()],
            client: "Evoline".to_string(),
            year: "2024".to_string(),
            role: "UI/UX Designer".to_string(),
            tools: vec![
                "Figma".to_string(),
                "Adobe XD".to_string(),
                "Principle".to_string(),
            ],
            challenge: "Keep casual users motivated without burying them in tracking detail."
                .to_string(),
            solution: "Centered each screen on a single next action and used friendly, \
                       expressive progress visuals."
                .to_string(),
            result: "Weekly retention climbed steadily across the first months after release."
                .to_string(),
        },
        Project {
            id: 3,
            title: "Brand Identity Design".to_string(),
            description: "Full identity system for a fashion retail brand".to_string(),
            category: "branding".to_string(),
            category_label: "Branding".to_string(),
            thumbnail: "project3.png".to_string(),
            images: vec!["project3.png".to_string()],
            client: "Fashion Store".to_string(),
            year: "2024".to_string(),
            role: "Brand Designer".to_string(),
            tools: vec![
                "Figma".to_string(),
                "Adobe XD".to_string(),
                "Principle".to_string(),
            ],
            challenge: "Express an established boutique's character in a mark that works from \
                        storefront to social."
                .to_string(),
            solution: "Developed a restrained palette and wordmark with flexible layout rules \
                       the in-house team can apply themselves."
                .to_string(),
            result: "The refreshed identity rolled out across packaging and storefronts in \
                     one season."
                .to_string(),
        },
    ]
}
