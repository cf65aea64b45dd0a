// SPDX-License-Identifier: MPL-2.0
//! Portfolio content model.
//!
//! The page content — headline phrases, stats, skills, project galleries,
//! certificates, contact channels — is data, not code. A built-in default is
//! compiled in so the app runs out of the box; `--content <file.toml>`
//! replaces it wholesale.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One slide of a gallery. Slides are styled text cards; image assets are
/// outside the scope of the showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub caption: String,
}

/// A headline stat shown in the hero section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u32,
    /// Render a trailing `+` after the value.
    #[serde(default)]
    pub plus: bool,
}

/// A single skill with its proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent, clamped to `[0, 100]` at use sites.
    pub level: f32,
}

/// A named group of skills.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

/// A portfolio project with its slide gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub slides: Vec<Slide>,
}

/// Contact channels shown in the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub location: String,
    /// URL copied to the clipboard by the share action.
    pub profile_url: String,
}

/// The whole portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub name: String,
    pub headline_phrases: Vec<String>,
    pub stats: Vec<Stat>,
    pub skills: Vec<SkillCategory>,
    pub projects: Vec<Project>,
    #[serde(default)]
    pub certificates: Vec<Slide>,
    pub contact: ContactInfo,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline_phrases: vec![
                "Data Analyst & BI Developer".to_string(),
                "SQL Expert".to_string(),
                "Power BI Specialist".to_string(),
                "Python Data Analyst".to_string(),
                "Dashboard Creator".to_string(),
                "Business Intelligence Expert".to_string(),
            ],
            stats: vec![
                Stat {
                    label: "Projects Delivered".to_string(),
                    value: 25,
                    plus: true,
                },
                Stat {
                    label: "Dashboards Built".to_string(),
                    value: 40,
                    plus: true,
                },
                Stat {
                    label: "Years of Experience".to_string(),
                    value: 3,
                    plus: false,
                },
            ],
            skills: vec![
                SkillCategory {
                    name: "Data Analysis".to_string(),
                    skills: vec![
                        Skill {
                            name: "SQL".to_string(),
                            level: 95.0,
                        },
                        Skill {
                            name: "Python".to_string(),
                            level: 85.0,
                        },
                        Skill {
                            name: "Excel".to_string(),
                            level: 90.0,
                        },
                    ],
                },
                SkillCategory {
                    name: "Business Intelligence".to_string(),
                    skills: vec![
                        Skill {
                            name: "Power BI".to_string(),
                            level: 92.0,
                        },
                        Skill {
                            name: "Tableau".to_string(),
                            level: 75.0,
                        },
                        Skill {
                            name: "Data Modeling".to_string(),
                            level: 88.0,
                        },
                    ],
                },
            ],
            projects: vec![
                Project {
                    title: "Sales Performance Dashboard".to_string(),
                    summary: "Interactive revenue dashboard consolidating four regional \
                              data sources into one live report."
                        .to_string(),
                    tags: vec!["Power BI".to_string(), "SQL".to_string()],
                    slides: vec![
                        Slide {
                            title: "Overview".to_string(),
                            caption: "Revenue at a glance".to_string(),
                        },
                        Slide {
                            title: "Regional Split".to_string(),
                            caption: "Drill-down by territory".to_string(),
                        },
                        Slide {
                            title: "Forecast".to_string(),
                            caption: "Twelve-month projection".to_string(),
                        },
                    ],
                },
                Project {
                    title: "Customer Churn Analysis".to_string(),
                    summary: "Cohort analysis identifying the two onboarding steps where \
                              most cancellations originate."
                        .to_string(),
                    tags: vec!["Python".to_string(), "Pandas".to_string()],
                    slides: vec![
                        Slide {
                            title: "Cohorts".to_string(),
                            caption: "Retention by signup month".to_string(),
                        },
                        Slide {
                            title: "Drivers".to_string(),
                            caption: "Feature importance ranking".to_string(),
                        },
                    ],
                },
            ],
            certificates: vec![
                Slide {
                    title: "Microsoft Certified: Data Analyst Associate".to_string(),
                    caption: "Power BI certification".to_string(),
                },
                Slide {
                    title: "Google Data Analytics".to_string(),
                    caption: "Professional certificate".to_string(),
                },
                Slide {
                    title: "SQL for Data Science".to_string(),
                    caption: "Advanced querying".to_string(),
                },
            ],
            contact: ContactInfo {
                email: "hello@example.com".to_string(),
                location: "Cairo, Egypt".to_string(),
                profile_url: "https://example.com/portfolio".to_string(),
            },
        }
    }
}

impl Content {
    /// Loads content from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// complete content document.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|err| Error::Content(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_content_has_all_sections_populated() {
        let content = Content::default();
        assert!(!content.headline_phrases.is_empty());
        assert!(!content.stats.is_empty());
        assert!(!content.skills.is_empty());
        assert!(!content.projects.is_empty());
        assert!(!content.certificates.is_empty());
    }

    #[test]
    fn default_project_galleries_have_multiple_slides() {
        let content = Content::default();
        for project in &content.projects {
            assert!(project.slides.len() > 1, "{} gallery", project.title);
        }
    }

    #[test]
    fn content_round_trips_through_toml() {
        let content = Content::default();
        let raw = toml::to_string_pretty(&content).expect("serialize");
        let parsed: Content = toml::from_str(&raw).expect("parse");
        assert_eq!(parsed, content);
    }

    #[test]
    fn load_from_path_reads_a_content_file() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("content.toml");
        let raw = toml::to_string_pretty(&Content::default()).expect("serialize");
        fs::write(&path, raw).expect("write");

        let loaded = Content::load_from_path(&path).expect("load");
        assert_eq!(loaded, Content::default());
    }

    #[test]
    fn load_from_path_rejects_incomplete_documents() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("content.toml");
        fs::write(&path, "name = \"only a name\"").expect("write");

        let err = Content::load_from_path(&path).unwrap_err();
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn load_from_path_missing_file_is_an_io_error() {
        let err = Content::load_from_path(Path::new("/nonexistent/content.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
