//! Static portfolio content: projects, skills, education, certifications,
//! and the profile (contact links, intro statistics, publication, talents).
//!
//! Every table is defined once at compile time and only ever read. Array
//! order is render order.

pub mod education;
pub mod profile;
pub mod projects;
pub mod skills;

use serde::Serialize;

pub use education::{CERTIFICATIONS, EDUCATION};
pub use profile::{PROFILE, PUBLICATION, STATS, TALENTS, TALENTS_REMARK};
pub use projects::PROJECTS;
pub use skills::SKILL_CATEGORIES;

/// Identifier of a [`Project`]. Unique within [`PROJECTS`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectId(pub u8);

/// Identifier of a [`SkillCategory`]. Unique within [`SKILL_CATEGORIES`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct SkillCategoryId(pub &'static str);

/// Two-stop colour gradient used for project titles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    /// yellow → orange
    Sunrise,
    /// green → teal
    Lagoon,
    /// green → blue
    Canopy,
    /// blue → purple
    Dusk,
    /// purple → pink
    Orchid,
    /// orange → red
    Ember,
}

pub type Rgb = (u8, u8, u8);

const YELLOW_600: Rgb = (0xca, 0x8a, 0x04);
const ORANGE_600: Rgb = (0xea, 0x58, 0x0c);
const GREEN_600: Rgb = (0x16, 0xa3, 0x4a);
const TEAL_600: Rgb = (0x0d, 0x94, 0x88);
const BLUE_600: Rgb = (0x25, 0x63, 0xeb);
const PURPLE_600: Rgb = (0x93, 0x33, 0xea);
const PINK_600: Rgb = (0xdb, 0x27, 0x77);
const RED_600: Rgb = (0xdc, 0x26, 0x26);

impl Theme {
    /// Start and end colours of the gradient.
    pub fn gradient(self) -> (Rgb, Rgb) {
        match self {
            Theme::Sunrise => (YELLOW_600, ORANGE_600),
            Theme::Lagoon => (GREEN_600, TEAL_600),
            Theme::Canopy => (GREEN_600, BLUE_600),
            Theme::Dusk => (BLUE_600, PURPLE_600),
            Theme::Orchid => (PURPLE_600, PINK_600),
            Theme::Ember => (ORANGE_600, RED_600),
        }
    }
}

pub struct ProjectDetails {
    pub problem: &'static str,
    pub solution: &'static str,
    pub technologies: &'static [&'static str],
    pub outcomes: &'static [&'static str],
}

pub struct Project {
    pub id: ProjectId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub theme: Theme,
    pub overview: &'static str,
    /// Impact metric name → display string, in display order.
    pub impact: &'static [(&'static str, &'static str)],
    pub details: ProjectDetails,
}

pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, 0..=100.
    pub level: u8,
    pub projects: &'static str,
}

pub struct SkillCategory {
    pub id: SkillCategoryId,
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [Skill],
}

pub struct EducationEntry {
    pub degree: &'static str,
    pub field: &'static str,
    pub school: &'static str,
    pub location: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
    pub highlights: &'static [&'static str],
}

pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub icon: &'static str,
}

/// Where an outbound link leads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LinkTarget {
    Email(&'static str),
    /// Dialable number, e.g. `+18574927729`.
    Phone(&'static str),
    /// Opened in a new browsing context.
    External(&'static str),
    /// Static file served at `path`, saved as `filename`.
    Download {
        path: &'static str,
        filename: &'static str,
    },
}

impl LinkTarget {
    pub fn href(&self) -> String {
        match self {
            LinkTarget::Email(addr) => format!("mailto:{}", addr),
            LinkTarget::Phone(number) => format!("tel:{}", number),
            LinkTarget::External(url) => url.to_string(),
            LinkTarget::Download { path, .. } => path.to_string(),
        }
    }

    /// Whether the link should open in a new browsing context.
    pub fn opens_new_context(&self) -> bool {
        matches!(self, LinkTarget::External(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub label: &'static str,
    pub target: LinkTarget,
}

/// Impact statistic shown in the introduction grid.
pub struct Stat {
    pub icon: &'static str,
    pub metric: &'static str,
    pub label: &'static str,
    pub sublabel: &'static str,
    /// Numeric metrics get the large display treatment.
    pub numeric: bool,
}

pub struct Publication {
    pub title: &'static str,
    pub kind: &'static str,
    pub venue: &'static str,
    /// (value, caption) pairs.
    pub highlights: &'static [(&'static str, &'static str)],
    pub summary: &'static str,
}

pub struct Talent {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Profile {
    /// Short name shown in the navigation bar.
    pub short_name: &'static str,
    /// Full name, split over two hero lines.
    pub name_lines: [&'static str; 2],
    pub disciplines: &'static str,
    pub role: &'static str,
    pub intro: &'static str,
    pub projects_tagline: &'static str,
    pub contact_heading: &'static str,
    pub contact_pitch: &'static str,
    pub contact_footnotes: [&'static str; 2],
    /// Email, phone, profile and resume, in display order.
    pub links: &'static [Link],
    pub location: &'static str,
    pub copyright: &'static str,
    pub signature: &'static str,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name_lines[0], self.name_lines[1])
    }

    /// First link matching `pred`, e.g. the resume download.
    pub fn find_link(&self, pred: impl Fn(&LinkTarget) -> bool) -> Option<(usize, &Link)> {
        self.links.iter().enumerate().find(|(_, l)| pred(&l.target))
    }
}

/// Look up a project by id.
pub fn project(id: ProjectId) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

/// Look up a skill category by id.
pub fn skill_category(id: SkillCategoryId) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES.iter().find(|c| c.id == id)
}

/// A broken content invariant.
#[derive(Debug, PartialEq)]
pub enum ContentIssue {
    DuplicateProjectId(ProjectId),
    DuplicateSkillCategoryId(SkillCategoryId),
    LevelOutOfRange { skill: &'static str, level: u8 },
}

/// Check the content tables: unique ids and percentages within 0..=100.
pub fn validate() -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    for (i, p) in PROJECTS.iter().enumerate() {
        if PROJECTS[..i].iter().any(|q| q.id == p.id) {
            issues.push(ContentIssue::DuplicateProjectId(p.id));
        }
    }
    for (i, c) in SKILL_CATEGORIES.iter().enumerate() {
        if SKILL_CATEGORIES[..i].iter().any(|d| d.id == c.id) {
            issues.push(ContentIssue::DuplicateSkillCategoryId(c.id));
        }
        for skill in c.skills {
            if skill.level > 100 {
                issues.push(ContentIssue::LevelOutOfRange {
                    skill: skill.name,
                    level: skill.level,
                });
            }
        }
    }

    issues
}
