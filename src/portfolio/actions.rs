//! Semantic action IDs for portfolio click targets.
//!
//! Registered during render and dispatched via `InputEvent::Click`.

use super::state::Section;

// ── Navigation ──────────────────────────────────────────────────
pub const NAV_PROJECTS: u16 = 10;
pub const NAV_SKILLS: u16 = 11;
pub const NAV_EDUCATION: u16 = 12;
pub const NAV_CONTACT: u16 = 13;
pub const SCROLL_TOP: u16 = 14;

// ── Mobile menu ─────────────────────────────────────────────────
pub const TOGGLE_MENU: u16 = 20;
pub const CLOSE_MENU: u16 = 21;

// ── Project detail toggle (base + project index) ────────────────
pub const TOGGLE_PROJECT_BASE: u16 = 100;

// ── Skill category toggle (base + category index) ───────────────
pub const TOGGLE_SKILL_BASE: u16 = 200;

// ── Outbound link (base + index into `PROFILE.links`) ───────────
pub const OPEN_LINK_BASE: u16 = 300;

/// Ranges are 100 wide; index arithmetic stays inside them.
const RANGE: u16 = 100;

pub fn nav_action(section: Section) -> u16 {
    match section {
        Section::Projects => NAV_PROJECTS,
        Section::Skills => NAV_SKILLS,
        Section::Education => NAV_EDUCATION,
        Section::Contact => NAV_CONTACT,
    }
}

pub fn nav_section(action_id: u16) -> Option<Section> {
    Section::ALL.into_iter().find(|s| nav_action(*s) == action_id)
}

/// Index within the `base` range, if `action_id` falls in it.
pub fn indexed(action_id: u16, base: u16) -> Option<usize> {
    if action_id >= base && action_id < base + RANGE {
        Some((action_id - base) as usize)
    } else {
        None
    }
}
