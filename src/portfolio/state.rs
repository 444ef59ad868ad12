//! Presentation state: scroll offset, pointer, loading, expanded panels,
//! and the mobile menu.

use std::rc::Rc;

use serde::Serialize;

use crate::content::{ProjectId, SkillCategoryId};
use crate::scroll::{ScrollLock, ScrollSurface};

/// Page sections that can be navigated to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Projects,
    Skills,
    Education,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 4] = [
        Section::Projects,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    /// Anchor name, as used in URL fragments.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    /// Parse an anchor name, with or without a leading `#`.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Section::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Projects => "Projects",
            Section::Skills => "Skills",
            Section::Education => "Education",
            Section::Contact => "Contact",
        }
    }

    /// Keyboard shortcut.
    pub fn key(self) -> char {
        match self {
            Section::Projects => 'p',
            Section::Skills => 's',
            Section::Education => 'e',
            Section::Contact => 'c',
        }
    }
}

/// At-most-one-open panel group.
///
/// `toggle(id)` closes `id` when it is open and otherwise opens it,
/// implicitly closing whatever was open before.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Expansion<T> {
    expanded: Option<T>,
}

impl<T: Copy + PartialEq> Expansion<T> {
    pub fn new() -> Self {
        Self { expanded: None }
    }

    pub fn toggle(&mut self, id: T) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn current(&self) -> Option<T> {
        self.expanded
    }
}

enum MobileMenu {
    Closed,
    /// Holds the background scroll lock while open.
    Open(ScrollLock),
}

/// Everything a render pass reads, frozen for that pass.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Snapshot {
    pub scroll_y: f64,
    pub pointer: (f64, f64),
    pub loading: bool,
    pub expanded_project: Option<ProjectId>,
    pub expanded_skill: Option<SkillCategoryId>,
    pub menu_open: bool,
}

/// Owner of all transient UI state. Only this type mutates it.
pub struct PresentationState {
    scroll_y: f64,
    pointer: (f64, f64),
    loading: bool,
    projects: Expansion<ProjectId>,
    skills: Expansion<SkillCategoryId>,
    menu: MobileMenu,
    scroll_request: Option<Section>,
    surface: Rc<dyn ScrollSurface>,
}

impl PresentationState {
    pub fn new(surface: Rc<dyn ScrollSurface>) -> Self {
        Self {
            scroll_y: 0.0,
            pointer: (0.0, 0.0),
            loading: true,
            projects: Expansion::new(),
            skills: Expansion::new(),
            menu: MobileMenu::Closed,
            scroll_request: None,
            surface,
        }
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Record the page scroll offset (px). Scrolling dismisses the mobile menu.
    pub fn on_scroll(&mut self, offset: f64) {
        self.scroll_y = offset.max(0.0);
        self.close_mobile_menu();
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn toggle_project_detail(&mut self, id: ProjectId) {
        self.projects.toggle(id);
    }

    pub fn toggle_skill_category(&mut self, id: SkillCategoryId) {
        self.skills.toggle(id);
    }

    pub fn expanded_project(&self) -> Option<ProjectId> {
        self.projects.current()
    }

    pub fn expanded_skill(&self) -> Option<SkillCategoryId> {
        self.skills.current()
    }

    pub fn toggle_mobile_menu(&mut self) {
        if self.is_menu_open() {
            self.close_mobile_menu();
        } else {
            self.menu = MobileMenu::Open(ScrollLock::acquire(self.surface.clone()));
        }
    }

    /// Dropping the `Open` variant releases the scroll lock.
    pub fn close_mobile_menu(&mut self) {
        self.menu = MobileMenu::Closed;
    }

    pub fn is_menu_open(&self) -> bool {
        matches!(self.menu, MobileMenu::Open(_))
    }

    /// Ask for a smooth scroll to `section` and dismiss the mobile menu.
    pub fn navigate_to_section(&mut self, section: Section) {
        self.scroll_request = Some(section);
        self.close_mobile_menu();
    }

    pub fn scroll_request(&self) -> Option<Section> {
        self.scroll_request
    }

    pub fn take_scroll_request(&mut self) -> Option<Section> {
        self.scroll_request.take()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Leave the loading screen. Returns true only on the actual transition.
    pub fn finish_loading(&mut self) -> bool {
        std::mem::replace(&mut self.loading, false)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            scroll_y: self.scroll_y,
            pointer: self.pointer,
            loading: self.loading,
            expanded_project: self.projects.current(),
            expanded_skill: self.skills.current(),
            menu_open: self.is_menu_open(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{PROJECTS, SKILL_CATEGORIES};
    use crate::scroll::testing::RecordingSurface;
    use crate::scroll::NoopSurface;
    use proptest::prelude::*;

    fn state() -> PresentationState {
        PresentationState::new(Rc::new(NoopSurface))
    }

    fn recorded() -> (PresentationState, Rc<RecordingSurface>) {
        let surface = Rc::new(RecordingSurface::default());
        (PresentationState::new(surface.clone()), surface)
    }

    // ── Section ────────────────────────────────────────────────────

    #[test]
    fn anchors_round_trip() {
        for s in Section::ALL {
            assert_eq!(Section::from_anchor(s.anchor()), Some(s));
        }
        assert_eq!(Section::from_anchor("#skills"), Some(Section::Skills));
        assert_eq!(Section::from_anchor("about"), None);
        assert_eq!(Section::from_anchor(""), None);
    }

    #[test]
    fn section_keys_are_distinct() {
        let keys: Vec<char> = Section::ALL.iter().map(|s| s.key()).collect();
        for (i, k) in keys.iter().enumerate() {
            assert!(!keys[i + 1..].contains(k));
        }
    }

    // ── Expansion ──────────────────────────────────────────────────

    #[test]
    fn project_toggle_transitions() {
        let mut s = state();
        assert_eq!(s.expanded_project(), None);

        s.toggle_project_detail(ProjectId(1));
        assert_eq!(s.expanded_project(), Some(ProjectId(1)));

        s.toggle_project_detail(ProjectId(4));
        assert_eq!(s.expanded_project(), Some(ProjectId(4)));

        s.toggle_project_detail(ProjectId(4));
        assert_eq!(s.expanded_project(), None);
    }

    #[test]
    fn skill_and_project_expansion_independent() {
        let mut s = state();
        s.toggle_project_detail(ProjectId(2));
        s.toggle_skill_category(SkillCategoryId("mobile"));
        assert_eq!(s.expanded_project(), Some(ProjectId(2)));
        assert_eq!(s.expanded_skill(), Some(SkillCategoryId("mobile")));

        s.toggle_skill_category(SkillCategoryId("mobile"));
        assert_eq!(s.expanded_skill(), None);
        assert_eq!(s.expanded_project(), Some(ProjectId(2)));
    }

    #[test]
    fn double_toggle_of_another_project_closes_both() {
        let mut s = state();
        s.toggle_project_detail(ProjectId(2));
        s.toggle_project_detail(ProjectId(5));
        s.toggle_project_detail(ProjectId(5));
        assert_eq!(s.expanded_project(), None);
    }

    #[test]
    fn double_toggle_of_another_skill_closes_both() {
        let mut s = state();
        let a = SKILL_CATEGORIES[0].id;
        let b = SKILL_CATEGORIES[1].id;
        s.toggle_skill_category(a);
        s.toggle_skill_category(b);
        s.toggle_skill_category(b);
        assert_eq!(s.expanded_skill(), None);
    }

    fn arb_project() -> impl Strategy<Value = ProjectId> {
        prop::sample::select(PROJECTS.iter().map(|p| p.id).collect::<Vec<_>>())
    }

    fn arb_skill() -> impl Strategy<Value = SkillCategoryId> {
        prop::sample::select(SKILL_CATEGORIES.iter().map(|c| c.id).collect::<Vec<_>>())
    }

    proptest! {
        #[test]
        fn prop_project_double_toggle_restores(
            history in prop::collection::vec(arb_project(), 0..8),
            id in arb_project(),
        ) {
            let mut s = state();
            for h in history {
                s.toggle_project_detail(h);
            }
            let before = s.expanded_project();
            s.toggle_project_detail(id);
            s.toggle_project_detail(id);
            // Only None and Expanded(id) come back; any other panel ends closed
            if before.is_none() || before == Some(id) {
                prop_assert_eq!(s.expanded_project(), before);
            } else {
                prop_assert_eq!(s.expanded_project(), None);
            }
        }

        #[test]
        fn prop_expanding_b_collapses_a(a in arb_project(), b in arb_project()) {
            prop_assume!(a != b);
            let mut s = state();
            s.toggle_project_detail(a);
            s.toggle_project_detail(b);
            prop_assert_eq!(s.expanded_project(), Some(b));
        }

        #[test]
        fn prop_skill_double_toggle_restores(
            history in prop::collection::vec(arb_skill(), 0..8),
            id in arb_skill(),
        ) {
            let mut s = state();
            for h in history {
                s.toggle_skill_category(h);
            }
            let before = s.expanded_skill();
            s.toggle_skill_category(id);
            s.toggle_skill_category(id);
            // Only None and Expanded(id) come back; any other panel ends closed
            if before.is_none() || before == Some(id) {
                prop_assert_eq!(s.expanded_skill(), before);
            } else {
                prop_assert_eq!(s.expanded_skill(), None);
            }
        }

        #[test]
        fn prop_expanding_skill_b_collapses_a(a in arb_skill(), b in arb_skill()) {
            prop_assume!(a != b);
            let mut s = state();
            s.toggle_skill_category(a);
            s.toggle_skill_category(b);
            prop_assert_eq!(s.expanded_skill(), Some(b));
        }

        #[test]
        fn prop_skill_toggles_leave_projects_alone(
            p in arb_project(),
            skills in prop::collection::vec(arb_skill(), 0..8),
        ) {
            let mut s = state();
            s.toggle_project_detail(p);
            for k in skills {
                s.toggle_skill_category(k);
            }
            prop_assert_eq!(s.expanded_project(), Some(p));
        }
    }

    // ── Scroll & pointer ───────────────────────────────────────────

    #[test]
    fn scroll_records_offset() {
        let mut s = state();
        s.on_scroll(420.0);
        assert_eq!(s.scroll_y(), 420.0);
        s.on_scroll(-30.0);
        assert_eq!(s.scroll_y(), 0.0);
    }

    #[test]
    fn pointer_recorded() {
        let mut s = state();
        s.on_pointer_move(0.25, -0.1);
        assert_eq!(s.snapshot().pointer, (0.25, -0.1));
    }

    // ── Mobile menu ────────────────────────────────────────────────

    #[test]
    fn menu_toggle_flips() {
        let mut s = state();
        assert!(!s.is_menu_open());
        s.toggle_mobile_menu();
        assert!(s.is_menu_open());
        s.toggle_mobile_menu();
        assert!(!s.is_menu_open());
    }

    #[test]
    fn scroll_closes_open_menu() {
        let mut s = state();
        s.toggle_mobile_menu();
        s.on_scroll(120.0);
        assert!(!s.is_menu_open());
        assert_eq!(s.scroll_y(), 120.0);
    }

    #[test]
    fn scroll_leaves_closed_menu_closed() {
        let mut s = state();
        s.on_scroll(120.0);
        assert!(!s.is_menu_open());
    }

    #[test]
    fn navigate_closes_menu_and_requests_scroll() {
        let mut s = state();
        s.toggle_mobile_menu();
        s.navigate_to_section(Section::Contact);
        assert!(!s.is_menu_open());
        assert_eq!(s.take_scroll_request(), Some(Section::Contact));
        assert_eq!(s.take_scroll_request(), None);
    }

    #[test]
    fn navigate_with_closed_menu() {
        let mut s = state();
        s.navigate_to_section(Section::Skills);
        assert!(!s.is_menu_open());
        assert_eq!(s.scroll_request(), Some(Section::Skills));
    }

    #[test]
    fn menu_holds_scroll_lock_while_open() {
        let (mut s, surface) = recorded();
        s.toggle_mobile_menu();
        assert!(surface.locked.get());
        s.close_mobile_menu();
        assert!(!surface.locked.get());
        // Closing an already closed menu releases nothing further
        s.close_mobile_menu();
        assert_eq!(surface.acquisitions.get(), 1);
        assert_eq!(surface.releases.get(), 1);
    }

    #[test]
    fn scroll_lock_released_on_every_close_path() {
        let (mut s, surface) = recorded();

        s.toggle_mobile_menu();
        s.on_scroll(10.0);
        assert!(!surface.locked.get());

        s.toggle_mobile_menu();
        s.navigate_to_section(Section::Education);
        assert!(!surface.locked.get());

        s.toggle_mobile_menu();
        s.toggle_mobile_menu();
        assert!(!surface.locked.get());

        assert_eq!(surface.acquisitions.get(), 3);
        assert_eq!(surface.releases.get(), 3);
    }

    #[test]
    fn scroll_lock_released_on_teardown() {
        let (mut s, surface) = recorded();
        s.toggle_mobile_menu();
        drop(s);
        assert!(!surface.locked.get());
        assert_eq!(surface.releases.get(), 1);
    }

    // ── Loading ────────────────────────────────────────────────────

    #[test]
    fn loading_finishes_exactly_once() {
        let mut s = state();
        assert!(s.is_loading());
        assert!(s.finish_loading());
        assert!(!s.is_loading());
        assert!(!s.finish_loading());
        assert!(!s.is_loading());
    }

    // ── Snapshot ───────────────────────────────────────────────────

    #[test]
    fn snapshot_reflects_state() {
        let mut s = state();
        s.finish_loading();
        s.on_scroll(64.0);
        s.toggle_project_detail(ProjectId(5));
        s.toggle_skill_category(SkillCategoryId("research"));
        s.toggle_mobile_menu();

        let snap = s.snapshot();
        assert_eq!(snap.scroll_y, 64.0);
        assert!(!snap.loading);
        assert_eq!(snap.expanded_project, Some(ProjectId(5)));
        assert_eq!(snap.expanded_skill, Some(SkillCategoryId("research")));
        assert!(snap.menu_open);
    }

    #[test]
    fn snapshot_serializes() {
        let s = state();
        let json = serde_json::to_string(&s.snapshot()).unwrap();
        assert!(json.contains("\"loading\":true"));
        assert!(json.contains("\"expanded_project\":null"));
    }
}
