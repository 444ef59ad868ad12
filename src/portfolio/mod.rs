//! The portfolio page: presentation state, the startup timer, smooth
//! scrolling and the render pass, driven by `main` one frame at a time.

pub mod actions;
pub mod effects;
pub mod layout;
pub mod render;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::Color;
use ratzilla::ratatui::Frame;
use tachyonfx::{fx, EffectManager, Interpolation};

use crate::console;
use crate::content::{self, LinkTarget, PROFILE, PROJECTS, SKILL_CATEGORIES};
use crate::input::{ClickState, InputEvent, NavKey};
use crate::scroll::{ScrollSurface, SmoothScroll};
use crate::time::{FrameClock, OneShot};

use actions::{
    indexed, nav_section, CLOSE_MENU, OPEN_LINK_BASE, SCROLL_TOP, TOGGLE_MENU,
    TOGGLE_PROJECT_BASE, TOGGLE_SKILL_BASE,
};
use effects::CELL_HEIGHT_PX;
use layout::PageLayout;
use state::{PresentationState, Section, Snapshot};

/// How long the loading screen stays up after startup.
pub const LOADING_DELAY_MS: f64 = 2000.0;
/// Fade-in played once the page becomes ready.
const READY_FADE_MS: u32 = 600;
/// Animation frames advance at 60fps of elapsed time, whatever the display rate.
const ANIM_FRAME_MS: f64 = 1000.0 / 60.0;

pub struct Portfolio {
    state: PresentationState,
    clock: FrameClock,
    loader: OneShot,
    smooth: SmoothScroll,
    /// Geometry of the last render pass.
    layout: PageLayout,
    effects: EffectManager<()>,
    /// Animation frame for the spinner and pulse, derived from elapsed time.
    anim_frame: u32,
    last_delta_ms: f64,
    /// Outbound links chosen since the last drain.
    pending_links: Vec<LinkTarget>,
    /// Width the one-line-per-row layout was last checked at.
    checked_width: u16,
}

impl Portfolio {
    pub fn new(surface: Rc<dyn ScrollSurface>, now_ms: f64) -> Self {
        Self {
            state: PresentationState::new(surface),
            clock: FrameClock::new(),
            loader: OneShot::start(now_ms, LOADING_DELAY_MS),
            smooth: SmoothScroll::new(),
            layout: PageLayout::default(),
            effects: EffectManager::default(),
            anim_frame: 0,
            last_delta_ms: 0.0,
            pending_links: Vec::new(),
            checked_width: 0,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Apply one input event. Returns true if it was handled.
    ///
    /// Until the page is ready only pointer movement is recorded.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        if let InputEvent::Pointer(x, y) = *event {
            self.state.on_pointer_move(x, y);
            return true;
        }
        if self.state.is_loading() {
            return false;
        }

        match *event {
            InputEvent::Key(c) => self.handle_key(c),
            InputEvent::Nav(key) => self.handle_nav(key),
            InputEvent::Click(id) => self.handle_click(id),
            InputEvent::Scroll(delta) => self.scroll_by(delta),
            InputEvent::Pointer(..) => true,
        }
    }

    fn handle_key(&mut self, c: char) -> bool {
        if let Some(section) = Section::ALL.into_iter().find(|s| s.key() == c) {
            self.navigate_to_section(section);
            return true;
        }
        match c {
            'm' => self.toggle_menu(),
            'j' => return self.scroll_by(CELL_HEIGHT_PX),
            'k' => return self.scroll_by(-CELL_HEIGHT_PX),
            ' ' => return self.scroll_by(self.layout.page_px()),
            '1'..='9' => return self.toggle_project((c as u8 - b'1') as usize),
            'A'..='Z' => return self.toggle_skill((c as u8 - b'A') as usize),
            'l' => return self.open_link(|t| matches!(t, LinkTarget::External(_))),
            'r' => return self.open_link(|t| matches!(t, LinkTarget::Download { .. })),
            _ => return false,
        }
        true
    }

    fn handle_nav(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::Up => self.scroll_by(-CELL_HEIGHT_PX),
            NavKey::Down => self.scroll_by(CELL_HEIGHT_PX),
            NavKey::PageUp => self.scroll_by(-self.layout.page_px()),
            NavKey::PageDown => self.scroll_by(self.layout.page_px()),
            NavKey::Home => self.scroll_to(0.0),
            NavKey::End => self.scroll_to(self.layout.max_scroll_px()),
            NavKey::Esc => {
                if !self.state.is_menu_open() {
                    return false;
                }
                self.close_menu();
                true
            }
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        if let Some(section) = nav_section(id) {
            self.navigate_to_section(section);
            return true;
        }
        match id {
            SCROLL_TOP => {
                self.state.close_mobile_menu();
                self.smooth.start(0.0);
                true
            }
            TOGGLE_MENU => {
                self.toggle_menu();
                true
            }
            CLOSE_MENU => {
                self.close_menu();
                true
            }
            _ => {
                if let Some(i) = indexed(id, TOGGLE_PROJECT_BASE) {
                    self.toggle_project(i)
                } else if let Some(i) = indexed(id, TOGGLE_SKILL_BASE) {
                    self.toggle_skill(i)
                } else if let Some(i) = indexed(id, OPEN_LINK_BASE) {
                    match PROFILE.links.get(i) {
                        Some(link) => {
                            self.pending_links.push(link.target);
                            true
                        }
                        None => false,
                    }
                } else {
                    false
                }
            }
        }
    }

    fn toggle_project(&mut self, index: usize) -> bool {
        match PROJECTS.get(index) {
            Some(p) => {
                self.state.toggle_project_detail(p.id);
                match self.state.expanded_project().and_then(content::project) {
                    Some(open) => console::log(&format!("project: {}", open.title)),
                    None => console::log("project: collapsed"),
                }
                true
            }
            None => false,
        }
    }

    fn toggle_skill(&mut self, index: usize) -> bool {
        match SKILL_CATEGORIES.get(index) {
            Some(c) => {
                self.state.toggle_skill_category(c.id);
                match self.state.expanded_skill().and_then(content::skill_category) {
                    Some(open) => console::log(&format!("skills: {}", open.name)),
                    None => console::log("skills: collapsed"),
                }
                true
            }
            None => false,
        }
    }

    fn open_link(&mut self, pred: impl Fn(&LinkTarget) -> bool) -> bool {
        match PROFILE.find_link(pred) {
            Some((_, link)) => {
                self.pending_links.push(link.target);
                true
            }
            None => false,
        }
    }

    fn toggle_menu(&mut self) {
        self.state.toggle_mobile_menu();
        console::log(if self.state.is_menu_open() { "menu: open" } else { "menu: closed" });
    }

    fn close_menu(&mut self) {
        if self.state.is_menu_open() {
            self.state.close_mobile_menu();
            console::log("menu: closed");
        }
    }

    /// Manual scrolling; cancels any smooth scroll in flight. Returns false
    /// while the open menu holds the scroll lock.
    fn scroll_by(&mut self, delta: f64) -> bool {
        let target = self.state.scroll_y() + delta;
        self.scroll_to(target)
    }

    fn scroll_to(&mut self, offset: f64) -> bool {
        if self.state.is_menu_open() {
            return false;
        }
        self.smooth.cancel();
        let clamped = self.layout.clamp_scroll(offset);
        self.state.on_scroll(clamped);
        true
    }

    /// Ask for a smooth scroll to `section`. Resolved against the layout on
    /// the next tick after the document exists.
    pub fn navigate_to_section(&mut self, section: Section) {
        console::log(&format!("navigate: #{}", section.anchor()));
        self.state.navigate_to_section(section);
    }

    /// Links the page wants opened, oldest first.
    pub fn take_link_requests(&mut self) -> Vec<LinkTarget> {
        std::mem::take(&mut self.pending_links)
    }

    /// Advance timers and animations to `now_ms`.
    pub fn tick(&mut self, now_ms: f64) {
        let delta = self.clock.update(now_ms);
        self.last_delta_ms = delta;
        self.anim_frame = (self.clock.elapsed_ms / ANIM_FRAME_MS) as u32;

        if self.loader.poll(now_ms) && self.state.finish_loading() {
            console::log("ready");
            self.effects.add_effect(fx::fade_from_fg(
                Color::Black,
                (READY_FADE_MS, Interpolation::QuadOut),
            ));
            console::log_json("snapshot", &self.state.snapshot());
        }
        if self.state.is_loading() {
            return;
        }

        if self.layout.is_laid_out() {
            if let Some(section) = self.state.take_scroll_request() {
                if let Some(target) = self.layout.target_offset(section) {
                    self.smooth.start(target);
                }
            }
        }

        if let Some(next) = self.smooth.step(self.state.scroll_y(), delta) {
            self.state.on_scroll(next);
        }
    }

    /// Draw the page and remember its geometry for navigation.
    pub fn render(&mut self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        let snap = self.state.snapshot();
        if !snap.loading && area.width != self.checked_width {
            self.checked_width = area.width;
            let overflow = render::wrap_overflow(&snap, area);
            if overflow > 0 {
                console::warn(&format!(
                    "layout: {} rows overflow at width {}",
                    overflow, area.width
                ));
            }
        }
        self.layout = render::render(&snap, f, area, click_state, self.anim_frame);
        if !snap.loading {
            self.effects.process_effects(
                tachyonfx::Duration::from_millis(self.last_delta_ms as u32),
                f.buffer_mut(),
                area,
            );
        }
    }
}

impl Drop for Portfolio {
    fn drop(&mut self) {
        if self.loader.is_pending() {
            console::log("startup timer cancelled");
        }
        self.loader.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::testing::RecordingSurface;
    use crate::scroll::NoopSurface;
    use crate::content::ProjectId;

    fn portfolio() -> Portfolio {
        Portfolio::new(Rc::new(NoopSurface), 0.0)
    }

    fn laid_out() -> PageLayout {
        PageLayout {
            anchors: vec![
                (Section::Projects, 40),
                (Section::Skills, 120),
                (Section::Education, 180),
                (Section::Contact, 230),
            ],
            content_rows: 260,
            viewport_rows: 30,
        }
    }

    /// A page past the loading screen with a document laid out.
    fn ready() -> Portfolio {
        let mut p = portfolio();
        p.tick(LOADING_DELAY_MS);
        p.layout = laid_out();
        p
    }

    /// Tick in 16ms steps until the smooth scroll settles.
    fn settle(p: &mut Portfolio, mut now: f64) -> f64 {
        for _ in 0..500 {
            now += 16.0;
            p.tick(now);
            if !p.smooth.is_active() {
                break;
            }
        }
        now
    }

    // ── Startup ────────────────────────────────────────────────

    #[test]
    fn loading_ends_after_delay_exactly_once() {
        let mut p = portfolio();
        assert!(p.is_loading());
        p.tick(1000.0);
        assert!(p.is_loading());
        p.tick(1999.0);
        assert!(p.is_loading());
        p.tick(2000.0);
        assert!(!p.is_loading());
        p.tick(10_000.0);
        assert!(!p.is_loading());
    }

    #[test]
    fn animation_frame_follows_elapsed_time() {
        let mut p = portfolio();
        p.tick(0.0);
        assert_eq!(p.anim_frame, 0);
        p.tick(500.0);
        assert!((29..=30).contains(&p.anim_frame));
        p.tick(1000.0);
        assert!((59..=60).contains(&p.anim_frame));
    }

    #[test]
    fn input_ignored_while_loading() {
        let mut p = portfolio();
        assert!(!p.handle_input(&InputEvent::Key('m')));
        assert!(!p.handle_input(&InputEvent::Click(TOGGLE_PROJECT_BASE)));
        assert!(!p.snapshot().menu_open);
        assert_eq!(p.snapshot().expanded_project, None);
    }

    #[test]
    fn pointer_tracked_while_loading() {
        let mut p = portfolio();
        assert!(p.handle_input(&InputEvent::Pointer(0.2, -0.3)));
        assert_eq!(p.snapshot().pointer, (0.2, -0.3));
    }

    // ── Navigation ─────────────────────────────────────────────

    #[test]
    fn key_navigation_scrolls_to_anchor() {
        let mut p = ready();
        assert!(p.handle_input(&InputEvent::Key('s')));
        settle(&mut p, LOADING_DELAY_MS);
        assert_eq!(p.snapshot().scroll_y, 120.0 * CELL_HEIGHT_PX);
    }

    #[test]
    fn click_navigation_closes_menu() {
        let mut p = ready();
        p.handle_input(&InputEvent::Key('m'));
        assert!(p.snapshot().menu_open);
        p.handle_input(&InputEvent::Click(actions::NAV_CONTACT));
        assert!(!p.snapshot().menu_open);
        settle(&mut p, LOADING_DELAY_MS);
        assert_eq!(p.snapshot().scroll_y, laid_out().max_scroll_px());
    }

    #[test]
    fn navigation_waits_for_layout() {
        let mut p = portfolio();
        p.tick(LOADING_DELAY_MS);
        p.navigate_to_section(Section::Education);
        p.tick(LOADING_DELAY_MS + 16.0);
        assert_eq!(p.state.scroll_request(), Some(Section::Education));

        p.layout = laid_out();
        settle(&mut p, LOADING_DELAY_MS + 16.0);
        assert_eq!(p.state.scroll_request(), None);
        assert_eq!(p.snapshot().scroll_y, 180.0 * CELL_HEIGHT_PX);
    }

    #[test]
    fn missing_anchor_is_silent_noop() {
        let mut p = ready();
        p.layout.anchors.retain(|(s, _)| *s != Section::Education);
        p.handle_input(&InputEvent::Key('e'));
        p.tick(LOADING_DELAY_MS + 16.0);
        assert_eq!(p.state.scroll_request(), None);
        assert!(!p.smooth.is_active());
        assert_eq!(p.snapshot().scroll_y, 0.0);
    }

    #[test]
    fn scroll_top_animates_home() {
        let mut p = ready();
        p.handle_input(&InputEvent::Scroll(800.0));
        p.handle_input(&InputEvent::Click(SCROLL_TOP));
        settle(&mut p, LOADING_DELAY_MS);
        assert_eq!(p.snapshot().scroll_y, 0.0);
    }

    // ── Manual scrolling ───────────────────────────────────────

    #[test]
    fn wheel_scroll_clamped_to_document() {
        let mut p = ready();
        p.handle_input(&InputEvent::Scroll(1e6));
        assert_eq!(p.snapshot().scroll_y, laid_out().max_scroll_px());
        p.handle_input(&InputEvent::Scroll(-1e6));
        assert_eq!(p.snapshot().scroll_y, 0.0);
    }

    #[test]
    fn nav_keys_scroll() {
        let mut p = ready();
        p.handle_input(&InputEvent::Nav(NavKey::Down));
        assert_eq!(p.snapshot().scroll_y, CELL_HEIGHT_PX);
        p.handle_input(&InputEvent::Key('j'));
        assert_eq!(p.snapshot().scroll_y, 2.0 * CELL_HEIGHT_PX);
        p.handle_input(&InputEvent::Nav(NavKey::PageDown));
        assert_eq!(p.snapshot().scroll_y, 32.0 * CELL_HEIGHT_PX);
        p.handle_input(&InputEvent::Nav(NavKey::End));
        assert_eq!(p.snapshot().scroll_y, laid_out().max_scroll_px());
        p.handle_input(&InputEvent::Nav(NavKey::Home));
        assert_eq!(p.snapshot().scroll_y, 0.0);
    }

    #[test]
    fn manual_scroll_cancels_smooth_scroll() {
        let mut p = ready();
        p.handle_input(&InputEvent::Key('c'));
        p.tick(LOADING_DELAY_MS + 16.0);
        assert!(p.smooth.is_active());
        p.handle_input(&InputEvent::Nav(NavKey::Home));
        assert!(!p.smooth.is_active());
        p.tick(LOADING_DELAY_MS + 32.0);
        assert_eq!(p.snapshot().scroll_y, 0.0);
    }

    // ── Menu ───────────────────────────────────────────────────

    #[test]
    fn esc_closes_menu() {
        let mut p = ready();
        p.handle_input(&InputEvent::Click(TOGGLE_MENU));
        assert!(p.snapshot().menu_open);
        assert!(p.handle_input(&InputEvent::Nav(NavKey::Esc)));
        assert!(!p.snapshot().menu_open);
        assert!(!p.handle_input(&InputEvent::Nav(NavKey::Esc)));
    }

    #[test]
    fn open_menu_holds_the_document_still() {
        let mut p = ready();
        p.handle_input(&InputEvent::Scroll(160.0));
        p.handle_input(&InputEvent::Key('m'));
        assert!(p.snapshot().menu_open);

        assert!(!p.handle_input(&InputEvent::Scroll(32.0)));
        assert!(!p.handle_input(&InputEvent::Key('j')));
        assert!(!p.handle_input(&InputEvent::Key(' ')));
        assert!(!p.handle_input(&InputEvent::Nav(NavKey::PageDown)));
        assert!(!p.handle_input(&InputEvent::Nav(NavKey::End)));
        assert_eq!(p.snapshot().scroll_y, 160.0);
        assert!(p.snapshot().menu_open);

        p.handle_input(&InputEvent::Key('m'));
        assert!(p.handle_input(&InputEvent::Scroll(32.0)));
        assert_eq!(p.snapshot().scroll_y, 192.0);
    }

    #[test]
    fn teardown_releases_scroll_lock() {
        let surface = Rc::new(RecordingSurface::default());
        let mut p = Portfolio::new(surface.clone(), 0.0);
        p.tick(LOADING_DELAY_MS);
        p.handle_input(&InputEvent::Key('m'));
        assert!(surface.locked.get());
        drop(p);
        assert!(!surface.locked.get());
    }

    // ── Toggles ────────────────────────────────────────────────

    #[test]
    fn project_toggles_by_click_and_key() {
        let mut p = ready();
        p.handle_input(&InputEvent::Click(TOGGLE_PROJECT_BASE + 2));
        assert_eq!(p.snapshot().expanded_project, Some(ProjectId(3)));
        p.handle_input(&InputEvent::Key('3'));
        assert_eq!(p.snapshot().expanded_project, None);
        p.handle_input(&InputEvent::Key('6'));
        assert_eq!(p.snapshot().expanded_project, Some(ProjectId(6)));
    }

    #[test]
    fn skill_toggles_by_shifted_key() {
        let mut p = ready();
        p.handle_input(&InputEvent::Key('B'));
        assert_eq!(p.snapshot().expanded_skill, Some(SKILL_CATEGORIES[1].id));
        p.handle_input(&InputEvent::Click(TOGGLE_SKILL_BASE + 1));
        assert_eq!(p.snapshot().expanded_skill, None);
    }

    #[test]
    fn out_of_range_targets_ignored() {
        let mut p = ready();
        assert!(!p.handle_input(&InputEvent::Click(TOGGLE_PROJECT_BASE + 50)));
        assert!(!p.handle_input(&InputEvent::Key('9')));
        assert!(!p.handle_input(&InputEvent::Key('Z')));
        assert!(!p.handle_input(&InputEvent::Click(OPEN_LINK_BASE + 40)));
        assert_eq!(p.snapshot().expanded_project, None);
        assert_eq!(p.snapshot().expanded_skill, None);
        assert!(p.take_link_requests().is_empty());
    }

    // ── Links ──────────────────────────────────────────────────

    #[test]
    fn link_requests_are_queued_in_order() {
        let mut p = ready();
        p.handle_input(&InputEvent::Click(OPEN_LINK_BASE));
        p.handle_input(&InputEvent::Key('l'));
        p.handle_input(&InputEvent::Key('r'));

        let links = p.take_link_requests();
        assert_eq!(links.len(), 3);
        assert!(matches!(links[0], LinkTarget::Email(_)));
        assert!(matches!(links[1], LinkTarget::External(_)));
        assert!(matches!(links[2], LinkTarget::Download { .. }));
        assert!(p.take_link_requests().is_empty());
    }

    // ── Render ─────────────────────────────────────────────────

    #[test]
    fn render_records_layout_and_checked_width() {
        use ratzilla::ratatui::backend::TestBackend;
        use ratzilla::ratatui::Terminal;

        let mut p = portfolio();
        p.tick(LOADING_DELAY_MS);
        let click_state = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                p.render(f, area, &click_state);
            })
            .unwrap();

        assert_eq!(p.checked_width, 100);
        assert!(p.layout.is_laid_out());
        assert_eq!(p.layout.viewport_rows, 30);
    }

    #[test]
    fn loading_render_skips_layout_check() {
        use ratzilla::ratatui::backend::TestBackend;
        use ratzilla::ratatui::Terminal;

        let mut p = portfolio();
        let click_state = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                p.render(f, area, &click_state);
            })
            .unwrap();

        assert_eq!(p.checked_width, 0);
        assert!(!p.layout.is_laid_out());
    }
}
