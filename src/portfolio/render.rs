//! Portfolio page rendering: loading screen, navigation bar, the scrolling
//! document, hero decorations and the mobile menu overlay.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratzilla::ratatui::Frame;

use crate::content::{
    self, LinkTarget, Rgb, CERTIFICATIONS, EDUCATION, PROFILE, PROJECTS, PUBLICATION,
    SKILL_CATEGORIES, STATS, TALENTS, TALENTS_REMARK,
};
use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{wrap_text, NavLinks, PageBuilder};

use super::actions::{
    nav_action, CLOSE_MENU, OPEN_LINK_BASE, SCROLL_TOP, TOGGLE_MENU, TOGGLE_PROJECT_BASE,
    TOGGLE_SKILL_BASE,
};
use super::effects::{
    dither_threshold, fade, glow_intensity, glow_offset, intro_reveal, lerp_rgb, nav_backdrop,
    stat_reveal, HeroStyle, CELL_HEIGHT_PX, CELL_WIDTH_PX, GLOW_RGB, HERO_SCALE_FLOOR,
};
use super::layout::PageLayout;
use super::state::{Section, Snapshot};

/// Spinner characters for the loading screen.
const SPINNER: &[char] = &['◐', '◓', '◑', '◒'];

/// Navigation bar: one row of content plus the bottom border.
const NAV_ROWS: u16 = 2;
/// The hero fills the viewport but never shrinks below this.
const HERO_MIN_ROWS: u16 = 16;
/// Rows of hero content: disciplines, gap, name (2), gap, role, gap, links (3).
const HERO_CONTENT_ROWS: u16 = 10;

// ── Palette ────────────────────────────────────────────────────

const WHITE: Rgb = (245, 245, 247);
const GRAY_300: Rgb = (209, 213, 219);
const GRAY_400: Rgb = (156, 163, 175);
const GRAY_500: Rgb = (107, 114, 128);
const GRAY_600: Rgb = (75, 85, 99);
const GRAY_800: Rgb = (31, 41, 55);
const PURPLE_500: Rgb = (168, 85, 247);
const PINK_500: Rgb = (236, 72, 153);
const BLUE_500: Rgb = (59, 130, 246);
const BLUE_400: Rgb = (96, 165, 250);
const GREEN_400: Rgb = (74, 222, 128);
const BACKDROP: Rgb = (18, 18, 20);

fn rgb(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

fn fg(c: Rgb) -> Style {
    Style::default().fg(rgb(c))
}

fn bold(c: Rgb) -> Style {
    fg(c).add_modifier(Modifier::BOLD)
}

// ── Entry point ────────────────────────────────────────────────

/// Draw the page for `snap` and return the geometry of what was drawn.
///
/// While loading, only the spinner is drawn and the returned layout has no
/// anchors, so navigation requests wait until the document exists.
pub fn render(
    snap: &Snapshot,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
    anim_frame: u32,
) -> PageLayout {
    if snap.loading {
        render_loading(f, area, anim_frame);
        return PageLayout::default();
    }

    let narrow = is_narrow_layout(area.width);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(NAV_ROWS), Constraint::Min(1)])
        .split(area);
    let body = chunks[1];

    let doc = build_document(snap, body.width, body.height);
    let layout = PageLayout {
        anchors: doc.page.anchors().to_vec(),
        content_rows: doc.page.len(),
        viewport_rows: body.height,
    };
    let scroll_row = (layout.clamp_scroll(snap.scroll_y) / CELL_HEIGHT_PX) as u16;

    {
        let mut cs = click_state.borrow_mut();
        doc.page.register_targets(body, &mut cs, scroll_row);
    }

    let hero_rows = doc.hero_rows;
    let name_rows = doc.name_rows;
    let widget = Paragraph::new(doc.page.into_lines())
        .style(Style::default().bg(Color::Black))
        .scroll((scroll_row, 0));
    f.render_widget(widget, body);

    paint_glow(f, body, scroll_row, hero_rows, snap.pointer);
    let coverage = HeroStyle::at(snap.scroll_y).blur_coverage();
    dither_rows(f, body, scroll_row, &name_rows, coverage);

    render_nav(snap, f, chunks[0], narrow, click_state);

    // Registered last so the overlay takes clicks over the document
    if snap.menu_open {
        render_menu(f, body, click_state);
    }

    layout
}

// ── Loading ────────────────────────────────────────────────────

fn render_loading(f: &mut Frame, area: Rect, anim_frame: u32) {
    let spinner = SPINNER[(anim_frame / 6) as usize % SPINNER.len()];
    // Core brightness pulses on a ~1s cycle
    let phase = (anim_frame % 60) as f64 / 60.0;
    let pulse = 0.55 + 0.45 * (phase * std::f64::consts::TAU).sin().abs();

    let lines = vec![
        Line::from(Span::styled(spinner.to_string(), bold(PURPLE_500))),
        Line::from(""),
        Line::from(Span::styled("●", Style::default().fg(fade(WHITE, pulse)))),
        Line::from(""),
        Line::from(Span::styled(PROFILE.short_name, fg(GRAY_500))),
    ];
    let height = lines.len() as u16;
    let top = area.y + area.height.saturating_sub(height) / 2;
    let inner = Rect::new(area.x, top, area.width, height.min(area.height));

    f.render_widget(Block::default().style(Style::default().bg(Color::Black)), area);
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

// ── Navigation bar ─────────────────────────────────────────────

fn render_nav(
    snap: &Snapshot,
    f: &mut Frame,
    area: Rect,
    narrow: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let bg = if nav_backdrop(snap.scroll_y) { rgb(BACKDROP) } else { Color::Black };
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(if nav_backdrop(snap.scroll_y) {
            rgb(GRAY_800)
        } else {
            Color::Black
        }))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let row = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1);
    let name = Span::styled(PROFILE.short_name, bold(WHITE));
    let name_width = (name.width() as u16).min(row.width);
    f.render_widget(Paragraph::new(Line::from(name)), row);

    let mut cs = click_state.borrow_mut();
    cs.add_click_target(Rect::new(row.x, row.y, name_width, 1), SCROLL_TOP);

    if narrow {
        let label = if snap.menu_open { "✕ Close" } else { "☰ Menu" };
        let w = Line::from(label).width() as u16;
        if row.width > name_width + w + 1 {
            let button = Rect::new(row.x + row.width - w, row.y, w, 1);
            f.render_widget(Paragraph::new(Line::from(Span::styled(label, bold(WHITE)))), button);
            cs.add_click_target(button, TOGGLE_MENU);
        }
        return;
    }

    let link_style = fg(GRAY_300);
    let mut nav = NavLinks::new("  ");
    for section in Section::ALL {
        nav = nav.link(section.label(), link_style, nav_action(section));
    }
    let links_width = nav.width().min(row.width.saturating_sub(name_width + 2));
    if links_width > 0 {
        let links_area = Rect::new(row.x + row.width - links_width, row.y, links_width, 1);
        nav.render(f, links_area, &mut cs);
    }
}

// ── Mobile menu ────────────────────────────────────────────────

fn render_menu(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    f.render_widget(Clear, area);
    f.render_widget(Block::default().style(Style::default().bg(rgb(BACKDROP))), area);

    // One label every other row, vertically centred
    let items = Section::ALL.len() as u16;
    let needed = items * 2 - 1;
    let top = area.y + area.height.saturating_sub(needed) / 2;

    let mut cs = click_state.borrow_mut();
    cs.add_click_target(area, CLOSE_MENU);
    for (i, section) in Section::ALL.iter().enumerate() {
        let y = top + i as u16 * 2;
        if y >= area.y + area.height {
            break;
        }
        let row = Rect::new(area.x, y, area.width, 1);
        let label = Line::from(vec![
            Span::styled(section.label(), bold(WHITE)),
            Span::styled(
                format!("  [{}]", section.key()),
                fg(GRAY_600),
            ),
        ])
        .alignment(Alignment::Center);
        f.render_widget(Paragraph::new(label), row);
        cs.add_row_target(area, y, nav_action(*section));
    }
}

// ── Document ───────────────────────────────────────────────────

struct Document {
    page: PageBuilder<'static, Section>,
    hero_rows: u16,
    /// Document rows holding the hero name (blurred while scrolling).
    name_rows: Vec<u16>,
}

fn build_document(snap: &Snapshot, width: u16, viewport_rows: u16) -> Document {
    let mut page = PageBuilder::new(width);

    let hero_rows = viewport_rows.max(HERO_MIN_ROWS);
    let name_rows = push_hero(&mut page, snap, hero_rows);
    push_intro(&mut page, snap);

    page.anchor(Section::Projects);
    push_projects(&mut page, snap);

    page.anchor(Section::Skills);
    push_skills(&mut page, snap);

    page.anchor(Section::Education);
    push_education(&mut page);
    push_talents(&mut page);

    page.anchor(Section::Contact);
    push_contact(&mut page);
    push_footer(&mut page);

    Document {
        page,
        hero_rows,
        name_rows,
    }
}

/// Rows the document gains when its lines are wrapped to the body width of
/// `area`; zero while every line fits its row.
pub fn wrap_overflow(snap: &Snapshot, area: Rect) -> usize {
    let doc = build_document(snap, area.width, area.height.saturating_sub(NAV_ROWS));
    doc.page
        .visual_height()
        .saturating_sub(doc.page.len() as usize)
}

fn centered(spans: Vec<Span<'static>>) -> Line<'static> {
    Line::from(spans).alignment(Alignment::Center)
}

fn push_heading(page: &mut PageBuilder<'static, Section>, title: &'static str) {
    page.push_blank(2);
    page.push(centered(vec![Span::styled(
        title,
        bold(WHITE).add_modifier(Modifier::UNDERLINED),
    )]));
    page.push_blank(1);
}

fn push_centered_wrapped(page: &mut PageBuilder<'static, Section>, text: &str, style: Style) {
    let width = page.width().saturating_sub(2).max(1) as usize;
    for row in wrap_text(text, width) {
        page.push(centered(vec![Span::styled(row, style)]));
    }
}

fn push_subheading(page: &mut PageBuilder<'static, Section>, title: &'static str) {
    page.push_blank(1);
    page.push(centered(vec![Span::styled(title, bold(GRAY_300))]));
    page.push_blank(1);
}

/// Wrapped paragraph with a hanging indent after `marker`.
fn bullet_lines(text: &str, marker: &'static str, marker_color: Rgb, text_color: Rgb, width: u16) -> Vec<Line<'static>> {
    let indent = 2 + Line::from(marker).width();
    let avail = (width as usize).saturating_sub(indent + 2).max(8);
    wrap_text(text, avail)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            let lead = if i == 0 {
                Span::styled(format!("  {}", marker), fg(marker_color))
            } else {
                Span::raw(" ".repeat(indent))
            };
            Line::from(vec![lead, Span::styled(row, fg(text_color))])
        })
        .collect()
}

/// Pack labels into rows of rounded chips.
fn chip_rows(items: &[&'static str], width: u16, indent: u16) -> Vec<Line<'static>> {
    let avail = width.saturating_sub(indent * 2).max(1) as usize;
    let chip_style = Style::default().fg(rgb(GRAY_300)).bg(rgb(GRAY_800));
    let mut rows: Vec<Line<'static>> = Vec::new();
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ".repeat(indent as usize))];
    let mut used = 0usize;

    for item in items {
        let chip = format!(" {} ", item);
        let w = Span::raw(chip.as_str()).width();
        if used > 0 && used + 1 + w > avail {
            rows.push(Line::from(std::mem::replace(
                &mut spans,
                vec![Span::raw(" ".repeat(indent as usize))],
            )));
            used = 0;
        }
        if used > 0 {
            spans.push(Span::raw(" "));
            used += 1;
        }
        spans.push(Span::styled(chip, chip_style));
        used += w;
    }
    if used > 0 {
        rows.push(Line::from(spans));
    }
    rows
}

/// Text coloured along a two-stop gradient, faded by `opacity`.
fn gradient_spans(text: &str, from: Rgb, to: Rgb, opacity: f64, modifier: Modifier) -> Vec<Span<'static>> {
    let n = text.chars().count().max(2) - 1;
    text.chars()
        .enumerate()
        .map(|(i, ch)| {
            let c = lerp_rgb(from, to, i as f64 / n as f64);
            Span::styled(
                ch.to_string(),
                Style::default().fg(fade(c, opacity)).add_modifier(modifier),
            )
        })
        .collect()
}

/// Proficiency gauge: `█` for the filled share, `░` for the rest.
fn gauge(level: u8, width: u16) -> Vec<Span<'static>> {
    let width = width.max(1) as usize;
    let filled = (level.min(100) as usize * width + 50) / 100;
    let mut spans: Vec<Span<'static>> = (0..filled)
        .map(|i| {
            let c = lerp_rgb(BLUE_500, PURPLE_500, i as f64 / width as f64);
            Span::styled("\u{2588}", Style::default().fg(rgb(c)))
        })
        .collect();
    spans.push(Span::styled(
        "\u{2591}".repeat(width - filled),
        fg(GRAY_800),
    ));
    spans
}

/// Spaces inserted between letters of the hero name at a given scale.
fn letter_spacing(scale: f64) -> usize {
    ((scale - HERO_SCALE_FLOOR) / (1.0 - HERO_SCALE_FLOOR) * 2.0)
        .round()
        .clamp(0.0, 2.0) as usize
}

fn spaced(text: &str, spacing: usize) -> String {
    let gap = " ".repeat(spacing);
    let mut out = String::new();
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            out.push_str(&gap);
        }
        out.push(ch);
    }
    out
}

fn link_icon(target: &LinkTarget) -> &'static str {
    match target {
        LinkTarget::Email(_) => "✉",
        LinkTarget::Phone(_) => "☏",
        LinkTarget::External(_) => "◈",
        LinkTarget::Download { .. } => "⤓",
    }
}

/// Keyboard shortcut shown next to a link, if it has one.
fn link_key(target: &LinkTarget) -> Option<char> {
    match target {
        LinkTarget::External(_) => Some('l'),
        LinkTarget::Download { .. } => Some('r'),
        _ => None,
    }
}

// ── Hero ───────────────────────────────────────────────────────

/// Push the hero band and return the document rows of the name.
fn push_hero(page: &mut PageBuilder<'static, Section>, snap: &Snapshot, rows: u16) -> Vec<u16> {
    let style = HeroStyle::at(snap.scroll_y);
    let width = page.width() as usize;
    let mut band: Vec<(Line<'static>, Option<u16>)> = (0..rows).map(|_| (Line::from(""), None)).collect();
    // Keep the bottom two rows for the scroll indicator
    let limit = rows.saturating_sub(2) as usize;
    let top = (rows.saturating_sub(HERO_CONTENT_ROWS) / 2) as usize;

    let place = |band: &mut Vec<(Line<'static>, Option<u16>)>, row: usize, line: Line<'static>, action: Option<u16>| {
        if row < limit {
            band[row] = (line, action);
        }
    };

    place(
        &mut band,
        top,
        centered(vec![Span::styled(PROFILE.disciplines.to_uppercase(), fg(GRAY_500))]),
        None,
    );

    // Contact links do not move
    for (i, link) in PROFILE.links.iter().take(3).enumerate() {
        let line = centered(vec![
            Span::styled(format!("{} ", link_icon(&link.target)), fg(GRAY_400)),
            Span::styled(link.label, fg(WHITE)),
        ]);
        place(&mut band, top + 7 + i, line, Some(OPEN_LINK_BASE + i as u16));
    }

    let role_row = top + 5 + style.tagline_parallax_rows() as usize;
    place(
        &mut band,
        role_row,
        centered(vec![Span::styled(
            PROFILE.role,
            Style::default().fg(fade(GRAY_400, style.tagline_opacity)),
        )]),
        None,
    );

    // Name is placed last; it moves faster and passes over the tagline
    let spacing = (0..=letter_spacing(style.scale))
        .rev()
        .find(|s| {
            PROFILE
                .name_lines
                .iter()
                .all(|n| Line::from(spaced(n, *s)).width() <= width)
        })
        .unwrap_or(0);
    let name_top = top + 2 + style.parallax_rows() as usize;
    let first = spaced(PROFILE.name_lines[0], spacing);
    let second = spaced(PROFILE.name_lines[1], spacing);
    let mut name_rows = Vec::new();
    if name_top < limit {
        place(
            &mut band,
            name_top,
            centered(vec![Span::styled(
                first,
                Style::default()
                    .fg(fade(WHITE, style.opacity))
                    .add_modifier(Modifier::BOLD),
            )]),
            None,
        );
        name_rows.push(name_top as u16);
    }
    if name_top + 1 < limit {
        let half = second.chars().count() / 2;
        let (a, b): (String, String) = (
            second.chars().take(half).collect(),
            second.chars().skip(half).collect(),
        );
        let mut spans = gradient_spans(&a, PURPLE_500, PINK_500, style.opacity, Modifier::BOLD);
        spans.extend(gradient_spans(&b, PINK_500, BLUE_500, style.opacity, Modifier::BOLD));
        place(&mut band, name_top + 1, centered(spans), None);
        name_rows.push(name_top as u16 + 1);
    }

    if style.indicator_opacity > 0.0 && rows >= 2 {
        let c = fade(GRAY_600, style.indicator_opacity);
        band[rows as usize - 2] = (
            centered(vec![Span::styled("╭─╮", Style::default().fg(c))]),
            None,
        );
        band[rows as usize - 1] = (
            centered(vec![Span::styled("│↓│", Style::default().fg(c))]),
            None,
        );
    }

    for (line, action) in band {
        match action {
            Some(id) => page.push_clickable(line, id),
            None => page.push(line),
        }
    }
    name_rows
}

// ── Introduction ───────────────────────────────────────────────

fn push_intro(page: &mut PageBuilder<'static, Section>, snap: &Snapshot) {
    let width = page.width();
    let heading = fade(WHITE, intro_reveal(snap.scroll_y));
    page.push_blank(3);
    page.push_wrapped(PROFILE.intro, 2, Style::default().fg(heading).add_modifier(Modifier::BOLD));
    page.push_blank(2);

    let reveal = stat_reveal(snap.scroll_y);
    for stat in STATS {
        let metric_style = if stat.numeric {
            Style::default().fg(fade(WHITE, reveal)).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fade(WHITE, reveal))
        };
        page.push(Line::from(vec![
            Span::styled(format!("  {} ", stat.icon), Style::default().fg(fade(PURPLE_500, reveal))),
            Span::styled(stat.metric, metric_style),
            Span::styled(format!("  {}", stat.label), Style::default().fg(fade(GRAY_400, reveal))),
        ]));
        for row in wrap_text(stat.sublabel, width.saturating_sub(8).max(8) as usize) {
            page.push(Line::from(Span::styled(
                format!("    {}", row),
                Style::default().fg(fade(GRAY_600, reveal)),
            )));
        }
        page.push_blank(1);
    }
}

// ── Projects ───────────────────────────────────────────────────

fn push_projects(page: &mut PageBuilder<'static, Section>, snap: &Snapshot) {
    let width = page.width();
    push_heading(page, "Projects");
    page.push_wrapped(PROFILE.projects_tagline, 2, fg(GRAY_500));
    page.push_blank(1);

    for (i, project) in PROJECTS.iter().enumerate() {
        let action = TOGGLE_PROJECT_BASE + i as u16;
        let expanded = snap.expanded_project == Some(project.id);
        let (from, to) = project.theme.gradient();

        for (row, text) in wrap_text(project.title, width.saturating_sub(6).max(8) as usize)
            .into_iter()
            .enumerate()
        {
            let lead = if row == 0 {
                format!("  {} ", project.icon)
            } else {
                "    ".to_string()
            };
            let mut spans = vec![Span::styled(lead, fg(WHITE))];
            spans.extend(gradient_spans(&text, from, to, 1.0, Modifier::BOLD));
            page.push_clickable(Line::from(spans), action);
        }
        page.push_wrapped_clickable(project.subtitle, 4, fg(GRAY_400), action);

        let chevron = if expanded { "▾" } else { "▸" };
        page.push_clickable(
            Line::from(vec![
                Span::styled(format!("    View details {}", chevron), bold(WHITE)),
                Span::styled(format!("  [{}]", i + 1), fg(GRAY_600)),
            ]),
            action,
        );
        page.push_blank(1);
        page.push_wrapped_clickable(project.overview, 4, fg(GRAY_300), action);
        page.push_blank(1);

        let per_row = if is_narrow_layout(width) { 1 } else { 2 };
        let col = (width.saturating_sub(4) / per_row as u16) as usize;
        for pair in project.impact.chunks(per_row) {
            let mut spans = vec![Span::raw("    ")];
            for (j, (key, value)) in pair.iter().enumerate() {
                spans.push(Span::styled(*value, bold(BLUE_400)));
                spans.push(Span::styled(format!(" {}", key), fg(GRAY_500)));
                if j + 1 < pair.len() {
                    let cell = format!("{} {}", value, key);
                    let pad = col.saturating_sub(Line::from(cell.as_str()).width());
                    spans.push(Span::raw(" ".repeat(pad)));
                }
            }
            page.push_clickable(Line::from(spans), action);
        }

        if expanded {
            push_project_details(page, project);
        }
        page.push_blank(2);
    }
}

fn push_project_details(page: &mut PageBuilder<'static, Section>, project: &'static content::Project) {
    let width = page.width();
    let details = &project.details;

    page.push_blank(1);
    page.push(Line::from(Span::styled("    Challenge", bold(WHITE))));
    page.push_wrapped(details.problem, 4, fg(GRAY_400));
    page.push_blank(1);
    page.push(Line::from(Span::styled("    Solution", bold(WHITE))));
    page.push_wrapped(details.solution, 4, fg(GRAY_400));
    page.push_blank(1);
    page.push(Line::from(Span::styled("    Technologies Used", bold(WHITE))));
    for line in chip_rows(details.technologies, width, 4) {
        page.push(line);
    }
    page.push_blank(1);
    page.push(Line::from(Span::styled("    Key Outcomes", bold(WHITE))));
    for outcome in details.outcomes {
        for line in bullet_lines(outcome, "  • ", GREEN_400, GRAY_400, width) {
            page.push(line);
        }
    }
}

// ── Skills ─────────────────────────────────────────────────────

fn push_skills(page: &mut PageBuilder<'static, Section>, snap: &Snapshot) {
    let width = page.width();
    push_heading(page, "Technical Expertise");

    for (i, category) in SKILL_CATEGORIES.iter().enumerate() {
        let action = TOGGLE_SKILL_BASE + i as u16;
        let expanded = snap.expanded_skill == Some(category.id);
        let key = (b'A' + i as u8) as char;

        page.push_clickable(
            Line::from(vec![
                Span::styled(format!("  {} ", category.icon), fg(PURPLE_500)),
                Span::styled(category.name, bold(WHITE)),
                Span::styled(if expanded { "  −" } else { "  +" }, bold(GRAY_400)),
                Span::styled(format!("  [{}]", key), fg(GRAY_600)),
            ]),
            action,
        );

        if expanded {
            let bar_width = width.saturating_sub(8).min(60);
            for skill in category.skills {
                let level = format!("{}%", skill.level);
                let pad = (bar_width as usize)
                    .saturating_sub(Line::from(skill.name).width() + level.len())
                    .max(1);
                page.push_clickable(
                    Line::from(vec![
                        Span::styled(format!("    {}", skill.name), fg(WHITE)),
                        Span::raw(" ".repeat(pad)),
                        Span::styled(level, fg(GRAY_500)),
                    ]),
                    action,
                );
                let mut bar = vec![Span::raw("    ")];
                bar.extend(gauge(skill.level, bar_width));
                page.push_clickable(Line::from(bar), action);
                page.push_wrapped_clickable(skill.projects, 4, fg(GRAY_600), action);
            }
        } else {
            let names: Vec<&'static str> = category.skills.iter().map(|s| s.name).collect();
            for line in chip_rows(&names, width, 4) {
                page.push_clickable(line, action);
            }
        }
        page.push_blank(1);
    }
}

// ── Education ──────────────────────────────────────────────────

fn push_education(page: &mut PageBuilder<'static, Section>) {
    let width = page.width();
    push_heading(page, "Education & Growth");

    push_subheading(page, "Academic Journey");
    for entry in EDUCATION {
        page.push_wrapped(entry.degree, 2, bold(WHITE));
        page.push_wrapped(entry.field, 2, fg(PURPLE_500));
        page.push_wrapped(&format!("{} • {}", entry.school, entry.location), 2, fg(GRAY_400));
        page.push_wrapped(&format!("{} │ GPA {}", entry.period, entry.grade), 2, fg(GRAY_500));
        for h in entry.highlights {
            for line in bullet_lines(h, "• ", BLUE_400, GRAY_400, width) {
                page.push(line);
            }
        }
        page.push_blank(1);
    }

    push_subheading(page, "Research & Publications");
    page.push_wrapped(PUBLICATION.title, 2, bold(WHITE));
    page.push_wrapped(PUBLICATION.kind, 2, fg(PURPLE_500));
    page.push_wrapped(PUBLICATION.venue, 2, fg(GRAY_500));
    page.push_blank(1);
    for (value, caption) in PUBLICATION.highlights {
        page.push(Line::from(Span::styled(format!("  {}", value), bold(BLUE_400))));
        page.push_wrapped(caption, 4, fg(GRAY_500));
    }
    page.push_blank(1);
    page.push_wrapped(PUBLICATION.summary, 2, fg(GRAY_400));

    push_subheading(page, "Certifications & Leadership");
    for cert in CERTIFICATIONS {
        page.push_wrapped(&format!("{} {}", cert.icon, cert.name), 2, bold(WHITE));
        page.push_wrapped(&format!("{} • {}", cert.issuer, cert.date), 4, fg(GRAY_500));
    }
}

fn push_talents(page: &mut PageBuilder<'static, Section>) {
    push_heading(page, "Additional Creative Talents");
    for talent in TALENTS {
        page.push(Line::from(vec![
            Span::raw(format!("  {} ", talent.icon)),
            Span::styled(talent.title, bold(WHITE)),
        ]));
        page.push_wrapped(talent.description, 4, fg(GRAY_500));
        page.push_blank(1);
    }
    page.push_wrapped(TALENTS_REMARK, 2, fg(GRAY_400));
}

// ── Contact & footer ───────────────────────────────────────────

fn push_contact(page: &mut PageBuilder<'static, Section>) {
    push_heading(page, PROFILE.contact_heading);
    page.push_wrapped(PROFILE.contact_pitch, 2, fg(GRAY_300));
    page.push_blank(1);

    for (i, link) in PROFILE.links.iter().enumerate() {
        let mut spans = vec![
            Span::styled(format!("  {}  ", link_icon(&link.target)), fg(PURPLE_500)),
            Span::styled(link.label, bold(WHITE).add_modifier(Modifier::UNDERLINED)),
        ];
        if let Some(key) = link_key(&link.target) {
            spans.push(Span::styled(format!("  [{}]", key), fg(GRAY_600)));
        }
        page.push_clickable(Line::from(spans), OPEN_LINK_BASE + i as u16);
    }

    page.push_blank(1);
    for note in PROFILE.contact_footnotes {
        page.push_wrapped(note, 2, fg(GRAY_500));
    }
    page.push_blank(2);
}

fn push_footer(page: &mut PageBuilder<'static, Section>) {
    let width = page.width() as usize;
    page.push(Line::from(Span::styled(
        format!(" {}", "─".repeat(width.saturating_sub(2))),
        fg(GRAY_800),
    )));
    push_centered_wrapped(page, PROFILE.copyright, fg(GRAY_600));
    push_centered_wrapped(page, &format!("{} • {}", PROFILE.location, PROFILE.signature), fg(GRAY_600));
    page.push_blank(1);
}

// ── Hero post-processing ───────────────────────────────────────

/// Tint the visible part of the hero band with a purple radial glow
/// displaced by the pointer.
fn paint_glow(f: &mut Frame, body: Rect, scroll_row: u16, hero_rows: u16, pointer: (f64, f64)) {
    if scroll_row >= hero_rows || body.width == 0 {
        return;
    }
    let (dx, dy) = glow_offset(pointer);
    let cx = body.width as f64 / 2.0 + dx / CELL_WIDTH_PX;
    let cy = hero_rows as f64 / 2.0 + dy / CELL_HEIGHT_PX;
    let rx = (body.width as f64 * 0.45).max(1.0);
    let ry = (hero_rows as f64 * 0.45).max(1.0);

    let visible = (hero_rows - scroll_row).min(body.height);
    let buf = f.buffer_mut();
    for offset in 0..visible {
        let doc_row = (scroll_row + offset) as f64;
        let y = body.y + offset;
        for col in 0..body.width {
            let nx = (col as f64 - cx) / rx;
            let ny = (doc_row - cy) / ry;
            let t = glow_intensity((nx * nx + ny * ny).sqrt());
            if t <= 0.0 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((body.x + col, y)) {
                let base = match cell.bg {
                    Color::Rgb(r, g, b) => (r, g, b),
                    _ => (0, 0, 0),
                };
                cell.set_bg(rgb(lerp_rgb(base, GLOW_RGB, t)));
            }
        }
    }
}

/// Replace a share of the name glyphs with a shade character.
fn dither_rows(f: &mut Frame, body: Rect, scroll_row: u16, rows: &[u16], coverage: f64) {
    if coverage <= 0.0 {
        return;
    }
    let buf = f.buffer_mut();
    for &doc_row in rows {
        if doc_row < scroll_row || doc_row - scroll_row >= body.height {
            continue;
        }
        let y = body.y + (doc_row - scroll_row);
        for x in body.x..body.x + body.width {
            if dither_threshold(x, y) >= coverage {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                if cell.symbol() != " " {
                    cell.set_symbol("░");
                }
            }
        }
    }
}
