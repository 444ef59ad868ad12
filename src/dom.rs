//! Browser glue: body scroll lock, window event subscriptions, link
//! opening, location hash, timing and the structured-data tag.
//!
//! Every helper gives up quietly (returns `None`) when the window, document
//! or element it needs is missing.

use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, HtmlElement};

use crate::content::{LinkTarget, PROFILE};
use crate::input::{pixel_x_to_col, pixel_y_to_row, ClickState};
use crate::portfolio::state::Section;
use crate::scroll::ScrollSurface;

// ── Scroll lock ────────────────────────────────────────────────

/// Locks page scrolling by setting `overflow: hidden` on `<body>`.
///
/// The terminal document scrolls in `Portfolio`, which refuses manual
/// scrolling for as long as the menu holds this lock.
pub struct BodyScrollSurface;

impl ScrollSurface for BodyScrollSurface {
    fn set_scroll_locked(&self, locked: bool) {
        let value = if locked { "hidden" } else { "unset" };
        if set_body_overflow(value).is_none() {
            crate::console::warn("scroll lock: <body> not available");
        }
    }
}

fn set_body_overflow(value: &str) -> Option<()> {
    let body = web_sys::window()?.document()?.body()?;
    body.style().set_property("overflow", value).ok()
}

// ── Event subscriptions ────────────────────────────────────────

/// An event listener that is removed again when dropped.
pub struct Subscription {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    pub fn listen(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listen on `window`.
    pub fn on_window(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        Self::listen(&window, event, handler)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

// ── Geometry & time ────────────────────────────────────────────

/// Viewport size in CSS pixels.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

/// Query the grid container's bounding rect and convert pixel coordinates to a cell.
pub fn pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let click_x = mouse_x as f64 - rect.left();
    let click_y = mouse_y as f64 - rect.top();

    let col = pixel_x_to_col(click_x, rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(click_y, rect.height(), cs.terminal_rows)?;

    crate::console::log(&format!(
        "click: pixel=({}, {}), cell=({}, {}), targets={}",
        mouse_x,
        mouse_y,
        col,
        row,
        cs.targets.len()
    ));

    Some((col, row))
}

/// Milliseconds from `performance.now()`, falling back to the wall clock.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

// ── Location & links ───────────────────────────────────────────

/// Section named by the URL fragment, e.g. `#skills`.
pub fn location_section() -> Option<Section> {
    let hash = web_sys::window()?.location().hash().ok()?;
    Section::from_anchor(&hash)
}

/// Follow an outbound link: mail and phone links navigate in place, the
/// profile opens a new context and the resume is downloaded.
pub fn open_link(target: &LinkTarget) -> Option<()> {
    let window = web_sys::window()?;
    let href = target.href();
    if target.opens_new_context() {
        window.open_with_url_and_target(&href, "_blank").ok()?;
        return Some(());
    }
    match target {
        LinkTarget::Download { filename, .. } => {
            let anchor = window
                .document()?
                .create_element("a")
                .ok()?
                .dyn_into::<HtmlElement>()
                .ok()?;
            anchor.set_attribute("href", &href).ok()?;
            anchor.set_attribute("download", filename).ok()?;
            anchor.click();
        }
        _ => {
            window.location().set_href(&href).ok()?;
        }
    }
    Some(())
}

// ── Structured data ────────────────────────────────────────────

#[derive(Serialize)]
struct PostalAddress {
    #[serde(rename = "@type")]
    kind: &'static str,
    #[serde(rename = "addressLocality")]
    locality: &'static str,
}

/// schema.org `Person` describing the page owner.
#[derive(Serialize)]
pub struct PersonLd {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: String,
    #[serde(rename = "jobTitle")]
    job_title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    telephone: Option<&'static str>,
    #[serde(rename = "sameAs")]
    same_as: Vec<&'static str>,
    address: PostalAddress,
}

pub fn person_ld() -> PersonLd {
    let email = PROFILE
        .find_link(|t| matches!(t, LinkTarget::Email(_)))
        .map(|(_, l)| l.target.href());
    let telephone = PROFILE.links.iter().find_map(|l| match l.target {
        LinkTarget::Phone(n) => Some(n),
        _ => None,
    });
    let same_as = PROFILE
        .links
        .iter()
        .filter_map(|l| match l.target {
            LinkTarget::External(url) => Some(url),
            _ => None,
        })
        .collect();

    PersonLd {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.full_name(),
        job_title: PROFILE.role,
        email,
        telephone,
        same_as,
        address: PostalAddress {
            kind: "PostalAddress",
            locality: PROFILE.location,
        },
    }
}

/// Append the profile as a JSON-LD `<script>` to `<head>`.
pub fn publish_structured_data() -> Option<()> {
    let json = match serde_json::to_string(&person_ld()) {
        Ok(json) => json,
        Err(e) => {
            crate::console::warn(&format!("structured data: {}", e));
            return None;
        }
    };
    let document = web_sys::window()?.document()?;
    let script = document.create_element("script").ok()?;
    script.set_attribute("type", "application/ld+json").ok()?;
    script.set_text_content(Some(&json));
    document.head()?.append_child(&script).ok()?;
    Some(())
}
