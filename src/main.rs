mod console;
mod content;
mod dom;
mod input;
mod portfolio;
mod scroll;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use input::{normalize_pointer, wheel_delta_px, ClickState, InputEvent, NavKey};
use portfolio::effects::CELL_HEIGHT_PX;
use portfolio::Portfolio;
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use scroll::ScrollSurface;
use wasm_bindgen::JsCast;

/// Apply an input event and follow any links it produced.
fn dispatch(page: &Rc<RefCell<Portfolio>>, event: InputEvent) {
    let links = {
        let mut p = page.borrow_mut();
        p.handle_input(&event);
        p.take_link_requests()
    };
    for link in links {
        if dom::open_link(&link).is_none() {
            console::warn(&format!("could not open {}", link.href()));
        }
    }
}

fn key_to_input(code: KeyCode) -> Option<InputEvent> {
    match code {
        KeyCode::Char(c) => Some(InputEvent::Key(c)),
        KeyCode::Up => Some(InputEvent::Nav(NavKey::Up)),
        KeyCode::Down => Some(InputEvent::Nav(NavKey::Down)),
        KeyCode::PageUp => Some(InputEvent::Nav(NavKey::PageUp)),
        KeyCode::PageDown => Some(InputEvent::Nav(NavKey::PageDown)),
        KeyCode::Home => Some(InputEvent::Nav(NavKey::Home)),
        KeyCode::End => Some(InputEvent::Nav(NavKey::End)),
        KeyCode::Esc => Some(InputEvent::Nav(NavKey::Esc)),
        _ => None,
    }
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    for issue in content::validate() {
        console::warn(&format!("content: {:?}", issue));
    }
    if dom::publish_structured_data().is_none() {
        console::warn("structured data: <head> not available");
    }

    let surface: Rc<dyn ScrollSurface> = Rc::new(dom::BodyScrollSurface);
    let page = Rc::new(RefCell::new(Portfolio::new(surface, dom::now_ms())));
    let click_state = Rc::new(RefCell::new(ClickState::new()));

    // Resolved once the document has been laid out
    if let Some(section) = dom::location_section() {
        page.borrow_mut().navigate_to_section(section);
    }

    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let page = page.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom::pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                    .and_then(|(col, row)| cs.hit_test(col, row))
            };

            if let Some(id) = action {
                dispatch(&page, InputEvent::Click(id));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let page = page.clone();
        move |key_event| {
            if let Some(event) = key_to_input(key_event.code) {
                dispatch(&page, event);
            }
        }
    });

    // Window listeners live as long as the render loop that owns them
    let subscriptions: Vec<dom::Subscription> = [
        dom::Subscription::on_window("mousemove", {
            let page = page.clone();
            move |event| {
                let Some(e) = event.dyn_ref::<web_sys::MouseEvent>() else {
                    return;
                };
                let (w, h) = dom::viewport_size().unwrap_or((0.0, 0.0));
                let (x, y) = normalize_pointer(e.client_x() as f64, e.client_y() as f64, w, h);
                dispatch(&page, InputEvent::Pointer(x, y));
            }
        }),
        dom::Subscription::on_window("wheel", {
            let page = page.clone();
            move |event| {
                let Some(e) = event.dyn_ref::<web_sys::WheelEvent>() else {
                    return;
                };
                let page_px = dom::viewport_size().map(|(_, h)| h).unwrap_or(0.0);
                let delta = wheel_delta_px(e.delta_y(), e.delta_mode(), CELL_HEIGHT_PX, page_px);
                dispatch(&page, InputEvent::Scroll(delta));
            }
        }),
        dom::Subscription::on_window("hashchange", {
            let page = page.clone();
            move |_| {
                if let Some(section) = dom::location_section() {
                    page.borrow_mut().navigate_to_section(section);
                }
            }
        }),
    ]
    .into_iter()
    .flatten()
    .collect();
    console::log(&format!("listening: {} window events", subscriptions.len()));

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let _keep = &subscriptions;
            let size = f.area();

            // Update terminal dimensions and clear click targets
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            let mut p = page.borrow_mut();
            p.tick(dom::now_ms());
            p.render(f, size, &click_state);
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::state::Section;

    #[test]
    fn keys_map_to_input() {
        assert_eq!(key_to_input(KeyCode::Char('s')), Some(InputEvent::Key('s')));
        assert_eq!(key_to_input(KeyCode::Esc), Some(InputEvent::Nav(NavKey::Esc)));
        assert_eq!(key_to_input(KeyCode::PageDown), Some(InputEvent::Nav(NavKey::PageDown)));
        assert_eq!(key_to_input(KeyCode::Enter), None);
    }

    #[test]
    fn every_section_has_a_key() {
        for s in Section::ALL {
            assert_eq!(key_to_input(KeyCode::Char(s.key())), Some(InputEvent::Key(s.key())));
        }
    }
}
