//! Lint: every key hint drawn by the page must be tappable.
//!
//! A hint such as `"  [{}]"` (formatted with the shortcut key) or a literal
//! `"[P]"` is usually built as a `Span` and pushed a line or two later. The
//! first document call that follows it must register a click target:
//! `push_clickable()`, `push_wrapped_clickable()`, or a `ClickState`
//! `add_row_target()` / `add_click_target()` for overlays. A plain
//! `page.push()` or `page.push_wrapped()` draws the hint but leaves it dead on
//! touch devices, and so does a function that ends with the hint unclaimed.
//!
//! Scans every `render.rs` under `src/portfolio/`, up to its test module.

use std::fs;
use std::path::Path;

const CLICKABLE: &[&str] = &[
    "push_clickable(",
    "push_wrapped_clickable(",
    "add_row_target(",
    "add_click_target(",
];
const PLAIN: &[&str] = &["page.push(", "page.push_wrapped("];

/// String literal contents on a line, escapes left as written.
fn string_literals(line: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = None;
    let mut escaped = false;
    for (i, ch) in line.char_indices() {
        match (start, ch) {
            (Some(_), '\\') if !escaped => {
                escaped = true;
                continue;
            }
            (Some(s), '"') if !escaped => {
                out.push(&line[s..i]);
                start = None;
            }
            (None, '"') => start = Some(i + 1),
            _ => {}
        }
        escaped = false;
    }
    out
}

/// The line with string literal contents removed, for paren counting.
fn code_only(line: &str) -> String {
    let mut code = line.to_string();
    for lit in string_literals(line) {
        code = code.replacen(lit, "", 1);
    }
    code
}

/// `[X]` with one key character, or a format placeholder `[{}]` / `[{key}]`.
fn is_key_hint(lit: &str) -> bool {
    let bytes = lit.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'[' {
            continue;
        }
        let rest = &lit[i + 1..];
        if let Some(inner) = rest.strip_prefix('{') {
            if let Some(end) = inner.find("}]") {
                let name = &inner[..end];
                if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':') {
                    return true;
                }
            }
            continue;
        }
        let mut chars = rest.chars();
        if let (Some(key), Some(']')) = (chars.next(), chars.next()) {
            if key.is_ascii_alphanumeric() || "-=!~|".contains(key) {
                return true;
            }
        }
    }
    false
}

fn has_key_hint(line: &str) -> bool {
    string_literals(line).into_iter().any(is_key_hint)
}

fn paren_balance(line: &str) -> i32 {
    let code = code_only(line);
    code.matches('(').count() as i32 - code.matches(')').count() as i32
}

/// Lines (1-based) holding a key hint that no click registration claims.
fn find_dead_hints(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();
    let mut pending: Option<(usize, String)> = None;
    // Open parens of a clickable call still spanning lines
    let mut clickable_depth = 0i32;

    for (idx, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }

        let opens_clickable = CLICKABLE.iter().any(|c| line.contains(c));
        let inside_clickable = clickable_depth > 0 || opens_clickable;

        if has_key_hint(line) && !inside_clickable {
            if let Some(prev) = pending.take() {
                violations.push(prev);
            }
            pending = Some((idx + 1, trimmed.to_string()));
        }

        if inside_clickable {
            pending = None;
        } else if PLAIN.iter().any(|p| line.contains(p)) {
            if let Some(prev) = pending.take() {
                violations.push(prev);
            }
        }

        if inside_clickable {
            clickable_depth = (clickable_depth + paren_balance(line)).max(0);
        }

        // End of a top-level item
        if line == "}" {
            if let Some(prev) = pending.take() {
                violations.push(prev);
            }
            clickable_depth = 0;
        }
    }
    violations.extend(pending);
    violations
}

#[test]
fn render_key_hints_are_clickable() {
    let portfolio_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/portfolio");
    let mut all_violations = Vec::new();

    visit_render_files(&portfolio_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found key hints that are drawn without a click target.\n\
             Push them with push_clickable()/push_wrapped_clickable(), or register\n\
             the overlay row with add_row_target().\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

fn visit_render_files(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_render_files(&path, violations);
        } else if path.file_name().map(|n| n == "render.rs").unwrap_or(false) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            let display_path = path.display().to_string();
            for (line_num, line) in find_dead_hints(&source) {
                violations.push((display_path.clone(), line_num, line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_span_then_plain_push_is_flagged() {
        let source = r#"fn push_links(page: &mut PageBuilder) {
    let mut spans = vec![Span::raw("Resume")];
    spans.push(Span::styled(format!("  [{}]", key), fg(GRAY_600)));
    page.push(Line::from(spans));
}
"#;
        let violations = find_dead_hints(source);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].0, 3);
    }

    #[test]
    fn hint_span_then_clickable_push_passes() {
        let source = r#"fn push_links(page: &mut PageBuilder) {
    if let Some(key) = link_key(&link.target) {
        spans.push(Span::styled(format!("  [{}]", key), fg(GRAY_600)));
    }
    page.push_clickable(Line::from(spans), OPEN_LINK_BASE + i as u16);
}
"#;
        assert!(find_dead_hints(source).is_empty());
    }

    #[test]
    fn hint_inside_multiline_clickable_call_passes() {
        let source = r#"fn push_skills(page: &mut PageBuilder) {
    page.push_clickable(
        Line::from(vec![
            Span::styled(category.name, bold(WHITE)),
            Span::styled(format!("  [{}]", key), fg(GRAY_600)),
        ]),
        action,
    );
    page.push(gauge_line);
}
"#;
        assert!(find_dead_hints(source).is_empty());
    }

    #[test]
    fn overlay_row_target_claims_hint() {
        let source = r#"fn render_menu(f: &mut Frame) {
    let label = Line::from(vec![
        Span::styled(
            format!("  [{}]", section.key()),
            fg(GRAY_600),
        ),
    ]);
    f.render_widget(Paragraph::new(label), row);
    cs.add_row_target(area, y, nav_action(*section));
}
"#;
        assert!(find_dead_hints(source).is_empty());
    }

    #[test]
    fn unclaimed_hint_at_end_of_function_is_flagged() {
        let source = r#"fn hint_line() -> Line<'static> {
    Line::from(Span::raw(" [P] Projects"))
}
"#;
        assert_eq!(find_dead_hints(source).len(), 1);
    }

    #[test]
    fn literal_hint_in_wrapped_push_is_flagged() {
        let source = r#"    page.push_wrapped("Download [r]", 2, style);"#;
        assert_eq!(find_dead_hints(source).len(), 1);
    }

    #[test]
    fn indexing_and_comments_are_not_hints() {
        let source = r#"fn hero(page: &mut PageBuilder) {
    // page.push(Line::from(" [C] Contact"));
    let first = spaced(PROFILE.name_lines[0], spacing);
    page.push(centered(vec![Span::raw(first)]));
}
"#;
        assert!(find_dead_hints(source).is_empty());
    }

    #[test]
    fn test_module_is_skipped() {
        let source = r#"#[cfg(test)]
mod tests {
    fn f() { assert!(text.contains("[1]")); }
}
"#;
        assert!(find_dead_hints(source).is_empty());
    }

    #[test]
    fn key_hint_detection() {
        assert!(is_key_hint("  [{}]"));
        assert!(is_key_hint("[{key}]"));
        assert!(is_key_hint("[P]"));
        assert!(is_key_hint("View [1]"));
        assert!(!is_key_hint("[]"));
        assert!(!is_key_hint("[II]"));
        assert!(!is_key_hint("[{:>3}]"));
        assert!(!is_key_hint("abc"));
    }

    #[test]
    fn literals_are_extracted() {
        assert_eq!(
            string_literals(r#"format!("a [{}]", "b\"c")"#),
            vec!["a [{}]", r#"b\"c"#]
        );
        assert_eq!(code_only(r#"f("(x")"#), "f(\"\")");
    }
}
