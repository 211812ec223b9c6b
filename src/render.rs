//! HTML rendering of a generated bracket. Output replaces the previous page wholesale.

use crate::models::{BracketMatch, Participant, Round};

/// Shown instead of a bracket while no participant is approved.
pub const EMPTY_BRACKET_HTML: &str =
    r#"<p class="bracket-empty">No bracket yet: no approved participants.</p>"#;

const PAGE_TEMPLATE: &str = include_str!("../templates/bracket.html");

/// Escape text for use in HTML element content and attribute values.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn write_player(out: &mut String, player: &Participant, is_winner: bool) {
    let class = if is_winner { "match-player winner" } else { "match-player" };
    let name = escape_html(&player.name);
    out.push_str(&format!(r#"<div class="{}">"#, class));
    if let Some(avatar) = &player.avatar {
        out.push_str(&format!(r#"<img src="{}" alt="{}">"#, escape_html(avatar), name));
    }
    out.push_str(&format!("<span>{}</span></div>", name));
}

fn write_match(out: &mut String, m: &BracketMatch<'_>) {
    out.push_str(r#"<div class="bracket-match">"#);
    write_player(out, m.first, std::ptr::eq(m.winner, m.first));
    match m.second {
        Some(second) => {
            out.push_str(r#"<div class="match-vs">VS</div>"#);
            write_player(out, second, std::ptr::eq(m.winner, second));
        }
        None => out.push_str(r#"<div class="match-player bye" style="opacity: 0.5">Bye</div>"#),
    }
    out.push_str("</div>");
}

/// Render rounds first to last as an HTML fragment, or the empty-state message if there are none.
pub fn render_bracket(rounds: &[Round<'_>]) -> String {
    if rounds.is_empty() {
        return EMPTY_BRACKET_HTML.to_string();
    }
    let mut out = String::from(r#"<div class="bracket-tree">"#);
    for round in rounds {
        out.push_str(&format!(
            r#"<div class="bracket-round" data-round="{}"><div class="round-title">{}</div>"#,
            round.number, round.label
        ));
        for m in &round.matches {
            write_match(&mut out, m);
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

fn fill_template(body: &str, refresh_secs: u64) -> String {
    PAGE_TEMPLATE
        .replace("{{refresh_secs}}", &refresh_secs.to_string())
        .replace("{{bracket}}", body)
}

/// Full page: the bracket fragment inside the page template, reloading every `refresh_secs` seconds.
pub fn render_page(rounds: &[Round<'_>], refresh_secs: u64) -> String {
    fill_template(&render_bracket(rounds), refresh_secs)
}

/// Same page shell with an error message instead of the bracket. Keeps reloading so the
/// bracket comes back once the roster is readable again.
pub fn render_error_page(message: &str, refresh_secs: u64) -> String {
    let body = format!(r#"<p class="bracket-error">{}</p>"#, escape_html(message));
    fill_template(&body, refresh_secs)
}
