//! HTML rendering for the prompt list, edit and error pages.

use std::fmt::Write;

use axum::http::StatusCode;
use promptbase_core::prompt::{ListQuery, SortDirection, SortKey};
use promptbase_db::models::prompt::Prompt;

/// Escape text for inclusion in HTML element content or quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
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

fn open_page(html: &mut String, title: &str) {
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n\
         <h1>Promptbase</h1>\n",
        escape_html(title)
    );
}

fn close_page(html: &mut String) {
    html.push_str("</body>\n</html>\n");
}

/// Render the full index page.
pub fn render_index(items: &[Prompt], total: i64, query: &ListQuery) -> String {
    let mut html = String::new();
    let search = escape_html(query.search.as_deref().unwrap_or_default());

    open_page(&mut html, "Promptbase");
    html.push_str("<p>A simple app to store and retrieve writing prompts</p>\n");

    // Search and sort.
    let _ = write!(
        html,
        "<form method=\"get\" action=\"/\">\n\
         <input type=\"search\" name=\"search\" placeholder=\"Search prompts\" value=\"{search}\">\n\
         <select name=\"sort\">\n"
    );
    for key in SortKey::ALL {
        let selected = if key == query.sort { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"{key}\"{selected}>{key}</option>");
    }
    html.push_str("</select>\n<select name=\"direction\">\n");
    for direction in [SortDirection::Desc, SortDirection::Asc] {
        let selected = if direction == query.direction { " selected" } else { "" };
        let value = direction.as_str();
        let _ = writeln!(html, "<option value=\"{value}\"{selected}>{value}</option>");
    }
    html.push_str("</select>\n<button type=\"submit\">Apply</button>\n</form>\n");

    // New prompt.
    html.push_str(
        "<h2>New prompt</h2>\n\
         <form method=\"post\" action=\"/prompts\">\n\
         <input name=\"title\" placeholder=\"Title\" required>\n\
         <textarea name=\"prompt\" rows=\"8\" placeholder=\"Prompt\" required></textarea>\n\
         <input name=\"genre\" placeholder=\"Genre\" required>\n\
         <input name=\"activity\" placeholder=\"Activity\">\n\
         <button type=\"submit\">Submit</button>\n\
         </form>\n",
    );

    let _ = writeln!(html, "<h2>Prompts ({} of {total})</h2>", items.len());
    if items.is_empty() {
        html.push_str("<p>No prompts found.</p>\n");
    } else {
        html.push_str("<ul>\n");
        for item in items {
            render_item(&mut html, item);
        }
        html.push_str("</ul>\n");
    }

    close_page(&mut html);
    html
}

/// Render the edit form for one prompt, prefilled with its current values.
///
/// An unchecked favorite box is absent from the submitted form, which the
/// update DTO reads as `false`.
pub fn render_edit(item: &Prompt) -> String {
    let mut html = String::new();
    open_page(&mut html, &format!("Edit {}", item.title));

    let checked = if item.is_favorite { " checked" } else { "" };
    let _ = write!(
        html,
        "<h2>Edit prompt</h2>\n\
         <form method=\"post\" action=\"/prompts/{id}\">\n\
         <input name=\"title\" placeholder=\"Title\" value=\"{title}\" required>\n\
         <textarea name=\"prompt\" rows=\"8\" placeholder=\"Prompt\" required>{body}</textarea>\n\
         <input name=\"genre\" placeholder=\"Genre\" value=\"{genre}\" required>\n\
         <input name=\"activity\" placeholder=\"Activity\" value=\"{activity}\">\n\
         <label><input type=\"checkbox\" name=\"is_favorite\" value=\"true\"{checked}> Favorite</label>\n\
         <button type=\"submit\">Update</button>\n\
         </form>\n\
         <p><a href=\"/\">Cancel</a></p>\n",
        id = item.id,
        title = escape_html(&item.title),
        body = escape_html(&item.prompt),
        genre = escape_html(&item.genre),
        activity = escape_html(item.activity.as_deref().unwrap_or_default()),
    );

    close_page(&mut html);
    html
}

/// Render a failed page request: the status line, the message and a way back.
pub fn render_error(status: StatusCode, message: &str) -> String {
    let mut html = String::new();
    let reason = status.canonical_reason().unwrap_or("Error");
    open_page(&mut html, reason);
    let _ = write!(
        html,
        "<h2>{code} {reason}</h2>\n\
         <p>{message}</p>\n\
         <p><a href=\"/\">Back to prompts</a></p>\n",
        code = status.as_u16(),
        message = escape_html(message),
    );
    close_page(&mut html);
    html
}

fn render_item(html: &mut String, item: &Prompt) {
    let favorite = if item.is_favorite {
        "Favorite"
    } else {
        "Not Favorite"
    };
    let toggle_label = if item.is_favorite {
        "Unfavorite"
    } else {
        "Favorite"
    };
    let activity = item
        .activity
        .as_deref()
        .map(|a| format!(" / {}", escape_html(a)))
        .unwrap_or_default();

    let _ = write!(
        html,
        "<li id=\"prompt-{id}\">\n\
         <details>\n\
         <summary>{title} - {genre}{activity} ({favorite})</summary>\n\
         <pre>{body}</pre>\n\
         <small>Created {created} &middot; updated {updated}</small>\n\
         <a href=\"/prompts/{id}/edit\">Edit</a>\n\
         <form method=\"post\" action=\"/prompts/{id}/favorite\">\
         <button type=\"submit\">{toggle_label}</button></form>\n\
         <form method=\"post\" action=\"/prompts/{id}/delete\">\
         <button type=\"submit\">Delete</button></form>\n\
         </details>\n\
         </li>\n",
        id = item.id,
        title = escape_html(&item.title),
        genre = escape_html(&item.genre),
        body = escape_html(&item.prompt),
        created = item.created_at.format("%Y-%m-%d %H:%M"),
        updated = item.updated_at.format("%Y-%m-%d %H:%M"),
    );
}
