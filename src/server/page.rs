//! The index page.
//!
//! Server-rendered table of recorded books plus a small form. The form's
//! script calls the JSON endpoints; the table itself needs no script.

use axum::{extract::State, response::Html};

use super::AppState;
use crate::catalog::BookRecord;

const SCRIPT: &str = r#"
async function lookup(event) {
  event.preventDefault();
  const isbn = document.getElementById('isbn').value;
  const res = await fetch('/fetch_book_info', {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify({isbn}),
  });
  const body = await res.json();
  if (!res.ok) {
    alert(body.status === 'not_found' ? 'No catalog knows this book' : body.error);
    return;
  }
  const summary = `${body.title}\n${body.authors}\n${body.publisher} ${body.publishedDate}`;
  if (confirm(`Record this book?\n\n${summary}`)) {
    await fetch('/commit_book_info', {
      method: 'POST',
      headers: {'Content-Type': 'application/json'},
      body: JSON.stringify(body),
    });
    location.reload();
  }
}
document.getElementById('lookup').addEventListener('submit', lookup);
"#;

/// Render the page for the current store contents.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render(&state.store.snapshot()))
}

fn render(records: &[BookRecord]) -> String {
    let mut rows = String::new();
    for record in records {
        rows.push_str("<tr>");
        for value in [
            &record.identifier,
            &record.title,
            &record.authors,
            &record.publisher,
            &record.published_date,
        ] {
            rows.push_str("<td>");
            rows.push_str(&escape(value));
            rows.push_str("</td>");
        }
        rows.push_str("</tr>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>Book Minder</title></head>
<body>
<h1>Book Minder</h1>
<form id="lookup">
  <input id="isbn" name="isbn" placeholder="ISBN" autofocus>
  <button type="submit">Look up</button>
</form>
<p>{count} book(s) recorded. <a href="/download_csv">Download CSV</a></p>
<table id="books-table">
<thead><tr><th>ISBN</th><th>Title</th><th>Authors</th><th>Publisher</th><th>Published</th></tr></thead>
<tbody>
{rows}</tbody>
</table>
<script>{SCRIPT}</script>
</body>
</html>
"#,
        count = records.len(),
    )
}

fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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
