//! HTML pages and script fragments
//!
//! Pages are plain strings built around a shared layout. Every value that
//! came from a client goes through `html` (for markup) or `js_string` (for
//! script literals) before it is embedded.

pub mod playlists;

/// Escape text for element content and quoted attribute values
pub fn html(text: &str) -> String {
    htmlescape::encode_minimal(text)
}

/// Quote a string as a JavaScript string literal
pub fn js_string(text: &str) -> String {
    serde_json::Value::String(text.to_owned()).to_string()
}

/// Submits `data-remote` forms in the background and runs the returned
/// fragment, so create, rename and add-song never reload the page.
const REMOTE_FORMS_SCRIPT: &str = r#"
document.addEventListener("submit", function (event) {
  var form = event.target;
  if (!form.hasAttribute("data-remote")) { return; }
  event.preventDefault();
  fetch(form.action, {
    method: (form.getAttribute("data-method") || form.method).toUpperCase(),
    headers: { "Accept": "text/javascript" },
    body: new URLSearchParams(new FormData(form))
  }).then(function (response) {
    if (response.redirected) { window.location.assign(response.url); return; }
    return response.text().then(function (body) {
      if (response.ok) { (0, eval)(body); return; }
      var message = body;
      try { message = JSON.parse(body).error; } catch (e) {}
      window.alert(message);
    });
  });
});
"#;

/// Wrap page content in the document shell
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Mixtape</title>
</head>
<body>
<nav><a href="/playlists">All playlists</a></nav>
<main>
{content}
</main>
<script>{script}</script>
</body>
</html>
"#,
        title = html(title),
        content = content,
        script = REMOTE_FORMS_SCRIPT,
    )
}
