//! Single-page chat UI served at `/`.
//!
//! The page carries no text of its own: title, help areas, advice, and the
//! closing note are fetched from `/api/v1/info` and `/api/v1/advice`.

use axum::response::Html;

pub const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Learnix</title>
<style>
  body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #222; }
  header p { color: #555; }
  #layout { display: flex; gap: 2rem; }
  #chat { flex: 3; }
  aside { flex: 1; font-size: 0.9rem; }
  .turn { margin: 0.4rem 0; }
  .turn b { margin-right: 0.4rem; }
  #status { color: #888; font-style: italic; min-height: 1.2rem; }
  form { display: flex; gap: 0.5rem; margin-top: 1rem; }
  input[type=text] { flex: 1; padding: 0.4rem; }
  footer { margin-top: 2rem; color: #555; }
</style>
</head>
<body>
<header>
  <h1 id="title"></h1>
  <p id="subtitle"></p>
</header>
<div id="layout">
  <section id="chat">
    <h3 id="help-prompt"></h3>
    <ul id="help-topics"></ul>
    <div id="turns"></div>
    <div id="status"></div>
    <form id="ask">
      <input type="text" id="message" autocomplete="off">
      <button type="submit">Send</button>
    </form>
  </section>
  <aside id="advice"></aside>
</div>
<footer>
  <h3 id="closing-headline"></h3>
  <p id="closing-note"></p>
</footer>
<script>
const api = "/api/v1";
let sessionId = null;
let info = null;

async function call(method, path, body) {
  const res = await fetch(api + path, {
    method,
    headers: body ? { "Content-Type": "application/json" } : {},
    body: body ? JSON.stringify(body) : undefined,
  });
  const json = await res.json();
  if (!res.ok) {
    const err = (json.errors && json.errors[0]) || { message: res.statusText };
    throw new Error(err.message);
  }
  return json.data;
}

function text(id, value) { document.getElementById(id).textContent = value; }

function renderTurns(turns) {
  const box = document.getElementById("turns");
  box.replaceChildren();
  for (const turn of turns) {
    const row = document.createElement("div");
    row.className = "turn";
    const label = document.createElement("b");
    label.textContent = turn.label + ":";
    row.append(label, turn.text);
    box.append(row);
  }
}

async function init() {
  info = await call("GET", "/info");
  document.title = info.title;
  text("title", info.title);
  text("subtitle", info.subtitle);
  text("help-prompt", info.help_prompt);
  const list = document.getElementById("help-topics");
  for (const topic of info.help_topics) {
    const li = document.createElement("li");
    li.textContent = topic;
    list.append(li);
  }
  document.getElementById("message").placeholder = info.idle_prompt;
  text("closing-headline", info.closing_headline);
  text("closing-note", info.closing_note);

  const advice = document.getElementById("advice");
  for (const item of await call("GET", "/advice")) {
    const btn = document.createElement("button");
    btn.textContent = item.label;
    const body = document.createElement("p");
    btn.onclick = () => { body.textContent = item.text; };
    advice.append(btn, body);
  }

  sessionId = (await call("POST", "/sessions")).id;
}

document.getElementById("ask").addEventListener("submit", async (event) => {
  event.preventDefault();
  const input = document.getElementById("message");
  const message = input.value.trim();
  if (!message || !sessionId) return;
  input.value = "";
  input.disabled = true;
  text("status", info.waiting_message);
  try {
    const data = await call("POST", `/sessions/${sessionId}/messages`, { message });
    renderTurns(data.turns);
    text("status", "");
  } catch (err) {
    text("status", err.message);
  } finally {
    input.disabled = false;
    input.focus();
  }
});

window.addEventListener("pagehide", () => {
  if (!sessionId) return;
  fetch(`${api}/sessions/${sessionId}`, { method: "DELETE", keepalive: true });
  sessionId = null;
});

init().catch((err) => text("status", err.message));
</script>
</body>
</html>
"#;

/// GET / - The chat page.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
