use std::fmt::Write;

use crate::pages::{HISTORY_NOTE, PLACEHOLDER_HISTORY, RULES, RULES_TIP};
use crate::state::GameSnapshot;
use crate::types::View;

const STYLE: &str = r##"
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;background:#f3f4f6;color:#374151;min-height:100vh}
header{background:linear-gradient(90deg,#6366f1,#3b82f6);color:#fff;padding:16px;text-align:center;font-size:24px;font-weight:700;box-shadow:0 10px 15px rgba(0,0,0,.15)}
nav{background:#e5e7eb;text-align:center;padding:8px}
nav a{color:#4f46e5;font-weight:600;text-decoration:none;margin:0 8px}
nav a.active{text-decoration:underline}
main{max-width:900px;margin:0 auto;padding:16px}
h2{font-size:24px;font-weight:700;margin-bottom:16px}
.status-bar{display:flex;justify-content:space-between;color:#4b5563;font-size:14px;margin-bottom:16px}
.cards{display:grid;grid-template-columns:repeat(3,1fr);gap:16px;margin-bottom:24px}
.card{cursor:pointer;padding:16px;border-radius:16px;box-shadow:0 4px 6px rgba(0,0,0,.1);color:#fff;text-align:center;font-weight:600;font-size:18px;transition:opacity .15s;border:4px solid transparent}
.card:hover{opacity:.9}
.card.selected{border-color:#fde047}
.card-red{background:#ef4444}
.card-blue{background:#3b82f6}
.card-green{background:#22c55e}
.card .stats{font-size:14px;font-weight:400;margin-top:8px}
.stake-label{display:block;font-weight:600;margin-bottom:8px}
.stakes{display:flex;flex-wrap:wrap;gap:8px;margin-bottom:24px}
.stake{padding:8px 16px;border-radius:9999px;border:1px solid #d1d5db;background:#fff;cursor:pointer;font-size:14px}
.stake:hover{background:#e5e7eb}
.stake.active{background:#fde047;color:#000;font-weight:700}
.submit{width:100%;padding:12px;font-size:18px;font-weight:700;border:none;border-radius:12px;background:#4f46e5;color:#fff;cursor:pointer}
.submit:hover{background:#4338ca}
.submit:disabled{background:#d1d5db;color:#374151;cursor:not-allowed}
.message{margin-top:12px;font-size:14px;color:#4b5563;min-height:18px}
ul.rules{list-style:disc;margin-left:20px}
ul.rules li,ul.history li{margin-bottom:8px}
ul.history{list-style:none}
.note{font-weight:600;margin-bottom:8px}
.tip{margin-top:16px;padding:12px;background:#fef9c3;border-left:4px solid #eab308}
"##;

const GAME_SCRIPT: &str = r##"
<script>
async function api(path, opts) {
  const res = await fetch(path, opts);
  if (!res.ok) throw new Error(await res.text());
  const ct = res.headers.get('content-type') || '';
  return ct.includes('json') ? res.json() : res.text();
}

function post(path, body) {
  return api(path, {
    method: 'POST',
    headers: {'Content-Type': 'application/json'},
    body: JSON.stringify(body || {}),
  });
}

function render(s) {
  document.getElementById('onlineUsers').textContent = s.online_users;
  document.getElementById('round').textContent = s.round;
  document.getElementById('countdown').textContent = s.countdown;
  for (const c of s.cards) {
    const el = document.querySelector('.card[data-color="' + c.color + '"]');
    if (!el) continue;
    el.classList.toggle('selected', c.selected);
    el.querySelector('.win').textContent = c.win_percent;
    el.querySelector('.coins').textContent = c.coin_count;
  }
  for (const el of document.querySelectorAll('.stake')) {
    el.classList.toggle('active', el.dataset.stake === s.stake);
  }
  const btn = document.getElementById('submitBtn');
  btn.disabled = !s.submit_enabled;
  btn.textContent = s.submit_label;
}

async function refresh() {
  try { render(await api('/api/status')); } catch (e) {}
}

async function selectColor(color) {
  try { await post('/api/select-color', {color}); } catch (e) {}
  refresh();
}

async function selectStake(stake) {
  try { await post('/api/select-stake', {stake}); } catch (e) {}
  refresh();
}

async function submitSelection() {
  const msg = document.getElementById('message');
  try {
    const r = await post('/api/submit');
    msg.textContent = 'Round #' + r.round + ': ' + r.ticket + ' noted.';
  } catch (e) {
    msg.textContent = e.message;
  }
}

setInterval(refresh, 1000);
</script>
"##;

fn layout(active: View, title: &str, body: &str, script: &str) -> String {
    let mut nav = String::new();
    for view in View::ALL {
        let class = if view == active { " class=\"active\"" } else { "" };
        let _ = write!(nav, "<a href=\"{}\"{}>{}</a>", view.path(), class, view.label());
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<style>{STYLE}</style>
</head>
<body>
<header>🎨 Color Betting Game</header>
<nav>{nav}</nav>
<main>
{body}
</main>
{script}
</body>
</html>
"##
    )
}

pub fn game_page(snapshot: &GameSnapshot) -> String {
    let mut body = String::new();

    let _ = write!(
        body,
        r#"<div class="status-bar">
  <div>👥 Online Users: <span id="onlineUsers">{}</span></div>
  <div>🎯 Round #<span id="round">{}</span></div>
  <div>⏳ Time Left: <span id="countdown">{}</span></div>
</div>
<div class="cards">
"#,
        snapshot.online_users, snapshot.round, snapshot.countdown
    );

    for card in &snapshot.cards {
        let selected = if card.selected { " selected" } else { "" };
        let _ = write!(
            body,
            r#"  <div class="card {class}{selected}" data-color="{color}" onclick="selectColor('{color}')">
    {color}
    <div class="stats"><span class="win">{win}</span>% wins<br><span class="coins">{coins}</span> coins</div>
  </div>
"#,
            class = card.color.css_class(),
            color = card.color,
            win = card.win_percent,
            coins = card.coin_count,
        );
    }
    body.push_str("</div>\n<label class=\"stake-label\">Stake Amount:</label>\n<div class=\"stakes\">\n");

    for stake in &snapshot.stakes {
        let active = if *stake == snapshot.stake { " active" } else { "" };
        let _ = writeln!(
            body,
            r#"  <button class="stake{active}" data-stake="{stake}" onclick="selectStake('{stake}')">{stake} 💰</button>"#
        );
    }
    body.push_str("</div>\n");

    let disabled = if snapshot.submit_enabled { "" } else { " disabled" };
    let _ = write!(
        body,
        r#"<button id="submitBtn" class="submit" onclick="submitSelection()"{disabled}>{}</button>
<div id="message" class="message"></div>"#,
        snapshot.submit_label
    );

    layout(View::Game, "Color Betting Game", &body, GAME_SCRIPT)
}

pub fn rules_page() -> String {
    let mut body = String::from("<h2>📄 How to Play</h2>\n<ul class=\"rules\">\n");
    for rule in RULES {
        let _ = writeln!(body, "  <li>{rule}</li>");
    }
    let _ = write!(body, "</ul>\n<div class=\"tip\">🎯 {RULES_TIP}</div>");
    layout(View::Rules, "How to Play", &body, "")
}

pub fn history_page() -> String {
    let mut body = format!("<h2>📜 History</h2>\n<p class=\"note\">{HISTORY_NOTE}</p>\n<ul class=\"history\">\n");
    for entry in PLACEHOLDER_HISTORY {
        let _ = writeln!(body, "  <li>🎲 {entry}</li>");
    }
    body.push_str("</ul>");
    layout(View::History, "History", &body, "")
}
