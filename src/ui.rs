use crate::catalog::{ActivityKind, Category, Field};
use crate::models::{Activity, Energy, Entry, Mood, TodayResponse};
use chrono::Local;
use std::fmt::Write;

const RING_RADIUS: f64 = 70.0;
const RECENT_LIMIT: usize = 10;

pub fn render_index(today: &TodayResponse, entries: &[Entry]) -> String {
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let offset = circumference * (1.0 - f64::from(today.wellness.score) / 100.0);

    INDEX_HTML
        .replace("{{DATE}}", &today.date)
        .replace("{{SCORE}}", &today.wellness.score.to_string())
        .replace("{{LABEL}}", &today.label)
        .replace("{{COUNT}}", &entries.len().to_string())
        .replace("{{RING_LENGTH}}", &format!("{circumference:.2}"))
        .replace("{{RING_OFFSET}}", &format!("{offset:.2}"))
        .replace("{{TOTALS}}", &render_totals(today))
        .replace("{{BREAKDOWN}}", &render_breakdown(today))
        .replace("{{QUICK_LOG}}", &render_quick_log())
        .replace("{{RECENT}}", &render_list(&entries[..entries.len().min(RECENT_LIMIT)], false))
        .replace("{{ENTRIES}}", &render_list(entries, true))
}

fn render_breakdown(today: &TodayResponse) -> String {
    if today.wellness.breakdown.is_empty() {
        return r#"<li class="muted">Log some activities to see what moves your score.</li>"#
            .to_string();
    }

    let mut html = String::new();
    for item in &today.wellness.breakdown {
        let class = if item.positive { "up" } else { "down" };
        let sign = if item.impact > 0 { "+" } else { "" };
        let _ = write!(
            html,
            r#"<li><span>{}</span><span class="{class}">{sign}{}</span></li>"#,
            escape(&item.factor),
            item.impact
        );
    }
    html
}

fn render_totals(today: &TodayResponse) -> String {
    let metrics = [
        ("Water", format!("{} ml", amount(today.water_ml))),
        ("Steps", amount(today.steps)),
        ("Active kcal", amount(today.active_calories)),
        ("Exercise", format!("{} min", amount(today.exercise_minutes))),
        ("Entries", today.total_entries.to_string()),
    ];

    let mut html = String::new();
    for (label, value) in metrics {
        let _ = write!(
            html,
            r#"<div class="metric"><span>{label}</span><strong>{value}</strong></div>"#
        );
    }
    html
}

fn render_quick_log() -> String {
    let mut html = String::new();
    for category in Category::ALL {
        let _ = write!(
            html,
            r#"<section class="category"><h3>{}</h3><div class="kinds">"#,
            category.label()
        );
        for kind in category.kinds() {
            html.push_str(&render_form(kind));
        }
        html.push_str("</div></section>");
    }
    html
}

fn render_form(kind: ActivityKind) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r#"<details><summary>{label}</summary><form method="post" action="/entries">
<input type="hidden" name="type" value="{tag}" />
<label>Date &amp; Time<input type="datetime-local" name="date" /></label>"#,
        label = kind.label(),
        tag = kind.tag()
    );

    for field in kind.fields() {
        html.push_str(&render_field(kind, *field));
    }

    html.push_str(
        r#"<label>Notes<textarea name="notes" rows="2"></textarea></label>
<button type="submit">Save Entry</button></form></details>"#,
    );
    html
}

fn render_field(kind: ActivityKind, field: Field) -> String {
    match field {
        Field::Mood => select(
            "Mood",
            field.name(),
            Mood::ALL.iter().map(|m| (m.as_str(), m.label())),
            Mood::Neutral.as_str(),
        ),
        Field::Energy => select(
            "Energy",
            field.name(),
            Energy::ALL.iter().map(|e| (e.as_str(), e.label())),
            Energy::Medium.as_str(),
        ),
        Field::Temperature => number("Temperature (°C)", field.name()),
        Field::Duration if kind == ActivityKind::WorkHours => number("Hours worked", field.name()),
        Field::Duration => number("Duration (minutes)", field.name()),
        Field::MeetingCount => number("Number of meetings", field.name()),
        Field::Value | Field::Quantity => {
            number(&format!("{} ({})", kind.label(), kind.unit()), field.name())
        }
    }
}

fn number(label: &str, name: &str) -> String {
    format!(r#"<label>{label}<input type="number" step="any" name="{name}" /></label>"#)
}

fn select<'a>(
    label: &str,
    name: &str,
    options: impl Iterator<Item = (&'a str, &'a str)>,
    selected: &str,
) -> String {
    let mut html = format!(r#"<label>{label}<select name="{name}">"#);
    for (value, text) in options {
        let marker = if value == selected { " selected" } else { "" };
        let _ = write!(html, r#"<option value="{value}"{marker}>{text}</option>"#);
    }
    html.push_str("</select></label>");
    html
}

fn render_list(entries: &[Entry], with_delete: bool) -> String {
    if entries.is_empty() {
        return r#"<li class="muted">No entries yet. Start tracking!</li>"#.to_string();
    }

    let mut html = String::new();
    for entry in entries {
        let when = entry.timestamp.with_timezone(&Local).format("%Y-%m-%d %H:%M");
        let _ = write!(
            html,
            r#"<li class="entry {category}"><div><strong>{label}</strong> <span>{detail}</span><small>{when}</small>"#,
            category = entry.kind().category().label().to_lowercase(),
            label = entry.kind().label(),
            detail = escape(&describe(entry)),
        );
        if let Some(notes) = &entry.notes {
            let _ = write!(html, r#"<p class="notes">{}</p>"#, escape(notes));
        }
        html.push_str("</div>");
        if with_delete {
            let _ = write!(
                html,
                r#"<form method="post" action="/entries/{}/delete"><button class="ghost" type="submit" aria-label="Delete">&times;</button></form>"#,
                entry.id
            );
        }
        html.push_str("</li>");
    }
    html
}

/// Short human summary of an entry's payload.
pub fn describe(entry: &Entry) -> String {
    let unit = entry.kind().unit();
    let with_unit = |value: Option<f64>| match value {
        Some(value) => format!("{} {unit}", amount(value)),
        None => String::new(),
    };

    match &entry.activity {
        Activity::Sauna(s) | Activity::ColdPlunge(s) => {
            let mut text = with_unit(s.duration);
            if let Some(temp) = s.temperature {
                if !text.is_empty() {
                    text.push_str(" at ");
                }
                let _ = write!(text, "{}°C", amount(temp));
            }
            text
        }
        Activity::Workout(t) | Activity::WorkHours(t) => with_unit(t.duration),
        Activity::Water(i) | Activity::Coffee(i) | Activity::Alcohol(i) => with_unit(i.quantity),
        Activity::Mood(m) => m.mood.map(Mood::label).unwrap_or_default().to_string(),
        Activity::Energy(e) => e.energy.map(Energy::label).unwrap_or_default().to_string(),
        Activity::Meetings(m) => with_unit(m.meeting_count),
        Activity::Steps(r)
        | Activity::ActiveCalories(r)
        | Activity::TotalCalories(r)
        | Activity::ExerciseMinutes(r)
        | Activity::StandHours(r)
        | Activity::Distance(r)
        | Activity::Sleep(r)
        | Activity::HeartRate(r)
        | Activity::RestingHeartRate(r)
        | Activity::Hrv(r)
        | Activity::BloodOxygen(r)
        | Activity::RespiratoryRate(r)
        | Activity::Vo2Max(r)
        | Activity::Weight(r)
        | Activity::MindfulMinutes(r) => with_unit(r.value),
    }
}

fn amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '{' => out.push_str("&#123;"),
            _ => out.push(c),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Health Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef4f1;
      --bg-2: #b9e2d3;
      --ink: #1f2b2a;
      --up: #1f8a5b;
      --down: #c2412d;
      --accent: #2f6f62;
      --card: rgba(255, 255, 255, 0.88);
      --shadow: 0 24px 60px rgba(31, 43, 42, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #e2f1ea 60%, #f6faf8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle, .muted, small {
      color: #5b6664;
    }

    .tabs {
      display: flex;
      gap: 10px;
    }

    .tabs button, button[type="submit"] {
      border: none;
      border-radius: 999px;
      padding: 10px 18px;
      font: inherit;
      cursor: pointer;
      background: #dfe9e5;
      color: var(--ink);
    }

    .tabs button.active, button[type="submit"] {
      background: var(--accent);
      color: white;
    }

    .score {
      display: grid;
      grid-template-columns: 180px 1fr;
      gap: 24px;
      align-items: center;
      background: linear-gradient(135deg, #2f6f62, #3f8f7d);
      color: white;
      border-radius: 22px;
      padding: 24px;
    }

    .ring {
      position: relative;
      width: 160px;
      height: 160px;
    }

    .ring svg {
      transform: rotate(-90deg);
    }

    .ring .value {
      position: absolute;
      inset: 0;
      display: grid;
      place-items: center;
      text-align: center;
      font-size: 2.4rem;
      font-weight: 600;
    }

    .ring .value small {
      display: block;
      font-size: 0.9rem;
      color: rgba(255, 255, 255, 0.85);
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 8px;
    }

    .breakdown li {
      display: flex;
      justify-content: space-between;
    }

    .breakdown .up { color: #c9f7df; }
    .breakdown .down { color: #ffd3c9; }
    .score .muted { color: rgba(255, 255, 255, 0.8); }

    .metrics {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .metric {
      background: white;
      border-radius: 16px;
      padding: 14px;
      display: grid;
      gap: 4px;
    }

    .category h3 {
      margin: 0 0 8px;
    }

    .kinds {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    details {
      background: white;
      border-radius: 14px;
      padding: 8px 12px;
    }

    details[open] {
      flex-basis: 100%;
    }

    details form {
      display: grid;
      gap: 10px;
      padding-top: 10px;
    }

    label {
      display: grid;
      gap: 4px;
      font-size: 0.9rem;
    }

    input, select, textarea {
      font: inherit;
      padding: 8px 10px;
      border-radius: 10px;
      border: 1px solid #c8d6d1;
    }

    .entry {
      display: flex;
      justify-content: space-between;
      align-items: center;
      background: white;
      border-radius: 14px;
      padding: 12px 14px;
      border-left: 6px solid var(--accent);
    }

    .entry small {
      display: block;
    }

    .entry.wellness { border-color: #e8833a; }
    .entry.fitness { border-color: #3aa76d; }
    .entry.vitals { border-color: #6c5ce7; }
    .entry.nutrition { border-color: #1fa2c4; }
    .entry.mental { border-color: #d4a017; }
    .entry.productivity { border-color: #55606e; }

    .notes {
      margin: 4px 0 0;
      font-size: 0.9rem;
    }

    button.ghost {
      background: transparent;
      color: var(--down);
      font-size: 1.4rem;
      padding: 4px 10px;
    }

    [hidden] {
      display: none !important;
    }

    @media (max-width: 640px) {
      .score {
        grid-template-columns: 1fr;
        justify-items: center;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Health Tracker</h1>
      <p class="subtitle">Today is {{DATE}}</p>
    </header>

    <nav class="tabs" role="tablist">
      <button type="button" class="active" data-tab="dashboard">Dashboard</button>
      <button type="button" data-tab="entries">All Entries ({{COUNT}})</button>
    </nav>

    <div id="dashboard" class="panel">
      <section class="score">
        <div class="ring">
          <svg width="160" height="160">
            <circle cx="80" cy="80" r="70" stroke="rgba(255,255,255,0.2)" stroke-width="12" fill="none" />
            <circle cx="80" cy="80" r="70" stroke="white" stroke-width="12" fill="none"
              stroke-dasharray="{{RING_LENGTH}}" stroke-dashoffset="{{RING_OFFSET}}" stroke-linecap="round" />
          </svg>
          <div class="value"><div>{{SCORE}}<small>{{LABEL}}</small></div></div>
        </div>
        <div>
          <h2>Wellness Score</h2>
          <ul class="breakdown">{{BREAKDOWN}}</ul>
        </div>
      </section>

      <section class="metrics">{{TOTALS}}</section>

      <section>
        <h2>Quick Log</h2>
        {{QUICK_LOG}}
      </section>

      <section>
        <h2>Recent Activity</h2>
        <ul>{{RECENT}}</ul>
      </section>
    </div>

    <div id="entries" class="panel" hidden>
      <ul>{{ENTRIES}}</ul>
    </div>
  </main>

  <script>
    const tabs = document.querySelectorAll('[data-tab]');
    const panels = document.querySelectorAll('.panel');

    const setActiveTab = (tab) => {
      tabs.forEach((button) => button.classList.toggle('active', button.dataset.tab === tab));
      panels.forEach((panel) => { panel.hidden = panel.id !== tab; });
    };

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        history.replaceState(null, '', '#' + button.dataset.tab);
        setActiveTab(button.dataset.tab);
      });
    });

    if (location.hash === '#entries') {
      setActiveTab('entries');
    }
  </script>
</body>
</html>
"#;
