use crate::journal::Journal;
use crate::models::{Activity, Entry, TodayResponse};
use crate::score::{compute_score, score_label};
use chrono::{Local, NaiveDate};

pub fn build_today(journal: &Journal) -> TodayResponse {
    build_today_at(Local::now().date_naive(), journal)
}

pub fn build_today_at(today: NaiveDate, journal: &Journal) -> TodayResponse {
    let entries = journal.entries_on(today);
    let wellness = compute_score(entries.iter().copied());

    TodayResponse {
        date: today.to_string(),
        total_entries: journal.len(),
        water_ml: sum(&entries, |a| match a {
            Activity::Water(i) => Some(i.amount()),
            _ => None,
        }),
        steps: sum(&entries, |a| match a {
            Activity::Steps(r) => Some(r.amount()),
            _ => None,
        }),
        active_calories: sum(&entries, |a| match a {
            Activity::ActiveCalories(r) => Some(r.amount()),
            _ => None,
        }),
        exercise_minutes: sum(&entries, |a| match a {
            Activity::ExerciseMinutes(r) => Some(r.amount()),
            _ => None,
        }),
        label: score_label(wellness.score).to_string(),
        wellness,
    }
}

fn sum<F>(entries: &[&Entry], amount: F) -> f64
where
    F: Fn(&Activity) -> Option<f64>,
{
    entries.iter().filter_map(|entry| amount(&entry.activity)).sum()
}
