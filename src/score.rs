//! Daily wellness score.
//!
//! Starts from a baseline and applies one additive adjustment per factor. Each
//! factor looks only at entries of its own kind. Sums run over every matching
//! entry; single-reading factors (sleep, mood, energy, HRV, blood oxygen) use the
//! first matching entry in collection order, which is the most recently added
//! one since the journal keeps entries newest first.

use crate::models::{Activity, Energy, Entry, Mood, ScoreBreakdownItem, WellnessScore};

pub const BASELINE: f64 = 50.0;
pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

// Rule table, in evaluation order.
pub const WORKOUT_BONUS_EACH: f64 = 8.0;
pub const WORKOUT_BONUS_CAP: f64 = 15.0;
pub const SAUNA_BONUS_EACH: f64 = 10.0;
pub const SAUNA_BONUS_CAP: f64 = 10.0;
pub const COLD_PLUNGE_BONUS_EACH: f64 = 10.0;
pub const COLD_PLUNGE_BONUS_CAP: f64 = 10.0;
pub const STEPS_PER_UNIT: f64 = 10_000.0;
pub const STEPS_BONUS: f64 = 10.0;
pub const EXERCISE_MIN_MINUTES: f64 = 30.0;
pub const EXERCISE_BONUS: f64 = 10.0;
pub const SLEEP_GOOD_HOURS: (f64, f64) = (7.0, 9.0);
pub const SLEEP_POOR_BELOW_HOURS: f64 = 6.0;
pub const SLEEP_GOOD_BONUS: f64 = 15.0;
pub const SLEEP_POOR_PENALTY: f64 = 10.0;
pub const HYDRATION_TARGET_ML: f64 = 2_000.0;
pub const HYDRATION_BONUS: f64 = 8.0;
pub const HYDRATION_LOW_BELOW_ML: f64 = 1_000.0;
pub const HYDRATION_LOW_PENALTY: f64 = 5.0;
pub const COFFEE_LIMIT_CUPS: f64 = 4.0;
pub const COFFEE_PENALTY: f64 = 5.0;
pub const ALCOHOL_PENALTY_EACH: f64 = 10.0;
pub const ALCOHOL_PENALTY_CAP: f64 = 20.0;
pub const MOOD_GREAT_BONUS: f64 = 10.0;
pub const MOOD_GOOD_BONUS: f64 = 5.0;
pub const MOOD_LOW_PENALTY: f64 = 5.0;
pub const MOOD_BAD_PENALTY: f64 = 10.0;
pub const ENERGY_VERY_HIGH_BONUS: f64 = 8.0;
pub const ENERGY_HIGH_BONUS: f64 = 5.0;
pub const ENERGY_LOW_PENALTY: f64 = 5.0;
pub const ENERGY_VERY_LOW_PENALTY: f64 = 8.0;
pub const MINDFUL_MIN_MINUTES: f64 = 10.0;
pub const MINDFUL_BONUS: f64 = 8.0;
pub const HRV_EXCELLENT_MS: f64 = 50.0;
pub const HRV_GOOD_MS: f64 = 30.0;
pub const HRV_LOW_BELOW_MS: f64 = 20.0;
pub const HRV_EXCELLENT_BONUS: f64 = 8.0;
pub const HRV_GOOD_BONUS: f64 = 4.0;
pub const HRV_LOW_PENALTY: f64 = 5.0;
pub const WORK_HOURS_LIMIT: f64 = 8.0;
pub const WORK_HOURS_PENALTY_EACH: f64 = 2.0;
pub const WORK_HOURS_PENALTY_CAP: f64 = 15.0;
pub const MEETINGS_LIMIT: f64 = 3.0;
pub const MEETINGS_PENALTY_EACH: f64 = 2.0;
pub const MEETINGS_PENALTY_CAP: f64 = 10.0;
pub const STAND_HOURS_TARGET: f64 = 12.0;
pub const STAND_HOURS_BONUS: f64 = 5.0;
pub const BLOOD_OXYGEN_GOOD_PCT: f64 = 95.0;
pub const BLOOD_OXYGEN_LOW_BELOW_PCT: f64 = 90.0;
pub const BLOOD_OXYGEN_GOOD_BONUS: f64 = 5.0;
pub const BLOOD_OXYGEN_LOW_PENALTY: f64 = 8.0;

struct Tally {
    score: f64,
    breakdown: Vec<ScoreBreakdownItem>,
}

impl Tally {
    fn bonus(&mut self, factor: &str, amount: f64) {
        self.score += amount;
        self.breakdown.push(ScoreBreakdownItem {
            factor: factor.to_string(),
            impact: amount.round() as i32,
            positive: true,
        });
    }

    fn penalty(&mut self, factor: &str, amount: f64) {
        self.score -= amount;
        self.breakdown.push(ScoreBreakdownItem {
            factor: factor.to_string(),
            impact: -(amount.round() as i32),
            positive: false,
        });
    }
}

fn count<F>(entries: &[&Entry], matches: F) -> f64
where
    F: Fn(&Activity) -> bool,
{
    entries.iter().filter(|entry| matches(&entry.activity)).count() as f64
}

fn total<F>(entries: &[&Entry], amount: F) -> f64
where
    F: Fn(&Activity) -> Option<f64>,
{
    entries.iter().filter_map(|entry| amount(&entry.activity)).sum()
}

fn first<T, F>(entries: &[&Entry], pick: F) -> Option<T>
where
    F: Fn(&Activity) -> Option<T>,
{
    entries.iter().find_map(|entry| pick(&entry.activity))
}

/// Scores one day of entries. The caller picks the day.
pub fn compute_score<'a, I>(day: I) -> WellnessScore
where
    I: IntoIterator<Item = &'a Entry>,
{
    let entries: Vec<&Entry> = day.into_iter().collect();
    let mut tally = Tally {
        score: BASELINE,
        breakdown: Vec::new(),
    };

    let workouts = count(&entries, |a| matches!(a, Activity::Workout(_)));
    if workouts > 0.0 {
        tally.bonus("Workouts", (workouts * WORKOUT_BONUS_EACH).min(WORKOUT_BONUS_CAP));
    }

    let saunas = count(&entries, |a| matches!(a, Activity::Sauna(_)));
    if saunas > 0.0 {
        tally.bonus("Sauna", (saunas * SAUNA_BONUS_EACH).min(SAUNA_BONUS_CAP));
    }

    let plunges = count(&entries, |a| matches!(a, Activity::ColdPlunge(_)));
    if plunges > 0.0 {
        tally.bonus(
            "Cold Plunge",
            (plunges * COLD_PLUNGE_BONUS_EACH).min(COLD_PLUNGE_BONUS_CAP),
        );
    }

    let steps = total(&entries, |a| match a {
        Activity::Steps(r) => Some(r.amount()),
        _ => None,
    });
    if steps > 0.0 {
        tally.bonus("Steps", (steps / STEPS_PER_UNIT * STEPS_BONUS).min(STEPS_BONUS));
    }

    let exercise = total(&entries, |a| match a {
        Activity::ExerciseMinutes(r) => Some(r.amount()),
        _ => None,
    });
    if exercise >= EXERCISE_MIN_MINUTES {
        tally.bonus(
            "Exercise",
            (exercise / EXERCISE_MIN_MINUTES * EXERCISE_BONUS).min(EXERCISE_BONUS),
        );
    }

    if let Some(hours) = first(&entries, |a| match a {
        Activity::Sleep(r) => Some(r.amount()),
        _ => None,
    }) {
        let (low, high) = SLEEP_GOOD_HOURS;
        if (low..=high).contains(&hours) {
            tally.bonus("Sleep", SLEEP_GOOD_BONUS);
        } else if hours < SLEEP_POOR_BELOW_HOURS {
            tally.penalty("Poor Sleep", SLEEP_POOR_PENALTY);
        }
    }

    let water = total(&entries, |a| match a {
        Activity::Water(i) => Some(i.amount()),
        _ => None,
    });
    if water >= HYDRATION_TARGET_ML {
        tally.bonus(
            "Hydration",
            (water / HYDRATION_TARGET_ML * HYDRATION_BONUS).min(HYDRATION_BONUS),
        );
    } else if water > 0.0 && water < HYDRATION_LOW_BELOW_ML {
        tally.penalty("Low Hydration", HYDRATION_LOW_PENALTY);
    }

    let coffee = total(&entries, |a| match a {
        Activity::Coffee(i) => Some(i.amount()),
        _ => None,
    });
    if coffee > COFFEE_LIMIT_CUPS {
        tally.penalty("Too Much Coffee", COFFEE_PENALTY);
    }

    let alcohol = total(&entries, |a| match a {
        Activity::Alcohol(i) => Some(i.amount()),
        _ => None,
    });
    if alcohol > 0.0 {
        tally.penalty(
            "Alcohol",
            (alcohol * ALCOHOL_PENALTY_EACH).min(ALCOHOL_PENALTY_CAP),
        );
    }

    // A mood or energy entry without a recognised value still counts as the
    // first of its kind and suppresses any later one.
    if let Some(mood) = first(&entries, |a| match a {
        Activity::Mood(m) => Some(m.mood),
        _ => None,
    }) {
        match mood {
            Some(Mood::Great) => tally.bonus("Great Mood", MOOD_GREAT_BONUS),
            Some(Mood::Good) => tally.bonus("Good Mood", MOOD_GOOD_BONUS),
            Some(Mood::Low) => tally.penalty("Low Mood", MOOD_LOW_PENALTY),
            Some(Mood::Bad) => tally.penalty("Bad Mood", MOOD_BAD_PENALTY),
            Some(Mood::Neutral) | None => {}
        }
    }

    if let Some(energy) = first(&entries, |a| match a {
        Activity::Energy(e) => Some(e.energy),
        _ => None,
    }) {
        match energy {
            Some(Energy::VeryHigh) => tally.bonus("High Energy", ENERGY_VERY_HIGH_BONUS),
            Some(Energy::High) => tally.bonus("Good Energy", ENERGY_HIGH_BONUS),
            Some(Energy::Low) => tally.penalty("Low Energy", ENERGY_LOW_PENALTY),
            Some(Energy::VeryLow) => tally.penalty("Very Low Energy", ENERGY_VERY_LOW_PENALTY),
            Some(Energy::Medium) | None => {}
        }
    }

    let mindful = total(&entries, |a| match a {
        Activity::MindfulMinutes(r) => Some(r.amount()),
        _ => None,
    });
    if mindful >= MINDFUL_MIN_MINUTES {
        tally.bonus(
            "Mindfulness",
            (mindful / MINDFUL_MIN_MINUTES * MINDFUL_BONUS).min(MINDFUL_BONUS),
        );
    }

    if let Some(hrv) = first(&entries, |a| match a {
        Activity::Hrv(r) => Some(r.amount()),
        _ => None,
    }) {
        if hrv >= HRV_EXCELLENT_MS {
            tally.bonus("Excellent HRV", HRV_EXCELLENT_BONUS);
        } else if hrv >= HRV_GOOD_MS {
            tally.bonus("Good HRV", HRV_GOOD_BONUS);
        } else if hrv < HRV_LOW_BELOW_MS {
            tally.penalty("Low HRV", HRV_LOW_PENALTY);
        }
    }

    let work = total(&entries, |a| match a {
        Activity::WorkHours(t) => Some(t.amount()),
        _ => None,
    });
    if work > WORK_HOURS_LIMIT {
        tally.penalty(
            "Long Work Hours",
            ((work - WORK_HOURS_LIMIT) * WORK_HOURS_PENALTY_EACH).min(WORK_HOURS_PENALTY_CAP),
        );
    }

    let meetings = total(&entries, |a| match a {
        Activity::Meetings(m) => Some(m.amount()),
        _ => None,
    });
    if meetings > MEETINGS_LIMIT {
        tally.penalty(
            "Too Many Meetings",
            ((meetings - MEETINGS_LIMIT) * MEETINGS_PENALTY_EACH).min(MEETINGS_PENALTY_CAP),
        );
    }

    let stand = total(&entries, |a| match a {
        Activity::StandHours(r) => Some(r.amount()),
        _ => None,
    });
    if stand >= STAND_HOURS_TARGET {
        tally.bonus("Stand Hours", STAND_HOURS_BONUS);
    }

    if let Some(oxygen) = first(&entries, |a| match a {
        Activity::BloodOxygen(r) => Some(r.amount()),
        _ => None,
    }) {
        if oxygen >= BLOOD_OXYGEN_GOOD_PCT {
            tally.bonus("Good O2", BLOOD_OXYGEN_GOOD_BONUS);
        } else if oxygen < BLOOD_OXYGEN_LOW_BELOW_PCT {
            tally.penalty("Low O2", BLOOD_OXYGEN_LOW_PENALTY);
        }
    }

    WellnessScore {
        score: tally.score.clamp(MIN_SCORE, MAX_SCORE).round() as u8,
        breakdown: tally.breakdown,
    }
}

/// Display band for a score.
pub fn score_label(score: u8) -> &'static str {
    match score {
        80..=u8::MAX => "Excellent",
        60..=79 => "Good",
        40..=59 => "Fair",
        20..=39 => "Poor",
        _ => "Critical",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        EnergyCheck, Intake, MANUAL_SOURCE, MeetingLog, MoodCheck, Reading, Session, Timed,
    };
    use chrono::{TimeZone, Utc};

    fn entry(id: u64, activity: Activity) -> Entry {
        Entry {
            id,
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 0, 0).unwrap(),
            activity,
            notes: None,
            source: MANUAL_SOURCE.to_string(),
        }
    }

    fn reading(value: f64) -> Reading {
        Reading { value: Some(value) }
    }

    fn intake(quantity: f64) -> Intake {
        Intake {
            quantity: Some(quantity),
        }
    }

    fn mood(mood: Mood) -> Activity {
        Activity::Mood(MoodCheck { mood: Some(mood) })
    }

    fn energy(energy: Energy) -> Activity {
        Activity::Energy(EnergyCheck {
            energy: Some(energy),
        })
    }

    fn item(factor: &str, impact: i32, positive: bool) -> ScoreBreakdownItem {
        ScoreBreakdownItem {
            factor: factor.to_string(),
            impact,
            positive,
        }
    }

    #[test]
    fn empty_day_scores_baseline() {
        let day: Vec<Entry> = Vec::new();
        let result = compute_score(&day);
        assert_eq!(result.score, 50);
        assert!(result.breakdown.is_empty());
    }

    #[test]
    fn good_sleep_adds_fifteen() {
        let day = [entry(1, Activity::Sleep(reading(8.0)))];
        let result = compute_score(&day);
        assert_eq!(result.score, 65);
        assert_eq!(result.breakdown, vec![item("Sleep", 15, true)]);
    }

    #[test]
    fn sleep_bands() {
        let short = compute_score(&[entry(1, Activity::Sleep(reading(5.5)))]);
        assert_eq!(short.breakdown, vec![item("Poor Sleep", -10, false)]);
        assert_eq!(short.score, 40);

        let middling = compute_score(&[entry(1, Activity::Sleep(reading(6.5)))]);
        assert!(middling.breakdown.is_empty());

        let long = compute_score(&[entry(1, Activity::Sleep(reading(9.5)))]);
        assert!(long.breakdown.is_empty());

        let missing = compute_score(&[entry(1, Activity::Sleep(Reading::default()))]);
        assert_eq!(missing.breakdown, vec![item("Poor Sleep", -10, false)]);
    }

    #[test]
    fn alcohol_penalty_is_capped() {
        let day = [
            entry(1, Activity::Alcohol(intake(2.0))),
            entry(2, Activity::Alcohol(intake(2.0))),
        ];
        let result = compute_score(&day);
        assert_eq!(result.breakdown, vec![item("Alcohol", -20, false)]);
        assert_eq!(result.score, 30);
    }

    #[test]
    fn steps_bonus_is_capped() {
        let day = [
            entry(1, Activity::Steps(reading(12_000.0))),
            entry(2, Activity::Steps(reading(8_000.0))),
        ];
        let result = compute_score(&day);
        assert_eq!(result.breakdown, vec![item("Steps", 10, true)]);
        assert_eq!(result.score, 60);
    }

    #[test]
    fn long_work_hours() {
        let day = [
            entry(1, Activity::WorkHours(Timed { duration: Some(6.0) })),
            entry(2, Activity::WorkHours(Timed { duration: Some(4.0) })),
        ];
        let result = compute_score(&day);
        assert_eq!(result.breakdown, vec![item("Long Work Hours", -4, false)]);
        assert_eq!(result.score, 46);
    }

    #[test]
    fn great_mood_and_very_high_energy() {
        let day = [
            entry(1, mood(Mood::Great)),
            entry(2, energy(Energy::VeryHigh)),
        ];
        let result = compute_score(&day);
        assert_eq!(result.score, 68);
        assert_eq!(
            result.breakdown,
            vec![item("Great Mood", 10, true), item("High Energy", 8, true)]
        );
    }

    #[test]
    fn first_matching_entry_wins() {
        let day = [
            entry(2, mood(Mood::Bad)),
            entry(1, mood(Mood::Great)),
        ];
        assert_eq!(compute_score(&day).breakdown, vec![item("Bad Mood", -10, false)]);

        let day = [
            entry(2, Activity::Mood(MoodCheck { mood: None })),
            entry(1, mood(Mood::Great)),
        ];
        assert!(compute_score(&day).breakdown.is_empty());
    }

    #[test]
    fn count_factors_are_capped() {
        let day = [
            entry(1, Activity::Workout(Timed::default())),
            entry(2, Activity::Workout(Timed::default())),
            entry(3, Activity::Workout(Timed::default())),
            entry(4, Activity::Sauna(Session::default())),
            entry(5, Activity::Sauna(Session::default())),
            entry(6, Activity::ColdPlunge(Session::default())),
        ];
        let result = compute_score(&day);
        assert_eq!(
            result.breakdown,
            vec![
                item("Workouts", 15, true),
                item("Sauna", 10, true),
                item("Cold Plunge", 10, true),
            ]
        );
        assert_eq!(result.score, 85);

        let one = compute_score(&[entry(1, Activity::Workout(Timed::default()))]);
        assert_eq!(one.breakdown, vec![item("Workouts", 8, true)]);
    }

    #[test]
    fn fractional_bonus_rounds_only_in_breakdown() {
        let day = [entry(1, Activity::Steps(reading(4_500.0)))];
        let result = compute_score(&day);
        assert_eq!(result.breakdown, vec![item("Steps", 5, true)]);
        // 50 + 4.5 = 54.5 rounds to 55
        assert_eq!(result.score, 55);

        let day = [
            entry(1, Activity::Steps(reading(1_400.0))),
            entry(2, Activity::Steps(reading(1_000.0))),
        ];
        let result = compute_score(&day);
        // 2.4 recorded as 2, score 52.4 -> 52
        assert_eq!(result.breakdown, vec![item("Steps", 2, true)]);
        assert_eq!(result.score, 52);
    }

    #[test]
    fn exercise_and_mindfulness_thresholds() {
        let below = compute_score(&[entry(1, Activity::ExerciseMinutes(reading(29.0)))]);
        assert!(below.breakdown.is_empty());

        let day = [
            entry(1, Activity::ExerciseMinutes(reading(45.0))),
            entry(2, Activity::MindfulMinutes(reading(5.0))),
            entry(3, Activity::MindfulMinutes(reading(5.0))),
        ];
        let result = compute_score(&day);
        assert_eq!(
            result.breakdown,
            vec![item("Exercise", 10, true), item("Mindfulness", 8, true)]
        );
        assert_eq!(result.score, 68);
    }

    #[test]
    fn hydration_bands() {
        let plenty = compute_score(&[entry(1, Activity::Water(intake(2_500.0)))]);
        assert_eq!(plenty.breakdown, vec![item("Hydration", 8, true)]);

        let low = compute_score(&[entry(1, Activity::Water(intake(600.0)))]);
        assert_eq!(low.breakdown, vec![item("Low Hydration", -5, false)]);

        let middling = compute_score(&[entry(1, Activity::Water(intake(1_500.0)))]);
        assert!(middling.breakdown.is_empty());

        let none = compute_score(&[entry(1, Activity::Water(intake(0.0)))]);
        assert!(none.breakdown.is_empty());
    }

    #[test]
    fn coffee_meetings_and_stand_hours() {
        let day = [
            entry(1, Activity::Coffee(intake(3.0))),
            entry(2, Activity::Coffee(intake(2.0))),
            entry(
                3,
                Activity::Meetings(MeetingLog {
                    meeting_count: Some(20.0),
                }),
            ),
            entry(4, Activity::StandHours(reading(12.0))),
        ];
        let result = compute_score(&day);
        assert_eq!(
            result.breakdown,
            vec![
                item("Too Much Coffee", -5, false),
                item("Too Many Meetings", -10, false),
                item("Stand Hours", 5, true),
            ]
        );
        assert_eq!(result.score, 40);
    }

    #[test]
    fn hrv_and_blood_oxygen_bands() {
        let cases = [
            (55.0, Some(item("Excellent HRV", 8, true))),
            (35.0, Some(item("Good HRV", 4, true))),
            (25.0, None),
            (15.0, Some(item("Low HRV", -5, false))),
        ];
        for (value, expected) in cases {
            let result = compute_score(&[entry(1, Activity::Hrv(reading(value)))]);
            assert_eq!(result.breakdown, expected.into_iter().collect::<Vec<_>>());
        }

        let cases = [
            (98.0, Some(item("Good O2", 5, true))),
            (92.0, None),
            (88.0, Some(item("Low O2", -8, false))),
        ];
        for (value, expected) in cases {
            let result = compute_score(&[entry(1, Activity::BloodOxygen(reading(value)))]);
            assert_eq!(result.breakdown, expected.into_iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn breakdown_follows_rule_order() {
        let day = [
            entry(1, Activity::BloodOxygen(reading(98.0))),
            entry(2, Activity::StandHours(reading(12.0))),
            entry(
                3,
                Activity::Meetings(MeetingLog {
                    meeting_count: Some(5.0),
                }),
            ),
            entry(
                4,
                Activity::WorkHours(Timed {
                    duration: Some(9.25),
                }),
            ),
            entry(5, Activity::Hrv(reading(60.0))),
            entry(6, Activity::MindfulMinutes(reading(10.0))),
            entry(7, energy(Energy::VeryHigh)),
            entry(8, mood(Mood::Great)),
            entry(9, Activity::Alcohol(intake(1.0))),
            entry(10, Activity::Coffee(intake(5.0))),
            entry(11, Activity::Water(intake(2_000.0))),
            entry(12, Activity::Sleep(reading(8.0))),
            entry(13, Activity::ExerciseMinutes(reading(30.0))),
            entry(14, Activity::Steps(reading(2_500.0))),
            entry(15, Activity::ColdPlunge(Session::default())),
            entry(16, Activity::Sauna(Session::default())),
            entry(17, Activity::Workout(Timed::default())),
        ];
        let result = compute_score(&day);
        assert_eq!(
            result.breakdown,
            vec![
                item("Workouts", 8, true),
                item("Sauna", 10, true),
                item("Cold Plunge", 10, true),
                item("Steps", 3, true),
                item("Exercise", 10, true),
                item("Sleep", 15, true),
                item("Hydration", 8, true),
                item("Too Much Coffee", -5, false),
                item("Alcohol", -10, false),
                item("Great Mood", 10, true),
                item("High Energy", 8, true),
                item("Mindfulness", 8, true),
                item("Excellent HRV", 8, true),
                item("Long Work Hours", -3, false),
                item("Too Many Meetings", -4, false),
                item("Stand Hours", 5, true),
                item("Good O2", 5, true),
            ]
        );
        assert_eq!(result.score, 100);
    }

    #[test]
    fn score_is_clamped() {
        let mut day = vec![
            entry(1, Activity::Workout(Timed::default())),
            entry(2, Activity::Workout(Timed::default())),
            entry(3, Activity::Sauna(Session::default())),
            entry(4, Activity::ColdPlunge(Session::default())),
            entry(5, Activity::Steps(reading(20_000.0))),
            entry(6, Activity::Sleep(reading(8.0))),
            entry(7, Activity::Water(intake(3_000.0))),
            entry(8, mood(Mood::Great)),
        ];
        assert_eq!(compute_score(&day).score, 100);

        day.clear();
        day.push(entry(1, Activity::Sleep(reading(3.0))));
        day.push(entry(2, Activity::Alcohol(intake(5.0))));
        day.push(entry(3, mood(Mood::Bad)));
        day.push(entry(4, energy(Energy::VeryLow)));
        day.push(entry(5, Activity::WorkHours(Timed { duration: Some(20.0) })));
        day.push(entry(6, Activity::BloodOxygen(reading(85.0))));
        let result = compute_score(&day);
        assert_eq!(result.score, 0);
        assert_eq!(result.breakdown.len(), 6);
    }

    #[test]
    fn scoring_is_pure_and_ignores_unscored_kinds() {
        let day = [
            entry(1, Activity::Weight(reading(80.0))),
            entry(2, Activity::HeartRate(reading(60.0))),
            entry(3, Activity::Sleep(reading(7.0))),
            entry(4, Activity::Steps(reading(3_000.0))),
        ];
        let first = compute_score(&day);
        let second = compute_score(&day);
        assert_eq!(first, second);
        assert_eq!(first.score, 68);

        let reordered = [day[3].clone(), day[2].clone(), day[1].clone(), day[0].clone()];
        assert_eq!(compute_score(&reordered), first);
    }

    #[test]
    fn labels_follow_bands() {
        assert_eq!(score_label(100), "Excellent");
        assert_eq!(score_label(80), "Excellent");
        assert_eq!(score_label(79), "Good");
        assert_eq!(score_label(40), "Fair");
        assert_eq!(score_label(20), "Poor");
        assert_eq!(score_label(19), "Critical");
    }
}
