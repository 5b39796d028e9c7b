use crate::catalog::ActivityKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

pub const MANUAL_SOURCE: &str = "manual";

/// One logged occurrence of an activity. Entries are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u64,
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub activity: Activity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "manual_source")]
    pub source: String,
}

fn manual_source() -> String {
    MANUAL_SOURCE.to_string()
}

impl Entry {
    pub fn kind(&self) -> ActivityKind {
        self.activity.kind()
    }
}

/// Activity payload, tagged by `type` with the stored camelCase names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Activity {
    Sauna(Session),
    ColdPlunge(Session),
    Workout(Timed),
    Steps(Reading),
    ActiveCalories(Reading),
    TotalCalories(Reading),
    ExerciseMinutes(Reading),
    StandHours(Reading),
    Distance(Reading),
    Sleep(Reading),
    HeartRate(Reading),
    RestingHeartRate(Reading),
    Hrv(Reading),
    BloodOxygen(Reading),
    RespiratoryRate(Reading),
    Vo2Max(Reading),
    Weight(Reading),
    Water(Intake),
    Coffee(Intake),
    Alcohol(Intake),
    Mood(MoodCheck),
    MindfulMinutes(Reading),
    Energy(EnergyCheck),
    WorkHours(Timed),
    Meetings(MeetingLog),
}

/// Heat or cold exposure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timed {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intake {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoodCheck {
    #[serde(default, deserialize_with = "lenient_choice", skip_serializing_if = "Option::is_none")]
    pub mood: Option<Mood>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnergyCheck {
    #[serde(default, deserialize_with = "lenient_choice", skip_serializing_if = "Option::is_none")]
    pub energy: Option<Energy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetingLog {
    #[serde(
        rename = "meetingCount",
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub meeting_count: Option<f64>,
}

impl Timed {
    pub fn amount(&self) -> f64 {
        self.duration.unwrap_or(0.0)
    }
}

impl Reading {
    pub fn amount(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

impl Intake {
    pub fn amount(&self) -> f64 {
        self.quantity.unwrap_or(0.0)
    }
}

impl MeetingLog {
    pub fn amount(&self) -> f64 {
        self.meeting_count.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Great,
    Good,
    Neutral,
    Low,
    Bad,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Energy {
    VeryHigh,
    High,
    Medium,
    Low,
    VeryLow,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Self::Great, Self::Good, Self::Neutral, Self::Low, Self::Bad];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Great => "great",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Low => "low",
            Self::Bad => "bad",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Low => "Low",
            Self::Bad => "Bad",
        }
    }
}

impl Energy {
    pub const ALL: [Energy; 5] = [
        Self::VeryHigh,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::VeryLow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryHigh => "very-high",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::VeryLow => "very-low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryHigh => "Very High",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::VeryLow => "Very Low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownChoice(pub String);

impl fmt::Display for UnknownChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognised choice '{}'", self.0)
    }
}

impl std::error::Error for UnknownChoice {}

impl FromStr for Mood {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|mood| mood.as_str() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

impl FromStr for Energy {
    type Err = UnknownChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|energy| energy.as_str() == s)
            .ok_or_else(|| UnknownChoice(s.to_string()))
    }
}

impl Activity {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Sauna(_) => ActivityKind::Sauna,
            Self::ColdPlunge(_) => ActivityKind::ColdPlunge,
            Self::Workout(_) => ActivityKind::Workout,
            Self::Steps(_) => ActivityKind::Steps,
            Self::ActiveCalories(_) => ActivityKind::ActiveCalories,
            Self::TotalCalories(_) => ActivityKind::TotalCalories,
            Self::ExerciseMinutes(_) => ActivityKind::ExerciseMinutes,
            Self::StandHours(_) => ActivityKind::StandHours,
            Self::Distance(_) => ActivityKind::Distance,
            Self::Sleep(_) => ActivityKind::Sleep,
            Self::HeartRate(_) => ActivityKind::HeartRate,
            Self::RestingHeartRate(_) => ActivityKind::RestingHeartRate,
            Self::Hrv(_) => ActivityKind::Hrv,
            Self::BloodOxygen(_) => ActivityKind::BloodOxygen,
            Self::RespiratoryRate(_) => ActivityKind::RespiratoryRate,
            Self::Vo2Max(_) => ActivityKind::Vo2Max,
            Self::Weight(_) => ActivityKind::Weight,
            Self::Water(_) => ActivityKind::Water,
            Self::Coffee(_) => ActivityKind::Coffee,
            Self::Alcohol(_) => ActivityKind::Alcohol,
            Self::Mood(_) => ActivityKind::Mood,
            Self::MindfulMinutes(_) => ActivityKind::MindfulMinutes,
            Self::Energy(_) => ActivityKind::Energy,
            Self::WorkHours(_) => ActivityKind::WorkHours,
            Self::Meetings(_) => ActivityKind::Meetings,
        }
    }

    /// Builds the payload for `kind`, keeping only the fields that kind carries.
    pub fn from_draft(kind: ActivityKind, draft: &EntryDraft) -> Self {
        let session = || Session {
            duration: draft.duration,
            temperature: draft.temperature,
        };
        let timed = || Timed {
            duration: draft.duration,
        };
        let reading = || Reading { value: draft.value };
        let intake = || Intake {
            quantity: draft.quantity,
        };

        match kind {
            ActivityKind::Sauna => Self::Sauna(session()),
            ActivityKind::ColdPlunge => Self::ColdPlunge(session()),
            ActivityKind::Workout => Self::Workout(timed()),
            ActivityKind::Steps => Self::Steps(reading()),
            ActivityKind::ActiveCalories => Self::ActiveCalories(reading()),
            ActivityKind::TotalCalories => Self::TotalCalories(reading()),
            ActivityKind::ExerciseMinutes => Self::ExerciseMinutes(reading()),
            ActivityKind::StandHours => Self::StandHours(reading()),
            ActivityKind::Distance => Self::Distance(reading()),
            ActivityKind::Sleep => Self::Sleep(reading()),
            ActivityKind::HeartRate => Self::HeartRate(reading()),
            ActivityKind::RestingHeartRate => Self::RestingHeartRate(reading()),
            ActivityKind::Hrv => Self::Hrv(reading()),
            ActivityKind::BloodOxygen => Self::BloodOxygen(reading()),
            ActivityKind::RespiratoryRate => Self::RespiratoryRate(reading()),
            ActivityKind::Vo2Max => Self::Vo2Max(reading()),
            ActivityKind::Weight => Self::Weight(reading()),
            ActivityKind::Water => Self::Water(intake()),
            ActivityKind::Coffee => Self::Coffee(intake()),
            ActivityKind::Alcohol => Self::Alcohol(intake()),
            ActivityKind::Mood => Self::Mood(MoodCheck {
                mood: draft.mood.as_deref().and_then(|m| m.parse().ok()),
            }),
            ActivityKind::MindfulMinutes => Self::MindfulMinutes(reading()),
            ActivityKind::Energy => Self::Energy(EnergyCheck {
                energy: draft.energy.as_deref().and_then(|e| e.parse().ok()),
            }),
            ActivityKind::WorkHours => Self::WorkHours(timed()),
            ActivityKind::Meetings => Self::Meetings(MeetingLog {
                meeting_count: draft.meeting_count,
            }),
        }
    }
}

/// A submitted log form, before it becomes a typed [`Entry`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub duration: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub temperature: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub energy: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub meeting_count: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdownItem {
    pub factor: String,
    pub impact: i32,
    pub positive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessScore {
    pub score: u8,
    pub breakdown: Vec<ScoreBreakdownItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodayResponse {
    pub date: String,
    pub total_entries: usize,
    pub water_ml: f64,
    pub steps: f64,
    pub active_calories: f64,
    pub exercise_minutes: f64,
    pub wellness: WellnessScore,
    pub label: String,
}

/// Accepts a number, or a string read the way a float prefix parser would.
/// Anything that does not yield a finite number becomes `0.0`.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Number(n)) if n.is_finite() => Some(n),
        Some(Raw::Text(text)) => Some(parse_float_prefix(&text)),
        Some(_) => Some(0.0),
    })
}

fn lenient_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| s.parse().ok()))
}

pub fn parse_float_prefix(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}
