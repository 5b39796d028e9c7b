use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Every kind of activity the journal knows how to record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityKind {
    Sauna,
    ColdPlunge,
    Workout,
    Steps,
    ActiveCalories,
    TotalCalories,
    ExerciseMinutes,
    StandHours,
    Distance,
    Sleep,
    HeartRate,
    RestingHeartRate,
    Hrv,
    BloodOxygen,
    RespiratoryRate,
    Vo2Max,
    Weight,
    Water,
    Coffee,
    Alcohol,
    Mood,
    MindfulMinutes,
    Energy,
    WorkHours,
    Meetings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Wellness,
    Fitness,
    Vitals,
    Nutrition,
    Mental,
    Productivity,
}

/// Input fields a log form offers for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Duration,
    Temperature,
    Value,
    Quantity,
    Mood,
    Energy,
    MeetingCount,
}

impl Field {
    /// Name of the draft field this input fills.
    pub fn name(self) -> &'static str {
        match self {
            Self::Duration => "duration",
            Self::Temperature => "temperature",
            Self::Value => "value",
            Self::Quantity => "quantity",
            Self::Mood => "mood",
            Self::Energy => "energy",
            Self::MeetingCount => "meetingCount",
        }
    }
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 25] = [
        Self::Sauna,
        Self::ColdPlunge,
        Self::Workout,
        Self::Steps,
        Self::ActiveCalories,
        Self::TotalCalories,
        Self::ExerciseMinutes,
        Self::StandHours,
        Self::Distance,
        Self::Sleep,
        Self::HeartRate,
        Self::RestingHeartRate,
        Self::Hrv,
        Self::BloodOxygen,
        Self::RespiratoryRate,
        Self::Vo2Max,
        Self::Weight,
        Self::Water,
        Self::Coffee,
        Self::Alcohol,
        Self::Mood,
        Self::MindfulMinutes,
        Self::Energy,
        Self::WorkHours,
        Self::Meetings,
    ];

    /// The `type` tag used in stored entries and requests.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Sauna => "sauna",
            Self::ColdPlunge => "coldPlunge",
            Self::Workout => "workout",
            Self::Steps => "steps",
            Self::ActiveCalories => "activeCalories",
            Self::TotalCalories => "totalCalories",
            Self::ExerciseMinutes => "exerciseMinutes",
            Self::StandHours => "standHours",
            Self::Distance => "distance",
            Self::Sleep => "sleep",
            Self::HeartRate => "heartRate",
            Self::RestingHeartRate => "restingHeartRate",
            Self::Hrv => "hrv",
            Self::BloodOxygen => "bloodOxygen",
            Self::RespiratoryRate => "respiratoryRate",
            Self::Vo2Max => "vo2Max",
            Self::Weight => "weight",
            Self::Water => "water",
            Self::Coffee => "coffee",
            Self::Alcohol => "alcohol",
            Self::Mood => "mood",
            Self::MindfulMinutes => "mindfulMinutes",
            Self::Energy => "energy",
            Self::WorkHours => "workHours",
            Self::Meetings => "meetings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sauna => "Sauna",
            Self::ColdPlunge => "Cold Plunge",
            Self::Workout => "Workout",
            Self::Steps => "Steps",
            Self::ActiveCalories => "Active Calories",
            Self::TotalCalories => "Total Calories",
            Self::ExerciseMinutes => "Exercise Minutes",
            Self::StandHours => "Stand Hours",
            Self::Distance => "Distance",
            Self::Sleep => "Sleep",
            Self::HeartRate => "Heart Rate",
            Self::RestingHeartRate => "Resting HR",
            Self::Hrv => "HRV",
            Self::BloodOxygen => "Blood Oxygen",
            Self::RespiratoryRate => "Respiratory Rate",
            Self::Vo2Max => "VO2 Max",
            Self::Weight => "Weight",
            Self::Water => "Water",
            Self::Coffee => "Coffee",
            Self::Alcohol => "Alcohol",
            Self::Mood => "Mood",
            Self::MindfulMinutes => "Mindful Minutes",
            Self::Energy => "Energy Level",
            Self::WorkHours => "Work Hours",
            Self::Meetings => "Meetings",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Sauna | Self::ColdPlunge => Category::Wellness,
            Self::Workout
            | Self::Steps
            | Self::ActiveCalories
            | Self::TotalCalories
            | Self::ExerciseMinutes
            | Self::StandHours
            | Self::Distance => Category::Fitness,
            Self::Sleep
            | Self::HeartRate
            | Self::RestingHeartRate
            | Self::Hrv
            | Self::BloodOxygen
            | Self::RespiratoryRate
            | Self::Vo2Max
            | Self::Weight => Category::Vitals,
            Self::Water | Self::Coffee | Self::Alcohol => Category::Nutrition,
            Self::Mood | Self::MindfulMinutes | Self::Energy => Category::Mental,
            Self::WorkHours | Self::Meetings => Category::Productivity,
        }
    }

    /// Unit of the primary numeric field, empty for categorical kinds.
    pub fn unit(self) -> &'static str {
        match self {
            Self::Sauna | Self::ColdPlunge | Self::Workout => "min",
            Self::ExerciseMinutes | Self::MindfulMinutes => "min",
            Self::Steps => "steps",
            Self::ActiveCalories | Self::TotalCalories => "kcal",
            Self::StandHours | Self::Sleep | Self::WorkHours => "h",
            Self::Distance => "km",
            Self::HeartRate | Self::RestingHeartRate => "bpm",
            Self::Hrv => "ms",
            Self::BloodOxygen => "%",
            Self::RespiratoryRate => "breaths/min",
            Self::Vo2Max => "ml/kg/min",
            Self::Weight => "kg",
            Self::Water => "ml",
            Self::Coffee => "cups",
            Self::Alcohol => "drinks",
            Self::Meetings => "meetings",
            Self::Mood | Self::Energy => "",
        }
    }

    pub fn fields(self) -> &'static [Field] {
        match self {
            Self::Sauna | Self::ColdPlunge => &[Field::Duration, Field::Temperature],
            Self::Workout | Self::WorkHours => &[Field::Duration],
            Self::Water | Self::Coffee | Self::Alcohol => &[Field::Quantity],
            Self::Mood => &[Field::Mood],
            Self::Energy => &[Field::Energy],
            Self::Meetings => &[Field::MeetingCount],
            _ => &[Field::Value],
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown activity type '{}'", self.0)
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ActivityKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| UnknownKind(tag.to_string()))
    }
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Wellness,
        Self::Fitness,
        Self::Vitals,
        Self::Nutrition,
        Self::Mental,
        Self::Productivity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Wellness => "Wellness",
            Self::Fitness => "Fitness",
            Self::Vitals => "Vitals",
            Self::Nutrition => "Nutrition",
            Self::Mental => "Mental",
            Self::Productivity => "Productivity",
        }
    }

    /// Kinds in this category, in catalog order.
    pub fn kinds(self) -> impl Iterator<Item = ActivityKind> {
        ActivityKind::ALL
            .into_iter()
            .filter(move |kind| kind.category() == self)
    }
}

#[derive(Debug, Serialize)]
pub struct ActivityInfo {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub label: &'static str,
    pub unit: &'static str,
    pub fields: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub label: &'static str,
    pub activities: Vec<ActivityInfo>,
}

pub fn catalog() -> Vec<CategoryGroup> {
    Category::ALL
        .into_iter()
        .map(|category| CategoryGroup {
            category,
            label: category.label(),
            activities: category
                .kinds()
                .map(|kind| ActivityInfo {
                    kind,
                    label: kind.label(),
                    unit: kind.unit(),
                    fields: kind.fields().iter().map(|field| field.name()).collect(),
                })
                .collect(),
        })
        .collect()
}
