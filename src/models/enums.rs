use serde::Serialize;

use super::RecordError;

/// Macro to generate enum with as_str + label + std::str::FromStr pattern
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal, $label:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// Human-readable label for rendering.
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = RecordError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(RecordError::Validation(format!(
                        "Invalid {} name '{}'. Accepted values are: {}",
                        stringify!($name),
                        s,
                        [$($s),+].join(", "),
                    ))),
                }
            }
        }
    };
}

str_enum!(Habit {
    Smoking => "smoking", "Smoking",
    Alcohol => "alcohol", "Alcohol Consumption",
    Caffeine => "caffeine", "Caffeine Consumption",
    Exercise => "exercise", "Exercise",
    Drug => "drug", "Drug Use",
});

impl Habit {
    /// Habits that can be quit and carry a quit date. Exercise cannot.
    pub fn is_quittable(self) -> bool {
        !matches!(self, Self::Exercise)
    }
}

str_enum!(FamilyCondition {
    HeartDisease => "heart_disease", "Heart Disease",
    Stroke => "stroke", "Stroke",
    Diabetes => "diabetes", "Diabetes",
    Cancer => "cancer", "Cancer",
    Obesity => "obesity", "Obesity",
    MentalHealthIssues => "mental_health_issues", "Mental Health Issues",
    HighBloodPressure => "high_blood_pressure", "High Blood Pressure",
    KidneyDisease => "kidney_disease", "Kidney Disease",
});
