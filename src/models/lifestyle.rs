use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::{join_or_none, Habit, OrderedSet, RecordError};
use crate::config;
use crate::validation::{validate_non_negative_int, validate_past_or_today};

/// Caller-supplied state of one habit.
#[derive(Debug, Clone, Copy, Default)]
pub struct HabitEntry {
    pub active: bool,
    /// Times per week
    pub frequency: i64,
    /// Ignored when `active` is true.
    pub quit_date: Option<NaiveDate>,
}

/// Input for building a [`LifestyleAndHabits`] record.
#[derive(Debug, Clone, Default)]
pub struct LifestyleEntry {
    pub smoking: HabitEntry,
    pub alcohol: HabitEntry,
    pub caffeine: HabitEntry,
    pub drug: HabitEntry,
    pub exercise_active: bool,
    pub exercise_frequency: i64,
    pub dietary_habits: Vec<String>,
}

/// Validated state of one habit. An active habit never carries a quit date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HabitState {
    active: bool,
    frequency: u32,
    quit_date: Option<NaiveDate>,
}

impl HabitState {
    fn from_entry(entry: HabitEntry) -> Result<Self, RecordError> {
        let quit_date = match (entry.active, entry.quit_date) {
            (false, Some(date)) => Some(validate_past_or_today(date)?),
            _ => None,
        };
        Ok(Self {
            active: entry.active,
            frequency: validate_non_negative_int(entry.frequency)?,
            quit_date,
        })
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    pub fn quit_date(&self) -> Option<NaiveDate> {
        self.quit_date
    }
}

/// Smoking, alcohol, caffeine and drug use, exercise, and dietary habits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifestyleAndHabits {
    smoking: HabitState,
    alcohol: HabitState,
    caffeine: HabitState,
    exercise: HabitState,
    drug: HabitState,
    dietary_habits: OrderedSet,
}

impl LifestyleAndHabits {
    pub fn new(entry: LifestyleEntry) -> Result<Self, RecordError> {
        Ok(Self {
            smoking: HabitState::from_entry(entry.smoking)?,
            alcohol: HabitState::from_entry(entry.alcohol)?,
            caffeine: HabitState::from_entry(entry.caffeine)?,
            exercise: HabitState {
                active: entry.exercise_active,
                frequency: validate_non_negative_int(entry.exercise_frequency)?,
                quit_date: None,
            },
            drug: HabitState::from_entry(entry.drug)?,
            dietary_habits: entry.dietary_habits.iter().collect(),
        })
    }

    pub fn habit(&self, habit: Habit) -> &HabitState {
        match habit {
            Habit::Smoking => &self.smoking,
            Habit::Alcohol => &self.alcohol,
            Habit::Caffeine => &self.caffeine,
            Habit::Exercise => &self.exercise,
            Habit::Drug => &self.drug,
        }
    }

    fn habit_mut(&mut self, habit: Habit) -> &mut HabitState {
        match habit {
            Habit::Smoking => &mut self.smoking,
            Habit::Alcohol => &mut self.alcohol,
            Habit::Caffeine => &mut self.caffeine,
            Habit::Exercise => &mut self.exercise,
            Habit::Drug => &mut self.drug,
        }
    }

    pub fn dietary_habits(&self) -> &[String] {
        self.dietary_habits.as_slice()
    }

    /// Mark an active habit as quit on `quit_date`.
    ///
    /// Fails if `quit_date` is after today, or if the habit is not active
    /// or cannot be quit (exercise).
    pub fn quit_habit(&mut self, habit: Habit, quit_date: NaiveDate) -> Result<(), RecordError> {
        let quit_date = validate_past_or_today(quit_date)?;
        let state = self.habit_mut(habit);
        if !habit.is_quittable() || !state.active {
            return Err(RecordError::validation(format!(
                "{} is not active or invalid habit name",
                habit.label()
            )));
        }
        state.active = false;
        state.quit_date = Some(quit_date);
        tracing::debug!(habit = habit.as_str(), %quit_date, "Habit quit recorded");
        Ok(())
    }

    /// Days elapsed since the habit was quit, or [`config::NO_QUIT_DATE`]
    /// when it is still active or the quit date is unknown.
    pub fn days_since_quit(&self, habit: Habit) -> i64 {
        let state = self.habit(habit);
        match state.quit_date {
            Some(date) if !state.active => (config::today() - date).num_days(),
            _ => config::NO_QUIT_DATE,
        }
    }

    /// Set a habit's activity and weekly frequency. Negative frequency is floored to 0.
    /// Activating a habit clears its quit date.
    pub fn update_habit(&mut self, habit: Habit, active: bool, frequency: i64) {
        let state = self.habit_mut(habit);
        state.active = active;
        state.frequency = u32::try_from(frequency.max(0)).unwrap_or(u32::MAX);
        if active {
            state.quit_date = None;
        }
    }

    /// Returns true if the diet was not already listed.
    pub fn add_diet(&mut self, diet: &str) -> bool {
        self.dietary_habits.insert(diet)
    }

    /// Returns false if the diet was not listed.
    pub fn remove_diet(&mut self, diet: &str) -> bool {
        self.dietary_habits.remove(diet)
    }

    fn describe(&self, habit: Habit) -> String {
        let state = self.habit(habit);
        if state.active {
            return format!("Yes (Frequency: {} per week)", state.frequency);
        }
        match state.quit_date {
            Some(_) => format!("Quit {} days ago", self.days_since_quit(habit)),
            None => "No (Never engaged or unknown quit date)".to_string(),
        }
    }
}

impl fmt::Display for LifestyleAndHabits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for habit in [Habit::Smoking, Habit::Alcohol, Habit::Caffeine] {
            writeln!(f, "{}: {}", habit.label(), self.describe(habit))?;
        }
        writeln!(
            f,
            "Exercise: {} (Frequency: {} per week)",
            if self.exercise.active { "Yes" } else { "No" },
            self.exercise.frequency
        )?;
        writeln!(
            f,
            "Dietary Habits: {}",
            join_or_none(self.dietary_habits.iter())
        )?;
        write!(f, "{}: {}", Habit::Drug.label(), self.describe(Habit::Drug))
    }
}
