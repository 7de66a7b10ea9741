use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::Exercise;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    UserId(Uuid),
    DateFrom(NaiveDate),
    DateTo(NaiveDate),
}

impl Predicate {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        match *self {
            Predicate::UserId(id) => exercise.user_id == id,
            Predicate::DateFrom(from) => exercise.date >= from,
            Predicate::DateTo(to) => exercise.date <= to,
        }
    }
}

/// Query over the exercise collection. Starts with the owner predicate and
/// only grows a predicate for each optional bound that is actually given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    predicates: Vec<Predicate>,
    limit: Option<usize>,
}

impl ExerciseFilter {
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            predicates: vec![Predicate::UserId(user_id)],
            limit: None,
        }
    }

    pub fn from_date(mut self, from: Option<NaiveDate>) -> Self {
        if let Some(from) = from {
            self.predicates.push(Predicate::DateFrom(from));
        }
        self
    }

    pub fn to_date(mut self, to: Option<NaiveDate>) -> Self {
        if let Some(to) = to {
            self.predicates.push(Predicate::DateTo(to));
        }
        self
    }

    /// Zero means no limit.
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit.filter(|&n| n > 0);
        self
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn max_results(&self) -> Option<usize> {
        self.limit
    }

    pub fn matches(&self, exercise: &Exercise) -> bool {
        self.predicates.iter().all(|p| p.matches(exercise))
    }
}
