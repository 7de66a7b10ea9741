use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use super::{ServiceError, UserService};
use crate::models::fields::leading_integer;
use crate::models::{
    parse_date, CreateExerciseRequest, ExerciseLog, ExerciseResponse, LogQuery, NewExercise, User,
};
use crate::store::{ExerciseFilter, Store};

#[derive(Clone)]
pub struct ExerciseService {
    store: Arc<dyn Store>,
    users: UserService,
}

/// Treats an empty field the same as a missing one.
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

impl ExerciseService {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            users: UserService::new(Arc::clone(&store)),
            store,
        }
    }

    pub async fn add_exercise(
        &self,
        raw_user_id: &str,
        request: CreateExerciseRequest,
    ) -> Result<ExerciseResponse, ServiceError> {
        let user = self.users.get_user(raw_user_id).await?;
        let exercise = Self::validate(&user, &request, Utc::now().date_naive())?;

        let exercise = self.store.create_exercise(exercise).await?;
        tracing::info!(user_id = %user.id, exercise_id = %exercise.id, "Recorded exercise");

        Ok(ExerciseResponse {
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
            user_id: user.id,
        })
    }

    pub async fn get_log(&self, raw_user_id: &str, query: LogQuery) -> Result<ExerciseLog, ServiceError> {
        let user = self.users.get_user(raw_user_id).await?;
        let filter = Self::log_filter(&user, &query)?;

        let log = self.store.find_exercises(&filter).await?;

        Ok(ExerciseLog {
            username: user.username,
            count: log.len(),
            user_id: user.id,
            log,
        })
    }

    fn validate(
        user: &User,
        request: &CreateExerciseRequest,
        today: NaiveDate,
    ) -> Result<NewExercise, ServiceError> {
        let description = present(&request.description).ok_or(ServiceError::InvalidPayload)?;
        let duration = present(&request.duration)
            .and_then(leading_integer)
            .filter(|&minutes| minutes != 0)
            .ok_or(ServiceError::InvalidPayload)?;
        let date = match present(&request.date) {
            Some(raw) => parse_date(raw).ok_or(ServiceError::InvalidPayload)?,
            None => today,
        };

        Ok(NewExercise {
            user_id: user.id,
            description: description.to_string(),
            duration,
            date,
        })
    }

    fn log_filter(user: &User, query: &LogQuery) -> Result<ExerciseFilter, ServiceError> {
        let bound = |field: &Option<String>| {
            present(field)
                .map(|raw| parse_date(raw).ok_or(ServiceError::InvalidDate))
                .transpose()
        };

        let limit = present(&query.limit)
            .and_then(leading_integer)
            .and_then(|n| usize::try_from(n).ok());

        Ok(ExerciseFilter::for_user(user.id)
            .from_date(bound(&query.from)?)
            .to_date(bound(&query.to)?)
            .limit(limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Predicate;
    use uuid::Uuid;

    fn user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            created_at: Utc::now(),
        }
    }

    fn request(description: &str, duration: &str, date: Option<&str>) -> CreateExerciseRequest {
        CreateExerciseRequest {
            description: Some(description.to_string()),
            duration: Some(duration.to_string()),
            date: date.map(str::to_string),
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 1, d).unwrap()
    }

    #[test]
    fn test_validate_accepts_well_formed_payload() {
        let user = user();
        let exercise =
            ExerciseService::validate(&user, &request("run", "30", Some("2023-01-15")), day(1))
                .unwrap();

        assert_eq!(
            exercise,
            NewExercise {
                user_id: user.id,
                description: "run".to_string(),
                duration: 30,
                date: day(15),
            }
        );
    }

    #[test]
    fn test_validate_defaults_date_to_today() {
        let user = user();
        let today = day(31);

        let missing = ExerciseService::validate(&user, &request("run", "30", None), today).unwrap();
        assert_eq!(missing.date, today);

        let empty = ExerciseService::validate(&user, &request("run", "30", Some("")), today).unwrap();
        assert_eq!(empty.date, today);
    }

    #[test]
    fn test_validate_rejects_bad_payloads() {
        let user = user();
        let today = day(1);

        for bad in [
            request("", "30", None),
            request("run", "0", None),
            request("run", "abc", None),
            request("run", "", None),
            request("run", "30", Some("someday")),
            CreateExerciseRequest::default(),
        ] {
            assert!(matches!(
                ExerciseService::validate(&user, &bad, today),
                Err(ServiceError::InvalidPayload)
            ));
        }
    }

    #[test]
    fn test_log_filter_appends_present_bounds_only() {
        let user = user();

        let filter = ExerciseService::log_filter(&user, &LogQuery::default()).unwrap();
        assert_eq!(filter, ExerciseFilter::for_user(user.id));

        let query = LogQuery {
            from: Some("2023-01-15".to_string()),
            to: Some(String::new()),
            limit: Some("2".to_string()),
        };
        let filter = ExerciseService::log_filter(&user, &query).unwrap();
        assert_eq!(
            filter.predicates(),
            &[Predicate::UserId(user.id), Predicate::DateFrom(day(15))]
        );
        assert_eq!(filter.max_results(), Some(2));
    }

    #[test]
    fn test_log_filter_ignores_unusable_limits() {
        let user = user();

        for limit in ["0", "-3", "many"] {
            let query = LogQuery {
                limit: Some(limit.to_string()),
                ..LogQuery::default()
            };
            let filter = ExerciseService::log_filter(&user, &query).unwrap();
            assert_eq!(filter.max_results(), None, "limit {limit:?}");
        }
    }

    #[test]
    fn test_log_filter_rejects_unparseable_bounds() {
        let query = LogQuery {
            to: Some("next week".to_string()),
            ..LogQuery::default()
        };

        assert!(matches!(
            ExerciseService::log_filter(&user(), &query),
            Err(ServiceError::InvalidDate)
        ));
    }
}
