use serde::Deserialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};
use crate::models::{
    Schedule, ScheduleCreateOptions, ScheduleUpdateOptions, Task, TaskCreateOptions,
    TaskUpdateOptions,
};
use crate::rest::{self, Envelope, Page, PaginationOptions};

/// A schedule document with its `tasks` relationship.
///
/// The relationship is read from inside `attributes` first, then from next
/// to it.
#[derive(Deserialize)]
struct ScheduleDocument {
    attributes: ScheduleAttributes,
    #[serde(default)]
    relationships: Option<TaskRelationship>,
}

#[derive(Deserialize)]
struct ScheduleAttributes {
    #[serde(default)]
    relationships: Option<TaskRelationship>,
    #[serde(flatten)]
    schedule: Schedule,
}

#[derive(Deserialize)]
struct TaskRelationship {
    tasks: Option<TaskList>,
}

#[derive(Deserialize)]
struct TaskList {
    #[serde(default)]
    data: Vec<Envelope<Task>>,
}

impl ScheduleDocument {
    fn into_schedule(self) -> Schedule {
        let ScheduleAttributes {
            relationships,
            mut schedule,
        } = self.attributes;

        if let Some(tasks) = relationships.or(self.relationships).and_then(|r| r.tasks) {
            schedule.tasks = tasks.data.into_iter().map(Envelope::into_attributes).collect();
        }
        schedule
    }
}

/// Schedules of one server and their tasks.
#[derive(Clone, Debug)]
pub struct SchedulesService<'a> {
    http: &'a HttpClient,
    path: String,
}

impl<'a> SchedulesService<'a> {
    pub(crate) const fn new(http: &'a HttpClient, path: String) -> Self {
        Self { http, path }
    }

    /// Lists schedules. Tasks are not included; use [`Self::details`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn list(
        &self,
        options: Option<PaginationOptions>,
    ) -> Result<Page<Schedule>, HttpError> {
        rest::list(self.http, &self.path, options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create(&self, options: &ScheduleCreateOptions) -> Result<Schedule, HttpError> {
        rest::create(self.http, &self.path, options).await
    }

    /// Fetches a schedule together with its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn details(&self, schedule_id: u64) -> Result<Schedule, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Get, format!("{}/{schedule_id}", self.path))
                .build()?;
        let document: ScheduleDocument = self.http.request_json(request).await?;
        Ok(document.into_schedule())
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update(
        &self,
        schedule_id: u64,
        options: &ScheduleUpdateOptions,
    ) -> Result<Schedule, HttpError> {
        let request =
            HttpRequest::builder(HttpMethod::Post, format!("{}/{schedule_id}", self.path))
                .json(options)?
                .build()?;
        rest::fetch(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete(&self, schedule_id: u64) -> Result<(), HttpError> {
        rest::delete(self.http, &self.path, schedule_id).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn create_task(
        &self,
        schedule_id: u64,
        options: &TaskCreateOptions,
    ) -> Result<Task, HttpError> {
        rest::create(self.http, &self.tasks_path(schedule_id), options).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn update_task(
        &self,
        schedule_id: u64,
        task_id: u64,
        options: &TaskUpdateOptions,
    ) -> Result<Task, HttpError> {
        let path = format!("{}/{task_id}", self.tasks_path(schedule_id));
        let request = HttpRequest::builder(HttpMethod::Post, path)
            .json(options)?
            .build()?;
        rest::fetch(self.http, request).await
    }

    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub async fn delete_task(&self, schedule_id: u64, task_id: u64) -> Result<(), HttpError> {
        rest::delete(self.http, &self.tasks_path(schedule_id), task_id).await
    }

    fn tasks_path(&self, schedule_id: u64) -> String {
        format!("{}/{schedule_id}/tasks", self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_hoisted_into_schedule() {
        let json = r#"{
            "object": "server_schedule",
            "attributes": {
                "id": 4,
                "name": "Nightly restart",
                "cron": {"day_of_week": "*", "day_of_month": "*", "month": "*", "hour": "4", "minute": "0"},
                "is_active": true,
                "is_processing": false,
                "relationships": {
                    "tasks": {
                        "object": "list",
                        "data": [
                            {"object": "schedule_task", "attributes": {"id": 9, "sequence_id": 1, "action": "command", "payload": "say bye"}},
                            {"object": "schedule_task", "attributes": {"id": 10, "sequence_id": 2, "action": "power", "payload": "restart", "time_offset": 30}}
                        ]
                    }
                }
            }
        }"#;
        let schedule = serde_json::from_str::<ScheduleDocument>(json)
            .unwrap()
            .into_schedule();

        assert_eq!(schedule.id, 4);
        assert_eq!(schedule.cron.hour, "4");
        assert_eq!(schedule.tasks.len(), 2);
        assert_eq!(schedule.tasks[1].action, "power");
        assert_eq!(schedule.tasks[1].time_offset, 30);
    }

    #[test]
    fn test_schedule_without_tasks_relationship() {
        let json = r#"{"attributes": {"id": 1, "name": "Idle"}}"#;
        let schedule = serde_json::from_str::<ScheduleDocument>(json)
            .unwrap()
            .into_schedule();

        assert_eq!(schedule.name, "Idle");
        assert!(schedule.tasks.is_empty());
    }
}
