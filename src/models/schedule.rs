use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A scheduled sequence of tasks on a server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub id: u64,
    pub name: String,
    pub cron: ScheduleCron,
    pub is_active: bool,
    pub is_processing: bool,
    pub only_when_online: bool,
    pub last_run_at: Option<DateTime<Utc>>,
    pub next_run_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    /// Tasks of the schedule. Filled in by the details call only.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
}

/// Cron fields of a schedule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleCron {
    pub day_of_week: String,
    pub day_of_month: String,
    pub month: String,
    pub hour: String,
    pub minute: String,
}

/// One step of a schedule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: u64,
    pub sequence_id: u32,
    /// `"command"`, `"power"`, or `"backup"`.
    pub action: String,
    pub payload: String,
    /// Seconds to wait after the previous task.
    pub time_offset: u32,
    pub is_queued: bool,
    pub continue_on_failure: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for creating a schedule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleCreateOptions {
    pub name: String,
    pub minute: String,
    pub hour: String,
    pub day_of_month: String,
    pub month: String,
    pub day_of_week: String,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub only_when_online: Option<bool>,
}

/// Body for updating a schedule; the panel expects every cron field.
pub type ScheduleUpdateOptions = ScheduleCreateOptions;

/// Body for creating a task.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreateOptions {
    pub action: String,
    pub payload: String,
    pub time_offset: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_failure: Option<bool>,
}

/// Body for updating a task.
pub type TaskUpdateOptions = TaskCreateOptions;
