use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn all() -> [TaskStatus; 4] {
        [
            TaskStatus::Pending,
            TaskStatus::InProgress,
            TaskStatus::Completed,
            TaskStatus::Overdue,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Overdue => "overdue",
        }
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::all()
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown compliance status: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone)]
pub struct ComplianceTask {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub due_date: String,
    pub category: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub regulatory_reference: Option<String>,
}

impl ComplianceTask {
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&term))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComplianceHealth {
    pub score: u32,
    pub completed: usize,
    pub total: usize,
    pub next_steps: Vec<String>,
}

impl ComplianceHealth {
    pub fn from_tasks(tasks: &[ComplianceTask]) -> Self {
        if tasks.is_empty() {
            return Self {
                score: 100,
                completed: 0,
                total: 0,
                next_steps: Vec::new(),
            };
        }

        let total = tasks.len();
        let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();
        let completed = count(TaskStatus::Completed);
        let score = (completed as f64 / total as f64 * 100.0).round() as u32;

        let mut next_steps = Vec::new();
        if count(TaskStatus::Overdue) > 0 {
            next_steps.push("Address overdue compliance requirements immediately".to_string());
        }
        if count(TaskStatus::Pending) > 0 {
            next_steps.push("Complete pending regulatory requirements".to_string());
        }
        if score < 70 {
            next_steps.push("Schedule a compliance review session".to_string());
        }

        Self {
            score,
            completed,
            total,
            next_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, status: TaskStatus) -> ComplianceTask {
        ComplianceTask {
            id: id.into(),
            title: format!("Task {id}"),
            description: Some("Quarterly TDS returns".into()),
            due_date: "Apr 5, 2025".into(),
            category: "Taxation".into(),
            priority: TaskPriority::High,
            status,
            regulatory_reference: None,
        }
    }

    #[test]
    fn empty_portfolio_is_fully_healthy() {
        let health = ComplianceHealth::from_tasks(&[]);
        assert_eq!(health.score, 100);
        assert!(health.next_steps.is_empty());
    }

    #[test]
    fn health_score_rounds_completed_share() {
        let tasks = vec![
            task("1", TaskStatus::Pending),
            task("2", TaskStatus::InProgress),
            task("3", TaskStatus::Completed),
        ];
        let health = ComplianceHealth::from_tasks(&tasks);
        assert_eq!(health.score, 33);
        assert_eq!(health.completed, 1);
        assert_eq!(health.total, 3);
        assert_eq!(
            health.next_steps,
            vec![
                "Complete pending regulatory requirements".to_string(),
                "Schedule a compliance review session".to_string(),
            ]
        );
    }

    #[test]
    fn overdue_work_is_the_first_next_step() {
        let tasks = vec![task("1", TaskStatus::Overdue), task("2", TaskStatus::Completed)];
        let health = ComplianceHealth::from_tasks(&tasks);
        assert_eq!(
            health.next_steps.first().map(String::as_str),
            Some("Address overdue compliance requirements immediately")
        );
    }

    #[test]
    fn search_covers_title_and_description() {
        let t = task("1", TaskStatus::Pending);
        assert!(t.matches_search("task 1"));
        assert!(t.matches_search("TDS"));
        assert!(!t.matches_search("gst"));
        assert!(t.matches_search("  "));
    }

    #[test]
    fn status_parses_from_its_tab_name() {
        assert_eq!("in-progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert!("done".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn statuses_use_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
    }
}
