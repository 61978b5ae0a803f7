use crate::{
    abstract_trait::{ComplianceServiceTrait, DynComplianceRepository, DynDocumentRepository},
    domain::{
        requests::{FindCompliances, UpdateStatusRequest},
        responses::{
            ApiResponse, ClientDashboardResponse, CompanyInfoResponse, ComplianceHealthResponse,
            ComplianceListResponse, ComplianceTaskResponse, DocumentResponse, StatusCounts,
        },
    },
    errors::ServiceError,
    model::{ComplianceHealth, DocumentFilter, TaskStatus},
    utils::{Metrics, MockLatency, Operation},
};
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::info;

const UPCOMING_LIMIT: usize = 3;
const RECENT_DOCUMENTS_LIMIT: usize = 3;

pub struct ComplianceService {
    compliances: DynComplianceRepository,
    documents: DynDocumentRepository,
    latency: MockLatency,
    metrics: Metrics,
}

impl ComplianceService {
    pub fn new(
        compliances: DynComplianceRepository,
        documents: DynDocumentRepository,
        latency: MockLatency,
        metrics: Metrics,
    ) -> Self {
        Self {
            compliances,
            documents,
            latency,
            metrics,
        }
    }

    async fn change_status(
        &self,
        id: &str,
        status: TaskStatus,
    ) -> Result<ComplianceTaskResponse, ServiceError> {
        self.latency.simulate("update compliance status").await?;
        let task = self.compliances.update_status(id, status).await?;
        Ok(ComplianceTaskResponse::from(task))
    }
}

#[async_trait]
impl ComplianceServiceTrait for ComplianceService {
    async fn find_all(
        &self,
        request: &FindCompliances,
    ) -> Result<ApiResponse<ComplianceListResponse>, ServiceError> {
        info!(
            "📋 Listing compliances | tab: {} | search: {:?}",
            request.status, request.search
        );

        let tab = match request.status.as_str() {
            "" | "all" => None,
            other => Some(
                other
                    .parse::<TaskStatus>()
                    .map_err(|err| ServiceError::Validation(vec![err]))?,
            ),
        };

        let matching: Vec<_> = self
            .compliances
            .list()
            .await
            .into_iter()
            .filter(|task| task.matches_search(&request.search))
            .collect();

        let counts = StatusCounts::tally(matching.iter().map(|task| task.status));

        let tasks = matching
            .into_iter()
            .filter(|task| tab.is_none_or(|status| task.status == status))
            .map(ComplianceTaskResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Compliances retrieved successfully",
            ComplianceListResponse { tasks, counts },
        ))
    }

    async fn update_status(
        &self,
        id: &str,
        request: &UpdateStatusRequest,
    ) -> Result<ApiResponse<ComplianceTaskResponse>, ServiceError> {
        info!("🔄 Moving compliance {id} to {}", request.status.as_str());
        let started = Instant::now();

        let result = self.change_status(id, request.status).await;
        self.metrics
            .observe(Operation::UpdateComplianceStatus, started, &result);

        Ok(ApiResponse::success(
            "Compliance status updated successfully",
            result?,
        ))
    }

    async fn dashboard(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<ClientDashboardResponse>, ServiceError> {
        let tasks = self.compliances.list().await;
        let company = self.compliances.company().await;

        let counts = StatusCounts::tally(tasks.iter().map(|task| task.status));
        let health = ComplianceHealth::from_tasks(&tasks);

        let upcoming = tasks
            .into_iter()
            .filter(|task| matches!(task.status, TaskStatus::Pending | TaskStatus::InProgress))
            .take(UPCOMING_LIMIT)
            .map(ComplianceTaskResponse::from)
            .collect();

        let mut documents = self
            .documents
            .list(user_id, &DocumentFilter::default())
            .await;
        documents.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));

        let recent_documents = documents
            .into_iter()
            .take(RECENT_DOCUMENTS_LIMIT)
            .map(DocumentResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Dashboard retrieved successfully",
            ClientDashboardResponse {
                company: CompanyInfoResponse::from(company),
                counts,
                upcoming,
                recent_documents,
                health: ComplianceHealthResponse::from(health),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::MockConfig,
        errors::RepositoryError,
        repository::{ComplianceRepository, DocumentRepository, seed},
    };
    use std::sync::Arc;

    fn service() -> ComplianceService {
        ComplianceService::new(
            Arc::new(ComplianceRepository::new(
                seed::compliance_tasks(),
                seed::company(),
            )),
            Arc::new(DocumentRepository::new(seed::documents())),
            MockLatency::new(MockConfig::instant()),
            Metrics::new(),
        )
    }

    fn tab(status: &str, search: &str) -> FindCompliances {
        FindCompliances {
            status: status.into(),
            search: search.into(),
        }
    }

    #[tokio::test]
    async fn all_tab_lists_every_task_with_counts() {
        let list = service().find_all(&FindCompliances::default()).await.unwrap();

        assert_eq!(list.data.tasks.len(), 4);
        assert_eq!(
            list.data.counts,
            StatusCounts {
                all: 4,
                pending: 1,
                in_progress: 1,
                completed: 1,
                overdue: 1,
            }
        );
    }

    #[tokio::test]
    async fn status_tab_and_search_narrow_the_list() {
        let service = service();

        let overdue = service.find_all(&tab("overdue", "")).await.unwrap();
        assert_eq!(overdue.data.tasks.len(), 1);
        assert_eq!(overdue.data.tasks[0].id, "task-4");

        let gst = service.find_all(&tab("all", "gst")).await.unwrap();
        assert_eq!(gst.data.tasks.len(), 1);
        assert_eq!(gst.data.counts.all, 1);
    }

    #[tokio::test]
    async fn unknown_tab_is_rejected() {
        let result = service().find_all(&tab("archived", "")).await;
        assert!(matches!(result, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn status_update_is_visible_in_the_list() {
        let service = service();

        service
            .update_status(
                "task-1",
                &UpdateStatusRequest {
                    status: TaskStatus::Completed,
                },
            )
            .await
            .unwrap();

        let completed = service.find_all(&tab("completed", "")).await.unwrap();
        assert_eq!(completed.data.tasks.len(), 2);

        let missing = service
            .update_status(
                "task-99",
                &UpdateStatusRequest {
                    status: TaskStatus::Completed,
                },
            )
            .await;
        assert!(matches!(
            missing,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }

    #[tokio::test]
    async fn dashboard_summarises_company_tasks_and_documents() {
        let dashboard = service()
            .dashboard(seed::DEMO_CLIENT_ID)
            .await
            .unwrap()
            .data;

        assert_eq!(dashboard.company.name, "Acme Corporation");
        assert_eq!(dashboard.upcoming.len(), 2);
        assert_eq!(dashboard.recent_documents.len(), 3);
        assert_eq!(dashboard.health.score, 25);
        assert_eq!(dashboard.health.next_steps.len(), 3);
    }
}
