use crate::{
    abstract_trait::{DynPortfolioRepository, PortfolioServiceTrait},
    domain::{
        requests::UpdateStatusRequest,
        responses::{
            ApiResponse, ClientDetailsResponse, ClientDocumentResponse, ClientDocumentsResponse,
            ClientProfileResponse, ClientSummaryResponse, ComplianceItemResponse,
            FilingDeadlineResponse, ProfessionalDashboardResponse,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::RiskLevel,
    utils::{Metrics, MockLatency, Operation},
};
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::info;

pub struct PortfolioService {
    repository: DynPortfolioRepository,
    latency: MockLatency,
    metrics: Metrics,
}

impl PortfolioService {
    pub fn new(repository: DynPortfolioRepository, latency: MockLatency, metrics: Metrics) -> Self {
        Self {
            repository,
            latency,
            metrics,
        }
    }

    async fn change_item_status(
        &self,
        client_id: &str,
        item_id: &str,
        request: &UpdateStatusRequest,
    ) -> Result<ComplianceItemResponse, ServiceError> {
        self.latency.simulate("update client compliance status").await?;
        let item = self
            .repository
            .update_item_status(client_id, item_id, request.status)
            .await?;
        Ok(ComplianceItemResponse::from(item))
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn dashboard(&self) -> Result<ApiResponse<ProfessionalDashboardResponse>, ServiceError> {
        let clients = self.repository.clients().await;

        let pending_compliance_tasks = clients.iter().map(|c| c.pending_compliance).sum();
        let high_risk_clients = clients
            .iter()
            .filter(|c| c.risk_level == RiskLevel::High)
            .count();

        let deadlines = self
            .repository
            .deadlines()
            .await
            .into_iter()
            .map(FilingDeadlineResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Dashboard retrieved successfully",
            ProfessionalDashboardResponse {
                total_clients: clients.len(),
                clients: clients
                    .into_iter()
                    .map(ClientSummaryResponse::from)
                    .collect(),
                pending_compliance_tasks,
                high_risk_clients,
                deadlines,
            },
        ))
    }

    async fn client_details(
        &self,
        client_id: &str,
    ) -> Result<ApiResponse<ClientDetailsResponse>, ServiceError> {
        info!("👤 Loading client {client_id}");

        let details = self
            .repository
            .details(client_id)
            .await
            .ok_or(RepositoryError::NotFound)?;

        let compliance = self
            .repository
            .compliance_items(client_id)
            .await
            .into_iter()
            .map(ComplianceItemResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Client retrieved successfully",
            ClientDetailsResponse {
                client: ClientProfileResponse::from(details),
                compliance,
            },
        ))
    }

    async fn update_item_status(
        &self,
        client_id: &str,
        item_id: &str,
        request: &UpdateStatusRequest,
    ) -> Result<ApiResponse<ComplianceItemResponse>, ServiceError> {
        info!(
            "🔄 Moving compliance item {item_id} of client {client_id} to {}",
            request.status.as_str()
        );
        let started = Instant::now();

        let result = self.change_item_status(client_id, item_id, request).await;
        self.metrics
            .observe(Operation::UpdateComplianceStatus, started, &result);

        Ok(ApiResponse::success(
            "Compliance status updated successfully",
            result?,
        ))
    }

    async fn client_documents(
        &self,
        client_id: &str,
    ) -> Result<ApiResponse<ClientDocumentsResponse>, ServiceError> {
        let client = self
            .repository
            .clients()
            .await
            .into_iter()
            .find(|client| client.id == client_id)
            .ok_or(RepositoryError::NotFound)?;

        let documents = self
            .repository
            .documents(client_id)
            .await
            .into_iter()
            .map(ClientDocumentResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Client documents retrieved successfully",
            ClientDocumentsResponse {
                client: ClientSummaryResponse::from(client),
                documents,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::MockConfig,
        model::TaskStatus,
        repository::{PortfolioRepository, seed},
    };
    use std::sync::Arc;

    fn service() -> PortfolioService {
        PortfolioService::new(
            Arc::new(PortfolioRepository::new(seed::portfolio())),
            MockLatency::new(MockConfig::instant()),
            Metrics::new(),
        )
    }

    #[tokio::test]
    async fn dashboard_aggregates_the_client_book() {
        let dashboard = service().dashboard().await.unwrap().data;

        assert_eq!(dashboard.total_clients, 4);
        assert_eq!(dashboard.pending_compliance_tasks, 11);
        assert_eq!(dashboard.high_risk_clients, 1);
        assert_eq!(dashboard.deadlines.len(), 3);
    }

    #[tokio::test]
    async fn client_details_include_compliance_items() {
        let details = service().client_details("1").await.unwrap().data;

        assert_eq!(details.client.name, "Acme Corporation");
        assert_eq!(details.compliance.len(), 4);
    }

    #[tokio::test]
    async fn unknown_client_is_not_found() {
        let service = service();

        assert!(matches!(
            service.client_details("42").await,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
        assert!(matches!(
            service.client_documents("42").await,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }

    #[tokio::test]
    async fn item_status_update_sticks() {
        let service = service();

        let updated = service
            .update_item_status(
                "1",
                "3",
                &UpdateStatusRequest {
                    status: TaskStatus::Completed,
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.data.status, TaskStatus::Completed);

        let details = service.client_details("1").await.unwrap().data;
        let item = details.compliance.iter().find(|i| i.id == "3").unwrap();
        assert_eq!(item.status, TaskStatus::Completed);
    }

    #[tokio::test]
    async fn client_without_documents_gets_an_empty_list() {
        let documents = service().client_documents("4").await.unwrap().data;

        assert_eq!(documents.client.business_name, "Innova Enterprises");
        assert!(documents.documents.is_empty());
    }
}
