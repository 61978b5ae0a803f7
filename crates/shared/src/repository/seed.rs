//! Demo data loaded at start-up. Everything here lives only in memory.

use crate::{
    abstract_trait::DynHashing,
    errors::ServiceError,
    model::{
        Account, ClientDetails, ClientDocument, ClientSummary, CompanyInfo, ComplianceItem,
        ComplianceTask, Document, FilingDeadline, FilingStatus, ProfessionalType,
        RegistrationStatus, RiskLevel, Role, TaskPriority, TaskStatus,
    },
    repository::PortfolioSeed,
};
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;

pub const DEMO_PASSWORD: &str = "password123";
pub const DEMO_CLIENT_ID: &str = "user-1";

struct DemoAccount {
    id: &'static str,
    email: &'static str,
    role: Role,
    professional_type: Option<ProfessionalType>,
    onboarding_complete: bool,
}

const DEMO_ACCOUNTS: [DemoAccount; 3] = [
    DemoAccount {
        id: DEMO_CLIENT_ID,
        email: "client@example.com",
        role: Role::Client,
        professional_type: None,
        onboarding_complete: true,
    },
    DemoAccount {
        id: "user-2",
        email: "founder@example.com",
        role: Role::Client,
        professional_type: None,
        onboarding_complete: false,
    },
    DemoAccount {
        id: "pro-1",
        email: "ca@example.com",
        role: Role::Professional,
        professional_type: Some(ProfessionalType::Ca),
        onboarding_complete: false,
    },
];

pub async fn demo_accounts(hashing: &DynHashing) -> Result<Vec<Account>, ServiceError> {
    let password_hash = hashing.hash_password(DEMO_PASSWORD).await?;

    Ok(DEMO_ACCOUNTS
        .iter()
        .map(|demo| Account {
            id: demo.id.to_string(),
            email: demo.email.to_string(),
            password_hash: password_hash.clone(),
            role: demo.role,
            professional_type: demo.professional_type,
            onboarding_complete: demo.onboarding_complete,
            business_structure: None,
            professional_profile: None,
            created_at: Utc::now(),
        })
        .collect())
}

fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 17, 18, 19)
        .single()
        .unwrap_or_else(Utc::now)
}

pub fn documents() -> Vec<Document> {
    let doc = |id: &str,
               name: &str,
               file_type: &str,
               size: u64,
               category: &str,
               uploaded_at: DateTime<Utc>| {
        Document {
            id: id.to_string(),
            name: name.to_string(),
            url: format!("https://example.com/docs/{id}"),
            file_type: file_type.to_string(),
            size,
            uploaded_at,
            uploaded_by: "Sample User".to_string(),
            category: category.to_string(),
            user_id: DEMO_CLIENT_ID.to_string(),
        }
    };

    vec![
        doc("1", "Business Plan Template.docx", "docx", 123_456, "Business Plan", at(2025, 5, 20)),
        doc("2", "Financial Projections.xlsx", "xlsx", 456_789, "Financial", at(2025, 5, 20)),
        doc("3", "PAN Card.pdf", "pdf", 1_200_000, "Legal", at(2025, 4, 10)),
        doc("4", "GST Registration.pdf", "pdf", 850_000, "Financial", at(2025, 4, 15)),
    ]
}

pub fn company() -> CompanyInfo {
    CompanyInfo {
        id: "comp-123".to_string(),
        name: "Acme Corporation".to_string(),
        registration_status: RegistrationStatus::InProgress,
        industry: "Technology".to_string(),
        registration_date: Some("Jun 15, 2025".to_string()),
    }
}

pub fn compliance_tasks() -> Vec<ComplianceTask> {
    vec![
        ComplianceTask {
            id: "task-1".to_string(),
            title: "Submit GST Registration".to_string(),
            description: Some("Complete GST registration process".to_string()),
            due_date: "Apr 30, 2025".to_string(),
            category: "Taxation".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::Pending,
            regulatory_reference: Some("GST Act, Section 22".to_string()),
        },
        ComplianceTask {
            id: "task-2".to_string(),
            title: "File Annual Returns".to_string(),
            description: Some("Complete annual return filing".to_string()),
            due_date: "May 15, 2025".to_string(),
            category: "Compliance".to_string(),
            priority: TaskPriority::Medium,
            status: TaskStatus::InProgress,
            regulatory_reference: None,
        },
        ComplianceTask {
            id: "task-3".to_string(),
            title: "Renew Business License".to_string(),
            description: Some("Renew the business operation license".to_string()),
            due_date: "Jun 10, 2025".to_string(),
            category: "Licensing".to_string(),
            priority: TaskPriority::Low,
            status: TaskStatus::Completed,
            regulatory_reference: None,
        },
        ComplianceTask {
            id: "task-4".to_string(),
            title: "Submit TDS Returns".to_string(),
            description: Some("File quarterly TDS returns".to_string()),
            due_date: "Apr 5, 2025".to_string(),
            category: "Taxation".to_string(),
            priority: TaskPriority::High,
            status: TaskStatus::Overdue,
            regulatory_reference: None,
        },
    ]
}

fn summary(
    id: &str,
    business_name: &str,
    pending_compliance: u32,
    total_compliance: u32,
    risk_level: RiskLevel,
    last_activity: &str,
) -> ClientSummary {
    ClientSummary {
        id: id.to_string(),
        business_name: business_name.to_string(),
        pending_compliance,
        total_compliance,
        risk_level,
        last_activity: last_activity.to_string(),
    }
}

fn details(id: &str, name: &str, email: &str, industry: &str, contact: &str) -> ClientDetails {
    ClientDetails {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "+91 98765 43210".to_string(),
        industry: industry.to_string(),
        registration_date: "2024-01-15".to_string(),
        contact_person: contact.to_string(),
        description: format!("{name} is a {} client.", industry.to_lowercase()),
    }
}

fn item(
    id: &str,
    title: &str,
    due_date: &str,
    status: TaskStatus,
    category: &str,
    description: &str,
) -> ComplianceItem {
    ComplianceItem {
        id: id.to_string(),
        title: title.to_string(),
        due_date: due_date.to_string(),
        status,
        category: category.to_string(),
        description: description.to_string(),
    }
}

fn client_doc(id: &str, name: &str, file_type: &str, category: &str, uploaded_at: &str) -> ClientDocument {
    ClientDocument {
        id: id.to_string(),
        name: name.to_string(),
        file_type: file_type.to_string(),
        category: category.to_string(),
        uploaded_at: uploaded_at.to_string(),
    }
}

pub fn portfolio() -> PortfolioSeed {
    let clients = vec![
        summary("1", "Acme Corp", 3, 12, RiskLevel::Medium, "2025-04-25"),
        summary("2", "TechSolutions Ltd", 1, 8, RiskLevel::Low, "2025-04-28"),
        summary("3", "Global Ventures", 5, 10, RiskLevel::High, "2025-04-20"),
        summary("4", "Innova Enterprises", 2, 15, RiskLevel::Medium, "2025-04-23"),
    ];

    let mut acme = details(
        "1",
        "Acme Corporation",
        "contact@acmecorp.com",
        "Technology",
        "Jane Smith",
    );
    acme.description =
        "A leading technology company specializing in innovative solutions.".to_string();

    let details = vec![
        acme,
        details("2", "TechSolutions Ltd", "hello@techsolutions.in", "Software", "Ravi Kumar"),
        details("3", "Global Ventures", "info@globalventures.in", "Trading", "Anita Desai"),
        details("4", "Innova Enterprises", "team@innova.in", "Manufacturing", "Vikram Rao"),
    ];

    let mut compliance = HashMap::new();
    compliance.insert(
        "1".to_string(),
        vec![
            item("1", "GST Return Filing", "2025-05-15", TaskStatus::Pending, "Tax", "Monthly GST return for April 2025"),
            item("2", "Annual ROC Filing", "2025-06-30", TaskStatus::InProgress, "Regulatory", "Annual return to be filed with Registrar of Companies"),
            item("3", "TDS Return", "2025-05-07", TaskStatus::Overdue, "Tax", "Quarterly TDS return for Q4 2024-25"),
            item("4", "Board Meeting Minutes", "2025-04-15", TaskStatus::Completed, "Corporate", "Minutes of the board meeting held on April 10, 2025"),
        ],
    );
    compliance.insert(
        "2".to_string(),
        vec![item("1", "Annual Returns", "2025-05-20", TaskStatus::InProgress, "Regulatory", "Annual return for FY 2024-25")],
    );
    compliance.insert(
        "3".to_string(),
        vec![
            item("1", "Tax Audit", "2025-05-30", TaskStatus::Pending, "Tax", "Statutory tax audit for FY 2024-25"),
            item("2", "TDS Return", "2025-04-30", TaskStatus::Overdue, "Tax", "Quarterly TDS return for Q4 2024-25"),
        ],
    );
    compliance.insert("4".to_string(), Vec::new());

    let mut documents = HashMap::new();
    documents.insert(
        "1".to_string(),
        vec![
            client_doc("1", "Certificate of Incorporation.pdf", "pdf", "Registration Documents", "2025-04-15"),
            client_doc("2", "Board Resolution.pdf", "pdf", "Corporate Documents", "2025-04-12"),
            client_doc("3", "GST Registration Certificate.pdf", "pdf", "Tax Documents", "2025-04-10"),
            client_doc("4", "Annual Financial Statements.xlsx", "xlsx", "Financial Documents", "2025-04-08"),
        ],
    );

    let deadline = |id: &str,
                    client_name: &str,
                    filing_type: &str,
                    due_date: &str,
                    status: FilingStatus| FilingDeadline {
        id: id.to_string(),
        client_name: client_name.to_string(),
        filing_type: filing_type.to_string(),
        due_date: due_date.to_string(),
        status,
    };

    let deadlines = vec![
        deadline("1", "Acme Corp", "GST Return", "May 15, 2025", FilingStatus::Pending),
        deadline("2", "TechSolutions Ltd", "Annual Returns", "May 20, 2025", FilingStatus::InProgress),
        deadline("3", "Global Ventures", "Tax Audit", "May 30, 2025", FilingStatus::NotStarted),
    ];

    PortfolioSeed {
        clients,
        details,
        compliance,
        documents,
        deadlines,
    }
}
