use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use validator::{Validate, ValidationErrors};

pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<Value>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(json_value) =
            axum::Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    let payload = json!({
                        "status": "error",
                        "message": rejection.body_text(),
                    });
                    (rejection.status(), axum::Json(payload))
                })?;

        json_value.validate().map_err(|validation_errors| {
            let fields = field_messages(&validation_errors);

            let summary = fields
                .iter()
                .flat_map(|(field, messages)| {
                    messages.iter().map(move |message| format!("{field}: {message}"))
                })
                .collect::<Vec<_>>();

            let details: serde_json::Map<String, Value> = fields
                .into_iter()
                .map(|(field, messages)| (field, json!(messages)))
                .collect();

            let payload = json!({
                "status": "error",
                "message": if summary.is_empty() {
                    "Validation failed".to_string()
                } else {
                    summary.join("; ")
                },
                "details": details,
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload))
        })?;

        Ok(Self(json_value))
    }
}

fn field_messages(errors: &ValidationErrors) -> Vec<(String, Vec<String>)> {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| match e.code.as_ref() {
                            "email" => "Invalid email format".to_string(),
                            "length" => "Invalid length".to_string(),
                            "range" => "Value out of range".to_string(),
                            _ => format!("Invalid {field}"),
                        })
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect();

    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
}
