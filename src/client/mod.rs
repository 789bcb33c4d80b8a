// Agent-facing wrapper layer over the HTTP surface.
//
// Responsibilities
// - One pass-through call per operation, forwarding arguments as the
//   matching request.
// - Always hand the calling agent text: the `result` string on success, the
//   `error` string on failure, and a descriptive message when the transport
//   or the payload itself fails. Never a transport error.

use serde_json::{Value, json};

pub struct AssistantClient {
    base_url: String,
    http: reqwest::Client,
}

impl AssistantClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}{route}", self.base_url)
    }

    /// Reads rows of date, status and remarks from a timesheet file.
    pub async fn read_timesheet_data(&self, filename: &str) -> String {
        let outcome = self
            .http
            .get(self.endpoint("/read_timesheet"))
            .query(&[("filename", filename)])
            .send()
            .await;
        text_result(outcome, "read_timesheet_data").await
    }

    /// Saves or updates a single entry keyed by date. The date should be in
    /// YYYY-MM-DD format.
    pub async fn save_or_update_timesheet(
        &self,
        filename: &str,
        date: &str,
        status: &str,
        remarks: &str,
    ) -> String {
        let outcome = self
            .http
            .post(self.endpoint("/save_or_update_timesheet"))
            .json(&json!({
                "filename": filename,
                "date": date,
                "status": status,
                "remarks": remarks,
            }))
            .send()
            .await;
        text_result(outcome, "save_or_update_timesheet").await
    }

    /// Generates and saves a formatted invoice document.
    pub async fn create_invoice_document(&self, filename: &str, data: Value) -> String {
        let outcome = self
            .http
            .post(self.endpoint("/create_invoice"))
            .json(&json!({ "filename": filename, "data": data }))
            .send()
            .await;
        text_result(outcome, "create_invoice_document").await
    }

    /// Sends the greeting message with the timesheet and invoice attached.
    pub async fn send_message_with_attachments(
        &self,
        xlsx_filename: &str,
        docx_filename: &str,
    ) -> String {
        let outcome = self
            .http
            .post(self.endpoint("/send_telegram"))
            .json(&json!({
                "xlsx_filename": xlsx_filename,
                "docx_filename": docx_filename,
            }))
            .send()
            .await;
        text_result(outcome, "send_message_with_attachments").await
    }

    pub async fn calculate_salary(&self, present_days: i64, pay_per_day: i64) -> String {
        let outcome = self
            .http
            .get(self.endpoint("/calculate_salary"))
            .query(&[("present_days", present_days), ("pay_per_day", pay_per_day)])
            .send()
            .await;

        let body = match parse_body(outcome, "calculate_salary").await {
            Ok(body) => body,
            Err(message) => return message,
        };
        if body.get("salary").is_some() {
            format!(
                "Present Days: {}, Pay Per Day: {}, Salary: ₹{}",
                body["present_days"], body["pay_per_day"], body["salary"],
            )
        } else {
            format!("Error: {}", field_or(&body, "error", "Unknown error"))
        }
    }
}

async fn parse_body(
    outcome: Result<reqwest::Response, reqwest::Error>,
    operation: &str,
) -> Result<Value, String> {
    let response = outcome.map_err(|e| format!("Error calling {operation} API: {e}"))?;
    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Error calling {operation} API: {e}"))
}

async fn text_result(
    outcome: Result<reqwest::Response, reqwest::Error>,
    operation: &str,
) -> String {
    match parse_body(outcome, operation).await {
        Ok(body) => match body.get("result").and_then(Value::as_str) {
            Some(result) => result.to_string(),
            None => field_or(&body, "error", "Unknown error"),
        },
        Err(message) => message,
    }
}

fn field_or(body: &Value, key: &str, fallback: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or(fallback)
        .to_string()
}
