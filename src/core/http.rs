use std::{
    error::Error as StdError,
    time::Duration,
};

use reqwest::{
    header::USER_AGENT,
    Client,
    Response,
    Url,
};

use crate::core::FlashcardError;

pub fn http_client(timeout: Option<Duration>) -> Result<Client, FlashcardError> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| FlashcardError::Config(format!("HTTP client build failed: {e}")))
}

pub async fn post_json(
    client: &Client,
    url: Url,
    query: &[(&str, &str)],
    body: &serde_json::Value,
) -> Result<String, FlashcardError> {
    let resp = client
        .post(url)
        .query(query)
        .header(USER_AGENT, "ai-flashcards/0.1 (+reqwest)")
        .json(body)
        .send()
        .await
        .map_err(|e| FlashcardError::Transport(format!("Failed HTTP POST: {}", describe(e))))?;

    success_body(resp).await
}

// The request URL carries the API key, so it never goes into an error message.
async fn success_body(resp: Response) -> Result<String, FlashcardError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| FlashcardError::Transport(format!("Failed to read body: {}", describe(e))))?;

    if !status.is_success() {
        return Err(FlashcardError::Transport(format!("HTTP error {}: {}", status, body.trim())));
    }
    Ok(body)
}

/// The error text followed by every underlying cause, without the URL.
fn describe(error: reqwest::Error) -> String {
    let error = error.without_url();
    let mut message = error.to_string();

    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    message
}
