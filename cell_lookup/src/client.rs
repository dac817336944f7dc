use crate::{
    error::Error,
    models::{ErrorBody, LookupRequest, LookupResult},
    Result, Settings,
};
use chrono::NaiveDateTime;
use reqwest::{header, StatusCode};

#[derive(Clone, Debug)]
pub struct LookupClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl LookupClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&settings.user_agent);
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::from)?;
        Ok(Self {
            client,
            endpoint: settings.endpoint.clone(),
            token: settings.token.clone(),
        })
    }

    /// Look up the cell serving `phone_number` at `datetime`. Fails with
    /// [`Error::Validation`] without sending anything when the phone number
    /// is empty.
    pub async fn search(&self, phone_number: &str, datetime: NaiveDateTime) -> Result<LookupResult> {
        let request = LookupRequest::new(phone_number, datetime)?;
        self.search_request(&request).await
    }

    pub async fn search_request(&self, request: &LookupRequest) -> Result<LookupResult> {
        tracing::debug!(
            endpoint = %self.endpoint,
            datetime = %request.formatted_datetime(),
            "sending lookup request"
        );
        let response = self
            .client
            .post(&self.endpoint)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.token)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                tracing::warn!(?err, "lookup request failed");
                Error::Transport(err)
            })?;

        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            let result = serde_json::from_str::<LookupResult>(&body).map_err(|err| {
                tracing::warn!(?err, %body, "unable to decode lookup response");
                Error::Decode(err)
            })?;
            tracing::debug!(?result, "lookup response received");
            return Ok(result);
        }

        tracing::warn!(%status, %body, "lookup endpoint returned an error");
        Err(classify_failure(status, &body))
    }
}

/// Map a non 2xx response onto the error surfaced to the user
pub fn classify_failure(status: StatusCode, body: &str) -> Error {
    if status == StatusCode::NOT_FOUND {
        return Error::NotFound;
    }
    if body.trim().is_empty() {
        let status_line = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        return Error::server(status, status_line);
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error_body) => Error::server(status, error_body.message),
        Err(_) => Error::server(status, body),
    }
}
