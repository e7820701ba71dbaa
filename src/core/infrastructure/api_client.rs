//! HTTP client for the Moonraker printer API.

use crate::core::domain::{
    error::{BridgeError, BridgeResult, ValidationError},
    model::{
        action_result::{ActionResult, PrintAction},
        bridge_connection::BridgeConnection,
        client_config::ClientConfig,
        envelope::{ApiResult, ObjectList, ObjectStatus},
        job_details::JobDetails,
        printer_info::{InfoEnvelope, PrinterInfo},
        printer_status::{PrintStatsSlot, PrinterStatus},
        temperature_reading::{TemperatureReading, TemperaturesFragment},
    },
};
use governor::{DefaultDirectRateLimiter, Quota};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::{debug, warn};

/// JSON body for `/printer/gcode/script`.
#[derive(Serialize)]
struct ScriptRequest<'a> {
    script: &'a str,
}

/// Typed client for one Moonraker endpoint.
///
/// Every operation is a single bounded request: queries and control
/// actions use the short timeout, the snapshot fetch the long one. The
/// client holds only immutable configuration, so one instance can serve
/// any number of concurrent command handlers. An optional client-side
/// rate limiter throttles outgoing requests when configured.
pub struct MoonrakerClient {
    http_client: Client,
    connection: Arc<BridgeConnection>,
    config: ClientConfig,
    rate_limiter: Option<Arc<DefaultDirectRateLimiter>>,
}

impl MoonrakerClient {
    /// Creates a new client for the given connection.
    ///
    /// # Errors
    /// Returns `BridgeError::Network` if the HTTP client cannot be built,
    /// or `BridgeError::Validation` for a zero-valued rate limit quota.
    pub fn new(connection: Arc<BridgeConnection>, config: ClientConfig) -> BridgeResult<Self> {
        let http_client = Client::builder()
            .build()
            .map_err(|e| BridgeError::Network(e.to_string()))?;

        let rate_limiter = match config.rate_limit {
            Some(rl) => {
                let per_second = NonZeroU32::new(rl.requests_per_second).ok_or_else(|| {
                    ValidationError::ConstraintViolation(
                        "Rate limit must allow at least 1 request per second".to_string(),
                    )
                })?;
                let burst = NonZeroU32::new(rl.burst_size).ok_or_else(|| {
                    ValidationError::ConstraintViolation(
                        "Rate limit burst size must be at least 1".to_string(),
                    )
                })?;
                let quota = Quota::per_second(per_second).allow_burst(burst);
                Some(Arc::new(DefaultDirectRateLimiter::direct(quota)))
            }
            None => None,
        };

        Ok(Self {
            http_client,
            connection,
            config,
            rate_limiter,
        })
    }

    /// Returns a reference to the underlying connection details.
    pub fn connection(&self) -> &BridgeConnection {
        &self.connection
    }

    /// Queries `print_stats` and interprets it as a status snapshot.
    pub async fn query_print_stats(&self) -> BridgeResult<PrinterStatus> {
        let envelope: ApiResult<ObjectStatus<PrintStatsSlot>> =
            self.get_json("/printer/objects/query?print_stats").await?;
        Ok(PrinterStatus::from(envelope.result.status.print_stats))
    }

    /// Queries `print_stats` and interprets the job-identity subset.
    pub async fn query_job(&self) -> BridgeResult<JobDetails> {
        let envelope: ApiResult<ObjectStatus<PrintStatsSlot>> =
            self.get_json("/printer/objects/query?print_stats").await?;
        Ok(JobDetails::from(envelope.result.status.print_stats))
    }

    /// Queries extruder and bed heater temperatures.
    pub async fn query_temperatures(&self) -> BridgeResult<TemperatureReading> {
        let envelope: ApiResult<ObjectStatus<TemperaturesFragment>> = self
            .get_json("/printer/objects/query?extruder&heater_bed")
            .await?;
        Ok(TemperatureReading::from(envelope.result.status))
    }

    /// Queries static printer/firmware information.
    pub async fn query_info(&self) -> BridgeResult<PrinterInfo> {
        let envelope: InfoEnvelope = self.get_json("/printer/info").await?;
        Ok(PrinterInfo::from(envelope.result))
    }

    /// Lists the printer object names known to the API.
    pub async fn list_objects(&self) -> BridgeResult<Vec<String>> {
        let envelope: ApiResult<ObjectList> = self.get_json("/printer/objects/list").await?;
        Ok(envelope.result.objects)
    }

    /// Sends a raw G-code/macro script for execution.
    ///
    /// The script text goes to the printer verbatim; the printer API is
    /// the trust boundary for what it may contain.
    pub async fn run_script(&self, script: &str) -> BridgeResult<ActionResult> {
        self.post_for_status("/printer/gcode/script", Some(&ScriptRequest { script }))
            .await
    }

    /// Posts a print lifecycle action (pause/resume/cancel).
    pub async fn post_print_action(&self, action: PrintAction) -> BridgeResult<ActionResult> {
        let path = format!("/printer/print/{}", action.as_path_segment());
        self.post_for_status(&path, None::<&()>).await
    }

    /// Triggers a firmware restart.
    pub async fn restart_firmware(&self) -> BridgeResult<ActionResult> {
        self.post_for_status("/server/restart", None::<&()>).await
    }

    /// Triggers the printer's emergency stop.
    pub async fn emergency_stop(&self) -> BridgeResult<ActionResult> {
        self.post_for_status("/printer/emergency_stop", None::<&()>)
            .await
    }

    /// Fetches one webcam snapshot as raw image bytes.
    ///
    /// # Errors
    /// `BridgeError::Http` for any non-200 status; the caller must fall
    /// back to a text reply, never send an empty photo.
    pub async fn fetch_snapshot(&self) -> BridgeResult<Vec<u8>> {
        self.throttle().await;
        let url = self.connection.snapshot_url().as_str();
        debug!(url, "fetching webcam snapshot");

        let response = self
            .http_client
            .get(url)
            .timeout(self.config.snapshot_timeout)
            .send()
            .await
            .map_err(map_transport_error)?;

        if response.status() != StatusCode::OK {
            warn!(status = response.status().as_u16(), "snapshot fetch failed");
            return Err(BridgeError::Http(response.status().as_u16()));
        }

        let bytes = response.bytes().await.map_err(map_transport_error)?;
        Ok(bytes.to_vec())
    }

    /// Performs a bounded GET and parses the JSON body.
    async fn get_json<T>(&self, path: &str) -> BridgeResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.throttle().await;
        let url = self.connection.api_base_url().join(path);
        debug!(%url, "printer API query");

        let response = self
            .http_client
            .get(&url)
            .timeout(self.config.query_timeout)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), %url, "printer API query failed");
            return Err(BridgeError::Http(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| BridgeError::Protocol(format!("Failed to parse response: {}", e)))
    }

    /// Performs a bounded POST and folds the HTTP status into an
    /// [`ActionResult`]. A reachable-but-refusing printer is a result,
    /// not an error; only transport failures become `Err`.
    async fn post_for_status<B>(&self, path: &str, body: Option<&B>) -> BridgeResult<ActionResult>
    where
        B: Serialize + ?Sized,
    {
        self.throttle().await;
        let url = self.connection.api_base_url().join(path);
        debug!(%url, "printer API action");

        let mut request = self
            .http_client
            .post(&url)
            .timeout(self.config.action_timeout);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let result = ActionResult::from_status(response.status().as_u16());
        if !result.success {
            warn!(status = response.status().as_u16(), %url, "printer refused action");
        }
        Ok(result)
    }

    async fn throttle(&self) {
        if let Some(limiter) = &self.rate_limiter {
            // `until_ready()` completes when capacity is available.
            limiter.until_ready().await;
        }
    }
}

fn map_transport_error(e: reqwest::Error) -> BridgeError {
    if e.is_timeout() {
        BridgeError::Network(format!("Request timed out: {}", e))
    } else if e.is_connect() {
        BridgeError::Network(format!("Connection failed: {}", e))
    } else {
        BridgeError::Network(e.to_string())
    }
}
