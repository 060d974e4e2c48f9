//! Response dispatcher.
//!
//! The single place where a use-case outcome becomes a transport response:
//! it resolves the application status through the mapping registry, attaches
//! the transaction-id and caller-supplied headers, serializes the result in
//! the route's emission shape, and finalizes the request trace no matter how
//! the invocation ended.

use std::sync::Arc;

use axum::{
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use super::status_map::StatusRegistry;
use crate::config::TRANSACTION_ID_HEADER;
use crate::errors::{AppError, AppResult};
use crate::services::TraceSink;
use crate::types::{UseCaseResult, UseCaseTrace};

/// How a result is serialized onto the wire
#[derive(Debug, Clone, Copy)]
pub enum Emission {
    /// Full envelope with explicit null fields
    Envelope,
    /// Envelope with absent fields omitted
    Dto,
    /// Bare payload when the result carries no message, DTO otherwise
    Data,
}

pub struct ResponseDispatcher {
    statuses: Arc<StatusRegistry>,
    traces: Arc<dyn TraceSink>,
}

impl ResponseDispatcher {
    pub fn new(statuses: Arc<StatusRegistry>, traces: Arc<dyn TraceSink>) -> Self {
        Self { statuses, traces }
    }

    /// Turn an awaited use-case outcome into a response.
    ///
    /// The trace is finalized and handed to asynchronous persistence on
    /// every path. An `Err` outcome is forwarded to the surrounding error
    /// layer untouched; it is not synthesized into a result envelope here.
    pub fn respond<T: Serialize>(
        &self,
        mut trace: UseCaseTrace,
        outcome: AppResult<UseCaseResult<T>>,
        emission: Emission,
        headers: &[(HeaderName, HeaderValue)],
    ) -> Result<Response, AppError> {
        let transaction_id = trace.transaction_id().to_string();

        match &outcome {
            Ok(result) => trace.set_outcome(result.status()),
            Err(error) => trace.set_outcome(error.application_status()),
        }
        self.finalize_trace(trace);

        let result = outcome?;
        let status = self.statuses.resolve(result.status())?;
        let body = serialize(result, emission)?;

        let mut response = (status, Json(body)).into_response();
        response.headers_mut().insert(
            HeaderName::from_static(TRANSACTION_ID_HEADER),
            HeaderValue::from_str(&transaction_id)
                .map_err(|e| AppError::internal(format!("invalid transaction id header: {e}")))?,
        );
        for (name, value) in headers {
            response.headers_mut().insert(name.clone(), value.clone());
        }

        Ok(response)
    }

    /// Close the trace and persist it without blocking the response path.
    ///
    /// Persistence runs detached: a failure is logged and dropped, and a
    /// late completion is allowed to land after the response has been sent.
    fn finalize_trace(&self, mut trace: UseCaseTrace) {
        if trace.context().is_empty() {
            return;
        }

        trace.finish(Utc::now());

        let sink = Arc::clone(&self.traces);
        tokio::spawn(async move {
            let transaction_id = trace.transaction_id();
            if let Err(error) = sink.register(trace).await {
                tracing::error!(
                    %transaction_id,
                    error = %error,
                    "use case trace persistence failed"
                );
            }
        });
    }
}

fn serialize<T: Serialize>(result: UseCaseResult<T>, emission: Emission) -> AppResult<Value> {
    let value = match emission {
        Emission::Envelope => result.to_envelope(),
        Emission::Dto => to_value(result.into_dto())?,
        Emission::Data => {
            if result.message().is_none() {
                to_value(result.into_dto().data)?
            } else {
                to_value(result.into_dto())?
            }
        }
    };
    Ok(value)
}

fn to_value<T: Serialize>(value: T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::internal(format!("serialization failed: {e}")))
}
