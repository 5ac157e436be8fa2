use crate::config::ConfigError;
use crate::guide::checklist::ExportError;
use crate::guide::GuideError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Guide(GuideError),
    Export(ExportError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Guide(err) => write!(f, "guide error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Guide(err) => Some(err),
            AppError::Export(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Guide(GuideError::InvalidSelection { .. })
            | AppError::Guide(GuideError::IndexOutOfRange { .. }) => StatusCode::BAD_REQUEST,
            AppError::Guide(GuideError::NoTimelineData { .. }) => StatusCode::NOT_FOUND,
            AppError::Guide(GuideError::Storage(_))
            | AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<GuideError> for AppError {
    fn from(value: GuideError) -> Self {
        Self::Guide(value)
    }
}

impl From<ExportError> for AppError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide::{DegreeLevel, StoreError};

    #[test]
    fn index_errors_map_to_bad_request() {
        let err = AppError::from(GuideError::IndexOutOfRange {
            degree: DegreeLevel::Postdoc,
            index: 12,
            len: 12,
        });
        assert!(err.to_string().contains("out of range"));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_timeline_maps_to_not_found() {
        let err = AppError::from(GuideError::NoTimelineData {
            degree: DegreeLevel::Graduate,
            semester: "spring2030".to_string(),
        });
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_failures_map_to_server_error() {
        let err = AppError::from(GuideError::Storage(StoreError::Unavailable(
            "disk offline".to_string(),
        )));
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
