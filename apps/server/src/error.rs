use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use assetdesk_core::assets::AssetError;
use assetdesk_core::assignments::AssignmentError;
use assetdesk_core::catalog::CatalogError;
use assetdesk_core::org::OrgError;
use assetdesk_core::users::UserError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Error response carrying the HTTP status a core error maps to.
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self.message);
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

impl From<AssignmentError> for ApiError {
    fn from(err: AssignmentError) -> Self {
        let status = match &err {
            AssignmentError::NotFound(_) => StatusCode::NOT_FOUND,
            AssignmentError::InvalidData(_) => StatusCode::BAD_REQUEST,
            AssignmentError::AlreadyAssigned(_)
            | AssignmentError::NotAssigned(_)
            | AssignmentError::ConcurrentModification(_) => StatusCode::CONFLICT,
            AssignmentError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, err.to_string())
    }
}

impl From<AssetError> for ApiError {
    fn from(err: AssetError) -> Self {
        let status = match &err {
            AssetError::NotFound(_) => StatusCode::NOT_FOUND,
            AssetError::InvalidData(_) | AssetError::InvalidFilter(_) => StatusCode::BAD_REQUEST,
            AssetError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, err.to_string())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let status = match &err {
            CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
            CatalogError::InvalidData(_) => StatusCode::BAD_REQUEST,
            CatalogError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, err.to_string())
    }
}

impl From<OrgError> for ApiError {
    fn from(err: OrgError) -> Self {
        let status = match &err {
            OrgError::NotFound(_) => StatusCode::NOT_FOUND,
            OrgError::InvalidData(_) => StatusCode::BAD_REQUEST,
            OrgError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, err.to_string())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        let status = match &err {
            UserError::NotFound(_) => StatusCode::NOT_FOUND,
            UserError::InvalidData(_) => StatusCode::BAD_REQUEST,
            UserError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(status, err.to_string())
    }
}

impl From<assetdesk_core::Error> for ApiError {
    fn from(err: assetdesk_core::Error) -> Self {
        match err {
            assetdesk_core::Error::Assignment(e) => e.into(),
            assetdesk_core::Error::Asset(e) => e.into(),
            assetdesk_core::Error::Catalog(e) => e.into(),
            assetdesk_core::Error::Org(e) => e.into(),
            assetdesk_core::Error::User(e) => e.into(),
            other => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        }
    }
}
