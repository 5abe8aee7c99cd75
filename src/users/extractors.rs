use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::warn;

use super::error::ErrorBody;

/// `Json<T>` whose rejections come back as a 400 with the usual error body.
pub struct JsonBody<T>(pub T);

pub struct BodyRejection(String);

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: self.0 })).into_response()
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                let message = rejection_message(&rejection);
                warn!(error = %message, "request body rejected");
                Err(BodyRejection(message))
            }
        }
    }
}

fn rejection_message(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(e) => format!("invalid body: {}", e.body_text()),
        JsonRejection::JsonSyntaxError(e) => format!("malformed json: {}", e.body_text()),
        JsonRejection::MissingJsonContentType(_) => "expected application/json".into(),
        other => other.body_text(),
    }
}
