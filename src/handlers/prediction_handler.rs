use actix_web::{web, HttpResponse, Result};
use uuid::Uuid;

use crate::handlers::store_error_response;
use crate::middleware::Identity;
use crate::models::common::ApiResponse;
use crate::models::prediction::{SavePredictionRequest, SavePredictionResponse};
use crate::store::{AppStore, SaveOutcome};

/// Save the caller's prediction for a match. A prediction past the cutoff
/// comes back with `accepted: false` and a 200; the window being closed is
/// an answer, not a failure.
#[tracing::instrument(
    name = "Save prediction",
    skip(request, store, identity),
    fields(user = %identity.name, match_id = %request.match_id)
)]
pub async fn save_prediction(
    path: web::Path<Uuid>,
    request: web::Json<SavePredictionRequest>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let pool_id = path.into_inner();
    let request = request.into_inner();
    match store
        .save_prediction(
            pool_id,
            identity.user_id,
            &request.match_id,
            request.home_score,
            request.away_score,
        )
        .await
    {
        Ok(SaveOutcome::Saved(prediction)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            "Prediction saved",
            SavePredictionResponse {
                accepted: true,
                prediction: Some(prediction),
            },
        ))),
        Ok(SaveOutcome::Closed) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            "Predictions for this match are closed",
            SavePredictionResponse {
                accepted: false,
                prediction: None,
            },
        ))),
        Err(e) => Ok(store_error_response(e)),
    }
}

pub async fn get_my_prediction(
    path: web::Path<(Uuid, String)>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let (pool_id, match_id) = path.into_inner();
    let prediction = store
        .get_user_prediction(pool_id, identity.user_id, &match_id)
        .await;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Prediction", prediction)))
}

pub async fn pool_predictions(
    path: web::Path<Uuid>,
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let pool_id = path.into_inner();
    match store.pool_predictions(pool_id, identity.user_id).await {
        Ok(predictions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success("Predictions", predictions)))
        }
        Err(e) => Ok(store_error_response(e)),
    }
}

/// The caller's decided predictions across all pools, most recent first.
pub async fn prediction_history(
    store: web::Data<AppStore>,
    identity: web::ReqData<Identity>,
) -> Result<HttpResponse> {
    let history = store.user_prediction_history(identity.user_id).await;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Prediction history", history)))
}

/// Administrative removal of a prediction.
#[tracing::instrument(name = "Delete prediction", skip(store))]
pub async fn delete_prediction(
    path: web::Path<String>,
    store: web::Data<AppStore>,
) -> Result<HttpResponse> {
    let prediction_id = path.into_inner();
    match store.delete_prediction(&prediction_id).await {
        Ok(()) => {
            Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_message("Prediction deleted")))
        }
        Err(e) => Ok(store_error_response(e)),
    }
}
