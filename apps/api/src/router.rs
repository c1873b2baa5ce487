use axum::{
    Router,
    routing::get,
};

use appointment_cell::{clinic_routes, SharedState};

pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(|| async { "HealthTrack API is running!" }))
        .merge(clinic_routes(state))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use appointment_cell::AppState;
    use shared_config::AppConfig;

    use super::create_router;

    #[tokio::test]
    async fn root_reports_running() {
        let app = create_router(AppState::new(AppConfig::default()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"HealthTrack API is running!");
    }

    #[tokio::test]
    async fn clinic_routes_are_mounted() {
        let app = create_router(AppState::new(AppConfig::default()));

        let response = app
            .oneshot(Request::builder().uri("/clinic-sites").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
