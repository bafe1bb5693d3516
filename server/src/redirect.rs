use axum::{
    body::Body,
    http::{Request, Response, StatusCode, header},
    middleware::Next,
};

/// Sends `www.` hosts to the bare domain with a permanent redirect.
pub async fn redirect_www(req: Request<Body>, next: Next) -> Result<Response<Body>, StatusCode> {
    if let Some(host) = req.headers().get(header::HOST)
        && let Ok(host) = host.to_str()
        && let Some(bare) = host.strip_prefix("www.")
    {
        let path_query = req.uri().path_and_query().map_or("/", |pq| pq.as_str());
        let location = format!("https://{bare}{path_query}");
        tracing::debug!(%location, "redirecting www host");
        return Response::builder()
            .status(StatusCode::MOVED_PERMANENTLY)
            .header(header::LOCATION, location)
            .body(Body::empty())
            .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR);
    }
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use axum::{Router, middleware, routing::get};
    use tower::ServiceExt as _;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "home" }))
            .layer(middleware::from_fn(redirect_www))
    }

    #[tokio::test]
    async fn www_host_is_redirected_with_path() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/?ref=ad")
                    .header(header::HOST, "www.oneparkpeak.hk")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://oneparkpeak.hk/?ref=ad"
        );
    }

    #[tokio::test]
    async fn bare_host_passes_through() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(header::HOST, "oneparkpeak.hk")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
