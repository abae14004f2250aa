//! Container embedding for the two servlets.
//!
//! Plays the container role the servlets expect: builds each one, hands it
//! its configuration through `init`, forwards every incoming request to
//! `service`, and calls `destroy` on shutdown. Beyond the two fixed mount
//! points there is no request handling of its own here.
//!
use std::sync::Arc;

use axum::{
    Router,
    extract::{Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::any,
};
use rustletcore::{
    config::ServletConfig, request::ServletRequest, response::ServletResponse, servlet::Servlet,
};
use tokio::{net::TcpListener, sync::RwLock};

use crate::{config::CONFIG, hello::HelloServlet, welcome::WelcomeServlet};

/// Application state holding the initialized servlets
pub(crate) struct AppState {
    // write access is only needed around init/destroy; requests take reads
    pub(crate) hello: RwLock<HelloServlet>,
    pub(crate) welcome: RwLock<WelcomeServlet>,
}

/// Start the container: init the servlets, serve until ctrl-c, destroy them
pub async fn run() {
    let mut hello = HelloServlet::new();
    hello.init(ServletConfig::new("hello")).unwrap();
    let mut welcome = WelcomeServlet::new();
    welcome.init(ServletConfig::new("welcome")).unwrap();

    let state = Arc::new(AppState {
        hello: RwLock::new(hello),
        welcome: RwLock::new(welcome),
    });

    let app = router(Arc::clone(&state));

    let addr = format!("{}:{}", CONFIG.bind, CONFIG.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("🚀 Rustlet container listening on http://{}", addr);
    println!("   📄 /hello   plain-text greeting");
    println!("   🌐 /welcome HTML welcome page");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    // take the servlets out of service once the listener has stopped
    state.hello.write().await.destroy();
    state.welcome.write().await.destroy();
    println!("🛑 Servlets destroyed, container stopped");
}

/// Router with the two fixed mount points; any method reaches `service`
pub(crate) fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/hello", any(hello_endpoint))
        .route("/welcome", any(welcome_endpoint))
        .with_state(state)
}

/// Wait for ctrl-c so the servlets get their destroy call
async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}

/// Forward one request to the minimal servlet
async fn hello_endpoint(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let servlet = state.hello.read().await;
    dispatch(&*servlet, &request)
}

/// Forward one request to the templated servlet
async fn welcome_endpoint(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let servlet = state.welcome.read().await;
    dispatch(&*servlet, &request)
}

/// Service one request through a servlet and render the outcome.
///
/// Success becomes a 200 carrying whatever content type the servlet set; a
/// propagated failure is logged and becomes a bare 500. The servlets
/// themselves never catch anything.
fn dispatch(servlet: &dyn Servlet, request: &Request) -> Response {
    let servlet_request = ServletRequest::new(request.method().as_str(), request.uri().path());

    let mut body = Vec::new();
    let (outcome, content_type) = {
        let mut servlet_response = ServletResponse::new(&mut body);
        let outcome = servlet.service(&servlet_request, &mut servlet_response);
        (outcome, servlet_response.content_type().map(str::to_owned))
    };

    match outcome {
        Ok(()) => match content_type {
            Some(content_type) => ([(header::CONTENT_TYPE, content_type)], body).into_response(),
            None => body.into_response(),
        },
        Err(err) => {
            eprintln!("⚠️ Servlet failure: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use rustletcore::error::ServletError;

    use crate::html::WELCOME_PAGE;

    fn initialized_state() -> Arc<AppState> {
        let mut hello = HelloServlet::new();
        hello.init(ServletConfig::new("hello")).unwrap();
        let mut welcome = WelcomeServlet::new();
        welcome.init(ServletConfig::new("welcome")).unwrap();
        Arc::new(AppState {
            hello: RwLock::new(hello),
            welcome: RwLock::new(welcome),
        })
    }

    async fn split(response: Response) -> (StatusCode, Option<String>, String) {
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_string());
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// Test that the hello endpoint ignores method and body alike
    #[tokio::test]
    async fn hello_endpoint_is_input_independent() {
        let state = initialized_state();
        let requests = [
            axum::http::Request::builder()
                .method("GET")
                .uri("/hello")
                .body(Body::empty())
                .unwrap(),
            axum::http::Request::builder()
                .method("POST")
                .uri("/hello?whatever=1")
                .body(Body::from("ignored payload"))
                .unwrap(),
        ];
        for request in requests {
            let response = hello_endpoint(State(Arc::clone(&state)), request).await;
            let (status, content_type, body) = split(response).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(content_type.as_deref(), Some("text/plain"));
            assert_eq!(body, "Hello, World!\n");
        }
    }

    /// Test that the welcome endpoint serves the fixed page
    #[tokio::test]
    async fn welcome_endpoint_serves_the_page() {
        let state = initialized_state();
        let request = axum::http::Request::builder()
            .uri("/welcome")
            .body(Body::empty())
            .unwrap();
        let response = welcome_endpoint(State(state), request).await;
        let (status, content_type, body) = split(response).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("text/html"));
        assert_eq!(body, WELCOME_PAGE);
        assert!(body.contains("Welcome to the Generic Servlet Example"));
    }

    /// Test that a propagated servlet failure renders as a bare 500
    #[test]
    fn dispatch_renders_failures_as_500() {
        struct FailingServlet;

        impl Servlet for FailingServlet {
            fn init(&mut self, _config: ServletConfig) -> Result<(), ServletError> {
                Ok(())
            }

            fn config(&self) -> Option<&ServletConfig> {
                None
            }

            fn service(
                &self,
                _request: &ServletRequest,
                _response: &mut ServletResponse<'_>,
            ) -> Result<(), ServletError> {
                Err(ServletError::Io(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "stream closed",
                )))
            }

            fn destroy(&mut self) {}
        }

        let request = axum::http::Request::builder()
            .uri("/hello")
            .body(Body::empty())
            .unwrap();
        let response = dispatch(&FailingServlet, &request);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
