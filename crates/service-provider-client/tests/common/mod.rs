//! In-process fake Service Provider for integration tests.
//!
//! Answers every POST, on any path, with a scripted status and JSON body and
//! records what it received.

#![allow(dead_code)]

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

struct FakeState {
    status: u16,
    reply: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub struct FakeServiceProvider {
    pub url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeServiceProvider {
    /// Start a server that replies `200` with `reply`.
    pub fn start(reply: serde_json::Value) -> Self {
        Self::start_raw(200, reply.to_string())
    }

    /// Start a server with an arbitrary status and raw body.
    pub fn start_raw(status: u16, reply: String) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = web::Data::new(FakeState {
            status,
            reply,
            requests: requests.clone(),
        });

        let server = HttpServer::new(move || {
            App::new()
                .app_data(state.clone())
                .default_service(web::to(handle))
        })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind fake service provider");

        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());

        Self {
            url: format!("http://{addr}/"),
            requests,
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests()
            .pop()
            .expect("fake service provider received no request")
    }
}

async fn handle(req: HttpRequest, body: web::Bytes, state: web::Data<FakeState>) -> HttpResponse {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: req.method().to_string(),
        path: req.path().to_string(),
        content_type: req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.to_vec(),
    });

    let status = actix_web::http::StatusCode::from_u16(state.status)
        .unwrap_or(actix_web::http::StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status)
        .content_type("application/json")
        .body(state.reply.clone())
}
