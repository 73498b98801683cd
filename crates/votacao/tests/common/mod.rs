#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use serde_json::{Value, json};
use votacao::api::{ApiClient, ApiRequest, ApiResult, HttpMethod, RawResponse};
use votacao::data::Pauta;
use votacao::notification::Notification;
use votacao::pautas::Api;

/// Transport that replays queued responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<RawResponse>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: RawResponse) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.respond(RawResponse::new(status, body.to_string()))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    /// `(method, path)` of every request, in order.
    pub fn calls(&self) -> Vec<(HttpMethod, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|r| (r.method, r.path.clone()))
            .collect()
    }
}

#[async_trait::async_trait(?Send)]
impl ApiClient for MockTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<RawResponse> {
        let path = request.path.clone();
        self.requests.borrow_mut().push(request);
        let response = self.responses.borrow_mut().pop_front();
        Ok(response.unwrap_or_else(|| panic!("unexpected request to {path}")))
    }
}

pub fn api(transport: MockTransport) -> Api<MockTransport> {
    // Only the first test to get here installs the subscriber.
    let _ = votacao::log::setup();
    Api::new(transport)
}

pub fn body_of(request: &ApiRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has a body")).unwrap()
}

/// Collects what the card would have pushed to the banner and the page.
#[derive(Default)]
pub struct Recorder {
    pub notifications: RefCell<Vec<Notification>>,
    pub refreshes: Cell<u32>,
    pub deletions: Cell<u32>,
}

impl Recorder {
    pub fn notify(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }

    pub fn refresh(&self) {
        self.refreshes.set(self.refreshes.get() + 1);
    }

    pub fn deleted(&self) {
        self.deletions.set(self.deletions.get() + 1);
    }

    pub fn last(&self) -> Option<Notification> {
        self.notifications.borrow().last().cloned()
    }
}

pub fn pauta_json(id: i64, created_at: &str, sessao: Option<bool>) -> Value {
    let sessao = sessao.map(|aberta| {
        json!({
            "abertaEm": "2024-05-01T10:00:00Z",
            "fechaEm": "2024-05-01T10:01:00Z",
            "aberta": aberta
        })
    });
    json!({
        "id": id,
        "titulo": format!("Pauta {id}"),
        "descricao": "Descricao",
        "createdAt": created_at,
        "sessao": sessao
    })
}

pub fn pauta(id: i64, sessao: Option<bool>) -> Pauta {
    serde_json::from_value(pauta_json(id, "2024-05-01T09:00:00Z", sessao)).unwrap()
}

pub fn resultado_json(id: i64, sim: u64, nao: u64) -> Value {
    json!({
        "pautaId": id,
        "totalVotos": sim + nao,
        "votosSim": sim,
        "votosNao": nao,
        "status": "ABERTA"
    })
}
