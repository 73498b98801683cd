//! Typed wrappers for the pautas endpoints.
//!
//! Each method maps to exactly one backend call. None of them validate input;
//! callers check it first (see [`crate::validation`]).

use crate::api::{ApiClient, ApiRequest, ApiResult, HttpApiClient};
use crate::config::ApiConfig;
use crate::data::{CreatePauta, OpenSessao, Pauta, Resultado, VotoRequest};
use crate::id::PautaId;

/// The API client for the Votação application.
pub struct Api<C = HttpApiClient> {
    client: C,
}

impl Api<HttpApiClient> {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(HttpApiClient::from_config(config))
    }
}

impl<C: ApiClient> Api<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub async fn list_pautas(&self) -> ApiResult<Vec<Pauta>> {
        self.client.get("/pautas").await
    }

    pub async fn get_pauta(&self, id: PautaId) -> ApiResult<Pauta> {
        self.client.get(&format!("/pautas/{id}")).await
    }

    pub async fn create_pauta(&self, payload: &CreatePauta) -> ApiResult<Pauta> {
        self.client
            .fetch_value(ApiRequest::post("/pautas", payload)?)
            .await
    }

    pub async fn open_sessao(&self, id: PautaId, payload: &OpenSessao) -> ApiResult<()> {
        self.client
            .fetch_empty(ApiRequest::post(format!("/pautas/{id}/sessoes"), payload)?)
            .await
    }

    pub async fn votar(&self, id: PautaId, payload: &VotoRequest) -> ApiResult<()> {
        self.client
            .fetch_empty(ApiRequest::post(format!("/pautas/{id}/votos"), payload)?)
            .await
    }

    pub async fn get_resultado(&self, id: PautaId) -> ApiResult<Resultado> {
        self.client.get(&format!("/pautas/{id}/resultado")).await
    }

    pub async fn delete_pauta(&self, id: PautaId) -> ApiResult<()> {
        self.client.delete(&format!("/pautas/{id}")).await
    }
}
