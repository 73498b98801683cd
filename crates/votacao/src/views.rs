//! Page state for the dashboard and the detail view.
//!
//! Both pages follow the same policy: starting a fetch clears the previous
//! error, so while a request is in flight the page shows loading rather than a
//! stale failure.

use crate::api::ApiError;
use crate::data::{Pauta, sort_recent_first};
use crate::id::PautaId;
use crate::notification::Notification;
use crate::validation::ValidationError;

const LIST_FAILED: &str = "Erro ao carregar pautas.";
const PAUTA_FAILED: &str = "Erro ao carregar pauta.";
const PAUTA_NOT_FOUND: &str = "Pauta não encontrada.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pautas: Vec<Pauta>,
    loading: bool,
    error: Option<String>,
}

/// What the dashboard body renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardView<'a> {
    Loading,
    /// Failure with nothing to show: message plus a retry control.
    Failed(&'a str),
    Empty,
    Loaded(&'a [Pauta]),
}

impl DashboardState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Applies a finished list fetch and returns the banner to push, if any.
    ///
    /// Items are kept across a failed refresh. A failure whose message is blank
    /// records no error, so the page falls back to its empty state silently.
    pub fn resolve(&mut self, result: Result<Vec<Pauta>, ApiError>) -> Option<Notification> {
        self.loading = false;
        match result {
            Ok(pautas) => {
                self.pautas = sort_recent_first(pautas);
                self.error = None;
                None
            }
            Err(err) => {
                let message = err.user_message(LIST_FAILED);
                if message.trim().is_empty() {
                    return None;
                }
                self.error = Some(message.clone());
                Some(Notification::error(message))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> DashboardView<'_> {
        if !self.pautas.is_empty() {
            return DashboardView::Loaded(&self.pautas);
        }
        if self.loading {
            return DashboardView::Loading;
        }
        match self.error.as_deref() {
            Some(message) => DashboardView::Failed(message),
            None => DashboardView::Empty,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailState {
    pauta: Option<Pauta>,
    loading: bool,
    error: Option<DetailError>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailError {
    pub message: String,
    pub not_found: bool,
}

/// What the detail body renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetailView<'a> {
    Loading,
    Loaded(&'a Pauta),
    /// Message plus a "back to list" control.
    Failed(&'a DetailError),
    Empty,
}

impl DetailState {
    /// Records an unusable route id. No request is made for it.
    pub fn reject(&mut self, err: ValidationError) -> Notification {
        let message = err.to_string();
        self.pauta = None;
        self.loading = false;
        self.error = Some(DetailError {
            message: message.clone(),
            not_found: false,
        });
        Notification::error(message)
    }

    /// Starts loading `id`. The shown item is kept while it is being refreshed,
    /// but dropped when the route now points at a different one.
    pub fn begin(&mut self, id: PautaId) {
        if self.pauta.as_ref().is_some_and(|pauta| pauta.id != id) {
            self.pauta = None;
        }
        self.loading = true;
        self.error = None;
    }

    pub fn resolve(&mut self, result: Result<Pauta, ApiError>) -> Option<Notification> {
        self.loading = false;
        match result {
            Ok(pauta) => {
                self.pauta = Some(pauta);
                self.error = None;
                None
            }
            Err(err) => {
                let not_found = err.is_not_found();
                let message = if not_found {
                    PAUTA_NOT_FOUND.to_string()
                } else {
                    err.user_message(PAUTA_FAILED)
                };
                self.pauta = None;
                self.error = Some(DetailError {
                    message: message.clone(),
                    not_found,
                });
                Some(Notification::error(message))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn view(&self) -> DetailView<'_> {
        if let Some(pauta) = &self.pauta {
            return DetailView::Loaded(pauta);
        }
        if self.loading {
            return DetailView::Loading;
        }
        match &self.error {
            Some(error) => DetailView::Failed(error),
            None => DetailView::Empty,
        }
    }
}

/// Resolves the `:id` route segment.
pub fn parse_route_id(raw: &str) -> Result<PautaId, ValidationError> {
    raw.parse()
}
