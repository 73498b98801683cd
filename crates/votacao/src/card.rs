//! What the agenda-item card does when the user acts on it.
//!
//! The component only wires inputs and callbacks; validation, the backend calls
//! and the resulting notifications live here so they can be driven from tests.

use crate::api::ApiClient;
use crate::data::{OpenSessao, Pauta, Resultado, VotoRequest, VotoValor};
use crate::id::AssociadoId;
use crate::log::{debug, info};
use crate::notification::Notification;
use crate::pautas::Api;
use crate::sequence::FetchSequence;
use crate::validation::parse_duration_minutes;

const OPEN_SESSAO_OK: &str = "Sessão aberta com sucesso.";
const OPEN_SESSAO_FAILED: &str = "Erro ao abrir sessão.";
const VOTO_OK: &str = "Voto registrado com sucesso.";
const VOTO_FAILED: &str = "Erro ao registrar voto.";
const RESULTADO_FAILED: &str = "Erro ao carregar resultado.";
const DELETE_OK: &str = "Pauta excluída.";
const DELETE_FAILED: &str = "Erro ao excluir pauta.";

/// Outcome of a tally fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tally {
    /// No session yet, nothing was requested.
    NoSession,
    Loaded(Resultado),
    /// The request failed and the user was notified.
    Failed,
}

impl Tally {
    /// What the card displays: failures clear the previous tally.
    pub fn into_display(self) -> Option<Resultado> {
        match self {
            Tally::Loaded(resultado) => Some(resultado),
            Tally::NoSession | Tally::Failed => None,
        }
    }
}

/// Confirmation text shown before deleting an item.
pub fn delete_prompt(pauta: &Pauta) -> String {
    format!("Excluir \"{}\" e todos os votos?", pauta.titulo)
}

/// Card actions bound to a client and to the card's callbacks.
pub struct CardActions<'a, C> {
    api: &'a Api<C>,
    notify: &'a dyn Fn(Notification),
    refresh: &'a dyn Fn(),
}

impl<'a, C: ApiClient> CardActions<'a, C> {
    pub fn new(api: &'a Api<C>, notify: &'a dyn Fn(Notification), refresh: &'a dyn Fn()) -> Self {
        Self {
            api,
            notify,
            refresh,
        }
    }

    /// Opens the voting session with the typed duration.
    ///
    /// An invalid duration is reported without touching the network.
    pub async fn open_sessao(&self, pauta: &Pauta, duracao: &str) -> bool {
        let duracao_minutos = match parse_duration_minutes(duracao) {
            Ok(minutes) => minutes,
            Err(err) => {
                (self.notify)(Notification::error(err.to_string()));
                return false;
            }
        };

        let payload = OpenSessao { duracao_minutos };
        match self.api.open_sessao(pauta.id, &payload).await {
            Ok(()) => {
                info!("Opened session for pauta {} ({} min)", pauta.id, duracao_minutos);
                (self.notify)(Notification::success(OPEN_SESSAO_OK));
                (self.refresh)();
                true
            }
            Err(err) => {
                (self.notify)(Notification::error(err.user_message(OPEN_SESSAO_FAILED)));
                false
            }
        }
    }

    /// Casts a vote, then refreshes the item and re-reads the tally.
    ///
    /// Returns `None` when the vote was not recorded, either because the id was
    /// rejected locally or because the backend refused it. In that case no
    /// ticket is taken from `seq`, so a tally fetch already in flight still
    /// applies. `None` is also returned when a newer fetch superseded this one.
    pub async fn vote(
        &self,
        pauta: &Pauta,
        associado: &str,
        voto: VotoValor,
        seq: &FetchSequence,
    ) -> Option<Tally> {
        let associado_id = match AssociadoId::parse(associado) {
            Ok(id) => id,
            Err(err) => {
                (self.notify)(Notification::error(err.to_string()));
                return None;
            }
        };

        let payload = VotoRequest {
            associado_id,
            voto,
        };
        if let Err(err) = self.api.votar(pauta.id, &payload).await {
            (self.notify)(Notification::error(err.user_message(VOTO_FAILED)));
            return None;
        }

        info!("Vote {:?} recorded for pauta {}", voto, pauta.id);
        (self.notify)(Notification::success(VOTO_OK));
        (self.refresh)();
        self.refresh_tally(pauta, seq).await
    }

    /// Sequenced [`tally`](Self::tally): `None` when a newer fetch was issued
    /// while this one was pending.
    pub async fn refresh_tally(&self, pauta: &Pauta, seq: &FetchSequence) -> Option<Tally> {
        let ticket = seq.next();
        let tally = self.tally(pauta).await;
        let settled = seq.settle(ticket, tally);
        if settled.is_none() {
            debug!("Discarding stale tally for pauta {}", pauta.id);
        }
        settled
    }

    /// Fetches the tally if the item has a session.
    pub async fn tally(&self, pauta: &Pauta) -> Tally {
        if pauta.sessao.is_none() {
            return Tally::NoSession;
        }
        match self.api.get_resultado(pauta.id).await {
            Ok(resultado) => {
                debug!("Tally for pauta {}: {:?}", pauta.id, resultado);
                Tally::Loaded(resultado)
            }
            Err(err) => {
                (self.notify)(Notification::error(err.user_message(RESULTADO_FAILED)));
                Tally::Failed
            }
        }
    }

    /// Deletes the item after the user confirms.
    ///
    /// On success exactly one follow-up runs: `on_deleted` when given, the
    /// generic refresh otherwise. Declining the prompt does nothing at all.
    pub async fn delete(
        &self,
        pauta: &Pauta,
        confirm: impl FnOnce(&str) -> bool,
        on_deleted: Option<&dyn Fn()>,
    ) -> bool {
        if !confirm(&delete_prompt(pauta)) {
            return false;
        }

        match self.api.delete_pauta(pauta.id).await {
            Ok(()) => {
                info!("Deleted pauta {}", pauta.id);
                (self.notify)(Notification::success(DELETE_OK));
                match on_deleted {
                    Some(on_deleted) => on_deleted(),
                    None => (self.refresh)(),
                }
                true
            }
            Err(err) => {
                (self.notify)(Notification::error(err.user_message(DELETE_FAILED)));
                false
            }
        }
    }
}
