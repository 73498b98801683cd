//! Data structures exchanged with the pautas backend.
//!
//! Field names follow the backend's JSON (`titulo`, `createdAt`, `duracaoMinutos`...),
//! Rust names follow the same Portuguese vocabulary in snake case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::{AssociadoId, PautaId};

/// An agenda item subject to a vote.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pauta {
    pub id: PautaId,
    pub titulo: String,
    #[serde(default)]
    pub descricao: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub sessao: Option<Sessao>,
}

impl Pauta {
    /// A session, once opened, can never be opened again.
    pub fn can_open_sessao(&self) -> bool {
        self.sessao.is_none()
    }

    /// Voting is only possible while the session is open.
    pub fn can_vote(&self) -> bool {
        self.sessao.as_ref().is_some_and(|s| s.aberta)
    }

    pub fn sessao_label(&self) -> &'static str {
        match &self.sessao {
            Some(sessao) if sessao.aberta => "Aberta",
            Some(_) => "Fechada",
            None => "Sem sessão",
        }
    }

    pub fn descricao_or_default(&self) -> &str {
        self.descricao
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("Sem descrição")
    }

    /// Identity of the item's session, used to decide when the tally is stale.
    pub fn sessao_key(&self) -> SessaoKey {
        SessaoKey {
            pauta_id: self.id,
            sessao: self.sessao.clone(),
        }
    }
}

/// A time-boxed voting window attached to one agenda item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sessao {
    pub aberta_em: DateTime<Utc>,
    pub fecha_em: DateTime<Utc>,
    pub aberta: bool,
}

/// Changes whenever the item or any field of its session changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessaoKey {
    pub pauta_id: PautaId,
    pub sessao: Option<Sessao>,
}

/// Aggregate vote counts for an agenda item.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resultado {
    #[serde(default)]
    pub pauta_id: Option<PautaId>,
    pub total_votos: u64,
    pub votos_sim: u64,
    pub votos_nao: u64,
    /// Backend-defined, e.g. `ABERTA` or `ENCERRADA`.
    pub status: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum VotoValor {
    Sim,
    Nao,
}

impl VotoValor {
    pub fn label(self) -> &'static str {
        match self {
            VotoValor::Sim => "SIM",
            VotoValor::Nao => "NÃO",
        }
    }
}

/// Body of `POST /pautas`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreatePauta {
    pub titulo: String,
    pub descricao: String,
}

/// Body of `POST /pautas/{id}/sessoes`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OpenSessao {
    pub duracao_minutos: u32,
}

/// Body of `POST /pautas/{id}/votos`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VotoRequest {
    pub associado_id: AssociadoId,
    pub voto: VotoValor,
}

/// Sorts agenda items newest first by creation timestamp.
///
/// The sort is stable, so items created at the same instant keep the order the
/// backend returned them in.
pub fn sort_recent_first(mut pautas: Vec<Pauta>) -> Vec<Pauta> {
    pautas.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    pautas
}
