//! Client-side input rules checked before any request is issued.

use crate::data::CreatePauta;

/// Malformed input caught in the browser. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Informe uma duração válida em minutos.")]
    InvalidDuration,
    #[error("Informe o ID do associado antes de votar.")]
    MissingAssociado,
    #[error("O ID deve ter 11 dígitos (formato CPF).")]
    MalformedAssociado,
    #[error("Pauta inválida.")]
    InvalidPauta,
    #[error("Informe o título da pauta.")]
    EmptyTitle,
}

/// Parses the session duration field: a whole number of minutes greater than zero.
pub fn parse_duration_minutes(raw: &str) -> Result<u32, ValidationError> {
    match raw.trim().parse::<i64>() {
        Ok(minutes) if minutes > 0 => {
            u32::try_from(minutes).map_err(|_| ValidationError::InvalidDuration)
        }
        _ => Err(ValidationError::InvalidDuration),
    }
}

/// Values typed into the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PautaFormValues {
    pub titulo: String,
    pub descricao: String,
}

impl PautaFormValues {
    pub fn new(titulo: impl Into<String>, descricao: impl Into<String>) -> Self {
        Self {
            titulo: titulo.into(),
            descricao: descricao.into(),
        }
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.titulo.trim().is_empty()
    }

    /// Trims both fields into a request payload, or rejects a blank title.
    pub fn to_payload(&self) -> Result<CreatePauta, ValidationError> {
        let titulo = self.titulo.trim();
        if titulo.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        Ok(CreatePauta {
            titulo: titulo.to_string(),
            descricao: self.descricao.trim().to_string(),
        })
    }

    /// Submits the form: yields the trimmed payload and clears both fields.
    ///
    /// A blank title yields `None` and leaves the fields as typed.
    pub fn take_payload(&mut self) -> Option<CreatePauta> {
        let payload = self.to_payload().ok()?;
        *self = Self::default();
        Some(payload)
    }
}
