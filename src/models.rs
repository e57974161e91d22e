// Data model for captured leads

use chrono::Local;
use eyre::eyre;
use serde::{Deserialize, Serialize};

/// Timestamp format used for `created_at`, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One captured contact/interest record.
///
/// Immutable once inserted: there is no update or delete path. Every
/// field except `id` defaults to the empty string, never NULL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    /// Assigned by the store, unique and monotonically increasing.
    pub id: i64,
    /// `YYYY-MM-DD HH:MM:SS`, stamped at insert time.
    pub created_at: String,
    pub tema: String,
    pub nombre: String,
    pub apellido: String,
    pub puesto: String,
    pub tel_trabajo: String,
    pub tel_movil: String,
    pub email: String,
    pub compania: String,
    pub web: String,
    pub calle1: String,
    pub calle2: String,
    pub calle3: String,
    pub ciudad: String,
    pub estado: String,
    pub pais: String,
    pub notas: String,
    pub fuente: String,
}

/// Insert payload: everything the caller supplies. The store assigns
/// `id` and `created_at`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewLead {
    pub tema: String,
    pub nombre: String,
    pub apellido: String,
    pub puesto: String,
    pub tel_trabajo: String,
    pub tel_movil: String,
    pub email: String,
    pub compania: String,
    pub web: String,
    pub calle1: String,
    pub calle2: String,
    pub calle3: String,
    pub ciudad: String,
    pub estado: String,
    pub pais: String,
    pub notas: String,
    pub fuente: String,
}

/// Source channel a lead was acquired through.
///
/// A UI-offered label set, stored as plain TEXT in the `fuente` column
/// and not enforced by the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fuente {
    Web,
    Evento,
    Referido,
    Campana,
    Llamada,
    Email,
    Otro,
}

impl Fuente {
    pub const ALL: [Fuente; 7] = [
        Fuente::Web,
        Fuente::Evento,
        Fuente::Referido,
        Fuente::Campana,
        Fuente::Llamada,
        Fuente::Email,
        Fuente::Otro,
    ];

    /// Label as stored in the database and shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Fuente::Web => "Web",
            Fuente::Evento => "Evento",
            Fuente::Referido => "Referido",
            Fuente::Campana => "Campaña",
            Fuente::Llamada => "Llamada",
            Fuente::Email => "Email",
            Fuente::Otro => "Otro",
        }
    }
}

impl std::fmt::Display for Fuente {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Fuente {
    type Err = eyre::Report;

    /// Case-insensitive on the label; `campana` is accepted for Campaña.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for fuente in Fuente::ALL {
            if fuente.label().to_lowercase() == lower {
                return Ok(fuente);
            }
        }
        if lower == "campana" {
            return Ok(Fuente::Campana);
        }
        Err(eyre!(
            "Unknown fuente: {} (expected one of Web, Evento, Referido, Campaña, Llamada, Email, Otro)",
            s
        ))
    }
}

/// Current local timestamp in the `created_at` format.
pub fn now_stamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
