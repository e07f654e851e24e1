use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One bookable time slot, as returned by the read endpoint.
///
/// `date_heure_debut` stays a display string on the read side; it
/// pre-populates the update form as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub session_id: String,
    pub date_heure_debut: String,
    pub duree: u32,
    pub nombre_karts_disponibles: u32,
    pub prix: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionCommand {
    pub date_heure_debut: DateTime<Utc>,
    pub duree: u32,
    pub nombre_karts_disponibles: u32,
    pub prix: f64,
}

/// The session id travels in the URL, never in the body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSessionCommand {
    #[serde(skip_serializing)]
    pub session_id: String,
    pub date_heure_debut: DateTime<Utc>,
    pub duree: u32,
    pub nombre_karts_disponibles: u32,
    pub prix: f64,
}

#[derive(Debug, Clone)]
pub struct BookSessionCommand {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub nombre_participants: u32,
    pub session_ids: Vec<u32>,
}

/// Wire payload for a booking: same fields as the command, with the
/// phone number stripped of whitespace.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
    pub nombre_participants: u32,
    pub session_ids: Vec<u32>,
}

impl BookingPayload {
    pub fn from_command(command: &BookSessionCommand) -> Self {
        Self {
            nom: command.nom.clone(),
            prenom: command.prenom.clone(),
            email: command.email.clone(),
            telephone: crate::validation::strip_whitespace(&command.telephone),
            nombre_participants: command.nombre_participants,
            session_ids: command.session_ids.clone(),
        }
    }
}
