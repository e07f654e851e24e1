use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::OnceLock;

use crate::session::BookSessionCommand;
use crate::{CoreError, CoreResult};

pub const MSG_NOM_REQUIS: &str = "Le nom est requis";
pub const MSG_PRENOM_REQUIS: &str = "Le prénom est requis";
pub const MSG_EMAIL_INVALIDE: &str = "L'adresse email n'est pas valide";
pub const MSG_TELEPHONE_INVALIDE: &str = "Le numéro de téléphone doit contenir 10 caractères";
pub const MSG_PARTICIPANTS_MIN: &str = "Le nombre de participants doit être au minimum de 1";
pub const MSG_PARTICIPANTS_MAX: &str = "Le nombre de participants doit être au maximum de 10";
pub const MSG_SESSION_REQUISE: &str = "Vous devez sélectionner au moins une session";
pub const MSG_SESSIONS_MAX: &str = "Le nombre maximum de sessions autorisées est de 3";

pub const MSG_DATE_FUTURE: &str = "La date/heure doit être future";
pub const MSG_PRIX_POSITIF: &str = "Le prix doit être strictement supérieur à zéro";
pub const MSG_KARTS_MIN: &str = "Le nombre de karts doit être strictement supérieur à zéro";
pub const MSG_KARTS_MAX: &str = "Le nombre de karts ne peut pas dépasser 10";

pub const MAX_PARTICIPANTS: u32 = 10;
pub const MAX_SESSIONS_PER_BOOKING: usize = 3;
pub const MAX_KARTS: u32 = 10;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"))
}

pub fn strip_whitespace(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

fn reject(message: &str) -> CoreError {
    CoreError::Validation(message.to_string())
}

/// Booking rules, checked in a fixed order: the first violated rule's
/// message is the one surfaced to the user.
pub fn validate_booking(command: &BookSessionCommand) -> CoreResult<()> {
    if command.nom.trim().is_empty() {
        return Err(reject(MSG_NOM_REQUIS));
    }
    if command.prenom.trim().is_empty() {
        return Err(reject(MSG_PRENOM_REQUIS));
    }
    if !email_pattern().is_match(&command.email) {
        return Err(reject(MSG_EMAIL_INVALIDE));
    }
    if strip_whitespace(&command.telephone).chars().count() != 10 {
        return Err(reject(MSG_TELEPHONE_INVALIDE));
    }
    if command.nombre_participants < 1 {
        return Err(reject(MSG_PARTICIPANTS_MIN));
    }
    if command.nombre_participants > MAX_PARTICIPANTS {
        return Err(reject(MSG_PARTICIPANTS_MAX));
    }
    if command.session_ids.is_empty() {
        return Err(reject(MSG_SESSION_REQUISE));
    }
    if command.session_ids.len() > MAX_SESSIONS_PER_BOOKING {
        return Err(reject(MSG_SESSIONS_MAX));
    }
    Ok(())
}

/// Session rules shared by create and update, same fixed ordering.
pub fn validate_session_fields(
    date_heure_debut: DateTime<Utc>,
    nombre_karts_disponibles: u32,
    prix: f64,
    now: DateTime<Utc>,
) -> CoreResult<()> {
    if date_heure_debut <= now {
        return Err(reject(MSG_DATE_FUTURE));
    }
    if prix <= 0.0 {
        return Err(reject(MSG_PRIX_POSITIF));
    }
    if nombre_karts_disponibles == 0 {
        return Err(reject(MSG_KARTS_MIN));
    }
    if nombre_karts_disponibles > MAX_KARTS {
        return Err(reject(MSG_KARTS_MAX));
    }
    Ok(())
}
