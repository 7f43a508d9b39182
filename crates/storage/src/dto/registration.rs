use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::Registration;

/// Request payload for creating a registration
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRegistrationRequest {
    #[validate(length(min = 1, max = 255, message = "El nombre es obligatorio"))]
    pub nombre: String,

    #[validate(length(min = 1, max = 255, message = "El apellido es obligatorio"))]
    pub apellido: String,

    #[validate(length(min = 5, max = 32, message = "La cédula debe tener al menos 5 caracteres"))]
    pub cedula: String,

    #[validate(length(min = 1, max = 16, message = "El número de competición es obligatorio"))]
    pub numero_competicion: String,

    #[validate(length(min = 10, max = 20, message = "El celular debe tener al menos 10 dígitos"))]
    pub celular: String,

    #[validate(email(message = "Correo inválido"))]
    pub correo: String,

    pub categorias: Vec<String>,

    pub codigo_cupon: Option<String>,
}

/// Created registration plus the signed QR payload handed to the rider.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationCreatedResponse {
    #[serde(flatten)]
    pub registration: Registration,
    pub qr_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationListResponse {
    pub registrations: Vec<Registration>,
    pub total: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateRegistrationRequest {
        CreateRegistrationRequest {
            nombre: "Ana".to_string(),
            apellido: "Rojas".to_string(),
            cedula: "10203040".to_string(),
            numero_competicion: "42".to_string(),
            celular: "3001234567".to_string(),
            correo: "ana@example.com".to_string(),
            categorias: vec!["Karts".to_string()],
            codigo_cupon: None,
        }
    }

    #[test]
    fn complete_rider_payload_passes_validation() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let mut req = request();
        req.correo = "no-es-un-correo".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn short_cedula_is_rejected() {
        let mut req = request();
        req.cedula = "123".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn short_celular_is_rejected() {
        let mut req = request();
        req.celular = "12345".to_string();
        assert!(req.validate().is_err());
    }
}
