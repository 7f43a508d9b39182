use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Payment state of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "estado_pago", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pendiente,
    Completado,
    Fallido,
}

/// A rider's registration. The price fields are frozen at creation and never
/// recomputed, so later category or phase edits cannot change what an
/// existing registration owes. `check_in_time` is the sole source of truth
/// for attendance and is set at most once.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Registration {
    pub registration_id: Uuid,
    pub nombre: String,
    pub apellido: String,
    pub cedula: String,
    pub numero_competicion: String,
    pub celular: String,
    pub correo: String,
    pub categorias: Vec<String>,
    pub precio_base: i64,
    pub descuento: i64,
    pub precio_final: i64,
    pub codigo_cupon: Option<String>,
    pub estado_pago: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub check_in_time: Option<DateTime<Utc>>,
}
