use serde::{Deserialize, Serialize};

/// A treatment a dentist offers. Slots for it are computed against that
/// dentist's timetable and appointments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub dentist_id: i64,
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub duration_minutes: i32,
    pub active: bool,
}

/// Wire shape of a service as the web and mobile clients read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: i64,
    #[serde(rename = "dentista_id")]
    pub dentist_id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio_centavos")]
    pub price_cents: i64,
    #[serde(rename = "duracion_minutos")]
    pub duration_minutes: i32,
    #[serde(rename = "activo")]
    pub active: bool,
}

impl From<Service> for ServiceResponse {
    fn from(service: Service) -> Self {
        Self {
            id: service.id,
            dentist_id: service.dentist_id,
            name: service.name,
            description: service.description,
            price_cents: service.price_cents,
            duration_minutes: service.duration_minutes,
            active: service.active,
        }
    }
}

