use serde::{Deserialize, Serialize};

use crate::models::time_of_day::TimeOfDay;

/// Shown to the client when the requested weekday has no working hours.
pub const DAY_OFF_MESSAGE: &str = "Día no laboral";

/// One candidate start time produced by the slot generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    pub time: TimeOfDay,
    pub available: bool,
    pub recommended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    Libre,
    Ocupado,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotResponse {
    pub hora: TimeOfDay,
    pub estado: SlotStatus,
    pub recomendado: bool,
}

impl From<&Slot> for SlotResponse {
    fn from(slot: &Slot) -> Self {
        Self {
            hora: slot.time,
            estado: if slot.available {
                SlotStatus::Libre
            } else {
                SlotStatus::Ocupado
            },
            recomendado: slot.recommended,
        }
    }
}

/// Body of the slot availability endpoint.
///
/// An empty `slots` list with a `mensaje` means the clinic is closed that
/// day. A fully booked day comes back with every slot `ocupado`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotsResponse {
    pub slots: Vec<SlotResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

impl SlotsResponse {
    pub fn day_off() -> Self {
        Self {
            slots: Vec::new(),
            mensaje: Some(DAY_OFF_MESSAGE.to_string()),
        }
    }

    pub fn from_slots(slots: &[Slot]) -> Self {
        Self {
            slots: slots.iter().map(SlotResponse::from).collect(),
            mensaje: None,
        }
    }
}
