use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub vehicle: String,
    pub service: ServiceType,
    pub status: BookingStatus,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booking that passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub name: String,
    pub vehicle: String,
    pub service: ServiceType,
    pub status: BookingStatus,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ServiceType {
    #[serde(rename = "Oil Change")]
    OilChange,
    #[serde(rename = "Brake Service")]
    BrakeService,
    #[serde(rename = "Tire Rotation")]
    TireRotation,
    #[serde(rename = "Engine Tune-up")]
    EngineTuneUp,
    #[serde(rename = "General Inspection")]
    GeneralInspection,
}

impl ServiceType {
    pub const ALL: [ServiceType; 5] = [
        ServiceType::OilChange,
        ServiceType::BrakeService,
        ServiceType::TireRotation,
        ServiceType::EngineTuneUp,
        ServiceType::GeneralInspection,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::OilChange => "Oil Change",
            ServiceType::BrakeService => "Brake Service",
            ServiceType::TireRotation => "Tire Rotation",
            ServiceType::EngineTuneUp => "Engine Tune-up",
            ServiceType::GeneralInspection => "General Inspection",
        }
    }

    /// Exact, case-sensitive match against the display spelling.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|service| service.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum BookingStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::InProgress => "In Progress",
            BookingStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Pending" => Some(BookingStatus::Pending),
            "In Progress" => Some(BookingStatus::InProgress),
            "Completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }
}
