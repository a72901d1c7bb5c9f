use chrono::{DateTime, Utc};

use crate::models::{BookingStatus, NewBooking, ServiceType};

pub const NAME_MAX_CHARS: usize = 100;
pub const VEHICLE_MAX_CHARS: usize = 20;

/// Every rule a booking draft broke, in field order.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{}", .0.join(", "))]
pub struct ValidationErrors(pub Vec<String>);

/// Raw booking fields as they arrive from a client.
#[derive(Debug, Clone, Default)]
pub struct BookingDraft {
    pub name: String,
    pub vehicle: String,
    pub service: String,
    pub status: Option<BookingStatus>,
    pub date: Option<DateTime<Utc>>,
}

/// Normalizes a draft and checks it against the booking schema.
///
/// `name` and `vehicle` are trimmed and `vehicle` is upper-cased before the
/// length limits are applied. Missing `status` and `date` default to
/// `Pending` and `now`.
pub fn validate_booking(
    draft: BookingDraft,
    now: DateTime<Utc>,
) -> Result<NewBooking, ValidationErrors> {
    let name = draft.name.trim().to_string();
    let vehicle = draft.vehicle.trim().to_uppercase();
    let mut errors = Vec::new();

    if name.is_empty() {
        errors.push("Customer name is required".to_string());
    } else if name.chars().count() > NAME_MAX_CHARS {
        errors.push(format!("Name cannot exceed {NAME_MAX_CHARS} characters"));
    }

    if vehicle.is_empty() {
        errors.push("Vehicle number is required".to_string());
    } else if vehicle.chars().count() > VEHICLE_MAX_CHARS {
        errors.push(format!(
            "Vehicle number cannot exceed {VEHICLE_MAX_CHARS} characters"
        ));
    }

    let service = if draft.service.is_empty() {
        errors.push("Service type is required".to_string());
        None
    } else {
        let parsed = ServiceType::parse(&draft.service);
        if parsed.is_none() {
            errors.push("Invalid service type".to_string());
        }
        parsed
    };

    match service {
        Some(service) if errors.is_empty() => Ok(NewBooking {
            name,
            vehicle,
            service,
            status: draft.status.unwrap_or_default(),
            date: draft.date.unwrap_or(now),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, vehicle: &str, service: &str) -> BookingDraft {
        BookingDraft {
            name: name.to_string(),
            vehicle: vehicle.to_string(),
            service: service.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalizes_name_and_vehicle() {
        let now = Utc::now();
        let booking = validate_booking(draft("  Jane Doe ", " abc-123  ", "Oil Change"), now).unwrap();
        assert_eq!(booking.name, "Jane Doe");
        assert_eq!(booking.vehicle, "ABC-123");
        assert_eq!(booking.service, ServiceType::OilChange);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.date, now);
    }

    #[test]
    fn test_keeps_supplied_status_and_date() {
        let now = Utc::now();
        let earlier = now - chrono::Duration::days(1);
        let mut d = draft("Jane", "XYZ", "Tire Rotation");
        d.status = Some(BookingStatus::Completed);
        d.date = Some(earlier);

        let booking = validate_booking(d, now).unwrap();
        assert_eq!(booking.status, BookingStatus::Completed);
        assert_eq!(booking.date, earlier);
    }

    #[test]
    fn test_length_limits_are_inclusive() {
        let name = "n".repeat(NAME_MAX_CHARS);
        let vehicle = "v".repeat(VEHICLE_MAX_CHARS);
        assert!(validate_booking(draft(&name, &vehicle, "Brake Service"), Utc::now()).is_ok());
    }

    #[test]
    fn test_name_too_long() {
        let name = "n".repeat(NAME_MAX_CHARS + 1);
        let err = validate_booking(draft(&name, "ABC", "Brake Service"), Utc::now()).unwrap_err();
        assert_eq!(err.0, vec!["Name cannot exceed 100 characters"]);
    }

    #[test]
    fn test_vehicle_too_long() {
        let vehicle = "v".repeat(VEHICLE_MAX_CHARS + 1);
        let err = validate_booking(draft("Jane", &vehicle, "Brake Service"), Utc::now()).unwrap_err();
        assert_eq!(err.0, vec!["Vehicle number cannot exceed 20 characters"]);
    }

    #[test]
    fn test_limits_count_characters_not_bytes() {
        // 20 two-byte characters
        let vehicle = "é".repeat(VEHICLE_MAX_CHARS);
        assert!(validate_booking(draft("Jane", &vehicle, "Oil Change"), Utc::now()).is_ok());
    }

    #[test]
    fn test_whitespace_only_fields_are_required() {
        let err = validate_booking(draft("   ", "\t", "Oil Change"), Utc::now()).unwrap_err();
        assert_eq!(
            err.0,
            vec!["Customer name is required", "Vehicle number is required"]
        );
    }

    #[test]
    fn test_unknown_service_rejected() {
        let err = validate_booking(draft("Jane", "ABC", "Car Wash"), Utc::now()).unwrap_err();
        assert_eq!(err.0, vec!["Invalid service type"]);

        let err = validate_booking(draft("Jane", "ABC", "oil change"), Utc::now()).unwrap_err();
        assert_eq!(err.0, vec!["Invalid service type"]);
    }

    #[test]
    fn test_reports_every_violation_in_field_order() {
        let name = "n".repeat(101);
        let err = validate_booking(draft(&name, "", "Detailing"), Utc::now()).unwrap_err();
        assert_eq!(
            err.0,
            vec![
                "Name cannot exceed 100 characters",
                "Vehicle number is required",
                "Invalid service type",
            ]
        );
        assert_eq!(
            err.to_string(),
            "Name cannot exceed 100 characters, Vehicle number is required, Invalid service type"
        );
    }
}
