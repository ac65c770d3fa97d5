use serde::{Deserialize, Serialize};

use crate::models::{
    EventStatus, EventType, MaintenanceType, UserRole, VehicleCategory, VehicleStatus, VehicleType,
};

/// Valor de un catálogo tal y como lo consume el frontend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceItem {
    pub code: &'static str,
    pub display_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<VehicleCategory>,
}

impl ReferenceItem {
    fn new(code: &'static str, display_name: &'static str) -> Self {
        Self {
            code,
            display_name,
            description: None,
            category: None,
        }
    }

    fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

impl From<VehicleCategory> for ReferenceItem {
    fn from(category: VehicleCategory) -> Self {
        Self::new(category.code(), category.display_name())
    }
}

impl From<VehicleType> for ReferenceItem {
    fn from(vehicle_type: VehicleType) -> Self {
        let mut item = Self::new(vehicle_type.code(), vehicle_type.display_name());
        item.category = Some(vehicle_type.category());
        item
    }
}

impl From<VehicleStatus> for ReferenceItem {
    fn from(status: VehicleStatus) -> Self {
        Self::new(status.code(), status.display_name()).with_description(status.description())
    }
}

impl From<UserRole> for ReferenceItem {
    fn from(role: UserRole) -> Self {
        Self::new(role.code(), role.display_name()).with_description(role.description())
    }
}

impl From<EventType> for ReferenceItem {
    fn from(event_type: EventType) -> Self {
        Self::new(event_type.code(), event_type.display_name())
            .with_description(event_type.description())
    }
}

impl From<EventStatus> for ReferenceItem {
    fn from(status: EventStatus) -> Self {
        Self::new(status.code(), status.display_name()).with_description(status.description())
    }
}

impl From<MaintenanceType> for ReferenceItem {
    fn from(maintenance_type: MaintenanceType) -> Self {
        Self::new(maintenance_type.code(), maintenance_type.display_name())
            .with_description(maintenance_type.description())
    }
}

// Query de /api/reference/vehicle-types
#[derive(Debug, Default, Deserialize)]
pub struct VehicleTypeQuery {
    pub category: Option<VehicleCategory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_type_item_carries_category() {
        let item = ReferenceItem::from(VehicleType::Motogp);
        assert_eq!(item.code, "MOTOGP");
        assert_eq!(item.category, Some(VehicleCategory::Motorcycle));
        assert!(item.description.is_none());
    }

    #[test]
    fn test_role_item_carries_description() {
        let item = ReferenceItem::from(UserRole::Guest);
        assert_eq!(item.code, "GUEST");
        assert_eq!(item.description, Some(UserRole::Guest.description()));

        let json = serde_json::to_value(&item).unwrap();
        assert!(json.get("category").is_none());
    }
}
