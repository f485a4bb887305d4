use serde::{Deserialize, Serialize};

/// An appliance brand listed in the device directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct BrandDto {
    pub id: String,
    pub name: String,
}

/// An appliance model belonging to a brand in the device directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct DeviceDto {
    pub id: String,
    pub name: String,
}
