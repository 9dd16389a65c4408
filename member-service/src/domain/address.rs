use serde::{Deserialize, Serialize};

/// WGS84 point, validated on construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(format!("latitude {latitude} out of range"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(format!("longitude {longitude} out of range"));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub address_id: i64,
    pub address_name: String,
    pub region_3depth_name: String,
    pub main_address_no: String,
    pub road_name: String,
    pub point: Coordinates,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub address_name: String,
    pub region_3depth_name: String,
    pub main_address_no: String,
    pub road_name: String,
    pub point: Coordinates,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddressCreateRequest {
    pub address_name: String,
    #[serde(rename = "region3depthName")]
    pub region_3depth_name: String,
    pub main_address_no: String,
    pub road_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TryFrom<AddressCreateRequest> for NewAddress {
    type Error = String;

    fn try_from(req: AddressCreateRequest) -> Result<Self, Self::Error> {
        if req.address_name.trim().is_empty() {
            return Err("address name must not be blank".to_string());
        }
        Ok(NewAddress {
            point: Coordinates::new(req.latitude, req.longitude)?,
            address_name: req.address_name.trim().to_owned(),
            region_3depth_name: req.region_3depth_name,
            main_address_no: req.main_address_no,
            road_name: req.road_name,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub address_id: i64,
    pub address_name: String,
    #[serde(rename = "region3depthName")]
    pub region_3depth_name: String,
    pub main_address_no: String,
    pub road_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Address> for AddressResponse {
    fn from(address: &Address) -> Self {
        Self {
            address_id: address.address_id,
            address_name: address.address_name.clone(),
            region_3depth_name: address.region_3depth_name.clone(),
            main_address_no: address.main_address_no.clone(),
            road_name: address.road_name.clone(),
            latitude: address.point.latitude(),
            longitude: address.point.longitude(),
        }
    }
}
