use crate::{
    client::util::api::{get_json, ApiError},
    model::directory::{BrandDto, DeviceDto},
};

pub async fn get_all_brands() -> Result<Vec<BrandDto>, ApiError> {
    get_json("/api/directory/brands").await
}

pub async fn get_brand_models(brand_id: &str) -> Result<Vec<DeviceDto>, ApiError> {
    let brand_id = url::form_urlencoded::byte_serialize(brand_id.as_bytes()).collect::<String>();

    get_json(&format!("/api/directory/brands/{}/models", brand_id)).await
}
