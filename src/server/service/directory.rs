//! Client for the external device directory.
//!
//! The directory is a read-only HTTP catalog of appliance brands and their models. It only
//! feeds the optional brand/model selection in the troubleshooting wizard.

use reqwest::Url;
use serde::de::DeserializeOwned;

use crate::{
    model::directory::{BrandDto, DeviceDto},
    server::error::{directory::DirectoryError, Error},
};

/// HTTP client for the device directory catalog
#[derive(Clone, Debug)]
pub struct DeviceDirectory {
    client: reqwest::Client,
    base_url: Url,
}

impl DeviceDirectory {
    /// Creates a directory client rooted at `base_url`.
    ///
    /// # Returns
    /// - `Ok(DeviceDirectory)` - Client ready for requests
    /// - `Err(Error::DirectoryError)` - `base_url` is not an absolute http(s) URL
    pub fn new(client: reqwest::Client, base_url: &str) -> Result<Self, Error> {
        let base_url =
            Url::parse(base_url).map_err(|e| DirectoryError::InvalidUrl(e.to_string()))?;

        if base_url.cannot_be_a_base() {
            return Err(DirectoryError::InvalidUrl(base_url.to_string()).into());
        }

        Ok(Self { client, base_url })
    }

    /// Every brand listed in the directory
    pub async fn get_all_brands(&self) -> Result<Vec<BrandDto>, Error> {
        let url = self.endpoint(&["brands"])?;

        Ok(self.get_json(url).await?)
    }

    /// Models of a single brand
    pub async fn get_brand_models(&self, brand_id: &str) -> Result<Vec<DeviceDto>, Error> {
        let url = self.endpoint(&["brands", brand_id, "models"])?;

        Ok(self.get_json(url).await?)
    }

    /// Appends percent-encoded path segments to the base URL
    fn endpoint(&self, segments: &[&str]) -> Result<Url, DirectoryError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| DirectoryError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);

        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, DirectoryError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::UpstreamStatus(status.as_u16()));
        }

        Ok(response.json::<T>().await?)
    }
}
