//! Per-browser device identity.
//!
//! Analytics events carry a device id that identifies the browser profile across sessions
//! and logins. The id is created once, on first use, and read back on every later request.

use std::future::Future;

use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use uuid::Uuid;

use crate::server::error::Error;

/// Session key of the device id
pub const SESSION_DEVICE_ID_KEY: &str = "fixdesk:device:id";

/// Source of the stable device identifier attached to analytics events
pub trait DeviceIdentity {
    /// Returns the device id, creating and persisting it on first use
    fn device_id(&self) -> impl Future<Output = Result<Uuid, Error>> + Send;
}

/// Device id as stored in the session
#[derive(Default, Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionDeviceId(pub Uuid);

impl SessionDeviceId {
    /// Get device ID from session
    pub async fn get(session: &Session) -> Result<Option<Uuid>, Error> {
        Ok(session
            .get::<SessionDeviceId>(SESSION_DEVICE_ID_KEY)
            .await?
            .map(|SessionDeviceId(id)| id))
    }

    /// Get device ID from session, generating and storing a new one when absent
    pub async fn get_or_create(session: &Session) -> Result<Uuid, Error> {
        if let Some(device_id) = Self::get(session).await? {
            return Ok(device_id);
        }

        let device_id = Uuid::new_v4();
        session
            .insert(SESSION_DEVICE_ID_KEY, SessionDeviceId(device_id))
            .await?;

        Ok(device_id)
    }
}

/// Device identity backed by the long-lived browser session
#[derive(Clone, Debug)]
pub struct SessionDeviceIdentity {
    session: Session,
}

impl SessionDeviceIdentity {
    /// Creates a new instance of [`SessionDeviceIdentity`]
    pub fn new(session: Session) -> Self {
        Self { session }
    }
}

impl DeviceIdentity for SessionDeviceIdentity {
    fn device_id(&self) -> impl Future<Output = Result<Uuid, Error>> + Send {
        SessionDeviceId::get_or_create(&self.session)
    }
}
