use barbershop_shared::ClientIdentity;
use gloo::storage::{errors::StorageError, LocalStorage, Storage};
use serde_json::Value;

use crate::config::USER_STORAGE_KEY;
use crate::error::SessionError;

/// Identity of the signed-in client, resolved once at startup and handed to
/// pages through a context.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    identity: Result<ClientIdentity, SessionError>,
}

impl Session {
    /// Reads the `user` entry from browser local storage.
    pub fn load() -> Self {
        let identity = match LocalStorage::get::<Value>(USER_STORAGE_KEY) {
            Ok(value) => identity_from_value(value),
            Err(StorageError::KeyNotFound(_)) => Err(SessionError::Missing),
            Err(e) => Err(SessionError::Malformed(e.to_string())),
        };

        match &identity {
            Ok(client) => tracing::info!("Signed in as client {}", client.id),
            Err(e) => tracing::warn!("No usable client identity: {}", e),
        }

        Self { identity }
    }

    #[cfg(test)]
    pub fn signed_in(identity: ClientIdentity) -> Self {
        Self {
            identity: Ok(identity),
        }
    }

    pub fn from_value(value: Value) -> Self {
        Self {
            identity: identity_from_value(value),
        }
    }

    pub fn identity(&self) -> Result<&ClientIdentity, &SessionError> {
        self.identity.as_ref()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self {
            identity: Err(SessionError::Missing),
        }
    }
}

fn identity_from_value(value: Value) -> Result<ClientIdentity, SessionError> {
    match &value {
        Value::Null => return Err(SessionError::Missing),
        Value::Object(fields) => match fields.get("id") {
            None | Some(Value::Null) => return Err(SessionError::BlankId),
            Some(_) => {}
        },
        other => {
            return Err(SessionError::Malformed(format!(
                "expected an object, found {}",
                other
            )))
        }
    }

    let identity: ClientIdentity =
        serde_json::from_value(value).map_err(|e| SessionError::Malformed(e.to_string()))?;

    if identity.id.is_blank() {
        return Err(SessionError::BlankId);
    }

    Ok(identity)
}
