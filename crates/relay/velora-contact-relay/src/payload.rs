use serde::{Deserialize, Serialize};

use crate::error::RelayError;

/// One contact form submission. Field names match the form inputs; absent
/// fields deserialize to the empty string, which counts as missing.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ContactPayload {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub empresa: String,
    #[serde(default)]
    pub cargo: String,
    #[serde(default)]
    pub telefono: String,
    #[serde(default)]
    pub tipo_consulta: String,
    #[serde(default)]
    pub mensaje: String,
}

impl ContactPayload {
    /// `nombre`, `email` and `mensaje` are required; everything else is
    /// optional.
    pub fn validate(&self) -> Result<(), RelayError> {
        if self.nombre.is_empty() || self.email.is_empty() || self.mensaje.is_empty() {
            return Err(RelayError::MissingFields);
        }
        Ok(())
    }
}
