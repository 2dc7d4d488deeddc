// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A catalog entry. Wire shape:
/// `{ "id": int|null, "nombre": string|null, "fecha_estreno": "YYYY-MM-DD"|null }`.
///
/// `id` is assigned by the store; a client-supplied id on creation is
/// ignored. Every stored record carries a non-null, unique `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Serie {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub fecha_estreno: Option<NaiveDate>,
}

impl Serie {
    #[must_use]
    pub fn new(nombre: Option<String>, fecha_estreno: Option<NaiveDate>) -> Self {
        Self {
            id: None,
            nombre,
            fecha_estreno,
        }
    }

    /// Overwrites exactly the non-null patch fields, in place.
    pub fn apply(&mut self, patch: &SeriePatch) {
        if let Some(nombre) = &patch.nombre {
            self.nombre = Some(nombre.clone());
        }
        if let Some(fecha) = patch.fecha_estreno {
            self.fecha_estreno = Some(fecha);
        }
    }
}

impl Display for Serie {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.nombre.as_deref().unwrap_or("(sin nombre)"))
    }
}

/// Partial update for a stored [`Serie`]. A `null` field means "no change";
/// this API cannot clear a field once set (known limitation of the wire
/// contract, kept as-is).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriePatch {
    #[serde(default)]
    pub nombre: Option<String>,
    #[serde(default)]
    pub fecha_estreno: Option<NaiveDate>,
}

impl SeriePatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none() && self.fecha_estreno.is_none()
    }
}
