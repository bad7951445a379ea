use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A device row of the `DEVICE` table.
///
/// - `id` is assigned by the caller and never changes once the row exists.
///   It is `None` on records returned by a single-device fetch, which only
///   reads the name back.
/// - `name` is the only mutable column.
/// - `properties` is a reserved extension point. It is never written to or
///   read from the table, so every record coming out of a store carries an
///   empty map.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

impl DeviceRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    /// Record as read back by id: the name only, id left unset.
    pub fn unidentified(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            properties: HashMap::new(),
        }
    }

    pub fn with_properties(mut self, properties: HashMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Copy of this record with the properties map coalesced to empty.
    ///
    /// Properties have no column, so this is what a write path hands to the
    /// statement builder.
    pub fn normalized(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            properties: HashMap::new(),
        }
    }
}
