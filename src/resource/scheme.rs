use super::{ResourceError, Unstructured};
use serde::Serialize;
use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::fmt;

/// Identifies a resource type on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupVersionKind {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
}

impl GroupVersionKind {
    pub const fn new(group: &'static str, version: &'static str, kind: &'static str) -> Self {
        Self { group, version, kind }
    }

    /// `group/version`, or just `version` for the core group.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.to_string()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Kind={}", self.api_version(), self.kind)
    }
}

/// Registry mapping typed resources to their wire identity.
///
/// Built once at startup and shared read-only. A type that was never
/// registered cannot be turned into a composed resource.
#[derive(Debug, Clone, Default)]
pub struct Scheme {
    kinds: HashMap<TypeId, GroupVersionKind>,
}

impl Scheme {
    pub fn builder() -> SchemeBuilder {
        SchemeBuilder::default()
    }

    pub fn kind_for<T: 'static>(&self) -> Option<GroupVersionKind> {
        self.kinds.get(&TypeId::of::<T>()).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Converts a typed resource into its generic form, stamping `apiVersion` and `kind`.
    pub fn from_typed<T: Serialize + 'static>(&self, obj: &T) -> Result<Unstructured, ResourceError> {
        let gvk = self
            .kind_for::<T>()
            .ok_or_else(|| ResourceError::NotRegistered(type_name::<T>()))?;

        let mut out = Unstructured::from_value(serde_json::to_value(obj)?)?;
        out.set_api_version(&gvk.api_version());
        out.set_kind(gvk.kind);
        Ok(out)
    }
}

/// Collects registrations before freezing them into a [`Scheme`].
#[derive(Debug, Default)]
pub struct SchemeBuilder {
    kinds: HashMap<TypeId, GroupVersionKind>,
}

impl SchemeBuilder {
    pub fn register<T: 'static>(mut self, gvk: GroupVersionKind) -> Self {
        self.kinds.insert(TypeId::of::<T>(), gvk);
        self
    }

    pub fn build(self) -> Scheme {
        Scheme { kinds: self.kinds }
    }
}
