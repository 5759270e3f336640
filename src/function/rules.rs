//! The transform applied to desired composed resources.
//!
//! Entry rules rewrite resources already in the map; synthesizers add new
//! ones. Rules are independent of each other, so their order only matters
//! for readability of the logs.

use super::FunctionError;
use crate::input::Input;
use crate::resource::s3::{Bucket, BucketParameters, BucketSpec};
use crate::resource::{DesiredComposed, DesiredComposedResources, Name, Object, ObjectMeta, ResourceError, Scheme};
use tracing::debug;

/// Display name given to every existing Bucket.
pub const RENAMED_BUCKET_NAME: &str = "NewNameXYZ";

/// Key under which the extra bucket is added.
pub const EXTRA_BUCKET_KEY: &str = "dynamicXPlaneFnBucket";

/// Display name of the extra bucket.
pub const EXTRA_BUCKET_NAME: &str = "NewXPlaneFnBucket";

/// A rewrite applied to every matching resource already in the map.
pub trait EntryRule: Send + Sync {
    fn matches(&self, obj: &dyn Object) -> bool;

    fn apply(&self, obj: &mut dyn Object);
}

/// A resource added to the map when the input asks for it.
pub trait Synthesizer: Send + Sync {
    /// Reserved key for the new resource. An existing entry under it is replaced.
    fn key(&self) -> &str;

    fn wanted(&self, input: &Input) -> bool;

    fn build(&self, scheme: &Scheme) -> Result<DesiredComposed, ResourceError>;
}

/// Renames every resource of one kind.
#[derive(Debug, Clone)]
pub struct RenameKind {
    kind: String,
    name: String,
}

impl RenameKind {
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self { kind: kind.into(), name: name.into() }
    }
}

impl EntryRule for RenameKind {
    fn matches(&self, obj: &dyn Object) -> bool {
        obj.kind() == self.kind
    }

    fn apply(&self, obj: &mut dyn Object) {
        debug!(kind = %self.kind, from = obj.name(), to = %self.name, "Changing name on resource");
        obj.set_name(&self.name);
    }
}

/// Adds an S3 bucket when `extras.exampleFlag` is `ExtraBucket`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtraBucket;

impl Synthesizer for ExtraBucket {
    fn key(&self) -> &str {
        EXTRA_BUCKET_KEY
    }

    fn wanted(&self, input: &Input) -> bool {
        input.extras.wants_extra_bucket()
    }

    fn build(&self, scheme: &Scheme) -> Result<DesiredComposed, ResourceError> {
        let bucket = Bucket {
            metadata: ObjectMeta::named(EXTRA_BUCKET_NAME),
            spec: BucketSpec { for_provider: BucketParameters::default() },
        };
        Ok(DesiredComposed::new(scheme.from_typed(&bucket)?))
    }
}

/// An ordered set of entry rules and synthesizers.
pub struct Rules {
    entry_rules: Vec<Box<dyn EntryRule>>,
    synthesizers: Vec<Box<dyn Synthesizer>>,
}

impl Default for Rules {
    /// Renames Buckets and adds the extra bucket on request.
    fn default() -> Self {
        Self::new()
            .with_entry_rule(RenameKind::new("Bucket", RENAMED_BUCKET_NAME))
            .with_synthesizer(ExtraBucket)
    }
}

impl Rules {
    /// An empty rule set. Resources pass through untouched.
    pub fn new() -> Self {
        Self { entry_rules: Vec::new(), synthesizers: Vec::new() }
    }

    pub fn with_entry_rule(mut self, rule: impl EntryRule + 'static) -> Self {
        self.entry_rules.push(Box::new(rule));
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: impl Synthesizer + 'static) -> Self {
        self.synthesizers.push(Box::new(synthesizer));
        self
    }

    /// Builds the new desired composed resources. The input map is left as is.
    pub fn transform(
        &self,
        input: &Input,
        scheme: &Scheme,
        desired: &DesiredComposedResources,
    ) -> Result<DesiredComposedResources, FunctionError> {
        let mut out = DesiredComposedResources::new();

        for (name, entry) in desired {
            debug!(key = %name, "Checking on resource");
            let mut entry = entry.clone();
            for rule in &self.entry_rules {
                if rule.matches(&entry.resource) {
                    rule.apply(&mut entry.resource);
                }
            }
            out.insert(name.clone(), entry);
        }

        for synthesizer in self.synthesizers.iter().filter(|s| s.wanted(input)) {
            let key: Name = synthesizer.key().to_string();
            let built = synthesizer
                .build(scheme)
                .map_err(|source| FunctionError::Synthesis { key: key.clone(), source })?;
            debug!(%key, "Adding synthesized resource");
            out.insert(key, built);
        }

        Ok(out)
    }
}
