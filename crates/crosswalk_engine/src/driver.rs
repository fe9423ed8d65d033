//! Recursive conversion between two runtimes.
//!
//! [`convert`] is the plain algorithm: it dispatches on the source tag,
//! recurses into collections and never fails. [`Driver`] runs the same walk
//! under a [`ConvertConfig`], failing early on limits or unclassifiable
//! values and reporting where it stopped.

use crosswalk_foundation::{
    ConversionLimit, DiagnosticKind, DictBuilder, Error, ListBuilder, PathSegment, Result,
    TypeTag, ValueConverter,
};

use crate::config::ConvertConfig;
use crate::stats::ConvertStats;

// =============================================================================
// Plain conversion
// =============================================================================

/// Converts `value` from the source runtime into the target runtime.
///
/// Unclassifiable values become the target's null, with a diagnostic left on
/// `source`. Map entries whose keys become equal in the target keep the last
/// value, with a diagnostic left on `target`. No depth or size limits apply
/// and cycles are not detected.
///
/// ```
/// use crosswalk_engine::convert;
/// use crosswalk_json::JsonConverter;
/// use crosswalk_variant::{Variant, VariantConverter};
/// use serde_json::json;
///
/// let mut json = JsonConverter::new();
/// let mut variant = VariantConverter::new();
/// let v = convert(&json!({"n": 1}), &mut json, &mut variant);
/// let n = v.as_map().and_then(|m| m.get("n")).cloned();
/// assert_eq!(n, Some(Variant::Int(1)));
/// ```
pub fn convert<S, T>(value: &S::Value, source: &mut S, target: &mut T) -> T::Value
where
    S: ValueConverter,
    T: ValueConverter,
{
    match source.classify(value) {
        TypeTag::List => {
            let items = source.list_iter(value);
            let mut builder = target.new_list_builder();
            builder.reserve(items.len());
            for (_, item) in items {
                let item = convert(&*item, source, target);
                builder.append(item);
            }
            builder.finish()
        }
        TypeTag::Dict => {
            let mut builder = target.new_dict_builder();
            for (index, (key, entry)) in source.dict_iter(value).enumerate() {
                let key = convert(&*key, source, target);
                let entry = convert(&*entry, source, target);
                set_entry(target, &mut builder, index, key, entry);
            }
            builder.finish()
        }
        tag => convert_scalar(tag, value, source, target),
    }
}

/// Converts a scalar or null. Collection tags fall back to null; callers
/// handle those before getting here.
fn convert_scalar<S, T>(
    tag: TypeTag,
    value: &S::Value,
    source: &mut S,
    target: &mut T,
) -> T::Value
where
    S: ValueConverter,
    T: ValueConverter,
{
    match tag {
        TypeTag::Boolean => target.new_boolean(source.as_boolean(value)),
        TypeTag::Integer => target.new_integer(source.as_integer(value)),
        TypeTag::Floating => target.new_floating(source.as_floating(value)),
        TypeTag::String => {
            let text = source.as_string(value);
            target.new_string(text)
        }
        TypeTag::List | TypeTag::Dict | TypeTag::None => target.new_none(),
    }
}

/// Adds an entry to `builder`, recording a collision on `target` when it
/// replaces an earlier one.
fn set_entry<T>(
    target: &mut T,
    builder: &mut T::DictBuilder,
    entry: usize,
    key: T::Value,
    value: T::Value,
)
where
    T: ValueConverter,
{
    if builder.set(key, value).is_some() {
        target
            .diagnostics_mut()
            .record(T::RUNTIME, DiagnosticKind::KeyCollision { entry });
    }
}

// =============================================================================
// Checked conversion
// =============================================================================

/// Conversion under limits.
///
/// Runs the same algorithm as [`convert`] but stops at the first value that
/// breaks the configured limits. Anything built so far is dropped, so no
/// target value leaks out of a failed call.
#[derive(Clone, Debug, Default)]
pub struct Driver {
    config: ConvertConfig,
    stats: ConvertStats,
}

impl Driver {
    /// Creates a driver with the given configuration.
    #[must_use]
    pub fn new(config: ConvertConfig) -> Self {
        Self {
            config,
            stats: ConvertStats::default(),
        }
    }

    /// Creates a driver after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if [`ConvertConfig::validate`] rejects `config`.
    pub fn try_new(config: ConvertConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Counters from the most recent conversion, including a failed one.
    #[must_use]
    pub fn stats(&self) -> &ConvertStats {
        &self.stats
    }

    /// Converts `value` from the source runtime into the target runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::LimitExceeded`](crosswalk_foundation::ErrorKind::LimitExceeded)
    /// when the value is nested deeper than `max_depth` or holds more than
    /// `max_values` values, and
    /// [`ErrorKind::Unclassifiable`](crosswalk_foundation::ErrorKind::Unclassifiable)
    /// for an unclassifiable value in strict mode. The error's path names the
    /// offending value.
    pub fn convert<S, T>(
        &mut self,
        value: &S::Value,
        source: &mut S,
        target: &mut T,
    ) -> Result<T::Value>
    where
        S: ValueConverter,
        T: ValueConverter,
    {
        self.stats = ConvertStats::default();
        let result = self.visit(value, 0, source, target);
        match &result {
            Ok(_) => tracing::debug!(
                source = S::RUNTIME,
                target = T::RUNTIME,
                values = self.stats.values,
                depth = self.stats.max_depth,
                "conversion finished"
            ),
            Err(err) => tracing::debug!(
                source = S::RUNTIME,
                target = T::RUNTIME,
                values = self.stats.values,
                error = %err,
                "conversion aborted"
            ),
        }
        result
    }

    fn visit<S, T>(
        &mut self,
        value: &S::Value,
        depth: usize,
        source: &mut S,
        target: &mut T,
    ) -> Result<T::Value>
    where
        S: ValueConverter,
        T: ValueConverter,
    {
        if let Some(limit) = self.config.max_depth {
            if depth > limit {
                return Err(Error::limit_exceeded(ConversionLimit::MaxDepth { limit }));
            }
        }
        if let Some(limit) = self.config.max_values {
            if self.stats.values >= limit {
                return Err(Error::limit_exceeded(ConversionLimit::MaxValues { limit }));
            }
        }

        let recorded = source.diagnostics().total();
        let tag = source.classify(value);
        self.stats.record(tag, depth);

        match tag {
            TypeTag::List => {
                let items = source.list_iter(value);
                let mut builder = target.new_list_builder();
                builder.reserve(items.len());
                for (index, item) in items {
                    let item = self
                        .visit(&*item, depth + 1, source, target)
                        .map_err(|err| err.within(PathSegment::Index(index)))?;
                    builder.append(item);
                }
                Ok(builder.finish())
            }
            TypeTag::Dict => {
                let mut builder = target.new_dict_builder();
                for (entry, (key, item)) in source.dict_iter(value).enumerate() {
                    let key = self
                        .visit(&*key, depth + 1, source, target)
                        .map_err(|err| err.within(PathSegment::Entry(entry)))?;
                    let item = self
                        .visit(&*item, depth + 1, source, target)
                        .map_err(|err| err.within(PathSegment::Entry(entry)))?;
                    set_entry(target, &mut builder, entry, key, item);
                }
                Ok(builder.finish())
            }
            TypeTag::None if self.config.strict && source.diagnostics().total() > recorded => {
                let description = source
                    .diagnostics()
                    .latest()
                    .map_or_else(|| String::from("unclassifiable value"), |d| d.kind.to_string());
                Err(Error::unclassifiable(S::RUNTIME, description))
            }
            tag => Ok(convert_scalar(tag, value, source, target)),
        }
    }
}
