//! Engine configuration.
//!
//! [`StencilConfig`] is built with [`StencilConfig::builder`] and handed
//! to [`StencilEngine::new`](crate::StencilEngine::new). Every setting has
//! a default, so `StencilConfig::default()` is a complete configuration.

/// What to do with an axis of extent 1, where neither a centered nor a
/// one-sided difference can be formed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DegenerateAxisPolicy {
    /// Treat the axis as boundary with zero derivative along it.
    #[default]
    Zero,
    /// Fail with [`StencilError::DegenerateAxis`](nabla_core::StencilError::DegenerateAxis)
    /// before computing anything.
    Reject,
}

/// Configuration for a [`StencilEngine`](crate::StencilEngine).
///
/// # Examples
///
/// ```
/// use nabla_stencil::{DegenerateAxisPolicy, StencilConfig};
///
/// let config = StencilConfig::builder()
///     .degenerate_axis(DegenerateAxisPolicy::Reject)
///     .reject_non_finite(true)
///     .build();
/// assert_eq!(config.degenerate_axis, DegenerateAxisPolicy::Reject);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StencilConfig {
    /// Handling of extent-1 axes. Default: [`DegenerateAxisPolicy::Zero`].
    pub degenerate_axis: DegenerateAxisPolicy,
    /// Reject inputs holding NaN or infinite samples. Default: `false`.
    pub reject_non_finite: bool,
}

/// Builder for [`StencilConfig`].
#[derive(Clone, Debug, Default)]
pub struct StencilConfigBuilder {
    degenerate_axis: DegenerateAxisPolicy,
    reject_non_finite: bool,
}

impl StencilConfig {
    /// Create a builder starting from the defaults.
    pub fn builder() -> StencilConfigBuilder {
        StencilConfigBuilder::default()
    }
}

impl StencilConfigBuilder {
    /// Set the degenerate-axis policy.
    pub fn degenerate_axis(mut self, policy: DegenerateAxisPolicy) -> Self {
        self.degenerate_axis = policy;
        self
    }

    /// Reject inputs containing NaN or infinite samples.
    pub fn reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }

    /// Finish the configuration.
    pub fn build(self) -> StencilConfig {
        StencilConfig {
            degenerate_axis: self.degenerate_axis,
            reject_non_finite: self.reject_non_finite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        assert_eq!(StencilConfig::builder().build(), StencilConfig::default());
        assert_eq!(
            StencilConfig::default().degenerate_axis,
            DegenerateAxisPolicy::Zero
        );
        assert!(!StencilConfig::default().reject_non_finite);
    }

    #[test]
    fn builder_overrides() {
        let config = StencilConfig::builder()
            .reject_non_finite(true)
            .degenerate_axis(DegenerateAxisPolicy::Reject)
            .build();
        assert!(config.reject_non_finite);
        assert_eq!(config.degenerate_axis, DegenerateAxisPolicy::Reject);
    }
}
