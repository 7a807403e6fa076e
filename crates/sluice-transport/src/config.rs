//! Configuration for connectivity discovery and distribution.

use sluice_core::ResourceKind;

/// Configuration for [`connections`](crate::connections).
///
/// An acceptor that reports no capacity descriptors is still treated as
/// connected if it answers `can_fill` or `can_drain` for the probe kind.
/// The probe is a single stand-in kind, so an acceptor that rejects it
/// while accepting others is reported disconnected unless it describes
/// its tanks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConnectivityConfig {
    /// Resource kind used for the `can_fill` / `can_drain` probes.
    /// Default: [`ResourceKind::WATER`].
    pub probe: ResourceKind,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe: ResourceKind::WATER,
        }
    }
}

/// Configuration for a [`Distributor`](crate::Distributor).
///
/// Constructed via [`DistributorConfig::builder`] or [`Default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributorConfig {
    /// Seed for the shuffle RNG. Two distributors with the same seed make
    /// the same remainder choices for the same call sequence. Default: 0.
    pub seed: u64,
    /// Connectivity probing.
    pub connectivity: ConnectivityConfig,
}

impl Default for DistributorConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DistributorConfig {
    /// Create a new builder with default settings.
    pub fn builder() -> DistributorConfigBuilder {
        DistributorConfigBuilder {
            seed: 0,
            probe: ResourceKind::WATER,
        }
    }
}

/// Builder for [`DistributorConfig`].
#[derive(Clone, Debug)]
pub struct DistributorConfigBuilder {
    seed: u64,
    probe: ResourceKind,
}

impl DistributorConfigBuilder {
    /// Set the shuffle seed (default: 0).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the connectivity probe kind (default: water).
    pub fn probe(mut self, probe: ResourceKind) -> Self {
        self.probe = probe;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> DistributorConfig {
        DistributorConfig {
            seed: self.seed,
            connectivity: ConnectivityConfig { probe: self.probe },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_probes_with_water() {
        assert_eq!(ConnectivityConfig::default().probe, ResourceKind::WATER);
        assert_eq!(
            DistributorConfig::default().connectivity,
            ConnectivityConfig::default()
        );
    }

    #[test]
    fn builder_overrides() {
        let cfg = DistributorConfig::builder()
            .seed(99)
            .probe(ResourceKind::LAVA)
            .build();
        assert_eq!(cfg.seed, 99);
        assert_eq!(cfg.connectivity.probe, ResourceKind::LAVA);
    }
}
