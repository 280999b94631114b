//! Configuration describing an interface set to build.

use crate::cv::CollectiveVariable;
use crate::interface_set::{Endpoints, GenericVolumeInterfaceSet, InterfaceSetError, VolumeFunc};
use crate::volume::Volume;

/// Kind of volume every interface is built from.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum VolumeKind {
    /// `minval <= cv < maxval`
    #[default]
    Range,
    /// Range on a periodic collective variable.
    Periodic {
        #[cfg_attr(feature = "serde", serde(default, with = "crate::serde_float::option"))]
        period_min: Option<f64>,
        #[cfg_attr(feature = "serde", serde(default, with = "crate::serde_float::option"))]
        period_max: Option<f64>,
    },
}

/// Description of a volume interface set.
///
/// With the `serde` feature it can be read from TOML:
///
/// ```toml
/// cv = "phi"
/// minvals = -180.0
/// maxvals = [-100.0, -80.0, -60.0]
///
/// [kind]
/// type = "periodic"
/// period_min = -180.0
/// period_max = 180.0
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InterfaceSetConfig {
    /// Name of the order parameter.
    pub cv: String,
    pub minvals: Endpoints,
    pub maxvals: Endpoints,
    pub kind: VolumeKind,
}

impl Default for InterfaceSetConfig {
    fn default() -> Self {
        Self {
            cv: "lambda".to_string(),
            minvals: Endpoints::Scalar(f64::NEG_INFINITY),
            maxvals: Endpoints::Sequence(Vec::new()),
            kind: VolumeKind::Range,
        }
    }
}

impl InterfaceSetConfig {
    /// Parses a configuration from TOML text.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> Result<Self, InterfaceSetError> {
        toml::from_str(text).map_err(|e| InterfaceSetError::Config(e.to_string()))
    }

    /// Volume function for `cv` matching [`kind`](Self::kind).
    pub fn volume_func(&self, cv: CollectiveVariable) -> VolumeFunc {
        match &self.kind {
            VolumeKind::Range => VolumeFunc::CvRange(cv),
            VolumeKind::Periodic {
                period_min,
                period_max,
            } => VolumeFunc::PeriodicCvRange {
                cv,
                period_min: *period_min,
                period_max: *period_max,
            },
        }
    }

    /// Builds the interface set with a new collective-variable handle.
    pub fn build(
        &self,
        intersect_with: Option<Volume>,
    ) -> Result<GenericVolumeInterfaceSet, InterfaceSetError> {
        self.build_with_cv(CollectiveVariable::new(self.cv.clone()), intersect_with)
    }

    /// Builds the interface set on an existing collective variable.
    pub fn build_with_cv(
        &self,
        cv: CollectiveVariable,
        intersect_with: Option<Volume>,
    ) -> Result<GenericVolumeInterfaceSet, InterfaceSetError> {
        if cv.name() != self.cv {
            return Err(InterfaceSetError::Config(format!(
                "configured for '{}', got '{}'",
                self.cv,
                cv.name()
            )));
        }
        GenericVolumeInterfaceSet::new(
            self.volume_func(cv),
            self.minvals.clone(),
            self.maxvals.clone(),
            intersect_with,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface_set::Direction;

    #[test]
    fn default_config_has_no_interfaces() {
        let config = InterfaceSetConfig::default();
        assert_eq!(
            config.build(None).unwrap_err(),
            InterfaceSetError::EmptyEndpoints
        );
    }

    #[test]
    fn build_range_set() {
        let config = InterfaceSetConfig {
            cv: "x".to_string(),
            maxvals: vec![0.1, 0.2, 0.3].into(),
            ..Default::default()
        };
        let set = config.build(None).unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(set.direction(), Direction::Increasing);
        assert_eq!(set.cv().map(|cv| cv.name()), Some("x"));
    }

    #[test]
    fn build_periodic_set_on_existing_cv() {
        let cv = CollectiveVariable::new("phi");
        let config = InterfaceSetConfig {
            cv: "phi".to_string(),
            minvals: (-180.0).into(),
            maxvals: vec![-100.0, -80.0].into(),
            kind: VolumeKind::Periodic {
                period_min: Some(-180.0),
                period_max: Some(180.0),
            },
        };
        let set = config.build_with_cv(cv.clone(), None).unwrap();
        assert_eq!(
            set[0],
            Volume::periodic(cv, -180.0, -100.0, Some(-180.0), Some(180.0))
        );
    }

    #[test]
    fn mismatched_cv_name_fails() {
        let config = InterfaceSetConfig {
            cv: "x".to_string(),
            maxvals: vec![1.0].into(),
            ..Default::default()
        };
        let err = config
            .build_with_cv(CollectiveVariable::new("y"), None)
            .unwrap_err();
        assert!(matches!(err, InterfaceSetError::Config(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_toml() {
        let config = InterfaceSetConfig::from_toml_str(
            r#"
            cv = "phi"
            minvals = -180.0
            maxvals = [-100.0, -80.0, -60.0]

            [kind]
            type = "periodic"
            period_min = -180.0
            period_max = 180.0
            "#,
        )
        .unwrap();
        assert_eq!(config.cv, "phi");
        assert_eq!(config.minvals, Endpoints::Scalar(-180.0));
        assert_eq!(
            config.kind,
            VolumeKind::Periodic {
                period_min: Some(-180.0),
                period_max: Some(180.0)
            }
        );
        let set = config.build(None).unwrap();
        assert_eq!(set.lambdas(), Some(&[-100.0, -80.0, -60.0][..]));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parse_toml_defaults_to_range() {
        let config =
            InterfaceSetConfig::from_toml_str("cv = \"x\"\nminvals = [3.0, 2.0]\nmaxvals = 4.0\n")
                .unwrap();
        assert_eq!(config.kind, VolumeKind::Range);
        let set = config.build(None).unwrap();
        assert_eq!(set.direction(), Direction::Decreasing);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn invalid_toml_is_config_error() {
        let err = InterfaceSetConfig::from_toml_str("cv = ").unwrap_err();
        assert!(matches!(err, InterfaceSetError::Config(_)));
    }
}
