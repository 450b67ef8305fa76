//! Weighted blending of motion deltas (e.g. root motion sampled from several
//! animations) into a single transform.
//!
//! Only layers with a strictly positive weight contribute. Weights are
//! renormalized by their sum, so `{8, 2}` and `{0.8, 0.2}` give the same result.
//! - translation: weighted direction scaled by the weighted length, which keeps
//!   the travelled distance when deltas point in different directions
//! - rotation: weighted quaternion sum with a per-layer sign fix against the
//!   running accumulator, then normalized
//! - scale: component-wise weighted average

use log::{trace, warn};

use crate::config::BlendingConfig;
use crate::error::BlendingError;
use crate::math::{
    add3, add4, dot4, length3, neg4, normalize4_safe, scale3, scale4, IDENTITY_QUAT,
};
use crate::transform::Transform;

/// One weighted input of a [`MotionBlendingJob`].
///
/// `transform` stays `None` until the slot is bound; a job holding an unbound
/// slot does not validate. The default weight of 0 leaves the layer inactive.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MotionLayer<'a> {
    pub transform: Option<&'a Transform>,
    pub weight: f32,
}

impl<'a> MotionLayer<'a> {
    pub fn new(transform: &'a Transform, weight: f32) -> Self {
        Self {
            transform: Some(transform),
            weight,
        }
    }
}

/// Blends `layers` into `output`. Holds no state between runs.
#[derive(Debug, Default)]
pub struct MotionBlendingJob<'a> {
    pub layers: &'a [MotionLayer<'a>],
    pub output: Option<&'a mut Transform>,
    pub config: BlendingConfig,
}

impl<'a> MotionBlendingJob<'a> {
    pub fn new(layers: &'a [MotionLayer<'a>], output: &'a mut Transform) -> Self {
        Self {
            layers,
            output: Some(output),
            config: BlendingConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BlendingConfig) -> Self {
        self.config = config;
        self
    }

    /// True when an output is bound and every layer points at a transform.
    /// An empty layer list is valid.
    #[inline]
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Same rule as [`validate`](Self::validate), reporting the first problem found.
    pub fn check(&self) -> Result<(), BlendingError> {
        if self.output.is_none() {
            return Err(BlendingError::MissingOutput);
        }
        if let Some(index) = self.layers.iter().position(|l| l.transform.is_none()) {
            return Err(BlendingError::MissingLayerTransform { index });
        }
        Ok(())
    }

    /// Writes the blended transform to `output`, or the identity transform when
    /// no layer has a positive weight. An invalid job fails and leaves
    /// `output` untouched.
    pub fn run(&mut self) -> Result<(), BlendingError> {
        if let Err(err) = self.check() {
            warn!("motion blending job rejected: {err}");
            return Err(err);
        }
        let blended = blend_layers(self.layers, &self.config);
        let output = self.output.as_deref_mut().ok_or(BlendingError::MissingOutput)?;
        *output = blended;
        Ok(())
    }
}

fn blend_layers(layers: &[MotionLayer<'_>], config: &BlendingConfig) -> Transform {
    // Summed in f64 so large finite weights cannot overflow the total.
    let total_weight: f64 = layers
        .iter()
        .filter_map(active_layer)
        .map(|(_, weight)| f64::from(weight))
        .sum();
    if total_weight <= 0.0 {
        trace!("motion blending job: no active layer, writing identity");
        return Transform::IDENTITY;
    }

    let mut direction = [0.0f32; 3];
    let mut length = 0.0f32;
    let mut rotation = [0.0f32; 4];
    let mut scale = [0.0f32; 3];

    for (transform, weight) in layers.iter().filter_map(active_layer) {
        let w = (f64::from(weight) / total_weight) as f32;

        let len = length3(transform.translation);
        let unit = if len > 0.0 {
            scale3(transform.translation, len.recip())
        } else {
            [0.0; 3]
        };
        length += len * w;
        direction = add3(direction, scale3(unit, w));

        // q and -q are the same orientation: align each input with the
        // accumulated hemisphere before summing.
        let q = if dot4(rotation, transform.rotation) < 0.0 {
            neg4(transform.rotation)
        } else {
            transform.rotation
        };
        rotation = add4(rotation, scale4(q, w));

        scale = add3(scale, scale3(transform.scale, w));
    }

    Transform {
        translation: scale3(direction, length),
        rotation: normalize4_safe(rotation, IDENTITY_QUAT, config.degenerate_epsilon),
        scale,
    }
}

/// A layer contributes when it has a transform and a strictly positive weight
/// (NaN excluded).
fn active_layer<'a>(layer: &MotionLayer<'a>) -> Option<(&'a Transform, f32)> {
    match layer.transform {
        Some(transform) if layer.weight > 0.0 => Some((transform, layer.weight)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_reports_first_unbound_layer() {
        let t = Transform::IDENTITY;
        let layers = [
            MotionLayer::new(&t, 1.0),
            MotionLayer::default(),
            MotionLayer::default(),
        ];
        let mut out = Transform::IDENTITY;
        let job = MotionBlendingJob::new(&layers, &mut out);
        assert_eq!(
            job.check(),
            Err(BlendingError::MissingLayerTransform { index: 1 })
        );
    }

    #[test]
    fn nan_weight_is_inactive() {
        let t = Transform::from_translation([5.0, 0.0, 0.0]);
        let layers = [MotionLayer::new(&t, f32::NAN)];
        let blended = blend_layers(&layers, &BlendingConfig::default());
        assert_eq!(blended, Transform::IDENTITY);
    }

    #[test]
    fn tiny_translation_keeps_its_direction() {
        let t = Transform::from_translation([1e-9, 0.0, 0.0]);
        let layers = [MotionLayer::new(&t, 1.0)];
        let blended = blend_layers(&layers, &BlendingConfig::default());
        assert!((blended.translation[0] - 1e-9).abs() <= 1e-15);
        assert_eq!(&blended.translation[1..], &[0.0, 0.0]);
    }

    #[test]
    fn huge_weights_do_not_overflow_the_total() {
        let t = Transform {
            translation: [2.0, 0.0, 0.0],
            scale: [2.0, 2.0, 2.0],
            ..Transform::IDENTITY
        };
        let layers = [MotionLayer::new(&t, f32::MAX), MotionLayer::new(&t, f32::MAX)];
        let blended = blend_layers(&layers, &BlendingConfig::default());
        assert_eq!(blended.translation, [2.0, 0.0, 0.0]);
        assert_eq!(blended.scale, [2.0, 2.0, 2.0]);
        assert_eq!(blended.rotation, IDENTITY_QUAT);
    }

    #[test]
    fn degenerate_rotation_falls_back_to_identity() {
        let t = Transform::from_rotation([0.0; 4]);
        let layers = [MotionLayer::new(&t, 1.0)];
        let blended = blend_layers(&layers, &BlendingConfig::default());
        assert_eq!(blended.rotation, IDENTITY_QUAT);
    }
}
