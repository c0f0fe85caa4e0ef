use glam::Vec3A;

use crate::consts::track;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Checkpoint {
    pub pos: Vec3A,
    /// Position of this checkpoint in the lap order
    pub index: usize,
}

/// Inner and outer edge of the track ribbon at one centerline point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonEdge {
    pub inner: Vec3A,
    pub outer: Vec3A,
}

/// The closed course: centerline samples plus the ordered checkpoints.
///
/// Immutable once generated.
#[derive(Clone, Debug)]
pub struct Track {
    centerline: Vec<Vec3A>,
    checkpoints: Vec<Checkpoint>,
    width: f32,
}

impl Default for Track {
    fn default() -> Self {
        Self::generate(track::SEGMENTS, track::WIDTH)
    }
}

impl Track {
    /// Builds the default loop with `segments` centerline segments.
    ///
    /// The returned centerline holds `segments + 1` points, the last one closing the loop.
    #[must_use]
    pub fn generate(segments: usize, width: f32) -> Self {
        let segments = segments.max(3);
        let centerline = (0..=segments)
            .map(|i| {
                let angle = (i as f32 / segments as f32) * std::f32::consts::TAU;
                Vec3A::new(
                    angle.cos() * track::RADIUS_X + (angle * 2.0).sin() * track::WOBBLE_X,
                    track::SURFACE_Y,
                    angle.sin() * track::RADIUS_Z + (angle * 3.0).cos() * track::WOBBLE_Z,
                )
            })
            .collect();

        Self::from_parts(centerline, &track::CHECKPOINT_LOCS, width)
    }

    /// # Panics
    /// If `checkpoint_locs` is empty
    #[must_use]
    pub fn from_parts(centerline: Vec<Vec3A>, checkpoint_locs: &[Vec3A], width: f32) -> Self {
        assert!(
            !checkpoint_locs.is_empty(),
            "A track needs at least one checkpoint"
        );

        let checkpoints = checkpoint_locs
            .iter()
            .enumerate()
            .map(|(index, &pos)| Checkpoint { pos, index })
            .collect();

        Self {
            centerline,
            checkpoints,
            width,
        }
    }

    #[must_use]
    pub fn centerline(&self) -> &[Vec3A] {
        &self.centerline
    }

    #[must_use]
    pub fn checkpoints(&self) -> &[Checkpoint] {
        &self.checkpoints
    }

    #[must_use]
    pub fn checkpoint_amount(&self) -> usize {
        self.checkpoints.len()
    }

    /// The checkpoint for a monotonically increasing progress index
    #[must_use]
    pub fn checkpoint_for(&self, progress_idx: usize) -> &Checkpoint {
        &self.checkpoints[progress_idx % self.checkpoints.len()]
    }

    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Ribbon edges, offset along the radial tangent of each centerline point
    #[must_use]
    pub fn ribbon_edges(&self) -> Vec<RibbonEdge> {
        self.centerline
            .iter()
            .map(|&p| {
                let (sin, cos) = p.z.atan2(p.x).sin_cos();
                let offset = Vec3A::new(sin, 0.0, -cos) * self.width;
                RibbonEdge {
                    inner: p - offset,
                    outer: p + offset,
                }
            })
            .collect()
    }

    /// Wall posts along the centerline for the renderer
    #[must_use]
    pub fn wall_posts(&self) -> Vec<Vec3A> {
        let Some(last) = self.centerline.len().checked_sub(1) else {
            return Vec::new();
        };

        self.centerline[..last]
            .iter()
            .step_by(track::WALL_POST_STRIDE)
            .map(|p| Vec3A::new(p.x, track::WALL_POST_Y, p.z))
            .collect()
    }
}
