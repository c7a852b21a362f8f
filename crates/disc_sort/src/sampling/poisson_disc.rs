//! Poisson-disc (blue-noise) point generation.
use std::f32::consts::{PI, TAU};

use glam::Vec2;
use mint::Vector2;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::sampling::events::{EventSink, SamplingEvent, SamplingEventKind};
use crate::sampling::grid::SpatialGrid;
use crate::sampling::{next_down, rand01, rand_index};

/// Minimum distance used by [`PoissonDiscSampling::default`].
pub const DEFAULT_RADIUS: f32 = 5.0;
/// Attempts per frontier pick used by [`PoissonDiscSampling::default`].
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;
/// Region commonly sampled by the demos.
pub const DEFAULT_BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

/// Upper limit on acceleration grid cells for a single run.
const MAX_GRID_CELLS: usize = 1 << 26;

const GOLDEN_RATIO: f32 = 1.61803;

/// A generated sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
    /// False once the point can no longer spawn candidates. It stays in the output.
    pub active: bool,
}

impl Point {
    /// Create an active point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, active: true }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl From<Point> for Vec2 {
    fn from(point: Point) -> Self {
        point.position()
    }
}

impl From<Point> for Vector2<f32> {
    fn from(point: Point) -> Self {
        Vector2 {
            x: point.x,
            y: point.y,
        }
    }
}

/// How a candidate's offset from its parent is derived from the drawn angle and distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CandidateAngle {
    /// Angle uniform in `[0, 2π)`, offset `distance · (cos θ, sin θ)`.
    #[default]
    Uniform,
    /// Offset `distance · (cos 1.61803θ, sin 1.61803θ) · π`.
    ///
    /// Applies the offset formula of an older generator, evaluated in `f32` with the
    /// caller's RNG, so point sets differ from that generator's output. The angle
    /// scaling skews the direction distribution and the trailing `π` stretches the
    /// annulus to `[π·r, 2π·r]`, so the result is sparser than true Poisson-disc output.
    GoldenDistorted,
}

impl CandidateAngle {
    #[inline]
    fn offset(self, angle: f32, distance: f32) -> Vec2 {
        match self {
            CandidateAngle::Uniform => Vec2::from_angle(angle) * distance,
            CandidateAngle::GoldenDistorted => {
                let theta = angle * GOLDEN_RATIO;
                Vec2::new(
                    distance * theta.cos() * PI,
                    distance * theta.sin() * PI,
                )
            }
        }
    }
}

/// Result of a sampling run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct SamplingResult {
    /// Points in acceptance order. The seed is first.
    pub points: Vec<Point>,
    /// Candidates synthesized across all frontier picks.
    pub attempts: usize,
    /// Candidates that fell outside the region.
    pub rejected_out_of_bounds: usize,
    /// Candidates closer than the radius to an existing point.
    pub rejected_too_close: usize,
    /// Frontier points retired after exhausting their attempts.
    pub deactivated: usize,
}

/// Poisson-disc sampling over `[0, width) × [0, height)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PoissonDiscSampling {
    /// Minimum distance between samples in world units.
    pub radius: f32,
    /// Candidates tried around a frontier point before it is retired.
    pub max_attempts: usize,
    /// Candidate placement mode.
    pub angle_mode: CandidateAngle,
}

impl Default for PoissonDiscSampling {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            angle_mode: CandidateAngle::Uniform,
        }
    }
}

impl PoissonDiscSampling {
    /// Create a sampler with the given radius and attempt budget.
    pub fn new(radius: f32, max_attempts: usize) -> Self {
        Self {
            radius,
            max_attempts,
            ..Default::default()
        }
    }

    /// Sets the candidate placement mode.
    pub fn with_angle_mode(mut self, angle_mode: CandidateAngle) -> Self {
        self.angle_mode = angle_mode;
        self
    }

    /// Validates the configuration against a region, returning an error if invalid.
    pub fn validate(&self, bounds: Vector2<f32>) -> Result<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::invalid(format!(
                "radius must be finite and > 0, got {}",
                self.radius
            )));
        }
        if self.max_attempts == 0 {
            return Err(Error::invalid("max_attempts must be > 0"));
        }
        if !bounds.x.is_finite() || !bounds.y.is_finite() || bounds.x <= 0.0 || bounds.y <= 0.0 {
            return Err(Error::invalid(format!(
                "bounds must be finite and > 0 in both components, got {}x{}",
                bounds.x, bounds.y
            )));
        }

        let cell_size = self.radius / std::f32::consts::SQRT_2;
        let (w, h) = SpatialGrid::dimensions_for(cell_size, Vec2::from(bounds));
        match w.checked_mul(h) {
            Some(cells) if cells <= MAX_GRID_CELLS => Ok(()),
            _ => Err(Error::invalid(format!(
                "radius {} is too small for a {}x{} region",
                self.radius, bounds.x, bounds.y
            ))),
        }
    }

    /// Fill `bounds` with points at least `radius` apart.
    pub fn generate(&self, bounds: Vector2<f32>, rng: &mut dyn Rng) -> Result<Vec<Point>> {
        self.generate_with_events(bounds, rng, &mut ())
            .map(|result| result.points)
    }

    /// Like [`Self::generate`], reporting progress to `sink` and returning run counters.
    pub fn generate_with_events(
        &self,
        bounds: Vector2<f32>,
        rng: &mut dyn Rng,
        sink: &mut dyn EventSink,
    ) -> Result<SamplingResult> {
        self.validate(bounds)?;
        let bounds = Vec2::from(bounds);
        let mut state = SamplerState::new(self.radius, bounds);

        let seed = Vec2::new(
            (rand01(rng) * bounds.x).min(next_down(bounds.x)),
            (rand01(rng) * bounds.y).min(next_down(bounds.y)),
        );
        let index = state.accept(seed);
        if sink.wants(SamplingEventKind::Seeded) {
            sink.send(SamplingEvent::Seeded {
                index,
                position: seed,
            });
        }

        while !state.frontier.is_empty() {
            let slot = rand_index(rng, state.frontier.len());
            let parent = state.frontier[slot];

            match state.spawn_around(parent, self.max_attempts, self.angle_mode, rng) {
                Some(index) => {
                    if sink.wants(SamplingEventKind::Accepted) {
                        sink.send(SamplingEvent::Accepted {
                            index,
                            parent,
                            position: state.points[index].position(),
                        });
                    }
                }
                None => {
                    state.deactivate(slot);
                    if sink.wants(SamplingEventKind::Deactivated) {
                        sink.send(SamplingEvent::Deactivated { index: parent });
                    }
                }
            }
        }

        let result = state.into_result();
        debug!(
            "Poisson disc: {} points in {}x{} (r = {}, attempts = {}, out of bounds = {}, too close = {}).",
            result.points.len(),
            bounds.x,
            bounds.y,
            self.radius,
            result.attempts,
            result.rejected_out_of_bounds,
            result.rejected_too_close,
        );

        if sink.wants(SamplingEventKind::Finished) {
            sink.send(SamplingEvent::Finished {
                result: result.clone(),
            });
        }

        Ok(result)
    }
}

/// Fill `bounds` with points at least `radius` apart, trying up to `max_attempts`
/// candidates around each frontier point.
pub fn generate(
    radius: f32,
    max_attempts: usize,
    bounds: Vector2<f32>,
    rng: &mut dyn Rng,
) -> Result<Vec<Point>> {
    PoissonDiscSampling::new(radius, max_attempts).generate(bounds, rng)
}

/// Working state of one sampling run.
struct SamplerState {
    radius: f32,
    bounds: Vec2,
    grid: SpatialGrid,
    points: Vec<Point>,
    /// Indices into `points` that may still spawn candidates.
    frontier: Vec<usize>,
    attempts: usize,
    rejected_out_of_bounds: usize,
    rejected_too_close: usize,
    deactivated: usize,
}

impl SamplerState {
    fn new(radius: f32, bounds: Vec2) -> Self {
        Self {
            radius,
            bounds,
            grid: SpatialGrid::for_radius(radius, bounds),
            points: Vec::new(),
            frontier: Vec::new(),
            attempts: 0,
            rejected_out_of_bounds: 0,
            rejected_too_close: 0,
            deactivated: 0,
        }
    }

    #[inline]
    fn in_bounds(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.bounds.x && p.y >= 0.0 && p.y < self.bounds.y
    }

    fn accept(&mut self, position: Vec2) -> usize {
        let index = self.points.len();
        self.points.push(Point::new(position.x, position.y));
        self.grid.insert(index, position);
        self.frontier.push(index);
        index
    }

    fn spawn_around(
        &mut self,
        parent: usize,
        max_attempts: usize,
        angle_mode: CandidateAngle,
        rng: &mut dyn Rng,
    ) -> Option<usize> {
        let origin = self.points[parent].position();

        for _ in 0..max_attempts {
            self.attempts += 1;
            let angle = rand01(rng) * TAU;
            let distance = self.radius + rand01(rng) * self.radius;
            let candidate = origin + angle_mode.offset(angle, distance);

            if !self.in_bounds(candidate) {
                self.rejected_out_of_bounds += 1;
                continue;
            }
            if self
                .grid
                .has_neighbor_within(candidate, self.radius, &self.points)
            {
                self.rejected_too_close += 1;
                continue;
            }

            return Some(self.accept(candidate));
        }

        None
    }

    fn deactivate(&mut self, slot: usize) {
        let index = self.frontier.swap_remove(slot);
        self.points[index].active = false;
        self.deactivated += 1;
    }

    fn into_result(self) -> SamplingResult {
        SamplingResult {
            points: self.points,
            attempts: self.attempts,
            rejected_out_of_bounds: self.rejected_out_of_bounds,
            rejected_too_close: self.rejected_too_close,
            deactivated: self.deactivated,
        }
    }
}
