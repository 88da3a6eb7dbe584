use std::f64::consts::PI;
use std::iter::FusedIterator;

use log::{debug, info, warn};

use super::config::BubbleConfig;
use super::error::BubbleError;
use super::scale::{RadiusScale, ScaleBounds};
use super::types::{DataPoint, LayoutEvent, LayoutNode, SimulationState};

const INITIAL_RADIUS: f64 = 10.0;

/// Force-relaxed circle packing: centering along both axes plus pairwise
/// collision, cooled by `alpha` until it drops below `alpha_min`.
pub struct BubbleLayout {
	config: BubbleConfig,
	nodes: Vec<LayoutNode>,
	scale: Option<RadiusScale>,
	state: SimulationState,
	alpha: f64,
	ticks: usize,
	jiggle: Lcg,
}

impl BubbleLayout {
	/// Idle engine with the given tuning.
	pub fn new(config: BubbleConfig) -> Self {
		Self {
			config,
			nodes: Vec::new(),
			scale: None,
			state: SimulationState::Idle,
			alpha: 1.0,
			ticks: 0,
			jiggle: Lcg::default(),
		}
	}

	/// Tuning in use.
	pub fn config(&self) -> &BubbleConfig {
		&self.config
	}

	/// Current lifecycle state.
	pub fn state(&self) -> SimulationState {
		self.state
	}

	/// Latest positions.
	pub fn nodes(&self) -> &[LayoutNode] {
		&self.nodes
	}

	/// Radius scale of the current solve, if any.
	pub fn scale(&self) -> Option<RadiusScale> {
		self.scale
	}

	/// Steps taken in the current solve.
	pub fn ticks(&self) -> usize {
		self.ticks
	}

	/// Drops any in-flight solve and returns to `Idle`.
	pub fn reset(&mut self) {
		self.nodes.clear();
		self.scale = None;
		self.state = SimulationState::Idle;
		self.alpha = 1.0;
		self.ticks = 0;
		self.jiggle = Lcg::default();
	}

	/// Seeds a fresh solve. An empty dataset leaves the engine `Idle`.
	pub fn start(&mut self, dataset: &[DataPoint]) -> Result<(), BubbleError> {
		self.reset();
		validate(dataset)?;

		let Some(bounds) = ScaleBounds::from_amounts(
			dataset.iter().map(|d| d.amount),
			self.config.bounds_padding,
		) else {
			debug!("empty dataset, nothing to lay out");
			return Ok(());
		};
		if bounds.is_degenerate() {
			debug!("degenerate scale bounds {bounds:?}, using midpoint radius");
		}
		let scale = RadiusScale::new(bounds, self.config.radius_range);

		let golden = PI * (3.0 - 5f64.sqrt());
		self.nodes = dataset
			.iter()
			.enumerate()
			.map(|(i, datum)| {
				let (r, angle) = (INITIAL_RADIUS * (0.5 + i as f64).sqrt(), i as f64 * golden);
				LayoutNode {
					datum: datum.clone(),
					x: r * angle.cos(),
					y: r * angle.sin(),
					vx: 0.0,
					vy: 0.0,
					radius: scale.radius(datum.amount),
				}
			})
			.collect();
		self.scale = Some(scale);
		self.state = SimulationState::Running;
		info!("bubble layout started with {} nodes", self.nodes.len());
		Ok(())
	}

	/// Starts a solve and returns its event stream.
	pub fn layout(&mut self, dataset: &[DataPoint]) -> Result<Frames<'_>, BubbleError> {
		self.start(dataset)?;
		Ok(Frames { layout: self })
	}

	/// Advances one step. Returns `None` unless a solve is running.
	pub fn step(&mut self) -> Option<LayoutEvent> {
		if self.state != SimulationState::Running {
			return None;
		}
		self.ticks += 1;
		self.alpha -= self.alpha * self.config.alpha_decay;

		self.apply_centering();
		self.apply_collision();

		let keep = 1.0 - self.config.velocity_decay;
		for node in &mut self.nodes {
			node.vx *= keep;
			node.vy *= keep;
			node.x += node.vx;
			node.y += node.vy;
		}

		let snapshot = self.nodes.clone();
		if self.alpha < self.config.alpha_min {
			debug!("bubble layout settled after {} ticks", self.ticks);
		} else if self.ticks >= self.config.max_ticks {
			warn!(
				"bubble layout hit the {} tick cap (alpha {:.4}), settling early",
				self.config.max_ticks, self.alpha
			);
		} else {
			return Some(LayoutEvent::Tick(snapshot));
		}
		self.state = SimulationState::Settled;
		Some(LayoutEvent::Ready(snapshot))
	}

	fn apply_centering(&mut self) {
		let (sx, sy) = (
			self.config.strength_x * self.alpha,
			self.config.strength_y * self.alpha,
		);
		for node in &mut self.nodes {
			node.vx -= node.x * sx;
			node.vy -= node.y * sy;
		}
	}

	fn apply_collision(&mut self) {
		let (pad, strength) = (
			self.config.collision_padding / 2.0,
			self.config.collision_strength,
		);
		let n = self.nodes.len();
		for i in 0..n {
			let ri = self.nodes[i].radius + pad;
			let (xi, yi) = (
				self.nodes[i].x + self.nodes[i].vx,
				self.nodes[i].y + self.nodes[i].vy,
			);
			for j in (i + 1)..n {
				let rj = self.nodes[j].radius + pad;
				let r = ri + rj;
				let mut dx = xi - self.nodes[j].x - self.nodes[j].vx;
				let mut dy = yi - self.nodes[j].y - self.nodes[j].vy;
				let mut l = dx * dx + dy * dy;
				if l >= r * r {
					continue;
				}
				if dx == 0.0 {
					dx = self.jiggle.jiggle();
					l += dx * dx;
				}
				if dy == 0.0 {
					dy = self.jiggle.jiggle();
					l += dy * dy;
				}
				let dist = l.sqrt();
				let k = (r - dist) / dist * strength;
				let (px, py) = (dx * k, dy * k);
				// the smaller bubble takes more of the push
				let share = rj * rj / (ri * ri + rj * rj);
				self.nodes[i].vx += px * share;
				self.nodes[i].vy += py * share;
				self.nodes[j].vx -= px * (1.0 - share);
				self.nodes[j].vy -= py * (1.0 - share);
			}
		}
	}
}

impl Default for BubbleLayout {
	fn default() -> Self {
		Self::new(BubbleConfig::default())
	}
}

/// Lazy stream of layout events for one solve. Ends after `Ready`.
pub struct Frames<'a> {
	layout: &'a mut BubbleLayout,
}

impl Frames<'_> {
	/// Runs to completion and returns the final positions.
	pub fn settle(self) -> Option<Vec<LayoutNode>> {
		self.last().map(|event| event.nodes().to_vec())
	}
}

impl Iterator for Frames<'_> {
	type Item = LayoutEvent;

	fn next(&mut self) -> Option<LayoutEvent> {
		self.layout.step()
	}
}

impl FusedIterator for Frames<'_> {}

fn validate(dataset: &[DataPoint]) -> Result<(), BubbleError> {
	match dataset
		.iter()
		.enumerate()
		.find(|(_, d)| !d.amount.is_finite() || d.amount < 0.0)
	{
		Some((index, d)) => Err(BubbleError::InvalidAmount {
			index,
			category: d.category.clone(),
			amount: d.amount,
		}),
		None => Ok(()),
	}
}

/// Deterministic source for separating coincident centers.
struct Lcg(u64);

impl Default for Lcg {
	fn default() -> Self {
		Self(1)
	}
}

impl Lcg {
	const A: u64 = 1_664_525;
	const C: u64 = 1_013_904_223;
	const M: u64 = 1 << 32;

	fn jiggle(&mut self) -> f64 {
		self.0 = (Self::A * self.0 + Self::C) % Self::M;
		(self.0 as f64 / Self::M as f64 - 0.5) * 1e-6
	}
}
