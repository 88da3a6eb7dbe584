use log::error;

use super::config::BubbleConfig;
use super::layout::BubbleLayout;
use super::scene::Scene;
use super::types::{DataPoint, LayoutEvent, LayoutNode, SimulationState};

/// What the animation loop does after a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameAction {
	/// Canvas is on the page; draw and schedule the next frame.
	Render,
	/// Canvas not attached yet; schedule the next frame without drawing.
	Wait,
	/// Canvas was attached and has been removed; tear the loop down.
	Stop,
}

/// Everything the canvas component mutates between frames.
pub struct BubbleChartState {
	/// Simulation driving the positions.
	pub layout: BubbleLayout,
	/// What the next frame draws.
	pub scene: Scene,
	/// Canvas width in pixels.
	pub width: f64,
	/// Canvas height in pixels.
	pub height: f64,
	/// Draw intermediate ticks instead of only the settled layout.
	pub progressive: bool,
	/// Index into `scene.bubbles` under the pointer.
	pub hover: Option<usize>,
	nodes: Vec<LayoutNode>,
	attached: bool,
}

impl BubbleChartState {
	/// Empty chart for a canvas of the given size.
	pub fn new(config: BubbleConfig, width: f64, height: f64, progressive: bool) -> Self {
		Self {
			layout: BubbleLayout::new(config),
			scene: Scene {
				width,
				height,
				bubbles: Vec::new(),
			},
			width,
			height,
			progressive,
			hover: None,
			nodes: Vec::new(),
			attached: false,
		}
	}

	/// Restarts the simulation for a new dataset. Invalid data clears the chart.
	pub fn load(&mut self, data: &[DataPoint]) {
		self.nodes.clear();
		self.hover = None;
		if let Err(err) = self.layout.start(data) {
			error!("bubble chart: {err}");
		}
		self.rebuild_scene();
	}

	/// Lifecycle of the current solve.
	pub fn simulation_state(&self) -> SimulationState {
		self.layout.state()
	}

	/// True once the layout is final.
	pub fn is_settled(&self) -> bool {
		self.layout.state() == SimulationState::Settled
	}

	/// Advances the simulation one step. Returns whether the scene changed.
	pub fn tick(&mut self) -> bool {
		match self.layout.step() {
			Some(LayoutEvent::Tick(nodes)) => {
				self.nodes = nodes;
				if self.progressive {
					self.rebuild_scene();
				}
				self.progressive
			}
			Some(LayoutEvent::Ready(nodes)) => {
				self.nodes = nodes;
				self.rebuild_scene();
				true
			}
			None => false,
		}
	}

	/// One animation frame. `attached` is whether the canvas is still in the
	/// document; the simulation only advances while it is.
	pub fn frame(&mut self, attached: bool) -> FrameAction {
		if !attached {
			return if self.attached {
				FrameAction::Stop
			} else {
				FrameAction::Wait
			};
		}
		self.attached = true;
		self.tick();
		FrameAction::Render
	}

	/// Recenters the scene for a new canvas size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.rebuild_scene();
	}

	/// Interaction is only live once positions are final.
	pub fn bubble_at(&self, x: f64, y: f64) -> Option<usize> {
		if !self.is_settled() {
			return None;
		}
		self.scene.bubbles.iter().rposition(|b| b.contains(x, y))
	}

	/// Records the bubble under the pointer.
	pub fn set_hover(&mut self, idx: Option<usize>) {
		self.hover = idx;
	}

	/// Whether the pointer is over a clickable bubble.
	pub fn hovering_link(&self) -> bool {
		self.hover
			.and_then(|i| self.scene.bubbles.get(i))
			.is_some_and(|b| b.is_interactive())
	}

	/// Navigates through the bubble under the point, once settled.
	pub fn click(&self, x: f64, y: f64, navigate: impl FnOnce(&str)) -> bool {
		self.is_settled() && self.scene.click(x, y, navigate)
	}

	fn rebuild_scene(&mut self) {
		let range = self.layout.config().radius_range;
		let visible = self.progressive || self.is_settled();
		let nodes: &[LayoutNode] = if visible { &self.nodes } else { &[] };
		self.scene = Scene::build(nodes, self.width, self.height, range);
	}
}

#[cfg(test)]
mod tests {
	use super::super::scene::Tier;
	use super::*;

	fn settle(state: &mut BubbleChartState) {
		while state.tick() || state.simulation_state() == SimulationState::Running {}
	}

	fn pair() -> Vec<DataPoint> {
		vec![
			DataPoint::new("A", 100.0),
			DataPoint::new("B", 50.0).with_link("cases"),
		]
	}

	#[test]
	fn scene_stays_empty_until_settled() {
		let mut state = BubbleChartState::new(BubbleConfig::default(), 400.0, 400.0, false);
		state.load(&pair());
		assert!(!state.tick());
		assert!(state.scene.bubbles.is_empty());
		settle(&mut state);
		assert_eq!(state.scene.bubbles.len(), 2);
	}

	#[test]
	fn progressive_mode_draws_every_tick() {
		let mut state = BubbleChartState::new(BubbleConfig::default(), 400.0, 400.0, true);
		state.load(&pair());
		assert!(state.tick());
		assert_eq!(state.scene.bubbles.len(), 2);
		assert_eq!(state.bubble_at(200.0, 200.0), None);
	}

	#[test]
	fn two_point_example_tiers_and_navigation() {
		let mut state = BubbleChartState::new(BubbleConfig::default(), 400.0, 400.0, false);
		state.load(&pair());
		settle(&mut state);

		let [a, b] = &state.scene.bubbles[..] else {
			panic!("expected two bubbles");
		};
		assert!(a.radius > b.radius);
		assert_eq!(a.tier, Tier::Top);
		assert_eq!(b.tier, Tier::Bottom);
		let dist = ((a.cx - b.cx).powi(2) + (a.cy - b.cy).powi(2)).sqrt();
		assert!(dist >= a.radius + b.radius);

		let mut targets = Vec::new();
		assert!(state.click(b.cx, b.cy, |t| targets.push(t.to_owned())));
		assert!(!state.click(a.cx, a.cy, |t| targets.push(t.to_owned())));
		assert_eq!(targets, ["cases"]);
	}

	#[test]
	fn hover_tracks_linked_bubbles() {
		let mut state = BubbleChartState::new(BubbleConfig::default(), 400.0, 400.0, false);
		state.load(&pair());
		settle(&mut state);
		let (bx, by) = (state.scene.bubbles[1].cx, state.scene.bubbles[1].cy);
		let idx = state.bubble_at(bx, by);
		assert_eq!(idx, Some(1));
		state.set_hover(idx);
		assert!(state.hovering_link());
		state.set_hover(Some(0));
		assert!(!state.hovering_link());
	}

	#[test]
	fn invalid_data_clears_chart() {
		let mut state = BubbleChartState::new(BubbleConfig::default(), 400.0, 400.0, false);
		state.load(&pair());
		settle(&mut state);
		state.load(&[DataPoint::new("bad", -3.0)]);
		assert_eq!(state.simulation_state(), SimulationState::Idle);
		assert!(state.scene.bubbles.is_empty());
		assert!(!state.tick());
	}

	#[test]
	fn frame_loop_stops_once_canvas_is_detached() {
		let mut state = BubbleChartState::new(BubbleConfig::default(), 400.0, 400.0, false);
		state.load(&pair());
		assert_eq!(state.frame(false), FrameAction::Wait);
		assert_eq!(state.layout.ticks(), 0);

		assert_eq!(state.frame(true), FrameAction::Render);
		assert_eq!(state.frame(true), FrameAction::Render);
		assert_eq!(state.layout.ticks(), 2);

		assert_eq!(state.frame(false), FrameAction::Stop);
		assert_eq!(state.frame(false), FrameAction::Stop);
		assert_eq!(state.layout.ticks(), 2);
	}

	#[test]
	fn resize_recenters_scene() {
		let mut state = BubbleChartState::new(BubbleConfig::default(), 400.0, 400.0, false);
		state.load(&pair());
		settle(&mut state);
		let before = state.scene.bubbles[0].cx;
		state.resize(600.0, 400.0);
		assert!((state.scene.bubbles[0].cx - before - 100.0).abs() < 1e-9);
	}
}
