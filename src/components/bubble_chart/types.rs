/// One labeled quantity to visualize.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
	/// Label drawn in the bubble.
	pub category: String,
	/// Non-negative magnitude; drives the radius.
	pub amount: f64,
	/// Route segment to navigate to when the bubble is clicked.
	pub link: Option<String>,
}

impl DataPoint {
	/// Unlinked data point.
	pub fn new(category: impl Into<String>, amount: f64) -> Self {
		Self {
			category: category.into(),
			amount,
			link: None,
		}
	}

	/// Makes the bubble navigate to `link` on click.
	pub fn with_link(mut self, link: impl Into<String>) -> Self {
		self.link = Some(link.into());
		self
	}
}

/// A simulated bubble. Positions are relative to the viewport center.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
	/// Input this node was created from.
	pub datum: DataPoint,
	/// Horizontal offset from the viewport center.
	pub x: f64,
	/// Vertical offset from the viewport center.
	pub y: f64,
	/// Velocity carried into the next step.
	pub vx: f64,
	/// Vertical velocity.
	pub vy: f64,
	/// Drawn radius, fixed for the solve.
	pub radius: f64,
}

/// Lifecycle of one solve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SimulationState {
	/// No dataset, or an empty or rejected one.
	#[default]
	Idle,
	/// Forces are still being applied.
	Running,
	/// Positions are final until the next dataset.
	Settled,
}

/// Emitted once per simulation step.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutEvent {
	/// Intermediate positions.
	Tick(Vec<LayoutNode>),
	/// Terminal snapshot; positions are final.
	Ready(Vec<LayoutNode>),
}

impl LayoutEvent {
	/// Snapshot carried by either variant.
	pub fn nodes(&self) -> &[LayoutNode] {
		match self {
			LayoutEvent::Tick(nodes) | LayoutEvent::Ready(nodes) => nodes,
		}
	}

	/// True for the terminal snapshot.
	pub fn is_ready(&self) -> bool {
		matches!(self, LayoutEvent::Ready(_))
	}
}
