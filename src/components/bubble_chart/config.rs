/// Tuning for the bubble layout. Defaults give a wide, flat cluster.
#[derive(Clone, Debug, PartialEq)]
pub struct BubbleConfig {
	/// Smallest and largest bubble radius.
	pub radius_range: (f64, f64),
	/// Fraction added below the smallest and above the largest amount.
	pub bounds_padding: f64,
	/// Pull toward the vertical center line.
	pub strength_x: f64,
	/// Pull toward the horizontal center line.
	pub strength_y: f64,
	/// Fraction of velocity removed each step.
	pub velocity_decay: f64,
	/// Minimum gap between two bubble edges.
	pub collision_padding: f64,
	/// Share of an overlap resolved per step.
	pub collision_strength: f64,
	/// Cooling level at which the layout counts as settled.
	pub alpha_min: f64,
	/// Fraction of alpha lost per step.
	pub alpha_decay: f64,
	/// Hard cap on steps per solve.
	pub max_ticks: usize,
}

impl Default for BubbleConfig {
	fn default() -> Self {
		let alpha_min = 0.001;
		Self {
			radius_range: (30.0, 100.0),
			bounds_padding: 0.05,
			strength_x: 0.05,
			strength_y: 0.2,
			velocity_decay: 0.5,
			collision_padding: 20.0,
			collision_strength: 1.0,
			alpha_min,
			// settles in ~300 steps
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			max_ticks: 600,
		}
	}
}
