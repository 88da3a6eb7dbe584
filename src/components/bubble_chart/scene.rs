use super::types::LayoutNode;

/// Glow around linked bubbles.
pub const GLOW_COLOR: &str = "rgba(117, 179, 255, 1)";
/// Glow blur radius in pixels.
pub const GLOW_BLUR: f64 = 10.0;
/// Label font family.
pub const LABEL_FONT: &str = "Helvetica";
/// Baseline shift that visually centers the label.
pub const LABEL_DY: f64 = 6.0;

/// Two-stop left-to-right gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
	/// Color at the left edge.
	pub from: &'static str,
	/// Color at the right edge.
	pub to: &'static str,
}

/// How a bubble's circle is painted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
	/// Gradient across the circle's width.
	Linear(Gradient),
	/// Flat CSS color.
	Solid(&'static str),
}

/// Magnitude band of a bubble. Drives fill, label color and font size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
	/// Lowest third of the radius range.
	Bottom,
	/// Middle third.
	Middle,
	/// Highest third.
	Top,
}

impl Tier {
	/// Splits the radius range into equal thirds.
	pub fn for_radius(radius: f64, (r0, r1): (f64, f64)) -> Tier {
		let third = (r1 - r0) / 3.0;
		if radius >= r0 + 2.0 * third {
			Tier::Top
		} else if radius >= r0 + third {
			Tier::Middle
		} else {
			Tier::Bottom
		}
	}

	/// Circle paint for this tier.
	pub fn fill(self) -> Fill {
		match self {
			Tier::Top => Fill::Linear(Gradient {
				from: "#90C2FF",
				to: "#60A7FF",
			}),
			Tier::Middle => Fill::Linear(Gradient {
				from: "#5D43FF",
				to: "#A5A4FF",
			}),
			Tier::Bottom => Fill::Solid("#fff"),
		}
	}

	/// Label color; light on the filled tiers.
	pub fn text_color(self) -> &'static str {
		match self {
			Tier::Top | Tier::Middle => "#fff",
			Tier::Bottom => "#000",
		}
	}

	/// Label size in pixels.
	pub fn font_px(self) -> f64 {
		match self {
			Tier::Top => 30.0,
			Tier::Middle => 23.0,
			Tier::Bottom => 16.0,
		}
	}
}

/// A circle with a centered label, in canvas coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Bubble {
	/// Center x in canvas pixels.
	pub cx: f64,
	/// Center y in canvas pixels.
	pub cy: f64,
	/// Circle radius in canvas pixels.
	pub radius: f64,
	/// Magnitude band for styling.
	pub tier: Tier,
	/// Category text.
	pub label: String,
	/// Navigation target, if clickable.
	pub link: Option<String>,
}

impl Bubble {
	/// Whether the point lies inside the circle.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		let (dx, dy) = (x - self.cx, y - self.cy);
		dx * dx + dy * dy <= self.radius * self.radius
	}

	/// Linked bubbles glow and respond to clicks.
	pub fn is_interactive(&self) -> bool {
		self.link.is_some()
	}

	/// Shadow color and blur applied to the whole bubble, circle and label.
	pub fn glow(&self) -> Option<(&'static str, f64)> {
		self.is_interactive().then_some((GLOW_COLOR, GLOW_BLUR))
	}
}

/// Everything one frame draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	/// Viewport width.
	pub width: f64,
	/// Viewport height.
	pub height: f64,
	/// Paint order; later bubbles are drawn on top.
	pub bubbles: Vec<Bubble>,
}

impl Scene {
	/// Maps layout nodes into canvas space around the viewport center.
	pub fn build(nodes: &[LayoutNode], width: f64, height: f64, range: (f64, f64)) -> Self {
		let (ox, oy) = (width / 2.0, height / 2.0);
		let bubbles = nodes
			.iter()
			.map(|node| Bubble {
				cx: ox + node.x,
				cy: oy + node.y,
				radius: node.radius,
				tier: Tier::for_radius(node.radius, range),
				label: node.datum.category.clone(),
				link: node.datum.link.clone(),
			})
			.collect();
		Self {
			width,
			height,
			bubbles,
		}
	}

	/// Topmost bubble under the point.
	pub fn hit(&self, x: f64, y: f64) -> Option<&Bubble> {
		self.bubbles.iter().rev().find(|b| b.contains(x, y))
	}

	/// Routes a click to the bubble under the point. Returns whether a
	/// navigation was requested.
	pub fn click(&self, x: f64, y: f64, navigate: impl FnOnce(&str)) -> bool {
		match self.hit(x, y).and_then(|b| b.link.as_deref()) {
			Some(link) => {
				navigate(link);
				true
			}
			None => false,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::DataPoint;
	use super::*;

	const RANGE: (f64, f64) = (30.0, 100.0);

	fn node(datum: DataPoint, x: f64, y: f64, radius: f64) -> LayoutNode {
		LayoutNode {
			datum,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			radius,
		}
	}

	fn scene() -> Scene {
		Scene::build(
			&[
				node(DataPoint::new("Cases", 90.0).with_link("cases"), -100.0, 0.0, 90.0),
				node(DataPoint::new("Plain", 35.0), 100.0, 0.0, 35.0),
			],
			400.0,
			400.0,
			RANGE,
		)
	}

	#[test]
	fn tier_breakpoints_split_range_in_thirds() {
		assert_eq!(Tier::for_radius(30.0, RANGE), Tier::Bottom);
		assert_eq!(Tier::for_radius(53.0, RANGE), Tier::Bottom);
		assert_eq!(Tier::for_radius(54.0, RANGE), Tier::Middle);
		assert_eq!(Tier::for_radius(76.0, RANGE), Tier::Middle);
		assert_eq!(Tier::for_radius(77.0, RANGE), Tier::Top);
		assert_eq!(Tier::for_radius(100.0, RANGE), Tier::Top);
	}

	#[test]
	fn tier_styles() {
		assert_eq!(
			Tier::Top.fill(),
			Fill::Linear(Gradient {
				from: "#90C2FF",
				to: "#60A7FF"
			})
		);
		assert!(matches!(Tier::Middle.fill(), Fill::Linear(_)));
		assert_eq!(Tier::Bottom.fill(), Fill::Solid("#fff"));
		assert_eq!(Tier::Middle.text_color(), "#fff");
		assert_eq!(Tier::Bottom.text_color(), "#000");
		assert!(Tier::Top.font_px() > Tier::Middle.font_px());
		assert!(Tier::Middle.font_px() > Tier::Bottom.font_px());
	}

	#[test]
	fn bubbles_are_offset_from_viewport_center() {
		let s = scene();
		assert_eq!((s.bubbles[0].cx, s.bubbles[0].cy), (100.0, 200.0));
		assert_eq!((s.bubbles[1].cx, s.bubbles[1].cy), (300.0, 200.0));
		assert_eq!(s.bubbles[0].label, "Cases");
		assert_eq!(s.bubbles[0].tier, Tier::Top);
		assert_eq!(s.bubbles[1].tier, Tier::Bottom);
	}

	#[test]
	fn clicking_linked_bubble_navigates_once() {
		let s = scene();
		let mut calls = Vec::new();
		assert!(s.click(110.0, 210.0, |link| calls.push(link.to_owned())));
		assert_eq!(calls, ["cases"]);
	}

	#[test]
	fn clicking_plain_bubble_or_background_does_nothing() {
		let s = scene();
		let mut calls = 0;
		assert!(!s.click(300.0, 200.0, |_| calls += 1));
		assert!(!s.click(5.0, 5.0, |_| calls += 1));
		assert_eq!(calls, 0);
		assert!(!s.bubbles[1].is_interactive());
	}

	#[test]
	fn only_linked_bubbles_glow() {
		let s = scene();
		assert_eq!(s.bubbles[0].glow(), Some((GLOW_COLOR, GLOW_BLUR)));
		assert_eq!(s.bubbles[1].glow(), None);
	}

	#[test]
	fn topmost_bubble_wins_hit_test() {
		let s = Scene::build(
			&[
				node(DataPoint::new("under", 1.0).with_link("under"), 0.0, 0.0, 50.0),
				node(DataPoint::new("over", 1.0), 10.0, 0.0, 50.0),
			],
			200.0,
			200.0,
			RANGE,
		);
		assert_eq!(s.hit(105.0, 100.0).unwrap().label, "over");
		assert!(!s.click(105.0, 100.0, |_| unreachable!()));
	}
}
