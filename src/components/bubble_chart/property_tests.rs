use proptest::prelude::*;

use super::config::BubbleConfig;
use super::layout::BubbleLayout;
use super::scale::{RadiusScale, ScaleBounds};
use super::types::{DataPoint, SimulationState};

fn dataset() -> impl Strategy<Value = Vec<DataPoint>> {
	proptest::collection::vec(
		("[A-Z][a-z]{2,8}", 0.0f64..1000.0)
			.prop_map(|(category, amount)| DataPoint::new(category, amount)),
		1..12,
	)
}

proptest! {
	#![proptest_config(ProptestConfig::with_cases(48))]

	#[test]
	fn every_dataset_settles_without_overlap(data in dataset()) {
		let mut layout = BubbleLayout::default();
		let (max_ticks, padding) =
			(layout.config().max_ticks, layout.config().collision_padding);
		let events: Vec<_> = layout.layout(&data).unwrap().collect();
		prop_assert!(events.len() <= max_ticks);
		let last = events.last().unwrap();
		prop_assert!(last.is_ready());
		prop_assert_eq!(layout.state(), SimulationState::Settled);

		let nodes = last.nodes();
		prop_assert_eq!(nodes.len(), data.len());
		for (i, a) in nodes.iter().enumerate() {
			prop_assert!(a.radius.is_finite() && a.radius > 0.0);
			for b in &nodes[i + 1..] {
				let dist = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
				prop_assert!(dist >= a.radius + b.radius + padding / 2.0);
			}
		}
	}

	#[test]
	fn radius_is_monotonic(lo in 0.0f64..500.0, span in 0.0f64..500.0, a in 0.0f64..1.0, b in 0.0f64..1.0) {
		let bounds = ScaleBounds { min: lo, max: lo + span };
		let scale = RadiusScale::new(bounds, BubbleConfig::default().radius_range);
		let (a, b) = (lo + a.min(b) * span, lo + a.max(b) * span);
		let (ra, rb) = (scale.radius(a), scale.radius(b));
		prop_assert!(ra <= rb);
		prop_assert!((30.0..=100.0).contains(&ra) && (30.0..=100.0).contains(&rb));
	}

	#[test]
	fn uniform_amounts_share_one_radius(amount in 0.0f64..1000.0, n in 1usize..6) {
		let data = vec![DataPoint::new("same", amount); n];
		let mut layout = BubbleLayout::default();
		let nodes = layout.layout(&data).unwrap().settle().unwrap();
		let first = nodes[0].radius;
		prop_assert!(first.is_finite() && first > 0.0);
		prop_assert!(nodes.iter().all(|node| node.radius == first));
	}
}
