//! Square-root radius scale for bubble areas.

/// Domain of the radius scale, padded around the dataset's extremes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBounds {
	/// Lower end of the domain.
	pub min: f64,
	/// Upper end of the domain.
	pub max: f64,
}

impl ScaleBounds {
	/// Returns `None` for an empty iterator.
	pub fn from_amounts(amounts: impl IntoIterator<Item = f64>, padding: f64) -> Option<Self> {
		let mut iter = amounts.into_iter();
		let first = iter.next()?;
		let (lo, hi) = iter.fold((first, first), |(lo, hi), a| (lo.min(a), hi.max(a)));
		Some(Self {
			min: (1.0 - padding) * lo,
			max: (1.0 + padding) * hi,
		})
	}

	/// True when the domain has no width.
	pub fn is_degenerate(&self) -> bool {
		!(self.max > self.min)
	}
}

/// Square-root scale: bubble area grows linearly with the amount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusScale {
	bounds: ScaleBounds,
	range: (f64, f64),
}

impl RadiusScale {
	/// Scale from `bounds` onto `range`.
	pub fn new(bounds: ScaleBounds, range: (f64, f64)) -> Self {
		Self { bounds, range }
	}

	/// Input domain.
	pub fn bounds(&self) -> ScaleBounds {
		self.bounds
	}

	/// Output radius range.
	pub fn range(&self) -> (f64, f64) {
		self.range
	}

	/// Radius for `amount`, clamped to the bounds.
	pub fn radius(&self, amount: f64) -> f64 {
		let (r0, r1) = self.range;
		if self.bounds.is_degenerate() {
			return (r0 + r1) / 2.0;
		}
		if amount.is_nan() {
			return r0;
		}
		let (lo, hi) = (self.bounds.min.sqrt(), self.bounds.max.sqrt());
		let v = amount.clamp(self.bounds.min, self.bounds.max).sqrt();
		r0 + (v - lo) / (hi - lo) * (r1 - r0)
	}
}
