/// Reasons a dataset is refused by the layout engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BubbleError {
	/// Negative, NaN or infinite amount.
	#[error("data point {index} ({category:?}) has invalid amount {amount}; amounts must be finite and non-negative")]
	InvalidAmount {
		/// Position in the dataset.
		index: usize,
		/// Category of the offending entry.
		category: String,
		/// The rejected value.
		amount: f64,
	},
}
