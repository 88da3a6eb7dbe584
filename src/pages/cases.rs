use leptos::prelude::*;

use crate::components::bubble_chart::{BubbleChart, DataPoint};

/// Open case counts per dashboard area. Areas with a page get a link.
fn sample_cases() -> Vec<DataPoint> {
	vec![
		DataPoint::new("Tasks", 184.0).with_link("tasks"),
		DataPoint::new("NRDS", 142.0).with_link("nrds"),
		DataPoint::new("Government", 97.0).with_link("government"),
		DataPoint::new("CheckLists", 73.0).with_link("checklists"),
		DataPoint::new("Web", 58.0).with_link("dashboard"),
		DataPoint::new("Archive", 41.0),
		DataPoint::new("Drafts", 26.0),
		DataPoint::new("Spam", 12.0),
	]
}

/// Cases overview with the bubble chart.
#[component]
pub fn Cases() -> impl IntoView {
	let cases = Signal::derive(sample_cases);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-chart">
				<BubbleChart data=cases fullscreen=true />
				<div class="chart-overlay">
					<h1>"Cases"</h1>
					<p class="subtitle">"Bubble area shows open cases. Glowing bubbles open their section."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
