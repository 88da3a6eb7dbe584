use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Placeholder for dashboard sections reached from the chart.
#[component]
pub fn Section() -> impl IntoView {
	let params = use_params_map();
	let name = move || params.read().get("section").unwrap_or_default();

	view! {
		<div class="section-page">
			<h1>{name}</h1>
			<a href="/cases">"Back to cases"</a>
		</div>
	}
}
