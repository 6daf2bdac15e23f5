use leptos::prelude::*;

use crate::components::orbit_graph::OrbitGraphCanvas;
use crate::config::SceneConfig;

/// Fresh seed per page load so every visit gets a different system.
fn random_seed() -> u64 {
	(js_sys::Math::random() * u64::MAX as f64) as u64
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let seed = random_seed();

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

			<div class="fullscreen-graph">
				<OrbitGraphCanvas config=SceneConfig::default() seed=seed />
				<div class="graph-overlay">
					<h1>"Space Graph"</h1>
					<p class="subtitle">"Click two objects to find the shortest path between them."</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
