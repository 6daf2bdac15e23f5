use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Lost in space"</h1>
			<p>"There is nothing orbiting at this address."</p>
			<a href="/">"Back to the system"</a>
		</div>
	}
}
