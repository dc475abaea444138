use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::BASE_PATH;

/// 404 page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"Nothing here"</h1>
			<p>"This address does not point at the map or a topic."</p>
			<A href=BASE_PATH>"Back to the map"</A>
		</div>
	}
}
