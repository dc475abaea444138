use leptos::prelude::*;

/// Served from the site root, see `index.html`.
pub const LOGO: &str = "/truthpole-logo.svg";

/// Intro gate shown until the visitor enters once.
#[component]
pub fn Splash(on_enter: Callback<()>) -> impl IntoView {
	view! {
		<div class="tp-splash" role="dialog" aria-label="Welcome">
			<div class="tp-splash-inner">
				<img class="tp-splash-logo" src=LOGO alt="Truthpole logo" />
				<div class="tp-splash-title">"Interactive Great Awakening Map by Truthpole"</div>
				<div class="tp-splash-sub">
					"Tap any node to open a clean explainer, track what you've read, and keep moving."
				</div>
				<button class="btn primary" on:click=move |_| on_enter.run(())>
					"Enter the map"
				</button>
			</div>
		</div>
	}
}
