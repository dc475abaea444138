use leptos::prelude::*;

use crate::graph::Progress;

/// Bottom quick-action bar for small screens.
#[component]
pub fn Dock(
	node_ref: NodeRef<leptos::html::Div>,
	#[prop(into)] progress: Signal<Progress>,
	on_find: Callback<()>,
	on_next: Callback<()>,
	on_center: Callback<()>,
) -> impl IntoView {
	view! {
		<div node_ref=node_ref class="dock" role="group" aria-label="Quick actions">
			<button class="dockBtn" on:click=move |_| on_find.run(())>
				"Find"
			</button>
			<button class="dockBtn primary" on:click=move |_| on_next.run(())>
				{move || if progress.get().is_complete() { "Complete" } else { "Next unread" }}
				<span class="dockSub">{move || format!("Unread {}", progress.get().unread)}</span>
			</button>
			<button class="dockBtn ghost" on:click=move |_| on_center.run(())>
				"Center"
			</button>
		</div>
	}
}
