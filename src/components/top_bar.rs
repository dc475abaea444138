use leptos::prelude::*;
use web_sys::{File, HtmlInputElement};

use crate::graph::{Progress, ReadFilter};

/// Title, progress, search, read filter, actions and the breadcrumb row.
#[component]
pub fn TopBar(
	node_ref: NodeRef<leptos::html::Header>,
	#[prop(into)] progress: Signal<Progress>,
	query: RwSignal<String>,
	read_filter: RwSignal<ReadFilter>,
	/// `(id, title)` pairs, most recent first.
	#[prop(into)]
	crumbs: Signal<Vec<(String, String)>>,
	#[prop(into)] import_error: Signal<Option<String>>,
	on_find: Callback<()>,
	on_continue: Callback<()>,
	on_reset: Callback<()>,
	on_export: Callback<()>,
	on_import: Callback<File>,
	on_crumb: Callback<String>,
) -> impl IntoView {
	let file_ref = NodeRef::<leptos::html::Input>::new();
	let on_file_change = move |ev: leptos::ev::Event| {
		let input: HtmlInputElement = event_target(&ev);
		if let Some(file) = input.files().and_then(|list| list.get(0)) {
			on_import.run(file);
		}
		input.set_value("");
	};

	view! {
		<header node_ref=node_ref class="topbar">
			<div class="topbarRow">
				<div class="brand">"Great Awakening Map"</div>
				<div class="progressMini" title="Progress">
					<div class="progressTrack">
						<div
							class="progressFill"
							style=move || format!("width: {}%", progress.get().percent)
						/>
					</div>
					<div class="progressText">
						{move || {
							let p = progress.get();
							format!("{}/{} · {}%", p.read, p.total, p.percent)
						}}
					</div>
				</div>
			</div>

			<div class="topbarRow">
				<input
					class="search"
					placeholder="Search topics…"
					prop:value=move || query.get()
					on:input=move |ev| query.set(event_target_value(&ev))
				/>
				<div class="filters" role="group" aria-label="Read filter">
					{ReadFilter::ALL
						.into_iter()
						.map(|f| {
							view! {
								<button
									class=move || if read_filter.get() == f { "pillBtn on" } else { "pillBtn" }
									on:click=move |_| read_filter.set(f)
								>
									{f.label()}
								</button>
							}
						})
						.collect_view()}
				</div>
			</div>

			<div class="topbarRow actionsRow">
				<div class="counts">
					<span class="count read">{move || format!("Read {}", progress.get().read)}</span>
					<span class="dot">"•"</span>
					<span class="count unread">{move || format!("Unread {}", progress.get().unread)}</span>
				</div>
				<div class="actions">
					<button class="btn" on:click=move |_| on_find.run(())>
						"Find"
					</button>
					<button class="btn primary" on:click=move |_| on_continue.run(())>
						{move || if progress.get().is_complete() { "Complete" } else { "Continue" }}
					</button>
					<button class="btn ghost hideMobile" on:click=move |_| on_reset.run(())>
						"Reset"
					</button>
					<button class="btn ghost hideMobile" on:click=move |_| on_export.run(())>
						"Export"
					</button>
					<button
						class="btn ghost hideMobile"
						on:click=move |_| {
							if let Some(input) = file_ref.get() {
								input.click();
							}
						}
					>
						"Import"
					</button>
					<input
						node_ref=file_ref
						type="file"
						accept="application/json"
						style="display: none"
						on:change=on_file_change
					/>
				</div>
			</div>

			{move || {
				import_error
					.get()
					.map(|msg| view! { <div class="importError" role="alert">{msg}</div> })
			}}

			<Show when=move || crumbs.with(|c| !c.is_empty())>
				<div class="crumbRow">
					<For
						each=move || crumbs.get()
						key=|(id, _)| id.clone()
						children=move |(id, title)| {
							view! {
								<button class="crumb" on:click=move |_| on_crumb.run(id.clone())>
									{title}
								</button>
							}
						}
					/>
				</div>
			</Show>
		</header>
	}
}
