use leptos::prelude::*;

use crate::graph::{Node, ReadFilter, ReadSet, filter_nodes, normalize_query};

const BROWSE_LIMIT: usize = 120;
const SEARCH_LIMIT: usize = 180;

/// Result list for the sheet: capped lower when just browsing.
pub fn sheet_results(nodes: &[Node], filter: ReadFilter, read: &ReadSet, query: &str) -> Vec<Node> {
	let limit = if normalize_query(query).is_empty() {
		BROWSE_LIMIT
	} else {
		SEARCH_LIMIT
	};
	filter_nodes(nodes, filter, read, query)
		.into_iter()
		.take(limit)
		.cloned()
		.collect()
}

/// Whether `id` is read, kept current while the sheet stays open.
fn read_status(read: Signal<ReadSet>, id: String) -> Memo<bool> {
	Memo::new(move |_| read.with(|r| r.contains(&id)))
}

fn row_subtitle(is_read: bool, tags: &[String]) -> String {
	let status = if is_read { "Read" } else { "Unread" };
	if tags.is_empty() {
		status.to_owned()
	} else {
		format!("{status} • {}", tags.join(", "))
	}
}

/// Modal topic finder with its own query and the shared read filter.
#[component]
pub fn SearchSheet(
	open: RwSignal<bool>,
	nodes: StoredValue<Vec<Node>>,
	#[prop(into)] read: Signal<ReadSet>,
	read_filter: RwSignal<ReadFilter>,
	on_pick: Callback<String>,
) -> impl IntoView {
	let query = RwSignal::new(String::new());
	let results = Memo::new(move |_| {
		let read = read.get();
		nodes.with_value(|all| query.with(|q| sheet_results(all, read_filter.get(), &read, q)))
	});
	let close = move || open.set(false);

	view! {
		<Show when=move || open.get()>
			<div class="sheetBackdrop" on:mousedown=move |_| close()>
				<div
					class="sheet"
					role="dialog"
					aria-label="Search topics"
					on:mousedown=|ev| ev.stop_propagation()
				>
					<div class="sheetTop">
						<div class="sheetTitle">"Find a topic"</div>
						<button class="sheetClose" on:click=move |_| close() aria-label="Close">
							"✕"
						</button>
					</div>
					<input
						class="sheetInput"
						placeholder="Search titles, tags..."
						autofocus=true
						prop:value=move || query.get()
						on:input=move |ev| query.set(event_target_value(&ev))
					/>
					<div class="sheetFilters" role="group" aria-label="Read filter">
						{ReadFilter::ALL
							.into_iter()
							.map(|f| {
								view! {
									<button
										class=move || {
											if read_filter.get() == f { "sheetChip on" } else { "sheetChip" }
										}
										on:click=move |_| read_filter.set(f)
									>
										{f.label()}
									</button>
								}
							})
							.collect_view()}
					</div>
					<div class="sheetList">
						<For
							each=move || results.get()
							key=|n| n.id.clone()
							children=move |n| {
								let is_read = read_status(read, n.id.clone());
								let tags = n.tags.iter().take(3).cloned().collect::<Vec<_>>();
								let id = n.id.clone();
								view! {
									<button
										class=move || if is_read.get() { "sheetItem read" } else { "sheetItem" }
										on:click=move |_| {
											open.set(false);
											on_pick.run(id.clone());
										}
									>
										<div class="sheetItemTop">
											<div class="sheetItemTitle">{n.title}</div>
											<div class="sheetItemMeta">{n.category}</div>
										</div>
										<div class="sheetItemSub">{move || row_subtitle(is_read.get(), &tags)}</div>
									</button>
								}
							}
						/>
					</div>
					<div class="sheetHint">"Tap a topic to jump and open it."</div>
				</div>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use leptos::reactive::owner::Owner;

	use super::*;

	fn many(n: usize) -> Vec<Node> {
		(0..n)
			.map(|i| Node {
				id: format!("t{i}"),
				title: format!("Topic {i}"),
				category: "bulk".into(),
				summary: String::new(),
				claims: vec![],
				counterpoints: vec![],
				tags: vec![],
				x: 0.5,
				y: 0.5,
			})
			.collect()
	}

	#[test]
	fn subtitle_shows_status_and_tags() {
		assert_eq!(row_subtitle(false, &[]), "Unread");
		assert_eq!(row_subtitle(true, &["ufo".to_owned(), "cold war".to_owned()]), "Read • ufo, cold war");
	}

	#[test]
	fn row_status_follows_the_read_set() {
		Owner::new().with(|| {
			let read = RwSignal::new(ReadSet::new());
			let status = read_status(read.into(), "t1".into());
			assert!(!status.get());

			read.update(|r| *r = r.with("t1"));
			assert!(status.get());

			read.set(ReadSet::new());
			assert!(!status.get());
		});
	}

	#[test]
	fn browsing_and_searching_have_different_caps() {
		let nodes = many(300);
		let read = ReadSet::new();
		assert_eq!(sheet_results(&nodes, ReadFilter::All, &read, "").len(), 120);
		assert_eq!(sheet_results(&nodes, ReadFilter::All, &read, "topic").len(), 180);
		assert_eq!(sheet_results(&nodes, ReadFilter::All, &read, "topic 29").len(), 11);
	}
}
