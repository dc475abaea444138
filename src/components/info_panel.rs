use leptos::prelude::*;

use crate::graph::{Credibility, Edge, Node, credibility_score};

/// What the panel derives from the live edge list for one topic.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelFacts {
	pub credibility: Credibility,
	/// One line per edge touching the topic.
	pub connections: Vec<String>,
}

impl PanelFacts {
	pub fn compute(node_id: &str, edges: &[Edge]) -> Self {
		let connections = edges
			.iter()
			.filter(|e| e.touches(node_id))
			.map(|e| {
				let label = e.label.as_ref().map(|l| format!(" - {l}")).unwrap_or_default();
				format!("{} → {}{} ({})", e.from, e.to, label, e.effective_kind())
			})
			.collect();
		Self {
			credibility: credibility_score(node_id, edges),
			connections,
		}
	}

	/// Recomputed whenever `edges` changes, e.g. after an import.
	pub fn track(node_id: String, edges: Signal<Vec<Edge>>) -> Memo<Self> {
		Memo::new(move |_| edges.with(|edges| Self::compute(&node_id, edges)))
	}
}

/// Detail panel for the selected topic.
#[component]
pub fn InfoPanel(
	node: Node,
	#[prop(into)] edges: Signal<Vec<Edge>>,
	on_close: Callback<()>,
) -> impl IntoView {
	let facts = PanelFacts::track(node.id.clone(), edges);
	let cred = move || facts.with(|f| f.credibility);

	view! {
		<div class="panel" role="dialog" aria-label="Topic info">
			<div class="panelHead">
				<div>
					<div class="panelTitle">{node.title}</div>
					<div class="panelSub">{node.category}</div>
				</div>
				<button class="panelClose" on:click=move |_| on_close.run(()) aria-label="Close">
					"✕"
				</button>
			</div>
			<div class="credBox">
				<div class="credTop">
					<div class="credLabel">{move || cred().label.as_str()}</div>
					<div class="credPct">{move || format!("{}%", cred().score.round())}</div>
				</div>
				<div class="credBar">
					<div class="credFill" style=move || format!("width: {}%", cred().score) />
				</div>
				<div class="credSub">
					{move || format!("Based on link types, {} connections", cred().related_count)}
				</div>
			</div>
			<div class="panelBody">
				<div class="panelP">{node.summary}</div>
				<div class="panelH">"Claims"</div>
				<ul class="panelList">
					{node.claims.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
				</ul>
				<div class="panelH">"Counterpoints"</div>
				<ul class="panelList">
					{node.counterpoints.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
				</ul>
				{move || {
					let lines = facts.with(|f| f.connections.clone());
					(!lines.is_empty())
						.then(|| {
							view! {
								<div class="panelH">"Connections"</div>
								<ul class="panelList">
									{lines.into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}
								</ul>
							}
						})
				}}
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use leptos::reactive::owner::Owner;

	use super::*;
	use crate::graph::{EdgeType, Strength};

	fn edge(id: &str, from: &str, to: &str, kind: EdgeType) -> Edge {
		Edge {
			id: id.into(),
			from: from.into(),
			to: to.into(),
			label: None,
			strength: Some(Strength::STRONG),
			kind: Some(kind),
		}
	}

	#[test]
	fn no_connections_for_an_isolated_topic() {
		let facts = PanelFacts::compute("lonely", &[edge("e1", "a", "b", EdgeType::Evidence)]);
		assert!(facts.connections.is_empty());
		assert_eq!(facts.credibility.related_count, 0);
	}

	#[test]
	fn connection_lines_name_both_ends_and_type() {
		let mut labelled = edge("e1", "a", "b", EdgeType::Rumor);
		labelled.label = Some("hearsay".into());
		let facts = PanelFacts::compute("b", &[labelled]);
		assert_eq!(facts.connections, ["a → b - hearsay (rumor)"]);
	}

	#[test]
	fn facts_follow_replaced_edges() {
		Owner::new().with(|| {
			let edges = RwSignal::new(vec![edge("e1", "a", "b", EdgeType::Rumor)]);
			let facts = PanelFacts::track("a".into(), edges.into());
			let before = facts.get();

			edges.set(vec![
				edge("e1", "a", "b", EdgeType::Evidence),
				edge("e2", "c", "a", EdgeType::Evidence),
			]);
			let after = facts.get();
			assert!(after.credibility.score > before.credibility.score);
			assert_eq!(after.credibility.related_count, 2);
			assert_eq!(after.connections.len(), 2);
		});
	}
}
