use crate::graph::Node;

struct Topic {
	id: &'static str,
	title: &'static str,
	category: &'static str,
	summary: &'static str,
	claims: &'static [&'static str],
	counterpoints: &'static [&'static str],
	tags: &'static [&'static str],
	x: f64,
	y: f64,
}

const TOPICS: &[Topic] = &[
	Topic {
		id: "anunnaki",
		title: "Anunnaki",
		category: "Ancient origins",
		summary: "Sumerian deities recast in modern retellings as visitors who shaped early civilisation.",
		claims: &[
			"Mesopotamian texts describe beings who came from the sky.",
			"Early agriculture and writing appeared too quickly to be home-grown.",
		],
		counterpoints: &[
			"Assyriologists read the Anunnaki as ordinary members of a pantheon.",
			"The visitor reading traces back to 1970s popular books, not the tablets.",
		],
		tags: &["sumer", "ancient astronauts"],
		x: 0.22,
		y: 0.18,
	},
	Topic {
		id: "nibiru",
		title: "Nibiru",
		category: "Cosmic",
		summary: "A hypothetical planet said to be on a long orbit that periodically brings it close to Earth.",
		claims: &[
			"A hidden planet returns on a 3,600 year cycle.",
			"Its approach has been concealed by observatories.",
		],
		counterpoints: &[
			"A body that large would be visible to amateur astronomers.",
			"Every predicted arrival date has passed without event.",
		],
		tags: &["planet", "doomsday"],
		x: 0.38,
		y: 0.12,
	},
	Topic {
		id: "remote-viewing",
		title: "Remote Viewing",
		category: "Programs",
		summary: "Government-funded experiments in perceiving distant targets by mental focus alone.",
		claims: &[
			"Declassified files show decades of funding.",
			"Some sessions produced accurate sketches of unseen sites.",
		],
		counterpoints: &[
			"The program's own review found no actionable intelligence.",
			"Hits were judged loosely and selected after the fact.",
		],
		tags: &["stargate", "psi"],
		x: 0.64,
		y: 0.31,
	},
	Topic {
		id: "crash-retrieval",
		title: "Crash Retrieval",
		category: "Programs",
		summary: "Stories of recovered non-human craft stored and studied in secret facilities.",
		claims: &[
			"Witness testimony describes recovery teams and hangars.",
			"Reverse-engineering budgets are hidden in classified lines.",
		],
		counterpoints: &[
			"No physical material has been produced for independent study.",
			"Several testimonies are second-hand accounts of the same sources.",
		],
		tags: &["uap", "disclosure"],
		x: 0.71,
		y: 0.47,
	},
	Topic {
		id: "triangular-craft",
		title: "Triangular Craft",
		category: "Sightings",
		summary: "Reports of large, silent, triangle-shaped objects with lights at each corner.",
		claims: &[
			"Mass sightings share consistent shape and behaviour.",
			"The craft hover silently at low altitude.",
		],
		counterpoints: &[
			"Formation flights and drones with lights produce similar shapes.",
			"Perceived silence depends heavily on distance and wind.",
		],
		tags: &["uap", "sightings"],
		x: 0.55,
		y: 0.58,
	},
	Topic {
		id: "usos",
		title: "USOs",
		category: "Sightings",
		summary: "Unidentified submerged objects said to move between air and water.",
		claims: &[
			"Naval crews have logged fast underwater contacts.",
			"Some objects are seen entering the sea without a splash.",
		],
		counterpoints: &[
			"Sonar artefacts and marine life account for many contacts.",
			"Entry without a splash is hard to judge from a distance.",
		],
		tags: &["ocean", "uap"],
		x: 0.33,
		y: 0.66,
	},
	Topic {
		id: "antarctica",
		title: "Antarctica",
		category: "Earth",
		summary: "Theories about hidden bases, lost civilisations and restricted access on the southern continent.",
		claims: &[
			"The treaty restricts exploration for reasons beyond conservation.",
			"Expedition records hint at structures under the ice.",
		],
		counterpoints: &[
			"Thousands of researchers and tourists visit every year.",
			"Ice-penetrating radar surveys are published openly.",
		],
		tags: &["ice", "hidden bases"],
		x: 0.48,
		y: 0.88,
	},
	Topic {
		id: "reading-list",
		title: "Reading List",
		category: "Guides",
		summary: "Primary sources and critical reviews for every topic on the map.",
		claims: &[],
		counterpoints: &[],
		tags: &["sources"],
		x: -1.0,
		y: -1.0,
	},
];

fn strings(items: &[&str]) -> Vec<String> {
	items.iter().map(|s| s.to_string()).collect()
}

/// The static topic catalogue. Positions are normalised to the map image.
pub fn default_nodes() -> Vec<Node> {
	TOPICS
		.iter()
		.map(|t| Node {
			id: t.id.into(),
			title: t.title.into(),
			category: t.category.into(),
			summary: t.summary.into(),
			claims: strings(t.claims),
			counterpoints: strings(t.counterpoints),
			tags: strings(t.tags),
			x: t.x,
			y: t.y,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;
	use crate::data::default_edges;

	#[test]
	fn ids_are_unique_and_positions_normalised() {
		let nodes = default_nodes();
		let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
		assert_eq!(ids.len(), nodes.len());
		for n in nodes.iter().filter(|n| n.is_placed()) {
			assert!((0.0..=1.0).contains(&n.x) && (0.0..=1.0).contains(&n.y), "{}", n.id);
		}
		assert!(nodes.iter().any(|n| !n.is_placed()));
	}

	#[test]
	fn default_edges_resolve() {
		let nodes = default_nodes();
		for e in default_edges() {
			assert!(nodes.iter().any(|n| n.id == e.from), "{}", e.id);
			assert!(nodes.iter().any(|n| n.id == e.to), "{}", e.id);
		}
	}
}
