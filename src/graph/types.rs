use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Size};

/// A topic on the map. Defined once as static data and never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
	/// Unique id.
	pub id: String,
	/// Display name.
	pub title: String,
	/// Grouping shown under the title.
	pub category: String,
	/// Short explainer.
	pub summary: String,
	/// What proponents say.
	#[serde(default)]
	pub claims: Vec<String>,
	/// What the evidence says against.
	#[serde(default)]
	pub counterpoints: Vec<String>,
	/// Extra search terms.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub tags: Vec<String>,
	/// Normalised horizontal position in `[0, 1]`, negative when unplaced.
	pub x: f64,
	/// Normalised vertical position in `[0, 1]`, negative when unplaced.
	pub y: f64,
}

impl Node {
	/// Whether the node has a position on the map. Unplaced nodes still show
	/// up in search results.
	pub fn is_placed(&self) -> bool {
		self.x >= 0.0 && self.y >= 0.0
	}

	/// Position in content-canvas pixels.
	pub fn canvas_point(&self, content: Size) -> Point {
		Point::new(self.x * content.width, self.y * content.height)
	}
}

/// Relationship kind. Unknown names read back as [`EdgeType::Overlap`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EdgeType {
	/// Documented support.
	Evidence,
	/// One source cites another.
	Citation,
	/// Sequential events.
	Timeline,
	/// Shared themes.
	#[default]
	Overlap,
	/// Counts against credibility.
	Rumor,
}

impl EdgeType {
	/// Every type, in a stable order.
	pub const ALL: [EdgeType; 5] = [
		EdgeType::Evidence,
		EdgeType::Citation,
		EdgeType::Timeline,
		EdgeType::Overlap,
		EdgeType::Rumor,
	];

	/// Name used on the wire.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Evidence => "evidence",
			Self::Citation => "citation",
			Self::Timeline => "timeline",
			Self::Overlap => "overlap",
			Self::Rumor => "rumor",
		}
	}
}

impl From<String> for EdgeType {
	fn from(s: String) -> Self {
		EdgeType::ALL
			.into_iter()
			.find(|t| t.as_str() == s)
			.unwrap_or_default()
	}
}

impl From<EdgeType> for String {
	fn from(t: EdgeType) -> Self {
		t.as_str().into()
	}
}

impl fmt::Display for EdgeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Edge weight, 1 to 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Strength(u8);

impl Strength {
	/// Weight 1, the default.
	pub const WEAK: Strength = Strength(1);
	/// Weight 2.
	pub const MEDIUM: Strength = Strength(2);
	/// Weight 3.
	pub const STRONG: Strength = Strength(3);

	/// Raw weight.
	pub fn get(self) -> u8 {
		self.0
	}
}

impl Default for Strength {
	fn default() -> Self {
		Self::WEAK
	}
}

impl TryFrom<u8> for Strength {
	type Error = String;

	fn try_from(v: u8) -> Result<Self, Self::Error> {
		match v {
			1..=3 => Ok(Strength(v)),
			_ => Err(format!("strength must be 1, 2 or 3, got {v}")),
		}
	}
}

impl From<Strength> for u8 {
	fn from(s: Strength) -> Self {
		s.0
	}
}

/// A typed, weighted relationship between two node ids. Endpoints are not
/// guaranteed to exist in the node list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
	/// Unique edge id.
	pub id: String,
	/// Source node id.
	pub from: String,
	/// Target node id.
	pub to: String,
	/// Free text shown next to the connection.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub label: Option<String>,
	/// Weak when absent.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub strength: Option<Strength>,
	/// Overlap when absent. Serialised as `type`.
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub kind: Option<EdgeType>,
}

impl Edge {
	/// Whether either endpoint is `node_id`.
	pub fn touches(&self, node_id: &str) -> bool {
		self.from == node_id || self.to == node_id
	}

	/// Strength, defaulting to weak.
	pub fn effective_strength(&self) -> Strength {
		self.strength.unwrap_or_default()
	}

	/// Type, defaulting to overlap.
	pub fn effective_kind(&self) -> EdgeType {
		self.kind.unwrap_or_default()
	}
}

/// Ids of the topics the user has opened at least once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReadSet(BTreeSet<String>);

impl ReadSet {
	/// Empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Whether `id` is in the set.
	pub fn contains(&self, id: &str) -> bool {
		self.0.contains(id)
	}

	/// Copy of this set with `id` added.
	pub fn with(&self, id: &str) -> Self {
		let mut next = self.clone();
		next.0.insert(id.to_owned());
		next
	}

	/// Number of ids.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether no ids are held.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Ids in sorted order.
	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.0.iter().map(String::as_str)
	}
}

impl FromIterator<String> for ReadSet {
	fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

impl<'a> FromIterator<&'a str> for ReadSet {
	fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
		Self(iter.into_iter().map(str::to_owned).collect())
	}
}
