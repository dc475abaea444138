//! Keyboard shortcuts.

const TEXT_ENTRY_TAGS: [&str; 3] = ["input", "textarea", "select"];

/// Whether a key press should trigger "jump to nearest unread".
///
/// `focused_tag` is the tag name of the event target, in any case.
pub fn is_next_unread_key(key: &str, focused_tag: Option<&str>) -> bool {
	if focused_tag.is_some_and(|tag| TEXT_ENTRY_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t))) {
		return false;
	}
	key.eq_ignore_ascii_case("n")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn n_in_either_case() {
		assert!(is_next_unread_key("n", None));
		assert!(is_next_unread_key("N", Some("CANVAS")));
		assert!(!is_next_unread_key("m", Some("div")));
	}

	#[test]
	fn suppressed_while_typing() {
		for tag in ["INPUT", "textarea", "Select"] {
			assert!(!is_next_unread_key("n", Some(tag)));
		}
	}
}
