//! Color-coded pick buffer: each node paints its hit area in a unique solid
//! color, so the pixel under the pointer names the node directly.

/// Probe color for the node at `ordinal`. Color 0 is left for the background.
pub fn probe_color(ordinal: usize) -> String {
	let code = ordinal + 1;
	format!(
		"#{:02x}{:02x}{:02x}",
		(code >> 16) & 0xff,
		(code >> 8) & 0xff,
		code & 0xff
	)
}

/// Node ordinal for a pixel read back from the pick buffer.
///
/// Anti-aliased edges and the cleared background are not fully opaque and
/// resolve to no node.
pub fn ordinal_at(rgba: [u8; 4]) -> Option<usize> {
	let [r, g, b, a] = rgba;
	if a != 255 {
		return None;
	}
	let code = (r as usize) << 16 | (g as usize) << 8 | b as usize;
	code.checked_sub(1)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn probe_colors_resolve_back_to_their_node() {
		assert_eq!(probe_color(0), "#000001");
		assert_eq!(probe_color(256), "#000101");
		assert_eq!(ordinal_at([0x00, 0x01, 0x01, 255]), Some(256));
		assert_eq!(ordinal_at([0, 0, 1, 255]), Some(0));
	}

	#[test]
	fn background_and_edges_miss() {
		assert_eq!(ordinal_at([0, 0, 0, 0]), None);
		assert_eq!(ordinal_at([0, 0, 0, 255]), None);
		assert_eq!(ordinal_at([0, 0, 5, 128]), None);
	}
}
