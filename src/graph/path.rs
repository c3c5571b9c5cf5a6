//! Exit-path membership tests.

/// Whether `to` directly follows `from` somewhere in `path`.
///
/// Uses the first occurrence of each id, so a path that revisits a router
/// is judged by where it first appears.
pub fn is_consecutive_hop(from: &str, to: &str, path: &[&str]) -> bool {
	let position = |id: &str| path.iter().position(|hop| *hop == id);
	match (position(from), position(to)) {
		(Some(from), Some(to)) => to == from + 1,
		_ => false,
	}
}

/// Whether the directed hop `from -> to` appears on any of `paths`.
pub fn on_any_path(from: &str, to: &str, paths: &[&[&str]]) -> bool {
	paths.iter().any(|path| is_consecutive_hop(from, to, path))
}

/// Whether the link between `a` and `b` is traversed, in either direction,
/// on any of `paths`.
pub fn link_on_any_path(a: &str, b: &str, paths: &[&[&str]]) -> bool {
	on_any_path(a, b, paths) || on_any_path(b, a, paths)
}
