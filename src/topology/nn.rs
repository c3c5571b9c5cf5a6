//! Conversions between router addresses and mesh network numbers (NN).
//!
//! Routers in the `10.69.0.0/16` block encode their network number in the
//! last two octets: `10.69.X.Y` is NN `100 * X + (Y % 100)`, and a fourth
//! octet of 100 or more identifies an additional router at the same site.

const MESH_PREFIX: &str = "10.69.";

/// Splits a mesh address into its third and fourth octets.
fn mesh_octets(ip: &str) -> Option<(u32, u32)> {
	let rest = ip.strip_prefix(MESH_PREFIX)?;
	let (third, fourth) = rest.split_once('.')?;
	let third: u32 = third.parse().ok()?;
	let fourth: u32 = fourth.parse().ok()?;
	(third <= 100).then_some((third, fourth))
}

/// Network number for a mesh address, or `None` outside the mesh block.
pub fn nn_from_ip(ip: &str) -> Option<u32> {
	let (third, fourth) = mesh_octets(ip)?;
	Some(100 * third + fourth % 100)
}

/// Display label for a router address, e.g. `"4153"` or `"4153 (.1xx)"`.
/// Addresses outside the mesh block are returned unchanged.
pub fn human_label_from_ip(ip: &str) -> String {
	let Some((third, fourth)) = mesh_octets(ip) else {
		return ip.to_string();
	};
	let nn = 100 * third + fourth % 100;
	match fourth / 100 {
		0 => nn.to_string(),
		router_index => format!("{nn} (.{router_index}xx)"),
	}
}

/// Address for a search term that is either an address or a network number.
pub fn ip_from_maybe_nn(maybe_nn: &str) -> String {
	if maybe_nn.contains('.') {
		return maybe_nn.to_string();
	}
	let nn: u32 = maybe_nn.trim().parse().unwrap_or(0);
	format!("{MESH_PREFIX}{}.{}", nn / 100, nn % 100)
}
