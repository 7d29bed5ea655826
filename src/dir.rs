// Copyright (c) 2022 Bastiaan Marinus van de Weerd


/// A 2D integer delta, with Y pointing down.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Direction {
	pub dx: isize,
	pub dy: isize,
}

impl Direction {
	pub const SOUTH: Self = Self::new(0, 1);
	pub const EAST: Self = Self::new(1, 0);
	pub const NORTH: Self = Self::SOUTH.negate();
	pub const WEST: Self = Self::EAST.negate();

	/// Cardinals in the order they are tried before any rotation.
	pub const CARDINALS: [Self; 4] = [Self::NORTH, Self::SOUTH, Self::WEST, Self::EAST];

	pub const fn new(dx: isize, dy: isize) -> Self {
		Self { dx, dy }
	}

	/// A quarter turn of this direction, i.e. `(dx, dy)` becomes `(-dy, dx)`.
	pub const fn orthogonal(self) -> Self {
		Self { dx: -self.dy, dy: self.dx }
	}

	pub const fn negate(self) -> Self {
		Self { dx: -self.dx, dy: -self.dy }
	}

	/// The cardinal tried at priority `i` once the order has been rotated `offset` times.
	pub fn rotated_cardinal(i: usize, offset: usize) -> Self {
		Self::CARDINALS[(i + offset) % Self::CARDINALS.len()]
	}

	/// Arrow pointing the way of a cardinal (`None` for anything else).
	pub fn arrow(self) -> Option<char> {
		match (self.dx, self.dy) {
			(0, -1) => Some('^'),
			(0, 1) => Some('v'),
			(-1, 0) => Some('<'),
			(1, 0) => Some('>'),
			_ => None,
		}
	}
}

impl std::ops::Neg for Direction {
	type Output = Self;
	fn neg(self) -> Self {
		self.negate()
	}
}

impl std::fmt::Display for Direction {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{{{}, {}}}", self.dx, self.dy)
	}
}
