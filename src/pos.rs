// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::dir::Direction;


/// A cell coordinate, with Y pointing down. Orders row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position {
	pub x: isize,
	pub y: isize,
}

impl Position {
	pub const fn new(x: isize, y: isize) -> Self {
		Self { x, y }
	}

	pub fn elementwise_min(self, rhs: Self) -> Self {
		Self { x: self.x.min(rhs.x), y: self.y.min(rhs.y) }
	}

	pub fn elementwise_max(self, rhs: Self) -> Self {
		Self { x: self.x.max(rhs.x), y: self.y.max(rhs.y) }
	}

	/// The three cells that must be free before stepping towards `cardinal`:
	/// the cell straight ahead, flanked by its two diagonal neighbors.
	pub fn neighbors(self, cardinal: Direction) -> [Self; 3] {
		let ortho = cardinal.orthogonal();
		let next = self + cardinal;
		[next - ortho, next, next + ortho]
	}
}

impl PartialOrd for Position {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for Position {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.y.cmp(&other.y).then_with(|| self.x.cmp(&other.x))
	}
}

macro_rules! impl_ops { ( $( $Op:ident ( $op:tt ) ),+ ) => { paste::paste! { $(
	impl std::ops::$Op<Direction> for Position {
		type Output = Self;
		fn [<$Op:lower>](self, rhs: Direction) -> Self {
			Self { x: self.x $op rhs.dx, y: self.y $op rhs.dy }
		}
	}

	impl std::ops::$Op for Position {
		type Output = Self;
		fn [<$Op:lower>](self, rhs: Self) -> Self {
			Self { x: self.x $op rhs.x, y: self.y $op rhs.y }
		}
	}

	impl std::ops::[<$Op Assign>]<Direction> for Position {
		fn [<$Op:lower _assign>](&mut self, rhs: Direction) {
			*self = *self $op rhs
		}
	}
)+ } } }

impl_ops!(Add(+), Sub(-));

impl std::fmt::Display for Position {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{{{}, {}}}", self.x, self.y)
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::{Direction, Position};

	#[test]
	fn ops() {
		let mut pos = Position::new(3, 4);
		assert_eq!(pos + Direction::NORTH, Position::new(3, 3));
		assert_eq!(pos - Direction::EAST, Position::new(2, 4));
		assert_eq!(pos + Position::new(-3, 1), Position::new(0, 5));
		assert_eq!(pos - Position::new(1, 1), Position::new(2, 3));
		pos += Direction::SOUTH;
		pos -= Direction::WEST;
		assert_eq!(pos, Position::new(4, 5));
	}

	#[test]
	fn elementwise() {
		let [a, b] = [Position::new(1, 9), Position::new(5, -2)];
		assert_eq!(a.elementwise_min(b), Position::new(1, -2));
		assert_eq!(a.elementwise_max(b), Position::new(5, 9));
	}

	#[test]
	fn ordering() {
		let mut poss = vec![Position::new(2, 1), Position::new(0, 2), Position::new(1, 1)];
		poss.sort();
		assert_eq!(poss, [Position::new(1, 1), Position::new(2, 1), Position::new(0, 2)]);
	}

	#[test_case(Direction::NORTH, [[-1, -1], [0, -1], [1, -1]])]
	#[test_case(Direction::SOUTH, [[1, 1], [0, 1], [-1, 1]])]
	#[test_case(Direction::WEST, [[-1, 1], [-1, 0], [-1, -1]])]
	#[test_case(Direction::EAST, [[1, -1], [1, 0], [1, 1]])]
	fn neighbors(cardinal: Direction, expected: [[isize; 2]; 3]) {
		let origin = Position::default();
		assert_eq!(origin.neighbors(cardinal), expected.map(|[x, y]| Position::new(x, y)));
	}

	#[test]
	fn neighbors_cover_surroundings() {
		use std::collections::BTreeSet;
		let pos = Position::new(7, -3);
		let all = Direction::CARDINALS.into_iter()
			.flat_map(|c| pos.neighbors(c))
			.collect::<BTreeSet<_>>();
		assert_eq!(all.len(), 8);
		assert!(!all.contains(&pos));
		assert!(all.iter().all(|p| (p.x - pos.x).abs() <= 1 && (p.y - pos.y).abs() <= 1));
	}
}
