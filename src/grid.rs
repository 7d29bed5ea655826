// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{error::Error, pos::Position};


/// Dense, fixed-size 2D storage addressed by [`Position`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid<T> {
	// Benchmarks suggests a `Vec` performs much better than a `(Hash|BTree)Set`
	cells: Vec<T>,
	width: usize,
	height: usize,
}

impl<T: Clone> Grid<T> {
	pub fn new(width: usize, height: usize, initial: T) -> Self {
		Self { cells: vec![initial; width * height], width, height }
	}

	/// Copy of the grid with `padding` cells of `fill` added on every side.
	pub fn padded(&self, padding: usize, fill: T) -> Self {
		let [w, h] = [self.width + 2 * padding, self.height + 2 * padding];
		let mut cells = Vec::with_capacity(w * h);
		cells.resize(w * padding, fill.clone());
		for row in self.cells.chunks(self.width.max(1)).take(self.height) {
			cells.resize(cells.len() + padding, fill.clone());
			cells.extend_from_slice(row);
			cells.resize(cells.len() + padding, fill.clone());
		}
		cells.resize(w * h, fill);
		Self { cells, width: w, height: h }
	}
}

impl<T> Grid<T> {
	/// Builds a grid by calling `f` for every position, in row-major order.
	pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Position) -> T) -> Self {
		use itertools::iproduct;
		let cells = iproduct!(0..height, 0..width)
			.map(|(y, x)| f(Position::new(x as isize, y as isize)))
			.collect();
		Self { cells, width, height }
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn height(&self) -> usize {
		self.height
	}

	pub fn contains(&self, pos: Position) -> bool {
		(0..self.width as isize).contains(&pos.x) && (0..self.height as isize).contains(&pos.y)
	}

	fn offset(&self, pos: Position) -> Result<usize, Error> {
		if !self.contains(pos) {
			return Err(Error::OutOfBounds { pos, width: self.width, height: self.height })
		}
		Ok(pos.y as usize * self.width + pos.x as usize)
	}

	pub fn get(&self, pos: Position) -> Result<&T, Error> {
		self.offset(pos).map(|i| &self.cells[i])
	}

	pub fn get_mut(&mut self, pos: Position) -> Result<&mut T, Error> {
		self.offset(pos).map(|i| &mut self.cells[i])
	}

	pub fn set(&mut self, pos: Position, value: T) -> Result<(), Error> {
		*self.get_mut(pos)? = value;
		Ok(())
	}

	/// All positions in row-major order.
	pub fn positions(&self) -> impl Iterator<Item = Position> {
		use itertools::iproduct;
		iproduct!(0..self.height as isize, 0..self.width as isize).map(|(y, x)| Position::new(x, y))
	}

	pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
		self.positions().zip(self.cells.iter())
	}

	/// Rows of cells, top to bottom.
	pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
		self.cells.chunks(self.width.max(1)).take(self.height)
	}
}

impl<T> std::ops::Index<Position> for Grid<T> {
	type Output = T;
	fn index(&self, pos: Position) -> &T {
		self.get(pos).unwrap_or_else(|e| panic!("{e}"))
	}
}

impl<T> std::ops::IndexMut<Position> for Grid<T> {
	fn index_mut(&mut self, pos: Position) -> &mut T {
		self.get_mut(pos).unwrap_or_else(|e| panic!("{e}"))
	}
}

impl Grid<bool> {
	pub fn count(&self) -> usize {
		self.cells.iter().filter(|cell| **cell).count()
	}
}


#[cfg(test)]
mod tests {
	use super::{Error, Grid, Position};

	#[test]
	fn access() {
		let mut grid = Grid::new(3, 2, 0u8);
		assert_eq!((grid.width(), grid.height()), (3, 2));
		assert_eq!(grid.get(Position::new(2, 1)), Ok(&0));
		grid.set(Position::new(2, 1), 7).unwrap();
		grid[Position::new(0, 0)] += 1;
		assert_eq!(grid[Position::new(2, 1)], 7);
		assert_eq!(grid.iter().map(|(_, v)| *v).collect::<Vec<_>>(), [1, 0, 0, 0, 0, 7]);
		assert_eq!(grid.rows().collect::<Vec<_>>(), [&[1, 0, 0][..], &[0, 0, 7][..]]);
	}

	#[test]
	fn out_of_bounds() {
		let mut grid = Grid::new(3, 2, false);
		for pos in [Position::new(-1, 0), Position::new(3, 0), Position::new(0, 2), Position::new(0, -1)] {
			let err = Error::OutOfBounds { pos, width: 3, height: 2 };
			assert!(!grid.contains(pos));
			assert_eq!(grid.get(pos), Err(err.clone()));
			assert_eq!(grid.set(pos, true), Err(err));
		}
		assert_eq!(grid.count(), 0);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn index_out_of_bounds() {
		let grid = Grid::new(3, 2, false);
		let _cell = grid[Position::new(3, 1)];
	}

	#[test]
	fn from_fn() {
		let grid = Grid::from_fn(3, 2, |Position { x, y }| x + 10 * y);
		assert_eq!(grid[Position::new(2, 1)], 12);
		assert_eq!(grid.positions().last(), Some(Position::new(2, 1)));
		assert_eq!(grid.positions().count(), 6);
	}

	#[test]
	fn padded() {
		let grid = Grid::from_fn(2, 1, |pos| pos.x as u8 + 1).padded(1, 0);
		assert_eq!((grid.width(), grid.height()), (4, 3));
		assert_eq!(grid.rows().collect::<Vec<_>>(),
			[&[0, 0, 0, 0][..], &[0, 1, 2, 0][..], &[0, 0, 0, 0][..]]);
		assert_eq!(Grid::new(0, 0, true).padded(2, false), Grid::new(4, 4, false));
	}
}
