// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::str::FromStr;
use crate::{diffusion::Diffusion, grid::Grid, pos::Position};


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
	InvalidByte { line: usize, column: usize, found: u8 },
	LineLen { line: usize, len: usize, found: usize },
	Empty,
}

impl std::fmt::Display for GridError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use GridError as E;
		match self {
			E::InvalidByte { line, column, found } =>
				write!(f, "Invalid byte {:?} at {line}:{column}", *found as char),
			E::LineLen { line, len, found } =>
				write!(f, "Line {line} is {found} long, expected {len}"),
			E::Empty => f.write_str("No rows"),
		}
	}
}

impl std::error::Error for GridError {}

/// Parses rows of `#` (elf) & `.` (empty ground), skipping blank lines, and
/// surrounds the result by `padding` empty cells on every side.
pub fn try_grid_from_str(s: &str, padding: usize) -> Result<Grid<bool>, GridError> {
	use GridError as E;

	let mut cells = vec![];
	let mut width = None;
	let mut height = 0;

	for (l, line) in s.lines().enumerate() {
		if line.is_empty() { continue }
		let len = *width.get_or_insert(line.len());
		if line.len() != len { return Err(E::LineLen { line: l + 1, len, found: line.len() }) }
		for (c, b) in line.bytes().enumerate() {
			cells.push(match b {
				b'#' => true,
				b'.' => false,
				found => return Err(E::InvalidByte { line: l + 1, column: c + 1, found }),
			})
		}
		height += 1;
	}

	let Some(width) = width else { return Err(E::Empty) };
	let grid = Grid::from_fn(width, height, |Position { x, y }| cells[y as usize * width + x as usize]);
	Ok(grid.padded(padding, false))
}

impl FromStr for Grid<bool> {
	type Err = GridError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		try_grid_from_str(s, 0)
	}
}

impl FromStr for Diffusion {
	type Err = GridError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::try_from_str_padded(s, 0)
	}
}

impl Diffusion {
	pub fn try_from_str_padded(s: &str, padding: usize) -> Result<Self, GridError> {
		try_grid_from_str(s, padding).map(Self::from)
	}
}
