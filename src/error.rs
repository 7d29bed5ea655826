// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::pos::Position;


#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
	/// Grid access outside of `[0, width) × [0, height)`.
	OutOfBounds { pos: Position, width: usize, height: usize },
	/// Query that needs at least one occupied cell.
	EmptyGrid,
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::OutOfBounds { pos, width, height } =>
				write!(f, "Position {pos} out of bounds for {width}×{height} grid"),
			Error::EmptyGrid => f.write_str("No occupied cells"),
		}
	}
}

impl std::error::Error for Error {}
