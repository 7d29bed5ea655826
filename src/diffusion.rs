// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::{dir::Direction, error::Error, grid::Grid, pos::Position};


/// What an elf intends to do at the start of a round.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Proposal {
	/// No other elves in any of the eight surrounding cells.
	Isolated,
	/// Crowded in every cardinal direction.
	Stuck,
	Move(Direction),
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Claim {
	pub from: Position,
	pub to: Position,
}

/// Summary of a single round.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Round {
	/// Elves that proposed a move.
	pub proposed: usize,
	/// Elves that were alone in claiming their destination, and so moved.
	pub moved: usize,
}

impl Round {
	pub fn any_proposed(&self) -> bool {
		self.proposed > 0
	}

	pub fn any_moved(&self) -> bool {
		self.moved > 0
	}
}

/// Elves on a fixed-size grid, spreading out one round at a time.
///
/// The grid never grows: whoever builds the initial state pads it generously
/// enough that no elf proposes to step off it (which panics).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Diffusion {
	grid: Grid<bool>,
	/// Index into [`Direction::CARDINALS`] of the cardinal tried first.
	priority_offset: usize,
}

impl From<Grid<bool>> for Diffusion {
	fn from(grid: Grid<bool>) -> Self {
		Self { grid, priority_offset: 0 }
	}
}

impl Diffusion {
	pub fn from_occupancy(width: usize, height: usize, occupied: impl Fn(Position) -> bool) -> Self {
		Grid::from_fn(width, height, occupied).into()
	}

	pub fn grid(&self) -> &Grid<bool> {
		&self.grid
	}

	pub fn priority_offset(&self) -> usize {
		self.priority_offset
	}

	/// The cardinal elves try first this round.
	pub fn first_cardinal(&self) -> Direction {
		Direction::rotated_cardinal(0, self.priority_offset)
	}

	/// Whether there’s an elf at `pos`; cells beyond the grid are always empty.
	pub fn is_occupied(&self, pos: Position) -> bool {
		self.grid.get(pos).copied().unwrap_or(false)
	}

	fn can_propose(&self, pos: Position, cardinal: Direction) -> bool {
		!pos.neighbors(cardinal).into_iter().any(|p| self.is_occupied(p))
	}

	pub fn is_isolated(&self, pos: Position) -> bool {
		Direction::CARDINALS.into_iter().all(|cardinal| self.can_propose(pos, cardinal))
	}

	/// The proposal of the elf at `pos`, assuming there is one.
	pub fn proposal(&self, pos: Position) -> Proposal {
		if self.is_isolated(pos) { return Proposal::Isolated }
		(0..Direction::CARDINALS.len())
			.map(|i| Direction::rotated_cardinal(i, self.priority_offset))
			.find(|&cardinal| self.can_propose(pos, cardinal))
			.map_or(Proposal::Stuck, Proposal::Move)
	}

	/// Splits all elves into those staying put and those claiming a destination.
	fn propose(&self) -> (Vec<Position>, Vec<Claim>) {
		use {either::Either, rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _}};

		let width = self.grid.width() as isize;
		(0..self.grid.height() as isize).into_par_iter()
			.flat_map_iter(|y| (0..width).map(move |x| Position::new(x, y)))
			.filter(|&pos| self.grid[pos])
			.partition_map(|from| match self.proposal(from) {
				Proposal::Move(dir) => Either::Right(Claim { from, to: from + dir }),
				Proposal::Isolated | Proposal::Stuck => Either::Left(from),
			})
	}

	/// The moves elves propose this round, contested or not.
	pub fn claims(&self) -> Vec<Claim> {
		self.propose().1
	}

	/// Computes the state after a single round.
	pub fn next_round(&self) -> (Self, Round) {
		let [w, h] = [self.grid.width(), self.grid.height()];
		let (stationary, claims) = self.propose();

		let mut tally = Grid::new(w, h, 0_u8);
		for claim in &claims {
			let count = &mut tally[claim.to];
			*count = count.saturating_add(1);
		}

		#[cfg(LOGGING)]
		println!("offset = {}\n{}\n", self.priority_offset, self.proposals());

		let mut grid = Grid::new(w, h, false);
		for pos in stationary { grid[pos] = true }
		let mut moved = 0;
		for &Claim { from, to } in &claims {
			if tally[to] == 1 {
				grid[to] = true;
				moved += 1;
			} else {
				grid[from] = true;
			}
		}

		let next = Self {
			grid,
			priority_offset: (self.priority_offset + 1) % Direction::CARDINALS.len(),
		};
		let round = Round { proposed: claims.len(), moved };

		#[cfg(LOGGING)]
		println!("{round:?}\n{}\n", next.cropped());

		(next, round)
	}

	pub fn next(&self) -> Self {
		self.next_round().0
	}

	pub fn advance(self, rounds: usize) -> Self {
		(0..rounds).fold(self, |diffusion, _| diffusion.next())
	}

	/// The first (1-based) round in which no elf proposes to move, if any
	/// within `max_rounds`.
	pub fn first_stable_round(mut self, max_rounds: usize) -> Option<usize> {
		for t in 1..=max_rounds {
			let (next, round) = self.next_round();
			if !round.any_proposed() { return Some(t) }
			self = next;
		}
		None
	}

	/// Positions of all elves, in row-major order.
	pub fn occupied_positions(&self) -> impl Iterator<Item = Position> + '_ {
		self.grid.iter().filter_map(|(pos, occupied)| occupied.then_some(pos))
	}

	pub fn occupied_count(&self) -> usize {
		self.grid.count()
	}

	/// Top-left & bottom-right corners of the smallest rectangle containing all elves.
	pub fn bounding_box(&self) -> Result<(Position, Position), Error> {
		let mut poss = self.occupied_positions();
		let first = poss.next().ok_or(Error::EmptyGrid)?;
		Ok(poss.fold((first, first), |(tl, br), pos|
			(tl.elementwise_min(pos), br.elementwise_max(pos))))
	}

	pub fn empty_cells_in_bounding_box(&self) -> Result<usize, Error> {
		let (tl, br) = self.bounding_box()?;
		let area = (br.x - tl.x + 1) as usize * (br.y - tl.y + 1) as usize;
		Ok(area - self.occupied_count())
	}
}




#[cfg(BENCHING)]
mod bench {
	extern crate test;

	const INPUT: &str = "....#..\n..###.#\n#...#.#\n.#...##\n#.###..\n##.#.##\n.#..#..\n";

	#[bench]
	fn advance(b: &mut test::Bencher) {
		let diffusion = super::Diffusion::try_from_str_padded(INPUT, 10).unwrap();
		b.iter(|| diffusion.clone().advance(10))
	}

	#[bench]
	fn first_stable_round(b: &mut test::Bencher) {
		let diffusion = super::Diffusion::try_from_str_padded(INPUT, 10).unwrap();
		b.iter(|| diffusion.clone().first_stable_round(100))
	}
}
