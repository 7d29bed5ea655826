// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::fmt::{self, Write};
use crate::{diffusion::{Claim, Diffusion}, dir::Direction, grid::Grid, pos::Position};


fn fmt_area(
	f: &mut impl Write,
	[tl, br]: [Position; 2],
	cell: impl Fn(Position) -> char,
) -> fmt::Result {
	for y in tl.y..=br.y {
		for x in tl.x..=br.x { f.write_char(cell(Position::new(x, y)))? }
		if y < br.y { f.write_char('\n')? }
	}
	Ok(())
}

fn occupancy_char(occupied: bool) -> char {
	if occupied { '#' } else { '.' }
}

impl fmt::Display for Grid<bool> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use itertools::Itertools as _;
		let s = self.rows()
			.map(|row| row.iter().map(|&occupied| occupancy_char(occupied)).collect::<String>())
			.join("\n");
		f.write_str(&s)
	}
}

impl fmt::Display for Diffusion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(self.grid(), f)
	}
}


/// Displays a [`Diffusion`] cropped to its bounding box.
pub struct Cropped<'a>(&'a Diffusion);

impl fmt::Display for Cropped<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let Ok((tl, br)) = self.0.bounding_box() else { return f.write_char('.') };
		fmt_area(f, [tl, br], |pos| occupancy_char(self.0.is_occupied(pos)))
	}
}


/// Displays the moves proposed for the next round of a [`Diffusion`].
///
/// Uncontested destinations show an arrow in the direction of the move,
/// contested ones an `x`.
pub struct Proposals<'a> {
	diffusion: &'a Diffusion,
	claims: Vec<Claim>,
}

impl fmt::Display for Proposals<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		use std::collections::HashMap;

		let mut destinations = HashMap::<Position, Option<Claim>>::new();
		for &claim in &self.claims {
			destinations.entry(claim.to)
				.and_modify(|contested| *contested = None)
				.or_insert(Some(claim));
		}

		let bounds = self.diffusion.occupied_positions()
			.chain(destinations.keys().copied())
			.fold(None, |acc: Option<(Position, Position)>, pos| Some(match acc {
				Some((tl, br)) => (tl.elementwise_min(pos), br.elementwise_max(pos)),
				None => (pos, pos),
			}));
		let Some((tl, br)) = bounds else { return f.write_char('.') };

		fmt_area(f, [tl, br], |pos| match destinations.get(&pos) {
			Some(Some(Claim { from, to })) =>
				Direction::new(to.x - from.x, to.y - from.y).arrow().unwrap_or('?'),
			Some(None) => 'x',
			None => occupancy_char(self.diffusion.is_occupied(pos)),
		})
	}
}

impl Diffusion {
	pub fn cropped(&self) -> Cropped<'_> {
		Cropped(self)
	}

	pub fn proposals(&self) -> Proposals<'_> {
		Proposals { diffusion: self, claims: self.claims() }
	}
}
