// Copyright (c) 2022 Bastiaan Marinus van de Weerd

//! Elves spreading out over a grid: every round each elf that has company
//! proposes a step in one of the cardinal directions, and moves if no other
//! elf proposed the same destination.

#![cfg_attr(BENCHING, feature(test))]

pub mod dir;
pub mod pos;
pub mod grid;
pub mod error;
pub mod diffusion;
pub mod parsing;
mod fmt;

pub use {
	dir::Direction,
	pos::Position,
	grid::Grid,
	error::Error,
	diffusion::{Claim, Diffusion, Proposal, Round},
	fmt::{Cropped, Proposals},
	parsing::GridError,
};
