//! PSS: Power System Studies Cost Toolkit
//!
//! Estimates project cost for data-center electrical power-system studies
//! from facility parameters (IT capacity, mechanical/house load, redundancy
//! tier) and configurable business parameters (rates, discounts, margins).

pub mod cli;
pub mod core;
pub mod estimate;
