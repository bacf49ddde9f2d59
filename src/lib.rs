#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constants;
mod ephemeris;
mod error;
mod kepler;
mod navigation;
mod parsing;
mod propagator;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{Config, KeplerSolver};
    pub use crate::constants::Constants;
    pub use crate::ephemeris::Ephemeris;
    pub use crate::error::Error;
    pub use crate::navigation::{NavRecords, END_OF_HEADER};
    pub use crate::parsing::{
        layout::{Column, LineLayout, EPOCH_LINE, LINE_WIDTH, ORBIT_LINE},
        RECORD_LINES,
    };
    pub use crate::propagator::{Propagation, Propagator};
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

// pub export
pub use error::Error;
