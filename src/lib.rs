//! A decoder for AIVDM-armored AIS Class-A position reports.
//!
//! AIS receivers deliver the binary body of each message as ASCII "armor":
//! every character of the payload carries six bits. [`armor`] unpacks a
//! payload into a [`bitstream::Bitstream`]; [`report`] reads the fixed
//! type-1/2/3 field layout out of the stream; [`reading`] interprets each
//! raw field value into its unit-annotated, sentinel-aware rendering.
//!
//! [`sentence`] and [`route`] carry lines of a collected log in and
//! per-sender record files out, for the bundled command-line driver.

pub mod armor;
pub mod bitstream;
pub mod reading;
pub mod report;
pub mod route;
pub mod sentence;
