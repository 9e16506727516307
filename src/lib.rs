#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `pos-tools` packs and unpacks bit-level chess position records and
//! streams them between a handful of on-disk codecs (`bin`, `bin2`, `jpn`,
//! `epd`, `fen`, `plain`).
//!
//! The crate is split the way the workspace is laid out: [`pos_types`]
//! holds the record/codec types, [`pos_stream`] holds the file streams and
//! the conversion driver, and this root crate just re-exports both through
//! `pos_internal`.

pub use pos_internal::*;
