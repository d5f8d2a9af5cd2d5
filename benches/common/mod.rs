#![allow(dead_code)]

pub mod bezier;
pub mod samples;
