// src/utils/mod.rs

pub mod deserializers;
pub mod extract;
pub mod pagination;
pub mod random;
