//! Hypochondriapp - The medical app that always finds the worst.
//!
//! A four-screen wizard: enter symptoms, take a five-question personality
//! quiz, and receive a randomly drawn, deliberately absurd diagnosis
//! complete with an afterlife verdict. For entertainment only.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
