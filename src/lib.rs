//! Verlet-simulated curtain panels for interactive page transitions.
//!
//! `drapery` simulates a two-panel curtain: each half is a grid of point
//! masses joined by distance constraints, hung from a pinned rod row. Each
//! tick relaxes the constraints, then integrates the particles; the rod
//! pins ease toward targets set by `open`/`close`, and an active pointer
//! pushes nearby cloth aside. Drawing is left to the host, which reads a
//! row-major grid of positions per panel after every tick.
//!
//! # Features
//!
//! - **Verlet integration**: implicit velocity with friction, gravity as a
//!   positional offset
//! - **Constraint relaxation**: Gauss-Seidel passes over horizontal and
//!   vertical neighbor constraints
//! - **Open/close easing**: pinned row eases exponentially toward its targets
//! - **Pointer repulsion**: linear falloff within a configurable radius
//! - **Deterministic ticks**: input is buffered and applied at tick start
//! - **Observable**: monitor ticks via the `StepObserver` trait
//! - **`no_std` compatible**: works in embedded and WASM environments

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod particle;
pub mod constraint;
pub mod solver;
pub mod panel;
pub mod pointer;
pub mod curtain;
pub mod driver;
pub mod observer;
pub mod config;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use particle::Particle;
pub use constraint::{DistanceConstraint, Relaxation};
pub use solver::StepContext;
pub use panel::{Panel, PanelCommand, Side};
pub use pointer::{PointerCell, PointerState};
pub use curtain::{Curtain, CurtainEvent, PanelFrame};
pub use driver::{FixedStepDriver, FrameDriver};
pub use config::CurtainConfig;
pub use observer::{LogStepObserver, NoOpStepObserver, StepObserver};
pub use error::CurtainError;
