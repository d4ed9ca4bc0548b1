//! GUI frontend for the simulator, built on egui + eframe.
//!
//! The GUI is the driver the core leaves external: it owns the running
//! flag and calls `Simulation::step()` followed by `Renderer::draw()`
//! once per frame while running. Everything happens on the UI thread;
//! pointer and wheel handlers run between frames, so no locking is
//! needed.
//!
//! ## Usage
//!
//! ```no_run
//! use langton::Config;
//! use langton::gui::run_gui;
//!
//! let config = Config::default();
//! run_gui(config).unwrap();
//! ```

mod app;

pub use app::{run_gui, LangtonApp};
