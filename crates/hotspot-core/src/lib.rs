//! Image Hotspot Question Core
//!
//! Coordinate resolution, hit-testing and single-shot answer state for an
//! image hotspot question. Nothing in this crate touches a UI runtime; a
//! rendering adapter feeds it pointer, load and resize events and draws
//! whatever it returns.
//!
//! Pipeline for one click:
//! `resolver` (pixels -> percent) -> `outcome` (percent -> matched hotspot,
//! score) -> `selection` (first click wins) -> `anchor` (percent -> marker
//! pixels, recomputed on every resize).

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod anchor;
pub mod config;
pub mod event;
pub mod geometry;
pub mod host;
pub mod outcome;
pub mod question;
pub mod resolver;
pub mod scale;
pub mod selection;

pub use anchor::{EdgePolicy, MarkerPlacement, place};
pub use config::{ConfigError, QuestionParams};
pub use event::{AnsweredEvent, PresaveSummary, presave};
pub use geometry::{GeometryModel, Hotspot, PercentPoint, PercentRect, PixelSize};
pub use host::{ButtonId, Feedback, PopupSettings, QuestionHost, ScoredTask};
pub use outcome::{MAX_SCORE, Outcome, OutcomeKind, evaluate};
pub use question::{HotspotQuestion, PLACEHOLDER_MESSAGE, Surface};
pub use resolver::{ClickTarget, resolve};
pub use scale::{ImageScale, fit_to_width};
pub use selection::{Selection, SelectionMachine};
