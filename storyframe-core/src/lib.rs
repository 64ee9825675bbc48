//! Storyframe places a photo on a tall, solid-colored "story" canvas.
//!
//! The source is scaled to the width left between proportional side margins, anchored at
//! the top, center, or bottom of the canvas, and pasted through a rounded-rectangle alpha mask.
//!
//! # Pipeline
//!
//! 1. **Layout**: canvas size -> [`Padding`], source bounds -> optional resize target, then the
//!    paste [`Offset`] for the chosen [`PlacementMode`] ([`plan_layout`])
//! 2. **Mask**: placement size + corner radius -> single-channel mask ([`build_rounded_mask`])
//! 3. **Composite**: blend the (resized) source over a fresh canvas ([`composite`])
//! 4. **Export**: write `<stem>-story.png` beside the input ([`process_file`])
//!
//! [`compose`] runs steps 1-3 for an in-memory image; [`process_files`] runs whole sessions
//! for several inputs, optionally in parallel. Sessions share no state.
#![forbid(unsafe_code)]

mod batch;
mod config;
mod export;
mod foundation;
mod layout;
mod mask;
mod render;
mod session;

pub use batch::runner::{BatchReport, BatchThreading, FileOutcome, process_files};
pub use config::model::StoryConfig;
pub use export::png::{OUTPUT_SUFFIX, load_source, output_path_for, process_file, save_canvas};
pub use foundation::core::{BackgroundTone, CanvasSize, Offset, Padding, PlacementMode, Rect};
pub use foundation::error::{StoryError, StoryResult};
pub use layout::offset::compute_offset;
pub use layout::padding::{
    DEFAULT_BOTTOM_RATIO, DEFAULT_HORIZONTAL_RATIO, DEFAULT_TOP_RATIO, PaddingRatios,
    compute_padding, compute_padding_with,
};
pub use layout::resize::{
    MAX_RESIZED_HEIGHT, ResizeFilter, apply_resize, compute_resize, safe_width,
};
pub use mask::rounded::{DEFAULT_CORNER_RADIUS, OPAQUE, build_rounded_mask};
pub use render::composite::{blank_canvas, composite};
pub use session::compose::{Layout, compose, plan_layout};
