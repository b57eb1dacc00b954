//! Animation constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Visibility-triggered reveal defaults
pub mod reveal {
    use super::*;

    /// Intersection ratio that counts as "in view" for sections and text
    pub const DEFAULT_THRESHOLD: f64 = 0.1;

    /// Counters wait until half of the element is visible
    pub const COUNTER_THRESHOLD: f64 = 0.5;

    /// Hidden offset for directional fade-ins (px)
    pub const FADE_DISTANCE: f64 = 50.0;

    /// Fade-in transition length
    pub const FADE_DURATION: Duration = Duration::from_millis(1500);

    /// Hidden vertical offset for each revealed character (px)
    pub const CHAR_DISTANCE: f64 = 20.0;

    /// Per-character transition length
    pub const CHAR_DURATION: Duration = Duration::from_millis(600);

    /// Delay added per character index
    pub const CHAR_STAGGER: Duration = Duration::from_millis(20);

    /// Delay step between sibling items in a revealed list
    pub const ITEM_STAGGER: Duration = Duration::from_millis(100);
}

/// Sticky heading scroll mapping
pub mod sticky {
    /// Resting font size (vw)
    pub const MIN_FONT_VW: f64 = 5.0;

    /// Peak font size (vw)
    pub const MAX_FONT_VW: f64 = 20.0;

    /// Vertical offset once the heading is centered (vh)
    pub const CENTER_OFFSET_VH: f64 = 35.0;

    /// Progress at which the heading stops growing
    pub const GROW_END: f64 = 0.15;

    /// Progress after which the heading shrinks and fades out
    pub const SHRINK_START: f64 = 0.85;

    /// Opacity held while the heading sits behind the content
    pub const HOLD_OPACITY: f64 = 0.1;
}

/// Drag-to-scroll momentum
pub mod momentum {
    /// Velocity multiplier applied every coasting frame
    pub const FRICTION: f64 = 0.95;

    /// Coasting stops once |velocity| drops to this value (px/frame)
    pub const STOP_VELOCITY: f64 = 0.5;
}

/// Counters, marquee and frame pacing
pub mod timing {
    use super::*;

    /// Count-up duration for stat counters
    pub const COUNTER_DURATION: Duration = Duration::from_millis(2000);

    /// One full marquee loop
    pub const MARQUEE_PERIOD: Duration = Duration::from_secs(30);

    /// Frame period (~60fps)
    pub const FRAME_PERIOD: Duration = Duration::from_millis(16);
}

/// Filesystem layout
pub mod fs {
    /// Config directory name (under the home directory)
    pub const CONFIG_DIR_NAME: &str = ".parallax";

    /// Config file name
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";

    /// Log file name
    pub const LOG_FILE_NAME: &str = "parallax.log";
}
