// Shared visual/audio tuning constants.

// Analysis
pub const FFT_SIZE: usize = 256;
pub const BIN_COUNT: usize = FFT_SIZE / 2;

// Default canvas backing size
pub const DEFAULT_WIDTH: u32 = 1024;
pub const DEFAULT_HEIGHT: u32 = 576;

// Bar layout
pub const BAR_SPACING: f64 = 4.0; // horizontal distance between bins
pub const BAR_HEIGHT_DIVIDER: f64 = 5.0; // sample value -> pixels
pub const SIMPLE_BAR_WIDTH: f64 = 4.0;
pub const SIMPLE_BAR_BASELINE: f64 = 3.0; // minimum bar height
pub const SIMPLE_BAR_TOP: f64 = 0.85; // fraction of canvas height
pub const FREQ_BAR_WIDTH: f64 = 3.0;
pub const FREQ_BAR_BASELINE: f64 = 10.0;
pub const CENTER_LINE_WIDTH: f64 = 2.5;

// Horizon
pub const HORIZON_MAX_RADIUS: f64 = 120.0;
pub const HORIZON_SCALE_X: f64 = 10.0;
pub const HORIZON_SCALE_Y: f64 = 0.25;

// Center effects
pub const CENTER_EFFECT_LINE_WIDTH: f64 = 2.0;
pub const BEZIER_DIVIDER: f64 = 50.0;
pub const BEZIER_HALF_HEIGHT: f64 = 50.0;
pub const RADIAL_PAIRS_RADIUS: f64 = 72.0;
pub const RADIAL_PAIRS_DIVIDER: f64 = 15.0;
pub const RADIAL_SPIKES_RADIUS: f64 = 50.0;
pub const RADIAL_SPIKES_DIVIDER: f64 = 10.0;
pub const RANDOM_COLOR_ALPHA: f32 = 0.9;

// Particles
pub const PARTICLE_COUNT: usize = 150;
pub const SPAWN_HALF_EXTENT: f64 = 40.0; // spawn square around the anchor
pub const PARTICLE_MAX_SPEED: f64 = 2.0;
pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
pub const PARTICLE_RADIUS_MAX: f64 = 3.0;
pub const PARTICLE_ALPHA_MIN: f32 = 0.2;
pub const PARTICLE_ALPHA_MAX: f32 = 1.0;

// Icon overlay
pub const ICON_RADIUS: f64 = 50.0;
pub const ICON_BORDER_WIDTH: f64 = 3.0;

// Song info overlay
pub const TITLE_FONT: &str = "bold 16pt Maven Pro";
pub const TIME_FONT: &str = "bold 10pt Maven Pro";
pub const TEXT_MARGIN_X: f64 = 10.0;
pub const TITLE_Y: f64 = 0.8; // fraction of canvas height
pub const TIME_Y: f64 = 0.835;
pub const TEXT_SHADOW_BLUR: f64 = 30.0;
pub const BAR_SHADOW_BLUR: f64 = 60.0;

// Pixel filters
pub const LUMA_WEIGHTS: [f64; 3] = [0.1, 0.7, 0.2];
pub const THRESHOLD_CUTOFF: f64 = 128.0;

// Audio effect ranges
pub const BASS_SHELF_HZ: f32 = 75.0;
pub const DELAY_MAX_SEC: f32 = 1.0;
pub const BASS_GAIN_LIMIT_DB: f32 = 40.0;
