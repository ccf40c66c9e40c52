// Page wiring constants: element ids, asset paths and playback defaults.

// Elements
pub const CANVAS_ID: &str = "canvas";
pub const STATUS_ID: &str = "status";
pub const FULLSCREEN_BUTTON_ID: &str = "fsbutton";

// Control ids
pub const TRACK_SELECT_ID: &str = "trackSelect";
pub const CENTER_EFFECT_ID: &str = "centEffect";
pub const RANDOM_COLORS_ID: &str = "checkboxColors";
pub const FREQ_BARS_ID: &str = "checkboxFreqBar";
pub const HORIZON_ID: &str = "checkboxHoriz";
pub const WAVEFORM_ID: &str = "checkboxWaveform";
pub const VERSION_ID: &str = "versions";
pub const DELAY_SLIDER_ID: &str = "sliderReverb";
pub const BASS_SLIDER_ID: &str = "sliderBass";
pub const GRAYSCALE_ID: &str = "checkboxGrayscale";
pub const THRESHOLD_ID: &str = "checkboxThreshold";
pub const INVERT_ID: &str = "checkboxInvert";

// Slider value echoes
pub const DELAY_LABEL_ID: &str = "reverbResult";
pub const BASS_LABEL_ID: &str = "bassResult";

// Images
pub const WALLPAPER_SRC: &str = "images/wallpaper.png";
pub const WALLPAPER_REAL_SRC: &str = "images/wallpaper2.png";
pub const ICON_SRC: &str = "images/me.png";

// Playback
pub const PLAYBACK_VOLUME: f64 = 0.02;
pub const STATUS_PREFIX: &str = "Now playing: ";
