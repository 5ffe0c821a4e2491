pub const WHEEL_SLICES: usize = 12;
pub const WIN_SLICES: usize = 4;
pub const TRY_AGAIN_SLICES: usize = WHEEL_SLICES - WIN_SLICES;
pub const MAX_SPIN_TRIES: u8 = 2;

// Degrees the pointer turns per slice
pub const SLICE_ANGLE_DEG: i32 = -30;

pub const RESOLVE_DELAY_MS: u32 = 1000;
pub const REVEAL_DELAY_MS: u32 = 2800;

pub const DEFAULT_PRIZE_URL: &str = "prize.json";

pub const WIN_LABEL: &str = "WIN";
pub const TRY_AGAIN_LABEL: &str = "Try Again";

pub const WIDGET_TITLE: &str = "Wheel of Fortune";
pub const WIDGET_HINT: &str = "Fill in the form and spin the wheel!";
pub const SPIN_PROMPT: &str = "Click \"Spin\" to play!";
pub const SPINNING_MESSAGE: &str = "Spinning...";
pub const CONTACT_SUPPORT_MESSAGE: &str = "Please contact customer support to claim your prize.";
pub const THANK_YOU_MESSAGE: &str = "Thank you for playing!";

pub const REQUIRED_ERROR: &str = "Required";
pub const INVALID_EMAIL_ERROR: &str = "Invalid email address";
