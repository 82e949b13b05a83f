//! Seating layout constants and runtime configuration defaults

// Classroom layout
/// Number of seat rows in the default layout
pub const DEFAULT_ROWS: usize = 7;
/// Number of seat columns in the default layout
pub const DEFAULT_COLS: usize = 6;
/// Largest grid, in seats, that construction accepts
pub const MAX_SEAT_COUNT: usize = 1 << 16;
/// Seat numbers (1-based, row-major) that are permanently empty
pub const DEFAULT_BLOCKED_SEATS: [usize; 3] = [30, 31, 35];

// Identifier space
/// Highest identifier; identifiers equal to blocked seat numbers are never issued
pub const DEFAULT_IDENTIFIER_COUNT: u32 = 42;
/// Identifiers up to and including this value are male, the rest female
pub const DEFAULT_GENDER_BOUNDARY: u32 = 21;

// Anchors
/// Identifier whose neighbors must all be male
pub const DEFAULT_PRIMARY_ANCHOR: u32 = 21;
/// Identifier whose neighbors must all be female
pub const DEFAULT_SECONDARY_ANCHOR: u32 = 13;
/// Anchors must differ by more than this many rows or columns
pub const DEFAULT_ANCHOR_SEPARATION: usize = 2;

// Search budgets
/// Maximum number of full construction attempts
pub const DEFAULT_MAX_ATTEMPTS: usize = 5000;
/// Maximum hill-climbing passes per attempt
pub const DEFAULT_OPTIMIZATION_ITERATIONS: usize = 1000;
/// Maximum anchor repair rounds per attempt
pub const DEFAULT_REPAIR_ITERATIONS: usize = 50;

// Output settings
/// Width of the attempt progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Edge length of one seat block in exported PNG charts
pub const SEAT_PIXEL_SIZE: u32 = 24;
/// Chart color for male seats
pub const MALE_COLOR: [u8; 4] = [52, 101, 164, 255];
/// Chart color for female seats
pub const FEMALE_COLOR: [u8; 4] = [204, 0, 0, 255];
/// Chart color for valid seats that were left empty
pub const UNASSIGNED_COLOR: [u8; 4] = [200, 200, 200, 255];
