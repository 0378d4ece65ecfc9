//! Shared numeric constants and reserved card identifiers.

// ── Canvas ──────────────────────────────────────────────────────

/// Side length of the square logical canvas.
pub const GAME_WIDTH: f64 = 600.0;
pub const GAME_HEIGHT: f64 = 600.0;

pub const CENTER_X: f64 = GAME_WIDTH / 2.0;
pub const CENTER_Y: f64 = GAME_HEIGHT / 2.0;

// ── Cards ───────────────────────────────────────────────────────

/// Pixel size of one card frame in the spritesheet.
pub const CARD_IMG_WIDTH: f64 = 88.0;
pub const CARD_IMG_HEIGHT: f64 = 124.0;

/// Uniform scale applied to every card entity.
pub const CARD_SCALE: f64 = 0.75;

/// On-canvas card size after scaling.
pub const CARD_WIDTH: f64 = CARD_IMG_WIDTH * CARD_SCALE;
pub const CARD_HEIGHT: f64 = CARD_IMG_HEIGHT * CARD_SCALE;

/// Number of slots in every player's hand.
pub const HAND_SIZE: usize = 6;

/// Maximum number of face-up cards kept on the table stack.
pub const TABLE_STACK_MAX: usize = 2;

/// Reserved identifier for the deck artwork.
pub const DECK_CARD: &str = "1B";

/// Reserved identifier for a face-down hand card.
pub const DOWN_CARD: &str = "2B";

// ── Anchors ─────────────────────────────────────────────────────

pub const DECK_X: f64 = CENTER_X - CARD_WIDTH / 2.0;
pub const DECK_Y: f64 = CENTER_Y;

/// The deck artwork shows a few pixels of cards below the top card;
/// cards leaving the deck start from the top of that pile.
pub const DECK_Y_OFFSET: f64 = -5.0;

pub const TABLE_CARD_X: f64 = CENTER_X + CARD_WIDTH / 2.0 + 2.0;
pub const TABLE_CARD_Y: f64 = CENTER_Y;

pub const HAND_X_PAD: f64 = 3.0;
pub const HAND_Y_PAD: f64 = 10.0;

// ── Timing (milliseconds) ───────────────────────────────────────

/// Default tween duration when none is given.
pub const DEFAULT_DURATION_MS: f64 = 1000.0;

pub const DEAL_STAGGER_MS: f64 = 180.0;
pub const DECK_SLIDE_MS: f64 = 200.0;
pub const TABLE_REVEAL_MS: f64 = 400.0;
pub const DRAW_MS: f64 = 800.0;
pub const DRAW_FROM_DECK_DELAY_MS: f64 = 150.0;
pub const DISCARD_MS: f64 = 800.0;
pub const SWAP_HELD_MS: f64 = 500.0;
pub const SWAP_TABLE_MS: f64 = 700.0;
pub const SWAP_TABLE_DELAY_MS: f64 = 200.0;

/// Dealt-card order index whose completion starts the deck slide: the end
/// of the first dealt row.
pub const DEAL_CHAIN_INDEX: usize = 2;
