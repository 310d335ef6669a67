//! Shared constants: reserved element ids, user-facing copy, and defaults.

// ── Reserved DOM ids ────────────────────────────────────────────

/// Id of the floating toggle button. At most one element carries it.
pub const TOGGLE_BUTTON_ID: &str = "ai-assistant-btn";

/// Id of the chat panel container. At most one element carries it.
pub const CHAT_PANEL_ID: &str = "ai-chat-container";

/// Class that hides the chat panel.
pub const HIDDEN_CLASS: &str = "hidden";

// ── Host page shape ─────────────────────────────────────────────

/// Path fragment that marks a content-viewing page.
pub const WATCH_PATH_MARKER: &str = "/watch";

/// Query parameter carrying the content identity.
pub const IDENTITY_QUERY_PARAM: &str = "v";

// ── Copy ────────────────────────────────────────────────────────

/// Greeting shown when the widget is first created.
pub const WELCOME_GREETING: &str =
    "👋 Hi! I can help you understand this video. Ask me anything about what you're watching!";

/// Greeting shown after navigating to a different video.
pub const NEW_CONTENT_GREETING: &str = "👋 New video detected! Ask me a question about what you're watching.";

/// Assistant reply when no video id can be read from the page address.
pub const MISSING_IDENTITY_MESSAGE: &str =
    "❌ Couldn't detect the video id. Are you on a video page?";

/// Assistant reply for any backend failure. The underlying error is logged only.
pub const BACKEND_FAILURE_MESSAGE: &str = "Sorry, something went wrong. Please try again later.";

/// Status text while a backend call is in flight.
pub const IN_PROGRESS_STATUS: &str = "Analyzing the video...";

/// Label on the floating toggle button.
pub const TOGGLE_BUTTON_LABEL: &str = "🤖 Ask AI";

/// Placeholder of the question input.
pub const INPUT_PLACEHOLDER: &str = "Ask your question...";

// ── Backend defaults ────────────────────────────────────────────

pub const DEFAULT_BACKEND_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_ASK_PATH: &str = "/ask";
pub const DEFAULT_HEALTH_PATH: &str = "/health";

// ── Timing defaults ─────────────────────────────────────────────

/// Upper bound on waiting for an anchor to appear.
pub const DEFAULT_INSERT_TIMEOUT_MS: u32 = 10_000;

/// Delay before the button is inserted once an anchor is found.
pub const DEFAULT_INSERT_SETTLE_DELAY_MS: u32 = 2_000;

/// Coalescing window for mutation batches before the URL is compared.
pub const DEFAULT_NAVIGATION_DEBOUNCE_MS: u32 = 50;

/// Fixed-position inline style of the toggle button.
pub const TOGGLE_BUTTON_STYLE: &str = "position: fixed !important; top: 120px !important; \
    right: 20px !important; z-index: 10000 !important; cursor: pointer !important; \
    display: flex !important; align-items: center !important; gap: 8px !important;";
