// ============================================================================
// Module : ticker
// ============================================================================
// Rotation des quotes avec fondu, pilotée par une horloge injectée
// ============================================================================

pub mod animator; // State machine du cycle fondu → changement → fondu
pub mod clock;    // Horloge réelle et horloge manuelle (tests)
pub mod target;   // Traits de la zone de rendu
pub mod timer;    // Timer périodique

pub use animator::{Phase, TickerAnimator, TickerTiming};
pub use clock::{Clock, ManualClock, SystemClock};
pub use target::{ContentSpan, FadeState, TickerContent, TickerHost, TickerTarget};
