//! Game configuration options.

use core::time::Duration;

/// Configuration options for a game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use unors::GameOptions;
///
/// let options = GameOptions::default()
///     .with_initial_hand_size(5)
///     .with_draw_pacing(Duration::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Maximum number of cards a hand may hold. Draws beyond it are dropped.
    pub max_hand_size: usize,
    /// Cards dealt to each player at the start of a game.
    pub initial_hand_size: usize,
    /// Shortest opponent thinking delay.
    pub thinking_delay_min: Duration,
    /// Longest opponent thinking delay.
    pub thinking_delay_max: Duration,
    /// Pause after each single card transferred by a draw.
    pub draw_pacing: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            max_hand_size: 20,
            initial_hand_size: 7,
            thinking_delay_min: Duration::from_millis(750),
            thinking_delay_max: Duration::from_millis(1500),
            draw_pacing: Duration::from_millis(350),
        }
    }
}

impl GameOptions {
    /// Options with every delay set to zero, for headless play and tests.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::instant();
    /// assert_eq!(options.draw_pacing, Duration::ZERO);
    /// assert_eq!(options.max_hand_size, 20);
    /// ```
    #[must_use]
    pub fn instant() -> Self {
        Self::default()
            .with_thinking_delay(Duration::ZERO, Duration::ZERO)
            .with_draw_pacing(Duration::ZERO)
    }

    /// Sets the maximum hand size.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_hand_size(12);
    /// assert_eq!(options.max_hand_size, 12);
    /// ```
    #[must_use]
    pub const fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Sets the number of cards dealt to each player.
    ///
    /// # Example
    ///
    /// ```
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_initial_hand_size(5);
    /// assert_eq!(options.initial_hand_size, 5);
    /// ```
    #[must_use]
    pub const fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Sets the range of the opponent's thinking delay.
    ///
    /// If `max` is below `min`, the delay is always `min`.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default()
    ///     .with_thinking_delay(Duration::from_millis(200), Duration::from_millis(400));
    /// assert_eq!(options.thinking_delay_min, Duration::from_millis(200));
    /// assert_eq!(options.thinking_delay_max, Duration::from_millis(400));
    /// ```
    #[must_use]
    pub const fn with_thinking_delay(mut self, min: Duration, max: Duration) -> Self {
        self.thinking_delay_min = min;
        self.thinking_delay_max = max;
        self
    }

    /// Sets the pause after each card of a draw.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use unors::GameOptions;
    ///
    /// let options = GameOptions::default().with_draw_pacing(Duration::from_millis(100));
    /// assert_eq!(options.draw_pacing, Duration::from_millis(100));
    /// ```
    #[must_use]
    pub const fn with_draw_pacing(mut self, pacing: Duration) -> Self {
        self.draw_pacing = pacing;
        self
    }
}
