//! Keystroke resolution state machine.
//!
//! Owns one target word and one input buffer; driven a single key at a
//! time, synchronously, to completion. Outcomes are a closed signal set
//! consumed by the engine — no callbacks, no event subscription.

/// Signals produced while resolving keys against the bound target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingSignal {
    /// Buffer changed (or was re-announced). `mistake` marks the buffer
    /// as stale after a failed keystroke.
    Progress { input: String, mistake: bool },
    /// The bound word was fully typed. Emitted exactly once per target.
    Complete { word: String },
    /// A keystroke failed against the bound target.
    Mistake,
    /// Backspace wiped the buffer; bystanders reset their previews.
    Clear,
}

/// Result of feeding one character to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedOutcome {
    /// Non-letter key, no target, or already complete. Absorbed.
    Ignored,
    /// The character committed; may include a completion.
    Signals(Vec<TypingSignal>),
    /// The character does not extend the bound word. The controller may
    /// re-target (only when `committed_len == 0`) before a mistake is
    /// committed via [`TypingResolver::commit_mistake`].
    Mismatch {
        next_input: String,
        committed_len: usize,
    },
}

/// Single-threaded typing resolver. One mutable target word, one input
/// buffer, a completion latch.
#[derive(Debug, Default)]
pub struct TypingResolver {
    target_word: String,
    input_buffer: String,
    mistake: bool,
    completed: bool,
}

impl TypingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target_word(&self) -> &str {
        &self.target_word
    }

    pub fn input(&self) -> &str {
        &self.input_buffer
    }

    pub fn is_mistake(&self) -> bool {
        self.mistake
    }

    pub fn buffer_is_empty(&self) -> bool {
        self.input_buffer.is_empty()
    }

    pub fn has_target(&self) -> bool {
        !self.target_word.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Bind a new target with an empty buffer.
    pub fn set_target(&mut self, word: &str) -> Vec<TypingSignal> {
        self.target_word = word.to_ascii_lowercase();
        self.input_buffer.clear();
        self.mistake = false;
        self.completed = false;
        vec![TypingSignal::Progress {
            input: String::new(),
            mistake: false,
        }]
    }

    /// Unbind. Idempotent; safe from terminal states.
    pub fn clear_target(&mut self) -> Vec<TypingSignal> {
        self.set_target("")
    }

    /// Bind a new target and seed the buffer with an already-typed
    /// prefix (the re-target path). A prefix that does not match the
    /// word falls back to an empty buffer rather than failing — a
    /// dropped seed must never soft-lock input. A seed equal to the
    /// full word completes immediately.
    pub fn set_target_with_input(&mut self, word: &str, prefix: &str) -> Vec<TypingSignal> {
        let target = word.to_ascii_lowercase();
        let seed = prefix.to_ascii_lowercase();
        self.mistake = false;
        self.completed = false;

        if target.is_empty() || !target.starts_with(&seed) {
            self.target_word = target;
            self.input_buffer.clear();
            return vec![TypingSignal::Progress {
                input: String::new(),
                mistake: false,
            }];
        }

        self.target_word = target;
        self.input_buffer = seed;
        let mut signals = vec![TypingSignal::Progress {
            input: self.input_buffer.clone(),
            mistake: false,
        }];
        if self.input_buffer.len() == self.target_word.len() {
            self.completed = true;
            signals.push(TypingSignal::Complete {
                word: self.target_word.clone(),
            });
        }
        signals
    }

    /// Backspace clears the entire buffer, not one character.
    pub fn backspace(&mut self) -> Vec<TypingSignal> {
        self.input_buffer.clear();
        self.mistake = false;
        vec![
            TypingSignal::Progress {
                input: String::new(),
                mistake: false,
            },
            TypingSignal::Clear,
        ]
    }

    /// Feed one character against the bound target. The engine handles
    /// the empty-buffer free-type step before calling this.
    pub fn feed(&mut self, ch: char) -> FeedOutcome {
        if !ch.is_ascii_alphanumeric() {
            return FeedOutcome::Ignored;
        }
        if self.target_word.is_empty() || self.completed {
            return FeedOutcome::Ignored;
        }

        let mut next_input = self.input_buffer.clone();
        next_input.push(ch.to_ascii_lowercase());

        if self.target_word.starts_with(&next_input) {
            self.input_buffer = next_input;
            self.mistake = false;
            let mut signals = vec![TypingSignal::Progress {
                input: self.input_buffer.clone(),
                mistake: false,
            }];
            if self.input_buffer.len() == self.target_word.len() {
                self.completed = true;
                signals.push(TypingSignal::Complete {
                    word: self.target_word.clone(),
                });
            }
            return FeedOutcome::Signals(signals);
        }

        FeedOutcome::Mismatch {
            next_input,
            committed_len: self.input_buffer.len(),
        }
    }

    /// Commit the mistake after a mismatch went unanswered. The buffer
    /// stays as it was.
    pub fn commit_mistake(&mut self) -> Vec<TypingSignal> {
        self.mistake = true;
        vec![
            TypingSignal::Mistake,
            TypingSignal::Progress {
                input: self.input_buffer.clone(),
                mistake: true,
            },
        ]
    }
}
