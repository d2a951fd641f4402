use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Phrases rotated in the hero banner.
pub const HERO_PHRASES: [&str; 4] = [
    "Full-Stack Developer",
    "UI/UX Designer",
    "Problem Solver",
    "Creative Thinker",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTiming {
    /// Delay between typed characters.
    pub type_speed: Duration,
    /// Delay between deleted characters.
    pub delete_speed: Duration,
    /// Hold time once a word is fully typed.
    pub pause: Duration,
}

impl TypewriterTiming {
    /// Slower cadence used by the hero banner.
    pub const HERO: Self = Self {
        type_speed: Duration::from_millis(100),
        delete_speed: Duration::from_millis(60),
        pause: Duration::from_millis(2500),
    };
}

impl Default for TypewriterTiming {
    fn default() -> Self {
        Self {
            type_speed: Duration::from_millis(80),
            delete_speed: Duration::from_millis(50),
            pause: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    Pausing,
    Deleting,
    /// Only reachable with looping disabled, once the last word is typed.
    Done,
}

/// Character-by-character text rotation: type a word, hold it, delete it,
/// move to the next word.
#[derive(Debug, Clone)]
pub struct Typewriter {
    words: Vec<Vec<char>>,
    timing: TypewriterTiming,
    looping: bool,
    word_index: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(words: I, timing: TypewriterTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<Vec<char>> = words
            .into_iter()
            .map(|w| w.as_ref().chars().collect())
            .collect();
        let phase = if words.is_empty() {
            Phase::Done
        } else {
            Phase::Typing
        };
        Self {
            words,
            timing,
            looping: true,
            word_index: 0,
            shown: 0,
            phase,
        }
    }

    /// With looping off the machine stops as soon as the last word is fully
    /// typed and keeps showing it; it does not delete or retype that word.
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn is_deleting(&self) -> bool {
        self.phase == Phase::Deleting
    }

    pub fn display_text(&self) -> String {
        self.words
            .get(self.word_index)
            .map(|w| w[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    /// Delay before the first call to [`Typewriter::step`].
    pub fn initial_delay(&self) -> Duration {
        self.timing.type_speed
    }

    /// Apply one transition and return the delay before the next one.
    /// `None` means the machine has stopped.
    ///
    /// A fully typed word is held for one extra typing tick before the pause,
    /// and an emptied word for one extra deleting tick before the next word
    /// starts, so a word stays visible for type + pause + delete.
    pub fn step(&mut self) -> Option<Duration> {
        match self.phase {
            Phase::Typing => {
                let len = self.words[self.word_index].len();
                if self.shown < len {
                    self.shown += 1;
                    let last_word = self.word_index + 1 == self.words.len();
                    if self.shown == len && !self.looping && last_word {
                        self.phase = Phase::Done;
                        return None;
                    }
                    return Some(self.timing.type_speed);
                }
                self.phase = Phase::Pausing;
                Some(self.timing.pause)
            }
            Phase::Pausing => {
                self.phase = Phase::Deleting;
                Some(self.timing.delete_speed)
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                    return Some(self.timing.delete_speed);
                }
                self.word_index = (self.word_index + 1) % self.words.len();
                self.phase = Phase::Typing;
                Some(self.timing.type_speed)
            }
            Phase::Done => None,
        }
    }

    /// Drive the machine on a tokio task. Dropping the handle cancels it.
    pub fn spawn(mut self) -> TypewriterHandle {
        let (tx, rx) = watch::channel(self.display_text());
        let task = tokio::spawn(async move {
            let mut delay = Some(self.initial_delay());
            while let Some(wait) = delay {
                tokio::time::sleep(wait).await;
                delay = self.step();
                tx.send_replace(self.display_text());
                if tx.is_closed() {
                    break;
                }
            }
        });
        TypewriterHandle { rx, task }
    }
}

/// Live view of a running [`Typewriter`].
#[derive(Debug)]
pub struct TypewriterHandle {
    rx: watch::Receiver<String>,
    task: JoinHandle<()>,
}

impl TypewriterHandle {
    pub fn text(&self) -> String {
        self.rx.borrow().clone()
    }

    /// Wait for the next text update; `false` once the machine has stopped.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }
}

impl Drop for TypewriterHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
