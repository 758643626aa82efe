// Scroll-driven sentence sequencer.
//
// A pinned region is scrolled through as a single progress value in
// [0, 1]. The region is split into one equal window per sentence; the
// window under the current progress decides which sentence is shown, and
// the fractional position inside that window drives the word-by-word
// entrance and exit.

use super::constants::*;
use super::tween::Tween;
use smallvec::SmallVec;

/// Which sentence is showing and how far through its window we are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollFrame {
    pub sentence_index: usize,
    pub local_progress: f32,
}

/// Non-finite progress degrades to the start of the region.
#[inline]
pub fn sanitize_progress(progress: f32) -> f32 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Map overall progress onto a sentence window. `None` when there is
/// nothing to show.
pub fn scroll_frame(progress: f32, sentence_count: usize) -> Option<ScrollFrame> {
    if sentence_count == 0 {
        return None;
    }
    let scaled = sanitize_progress(progress) * sentence_count as f32;
    let whole = scaled.floor();
    let raw_index = whole as usize;
    // progress == 1 lands one past the last window; pin it to the end of the
    // last sentence instead of wrapping the fraction back to 0.
    if raw_index >= sentence_count {
        return Some(ScrollFrame {
            sentence_index: sentence_count - 1,
            local_progress: 1.0,
        });
    }
    Some(ScrollFrame {
        sentence_index: raw_index,
        local_progress: (scaled - whole).clamp(0.0, 1.0),
    })
}

/// Even sentences slide in from above (negative y), odd ones from below.
#[inline]
pub fn slide_sign(sentence_index: usize) -> f32 {
    if sentence_index % 2 == 0 {
        -1.0
    } else {
        1.0
    }
}

/// Computed (unsmoothed) state of one word for a given local progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WordMotion {
    pub word_progress: f32,
    pub exit_progress: f32,
    pub entry_y: f32,
    pub offset_y: f32,
    pub opacity: f32,
}

pub fn word_motion(word_index: usize, local_progress: f32, sentence_index: usize) -> WordMotion {
    let local = sanitize_progress(local_progress);
    let stagger = word_index as f32 * WORD_STAGGER;
    let word_progress = ((local - stagger) * WORD_ENTRY_RATE).clamp(0.0, 1.0);
    // The end of a window always means fully exited.
    let exit_progress = if local >= 1.0 {
        1.0
    } else {
        ((local - EXIT_START) * EXIT_RATE).clamp(0.0, 1.0)
    };

    let sign = slide_sign(sentence_index);
    let entry_y = sign * SLIDE_DISTANCE * (1.0 - word_progress);
    let exit_y = sign * SLIDE_DISTANCE * exit_progress;

    let entry_opacity = (word_progress * ENTRY_OPACITY_RATE).clamp(0.0, 1.0);
    let exit_opacity = 1.0 - exit_progress;

    WordMotion {
        word_progress,
        exit_progress,
        entry_y,
        offset_y: entry_y + exit_y,
        opacity: entry_opacity * exit_opacity,
    }
}

/// One token of the active sentence plus its displayed (smoothed) state.
#[derive(Clone, Debug)]
pub struct Word {
    pub text: String,
    pub target: WordMotion,
    offset_y: Tween,
    opacity: Tween,
}

impl Word {
    fn new(text: &str, index: usize, sentence_index: usize) -> Self {
        let rest = word_motion(index, 0.0, sentence_index);
        Self {
            text: text.to_string(),
            target: rest,
            offset_y: Tween::at(rest.offset_y, WORD_TWEEN_SEC),
            opacity: Tween::at(rest.opacity, WORD_TWEEN_SEC),
        }
    }

    pub fn offset_y(&self) -> f32 {
        self.offset_y.value()
    }

    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn is_settled(&self) -> bool {
        self.offset_y.is_settled() && self.opacity.is_settled()
    }
}

pub struct ScrollSequencer {
    sentences: Vec<String>,
    active_index: Option<usize>,
    words: SmallVec<[Word; 8]>,
}

impl ScrollSequencer {
    pub fn new<I, S>(sentences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seq = Self {
            sentences: sentences.into_iter().map(Into::into).collect(),
            active_index: None,
            words: SmallVec::new(),
        };
        if !seq.sentences.is_empty() {
            seq.activate(0);
        }
        seq
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_sentence(&self) -> Option<&str> {
        self.active_index
            .and_then(|i| self.sentences.get(i))
            .map(String::as_str)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Feed a new scroll progress. Returns `true` when the active sentence
    /// changed and the word list was rebuilt.
    pub fn set_progress(&mut self, progress: f32) -> bool {
        let Some(frame) = scroll_frame(progress, self.sentences.len()) else {
            return false;
        };
        let changed = self.active_index != Some(frame.sentence_index);
        if changed {
            self.activate(frame.sentence_index);
        }
        for (i, word) in self.words.iter_mut().enumerate() {
            let m = word_motion(i, frame.local_progress, frame.sentence_index);
            word.target = m;
            word.offset_y.retarget(m.offset_y);
            word.opacity.retarget(m.opacity);
        }
        changed
    }

    /// True once every word has finished easing toward its target.
    pub fn is_settled(&self) -> bool {
        self.words.iter().all(Word::is_settled)
    }

    /// Advance the display smoothing by one frame.
    pub fn tick(&mut self, dt_sec: f32) {
        for word in self.words.iter_mut() {
            word.offset_y.step(dt_sec);
            word.opacity.step(dt_sec);
        }
    }

    // Any index change, forward or backward, rebuilds the words from scratch.
    fn activate(&mut self, index: usize) {
        let Some(sentence) = self.sentences.get(index) else {
            return;
        };
        self.words = sentence
            .split_whitespace()
            .enumerate()
            .map(|(i, text)| Word::new(text, i, index))
            .collect();
        self.active_index = Some(index);
        log::debug!(
            "[sequencer] sentence {} active ({} words)",
            index,
            self.words.len()
        );
    }
}
