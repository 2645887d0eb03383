//! A bit-parallel debouncer that turns a noisy port read into stable levels
//! and press/release events.

/// `Debouncer` is a sample-based, allocation-free debouncer for one 8-bit
/// port, one bit per switch.
///
/// # Algorithm
/// Each raw port read is normalized against the pull configuration so that an
/// idle line is a 1 bit and an active (held) line is a 0 bit, whichever way
/// the line is pulled. The last `DEPTH` normalized reads live in a ring
/// buffer, and the debounced state is the bitwise AND across that window: a
/// line reports active as soon as any read in the window is active, and it
/// only returns to idle once the whole window reads idle again. The vote is
/// asymmetric on purpose: a press lands within one sample period, while a
/// release must sit clean for a full `DEPTH` periods.
///
/// # Sampling
/// Call [`update`](Self::update) once per fixed sample period. The debounce
/// window is `DEPTH` sample periods, so pick `DEPTH` and the period such that
/// their product covers the switch settle time (tens of milliseconds for a
/// typical mechanical switch). Everything is counted in samples, not wall
/// clock time; irregular calling weakens the filtering but is not detected.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer<const DEPTH: usize> {
    /// Ring buffer of the last `DEPTH` normalized port reads.
    history: [u8; DEPTH],
    /// Next history slot to overwrite.
    index: usize,
    /// Normalized state, a bit is 1 when the whole window read idle.
    debounced: u8,
    /// Bits whose debounced state flipped on the latest update.
    changed: u8,
    /// Pull configuration, a 1 bit for every line pulled up (idle high).
    pull_ups: u8,
}

impl<const DEPTH: usize> Debouncer<DEPTH> {
    /// Create a debouncer with every line starting out debounced-idle.
    ///
    /// `pull_ups` gives each line's pull direction: a 1 bit for a line
    /// pulled up (idle high, active low), a 0 bit for a line pulled down
    /// (idle low, active high). Any mix is fine.
    pub const fn new(pull_ups: u8) -> Self {
        Self {
            history: [0xFF; DEPTH],
            index: 0,
            debounced: 0xFF,
            changed: 0,
            pull_ups,
        }
    }

    /// Feed one raw port read, where bit n is the instantaneous electrical
    /// level of line n.
    ///
    /// Recomputes the debounced state of all 8 lines and the change flags
    /// reported by [`pressed`](Self::pressed) and [`released`](Self::released).
    pub fn update(&mut self, port: u8) {
        let previous = self.debounced;

        // An active line becomes a 0 bit and an idle line a 1 bit no matter
        // which way it is pulled, so one AND can vote over the whole port.
        self.history[self.index] = !(port ^ self.pull_ups);
        self.index = (self.index + 1) % DEPTH;

        self.debounced = self.history.iter().fold(0xFF, |vote, &sample| vote & sample);
        self.changed = self.debounced ^ previous;
    }

    /// Lines among `lines` that went active on the latest
    /// [`update`](Self::update).
    pub fn pressed(&self, lines: u8) -> u8 {
        self.changed & !self.debounced & lines
    }

    /// Lines among `lines` that returned to idle on the latest
    /// [`update`](Self::update).
    pub fn released(&self, lines: u8) -> u8 {
        self.changed & self.debounced & lines
    }

    /// The debounced port in electrical sense: each bit is the level a read
    /// of that line would show with the bounce filtered out. A pull-up line
    /// reads 0 while held, a pull-down line reads 1.
    pub fn state(&self) -> u8 {
        !(self.debounced ^ self.pull_ups)
    }
}
