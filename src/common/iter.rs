use super::metadata::Version;

// Zigzag traversal over the symbol
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Sweep {
    Up,
    Down,
}

// Column within the current two column strip
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Lane {
    Right,
    Left,
}

// Transition table, evaluated after a cell is yielded:
//
// | Lane  | Condition                       | Step       |
// |-------|---------------------------------|------------|
// | Right | always                          | CrossLane  |
// | Left  | row not at the sweep's boundary | Advance    |
// | Left  | boundary, next strip is col 6   | SkipTiming |
// | Left  | boundary, next strip below 0    | Finish     |
// | Left  | boundary otherwise              | Turn       |
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Step {
    // Right lane to left lane on the same row
    CrossLane,
    // Next row in the sweep direction, back to the right lane
    Advance,
    // Next strip two columns left, sweep reversed
    Turn,
    // Like Turn, but the strip shifts one further to clear the timing column
    SkipTiming,
    Finish,
}

/// Yields every `(row, col)` outside the vertical timing column in data
/// placement order, starting at the bottom right corner moving upwards.
#[derive(Debug, Clone)]
pub struct Zigzag {
    row: i32,
    // Right column of the current strip
    col: i32,
    width: i32,
    sweep: Sweep,
    lane: Lane,
    done: bool,
}

impl Zigzag {
    pub fn new(ver: Version) -> Self {
        let w = ver.width() as i32;
        Self { row: w - 1, col: w - 1, width: w, sweep: Sweep::Up, lane: Lane::Right, done: false }
    }

    fn at_boundary(&self) -> bool {
        match self.sweep {
            Sweep::Up => self.row == 0,
            Sweep::Down => self.row == self.width - 1,
        }
    }

    fn transition(&self) -> Step {
        match self.lane {
            Lane::Right => Step::CrossLane,
            Lane::Left if !self.at_boundary() => Step::Advance,
            Lane::Left => match self.col - 2 {
                VERT_TIMING_COL => Step::SkipTiming,
                c if c < 0 => Step::Finish,
                _ => Step::Turn,
            },
        }
    }

    fn apply(&mut self, step: Step) {
        match step {
            Step::CrossLane => self.lane = Lane::Left,
            Step::Advance => {
                self.row += match self.sweep {
                    Sweep::Up => -1,
                    Sweep::Down => 1,
                };
                self.lane = Lane::Right;
            }
            Step::Turn | Step::SkipTiming => {
                self.col -= if step == Step::SkipTiming { 3 } else { 2 };
                self.sweep = match self.sweep {
                    Sweep::Up => Sweep::Down,
                    Sweep::Down => Sweep::Up,
                };
                self.lane = Lane::Right;
            }
            Step::Finish => self.done = true,
        }
    }
}

impl Iterator for Zigzag {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let col = match self.lane {
            Lane::Right => self.col,
            Lane::Left => self.col - 1,
        };
        let res = (self.row, col);
        let step = self.transition();
        self.apply(step);
        Some(res)
    }
}


// Global constants
//------------------------------------------------------------------------------

pub const VERT_TIMING_COL: i32 = 6;
