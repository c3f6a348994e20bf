extern crate serde;

use serde::{Serialize, Deserialize};

/// Buzzer pattern
///
/// `times` is how many beeps to sound and `duration` the length of each one, in units of 100ms. Both usually range from 1 to 9, and are checked by the profile.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct BeepIntent {
    times: u8,
    duration: u8
}

impl Default for BeepIntent {
    fn default() -> BeepIntent {
        BeepIntent {
            times: 1,
            duration: 1
        }
    }
}

impl BeepIntent {
    pub fn new(times: u8, duration: u8) -> BeepIntent {
        BeepIntent {
            times,
            duration
        }
    }

    pub fn times(&self) -> u8 {
        self.times
    }

    pub fn duration(&self) -> u8 {
        self.duration
    }
}
