use tracing::warn;

use crate::core::GearSet;

/// Extracts tooth counts from free-form input text.
///
/// Every maximal run of ASCII digits becomes one count, in left-to-right
/// order. All non-digit characters (a minus sign included) act purely as
/// separators, so negative values are not representable. Leading zeros
/// are ordinary digits (`"011"` parses as 11). Text without any digits
/// yields an empty set; parsing itself never fails.
#[must_use]
pub fn parse_tooth_counts(text: &str) -> GearSet {
    let mut set = GearSet::new();
    let mut run: Option<DigitRun> = None;

    for byte in text.bytes() {
        if byte.is_ascii_digit() {
            let digit = byte - b'0';
            run = Some(match run.take() {
                Some(mut current) => {
                    current.push(digit);
                    current
                }
                None => DigitRun::start(digit),
            });
        } else if let Some(finished) = run.take() {
            finished.finish_into(&mut set);
        }
    }
    if let Some(finished) = run {
        finished.finish_into(&mut set);
    }

    set
}

/// One in-progress run of consecutive digits.
struct DigitRun {
    value: Option<u32>,
    digits: usize,
}

impl DigitRun {
    fn start(digit: u8) -> Self {
        Self {
            value: Some(u32::from(digit)),
            digits: 1,
        }
    }

    fn push(&mut self, digit: u8) {
        self.digits += 1;
        self.value = self
            .value
            .and_then(|value| value.checked_mul(10))
            .and_then(|value| value.checked_add(u32::from(digit)));
    }

    fn finish_into(self, set: &mut GearSet) {
        match self.value {
            Some(value) => set.push(value),
            // A run that overflows u32 is nonsense input, not a gear.
            None => warn!(digits = self.digits, "discarding oversized digit run"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse_tooth_counts;

    #[test]
    fn oversized_digit_run_is_discarded() {
        let set = parse_tooth_counts("36, 99999999999999999999, 50");
        assert_eq!(set.teeth(), &[36, 50]);
    }

    #[test]
    fn run_at_end_of_input_is_kept() {
        let set = parse_tooth_counts("11-13/15");
        assert_eq!(set.teeth(), &[11, 13, 15]);
    }
}
