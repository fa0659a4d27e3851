use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

use thiserror::Error;

/// Wire field names in order of appearance, used in decode errors.
const FIELD_NAMES: [&str; 4] = ["pitch", "roll", "noisy_pitch", "noisy_roll"];

/// The ways a telemetry line can fail to decode.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("expected {} comma separated fields, found {found}", FIELD_NAMES.len())]
    FieldCount { found: usize },
    #[error("{field} field is not a number")]
    InvalidField {
        field: &'static str,
        source: ParseFloatError,
    },
}

/// One decoded telemetry record: the true and the noise corrupted attitude
/// angles reported by the device for a single tick.
///
/// The wire format is a single text line of four comma separated decimal
/// numbers:
///
/// ```text
/// <pitch>, <roll>, <noisy pitch>, <noisy roll>
/// ```
///
/// Whitespace around each field is ignored. [`FromStr`] decodes a line and
/// [`fmt::Display`] emits one, so producers and consumers share one format
/// definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttitudeRecord {
    pub pitch: f64,
    pub roll: f64,
    pub noisy_pitch: f64,
    pub noisy_roll: f64,
}

impl FromStr for AttitudeRecord {
    type Err = DecodeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != FIELD_NAMES.len() {
            return Err(DecodeError::FieldCount {
                found: fields.len(),
            });
        }
        let mut values = [0.0; 4];
        for ((value, field), name) in values.iter_mut().zip(&fields).zip(FIELD_NAMES) {
            *value = field
                .trim()
                .parse()
                .map_err(|source| DecodeError::InvalidField {
                    field: name,
                    source,
                })?;
        }
        Ok(AttitudeRecord {
            pitch: values[0],
            roll: values[1],
            noisy_pitch: values[2],
            noisy_roll: values[3],
        })
    }
}

impl fmt::Display for AttitudeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.pitch, self.roll, self.noisy_pitch, self.noisy_roll
        )
    }
}
