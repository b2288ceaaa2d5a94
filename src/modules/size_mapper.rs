use anyhow::Error;
use crate::config::config::SizeChartConfig;

#[derive(Debug, Clone)]
pub struct SizeMapper {
    brackets: Vec<(f32, String)>,
    fallback_size: String,
}

impl SizeMapper {
    /// new initializes new instance of the size mapper module.
    ///
    /// The chart is data, not logic; its invariants are checked once here:
    /// thresholds must be strictly increasing and the terminal bracket must
    /// carry an infinite catch-all threshold.
    ///
    /// # Arguments
    /// * `config` - the volume-to-size chart
    ///
    /// # Returns
    /// * `Result<SizeMapper, Error>`
    pub fn new(config: SizeChartConfig) -> Result<Self, Error> {
        let last = match config.brackets.last() {
            None => return Err(Error::msg("size_mapper - size chart must not be empty")),
            Some(last) => last,
        };
        if !last.0.is_infinite() {
            return Err(Error::msg(
                "size_mapper - size chart must end with an infinite catch-all threshold",
            ));
        }
        for pair in config.brackets.windows(2) {
            if pair[0].0 >= pair[1].0 {
                return Err(Error::msg(
                    "size_mapper - size chart thresholds must be strictly increasing",
                ));
            }
        }

        Ok(SizeMapper {
            brackets: config.brackets,
            fallback_size: config.fallback_size,
        })
    }

    /// map returns the size label of the first bracket whose threshold is
    /// greater than or equal to the adjusted volume (inclusive upper bound).
    ///
    /// # Arguments
    /// * `volume_adjusted` - growth-adjusted volume estimate
    ///
    /// # Returns
    /// * `String` - recommended size label
    pub fn map(&self, volume_adjusted: f32) -> String {
        for (threshold, size) in &self.brackets {
            if volume_adjusted <= *threshold {
                return size.to_owned();
            }
        }
        self.fallback_size.to_owned()
    }
}
