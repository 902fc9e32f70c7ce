use serde::Serialize;

/// Boundaries splitting `[0, max]` into low, middle and high zones.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct GaugeZones {
    pub low: f64,
    pub mid: f64,
}

/// How good the position of a value on a gauge is.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Tone {
    Good,
    Caution,
    Bad,
}

/// Configuration of a half-circle gauge.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GaugeConfig {
    pub value: f64,
    pub max: f64,
    pub zones: GaugeZones,
    /// High values are bad instead of good. Defaults to `false`.
    pub inverted: bool,
    /// Suffix shown after the value. Defaults to empty.
    pub unit: String,
}

impl GaugeConfig {
    pub fn new(value: f64, max: f64, zones: GaugeZones) -> Self {
        Self {
            value,
            max,
            zones,
            inverted: false,
            unit: String::new(),
        }
    }

    pub fn inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    pub fn unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    /// Widths of the low, middle and high zones, in gauge order.
    pub fn zone_widths(&self) -> [f64; 3] {
        [
            self.zones.low,
            self.zones.mid - self.zones.low,
            self.max - self.zones.mid,
        ]
    }

    /// Tone of each zone, low zone first.
    pub fn zone_tones(&self) -> [Tone; 3] {
        if self.inverted {
            [Tone::Good, Tone::Caution, Tone::Bad]
        } else {
            [Tone::Bad, Tone::Caution, Tone::Good]
        }
    }

    /// Tone of the current value.
    ///
    /// Boundaries are exclusive: a value equal to `mid` is still in the
    /// middle zone and a value equal to `low` is in the low zone.
    pub fn tone(&self) -> Tone {
        let [low, caution, high] = self.zone_tones();
        if self.value > self.zones.mid {
            high
        } else if self.value > self.zones.low {
            caution
        } else {
            low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coverage(value: f64) -> GaugeConfig {
        GaugeConfig::new(value, 5.0, GaugeZones { low: 1.5, mid: 3.0 })
    }

    fn expenses(value: f64) -> GaugeConfig {
        GaugeConfig::new(value, 50.0, GaugeZones { low: 30.0, mid: 40.0 })
            .inverted(true)
            .unit("%")
    }

    #[test]
    fn test_middle_zone_is_caution() {
        assert_eq!(coverage(2.8).tone(), Tone::Caution);
        assert_eq!(expenses(38.0).tone(), Tone::Caution);
    }

    #[test]
    fn test_extremes_swap_when_inverted() {
        assert_eq!(coverage(4.0).tone(), Tone::Good);
        assert_eq!(coverage(1.0).tone(), Tone::Bad);
        assert_eq!(expenses(45.0).tone(), Tone::Bad);
        assert_eq!(expenses(20.0).tone(), Tone::Good);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert_eq!(coverage(3.0).tone(), Tone::Caution);
        assert_eq!(coverage(1.5).tone(), Tone::Bad);
    }

    #[test]
    fn test_zone_widths_cover_range() {
        let gauge = expenses(38.0);
        assert_eq!(gauge.zone_widths(), [30.0, 10.0, 10.0]);
        assert_eq!(gauge.zone_widths().iter().sum::<f64>(), gauge.max);
    }

    #[test]
    fn test_defaults() {
        let gauge = coverage(2.8);
        assert!(!gauge.inverted);
        assert!(gauge.unit.is_empty());
        assert_eq!(gauge.zone_tones(), [Tone::Bad, Tone::Caution, Tone::Good]);
    }
}
