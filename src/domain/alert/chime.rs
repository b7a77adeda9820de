//! Synthesized fallback chime

use std::time::Duration;

/// Three-tone ascending chime (C5, E5, G5) with overlapping tones.
///
/// Each tone ramps linearly to `peak` during `attack`, then decays
/// exponentially to `floor` at the end of the tone.
#[derive(Debug, Clone, PartialEq)]
pub struct ChimeSpec {
    pub frequencies: Vec<f32>,
    pub tone_length: Duration,
    pub stagger: Duration,
    pub attack: Duration,
    pub peak: f32,
    pub floor: f32,
}

impl ChimeSpec {
    /// Start offset of the tone at `index`
    pub fn onset(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    /// Length of the whole chime, from the first onset to the last tone's end
    pub fn total_length(&self) -> Duration {
        match self.frequencies.len() {
            0 => Duration::ZERO,
            n => self.onset(n - 1) + self.tone_length,
        }
    }

    /// Envelope gain at `t` from the tone's own start
    pub fn gain_at(&self, t: Duration) -> f32 {
        if t >= self.tone_length {
            return 0.0;
        }
        if t < self.attack {
            return self.peak * t.as_secs_f32() / self.attack.as_secs_f32();
        }

        let decay = (self.tone_length - self.attack).as_secs_f32();
        if decay <= 0.0 {
            return self.peak;
        }
        let progress = (t - self.attack).as_secs_f32() / decay;
        self.peak * (self.floor / self.peak).powf(progress)
    }
}

impl Default for ChimeSpec {
    fn default() -> Self {
        Self {
            frequencies: vec![523.25, 659.25, 783.99],
            tone_length: Duration::from_millis(150),
            stagger: Duration::from_millis(100),
            attack: Duration::from_millis(20),
            peak: 0.2,
            floor: 0.001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn default_is_major_triad() {
        let chime = ChimeSpec::default();
        assert_eq!(chime.frequencies, vec![523.25, 659.25, 783.99]);
    }

    #[test]
    fn tones_are_staggered() {
        let chime = ChimeSpec::default();
        assert_eq!(chime.onset(0), Duration::ZERO);
        assert_eq!(chime.onset(1), Duration::from_millis(100));
        assert_eq!(chime.onset(2), Duration::from_millis(200));
        assert_eq!(chime.total_length(), Duration::from_millis(350));
    }

    #[test]
    fn attack_is_linear() {
        let chime = ChimeSpec::default();
        assert!(approx(chime.gain_at(Duration::ZERO), 0.0));
        assert!(approx(chime.gain_at(Duration::from_millis(10)), 0.1));
        assert!(approx(chime.gain_at(Duration::from_millis(20)), 0.2));
    }

    #[test]
    fn decay_is_exponential_to_floor() {
        let chime = ChimeSpec::default();
        let midpoint = chime.gain_at(Duration::from_millis(85));
        let expected = 0.2 * (0.001f32 / 0.2).powf(0.5);
        assert!(approx(midpoint, expected));
        assert!(chime.gain_at(Duration::from_micros(149_999)) < 0.0011);
        assert_eq!(chime.gain_at(Duration::from_millis(150)), 0.0);
    }

    #[test]
    fn decay_is_monotonic() {
        let chime = ChimeSpec::default();
        let mut previous = chime.gain_at(Duration::from_millis(20));
        for ms in 21..150 {
            let gain = chime.gain_at(Duration::from_millis(ms));
            assert!(gain < previous);
            previous = gain;
        }
    }
}
