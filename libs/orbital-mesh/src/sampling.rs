//! # Angle Sampling
//!
//! Evenly spaced subdivision midpoints across a partial arc centred on zero.

/// One angular subdivision of the segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Zero-based subdivision index
    pub index: u32,
    /// Central angle of the subdivision, radians
    pub angle: f64,
}

/// Lazy sequence of the `steps` subdivision midpoints of `[-span/2, span/2)`.
///
/// Consumed as it is iterated; build a new one to sample again.
///
/// # Example
///
/// ```rust
/// use orbital_mesh::sampling::AngleSamples;
///
/// let angles: Vec<f64> = AngleSamples::new(90.0, 2).map(|s| s.angle.to_degrees()).collect();
/// assert_eq!(angles.len(), 2);
/// assert!((angles[0] + 22.5).abs() < 1e-12);
/// assert!((angles[1] - 22.5).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct AngleSamples {
    start_deg: f64,
    increment_deg: f64,
    next: u32,
    steps: u32,
}

impl AngleSamples {
    /// Samples `span_deg` degrees in `steps` subdivisions.
    ///
    /// Zero steps yields nothing; a zero span yields `steps` samples at zero.
    pub fn new(span_deg: f64, steps: u32) -> Self {
        let increment_deg = if steps == 0 { 0.0 } else { span_deg / steps as f64 };
        Self {
            start_deg: -span_deg * 0.5,
            increment_deg,
            next: 0,
            steps,
        }
    }

    /// Angular width of one subdivision, degrees.
    pub fn increment_deg(&self) -> f64 {
        self.increment_deg
    }
}

impl Iterator for AngleSamples {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        if self.next >= self.steps {
            return None;
        }

        let index = self.next;
        self.next += 1;

        let angle_deg = self.start_deg + index as f64 * self.increment_deg;
        Some(Sample {
            index,
            angle: (angle_deg + self.increment_deg * 0.5).to_radians(),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AngleSamples {}
