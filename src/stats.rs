use serde::{Deserialize, Serialize};

/// Online mean and sample standard deviation (Welford's algorithm).
pub struct Accumulator {
    count: usize,
    mean: f64,
    sq_diff_sum: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccumulatorReport {
    pub mean: f64,
    pub std_dev: f64,
}

impl Accumulator {
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            sq_diff_sum: 0.0,
        }
    }

    pub fn add(&mut self, val: f64) {
        self.count += 1;

        let diff_a = val - self.mean;
        self.mean += diff_a / self.count as f64;

        let diff_b = val - self.mean;
        self.sq_diff_sum += diff_a * diff_b;
    }

    pub fn report(&self) -> AccumulatorReport {
        AccumulatorReport {
            mean: self.mean,
            std_dev: if self.count > 1 {
                (self.sq_diff_sum / (self.count as f64 - 1.0)).sqrt()
            } else {
                f64::NAN
            },
        }
    }
}
