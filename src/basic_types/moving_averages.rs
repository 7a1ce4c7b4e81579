/// Running mean over every term added so far.
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct CumulativeMovingAverage {
    sum: u64,
    num_terms: u64,
}

impl CumulativeMovingAverage {
    pub(crate) fn add_term(&mut self, new_term: u64) {
        self.sum += new_term;
        self.num_terms += 1
    }

    pub(crate) fn value(&self) -> f64 {
        if self.num_terms > 0 {
            (self.sum as f64) / (self.num_terms as f64)
        } else {
            0.0
        }
    }
}

/// Exponential moving average where every new term moves the value by `weight` times its
/// distance to the current value. A large weight gives a fast (short window) average.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ExponentialMovingAverage {
    weight: f64,
    value: f64,
}

impl ExponentialMovingAverage {
    pub(crate) fn new(weight: f64) -> Self {
        assert!(weight.is_finite());
        assert!(weight > 0.0 && weight <= 1.0);
        ExponentialMovingAverage { weight, value: 0.0 }
    }

    pub(crate) fn add_term(&mut self, new_term: f64) {
        self.value += self.weight * (new_term - self.value);
    }

    pub(crate) fn value(&self) -> f64 {
        self.value
    }
}
