use std::fmt;

use crate::form::values::FormValues;
use crate::schema::FieldDescriptor;

/// Share of required fields that currently hold a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub required: usize,
}

impl Progress {
    /// Counts required fields and the ones filled in `values`.
    pub fn compute(fields: &[FieldDescriptor], values: &FormValues) -> Self {
        let (required, completed) = fields
            .iter()
            .filter(|field| field.required)
            .fold((0, 0), |(required, completed), field| {
                let filled = usize::from(values.is_filled(field.name));
                (required + 1, completed + filled)
            });
        Self {
            completed,
            required,
        }
    }

    /// Percentage in `[0, 100]`; zero when nothing is required.
    pub fn percent(&self) -> f64 {
        if self.required == 0 {
            return 0.0;
        }
        let ratio = self.completed.min(self.required) as f64 / self.required as f64;
        ratio * 100.0
    }

    /// Percentage rounded for display.
    pub fn rounded(&self) -> u8 {
        self.percent().round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.required > 0 && self.completed >= self.required
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.rounded())
    }
}
