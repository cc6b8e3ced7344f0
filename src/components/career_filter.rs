// src/components/career_filter.rs
use std::{fmt, str::FromStr};

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("unknown filter field '{0}'")]
    UnknownField(String),

    #[error("'{value}' is not a valid {field} option")]
    UnknownOption { field: &'static str, value: String },
}

/// Declares a fixed option set: `value` is the form value, `label` the visible text.
macro_rules! option_set {
    ($name:ident, $field:literal, { $($variant:ident => ($value:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = FilterError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok($name::$variant),)+
                    other => Err(FilterError::UnknownOption {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.value())
            }
        }
    };
}

option_set!(Industry, "industry", {
    Technology => ("technology", "Technology"),
    Healthcare => ("healthcare", "Healthcare"),
    Finance => ("finance", "Finance"),
    Education => ("education", "Education"),
    Marketing => ("marketing", "Marketing"),
});

option_set!(Experience, "experience", {
    Entry => ("entry", "Entry Level"),
    Mid => ("mid", "Mid Level"),
    Senior => ("senior", "Senior Level"),
});

option_set!(SalaryRange, "salary", {
    UpTo50k => ("0-50000", "$0 - $50,000"),
    From50kTo100k => ("50000-100000", "$50,000 - $100,000"),
    Over100k => ("100000+", "$100,000+"),
});

/// `None` in any field means "any".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub industry: Option<Industry>,
    pub experience: Option<Experience>,
    pub salary: Option<SalaryRange>,
    pub remote: bool,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}

/// A single control mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChange {
    Industry(Option<Industry>),
    Experience(Option<Experience>),
    Salary(Option<SalaryRange>),
    Remote(bool),
}

impl FilterChange {
    /// Parses a form submission for one control. An empty value selects "any".
    pub fn parse(field: &str, value: &str) -> Result<Self, FilterError> {
        let value = value.trim();
        match field {
            "industry" => Ok(FilterChange::Industry(parse_optional(value)?)),
            "experience" => Ok(FilterChange::Experience(parse_optional(value)?)),
            "salary" => Ok(FilterChange::Salary(parse_optional(value)?)),
            "remote" => match value {
                "" | "false" | "off" => Ok(FilterChange::Remote(false)),
                "true" | "on" => Ok(FilterChange::Remote(true)),
                other => Err(FilterError::UnknownOption {
                    field: "remote",
                    value: other.to_string(),
                }),
            },
            other => Err(FilterError::UnknownField(other.to_string())),
        }
    }
}

fn parse_optional<T: FromStr<Err = FilterError>>(value: &str) -> Result<Option<T>, FilterError> {
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

pub type FilterCallback = Box<dyn FnMut(&FilterCriteria) + Send>;

/// Owns the current criteria; the callback is its only outward effect.
pub struct CareerFilter {
    criteria: FilterCriteria,
    on_change: FilterCallback,
}

impl fmt::Debug for CareerFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CareerFilter")
            .field("criteria", &self.criteria)
            .finish()
    }
}

impl CareerFilter {
    pub fn new(on_change: impl FnMut(&FilterCriteria) + Send + 'static) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            on_change: Box::new(on_change),
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.criteria
    }

    pub fn apply(&mut self, change: FilterChange) -> FilterCriteria {
        let next = match change {
            FilterChange::Industry(industry) => FilterCriteria { industry, ..self.criteria },
            FilterChange::Experience(experience) => FilterCriteria { experience, ..self.criteria },
            FilterChange::Salary(salary) => FilterCriteria { salary, ..self.criteria },
            FilterChange::Remote(remote) => FilterCriteria { remote, ..self.criteria },
        };
        self.publish(next)
    }

    pub fn reset(&mut self) -> FilterCriteria {
        self.publish(FilterCriteria::default())
    }

    fn publish(&mut self, next: FilterCriteria) -> FilterCriteria {
        self.criteria = next;
        (self.on_change)(&self.criteria);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_filter() -> (CareerFilter, Arc<Mutex<Vec<FilterCriteria>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let filter = CareerFilter::new(move |c| sink.lock().unwrap().push(*c));
        (filter, seen)
    }

    #[test]
    fn each_change_notifies_once_with_new_criteria() {
        let (mut filter, seen) = recording_filter();
        filter.apply(FilterChange::Industry(Some(Industry::Finance)));
        filter.apply(FilterChange::Remote(true));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].industry, Some(Industry::Finance));
        assert!(!seen[0].remote);
        assert_eq!(seen[1].industry, Some(Industry::Finance));
        assert!(seen[1].remote);
    }

    #[test]
    fn reset_restores_defaults_and_notifies() {
        let (mut filter, seen) = recording_filter();
        filter.apply(FilterChange::Salary(Some(SalaryRange::Over100k)));
        let after = filter.reset();

        assert!(after.is_default());
        assert!(filter.criteria().is_default());
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].is_default());
    }

    #[test]
    fn parse_form_values() {
        assert_eq!(
            FilterChange::parse("experience", "mid"),
            Ok(FilterChange::Experience(Some(Experience::Mid)))
        );
        assert_eq!(FilterChange::parse("industry", ""), Ok(FilterChange::Industry(None)));
        assert_eq!(
            FilterChange::parse("salary", "100000+"),
            Ok(FilterChange::Salary(Some(SalaryRange::Over100k)))
        );
        assert_eq!(FilterChange::parse("remote", "on"), Ok(FilterChange::Remote(true)));
        assert!(matches!(
            FilterChange::parse("industry", "mining"),
            Err(FilterError::UnknownOption { field: "industry", .. })
        ));
        assert!(matches!(
            FilterChange::parse("colour", "red"),
            Err(FilterError::UnknownField(_))
        ));
    }
}
