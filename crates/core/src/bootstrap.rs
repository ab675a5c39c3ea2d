//! Page bootstrap: pick a surface and run its initializers in order.
//!
//! Initializers are independent. One that cannot find its markup reports
//! [`Wired::Skipped`]; one that fails reports an error. Neither stops the rest.

use std::fmt::Display;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    BackOffice,
    FrontOffice,
}

impl Surface {
    pub fn attr(self) -> &'static str {
        match self {
            Surface::BackOffice => "back-office",
            Surface::FrontOffice => "front-office",
        }
    }

    /// Use `<body data-surface>` when present, otherwise the back office exactly
    /// when the page has a sidebar.
    pub fn detect(data_surface: Option<&str>, has_sidebar: bool) -> Surface {
        match data_surface.map(str::parse::<Surface>) {
            Some(Ok(surface)) => surface,
            Some(Err(e)) => {
                log::warn!("{e}; guessing from markup");
                Self::guess(has_sidebar)
            }
            None => Self::guess(has_sidebar),
        }
    }

    fn guess(has_sidebar: bool) -> Surface {
        if has_sidebar {
            Surface::BackOffice
        } else {
            Surface::FrontOffice
        }
    }
}

impl FromStr for Surface {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "back-office" => Ok(Surface::BackOffice),
            "front-office" => Ok(Surface::FrontOffice),
            other => Err(Error::UnknownSurface(other.to_string())),
        }
    }
}

/// Outcome of one successful initializer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wired {
    Attached,
    /// The element with this id (or selector) is not on the page.
    Skipped(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Attached,
    Skipped(&'static str),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub steps: Vec<(&'static str, StepOutcome)>,
}

impl BootstrapReport {
    pub fn attached(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Attached))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, StepOutcome::Failed(_)))
    }

    fn count(&self, pred: impl Fn(&StepOutcome) -> bool) -> usize {
        self.steps.iter().filter(|(_, o)| pred(o)).count()
    }
}

pub type Step<'a, E> = (&'static str, Box<dyn FnOnce() -> Result<Wired, E> + 'a>);

/// Run every step in order, logging skips and failures without stopping.
pub fn run<'a, E: Display>(steps: Vec<Step<'a, E>>) -> BootstrapReport {
    let mut report = BootstrapReport::default();
    for (name, step) in steps {
        let outcome = match step() {
            Ok(Wired::Attached) => StepOutcome::Attached,
            Ok(Wired::Skipped(missing)) => {
                log::debug!("{name}: #{missing} not found, skipped");
                StepOutcome::Skipped(missing)
            }
            Err(e) => {
                log::warn!("{name}: {e}");
                StepOutcome::Failed(e.to_string())
            }
        };
        report.steps.push((name, outcome));
    }
    log::debug!(
        "bootstrap: {} attached, {} skipped, {} failed",
        report.attached(),
        report.skipped(),
        report.failed()
    );
    report
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn surface_detection() {
        assert_eq!(Surface::detect(Some("front-office"), true), Surface::FrontOffice);
        assert_eq!(Surface::detect(Some("back-office"), false), Surface::BackOffice);
        assert_eq!(Surface::detect(None, true), Surface::BackOffice);
        assert_eq!(Surface::detect(None, false), Surface::FrontOffice);
        assert_eq!(Surface::detect(Some("admin"), true), Surface::BackOffice);
        assert!("admin".parse::<Surface>().is_err());
    }

    #[test]
    fn missing_and_failing_steps_do_not_stop_the_sequence() {
        let ran = RefCell::new(Vec::new());
        let mut steps: Vec<Step<'_, String>> = Vec::new();
        steps.push((
            "sidebar",
            Box::new(|| {
                ran.borrow_mut().push("sidebar");
                Ok(Wired::Skipped("sidebar"))
            }),
        ));
        steps.push((
            "charts",
            Box::new(|| {
                ran.borrow_mut().push("charts");
                Err("getContext threw".to_string())
            }),
        ));
        steps.push((
            "tables",
            Box::new(|| {
                ran.borrow_mut().push("tables");
                Ok(Wired::Attached)
            }),
        ));

        let report = run(steps);
        assert_eq!(*ran.borrow(), vec!["sidebar", "charts", "tables"]);
        assert_eq!(report.attached(), 1);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.failed(), 1);
        assert_eq!(
            report.steps[1],
            ("charts", StepOutcome::Failed("getContext threw".into()))
        );
    }
}
