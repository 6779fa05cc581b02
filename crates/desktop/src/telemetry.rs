//! Collects lightweight desktop telemetry so installer flows can be traced while debugging.

use parking_lot::Mutex;

#[derive(Debug, Clone)]
pub enum Event {
    AppStarted,
    StatusChecked { installed: bool },
    FilePicked(&'static str),
    OperationStarted(&'static str),
    OperationSucceeded(&'static str),
    OperationFailed {
        operation: &'static str,
        error: String,
    },
}

pub struct Handle {
    #[cfg(feature = "telemetry")]
    events: Mutex<Vec<Event>>,
}

impl Handle {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "telemetry")]
            events: Mutex::new(Vec::new()),
        }
    }

    pub fn record(&self, event: Event) {
        #[cfg(feature = "telemetry")]
        {
            match &event {
                Event::AppStarted => tracing::debug!("desktop telemetry app started"),
                Event::StatusChecked { installed } => {
                    tracing::debug!(installed, "desktop telemetry status checked")
                }
                Event::FilePicked(kind) => {
                    tracing::debug!(kind = *kind, "desktop telemetry file picked")
                }
                Event::OperationStarted(operation) => {
                    tracing::debug!(operation = *operation, "desktop telemetry operation started")
                }
                Event::OperationSucceeded(operation) => tracing::debug!(
                    operation = *operation,
                    "desktop telemetry operation succeeded"
                ),
                Event::OperationFailed { operation, error } => tracing::debug!(
                    operation = *operation,
                    error = %error,
                    "desktop telemetry operation failed"
                ),
            }
            self.events.lock().push(event);
        }
        #[cfg(not(feature = "telemetry"))]
        {
            let _ = event;
        }
    }

    #[cfg(test)]
    pub fn is_enabled(&self) -> bool {
        cfg!(feature = "telemetry")
    }

    #[cfg(test)]
    pub(crate) fn events_len(&self) -> usize {
        #[cfg(feature = "telemetry")]
        {
            self.events.lock().len()
        }
        #[cfg(not(feature = "telemetry"))]
        {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_events_counts_when_enabled() {
        let handle = Handle::new();
        handle.record(Event::OperationFailed {
            operation: "install",
            error: "AppImage file not found at /tmp/missing.AppImage".into(),
        });
        if handle.is_enabled() {
            assert_eq!(handle.events_len(), 1);
        } else {
            assert_eq!(handle.events_len(), 0);
        }
    }
}
